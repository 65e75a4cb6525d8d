extern crate std;

use soroban_sdk::{
    symbol_short,
    testutils::{Address as _, Events, Ledger},
    token, vec, Address, Env, IntoVal, String, TryIntoVal,
};

use crate::events::{
    Block, CommentCreated, CreateBenefactorRequest, DeclineBenefactor, DonationReceived,
    FundraiserCreated, FundsWithdrawn, GiveBenefactor, Unblock, UpvoteToggled,
};
use crate::{CrowdfundPlatform, CrowdfundPlatformClient};

fn setup() -> (Env, CrowdfundPlatformClient<'static>, Address, Address) {
    let env = Env::default();
    env.mock_all_auths();
    let contract_id = env.register(CrowdfundPlatform, ());
    let client = CrowdfundPlatformClient::new(&env, &contract_id);

    let admin = Address::generate(&env);
    let token_admin = Address::generate(&env);
    let token = env.register_stellar_asset_contract_v2(token_admin);
    client.init(&admin, &token.address());
    (env, client, admin, token.address())
}

fn mint(env: &Env, token: &Address, to: &Address, amount: i128) {
    token::StellarAssetClient::new(env, token).mint(to, &amount);
}

fn create_campaign(env: &Env, client: &CrowdfundPlatformClient, goal: i128) -> (u64, Address) {
    let creator = Address::generate(env);
    let beneficiary = Address::generate(env);
    let id = client.create_fundraiser(
        &creator,
        &beneficiary,
        &goal,
        &30,
        &String::from_str(env, "Library books"),
        &String::from_str(env, "Restock the school library"),
        &String::from_str(env, "ipfs://books"),
    );
    (id, beneficiary)
}

#[test]
fn fundraiser_created_event() {
    let (env, client, _admin, _token) = setup();
    let (id, beneficiary) = create_campaign(&env, &client, 5_000);

    let all_events = env.events().all();
    let last_event = all_events.last().expect("no events found");

    assert_eq!(last_event.0, client.address);
    let expected_topics = vec![
        &env,
        symbol_short!("created").into_val(&env),
        id.into_val(&env),
    ];
    assert_eq!(last_event.1, expected_topics);

    let event_data: FundraiserCreated = last_event.2.try_into_val(&env).unwrap();
    assert_eq!(
        event_data,
        FundraiserCreated {
            fundraiser_id: id,
            beneficiary,
            goal: 5_000,
            deadline: env.ledger().timestamp() + 30 * 86_400,
        }
    );
}

#[test]
fn donation_received_event() {
    let (env, client, _admin, token) = setup();
    let (id, _) = create_campaign(&env, &client, 5_000);
    let donor = Address::generate(&env);
    mint(&env, &token, &donor, 1_000);

    client.donate(&id, &donor, &750, &String::from_str(&env, "keep going"));

    let all_events = env.events().all();
    let last_event = all_events.last().expect("no events found");

    assert_eq!(last_event.0, client.address);
    let expected_topics = vec![
        &env,
        symbol_short!("donated").into_val(&env),
        id.into_val(&env),
    ];
    assert_eq!(last_event.1, expected_topics);

    let event_data: DonationReceived = last_event.2.try_into_val(&env).unwrap();
    assert_eq!(
        event_data,
        DonationReceived {
            donor: Some(donor),
            amount: 750,
            comment: String::from_str(&env, "keep going"),
        }
    );
}

#[test]
fn donation_received_event_is_anonymized_for_blocked_donor() {
    let (env, client, admin, token) = setup();
    let (id, _) = create_campaign(&env, &client, 5_000);
    let donor = Address::generate(&env);
    mint(&env, &token, &donor, 10);
    client.block_user(&admin, &donor);

    client.donate(&id, &donor, &1, &String::from_str(&env, "hi"));

    let all_events = env.events().all();
    let last_event = all_events.last().expect("no events found");

    let event_data: DonationReceived = last_event.2.try_into_val(&env).unwrap();
    assert_eq!(
        event_data,
        DonationReceived {
            donor: None,
            amount: 1,
            comment: String::from_str(&env, ""),
        }
    );
}

#[test]
fn comment_created_event() {
    let (env, client, _admin, _token) = setup();
    let (id, _) = create_campaign(&env, &client, 5_000);
    let author = Address::generate(&env);

    client.comment(&id, &author, &String::from_str(&env, "great idea"));

    let all_events = env.events().all();
    let last_event = all_events.last().expect("no events found");

    let expected_topics = vec![
        &env,
        symbol_short!("commented").into_val(&env),
        id.into_val(&env),
    ];
    assert_eq!(last_event.1, expected_topics);

    let event_data: CommentCreated = last_event.2.try_into_val(&env).unwrap();
    assert_eq!(
        event_data,
        CommentCreated {
            creator: author,
            comment: String::from_str(&env, "great idea"),
        }
    );
}

#[test]
fn funds_withdrawn_event_carries_amount_and_time() {
    let (env, client, _admin, token) = setup();
    let (id, beneficiary) = create_campaign(&env, &client, 100);
    let donor = Address::generate(&env);
    mint(&env, &token, &donor, 100);
    client.donate(&id, &donor, &100, &String::from_str(&env, ""));

    env.ledger().with_mut(|li| li.timestamp += 86_400);
    client.withdraw_funds(&id, &beneficiary);

    let all_events = env.events().all();
    let last_event = all_events.last().expect("no events found");

    let expected_topics = vec![
        &env,
        symbol_short!("withdrawn").into_val(&env),
        id.into_val(&env),
    ];
    assert_eq!(last_event.1, expected_topics);

    let event_data: FundsWithdrawn = last_event.2.try_into_val(&env).unwrap();
    assert_eq!(
        event_data,
        FundsWithdrawn {
            amount: 100,
            time: env.ledger().timestamp(),
        }
    );
}

#[test]
fn upvote_toggled_event_reports_the_new_value() {
    let (env, client, _admin, _token) = setup();
    let (id, _) = create_campaign(&env, &client, 100);
    let fan = Address::generate(&env);

    client.toggle_upvote(&id, &fan);
    let all_events = env.events().all();
    let event_data: UpvoteToggled = all_events
        .last()
        .expect("no events found")
        .2
        .try_into_val(&env)
        .unwrap();
    assert_eq!(
        event_data,
        UpvoteToggled {
            user: fan.clone(),
            value: true,
        }
    );

    client.toggle_upvote(&id, &fan);
    let all_events = env.events().all();
    let event_data: UpvoteToggled = all_events
        .last()
        .expect("no events found")
        .2
        .try_into_val(&env)
        .unwrap();
    assert_eq!(
        event_data,
        UpvoteToggled {
            user: fan,
            value: false,
        }
    );
}

#[test]
fn block_and_unblock_events() {
    let (env, client, admin, _token) = setup();
    let user = Address::generate(&env);

    client.block_user(&admin, &user);
    let all_events = env.events().all();
    let last_event = all_events.last().expect("no events found");
    let expected_topics = vec![&env, symbol_short!("blocked").into_val(&env)];
    assert_eq!(last_event.1, expected_topics);
    let event_data: Block = last_event.2.try_into_val(&env).unwrap();
    assert_eq!(
        event_data,
        Block {
            user: user.clone(),
            time: env.ledger().timestamp(),
        }
    );

    client.unblock_user(&admin, &user);
    let all_events = env.events().all();
    let last_event = all_events.last().expect("no events found");
    let expected_topics = vec![&env, symbol_short!("unblocked").into_val(&env)];
    assert_eq!(last_event.1, expected_topics);
    let event_data: Unblock = last_event.2.try_into_val(&env).unwrap();
    assert_eq!(
        event_data,
        Unblock {
            user,
            time: env.ledger().timestamp(),
        }
    );
}

#[test]
fn benefactor_request_lifecycle_events() {
    let (env, client, admin, _token) = setup();
    let alice = Address::generate(&env);

    client.request_benefactor_status(&alice, &String::from_str(&env, "pick me"));
    let all_events = env.events().all();
    let last_event = all_events.last().expect("no events found");
    let expected_topics = vec![&env, symbol_short!("requested").into_val(&env)];
    assert_eq!(last_event.1, expected_topics);
    let event_data: CreateBenefactorRequest = last_event.2.try_into_val(&env).unwrap();
    assert_eq!(
        event_data,
        CreateBenefactorRequest {
            user: alice.clone(),
            comment: String::from_str(&env, "pick me"),
        }
    );

    client.promote_latest_request(&admin);
    let all_events = env.events().all();
    let last_event = all_events.last().expect("no events found");
    let expected_topics = vec![&env, symbol_short!("promoted").into_val(&env)];
    assert_eq!(last_event.1, expected_topics);
    let event_data: GiveBenefactor = last_event.2.try_into_val(&env).unwrap();
    assert_eq!(
        event_data,
        GiveBenefactor {
            user: alice,
            time: env.ledger().timestamp(),
        }
    );
}

#[test]
fn decline_benefactor_event() {
    let (env, client, admin, _token) = setup();
    let bob = Address::generate(&env);
    client.request_benefactor_status(&bob, &String::from_str(&env, "me too"));

    client.decline_latest_request(&admin, &String::from_str(&env, "not this round"));

    let all_events = env.events().all();
    let last_event = all_events.last().expect("no events found");
    let expected_topics = vec![&env, symbol_short!("declined").into_val(&env)];
    assert_eq!(last_event.1, expected_topics);
    let event_data: DeclineBenefactor = last_event.2.try_into_val(&env).unwrap();
    assert_eq!(
        event_data,
        DeclineBenefactor {
            user: bob,
            time: env.ledger().timestamp(),
        }
    );
}
