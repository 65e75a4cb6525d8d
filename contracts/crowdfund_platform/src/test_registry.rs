extern crate std;

use soroban_sdk::{testutils::Address as _, Address, Env, String};

use crate::{CrowdfundPlatform, CrowdfundPlatformClient, Error, RequestStatus, UserStatus};

fn setup() -> (Env, CrowdfundPlatformClient<'static>, Address) {
    let env = Env::default();
    env.mock_all_auths();
    let contract_id = env.register(CrowdfundPlatform, ());
    let client = CrowdfundPlatformClient::new(&env, &contract_id);

    let admin = Address::generate(&env);
    let token_admin = Address::generate(&env);
    let token = env.register_stellar_asset_contract_v2(token_admin);
    client.init(&admin, &token.address());
    (env, client, admin)
}

fn request(env: &Env, client: &CrowdfundPlatformClient, user: &Address, text: &str) {
    client.request_benefactor_status(user, &String::from_str(env, text));
}

// ─────────────────────────────────────────────────────────
// Bootstrap
// ─────────────────────────────────────────────────────────

#[test]
fn init_can_only_run_once() {
    let (env, client, admin) = setup();
    let token = Address::generate(&env);
    assert_eq!(
        client.try_init(&admin, &token),
        Err(Ok(Error::AlreadyInitialized))
    );
}

#[test]
fn unknown_identities_default_to_active() {
    let (env, client, _admin) = setup();
    let stranger = Address::generate(&env);
    assert_eq!(client.status_of(&stranger), UserStatus::Active);
    assert_eq!(client.latest_request_of(&stranger), None);
}

// ─────────────────────────────────────────────────────────
// Benefactor requests
// ─────────────────────────────────────────────────────────

#[test]
fn request_creates_a_pending_record() {
    let (env, client, _admin) = setup();
    let alice = Address::generate(&env);

    request(&env, &client, &alice, "five years of community work");

    let latest = client.latest_request_of(&alice).unwrap();
    assert_eq!(latest.sender, alice);
    assert_eq!(latest.status, RequestStatus::Pending);
    assert_eq!(
        latest.comment,
        String::from_str(&env, "five years of community work")
    );
    assert_eq!(client.pending_request_count(), 1);
    // A request alone does not change registry status.
    assert_eq!(client.status_of(&alice), UserStatus::Active);
}

#[test]
fn second_request_while_pending_is_rejected() {
    let (env, client, _admin) = setup();
    let alice = Address::generate(&env);
    request(&env, &client, &alice, "first");

    assert_eq!(
        client.try_request_benefactor_status(&alice, &String::from_str(&env, "second")),
        Err(Ok(Error::RequestAlreadyPending))
    );
    assert_eq!(client.pending_request_count(), 1);
}

#[test]
fn resolved_requester_may_apply_again() {
    let (env, client, admin) = setup();
    let alice = Address::generate(&env);

    request(&env, &client, &alice, "first try");
    client.decline_latest_request(&admin, &String::from_str(&env, "too new"));
    assert_eq!(
        client.latest_request_of(&alice).unwrap().status,
        RequestStatus::Declined
    );

    // Declined: a fresh request is allowed and replaces the latest record.
    request(&env, &client, &alice, "second try");
    let latest = client.latest_request_of(&alice).unwrap();
    assert_eq!(latest.status, RequestStatus::Pending);
    assert_eq!(latest.comment, String::from_str(&env, "second try"));
    assert_eq!(latest.decline_reason, String::from_str(&env, ""));

    // Approved requesters may also re-apply; the spec places no guard here.
    client.promote_latest_request(&admin);
    request(&env, &client, &alice, "third try");
    assert_eq!(
        client.latest_request_of(&alice).unwrap().status,
        RequestStatus::Pending
    );
}

#[test]
fn promote_grants_benefactor_and_marks_record_approved() {
    let (env, client, admin) = setup();
    let alice = Address::generate(&env);
    request(&env, &client, &alice, "please");

    client.promote_latest_request(&admin);

    assert_eq!(client.status_of(&alice), UserStatus::Benefactor);
    assert_eq!(
        client.latest_request_of(&alice).unwrap().status,
        RequestStatus::Approved
    );
    assert_eq!(client.pending_request_count(), 0);
}

#[test]
fn decline_records_reason_without_length_bounds() {
    let (env, client, admin) = setup();
    let alice = Address::generate(&env);
    request(&env, &client, &alice, "please");

    // Unlike the fundraiser decline path, this reason is unvalidated:
    // both empty and very long reasons are stored verbatim.
    let long_reason = "z".repeat(300);
    client.decline_latest_request(&admin, &String::from_str(&env, &long_reason));

    let latest = client.latest_request_of(&alice).unwrap();
    assert_eq!(latest.status, RequestStatus::Declined);
    assert_eq!(latest.decline_reason, String::from_str(&env, &long_reason));
    assert_eq!(client.status_of(&alice), UserStatus::Active);

    request(&env, &client, &alice, "again");
    client.decline_latest_request(&admin, &String::from_str(&env, ""));
    assert_eq!(
        client.latest_request_of(&alice).unwrap().status,
        RequestStatus::Declined
    );
}

#[test]
fn queue_resolves_most_recent_request_first() {
    let (env, client, admin) = setup();
    let alice = Address::generate(&env);
    let bob = Address::generate(&env);
    let carol = Address::generate(&env);

    request(&env, &client, &alice, "first in");
    request(&env, &client, &bob, "second in");
    request(&env, &client, &carol, "third in");

    // Stack order: carol goes first, alice waits longest.
    client.decline_latest_request(&admin, &String::from_str(&env, "not yet"));
    assert_eq!(
        client.latest_request_of(&carol).unwrap().status,
        RequestStatus::Declined
    );
    assert_eq!(
        client.latest_request_of(&bob).unwrap().status,
        RequestStatus::Pending
    );

    client.promote_latest_request(&admin);
    assert_eq!(client.status_of(&bob), UserStatus::Benefactor);
    assert_eq!(
        client.latest_request_of(&alice).unwrap().status,
        RequestStatus::Pending
    );

    client.promote_latest_request(&admin);
    assert_eq!(client.status_of(&alice), UserStatus::Benefactor);
    assert_eq!(client.pending_request_count(), 0);
}

#[test]
fn late_request_jumps_ahead_of_earlier_ones() {
    let (env, client, admin) = setup();
    let alice = Address::generate(&env);
    let bob = Address::generate(&env);

    request(&env, &client, &alice, "waiting patiently");
    client.promote_latest_request(&admin);
    assert_eq!(client.status_of(&alice), UserStatus::Benefactor);

    // Alice resolved; bob requests, then a newcomer outruns him.
    request(&env, &client, &bob, "me next");
    let newcomer = Address::generate(&env);
    request(&env, &client, &newcomer, "just arrived");

    client.promote_latest_request(&admin);
    assert_eq!(client.status_of(&newcomer), UserStatus::Benefactor);
    assert_eq!(client.status_of(&bob), UserStatus::Active);
}

#[test]
fn empty_queue_is_rejected() {
    let (env, client, admin) = setup();
    assert_eq!(
        client.try_promote_latest_request(&admin),
        Err(Ok(Error::EmptyQueue))
    );
    assert_eq!(
        client.try_decline_latest_request(&admin, &String::from_str(&env, "why")),
        Err(Ok(Error::EmptyQueue))
    );
}

// ─────────────────────────────────────────────────────────
// Blocking
// ─────────────────────────────────────────────────────────

#[test]
fn block_and_unblock_toggle_status_idempotently() {
    let (env, client, admin) = setup();
    let user = Address::generate(&env);

    client.block_user(&admin, &user);
    assert_eq!(client.status_of(&user), UserStatus::Blocked);

    // Blocking an already-blocked user succeeds.
    client.block_user(&admin, &user);
    assert_eq!(client.status_of(&user), UserStatus::Blocked);

    client.unblock_user(&admin, &user);
    assert_eq!(client.status_of(&user), UserStatus::Active);

    client.unblock_user(&admin, &user);
    assert_eq!(client.status_of(&user), UserStatus::Active);
}

#[test]
fn block_overwrites_benefactor_and_unblock_restores_active() {
    let (env, client, admin) = setup();
    let user = Address::generate(&env);
    request(&env, &client, &user, "promote me");
    client.promote_latest_request(&admin);
    assert_eq!(client.status_of(&user), UserStatus::Benefactor);

    client.block_user(&admin, &user);
    assert_eq!(client.status_of(&user), UserStatus::Blocked);

    // Unblock lands on Active, not back on Benefactor.
    client.unblock_user(&admin, &user);
    assert_eq!(client.status_of(&user), UserStatus::Active);
}

#[test]
fn privileged_registry_calls_are_admin_only() {
    let (env, client, _admin) = setup();
    let outsider = Address::generate(&env);
    let target = Address::generate(&env);

    assert_eq!(
        client.try_block_user(&outsider, &target),
        Err(Ok(Error::NotAdmin))
    );
    assert_eq!(
        client.try_unblock_user(&outsider, &target),
        Err(Ok(Error::NotAdmin))
    );
    assert_eq!(
        client.try_promote_latest_request(&outsider),
        Err(Ok(Error::NotAdmin))
    );
    assert_eq!(
        client.try_decline_latest_request(&outsider, &String::from_str(&env, "no")),
        Err(Ok(Error::NotAdmin))
    );
}
