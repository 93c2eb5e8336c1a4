#![cfg(test)]
#![cfg(not(tarpaulin_include))]
mod setup;
use setup::TestEnv;
use token_policy::Role;

#[test]
fn test_grant_and_revoke_admin() {
    let t = TestEnv::new();
    let admin2 = t.user();

    t.client.grant_admin(&t.admin, &admin2);
    assert!(t.client.has_role(&Role::Admin, &admin2));

    t.client.revoke_admin(&t.admin, &admin2);
    assert!(!t.client.has_role(&Role::Admin, &admin2));
}

#[test]
fn test_grant_and_revoke_minter() {
    let t = TestEnv::new();
    let minter = t.user();

    t.client.grant_minter(&t.admin, &minter);
    assert!(t.client.has_role(&Role::Minter, &minter));

    t.client.revoke_minter(&t.admin, &minter);
    assert!(!t.client.has_role(&Role::Minter, &minter));
}

#[test]
fn test_grant_and_revoke_burner() {
    let t = TestEnv::new();
    let burner = t.user();

    t.client.grant_burner(&t.admin, &burner);
    assert!(t.client.has_role(&Role::Burner, &burner));

    t.client.revoke_burner(&t.admin, &burner);
    assert!(!t.client.has_role(&Role::Burner, &burner));
}

#[test]
#[should_panic(expected = "Caller does not has a DEFAULT_ADMIN_ROLE")]
fn test_grant_admin_by_non_admin() {
    let t = TestEnv::new();
    let alice = t.user();
    let admin2 = t.user();

    t.client.grant_admin(&alice, &admin2);
}

#[test]
#[should_panic(expected = "Caller does not has a DEFAULT_ADMIN_ROLE")]
fn test_revoke_admin_by_non_admin() {
    let t = TestEnv::new();
    let alice = t.user();
    let admin2 = t.user();

    t.client.revoke_admin(&alice, &admin2);
}

#[test]
#[should_panic(expected = "Caller does not has a DEFAULT_ADMIN_ROLE")]
fn test_grant_minter_by_non_admin() {
    let t = TestEnv::new();
    let alice = t.user();
    let minter = t.user();

    t.client.grant_minter(&alice, &minter);
}

#[test]
#[should_panic(expected = "Caller does not has a DEFAULT_ADMIN_ROLE")]
fn test_grant_burner_by_non_admin() {
    let t = TestEnv::new();
    let alice = t.user();
    let burner = t.user();

    t.client.grant_burner(&alice, &burner);
}

#[test]
#[should_panic(expected = "Caller does not has a DEFAULT_ADMIN_ROLE")]
fn test_admin_replaced_then_locked_out() {
    let t = TestEnv::new();
    let admin2 = t.user();

    // The new admin removes the original one; the original loses every
    // administrative capability immediately.
    t.client.grant_admin(&t.admin, &admin2);
    t.client.revoke_admin(&admin2, &t.admin);

    t.client.set_publicly_mintable(&t.admin, &true);
}
