#![cfg(test)]
#![cfg(not(tarpaulin_include))]
use setup::TestEnv;
use compliance_token::TokenError;

// ============================================================================
// MINT
// ============================================================================

#[test]
fn test_mint_by_minter() {
    let t = TestEnv::new();
    let minter = t.user();

    t.client.grant_minter(&t.admin, &minter);
    t.client.mint(&minter, &1_500_000);

    assert_eq!(t.client.balance_of(&minter), 1_500_000);
    assert_eq!(t.client.total_supply(), 1_500_000);
}

#[test]
fn test_mint_to_by_minter() {
    let t = TestEnv::new();
    let minter = t.user();
    let alice = t.user();

    t.client.grant_minter(&t.admin, &minter);
    t.client.mint_to(&minter, &alice, &1_200_000);

    assert_eq!(t.client.balance_of(&alice), 1_200_000);
}

#[test]
#[should_panic(expected = "Caller does not has a MINTER_ROLE")]
fn test_mint_by_non_minter() {
    let t = TestEnv::new();
    let minter = t.user();

    t.client.mint(&minter, &1_000_000);
}

#[test]
#[should_panic(expected = "Caller does not has a MINTER_ROLE")]
fn test_mint_to_by_non_minter() {
    let t = TestEnv::new();
    let minter = t.user();
    let alice = t.user();

    t.client.mint_to(&minter, &alice, &1_000_000);
}

#[test]
fn test_mint_by_public_when_publicly_mintable() {
    let t = TestEnv::new();
    let alice = t.user();

    t.client.set_publicly_mintable(&t.admin, &true);
    t.client.mint(&alice, &500);
    assert_eq!(t.client.balance_of(&alice), 500);
}

#[test]
#[should_panic(expected = "Caller does not has a MINTER_ROLE")]
fn test_mint_by_public_after_flag_reset() {
    let t = TestEnv::new();
    let alice = t.user();

    t.client.set_publicly_mintable(&t.admin, &true);
    t.client.mint(&alice, &500);

    // Disabling the flag cuts public minting off immediately.
    t.client.set_publicly_mintable(&t.admin, &false);
    t.client.mint(&alice, &500);
}

#[test]
fn test_mint_into_frozen_account_succeeds() {
    let t = TestEnv::new();
    let alice = t.user();

    t.client.freeze(&t.admin, &alice);
    t.client.mint_to(&t.admin, &alice, &1_000);

    assert_eq!(t.client.balance_of(&alice), 1_000);
}

#[test]
fn test_total_mint_amount_accumulates() {
    let t = TestEnv::new();
    let minter = t.user();

    t.client.grant_minter(&t.admin, &minter);
    t.client.mint(&minter, &1_300_000);
    t.client.mint(&minter, &1_100_000);

    assert_eq!(t.client.total_mint_amount(), 2_400_000);
}

// ============================================================================
// BURN
// ============================================================================

#[test]
fn test_burn_by_owner() {
    let t = TestEnv::new();
    let alice = t.user();

    t.client.mint_to(&t.admin, &alice, &1_000_000);
    t.client.burn(&alice, &400_000);

    assert_eq!(t.client.balance_of(&alice), 600_000);
}

#[test]
fn test_burn_from_self() {
    let t = TestEnv::new();
    let alice = t.user();

    t.client.mint_to(&t.admin, &alice, &1_000_000);
    // Self-call is the owner path: no burner role, no allowance.
    t.client.burn_from(&alice, &alice, &250_000);

    assert_eq!(t.client.balance_of(&alice), 750_000);
}

#[test]
fn test_burn_from_by_burner() {
    let t = TestEnv::new();
    let burner = t.user();
    let alice = t.user();

    t.client.grant_burner(&t.admin, &burner);
    t.client.mint_to(&t.admin, &alice, &1_000_000);

    t.client.burn_from(&burner, &alice, &300_000);
    assert_eq!(t.client.balance_of(&alice), 700_000);
}

#[test]
#[should_panic(expected = "Caller does not has a BURNER_ROLE")]
fn test_burn_from_by_non_burner() {
    let t = TestEnv::new();
    let bob = t.user();
    let alice = t.user();

    t.client.mint_to(&t.admin, &alice, &1_000_000);
    t.client.burn_from(&bob, &alice, &100);
}

#[test]
fn test_burn_from_frozen_account_fails() {
    let t = TestEnv::new();
    let burner = t.user();
    let alice = t.user();

    t.client.grant_burner(&t.admin, &burner);
    t.client.mint_to(&t.admin, &alice, &1_000_000);
    t.client.freeze(&t.admin, &alice);

    let result = t.client.try_burn_from(&burner, &alice, &100);
    assert_eq!(
        result.unwrap_err().unwrap(),
        TokenError::AccountHasBeenFrozen
    );
}

#[test]
fn test_burn_from_after_unfreeze_succeeds() {
    let t = TestEnv::new();
    let burner = t.user();
    let alice = t.user();

    t.client.grant_burner(&t.admin, &burner);
    t.client.mint_to(&t.admin, &alice, &1_000_000);

    t.client.freeze(&t.admin, &alice);
    t.client.unfreeze(&t.admin, &alice);

    t.client.burn_from(&burner, &alice, &100_000);
    assert_eq!(t.client.balance_of(&alice), 900_000);
}

#[test]
fn test_burn_by_frozen_owner_fails() {
    let t = TestEnv::new();
    let alice = t.user();

    t.client.mint_to(&t.admin, &alice, &1_000_000);
    t.client.freeze(&t.admin, &alice);

    let result = t.client.try_burn(&alice, &100);
    assert_eq!(
        result.unwrap_err().unwrap(),
        TokenError::AccountHasBeenFrozen
    );
}

#[test]
fn test_burn_exceeding_balance_fails() {
    let t = TestEnv::new();
    let alice = t.user();

    t.client.mint_to(&t.admin, &alice, &500_000);

    let result = t.client.try_burn(&alice, &1_000_000);
    assert_eq!(result.unwrap_err().unwrap(), TokenError::InsufficientBalance);

    let result = t.client.try_burn_from(&alice, &alice, &1_000_000);
    assert_eq!(result.unwrap_err().unwrap(), TokenError::InsufficientBalance);
}

#[test]
fn test_burn_from_by_burner_exceeding_balance_fails() {
    let t = TestEnv::new();
    let burner = t.user();
    let alice = t.user();

    t.client.grant_burner(&t.admin, &burner);
    t.client.mint_to(&t.admin, &alice, &500_000);

    let result = t.client.try_burn_from(&burner, &alice, &1_000_000);
    assert_eq!(result.unwrap_err().unwrap(), TokenError::InsufficientBalance);
}

#[test]
fn test_total_burn_amount_accumulates() {
    let t = TestEnv::new();
    let alice = t.user();
    let bob = t.user();

    t.client.mint_to(&t.admin, &alice, &1_000_000);
    t.client.mint_to(&t.admin, &bob, &1_000_000);

    t.client.burn(&alice, &300_000);
    t.client.burn(&bob, &200_000);

    assert_eq!(t.client.total_burn_amount(), 500_000);
}
