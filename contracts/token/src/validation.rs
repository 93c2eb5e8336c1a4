use soroban_sdk::{Address, Env};
use token_policy::compliance;

use crate::storage;
use crate::types::TokenError;

// ============================================================================
// VALIDATIONS
// ============================================================================

/// The pause switch gates every state-mutating entry point; reads stay
/// available while paused.
pub fn require_not_paused(env: &Env) -> Result<(), TokenError> {
    if storage::is_paused(env) {
        return Err(TokenError::EnforcedPause);
    }
    Ok(())
}

pub fn require_positive_amount(amount: i128) -> Result<(), TokenError> {
    if amount <= 0 {
        return Err(TokenError::InvalidAmount);
    }
    Ok(())
}

pub fn require_non_negative_amount(amount: i128) -> Result<(), TokenError> {
    if amount < 0 {
        return Err(TokenError::InvalidAmount);
    }
    Ok(())
}

/// The fungible paths signal frozen accounts with the typed error on
/// every call shape, unlike the NFT/SFT contracts.
pub fn require_not_frozen(env: &Env, addr: &Address) -> Result<(), TokenError> {
    if compliance::is_frozen(env, addr) {
        return Err(TokenError::AccountHasBeenFrozen);
    }
    Ok(())
}

pub fn require_sufficient_balance(
    env: &Env,
    addr: &Address,
    required: i128,
) -> Result<(), TokenError> {
    let balance = storage::get_balance(env, addr);
    if balance < required {
        return Err(TokenError::InsufficientBalance);
    }
    Ok(())
}

pub fn require_sufficient_allowance(
    env: &Env,
    owner: &Address,
    spender: &Address,
    required: i128,
) -> Result<(), TokenError> {
    let allowance = storage::get_allowance(env, owner, spender);
    if allowance < required {
        return Err(TokenError::InsufficientAllowance);
    }
    Ok(())
}
