use soroban_sdk::{symbol_short, Address, Env};

use crate::types::TokenMetadata;

// ============================================================================
// CONSTANTS
// ============================================================================

/// TTL for critical storage (about one year of ledgers).
const STORAGE_TTL: u32 = 6_307_200;

/// Bump threshold (about 30 days of ledgers).
const STORAGE_THRESHOLD: u32 = 518_400;

// ============================================================================
// TTL BUMPS
// ============================================================================

/// Bumps the instance TTL (metadata, supply, counters, pause flag).
pub fn bump_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(STORAGE_THRESHOLD, STORAGE_TTL);
}

fn bump_balance(env: &Env, addr: &Address) {
    let key = (symbol_short!("balance"), addr.clone());
    env.storage()
        .persistent()
        .extend_ttl(&key, STORAGE_THRESHOLD, STORAGE_TTL);
}

// ============================================================================
// METADATA
// ============================================================================

pub fn has_metadata(env: &Env) -> bool {
    env.storage().instance().has(&symbol_short!("metadata"))
}

pub fn get_metadata(env: &Env) -> TokenMetadata {
    env.storage()
        .instance()
        .get(&symbol_short!("metadata"))
        .unwrap()
}

pub fn set_metadata(env: &Env, metadata: &TokenMetadata) {
    env.storage()
        .instance()
        .set(&symbol_short!("metadata"), metadata);
}

// ============================================================================
// PAUSED
// ============================================================================

pub fn is_paused(env: &Env) -> bool {
    env.storage()
        .instance()
        .get(&symbol_short!("paused"))
        .unwrap_or(false)
}

pub fn set_paused(env: &Env, paused: bool) {
    env.storage()
        .instance()
        .set(&symbol_short!("paused"), &paused);
}

// ============================================================================
// TOTAL SUPPLY
// ============================================================================

pub fn get_total_supply(env: &Env) -> i128 {
    env.storage()
        .instance()
        .get(&symbol_short!("supply"))
        .unwrap_or(0)
}

pub fn set_total_supply(env: &Env, amount: i128) {
    env.storage()
        .instance()
        .set(&symbol_short!("supply"), &amount);
}

// ============================================================================
// BALANCE
// ============================================================================

pub fn get_balance(env: &Env, addr: &Address) -> i128 {
    let key = (symbol_short!("balance"), addr.clone());
    env.storage().persistent().get(&key).unwrap_or(0)
}

pub fn set_balance(env: &Env, addr: &Address, amount: i128) {
    let key = (symbol_short!("balance"), addr.clone());
    env.storage().persistent().set(&key, &amount);
    bump_balance(env, addr);
}

// ============================================================================
// ALLOWANCE
// ============================================================================

pub fn get_allowance(env: &Env, owner: &Address, spender: &Address) -> i128 {
    let key = (symbol_short!("allow"), owner.clone(), spender.clone());
    env.storage().persistent().get(&key).unwrap_or(0)
}

pub fn set_allowance(env: &Env, owner: &Address, spender: &Address, amount: i128) {
    let key = (symbol_short!("allow"), owner.clone(), spender.clone());
    env.storage().persistent().set(&key, &amount);
    env.storage()
        .persistent()
        .extend_ttl(&key, STORAGE_THRESHOLD, STORAGE_TTL);
}

// ============================================================================
// RUNNING COUNTERS
// ============================================================================

pub fn get_total_mint_amount(env: &Env) -> i128 {
    env.storage()
        .instance()
        .get(&symbol_short!("mint_amt"))
        .unwrap_or(0)
}

pub fn set_total_mint_amount(env: &Env, amount: i128) {
    env.storage()
        .instance()
        .set(&symbol_short!("mint_amt"), &amount);
}

pub fn get_total_burn_amount(env: &Env) -> i128 {
    env.storage()
        .instance()
        .get(&symbol_short!("burn_amt"))
        .unwrap_or(0)
}

pub fn set_total_burn_amount(env: &Env, amount: i128) {
    env.storage()
        .instance()
        .set(&symbol_short!("burn_amt"), &amount);
}

pub fn get_total_transfered_amount(env: &Env) -> i128 {
    env.storage()
        .instance()
        .get(&symbol_short!("trans_amt"))
        .unwrap_or(0)
}

pub fn set_total_transfered_amount(env: &Env, amount: i128) {
    env.storage()
        .instance()
        .set(&symbol_short!("trans_amt"), &amount);
}
