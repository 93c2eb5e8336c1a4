use soroban_sdk::{symbol_short, Address, Env, String, Symbol};

// ============================================================================
// CONSTANTS
// ============================================================================

const STORAGE_TTL: u32 = 6_307_200;
const STORAGE_THRESHOLD: u32 = 518_400;

const INITIALIZED: Symbol = symbol_short!("init");
const SUPPLY: Symbol = symbol_short!("supply");
const NEXT_ID: Symbol = symbol_short!("next_id");

pub fn bump_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(STORAGE_THRESHOLD, STORAGE_TTL);
}

// ============================================================================
// INITIALIZATION FLAG
// ============================================================================

pub fn is_initialized(env: &Env) -> bool {
    env.storage().instance().has(&INITIALIZED)
}

pub fn set_initialized(env: &Env) {
    env.storage().instance().set(&INITIALIZED, &true);
}

// ============================================================================
// TOKEN IDS
// ============================================================================

/// Returns the next free token id and advances the counter. Ids are
/// strictly increasing from zero and never reused, even after burns.
pub fn take_next_id(env: &Env) -> u64 {
    let id: u64 = env.storage().instance().get(&NEXT_ID).unwrap_or(0);
    env.storage().instance().set(&NEXT_ID, &(id + 1));
    id
}

// ============================================================================
// OWNERSHIP
// ============================================================================

fn owner_key(token_id: u64) -> (Symbol, u64) {
    (symbol_short!("owner"), token_id)
}

pub fn get_owner(env: &Env, token_id: u64) -> Option<Address> {
    env.storage().persistent().get(&owner_key(token_id))
}

pub fn set_owner(env: &Env, token_id: u64, owner: &Address) {
    let key = owner_key(token_id);
    env.storage().persistent().set(&key, owner);
    env.storage()
        .persistent()
        .extend_ttl(&key, STORAGE_THRESHOLD, STORAGE_TTL);
}

// ============================================================================
// METADATA URI
// ============================================================================

fn uri_key(token_id: u64) -> (Symbol, u64) {
    (symbol_short!("uri"), token_id)
}

pub fn get_uri(env: &Env, token_id: u64) -> Option<String> {
    env.storage().persistent().get(&uri_key(token_id))
}

pub fn set_uri(env: &Env, token_id: u64, uri: &String) {
    let key = uri_key(token_id);
    env.storage().persistent().set(&key, uri);
    env.storage()
        .persistent()
        .extend_ttl(&key, STORAGE_THRESHOLD, STORAGE_TTL);
}

// ============================================================================
// PER-TOKEN APPROVAL
// ============================================================================

fn approval_key(token_id: u64) -> (Symbol, u64) {
    (symbol_short!("approved"), token_id)
}

pub fn get_approved(env: &Env, token_id: u64) -> Option<Address> {
    env.storage().persistent().get(&approval_key(token_id))
}

pub fn set_approved(env: &Env, token_id: u64, approved: &Address) {
    env.storage()
        .persistent()
        .set(&approval_key(token_id), approved);
}

pub fn clear_approved(env: &Env, token_id: u64) {
    env.storage().persistent().remove(&approval_key(token_id));
}

// ============================================================================
// SUPPLY
// ============================================================================

pub fn get_supply(env: &Env) -> u32 {
    env.storage().instance().get(&SUPPLY).unwrap_or(0)
}

pub fn set_supply(env: &Env, supply: u32) {
    env.storage().instance().set(&SUPPLY, &supply);
}

/// Deletes every record of a token. Used by burn.
pub fn remove_token(env: &Env, token_id: u64) {
    env.storage().persistent().remove(&owner_key(token_id));
    env.storage().persistent().remove(&uri_key(token_id));
    env.storage().persistent().remove(&approval_key(token_id));
}
