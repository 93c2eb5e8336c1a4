use soroban_sdk::{symbol_short, Address, Env, String, Symbol};

// ============================================================================
// CONSTANTS
// ============================================================================

const STORAGE_TTL: u32 = 6_307_200;
const STORAGE_THRESHOLD: u32 = 518_400;

const INITIALIZED: Symbol = symbol_short!("init");

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
// PER-CLASS BALANCES
// ============================================================================

fn balance_key(addr: &Address, class_id: u64) -> (Symbol, Address, u64) {
    (symbol_short!("balance"), addr.clone(), class_id)
}

pub fn get_balance(env: &Env, addr: &Address, class_id: u64) -> i128 {
    env.storage()
        .persistent()
        .get(&balance_key(addr, class_id))
        .unwrap_or(0)
}

pub fn set_balance(env: &Env, addr: &Address, class_id: u64, amount: i128) {
    let key = balance_key(addr, class_id);
    env.storage().persistent().set(&key, &amount);
    env.storage()
        .persistent()
        .extend_ttl(&key, STORAGE_THRESHOLD, STORAGE_TTL);
}

// ============================================================================
// PER-CLASS URI
// ============================================================================

fn uri_key(class_id: u64) -> (Symbol, u64) {
    (symbol_short!("uri"), class_id)
}

pub fn get_uri(env: &Env, class_id: u64) -> Option<String> {
    env.storage().persistent().get(&uri_key(class_id))
}

pub fn set_uri(env: &Env, class_id: u64, uri: &String) {
    let key = uri_key(class_id);
    env.storage().persistent().set(&key, uri);
    env.storage()
        .persistent()
        .extend_ttl(&key, STORAGE_THRESHOLD, STORAGE_TTL);
}

// ============================================================================
// OPERATOR APPROVALS
// ============================================================================

fn operator_key(owner: &Address, operator: &Address) -> (Symbol, Address, Address) {
    (symbol_short!("operator"), owner.clone(), operator.clone())
}

pub fn is_approved_for_all(env: &Env, owner: &Address, operator: &Address) -> bool {
    env.storage()
        .persistent()
        .get(&operator_key(owner, operator))
        .unwrap_or(false)
}

pub fn set_approval_for_all(env: &Env, owner: &Address, operator: &Address, approved: bool) {
    let key = operator_key(owner, operator);
    if approved {
        env.storage().persistent().set(&key, &true);
        env.storage()
            .persistent()
            .extend_ttl(&key, STORAGE_THRESHOLD, STORAGE_TTL);
    } else {
        env.storage().persistent().remove(&key);
    }
}
