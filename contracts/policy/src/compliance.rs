use soroban_sdk::{symbol_short, Address, Env, Symbol};

use crate::events;
use crate::roles::{self, Role, STORAGE_THRESHOLD, STORAGE_TTL};

// ============================================================================
// COMPLIANCE GATE - frozen accounts and global flags
// ============================================================================

const MINTABLE: Symbol = symbol_short!("mintable");
const SBT: Symbol = symbol_short!("sbt");

fn frozen_key(account: &Address) -> (Symbol, Address) {
    (symbol_short!("frozen"), account.clone())
}

// ----------------------------------------------------------------------------
// Frozen accounts
// ----------------------------------------------------------------------------

/// Unrestricted read; every account defaults to unfrozen.
pub fn is_frozen(env: &Env, account: &Address) -> bool {
    env.storage()
        .persistent()
        .get(&frozen_key(account))
        .unwrap_or(false)
}

/// Admin-gated. Freezing an already-frozen account is a no-op success.
pub fn freeze(env: &Env, caller: &Address, account: &Address) {
    caller.require_auth();
    roles::require_role(env, caller, Role::Admin);

    let key = frozen_key(account);
    env.storage().persistent().set(&key, &true);
    env.storage()
        .persistent()
        .extend_ttl(&key, STORAGE_THRESHOLD, STORAGE_TTL);
    events::emit_freeze(env, account);
}

/// Admin-gated. Unfreezing restores the account to its default state, as
/// if it had never been frozen.
pub fn unfreeze(env: &Env, caller: &Address, account: &Address) {
    caller.require_auth();
    roles::require_role(env, caller, Role::Admin);

    env.storage().persistent().remove(&frozen_key(account));
    events::emit_unfreeze(env, account);
}

// ----------------------------------------------------------------------------
// Publicly-mintable flag
// ----------------------------------------------------------------------------

pub fn is_publicly_mintable(env: &Env) -> bool {
    env.storage().instance().get(&MINTABLE).unwrap_or(false)
}

/// Admin-gated. Effective immediately for the next call; no grace period.
pub fn set_publicly_mintable(env: &Env, caller: &Address, value: bool) {
    caller.require_auth();
    roles::require_role(env, caller, Role::Admin);

    env.storage().instance().set(&MINTABLE, &value);
    events::emit_mintable(env, value);
}

/// Mint admission: the minter role always wins, otherwise the public
/// flag decides. Frozen status is deliberately not consulted here;
/// minting into a frozen account succeeds.
pub fn can_mint(env: &Env, caller: &Address) -> bool {
    roles::has_role(env, Role::Minter, caller) || is_publicly_mintable(env)
}

// ----------------------------------------------------------------------------
// Soulbound flag
// ----------------------------------------------------------------------------

pub fn is_sbt(env: &Env) -> bool {
    env.storage().instance().get(&SBT).unwrap_or(false)
}

/// Admin-gated, settable in both directions. While true, every transfer
/// and burn is blocked regardless of role, ownership or frozen status.
pub fn set_to_sbt(env: &Env, caller: &Address, value: bool) {
    caller.require_auth();
    roles::require_role(env, caller, Role::Admin);

    env.storage().instance().set(&SBT, &value);
    events::emit_sbt(env, value);
}
