use soroban_sdk::{symbol_short, Address, Env};

use crate::roles::Role;

//
// POLICY EVENTS
//

// Role granted to an account
pub fn emit_role_granted(env: &Env, role: Role, account: &Address) {
    env.events()
        .publish((symbol_short!("role_set"), account.clone()), role);
}

// Role revoked from an account
pub fn emit_role_revoked(env: &Env, role: Role, account: &Address) {
    env.events()
        .publish((symbol_short!("role_del"), account.clone()), role);
}

// Freeze / unfreeze
pub fn emit_freeze(env: &Env, account: &Address) {
    env.events()
        .publish((symbol_short!("freeze"), account.clone()), true);
}

pub fn emit_unfreeze(env: &Env, account: &Address) {
    env.events()
        .publish((symbol_short!("unfreeze"), account.clone()), false);
}

// Publicly-mintable flag changed
pub fn emit_mintable(env: &Env, value: bool) {
    env.events().publish((symbol_short!("mintable"),), value);
}

// Soulbound flag changed
pub fn emit_sbt(env: &Env, value: bool) {
    env.events().publish((symbol_short!("sbt_set"),), value);
}
