use soroban_sdk::{contracttype, symbol_short, Address, Env, Symbol};

use crate::events;

// ============================================================================
// ROLE REGISTRY
// ============================================================================

/// TTL for policy storage (about one year of ledgers).
pub(crate) const STORAGE_TTL: u32 = 6_307_200;

/// Bump threshold (about 30 days of ledgers).
pub(crate) const STORAGE_THRESHOLD: u32 = 518_400;

/// Roles understood by the suite. `Pauser` is only wired up by the
/// fungible token; the other contracts simply never grant it.
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Role {
    Admin,
    Minter,
    Burner,
    Pauser,
}

fn role_key(role: Role, account: &Address) -> (Symbol, Role, Address) {
    (symbol_short!("role"), role, account.clone())
}

pub fn has_role(env: &Env, role: Role, account: &Address) -> bool {
    env.storage()
        .persistent()
        .get(&role_key(role, account))
        .unwrap_or(false)
}

fn set_role(env: &Env, role: Role, account: &Address, held: bool) {
    let key = role_key(role, account);
    if held {
        env.storage().persistent().set(&key, &true);
        env.storage()
            .persistent()
            .extend_ttl(&key, STORAGE_THRESHOLD, STORAGE_TTL);
    } else {
        env.storage().persistent().remove(&key);
    }
}

/// Grants `role` without a caller check. Initialization only.
pub fn seed(env: &Env, role: Role, account: &Address) {
    set_role(env, role, account, true);
}

/// Panics with the historical message when `caller` does not hold `role`.
/// The strings are load-bearing: existing callers match on them exactly.
pub fn require_role(env: &Env, caller: &Address, role: Role) {
    if !has_role(env, role, caller) {
        match role {
            Role::Admin => panic!("Caller does not has a DEFAULT_ADMIN_ROLE"),
            Role::Minter => panic!("Caller does not has a MINTER_ROLE"),
            Role::Burner => panic!("Caller does not has a BURNER_ROLE"),
            Role::Pauser => panic!("Caller does not has a PAUSER_ROLE"),
        }
    }
}

/// Admin-gated grant. Granting an already-held role is a no-op success.
///
/// There is no quorum and no lower bound on admin count: an admin may
/// revoke any admin, itself included. Revoking the last admin leaves the
/// instance permanently without administration.
pub fn grant(env: &Env, caller: &Address, role: Role, account: &Address) {
    caller.require_auth();
    require_role(env, caller, Role::Admin);

    set_role(env, role, account, true);
    events::emit_role_granted(env, role, account);
}

/// Admin-gated revoke. Revoking an unheld role is a no-op success.
pub fn revoke(env: &Env, caller: &Address, role: Role, account: &Address) {
    caller.require_auth();
    require_role(env, caller, Role::Admin);

    set_role(env, role, account, false);
    events::emit_role_revoked(env, role, account);
}

#[cfg(test)]
mod tests {
    use super::*;
    use soroban_sdk::{contract, testutils::Address as _, Env};

    #[contract]
    struct Host;

    struct Ctx {
        env: Env,
        id: Address,
    }

    impl Ctx {
        fn new() -> Self {
            let env = Env::default();
            env.mock_all_auths();
            let id = env.register_contract(None, Host);
            Ctx { env, id }
        }

        /// Runs `f` inside a fresh contract-invocation frame. Storage is only
        /// reachable from within a frame, and each `require_auth` needs its own
        /// root frame: the soroban test host rejects a second authorization for
        /// the same address within a single frame. Storage persists across
        /// frames for the same contract id, so sequential ops compose.
        fn act<T>(&self, f: impl FnOnce(&Env) -> T) -> T {
            self.env.as_contract(&self.id, || f(&self.env))
        }
    }

    #[test]
    fn test_seed_and_has_role() {
        let c = Ctx::new();
        let a = Address::generate(&c.env);
        assert!(!c.act(|env| has_role(env, Role::Admin, &a)));
        c.act(|env| seed(env, Role::Admin, &a));
        assert!(c.act(|env| has_role(env, Role::Admin, &a)));
        // Roles are independent per (role, account) pair.
        assert!(!c.act(|env| has_role(env, Role::Minter, &a)));
    }

    #[test]
    fn test_grant_then_revoke_restores_prior_state() {
        let c = Ctx::new();
        let admin = Address::generate(&c.env);
        let user = Address::generate(&c.env);
        c.act(|env| seed(env, Role::Admin, &admin));

        c.act(|env| grant(env, &admin, Role::Burner, &user));
        assert!(c.act(|env| has_role(env, Role::Burner, &user)));
        c.act(|env| revoke(env, &admin, Role::Burner, &user));
        assert!(!c.act(|env| has_role(env, Role::Burner, &user)));
    }

    #[test]
    #[should_panic(expected = "Caller does not has a DEFAULT_ADMIN_ROLE")]
    fn test_grant_requires_admin() {
        let c = Ctx::new();
        let outsider = Address::generate(&c.env);
        let user = Address::generate(&c.env);
        c.act(|env| grant(env, &outsider, Role::Minter, &user));
    }
}
