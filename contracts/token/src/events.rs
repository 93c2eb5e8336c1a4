use soroban_sdk::{symbol_short, Address, Env, String};

//
// TOKEN EVENTS
//

// SEP-41 transfer
pub fn emit_transfer(env: &Env, from: &Address, to: &Address, amount: i128) {
    env.events()
        .publish((symbol_short!("transfer"), from.clone(), to.clone()), amount);
}

// Transfer carrying an opaque memo. The memo has no on-chain semantics;
// it exists for off-chain bookkeeping only.
pub fn emit_transfer_memo(env: &Env, from: &Address, to: &Address, amount: i128, memo: &String) {
    env.events().publish(
        (symbol_short!("transfer"), from.clone(), to.clone()),
        (amount, memo.clone()),
    );
}

// SEP-41 mint
pub fn emit_mint(env: &Env, to: &Address, amount: i128) {
    env.events()
        .publish((symbol_short!("mint"), to.clone()), amount);
}

// SEP-41 burn
pub fn emit_burn(env: &Env, from: &Address, amount: i128) {
    env.events()
        .publish((symbol_short!("burn"), from.clone()), amount);
}

pub fn emit_approval(env: &Env, owner: &Address, spender: &Address, amount: i128) {
    env.events().publish(
        (symbol_short!("approve"), owner.clone(), spender.clone()),
        amount,
    );
}

pub fn emit_pause(env: &Env) {
    env.events().publish((symbol_short!("pause"),), true);
}

pub fn emit_unpause(env: &Env) {
    env.events().publish((symbol_short!("unpause"),), true);
}

#[cfg(test)]
mod tests {
    use super::*;
    use soroban_sdk::{contract, testutils::Address as _, testutils::Events as _, Env};

    #[contract]
    struct Host;

    #[test]
    fn test_ledger_events_publish() {
        let env = Env::default();
        let id = env.register_contract(None, Host);
        let a = Address::generate(&env);
        let b = Address::generate(&env);

        env.as_contract(&id, || {
            emit_mint(&env, &a, 1000);
            emit_transfer(&env, &a, &b, 400);
            emit_transfer_memo(&env, &a, &b, 100, &String::from_str(&env, "Memo"));
            emit_burn(&env, &b, 33);
            emit_approval(&env, &a, &b, 50);
            emit_pause(&env);
            emit_unpause(&env);
        });

        assert!(!env.events().all().is_empty());
    }
}
