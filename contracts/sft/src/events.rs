use soroban_sdk::{symbol_short, Address, Env, Vec};

//
// SFT EVENTS
//

pub fn emit_mint(env: &Env, to: &Address, class_id: u64, amount: i128) {
    env.events()
        .publish((symbol_short!("mint"), to.clone()), (class_id, amount));
}

pub fn emit_mint_batch(env: &Env, to: &Address, class_ids: &Vec<u64>, amounts: &Vec<i128>) {
    env.events().publish(
        (symbol_short!("mint_b"), to.clone()),
        (class_ids.clone(), amounts.clone()),
    );
}

pub fn emit_transfer(env: &Env, from: &Address, to: &Address, class_id: u64, amount: i128) {
    env.events().publish(
        (symbol_short!("transfer"), from.clone(), to.clone()),
        (class_id, amount),
    );
}

pub fn emit_transfer_batch(
    env: &Env,
    from: &Address,
    to: &Address,
    class_ids: &Vec<u64>,
    amounts: &Vec<i128>,
) {
    env.events().publish(
        (symbol_short!("trans_b"), from.clone(), to.clone()),
        (class_ids.clone(), amounts.clone()),
    );
}

pub fn emit_burn(env: &Env, owner: &Address, class_id: u64, amount: i128) {
    env.events()
        .publish((symbol_short!("burn"), owner.clone()), (class_id, amount));
}

pub fn emit_burn_batch(env: &Env, owner: &Address, class_ids: &Vec<u64>, amounts: &Vec<i128>) {
    env.events().publish(
        (symbol_short!("burn_b"), owner.clone()),
        (class_ids.clone(), amounts.clone()),
    );
}

pub fn emit_approval_for_all(env: &Env, owner: &Address, operator: &Address, approved: bool) {
    env.events().publish(
        (symbol_short!("appr_all"), owner.clone(), operator.clone()),
        approved,
    );
}

pub fn emit_uri_set(env: &Env, class_id: u64) {
    env.events().publish((symbol_short!("uri_set"),), class_id);
}
