use soroban_sdk::{symbol_short, Address, Env};

//
// NFT EVENTS
//

pub fn emit_mint(env: &Env, to: &Address, token_id: u64) {
    env.events()
        .publish((symbol_short!("mint"), to.clone()), token_id);
}

pub fn emit_transfer(env: &Env, from: &Address, to: &Address, token_id: u64) {
    env.events().publish(
        (symbol_short!("transfer"), from.clone(), to.clone()),
        token_id,
    );
}

pub fn emit_burn(env: &Env, owner: &Address, token_id: u64) {
    env.events()
        .publish((symbol_short!("burn"), owner.clone()), token_id);
}

pub fn emit_approval(env: &Env, owner: &Address, approved: &Address, token_id: u64) {
    env.events().publish(
        (symbol_short!("approve"), owner.clone(), approved.clone()),
        token_id,
    );
}

pub fn emit_uri_set(env: &Env, token_id: u64) {
    env.events().publish((symbol_short!("uri_set"),), token_id);
}
