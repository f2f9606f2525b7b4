//! Calls into the collection and authority contracts.
//!
//! These go through `invoke_contract` by function name so the house wasm
//! does not link the other contracts. A failing callee traps and rolls back
//! the whole invocation.

use soroban_sdk::{vec, Address, Env, IntoVal, String, Symbol, Val, Vec};

pub fn collection_authority(env: &Env, collection: &Address) -> Address {
    let args: Vec<Val> = Vec::new(env);
    env.invoke_contract(collection, &Symbol::new(env, "authority"), args)
}

pub fn is_whitelisted(env: &Env, authority: &Address, account: &Address) -> bool {
    let args: Vec<Val> = vec![env, account.into_val(env)];
    env.invoke_contract(authority, &Symbol::new(env, "is_whitelisted"), args)
}

pub fn minting_paused(env: &Env, collection: &Address) -> bool {
    let args: Vec<Val> = Vec::new(env);
    env.invoke_contract(collection, &Symbol::new(env, "minting_paused"), args)
}

pub fn next_token_id(env: &Env, collection: &Address) -> u64 {
    let args: Vec<Val> = Vec::new(env);
    env.invoke_contract(collection, &Symbol::new(env, "next_token_id"), args)
}

/// Mint `token_id` to `to` with this contract as the minter
pub fn safe_mint(env: &Env, collection: &Address, to: &Address, token_id: u64) {
    let minter = env.current_contract_address();
    let args: Vec<Val> = vec![
        env,
        minter.into_val(env),
        to.into_val(env),
        token_id.into_val(env),
    ];
    env.invoke_contract::<()>(collection, &Symbol::new(env, "safe_mint"), args);
}

/// Move a token out of this contract's custody
pub fn release_token(env: &Env, collection: &Address, to: &Address, token_id: u64) {
    let from = env.current_contract_address();
    let args: Vec<Val> = vec![
        env,
        from.into_val(env),
        to.into_val(env),
        token_id.into_val(env),
    ];
    env.invoke_contract::<()>(collection, &Symbol::new(env, "transfer"), args);
}

pub fn token_uri(env: &Env, collection: &Address, token_id: u64) -> String {
    let args: Vec<Val> = vec![env, token_id.into_val(env)];
    env.invoke_contract(collection, &Symbol::new(env, "token_uri"), args)
}
