use soroban_sdk::{Address, Env, String};

use crate::types::{CollectionConfig, StorageKey};

const DAY_IN_LEDGERS: u32 = 17280;
pub(crate) const INSTANCE_TTL_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
const INSTANCE_TTL_THRESHOLD: u32 = INSTANCE_TTL_AMOUNT - DAY_IN_LEDGERS;
const PERSISTENT_TTL_AMOUNT: u32 = 90 * DAY_IN_LEDGERS;
const PERSISTENT_TTL_THRESHOLD: u32 = PERSISTENT_TTL_AMOUNT - DAY_IN_LEDGERS;

pub fn extend_instance_ttl(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_TTL_THRESHOLD, INSTANCE_TTL_AMOUNT);
}

fn extend_persistent_ttl(env: &Env, key: &StorageKey) {
    env.storage()
        .persistent()
        .extend_ttl(key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_AMOUNT);
}

// ========== Config ==========

pub fn is_initialized(env: &Env) -> bool {
    env.storage().instance().has(&StorageKey::Config)
}

pub fn get_config(env: &Env) -> Option<CollectionConfig> {
    env.storage().instance().get(&StorageKey::Config)
}

pub fn set_config(env: &Env, config: &CollectionConfig) {
    env.storage().instance().set(&StorageKey::Config, config);
    extend_instance_ttl(env);
}

pub fn is_minting_paused(env: &Env) -> bool {
    env.storage()
        .instance()
        .get(&StorageKey::MintingPaused)
        .unwrap_or(false)
}

pub fn set_minting_paused(env: &Env, paused: bool) {
    env.storage()
        .instance()
        .set(&StorageKey::MintingPaused, &paused);
    extend_instance_ttl(env);
}

pub fn get_base_uri(env: &Env) -> Option<String> {
    env.storage().instance().get(&StorageKey::BaseUri)
}

pub fn set_base_uri(env: &Env, uri: &String) {
    env.storage().instance().set(&StorageKey::BaseUri, uri);
    extend_instance_ttl(env);
}

// ========== Supply ==========

pub fn get_total_supply(env: &Env) -> u64 {
    env.storage()
        .instance()
        .get(&StorageKey::TotalSupply)
        .unwrap_or(0)
}

pub fn increment_total_supply(env: &Env) -> u64 {
    let supply = get_total_supply(env) + 1;
    env.storage()
        .instance()
        .set(&StorageKey::TotalSupply, &supply);
    supply
}

/// Lowest id that is neither live nor burned. Starts at 1.
pub fn get_next_token_id(env: &Env) -> u64 {
    env.storage()
        .instance()
        .get(&StorageKey::NextTokenId)
        .unwrap_or(1)
}

/// Move the cursor past `minted` and any ids taken ahead of it.
/// Ids minted above the cursor leave it where it is.
pub fn advance_next_token_id(env: &Env, minted: u64) {
    let mut next = get_next_token_id(env);
    if minted != next {
        return;
    }
    while is_taken(env, next) {
        next += 1;
    }
    env.storage()
        .instance()
        .set(&StorageKey::NextTokenId, &next);
}

// ========== Tokens ==========

pub fn get_owner(env: &Env, token_id: u64) -> Option<Address> {
    let key = StorageKey::Owner(token_id);
    let owner = env.storage().persistent().get::<_, Address>(&key);
    if owner.is_some() {
        extend_persistent_ttl(env, &key);
    }
    owner
}

pub fn set_owner(env: &Env, token_id: u64, owner: &Address) {
    let key = StorageKey::Owner(token_id);
    env.storage().persistent().set(&key, owner);
    extend_persistent_ttl(env, &key);
}

pub fn remove_owner(env: &Env, token_id: u64) {
    env.storage()
        .persistent()
        .remove(&StorageKey::Owner(token_id));
}

pub fn is_burned(env: &Env, token_id: u64) -> bool {
    env.storage()
        .persistent()
        .has(&StorageKey::Burned(token_id))
}

pub fn set_burned(env: &Env, token_id: u64) {
    let key = StorageKey::Burned(token_id);
    env.storage().persistent().set(&key, &true);
    extend_persistent_ttl(env, &key);
}

pub fn is_taken(env: &Env, token_id: u64) -> bool {
    get_owner(env, token_id).is_some() || is_burned(env, token_id)
}

// ========== Balances ==========

pub fn get_balance(env: &Env, account: &Address) -> u64 {
    env.storage()
        .persistent()
        .get(&StorageKey::Balance(account.clone()))
        .unwrap_or(0)
}

fn set_balance(env: &Env, account: &Address, balance: u64) {
    let key = StorageKey::Balance(account.clone());
    if balance == 0 {
        env.storage().persistent().remove(&key);
    } else {
        env.storage().persistent().set(&key, &balance);
        extend_persistent_ttl(env, &key);
    }
}

pub fn increment_balance(env: &Env, account: &Address) {
    set_balance(env, account, get_balance(env, account) + 1);
}

pub fn decrement_balance(env: &Env, account: &Address) {
    set_balance(env, account, get_balance(env, account).saturating_sub(1));
}
