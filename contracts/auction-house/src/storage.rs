use crate::types::{
    Auction, Bid, DataKey, HouseConfig, Settings, DEFAULT_AUCTION_DURATION,
    DEFAULT_STARTING_PRICE,
};
use soroban_sdk::{Address, Env, Vec};

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

fn extend_persistent_ttl(env: &Env, key: &DataKey) {
    env.storage()
        .persistent()
        .extend_ttl(key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_AMOUNT);
}

// ========== Settings & Config ==========

pub fn has_settings(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Settings)
}

pub fn get_settings(env: &Env) -> Option<Settings> {
    env.storage().instance().get(&DataKey::Settings)
}

pub fn set_settings(env: &Env, settings: &Settings) {
    env.storage().instance().set(&DataKey::Settings, settings);
    extend_instance_ttl(env);
}

pub fn get_config(env: &Env) -> HouseConfig {
    env.storage()
        .instance()
        .get(&DataKey::Config)
        .unwrap_or(HouseConfig {
            default_starting_price: DEFAULT_STARTING_PRICE,
            auction_duration: DEFAULT_AUCTION_DURATION,
        })
}

pub fn set_config(env: &Env, config: &HouseConfig) {
    env.storage().instance().set(&DataKey::Config, config);
    extend_instance_ttl(env);
}

// ========== Auctions ==========

pub fn get_auction_counter(env: &Env) -> u64 {
    env.storage()
        .instance()
        .get(&DataKey::AuctionCounter)
        .unwrap_or(0)
}

/// Hand out the next auction id. Ids start at 0 and are never reused.
pub fn next_auction_id(env: &Env) -> u64 {
    let auction_id = get_auction_counter(env);
    env.storage()
        .instance()
        .set(&DataKey::AuctionCounter, &(auction_id + 1));
    auction_id
}

pub fn get_auction(env: &Env, auction_id: u64) -> Option<Auction> {
    let key = DataKey::Auction(auction_id);
    let auction = env.storage().persistent().get::<_, Auction>(&key);
    if auction.is_some() {
        extend_persistent_ttl(env, &key);
    }
    auction
}

pub fn save_auction(env: &Env, auction: &Auction) {
    let key = DataKey::Auction(auction.auction_id);
    env.storage().persistent().set(&key, auction);
    extend_persistent_ttl(env, &key);
}

pub fn get_bid_history(env: &Env, auction_id: u64) -> Vec<Bid> {
    let key = DataKey::BidHistory(auction_id);
    env.storage().persistent().get(&key).unwrap_or(Vec::new(env))
}

pub fn add_bid_to_history(env: &Env, auction_id: u64, bid: Bid) {
    let key = DataKey::BidHistory(auction_id);
    let mut history = get_bid_history(env, auction_id);
    history.push_back(bid);
    env.storage().persistent().set(&key, &history);
    extend_persistent_ttl(env, &key);
}

// ========== Custody ledger ==========

pub fn get_total_escrowed(env: &Env) -> i128 {
    env.storage()
        .instance()
        .get(&DataKey::TotalEscrowed)
        .unwrap_or(0)
}

/// Apply `delta` to the running sum of leading bids held for open auctions
pub fn adjust_total_escrowed(env: &Env, delta: i128) {
    let total = get_total_escrowed(env) + delta;
    env.storage().instance().set(&DataKey::TotalEscrowed, &total);
}

pub fn get_total_pending(env: &Env) -> i128 {
    env.storage()
        .instance()
        .get(&DataKey::TotalPending)
        .unwrap_or(0)
}

fn set_total_pending(env: &Env, total: i128) {
    env.storage().instance().set(&DataKey::TotalPending, &total);
}

pub fn get_pending_withdrawal(env: &Env, account: &Address) -> i128 {
    let key = DataKey::PendingWithdrawal(account.clone());
    let amount = env.storage().persistent().get::<_, i128>(&key);
    if amount.is_some() {
        extend_persistent_ttl(env, &key);
    }
    amount.unwrap_or(0)
}

pub fn credit_pending_withdrawal(env: &Env, account: &Address, amount: i128) {
    let key = DataKey::PendingWithdrawal(account.clone());
    let balance = get_pending_withdrawal(env, account) + amount;
    env.storage().persistent().set(&key, &balance);
    extend_persistent_ttl(env, &key);
    set_total_pending(env, get_total_pending(env) + amount);
}

/// Zero `account`'s entry and return what it held
pub fn take_pending_withdrawal(env: &Env, account: &Address) -> i128 {
    let amount = get_pending_withdrawal(env, account);
    if amount > 0 {
        env.storage()
            .persistent()
            .remove(&DataKey::PendingWithdrawal(account.clone()));
        set_total_pending(env, get_total_pending(env) - amount);
    }
    amount
}
