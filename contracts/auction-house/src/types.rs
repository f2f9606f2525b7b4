use soroban_sdk::{contracttype, Address};

/// Starting price applied to new auctions until the admin changes it
/// (0.1 unit of a 7-decimal asset)
pub const DEFAULT_STARTING_PRICE: i128 = 1_000_000;

/// Bidding window applied to new auctions until the admin changes it
pub const DEFAULT_AUCTION_DURATION: u64 = 12 * 60 * 60;

/// Contracts this house is wired to at deployment
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Settings {
    pub admin: Address,
    pub collection: Address,
    pub payment_token: Address,
}

/// Parameters snapshotted into every auction at creation time
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct HouseConfig {
    pub default_starting_price: i128,
    pub auction_duration: u64,
}

#[contracttype]
#[derive(Clone, Debug, PartialEq)]
pub struct Auction {
    pub auction_id: u64,
    pub token_id: u64,
    pub seller: Address,
    pub starting_price: i128,
    pub current_bid: i128,
    pub current_bidder: Option<Address>,
    pub start_time: u64,
    pub deadline: u64,
    pub ended: bool,
}

#[contracttype]
#[derive(Clone, Debug, PartialEq)]
pub struct Bid {
    pub bidder: Address,
    pub amount: i128,
    pub timestamp: u64,
}

#[contracttype]
pub enum DataKey {
    Settings,
    Config,
    AuctionCounter,
    /// Sum of the leading bids of all open auctions
    TotalEscrowed,
    /// Sum of all pending withdrawal entries
    TotalPending,
    Auction(u64),
    BidHistory(u64),
    PendingWithdrawal(Address),
}
