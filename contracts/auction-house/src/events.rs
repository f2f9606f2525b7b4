use soroban_sdk::{contractevent, Address};

/// Event emitted when an auction opens for a freshly minted token
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AuctionCreated {
    #[topic]
    pub auction_id: u64,
    pub token_id: u64,
}

/// Event emitted when a bid becomes the leading bid
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BidPlaced {
    #[topic]
    pub auction_id: u64,
    #[topic]
    pub bidder: Address,
    pub amount: i128,
}

/// Event emitted when an outbid bidder could not be paid back and the
/// amount was moved to their pending withdrawal balance instead
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RefundDeferred {
    #[topic]
    pub auction_id: u64,
    #[topic]
    pub bidder: Address,
    pub amount: i128,
}

/// Event emitted when an auction ends, by timeout or by the admin
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AuctionSettled {
    #[topic]
    pub auction_id: u64,
    pub winner: Option<Address>,
    pub amount: i128,
}

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Claimed {
    #[topic]
    pub account: Address,
    pub amount: i128,
}

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ConfigUpdated {
    #[topic]
    pub admin: Address,
    pub default_starting_price: i128,
    pub auction_duration: u64,
}

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FundsWithdrawn {
    #[topic]
    pub admin: Address,
    pub amount: i128,
}

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AdminChanged {
    #[topic]
    pub old_admin: Address,
    pub new_admin: Address,
}
