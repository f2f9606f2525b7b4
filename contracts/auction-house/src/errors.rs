use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    NotInitialized = 1,
    AlreadyInitialized = 2,
    Unauthorized = 3,
    AuctionNotFound = 4,
    AuctionEnded = 5,
    AuctionExpired = 6,
    AuctionAlreadyEnded = 7,
    AuctionNotExpired = 8,
    BidTooLow = 9,
    InvalidPrice = 10,
    InvalidDuration = 11,
    AuctionHouseNotWhitelisted = 12,
    MintingPaused = 13,
    NothingToClaim = 14,
}
