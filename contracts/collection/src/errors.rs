use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    NotInitialized = 1,
    AlreadyInitialized = 2,
    Unauthorized = 3,
    NotWhitelisted = 4,
    MintingPaused = 5,
    TokenAlreadyExists = 6,
    TokenDoesNotExist = 7,
    NotOwner = 8,
    InvalidTokenId = 9,
    InvalidUri = 10,
}
