use soroban_sdk::{contracttype, Address, String};

/// Storage keys for the collection contract
#[contracttype]
#[derive(Clone)]
pub enum StorageKey {
    Config,
    MintingPaused,
    BaseUri,
    TotalSupply,
    NextTokenId,
    Owner(u64),
    Burned(u64),
    Balance(Address),
}

/// Deployment-time configuration
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CollectionConfig {
    pub admin: Address,
    /// Whitelist authority consulted before minting and burning
    pub authority: Address,
    /// Asset whose balance `withdraw` sweeps to the admin
    pub payment_token: Address,
    pub name: String,
    pub symbol: String,
}
