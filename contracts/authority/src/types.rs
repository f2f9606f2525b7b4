use soroban_sdk::{contracttype, Address};

/// Storage keys for the authority contract
#[contracttype]
#[derive(Clone)]
pub enum StorageKey {
    Admin,
    Whitelisted(Address),
}
