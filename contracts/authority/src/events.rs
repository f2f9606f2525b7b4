use soroban_sdk::{contractevent, Address};

/// Emitted when an address enters or leaves the whitelist
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct WhitelistUpdated {
    #[topic]
    pub account: Address,
    pub whitelisted: bool,
}

/// Emitted when the administrator role moves to a new address
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AdminChanged {
    #[topic]
    pub old_admin: Address,
    pub new_admin: Address,
}
