#![no_std]

//! # Authority
//!
//! Keeps the whitelist of addresses that may mint in the collection
//! contract. Only the administrator can change membership; anyone can read
//! it. The collection resolves `is_whitelisted` through a cross-contract
//! call before every mint and burn.

use soroban_sdk::{contract, contractimpl, log, Address, Env};

mod errors;
mod events;
mod storage;
mod types;

pub use errors::Error;
use events::{AdminChanged, WhitelistUpdated};

#[contract]
pub struct Authority;

#[contractimpl]
impl Authority {
    // ========== INITIALIZATION ==========

    /// Initialize the authority with its administrator
    pub fn initialize(env: Env, admin: Address) -> Result<(), Error> {
        if storage::has_admin(&env) {
            return Err(Error::AlreadyInitialized);
        }

        admin.require_auth();
        storage::set_admin(&env, &admin);

        Ok(())
    }

    // ========== WHITELIST MANAGEMENT (Admin Only) ==========

    /// Grant minting privilege to `account`. Re-adding a listed address is a no-op.
    pub fn add_to_whitelist(env: Env, admin: Address, account: Address) -> Result<(), Error> {
        Self::require_admin(&env, &admin)?;

        if storage::is_whitelisted(&env, &account) {
            return Ok(());
        }

        storage::set_whitelisted(&env, &account);
        log!(&env, "whitelisted", account);

        WhitelistUpdated {
            account,
            whitelisted: true,
        }
        .publish(&env);

        Ok(())
    }

    /// Revoke minting privilege from `account`. Removing an unlisted address is a no-op.
    pub fn remove_from_whitelist(env: Env, admin: Address, account: Address) -> Result<(), Error> {
        Self::require_admin(&env, &admin)?;

        if !storage::is_whitelisted(&env, &account) {
            return Ok(());
        }

        storage::remove_whitelisted(&env, &account);
        log!(&env, "removed from whitelist", account);

        WhitelistUpdated {
            account,
            whitelisted: false,
        }
        .publish(&env);

        Ok(())
    }

    pub fn is_whitelisted(env: Env, account: Address) -> bool {
        storage::is_whitelisted(&env, &account)
    }

    // ========== ACCESS CONTROL ==========

    pub fn get_admin(env: Env) -> Result<Address, Error> {
        storage::get_admin(&env).ok_or(Error::NotInitialized)
    }

    /// Transfer admin role
    pub fn set_admin(env: Env, admin: Address, new_admin: Address) -> Result<(), Error> {
        Self::require_admin(&env, &admin)?;

        storage::set_admin(&env, &new_admin);

        AdminChanged {
            old_admin: admin,
            new_admin,
        }
        .publish(&env);

        Ok(())
    }

    // ========== INTERNAL HELPERS ==========

    fn require_admin(env: &Env, admin: &Address) -> Result<(), Error> {
        admin.require_auth();
        let stored_admin = storage::get_admin(env).ok_or(Error::NotInitialized)?;
        if *admin != stored_admin {
            return Err(Error::Unauthorized);
        }
        storage::extend_instance_ttl(env);
        Ok(())
    }
}
