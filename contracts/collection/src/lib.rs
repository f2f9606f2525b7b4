#![no_std]

//! # Collection
//!
//! Non-fungible token registry. Every token has a unique `u64` id starting
//! at 1 that is never reused, even after a burn. Minting and burning are
//! gated by the whitelist kept in the authority contract, which is
//! resolved through a cross-contract call on every gated operation.
//!
//! The auction house mints into its own custody and later hands tokens to
//! auction winners with [`Collection::transfer`].

use soroban_sdk::{
    contract, contractimpl, log, token, vec, Address, Env, IntoVal, String, Symbol, Val, Vec,
};

mod errors;
mod events;
mod storage;
mod types;

pub use errors::Error;
use events::{AdminChanged, BaseUriUpdated, Burned, FundsWithdrawn, MintingPauseToggled, Minted, Transferred};
pub use types::CollectionConfig;

/// Longest base URI accepted by `set_base_uri`
const MAX_BASE_URI_LEN: u32 = 200;

/// Decimal digits in `u64::MAX`
const MAX_ID_DIGITS: usize = 20;

#[contract]
pub struct Collection;

#[contractimpl]
impl Collection {
    // ========== INITIALIZATION ==========

    /// Initialize the collection
    ///
    /// # Arguments
    /// * `admin` - Address allowed to pause minting, set metadata and withdraw
    /// * `authority` - Whitelist authority contract
    /// * `payment_token` - Asset held by this contract that `withdraw` sweeps
    pub fn initialize(
        env: Env,
        admin: Address,
        authority: Address,
        payment_token: Address,
        name: String,
        symbol: String,
    ) -> Result<(), Error> {
        if storage::is_initialized(&env) {
            return Err(Error::AlreadyInitialized);
        }

        admin.require_auth();

        storage::set_config(
            &env,
            &CollectionConfig {
                admin,
                authority,
                payment_token,
                name,
                symbol,
            },
        );

        Ok(())
    }

    // ========== MINT / BURN / TRANSFER ==========

    /// Mint `token_id` to `to`.
    ///
    /// # Errors
    /// * `Error::InvalidTokenId` - `token_id` is zero
    /// * `Error::NotWhitelisted` - `minter` is not on the authority's whitelist
    /// * `Error::MintingPaused` - the admin has paused minting
    /// * `Error::TokenAlreadyExists` - the id is live or was burned
    pub fn safe_mint(env: Env, minter: Address, to: Address, token_id: u64) -> Result<(), Error> {
        minter.require_auth();
        let config = Self::load_config(&env)?;

        if token_id == 0 {
            return Err(Error::InvalidTokenId);
        }

        if !Self::call_is_whitelisted(&env, &config.authority, &minter) {
            return Err(Error::NotWhitelisted);
        }

        if storage::is_minting_paused(&env) {
            return Err(Error::MintingPaused);
        }

        if storage::is_taken(&env, token_id) {
            return Err(Error::TokenAlreadyExists);
        }

        storage::set_owner(&env, token_id, &to);
        storage::increment_balance(&env, &to);
        storage::increment_total_supply(&env);
        storage::advance_next_token_id(&env, token_id);

        Minted {
            token_id,
            minter,
            to,
        }
        .publish(&env);

        Ok(())
    }

    /// Destroy `token_id`. The caller must own the token and be whitelisted.
    pub fn burn(env: Env, owner: Address, token_id: u64) -> Result<(), Error> {
        owner.require_auth();
        let config = Self::load_config(&env)?;

        let current_owner = storage::get_owner(&env, token_id).ok_or(Error::TokenDoesNotExist)?;
        if current_owner != owner {
            return Err(Error::NotOwner);
        }

        if !Self::call_is_whitelisted(&env, &config.authority, &owner) {
            return Err(Error::NotWhitelisted);
        }

        storage::remove_owner(&env, token_id);
        storage::set_burned(&env, token_id);
        storage::decrement_balance(&env, &owner);

        Burned { token_id, owner }.publish(&env);

        Ok(())
    }

    /// Move `token_id` from its current owner `from` to `to`
    pub fn transfer(env: Env, from: Address, to: Address, token_id: u64) -> Result<(), Error> {
        from.require_auth();
        Self::load_config(&env)?;

        let current_owner = storage::get_owner(&env, token_id).ok_or(Error::TokenDoesNotExist)?;
        if current_owner != from {
            return Err(Error::NotOwner);
        }

        storage::set_owner(&env, token_id, &to);
        storage::decrement_balance(&env, &from);
        storage::increment_balance(&env, &to);

        Transferred { token_id, from, to }.publish(&env);

        Ok(())
    }

    // ========== ADMIN ==========

    /// Flip the mint pause flag (admin only). Returns the new state.
    pub fn toggle_minting_pause(env: Env, admin: Address) -> Result<bool, Error> {
        Self::require_admin(&env, &admin)?;

        let paused = !storage::is_minting_paused(&env);
        storage::set_minting_paused(&env, paused);

        MintingPauseToggled { admin, paused }.publish(&env);

        Ok(paused)
    }

    /// Update the metadata base URI (admin only)
    pub fn set_base_uri(env: Env, admin: Address, base_uri: String) -> Result<(), Error> {
        Self::require_admin(&env, &admin)?;

        if base_uri.len() > MAX_BASE_URI_LEN {
            return Err(Error::InvalidUri);
        }

        storage::set_base_uri(&env, &base_uri);

        BaseUriUpdated { admin, base_uri }.publish(&env);

        Ok(())
    }

    /// Send the contract's whole payment-token balance to the admin.
    /// Returns the amount moved; an empty balance is not an error.
    pub fn withdraw(env: Env, admin: Address) -> Result<i128, Error> {
        Self::require_admin(&env, &admin)?;
        let config = Self::load_config(&env)?;

        let token_client = token::TokenClient::new(&env, &config.payment_token);
        let contract_address = env.current_contract_address();
        let balance = token_client.balance(&contract_address);

        if balance > 0 {
            token_client.transfer(&contract_address, &admin, &balance);
        }
        log!(&env, "collection withdraw", balance);

        FundsWithdrawn {
            admin,
            amount: balance,
        }
        .publish(&env);

        Ok(balance)
    }

    /// Transfer admin role
    pub fn set_admin(env: Env, admin: Address, new_admin: Address) -> Result<(), Error> {
        Self::require_admin(&env, &admin)?;

        let mut config = Self::load_config(&env)?;
        config.admin = new_admin.clone();
        storage::set_config(&env, &config);

        AdminChanged {
            old_admin: admin,
            new_admin,
        }
        .publish(&env);

        Ok(())
    }

    // ========== VIEWS ==========

    pub fn owner_of(env: Env, token_id: u64) -> Result<Address, Error> {
        storage::get_owner(&env, token_id).ok_or(Error::TokenDoesNotExist)
    }

    pub fn exists(env: Env, token_id: u64) -> bool {
        storage::get_owner(&env, token_id).is_some()
    }

    pub fn balance_of(env: Env, account: Address) -> u64 {
        storage::get_balance(&env, &account)
    }

    /// Number of ids ever minted. Burns do not lower it.
    pub fn total_supply(env: Env) -> u64 {
        storage::get_total_supply(&env)
    }

    /// Lowest id that has never been minted. Ids taken out of order by a
    /// direct mint are skipped.
    pub fn next_token_id(env: Env) -> u64 {
        storage::get_next_token_id(&env)
    }

    pub fn minting_paused(env: Env) -> bool {
        storage::is_minting_paused(&env)
    }

    pub fn base_uri(env: Env) -> String {
        storage::get_base_uri(&env).unwrap_or_else(|| String::from_str(&env, ""))
    }

    /// Metadata URI of a live token: the base URI followed by the decimal id,
    /// or an empty string while no base URI is set.
    pub fn token_uri(env: Env, token_id: u64) -> Result<String, Error> {
        if storage::get_owner(&env, token_id).is_none() {
            return Err(Error::TokenDoesNotExist);
        }

        match storage::get_base_uri(&env) {
            Some(base) if !base.is_empty() => Ok(compose_token_uri(&env, &base, token_id)),
            _ => Ok(String::from_str(&env, "")),
        }
    }

    pub fn name(env: Env) -> Result<String, Error> {
        Ok(Self::load_config(&env)?.name)
    }

    pub fn symbol(env: Env) -> Result<String, Error> {
        Ok(Self::load_config(&env)?.symbol)
    }

    pub fn authority(env: Env) -> Result<Address, Error> {
        Ok(Self::load_config(&env)?.authority)
    }

    pub fn get_admin(env: Env) -> Result<Address, Error> {
        Ok(Self::load_config(&env)?.admin)
    }

    // ========== INTERNAL HELPERS ==========

    fn load_config(env: &Env) -> Result<CollectionConfig, Error> {
        storage::get_config(env).ok_or(Error::NotInitialized)
    }

    fn require_admin(env: &Env, admin: &Address) -> Result<(), Error> {
        admin.require_auth();
        let config = Self::load_config(env)?;
        if *admin != config.admin {
            return Err(Error::Unauthorized);
        }
        storage::extend_instance_ttl(env);
        Ok(())
    }

    /// Ask the authority contract whether `account` may mint
    fn call_is_whitelisted(env: &Env, authority: &Address, account: &Address) -> bool {
        let is_whitelisted_fn = Symbol::new(env, "is_whitelisted");
        let args: Vec<Val> = vec![env, account.into_val(env)];
        env.invoke_contract::<bool>(authority, &is_whitelisted_fn, args)
    }
}

fn compose_token_uri(env: &Env, base: &String, token_id: u64) -> String {
    let mut digits = [0u8; MAX_ID_DIGITS];
    let mut start = MAX_ID_DIGITS;
    let mut rest = token_id;
    loop {
        start -= 1;
        digits[start] = b'0' + (rest % 10) as u8;
        rest /= 10;
        if rest == 0 {
            break;
        }
    }
    let digits = &digits[start..];

    let base_len = base.len() as usize;
    let mut buf = [0u8; MAX_BASE_URI_LEN as usize + MAX_ID_DIGITS];
    base.copy_into_slice(&mut buf[..base_len]);
    buf[base_len..base_len + digits.len()].copy_from_slice(digits);

    String::from_bytes(env, &buf[..base_len + digits.len()])
}
