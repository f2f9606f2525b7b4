#![no_std]

//! # Auction House
//!
//! Mints a token on demand for every auction and sells it in a single-item
//! English auction with a fixed deadline.
//!
//! Custody: the token is minted to this contract and stays here until the
//! auction settles. Bid funds are pulled from the bidder into this contract
//! and the previous leader is paid back in the same call. If that payback
//! fails the amount is recorded as a pending withdrawal that the bidder can
//! [`claim`](AuctionHouse::claim) later, so one uncooperative bidder cannot
//! block new bids.
//!
//! Every operation that moves funds writes its state first and transfers
//! last.

mod admin;
mod errors;
mod events;
mod external;
mod storage;
mod types;

use soroban_sdk::{contract, contractimpl, log, token, Address, Env, String, Vec};

pub use errors::Error;
use events::{
    AdminChanged, AuctionCreated, AuctionSettled, BidPlaced, Claimed, ConfigUpdated,
    FundsWithdrawn, RefundDeferred,
};
pub use types::{Auction, Bid, HouseConfig, Settings};

#[contract]
pub struct AuctionHouse;

#[contractimpl]
impl AuctionHouse {
    // ========== INITIALIZATION ==========

    /// Wire the house to its collection and payment asset.
    ///
    /// The house must also be whitelisted in the collection's authority
    /// before `create_auction` can mint.
    pub fn initialize(
        env: Env,
        admin: Address,
        collection: Address,
        payment_token: Address,
    ) -> Result<(), Error> {
        if storage::has_settings(&env) {
            return Err(Error::AlreadyInitialized);
        }
        admin.require_auth();

        storage::set_settings(
            &env,
            &Settings {
                admin,
                collection,
                payment_token,
            },
        );
        storage::set_config(&env, &storage::get_config(&env));

        Ok(())
    }

    // ========== AUCTION LIFECYCLE ==========

    /// Mint the next token into the house and open an auction for it.
    ///
    /// # Returns
    /// * The new auction id (0, 1, 2, ...)
    ///
    /// # Errors
    /// * `Error::AuctionHouseNotWhitelisted` - the house may not mint
    /// * `Error::MintingPaused` - the collection has minting paused
    pub fn create_auction(env: Env, seller: Address) -> Result<u64, Error> {
        seller.require_auth();
        let settings = load_settings(&env)?;

        let house = env.current_contract_address();
        let authority = external::collection_authority(&env, &settings.collection);
        if !external::is_whitelisted(&env, &authority, &house) {
            return Err(Error::AuctionHouseNotWhitelisted);
        }

        if external::minting_paused(&env, &settings.collection) {
            return Err(Error::MintingPaused);
        }

        let config = storage::get_config(&env);
        let token_id = external::next_token_id(&env, &settings.collection);
        let auction_id = storage::next_auction_id(&env);
        let current_time = env.ledger().timestamp();

        let auction = Auction {
            auction_id,
            token_id,
            seller,
            starting_price: config.default_starting_price,
            current_bid: 0,
            current_bidder: None,
            start_time: current_time,
            deadline: current_time.saturating_add(config.auction_duration),
            ended: false,
        };
        storage::save_auction(&env, &auction);

        external::safe_mint(&env, &settings.collection, &house, token_id);

        AuctionCreated {
            auction_id,
            token_id,
        }
        .publish(&env);

        Ok(auction_id)
    }

    /// Place a bid of `amount`, pulled from `bidder` into escrow.
    ///
    /// The first bid must reach the starting price; every later bid must be
    /// strictly higher than the current one. The outbid leader is refunded
    /// in the same call, or credited a pending withdrawal if the refund
    /// transfer fails.
    ///
    /// # Errors
    /// * `Error::AuctionNotFound` - no auction with this id
    /// * `Error::AuctionEnded` - the auction was already settled
    /// * `Error::AuctionExpired` - the deadline has passed
    /// * `Error::BidTooLow` - below the starting price or not above the current bid
    pub fn place_bid(env: Env, auction_id: u64, bidder: Address, amount: i128) -> Result<(), Error> {
        bidder.require_auth();
        let settings = load_settings(&env)?;

        let mut auction = storage::get_auction(&env, auction_id).ok_or(Error::AuctionNotFound)?;

        if auction.ended {
            return Err(Error::AuctionEnded);
        }

        if is_expired(&env, &auction) {
            return Err(Error::AuctionExpired);
        }

        let meets_minimum = match auction.current_bidder {
            None => amount > 0 && amount >= auction.starting_price,
            Some(_) => amount > auction.current_bid,
        };
        if !meets_minimum {
            return Err(Error::BidTooLow);
        }

        let previous_bid = auction.current_bid;
        let previous_bidder = auction.current_bidder.replace(bidder.clone());
        auction.current_bid = amount;

        storage::save_auction(&env, &auction);
        storage::add_bid_to_history(
            &env,
            auction_id,
            Bid {
                bidder: bidder.clone(),
                amount,
                timestamp: env.ledger().timestamp(),
            },
        );
        storage::adjust_total_escrowed(&env, amount - previous_bid);

        let token_client = token::TokenClient::new(&env, &settings.payment_token);
        token_client.transfer(&bidder, &env.current_contract_address(), &amount);

        if let Some(previous_bidder) = previous_bidder {
            refund_bidder(&env, &token_client, auction_id, &previous_bidder, previous_bid);
        }

        BidPlaced {
            auction_id,
            bidder,
            amount,
        }
        .publish(&env);

        Ok(())
    }

    /// Settle an auction whose deadline has passed. Anyone may call this.
    pub fn end_auction(env: Env, auction_id: u64) -> Result<(), Error> {
        let settings = load_settings(&env)?;
        let auction = storage::get_auction(&env, auction_id).ok_or(Error::AuctionNotFound)?;

        if auction.ended {
            return Err(Error::AuctionAlreadyEnded);
        }

        if !is_expired(&env, &auction) {
            return Err(Error::AuctionNotExpired);
        }

        settle(&env, &settings, auction);
        Ok(())
    }

    /// Settle an auction immediately, deadline or not (admin only)
    pub fn force_end_auction(env: Env, admin: Address, auction_id: u64) -> Result<(), Error> {
        admin::require_admin(&env, &admin)?;
        let settings = load_settings(&env)?;
        let auction = storage::get_auction(&env, auction_id).ok_or(Error::AuctionNotFound)?;

        if auction.ended {
            return Err(Error::AuctionAlreadyEnded);
        }

        log!(&env, "auction force-ended", auction_id);
        settle(&env, &settings, auction);
        Ok(())
    }

    /// Pay out everything the house owes `account`: seller proceeds and
    /// refunds that could not be delivered when the account was outbid.
    pub fn claim(env: Env, account: Address) -> Result<i128, Error> {
        account.require_auth();
        let settings = load_settings(&env)?;

        let amount = storage::take_pending_withdrawal(&env, &account);
        if amount == 0 {
            return Err(Error::NothingToClaim);
        }

        let token_client = token::TokenClient::new(&env, &settings.payment_token);
        token_client.transfer(&env.current_contract_address(), &account, &amount);

        Claimed { account, amount }.publish(&env);

        Ok(amount)
    }

    // ========== ADMIN ==========

    /// Change the starting price snapshotted into auctions created from now on
    pub fn set_default_starting_price(env: Env, admin: Address, amount: i128) -> Result<(), Error> {
        admin::require_admin(&env, &admin)?;

        if amount < 0 {
            return Err(Error::InvalidPrice);
        }

        let mut config = storage::get_config(&env);
        config.default_starting_price = amount;
        storage::set_config(&env, &config);

        publish_config(&env, admin, &config);
        Ok(())
    }

    /// Change the bidding window, in seconds, of auctions created from now on
    pub fn change_auction_duration(env: Env, admin: Address, duration_seconds: u64) -> Result<(), Error> {
        admin::require_admin(&env, &admin)?;

        if duration_seconds == 0 {
            return Err(Error::InvalidDuration);
        }

        let mut config = storage::get_config(&env);
        config.auction_duration = duration_seconds;
        storage::set_config(&env, &config);

        publish_config(&env, admin, &config);
        Ok(())
    }

    /// Move the house's free balance to the admin.
    ///
    /// Escrowed leading bids and pending withdrawals are owed to bidders and
    /// sellers and are never swept. Returns the amount moved.
    pub fn withdraw(env: Env, admin: Address) -> Result<i128, Error> {
        admin::require_admin(&env, &admin)?;
        let settings = load_settings(&env)?;

        let token_client = token::TokenClient::new(&env, &settings.payment_token);
        let contract_address = env.current_contract_address();
        let reserved = storage::get_total_escrowed(&env) + storage::get_total_pending(&env);
        let free = token_client.balance(&contract_address) - reserved;

        if free <= 0 {
            log!(&env, "nothing to withdraw", reserved);
            return Ok(0);
        }

        token_client.transfer(&contract_address, &admin, &free);

        FundsWithdrawn {
            admin,
            amount: free,
        }
        .publish(&env);

        Ok(free)
    }

    /// Transfer admin role
    pub fn set_admin(env: Env, admin: Address, new_admin: Address) -> Result<(), Error> {
        admin::require_admin(&env, &admin)?;

        let mut settings = load_settings(&env)?;
        settings.admin = new_admin.clone();
        storage::set_settings(&env, &settings);

        AdminChanged {
            old_admin: admin,
            new_admin,
        }
        .publish(&env);

        Ok(())
    }

    // ========== VIEWS ==========

    /// Snapshot of an auction, open or ended
    pub fn get_auction(env: Env, auction_id: u64) -> Result<Auction, Error> {
        storage::get_auction(&env, auction_id).ok_or(Error::AuctionNotFound)
    }

    pub fn get_bid_history(env: Env, auction_id: u64) -> Result<Vec<Bid>, Error> {
        if storage::get_auction(&env, auction_id).is_none() {
            return Err(Error::AuctionNotFound);
        }
        Ok(storage::get_bid_history(&env, auction_id))
    }

    pub fn get_highest_bid(env: Env, auction_id: u64) -> Result<(Option<Address>, i128), Error> {
        let auction = storage::get_auction(&env, auction_id).ok_or(Error::AuctionNotFound)?;
        Ok((auction.current_bidder, auction.current_bid))
    }

    /// Metadata URI and token id of the item sold in an auction
    pub fn get_token_info(env: Env, auction_id: u64) -> Result<(String, u64), Error> {
        let settings = load_settings(&env)?;
        let auction = storage::get_auction(&env, auction_id).ok_or(Error::AuctionNotFound)?;
        let token_uri = external::token_uri(&env, &settings.collection, auction.token_id);
        Ok((token_uri, auction.token_id))
    }

    /// Number of auctions ever created; also the id the next one will get
    pub fn auction_count(env: Env) -> u64 {
        storage::get_auction_counter(&env)
    }

    pub fn default_starting_price(env: Env) -> i128 {
        storage::get_config(&env).default_starting_price
    }

    pub fn auction_duration(env: Env) -> u64 {
        storage::get_config(&env).auction_duration
    }

    pub fn get_config(env: Env) -> HouseConfig {
        storage::get_config(&env)
    }

    pub fn pending_withdrawal(env: Env, account: Address) -> i128 {
        storage::get_pending_withdrawal(&env, &account)
    }

    pub fn get_admin(env: Env) -> Result<Address, Error> {
        Ok(load_settings(&env)?.admin)
    }

    pub fn collection(env: Env) -> Result<Address, Error> {
        Ok(load_settings(&env)?.collection)
    }

    pub fn payment_token(env: Env) -> Result<Address, Error> {
        Ok(load_settings(&env)?.payment_token)
    }
}

fn load_settings(env: &Env) -> Result<Settings, Error> {
    storage::get_settings(env).ok_or(Error::NotInitialized)
}

fn is_expired(env: &Env, auction: &Auction) -> bool {
    env.ledger().timestamp() >= auction.deadline
}

fn publish_config(env: &Env, admin: Address, config: &HouseConfig) {
    ConfigUpdated {
        admin,
        default_starting_price: config.default_starting_price,
        auction_duration: config.auction_duration,
    }
    .publish(env);
}

/// Pay an outbid bidder back. A failed transfer is booked as a pending
/// withdrawal instead of failing the new bid.
fn refund_bidder(
    env: &Env,
    token_client: &token::TokenClient,
    auction_id: u64,
    bidder: &Address,
    amount: i128,
) {
    let refunded = matches!(
        token_client.try_transfer(&env.current_contract_address(), bidder, &amount),
        Ok(Ok(()))
    );
    if refunded {
        return;
    }

    storage::credit_pending_withdrawal(env, bidder, amount);
    log!(env, "refund deferred", auction_id, bidder.clone(), amount);

    RefundDeferred {
        auction_id,
        bidder: bidder.clone(),
        amount,
    }
    .publish(env);
}

/// Close an auction for good. The winner gets the token and the seller is
/// credited the winning bid; without bids the token goes back to the seller.
fn settle(env: &Env, settings: &Settings, mut auction: Auction) {
    auction.ended = true;
    storage::save_auction(env, &auction);

    match &auction.current_bidder {
        Some(winner) => {
            storage::adjust_total_escrowed(env, -auction.current_bid);
            storage::credit_pending_withdrawal(env, &auction.seller, auction.current_bid);
            external::release_token(env, &settings.collection, winner, auction.token_id);
        }
        None => {
            log!(env, "auction closed without bids", auction.auction_id);
            external::release_token(env, &settings.collection, &auction.seller, auction.token_id);
        }
    }

    AuctionSettled {
        auction_id: auction.auction_id,
        winner: auction.current_bidder,
        amount: auction.current_bid,
    }
    .publish(env);
}

#[cfg(test)]
mod test;
