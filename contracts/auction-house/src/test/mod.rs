pub mod admin_test;
pub mod auction_test;

use crate::{AuctionHouse, AuctionHouseClient};
use authority::{Authority, AuthorityClient};
use collection::{Collection, CollectionClient};
use soroban_sdk::{
    testutils::{Address as _, Events, Ledger, LedgerInfo},
    token, Address, Env, IntoVal, Map, String, Symbol, Val, Vec,
};

/// 0.1 unit of a 7-decimal asset
pub const TENTH: i128 = 1_000_000;

pub struct Deployment {
    pub house: AuctionHouseClient<'static>,
    pub collection: CollectionClient<'static>,
    pub authority: AuthorityClient<'static>,
    pub admin: Address,
}

/// Deploy authority, collection and house in dependency order, wired to
/// `payment_token`. The house is not whitelisted yet.
pub fn deploy(env: &Env, payment_token: &Address) -> Deployment {
    let admin = Address::generate(env);

    let authority_id = env.register(Authority, ());
    let authority = AuthorityClient::new(env, &authority_id);
    authority.initialize(&admin);

    let collection_id = env.register(Collection, ());
    let collection = CollectionClient::new(env, &collection_id);
    collection.initialize(
        &admin,
        &authority_id,
        payment_token,
        &String::from_str(env, "PeakyBirds"),
        &String::from_str(env, "PKB"),
    );

    let house_id = env.register(AuctionHouse, ());
    let house = AuctionHouseClient::new(env, &house_id);
    house.initialize(&admin, &collection_id, payment_token);

    Deployment {
        house,
        collection,
        authority,
        admin,
    }
}

pub fn setup_test() -> (
    Env,
    AuctionHouseClient<'static>,
    CollectionClient<'static>,
    Address,
    Address,
    Address,
    token::TokenClient<'static>,
) {
    let env = Env::default();
    env.mock_all_auths();

    let token_admin = Address::generate(&env);
    let token_contract = env.register_stellar_asset_contract_v2(token_admin.clone());
    let token_address = token_contract.address();
    let token_client = token::TokenClient::new(&env, &token_address);

    let deployment = deploy(&env, &token_address);
    deployment
        .authority
        .add_to_whitelist(&deployment.admin, &deployment.house.address);

    let seller = Address::generate(&env);
    let bidder = Address::generate(&env);
    fund(&env, &token_address, &bidder, 100 * TENTH);

    (
        env,
        deployment.house,
        deployment.collection,
        deployment.admin,
        seller,
        bidder,
        token_client,
    )
}

/// A new address holding `amount` of the payment asset
pub fn funded_bidder(env: &Env, token: &token::TokenClient, amount: i128) -> Address {
    let bidder = Address::generate(env);
    fund(env, &token.address, &bidder, amount);
    bidder
}

pub fn fund(env: &Env, token_address: &Address, to: &Address, amount: i128) {
    token::StellarAssetClient::new(env, token_address).mint(to, &amount);
}

/// Whether `contract` published an event with `topics` and map-encoded
/// `data` during the last invocation
pub fn published(
    env: &Env,
    contract: &Address,
    topics: Vec<Val>,
    data: &[(&str, Val)],
) -> bool {
    let mut fields: Map<Symbol, Val> = Map::new(env);
    for (name, value) in data {
        fields.set(Symbol::new(env, name), *value);
    }
    env.events()
        .all()
        .contains((contract.clone(), topics, fields.into_val(env)))
}

pub fn advance_ledger(env: &Env, seconds: u64) {
    env.ledger().set(LedgerInfo {
        timestamp: env.ledger().timestamp() + seconds,
        protocol_version: 23,
        sequence_number: env.ledger().sequence(),
        network_id: Default::default(),
        base_reserve: 10,
        min_temp_entry_ttl: 10,
        min_persistent_entry_ttl: 10,
        max_entry_ttl: 3110400,
    });
}
