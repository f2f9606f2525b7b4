use crate::test::{deploy, published, setup_test, TENTH};
use crate::types::{DEFAULT_AUCTION_DURATION, DEFAULT_STARTING_PRICE};
use crate::Error;
use soroban_sdk::{testutils::Address as _, Address, Env, IntoVal, String, Symbol};

#[test]
fn test_initialize() {
    let (_, client, collection, admin, _, _, token) = setup_test();
    assert_eq!(
        client.try_initialize(&admin, &collection.address, &token.address),
        Err(Ok(Error::AlreadyInitialized))
    );
    assert_eq!(client.get_admin(), admin);
    assert_eq!(client.collection(), collection.address);
    assert_eq!(client.payment_token(), token.address);
    assert_eq!(client.default_starting_price(), DEFAULT_STARTING_PRICE);
    assert_eq!(client.auction_duration(), DEFAULT_AUCTION_DURATION);
}

#[test]
fn test_create_auction() {
    let (env, client, collection, _, seller, _, _) = setup_test();
    let created_at = env.ledger().timestamp();

    let auction_id = client.create_auction(&seller);

    assert_eq!(auction_id, 0);

    let auction = client.get_auction(&auction_id);
    assert_eq!(auction.token_id, 1);
    assert_eq!(auction.seller, seller);
    assert_eq!(auction.starting_price, DEFAULT_STARTING_PRICE);
    assert_eq!(auction.current_bid, 0);
    assert_eq!(auction.current_bidder, None);
    assert_eq!(auction.start_time, created_at);
    assert_eq!(auction.deadline, created_at + DEFAULT_AUCTION_DURATION);
    assert!(!auction.ended);

    assert_eq!(collection.owner_of(&1), client.address);
    assert_eq!(collection.total_supply(), 1);
}

#[test]
fn test_create_auction_publishes_event() {
    let (env, client, _, _, seller, _, _) = setup_test();

    let auction_id = client.create_auction(&seller);

    assert!(published(
        &env,
        &client.address,
        (Symbol::new(&env, "auction_created"), auction_id).into_val(&env),
        &[("token_id", 1u64.into_val(&env))],
    ));
}

#[test]
fn test_auction_ids_are_sequential() {
    let (env, client, collection, _, seller, _, _) = setup_test();
    let other_seller = Address::generate(&env);

    assert_eq!(client.create_auction(&seller), 0);
    assert_eq!(client.create_auction(&other_seller), 1);
    assert_eq!(client.create_auction(&seller), 2);

    assert_eq!(client.auction_count(), 3);
    assert_eq!(client.get_auction(&1).token_id, 2);
    assert_eq!(client.get_auction(&1).seller, other_seller);
    assert_eq!(client.get_auction(&2).token_id, 3);
    assert_eq!(collection.balance_of(&client.address), 3);
}

#[test]
fn test_create_auction_requires_whitelisted_house() {
    let env = Env::default();
    env.mock_all_auths();
    let payment_token = env
        .register_stellar_asset_contract_v2(Address::generate(&env))
        .address();
    let deployment = deploy(&env, &payment_token);
    let seller = Address::generate(&env);

    assert_eq!(
        deployment.house.try_create_auction(&seller),
        Err(Ok(Error::AuctionHouseNotWhitelisted))
    );
    assert_eq!(deployment.house.auction_count(), 0);
    assert_eq!(deployment.collection.total_supply(), 0);

    deployment
        .authority
        .add_to_whitelist(&deployment.admin, &deployment.house.address);
    assert_eq!(deployment.house.create_auction(&seller), 0);

    deployment
        .authority
        .remove_from_whitelist(&deployment.admin, &deployment.house.address);
    assert_eq!(
        deployment.house.try_create_auction(&seller),
        Err(Ok(Error::AuctionHouseNotWhitelisted))
    );
    assert_eq!(deployment.house.auction_count(), 1);
}

#[test]
fn test_create_auction_minting_paused() {
    let (_, client, collection, admin, seller, _, _) = setup_test();

    collection.toggle_minting_pause(&admin);

    assert_eq!(
        client.try_create_auction(&seller),
        Err(Ok(Error::MintingPaused))
    );
    assert_eq!(client.auction_count(), 0);
}

#[test]
fn test_create_auction_after_direct_mint() {
    let env = Env::default();
    env.mock_all_auths();
    let payment_token = env
        .register_stellar_asset_contract_v2(Address::generate(&env))
        .address();
    let deployment = deploy(&env, &payment_token);
    let seller = Address::generate(&env);
    let admin = deployment.admin.clone();

    deployment.authority.add_to_whitelist(&admin, &admin);
    deployment
        .authority
        .add_to_whitelist(&admin, &deployment.house.address);
    deployment.collection.safe_mint(&admin, &admin, &1);

    let auction_id = deployment.house.create_auction(&seller);

    assert_eq!(deployment.house.get_auction(&auction_id).token_id, 2);
    assert_eq!(deployment.collection.owner_of(&1), admin);
    assert_eq!(deployment.collection.owner_of(&2), deployment.house.address);
}

#[test]
fn test_create_auction_skips_id_minted_ahead() {
    let env = Env::default();
    env.mock_all_auths();
    let payment_token = env
        .register_stellar_asset_contract_v2(Address::generate(&env))
        .address();
    let deployment = deploy(&env, &payment_token);
    let seller = Address::generate(&env);
    let minter = Address::generate(&env);
    let admin = deployment.admin.clone();

    deployment
        .authority
        .add_to_whitelist(&admin, &deployment.house.address);
    deployment.authority.add_to_whitelist(&admin, &minter);
    deployment.collection.safe_mint(&minter, &minter, &2);

    assert_eq!(deployment.house.create_auction(&seller), 0);
    assert_eq!(deployment.house.create_auction(&seller), 1);
    assert_eq!(deployment.house.create_auction(&seller), 2);

    assert_eq!(deployment.house.get_auction(&0).token_id, 1);
    assert_eq!(deployment.house.get_auction(&1).token_id, 3);
    assert_eq!(deployment.house.get_auction(&2).token_id, 4);
    assert_eq!(deployment.collection.owner_of(&2), minter);
    assert_eq!(deployment.collection.total_supply(), 4);
}

#[test]
fn test_get_token_info() {
    let (env, client, collection, admin, seller, _, _) = setup_test();
    collection.set_base_uri(&admin, &String::from_str(&env, "https://example.com/token/"));

    let auction_id = client.create_auction(&seller);
    let (token_uri, token_id) = client.get_token_info(&auction_id);

    assert_eq!(token_id, 1);
    assert_eq!(token_uri, collection.token_uri(&token_id));
    assert_eq!(token_uri, String::from_str(&env, "https://example.com/token/1"));
}

#[test]
fn test_get_auction_not_found() {
    let (_, client, _, _, _, _, _) = setup_test();

    assert_eq!(client.try_get_auction(&999), Err(Ok(Error::AuctionNotFound)));
    assert_eq!(client.try_get_token_info(&0), Err(Ok(Error::AuctionNotFound)));
    assert_eq!(client.try_get_bid_history(&0), Err(Ok(Error::AuctionNotFound)));
}

#[test]
fn test_starting_price_is_a_snapshot() {
    let (_, client, _, admin, seller, _, _) = setup_test();

    let first = client.create_auction(&seller);
    client.set_default_starting_price(&admin, &(2 * TENTH));
    let second = client.create_auction(&seller);

    assert_eq!(client.default_starting_price(), 2 * TENTH);
    assert_eq!(client.get_auction(&first).starting_price, DEFAULT_STARTING_PRICE);
    assert_eq!(client.get_auction(&second).starting_price, 2 * TENTH);
}

#[test]
fn test_duration_is_a_snapshot() {
    let (env, client, _, admin, seller, _, _) = setup_test();
    let day = 24 * 60 * 60;

    let first = client.create_auction(&seller);
    client.change_auction_duration(&admin, &day);
    let second = client.create_auction(&seller);

    let now = env.ledger().timestamp();
    assert_eq!(client.auction_duration(), day);
    assert_eq!(client.get_auction(&first).deadline, now + DEFAULT_AUCTION_DURATION);
    assert_eq!(client.get_auction(&second).deadline, now + day);
}
