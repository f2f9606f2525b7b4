use crate::storage;
use crate::test::{advance_ledger, fund, setup_test, TENTH};
use crate::Error;
use soroban_sdk::{
    testutils::{storage::Instance as _, Address as _, Ledger as _},
    Address,
};

#[test]
fn test_set_default_starting_price() {
    let (_env, client, _, admin, _, _, _) = setup_test();

    client.set_default_starting_price(&admin, &(2 * TENTH));

    assert_eq!(client.default_starting_price(), 2 * TENTH);
    assert_eq!(client.get_config().default_starting_price, 2 * TENTH);
}

#[test]
fn test_set_default_starting_price_guards() {
    let (env, client, _, admin, _, _, _) = setup_test();
    let intruder = Address::generate(&env);
    let before = client.default_starting_price();

    assert_eq!(
        client.try_set_default_starting_price(&intruder, &(2 * TENTH)),
        Err(Ok(Error::Unauthorized))
    );
    assert_eq!(
        client.try_set_default_starting_price(&admin, &-1),
        Err(Ok(Error::InvalidPrice))
    );
    assert_eq!(client.default_starting_price(), before);
}

#[test]
fn test_change_auction_duration() {
    let (_env, client, _, admin, _, _, _) = setup_test();
    let day = 24 * 60 * 60;

    client.change_auction_duration(&admin, &day);

    assert_eq!(client.auction_duration(), day);
}

#[test]
fn test_change_auction_duration_guards() {
    let (env, client, _, admin, _, _, _) = setup_test();
    let intruder = Address::generate(&env);
    let before = client.auction_duration();

    assert_eq!(
        client.try_change_auction_duration(&intruder, &3600),
        Err(Ok(Error::Unauthorized))
    );
    assert_eq!(
        client.try_change_auction_duration(&admin, &0),
        Err(Ok(Error::InvalidDuration))
    );
    assert_eq!(client.auction_duration(), before);
}

#[test]
fn test_withdraw_non_admin() {
    let (env, client, _, _, _, _, token) = setup_test();
    let intruder = Address::generate(&env);
    fund(&env, &token.address, &client.address, 10 * TENTH);

    assert_eq!(client.try_withdraw(&intruder), Err(Ok(Error::Unauthorized)));
    assert_eq!(token.balance(&client.address), 10 * TENTH);
}

#[test]
fn test_withdraw_moves_full_free_balance() {
    let (env, client, _, admin, _, _, token) = setup_test();
    fund(&env, &token.address, &client.address, 10 * TENTH);

    assert_eq!(client.withdraw(&admin), 10 * TENTH);
    assert_eq!(token.balance(&admin), 10 * TENTH);
    assert_eq!(token.balance(&client.address), 0);

    assert_eq!(client.withdraw(&admin), 0);
    assert_eq!(token.balance(&admin), 10 * TENTH);
}

#[test]
fn test_withdraw_leaves_escrow_and_proceeds() {
    let (env, client, _, admin, seller, bidder, token) = setup_test();
    let first = client.create_auction(&seller);
    let second = client.create_auction(&seller);
    client.place_bid(&first, &bidder, &(3 * TENTH));
    client.place_bid(&second, &bidder, &(4 * TENTH));
    fund(&env, &token.address, &client.address, 10 * TENTH);

    advance_ledger(&env, client.auction_duration());
    client.end_auction(&first);

    assert_eq!(client.withdraw(&admin), 10 * TENTH);
    assert_eq!(token.balance(&client.address), 7 * TENTH);

    assert_eq!(client.claim(&seller), 3 * TENTH);
    client.end_auction(&second);
    assert_eq!(client.claim(&seller), 4 * TENTH);
    assert_eq!(token.balance(&client.address), 0);
}

#[test]
fn test_set_admin() {
    let (env, client, _, admin, seller, _, _) = setup_test();
    let new_admin = Address::generate(&env);
    let auction_id = client.create_auction(&seller);

    client.set_admin(&admin, &new_admin);

    assert_eq!(client.get_admin(), new_admin);
    assert_eq!(
        client.try_force_end_auction(&admin, &auction_id),
        Err(Ok(Error::Unauthorized))
    );
    client.force_end_auction(&new_admin, &auction_id);
}

#[test]
fn test_set_config_extends_instance_ttl() {
    let (env, client, _, _, _, _, _) = setup_test();

    env.ledger()
        .set_sequence_number(env.ledger().sequence() + 2 * 17280);
    env.as_contract(&client.address, || {
        let config = storage::get_config(&env);
        assert!(env.storage().instance().get_ttl() < storage::INSTANCE_TTL_AMOUNT);
        storage::set_config(&env, &config);
        assert_eq!(env.storage().instance().get_ttl(), storage::INSTANCE_TTL_AMOUNT);
    });
}
