#![cfg(test)]

use super::*;
use soroban_sdk::testutils::Ledger;
use soroban_sdk::{Env, String};

const DECIMALS: u32 = 8;
const INITIAL_ANSWER: i128 = 2000_0000_0000;

fn create_feed<'a>(env: &Env) -> MockPriceFeedClient<'a> {
    MockPriceFeedClient::new(env, &env.register(MockPriceFeed, (DECIMALS, INITIAL_ANSWER)))
}

#[test]
fn test_reports_constructor_values() {
    let env = Env::default();
    let feed = create_feed(&env);

    assert_eq!(
        feed.latest_price(),
        PriceData {
            price: INITIAL_ANSWER,
            decimals: DECIMALS,
        }
    );
    assert_eq!(feed.decimals(), DECIMALS);
    assert_eq!(feed.version(), 0);
    assert_eq!(
        feed.description(),
        String::from_str(&env, "v0.8/tests/MockPriceFeed")
    );
}

#[test]
fn test_update_answer() {
    let env = Env::default();
    let feed = create_feed(&env);

    env.ledger().set_timestamp(env.ledger().timestamp() + 3600);
    feed.update_answer(&1500_0000_0000);

    assert_eq!(feed.latest_price().price, 1500_0000_0000);
    assert_eq!(feed.latest_price().decimals, DECIMALS);
    assert_eq!(feed.updated_at(), env.ledger().timestamp());
}
