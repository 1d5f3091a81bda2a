#![no_std]

use soroban_sdk::{contract, contractimpl, symbol_short, Env, String};

mod storage;
pub use storage::PriceData;
use storage::*;

/// Price feed reporting a fixed answer, for development networks where no
/// live oracle is deployed.
#[contract]
pub struct MockPriceFeed;

#[contractimpl]
impl MockPriceFeed {
    pub fn __constructor(env: Env, decimals: u32, initial_answer: i128) {
        env.storage().instance().set(&DataKey::Decimals, &decimals);
        Self::update_answer(env, initial_answer);
    }

    /// Replace the reported price. Unrestricted: this contract only backs
    /// development deployments.
    pub fn update_answer(env: Env, answer: i128) {
        env.storage().instance().set(&DataKey::Answer, &answer);
        env.storage().instance().set(&DataKey::UpdatedAt, &env.ledger().timestamp());
        env.storage().instance().extend_ttl(TTL_INSTANCE, TTL_INSTANCE);

        env.events().publish((symbol_short!("answer"),), answer);
    }

    pub fn latest_price(env: Env) -> PriceData {
        PriceData {
            price: env.storage().instance().get(&DataKey::Answer).unwrap(),
            decimals: Self::decimals(env),
        }
    }

    pub fn decimals(env: Env) -> u32 {
        env.storage().instance().get(&DataKey::Decimals).unwrap()
    }

    pub fn updated_at(env: Env) -> u64 {
        env.storage().instance().get(&DataKey::UpdatedAt).unwrap()
    }

    pub fn version(_env: Env) -> u32 {
        VERSION
    }

    pub fn description(env: Env) -> String {
        String::from_str(&env, "v0.8/tests/MockPriceFeed")
    }
}

#[cfg(test)]
mod test;
