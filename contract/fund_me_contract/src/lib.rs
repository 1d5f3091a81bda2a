#![no_std]

mod error;
mod events;
mod funders;
mod price_converter;
mod storage_types;


use soroban_sdk::{contract, contractimpl, log, token, Address, Env};
use storage_types::*;

pub use error::FundMeError;
pub use price_converter::{PriceData, PriceFeed, PriceFeedClient};
pub use storage_types::{MINIMUM_USD, USD_DECIMALS};

#[contract]
pub struct FundMe;

#[contractimpl]
impl FundMe {
    /// Deploy the contract. `owner` is the deploying account and the only one
    /// allowed to withdraw; `native_token` is the asset contributions are made in.
    pub fn __constructor(env: Env, owner: Address, price_feed: Address, native_token: Address) {
        owner.require_auth();

        let native_decimals = token::TokenClient::new(&env, &native_token).decimals();

        env.storage().instance().set(&DataKey::Owner, &owner);
        env.storage().instance().set(&DataKey::PriceFeed, &price_feed);
        env.storage().instance().set(&DataKey::NativeToken, &native_token);
        env.storage().instance().set(&DataKey::NativeDecimals, &native_decimals);

        extend_instance(&env);
    }

    /// Contribute `amount` of the native token. The contribution must be worth
    /// at least `MINIMUM_USD` at the feed's current price. Returns the
    /// funder's cumulative contribution.
    pub fn contribute(env: Env, funder: Address, amount: i128) -> Result<i128, FundMeError> {
        funder.require_auth();
        accept_contribution(&env, &funder, amount)
    }

    /// Plain value send. Held to the same minimum as `contribute`.
    pub fn receive(env: Env, from: Address, amount: i128) -> Result<i128, FundMeError> {
        from.require_auth();
        accept_contribution(&env, &from, amount)
    }

    /// Send the whole balance to the owner and forget every funder.
    /// Returns the amount transferred.
    pub fn withdraw(env: Env, caller: Address) -> Result<i128, FundMeError> {
        let owner = require_owner(&env, &caller)?;
        pay_out(&env, &owner, funders::clear_funders)
    }

    /// Same as `withdraw`, but walks a single in-memory copy of the funder list.
    pub fn cheaper_withdraw(env: Env, caller: Address) -> Result<i128, FundMeError> {
        let owner = require_owner(&env, &caller)?;
        pay_out(&env, &owner, funders::clear_funders_cached)
    }

    pub fn get_owner(env: Env) -> Address {
        get_owner(&env)
    }

    pub fn get_price_feed(env: Env) -> Address {
        get_price_feed(&env)
    }

    pub fn get_native_token(env: Env) -> Address {
        get_native_token(&env)
    }

    pub fn get_funder(env: Env, index: u32) -> Result<Address, FundMeError> {
        funders::load_funders(&env)
            .get(index)
            .ok_or(FundMeError::IndexOutOfRange)
    }

    pub fn get_funders_count(env: Env) -> u32 {
        funders::load_funders(&env).len()
    }

    pub fn get_address_to_amount_funded(env: Env, funder: Address) -> i128 {
        funders::amount_funded(&env, &funder)
    }

    /// Native token currently held by the contract.
    pub fn get_balance(env: Env) -> i128 {
        token::TokenClient::new(&env, &get_native_token(&env)).balance(&env.current_contract_address())
    }

    /// USD value of `amount` at the feed's current price.
    pub fn get_conversion_rate(env: Env, amount: i128) -> Result<i128, FundMeError> {
        price_converter::convert(&env, &get_price_feed(&env), amount, get_native_decimals(&env))
    }

    pub fn get_minimum_usd(_env: Env) -> i128 {
        MINIMUM_USD
    }

    /// Interface revision of the price feed in use.
    pub fn get_version(env: Env) -> Result<u32, FundMeError> {
        price_converter::feed_version(&env, &get_price_feed(&env))
    }
}

fn accept_contribution(env: &Env, funder: &Address, amount: i128) -> Result<i128, FundMeError> {
    if amount <= 0 {
        return Err(FundMeError::InsufficientContribution);
    }

    let value = price_converter::convert(env, &get_price_feed(env), amount, get_native_decimals(env))?;
    if value < MINIMUM_USD {
        return Err(FundMeError::InsufficientContribution);
    }

    let total_funded = funders::record_contribution(env, funder, amount)?;

    let token_client = token::TokenClient::new(env, &get_native_token(env));
    let moved = token_client.try_transfer(funder, &env.current_contract_address(), &amount);
    if !matches!(moved, Ok(Ok(()))) {
        return Err(FundMeError::TransferFailed);
    }

    extend_instance(env);

    log!(env, "contribution accepted", funder.clone(), amount, value);
    events::emit_funded(
        env,
        events::FundedEvent {
            funder: funder.clone(),
            amount,
            total_funded,
        },
    );

    Ok(total_funded)
}

/// Balance is read first and funder records are cleared before the transfer
/// is issued; a failed transfer aborts the invocation and rolls both back.
fn pay_out(env: &Env, owner: &Address, clear: fn(&Env) -> u32) -> Result<i128, FundMeError> {
    let token_client = token::TokenClient::new(env, &get_native_token(env));
    let balance = token_client.balance(&env.current_contract_address());

    let funders_cleared = clear(env);

    if balance > 0 {
        let moved = token_client.try_transfer(&env.current_contract_address(), owner, &balance);
        if !matches!(moved, Ok(Ok(()))) {
            return Err(FundMeError::TransferFailed);
        }
    }

    extend_instance(env);

    log!(env, "withdrawn", balance, funders_cleared);
    events::emit_withdrawn(
        env,
        events::WithdrawnEvent {
            owner: owner.clone(),
            amount: balance,
            funders_cleared,
        },
    );

    Ok(balance)
}

fn require_owner(env: &Env, caller: &Address) -> Result<Address, FundMeError> {
    caller.require_auth();
    let owner = get_owner(env);
    if *caller != owner {
        return Err(FundMeError::NotOwner);
    }
    Ok(owner)
}

// Helper functions
fn extend_instance(env: &Env) {
    env.storage().instance().extend_ttl(TTL_INSTANCE, TTL_INSTANCE);
}

fn get_owner(env: &Env) -> Address {
    env.storage().instance().get(&DataKey::Owner).unwrap()
}

fn get_price_feed(env: &Env) -> Address {
    env.storage().instance().get(&DataKey::PriceFeed).unwrap()
}

fn get_native_token(env: &Env) -> Address {
    env.storage().instance().get(&DataKey::NativeToken).unwrap()
}

fn get_native_decimals(env: &Env) -> u32 {
    env.storage().instance().get(&DataKey::NativeDecimals).unwrap()
}
