use soroban_sdk::{Address, Env, Vec};

use crate::error::FundMeError;
use crate::storage_types::{PersistentKey, TTL_PERSISTENT};

pub fn extend_persistent(env: &Env, key: &PersistentKey) {
    env.storage()
        .persistent()
        .extend_ttl(key, TTL_PERSISTENT, TTL_PERSISTENT);
}

pub fn load_funders(env: &Env) -> Vec<Address> {
    env.storage()
        .persistent()
        .get(&PersistentKey::Funders)
        .unwrap_or_else(|| Vec::new(env))
}

pub fn amount_funded(env: &Env, funder: &Address) -> i128 {
    env.storage()
        .persistent()
        .get(&PersistentKey::AmountFunded(funder.clone()))
        .unwrap_or(0)
}

/// Add `amount` to the funder's running total, enlisting first-time funders.
/// Returns the new total.
pub fn record_contribution(env: &Env, funder: &Address, amount: i128) -> Result<i128, FundMeError> {
    let key = PersistentKey::AmountFunded(funder.clone());
    let previous: Option<i128> = env.storage().persistent().get(&key);

    if previous.is_none() {
        let mut funders = load_funders(env);
        funders.push_back(funder.clone());
        env.storage().persistent().set(&PersistentKey::Funders, &funders);
        extend_persistent(env, &PersistentKey::Funders);
    }

    let total = previous
        .unwrap_or(0)
        .checked_add(amount)
        .ok_or(FundMeError::ArithmeticOverflow)?;
    env.storage().persistent().set(&key, &total);
    extend_persistent(env, &key);

    Ok(total)
}

/// Reset every funder record, fetching the funder list from storage on each
/// iteration. Returns how many funders were cleared.
pub fn clear_funders(env: &Env) -> u32 {
    let mut index = 0;
    while index < load_funders(env).len() {
        if let Some(funder) = load_funders(env).get(index) {
            env.storage()
                .persistent()
                .remove(&PersistentKey::AmountFunded(funder));
        }
        index += 1;
    }
    env.storage().persistent().remove(&PersistentKey::Funders);
    index
}

/// Same result as [`clear_funders`], reading the funder list once.
pub fn clear_funders_cached(env: &Env) -> u32 {
    let funders = load_funders(env);
    for funder in funders.iter() {
        env.storage()
            .persistent()
            .remove(&PersistentKey::AmountFunded(funder));
    }
    env.storage().persistent().remove(&PersistentKey::Funders);
    funders.len()
}
