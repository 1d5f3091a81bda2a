use soroban_sdk::{contracttype, Address};

// Storage keys for instance data
#[derive(Clone)]
#[contracttype]
pub enum DataKey {
    Owner,
    PriceFeed,
    NativeToken,
    NativeDecimals,
}

// Storage keys for persistent data
#[derive(Clone)]
#[contracttype]
pub enum PersistentKey {
    Funders,
    AmountFunded(Address),
}

/// Decimals of the unit of account (USD) used for the minimum check.
pub const USD_DECIMALS: u32 = 7;
/// Every contribution must be worth at least 50 USD.
pub const MINIMUM_USD: i128 = 50 * 10i128.pow(USD_DECIMALS);

pub const TTL_INSTANCE: u32 = 17280 * 30; // 30 days
pub const TTL_PERSISTENT: u32 = 17280 * 90; // 90 days
