use soroban_sdk::contracttype;

#[derive(Clone)]
#[contracttype]
pub enum DataKey {
    Decimals,
    Answer,
    UpdatedAt,
}

/// Field names match what `PriceFeedClient` consumers decode.
#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct PriceData {
    pub price: i128,
    pub decimals: u32,
}

/// Interface revision reported by `version`.
pub const VERSION: u32 = 0;
pub const TTL_INSTANCE: u32 = 17280 * 30; // 30 days
