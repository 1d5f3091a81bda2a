use soroban_sdk::{contractclient, contracttype, Address, Env};

use crate::error::FundMeError;
use crate::storage_types::USD_DECIMALS;

/// Price reported by a feed: `price` is scaled by `10^decimals`.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PriceData {
    pub price: i128,
    pub decimals: u32,
}

/// Interface every price feed must expose.
#[contractclient(name = "PriceFeedClient")]
pub trait PriceFeed {
    fn latest_price(env: Env) -> PriceData;
    fn version(env: Env) -> u32;
}

/// Query the feed for its latest price.
pub fn latest_price(env: &Env, feed: &Address) -> Result<PriceData, FundMeError> {
    match PriceFeedClient::new(env, feed).try_latest_price() {
        Ok(Ok(data)) if data.price > 0 => Ok(data),
        _ => Err(FundMeError::PriceFeedUnavailable),
    }
}

pub fn feed_version(env: &Env, feed: &Address) -> Result<u32, FundMeError> {
    match PriceFeedClient::new(env, feed).try_version() {
        Ok(Ok(version)) => Ok(version),
        _ => Err(FundMeError::PriceFeedUnavailable),
    }
}

/// Value of `amount` native base units in USD (`USD_DECIMALS` decimals).
pub fn convert(
    env: &Env,
    feed: &Address,
    amount: i128,
    native_decimals: u32,
) -> Result<i128, FundMeError> {
    let data = latest_price(env, feed)?;
    to_usd(amount, &data, native_decimals)
}

/// Apply the price to `amount`, leaving the value in native precision, then
/// rescale it to USD precision. Downscaling truncates toward zero.
pub fn to_usd(amount: i128, data: &PriceData, native_decimals: u32) -> Result<i128, FundMeError> {
    let value = mul_div(amount, data.price, pow10(data.decimals)?)?;
    rescale(value, native_decimals, USD_DECIMALS)
}

/// `amount * price / scale` without forming the full product when `amount`
/// is the large factor.
fn mul_div(amount: i128, price: i128, scale: i128) -> Result<i128, FundMeError> {
    let whole = (amount / scale)
        .checked_mul(price)
        .ok_or(FundMeError::ArithmeticOverflow)?;
    let fraction = (amount % scale)
        .checked_mul(price)
        .ok_or(FundMeError::ArithmeticOverflow)?
        / scale;
    whole
        .checked_add(fraction)
        .ok_or(FundMeError::ArithmeticOverflow)
}

fn rescale(value: i128, from: u32, to: u32) -> Result<i128, FundMeError> {
    if to >= from {
        value
            .checked_mul(pow10(to - from)?)
            .ok_or(FundMeError::ArithmeticOverflow)
    } else {
        Ok(value / pow10(from - to)?)
    }
}

fn pow10(exp: u32) -> Result<i128, FundMeError> {
    10i128.checked_pow(exp).ok_or(FundMeError::ArithmeticOverflow)
}
