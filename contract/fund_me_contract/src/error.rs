use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum FundMeError {
    /// Caller is not the owner of the contract.
    NotOwner = 1,
    /// Contribution is worth less than `MINIMUM_USD`.
    InsufficientContribution = 2,
    IndexOutOfRange = 3,
    /// The native token refused to move funds.
    TransferFailed = 4,
    /// The price feed could not be queried or reported a non-positive price.
    PriceFeedUnavailable = 5,
    ArithmeticOverflow = 6,
}
