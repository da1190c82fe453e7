//! Testing utilities shared by the crowdsale suites

pub mod assertions;
pub mod test_fixtures;

pub use assertions::*;
pub use test_fixtures::*;

/// Common test constants
pub mod constants {
    pub const START: u64 = 1_700_000_000;
    pub const DAY: u64 = 24 * 60 * 60;
    pub const WEEK: u64 = 7 * DAY;
    /// Decimals of both the payment asset and the sale token.
    pub const DECIMALS: u32 = 7;
    /// One whole unit at `DECIMALS`.
    pub const ONE: u128 = 10_000_000;
    pub const INITIAL_FUNDS: i128 = 10_000 * ONE as i128;
    pub const SUPPLY_CAP: u128 = 1_000_000 * ONE;
}
