use soroban_sdk::{contracttype, Address};

/// Where purchased tokens go at purchase time.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[contracttype]
pub enum DeliveryMode {
    /// Minted straight to the beneficiary.
    Direct,
    /// Minted to the contribution ledger's address. The ledger has no way to
    /// move them out, so the pool is a permanent record of what was sold.
    Pool,
    /// Minted to the sale and handed out by `multi_send` after the sale ends.
    Deferred,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[contracttype]
pub enum BonusKind {
    Flat,
    ContributionSize,
    PurchaseDate,
}

#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct SaleConfig {
    pub token: Address,
    pub ledger: Address,
    pub payment_token: Address, // asset the purchase value is paid in
    pub wallet: Address,        // receives every payment
    pub opening_time: u64,
    pub closing_time: u64,
    pub rate: u128, // token base units per payment unit
    pub token_cap: u128,
    pub minimum_contribution: u128,
    pub maximum_contribution: Option<u128>,
    pub delivery: DeliveryMode,
    pub bonus: BonusKind,
}
