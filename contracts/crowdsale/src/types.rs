pub use sale_common::sale::{BonusKind, DeliveryMode, SaleConfig};
use soroban_sdk::{contracttype, Address, Env, Vec};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[contracttype]
pub enum SaleState {
    Pending,
    Active,
    Ended,
}

/// Thresholds strictly descending, each paired with its bonus percent.
#[derive(Clone, Debug, PartialEq)]
#[contracttype]
pub struct SizeBonusTable {
    pub thresholds: Vec<u128>,
    pub percents: Vec<u32>,
}

/// Cutoff timestamps strictly ascending, each paired with the percent paid
/// before it.
#[derive(Clone, Debug, PartialEq)]
#[contracttype]
pub struct DateBonusTable {
    pub cutoffs: Vec<u64>,
    pub percents: Vec<u32>,
}

#[contracttype]
pub enum DataKey {
    Config,
    SoldTokens,
    WeiRaised,
    TransactionCount,
    SizeBonus,
    DateBonus,
    FutureBalance(Address),
    Delivered(Address),
    Listed(Address),
    BeneficiaryAt(u32),
    BeneficiaryCount,
}

pub fn get_ledger_timestamp(env: &Env) -> u64 {
    env.ledger().timestamp()
}
