use soroban_sdk::{contracttype, Address};

/// Cumulative position of one contributor across every sale writing here.
#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct ContributorRecord {
    pub wei_contributed: u128,
    pub tokens_bought: u128,
}

impl ContributorRecord {
    pub fn empty() -> Self {
        ContributorRecord {
            wei_contributed: 0,
            tokens_bought: 0,
        }
    }
}

#[contracttype]
pub enum DataKey {
    Record(Address),
    ContributorAt(u32),
    ContributorCount,
    TotalWei,
    TotalTokens,
}
