#![no_std]

mod contract;
mod storage;
mod types;


pub use contract::{ContributionLedger, ContributionLedgerClient};
pub use types::ContributorRecord;
