#![no_std]

mod bonus;
mod contract;
mod storage;
mod types;


pub use contract::{CrowdsaleContract, CrowdsaleContractClient};
pub use types::{BonusKind, DateBonusTable, DeliveryMode, SaleConfig, SaleState, SizeBonusTable};
