use crate::sale::SaleConfig;
use soroban_sdk::{contractclient, Address, Env};

/// What a sale or distributor needs from the token it hands out.
#[contractclient(name = "MintableTokenClient")]
pub trait MintableToken {
    fn mint(env: Env, minter: Address, to: Address, amount: u128);
    fn finish_minting(env: Env, caller: Address);
    fn minting_finished(env: Env) -> bool;
    fn balance(env: Env, id: Address) -> u128;
    fn decimals(env: Env) -> u32;
    fn transfer(env: Env, from: Address, to: Address, amount: u128);
}

/// Write side of the contribution ledger, as seen by a sale.
#[contractclient(name = "LedgerWriterClient")]
pub trait LedgerWriter {
    fn add_balance(env: Env, operator: Address, contributor: Address, wei: u128, tokens: u128);
    fn contributors_len(env: Env) -> u32;
}

/// Setup entry point of a sale, used by contracts that deploy sales.
#[contractclient(name = "SaleSetupClient")]
pub trait SaleSetup {
    fn initialize(env: Env, owner: Address, config: SaleConfig);
}
