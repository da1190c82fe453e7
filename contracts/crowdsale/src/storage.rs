use crate::types::*;
use sale_common::Error;
use soroban_sdk::{Address, Env};

pub fn has_config(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Config)
}

pub fn get_config(env: &Env) -> Result<SaleConfig, Error> {
    env.storage()
        .instance()
        .get(&DataKey::Config)
        .ok_or(Error::NotInitialized)
}

pub fn set_config(env: &Env, config: &SaleConfig) {
    env.storage().instance().set(&DataKey::Config, config);
}

pub fn get_sold_tokens(env: &Env) -> u128 {
    env.storage()
        .instance()
        .get(&DataKey::SoldTokens)
        .unwrap_or(0)
}

pub fn set_sold_tokens(env: &Env, amount: u128) {
    env.storage().instance().set(&DataKey::SoldTokens, &amount);
}

pub fn get_wei_raised(env: &Env) -> u128 {
    env.storage()
        .instance()
        .get(&DataKey::WeiRaised)
        .unwrap_or(0)
}

pub fn set_wei_raised(env: &Env, amount: u128) {
    env.storage().instance().set(&DataKey::WeiRaised, &amount);
}

pub fn get_transaction_count(env: &Env) -> u64 {
    env.storage()
        .instance()
        .get(&DataKey::TransactionCount)
        .unwrap_or(0)
}

pub fn set_transaction_count(env: &Env, count: u64) {
    env.storage()
        .instance()
        .set(&DataKey::TransactionCount, &count);
}

pub fn get_size_bonus(env: &Env) -> Option<SizeBonusTable> {
    env.storage().instance().get(&DataKey::SizeBonus)
}

pub fn set_size_bonus(env: &Env, table: &SizeBonusTable) {
    env.storage().instance().set(&DataKey::SizeBonus, table);
}

pub fn get_date_bonus(env: &Env) -> Option<DateBonusTable> {
    env.storage().instance().get(&DataKey::DateBonus)
}

pub fn set_date_bonus(env: &Env, table: &DateBonusTable) {
    env.storage().instance().set(&DataKey::DateBonus, table);
}

pub fn get_future_balance(env: &Env, beneficiary: &Address) -> u128 {
    env.storage()
        .persistent()
        .get(&DataKey::FutureBalance(beneficiary.clone()))
        .unwrap_or(0)
}

pub fn set_future_balance(env: &Env, beneficiary: &Address, amount: u128) {
    env.storage()
        .persistent()
        .set(&DataKey::FutureBalance(beneficiary.clone()), &amount);
}

pub fn get_delivered(env: &Env, beneficiary: &Address) -> u128 {
    env.storage()
        .persistent()
        .get(&DataKey::Delivered(beneficiary.clone()))
        .unwrap_or(0)
}

pub fn set_delivered(env: &Env, beneficiary: &Address, amount: u128) {
    env.storage()
        .persistent()
        .set(&DataKey::Delivered(beneficiary.clone()), &amount);
}

pub fn get_beneficiary_count(env: &Env) -> u32 {
    env.storage()
        .instance()
        .get(&DataKey::BeneficiaryCount)
        .unwrap_or(0)
}

pub fn get_beneficiary_at(env: &Env, index: u32) -> Option<Address> {
    env.storage().persistent().get(&DataKey::BeneficiaryAt(index))
}

/// Appends on first sight only; returns whether the address was new.
pub fn list_beneficiary(env: &Env, beneficiary: &Address) -> bool {
    let listed = DataKey::Listed(beneficiary.clone());
    if env.storage().persistent().has(&listed) {
        return false;
    }
    let index = get_beneficiary_count(env);
    env.storage().persistent().set(&listed, &true);
    env.storage()
        .persistent()
        .set(&DataKey::BeneficiaryAt(index), beneficiary);
    env.storage()
        .instance()
        .set(&DataKey::BeneficiaryCount, &(index + 1));
    true
}
