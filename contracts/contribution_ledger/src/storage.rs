use crate::types::*;
use soroban_sdk::{Address, Env};

pub fn get_record(env: &Env, contributor: &Address) -> Option<ContributorRecord> {
    env.storage()
        .persistent()
        .get(&DataKey::Record(contributor.clone()))
}

pub fn set_record(env: &Env, contributor: &Address, record: &ContributorRecord) {
    env.storage()
        .persistent()
        .set(&DataKey::Record(contributor.clone()), record);
}

pub fn get_contributor_count(env: &Env) -> u32 {
    env.storage()
        .instance()
        .get(&DataKey::ContributorCount)
        .unwrap_or(0)
}

pub fn get_contributor_at(env: &Env, index: u32) -> Option<Address> {
    env.storage().persistent().get(&DataKey::ContributorAt(index))
}

pub fn push_contributor(env: &Env, contributor: &Address) {
    let index = get_contributor_count(env);
    env.storage()
        .persistent()
        .set(&DataKey::ContributorAt(index), contributor);
    env.storage()
        .instance()
        .set(&DataKey::ContributorCount, &(index + 1));
}

pub fn get_total_wei(env: &Env) -> u128 {
    env.storage()
        .instance()
        .get(&DataKey::TotalWei)
        .unwrap_or(0)
}

pub fn set_total_wei(env: &Env, amount: u128) {
    env.storage().instance().set(&DataKey::TotalWei, &amount);
}

pub fn get_total_tokens(env: &Env) -> u128 {
    env.storage()
        .instance()
        .get(&DataKey::TotalTokens)
        .unwrap_or(0)
}

pub fn set_total_tokens(env: &Env, amount: u128) {
    env.storage().instance().set(&DataKey::TotalTokens, &amount);
}
