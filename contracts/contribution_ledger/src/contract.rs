use crate::storage::*;
use crate::types::*;
use sale_common::{
    math,
    roles::{self, Role},
    Error,
};
use soroban_sdk::{contract, contractimpl, contractmeta, symbol_short, Address, Env, Vec};

contractmeta!(
    key = "Description",
    val = "Shared record of every contribution made through authorized sales"
);

#[contract]
pub struct ContributionLedger;

#[contractimpl]
impl ContributionLedger {
    pub fn initialize(env: Env, owner: Address) -> Result<(), Error> {
        if roles::has_owner(&env) {
            return Err(Error::AlreadyInitialized);
        }
        owner.require_auth();
        roles::set_owner(&env, &owner);
        Ok(())
    }

    /// Adds to a contributor's running totals. The first write for an
    /// address appends it to the contributor list.
    pub fn add_balance(
        env: Env,
        operator: Address,
        contributor: Address,
        wei: u128,
        tokens: u128,
    ) -> Result<(), Error> {
        roles::require_role(&env, &operator, Role::Operator)?;

        let existing = get_record(&env, &contributor);
        let is_new = existing.is_none();
        let mut record = existing.unwrap_or_else(ContributorRecord::empty);
        record.wei_contributed = math::add(record.wei_contributed, wei)?;
        record.tokens_bought = math::add(record.tokens_bought, tokens)?;
        let total_wei = math::add(get_total_wei(&env), wei)?;
        let total_tokens = math::add(get_total_tokens(&env), tokens)?;

        if is_new {
            push_contributor(&env, &contributor);
        }
        set_record(&env, &contributor, &record);
        set_total_wei(&env, total_wei);
        set_total_tokens(&env, total_tokens);

        env.events()
            .publish((symbol_short!("contrib"), contributor), (wei, tokens));
        Ok(())
    }

    pub fn token_balance(env: Env, contributor: Address) -> u128 {
        get_record(&env, &contributor)
            .map(|r| r.tokens_bought)
            .unwrap_or(0)
    }

    pub fn wei_contribution(env: Env, contributor: Address) -> u128 {
        get_record(&env, &contributor)
            .map(|r| r.wei_contributed)
            .unwrap_or(0)
    }

    pub fn contribution(env: Env, contributor: Address) -> ContributorRecord {
        get_record(&env, &contributor).unwrap_or_else(ContributorRecord::empty)
    }

    pub fn contributors_len(env: Env) -> u32 {
        get_contributor_count(&env)
    }

    pub fn contributor_at(env: Env, index: u32) -> Result<Address, Error> {
        get_contributor_at(&env, index).ok_or(Error::OutOfRange)
    }

    /// Page of the contributor list, in first-contribution order.
    pub fn contributors(env: Env, start: u32, count: u32) -> Result<Vec<Address>, Error> {
        let end = start.checked_add(count).ok_or(Error::OutOfRange)?;
        if end > get_contributor_count(&env) {
            return Err(Error::OutOfRange);
        }
        let mut page = Vec::new(&env);
        for index in start..end {
            page.push_back(get_contributor_at(&env, index).ok_or(Error::OutOfRange)?);
        }
        Ok(page)
    }

    pub fn total_wei(env: Env) -> u128 {
        get_total_wei(&env)
    }

    pub fn total_tokens(env: Env) -> u128 {
        get_total_tokens(&env)
    }

    // Operators are the sales allowed to write.

    pub fn owner(env: Env) -> Result<Address, Error> {
        roles::get_owner(&env)
    }

    pub fn add_operator(env: Env, caller: Address, operator: Address) -> Result<(), Error> {
        roles::add_role(&env, &caller, Role::Operator, &operator)
    }

    pub fn add_operators(
        env: Env,
        caller: Address,
        operators: Vec<Address>,
    ) -> Result<(), Error> {
        roles::add_roles(&env, &caller, Role::Operator, &operators)
    }

    pub fn remove_operator(env: Env, caller: Address, operator: Address) -> Result<(), Error> {
        roles::remove_role(&env, &caller, Role::Operator, &operator)
    }

    pub fn is_operator(env: Env, operator: Address) -> bool {
        roles::has_role(&env, &operator, Role::Operator)
    }
}
