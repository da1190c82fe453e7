#![no_std]

use sale_common::{interfaces::MintableTokenClient, math, Error};
use soroban_sdk::{contract, contractimpl, contracttype, symbol_short, Address, Env, Vec};

#[contracttype]
pub enum DataKey {
    Funder,
    Vault,
    Beneficiaries,
    Reserved(Address), // beneficiary -> amount owed at release
    Received(Address),
    Released,
}

#[derive(Clone, Debug, PartialEq)]
#[contracttype]
pub struct Vault {
    pub token: Address,
    pub release_time: u64,
    pub locked_tokens: u128,
}

fn get_vault(env: &Env) -> Result<Vault, Error> {
    env.storage()
        .instance()
        .get(&DataKey::Vault)
        .ok_or(Error::NotInitialized)
}

fn get_beneficiaries(env: &Env) -> Vec<Address> {
    env.storage()
        .instance()
        .get(&DataKey::Beneficiaries)
        .unwrap_or_else(|| Vec::new(env))
}

fn amount_of(env: &Env, key: &DataKey) -> u128 {
    env.storage().persistent().get(key).unwrap_or(0)
}

/// Holds tokens for a fixed group of beneficiaries until a release time.
#[contract]
pub struct Timelock;

#[contractimpl]
impl Timelock {
    /// `funder` sets up the vault and is expected to send it the tokens.
    pub fn initialize(
        env: Env,
        funder: Address,
        token: Address,
        beneficiaries: Vec<Address>,
        amounts: Vec<u128>,
        release_time: u64,
    ) -> Result<(), Error> {
        if env.storage().instance().has(&DataKey::Vault) {
            return Err(Error::AlreadyInitialized);
        }
        funder.require_auth();
        if beneficiaries.is_empty() || beneficiaries.len() != amounts.len() {
            return Err(Error::LengthMismatch);
        }
        if release_time <= env.ledger().timestamp() || token == env.current_contract_address() {
            return Err(Error::InvalidConfiguration);
        }

        let mut locked_tokens = 0u128;
        for (beneficiary, amount) in beneficiaries.iter().zip(amounts.iter()) {
            let key = DataKey::Reserved(beneficiary);
            if amount == 0 || env.storage().persistent().has(&key) {
                return Err(Error::InvalidConfiguration);
            }
            locked_tokens = math::add(locked_tokens, amount)?;
            env.storage().persistent().set(&key, &amount);
        }

        let vault = Vault {
            token,
            release_time,
            locked_tokens,
        };
        env.storage().instance().set(&DataKey::Funder, &funder);
        env.storage().instance().set(&DataKey::Vault, &vault);
        env.storage()
            .instance()
            .set(&DataKey::Beneficiaries, &beneficiaries);
        env.storage().instance().set(&DataKey::Released, &false);
        Ok(())
    }

    /// Pays every beneficiary its reserved amount. Callable by anyone once
    /// the release time has passed and the vault is fully funded.
    pub fn release(env: Env) -> Result<u128, Error> {
        let vault = get_vault(&env)?;
        if Self::released(env.clone()) {
            return Err(Error::AlreadyReleased);
        }
        if env.ledger().timestamp() < vault.release_time {
            return Err(Error::NotReady);
        }

        let this = env.current_contract_address();
        let token = MintableTokenClient::new(&env, &vault.token);
        if token.balance(&this) < vault.locked_tokens {
            return Err(Error::InsufficientBalance);
        }

        env.storage().instance().set(&DataKey::Released, &true);
        for beneficiary in get_beneficiaries(&env).iter() {
            let amount = amount_of(&env, &DataKey::Reserved(beneficiary.clone()));
            env.storage()
                .persistent()
                .set(&DataKey::Received(beneficiary.clone()), &amount);
            token.transfer(&this, &beneficiary, &amount);
            env.events()
                .publish((symbol_short!("released"), beneficiary), amount);
        }
        Ok(vault.locked_tokens)
    }

    pub fn funder(env: Env) -> Result<Address, Error> {
        env.storage()
            .instance()
            .get(&DataKey::Funder)
            .ok_or(Error::NotInitialized)
    }

    pub fn token(env: Env) -> Result<Address, Error> {
        Ok(get_vault(&env)?.token)
    }

    pub fn release_time(env: Env) -> Result<u64, Error> {
        Ok(get_vault(&env)?.release_time)
    }

    pub fn locked_tokens(env: Env) -> Result<u128, Error> {
        Ok(get_vault(&env)?.locked_tokens)
    }

    pub fn reserved_tokens(env: Env, beneficiary: Address) -> u128 {
        amount_of(&env, &DataKey::Reserved(beneficiary))
    }

    pub fn received_tokens(env: Env, beneficiary: Address) -> u128 {
        amount_of(&env, &DataKey::Received(beneficiary))
    }

    pub fn beneficiaries(env: Env) -> Vec<Address> {
        get_beneficiaries(&env)
    }

    pub fn released(env: Env) -> bool {
        env.storage()
            .instance()
            .get(&DataKey::Released)
            .unwrap_or(false)
    }
}
