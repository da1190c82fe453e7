#![no_std]
#![allow(clippy::too_many_arguments)]

//! Starts batches of sales that share one token, one contribution ledger
//! and one closing time. Each sale is deployed from uploaded sale code,
//! opens the moment it is started and is owned by the generator's owner.

use sale_common::{
    interfaces::{LedgerWriterClient, MintableTokenClient, SaleSetupClient},
    roles,
    sale::{BonusKind, DeliveryMode, SaleConfig},
    Error,
};
use soroban_sdk::{
    contract, contractimpl, contractmeta, contracttype, symbol_short, Address, BytesN, Env, Vec,
};

contractmeta!(
    key = "Description",
    val = "Deploys sales sharing one token and contribution ledger"
);

#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct GeneratorConfig {
    pub closing_time: u64,
    pub rate: u128,
    pub wallet: Address,
    pub token_cap: u128, // per sale
    pub token: Address,
    pub ledger: Address,
    pub payment_token: Address,
    pub sale_wasm_hash: BytesN<32>,
}

#[contracttype]
pub enum DataKey {
    Config,
    SaleCount,
    SaleAt(u32),
}

fn get_config(env: &Env) -> Result<GeneratorConfig, Error> {
    env.storage()
        .instance()
        .get(&DataKey::Config)
        .ok_or(Error::NotInitialized)
}

fn get_sale_count(env: &Env) -> u32 {
    env.storage()
        .instance()
        .get(&DataKey::SaleCount)
        .unwrap_or(0)
}

fn sale_salt(env: &Env, index: u32) -> BytesN<32> {
    let mut salt = [0u8; 32];
    salt[28..].copy_from_slice(&index.to_be_bytes());
    BytesN::from_array(env, &salt)
}

#[contract]
pub struct CrowdGenerator;

#[contractimpl]
impl CrowdGenerator {
    pub fn initialize(
        env: Env,
        owner: Address,
        closing_time: u64,
        rate: u128,
        wallet: Address,
        token_cap: u128,
        token: Address,
        ledger: Address,
        payment_token: Address,
        sale_wasm_hash: BytesN<32>,
    ) -> Result<(), Error> {
        if roles::has_owner(&env) {
            return Err(Error::AlreadyInitialized);
        }
        owner.require_auth();
        if rate == 0 || token_cap == 0 || closing_time <= env.ledger().timestamp() {
            return Err(Error::InvalidConfiguration);
        }
        let this = env.current_contract_address();
        if wallet == this || token == this || ledger == this || token == ledger {
            return Err(Error::InvalidConfiguration);
        }

        MintableTokenClient::new(&env, &token).decimals();
        LedgerWriterClient::new(&env, &ledger).contributors_len();

        let config = GeneratorConfig {
            closing_time,
            rate,
            wallet,
            token_cap,
            token,
            ledger,
            payment_token,
            sale_wasm_hash,
        };
        env.storage().instance().set(&DataKey::Config, &config);
        env.storage().instance().set(&DataKey::SaleCount, &0u32);
        roles::set_owner(&env, &owner);

        env.events().publish(
            (symbol_short!("gen_init"),),
            (config.token, config.ledger, config.closing_time),
        );
        Ok(())
    }

    /// Deploys and initializes `count` sales, open from now until the
    /// closing time. The sales still need minting rights on the token and
    /// operator rights on the ledger before they can sell; their addresses
    /// are known in advance through `crowdsale_address`.
    pub fn start_crowdsales(
        env: Env,
        caller: Address,
        count: u32,
    ) -> Result<Vec<Address>, Error> {
        roles::require_owner(&env, &caller)?;
        let config = get_config(&env)?;
        if count == 0 {
            return Err(Error::InvalidAmount);
        }
        let now = env.ledger().timestamp();
        if now >= config.closing_time {
            return Err(Error::TooLate);
        }

        let first = get_sale_count(&env);
        let end = first.checked_add(count).ok_or(Error::Overflow)?;
        let mut started = Vec::new(&env);
        for index in first..end {
            let sale = env
                .deployer()
                .with_current_contract(sale_salt(&env, index))
                .deploy(config.sale_wasm_hash.clone());

            SaleSetupClient::new(&env, &sale).initialize(
                &caller,
                &SaleConfig {
                    token: config.token.clone(),
                    ledger: config.ledger.clone(),
                    payment_token: config.payment_token.clone(),
                    wallet: config.wallet.clone(),
                    opening_time: now,
                    closing_time: config.closing_time,
                    rate: config.rate,
                    token_cap: config.token_cap,
                    minimum_contribution: 0,
                    maximum_contribution: None,
                    delivery: DeliveryMode::Direct,
                    bonus: BonusKind::Flat,
                },
            );

            env.storage()
                .persistent()
                .set(&DataKey::SaleAt(index), &sale);
            env.events()
                .publish((symbol_short!("sale_new"), index), sale.clone());
            started.push_back(sale);
        }
        env.storage().instance().set(&DataKey::SaleCount, &end);
        Ok(started)
    }

    pub fn crowdsales_len(env: Env) -> u32 {
        get_sale_count(&env)
    }

    pub fn crowdsale_at(env: Env, index: u32) -> Result<Address, Error> {
        env.storage()
            .persistent()
            .get(&DataKey::SaleAt(index))
            .ok_or(Error::OutOfRange)
    }

    /// Address the `index`-th sale is (or will be) deployed at.
    pub fn crowdsale_address(env: Env, index: u32) -> Address {
        env.deployer()
            .with_current_contract(sale_salt(&env, index))
            .deployed_address()
    }

    pub fn get_config(env: Env) -> Result<GeneratorConfig, Error> {
        get_config(&env)
    }

    pub fn closing_time(env: Env) -> Result<u64, Error> {
        Ok(get_config(&env)?.closing_time)
    }

    pub fn rate(env: Env) -> Result<u128, Error> {
        Ok(get_config(&env)?.rate)
    }

    pub fn wallet(env: Env) -> Result<Address, Error> {
        Ok(get_config(&env)?.wallet)
    }

    pub fn token_cap(env: Env) -> Result<u128, Error> {
        Ok(get_config(&env)?.token_cap)
    }

    pub fn token(env: Env) -> Result<Address, Error> {
        Ok(get_config(&env)?.token)
    }

    pub fn ledger(env: Env) -> Result<Address, Error> {
        Ok(get_config(&env)?.ledger)
    }

    pub fn owner(env: Env) -> Result<Address, Error> {
        roles::get_owner(&env)
    }
}
