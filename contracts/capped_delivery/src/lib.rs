#![no_std]

//! Owner-driven token distribution under a hard cap, for bounty and
//! advisor allocations. Amounts are given in whole tokens and scaled by the
//! token's decimals.

use sale_common::{interfaces::MintableTokenClient, math, roles, Error};
use soroban_sdk::{
    contract, contractimpl, contractmeta, contracttype, symbol_short, Address, Env, Vec,
};

contractmeta!(
    key = "Description",
    val = "Capped multi-recipient token distributor"
);

/// How tokens reach recipients.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[contracttype]
pub enum DistributionSource {
    /// Minted on demand; only while the token still mints.
    Mint,
    /// Moved from this contract's own balance once minting is over.
    Transfer,
}

#[derive(Clone)]
#[contracttype]
pub struct DistributorConfig {
    pub token: Address,
    pub cap: u128,
    pub decimals: u32,
    pub source: DistributionSource,
    pub allow_multiple_send: bool,
}

#[contracttype]
pub enum DataKey {
    Config,
    Distributed,
    Received(Address),
}

fn get_config(env: &Env) -> Result<DistributorConfig, Error> {
    env.storage()
        .instance()
        .get(&DataKey::Config)
        .ok_or(Error::NotInitialized)
}

fn get_distributed(env: &Env) -> u128 {
    env.storage()
        .instance()
        .get(&DataKey::Distributed)
        .unwrap_or(0)
}

fn get_received(env: &Env, receiver: &Address) -> u128 {
    env.storage()
        .persistent()
        .get(&DataKey::Received(receiver.clone()))
        .unwrap_or(0)
}

#[contract]
pub struct CappedDelivery;

#[contractimpl]
impl CappedDelivery {
    /// `cap` is in whole tokens.
    pub fn initialize(
        env: Env,
        owner: Address,
        token: Address,
        cap: u128,
        source: DistributionSource,
        allow_multiple_send: bool,
    ) -> Result<(), Error> {
        if roles::has_owner(&env) {
            return Err(Error::AlreadyInitialized);
        }
        owner.require_auth();
        if cap == 0 || token == env.current_contract_address() {
            return Err(Error::InvalidConfiguration);
        }

        let decimals = MintableTokenClient::new(&env, &token).decimals();
        let config = DistributorConfig {
            token,
            cap: math::scale_by_decimals(cap, decimals)?,
            decimals,
            source,
            allow_multiple_send,
        };
        env.storage().instance().set(&DataKey::Config, &config);
        env.storage().instance().set(&DataKey::Distributed, &0u128);
        roles::set_owner(&env, &owner);
        Ok(())
    }

    /// Sends `amounts[i]` whole tokens to `addresses[i]`. Zero amounts are
    /// skipped, and so is any address that already received tokens when
    /// multiple sends are off. Returns the base units sent by this call.
    pub fn multi_send(
        env: Env,
        caller: Address,
        addresses: Vec<Address>,
        amounts: Vec<u128>,
    ) -> Result<u128, Error> {
        roles::require_owner(&env, &caller)?;
        if addresses.is_empty() || addresses.len() != amounts.len() {
            return Err(Error::LengthMismatch);
        }

        let config = get_config(&env)?;
        let token = MintableTokenClient::new(&env, &config.token);
        match config.source {
            DistributionSource::Mint if token.minting_finished() => {
                return Err(Error::MintingFinished)
            }
            DistributionSource::Transfer if !token.minting_finished() => {
                return Err(Error::NotReady)
            }
            _ => {}
        }

        let this = env.current_contract_address();
        let mut distributed = get_distributed(&env);
        let mut sent = 0u128;
        for (receiver, amount) in addresses.iter().zip(amounts.iter()) {
            if amount == 0 {
                continue;
            }
            let received = get_received(&env, &receiver);
            if received > 0 && !config.allow_multiple_send {
                continue;
            }

            let value = math::scale_by_decimals(amount, config.decimals)?;
            distributed = math::add(distributed, value)?;
            if distributed > config.cap {
                return Err(Error::CapExceeded);
            }
            sent = math::add(sent, value)?;

            env.storage().persistent().set(
                &DataKey::Received(receiver.clone()),
                &math::add(received, value)?,
            );
            match config.source {
                DistributionSource::Mint => token.mint(&this, &receiver, &value),
                DistributionSource::Transfer => token.transfer(&this, &receiver, &value),
            }
            env.events()
                .publish((symbol_short!("sent"), receiver), value);
        }

        env.storage()
            .instance()
            .set(&DataKey::Distributed, &distributed);
        Ok(sent)
    }

    pub fn token(env: Env) -> Result<Address, Error> {
        Ok(get_config(&env)?.token)
    }

    pub fn cap(env: Env) -> Result<u128, Error> {
        Ok(get_config(&env)?.cap)
    }

    pub fn source(env: Env) -> Result<DistributionSource, Error> {
        Ok(get_config(&env)?.source)
    }

    pub fn allow_multiple_send(env: Env) -> Result<bool, Error> {
        Ok(get_config(&env)?.allow_multiple_send)
    }

    pub fn received_tokens(env: Env, receiver: Address) -> u128 {
        get_received(&env, &receiver)
    }

    pub fn distributed_tokens(env: Env) -> u128 {
        get_distributed(&env)
    }

    pub fn remaining_tokens(env: Env) -> Result<u128, Error> {
        Ok(get_config(&env)?.cap.saturating_sub(get_distributed(&env)))
    }

    pub fn owner(env: Env) -> Result<Address, Error> {
        roles::get_owner(&env)
    }
}
