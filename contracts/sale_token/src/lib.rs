#![no_std]

use sale_common::{
    math,
    roles::{self, Role},
    Error,
};
use soroban_sdk::{
    contract, contractimpl, contractmeta, contracttype, symbol_short, Address, Env, String, Vec,
};

contractmeta!(
    key = "Description",
    val = "Capped mintable sale token with operator-only transfers until minting ends"
);

#[derive(Clone)]
#[contracttype]
pub struct TokenMetadata {
    pub decimal: u32,
    pub name: String,
    pub symbol: String,
}

#[contracttype]
pub enum DataKey {
    Metadata,
    Cap,
    TotalSupply,
    LockedUntil,
    MintingFinished,
    Balance(Address),
    Locked(Address),
}

fn get_metadata(env: &Env) -> Result<TokenMetadata, Error> {
    env.storage()
        .instance()
        .get(&DataKey::Metadata)
        .ok_or(Error::NotInitialized)
}

fn get_total_supply(env: &Env) -> u128 {
    env.storage()
        .instance()
        .get(&DataKey::TotalSupply)
        .unwrap_or(0)
}

fn get_cap(env: &Env) -> u128 {
    env.storage().instance().get(&DataKey::Cap).unwrap_or(0)
}

fn get_locked_until(env: &Env) -> u64 {
    env.storage()
        .instance()
        .get(&DataKey::LockedUntil)
        .unwrap_or(0)
}

fn is_minting_finished(env: &Env) -> bool {
    env.storage()
        .instance()
        .get(&DataKey::MintingFinished)
        .unwrap_or(false)
}

fn balance_of(env: &Env, id: &Address) -> u128 {
    env.storage()
        .persistent()
        .get(&DataKey::Balance(id.clone()))
        .unwrap_or(0)
}

fn set_balance(env: &Env, id: &Address, amount: u128) {
    env.storage()
        .persistent()
        .set(&DataKey::Balance(id.clone()), &amount);
}

// Locked amounts stop counting once the lock expires; the stored value is
// left in place.
fn locked_of(env: &Env, id: &Address) -> u128 {
    if env.ledger().timestamp() >= get_locked_until(env) {
        return 0;
    }
    env.storage()
        .persistent()
        .get(&DataKey::Locked(id.clone()))
        .unwrap_or(0)
}

fn stored_locked_of(env: &Env, id: &Address) -> u128 {
    env.storage()
        .persistent()
        .get(&DataKey::Locked(id.clone()))
        .unwrap_or(0)
}

fn issue(env: &Env, minter: &Address, to: &Address, amount: u128) -> Result<(), Error> {
    roles::require_role(env, minter, Role::Minter)?;
    if is_minting_finished(env) {
        return Err(Error::MintingFinished);
    }
    if amount == 0 {
        return Err(Error::InvalidAmount);
    }
    let supply = math::add(get_total_supply(env), amount)?;
    if supply > get_cap(env) {
        return Err(Error::CapExceeded);
    }
    let balance = math::add(balance_of(env, to), amount)?;

    set_balance(env, to, balance);
    env.storage().instance().set(&DataKey::TotalSupply, &supply);
    Ok(())
}

#[contract]
pub struct SaleToken;

#[contractimpl]
impl SaleToken {
    pub fn initialize(
        env: Env,
        owner: Address,
        name: String,
        symbol: String,
        decimal: u32,
        cap: u128,
        locked_until: u64,
    ) -> Result<(), Error> {
        if roles::has_owner(&env) {
            return Err(Error::AlreadyInitialized);
        }
        owner.require_auth();
        // 10^38 is the largest power of ten a u128 holds.
        if cap == 0 || decimal > 38 {
            return Err(Error::InvalidConfiguration);
        }

        let metadata = TokenMetadata {
            decimal,
            name,
            symbol,
        };
        env.storage().instance().set(&DataKey::Metadata, &metadata);
        env.storage().instance().set(&DataKey::Cap, &cap);
        env.storage().instance().set(&DataKey::TotalSupply, &0u128);
        env.storage()
            .instance()
            .set(&DataKey::LockedUntil, &locked_until);
        env.storage()
            .instance()
            .set(&DataKey::MintingFinished, &false);

        roles::set_owner(&env, &owner);
        roles::grant(&env, Role::Minter, &owner);
        roles::grant(&env, Role::Operator, &owner);
        Ok(())
    }

    pub fn mint(env: Env, minter: Address, to: Address, amount: u128) -> Result<(), Error> {
        issue(&env, &minter, &to, amount)?;
        env.events().publish((symbol_short!("mint"), to), amount);
        Ok(())
    }

    /// Mints and marks the same amount as locked until `locked_until`.
    pub fn mint_and_lock(
        env: Env,
        minter: Address,
        to: Address,
        amount: u128,
    ) -> Result<(), Error> {
        issue(&env, &minter, &to, amount)?;
        let locked = math::add(stored_locked_of(&env, &to), amount)?;
        env.storage()
            .persistent()
            .set(&DataKey::Locked(to.clone()), &locked);
        env.events().publish((symbol_short!("mint_lock"), to), amount);
        Ok(())
    }

    pub fn finish_minting(env: Env, caller: Address) -> Result<(), Error> {
        roles::require_owner(&env, &caller)?;
        if is_minting_finished(&env) {
            return Err(Error::MintingFinished);
        }
        env.storage()
            .instance()
            .set(&DataKey::MintingFinished, &true);
        env.events().publish((symbol_short!("mint_fin"),), ());
        Ok(())
    }

    pub fn transfer(env: Env, from: Address, to: Address, amount: u128) -> Result<(), Error> {
        if !roles::has_owner(&env) {
            return Err(Error::NotInitialized);
        }
        from.require_auth();
        if !is_minting_finished(&env) && !roles::has_role(&env, &from, Role::Operator) {
            return Err(Error::TransferRestricted);
        }

        let balance = balance_of(&env, &from);
        if amount > balance {
            return Err(Error::InsufficientBalance);
        }
        let spendable = math::sub(balance, locked_of(&env, &from))?;
        if amount > spendable {
            return Err(Error::TokensLocked);
        }

        set_balance(&env, &from, balance - amount);
        let received = math::add(balance_of(&env, &to), amount)?;
        set_balance(&env, &to, received);

        env.events()
            .publish((symbol_short!("transfer"), from, to), amount);
        Ok(())
    }

    // Role administration

    pub fn add_minter(env: Env, caller: Address, minter: Address) -> Result<(), Error> {
        roles::add_role(&env, &caller, Role::Minter, &minter)
    }

    pub fn add_minters(env: Env, caller: Address, minters: Vec<Address>) -> Result<(), Error> {
        roles::add_roles(&env, &caller, Role::Minter, &minters)
    }

    pub fn remove_minter(env: Env, caller: Address, minter: Address) -> Result<(), Error> {
        roles::remove_role(&env, &caller, Role::Minter, &minter)
    }

    pub fn add_operator(env: Env, caller: Address, operator: Address) -> Result<(), Error> {
        if is_minting_finished(&env) {
            return Err(Error::MintingFinished);
        }
        roles::add_role(&env, &caller, Role::Operator, &operator)
    }

    pub fn add_operators(
        env: Env,
        caller: Address,
        operators: Vec<Address>,
    ) -> Result<(), Error> {
        if is_minting_finished(&env) {
            return Err(Error::MintingFinished);
        }
        roles::add_roles(&env, &caller, Role::Operator, &operators)
    }

    pub fn remove_operator(env: Env, caller: Address, operator: Address) -> Result<(), Error> {
        roles::remove_role(&env, &caller, Role::Operator, &operator)
    }

    // Views

    pub fn name(env: Env) -> Result<String, Error> {
        Ok(get_metadata(&env)?.name)
    }

    pub fn symbol(env: Env) -> Result<String, Error> {
        Ok(get_metadata(&env)?.symbol)
    }

    pub fn decimals(env: Env) -> Result<u32, Error> {
        Ok(get_metadata(&env)?.decimal)
    }

    pub fn cap(env: Env) -> u128 {
        get_cap(&env)
    }

    pub fn total_supply(env: Env) -> u128 {
        get_total_supply(&env)
    }

    pub fn balance(env: Env, id: Address) -> u128 {
        balance_of(&env, &id)
    }

    pub fn locked_balance(env: Env, id: Address) -> u128 {
        locked_of(&env, &id)
    }

    pub fn locked_until(env: Env) -> u64 {
        get_locked_until(&env)
    }

    pub fn minting_finished(env: Env) -> bool {
        is_minting_finished(&env)
    }

    pub fn owner(env: Env) -> Result<Address, Error> {
        roles::get_owner(&env)
    }

    pub fn is_minter(env: Env, id: Address) -> bool {
        roles::has_role(&env, &id, Role::Minter)
    }

    pub fn is_operator(env: Env, id: Address) -> bool {
        roles::has_role(&env, &id, Role::Operator)
    }
}
