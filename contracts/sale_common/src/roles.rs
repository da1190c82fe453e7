//! Owner and role membership, kept in the calling contract's own storage.
//!
//! Every contract has exactly one owner, set once at initialization. Role
//! membership is a persistent entry per `(Role, Address)` so lookups do not
//! load a growing list.

use crate::errors::Error;
use soroban_sdk::{contracttype, symbol_short, Address, Env, Vec};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[contracttype]
pub enum Role {
    Minter,
    Operator,
}

#[derive(Clone)]
#[contracttype]
enum RoleKey {
    RbacOwner,
    RbacMember(Role, Address),
}

pub fn has_owner(env: &Env) -> bool {
    env.storage().instance().has(&RoleKey::RbacOwner)
}

pub fn set_owner(env: &Env, owner: &Address) {
    env.storage().instance().set(&RoleKey::RbacOwner, owner);
}

pub fn get_owner(env: &Env) -> Result<Address, Error> {
    env.storage()
        .instance()
        .get(&RoleKey::RbacOwner)
        .ok_or(Error::NotInitialized)
}

pub fn require_owner(env: &Env, caller: &Address) -> Result<(), Error> {
    caller.require_auth();
    if get_owner(env)? != *caller {
        return Err(Error::Unauthorized);
    }
    Ok(())
}

pub fn has_role(env: &Env, who: &Address, role: Role) -> bool {
    env.storage()
        .persistent()
        .has(&RoleKey::RbacMember(role, who.clone()))
}

pub fn require_role(env: &Env, who: &Address, role: Role) -> Result<(), Error> {
    who.require_auth();
    if !has_role(env, who, role) {
        return Err(Error::Unauthorized);
    }
    Ok(())
}

/// Grants without an ownership check; used at initialization.
pub fn grant(env: &Env, role: Role, who: &Address) {
    let key = RoleKey::RbacMember(role, who.clone());
    if env.storage().persistent().has(&key) {
        return;
    }
    env.storage().persistent().set(&key, &true);
    env.events()
        .publish((symbol_short!("role_add"), role), who.clone());
}

pub fn revoke(env: &Env, role: Role, who: &Address) {
    let key = RoleKey::RbacMember(role, who.clone());
    if !env.storage().persistent().has(&key) {
        return;
    }
    env.storage().persistent().remove(&key);
    env.events()
        .publish((symbol_short!("role_rm"), role), who.clone());
}

pub fn add_role(env: &Env, caller: &Address, role: Role, who: &Address) -> Result<(), Error> {
    require_owner(env, caller)?;
    grant(env, role, who);
    Ok(())
}

pub fn add_roles(
    env: &Env,
    caller: &Address,
    role: Role,
    members: &Vec<Address>,
) -> Result<(), Error> {
    require_owner(env, caller)?;
    if members.is_empty() {
        return Err(Error::InvalidConfiguration);
    }
    for member in members.iter() {
        grant(env, role, &member);
    }
    Ok(())
}

pub fn remove_role(
    env: &Env,
    caller: &Address,
    role: Role,
    who: &Address,
) -> Result<(), Error> {
    require_owner(env, caller)?;
    revoke(env, role, who);
    Ok(())
}
