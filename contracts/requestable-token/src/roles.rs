//! Ordered, duplicate-free role membership.
//!
//! Each role keeps a dense member list in insertion order plus an index from account to its
//! position in that list. Removal shifts the tail left and reindexes it, so enumeration never has
//! gaps and the remaining members keep their relative order.

use requestable_std::ensure;
use requestable_std::events::Event;
use soroban_sdk::{Address, Env, Vec};

use crate::error::ContractError;
use crate::event::{RoleGrantedEvent, RoleRevokedEvent};
use crate::storage_types::{DataKey, RoleMemberKey};
use crate::types::Role;

pub fn supported_roles(env: &Env) -> Vec<Role> {
    env.storage()
        .instance()
        .get(&DataKey::SupportedRoles)
        .unwrap_or_else(|| Vec::new(env))
}

pub fn set_supported_roles(env: &Env, roles: &Vec<Role>) {
    let mut unique = Vec::new(env);
    for role in roles.iter() {
        if !unique.contains(role) {
            unique.push_back(role);
        }
    }

    env.storage()
        .instance()
        .set(&DataKey::SupportedRoles, &unique);
}

pub fn is_supported(env: &Env, role: Role) -> bool {
    supported_roles(env).contains(role)
}

pub fn ensure_supported(env: &Env, role: Role) -> Result<(), ContractError> {
    ensure!(is_supported(env, role), ContractError::RoleNotSupported);
    Ok(())
}

fn index_key(role: Role, account: &Address) -> DataKey {
    DataKey::RoleIndex(RoleMemberKey {
        role,
        account: account.clone(),
    })
}

pub fn members(env: &Env, role: Role) -> Vec<Address> {
    env.storage()
        .instance()
        .get(&DataKey::RoleMembers(role))
        .unwrap_or_else(|| Vec::new(env))
}

pub fn has_role(env: &Env, role: Role, account: &Address) -> bool {
    env.storage().instance().has(&index_key(role, account))
}

/// Appends `account` to the members of `role`.
pub fn grant(env: &Env, role: Role, account: &Address) -> Result<(), ContractError> {
    ensure!(
        !has_role(env, role, account),
        ContractError::AlreadyMember
    );

    let mut members = members(env, role);
    let position = members.len();
    members.push_back(account.clone());

    env.storage()
        .instance()
        .set(&DataKey::RoleMembers(role), &members);
    env.storage()
        .instance()
        .set(&index_key(role, account), &position);

    RoleGrantedEvent {
        role,
        account: account.clone(),
    }
    .emit(env);

    Ok(())
}

/// Removes `account` from the members of `role`.
pub fn revoke(env: &Env, role: Role, account: &Address) -> Result<(), ContractError> {
    let key = index_key(role, account);
    let position: u32 = env
        .storage()
        .instance()
        .get(&key)
        .ok_or(ContractError::NotMember)?;

    let mut members = members(env, role);
    members.remove(position);

    for (offset, member) in members.iter().skip(position as usize).enumerate() {
        env.storage()
            .instance()
            .set(&index_key(role, &member), &(position + offset as u32));
    }

    env.storage()
        .instance()
        .set(&DataKey::RoleMembers(role), &members);
    env.storage().instance().remove(&key);

    RoleRevokedEvent {
        role,
        account: account.clone(),
    }
    .emit(env);

    Ok(())
}

/// Adds `account` to `role` on behalf of `caller`, who must already hold the role.
pub fn add_member(
    env: &Env,
    role: Role,
    caller: &Address,
    account: &Address,
) -> Result<(), ContractError> {
    ensure_supported(env, role)?;
    ensure!(has_role(env, role, caller), ContractError::Unauthorized);

    grant(env, role, account)
}

/// Removes `caller` from `role`.
pub fn renounce(env: &Env, role: Role, caller: &Address) -> Result<(), ContractError> {
    ensure_supported(env, role)?;

    revoke(env, role, caller)
}
