use soroban_sdk::{contracttype, Address};

use crate::types::{ChainSide, Role};

#[derive(Clone)]
#[contracttype]
pub struct AllowanceDataKey {
    pub from: Address,
    pub spender: Address,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AllowanceValue {
    pub amount: i128,
    pub expiration_ledger: u32,
}

#[contracttype]
#[derive(Clone)]
pub struct RoleMemberKey {
    pub role: Role,
    pub account: Address,
}

#[contracttype]
#[derive(Clone)]
pub struct AppliedRequestKey {
    pub side: ChainSide,
    pub request_id: u64,
}

/// Do not use `METADATA` as it is reserved for token metadata.
#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Allowance(AllowanceDataKey),
    Balance(Address),
    TotalSupply,
    SupportedRoles,
    RoleMembers(Role),
    RoleIndex(RoleMemberKey),
    AppliedRequest(AppliedRequestKey),
    Applier,
}
