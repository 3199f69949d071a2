//! ABI codec for request value payloads.
//!
//! Payloads are encoded the way the other side of the bridge encodes them: Solidity ABI encoded
//! structs, with accounts carried as their strkey bytes.

extern crate alloc;

use alloy_primitives::{Uint, U256};
use alloy_sol_types::{sol, SolValue};
use requestable_std::address::AddressExt;
use requestable_std::ensure;
use soroban_sdk::{Address, Bytes, Env};

use crate::error::ContractError;

sol! {
    struct AmountPayload {
        uint256 amount;
    }

    struct AllowancePayload {
        bytes owner;
        uint256 amount;
    }

    struct RolePayload {
        bytes account;
        bool granted;
    }
}

/// Decoded allowance value: the owner whose allowance moves, and by how much.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AllowanceValue {
    pub owner: Address,
    pub amount: i128,
}

/// Decoded role value: the account whose membership moves, and whether it is held.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RoleValue {
    pub account: Address,
    pub granted: bool,
}

pub fn encode_amount(env: &Env, amount: i128) -> Bytes {
    let payload = AmountPayload {
        amount: U256::from(amount.unsigned_abs()),
    }
    .abi_encode_params();

    Bytes::from_slice(env, &payload)
}

pub fn encode_allowance(env: &Env, owner: &Address, amount: i128) -> Bytes {
    let payload = AllowancePayload {
        owner: owner.to_string_bytes().to_alloc_vec().into(),
        amount: U256::from(amount.unsigned_abs()),
    }
    .abi_encode_params();

    Bytes::from_slice(env, &payload)
}

pub fn encode_role(env: &Env, account: &Address, granted: bool) -> Bytes {
    let payload = RolePayload {
        account: account.to_string_bytes().to_alloc_vec().into(),
        granted,
    }
    .abi_encode_params();

    Bytes::from_slice(env, &payload)
}

pub fn decode_amount(payload: &Bytes) -> Result<i128, ContractError> {
    let decoded = AmountPayload::abi_decode_params(&payload.to_alloc_vec(), true)
        .map_err(|_| ContractError::MalformedPayload)?;

    convert_to_i128(decoded.amount)
}

pub fn decode_allowance(env: &Env, payload: &Bytes) -> Result<AllowanceValue, ContractError> {
    let decoded = AllowancePayload::abi_decode_params(&payload.to_alloc_vec(), true)
        .map_err(|_| ContractError::MalformedPayload)?;

    Ok(AllowanceValue {
        owner: decode_address(env, &decoded.owner)?,
        amount: convert_to_i128(decoded.amount)?,
    })
}

pub fn decode_role(env: &Env, payload: &Bytes) -> Result<RoleValue, ContractError> {
    let decoded = RolePayload::abi_decode_params(&payload.to_alloc_vec(), true)
        .map_err(|_| ContractError::MalformedPayload)?;

    Ok(RoleValue {
        account: decode_address(env, &decoded.account)?,
        granted: decoded.granted,
    })
}

fn decode_address(env: &Env, bytes: &[u8]) -> Result<Address, ContractError> {
    Address::try_from_string_bytes(env, bytes).ok_or(ContractError::MalformedPayload)
}

/// Amounts are carried as `uint256` but must fit a non-negative `i128`.
fn convert_to_i128(decoded_value: Uint<256, 4>) -> Result<i128, ContractError> {
    let slice = decoded_value.as_le_slice();

    ensure!(
        slice[16..].iter().all(|&b| b == 0) && slice[15] & 0x80 == 0,
        ContractError::MalformedPayload
    );

    let mut truncated = [0u8; 16];
    truncated.copy_from_slice(&slice[..16]);

    Ok(i128::from_le_bytes(truncated))
}
