//! Maps opaque storage keys to the ledger slot they address and decodes their payloads.
//!
//! Keys are hashes of fixed labels, so both chains derive them without exchanging a schema.
//! Account-bound balance keys additionally hash the account in.

use soroban_sdk::xdr::ToXdr;
use soroban_sdk::{Address, Bytes, BytesN, Env, Symbol};

use crate::abi;
use crate::error::ContractError;
use crate::roles;
use crate::types::Role;

const BALANCES_LABEL: &str = "balances";
const ALLOWANCE_LABEL: &str = "allowance";
const MINTERS_LABEL: &str = "minters";
const BURNERS_LABEL: &str = "burners";

/// The family of ledger state a key addresses, bound to the account it concerns where the key
/// itself determines it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SlotKind {
    Balance(Address),
    Allowance { spender: Address },
    Role(Role),
}

/// A fully resolved slot together with the magnitude of the change carried by the request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SlotUpdate {
    Balance {
        account: Address,
        amount: i128,
    },
    Allowance {
        owner: Address,
        spender: Address,
        amount: i128,
    },
    Role {
        role: Role,
        account: Address,
        granted: bool,
    },
}

fn label_key(env: &Env, label: &str) -> BytesN<32> {
    env.crypto()
        .keccak256(&Bytes::from_slice(env, label.as_bytes()))
        .into()
}

pub fn key_balances(env: &Env) -> BytesN<32> {
    label_key(env, BALANCES_LABEL)
}

pub fn key_allowance(env: &Env) -> BytesN<32> {
    label_key(env, ALLOWANCE_LABEL)
}

pub fn key_role(env: &Env, role: Role) -> BytesN<32> {
    match role {
        Role::Minter => label_key(env, MINTERS_LABEL),
        Role::Burner => label_key(env, BURNERS_LABEL),
    }
}

/// Key of a single account's balance.
pub fn balance_key(env: &Env, account: &Address) -> BytesN<32> {
    let preimage = (Symbol::new(env, BALANCES_LABEL), account.clone()).to_xdr(env);

    env.crypto().keccak256(&preimage).into()
}

/// Resolves `key` against the well-known keys of this token.
///
/// Balance keys address the requestor's balance and the allowance key addresses allowances
/// granted to the requestor. Role keys only resolve for roles the token supports.
pub fn resolve(
    env: &Env,
    key: &BytesN<32>,
    requestor: &Address,
) -> Result<SlotKind, ContractError> {
    if *key == key_balances(env) || *key == balance_key(env, requestor) {
        return Ok(SlotKind::Balance(requestor.clone()));
    }

    if *key == key_allowance(env) {
        return Ok(SlotKind::Allowance {
            spender: requestor.clone(),
        });
    }

    roles::supported_roles(env)
        .iter()
        .find(|role| *key == key_role(env, *role))
        .map(SlotKind::Role)
        .ok_or(ContractError::UnknownKey)
}

pub fn decode(env: &Env, slot: SlotKind, payload: &Bytes) -> Result<SlotUpdate, ContractError> {
    match slot {
        SlotKind::Balance(account) => Ok(SlotUpdate::Balance {
            account,
            amount: abi::decode_amount(payload)?,
        }),
        SlotKind::Allowance { spender } => {
            let abi::AllowanceValue { owner, amount } = abi::decode_allowance(env, payload)?;

            Ok(SlotUpdate::Allowance {
                owner,
                spender,
                amount,
            })
        }
        SlotKind::Role(role) => {
            let abi::RoleValue { account, granted } = abi::decode_role(env, payload)?;

            Ok(SlotUpdate::Role {
                role,
                account,
                granted,
            })
        }
    }
}
