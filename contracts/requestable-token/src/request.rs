//! Application of delivered cross-chain requests to the local ledger.
//!
//! Root-chain and child-chain application share one body parameterized by [`ChainSide`]. Each
//! `(side, request_id)` moves from unseen to applied exactly once. A rejected request returns an
//! error, and the host rolls back every write of a failed invocation.

use requestable_std::ensure;
use requestable_std::events::Event;
use requestable_std::ttl::extend_persistent_ttl;
use soroban_sdk::{Address, Bytes, BytesN, Env};

use crate::dispatcher::{self, SlotUpdate};
use crate::error::ContractError;
use crate::event::RequestAppliedEvent;
use crate::ledger;
use crate::roles;
use crate::storage_types::{AppliedRequestKey, DataKey};
use crate::types::{ChainSide, Flow};

/// A request as delivered by the messaging layer.
#[derive(Clone, Debug)]
pub struct Request {
    pub is_exit: bool,
    pub request_id: u64,
    pub requestor: Address,
    pub key: BytesN<32>,
    pub payload: Bytes,
}

fn applied_key(side: ChainSide, request_id: u64) -> DataKey {
    DataKey::AppliedRequest(AppliedRequestKey { side, request_id })
}

pub fn is_applied(env: &Env, side: ChainSide, request_id: u64) -> bool {
    env.storage()
        .persistent()
        .has(&applied_key(side, request_id))
}

fn mark_applied(env: &Env, side: ChainSide, request_id: u64) {
    let key = applied_key(side, request_id);
    env.storage().persistent().set(&key, &());
    extend_persistent_ttl(env, &key);
}

pub fn applier(env: &Env) -> Address {
    env.storage()
        .instance()
        .get(&DataKey::Applier)
        .expect("applier must be set during contract construction")
}

pub fn set_applier(env: &Env, applier: &Address) {
    env.storage().instance().set(&DataKey::Applier, applier);
}

/// Applies `request` on `side`, after the configured applier authorized the call.
pub fn apply(env: &Env, side: ChainSide, request: Request) -> Result<(), ContractError> {
    applier(env).require_auth();

    let Request {
        is_exit,
        request_id,
        requestor,
        key,
        payload,
    } = request;

    ensure!(
        !is_applied(env, side, request_id),
        ContractError::DuplicateRequest
    );

    let slot = dispatcher::resolve(env, &key, &requestor)?;
    let update = dispatcher::decode(env, slot, &payload)?;

    match Flow::of(side, is_exit) {
        Flow::Outgoing => send(env, update)?,
        Flow::Incoming => receive(env, update)?,
    }

    mark_applied(env, side, request_id);

    RequestAppliedEvent {
        side,
        is_exit,
        request_id,
        requestor,
        key,
    }
    .emit(env);

    Ok(())
}

/// Value leaves this ledger. Role state is exported as-is, so the request must describe it.
fn send(env: &Env, update: SlotUpdate) -> Result<(), ContractError> {
    match update {
        SlotUpdate::Balance { account, amount } => {
            ledger::spend_balance(env, &account, amount)?;
            ledger::decrease_supply(env, amount)
        }
        SlotUpdate::Allowance {
            owner,
            spender,
            amount,
        } => ledger::spend_allowance(env, &owner, &spender, amount),
        SlotUpdate::Role {
            role,
            account,
            granted,
        } => {
            let is_member = roles::has_role(env, role, &account);

            ensure!(is_member || !granted, ContractError::NotMember);
            ensure!(!is_member || granted, ContractError::AlreadyMember);
            Ok(())
        }
    }
}

/// Value arrives on this ledger.
fn receive(env: &Env, update: SlotUpdate) -> Result<(), ContractError> {
    match update {
        SlotUpdate::Balance { account, amount } => {
            ledger::increase_supply(env, amount)?;
            ledger::receive_balance(env, &account, amount)
        }
        SlotUpdate::Allowance {
            owner,
            spender,
            amount,
        } => ledger::receive_allowance(env, &owner, &spender, amount),
        SlotUpdate::Role {
            role,
            account,
            granted: true,
        } => roles::grant(env, role, &account),
        SlotUpdate::Role {
            role,
            account,
            granted: false,
        } => roles::revoke(env, role, &account),
    }
}
