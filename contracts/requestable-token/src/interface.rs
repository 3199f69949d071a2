use soroban_sdk::{contractclient, token, Address, Bytes, BytesN, Env, Vec};

use crate::error::ContractError;
use crate::types::{ChainSide, Role};

/// Entry points through which the messaging layer applies enter and exit requests.
#[contractclient(name = "RequestableClient")]
pub trait RequestableInterface {
    /// Returns the address allowed to apply requests.
    fn applier(env: &Env) -> Address;

    /// Key addressing the requestor's balance.
    fn key_balances(env: &Env) -> BytesN<32>;

    /// Key addressing allowances granted to the requestor. The payload names the owner.
    fn key_allowance(env: &Env) -> BytesN<32>;

    /// Key addressing membership of `role`.
    fn key_role(env: &Env, role: Role) -> BytesN<32>;

    /// Key addressing the balance of `account` only.
    fn balance_key(env: &Env, account: Address) -> BytesN<32>;

    fn is_request_applied(env: &Env, side: ChainSide, request_id: u64) -> bool;

    /// Applies a request on the root chain: entering moves value out, exiting moves it back in.
    fn apply_request_in_root_chain(
        env: &Env,
        is_exit: bool,
        request_id: u64,
        requestor: Address,
        key: BytesN<32>,
        payload: Bytes,
    ) -> Result<(), ContractError>;

    /// Applies a request on the child chain: entering moves value in, exiting moves it out.
    fn apply_request_in_child_chain(
        env: &Env,
        is_exit: bool,
        request_id: u64,
        requestor: Address,
        key: BytesN<32>,
        payload: Bytes,
    ) -> Result<(), ContractError>;
}

#[contractclient(name = "RequestableTokenClient")]
pub trait RequestableTokenInterface: token::Interface + RequestableInterface {
    fn total_supply(env: &Env) -> i128;

    fn supported_roles(env: &Env) -> Vec<Role>;

    fn has_role(env: &Env, role: Role, account: Address) -> bool;

    /// Members of `role` in the order they were added.
    fn members(env: &Env, role: Role) -> Vec<Address>;

    /// Adds `account` to `role`. `caller` must already hold the role.
    fn add_role_member(
        env: &Env,
        role: Role,
        caller: Address,
        account: Address,
    ) -> Result<(), ContractError>;

    /// Removes `caller` from `role`.
    fn renounce_role(env: &Env, role: Role, caller: Address) -> Result<(), ContractError>;

    fn mint(env: &Env, minter: Address, to: Address, amount: i128) -> Result<(), ContractError>;
}
