use requestable_std::events::Event;
use requestable_std::ttl::extend_instance_ttl;
use requestable_token::error::ContractError;
use requestable_token::request::{self, Request};
use requestable_token::types::{ChainSide, Role};
use requestable_token::{dispatcher, ledger, RequestableInterface};
use soroban_sdk::token::{TokenClient, TokenInterface};
use soroban_sdk::{
    contract, contractimpl, panic_with_error, token, Address, Bytes, BytesN, Env, String,
};
use soroban_token_sdk::metadata::TokenMetadata;
use soroban_token_sdk::TokenUtils;

use crate::event::{DepositedEvent, WithdrawnEvent};
use crate::storage_types::WrapperDataKey;

/// Holds deposits of an underlying token and keeps a requestable ledger of the wrapped amounts.
///
/// Only the balance and allowance slots are requestable; the wrapper carries no roles.
#[contract]
pub struct RequestableTokenWrapper;

#[contractimpl]
impl RequestableTokenWrapper {
    /// The wrapped token takes its name, symbol and decimals from `underlying`.
    pub fn __constructor(env: Env, applier: Address, underlying: Address) {
        let underlying_token = TokenClient::new(&env, &underlying);
        TokenUtils::new(&env).metadata().set_metadata(&TokenMetadata {
            decimal: underlying_token.decimals(),
            name: underlying_token.name(),
            symbol: underlying_token.symbol(),
        });

        request::set_applier(&env, &applier);
        env.storage()
            .instance()
            .set(&WrapperDataKey::Underlying, &underlying);
    }

    pub fn underlying(env: &Env) -> Address {
        env.storage()
            .instance()
            .get(&WrapperDataKey::Underlying)
            .expect("underlying token must be set during contract construction")
    }

    pub fn total_supply(env: &Env) -> i128 {
        extend_instance_ttl(env);
        ledger::total_supply(env)
    }

    /// Locks `amount` of the underlying token and credits the same wrapped amount to `from`.
    pub fn deposit(env: &Env, from: Address, amount: i128) -> Result<(), ContractError> {
        from.require_auth();

        ledger::mint(env, &from, amount)?;

        TokenClient::new(env, &Self::underlying(env)).transfer(
            &from,
            &env.current_contract_address(),
            &amount,
        );

        extend_instance_ttl(env);

        DepositedEvent {
            account: from,
            amount,
        }
        .emit(env);

        Ok(())
    }

    /// Debits `amount` of wrapped balance from `from` and releases the underlying token.
    pub fn withdraw(env: &Env, from: Address, amount: i128) -> Result<(), ContractError> {
        from.require_auth();

        ledger::burn(env, &from, amount)?;

        TokenClient::new(env, &Self::underlying(env)).transfer(
            &env.current_contract_address(),
            &from,
            &amount,
        );

        extend_instance_ttl(env);

        WithdrawnEvent {
            account: from,
            amount,
        }
        .emit(env);

        Ok(())
    }
}

#[contractimpl]
impl RequestableInterface for RequestableTokenWrapper {
    fn applier(env: &Env) -> Address {
        request::applier(env)
    }

    fn key_balances(env: &Env) -> BytesN<32> {
        dispatcher::key_balances(env)
    }

    fn key_allowance(env: &Env) -> BytesN<32> {
        dispatcher::key_allowance(env)
    }

    fn key_role(env: &Env, role: Role) -> BytesN<32> {
        dispatcher::key_role(env, role)
    }

    fn balance_key(env: &Env, account: Address) -> BytesN<32> {
        dispatcher::balance_key(env, &account)
    }

    fn is_request_applied(env: &Env, side: ChainSide, request_id: u64) -> bool {
        request::is_applied(env, side, request_id)
    }

    fn apply_request_in_root_chain(
        env: &Env,
        is_exit: bool,
        request_id: u64,
        requestor: Address,
        key: BytesN<32>,
        payload: Bytes,
    ) -> Result<(), ContractError> {
        extend_instance_ttl(env);

        request::apply(
            env,
            ChainSide::Root,
            Request {
                is_exit,
                request_id,
                requestor,
                key,
                payload,
            },
        )
    }

    fn apply_request_in_child_chain(
        env: &Env,
        is_exit: bool,
        request_id: u64,
        requestor: Address,
        key: BytesN<32>,
        payload: Bytes,
    ) -> Result<(), ContractError> {
        extend_instance_ttl(env);

        request::apply(
            env,
            ChainSide::Child,
            Request {
                is_exit,
                request_id,
                requestor,
                key,
                payload,
            },
        )
    }
}

/// Burning destroys wrapped balance only. The underlying it stood for stays locked in the wrapper.
#[contractimpl]
impl token::Interface for RequestableTokenWrapper {
    fn allowance(env: Env, from: Address, spender: Address) -> i128 {
        extend_instance_ttl(&env);
        ledger::read_allowance(&env, &from, &spender).amount
    }

    fn approve(env: Env, from: Address, spender: Address, amount: i128, expiration_ledger: u32) {
        from.require_auth();

        extend_instance_ttl(&env);

        Self::or_abort(
            &env,
            ledger::write_allowance(&env, &from, &spender, amount, expiration_ledger),
        );

        TokenUtils::new(&env)
            .events()
            .approve(from, spender, amount, expiration_ledger);
    }

    fn balance(env: Env, id: Address) -> i128 {
        extend_instance_ttl(&env);
        ledger::read_balance(&env, &id)
    }

    fn transfer(env: Env, from: Address, to: Address, amount: i128) {
        from.require_auth();

        extend_instance_ttl(&env);

        Self::or_abort(&env, ledger::spend_balance(&env, &from, amount));
        Self::or_abort(&env, ledger::receive_balance(&env, &to, amount));

        TokenUtils::new(&env).events().transfer(from, to, amount);
    }

    fn transfer_from(env: Env, spender: Address, from: Address, to: Address, amount: i128) {
        spender.require_auth();

        extend_instance_ttl(&env);

        Self::or_abort(&env, ledger::spend_allowance(&env, &from, &spender, amount));
        Self::or_abort(&env, ledger::spend_balance(&env, &from, amount));
        Self::or_abort(&env, ledger::receive_balance(&env, &to, amount));

        TokenUtils::new(&env).events().transfer(from, to, amount)
    }

    fn burn(env: Env, from: Address, amount: i128) {
        from.require_auth();

        extend_instance_ttl(&env);

        Self::or_abort(&env, ledger::burn(&env, &from, amount));

        TokenUtils::new(&env).events().burn(from, amount);
    }

    fn burn_from(env: Env, spender: Address, from: Address, amount: i128) {
        spender.require_auth();

        extend_instance_ttl(&env);

        Self::or_abort(&env, ledger::spend_allowance(&env, &from, &spender, amount));
        Self::or_abort(&env, ledger::burn(&env, &from, amount));

        TokenUtils::new(&env).events().burn(from, amount)
    }

    fn decimals(env: Env) -> u32 {
        TokenUtils::new(&env).metadata().get_metadata().decimal
    }

    fn name(env: Env) -> String {
        TokenUtils::new(&env).metadata().get_metadata().name
    }

    fn symbol(env: Env) -> String {
        TokenUtils::new(&env).metadata().get_metadata().symbol
    }
}

impl RequestableTokenWrapper {
    fn or_abort<T>(env: &Env, result: Result<T, ContractError>) -> T {
        result.unwrap_or_else(|err| panic_with_error!(env, err))
    }
}
