use requestable_std::ensure;
use requestable_std::token::validate_token_metadata;
use requestable_std::ttl::extend_instance_ttl;
use soroban_sdk::token::TokenInterface;
use soroban_sdk::{
    assert_with_error, contract, contractimpl, panic_with_error, token, Address, Bytes, BytesN,
    Env, String, Vec,
};
use soroban_token_sdk::metadata::TokenMetadata;
use soroban_token_sdk::TokenUtils;

use crate::dispatcher;
use crate::error::ContractError;
use crate::interface::{RequestableInterface, RequestableTokenInterface};
use crate::ledger;
use crate::request::{self, Request};
use crate::roles;
use crate::types::{ChainSide, Role};

#[contract]
pub struct RequestableToken;

#[contractimpl]
impl RequestableToken {
    /// `roles` selects the token variant: a base token supports no roles, mintable and burnable
    /// variants support `Minter` and/or `Burner`. The deployer holds every supported role and the
    /// initial supply.
    pub fn __constructor(
        env: Env,
        deployer: Address,
        applier: Address,
        token_metadata: TokenMetadata,
        initial_supply: i128,
        roles: Vec<Role>,
    ) -> Result<(), ContractError> {
        validate_token_metadata(&token_metadata)?;
        ledger::validate_amount(initial_supply)?;

        TokenUtils::new(&env).metadata().set_metadata(&token_metadata);
        request::set_applier(&env, &applier);
        roles::set_supported_roles(&env, &roles);

        for role in roles::supported_roles(&env).iter() {
            roles::grant(&env, role, &deployer)?;
        }

        if initial_supply > 0 {
            ledger::mint(&env, &deployer, initial_supply)?;
        }

        Ok(())
    }
}

#[contractimpl]
impl RequestableInterface for RequestableToken {
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

#[contractimpl]
impl RequestableTokenInterface for RequestableToken {
    fn total_supply(env: &Env) -> i128 {
        ledger::total_supply(env)
    }

    fn supported_roles(env: &Env) -> Vec<Role> {
        roles::supported_roles(env)
    }

    fn has_role(env: &Env, role: Role, account: Address) -> bool {
        roles::has_role(env, role, &account)
    }

    fn members(env: &Env, role: Role) -> Vec<Address> {
        roles::members(env, role)
    }

    fn add_role_member(
        env: &Env,
        role: Role,
        caller: Address,
        account: Address,
    ) -> Result<(), ContractError> {
        caller.require_auth();

        extend_instance_ttl(env);

        roles::add_member(env, role, &caller, &account)
    }

    fn renounce_role(env: &Env, role: Role, caller: Address) -> Result<(), ContractError> {
        caller.require_auth();

        extend_instance_ttl(env);

        roles::renounce(env, role, &caller)
    }

    fn mint(env: &Env, minter: Address, to: Address, amount: i128) -> Result<(), ContractError> {
        minter.require_auth();

        roles::ensure_supported(env, Role::Minter)?;
        ensure!(
            roles::has_role(env, Role::Minter, &minter),
            ContractError::Unauthorized
        );

        extend_instance_ttl(env);

        ledger::mint(env, &to, amount)?;

        TokenUtils::new(env).events().mint(minter, to, amount);

        Ok(())
    }
}

#[contractimpl]
impl token::Interface for RequestableToken {
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

        Self::ensure_burner(&env, &from);

        extend_instance_ttl(&env);

        Self::or_abort(&env, ledger::burn(&env, &from, amount));

        TokenUtils::new(&env).events().burn(from, amount);
    }

    fn burn_from(env: Env, spender: Address, from: Address, amount: i128) {
        spender.require_auth();

        Self::ensure_burner(&env, &spender);

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

impl RequestableToken {
    /// Standard token entry points return no `Result`, so ledger errors abort the invocation.
    fn or_abort<T>(env: &Env, result: Result<T, ContractError>) -> T {
        result.unwrap_or_else(|err| panic_with_error!(env, err))
    }

    /// Burnable variants restrict burning to the burner role; otherwise holders burn freely.
    fn ensure_burner(env: &Env, burner: &Address) {
        if roles::is_supported(env, Role::Burner) {
            assert_with_error!(
                env,
                roles::has_role(env, Role::Burner, burner),
                ContractError::Unauthorized
            );
        }
    }
}
