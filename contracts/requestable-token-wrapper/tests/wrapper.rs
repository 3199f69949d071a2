mod utils;

use requestable_std::ttl::{INSTANCE_TTL_EXTEND_TO, INSTANCE_TTL_THRESHOLD};
use requestable_std::{assert_contract_err, assert_last_emitted_event};
use requestable_token::abi;
use requestable_token::error::ContractError;
use requestable_token::types::{ChainSide, Role};
use requestable_token::RequestableClient;
use soroban_sdk::testutils::storage::Instance as _;
use soroban_sdk::testutils::Address as _;
use soroban_sdk::{Address, Env, Symbol};
use utils::{setup_wrapper, TestWrapper, USER_FUNDS};

#[test]
fn deposit_locks_underlying_and_credits_wrapped_balance() {
    let env = Env::default();
    env.mock_all_auths();
    let TestWrapper {
        user,
        token,
        wrapper,
        ..
    } = setup_wrapper(&env);

    assert_eq!(wrapper.underlying(), token.address);
    assert_eq!(wrapper.name(), token.name());
    assert_eq!(wrapper.symbol(), token.symbol());
    assert_eq!(wrapper.decimals(), token.decimals());

    wrapper.deposit(&user, &100);

    assert_last_emitted_event(
        &env,
        &wrapper.address,
        (Symbol::new(&env, "deposited"), user.clone()),
        (100_i128,),
    );
    assert_eq!(token.balance(&user), USER_FUNDS - 100);
    assert_eq!(token.balance(&wrapper.address), 100);
    assert_eq!(wrapper.balance(&user), 100);
    assert_eq!(wrapper.total_supply(), 100);
}

#[test]
fn withdraw_releases_underlying() {
    let env = Env::default();
    env.mock_all_auths();
    let TestWrapper {
        user,
        token,
        wrapper,
        ..
    } = setup_wrapper(&env);

    wrapper.deposit(&user, &100);
    wrapper.withdraw(&user, &100);

    assert_last_emitted_event(
        &env,
        &wrapper.address,
        (Symbol::new(&env, "withdrawn"), user.clone()),
        (100_i128,),
    );
    assert_eq!(token.balance(&user), USER_FUNDS);
    assert_eq!(token.balance(&wrapper.address), 0);
    assert_eq!(wrapper.balance(&user), 0);
    assert_eq!(wrapper.total_supply(), 0);
}

#[test]
fn withdraw_beyond_wrapped_balance_fails() {
    let env = Env::default();
    env.mock_all_auths();
    let TestWrapper {
        user,
        token,
        wrapper,
        ..
    } = setup_wrapper(&env);

    wrapper.deposit(&user, &100);

    assert_contract_err!(
        wrapper.try_withdraw(&user, &101),
        ContractError::InsufficientBalance
    );
    assert_eq!(token.balance(&wrapper.address), 100);
}

#[test]
fn deposit_beyond_underlying_funds_fails() {
    let env = Env::default();
    env.mock_all_auths();
    let TestWrapper { user, wrapper, .. } = setup_wrapper(&env);

    assert!(wrapper.try_deposit(&user, &(USER_FUNDS + 1)).is_err());
    assert_eq!(wrapper.balance(&user), 0);
    assert_eq!(wrapper.total_supply(), 0);
}

#[test]
fn wrapped_balance_enters_and_exits_the_child_chain() {
    let env = Env::default();
    env.mock_all_auths();
    let TestWrapper {
        user,
        token,
        wrapper,
        ..
    } = setup_wrapper(&env);
    let child = setup_wrapper(&env).wrapper;

    wrapper.deposit(&user, &1_000);

    let key = wrapper.key_balances();
    let payload = abi::encode_amount(&env, 400);

    wrapper.apply_request_in_root_chain(&false, &1, &user, &key, &payload);
    child.apply_request_in_child_chain(&false, &1, &user, &key, &payload);

    assert_eq!(wrapper.balance(&user), 600);
    assert_eq!(child.balance(&user), 400);

    // the underlying stays locked while wrapped value lives on the child chain
    assert_eq!(token.balance(&wrapper.address), 1_000);
    assert_contract_err!(
        wrapper.try_withdraw(&user, &1_000),
        ContractError::InsufficientBalance
    );

    child.apply_request_in_child_chain(&true, &2, &user, &key, &payload);
    wrapper.apply_request_in_root_chain(&true, &2, &user, &key, &payload);

    wrapper.withdraw(&user, &1_000);
    assert_eq!(token.balance(&user), USER_FUNDS);
}

#[test]
fn wrapped_allowance_is_requestable() {
    let env = Env::default();
    env.mock_all_auths();
    let TestWrapper { user, wrapper, .. } = setup_wrapper(&env);
    let spender = Address::generate(&env);

    wrapper.approve(&user, &spender, &500, &1_000);

    let key = wrapper.key_allowance();

    assert_contract_err!(
        wrapper.try_apply_request_in_root_chain(
            &false,
            &1,
            &spender,
            &key,
            &abi::encode_allowance(&env, &user, 501)
        ),
        ContractError::InsufficientAllowance
    );

    wrapper.apply_request_in_root_chain(
        &false,
        &1,
        &spender,
        &key,
        &abi::encode_allowance(&env, &user, 200),
    );
    assert_eq!(wrapper.allowance(&user, &spender), 300);
    assert!(wrapper.is_request_applied(&ChainSide::Root, &1));
}

#[test]
fn wrapper_carries_no_roles() {
    let env = Env::default();
    env.mock_all_auths();
    let TestWrapper { user, wrapper, .. } = setup_wrapper(&env);

    assert_contract_err!(
        wrapper.try_apply_request_in_child_chain(
            &false,
            &1,
            &user,
            &wrapper.key_role(&Role::Minter),
            &abi::encode_role(&env, &user, true)
        ),
        ContractError::UnknownKey
    );
}

#[test]
fn wrapper_is_reachable_through_the_shared_interface() {
    let env = Env::default();
    env.mock_all_auths();
    let TestWrapper {
        user,
        applier,
        wrapper,
        ..
    } = setup_wrapper(&env);

    wrapper.deposit(&user, &50);

    let requestable = RequestableClient::new(&env, &wrapper.address);
    assert_eq!(requestable.applier(), applier);

    requestable.apply_request_in_root_chain(
        &false,
        &9,
        &user,
        &requestable.balance_key(&user),
        &abi::encode_amount(&env, 50),
    );

    assert!(requestable.is_request_applied(&ChainSide::Root, &9));
    assert_eq!(wrapper.balance(&user), 0);
}

#[test]
fn wrapped_transfer_emits_standard_event() {
    let env = Env::default();
    env.mock_all_auths();
    let TestWrapper { user, wrapper, .. } = setup_wrapper(&env);
    let recipient = Address::generate(&env);

    wrapper.deposit(&user, &100);
    wrapper.transfer(&user, &recipient, &40);

    assert_last_emitted_event(
        &env,
        &wrapper.address,
        (
            Symbol::new(&env, "transfer"),
            user.clone(),
            recipient.clone(),
        ),
        40_i128,
    );
    assert_eq!(wrapper.balance(&user), 60);
    assert_eq!(wrapper.balance(&recipient), 40);
}

#[test]
#[should_panic(expected = "Error(Contract, #8)")]
fn wrapped_transfer_beyond_balance_fails() {
    let env = Env::default();
    env.mock_all_auths();
    let TestWrapper { user, wrapper, .. } = setup_wrapper(&env);

    wrapper.transfer(&user, &Address::generate(&env), &1);
}

#[test]
fn burning_wrapped_balance_keeps_underlying_locked() {
    let env = Env::default();
    env.mock_all_auths();
    let TestWrapper {
        user,
        token,
        wrapper,
        ..
    } = setup_wrapper(&env);

    wrapper.deposit(&user, &100);
    wrapper.burn(&user, &30);

    assert_last_emitted_event(
        &env,
        &wrapper.address,
        (Symbol::new(&env, "burn"), user.clone()),
        30_i128,
    );
    assert_eq!(wrapper.balance(&user), 70);
    assert_eq!(wrapper.total_supply(), 70);
    assert_eq!(token.balance(&wrapper.address), 100);
}

#[test]
fn bridged_allowance_is_spendable_on_the_child_wrapper() {
    let env = Env::default();
    env.mock_all_auths();
    let TestWrapper { user, wrapper, .. } = setup_wrapper(&env);
    let child = setup_wrapper(&env).wrapper;
    let spender = Address::generate(&env);
    let recipient = Address::generate(&env);

    wrapper.deposit(&user, &1_000);
    wrapper.approve(&user, &spender, &500, &1_000);

    let balance_key = wrapper.key_balances();
    let balance_payload = abi::encode_amount(&env, 400);
    wrapper.apply_request_in_root_chain(&false, &1, &user, &balance_key, &balance_payload);
    child.apply_request_in_child_chain(&false, &1, &user, &balance_key, &balance_payload);

    let allowance_key = wrapper.key_allowance();
    let allowance_payload = abi::encode_allowance(&env, &user, 200);
    wrapper.apply_request_in_root_chain(&false, &2, &spender, &allowance_key, &allowance_payload);
    child.apply_request_in_child_chain(&false, &2, &spender, &allowance_key, &allowance_payload);

    assert_eq!(wrapper.allowance(&user, &spender), 300);
    assert_eq!(child.allowance(&user, &spender), 200);

    child.transfer_from(&spender, &user, &recipient, &150);

    assert_last_emitted_event(
        &env,
        &child.address,
        (
            Symbol::new(&env, "transfer"),
            user.clone(),
            recipient.clone(),
        ),
        150_i128,
    );
    assert_eq!(child.allowance(&user, &spender), 50);
    assert_eq!(child.balance(&user), 250);
    assert_eq!(child.balance(&recipient), 150);
    assert!(child
        .try_transfer_from(&spender, &user, &recipient, &51)
        .is_err());
}

#[test]
fn reads_extend_instance_ttl() {
    let env = Env::default();
    let TestWrapper { user, wrapper, .. } = setup_wrapper(&env);
    let instance_ttl = || env.as_contract(&wrapper.address, || env.storage().instance().get_ttl());

    assert!(instance_ttl() < INSTANCE_TTL_THRESHOLD);
    wrapper.balance(&user);
    assert_eq!(instance_ttl(), INSTANCE_TTL_EXTEND_TO);
}
