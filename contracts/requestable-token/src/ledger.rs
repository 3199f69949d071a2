//! Balances, allowances and total supply of a single fungible token.
//!
//! All amounts are non-negative `i128` values. Debits fail instead of underflowing and credits
//! fail instead of overflowing, so callers never observe a negative or wrapped amount.

use requestable_std::ensure;
use requestable_std::ttl::extend_persistent_ttl;
use soroban_sdk::{Address, Env};

use crate::error::ContractError;
use crate::storage_types::{AllowanceDataKey, AllowanceValue, DataKey};

/// Expiration given to allowances that are created by a bridged credit rather than an approval.
pub const BRIDGED_ALLOWANCE_EXPIRATION: u32 = u32::MAX;

pub fn validate_amount(amount: i128) -> Result<(), ContractError> {
    ensure!(amount >= 0, ContractError::InvalidAmount);
    Ok(())
}

pub fn read_balance(env: &Env, addr: &Address) -> i128 {
    let key = DataKey::Balance(addr.clone());
    env.storage()
        .persistent()
        .get::<_, i128>(&key)
        .inspect(|_| {
            // Extend the TTL of the balance entry when the balance is successfully retrieved.
            extend_persistent_ttl(env, &key);
        })
        .unwrap_or_default()
}

fn write_balance(env: &Env, addr: &Address, amount: i128) {
    let key = DataKey::Balance(addr.clone());
    env.storage().persistent().set(&key, &amount);
    extend_persistent_ttl(env, &key);
}

pub fn receive_balance(env: &Env, addr: &Address, amount: i128) -> Result<(), ContractError> {
    validate_amount(amount)?;

    let balance = read_balance(env, addr)
        .checked_add(amount)
        .ok_or(ContractError::Overflow)?;

    write_balance(env, addr, balance);
    Ok(())
}

pub fn spend_balance(env: &Env, addr: &Address, amount: i128) -> Result<(), ContractError> {
    validate_amount(amount)?;

    let balance = read_balance(env, addr);
    ensure!(balance >= amount, ContractError::InsufficientBalance);

    write_balance(env, addr, balance - amount);
    Ok(())
}

pub fn total_supply(env: &Env) -> i128 {
    env.storage()
        .instance()
        .get(&DataKey::TotalSupply)
        .unwrap_or_default()
}

pub fn increase_supply(env: &Env, amount: i128) -> Result<(), ContractError> {
    validate_amount(amount)?;

    let supply = total_supply(env)
        .checked_add(amount)
        .ok_or(ContractError::Overflow)?;

    env.storage().instance().set(&DataKey::TotalSupply, &supply);
    Ok(())
}

pub fn decrease_supply(env: &Env, amount: i128) -> Result<(), ContractError> {
    validate_amount(amount)?;

    let supply = total_supply(env);
    ensure!(supply >= amount, ContractError::InsufficientBalance);

    env.storage()
        .instance()
        .set(&DataKey::TotalSupply, &(supply - amount));
    Ok(())
}

/// Creates new balance for `addr`, growing the total supply by the same amount.
pub fn mint(env: &Env, addr: &Address, amount: i128) -> Result<(), ContractError> {
    increase_supply(env, amount)?;
    receive_balance(env, addr, amount)
}

/// Destroys balance of `addr`, shrinking the total supply by the same amount.
pub fn burn(env: &Env, addr: &Address, amount: i128) -> Result<(), ContractError> {
    spend_balance(env, addr, amount)?;
    decrease_supply(env, amount)
}

/// Returns the live allowance. Expired allowances read as zero but keep their expiration.
pub fn read_allowance(env: &Env, from: &Address, spender: &Address) -> AllowanceValue {
    let key = DataKey::Allowance(AllowanceDataKey {
        from: from.clone(),
        spender: spender.clone(),
    });

    env.storage()
        .persistent()
        .get::<_, AllowanceValue>(&key)
        .map_or(
            AllowanceValue {
                amount: 0,
                expiration_ledger: 0,
            },
            |allowance| {
                if allowance.expiration_ledger < env.ledger().sequence() {
                    AllowanceValue {
                        amount: 0,
                        expiration_ledger: allowance.expiration_ledger,
                    }
                } else {
                    allowance
                }
            },
        )
}

pub fn write_allowance(
    env: &Env,
    from: &Address,
    spender: &Address,
    amount: i128,
    expiration_ledger: u32,
) -> Result<(), ContractError> {
    validate_amount(amount)?;
    ensure!(
        !(amount > 0 && expiration_ledger < env.ledger().sequence()),
        ContractError::InvalidExpirationLedger
    );

    let key = DataKey::Allowance(AllowanceDataKey {
        from: from.clone(),
        spender: spender.clone(),
    });

    env.storage().persistent().set(
        &key,
        &AllowanceValue {
            amount,
            expiration_ledger,
        },
    );

    if amount > 0 {
        extend_persistent_ttl(env, &key);
    }

    Ok(())
}

pub fn spend_allowance(
    env: &Env,
    from: &Address,
    spender: &Address,
    amount: i128,
) -> Result<(), ContractError> {
    validate_amount(amount)?;

    let allowance = read_allowance(env, from, spender);
    ensure!(
        allowance.amount >= amount,
        ContractError::InsufficientAllowance
    );

    if amount > 0 {
        write_allowance(
            env,
            from,
            spender,
            allowance.amount - amount,
            allowance.expiration_ledger,
        )?;
    }

    Ok(())
}

/// Adds to an allowance. A live allowance keeps its expiration, otherwise the credited
/// allowance does not expire.
pub fn receive_allowance(
    env: &Env,
    from: &Address,
    spender: &Address,
    amount: i128,
) -> Result<(), ContractError> {
    validate_amount(amount)?;

    let allowance = read_allowance(env, from, spender);
    let new_amount = allowance
        .amount
        .checked_add(amount)
        .ok_or(ContractError::Overflow)?;

    let expiration_ledger = if allowance.amount > 0 {
        allowance.expiration_ledger
    } else {
        BRIDGED_ALLOWANCE_EXPIRATION
    };

    write_allowance(env, from, spender, new_amount, expiration_ledger)
}

#[cfg(test)]
mod test {
    use super::*;
    use requestable_std::assert_err;
    use soroban_sdk::testutils::{Address as _, Ledger};
    use soroban_sdk::{contract, contractimpl};

    #[contract]
    pub struct LedgerHost;

    #[contractimpl]
    impl LedgerHost {
        pub fn noop(_env: Env) {}
    }

    fn setup() -> (Env, Address) {
        let env = Env::default();
        let contract_id = env.register(LedgerHost, ());
        (env, contract_id)
    }

    #[test]
    fn credit_and_debit_balance() {
        let (env, contract_id) = setup();
        let user = Address::generate(&env);

        env.as_contract(&contract_id, || {
            assert_eq!(read_balance(&env, &user), 0);

            receive_balance(&env, &user, 1_000).unwrap();
            spend_balance(&env, &user, 400).unwrap();

            assert_eq!(read_balance(&env, &user), 600);
        });
    }

    #[test]
    fn debit_over_balance_fails() {
        let (env, contract_id) = setup();
        let user = Address::generate(&env);

        env.as_contract(&contract_id, || {
            receive_balance(&env, &user, 100).unwrap();

            assert_err!(
                spend_balance(&env, &user, 101),
                ContractError::InsufficientBalance
            );
            assert_eq!(read_balance(&env, &user), 100);
        });
    }

    #[test]
    fn credit_past_representable_range_fails() {
        let (env, contract_id) = setup();
        let user = Address::generate(&env);

        env.as_contract(&contract_id, || {
            receive_balance(&env, &user, i128::MAX).unwrap();

            assert_err!(receive_balance(&env, &user, 1), ContractError::Overflow);

            increase_supply(&env, i128::MAX).unwrap();
            assert_err!(increase_supply(&env, 1), ContractError::Overflow);
        });
    }

    #[test]
    fn negative_amounts_are_rejected() {
        let (env, contract_id) = setup();
        let user = Address::generate(&env);

        env.as_contract(&contract_id, || {
            assert_err!(receive_balance(&env, &user, -1), ContractError::InvalidAmount);
            assert_err!(spend_balance(&env, &user, -1), ContractError::InvalidAmount);
        });
    }

    #[test]
    fn mint_and_burn_track_supply() {
        let (env, contract_id) = setup();
        let user = Address::generate(&env);

        env.as_contract(&contract_id, || {
            mint(&env, &user, 500).unwrap();
            burn(&env, &user, 200).unwrap();

            assert_eq!(read_balance(&env, &user), 300);
            assert_eq!(total_supply(&env), 300);
        });
    }

    #[test]
    fn allowance_debit_and_credit() {
        let (env, contract_id) = setup();
        let owner = Address::generate(&env);
        let spender = Address::generate(&env);

        env.as_contract(&contract_id, || {
            write_allowance(&env, &owner, &spender, 1_000, 100).unwrap();

            spend_allowance(&env, &owner, &spender, 300).unwrap();
            assert_eq!(read_allowance(&env, &owner, &spender).amount, 700);

            assert_err!(
                spend_allowance(&env, &owner, &spender, 701),
                ContractError::InsufficientAllowance
            );

            receive_allowance(&env, &owner, &spender, 300).unwrap();
            assert_eq!(
                read_allowance(&env, &owner, &spender),
                AllowanceValue {
                    amount: 1_000,
                    expiration_ledger: 100,
                }
            );
        });
    }

    #[test]
    fn expired_allowance_reads_as_zero() {
        let (env, contract_id) = setup();
        let owner = Address::generate(&env);
        let spender = Address::generate(&env);

        env.as_contract(&contract_id, || {
            write_allowance(&env, &owner, &spender, 1_000, 10).unwrap();
        });

        env.ledger().set_sequence_number(11);

        env.as_contract(&contract_id, || {
            assert_eq!(read_allowance(&env, &owner, &spender).amount, 0);

            receive_allowance(&env, &owner, &spender, 50).unwrap();
            assert_eq!(
                read_allowance(&env, &owner, &spender),
                AllowanceValue {
                    amount: 50,
                    expiration_ledger: BRIDGED_ALLOWANCE_EXPIRATION,
                }
            );
        });
    }

    #[test]
    fn approval_in_the_past_is_rejected() {
        let (env, contract_id) = setup();
        let owner = Address::generate(&env);
        let spender = Address::generate(&env);

        env.ledger().set_sequence_number(20);

        env.as_contract(&contract_id, || {
            assert_err!(
                write_allowance(&env, &owner, &spender, 1, 19),
                ContractError::InvalidExpirationLedger
            );
            assert_eq!(write_allowance(&env, &owner, &spender, 0, 19), Ok(()));
        });
    }
}
