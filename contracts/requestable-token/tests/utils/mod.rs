use requestable_token::types::Role;
use requestable_token::{RequestableToken, RequestableTokenClient};
use soroban_sdk::testutils::Address as _;
use soroban_sdk::{Address, Env, String, Vec};
use soroban_token_sdk::metadata::TokenMetadata;

pub const INITIAL_SUPPLY: i128 = 1_000_000;

pub fn token_metadata(env: &Env) -> TokenMetadata {
    TokenMetadata {
        decimal: 18,
        name: String::from_str(env, "Requestable Token"),
        symbol: String::from_str(env, "RQT"),
    }
}

pub fn setup_token<'a>(
    env: &Env,
    deployer: &Address,
    applier: &Address,
    initial_supply: i128,
    roles: &[Role],
) -> RequestableTokenClient<'a> {
    let contract_id = env.register(
        RequestableToken,
        (
            deployer,
            applier,
            token_metadata(env),
            initial_supply,
            Vec::from_slice(env, roles),
        ),
    );

    RequestableTokenClient::new(env, &contract_id)
}

/// A root-chain token holding the whole supply and an empty child-chain token, both deployed by
/// `holder` and driven by the same applier.
pub struct TwoChains<'a> {
    pub holder: Address,
    pub applier: Address,
    pub root: RequestableTokenClient<'a>,
    pub child: RequestableTokenClient<'a>,
}

pub fn setup_chains<'a>(env: &Env, roles: &[Role]) -> TwoChains<'a> {
    let holder = Address::generate(env);
    let applier = Address::generate(env);

    let root = setup_token(env, &holder, &applier, INITIAL_SUPPLY, roles);
    let child = setup_token(env, &holder, &applier, 0, roles);

    TwoChains {
        holder,
        applier,
        root,
        child,
    }
}
