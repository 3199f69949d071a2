use requestable_token_wrapper::{RequestableTokenWrapper, RequestableTokenWrapperClient};
use soroban_sdk::testutils::Address as _;
use soroban_sdk::token::{StellarAssetClient, TokenClient};
use soroban_sdk::{Address, Env};

pub const USER_FUNDS: i128 = 1_000_000;

pub struct TestWrapper<'a> {
    pub user: Address,
    pub applier: Address,
    pub token: TokenClient<'a>,
    pub wrapper: RequestableTokenWrapperClient<'a>,
}

/// Registers an underlying asset holding `USER_FUNDS` for a fresh user, and a wrapper around it.
pub fn setup_wrapper<'a>(env: &Env) -> TestWrapper<'a> {
    let user = Address::generate(env);
    let applier = Address::generate(env);

    let asset = env.register_stellar_asset_contract_v2(Address::generate(env));
    StellarAssetClient::new(env, &asset.address())
        .mock_all_auths()
        .mint(&user, &USER_FUNDS);

    let wrapper_id = env.register(RequestableTokenWrapper, (&applier, asset.address()));

    TestWrapper {
        user,
        applier,
        token: TokenClient::new(env, &asset.address()),
        wrapper: RequestableTokenWrapperClient::new(env, &wrapper_id),
    }
}
