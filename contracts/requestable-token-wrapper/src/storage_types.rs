use soroban_sdk::contracttype;

/// Kept apart from the ledger keys shared with the token.
#[contracttype]
#[derive(Clone)]
pub enum WrapperDataKey {
    Underlying,
}
