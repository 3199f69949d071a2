use requestable_std::token::TokenError;
use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum ContractError {
    Unauthorized = 1,
    NotMember = 2,
    AlreadyMember = 3,
    RoleNotSupported = 4,
    UnknownKey = 5,
    MalformedPayload = 6,
    DuplicateRequest = 7,
    InsufficientBalance = 8,
    InsufficientAllowance = 9,
    Overflow = 10,
    InvalidAmount = 11,
    InvalidExpirationLedger = 12,
    InvalidDecimal = 13,
    InvalidTokenName = 14,
    InvalidTokenSymbol = 15,
}

impl From<TokenError> for ContractError {
    fn from(err: TokenError) -> Self {
        match err {
            TokenError::InvalidDecimal => Self::InvalidDecimal,
            TokenError::InvalidTokenName => Self::InvalidTokenName,
            TokenError::InvalidTokenSymbol => Self::InvalidTokenSymbol,
        }
    }
}
