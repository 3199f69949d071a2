use core::fmt::Debug;

use requestable_std::events::Event;
use soroban_sdk::{Address, BytesN, Env, IntoVal, Symbol, Topics, Val, Vec};

use crate::types::{ChainSide, Role};

#[derive(Debug, PartialEq, Eq)]
pub struct RequestAppliedEvent {
    pub side: ChainSide,
    pub is_exit: bool,
    pub request_id: u64,
    pub requestor: Address,
    pub key: BytesN<32>,
}

impl Event for RequestAppliedEvent {
    fn topics(&self, env: &Env) -> impl Topics + Debug {
        (
            Symbol::new(env, "request_applied"),
            self.side,
            self.request_id,
            self.requestor.clone(),
        )
    }

    fn data(&self, _env: &Env) -> impl IntoVal<Env, Val> + Debug {
        (self.is_exit, self.key.clone())
    }
}

#[derive(Debug, PartialEq, Eq)]
pub struct RoleGrantedEvent {
    pub role: Role,
    pub account: Address,
}

impl Event for RoleGrantedEvent {
    fn topics(&self, env: &Env) -> impl Topics + Debug {
        (
            Symbol::new(env, "role_granted"),
            self.role,
            self.account.clone(),
        )
    }

    fn data(&self, env: &Env) -> impl IntoVal<Env, Val> + Debug {
        Vec::<Val>::new(env)
    }
}

#[derive(Debug, PartialEq, Eq)]
pub struct RoleRevokedEvent {
    pub role: Role,
    pub account: Address,
}

impl Event for RoleRevokedEvent {
    fn topics(&self, env: &Env) -> impl Topics + Debug {
        (
            Symbol::new(env, "role_revoked"),
            self.role,
            self.account.clone(),
        )
    }

    fn data(&self, env: &Env) -> impl IntoVal<Env, Val> + Debug {
        Vec::<Val>::new(env)
    }
}
