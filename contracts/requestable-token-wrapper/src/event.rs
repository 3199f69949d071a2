use core::fmt::Debug;

use requestable_std::events::Event;
use soroban_sdk::{Address, Env, IntoVal, Symbol, Topics, Val};

#[derive(Debug, PartialEq, Eq)]
pub struct DepositedEvent {
    pub account: Address,
    pub amount: i128,
}

impl Event for DepositedEvent {
    fn topics(&self, env: &Env) -> impl Topics + Debug {
        (Symbol::new(env, "deposited"), self.account.clone())
    }

    fn data(&self, _env: &Env) -> impl IntoVal<Env, Val> + Debug {
        (self.amount,)
    }
}

#[derive(Debug, PartialEq, Eq)]
pub struct WithdrawnEvent {
    pub account: Address,
    pub amount: i128,
}

impl Event for WithdrawnEvent {
    fn topics(&self, env: &Env) -> impl Topics + Debug {
        (Symbol::new(env, "withdrawn"), self.account.clone())
    }

    fn data(&self, _env: &Env) -> impl IntoVal<Env, Val> + Debug {
        (self.amount,)
    }
}
