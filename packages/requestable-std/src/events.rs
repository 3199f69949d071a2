use core::fmt::Debug;
use soroban_sdk::{Env, IntoVal, Topics, Val};

/// A contract event with typed topics and data.
pub trait Event: Debug + PartialEq {
    fn topics(&self, env: &Env) -> impl Topics + Debug;

    fn data(&self, env: &Env) -> impl IntoVal<Env, Val> + Debug;

    fn emit(&self, env: &Env) {
        env.events().publish(self.topics(env), self.data(env));
    }
}
