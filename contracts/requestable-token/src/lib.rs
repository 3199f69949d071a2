#![no_std]

// Allows using std (and its macros) in test modules
#[cfg(test)]
#[macro_use]
extern crate std;

pub mod abi;
pub mod dispatcher;
pub mod error;
mod event;
mod interface;
pub mod ledger;
pub mod request;
pub mod roles;
mod storage_types;
pub mod types;

pub use interface::{RequestableClient, RequestableInterface, RequestableTokenInterface};

#[cfg(all(target_family = "wasm", feature = "testutils"))]
compile_error!("'testutils' feature is not supported on 'wasm' target");

cfg_if::cfg_if! {
    if #[cfg(all(feature = "library", not(feature = "testutils")))] {
        pub use interface::RequestableTokenClient;
    } else {
        pub mod contract;
        pub use contract::{RequestableToken, RequestableTokenClient};
    }
}
