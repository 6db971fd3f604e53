//! JSON-RPC transport for [`LedgerQuery`](crate::LedgerQuery).

mod id_generator;
#[macro_use]
mod macros;
mod bytes;
mod client;
pub mod types;
mod uints;

use lazy_static::lazy_static;

pub use self::bytes::JsonBytes;
pub use client::{HttpRpcClient, Inner};
pub use uints::{JsonUint, Uint, Uint32, Uint64};

/// Request timeout of [`HTTP_CLIENT`].
pub const RPC_TIMEOUT_SECS: u64 = 30;

lazy_static! {
    /// Shared by every client, built on first use.
    pub static ref HTTP_CLIENT: reqwest::blocking::Client = reqwest::blocking::Client::builder()
        .timeout(::std::time::Duration::from_secs(RPC_TIMEOUT_SECS))
        .build()
        .expect("reqwest Client build");
}
