//! Client-side engine for the CKB cell ledger.
//!
//! * [`address`]: bech32 codec between human-readable addresses and lock
//!   scripts.
//! * [`collector`]: greedy selection of live cells covering a capacity.
//! * [`builder`]: transaction skeletons for payments and DAO flows.
//! * [`signer`]: witness group digests and signature placement.
//!
//! The ledger node and the signing keys are collaborators behind the
//! [`LedgerQuery`] and [`Key`] traits; [`rpc::HttpRpcClient`] and
//! [`Secp256k1Key`] are the provided implementations.

pub mod address;
pub mod builder;
pub mod collector;
pub mod config;
pub mod dao;
mod error;
pub mod key;
pub mod packed;
pub mod payment;
pub mod rpc;
pub mod signer;
pub mod system_scripts;
mod traits;
pub mod types;

#[cfg(test)]
mod tests;

pub use crate::address::{Address, NetworkType};
pub use crate::builder::{LockKind, TransactionBuilder, TxFlow};
pub use crate::collector::{CellCollector, CollectStrategy};
pub use crate::config::SdkConfig;
pub use crate::error::{Error, Result};
pub use crate::key::{MultisigConfig, Secp256k1Key};
pub use crate::payment::Payment;
pub use crate::signer::{sign_group, signing_message, SigningScheme};
pub use crate::system_scripts::SystemScripts;
pub use crate::traits::{Key, LedgerQuery};
