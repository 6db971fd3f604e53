use ckb_fixed_hash::error::{FromSliceError, FromStrError};
use molecule::error::VerificationError;
use thiserror::Error;

use crate::types::OutPoint;

/// The error type of every SDK operation.
///
/// Errors are reported to the caller as they happen, nothing is retried.
#[derive(Error, Debug)]
pub enum Error {
    /// Bad bech32 checksum, unknown prefix, unknown format tag or malformed payload.
    #[error("Invalid address: {0}")]
    AddressFormat(String),
    /// The collected cells do not cover the requested capacity.
    #[error("Insufficient balance: required {required} shannons, available {available}")]
    InsufficientFunds {
        /// Capacity asked for, including the fee.
        required: u64,
        /// Sum of the capacities actually found.
        available: u64,
    },
    /// Transport or protocol failure reported by the ledger collaborator.
    #[error("Ledger query failed: {0}")]
    LedgerQuery(String),
    /// A mutator was called before the transaction skeleton was created.
    #[error("Transaction must be initialized first")]
    UninitializedTransaction,
    /// Signing or input attachment was requested with zero cells, indices or keys.
    #[error("Group is empty")]
    EmptyGroup,
    /// Witness or transaction encoding failure.
    #[error("Serialization failed: {0}")]
    Serialization(String),
    /// The key abstraction failed to produce a usable signature.
    #[error("Signing failed: {0}")]
    Signing(String),
    /// Sender and receiver addresses belong to different networks.
    #[error("From address and to address with different network: {from}:{to}")]
    NetworkMismatch {
        /// Network of the sender.
        from: String,
        /// Network of the receiver.
        to: String,
    },
    /// A deposited cell carries no block hash, so its header can not be loaded.
    #[error("Cell {0} has no block hash")]
    MissingBlockHash(OutPoint),
    /// The multisig descriptor violates `R <= M <= N`.
    #[error("Invalid multisig config: {0}")]
    InvalidMultisigConfig(String),
    /// Configuration could not be read or parsed.
    #[error("Config error: {0}")]
    Config(String),
}

/// Shorthand of `std::result::Result<T, ckb_sdk::Error>`.
pub type Result<T> = std::result::Result<T, Error>;

impl From<secp256k1::Error> for Error {
    fn from(err: secp256k1::Error) -> Self {
        Error::Signing(err.to_string())
    }
}

impl From<bech32::Error> for Error {
    fn from(err: bech32::Error) -> Self {
        Error::AddressFormat(err.to_string())
    }
}

impl From<FromSliceError> for Error {
    fn from(err: FromSliceError) -> Self {
        Error::Serialization(err.to_string())
    }
}

impl From<FromStrError> for Error {
    fn from(err: FromStrError) -> Self {
        Error::Serialization(err.to_string())
    }
}

impl From<VerificationError> for Error {
    fn from(err: VerificationError) -> Self {
        Error::Serialization(err.to_string())
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::LedgerQuery(err.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::LedgerQuery(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Config(err.to_string())
    }
}
