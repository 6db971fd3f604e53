//! Bech32 address codec.
//!
//! An address is a format tag plus format specific bytes, base32 encoded under
//! a network prefix. Short addresses refer to a well-known lock by index, full
//! addresses embed the whole code hash.

use bech32::{FromBase32, ToBase32, Variant};
use bytes::Bytes;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};
use crate::system_scripts::{MULTISIG_TYPE_HASH, SIGHASH_TYPE_HASH};
use crate::types::{Script, ScriptHashType, H256};

const PREFIX_MAINNET: &str = "ckb";
const PREFIX_TESTNET: &str = "ckt";

/// Args length of the default locks: a blake160 hash.
pub const SHORT_ARGS_LEN: usize = 20;
const SHORT_PAYLOAD_LEN: usize = 2 + SHORT_ARGS_LEN;
const FULL_PAYLOAD_MIN_LEN: usize = 1 + 32;

#[derive(Hash, Eq, PartialEq, Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NetworkType {
    Mainnet,
    Testnet,
}

impl NetworkType {
    pub fn from_prefix(value: &str) -> Option<NetworkType> {
        match value {
            PREFIX_MAINNET => Some(NetworkType::Mainnet),
            PREFIX_TESTNET => Some(NetworkType::Testnet),
            _ => None,
        }
    }

    pub fn to_prefix(self) -> &'static str {
        match self {
            NetworkType::Mainnet => PREFIX_MAINNET,
            NetworkType::Testnet => PREFIX_TESTNET,
        }
    }

    pub fn from_raw_str(value: &str) -> Option<NetworkType> {
        match value {
            "ckb" => Some(NetworkType::Mainnet),
            "ckb_testnet" => Some(NetworkType::Testnet),
            _ => None,
        }
    }

    pub fn to_str(self) -> &'static str {
        match self {
            NetworkType::Mainnet => "ckb",
            NetworkType::Testnet => "ckb_testnet",
        }
    }
}

impl fmt::Display for NetworkType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.to_str())
    }
}

/// Leading byte of the payload.
#[derive(Hash, Eq, PartialEq, Debug, Clone, Copy)]
#[repr(u8)]
pub enum AddressFormat {
    /// Well-known lock referenced by [`CodeHashIndex`].
    Short = 0x01,
    /// Full code hash, hash type `Data`.
    FullData = 0x02,
    /// Full code hash, hash type `Type`.
    FullType = 0x04,
}

impl AddressFormat {
    pub fn from_byte(value: u8) -> Result<AddressFormat> {
        match value {
            0x01 => Ok(AddressFormat::Short),
            0x02 => Ok(AddressFormat::FullData),
            0x04 => Ok(AddressFormat::FullType),
            _ => Err(Error::AddressFormat(format!(
                "unknown format type {:#04x}",
                value
            ))),
        }
    }
}

/// Index of a well-known lock in the short format.
///
/// Indices are permanent: a new well-known lock gets the next free index.
#[derive(Hash, Eq, PartialEq, Debug, Clone, Copy)]
#[repr(u8)]
pub enum CodeHashIndex {
    /// secp256k1 + blake160, sighash all.
    Sighash = 0x00,
    /// secp256k1 + blake160 multisig, sighash all.
    Multisig = 0x01,
}

impl CodeHashIndex {
    pub fn from_byte(value: u8) -> Result<CodeHashIndex> {
        match value {
            0x00 => Ok(CodeHashIndex::Sighash),
            0x01 => Ok(CodeHashIndex::Multisig),
            _ => Err(Error::AddressFormat(format!(
                "unknown code hash index {:#04x}",
                value
            ))),
        }
    }

    pub fn from_code_hash(code_hash: &H256) -> Option<CodeHashIndex> {
        if code_hash == &SIGHASH_TYPE_HASH {
            Some(CodeHashIndex::Sighash)
        } else if code_hash == &MULTISIG_TYPE_HASH {
            Some(CodeHashIndex::Multisig)
        } else {
            None
        }
    }

    pub fn code_hash(self) -> H256 {
        match self {
            CodeHashIndex::Sighash => SIGHASH_TYPE_HASH,
            CodeHashIndex::Multisig => MULTISIG_TYPE_HASH,
        }
    }
}

#[derive(Hash, Eq, PartialEq, Debug, Clone)]
pub struct Address {
    network: NetworkType,
    script: Script,
}

impl Address {
    pub fn new(network: NetworkType, script: Script) -> Address {
        Address { network, script }
    }

    pub fn network(&self) -> NetworkType {
        self.network
    }

    pub fn script(&self) -> &Script {
        &self.script
    }

    pub fn into_script(self) -> Script {
        self.script
    }

    /// Raw payload before base32 regrouping.
    pub fn payload(&self) -> Vec<u8> {
        let script = &self.script;
        if script.hash_type == ScriptHashType::Type && script.args.len() == SHORT_ARGS_LEN {
            if let Some(index) = CodeHashIndex::from_code_hash(&script.code_hash) {
                let mut payload = Vec::with_capacity(SHORT_PAYLOAD_LEN);
                payload.push(AddressFormat::Short as u8);
                payload.push(index as u8);
                payload.extend_from_slice(&script.args);
                return payload;
            }
        }
        let format = match script.hash_type {
            ScriptHashType::Data => AddressFormat::FullData,
            ScriptHashType::Type => AddressFormat::FullType,
        };
        let mut payload = Vec::with_capacity(FULL_PAYLOAD_MIN_LEN + script.args.len());
        payload.push(format as u8);
        payload.extend_from_slice(script.code_hash.as_bytes());
        payload.extend_from_slice(&script.args);
        payload
    }

    pub fn encode(&self) -> Result<String> {
        let value = bech32::encode(
            self.network.to_prefix(),
            self.payload().to_base32(),
            Variant::Bech32,
        )?;
        Ok(value)
    }

    pub fn decode(input: &str) -> Result<Address> {
        let (hrp, data, variant) = bech32::decode(input)?;
        if variant != Variant::Bech32 {
            return Err(Error::AddressFormat("bech32m is not supported".to_owned()));
        }
        let network = NetworkType::from_prefix(&hrp)
            .ok_or_else(|| Error::AddressFormat(format!("invalid prefix {}", hrp)))?;
        let payload = Vec::<u8>::from_base32(&data)?;
        let script = script_from_payload(&payload)?;
        Ok(Address { network, script })
    }
}

fn script_from_payload(payload: &[u8]) -> Result<Script> {
    let (tag, body) = payload
        .split_first()
        .ok_or_else(|| Error::AddressFormat("empty payload".to_owned()))?;
    let format = AddressFormat::from_byte(*tag)?;
    match format {
        AddressFormat::Short => {
            if payload.len() != SHORT_PAYLOAD_LEN {
                return Err(Error::AddressFormat(format!(
                    "invalid short payload length {}",
                    payload.len()
                )));
            }
            let index = CodeHashIndex::from_byte(body[0])?;
            Ok(Script::new(
                index.code_hash(),
                ScriptHashType::Type,
                Bytes::copy_from_slice(&body[1..]),
            ))
        }
        AddressFormat::FullData | AddressFormat::FullType => {
            if payload.len() < FULL_PAYLOAD_MIN_LEN {
                return Err(Error::AddressFormat(format!(
                    "invalid full payload length {}",
                    payload.len()
                )));
            }
            let hash_type = if format == AddressFormat::FullData {
                ScriptHashType::Data
            } else {
                ScriptHashType::Type
            };
            Ok(Script::new(
                H256::from_slice(&body[..32])?,
                hash_type,
                Bytes::copy_from_slice(&body[32..]),
            ))
        }
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let value = self.encode().map_err(|_| fmt::Error)?;
        write!(f, "{}", value)
    }
}

impl FromStr for Address {
    type Err = Error;

    fn from_str(input: &str) -> Result<Self> {
        Address::decode(input)
    }
}

/// Encodes `script` as an address of `network`.
pub fn encode(network: NetworkType, script: &Script) -> Result<String> {
    Address::new(network, script.clone()).encode()
}

/// Decodes an address back into its network and script.
pub fn decode(input: &str) -> Result<(NetworkType, Script)> {
    let address = Address::decode(input)?;
    Ok((address.network, address.script))
}
