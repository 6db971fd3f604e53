//! Well-known dependency cells.
//!
//! The registry is resolved once (built-in genesis values or configuration)
//! and then only ever shared by reference.

use serde::{Deserialize, Serialize};

use crate::address::NetworkType;
use crate::types::{h256, CellDep, DepType, OutPoint, H256};

/// Type hash of the secp256k1 + blake160 sighash-all lock.
pub const SIGHASH_TYPE_HASH: H256 =
    h256!("0x9bd7e06f3ecf4be0f2fcd2188b23f1b9fcc88e5d4b65a8637b17723bbda3cce8");
/// Type hash of the secp256k1 + blake160 multisig-all lock.
pub const MULTISIG_TYPE_HASH: H256 =
    h256!("0x5c5069eb0857efc65e1bca0c07df34c31663b3622fd3876c876320fc9634e2a8");
/// Type hash of the Nervos DAO program.
pub const DAO_TYPE_HASH: H256 =
    h256!("0x82d76d1b75fe2fd9a27dfbaa65a039221a380d76c926f378d3f81cf3e7e13f2e");

const MAINNET_DEP_GROUP_TX: H256 =
    h256!("0x71a7ba8fc96349fea0ed3a5c47992e3b4084b031a42264a018e0072e8172e46c");
const MAINNET_DAO_TX: H256 =
    h256!("0xe2fb199810d49a4d8beec56718ba2593b665db9d52299a0f9e6e75416d73ff5c");
const TESTNET_DEP_GROUP_TX: H256 =
    h256!("0xf8de3bb47d055cdf460d93a2a6e1b05f7432f9777c8c474abf4eec1d4aee5d37");
const TESTNET_DAO_TX: H256 =
    h256!("0x8f8c79eb6671709633fe6a46de93c0fedc9c1b8a6527a18d3983879542635c9f");

/// Location of one well-known script.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SystemScriptCell {
    pub code_hash: H256,
    pub out_point: ConfigOutPoint,
}

/// Out point with a plain integer index, as written in configuration files.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigOutPoint {
    pub tx_hash: H256,
    pub index: u32,
}

impl From<&ConfigOutPoint> for OutPoint {
    fn from(out_point: &ConfigOutPoint) -> Self {
        OutPoint::new(out_point.tx_hash.clone(), out_point.index)
    }
}

impl SystemScriptCell {
    fn new(code_hash: H256, tx_hash: H256, index: u32) -> Self {
        SystemScriptCell {
            code_hash,
            out_point: ConfigOutPoint { tx_hash, index },
        }
    }

    pub fn out_point(&self) -> OutPoint {
        OutPoint::from(&self.out_point)
    }

    pub fn cell_dep(&self, dep_type: DepType) -> CellDep {
        CellDep {
            out_point: self.out_point(),
            dep_type,
        }
    }
}

/// The dependency cells the builder wires into transactions.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SystemScripts {
    /// Dep group of the single-signature lock.
    pub secp_single_sig: SystemScriptCell,
    /// Dep group of the multi-signature lock.
    pub secp_multi_sig: SystemScriptCell,
    /// Code cell of the DAO program.
    pub dao: SystemScriptCell,
}

impl SystemScripts {
    pub fn mainnet() -> Self {
        SystemScripts {
            secp_single_sig: SystemScriptCell::new(SIGHASH_TYPE_HASH, MAINNET_DEP_GROUP_TX, 0),
            secp_multi_sig: SystemScriptCell::new(MULTISIG_TYPE_HASH, MAINNET_DEP_GROUP_TX, 1),
            dao: SystemScriptCell::new(DAO_TYPE_HASH, MAINNET_DAO_TX, 2),
        }
    }

    pub fn testnet() -> Self {
        SystemScripts {
            secp_single_sig: SystemScriptCell::new(SIGHASH_TYPE_HASH, TESTNET_DEP_GROUP_TX, 0),
            secp_multi_sig: SystemScriptCell::new(MULTISIG_TYPE_HASH, TESTNET_DEP_GROUP_TX, 1),
            dao: SystemScriptCell::new(DAO_TYPE_HASH, TESTNET_DAO_TX, 2),
        }
    }

    pub fn for_network(network: NetworkType) -> Self {
        match network {
            NetworkType::Mainnet => Self::mainnet(),
            NetworkType::Testnet => Self::testnet(),
        }
    }
}
