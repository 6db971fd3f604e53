//! Plain data types shared by the codec, collector, builder and signer.

mod transaction;
mod witness;

use bytes::Bytes;
use std::fmt;

use ckb_gen_types::packed;

use crate::packed::{Entity, Pack};

pub use ckb_fixed_hash::{h160, h256, H160, H256};
pub use transaction::Transaction;
pub use witness::WitnessArgs;

/// Block number.
pub type BlockNumber = u64;
/// Capacity in shannons.
pub type Capacity = u64;

/// How `Script::code_hash` is matched against cells.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum ScriptHashType {
    /// Matches the data hash of a code cell.
    #[default]
    Data,
    /// Matches the type script hash of a code cell.
    Type,
}

impl ScriptHashType {
    /// The molecule byte.
    pub fn as_byte(self) -> u8 {
        match self {
            ScriptHashType::Data => 0,
            ScriptHashType::Type => 1,
        }
    }
}

/// A lock or type program reference plus its arguments.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Default)]
pub struct Script {
    pub code_hash: H256,
    pub hash_type: ScriptHashType,
    pub args: Bytes,
}

impl Script {
    pub fn new(code_hash: H256, hash_type: ScriptHashType, args: Bytes) -> Self {
        Script {
            code_hash,
            hash_type,
            args,
        }
    }

    /// The script hash, which is what the ledger indexes cells by.
    pub fn hash(&self) -> H256 {
        let script: packed::Script = self.pack();
        H256(ckb_hash::blake2b_256(script.as_slice()))
    }
}

/// Reference to one output of one transaction.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Default)]
pub struct OutPoint {
    pub tx_hash: H256,
    pub index: u32,
}

impl OutPoint {
    pub fn new(tx_hash: H256, index: u32) -> Self {
        OutPoint { tx_hash, index }
    }
}

impl fmt::Display for OutPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#x}#{}", self.tx_hash, self.index)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Hash, Default)]
pub struct CellOutput {
    pub capacity: Capacity,
    pub lock: Script,
    pub type_: Option<Script>,
}

/// A live cell as returned by the ledger.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct Cell {
    pub out_point: OutPoint,
    pub capacity: Capacity,
    pub lock: Script,
    pub type_: Option<Script>,
    /// The block that created the cell, when the query reports it.
    pub block_hash: Option<H256>,
}

impl Cell {
    pub fn output(&self) -> CellOutput {
        CellOutput {
            capacity: self.capacity,
            lock: self.lock.clone(),
            type_: self.type_.clone(),
        }
    }
}

/// A live cell as returned by the paginated index query.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct LiveCell {
    pub created_by: OutPoint,
    pub cell_output: CellOutput,
}

impl From<LiveCell> for Cell {
    fn from(live: LiveCell) -> Self {
        Cell {
            out_point: live.created_by,
            capacity: live.cell_output.capacity,
            lock: live.cell_output.lock,
            type_: live.cell_output.type_,
            // the index query does not report the creating block
            block_hash: None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Hash, Default)]
pub struct CellInput {
    /// Encoded relative or absolute time lock.
    pub since: u64,
    pub previous_output: OutPoint,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum DepType {
    #[default]
    Code,
    DepGroup,
}

impl DepType {
    /// The molecule byte.
    pub fn as_byte(self) -> u8 {
        match self {
            DepType::Code => 0,
            DepType::DepGroup => 1,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Hash, Default)]
pub struct CellDep {
    pub out_point: OutPoint,
    pub dep_type: DepType,
}

/// The part of a block header the flows need.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct Header {
    pub number: BlockNumber,
    pub hash: H256,
    pub parent_hash: H256,
    pub epoch: u64,
    pub timestamp: u64,
    pub dao: H256,
}
