//! JSON views of the ledger types, as the node's RPC speaks them.

use serde::{Deserialize, Serialize};

use super::{JsonBytes, Uint32, Uint64};
use crate::error::Error;
use crate::types::{self as model, H256};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScriptHashType {
    Data,
    Type,
}

impl From<model::ScriptHashType> for ScriptHashType {
    fn from(hash_type: model::ScriptHashType) -> Self {
        match hash_type {
            model::ScriptHashType::Data => ScriptHashType::Data,
            model::ScriptHashType::Type => ScriptHashType::Type,
        }
    }
}

impl From<ScriptHashType> for model::ScriptHashType {
    fn from(json: ScriptHashType) -> Self {
        match json {
            ScriptHashType::Data => model::ScriptHashType::Data,
            ScriptHashType::Type => model::ScriptHashType::Type,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Script {
    pub code_hash: H256,
    pub hash_type: ScriptHashType,
    pub args: JsonBytes,
}

impl From<model::Script> for Script {
    fn from(script: model::Script) -> Self {
        Script {
            code_hash: script.code_hash,
            hash_type: script.hash_type.into(),
            args: JsonBytes::from_bytes(script.args),
        }
    }
}

impl From<Script> for model::Script {
    fn from(json: Script) -> Self {
        model::Script::new(json.code_hash, json.hash_type.into(), json.args.into_bytes())
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OutPoint {
    pub tx_hash: H256,
    pub index: Uint32,
}

impl From<model::OutPoint> for OutPoint {
    fn from(out_point: model::OutPoint) -> Self {
        OutPoint {
            tx_hash: out_point.tx_hash,
            index: out_point.index.into(),
        }
    }
}

impl From<OutPoint> for model::OutPoint {
    fn from(json: OutPoint) -> Self {
        model::OutPoint::new(json.tx_hash, json.index.value())
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CellOutput {
    pub capacity: Uint64,
    pub lock: Script,
    #[serde(rename = "type")]
    pub type_: Option<Script>,
}

impl From<model::CellOutput> for CellOutput {
    fn from(output: model::CellOutput) -> Self {
        CellOutput {
            capacity: output.capacity.into(),
            lock: output.lock.into(),
            type_: output.type_.map(Into::into),
        }
    }
}

impl From<CellOutput> for model::CellOutput {
    fn from(json: CellOutput) -> Self {
        model::CellOutput {
            capacity: json.capacity.value(),
            lock: json.lock.into(),
            type_: json.type_.map(Into::into),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DepType {
    Code,
    DepGroup,
}

impl From<model::DepType> for DepType {
    fn from(dep_type: model::DepType) -> Self {
        match dep_type {
            model::DepType::Code => DepType::Code,
            model::DepType::DepGroup => DepType::DepGroup,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CellDep {
    pub out_point: OutPoint,
    pub dep_type: DepType,
}

impl From<model::CellDep> for CellDep {
    fn from(cell_dep: model::CellDep) -> Self {
        CellDep {
            out_point: cell_dep.out_point.into(),
            dep_type: cell_dep.dep_type.into(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CellInput {
    pub since: Uint64,
    pub previous_output: OutPoint,
}

impl From<model::CellInput> for CellInput {
    fn from(input: model::CellInput) -> Self {
        CellInput {
            since: input.since.into(),
            previous_output: input.previous_output.into(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Transaction {
    pub version: Uint32,
    pub cell_deps: Vec<CellDep>,
    pub header_deps: Vec<H256>,
    pub inputs: Vec<CellInput>,
    pub outputs: Vec<CellOutput>,
    pub outputs_data: Vec<JsonBytes>,
    pub witnesses: Vec<JsonBytes>,
}

impl From<&model::Transaction> for Transaction {
    fn from(tx: &model::Transaction) -> Self {
        Transaction {
            version: tx.version().into(),
            cell_deps: tx.cell_deps().iter().cloned().map(Into::into).collect(),
            header_deps: tx.header_deps().to_vec(),
            inputs: tx.inputs().iter().cloned().map(Into::into).collect(),
            outputs: tx.outputs().iter().cloned().map(Into::into).collect(),
            outputs_data: tx.outputs_data().iter().cloned().map(Into::into).collect(),
            witnesses: tx.witnesses().iter().cloned().map(Into::into).collect(),
        }
    }
}

/// Header fields the SDK reads; the rest of the node's header is ignored.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeaderView {
    pub hash: H256,
    pub number: Uint64,
    pub parent_hash: H256,
    pub epoch: Uint64,
    pub timestamp: Uint64,
    pub dao: H256,
}

impl From<HeaderView> for model::Header {
    fn from(json: HeaderView) -> Self {
        model::Header {
            number: json.number.value(),
            hash: json.hash,
            parent_hash: json.parent_hash,
            epoch: json.epoch.value(),
            timestamp: json.timestamp.value(),
            dao: json.dao,
        }
    }
}

/// Item of `get_cells_by_lock_hash`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellOutputWithOutPoint {
    pub out_point: OutPoint,
    #[serde(default)]
    pub block_hash: Option<H256>,
    pub capacity: Uint64,
    pub lock: Script,
    #[serde(rename = "type", default)]
    pub type_: Option<Script>,
}

impl From<CellOutputWithOutPoint> for model::Cell {
    fn from(json: CellOutputWithOutPoint) -> Self {
        model::Cell {
            out_point: json.out_point.into(),
            capacity: json.capacity.value(),
            lock: json.lock.into(),
            type_: json.type_.map(Into::into),
            block_hash: json.block_hash,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionPoint {
    pub block_number: Uint64,
    pub tx_hash: H256,
    pub index: Uint32,
}

/// Item of `get_live_cells_by_lock_hash`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LiveCell {
    pub created_by: TransactionPoint,
    pub cell_output: CellOutput,
}

impl From<LiveCell> for model::LiveCell {
    fn from(json: LiveCell) -> Self {
        model::LiveCell {
            created_by: model::OutPoint::new(json.created_by.tx_hash, json.created_by.index.value()),
            cell_output: json.cell_output.into(),
        }
    }
}

/// JSON-RPC 2.0 response body.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum Output {
    Failure(Failure),
    Success(Success),
}

#[derive(Debug, Deserialize)]
pub struct Success {
    pub result: serde_json::Value,
}

#[derive(Debug, Deserialize)]
pub struct Failure {
    pub error: RpcError,
}

#[derive(Debug, Deserialize)]
pub struct RpcError {
    pub code: i64,
    pub message: String,
    #[serde(default)]
    pub data: Option<serde_json::Value>,
}

impl From<RpcError> for Error {
    fn from(err: RpcError) -> Self {
        match err.data {
            Some(data) => Error::LedgerQuery(format!("{} ({}): {}", err.message, err.code, data)),
            None => Error::LedgerQuery(format!("{} ({})", err.message, err.code)),
        }
    }
}
