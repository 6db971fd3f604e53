use bytes::Bytes;

use crate::error::{Error, Result};
use crate::packed::Entity;
use crate::types::{CellDep, CellInput, CellOutput, H256};

/// A transaction under construction.
///
/// `inputs`/`witnesses` and `outputs`/`outputs_data` are parallel sequences,
/// so they can only grow in matched pairs. The signer is the only writer of an
/// existing witness slot, through [`Transaction::set_witness`].
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct Transaction {
    version: u32,
    cell_deps: Vec<CellDep>,
    header_deps: Vec<H256>,
    inputs: Vec<CellInput>,
    outputs: Vec<CellOutput>,
    outputs_data: Vec<Bytes>,
    witnesses: Vec<Bytes>,
}

impl Transaction {
    pub fn new(version: u32) -> Self {
        Transaction {
            version,
            ..Default::default()
        }
    }

    pub fn version(&self) -> u32 {
        self.version
    }

    pub fn cell_deps(&self) -> &[CellDep] {
        &self.cell_deps
    }

    pub fn header_deps(&self) -> &[H256] {
        &self.header_deps
    }

    pub fn inputs(&self) -> &[CellInput] {
        &self.inputs
    }

    pub fn outputs(&self) -> &[CellOutput] {
        &self.outputs
    }

    pub fn outputs_data(&self) -> &[Bytes] {
        &self.outputs_data
    }

    pub fn witnesses(&self) -> &[Bytes] {
        &self.witnesses
    }

    pub fn push_cell_dep(&mut self, cell_dep: CellDep) {
        self.cell_deps.push(cell_dep);
    }

    pub fn push_header_dep(&mut self, block_hash: H256) {
        self.header_deps.push(block_hash);
    }

    /// Appends an input with its witness slot, returns the input index.
    pub fn push_input(&mut self, input: CellInput, witness: Bytes) -> usize {
        self.inputs.push(input);
        self.witnesses.push(witness);
        self.inputs.len() - 1
    }

    /// Appends an output with its data, returns the output index.
    pub fn push_output(&mut self, output: CellOutput, data: Bytes) -> usize {
        self.outputs.push(output);
        self.outputs_data.push(data);
        self.outputs.len() - 1
    }

    /// Replaces the witness of an existing input.
    pub fn set_witness(&mut self, index: usize, witness: Bytes) -> Result<()> {
        let len = self.witnesses.len();
        let slot = self.witnesses.get_mut(index).ok_or_else(|| {
            Error::Serialization(format!(
                "witness index {} out of bound, witnesses length {}",
                index, len
            ))
        })?;
        *slot = witness;
        Ok(())
    }

    /// The transaction hash. Witnesses are not committed to it.
    pub fn hash(&self) -> H256 {
        H256(ckb_hash::blake2b_256(self.pack_raw().as_slice()))
    }
}
