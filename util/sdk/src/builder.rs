//! Transaction skeletons and the mutators that fund them.

use bytes::Bytes;

use crate::error::{Error, Result};
use crate::system_scripts::SystemScripts;
use crate::traits::LedgerQuery;
use crate::types::{
    Capacity, Cell, CellDep, CellInput, CellOutput, DepType, Script, ScriptHashType, Transaction,
    WitnessArgs, H256,
};

/// Transaction version produced by the builder.
pub const TX_VERSION: u32 = 0;
/// Size of a recoverable secp256k1 signature.
pub const SIGNATURE_SIZE: usize = 65;

/// What the transaction is for, which decides its fixed cell deps.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TxFlow {
    /// Plain transfer: the signing dep group only.
    Payment,
    /// Lock capacity into the DAO: signing dep group and DAO code cell.
    Deposit,
    /// First withdraw step: same deps as the deposit, plus one header dep
    /// per withdrawn cell.
    WithdrawPhase1,
}

/// Which default lock guards the inputs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum LockKind {
    #[default]
    SingleSig,
    MultiSig,
    /// Inputs under both locks: single-sig dep group first, then multi-sig.
    Hybrid,
}

/// Placeholder template for one single-sig group.
pub fn single_sig_witness_template() -> WitnessArgs {
    WitnessArgs::new_with_lock(Bytes::from(vec![0u8; SIGNATURE_SIZE]))
}

/// Type script of DAO cells.
pub fn dao_type_script(scripts: &SystemScripts) -> Script {
    Script::new(scripts.dao.code_hash.clone(), ScriptHashType::Type, Bytes::new())
}

/// Assembles a transaction while keeping inputs and witnesses, outputs and
/// outputs data in lock-step.
///
/// A default builder has no skeleton yet; every mutator fails with
/// [`Error::UninitializedTransaction`] until [`TransactionBuilder::init`]
/// runs.
#[derive(Debug, Default)]
pub struct TransactionBuilder {
    tx: Option<Transaction>,
}

impl TransactionBuilder {
    pub fn new(flow: TxFlow, lock_kind: LockKind, scripts: &SystemScripts) -> Self {
        let mut builder = TransactionBuilder::default();
        builder.init(flow, lock_kind, scripts);
        builder
    }

    /// Creates the skeleton for `flow`, replacing any previous one.
    pub fn init(&mut self, flow: TxFlow, lock_kind: LockKind, scripts: &SystemScripts) {
        let signing_cells = match lock_kind {
            LockKind::SingleSig => vec![&scripts.secp_single_sig],
            LockKind::MultiSig => vec![&scripts.secp_multi_sig],
            LockKind::Hybrid => vec![&scripts.secp_single_sig, &scripts.secp_multi_sig],
        };
        let mut tx = Transaction::new(TX_VERSION);
        for cell in signing_cells {
            tx.push_cell_dep(cell.cell_dep(DepType::DepGroup));
        }
        match flow {
            TxFlow::Payment => {}
            TxFlow::Deposit | TxFlow::WithdrawPhase1 => {
                tx.push_cell_dep(scripts.dao.cell_dep(DepType::Code));
            }
        }
        log::debug!(
            "init {:?} transaction with {:?} lock, {} cell deps",
            flow,
            lock_kind,
            tx.cell_deps().len()
        );
        self.tx = Some(tx);
    }

    pub fn is_initialized(&self) -> bool {
        self.tx.is_some()
    }

    pub fn transaction(&self) -> Result<&Transaction> {
        self.tx.as_ref().ok_or(Error::UninitializedTransaction)
    }

    pub fn transaction_mut(&mut self) -> Result<&mut Transaction> {
        self.tx.as_mut().ok_or(Error::UninitializedTransaction)
    }

    /// Takes the transaction out, leaving the builder uninitialized.
    pub fn build(&mut self) -> Result<Transaction> {
        self.tx.take().ok_or(Error::UninitializedTransaction)
    }

    pub fn add_cell_dep(&mut self, cell_dep: CellDep) -> Result<()> {
        self.transaction_mut()?.push_cell_dep(cell_dep);
        Ok(())
    }

    pub fn add_header_dep(&mut self, block_hash: H256) -> Result<()> {
        self.transaction_mut()?.push_header_dep(block_hash);
        Ok(())
    }

    /// Appends an untyped output with empty data.
    pub fn add_output(&mut self, lock: Script, amount: Capacity) -> Result<usize> {
        let output = CellOutput {
            capacity: amount,
            lock,
            type_: None,
        };
        self.add_output_with_data(output, Bytes::new())
    }

    pub fn add_output_with_data(&mut self, output: CellOutput, data: Bytes) -> Result<usize> {
        Ok(self.transaction_mut()?.push_output(output, data))
    }

    /// Appends a DAO deposit cell: DAO typed, 8 zero bytes of data.
    pub fn add_dao_deposit_output(
        &mut self,
        lock: Script,
        amount: Capacity,
        scripts: &SystemScripts,
    ) -> Result<usize> {
        let output = CellOutput {
            capacity: amount,
            lock,
            type_: Some(dao_type_script(scripts)),
        };
        self.add_output_with_data(output, Bytes::from(0u64.to_le_bytes().to_vec()))
    }

    /// Spends `cells`, one empty witness each.
    ///
    /// Returns the new input indices, which form one signing group, and the
    /// single-sig witness template for it.
    pub fn add_inputs(&mut self, cells: &[Cell]) -> Result<(Vec<usize>, WitnessArgs)> {
        if cells.is_empty() {
            return Err(Error::EmptyGroup);
        }
        let tx = self.transaction_mut()?;
        let group = cells
            .iter()
            .map(|cell| {
                let input = CellInput {
                    since: 0,
                    previous_output: cell.out_point.clone(),
                };
                tx.push_input(input, Bytes::new())
            })
            .collect::<Vec<_>>();
        log::debug!("add {} inputs, group {:?}", group.len(), group);
        Ok((group, single_sig_witness_template()))
    }

    /// Spends a deposited cell in withdraw phase 1.
    ///
    /// Adds the header dep of the deposit block, the input with an empty
    /// witness, and an output copying the cell whose data is the deposit
    /// block number. Returns the input index.
    pub fn add_dao_withdraw_cell<L>(&mut self, ledger: &L, cell: &Cell) -> Result<usize>
    where
        L: LedgerQuery + ?Sized,
    {
        // fail early, before the ledger round trip
        self.transaction()?;
        let block_hash = cell
            .block_hash
            .clone()
            .ok_or_else(|| Error::MissingBlockHash(cell.out_point.clone()))?;
        let header = ledger.get_header(&block_hash)?;
        log::debug!(
            "withdraw cell {} deposited at block {}",
            cell.out_point,
            header.number
        );

        let tx = self.transaction_mut()?;
        tx.push_header_dep(block_hash);
        let index = tx.push_input(
            CellInput {
                since: 0,
                previous_output: cell.out_point.clone(),
            },
            Bytes::new(),
        );
        tx.push_output(
            cell.output(),
            Bytes::from(header.number.to_le_bytes().to_vec()),
        );
        Ok(index)
    }
}
