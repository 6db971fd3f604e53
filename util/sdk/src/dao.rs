//! Nervos DAO deposit and first withdraw step.
//!
//! Both wrap a [`TransactionBuilder`] created for the matching flow; callers
//! fund them through [`TransactionBuilder::add_inputs`] and sign with
//! [`crate::signer::sign_group`] as for any other transaction.

use crate::builder::{LockKind, TransactionBuilder, TxFlow};
use crate::error::Result;
use crate::system_scripts::SystemScripts;
use crate::traits::LedgerQuery;
use crate::types::{Capacity, Cell, Script};

/// Locks capacity into the DAO.
pub struct DaoDeposit<'a> {
    scripts: &'a SystemScripts,
    builder: TransactionBuilder,
}

impl<'a> DaoDeposit<'a> {
    pub fn new(scripts: &'a SystemScripts, lock_kind: LockKind) -> Self {
        DaoDeposit {
            scripts,
            builder: TransactionBuilder::new(TxFlow::Deposit, lock_kind, scripts),
        }
    }

    /// Adds a deposit cell owned by `lock`, returns the output index.
    pub fn deposit(&mut self, lock: Script, amount: Capacity) -> Result<usize> {
        self.builder
            .add_dao_deposit_output(lock, amount, self.scripts)
    }

    pub fn builder(&self) -> &TransactionBuilder {
        &self.builder
    }

    pub fn builder_mut(&mut self) -> &mut TransactionBuilder {
        &mut self.builder
    }

    pub fn into_builder(self) -> TransactionBuilder {
        self.builder
    }
}

/// Turns deposited cells into withdrawing cells.
pub struct DaoWithdrawPhase1 {
    builder: TransactionBuilder,
}

impl DaoWithdrawPhase1 {
    pub fn new(scripts: &SystemScripts, lock_kind: LockKind) -> Self {
        DaoWithdrawPhase1 {
            builder: TransactionBuilder::new(TxFlow::WithdrawPhase1, lock_kind, scripts),
        }
    }

    /// Spends one deposited cell, returns its input index.
    pub fn add_deposited_cell<L>(&mut self, ledger: &L, cell: &Cell) -> Result<usize>
    where
        L: LedgerQuery + ?Sized,
    {
        self.builder.add_dao_withdraw_cell(ledger, cell)
    }

    /// Adds a plain output, e.g. for the fee change.
    pub fn add_output(&mut self, lock: Script, amount: Capacity) -> Result<usize> {
        self.builder.add_output(lock, amount)
    }

    pub fn builder(&self) -> &TransactionBuilder {
        &self.builder
    }

    pub fn builder_mut(&mut self) -> &mut TransactionBuilder {
        &mut self.builder
    }

    pub fn into_builder(self) -> TransactionBuilder {
        self.builder
    }
}
