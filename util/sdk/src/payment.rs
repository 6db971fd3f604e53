//! Simple transfer between two addresses of the same network.

use crate::address::{Address, NetworkType};
use crate::builder::{LockKind, TransactionBuilder, TxFlow};
use crate::collector::{CellCollector, CollectStrategy};
use crate::error::{Error, Result};
use crate::signer::{sign_group, SigningScheme};
use crate::system_scripts::SystemScripts;
use crate::traits::{Key, LedgerQuery};
use crate::types::{Capacity, Script, Transaction, WitnessArgs, H256};

/// Pays `amount` shannons from one address to another, spending `fee` on top.
///
/// The change, if any, goes back to the sender.
#[derive(Debug)]
pub struct Payment {
    network: NetworkType,
    from: Script,
    to: Script,
    amount: Capacity,
    fee: Capacity,
    strategy: CollectStrategy,
    generated: Option<Generated>,
}

#[derive(Debug)]
struct Generated {
    tx: Transaction,
    group: Vec<usize>,
    template: WitnessArgs,
}

impl Payment {
    pub fn new(from: &str, to: &str, amount: Capacity, fee: Capacity) -> Result<Self> {
        let from_address = Address::decode(from)?;
        let to_address = Address::decode(to)?;
        if from_address.network() != to_address.network() {
            return Err(Error::NetworkMismatch {
                from: from_address.network().to_string(),
                to: to_address.network().to_string(),
            });
        }
        Ok(Payment {
            network: from_address.network(),
            from: from_address.into_script(),
            to: to_address.into_script(),
            amount,
            fee,
            strategy: CollectStrategy::default(),
            generated: None,
        })
    }

    pub fn strategy(mut self, strategy: CollectStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    pub fn network(&self) -> NetworkType {
        self.network
    }

    pub fn from_script(&self) -> &Script {
        &self.from
    }

    pub fn to_script(&self) -> &Script {
        &self.to
    }

    /// The generated transaction, signed or not.
    pub fn transaction(&self) -> Result<&Transaction> {
        self.generated
            .as_ref()
            .map(|generated| &generated.tx)
            .ok_or(Error::UninitializedTransaction)
    }

    /// Input indices of the sender group.
    pub fn group(&self) -> Result<&[usize]> {
        self.generated
            .as_ref()
            .map(|generated| generated.group.as_slice())
            .ok_or(Error::UninitializedTransaction)
    }

    /// Collects the sender's cells and builds the unsigned transaction.
    ///
    /// Outputs are the receiver first, then the change when it is not zero.
    pub fn generate_tx<L>(&mut self, ledger: &L, scripts: &SystemScripts) -> Result<&Transaction>
    where
        L: LedgerQuery + ?Sized,
    {
        let required = self.amount.saturating_add(self.fee);
        let (cells, total) = CellCollector::new(ledger, self.from.clone(), required)
            .strategy(self.strategy)
            .collect()?;
        if total < required {
            return Err(Error::InsufficientFunds {
                required,
                available: total,
            });
        }

        let lock_kind = if self.from.code_hash == scripts.secp_multi_sig.code_hash {
            LockKind::MultiSig
        } else {
            LockKind::SingleSig
        };
        let mut builder = TransactionBuilder::new(TxFlow::Payment, lock_kind, scripts);
        builder.add_output(self.to.clone(), self.amount)?;
        let change = total - required;
        if change > 0 {
            builder.add_output(self.from.clone(), change)?;
        }
        let (group, template) = builder.add_inputs(&cells)?;
        log::debug!(
            "payment of {} with fee {}: {} inputs, change {}",
            self.amount,
            self.fee,
            group.len(),
            change
        );

        let generated = self.generated.insert(Generated {
            tx: builder.build()?,
            group,
            template,
        });
        Ok(&generated.tx)
    }

    /// Signs the sender group with one key.
    pub fn sign(&mut self, key: &dyn Key) -> Result<&Transaction> {
        self.sign_with(&SigningScheme::Single(key))
    }

    /// Signs the sender group with any scheme, e.g. multisig.
    pub fn sign_with(&mut self, scheme: &SigningScheme) -> Result<&Transaction> {
        let generated = self
            .generated
            .as_mut()
            .ok_or(Error::UninitializedTransaction)?;
        sign_group(
            &mut generated.tx,
            &generated.group,
            &generated.template,
            scheme,
        )?;
        Ok(&generated.tx)
    }

    pub fn send<L>(&self, ledger: &L) -> Result<H256>
    where
        L: LedgerQuery + ?Sized,
    {
        let tx = self.transaction()?;
        let hash = ledger.send_transaction(tx)?;
        log::debug!("sent payment transaction {:#x}", hash);
        Ok(hash)
    }
}
