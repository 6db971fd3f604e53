//! Signing message construction and witness finalization.
//!
//! The digest of a group is
//! `hash(tx_hash ∥ len(w0) ∥ w0 ∥ len(w1) ∥ w1 ∥ ...)` where `w0` is the
//! group's first witness with its lock replaced by a zero placeholder of the
//! final size, the other `wi` are the group's remaining witnesses as they
//! are, and every length is a little-endian `u64`. Only the first witness of
//! the group receives the signature.

use bytes::Bytes;
use ckb_gen_types::packed;

use crate::builder::SIGNATURE_SIZE;
use crate::error::{Error, Result};
use crate::key::MultisigConfig;
use crate::packed::{Entity, Pack};
use crate::traits::Key;
use crate::types::{Transaction, WitnessArgs, H256};

/// How a group gets signed.
pub enum SigningScheme<'a> {
    /// One key, the lock is the bare signature.
    Single(&'a dyn Key),
    /// Several keys over the same digest, the lock is the multisig descriptor
    /// followed by one signature per key in the given order.
    Multi {
        keys: Vec<&'a dyn Key>,
        config: &'a MultisigConfig,
    },
}

impl<'a> SigningScheme<'a> {
    /// Zero-filled lock with exactly the size of the final lock.
    pub fn placeholder_lock(&self) -> Result<Bytes> {
        match self {
            SigningScheme::Single(_) => Ok(Bytes::from(vec![0u8; SIGNATURE_SIZE])),
            SigningScheme::Multi { keys, config } => {
                self.check_multi(keys, config)?;
                let mut lock = config.to_witness_data().to_vec();
                lock.resize(lock.len() + SIGNATURE_SIZE * keys.len(), 0);
                Ok(Bytes::from(lock))
            }
        }
    }

    fn check_multi(&self, keys: &[&dyn Key], config: &MultisigConfig) -> Result<()> {
        if keys.is_empty() {
            return Err(Error::EmptyGroup);
        }
        if keys.len() != usize::from(config.threshold()) {
            return Err(Error::InvalidMultisigConfig(format!(
                "{} keys given for threshold {}",
                keys.len(),
                config.threshold()
            )));
        }
        Ok(())
    }

    /// Signs `digest` and lays the signatures out as the final lock.
    fn final_lock(&self, digest: &H256) -> Result<Bytes> {
        match self {
            SigningScheme::Single(key) => sign_checked(*key, digest),
            SigningScheme::Multi { keys, config } => {
                self.check_multi(keys, config)?;
                let mut lock = config.to_witness_data().to_vec();
                for key in keys {
                    lock.extend_from_slice(&sign_checked(*key, digest)?);
                }
                Ok(Bytes::from(lock))
            }
        }
    }
}

fn sign_checked(key: &dyn Key, digest: &H256) -> Result<Bytes> {
    let signature = key.sign(digest)?;
    if signature.len() != SIGNATURE_SIZE {
        return Err(Error::Signing(format!(
            "expect {} bytes signature, got {}",
            SIGNATURE_SIZE,
            signature.len()
        )));
    }
    Ok(signature)
}

/// The template with its lock replaced by the placeholder of `scheme`.
pub fn placeholder_witness(template: &WitnessArgs, scheme: &SigningScheme) -> Result<WitnessArgs> {
    Ok(template.clone().lock(Some(scheme.placeholder_lock()?)))
}

/// Digest of a group whose first witness is `first_witness`.
///
/// `first_witness` must already carry the lock placeholder; see
/// [`placeholder_witness`].
pub fn signing_message(
    tx: &Transaction,
    group: &[usize],
    first_witness: &WitnessArgs,
) -> Result<H256> {
    let (first, rest) = group.split_first().ok_or(Error::EmptyGroup)?;
    let witnesses = tx.witnesses();
    for index in group {
        if *index >= witnesses.len() {
            return Err(Error::Serialization(format!(
                "group index {} out of bound, witnesses length {}",
                index,
                witnesses.len()
            )));
        }
    }

    let mut blake2b = ckb_hash::new_blake2b();
    blake2b.update(tx.hash().as_bytes());
    let witness: packed::WitnessArgs = first_witness.pack();
    let witness = witness.as_slice();
    blake2b.update(&(witness.len() as u64).to_le_bytes());
    blake2b.update(witness);
    for index in rest {
        let witness = &witnesses[*index];
        blake2b.update(&(witness.len() as u64).to_le_bytes());
        blake2b.update(witness);
    }
    let mut message = [0u8; 32];
    blake2b.finalize(&mut message);
    log::debug!(
        "signing message of group {:?} (first witness slot {}): {:#x}",
        group,
        first,
        H256(message)
    );
    Ok(H256(message))
}

/// Signs one group and writes the final witness into its first slot.
///
/// The input and output type fields of `template` are kept, the lock field is
/// replaced. Nothing is written when any step fails.
pub fn sign_group(
    tx: &mut Transaction,
    group: &[usize],
    template: &WitnessArgs,
    scheme: &SigningScheme,
) -> Result<()> {
    let first = *group.first().ok_or(Error::EmptyGroup)?;
    let placeholder = placeholder_witness(template, scheme)?;
    let digest = signing_message(tx, group, &placeholder)?;
    let lock = scheme.final_lock(&digest)?;
    let witness: packed::WitnessArgs = template.clone().lock(Some(lock)).pack();
    tx.set_witness(first, witness.as_bytes())
}
