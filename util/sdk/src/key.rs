//! secp256k1 keys and the multisig descriptor.

use bytes::Bytes;
use lazy_static::lazy_static;
use secp256k1::{All, Message, PublicKey, Secp256k1, SecretKey};
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use crate::builder::SIGNATURE_SIZE;
use crate::error::{Error, Result};
use crate::system_scripts::SystemScripts;
use crate::traits::Key;
use crate::types::{Script, ScriptHashType, H160, H256};

lazy_static! {
    pub static ref SECP256K1: Secp256k1<All> = Secp256k1::new();
}

/// A local private key signing with recoverable ECDSA.
pub struct Secp256k1Key {
    secret: SecretKey,
    pubkey: PublicKey,
}

impl Secp256k1Key {
    pub fn from_slice(key: &[u8]) -> Result<Self> {
        let secret = SecretKey::from_slice(key)?;
        Ok(Self::from(secret))
    }

    pub fn pubkey(&self) -> &PublicKey {
        &self.pubkey
    }

    /// blake160 of the compressed public key.
    pub fn lock_args(&self) -> H160 {
        H160(ckb_hash::blake160(self.pubkey.serialize()))
    }

    /// The default single-sig lock guarded by this key.
    pub fn lock_script(&self, scripts: &SystemScripts) -> Script {
        Script::new(
            scripts.secp_single_sig.code_hash.clone(),
            ScriptHashType::Type,
            Bytes::copy_from_slice(self.lock_args().as_bytes()),
        )
    }
}

impl From<SecretKey> for Secp256k1Key {
    fn from(secret: SecretKey) -> Self {
        let pubkey = PublicKey::from_secret_key(&SECP256K1, &secret);
        Secp256k1Key { secret, pubkey }
    }
}

impl FromStr for Secp256k1Key {
    type Err = Error;

    fn from_str(input: &str) -> Result<Self> {
        let input = input.strip_prefix("0x").unwrap_or(input);
        let hex = H256::from_str(input).map_err(|_| Error::Signing("invalid privkey".to_owned()))?;
        Self::from_slice(hex.as_bytes())
    }
}

impl fmt::Debug for Secp256k1Key {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Secp256k1Key")
            .field("pubkey", &self.pubkey)
            .finish()
    }
}

impl Key for Secp256k1Key {
    fn public_identity(&self) -> Bytes {
        Bytes::copy_from_slice(&self.pubkey.serialize())
    }

    /// `r ∥ s ∥ recovery id`, 65 bytes.
    fn sign(&self, digest: &H256) -> Result<Bytes> {
        let message = Message::from_digest(digest.0);
        let signature = SECP256K1.sign_ecdsa_recoverable(&message, &self.secret);
        let (rec_id, data) = signature.serialize_compact();
        let mut signature_bytes = [0u8; SIGNATURE_SIZE];
        signature_bytes[0..64].copy_from_slice(&data[0..64]);
        signature_bytes[64] = i32::from(rec_id) as u8;
        Ok(Bytes::copy_from_slice(&signature_bytes))
    }
}

/// `S | R | M | N | blake160(pubkey_1) | ... | blake160(pubkey_N)`: the
/// first `R` keys must sign, `M` signatures are required in total.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct MultisigConfig {
    sighash_addresses: Vec<H160>,
    require_first_n: u8,
    threshold: u8,
}

impl MultisigConfig {
    pub fn new(
        sighash_addresses: Vec<H160>,
        require_first_n: u8,
        threshold: u8,
    ) -> Result<Self> {
        let invalid = |reason: String| -> Result<Self> { Err(Error::InvalidMultisigConfig(reason)) };
        if sighash_addresses.is_empty() || sighash_addresses.len() > usize::from(u8::MAX) {
            return invalid(format!("invalid key count {}", sighash_addresses.len()));
        }
        let unique = sighash_addresses.iter().collect::<HashSet<_>>();
        if unique.len() != sighash_addresses.len() {
            return invalid("duplicated sighash address".to_owned());
        }
        if threshold == 0 || usize::from(threshold) > sighash_addresses.len() {
            return invalid(format!(
                "threshold {} out of range 1..={}",
                threshold,
                sighash_addresses.len()
            ));
        }
        if require_first_n > threshold {
            return invalid(format!(
                "require_first_n {} is greater than threshold {}",
                require_first_n, threshold
            ));
        }
        Ok(MultisigConfig {
            sighash_addresses,
            require_first_n,
            threshold,
        })
    }

    pub fn sighash_addresses(&self) -> &[H160] {
        &self.sighash_addresses
    }

    pub fn require_first_n(&self) -> u8 {
        self.require_first_n
    }

    pub fn threshold(&self) -> u8 {
        self.threshold
    }

    /// The descriptor prefix of the multisig witness lock.
    pub fn to_witness_data(&self) -> Bytes {
        let mut data = Vec::with_capacity(4 + 20 * self.sighash_addresses.len());
        data.extend_from_slice(&[
            0u8,
            self.require_first_n,
            self.threshold,
            self.sighash_addresses.len() as u8,
        ]);
        for address in &self.sighash_addresses {
            data.extend_from_slice(address.as_bytes());
        }
        Bytes::from(data)
    }

    /// Lock args of the multisig lock.
    pub fn hash160(&self) -> H160 {
        H160(ckb_hash::blake160(self.to_witness_data()))
    }

    pub fn lock_script(&self, scripts: &SystemScripts) -> Script {
        Script::new(
            scripts.secp_multi_sig.code_hash.clone(),
            ScriptHashType::Type,
            Bytes::copy_from_slice(self.hash160().as_bytes()),
        )
    }
}
