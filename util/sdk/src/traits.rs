//! Boundaries to the collaborators this crate does not own.

use bytes::Bytes;

use crate::error::Result;
use crate::types::{BlockNumber, Cell, Header, LiveCell, Transaction, H256};

/// Read access to a ledger node plus transaction submission.
///
/// Implementations report every failure as [`Error::LedgerQuery`]; callers get
/// them unchanged, nothing here retries.
///
/// [`Error::LedgerQuery`]: crate::Error::LedgerQuery
pub trait LedgerQuery {
    /// Header of the current chain tip.
    fn get_tip_header(&self) -> Result<Header>;

    /// Cells of `lock_hash` created in blocks `from..=to`.
    fn get_cells_by_lock_hash(
        &self,
        lock_hash: &H256,
        from: BlockNumber,
        to: BlockNumber,
    ) -> Result<Vec<Cell>>;

    /// One page of the live cells of `lock_hash` from the node's index.
    fn get_live_cells_by_lock_hash(
        &self,
        lock_hash: &H256,
        page: u64,
        per_page: u64,
        reverse_order: bool,
    ) -> Result<Vec<LiveCell>>;

    /// Header of the block `block_hash`; an unknown block is an error.
    fn get_header(&self, block_hash: &H256) -> Result<Header>;

    /// Submits `tx` and returns the hash the node assigned to it.
    fn send_transaction(&self, tx: &Transaction) -> Result<H256>;
}

/// A signing capability: local key, hardware token or remote signer.
///
/// `sign` may block; wrap the key, not the signer, to add timeouts.
pub trait Key {
    /// Serialized public key.
    fn public_identity(&self) -> Bytes;

    /// Signs a 32-byte digest.
    fn sign(&self, digest: &H256) -> Result<Bytes>;
}
