use super::types::{CellOutputWithOutPoint, HeaderView, LiveCell, Transaction};
use super::Uint64;
use crate::error::{Error, Result};
use crate::traits::LedgerQuery;
use crate::types::{self as model, BlockNumber, H256};

jsonrpc!(
    /// Raw JSON-RPC methods of a node.
    pub struct Inner {
        pub fn get_tip_header(&self) -> HeaderView;
        pub fn get_header(&self, block_hash: H256) -> Option<HeaderView>;
        pub fn get_cells_by_lock_hash(
            &self,
            lock_hash: H256,
            from: Uint64,
            to: Uint64
        ) -> Vec<CellOutputWithOutPoint>;
        pub fn get_live_cells_by_lock_hash(
            &self,
            lock_hash: H256,
            page: Uint64,
            per_page: Uint64,
            reverse_order: Option<bool>
        ) -> Vec<LiveCell>;
        pub fn send_transaction(&self, tx: Transaction) -> H256;
    }
);

/// [`LedgerQuery`] over a node's HTTP JSON-RPC endpoint.
pub struct HttpRpcClient {
    inner: Inner,
}

impl HttpRpcClient {
    pub fn new(uri: &str) -> Result<Self> {
        Ok(HttpRpcClient {
            inner: Inner::new(uri)?,
        })
    }

    pub fn url(&self) -> &str {
        self.inner.url().as_str()
    }

    pub fn inner(&self) -> &Inner {
        &self.inner
    }
}

impl LedgerQuery for HttpRpcClient {
    fn get_tip_header(&self) -> Result<model::Header> {
        self.inner.get_tip_header().map(Into::into)
    }

    fn get_cells_by_lock_hash(
        &self,
        lock_hash: &H256,
        from: BlockNumber,
        to: BlockNumber,
    ) -> Result<Vec<model::Cell>> {
        let cells = self
            .inner
            .get_cells_by_lock_hash(lock_hash.clone(), from.into(), to.into())?;
        Ok(cells.into_iter().map(Into::into).collect())
    }

    fn get_live_cells_by_lock_hash(
        &self,
        lock_hash: &H256,
        page: u64,
        per_page: u64,
        reverse_order: bool,
    ) -> Result<Vec<model::LiveCell>> {
        let cells = self.inner.get_live_cells_by_lock_hash(
            lock_hash.clone(),
            page.into(),
            per_page.into(),
            Some(reverse_order),
        )?;
        Ok(cells.into_iter().map(Into::into).collect())
    }

    fn get_header(&self, block_hash: &H256) -> Result<model::Header> {
        self.inner
            .get_header(block_hash.clone())?
            .map(Into::into)
            .ok_or_else(|| Error::LedgerQuery(format!("header {:#x} not found", block_hash)))
    }

    fn send_transaction(&self, tx: &model::Transaction) -> Result<H256> {
        self.inner.send_transaction(Transaction::from(tx))
    }
}
