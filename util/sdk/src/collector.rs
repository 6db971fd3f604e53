//! Greedy search for live cells covering a capacity.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::traits::LedgerQuery;
use crate::types::{BlockNumber, Capacity, Cell, Script};

/// Page size of the index query.
pub const INDEX_PAGE_SIZE: u64 = 50;
/// Number of blocks per range-scan window.
pub const BLOCK_WINDOW: u64 = 100;

/// Where the collector looks for cells.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CollectStrategy {
    /// Paginate the node's live cell index by lock hash.
    Index,
    /// Scan block windows from genesis to the tip fetched at start.
    #[default]
    RangeScan,
}

/// Collects cells of one lock until their capacities reach a target.
///
/// A cell is accepted only when its lock equals the collector's lock and its
/// type equals the configured type script, or it has no type when none is
/// configured. Running out of cells is not an error: the partial set and its
/// total are returned and the caller decides. Cells may get spent between two
/// pages, callers re-validate before submitting.
pub struct CellCollector<'a, L: ?Sized> {
    ledger: &'a L,
    lock_script: Script,
    capacity: Capacity,
    type_script: Option<Script>,
    strategy: CollectStrategy,
}

impl<'a, L: LedgerQuery + ?Sized> CellCollector<'a, L> {
    pub fn new(ledger: &'a L, lock_script: Script, capacity: Capacity) -> Self {
        CellCollector {
            ledger,
            lock_script,
            capacity,
            type_script: None,
            strategy: CollectStrategy::default(),
        }
    }

    pub fn type_script(mut self, type_script: Option<Script>) -> Self {
        self.type_script = type_script;
        self
    }

    pub fn strategy(mut self, strategy: CollectStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Returns the selected cells and the sum of their capacities.
    pub fn collect(&self) -> Result<(Vec<Cell>, Capacity)> {
        let lock_hash = self.lock_script.hash();
        log::debug!(
            "collect cells: lock_hash={:#x}, capacity={}, strategy={:?}",
            lock_hash,
            self.capacity,
            self.strategy
        );
        let mut selected = Selected::new(self.capacity);
        match self.strategy {
            CollectStrategy::Index => {
                let mut page = 0;
                while !selected.is_enough() {
                    let cells = self.ledger.get_live_cells_by_lock_hash(
                        &lock_hash,
                        page,
                        INDEX_PAGE_SIZE,
                        false,
                    )?;
                    log::debug!("index page {}: {} cells", page, cells.len());
                    let page_len = cells.len() as u64;
                    for cell in cells {
                        if self.accept(&mut selected, Cell::from(cell)) {
                            break;
                        }
                    }
                    if page_len < INDEX_PAGE_SIZE {
                        break;
                    }
                    page += 1;
                }
            }
            CollectStrategy::RangeScan => {
                let tip = self.ledger.get_tip_header()?.number;
                let mut from: BlockNumber = 0;
                while !selected.is_enough() {
                    let to = tip.min(from.saturating_add(BLOCK_WINDOW - 1));
                    let cells = self.ledger.get_cells_by_lock_hash(&lock_hash, from, to)?;
                    log::debug!("blocks [{}, {}]: {} cells", from, to, cells.len());
                    for cell in cells {
                        if self.accept(&mut selected, cell) {
                            break;
                        }
                    }
                    if to == tip {
                        break;
                    }
                    from = to + 1;
                }
            }
        }
        Ok((selected.cells, selected.total))
    }

    /// Takes one candidate, returns whether the target is reached.
    fn accept(&self, selected: &mut Selected, cell: Cell) -> bool {
        if cell.lock != self.lock_script || cell.type_ != self.type_script {
            log::trace!("skip cell {}", cell.out_point);
            return false;
        }
        log::trace!("select cell {}: capacity={}", cell.out_point, cell.capacity);
        selected.total = selected.total.saturating_add(cell.capacity);
        selected.cells.push(cell);
        selected.is_enough()
    }
}

struct Selected {
    target: Capacity,
    total: Capacity,
    cells: Vec<Cell>,
}

impl Selected {
    fn new(target: Capacity) -> Self {
        Selected {
            target,
            total: 0,
            cells: Vec::new(),
        }
    }

    fn is_enough(&self) -> bool {
        self.total >= self.target
    }
}
