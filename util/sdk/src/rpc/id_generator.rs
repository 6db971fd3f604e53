use std::sync::atomic::{AtomicU64, Ordering};

/// Monotonic JSON-RPC request ids, starting at 0.
#[derive(Debug, Default)]
pub struct IdGenerator {
    state: AtomicU64,
}

impl IdGenerator {
    pub fn new() -> IdGenerator {
        IdGenerator::default()
    }

    pub fn next(&self) -> u64 {
        self.state.fetch_add(1, Ordering::SeqCst)
    }
}
