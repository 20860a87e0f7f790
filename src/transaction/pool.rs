use log::debug;

use super::model::Transaction;
use crate::error::ChainError;

/// FIFO queue of admitted transactions waiting for the next block.
#[derive(Debug, Default, Clone)]
pub struct TransactionPool {
    pending: Vec<Transaction>,
}

impl TransactionPool {
    pub fn new() -> Self {
        Self {
            pending: Vec::new(),
        }
    }

    /// Validate and enqueue. A rejected transaction leaves the pool untouched.
    pub fn admit(&mut self, tx: Transaction) -> Result<(), ChainError> {
        tx.validate()?;
        self.pending.push(tx);
        debug!("POOL - admitted tx, size now {}", self.pending.len());
        Ok(())
    }

    /// Enqueue without admission checks (system reward only).
    pub(crate) fn push_unchecked(&mut self, tx: Transaction) {
        self.pending.push(tx);
    }

    /// Hand over every pending transaction in arrival order, leaving the pool empty.
    pub fn drain(&mut self) -> Vec<Transaction> {
        std::mem::take(&mut self.pending)
    }

    pub fn as_slice(&self) -> &[Transaction] {
        &self.pending
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}
