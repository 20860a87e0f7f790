use serde::{Deserialize, Serialize};

use crate::error::ChainError;

/// An opaque value transfer record. It does not move any balance by itself;
/// it is only queued and later sealed into a block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    pub sender: String,
    pub receiver: String,
    pub amount: u64,
}

impl Transaction {
    pub fn new(sender: impl Into<String>, receiver: impl Into<String>, amount: u64) -> Self {
        Self {
            sender: sender.into(),
            receiver: receiver.into(),
            amount,
        }
    }

    /// Admission checks: both parties named and a positive amount.
    pub fn validate(&self) -> Result<(), ChainError> {
        if self.sender.is_empty() {
            return Err(ChainError::InvalidTransaction("sender must not be empty"));
        }
        if self.receiver.is_empty() {
            return Err(ChainError::InvalidTransaction("receiver must not be empty"));
        }
        if self.amount == 0 {
            return Err(ChainError::InvalidTransaction("amount must be > 0"));
        }
        Ok(())
    }
}
