use thiserror::Error;

/// Every way a core operation can be turned down.
///
/// None of these indicate corruption; the caller reports them and moves on.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChainError {
    #[error("Invalid Transaction: {0}")]
    InvalidTransaction(&'static str),
    #[error("No pending transactions to mine")]
    NoPendingTransactions,
    #[error("Token {0} already exists")]
    TokenAlreadyExists(String),
    #[error("Token {0} not found")]
    TokenNotFound(String),
    #[error("Insufficient balance for {address}: have {available}, need {requested}")]
    InsufficientBalance {
        address: String,
        available: u64,
        requested: u64,
    },
}

impl ChainError {
    /// A soft outcome is a normal "nothing to do" answer, not a rejection.
    pub fn is_soft(&self) -> bool {
        matches!(self, ChainError::NoPendingTransactions)
    }
}
