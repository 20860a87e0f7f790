//! KURDCOIN: an in-memory proof-of-work ledger with an embedded token ledger,
//! served over a small actix-web API.

pub mod api;
pub mod blockchain;
pub mod config;
pub mod error;
pub mod token;
pub mod transaction;

pub use blockchain::{Block, Blockchain};
pub use error::ChainError;
pub use token::{TokenLedger, TokenState};
pub use transaction::Transaction;
