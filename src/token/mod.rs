pub mod ledger;

pub use ledger::{TokenLedger, TokenState};
