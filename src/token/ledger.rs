use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::error::ChainError;

/// Supply and per-holder balances of one named token.
///
/// Ordered maps keep the JSON encoding stable, which the block hash relies on.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenState {
    pub total_supply: u64,
    pub balances: BTreeMap<String, u64>,
}

impl TokenState {
    pub fn new(total_supply: u64) -> Self {
        Self {
            total_supply,
            balances: BTreeMap::new(),
        }
    }
}

/// Token name -> state. Cloned wholesale into each mined block.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TokenLedger {
    tokens: BTreeMap<String, TokenState>,
}

impl TokenLedger {
    pub fn new() -> Self {
        Self {
            tokens: BTreeMap::new(),
        }
    }

    /// Register a new token with an empty holder table.
    pub fn create(&mut self, name: &str, supply: u64) -> Result<(), ChainError> {
        if self.tokens.contains_key(name) {
            warn!("TOKEN - create rejected: {name} already exists");
            return Err(ChainError::TokenAlreadyExists(name.to_string()));
        }
        self.tokens.insert(name.to_string(), TokenState::new(supply));
        debug!("TOKEN - created {name} (supply={supply})");
        Ok(())
    }

    /// Move `amount` of `token` from `sender` to `receiver`.
    ///
    /// Both checks run before anything is written, so a failure leaves the
    /// ledger exactly as it was (no receiver entry gets created either).
    pub fn transfer(
        &mut self,
        sender: &str,
        receiver: &str,
        amount: u64,
        token: &str,
    ) -> Result<(), ChainError> {
        let state = self
            .tokens
            .get_mut(token)
            .ok_or_else(|| ChainError::TokenNotFound(token.to_string()))?;

        let available = state.balances.get(sender).copied();
        match available {
            Some(have) if have >= amount => {}
            _ => {
                warn!(
                    "TOKEN - transfer rejected: {sender} has {} {token}, needs {amount}",
                    available.unwrap_or(0)
                );
                return Err(ChainError::InsufficientBalance {
                    address: sender.to_string(),
                    available: available.unwrap_or(0),
                    requested: amount,
                });
            }
        }

        if let Some(bal) = state.balances.get_mut(sender) {
            *bal -= amount;
        }
        *state.balances.entry(receiver.to_string()).or_insert(0) += amount;
        debug!("TOKEN - {sender} -> {receiver}: {amount} {token}");
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&TokenState> {
        self.tokens.get(name)
    }

    /// `None` when the token is unknown or the address holds no entry.
    pub fn balance_of(&self, name: &str, address: &str) -> Option<u64> {
        self.tokens.get(name)?.balances.get(address).copied()
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Test-only funding hook; nothing in the public surface can mint.
    #[cfg(test)]
    pub(crate) fn credit(&mut self, name: &str, address: &str, amount: u64) {
        if let Some(state) = self.tokens.get_mut(name) {
            *state.balances.entry(address.to_string()).or_insert(0) += amount;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::TokenLedger;
    use crate::error::ChainError;

    #[test]
    fn duplicate_create_keeps_first_supply() {
        let mut ledger = TokenLedger::new();
        ledger.create("GOLD", 1000).unwrap();
        assert_eq!(
            ledger.create("GOLD", 500),
            Err(ChainError::TokenAlreadyExists("GOLD".into()))
        );
        assert_eq!(ledger.get("GOLD").unwrap().total_supply, 1000);
    }

    #[test]
    fn transfer_of_unknown_token() {
        let mut ledger = TokenLedger::new();
        assert_eq!(
            ledger.transfer("alice", "bob", 1, "SILVER"),
            Err(ChainError::TokenNotFound("SILVER".into()))
        );
    }

    // No operation can fund an address, so first-time senders always fail.
    #[test]
    fn unfunded_sender_cannot_transfer() {
        let mut ledger = TokenLedger::new();
        ledger.create("GOLD", 1000).unwrap();
        let err = ledger.transfer("alice", "bob", 10, "GOLD").unwrap_err();
        assert!(matches!(err, ChainError::InsufficientBalance { available: 0, requested: 10, .. }));
        assert_eq!(ledger.balance_of("GOLD", "bob"), None);
        assert!(ledger.get("GOLD").unwrap().balances.is_empty());
    }

    #[test]
    fn funded_transfer_moves_balance() {
        let mut ledger = TokenLedger::new();
        ledger.create("GOLD", 1000).unwrap();
        ledger.credit("GOLD", "alice", 30);

        ledger.transfer("alice", "bob", 10, "GOLD").unwrap();
        assert_eq!(ledger.balance_of("GOLD", "alice"), Some(20));
        assert_eq!(ledger.balance_of("GOLD", "bob"), Some(10));

        // Overdraw leaves both sides untouched
        assert!(ledger.transfer("alice", "bob", 21, "GOLD").is_err());
        assert_eq!(ledger.balance_of("GOLD", "alice"), Some(20));
        assert_eq!(ledger.balance_of("GOLD", "bob"), Some(10));
    }

    #[test]
    fn exact_balance_can_be_spent() {
        let mut ledger = TokenLedger::new();
        ledger.create("GOLD", 100).unwrap();
        ledger.credit("GOLD", "alice", 5);
        ledger.transfer("alice", "carol", 5, "GOLD").unwrap();
        assert_eq!(ledger.balance_of("GOLD", "alice"), Some(0));
        assert_eq!(ledger.balance_of("GOLD", "carol"), Some(5));
    }

    #[test]
    fn encoding_is_ordered() {
        let mut ledger = TokenLedger::new();
        ledger.create("ZETA", 1).unwrap();
        ledger.create("ALPHA", 2).unwrap();
        let json = serde_json::to_string(&ledger).unwrap();
        assert_eq!(
            json,
            r#"{"ALPHA":{"total_supply":2,"balances":{}},"ZETA":{"total_supply":1,"balances":{}}}"#
        );
    }
}
