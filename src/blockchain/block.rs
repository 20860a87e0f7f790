use chrono::Utc;
use log::info;
use serde::{Deserialize, Serialize};

use super::hasher;
use super::GENESIS_PREVIOUS_HASH;
use crate::token::TokenLedger;
use crate::transaction::Transaction;

/// A single block: a transaction batch plus the token ledger as it stood
/// when the block was built. Every field is serialized so a verifier can
/// recompute `hash` from the wire form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Block {
    pub index: u64,
    pub previous_hash: String,
    pub transactions: Vec<Transaction>,
    pub token_snapshot: TokenLedger,
    pub timestamp: i64, // Unix milliseconds (UTC)
    pub nonce: u64,     // Proof-of-Work nonce
    pub hash: String,
}

impl Block {
    /// The fixed, never-mined root of every chain.
    pub fn genesis() -> Self {
        Self::new(
            0,
            String::from(GENESIS_PREVIOUS_HASH),
            Vec::new(),
            TokenLedger::new(),
        )
    }

    /// Create a new block (not mined yet). Call `mine()` to perform PoW.
    pub fn new(
        index: u64,
        previous_hash: String,
        transactions: Vec<Transaction>,
        token_snapshot: TokenLedger,
    ) -> Self {
        Self::with_timestamp(
            index,
            previous_hash,
            transactions,
            token_snapshot,
            Utc::now().timestamp_millis(),
        )
    }

    pub fn with_timestamp(
        index: u64,
        previous_hash: String,
        transactions: Vec<Transaction>,
        token_snapshot: TokenLedger,
        timestamp: i64,
    ) -> Self {
        let mut block = Self {
            index,
            previous_hash,
            transactions,
            token_snapshot,
            timestamp,
            nonce: 0,
            hash: String::new(),
        };
        block.hash = block.compute_hash();
        block
    }

    /// Recompute the digest from the stored fields (excluding `hash`).
    pub fn compute_hash(&self) -> String {
        hasher::digest(
            self.index,
            &self.previous_hash,
            self.timestamp,
            &self.transactions,
            &self.token_snapshot,
            self.nonce,
        )
    }

    /// Proof-of-Work: bump the nonce from zero until the hash starts with
    /// `difficulty` hex zeros. Unbounded; blocks the calling thread until done.
    pub fn mine(&mut self, difficulty: u32) {
        self.nonce = 0;
        loop {
            self.hash = self.compute_hash();
            if meets_difficulty(&self.hash, difficulty) {
                break;
            }
            self.nonce = self.nonce.wrapping_add(1);
        }
        info!(
            "Block Mined: #{} nonce={} hash={}",
            self.index, self.nonce, self.hash
        );
    }

    /// Cached hash matches content and satisfies the PoW target.
    /// (Does NOT validate chain linkage.)
    pub fn is_valid(&self, difficulty: u32) -> bool {
        self.hash == self.compute_hash() && meets_difficulty(&self.hash, difficulty)
    }
}

/// Leading-zero prefix check on the hex digest.
pub fn meets_difficulty(hash: &str, difficulty: u32) -> bool {
    let needed = difficulty as usize;
    hash.len() >= needed && hash.bytes().take(needed).all(|b| b == b'0')
}

#[cfg(test)]
mod tests {
    use super::{meets_difficulty, Block};
    use crate::token::TokenLedger;
    use crate::transaction::Transaction;

    #[test]
    fn genesis_has_valid_hash() {
        let b = Block::genesis();
        assert_eq!(b.hash, b.compute_hash());
        assert_eq!(b.previous_hash, "0");
        assert!(b.transactions.is_empty());
        assert!(b.token_snapshot.is_empty());
        assert_eq!(b.nonce, 0);
    }

    #[test]
    fn mining_produces_leading_zeros() {
        let mut b = Block::new(1, "prev".into(), vec![Transaction::new("a", "b", 1)], TokenLedger::new());
        b.mine(2);
        assert!(b.hash.starts_with("00"));
        assert!(b.is_valid(2));
    }

    #[test]
    fn difficulty_zero_keeps_first_nonce() {
        let mut b = Block::new(1, "prev".into(), vec![], TokenLedger::new());
        let initial = b.hash.clone();
        b.mine(0);
        assert_eq!(b.nonce, 0);
        assert_eq!(b.hash, initial);
    }

    #[test]
    fn invalid_when_mutated() {
        let mut b = Block::new(2, "prev".into(), vec![Transaction::new("a", "b", 1)], TokenLedger::new());
        b.mine(2);
        let old_hash = b.hash.clone();

        // Tampering with the batch
        b.transactions.push(Transaction::new("x", "y", 1));

        assert_ne!(old_hash, b.compute_hash());
        assert!(!b.is_valid(2));
    }

    #[test]
    fn tampered_snapshot_is_detected() {
        let mut tokens = TokenLedger::new();
        tokens.create("GOLD", 1000).unwrap();
        let mut b = Block::new(1, "prev".into(), vec![], tokens);
        b.mine(1);
        assert!(b.is_valid(1));

        b.token_snapshot.create("SILVER", 1).unwrap();
        assert!(!b.is_valid(1));
    }

    #[test]
    fn serialized_block_rehashes_to_same_digest() {
        let mut b = Block::new(3, "abc".into(), vec![Transaction::new("a", "b", 9)], TokenLedger::new());
        b.mine(1);
        let json = serde_json::to_string(&b).unwrap();
        let back: Block = serde_json::from_str(&json).unwrap();
        assert_eq!(back.compute_hash(), b.hash);
    }

    #[test]
    fn prefix_check() {
        assert!(meets_difficulty("00ab", 2));
        assert!(!meets_difficulty("0a0b", 2));
        assert!(meets_difficulty("ab", 0));
        assert!(!meets_difficulty("0", 2));
    }
}
