use sha2::{Digest, Sha256};

use crate::token::TokenLedger;
use crate::transaction::Transaction;

/// SHA-256 over the canonical preimage of a block, hex encoded.
///
/// Transactions and the token snapshot enter the preimage as JSON. Both
/// encodings are order-preserving (Vec order, BTreeMap key order), so equal
/// inputs always give the same digest.
pub fn digest(
    index: u64,
    previous_hash: &str,
    timestamp: i64,
    transactions: &[Transaction],
    token_snapshot: &TokenLedger,
    nonce: u64,
) -> String {
    let txs_json = serde_json::to_string(transactions).expect("serialize txs");
    let tokens_json = serde_json::to_string(token_snapshot).expect("serialize tokens");
    let preimage = format!("{index}:{previous_hash}:{timestamp}:{txs_json}:{tokens_json}:{nonce}");
    let mut hasher = Sha256::new();
    hasher.update(preimage.as_bytes());
    hex::encode(hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::digest;
    use crate::token::TokenLedger;
    use crate::transaction::Transaction;

    #[test]
    fn deterministic_and_fixed_length() {
        let txs = vec![Transaction::new("a", "b", 5)];
        let tokens = TokenLedger::new();
        let a = digest(1, "prev", 42, &txs, &tokens, 7);
        let b = digest(1, "prev", 42, &txs, &tokens, 7);
        assert_eq!(a, b);
        assert_eq!(a.len(), 64);
        assert!(a.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn every_field_feeds_the_digest() {
        let txs = vec![Transaction::new("a", "b", 5)];
        let mut tokens = TokenLedger::new();
        let base = digest(1, "prev", 42, &txs, &tokens, 7);

        assert_ne!(base, digest(2, "prev", 42, &txs, &tokens, 7));
        assert_ne!(base, digest(1, "other", 42, &txs, &tokens, 7));
        assert_ne!(base, digest(1, "prev", 43, &txs, &tokens, 7));
        assert_ne!(base, digest(1, "prev", 42, &[], &tokens, 7));
        assert_ne!(base, digest(1, "prev", 42, &txs, &tokens, 8));

        tokens.create("GOLD", 10).unwrap();
        assert_ne!(base, digest(1, "prev", 42, &txs, &tokens, 7));
    }
}
