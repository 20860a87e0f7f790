use log::{debug, info, warn};

use super::{Block, GENESIS_PREVIOUS_HASH, MINING_REWARD, REWARD_SENDER};
use crate::error::ChainError;
use crate::token::TokenLedger;
use crate::transaction::{Transaction, TransactionPool};

/// In-memory, append-only chain with its pending pool and live token ledger.
///
/// Nothing outside this type mutates the blocks, pool or ledger; callers
/// sharing it across threads wrap the whole value in one mutex.
#[derive(Debug)]
pub struct Blockchain {
    chain: Vec<Block>,
    difficulty: u32,
    pending: TransactionPool,
    tokens: TokenLedger,
}

impl Blockchain {
    /// Initialize a new blockchain with a genesis block.
    pub fn new(difficulty: u32) -> Self {
        Self {
            chain: vec![Block::genesis()],
            difficulty,
            pending: TransactionPool::new(),
            tokens: TokenLedger::new(),
        }
    }

    /// Return the last block in the chain.
    pub fn last_block(&self) -> &Block {
        self.chain
            .last()
            .expect("Blockchain should always have at least the genesis block")
    }

    /// Read-only view of every sealed block.
    pub fn get_chain(&self) -> &[Block] {
        &self.chain
    }

    /// Validate and queue a transaction for the next block.
    pub fn add_transaction(&mut self, tx: Transaction) -> Result<(), ChainError> {
        self.pending.admit(tx).inspect_err(|e| {
            warn!("TX - rejected: {e}");
        })
    }

    /// Seal the pending pool (plus the miner reward) into a new block.
    ///
    /// An empty pool is a soft `NoPendingTransactions` and changes nothing.
    /// Otherwise the block is mined, appended and the pool cleared in one go.
    pub fn mine_pending_transactions(&mut self, miner_address: &str) -> Result<&Block, ChainError> {
        if self.pending.is_empty() {
            debug!("MINER - nothing to mine");
            return Err(ChainError::NoPendingTransactions);
        }

        self.pending
            .push_unchecked(Transaction::new(REWARD_SENDER, miner_address, MINING_REWARD));

        let index = self.chain.len() as u64;
        let prev_hash = self.last_block().hash.clone();
        let mut block = Block::new(index, prev_hash, self.pending.drain(), self.tokens.clone());
        debug!(
            "MINER - building block #{} with {} txs at difficulty {}",
            index,
            block.transactions.len(),
            self.difficulty
        );
        block.mine(self.difficulty);

        self.chain.push(block);
        info!("MINER - appended block #{index} for {miner_address}");
        Ok(self.last_block())
    }

    /// Register a new token in the live ledger.
    pub fn create_token(&mut self, name: &str, supply: u64) -> Result<(), ChainError> {
        self.tokens.create(name, supply)
    }

    /// Move token balance between holders in the live ledger.
    pub fn transfer_token(
        &mut self,
        sender: &str,
        receiver: &str,
        amount: u64,
        token_name: &str,
    ) -> Result<(), ChainError> {
        self.tokens.transfer(sender, receiver, amount, token_name)
    }

    /// Validate the entire chain: linkage, hashes and PoW.
    pub fn verify(&self) -> Result<(), usize> {
        verify_chain(&self.chain, self.difficulty)
    }

    pub fn is_valid_chain(&self) -> bool {
        self.verify().is_ok()
    }

    pub fn pending(&self) -> &[Transaction] {
        self.pending.as_slice()
    }

    pub fn tokens(&self) -> &TokenLedger {
        &self.tokens
    }

    pub fn len(&self) -> usize {
        self.chain.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chain.is_empty()
    }

    pub fn difficulty(&self) -> u32 {
        self.difficulty
    }
}

/// Check a block sequence and report the first index that breaks it.
///
/// Genesis must sit at index 0 with `previous_hash == "0"` and an honest hash;
/// it is not held to the PoW target. Every later block must carry its position
/// as index, link to its predecessor's hash and pass `Block::is_valid`.
pub fn verify_chain(blocks: &[Block], difficulty: u32) -> Result<(), usize> {
    let genesis = blocks.first().ok_or(0usize)?;
    if genesis.index != 0
        || genesis.previous_hash != GENESIS_PREVIOUS_HASH
        || genesis.hash != genesis.compute_hash()
    {
        return Err(0);
    }

    for (i, pair) in blocks.windows(2).enumerate() {
        let (prev, current) = (&pair[0], &pair[1]);
        let pos = i + 1;
        if current.index != pos as u64
            || current.previous_hash != prev.hash
            || !current.is_valid(difficulty)
        {
            return Err(pos);
        }
    }

    Ok(())
}
