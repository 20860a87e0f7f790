pub mod block;
pub mod hasher;
pub mod model;

pub use block::{meets_difficulty, Block};
pub use model::{verify_chain, Blockchain};

/// Default Proof-of-Work difficulty (number of leading zeros).
pub const DEFAULT_DIFFICULTY: u32 = 2;

/// Fixed miner reward appended to every mined batch.
pub const MINING_REWARD: u64 = 100;

/// Sender recorded on the reward transaction.
pub const REWARD_SENDER: &str = "System";

/// `previous_hash` of the genesis block.
pub const GENESIS_PREVIOUS_HASH: &str = "0";
