use crate::blockchain::{Block, Blockchain};
use crate::config::Config;
use crate::token::TokenState;
use crate::transaction::Transaction;
use serde::{Deserialize, Serialize};
use std::sync::Mutex;

/// Shared application state: one chain behind one lock (single writer).
///
/// Handlers take the std mutex on the worker thread; while a block is being
/// mined under `web::block`, they wait for it.
pub struct AppState {
    pub blockchain: Mutex<Blockchain>,
    pub miner_address: String,
}

impl AppState {
    pub fn new(config: &Config) -> Self {
        Self {
            blockchain: Mutex::new(Blockchain::new(config.difficulty)),
            miner_address: config.miner_address.clone(),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(&Config::default())
    }
}

/* ---------- Chain API Models ---------- */

#[derive(Serialize)]
pub struct ChainResponse<'a> {
    pub length: usize,
    pub difficulty: u32,
    pub chain: &'a [Block],
}

#[derive(Serialize)]
pub struct ValidateResponse {
    pub valid: bool,
    pub length: usize,
    pub first_invalid_index: Option<usize>,
}

/* ---------- Mining API Models ---------- */

#[derive(Deserialize)]
pub struct MineRequest {
    pub miner_address: String,
}

#[derive(Serialize, Deserialize)]
pub struct MineResponse {
    pub mined: bool,
    pub message: String,
    pub mined_index: Option<u64>,
    pub hash: Option<String>,
    pub nonce: Option<u64>,
}

/* ---------- TX API Models ---------- */

#[derive(Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

#[derive(Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Serialize)]
pub struct PendingResponse<'a> {
    pub size: usize,
    pub transactions: &'a [Transaction],
}

/* ---------- Token API Models ---------- */

#[derive(Deserialize)]
pub struct CreateTokenRequest {
    pub name: String,
    pub supply: u64,
}

#[derive(Deserialize)]
pub struct TransferTokenRequest {
    pub sender: String,
    pub receiver: String,
    pub amount: u64,
    pub token_name: String,
}

#[derive(Serialize)]
pub struct TokenResponse<'a> {
    pub name: &'a str,
    #[serde(flatten)]
    pub state: &'a TokenState,
}
