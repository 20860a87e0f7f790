use actix_web::{HttpResponse, Responder, get, post, web};
use log::{error, info};

use super::error_response;
use super::models::{AppState, ChainResponse, MineRequest, MineResponse, ValidateResponse};

/// Get the full blockchain.
#[get("/chain")]
pub async fn get_chain(state: web::Data<AppState>) -> impl Responder {
    let bc = state.blockchain.lock().expect("mutex poisoned");
    let resp = ChainResponse {
        length: bc.len(),
        difficulty: bc.difficulty(),
        chain: bc.get_chain(),
    };
    HttpResponse::Ok().json(resp)
}

/// Validate the whole chain.
#[get("/validate")]
pub async fn validate_chain(state: web::Data<AppState>) -> impl Responder {
    let bc = state.blockchain.lock().expect("mutex poisoned");
    let verdict = bc.verify();
    HttpResponse::Ok().json(ValidateResponse {
        valid: verdict.is_ok(),
        length: bc.len(),
        first_invalid_index: verdict.err(),
    })
}

/// Mine the pending pool, crediting the configured server miner.
#[get("/mine")]
pub async fn mine_default(state: web::Data<AppState>) -> impl Responder {
    let miner_address = state.miner_address.clone();
    mine(state, miner_address).await
}

/// Mine the pending pool, crediting `miner_address` from the body.
#[post("/mine")]
pub async fn mine_block(state: web::Data<AppState>, req: web::Json<MineRequest>) -> impl Responder {
    let miner_address = req.miner_address.trim().to_string();
    if miner_address.is_empty() {
        return HttpResponse::BadRequest().body("miner_address required");
    }
    mine(state, miner_address).await
}

/// PoW runs on the blocking pool with the chain lock held from block
/// construction through append.
async fn mine(state: web::Data<AppState>, miner_address: String) -> HttpResponse {
    let outcome = web::block(move || {
        let mut bc = state.blockchain.lock().expect("mutex poisoned");
        bc.mine_pending_transactions(&miner_address)
            .map(|b| (b.index, b.hash.clone(), b.nonce))
    })
    .await;

    match outcome {
        Ok(Ok((index, hash, nonce))) => {
            info!("MINER - sealed block #{index} (hash={hash}, nonce={nonce})");
            HttpResponse::Ok().json(MineResponse {
                mined: true,
                message: "Block mined successfully!".to_string(),
                mined_index: Some(index),
                hash: Some(hash),
                nonce: Some(nonce),
            })
        }
        Ok(Err(e)) if e.is_soft() => HttpResponse::Ok().json(MineResponse {
            mined: false,
            message: e.to_string(),
            mined_index: None,
            hash: None,
            nonce: None,
        }),
        Ok(Err(e)) => error_response(&e),
        Err(e) => {
            error!("mining task failed: {e}");
            HttpResponse::InternalServerError().finish()
        }
    }
}
