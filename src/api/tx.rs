use actix_web::{HttpResponse, Responder, get, post, web};
use log::debug;

use super::error_response;
use super::models::{AppState, MessageResponse, PendingResponse};
use crate::transaction::Transaction;

/// Submit a new transaction into the pending pool.
#[post("/transaction")]
pub async fn post_transaction(
    state: web::Data<AppState>,
    body: web::Json<Transaction>,
) -> impl Responder {
    let tx = body.into_inner();
    debug!(
        "POST /transaction - {} -> {} ({})",
        tx.sender, tx.receiver, tx.amount
    );

    let mut bc = state.blockchain.lock().expect("mutex poisoned");
    match bc.add_transaction(tx) {
        Ok(()) => HttpResponse::Ok().json(MessageResponse {
            message: "Transaction added successfully!".to_string(),
        }),
        Err(e) => error_response(&e),
    }
}

/// List the pending pool.
#[get("/pending")]
pub async fn get_pending(state: web::Data<AppState>) -> impl Responder {
    let bc = state.blockchain.lock().expect("mutex poisoned");
    let pending = bc.pending();
    HttpResponse::Ok().json(PendingResponse {
        size: pending.len(),
        transactions: pending,
    })
}
