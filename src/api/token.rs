use actix_web::{HttpResponse, Responder, get, post, web};

use super::error_response;
use super::models::{
    AppState, CreateTokenRequest, ErrorResponse, MessageResponse, TokenResponse,
    TransferTokenRequest,
};

#[post("/token")]
pub async fn create_token(
    state: web::Data<AppState>,
    body: web::Json<CreateTokenRequest>,
) -> impl Responder {
    let mut bc = state.blockchain.lock().expect("mutex poisoned");
    match bc.create_token(&body.name, body.supply) {
        Ok(()) => HttpResponse::Ok().json(MessageResponse {
            message: format!("Token {} created", body.name),
        }),
        Err(e) => error_response(&e),
    }
}

#[post("/token/transfer")]
pub async fn transfer_token(
    state: web::Data<AppState>,
    body: web::Json<TransferTokenRequest>,
) -> impl Responder {
    let mut bc = state.blockchain.lock().expect("mutex poisoned");
    match bc.transfer_token(&body.sender, &body.receiver, body.amount, &body.token_name) {
        Ok(()) => HttpResponse::Ok().json(MessageResponse {
            message: "Token transfer successful".to_string(),
        }),
        Err(e) => error_response(&e),
    }
}

#[get("/token/{name}")]
pub async fn get_token(state: web::Data<AppState>, path: web::Path<(String,)>) -> impl Responder {
    let name = path.into_inner().0;
    let bc = state.blockchain.lock().expect("mutex poisoned");
    match bc.tokens().get(&name) {
        Some(token) => HttpResponse::Ok().json(TokenResponse {
            name: &name,
            state: token,
        }),
        None => HttpResponse::NotFound().json(ErrorResponse {
            error: format!("Token {name} not found"),
        }),
    }
}
