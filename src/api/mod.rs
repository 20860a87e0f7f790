mod chain;
mod health;
pub mod models;
mod token;
mod tx;

use actix_cors::Cors;
use actix_web::error::{InternalError, JsonPayloadError};
use actix_web::web::{self, ServiceConfig};
use actix_web::{HttpRequest, HttpResponse};
use log::warn;

use crate::error::ChainError;
pub use models::AppState;
use models::ErrorResponse;

/// Any origin may call the API.
pub fn cors() -> Cors {
    Cors::permissive()
}

pub fn init_routes(cfg: &mut ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .app_data(web::JsonConfig::default().error_handler(json_error))
            .service(health::health_check)
            .service(chain::get_chain)
            .service(chain::validate_chain)
            .service(chain::mine_default)
            .service(chain::mine_block)
            .service(tx::post_transaction)
            .service(tx::get_pending)
            .service(token::create_token)
            .service(token::transfer_token)
            .service(token::get_token),
    );
}

/// Map a rejected core operation onto a client-facing response.
fn error_response(err: &ChainError) -> HttpResponse {
    let body = ErrorResponse {
        error: err.to_string(),
    };
    match err {
        ChainError::InvalidTransaction(_)
        | ChainError::InsufficientBalance { .. }
        | ChainError::NoPendingTransactions => HttpResponse::BadRequest().json(body),
        ChainError::TokenNotFound(_) => HttpResponse::NotFound().json(body),
        ChainError::TokenAlreadyExists(_) => HttpResponse::Conflict().json(body),
    }
}

/// Bodies that fail to deserialize get the same JSON error shape as rejected
/// operations. A bad transaction body is an `InvalidTransaction`.
fn json_error(err: JsonPayloadError, req: &HttpRequest) -> actix_web::Error {
    warn!("{} {} - malformed body: {err}", req.method(), req.path());
    let resp = if req.path().ends_with("/transaction") {
        error_response(&ChainError::InvalidTransaction("malformed transaction body"))
    } else {
        HttpResponse::BadRequest().json(ErrorResponse {
            error: format!("malformed request body: {err}"),
        })
    };
    InternalError::from_response(err, resp).into()
}
