use actix_web::{App, HttpServer, web};
use dotenvy::dotenv;
use log::info;

use kurdcoin::api::{self, AppState};
use kurdcoin::config::Config;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    let _ = dotenv();
    env_logger::init();

    let config = Config::from_env();
    info!(
        "KURDCOIN Blockchain API starting at http://{}:{} (difficulty={})",
        config.host, config.port, config.difficulty
    );

    let state = web::Data::new(AppState::new(&config));

    HttpServer::new(move || {
        App::new()
            .wrap(api::cors())
            .app_data(state.clone())
            .configure(api::init_routes)
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}
