mod config;
mod error;
mod handlers;
mod models;
mod predictor;

use actix_web::middleware::Logger;
use actix_web::{web, App, HttpServer};
use log::{error, info};

use crate::config::Config;
use crate::predictor::Predictor;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    let config = Config::load().map_err(|e| {
        error!("Invalid configuration: {}", e);
        std::io::Error::new(std::io::ErrorKind::InvalidInput, e)
    })?;
    let bind_address = config.bind_address();

    info!("Starting AQI server on port {}...", config.port);
    info!("Request bodies limited to {} bytes", config.max_body_bytes);

    let predictor = web::Data::new(Predictor::default());
    let config = web::Data::new(config);

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .wrap(handlers::cors_headers())
            .app_data(predictor.clone())
            .app_data(config.clone())
            .configure(handlers::configure)
    })
    .bind(bind_address)?
    .run()
    .await
}
