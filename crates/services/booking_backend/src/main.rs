// File: services/booking_backend/src/main.rs
use axum::{routing::get, Router};
use booking_common::{log_error, BookingError};
use booking_config::load_config;
use booking_wizard::routes as booking_routes;
use std::process::ExitCode;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::info;

#[tokio::main]
async fn main() -> ExitCode {
    booking_common::init();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log_error(&err, "Booking backend stopped");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), BookingError> {
    let config = Arc::new(load_config()?);
    info!(
        enforce_luhn = config.validation.enforce_luhn,
        "Configuration loaded"
    );

    let api_router = Router::new()
        .route("/", get(|| async { "Welcome to the booking API!" }))
        .merge(booking_routes(config.clone()));

    let app = Router::new()
        .nest("/api", api_router)
        .layer(TraceLayer::new_for_http());

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&addr).await?;
    info!("Starting server at http://{}", addr);
    info!("Booking endpoints available at http://{}/api/booking/sessions", addr);

    axum::serve(listener, app.into_make_service()).await?;
    Ok(())
}
