#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Actix-Web API server for MGNREGA district performance metrics.
//!
//! Serves the REST API consumed by the mobile app: district reference
//! data, per-district metrics with month-over-month trends, two-district
//! comparisons with generated insights, location-to-district resolution,
//! and citizen issue report intake. All handlers validate parameters
//! first, then fetch through the database gateway, then run the pure
//! analytics core over the fetched rows.

mod handlers;

use actix_cors::Cors;
use actix_web::{App, HttpServer, middleware, web};
use mgnrega_pulse_database::{db, run_migrations};
use std::sync::Arc;
use switchy_database::Database;

/// Shared application state.
pub struct AppState {
    /// Database connection.
    pub db: Arc<dyn Database>,
}

/// Starts the MGNREGA metrics API server.
///
/// Connects to the database, runs migrations, and starts the Actix-Web
/// HTTP server. This is a regular async function — the caller is
/// responsible for providing the async runtime (e.g. via
/// `#[actix_web::main]`).
///
/// # Errors
///
/// Returns an `std::io::Result` error if the HTTP server fails to bind or
/// encounters a runtime error.
///
/// # Panics
///
/// Panics if the database connection fails or migrations fail.
#[allow(clippy::future_not_send)]
pub async fn run_server() -> std::io::Result<()> {
    pretty_env_logger::init_custom_env("RUST_LOG");

    log::info!("Connecting to database...");
    let db_conn = db::connect_from_env()
        .await
        .expect("Failed to connect to database");

    log::info!("Running migrations...");
    run_migrations(db_conn.as_ref())
        .await
        .expect("Failed to run migrations");

    let state = web::Data::new(AppState {
        db: Arc::from(db_conn),
    });

    let bind_addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| "127.0.0.1".to_string());
    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(8080);

    log::info!("Starting server on {bind_addr}:{port}");

    HttpServer::new(move || {
        let cors = Cors::permissive();

        App::new()
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .app_data(state.clone())
            .service(
                web::scope("/api")
                    .route("/health", web::get().to(handlers::health))
                    .route("/districts", web::get().to(handlers::districts))
                    .route("/districts", web::post().to(handlers::locate_district))
                    .route("/mgnrega-data", web::get().to(handlers::metrics))
                    .route("/mgnrega-data", web::post().to(handlers::sync_metrics))
                    .route(
                        "/compare-districts",
                        web::get().to(handlers::compare_districts),
                    )
                    .route("/issue-reports", web::post().to(handlers::submit_report))
                    .route("/issue-reports", web::get().to(handlers::list_reports)),
            )
    })
    .bind((bind_addr, port))?
    .run()
    .await
}
