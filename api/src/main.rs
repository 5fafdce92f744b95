//! Blood Bank API Server
//!
//! A small web application for a blood bank: a donor registry, donation
//! intake, per-group stock with low-stock alerts, issuance and reports.
//! Uses hexagonal (ports & adapters) architecture for clean separation of concerns.

use std::sync::Arc;

use anyhow::Context;
use axum::{routing::get, Json, Router};
use clap::Parser;
use sea_orm::{Database, DatabaseConnection};
use serde::Serialize;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod adapters;
mod app;
mod config;
mod domain;
mod entity;
mod error;
mod handlers;
mod report;
mod views;

#[cfg(test)]
mod test_utils;


use adapters::{SqlDonationRepository, SqlDonorRepository, SqlStockRepository};
use app::{InventoryService, RegistryService};
use config::Config;

pub type Inventory =
    InventoryService<SqlStockRepository, SqlDonationRepository, SqlDonorRepository>;
pub type Registry = RegistryService<SqlDonorRepository, SqlDonationRepository>;

/// Command line options
#[derive(Debug, Parser)]
#[command(name = "bloodbank-api", version, about = "Blood bank management server")]
struct Cli {
    /// Drop and recreate all tables, load sample data, then exit
    #[arg(long)]
    initdb: bool,
}

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub inventory: Arc<Inventory>,
    pub registry: Arc<Registry>,
}

impl AppState {
    pub fn new(db: DatabaseConnection) -> Self {
        let donor_repo = Arc::new(SqlDonorRepository::new(db.clone()));
        let donation_repo = Arc::new(SqlDonationRepository::new(db.clone()));
        let stock_repo = Arc::new(SqlStockRepository::new(db));

        Self {
            inventory: Arc::new(InventoryService::new(
                stock_repo,
                donation_repo.clone(),
                donor_repo.clone(),
            )),
            registry: Arc::new(RegistryService::new(donor_repo, donation_repo)),
        }
    }
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        // Dashboard
        .route("/", get(handlers::dashboard))
        .route("/api/stock", get(handlers::stock_chart))
        // Donor registry
        .route("/donors", get(handlers::list_donors).post(handlers::add_donor))
        // Donations
        .route(
            "/donate",
            get(handlers::donate_form).post(handlers::record_donation),
        )
        .route("/donations", get(handlers::list_donations))
        // Issuance
        .route("/use", get(handlers::issue_form).post(handlers::issue_units))
        // Downloads
        .route("/export/donors.csv", get(handlers::export_donors_csv))
        .route("/report/pdf", get(handlers::report_pdf))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Rebuild the schema and load the sample data set
async fn init_database(db: DatabaseConnection) -> anyhow::Result<()> {
    adapters::sql::reset_schema(&db)
        .await
        .context("Failed to reset schema")?;

    let donors = SqlDonorRepository::new(db.clone());
    let donations = SqlDonationRepository::new(db.clone());
    let stock = SqlStockRepository::new(db);
    adapters::sql::seed_sample_data(&donors, &donations, &stock)
        .await
        .context("Failed to seed sample data")?;

    tracing::info!("Database initialized with sample data.");
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,bloodbank_api=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    // Load configuration
    let config = Config::from_env();

    tracing::info!("Connecting to database...");
    let db = Database::connect(&config.database_url)
        .await
        .with_context(|| format!("Failed to connect to {}", config.database_url))?;
    tracing::info!("Database connected");

    if cli.initdb {
        return init_database(db).await;
    }

    tracing::info!("Starting Blood Bank API...");

    adapters::sql::create_schema(&db)
        .await
        .context("Failed to create schema")?;

    let state = AppState::new(db);
    state
        .inventory
        .ensure_stock_rows()
        .await
        .context("Failed to prepare stock rows")?;

    let app = build_router(state);

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    tracing::info!("Listening on {}", addr);

    axum::serve(listener, app).await.context("Server error")?;
    Ok(())
}
