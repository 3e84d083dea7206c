//! Timesheet engine server.
//!
//! # Endpoints
//!
//! - `POST /pay-period` - Period containing a date
//! - `POST /pay-period/step` - Previous or next period
//! - `GET /pay-period/current` - Period containing today
//! - `POST /timesheet/entries` - Per-day entry grid for a period
//! - `POST /timesheet/estimate` - Estimated gross pay for entries
//!
//! # Environment
//!
//! - `PAYROLL_CONFIG` - settings file (default `./config/payroll.yaml`)
//! - `BIND_ADDR` - listen address (default `0.0.0.0:3000`)
//! - `RUST_LOG` - log filter

use std::env;
use std::net::SocketAddr;

use anyhow::Result;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use timesheet_engine::api::{AppState, create_router};
use timesheet_engine::config::ConfigLoader;

const DEFAULT_CONFIG_PATH: &str = "./config/payroll.yaml";
const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    info!("Starting timesheet engine...");

    let config_path = env::var("PAYROLL_CONFIG").unwrap_or_else(|_| DEFAULT_CONFIG_PATH.into());
    let config = ConfigLoader::load_or_default(&config_path);
    info!(
        pay_frequency = %config.settings().pay_frequency,
        "Configuration loaded"
    );

    let addr: SocketAddr = env::var("BIND_ADDR")
        .unwrap_or_else(|_| DEFAULT_BIND_ADDR.into())
        .parse()?;
    let app = create_router(AppState::new(config));

    info!("Listening on {}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
