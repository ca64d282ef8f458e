// ABOUTME: Server binary for the Mindful Menu nutrition and meal planning API
// ABOUTME: Loads configuration, restores the meals cache snapshot and serves the axum router
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mindful Menu Contributors

//! # Mindful Menu Server Binary
//!
//! Starts the HTTP API. A missing Gemini key only disables the generation
//! routes unless `--require-api-key` is given.

use anyhow::{bail, Context, Result};
use clap::Parser;
use mindful_menu::{
    cache::RestoreOutcome,
    config::environment::ServerConfig,
    logging,
    resources::ServerResources,
    routes,
};
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{info, warn};

#[derive(Parser)]
#[command(name = "mindful-menu-server")]
#[command(about = "Mindful Menu - nutrition targets and AI meal suggestions")]
pub struct Args {
    /// Override HTTP port
    #[arg(long)]
    http_port: Option<u16>,

    /// Override bind address
    #[arg(long)]
    host: Option<String>,

    /// Refuse to start without a usable Gemini API key
    #[arg(long)]
    require_api_key: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // .env may set RUST_LOG; configuration loading logs through the subscriber
    dotenvy::dotenv().ok();
    logging::init_from_env()?;
    let mut config = ServerConfig::from_env()?;

    if let Some(http_port) = args.http_port {
        config.http_port = http_port;
    }
    if let Some(host) = args.host {
        config.host = host;
    }

    if args.require_api_key {
        if let Err(e) = config.llm.api_key.require() {
            bail!("{}. Set GEMINI_API_KEY or add `key=<your key>` to the key file", e.message);
        }
    }

    info!("{}", config.summary());

    let resources = Arc::new(ServerResources::from_config(&config));

    match resources.cache().restore().await {
        Ok(RestoreOutcome::Restored) => info!("Meals cache restored from snapshot"),
        Ok(RestoreOutcome::Stale) => info!("Meals cache snapshot too old, starting empty"),
        Ok(RestoreOutcome::NotFound) => info!("No meals cache snapshot, starting empty"),
        Err(e) => warn!(error = %e, "Failed to restore meals cache snapshot"),
    }

    let addr = format!("{}:{}", config.host, config.http_port);
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;

    display_available_endpoints(&config);
    info!("Listening on http://{addr}");

    axum::serve(listener, routes::router(resources))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server error")?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}

/// Display all available API endpoints
fn display_available_endpoints(config: &ServerConfig) {
    let (host, port) = (&config.host, config.http_port);

    info!("=== Available API Endpoints ===");
    info!("   Health Check:      GET  http://{host}:{port}/health");
    info!("   Calorie Targets:   POST http://{host}:{port}/calculate_calories");
    info!("   Meal Menu:         POST http://{host}:{port}/generate_menu");
    info!("   Daily Menus:       POST http://{host}:{port}/generate_all_menus");
    info!("   Suggestions:       POST http://{host}:{port}/get_suggestions");
    info!("=== End of Endpoint List ===");
}
