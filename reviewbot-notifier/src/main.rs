//! Reviewbot Notifier
//!
//! A single-process notifier that polls the homework-review API on a fixed
//! interval and relays status changes for the newest submission to a
//! Telegram chat.
//!
//! Architecture:
//! - Configuration: secrets and tuning from environment variables
//! - Clients: HTTP communication with the review API and the Bot API
//! - Services: trait seams for the status source and the message sink
//! - Scheduler: fixed-interval polling with change detection
//!
//! The notifier fetches the homework statuses, validates the payload shape,
//! extracts a human-readable report for the newest homework, and sends it to
//! the chat only when it differs from the last one sent.

mod config;
mod error;
mod scheduler;
mod service;

use std::time::Duration;

use anyhow::{Context, Result};
use tracing::{error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::Config;
use crate::scheduler::StatusPoller;
use crate::service::TelegramSink;
use reviewbot_client::{ReviewApiClient, TelegramBot};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "reviewbot_notifier=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting reviewbot notifier");

    // Load configuration; missing credentials are fatal before any network
    // client exists
    let config = match load_config() {
        Ok(config) => config,
        Err(e) => {
            error!("Required configuration is missing: {}", e);
            return Err(e.into());
        }
    };
    info!(
        "Loaded configuration: endpoint={}, poll_interval={:?}",
        config.endpoint, config.poll_interval
    );

    let http_client = reqwest::Client::builder()
        .timeout(Duration::from_secs(30))
        .build()
        .context("Failed to build HTTP client")?;

    let api = ReviewApiClient::with_client(
        config.endpoint.clone(),
        config.practicum_token.clone(),
        http_client.clone(),
    );
    let bot = TelegramBot::with_client(config.telegram_token.clone(), http_client);

    // Announce the bot identity; a failure here is not fatal
    match bot.get_me().await {
        Ok(me) => info!(
            "Telegram bot: @{}",
            me.username.as_deref().unwrap_or("unknown")
        ),
        Err(e) => warn!("Could not verify bot identity: {}", e),
    }

    let sink = TelegramSink::new(bot, config.telegram_chat_id.clone());

    // The fetch window's origin is fixed once at startup
    let from_date = chrono::Utc::now().timestamp();
    let mut poller = StatusPoller::new(config, api, sink, from_date);

    info!("Notifier initialized successfully");

    tokio::select! {
        _ = poller.run() => {}
        _ = shutdown_signal() => {
            info!("Shutting down notifier");
        }
    }

    Ok(())
}

/// Loads and validates configuration from environment variables
fn load_config() -> std::result::Result<Config, crate::error::NotifierError> {
    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}

/// Graceful shutdown signal handler
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, shutting down...");
        }
        _ = terminate => {
            info!("Received SIGTERM, shutting down...");
        }
    }
}
