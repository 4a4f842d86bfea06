use anyhow::Context;
use std::fs;
use std::sync::OnceLock;
use tracing::info;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{EnvFilter, Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::basic_logging::default_filter;

static OBSERVABILITY_ENABLED: OnceLock<bool> = OnceLock::new();

/// Check if observability is enabled via OBSERVABILITY_ENABLED env var
pub fn is_observability_enabled() -> bool {
    *OBSERVABILITY_ENABLED.get_or_init(|| {
        std::env::var("OBSERVABILITY_ENABLED")
            .map(|v| v.to_lowercase() != "false" && v != "0")
            .unwrap_or(true)
    })
}

/// Console, daily error file and daily JSON file.
///
/// Files go to `LOG_DIR` (default `storage/logs`).
pub fn init_tracing() -> anyhow::Result<()> {
    let log_dir = std::env::var("LOG_DIR").unwrap_or_else(|_| "storage/logs".to_string());
    fs::create_dir_all(&log_dir)
        .with_context(|| format!("Failed to create logs directory {}", log_dir))?;

    let console_layer = fmt::layer()
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_file(true)
        .with_line_number(true)
        .compact()
        .with_filter(default_filter());

    let file_appender = RollingFileAppender::new(Rotation::DAILY, &log_dir, "securedash.log");
    let file_layer = fmt::layer()
        .with_writer(file_appender)
        .with_target(false)
        .with_file(true)
        .with_line_number(true)
        .with_ansi(false)
        .with_filter(EnvFilter::new("error"));

    // Structured logs for ingestion (Loki and friends)
    let json_appender = RollingFileAppender::new(Rotation::DAILY, &log_dir, "securedash.json");
    let json_layer = fmt::layer()
        .json()
        .with_writer(json_appender)
        .with_current_span(true)
        .with_span_list(true)
        .with_filter(EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .with(json_layer)
        .try_init()?;

    info!(log_dir = %log_dir, "Tracing initialized with file logging");
    Ok(())
}
