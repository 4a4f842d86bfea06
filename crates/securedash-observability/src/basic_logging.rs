use tracing_subscriber::{EnvFilter, Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Default filter directives: `LOG_LEVEL` (default "info") for everything,
/// noisy dependencies held at warn.
pub(crate) fn default_filter() -> EnvFilter {
    let log_level = std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "{},tower_http=warn,hyper=warn,h2=warn,sqlx=warn",
            log_level
        ))
    })
}

/// Console-only logging, used when observability is off.
pub fn init_basic_console_logging() -> anyhow::Result<()> {
    let console_layer = fmt::layer()
        .compact()
        .with_target(true)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_file(true)
        .with_line_number(true)
        .with_ansi(true)
        .with_filter(default_filter());

    tracing_subscriber::registry().with(console_layer).try_init()?;

    // Printed to stderr so it shows even with a restrictive filter.
    eprintln!("Observability disabled - console logging only");
    Ok(())
}
