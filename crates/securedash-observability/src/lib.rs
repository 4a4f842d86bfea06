//! SecureDash Observability
//!
//! Provides:
//! - Structured logging to the console and to rolling files
//! - HTTP request logging
//! - Prometheus metrics for HTTP traffic and account events
//!
//! File logging and metrics can be compiled out via the `observability`
//! feature (default on). At runtime they can be switched off with
//! `OBSERVABILITY_ENABLED=false`, in which case only console logging is set
//! up and every tracking helper is a no-op.
//!
//! # Examples
//!
//! ```no_run
//! use securedash_observability::init_logging;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     init_logging()?;
//!     // ... application code ...
//!     Ok(())
//! }
//! ```

mod basic_logging;
pub mod request_logging;

#[cfg(feature = "observability")]
pub mod logging;
#[cfg(feature = "observability")]
pub mod metrics;

pub use basic_logging::init_basic_console_logging;
pub use request_logging::logging_middleware;

#[cfg(feature = "observability")]
pub use metrics_exporter_prometheus::PrometheusHandle;

#[cfg(feature = "observability")]
pub use logging::{init_tracing, is_observability_enabled};
#[cfg(feature = "observability")]
pub use metrics::{
    init_metrics, metrics_app, metrics_middleware, track_account_created,
    track_authorization_check, track_login_failure, track_login_success, track_token_issued,
};

/// Sets up the global subscriber.
///
/// Full logging (console, error file, JSON file) when observability is
/// compiled in and enabled, console-only otherwise.
pub fn init_logging() -> anyhow::Result<()> {
    #[cfg(feature = "observability")]
    if is_observability_enabled() {
        return init_tracing();
    }

    init_basic_console_logging()
}

// No-op stubs when observability is disabled
#[cfg(not(feature = "observability"))]
pub mod stubs {
    use axum::{extract::Request, middleware::Next, response::Response};

    pub fn is_observability_enabled() -> bool {
        false
    }

    pub async fn metrics_middleware(req: Request, next: Next) -> Response {
        next.run(req).await
    }

    pub fn init_metrics() -> anyhow::Result<Option<()>> {
        Ok(None)
    }

    pub fn metrics_app(_handle: ()) -> axum::Router {
        axum::Router::new()
    }

    pub fn track_account_created(_role: &str) {}
    pub fn track_login_success(_role: &str) {}
    pub fn track_login_failure(_reason: &str) {}
    pub fn track_token_issued() {}
    pub fn track_authorization_check(_allowed: bool, _role: &str) {}
}

#[cfg(not(feature = "observability"))]
pub use stubs::*;
