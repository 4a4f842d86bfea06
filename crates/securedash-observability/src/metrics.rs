use axum::{
    Router,
    extract::{MatchedPath, Request},
    middleware::Next,
    response::Response,
    routing::get,
};
use metrics::{counter, gauge, histogram};
use metrics_exporter_prometheus::{Matcher, PrometheusBuilder, PrometheusHandle};
use std::time::{Duration, Instant};

use crate::logging::is_observability_enabled;

/// Installs the global Prometheus recorder and spawns its upkeep task.
///
/// Returns `None` when observability is disabled. Must be called from within
/// a Tokio runtime, and at most once per process.
pub fn init_metrics() -> anyhow::Result<Option<PrometheusHandle>> {
    if !is_observability_enabled() {
        return Ok(None);
    }

    let handle = PrometheusBuilder::new()
        .set_buckets_for_metric(
            Matcher::Full("http_request_duration_seconds".to_string()),
            &[
                0.001, 0.005, 0.01, 0.025, 0.05, 0.075, 0.1, 0.25, 0.5, 0.75, 1.0, 2.5, 5.0, 7.5,
                10.0,
            ],
        )?
        .install_recorder()?;

    let upkeep_handle = handle.clone();
    tokio::spawn(async move {
        loop {
            tokio::time::sleep(Duration::from_secs(5)).await;
            upkeep_handle.run_upkeep();
        }
    });

    Ok(Some(handle))
}

/// Router serving the Prometheus text exposition at `/metrics`.
pub fn metrics_app(handle: PrometheusHandle) -> Router {
    Router::new().route("/metrics", get(move || async move { handle.render() }))
}

/// Records request count, latency and in-flight gauge per matched route.
pub async fn metrics_middleware(req: Request, next: Next) -> Response {
    if !is_observability_enabled() {
        return next.run(req).await;
    }

    let start = Instant::now();
    let method = req.method().as_str().to_owned();
    let path = req
        .extensions()
        .get::<MatchedPath>()
        .map(|p| p.as_str().to_owned())
        .unwrap_or_else(|| req.uri().path().to_owned());

    gauge!("http_requests_active").increment(1.0);

    let response = next.run(req).await;

    let latency = start.elapsed().as_secs_f64();
    let status = response.status().as_u16();

    counter!("http_requests_total", "method" => method.clone(), "path" => path.clone(), "status" => status.to_string()).increment(1);
    histogram!("http_request_duration_seconds", "method" => method, "path" => path).record(latency);

    gauge!("http_requests_active").decrement(1.0);

    response
}

// Business metrics helpers

pub fn track_account_created(role: &str) {
    if !is_observability_enabled() {
        return;
    }
    counter!("accounts_created_total", "role" => role.to_string()).increment(1);
}

pub fn track_login_success(role: &str) {
    if !is_observability_enabled() {
        return;
    }
    counter!("logins_total", "role" => role.to_string(), "status" => "success").increment(1);
}

pub fn track_login_failure(reason: &str) {
    if !is_observability_enabled() {
        return;
    }
    counter!("logins_total", "role" => "unknown", "status" => "failure", "reason" => reason.to_string()).increment(1);
}

pub fn track_token_issued() {
    if !is_observability_enabled() {
        return;
    }
    counter!("tokens_issued_total").increment(1);
}

pub fn track_authorization_check(allowed: bool, role: &str) {
    if !is_observability_enabled() {
        return;
    }
    let status = if allowed { "allowed" } else { "denied" };
    counter!("authorization_checks_total", "role" => role.to_string(), "status" => status)
        .increment(1);
}
