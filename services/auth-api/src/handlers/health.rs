//! Liveness and readiness probes

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;
use std::time::Instant;

use crate::state::AppState;

const SERVICE_NAME: &str = "trustbank-auth-api";

#[derive(Debug, Serialize)]
pub struct Liveness {
    pub service: &'static str,
    pub status: &'static str,
}

#[derive(Debug, Serialize)]
pub struct Readiness {
    pub service: &'static str,
    pub status: &'static str,
    pub database: ProbeOutcome,
    /// Relay host the welcome mail will go through; configuration is
    /// validated at startup, so this only reports what is wired in
    pub smtp_relay: String,
}

#[derive(Debug, Serialize)]
pub struct ProbeOutcome {
    pub reachable: bool,
    pub latency_ms: u64,
}

/// GET /health - liveness, no dependency checks
pub async fn health() -> Json<Liveness> {
    Json(Liveness {
        service: SERVICE_NAME,
        status: "up",
    })
}

/// GET /ready - readiness, pings the database
///
/// Answers 503 when the database does not respond; the registration and
/// login flows cannot do anything useful without it.
pub async fn ready(State(state): State<AppState>) -> Result<Json<Readiness>, StatusCode> {
    let started = Instant::now();
    let reachable = sqlx::query("SELECT 1").fetch_one(&*state.pool).await.is_ok();
    let database = ProbeOutcome {
        reachable,
        latency_ms: started.elapsed().as_millis() as u64,
    };

    if !database.reachable {
        return Err(StatusCode::SERVICE_UNAVAILABLE);
    }

    Ok(Json(Readiness {
        service: SERVICE_NAME,
        status: "ready",
        database,
        smtp_relay: state.config.smtp.relay.clone(),
    }))
}
