//! Readiness endpoint

use axum::{Router, extract::State, response::IntoResponse, routing::get};
use axum_helpers::{HealthCheckFuture, run_health_checks};

use crate::state::{AppState, Store};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/ready", get(readiness_check))
        .with_state(state)
}

/// Pings MongoDB; the in-memory store is always ready.
async fn readiness_check(State(state): State<AppState>) -> impl IntoResponse {
    let checks: Vec<(&str, HealthCheckFuture<'_>)> = match &state.store {
        Store::MongoDb { client, .. } => vec![(
            "mongodb",
            Box::pin(async move {
                let status = database::mongodb::check_health_detailed(client).await;
                if status.healthy {
                    Ok(())
                } else {
                    Err(status.message.unwrap_or_else(|| "ping failed".to_string()))
                }
            }),
        )],
        Store::Memory(_) => vec![("memory", Box::pin(async { Ok(()) }))],
    };

    run_health_checks(checks).await
}
