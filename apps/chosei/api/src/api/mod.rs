//! API routes module

pub mod health;
pub mod polls;

use axum::Router;

use crate::state::AppState;

/// All API routes. Nested under `/api` by `axum_helpers::create_router`.
pub fn routes(state: &AppState) -> Router {
    polls::router(state)
}
