mod dto;
pub mod handlers;
pub mod services;

use axum::Router;

use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .merge(handlers::log_routes())
        .merge(handlers::stats_routes())
}
