mod dto;
pub mod gemini;
pub mod handlers;
pub mod services;

pub use dto::{Classification, FoodSuggestion};

use axum::extract::DefaultBodyLimit;
use axum::Router;

use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .merge(handlers::classify_routes())
        .layer(DefaultBodyLimit::max(5 * 1024 * 1024)) // 5MB image cap
}
