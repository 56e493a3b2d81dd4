pub mod handlers;
mod search;

pub use search::Catalog;

use axum::Router;

use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().merge(handlers::food_routes())
}
