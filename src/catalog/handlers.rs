use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use tracing::instrument;

use crate::domain::CandidateFood;
use crate::state::AppState;

pub fn food_routes() -> Router<AppState> {
    Router::new()
        .route("/foods", get(search_foods))
        .route("/foods/:dish", get(get_food))
}

#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    pub q: String,
}

/// GET /foods?q=dosa
#[instrument(skip(state))]
pub async fn search_foods(
    State(state): State<AppState>,
    Query(params): Query<SearchQuery>,
) -> Json<Vec<CandidateFood>> {
    let results = state
        .catalog
        .search(&params.q)
        .into_iter()
        .cloned()
        .collect();
    Json(results)
}

/// GET /foods/:dish: exact lookup, case-insensitive.
#[instrument(skip(state))]
pub async fn get_food(
    State(state): State<AppState>,
    Path(dish): Path<String>,
) -> Result<Json<CandidateFood>, (StatusCode, String)> {
    state
        .catalog
        .get(&dish)
        .cloned()
        .map(Json)
        .ok_or((StatusCode::NOT_FOUND, "Food not found".into()))
}
