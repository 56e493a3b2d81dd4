use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use tracing::{info, instrument};

use crate::domain::Profile;
use crate::error::reject;
use crate::profile::dto::UpdateProfileRequest;
use crate::profile::services;
use crate::state::AppState;

pub fn profile_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/profile",
            get(get_profile).put(update_profile).delete(wipe_all),
        )
        .route("/profile/reset", post(reset_progress))
}

/// GET /profile
#[instrument(skip(state))]
pub async fn get_profile(
    State(state): State<AppState>,
) -> Result<Json<Profile>, (StatusCode, String)> {
    let profile = services::get_profile(&state).await.map_err(reject)?;
    Ok(Json(profile))
}

/// PUT /profile: partial update; derived fields recomputed in the same write.
#[instrument(skip(state, body))]
pub async fn update_profile(
    State(state): State<AppState>,
    Json(body): Json<UpdateProfileRequest>,
) -> Result<Json<Profile>, (StatusCode, String)> {
    let profile = services::update_profile(&state, body)
        .await
        .map_err(reject)?;
    Ok(Json(profile))
}

/// POST /profile/reset: zero progression, keep identity and measurements.
#[instrument(skip(state))]
pub async fn reset_progress(
    State(state): State<AppState>,
) -> Result<Json<Profile>, (StatusCode, String)> {
    let profile = services::reset_progress(&state).await.map_err(reject)?;
    info!("progression reset");
    Ok(Json(profile))
}

/// DELETE /profile: wipe profile and logs wholesale.
#[instrument(skip(state))]
pub async fn wipe_all(State(state): State<AppState>) -> Result<StatusCode, (StatusCode, String)> {
    services::wipe_all(&state).await.map_err(reject)?;
    info!("all user data deleted");
    Ok(StatusCode::NO_CONTENT)
}
