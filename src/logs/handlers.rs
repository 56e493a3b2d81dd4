use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{delete, get, post},
    Json, Router,
};
use time::{Date, OffsetDateTime};
use tracing::{info, instrument};
use uuid::Uuid;

use crate::domain::{LogRecord, Stats};
use crate::error::reject;
use crate::logs::dto::{ListQuery, LogMealRequest, LogMealResponse};
use crate::logs::services;
use crate::state::AppState;

pub fn log_routes() -> Router<AppState> {
    Router::new()
        .route("/logs", post(log_meal).get(list_logs))
        .route("/logs/:id", delete(delete_log))
}

pub fn stats_routes() -> Router<AppState> {
    Router::new()
        .route("/stats/today", get(today_stats))
        .route("/stats/weekly", get(weekly_stats))
}

/// POST /logs: run a meal through the tracking engine.
#[instrument(skip(state, body), fields(dish = %body.dish))]
pub async fn log_meal(
    State(state): State<AppState>,
    Json(body): Json<LogMealRequest>,
) -> Result<(StatusCode, Json<LogMealResponse>), (StatusCode, String)> {
    let outcome = services::log_meal(&state, body.into_candidate())
        .await
        .map_err(reject)?;
    info!(
        xp = outcome.record.xp,
        streak = outcome.profile.streak,
        new_badges = outcome.newly_unlocked.len(),
        "meal logged"
    );
    Ok((StatusCode::CREATED, Json(outcome.into())))
}

/// GET /logs?from=2026-03-01&to=2026-03-07 or GET /logs?today=true
#[instrument(skip(state))]
pub async fn list_logs(
    State(state): State<AppState>,
    Query(params): Query<ListQuery>,
) -> Result<Json<Vec<LogRecord>>, (StatusCode, String)> {
    let range = resolve_range(&params)?;
    let logs = services::list_logs(&state, range).await.map_err(reject)?;
    Ok(Json(logs))
}

/// DELETE /logs/:id: removes the record only, never the XP it awarded.
#[instrument(skip(state))]
pub async fn delete_log(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, (StatusCode, String)> {
    services::delete_log(&state, id).await.map_err(reject)?;
    Ok(StatusCode::NO_CONTENT)
}

/// GET /stats/today
#[instrument(skip(state))]
pub async fn today_stats(
    State(state): State<AppState>,
) -> Result<Json<Stats>, (StatusCode, String)> {
    let today = OffsetDateTime::now_utc().date();
    let stats = services::stats_today(&state, today).await.map_err(reject)?;
    Ok(Json(stats))
}

/// GET /stats/weekly
#[instrument(skip(state))]
pub async fn weekly_stats(
    State(state): State<AppState>,
) -> Result<Json<Stats>, (StatusCode, String)> {
    let today = OffsetDateTime::now_utc().date();
    let stats = services::stats_weekly(&state, today)
        .await
        .map_err(reject)?;
    Ok(Json(stats))
}

fn resolve_range(params: &ListQuery) -> Result<Option<(Date, Date)>, (StatusCode, String)> {
    if params.today {
        let today = OffsetDateTime::now_utc().date();
        return Ok(Some((today, today)));
    }
    match (&params.from, &params.to) {
        (None, None) => Ok(None),
        (from, to) => {
            let start = from
                .as_deref()
                .map(parse_date)
                .transpose()?
                .unwrap_or(Date::MIN);
            let end = to
                .as_deref()
                .map(parse_date)
                .transpose()?
                .unwrap_or(Date::MAX);
            Ok(Some((start, end)))
        }
    }
}

fn parse_date(s: &str) -> Result<Date, (StatusCode, String)> {
    let fmt = time::macros::format_description!("[year]-[month]-[day]");
    Date::parse(s, fmt).map_err(|e| (StatusCode::BAD_REQUEST, format!("invalid date: {e}")))
}
