use time::{Date, Duration, OffsetDateTime};
use uuid::Uuid;

use crate::domain::{CandidateFood, LogRecord, Stats};
use crate::engine::stats::aggregate;
use crate::engine::tracking::{self, LogOutcome};
use crate::error::EngineError;
use crate::state::AppState;
use crate::store::{load_logs, load_profile, save_logs, save_profile};

/// Log a meal against the current wall clock.
pub async fn log_meal(
    state: &AppState,
    candidate: CandidateFood,
) -> Result<LogOutcome, EngineError> {
    log_meal_at(state, candidate, OffsetDateTime::now_utc()).await
}

/// Log a meal as of `now`. The engine stays clock-free; holding the write
/// lock across load-compute-save keeps the sequence single-writer.
pub async fn log_meal_at(
    state: &AppState,
    candidate: CandidateFood,
    now: OffsetDateTime,
) -> Result<LogOutcome, EngineError> {
    let _guard = state.write_lock.lock().await;

    let today = now.date();
    let profile = load_profile(state.store.as_ref()).await?.unwrap_or_default();
    let mut logs = load_logs(state.store.as_ref()).await?;

    let todays: Vec<LogRecord> = logs
        .iter()
        .filter(|log| log.timestamp.date() == today)
        .cloned()
        .collect();

    let outcome = tracking::log_meal(&profile, &candidate, &todays, today, now)?;

    logs.push(outcome.record.clone());
    save_logs(state.store.as_ref(), &logs).await?;
    save_profile(state.store.as_ref(), &outcome.profile).await?;

    Ok(outcome)
}

/// List records, optionally restricted to an inclusive date range.
pub async fn list_logs(
    state: &AppState,
    range: Option<(Date, Date)>,
) -> Result<Vec<LogRecord>, EngineError> {
    let logs = load_logs(state.store.as_ref()).await?;
    Ok(match range {
        Some((start, end)) => logs
            .into_iter()
            .filter(|log| {
                let day = log.timestamp.date();
                day >= start && day <= end
            })
            .collect(),
        None => logs,
    })
}

/// Remove a record wholesale. Derived profile state (XP, badges, streak) is
/// deliberately left as-is; see DESIGN.md.
pub async fn delete_log(state: &AppState, id: Uuid) -> Result<(), EngineError> {
    let _guard = state.write_lock.lock().await;

    let mut logs = load_logs(state.store.as_ref()).await?;
    let before = logs.len();
    logs.retain(|log| log.id != id);
    if logs.len() == before {
        return Err(EngineError::NotFound("log"));
    }
    save_logs(state.store.as_ref(), &logs).await
}

pub async fn stats_for_range(
    state: &AppState,
    range: Option<(Date, Date)>,
) -> Result<Stats, EngineError> {
    let logs = load_logs(state.store.as_ref()).await?;
    Ok(aggregate(&logs, range))
}

/// Today's totals.
pub async fn stats_today(state: &AppState, today: Date) -> Result<Stats, EngineError> {
    stats_for_range(state, Some((today, today))).await
}

/// Trailing seven calendar days, today inclusive.
pub async fn stats_weekly(state: &AppState, today: Date) -> Result<Stats, EngineError> {
    let start = today.checked_sub(Duration::days(6)).unwrap_or(today);
    stats_for_range(state, Some((start, today))).await
}
