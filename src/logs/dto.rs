use serde::{Deserialize, Serialize};

use crate::domain::{Badge, CandidateFood, LogRecord, Profile};
use crate::engine::tracking::LogOutcome;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogMealRequest {
    pub dish: String,
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
    pub health_score: i64,
}

impl LogMealRequest {
    pub fn into_candidate(self) -> CandidateFood {
        CandidateFood {
            dish: self.dish,
            calories: self.calories,
            protein: self.protein,
            carbs: self.carbs,
            fat: self.fat,
            health_score: self.health_score,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LogMealResponse {
    pub profile: Profile,
    pub record: LogRecord,
    pub newly_unlocked: Vec<Badge>,
}

impl From<LogOutcome> for LogMealResponse {
    fn from(outcome: LogOutcome) -> Self {
        Self {
            profile: outcome.profile,
            record: outcome.record,
            newly_unlocked: outcome.newly_unlocked,
        }
    }
}

/// `from`/`to` are inclusive `YYYY-MM-DD` bounds; `today` is a shorthand
/// that overrides both.
#[derive(Debug, Default, Deserialize)]
pub struct ListQuery {
    pub from: Option<String>,
    pub to: Option<String>,
    #[serde(default)]
    pub today: bool,
}
