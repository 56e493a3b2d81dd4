use time::{Date, OffsetDateTime};
use uuid::Uuid;

use crate::domain::{Badge, CandidateFood, LogRecord, Profile};
use crate::engine::progression;
use crate::engine::streak::{self, StreakState};
use crate::error::EngineError;

/// Any log with at least this health score makes its day count toward the
/// streak.
pub const QUALIFYING_SCORE: i64 = 60;

/// Everything a single meal log produces. Persistence of the profile and the
/// record belongs to the caller.
#[derive(Debug, Clone)]
pub struct LogOutcome {
    pub profile: Profile,
    pub record: LogRecord,
    pub newly_unlocked: Vec<Badge>,
}

/// Run one meal submission through the progression rules.
///
/// `todays_logs` are the records already logged on `today`; qualification is
/// decided over those plus the new record. The input profile is untouched,
/// so a validation failure leaves no partial state anywhere.
pub fn log_meal(
    profile: &Profile,
    candidate: &CandidateFood,
    todays_logs: &[LogRecord],
    today: Date,
    now: OffsetDateTime,
) -> Result<LogOutcome, EngineError> {
    validate(candidate)?;

    let xp = progression::xp_for_health_score(candidate.health_score);
    let record = LogRecord {
        id: Uuid::new_v4(),
        timestamp: now,
        dish: candidate.dish.clone(),
        calories: candidate.calories,
        protein: candidate.protein,
        carbs: candidate.carbs,
        fat: candidate.fat,
        health_score: candidate.health_score,
        xp,
    };

    let today_qualifies = todays_logs
        .iter()
        .chain(std::iter::once(&record))
        .any(|log| log.health_score >= QUALIFYING_SCORE);

    let next_streak = streak::transition(
        StreakState {
            length: profile.streak,
            last_qualifying: profile.last_healthy_date,
        },
        today,
        today_qualifies,
    );

    let total_xp = profile.total_xp + xp;
    let (badges, newly_unlocked) =
        progression::evaluate_badges(&profile.badges, total_xp, next_streak.length);

    let mut updated = profile.clone();
    updated.total_xp = total_xp;
    updated.current_level = progression::level_for_xp(total_xp);
    updated.badges = badges;
    updated.streak = next_streak.length;
    updated.last_healthy_date = next_streak.last_qualifying;

    Ok(LogOutcome {
        profile: updated,
        record,
        newly_unlocked,
    })
}

fn validate(candidate: &CandidateFood) -> Result<(), EngineError> {
    if !(0..=100).contains(&candidate.health_score) {
        return Err(EngineError::InvalidFoodData(format!(
            "health score {} outside [0, 100]",
            candidate.health_score
        )));
    }
    for (name, value) in [
        ("calories", candidate.calories),
        ("protein", candidate.protein),
        ("carbs", candidate.carbs),
        ("fat", candidate.fat),
    ] {
        if value < 0.0 {
            return Err(EngineError::InvalidFoodData(format!(
                "{name} must be non-negative"
            )));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::{date, datetime};

    fn candidate(health_score: i64) -> CandidateFood {
        CandidateFood {
            dish: "Palak Paneer".into(),
            calories: 280.0,
            protein: 14.0,
            carbs: 12.0,
            fat: 18.0,
            health_score,
        }
    }

    #[test]
    fn awards_xp_level_and_streak() {
        let mut profile = Profile::default();
        profile.total_xp = 90;
        profile.current_level = 1;
        profile.streak = 3;
        profile.last_healthy_date = Some(date!(2026 - 03 - 09));

        let outcome = log_meal(
            &profile,
            &candidate(80),
            &[],
            date!(2026 - 03 - 10),
            datetime!(2026-03-10 12:00 UTC),
        )
        .unwrap();

        assert_eq!(outcome.record.xp, 40);
        assert_eq!(outcome.profile.total_xp, 130);
        assert_eq!(outcome.profile.current_level, 2);
        assert_eq!(outcome.profile.streak, 4);
        assert_eq!(
            outcome.profile.last_healthy_date,
            Some(date!(2026 - 03 - 10))
        );
        assert_eq!(outcome.newly_unlocked, vec![Badge::First50]);
        assert_eq!(outcome.profile.badges, vec![Badge::First50]);
    }

    #[test]
    fn level_tracks_xp_on_every_path() {
        let mut profile = Profile::default();
        profile.total_xp = 199;
        let outcome = log_meal(
            &profile,
            &candidate(2),
            &[],
            date!(2026 - 03 - 10),
            datetime!(2026-03-10 12:00 UTC),
        )
        .unwrap();
        assert_eq!(outcome.profile.total_xp, 200);
        assert_eq!(
            outcome.profile.current_level,
            outcome.profile.total_xp / 100 + 1
        );
    }

    #[test]
    fn unqualifying_meal_still_counts_day_via_earlier_log() {
        let profile = Profile::default();
        let earlier = LogRecord {
            id: uuid::Uuid::new_v4(),
            timestamp: datetime!(2026-03-10 08:00 UTC),
            dish: "Oats".into(),
            calories: 150.0,
            protein: 5.0,
            carbs: 27.0,
            fat: 3.0,
            health_score: 85,
            xp: 43,
        };
        let outcome = log_meal(
            &profile,
            &candidate(10),
            &[earlier],
            date!(2026 - 03 - 10),
            datetime!(2026-03-10 12:00 UTC),
        )
        .unwrap();
        assert_eq!(outcome.profile.streak, 1);
    }

    #[test]
    fn low_score_day_does_not_start_a_streak() {
        let profile = Profile::default();
        let outcome = log_meal(
            &profile,
            &candidate(30),
            &[],
            date!(2026 - 03 - 10),
            datetime!(2026-03-10 12:00 UTC),
        )
        .unwrap();
        assert_eq!(outcome.profile.streak, 0);
        assert_eq!(outcome.profile.last_healthy_date, None);
    }

    #[test]
    fn streak_badge_uses_the_new_streak_length() {
        let mut profile = Profile::default();
        profile.streak = 6;
        profile.last_healthy_date = Some(date!(2026 - 03 - 09));
        let outcome = log_meal(
            &profile,
            &candidate(70),
            &[],
            date!(2026 - 03 - 10),
            datetime!(2026-03-10 12:00 UTC),
        )
        .unwrap();
        assert_eq!(outcome.profile.streak, 7);
        assert!(outcome.newly_unlocked.contains(&Badge::Streak7));
    }

    #[test]
    fn out_of_range_health_score_is_rejected() {
        let profile = Profile::default();
        let err = log_meal(
            &profile,
            &candidate(101),
            &[],
            date!(2026 - 03 - 10),
            datetime!(2026-03-10 12:00 UTC),
        )
        .unwrap_err();
        assert!(matches!(err, EngineError::InvalidFoodData(_)));
    }

    #[test]
    fn negative_macro_is_rejected() {
        let profile = Profile::default();
        let mut food = candidate(50);
        food.fat = -1.0;
        let err = log_meal(
            &profile,
            &food,
            &[],
            date!(2026 - 03 - 10),
            datetime!(2026-03-10 12:00 UTC),
        )
        .unwrap_err();
        assert!(matches!(err, EngineError::InvalidFoodData(_)));
    }
}
