use std::collections::BTreeSet;

use time::Date;

use crate::domain::{LogRecord, Stats};

/// Fold log records into summary totals, optionally restricted to an
/// inclusive calendar-date range (compared on the record's UTC date).
///
/// Pure and read-only; an empty input yields all-zero stats with an average
/// health score of 0 rather than a division by zero.
pub fn aggregate(logs: &[LogRecord], range: Option<(Date, Date)>) -> Stats {
    let mut stats = Stats::default();
    let mut score_sum: i64 = 0;
    let mut days: BTreeSet<Date> = BTreeSet::new();

    for log in logs {
        let day = log.timestamp.date();
        if let Some((start, end)) = range {
            if day < start || day > end {
                continue;
            }
        }
        stats.total_calories += log.calories;
        stats.total_protein += log.protein;
        stats.total_carbs += log.carbs;
        stats.total_fat += log.fat;
        stats.total_xp += u64::from(log.xp);
        stats.meal_count += 1;
        score_sum += log.health_score;
        days.insert(day);
    }

    if stats.meal_count > 0 {
        stats.average_health_score = score_sum as f64 / stats.meal_count as f64;
    }
    stats.distinct_active_days = days.len();
    stats
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;
    use uuid::Uuid;

    fn record(ts: time::OffsetDateTime, calories: f64, health_score: i64, xp: u32) -> LogRecord {
        LogRecord {
            id: Uuid::new_v4(),
            timestamp: ts,
            dish: "Dal Tadka".into(),
            calories,
            protein: 9.0,
            carbs: 28.0,
            fat: 6.0,
            health_score,
            xp,
        }
    }

    #[test]
    fn empty_input_yields_zeroed_stats() {
        let stats = aggregate(&[], None);
        assert_eq!(stats, Stats::default());
        assert_eq!(stats.average_health_score, 0.0);
    }

    #[test]
    fn sums_and_average_over_all_records() {
        let logs = vec![
            record(datetime!(2026-03-09 08:00 UTC), 300.0, 80, 40),
            record(datetime!(2026-03-09 13:00 UTC), 500.0, 60, 30),
            record(datetime!(2026-03-10 09:00 UTC), 250.0, 70, 35),
        ];
        let stats = aggregate(&logs, None);
        assert_eq!(stats.total_calories, 1050.0);
        assert_eq!(stats.total_xp, 105);
        assert_eq!(stats.meal_count, 3);
        assert_eq!(stats.average_health_score, 70.0);
        assert_eq!(stats.distinct_active_days, 2);
    }

    #[test]
    fn range_filter_is_inclusive_on_both_ends() {
        let logs = vec![
            record(datetime!(2026-03-08 12:00 UTC), 100.0, 50, 25),
            record(datetime!(2026-03-09 12:00 UTC), 200.0, 60, 30),
            record(datetime!(2026-03-10 12:00 UTC), 300.0, 70, 35),
            record(datetime!(2026-03-11 12:00 UTC), 400.0, 80, 40),
        ];
        let range = Some((
            time::macros::date!(2026 - 03 - 09),
            time::macros::date!(2026 - 03 - 10),
        ));
        let stats = aggregate(&logs, range);
        assert_eq!(stats.meal_count, 2);
        assert_eq!(stats.total_calories, 500.0);
        assert_eq!(stats.average_health_score, 65.0);
        assert_eq!(stats.distinct_active_days, 2);
    }
}
