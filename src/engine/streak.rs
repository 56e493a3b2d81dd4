use time::Date;

/// The streak portion of a profile, small enough to pass by value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StreakState {
    pub length: u32,
    pub last_qualifying: Option<Date>,
}

/// Advance the streak state machine for `today`.
///
/// A day qualifies when at least one of its logs has a health score >= 60;
/// the caller derives `today_qualifies` from the day's logs. A qualifying
/// day extends a streak anchored on yesterday, is a no-op if already counted
/// today, and otherwise restarts at 1. A non-qualifying evaluation keeps the
/// streak alive for one day of grace (last qualifying day == yesterday) and
/// breaks it once the gap grows past that.
pub fn transition(state: StreakState, today: Date, today_qualifies: bool) -> StreakState {
    let yesterday = today.previous_day();
    if today_qualifies {
        let length = match state.last_qualifying {
            Some(d) if Some(d) == yesterday => state.length + 1,
            Some(d) if d == today => state.length,
            _ => 1,
        };
        StreakState {
            length,
            last_qualifying: Some(today),
        }
    } else {
        let length = match state.last_qualifying {
            Some(d) if Some(d) == yesterday || d == today => state.length,
            Some(_) => 0,
            None => state.length,
        };
        StreakState {
            length,
            last_qualifying: state.last_qualifying,
        }
    }
}
