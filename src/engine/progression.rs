use crate::domain::Badge;

/// XP awarded for a single meal: half the health score, rounded.
pub fn xp_for_health_score(health_score: i64) -> u32 {
    (health_score as f64 / 2.0).round() as u32
}

/// Level curve: 100 XP per level, starting at level 1.
pub fn level_for_xp(total_xp: u32) -> u32 {
    total_xp / 100 + 1
}

/// Threshold table, checked in order. `newly_unlocked` preserves this order.
const BADGE_RULES: [(Badge, BadgeTrigger); 4] = [
    (Badge::First50, BadgeTrigger::Xp(50)),
    (Badge::Xp200, BadgeTrigger::Xp(200)),
    (Badge::Xp500, BadgeTrigger::Xp(500)),
    (Badge::Streak7, BadgeTrigger::Streak(7)),
];

#[derive(Clone, Copy)]
enum BadgeTrigger {
    Xp(u32),
    Streak(u32),
}

impl BadgeTrigger {
    fn fires(self, total_xp: u32, streak: u32) -> bool {
        match self {
            BadgeTrigger::Xp(t) => total_xp >= t,
            BadgeTrigger::Streak(t) => streak >= t,
        }
    }
}

/// Evaluate the badge table against the new totals.
///
/// Idempotent: a badge already held is neither re-added nor re-reported.
/// The returned badge list keeps existing entries in their insertion order
/// and appends new unlocks at the end.
pub fn evaluate_badges(
    current: &[Badge],
    total_xp: u32,
    streak: u32,
) -> (Vec<Badge>, Vec<Badge>) {
    let mut badges = current.to_vec();
    let mut newly_unlocked = Vec::new();
    for (badge, trigger) in BADGE_RULES {
        if trigger.fires(total_xp, streak) && !badges.contains(&badge) {
            badges.push(badge);
            newly_unlocked.push(badge);
        }
    }
    (badges, newly_unlocked)
}
