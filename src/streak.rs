use crate::models::HabitEntry;
use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime};
use std::collections::BTreeSet;

/// Upper bound on how many weeks the backward scan may visit.
pub const MAX_STREAK_WEEKS: u32 = 3000;

/// Counts consecutive Sunday-start calendar weeks with at least one entry,
/// ending at the week containing `now`.
///
/// The current week runs from its Sunday up to `now`, so entries dated after
/// today never count. Older weeks are whole Sunday..=Saturday spans and the
/// scan stops at the first one without an entry.
pub fn weekly_streak(now: NaiveDateTime, entries: &[HabitEntry]) -> u32 {
    let today = now.date();
    let days: BTreeSet<NaiveDate> = entries
        .iter()
        .filter(|entry| entry.completed)
        .map(|entry| entry.date)
        .collect();

    let current_start = week_start(today);
    if days.range(current_start..=today).next().is_none() {
        return 0;
    }

    let mut streak = 1;
    let mut start = current_start;
    while streak < MAX_STREAK_WEEKS {
        let Some(prev) = start.checked_sub_signed(Duration::weeks(1)) else {
            break;
        };
        let end = prev + Duration::days(6);
        if days.range(prev..=end).next().is_none() {
            break;
        }
        streak += 1;
        start = prev;
    }

    streak
}

pub fn week_start(date: NaiveDate) -> NaiveDate {
    date - Duration::days(date.weekday().num_days_from_sunday() as i64)
}
