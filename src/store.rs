use crate::errors::HabitError;
use crate::models::{CardState, HabitEntry};
use chrono::NaiveDate;

/// Distinct days one habit may hold; roughly ten years of daily logging.
pub const MAX_ENTRIES: usize = 3660;

/// In-memory store for a single habit and its completion entries.
#[derive(Debug, Clone, Default)]
pub struct HabitStore {
    habit: Option<String>,
    entries: Vec<HabitEntry>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CreateOutcome {
    Created,
    AlreadyExists,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogOutcome {
    Added,
    Replaced,
}

impl HabitStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn habit(&self) -> Option<&str> {
        self.habit.as_deref()
    }

    pub fn entries(&self) -> &[HabitEntry] {
        &self.entries
    }

    pub fn state(&self) -> CardState {
        if self.habit.is_some() {
            CardState::Tracking
        } else {
            CardState::NoHabit
        }
    }

    /// Names the habit. Only the first successful call has an effect.
    pub fn create(&mut self, name: &str) -> Result<CreateOutcome, HabitError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(HabitError::InvalidHabitName);
        }
        if self.habit.is_some() {
            return Ok(CreateOutcome::AlreadyExists);
        }

        self.habit = Some(name.to_string());
        Ok(CreateOutcome::Created)
    }

    /// Marks `date` completed, replacing any entry already logged for that day.
    pub fn log_entry(&mut self, date: &str) -> Result<LogOutcome, HabitError> {
        if self.habit.is_none() {
            return Err(HabitError::NoActiveHabit);
        }
        let date = parse_day(date)?;

        let outcome = if self.entries.iter().any(|entry| entry.date == date) {
            self.entries.retain(|entry| entry.date != date);
            LogOutcome::Replaced
        } else if self.entries.len() >= MAX_ENTRIES {
            return Err(HabitError::EntryLimitReached(MAX_ENTRIES));
        } else {
            LogOutcome::Added
        };

        self.entries.push(HabitEntry {
            date,
            completed: true,
        });
        Ok(outcome)
    }
}

/// Parses a strict `YYYY-MM-DD` calendar day.
pub fn parse_day(input: &str) -> Result<NaiveDate, HabitError> {
    let bytes = input.as_bytes();
    let shaped = bytes.len() == 10
        && bytes[4] == b'-'
        && bytes[7] == b'-'
        && bytes
            .iter()
            .enumerate()
            .all(|(idx, byte)| idx == 4 || idx == 7 || byte.is_ascii_digit());
    if !shaped {
        return Err(HabitError::InvalidDateInput(input.to_string()));
    }

    NaiveDate::parse_from_str(input, "%Y-%m-%d")
        .map_err(|_| HabitError::InvalidDateInput(input.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tracking(name: &str) -> HabitStore {
        let mut store = HabitStore::new();
        store.create(name).unwrap();
        store
    }

    #[test]
    fn create_moves_store_to_tracking() {
        let mut store = HabitStore::new();
        assert_eq!(store.state(), CardState::NoHabit);
        assert_eq!(store.create("  Meditate ").unwrap(), CreateOutcome::Created);
        assert_eq!(store.state(), CardState::Tracking);
        assert_eq!(store.habit(), Some("Meditate"));
    }

    #[test]
    fn second_create_is_ignored() {
        let mut store = tracking("Meditate");
        assert_eq!(store.create("Run").unwrap(), CreateOutcome::AlreadyExists);
        assert_eq!(store.habit(), Some("Meditate"));
    }

    #[test]
    fn blank_names_are_rejected() {
        let mut store = HabitStore::new();
        assert_eq!(store.create(""), Err(HabitError::InvalidHabitName));
        assert_eq!(store.create(" \t "), Err(HabitError::InvalidHabitName));
        assert_eq!(store.state(), CardState::NoHabit);
    }

    #[test]
    fn logging_same_date_twice_keeps_one_entry() {
        let mut store = tracking("Meditate");
        assert_eq!(store.log_entry("2024-01-01").unwrap(), LogOutcome::Added);
        let first = store.entries().to_vec();

        assert_eq!(store.log_entry("2024-01-01").unwrap(), LogOutcome::Replaced);
        assert_eq!(store.entries(), first.as_slice());
    }

    #[test]
    fn logging_new_date_appends() {
        let mut store = tracking("Meditate");
        store.log_entry("2024-01-02").unwrap();
        store.log_entry("2024-01-01").unwrap();
        assert_eq!(store.entries().len(), 2);

        let last = store.entries().last().unwrap();
        assert_eq!(last.date, NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
        assert!(last.completed);
    }

    #[test]
    fn replaced_entry_moves_to_the_end() {
        let mut store = tracking("Meditate");
        store.log_entry("2024-01-01").unwrap();
        store.log_entry("2024-01-02").unwrap();
        store.log_entry("2024-01-01").unwrap();

        let dates: Vec<String> = store.entries().iter().map(|e| e.date.to_string()).collect();
        assert_eq!(dates, vec!["2024-01-02", "2024-01-01"]);
    }

    #[test]
    fn logging_without_habit_fails() {
        let mut store = HabitStore::new();
        assert_eq!(store.log_entry("2024-01-01"), Err(HabitError::NoActiveHabit));
        assert!(store.entries().is_empty());
    }

    #[test]
    fn malformed_dates_are_rejected() {
        let mut store = tracking("Meditate");
        for input in ["", "2024-1-01", "2024-02-30", "01/02/2024", "2024-01-01T00:00", "+202-01-01", " 2024-01-01"] {
            assert_eq!(
                store.log_entry(input),
                Err(HabitError::InvalidDateInput(input.to_string())),
                "{input:?} should be rejected"
            );
        }
        assert!(store.entries().is_empty());
    }

    #[test]
    fn full_store_rejects_new_days_but_allows_replacing() {
        let mut store = tracking("Meditate");
        let start = NaiveDate::from_ymd_opt(2000, 1, 1).unwrap();
        for offset in 0..MAX_ENTRIES as i64 {
            let date = start + chrono::Duration::days(offset);
            store.log_entry(&date.to_string()).unwrap();
        }
        assert_eq!(store.entries().len(), MAX_ENTRIES);

        let next = start + chrono::Duration::days(MAX_ENTRIES as i64);
        assert_eq!(
            store.log_entry(&next.to_string()),
            Err(HabitError::EntryLimitReached(MAX_ENTRIES))
        );
        assert_eq!(store.log_entry("2000-01-01").unwrap(), LogOutcome::Replaced);
        assert_eq!(store.entries().len(), MAX_ENTRIES);
    }

    #[test]
    fn parse_day_accepts_leap_day() {
        assert_eq!(
            parse_day("2024-02-29").unwrap(),
            NaiveDate::from_ymd_opt(2024, 2, 29).unwrap()
        );
    }
}
