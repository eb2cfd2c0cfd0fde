use crate::models::{DayCell, HabitEntry};
use chrono::{Duration, NaiveDate};
use std::collections::HashSet;

/// Days shown even when nothing has been logged yet.
pub const GRID_MIN_DAYS: usize = 90;

pub const GRID_COLUMNS: usize = 7;

pub fn grid_len(entry_count: usize) -> usize {
    GRID_MIN_DAYS.max(entry_count.saturating_add(GRID_MIN_DAYS))
}

/// Builds the activity grid ending at `today`, oldest day first.
pub fn activity_grid(today: NaiveDate, entries: &[HabitEntry]) -> Vec<DayCell> {
    let logged: HashSet<NaiveDate> = entries.iter().map(|entry| entry.date).collect();
    let len = grid_len(entries.len());

    let mut cells = Vec::with_capacity(len);
    for offset in (0..len).rev() {
        let Some(date) = today.checked_sub_signed(Duration::days(offset as i64)) else {
            continue;
        };
        cells.push(DayCell {
            date,
            present: logged.contains(&date),
        });
    }
    cells
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn entry(date: NaiveDate) -> HabitEntry {
        HabitEntry {
            date,
            completed: true,
        }
    }

    #[test]
    fn empty_grid_has_ninety_blank_days() {
        let today = day(2024, 3, 31);
        let grid = activity_grid(today, &[]);
        assert_eq!(grid.len(), 90);
        assert!(grid.iter().all(|cell| !cell.present));
        assert_eq!(grid.last().unwrap().date, today);
        assert_eq!(grid.first().unwrap().date, today - Duration::days(89));
    }

    #[test]
    fn grid_grows_with_entries() {
        let today = day(2024, 3, 31);
        let list: Vec<HabitEntry> = (0..5).map(|i| entry(today - Duration::days(i * 3))).collect();
        let grid = activity_grid(today, &list);
        assert_eq!(grid.len(), 95);
        assert_eq!(grid.iter().filter(|cell| cell.present).count(), 5);
    }

    #[test]
    fn cells_are_ordered_and_unique() {
        let today = day(2024, 3, 1);
        let grid = activity_grid(today, &[entry(day(2024, 2, 29))]);
        assert!(grid.windows(2).all(|pair| pair[1].date == pair[0].date + Duration::days(1)));

        let present: Vec<NaiveDate> = grid.iter().filter(|c| c.present).map(|c| c.date).collect();
        assert_eq!(present, vec![day(2024, 2, 29)]);
    }

    #[test]
    fn entries_outside_the_window_are_not_drawn() {
        let today = day(2024, 3, 31);
        let list = [entry(today + Duration::days(1)), entry(today - Duration::days(400))];
        let grid = activity_grid(today, &list);
        assert_eq!(grid.len(), 92);
        assert!(grid.iter().all(|cell| !cell.present));
    }

    #[test]
    fn old_entries_fit_once_enough_are_logged() {
        let today = day(2024, 3, 31);
        let list: Vec<HabitEntry> = (0..120).map(|i| entry(today - Duration::days(i))).collect();
        let grid = activity_grid(today, &list);
        assert_eq!(grid.len(), 210);
        assert_eq!(grid.iter().filter(|cell| cell.present).count(), 120);
    }
}
