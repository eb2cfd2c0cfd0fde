use crate::grid::activity_grid;
use crate::models::CardView;
use crate::store::HabitStore;
use crate::streak::weekly_streak;
use chrono::NaiveDateTime;
use uuid::Uuid;

/// Snapshots a session for rendering. Streak and grid are recomputed on every
/// call rather than cached alongside the entries.
pub fn build_view(session_id: Uuid, store: &HabitStore, now: NaiveDateTime) -> CardView {
    let entries = store.entries().to_vec();
    CardView {
        session_id,
        state: store.state(),
        habit: store.habit().map(str::to_string),
        weekly_streak: weekly_streak(now, &entries),
        grid: activity_grid(now.date(), &entries),
        entries,
    }
}
