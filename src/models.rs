use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HabitEntry {
    pub date: NaiveDate,
    pub completed: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayCell {
    pub date: NaiveDate,
    pub present: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CardState {
    NoHabit,
    Tracking,
}

#[derive(Debug, Deserialize)]
pub struct CreateHabitRequest {
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct LogEntryRequest {
    pub date: String,
}

#[derive(Debug, Serialize)]
pub struct ReadyResponse {
    pub ready: bool,
}

/// Everything the card needs to render one session, with the streak and grid
/// derived at build time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CardView {
    pub session_id: Uuid,
    pub state: CardState,
    pub habit: Option<String>,
    pub entries: Vec<HabitEntry>,
    pub weekly_streak: u32,
    pub grid: Vec<DayCell>,
}
