use axum::http::StatusCode;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HabitError {
    #[error("habit name must not be blank")]
    InvalidHabitName,
    #[error("date must be a calendar day in YYYY-MM-DD form, got {0:?}")]
    InvalidDateInput(String),
    #[error("create a habit before logging entries")]
    NoActiveHabit,
    #[error("habit already holds the maximum of {0} logged days")]
    EntryLimitReached(usize),
}

#[derive(Debug)]
pub struct AppError {
    pub status: StatusCode,
    pub message: String,
}

impl AppError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            message: message.into(),
        }
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::CONFLICT,
            message: message.into(),
        }
    }

    pub fn unavailable(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::SERVICE_UNAVAILABLE,
            message: message.into(),
        }
    }
}

impl From<HabitError> for AppError {
    fn from(err: HabitError) -> Self {
        match err {
            HabitError::InvalidHabitName | HabitError::InvalidDateInput(_) => {
                Self::bad_request(err.to_string())
            }
            HabitError::NoActiveHabit | HabitError::EntryLimitReached(_) => {
                Self::conflict(err.to_string())
            }
        }
    }
}

impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        (self.status, self.message).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn habit_errors_map_to_client_statuses() {
        let err = AppError::from(HabitError::InvalidDateInput("2024-13-01".into()));
        assert_eq!(err.status, StatusCode::BAD_REQUEST);
        assert!(err.message.contains("2024-13-01"));

        assert_eq!(
            AppError::from(HabitError::InvalidHabitName).status,
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::from(HabitError::NoActiveHabit).status,
            StatusCode::CONFLICT
        );
        assert_eq!(
            AppError::from(HabitError::EntryLimitReached(3660)).status,
            StatusCode::CONFLICT
        );
    }
}
