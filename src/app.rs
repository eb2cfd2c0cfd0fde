use crate::handlers;
use crate::state::AppState;
use axum::{routing::{get, post}, Router};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/s/:id", get(handlers::card_page))
        .route("/s/:id/habit", post(handlers::create_habit_form))
        .route("/s/:id/log", post(handlers::log_entry_form))
        .route("/api/ready", get(handlers::get_ready))
        .route("/api/sessions", post(handlers::open_session))
        .route(
            "/api/sessions/:id",
            get(handlers::get_session).delete(handlers::close_session),
        )
        .route("/api/sessions/:id/habit", post(handlers::create_habit))
        .route("/api/sessions/:id/entries", post(handlers::log_entry))
        .with_state(state)
}
