use crate::errors::AppError;
use crate::models::{CardView, CreateHabitRequest, LogEntryRequest, ReadyResponse};
use crate::state::AppState;
use crate::store::{CreateOutcome, LogOutcome};
use crate::ui::{render_card, render_loading};
use crate::view::build_view;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
    Form, Json,
};
use chrono::{Local, NaiveDateTime};
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, info};
use uuid::Uuid;

/// Longest a readiness probe may ask to wait.
const MAX_READY_WAIT_MS: u64 = 5_000;

#[derive(Debug, Deserialize)]
pub struct ReadyQuery {
    pub wait_ms: Option<u64>,
}

pub async fn index(State(state): State<AppState>) -> Response {
    if !state.readiness.is_ready() {
        return Html(render_loading()).into_response();
    }

    let id = state.sessions.lock().await.open();
    Redirect::to(&card_path(id)).into_response()
}

pub async fn card_page(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Html<String>, AppError> {
    if !state.readiness.is_ready() {
        return Ok(Html(render_loading()));
    }

    let view = read_view(&state, id).await?;
    Ok(Html(render_card(&view)))
}

pub async fn create_habit_form(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Form(payload): Form<CreateHabitRequest>,
) -> Result<Redirect, AppError> {
    apply_create(&state, id, &payload.name).await?;
    Ok(Redirect::to(&card_path(id)))
}

pub async fn log_entry_form(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Form(payload): Form<LogEntryRequest>,
) -> Result<Redirect, AppError> {
    apply_log(&state, id, &payload.date).await?;
    Ok(Redirect::to(&card_path(id)))
}

pub async fn get_ready(
    State(state): State<AppState>,
    Query(query): Query<ReadyQuery>,
) -> (StatusCode, Json<ReadyResponse>) {
    if let Some(wait_ms) = query.wait_ms {
        let wait = Duration::from_millis(wait_ms.min(MAX_READY_WAIT_MS));
        let _ = tokio::time::timeout(wait, state.readiness.wait_ready()).await;
    }

    let ready = state.readiness.is_ready();
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };
    (status, Json(ReadyResponse { ready }))
}

pub async fn open_session(
    State(state): State<AppState>,
) -> Result<(StatusCode, Json<CardView>), AppError> {
    ensure_ready(&state)?;
    let now = local_now();
    let mut sessions = state.sessions.lock().await;
    let id = sessions.open();
    let store = sessions.get(&id).ok_or_else(|| session_not_found(id))?;
    Ok((StatusCode::CREATED, Json(build_view(id, store, now))))
}

pub async fn get_session(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<CardView>, AppError> {
    Ok(Json(read_view(&state, id).await?))
}

pub async fn close_session(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    ensure_ready(&state)?;
    if state.sessions.lock().await.close(&id) {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(session_not_found(id))
    }
}

pub async fn create_habit(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<CreateHabitRequest>,
) -> Result<Json<CardView>, AppError> {
    Ok(Json(apply_create(&state, id, &payload.name).await?))
}

pub async fn log_entry(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<LogEntryRequest>,
) -> Result<Json<CardView>, AppError> {
    Ok(Json(apply_log(&state, id, &payload.date).await?))
}

async fn read_view(state: &AppState, id: Uuid) -> Result<CardView, AppError> {
    ensure_ready(state)?;
    let now = local_now();
    let mut sessions = state.sessions.lock().await;
    let store = sessions.get(&id).ok_or_else(|| session_not_found(id))?;
    Ok(build_view(id, store, now))
}

async fn apply_create(state: &AppState, id: Uuid, name: &str) -> Result<CardView, AppError> {
    ensure_ready(state)?;
    let now = local_now();
    let mut sessions = state.sessions.lock().await;
    let store = sessions.get_mut(&id).ok_or_else(|| session_not_found(id))?;

    match store.create(name)? {
        CreateOutcome::Created => info!(session = %id, habit = name.trim(), "habit created"),
        CreateOutcome::AlreadyExists => debug!(session = %id, "habit already exists, create ignored"),
    }

    Ok(build_view(id, store, now))
}

async fn apply_log(state: &AppState, id: Uuid, date: &str) -> Result<CardView, AppError> {
    ensure_ready(state)?;
    let now = local_now();
    let mut sessions = state.sessions.lock().await;
    let store = sessions.get_mut(&id).ok_or_else(|| session_not_found(id))?;

    match store.log_entry(date)? {
        LogOutcome::Added => info!(session = %id, date, "entry logged"),
        LogOutcome::Replaced => debug!(session = %id, date, "entry replaced"),
    }

    Ok(build_view(id, store, now))
}

fn ensure_ready(state: &AppState) -> Result<(), AppError> {
    if state.readiness.is_ready() {
        Ok(())
    } else {
        Err(AppError::unavailable("host is still loading"))
    }
}

fn session_not_found(id: Uuid) -> AppError {
    AppError::not_found(format!("session {id} not found"))
}

fn card_path(id: Uuid) -> String {
    format!("/s/{id}")
}

fn local_now() -> NaiveDateTime {
    Local::now().naive_local()
}
