use axum::{
    extract::{Path, State},
    http::{
        header::{ACCEPT, SET_COOKIE},
        HeaderMap, HeaderValue,
    },
    response::{Html, IntoResponse, Redirect, Response},
    Json,
};
use chrono::Utc;
use uuid::Uuid;

use crate::error::AppError;
use crate::routes::csrf;
use crate::routes::extract::{Submission, SubmissionKind};
use crate::state::AppState;
use super::dto::{CreateTodo, TokenOnly, UpdateTodo};
use super::{grouping, page};

/// Front page: grouped JSON for API clients, HTML with a fresh anti-forgery cookie otherwise.
pub async fn index(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Response, AppError> {
    let todos = state.todos.list().await?;
    let grouped = grouping::group(Utc::now().date_naive(), todos);

    if wants_json(&headers) {
        return Ok(Json(grouped).into_response());
    }

    let (token, fresh) = match csrf::token_from_cookies(&headers) {
        Some(token) => (token, false),
        None => (csrf::generate_token(), true),
    };

    let mut response = Html(page::render(&grouped, &token)?).into_response();
    if fresh {
        if let Ok(cookie) = HeaderValue::from_str(&csrf::set_cookie_value(&token)) {
            response.headers_mut().insert(SET_COOKIE, cookie);
        }
    }

    Ok(response)
}

pub async fn list(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let todos = state.todos.list().await?;
    Ok(Json(todos))
}

pub async fn create(
    State(state): State<AppState>,
    submission: Submission<CreateTodo>,
) -> Result<Response, AppError> {
    let new_todo = submission.body.validate()?;
    let todo = state.todos.create(new_todo).await?;

    tracing::info!(id = %todo.id, due_date = %todo.due_date, "created todo");

    if submission.kind == SubmissionKind::Form {
        return Ok(Redirect::to("/").into_response());
    }

    Ok(Json(todo).into_response())
}

pub async fn mark_completed(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    _submission: Submission<TokenOnly>,
) -> Result<impl IntoResponse, AppError> {
    let todo = state.todos.set_completed(id, true).await?;

    tracing::debug!(%id, "marked todo as completed");

    Ok(Json(todo))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    submission: Submission<UpdateTodo>,
) -> Result<impl IntoResponse, AppError> {
    let completed = submission.body.completed;
    let todo = state.todos.set_completed(id, completed).await?;

    tracing::debug!(%id, completed, "updated todo");

    Ok(Json(todo))
}

pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    _submission: Submission<TokenOnly>,
) -> Result<impl IntoResponse, AppError> {
    let deleted = state.todos.delete(id).await?;

    if deleted {
        tracing::info!(%id, "deleted todo");
    } else {
        tracing::debug!(%id, "delete requested for unknown todo");
    }

    Ok(Json(deleted))
}

fn wants_json(headers: &HeaderMap) -> bool {
    headers
        .get_all(ACCEPT)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .any(|v| v.contains("application/json"))
}
