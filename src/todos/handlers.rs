use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde_json::{json, Value};
use tracing::{info, instrument};

use crate::{
    auth::AuthUser,
    error::ApiError,
    state::AppState,
    todos::{
        dto::{CreateTodoRequest, UpdateTodoRequest},
        repo::Todo,
    },
};

pub fn todo_routes() -> Router<AppState> {
    Router::new()
        .route("/todos", get(list_todos).post(create_todo))
        .route("/todos/:id", axum::routing::put(update_todo).delete(delete_todo))
}

#[instrument(skip(state, user), fields(user_id = %user.id))]
pub async fn list_todos(
    State(state): State<AppState>,
    user: AuthUser,
) -> Result<Json<Vec<Todo>>, ApiError> {
    let todos = Todo::list_by_user(&state.db, user.id)
        .await
        .map_err(ApiError::from)?;
    Ok(Json(todos))
}

#[instrument(skip(state, user, payload), fields(user_id = %user.id))]
pub async fn create_todo(
    State(state): State<AppState>,
    user: AuthUser,
    Json(payload): Json<CreateTodoRequest>,
) -> Result<(StatusCode, Json<Todo>), ApiError> {
    let title = payload.title.trim();
    if title.is_empty() {
        return Err(ApiError::Validation("Title is required".into()));
    }

    let todo = Todo::create(&state.db, user.id, title, payload.description.as_deref())
        .await
        .map_err(ApiError::from)?;

    info!(todo_id = %todo.id, "todo created");
    Ok((StatusCode::CREATED, Json(todo)))
}

#[instrument(skip(state, user, payload), fields(user_id = %user.id))]
pub async fn update_todo(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateTodoRequest>,
) -> Result<Json<Todo>, ApiError> {
    // Missing and not-owned are deliberately the same 404.
    let existing = Todo::find_owned(&state.db, id, user.id)
        .await
        .map_err(ApiError::from)?
        .ok_or_else(|| ApiError::NotFound("Todo not found".into()))?;

    let title = match payload.title {
        Some(t) => {
            let t = t.trim().to_string();
            if t.is_empty() {
                return Err(ApiError::Validation("Title is required".into()));
            }
            t
        }
        None => existing.title,
    };
    let description = payload.description.or(existing.description);
    let completed = payload.completed.unwrap_or(existing.completed);

    let todo = Todo::update(&state.db, id, user.id, &title, description.as_deref(), completed)
        .await
        .map_err(ApiError::from)?;

    info!(todo_id = %todo.id, "todo updated");
    Ok(Json(todo))
}

#[instrument(skip(state, user), fields(user_id = %user.id))]
pub async fn delete_todo(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<i64>,
) -> Result<Json<Value>, ApiError> {
    let deleted = Todo::delete(&state.db, id, user.id)
        .await
        .map_err(ApiError::from)?;
    if deleted == 0 {
        return Err(ApiError::NotFound("Todo not found".into()));
    }

    info!(todo_id = %id, "todo deleted");
    Ok(Json(json!({ "message": "Todo deleted successfully" })))
}
