use axum::Router;

use crate::state::AppState;

mod dto;
pub mod handlers;
pub mod repo;

pub use dto::{CreateTodoRequest, UpdateTodoRequest};
pub use repo::Todo;

pub fn router() -> Router<AppState> {
    handlers::todo_routes()
}
