use axum::{
    routing::{get, put},
    Router,
};
use tower_http::trace::TraceLayer;

pub mod csrf;
pub mod extract;
mod health;
pub mod todos;


use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    let todo_router = Router::new()
        .route("/", get(todos::routes::list).post(todos::routes::create))
        .route(
            "/{id}",
            put(todos::routes::update).delete(todos::routes::delete),
        )
        .route("/{id}/markASCompleted", put(todos::routes::mark_completed));

    Router::new()
        .route("/", get(todos::routes::index))
        .route("/health", get(health::health))
        .nest("/todos", todo_router)
}

pub fn app(state: AppState) -> Router {
    routes().layer(TraceLayer::new_for_http()).with_state(state)
}
