use crate::handlers;
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route(
            "/api/entries",
            get(handlers::list_entries).post(handlers::create_entry),
        )
        .route("/api/stats", get(handlers::get_stats))
        .route("/api/reset", post(handlers::reset))
        .route("/export/csv", get(handlers::export_csv))
        .with_state(state)
}
