pub mod health;

use axum::{
    routing::{get, post, put},
    Router,
};

use crate::resume::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Resume lifecycle
        .route("/api/v1/resume/fetch", post(handlers::handle_fetch))
        .route(
            "/api/v1/resume",
            get(handlers::handle_get_resume).put(handlers::handle_put_resume),
        )
        .route("/api/v1/resume/edits", post(handlers::handle_edits))
        // Rendering and export
        .route("/api/v1/resume/render", get(handlers::handle_render))
        .route("/api/v1/resume/export", post(handlers::handle_export))
        .route("/api/v1/resume/stats", get(handlers::handle_stats))
        // Projects
        .route(
            "/api/v1/resume/projects",
            post(handlers::handle_add_project),
        )
        .route(
            "/api/v1/resume/projects/:id",
            put(handlers::handle_update_project).delete(handlers::handle_delete_project),
        )
        .route(
            "/api/v1/resume/projects/describe",
            post(handlers::handle_describe_project),
        )
        .with_state(state)
}
