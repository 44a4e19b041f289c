use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use registrar_core::catalog::seed_catalog;
use registrar_core::models::SeedOutcome;
use registrar_observability::events;

use crate::state::AppState;

/// Seed the catalog once; later calls are no-ops.
pub async fn init_courses(State(state): State<AppState>) -> Response {
    match state.with_storage(|s| s.seed_courses(&seed_catalog())).await {
        Ok(SeedOutcome::AlreadySeeded { existing }) => {
            events::catalog_already_seeded(existing);
            "Courses already initialized.".into_response()
        }
        Ok(SeedOutcome::Seeded { inserted }) => {
            events::catalog_seeded(inserted);
            "Courses initialized successfully.".into_response()
        }
        Err(err) => {
            events::request_failed("init_courses", &err);
            (StatusCode::INTERNAL_SERVER_ERROR, "Failed to initialize courses.").into_response()
        }
    }
}
