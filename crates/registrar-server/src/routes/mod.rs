//! Route table.

mod account;
mod catalog;
mod courses;
mod enrollment;

use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::Router;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

pub use enrollment::{parse_semester, SemesterValue};

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(account::index))
        .route("/login", get(account::login_page).post(account::login))
        .route("/register", get(account::register_page).post(account::register))
        .route("/logout", get(account::logout))
        .route("/courses", get(courses::courses_page))
        .route("/register-course/{course_id}", post(enrollment::register_course))
        .route("/unregister-course/{course_id}", post(enrollment::unregister_course))
        .route("/update-semester", post(enrollment::update_semester))
        .route("/init-courses", get(catalog::init_courses))
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn not_found() -> (StatusCode, &'static str) {
    (StatusCode::NOT_FOUND, "Page not found")
}
