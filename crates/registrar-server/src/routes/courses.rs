use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum_extra::extract::cookie::CookieJar;

use registrar_core::models::{Course, Student};
use registrar_core::policy::credit_summary;
use registrar_observability::events;

use crate::auth::{expired_cookie, AuthContext};
use crate::state::AppState;
use crate::views::{self, CoursesPage};

/// Split the catalog into the student's courses and the rest, keeping catalog order.
pub fn partition_catalog(student: &Student, catalog: Vec<Course>) -> (Vec<Course>, Vec<Course>) {
    catalog.into_iter().partition(|c| student.is_registered(&c.id))
}

pub async fn courses_page(
    State(state): State<AppState>,
    auth: Option<AuthContext>,
    jar: CookieJar,
) -> Response {
    let Some(auth) = auth else {
        return Redirect::to("/login").into_response();
    };

    let student_id = auth.student_id.clone();
    let loaded = state
        .with_storage(move |s| match s.get_student(&student_id)? {
            Some(student) => Ok(Some((student, s.list_courses()?))),
            None => Ok(None),
        })
        .await;

    match loaded {
        Ok(Some((student, catalog))) => {
            let (registered, available) = partition_catalog(&student, catalog);
            let page = CoursesPage {
                user_name: student.name,
                summary: credit_summary(student.semester, &registered),
                registered_courses: registered,
                available_courses: available,
            };
            Html(views::courses::render(&page)).into_response()
        }
        Ok(None) => {
            state.sessions.remove_session(&auth.token);
            (jar.remove(expired_cookie(&state)), Redirect::to("/login")).into_response()
        }
        Err(err) => {
            events::request_failed("courses", &err);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "An error occurred while loading courses.",
            )
                .into_response()
        }
    }
}
