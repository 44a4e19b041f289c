//! Login, sign-up, and logout pages.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum::Form;
use axum_extra::extract::cookie::CookieJar;
use serde::Deserialize;

use registrar_core::errors::{RegistrarError, RegistrarResult};
use registrar_core::models::{NewStudent, Semester, StudentCredentials};
use registrar_observability::events;

use crate::auth::{expired_cookie, hash_password, session_cookie, verify_password, AuthContext};
use crate::error::GENERIC_FAILURE;
use crate::state::AppState;
use crate::views;
use crate::views::register::RegisterFormValues;

pub async fn index(auth: Option<AuthContext>) -> Redirect {
    match auth {
        Some(_) => Redirect::to("/courses"),
        None => Redirect::to("/login"),
    }
}

pub async fn login_page(auth: Option<AuthContext>) -> Response {
    if auth.is_some() {
        return Redirect::to("/courses").into_response();
    }
    Html(views::login::render(None, "")).into_response()
}

#[derive(Debug, Deserialize)]
pub struct LoginForm {
    #[serde(default)]
    email: String,
    #[serde(default)]
    password: String,
}

async fn authenticate(
    state: &AppState,
    email: String,
    password: String,
) -> RegistrarResult<StudentCredentials> {
    let credentials = state
        .with_storage(move |s| s.find_credentials(&email))
        .await?
        .ok_or_else(|| {
            events::login_failed("unknown email");
            RegistrarError::InvalidCredentials
        })?;

    if verify_password(password, credentials.password_hash.clone()).await? {
        Ok(credentials)
    } else {
        events::login_failed("wrong password");
        Err(RegistrarError::InvalidCredentials)
    }
}

pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    Form(form): Form<LoginForm>,
) -> Response {
    let email = NewStudent::normalize_email(&form.email);
    match authenticate(&state, email, form.password).await {
        Ok(credentials) => {
            let session = state.sessions.create_session(
                credentials.student_id.clone(),
                credentials.name,
                credentials.semester,
            );
            events::student_logged_in(credentials.student_id.as_str());
            (jar.add(session_cookie(&state, session.token)), Redirect::to("/courses")).into_response()
        }
        Err(RegistrarError::InvalidCredentials) => {
            Html(views::login::render(Some("Invalid email or password"), &form.email)).into_response()
        }
        Err(err) => {
            events::request_failed("login", &err);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Html(views::login::render(Some(GENERIC_FAILURE), &form.email)),
            )
                .into_response()
        }
    }
}

pub async fn register_page(auth: Option<AuthContext>) -> Response {
    if auth.is_some() {
        return Redirect::to("/courses").into_response();
    }
    let values = RegisterFormValues {
        semester: Semester::FIRST.value(),
        ..RegisterFormValues::default()
    };
    Html(views::register::render(None, &values)).into_response()
}

#[derive(Debug, Deserialize)]
pub struct RegisterForm {
    #[serde(default)]
    name: String,
    #[serde(default)]
    email: String,
    #[serde(default)]
    password: String,
    #[serde(default, rename = "studentId")]
    student_id: String,
    #[serde(default)]
    semester: String,
}

pub async fn register(
    State(state): State<AppState>,
    jar: CookieJar,
    Form(form): Form<RegisterForm>,
) -> Response {
    let semester = Semester::from_form_input(&form.semester);
    let values = RegisterFormValues {
        name: form.name.trim().to_string(),
        email: form.email.trim().to_string(),
        student_number: form.student_id.trim().to_string(),
        semester: semester.value(),
    };
    let rerender = |status: StatusCode, message: &str| {
        (status, Html(views::register::render(Some(message), &values))).into_response()
    };

    if values.name.is_empty()
        || values.email.is_empty()
        || values.student_number.is_empty()
        || form.password.is_empty()
    {
        return rerender(StatusCode::OK, "All fields are required");
    }

    let email = NewStudent::normalize_email(&values.email);
    let student_number = values.student_number.clone();
    if let Err(err) = state
        .with_storage(move |s| s.ensure_identity_available(&email, &student_number))
        .await
    {
        return match err {
            RegistrarError::EmailInUse { .. } => rerender(StatusCode::OK, "Email already in use"),
            RegistrarError::StudentNumberInUse { .. } => {
                rerender(StatusCode::OK, "Student ID already in use")
            }
            other => {
                events::request_failed("register", &other);
                rerender(StatusCode::INTERNAL_SERVER_ERROR, GENERIC_FAILURE)
            }
        };
    }

    let password_hash = match hash_password(form.password, state.config.auth.bcrypt_cost).await {
        Ok(hash) => hash,
        Err(err) => {
            events::request_failed("register", &err);
            return rerender(StatusCode::INTERNAL_SERVER_ERROR, GENERIC_FAILURE);
        }
    };
    let new_student = NewStudent {
        name: values.name.clone(),
        email: NewStudent::normalize_email(&values.email),
        student_number: values.student_number.clone(),
        password_hash,
        semester,
    };

    match state.with_storage(move |s| s.create_student(&new_student)).await {
        Ok(student) => {
            events::student_signed_up(student.id.as_str(), student.semester.value());
            let session = state
                .sessions
                .create_session(student.id, student.name, student.semester);
            (jar.add(session_cookie(&state, session.token)), Redirect::to("/courses")).into_response()
        }
        Err(RegistrarError::EmailInUse { .. }) => rerender(StatusCode::OK, "Email already in use"),
        Err(RegistrarError::StudentNumberInUse { .. }) => {
            rerender(StatusCode::OK, "Student ID already in use")
        }
        Err(err) => {
            events::request_failed("register", &err);
            rerender(StatusCode::INTERNAL_SERVER_ERROR, GENERIC_FAILURE)
        }
    }
}

pub async fn logout(
    State(state): State<AppState>,
    auth: Option<AuthContext>,
    jar: CookieJar,
) -> (CookieJar, Redirect) {
    if let Some(auth) = auth {
        state.sessions.remove_session(&auth.token);
    }
    (jar.remove(expired_cookie(&state)), Redirect::to("/login"))
}
