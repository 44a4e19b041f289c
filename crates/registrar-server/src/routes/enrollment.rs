//! JSON endpoints behind the course page's buttons.

use axum::extract::{FromRequest, Path, Request, State};
use axum::http::header::CONTENT_TYPE;
use axum::{Form, Json};
use serde::{Deserialize, Serialize};

use registrar_core::errors::{EnrollmentError, RegistrarError};
use registrar_core::models::{CourseId, Semester, SemesterChange};
use registrar_observability::events;

use crate::auth::AuthContext;
use crate::error::ApiError;
use crate::response::ApiResponse;
use crate::state::AppState;

fn log_rejection(auth: &AuthContext, target: &str, err: &RegistrarError) {
    if let RegistrarError::EnrollmentError(rejection) = err {
        events::registration_rejected(auth.student_id.as_str(), target, &rejection.to_string());
    }
}

pub async fn register_course(
    State(state): State<AppState>,
    auth: AuthContext,
    Path(raw_id): Path<String>,
) -> Result<ApiResponse, ApiError> {
    let course_id = CourseId::parse(&raw_id)?;
    let student_id = auth.student_id.clone();
    let policy = state.policy;

    let receipt = state
        .with_storage(move |s| s.register_course(&student_id, &course_id, &policy))
        .await
        .inspect_err(|err| log_rejection(&auth, &raw_id, err))?;

    events::course_registered(
        auth.student_id.as_str(),
        &receipt.course.code,
        receipt.check.new_total,
        receipt.check.limit,
    );
    Ok(ApiResponse::ok("Course registered successfully"))
}

pub async fn unregister_course(
    State(state): State<AppState>,
    auth: AuthContext,
    Path(raw_id): Path<String>,
) -> Result<ApiResponse, ApiError> {
    let course_id = CourseId::parse(&raw_id)?;
    let student_id = auth.student_id.clone();

    let remaining = state
        .with_storage(move |s| s.unregister_course(&student_id, &course_id))
        .await?;

    events::course_unregistered(auth.student_id.as_str(), &raw_id, remaining.len());
    Ok(ApiResponse::ok("Course unregistered successfully"))
}

/// A semester as clients send it: a JSON number or a numeric string.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum SemesterValue {
    Int(i64),
    Float(f64),
    Text(String),
}

/// Validate a submitted semester. Fractions and out-of-range values are rejected.
pub fn parse_semester(value: Option<&SemesterValue>) -> Result<Semester, EnrollmentError> {
    let invalid = |raw: String| EnrollmentError::InvalidSemester { value: raw };
    let number = match value {
        None => return Err(invalid("<missing>".to_string())),
        Some(SemesterValue::Int(n)) => *n,
        Some(SemesterValue::Float(f)) => integral(*f).ok_or_else(|| invalid(f.to_string()))?,
        Some(SemesterValue::Text(s)) => {
            let trimmed = s.trim();
            trimmed
                .parse::<i64>()
                .ok()
                .or_else(|| trimmed.parse::<f64>().ok().and_then(integral))
                .ok_or_else(|| invalid(s.clone()))?
        }
    };
    Semester::new(number).ok_or_else(|| invalid(number.to_string()))
}

fn integral(f: f64) -> Option<i64> {
    (f.is_finite() && f.fract() == 0.0 && f.abs() <= i64::MAX as f64).then_some(f as i64)
}

#[derive(Debug, Deserialize)]
struct SemesterBody {
    #[serde(default)]
    semester: Option<SemesterValue>,
}

/// `{semester}` from either a JSON or a url-encoded body.
pub struct SemesterPayload(pub Option<SemesterValue>);

impl<S: Send + Sync> FromRequest<S> for SemesterPayload {
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let is_json = req
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .is_some_and(|ct| ct.starts_with("application/json"));

        let body = if is_json {
            Json::<SemesterBody>::from_request(req, state)
                .await
                .map(|Json(body)| body)
                .map_err(|rejection| unreadable(rejection.body_text()))?
        } else {
            Form::<SemesterBody>::from_request(req, state)
                .await
                .map(|Form(body)| body)
                .map_err(|rejection| unreadable(rejection.body_text()))?
        };
        Ok(Self(body.semester))
    }
}

fn unreadable(detail: String) -> ApiError {
    EnrollmentError::InvalidSemester { value: detail }.into()
}

/// `data` payload of a successful semester change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SemesterData {
    pub semester: u8,
    pub credit_limit: u32,
    pub total_credits: u32,
    pub remaining_credits: i64,
}

impl From<SemesterChange> for SemesterData {
    fn from(change: SemesterChange) -> Self {
        Self {
            semester: change.semester.value(),
            credit_limit: change.credit_limit,
            total_credits: change.total_credits,
            remaining_credits: change.remaining_credits,
        }
    }
}

pub async fn update_semester(
    State(state): State<AppState>,
    auth: AuthContext,
    SemesterPayload(value): SemesterPayload,
) -> Result<ApiResponse<SemesterData>, ApiError> {
    let semester = parse_semester(value.as_ref())
        .map_err(RegistrarError::from)
        .inspect_err(|err| log_rejection(&auth, "semester", err))?;
    let student_id = auth.student_id.clone();
    let policy = state.policy;

    let change = state
        .with_storage(move |s| s.update_semester(&student_id, i64::from(semester.value()), &policy))
        .await
        .inspect_err(|err| log_rejection(&auth, "semester", err))?;

    state.sessions.set_semester(&auth.token, change.semester);
    events::semester_changed(
        auth.student_id.as_str(),
        change.previous.value(),
        change.semester.value(),
        change.remaining_credits,
    );
    Ok(ApiResponse::with_data(
        format!("Semester updated from {} to {}", change.previous, change.semester),
        SemesterData::from(change),
    ))
}
