//! Structured log events for key system operations.
//!
//! Each function emits a `tracing` event with structured fields.

/// Log a catalog seed.
pub fn catalog_seeded(inserted: usize) {
    tracing::info!(event = "catalog_seeded", inserted = inserted, "course catalog seeded");
}

/// Log a seed request against a non-empty catalog.
pub fn catalog_already_seeded(existing: usize) {
    tracing::debug!(
        event = "catalog_already_seeded",
        existing = existing,
        "course catalog already initialized"
    );
}

/// Log a new student account.
pub fn student_signed_up(student_id: &str, semester: u8) {
    tracing::info!(
        event = "student_signed_up",
        student_id = %student_id,
        semester = semester,
        "student signed up"
    );
}

/// Log a successful login.
pub fn student_logged_in(student_id: &str) {
    tracing::info!(event = "student_logged_in", student_id = %student_id, "student logged in");
}

/// Log a failed login. The email is not recorded.
pub fn login_failed(reason: &str) {
    tracing::warn!(event = "login_failed", reason = %reason, "login failed");
}

/// Log an accepted registration.
pub fn course_registered(student_id: &str, course_code: &str, new_total: u32, limit: u32) {
    tracing::info!(
        event = "course_registered",
        student_id = %student_id,
        course_code = %course_code,
        new_total = new_total,
        limit = limit,
        "course registered"
    );
}

/// Log a rejected registration or semester change.
pub fn registration_rejected(student_id: &str, target: &str, reason: &str) {
    tracing::info!(
        event = "registration_rejected",
        student_id = %student_id,
        target = %target,
        reason = %reason,
        "registration rejected"
    );
}

/// Log an unregistration.
pub fn course_unregistered(student_id: &str, course_id: &str, remaining: usize) {
    tracing::info!(
        event = "course_unregistered",
        student_id = %student_id,
        course_id = %course_id,
        remaining = remaining,
        "course unregistered"
    );
}

/// Log a semester change. Over-limit outcomes are warnings.
pub fn semester_changed(student_id: &str, from: u8, to: u8, remaining_credits: i64) {
    if remaining_credits < 0 {
        tracing::warn!(
            event = "semester_changed",
            student_id = %student_id,
            from = from,
            to = to,
            remaining_credits = remaining_credits,
            "semester changed; student is over the new credit limit"
        );
    } else {
        tracing::info!(
            event = "semester_changed",
            student_id = %student_id,
            from = from,
            to = to,
            remaining_credits = remaining_credits,
            "semester changed"
        );
    }
}

/// Log a backing-store or runtime failure surfaced to a client.
pub fn request_failed(operation: &str, error: &dyn std::error::Error) {
    tracing::error!(
        event = "request_failed",
        operation = %operation,
        error = %error,
        "request failed"
    );
}

/// Log a session sweep that removed something.
pub fn sessions_expired(removed: usize) {
    tracing::debug!(event = "sessions_expired", removed = removed, "expired sessions removed");
}
