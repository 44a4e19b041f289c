use crate::constants::DEFAULT_CREDIT_LIMIT;

/// Maximum credit units per semester.
pub const CREDIT_LIMITS: [(u8, u32); 8] = [
    (1, 20),
    (2, 20),
    (3, 22),
    (4, 22),
    (5, 24),
    (6, 24),
    (7, 18),
    (8, 18),
];

/// Credit cap for `semester`; semesters outside the table get the default.
pub fn credit_limit_for(semester: i64) -> u32 {
    CREDIT_LIMITS
        .iter()
        .find(|(s, _)| i64::from(*s) == semester)
        .map(|(_, limit)| *limit)
        .unwrap_or(DEFAULT_CREDIT_LIMIT)
}

/// Same as [`credit_limit_for`] for loosely typed input. Non-integral and
/// non-finite values fall back to the default.
pub fn credit_limit_for_number(semester: f64) -> u32 {
    if !semester.is_finite() || semester.fract() != 0.0 {
        return DEFAULT_CREDIT_LIMIT;
    }
    credit_limit_for(semester as i64)
}
