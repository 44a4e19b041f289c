//! The credit-limit enrollment policy.
//!
//! Pure functions over snapshots supplied by the caller. Nothing here does
//! I/O or holds state, so every operation is safe to call concurrently.

mod credit_limits;
mod enrollment;

pub use credit_limits::{credit_limit_for, credit_limit_for_number, CREDIT_LIMITS};
pub use enrollment::{
    can_register, change_semester, credit_summary, total_credits, unregister, EnrollmentPolicy,
};
