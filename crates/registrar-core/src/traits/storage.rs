use crate::errors::RegistrarResult;
use crate::models::{
    Course, CourseId, NewCourse, NewStudent, RegistrationReceipt, SeedOutcome, SemesterChange,
    Student, StudentCredentials, StudentId,
};
use crate::policy::EnrollmentPolicy;

/// Courses + students + registration set mutations.
///
/// Implementations must apply each registration-set or semester mutation
/// atomically per student: the policy decision and the write happen against
/// the same snapshot.
pub trait IRegistryStorage: Send + Sync {
    // --- Courses ---
    fn count_courses(&self) -> RegistrarResult<usize>;
    /// Insert `catalog` only if no course exists yet.
    fn seed_courses(&self, catalog: &[NewCourse]) -> RegistrarResult<SeedOutcome>;
    fn get_course(&self, id: &CourseId) -> RegistrarResult<Option<Course>>;
    /// All courses, credits descending then code ascending.
    fn list_courses(&self) -> RegistrarResult<Vec<Course>>;

    // --- Students ---
    /// Fail with `EmailInUse` / `StudentNumberInUse` before any expensive
    /// sign-up work. `create_student` re-checks atomically.
    fn ensure_identity_available(&self, email: &str, student_number: &str) -> RegistrarResult<()>;
    fn create_student(&self, student: &NewStudent) -> RegistrarResult<Student>;
    fn get_student(&self, id: &StudentId) -> RegistrarResult<Option<Student>>;
    fn find_credentials(&self, email: &str) -> RegistrarResult<Option<StudentCredentials>>;
    fn list_students(&self) -> RegistrarResult<Vec<Student>>;

    // --- Registrations ---
    /// Registered courses in registration order.
    fn registered_courses(&self, student_id: &StudentId) -> RegistrarResult<Vec<Course>>;
    fn register_course(
        &self,
        student_id: &StudentId,
        course_id: &CourseId,
        policy: &EnrollmentPolicy,
    ) -> RegistrarResult<RegistrationReceipt>;
    /// Idempotent; returns the remaining registration set.
    fn unregister_course(
        &self,
        student_id: &StudentId,
        course_id: &CourseId,
    ) -> RegistrarResult<Vec<CourseId>>;
    fn update_semester(
        &self,
        student_id: &StudentId,
        semester: i64,
        policy: &EnrollmentPolicy,
    ) -> RegistrarResult<SemesterChange>;
}
