//! StorageEngine: owns ConnectionPool, implements IRegistryStorage,
//! runs migrations on open.

use std::path::Path;

use rusqlite::Connection;

use registrar_core::config::StorageConfig;
use registrar_core::errors::RegistrarResult;
use registrar_core::models::{
    Course, CourseId, NewCourse, NewStudent, RegistrationReceipt, SeedOutcome, SemesterChange,
    Student, StudentCredentials, StudentId,
};
use registrar_core::policy::EnrollmentPolicy;
use registrar_core::traits::IRegistryStorage;

use crate::migrations;
use crate::pool::ConnectionPool;
use crate::queries::{course_ops, registration_ops, student_ops, with_immediate_tx};

/// The main storage engine. Owns the connection pool and provides the full
/// IRegistryStorage interface.
pub struct StorageEngine {
    pool: ConnectionPool,
}

impl StorageEngine {
    /// Open a storage engine backed by a file on disk.
    pub fn open(path: &Path) -> RegistrarResult<Self> {
        Self::open_with_config(&StorageConfig {
            db_path: path.to_string_lossy().into_owned(),
            ..StorageConfig::default()
        })
    }

    /// Open according to `config`. `:memory:` selects in-memory mode.
    pub fn open_with_config(config: &StorageConfig) -> RegistrarResult<Self> {
        if config.is_in_memory() {
            return Self::open_in_memory();
        }
        let pool = ConnectionPool::open(
            Path::new(&config.db_path),
            config.read_pool_size,
            config.busy_timeout_ms,
        )?;
        let engine = Self { pool };
        engine.initialize()?;
        Ok(engine)
    }

    /// Open an in-memory storage engine (for testing).
    pub fn open_in_memory() -> RegistrarResult<Self> {
        let engine = Self {
            pool: ConnectionPool::open_in_memory()?,
        };
        engine.initialize()?;
        Ok(engine)
    }

    /// Run migrations.
    fn initialize(&self) -> RegistrarResult<()> {
        let version = self.pool.writer.with_conn(migrations::run_migrations)?;
        tracing::debug!(
            schema_version = version,
            db_path = ?self.pool.db_path,
            "storage initialized"
        );
        Ok(())
    }

    /// Get a reference to the connection pool (for advanced operations).
    pub fn pool(&self) -> &ConnectionPool {
        &self.pool
    }

    /// Current schema version.
    pub fn schema_version(&self) -> RegistrarResult<u32> {
        self.pool.writer.with_conn(migrations::current_version)
    }

    /// Run a read-only query on a reader, or on the writer when there is no read pool.
    fn with_reader<F, T>(&self, f: F) -> RegistrarResult<T>
    where
        F: FnOnce(&Connection) -> RegistrarResult<T>,
    {
        match &self.pool.readers {
            Some(readers) => readers.with_conn(f),
            None => self.pool.writer.with_conn(f),
        }
    }
}

impl IRegistryStorage for StorageEngine {
    fn count_courses(&self) -> RegistrarResult<usize> {
        self.with_reader(course_ops::count_courses)
    }

    fn seed_courses(&self, catalog: &[NewCourse]) -> RegistrarResult<SeedOutcome> {
        self.pool.writer.with_conn(|conn| {
            with_immediate_tx(conn, "seed_courses", |conn| {
                course_ops::seed_courses(conn, catalog)
            })
        })
    }

    fn get_course(&self, id: &CourseId) -> RegistrarResult<Option<Course>> {
        self.with_reader(|conn| course_ops::get_course(conn, id))
    }

    fn list_courses(&self) -> RegistrarResult<Vec<Course>> {
        self.with_reader(course_ops::list_courses)
    }

    fn ensure_identity_available(&self, email: &str, student_number: &str) -> RegistrarResult<()> {
        self.with_reader(|conn| student_ops::ensure_identity_available(conn, email, student_number))
    }

    fn create_student(&self, student: &NewStudent) -> RegistrarResult<Student> {
        self.pool.writer.with_conn(|conn| {
            with_immediate_tx(conn, "create_student", |conn| {
                student_ops::insert_student(conn, student)
            })
        })
    }

    fn get_student(&self, id: &StudentId) -> RegistrarResult<Option<Student>> {
        self.with_reader(|conn| student_ops::get_student(conn, id))
    }

    fn find_credentials(&self, email: &str) -> RegistrarResult<Option<StudentCredentials>> {
        self.with_reader(|conn| student_ops::find_credentials(conn, email))
    }

    fn list_students(&self) -> RegistrarResult<Vec<Student>> {
        self.with_reader(student_ops::list_students)
    }

    fn registered_courses(&self, student_id: &StudentId) -> RegistrarResult<Vec<Course>> {
        self.with_reader(|conn| registration_ops::registered_courses(conn, student_id))
    }

    fn register_course(
        &self,
        student_id: &StudentId,
        course_id: &CourseId,
        policy: &EnrollmentPolicy,
    ) -> RegistrarResult<RegistrationReceipt> {
        self.pool.writer.with_conn(|conn| {
            registration_ops::register_course(conn, student_id, course_id, policy)
        })
    }

    fn unregister_course(
        &self,
        student_id: &StudentId,
        course_id: &CourseId,
    ) -> RegistrarResult<Vec<CourseId>> {
        self.pool
            .writer
            .with_conn(|conn| registration_ops::unregister_course(conn, student_id, course_id))
    }

    fn update_semester(
        &self,
        student_id: &StudentId,
        semester: i64,
        policy: &EnrollmentPolicy,
    ) -> RegistrarResult<SemesterChange> {
        self.pool.writer.with_conn(|conn| {
            registration_ops::update_semester(conn, student_id, semester, policy)
        })
    }
}
