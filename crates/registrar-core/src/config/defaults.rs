// Single source of truth for all default values.

// --- Server ---
pub const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 3000;

// --- Storage ---
pub const DEFAULT_DB_FILENAME: &str = "registrar.db";
pub const DEFAULT_READ_POOL_SIZE: usize = 4;
pub const DEFAULT_BUSY_TIMEOUT_MS: u32 = 5_000;

// --- Session ---
pub const DEFAULT_SESSION_MAX_AGE_SECS: u64 = 86_400; // 24 hours
pub const DEFAULT_SESSION_INACTIVITY_TIMEOUT_SECS: u64 = 86_400;
pub const DEFAULT_SESSION_CLEANUP_INTERVAL_SECS: u64 = 300; // 5 minutes
pub const DEFAULT_SESSION_COOKIE_NAME: &str = "registrar_sid";

// --- Auth ---
pub const DEFAULT_BCRYPT_COST: u32 = 10;

// --- Enrollment ---
pub const DEFAULT_REVALIDATE_ON_SEMESTER_CHANGE: bool = false;

// --- Observability ---
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_JSON_LOGS: bool = false;
