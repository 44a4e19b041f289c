/// Registrar version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Lowest valid semester number.
pub const MIN_SEMESTER: u8 = 1;

/// Highest valid semester number.
pub const MAX_SEMESTER: u8 = 8;

/// Credit cap applied to any semester missing from the limit table.
pub const DEFAULT_CREDIT_LIMIT: u32 = 20;

/// Number of courses installed by the seed catalog.
pub const SEED_CATALOG_SIZE: usize = 15;

/// Smallest bcrypt cost the hashing backend accepts.
pub const MIN_BCRYPT_COST: u32 = 4;

/// Largest bcrypt cost the hashing backend accepts.
pub const MAX_BCRYPT_COST: u32 = 31;
