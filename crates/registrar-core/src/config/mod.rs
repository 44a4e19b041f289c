//! Layered configuration: defaults, then TOML, then environment overrides.

mod auth_config;
pub mod defaults;
mod enrollment_config;
mod observability_config;
mod server_config;
mod session_config;
mod storage_config;

use std::path::Path;

use serde::{Deserialize, Serialize};

pub use auth_config::AuthConfig;
pub use enrollment_config::EnrollmentConfig;
pub use observability_config::ObservabilityConfig;
pub use server_config::ServerConfig;
pub use session_config::SessionConfig;
pub use storage_config::StorageConfig;

use crate::constants::{MAX_BCRYPT_COST, MIN_BCRYPT_COST};
use crate::errors::{RegistrarError, RegistrarResult};

/// Environment variable overriding `server.port`.
pub const ENV_PORT: &str = "PORT";
/// Environment variable overriding `storage.db_path`.
pub const ENV_DB_PATH: &str = "REGISTRAR_DB_PATH";
/// Environment variable overriding `observability.log_level`.
pub const ENV_LOG_LEVEL: &str = "REGISTRAR_LOG_LEVEL";

/// Top-level configuration aggregating every subsystem section.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RegistrarConfig {
    pub server: ServerConfig,
    pub storage: StorageConfig,
    pub session: SessionConfig,
    pub auth: AuthConfig,
    pub enrollment: EnrollmentConfig,
    pub observability: ObservabilityConfig,
}

impl RegistrarConfig {
    /// Parse from a TOML string. Missing sections and fields take defaults.
    pub fn from_toml(input: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(input)
    }

    /// Read and parse a TOML file.
    pub fn from_file(path: &Path) -> RegistrarResult<Self> {
        let raw = std::fs::read_to_string(path).map_err(|e| {
            RegistrarError::ConfigError(format!("cannot read {}: {e}", path.display()))
        })?;
        let config = Self::from_toml(&raw).map_err(|e| {
            RegistrarError::ConfigError(format!("cannot parse {}: {e}", path.display()))
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Load from an optional file, then apply process environment overrides.
    pub fn load(path: Option<&Path>) -> RegistrarResult<Self> {
        let mut config = match path {
            Some(p) => Self::from_file(p)?,
            None => Self::default(),
        };
        config.apply_env_overrides()?;
        Ok(config)
    }

    /// Apply `PORT`, `REGISTRAR_DB_PATH` and `REGISTRAR_LOG_LEVEL` from the
    /// process environment.
    pub fn apply_env_overrides(&mut self) -> RegistrarResult<()> {
        self.apply_overrides_from(|key| std::env::var(key).ok())
    }

    /// Apply overrides from an arbitrary lookup (the process environment in
    /// production, a map in tests).
    pub fn apply_overrides_from<F>(&mut self, lookup: F) -> RegistrarResult<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(port) = lookup(ENV_PORT) {
            self.server.port = port.trim().parse().map_err(|_| {
                RegistrarError::ConfigError(format!("{ENV_PORT} is not a valid port: {port}"))
            })?;
        }
        if let Some(path) = lookup(ENV_DB_PATH) {
            self.storage.db_path = path;
        }
        if let Some(level) = lookup(ENV_LOG_LEVEL) {
            self.observability.log_level = level;
        }
        self.validate()
    }

    /// Reject values the rest of the system cannot work with.
    pub fn validate(&self) -> RegistrarResult<()> {
        if !(MIN_BCRYPT_COST..=MAX_BCRYPT_COST).contains(&self.auth.bcrypt_cost) {
            return Err(RegistrarError::ConfigError(format!(
                "auth.bcrypt_cost must be within {MIN_BCRYPT_COST}..={MAX_BCRYPT_COST}, got {}",
                self.auth.bcrypt_cost
            )));
        }
        if self.session.max_age_secs == 0 {
            return Err(RegistrarError::ConfigError(
                "session.max_age_secs must be positive".to_string(),
            ));
        }
        if self.session.inactivity_timeout_secs == 0 {
            return Err(RegistrarError::ConfigError(
                "session.inactivity_timeout_secs must be positive".to_string(),
            ));
        }
        if self.session.cookie_name.trim().is_empty() {
            return Err(RegistrarError::ConfigError(
                "session.cookie_name must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}
