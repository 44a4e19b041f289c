//! Shared application state handed to every handler.

use std::sync::Arc;

use registrar_core::errors::{RegistrarError, RegistrarResult};
use registrar_core::policy::EnrollmentPolicy;
use registrar_core::traits::IRegistryStorage;
use registrar_core::RegistrarConfig;
use registrar_session::{SessionLifetime, SessionManager};

/// Cheap to clone; everything inside is shared.
#[derive(Clone)]
pub struct AppState {
    pub storage: Arc<dyn IRegistryStorage>,
    pub sessions: SessionManager,
    pub policy: EnrollmentPolicy,
    pub config: Arc<RegistrarConfig>,
}

impl AppState {
    pub fn new(config: RegistrarConfig, storage: Arc<dyn IRegistryStorage>) -> Self {
        let sessions = SessionManager::with_lifetime(SessionLifetime::from(&config.session));
        Self {
            storage,
            sessions,
            policy: config.enrollment.policy(),
            config: Arc::new(config),
        }
    }

    /// Run blocking storage work off the async executor.
    pub async fn with_storage<F, T>(&self, f: F) -> RegistrarResult<T>
    where
        F: FnOnce(&dyn IRegistryStorage) -> RegistrarResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let storage = Arc::clone(&self.storage);
        tokio::task::spawn_blocking(move || f(storage.as_ref()))
            .await
            .map_err(|e| RegistrarError::Internal(format!("storage task failed: {e}")))?
    }

    pub fn cookie_name(&self) -> &str {
        &self.config.session.cookie_name
    }
}
