//! Connection pool managing read/write connections.

pub mod pragmas;
pub mod read_pool;
pub mod write_connection;

use std::path::{Path, PathBuf};
use std::sync::Arc;

use registrar_core::errors::RegistrarResult;

pub use read_pool::ReadPool;
pub use write_connection::WriteConnection;

/// The single write connection plus, for file-backed databases, a read pool.
pub struct ConnectionPool {
    pub writer: Arc<WriteConnection>,
    /// `None` in memory: a second in-memory connection would be a separate database.
    pub readers: Option<Arc<ReadPool>>,
    pub db_path: Option<PathBuf>,
}

impl ConnectionPool {
    /// Open a connection pool for the given database file.
    pub fn open(path: &Path, read_pool_size: usize, busy_timeout_ms: u32) -> RegistrarResult<Self> {
        let writer = Arc::new(WriteConnection::open(path, busy_timeout_ms)?);
        let readers = Some(Arc::new(ReadPool::open(path, read_pool_size, busy_timeout_ms)?));
        Ok(Self {
            writer,
            readers,
            db_path: Some(path.to_path_buf()),
        })
    }

    /// Open an in-memory pool. Every read goes through the writer.
    pub fn open_in_memory() -> RegistrarResult<Self> {
        Ok(Self {
            writer: Arc::new(WriteConnection::open_in_memory()?),
            readers: None,
            db_path: None,
        })
    }
}
