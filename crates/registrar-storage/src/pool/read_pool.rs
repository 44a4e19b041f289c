//! Read-only connections for file-backed databases. WAL lets them run
//! alongside the writer.

use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use rusqlite::{Connection, OpenFlags};

use registrar_core::errors::RegistrarResult;

use super::pragmas::apply_read_pragmas;
use crate::to_storage_err;

/// Upper bound on `storage.read_pool_size`.
pub const MAX_READERS: usize = 8;

pub struct ReadPool {
    readers: Vec<Mutex<Connection>>,
    cursor: AtomicUsize,
}

impl ReadPool {
    /// Open `size` readers on `path`, clamped to `1..=MAX_READERS`.
    pub fn open(path: &Path, size: usize, busy_timeout_ms: u32) -> RegistrarResult<Self> {
        let flags = OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX;
        let readers = (0..size.clamp(1, MAX_READERS))
            .map(|_| {
                let conn = Connection::open_with_flags(path, flags)
                    .map_err(|e| to_storage_err(e.to_string()))?;
                apply_read_pragmas(&conn, busy_timeout_ms)?;
                Ok(Mutex::new(conn))
            })
            .collect::<RegistrarResult<Vec<_>>>()?;
        Ok(Self {
            readers,
            cursor: AtomicUsize::new(0),
        })
    }

    /// Run `f` on the next reader in rotation.
    pub fn with_conn<F, T>(&self, f: F) -> RegistrarResult<T>
    where
        F: FnOnce(&Connection) -> RegistrarResult<T>,
    {
        let slot = self.cursor.fetch_add(1, Ordering::Relaxed) % self.readers.len();
        let conn = self.readers[slot]
            .lock()
            .map_err(|e| to_storage_err(format!("reader {slot} lock poisoned: {e}")))?;
        f(&conn)
    }

    pub fn len(&self) -> usize {
        self.readers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.readers.is_empty()
    }
}
