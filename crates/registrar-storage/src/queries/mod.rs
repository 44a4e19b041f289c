//! SQL for each record family. Functions take a plain `&Connection` so they
//! compose inside a caller's transaction.

pub mod course_ops;
pub mod registration_ops;
pub mod student_ops;

use rusqlite::{Connection, Transaction, TransactionBehavior};

use registrar_core::errors::RegistrarResult;

use crate::to_storage_err;

/// Run `f` inside a `BEGIN IMMEDIATE` transaction: the write lock is taken
/// up front, so the reads `f` makes cannot go stale before its writes land.
pub(crate) fn with_immediate_tx<F, T>(conn: &Connection, label: &str, f: F) -> RegistrarResult<T>
where
    F: FnOnce(&Connection) -> RegistrarResult<T>,
{
    let tx = Transaction::new_unchecked(conn, TransactionBehavior::Immediate)
        .map_err(|e| to_storage_err(format!("{label} begin: {e}")))?;

    match f(&tx) {
        Ok(value) => {
            tx.commit()
                .map_err(|e| to_storage_err(format!("{label} commit: {e}")))?;
            Ok(value)
        }
        Err(e) => {
            let _ = tx.rollback();
            Err(e)
        }
    }
}
