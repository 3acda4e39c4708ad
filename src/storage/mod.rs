//! Storage Layer - bug report persistence
//!
//! System of record is a single SQLite table:
//! - bugs(id, bug_type, replicate_steps, created_at)
//!
//! When local relational storage is unavailable the store degrades to a
//! no-op implementation that accepts every call and always lists nothing.

pub mod schema;
pub mod sqlite;
pub mod noop;

pub use sqlite::SqliteReportStore;
pub use noop::NoopReportStore;

use crate::Result;
use crate::config::{self, StorageBackend, StorageSettings};
use crate::report::BugReport;

/// The four operations every report store offers.
///
/// Each call is atomic on its own; callers that need "insert then re-list"
/// issue two separate calls.
pub trait ReportStore {
    /// Create the report table if it does not already exist
    fn ensure_schema(&self) -> Result<()>;

    /// Append one report. Rejected with `Error::MissingField` before any write
    /// if `category` or `reproduction_steps` is empty.
    fn insert(&self, category: &str, reproduction_steps: &str, created_at: &str) -> Result<()>;

    /// Every stored report, in storage order. Zero rows is not an error.
    fn list_all(&self) -> Result<Vec<BugReport>>;

    /// Remove a report by id. Unknown ids are a no-op.
    fn delete(&self, id: i64) -> Result<()>;

    /// Whether writes survive the process
    fn is_persistent(&self) -> bool {
        true
    }
}

impl<S: ReportStore + ?Sized> ReportStore for Box<S> {
    fn ensure_schema(&self) -> Result<()> {
        (**self).ensure_schema()
    }

    fn insert(&self, category: &str, reproduction_steps: &str, created_at: &str) -> Result<()> {
        (**self).insert(category, reproduction_steps, created_at)
    }

    fn list_all(&self) -> Result<Vec<BugReport>> {
        (**self).list_all()
    }

    fn delete(&self, id: i64) -> Result<()> {
        (**self).delete(id)
    }

    fn is_persistent(&self) -> bool {
        (**self).is_persistent()
    }
}

impl<S: ReportStore + ?Sized> ReportStore for &S {
    fn ensure_schema(&self) -> Result<()> {
        (**self).ensure_schema()
    }

    fn insert(&self, category: &str, reproduction_steps: &str, created_at: &str) -> Result<()> {
        (**self).insert(category, reproduction_steps, created_at)
    }

    fn list_all(&self) -> Result<Vec<BugReport>> {
        (**self).list_all()
    }

    fn delete(&self, id: i64) -> Result<()> {
        (**self).delete(id)
    }

    fn is_persistent(&self) -> bool {
        (**self).is_persistent()
    }
}

/// Build the configured store, created once at startup and passed explicitly.
///
/// A SQLite store that cannot be opened degrades to `NoopReportStore` instead
/// of failing startup.
pub fn open_store(settings: &StorageSettings) -> Box<dyn ReportStore> {
    match settings.backend {
        StorageBackend::Disabled => {
            tracing::info!("Local storage disabled; reports will not be saved");
            Box::new(NoopReportStore::new())
        }
        StorageBackend::Sqlite => {
            let opened = config::ensure_db_dir(&settings.database)
                .and_then(|_| SqliteReportStore::open(&settings.database));
            match opened {
                Ok(store) => Box::new(store),
                Err(e) => {
                    tracing::warn!(
                        "Local storage unavailable at {} ({}); falling back to a no-op store",
                        settings.database.display(),
                        e
                    );
                    Box::new(NoopReportStore::new())
                }
            }
        }
    }
}
