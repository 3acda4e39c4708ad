//! SQLite storage implementation

use std::path::Path;
use rusqlite::{Connection, params};
use crate::Result;
use crate::report::{self, BugReport};
use super::{schema, ReportStore};

/// SQLite-backed storage for bug reports
pub struct SqliteReportStore {
    conn: Connection,
}

impl SqliteReportStore {
    /// Open a database file (creates the file if it doesn't exist).
    ///
    /// The `bugs` table is not created here; call `ensure_schema` once at startup.
    pub fn open(path: &Path) -> Result<Self> {
        let conn = Connection::open(path)?;
        tracing::debug!("Opened report database at {}", path.display());
        Ok(Self { conn })
    }

    /// Open an in-memory database (for testing)
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        Ok(Self { conn })
    }

    /// Helper to convert a row to a BugReport
    fn row_to_report(row: &rusqlite::Row) -> rusqlite::Result<BugReport> {
        // Older databases declared the text columns nullable
        let category: Option<String> = row.get(1)?;
        let steps: Option<String> = row.get(2)?;
        let created_at: Option<String> = row.get(3)?;

        Ok(BugReport {
            id: row.get(0)?,
            category: category.unwrap_or_default(),
            reproduction_steps: steps.unwrap_or_default(),
            created_at: created_at.unwrap_or_default(),
        })
    }
}

impl ReportStore for SqliteReportStore {
    fn ensure_schema(&self) -> Result<()> {
        for stmt in schema::all_schema_statements() {
            self.conn.execute(stmt, [])?;
        }
        Ok(())
    }

    fn insert(&self, category: &str, reproduction_steps: &str, created_at: &str) -> Result<()> {
        report::validate_fields(category, reproduction_steps)?;

        self.conn.execute(
            schema::INSERT_BUG,
            params![category, reproduction_steps, created_at],
        )?;
        tracing::debug!("Inserted bug report ({}, {})", category, created_at);
        Ok(())
    }

    fn list_all(&self) -> Result<Vec<BugReport>> {
        let mut stmt = self.conn.prepare(schema::SELECT_ALL_BUGS)?;

        let reports = stmt
            .query_map([], Self::row_to_report)?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        tracing::debug!("Loaded {} bug reports", reports.len());
        Ok(reports)
    }

    fn delete(&self, id: i64) -> Result<()> {
        let removed = self.conn.execute(schema::DELETE_BUG, [id])?;
        if removed == 0 {
            tracing::debug!("Delete of unknown bug report {} ignored", id);
        } else {
            tracing::debug!("Deleted bug report {}", id);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    fn store() -> SqliteReportStore {
        let store = SqliteReportStore::open_in_memory().unwrap();
        store.ensure_schema().unwrap();
        store
    }

    #[test]
    fn test_end_to_end_lifecycle() {
        let store = store();
        assert!(store.list_all().unwrap().is_empty());

        store.insert("Ship", "Fly into a rock", "2023/4/14").unwrap();

        let reports = store.list_all().unwrap();
        assert_eq!(reports, vec![BugReport::new(1, "Ship", "Fly into a rock", "2023/4/14")]);

        store.delete(1).unwrap();
        assert!(store.list_all().unwrap().is_empty());
    }

    #[test]
    fn test_insert_adds_exactly_one_row() {
        let store = store();
        store.insert("FPS", "Reload while prone", "2023/4/12").unwrap();
        let before = store.list_all().unwrap();

        store.insert("Terminal", "Open the ASOP terminal twice", "2023/4/13").unwrap();

        let after = store.list_all().unwrap();
        assert_eq!(after.len(), before.len() + 1);

        let added = after.iter().find(|r| r.category == "Terminal").unwrap();
        assert_eq!(added.reproduction_steps, "Open the ASOP terminal twice");
        assert_eq!(added.created_at, "2023/4/13");
        assert!(before.iter().all(|r| r.id != added.id));
    }

    #[test]
    fn test_empty_fields_are_rejected_without_write() {
        let store = store();
        store.insert("Ship", "Quantum jump into a planet", "2023/4/14").unwrap();

        let err = store.insert("", "steps", "2023/4/14").unwrap_err();
        assert!(matches!(err, Error::MissingField("category")));
        assert!(err.is_rejection());

        let err = store.insert("Ship", "", "2023/4/14").unwrap_err();
        assert!(matches!(err, Error::MissingField("reproduction_steps")));

        assert_eq!(store.list_all().unwrap().len(), 1);
    }

    #[test]
    fn test_delete_removes_only_that_row() {
        let store = store();
        store.insert("Ship", "one", "2023/4/14").unwrap();
        store.insert("FPS", "two", "2023/4/14").unwrap();

        let target = store.list_all().unwrap()[0].id;
        store.delete(target).unwrap();

        let remaining = store.list_all().unwrap();
        assert_eq!(remaining.len(), 1);
        assert!(remaining.iter().all(|r| r.id != target));
        assert_eq!(remaining[0].category, "FPS");
    }

    #[test]
    fn test_delete_unknown_id_is_noop() {
        let store = store();
        store.insert("Ship", "one", "2023/4/14").unwrap();

        store.delete(42).unwrap();
        store.delete(-1).unwrap();

        assert_eq!(store.list_all().unwrap().len(), 1);
    }

    #[test]
    fn test_sequential_inserts_get_distinct_ids() {
        let store = store();
        store.insert("Ship", "one", "2023/4/14").unwrap();
        store.insert("Ship", "two", "2023/4/14").unwrap();

        let reports = store.list_all().unwrap();
        assert_eq!(reports.len(), 2);
        assert_ne!(reports[0].id, reports[1].id);
        assert!(reports.iter().any(|r| r.reproduction_steps == "one"));
        assert!(reports.iter().any(|r| r.reproduction_steps == "two"));
    }

    #[test]
    fn test_ensure_schema_is_idempotent() {
        let store = store();
        store.insert("Ship", "one", "2023/4/14").unwrap();

        store.ensure_schema().unwrap();
        store.ensure_schema().unwrap();

        assert_eq!(store.list_all().unwrap().len(), 1);
    }

    #[test]
    fn test_rows_survive_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sctracker.db");

        {
            let store = SqliteReportStore::open(&path).unwrap();
            store.ensure_schema().unwrap();
            store.insert("Ship", "Fly into a rock", "2023/4/14").unwrap();
        }

        let store = SqliteReportStore::open(&path).unwrap();
        store.ensure_schema().unwrap();
        let reports = store.list_all().unwrap();
        assert_eq!(reports.len(), 1);
        assert_eq!(reports[0].category, "Ship");
    }

    #[test]
    fn test_missing_schema_fails_at_first_use() {
        let store = SqliteReportStore::open_in_memory().unwrap();

        assert!(matches!(store.list_all(), Err(Error::Storage(_))));
        assert!(matches!(store.insert("Ship", "steps", "2023/4/14"), Err(Error::Storage(_))));
        assert!(matches!(store.delete(1), Err(Error::Storage(_))));
    }

    #[test]
    fn test_legacy_null_columns_read_as_empty() {
        let store = store();
        store
            .conn
            .execute("INSERT INTO bugs (bug_type, replicate_steps, created_at) VALUES (NULL, NULL, NULL)", [])
            .unwrap();

        let reports = store.list_all().unwrap();
        assert_eq!(reports.len(), 1);
        assert_eq!(reports[0].category, "");
        assert_eq!(reports[0].created_at, "");
    }
}
