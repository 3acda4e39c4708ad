//! Database schema definitions
//!
//! Column names match the on-device table written by earlier releases of the
//! tracker, so existing `sctracker.db` files stay readable.

/// SQL to create the bugs table
pub const CREATE_BUGS_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS bugs (
    id INTEGER PRIMARY KEY NOT NULL,
    bug_type TEXT,
    replicate_steps TEXT,
    created_at TEXT
)
"#;

pub const INSERT_BUG: &str =
    "INSERT INTO bugs (bug_type, replicate_steps, created_at) VALUES (?1, ?2, ?3)";

pub const SELECT_ALL_BUGS: &str =
    "SELECT id, bug_type, replicate_steps, created_at FROM bugs ORDER BY id";

pub const DELETE_BUG: &str = "DELETE FROM bugs WHERE id = ?1";

/// All schema creation statements
pub fn all_schema_statements() -> Vec<&'static str> {
    vec![CREATE_BUGS_TABLE]
}
