//! Roster schema
//!
//! Table and column names match the `escola.db` files written by earlier
//! versions of the tool, so existing data stays readable.

use crate::Result;
use rusqlite::Connection;

const CREATE_STUDENTS_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS alunos (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        nome TEXT NOT NULL,
        idade INTEGER,
        serie TEXT NOT NULL
    );
"#;

/// Create the student table if it does not exist yet. Safe to call on every startup.
pub fn ensure_schema(conn: &Connection) -> Result<()> {
    tracing::debug!("Ensuring roster schema");
    conn.execute_batch(CREATE_STUDENTS_TABLE)?;
    Ok(())
}
