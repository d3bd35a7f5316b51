//! Student records

use rusqlite::Row;
use serde::{Deserialize, Serialize};

use crate::database::Database;
use crate::schema;
use crate::Result;

/// A validated registration that has not been stored yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewStudent {
    pub name: String,
    pub age: i64,
    pub grade: String,
}

/// A stored registration. Records are never updated or deleted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentRecord {
    pub id: i64,
    pub name: String,
    pub age: i64,
    pub grade: String,
}

impl StudentRecord {
    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get(0)?,
            name: row.get(1)?,
            age: row.get(2)?,
            grade: row.get(3)?,
        })
    }
}

#[derive(Clone)]
pub struct StudentStore {
    db: Database,
}

impl StudentStore {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    pub fn database(&self) -> &Database {
        &self.db
    }

    pub fn ensure_schema(&self) -> Result<()> {
        self.db.with_connection(schema::ensure_schema)
    }

    /// Store a registration and return it with its assigned identifier.
    pub fn insert(&self, student: &NewStudent) -> Result<StudentRecord> {
        let id = self.db.transaction(|conn| {
            conn.execute(
                "INSERT INTO alunos (nome, idade, serie) VALUES (?1, ?2, ?3)",
                rusqlite::params![student.name, student.age, student.grade],
            )?;
            Ok(conn.last_insert_rowid())
        })?;

        tracing::info!(id, name = %student.name, grade = %student.grade, "Registered student");

        Ok(StudentRecord {
            id,
            name: student.name.clone(),
            age: student.age,
            grade: student.grade.clone(),
        })
    }

    /// All records in insertion order.
    pub fn fetch_all(&self) -> Result<Vec<StudentRecord>> {
        let records = self.db.with_connection(|conn| {
            let mut stmt =
                conn.prepare("SELECT id, nome, idade, serie FROM alunos ORDER BY id ASC")?;

            let records = stmt
                .query_map([], StudentRecord::from_row)?
                .collect::<rusqlite::Result<Vec<_>>>()?;

            Ok(records)
        })?;

        tracing::debug!(count = records.len(), "Fetched roster");
        Ok(records)
    }

    pub fn count(&self) -> Result<i64> {
        self.db.with_connection(|conn| {
            let count = conn.query_row("SELECT COUNT(*) FROM alunos", [], |row| row.get(0))?;
            Ok(count)
        })
    }
}
