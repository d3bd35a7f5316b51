//! Database handle and scoped connection access

use parking_lot::Mutex;
use rusqlite::Connection;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::Result;

#[derive(Clone)]
enum Backing {
    /// A data file; every operation opens and closes its own connection.
    File(PathBuf),
    /// An in-memory database only lives as long as its connection, so it is shared.
    Memory(Arc<Mutex<Connection>>),
}

/// Where the roster lives. Cloning is cheap and clones refer to the same data.
#[derive(Clone)]
pub struct Database {
    backing: Backing,
}

impl Database {
    /// Use the data file at `path`. The file itself is created by the first
    /// operation that touches it; missing parent directories are created here.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref().to_path_buf();

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        tracing::debug!(path = %path.display(), "Using roster database file");

        Ok(Self {
            backing: Backing::File(path),
        })
    }

    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;

        Ok(Self {
            backing: Backing::Memory(Arc::new(Mutex::new(conn))),
        })
    }

    /// Path of the data file, `None` for in-memory databases.
    pub fn path(&self) -> Option<&Path> {
        match &self.backing {
            Backing::File(path) => Some(path),
            Backing::Memory(_) => None,
        }
    }

    pub fn with_connection<F, T>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&Connection) -> Result<T>,
    {
        match &self.backing {
            Backing::File(path) => {
                let conn = Connection::open(path)?;
                f(&conn)
            }
            Backing::Memory(conn) => {
                let conn = conn.lock();
                f(&conn)
            }
        }
    }

    /// Run `f` inside a transaction. Nothing is committed unless `f` succeeds.
    pub fn transaction<F, T>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&Connection) -> Result<T>,
    {
        match &self.backing {
            Backing::File(path) => {
                let mut conn = Connection::open(path)?;
                run_in_transaction(&mut conn, f)
            }
            Backing::Memory(conn) => {
                let mut conn = conn.lock();
                run_in_transaction(&mut conn, f)
            }
        }
    }
}

fn run_in_transaction<F, T>(conn: &mut Connection, f: F) -> Result<T>
where
    F: FnOnce(&Connection) -> Result<T>,
{
    let tx = conn.transaction()?;
    let result = f(&tx)?;
    tx.commit()?;
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_in_memory_shares_connection_across_clones() {
        let db = Database::open_in_memory().unwrap();
        let other = db.clone();

        db.with_connection(|conn| {
            conn.execute_batch("CREATE TABLE probe (value INTEGER NOT NULL)")?;
            Ok(())
        })
        .unwrap();

        let count: i64 = other
            .with_connection(|conn| {
                Ok(conn.query_row("SELECT COUNT(*) FROM probe", [], |row| row.get(0))?)
            })
            .unwrap();
        assert_eq!(count, 0);
        assert!(db.path().is_none());
    }

    #[test]
    fn test_open_creates_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("escola.db");

        let db = Database::open(&path).unwrap();

        assert!(path.parent().unwrap().is_dir());
        assert_eq!(db.path(), Some(path.as_path()));
    }

    #[test]
    fn test_failed_transaction_is_rolled_back() {
        let db = Database::open_in_memory().unwrap();
        db.with_connection(|conn| {
            conn.execute_batch("CREATE TABLE probe (value INTEGER NOT NULL)")?;
            Ok(())
        })
        .unwrap();

        let result: Result<()> = db.transaction(|conn| {
            conn.execute("INSERT INTO probe (value) VALUES (1)", [])?;
            conn.execute("INSERT INTO probe (value) VALUES (NULL)", [])?;
            Ok(())
        });
        assert!(result.is_err());

        let count: i64 = db
            .with_connection(|conn| {
                Ok(conn.query_row("SELECT COUNT(*) FROM probe", [], |row| row.get(0))?)
            })
            .unwrap();
        assert_eq!(count, 0);
    }
}
