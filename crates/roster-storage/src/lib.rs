//! Student roster storage layer
//!
//! SQLite persistence for student registrations. File-backed databases
//! open one connection per operation; nothing is held between calls.

mod database;
mod error;
mod schema;
mod students;

pub use database::Database;
pub use error::StorageError;
pub use schema::ensure_schema;
pub use students::{NewStudent, StudentRecord, StudentStore};

pub type Result<T> = std::result::Result<T, StorageError>;
