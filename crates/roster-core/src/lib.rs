//! Student roster core
//!
//! Controller layer between the storage crate and whatever front end
//! collects the form. Validation and rendering are pure; the registry
//! owns the form state and the rendered roster.

mod config;
mod error;
mod form;
mod notice;
mod registry;
mod render;
mod validation;

pub use config::Config;
pub use error::CoreError;
pub use form::{FormField, FormState};
pub use notice::{Notice, NoticeLevel};
pub use registry::{Registry, RosterStore};
pub use render::{render_record, render_roster, EMPTY_ROSTER};
pub use validation::{validate, ValidationError};

pub use roster_storage::{Database, NewStudent, StorageError, StudentRecord, StudentStore};

pub type Result<T> = std::result::Result<T, CoreError>;

/// Initialize logging
pub fn init_logging() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();
}
