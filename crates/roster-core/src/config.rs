//! Roster configuration

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::error::CoreError;
use crate::Result;

const APP_DIR: &str = "Cadastro";
const DATABASE_FILE: &str = "escola.db";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Path to the database file
    pub database_path: PathBuf,
}

impl Config {
    pub fn new(data_dir: PathBuf) -> Self {
        Self {
            database_path: data_dir.join(DATABASE_FILE),
        }
    }

    /// Per-user data directory, or the working directory when the platform has none.
    pub fn data_dir() -> PathBuf {
        dirs::data_local_dir()
            .map(|d| d.join(APP_DIR))
            .unwrap_or_else(|| PathBuf::from("."))
    }

    pub fn validate(&self) -> Result<()> {
        if self.database_path.as_os_str().is_empty() {
            return Err(CoreError::Config("database path is empty".to_string()));
        }
        if self.database_path.is_dir() {
            return Err(CoreError::Config(format!(
                "database path {} is a directory",
                self.database_path.display()
            )));
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(Self::data_dir())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_database_file_lives_in_data_dir() {
        let config = Config::new(PathBuf::from("/tmp/roster"));
        assert_eq!(config.database_path, PathBuf::from("/tmp/roster/escola.db"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_directory_is_not_a_database_path() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config {
            database_path: dir.path().to_path_buf(),
        };

        assert!(matches!(config.validate(), Err(CoreError::Config(_))));
    }

    #[test]
    fn test_empty_path_is_rejected() {
        let config = Config {
            database_path: PathBuf::new(),
        };

        assert!(config.validate().is_err());
    }
}
