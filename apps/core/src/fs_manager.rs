use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{error, info};

/// Name of the SQLite file inside the database directory
const DB_FILENAME: &str = "mindbot.sqlite";

/// Resolves the on-disk layout of the app's local data.
pub struct PortablePathManager;

impl PortablePathManager {
    /// Directory holding the executable; falls back to the working directory.
    pub fn root_dir() -> PathBuf {
        match std::env::current_exe() {
            Ok(mut path) => {
                path.pop(); // remove exe name
                path
            }
            Err(e) => {
                error!(
                    "Failed to get current exe path: {}. Falling back to current_dir.",
                    e
                );
                std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."))
            }
        }
    }

    /// Default data directory (./data next to the executable).
    pub fn default_data_dir() -> PathBuf {
        Self::root_dir().join("data")
    }

    /// Database directory inside `data_dir`.
    pub fn db_dir(data_dir: &Path) -> PathBuf {
        data_dir.join("db")
    }

    /// SQLite file inside `data_dir`.
    pub fn db_path(data_dir: &Path) -> PathBuf {
        Self::db_dir(data_dir).join(DB_FILENAME)
    }

    /// Create the data and db directories if they do not exist.
    pub fn init(data_dir: &Path) -> Result<(), io::Error> {
        let db_dir = Self::db_dir(data_dir);

        if !db_dir.exists() {
            fs::create_dir_all(&db_dir)?;
            info!("Created data directory: {:?}", db_dir);
        }

        Ok(())
    }
}
