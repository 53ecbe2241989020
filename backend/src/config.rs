//! Where the ledger keeps its data.
//!
//! Resolution order for the data directory:
//! 1. the `KAKEIBO_DATA_DIR` environment variable
//! 2. `<Documents>/Kakeibo`, unless it contains a `.kakeibo_redirect` file
//!    naming another existing directory

use anyhow::{anyhow, Result};
use log::{error, info, warn};
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable that overrides the data directory
pub const DATA_DIR_ENV: &str = "KAKEIBO_DATA_DIR";

/// Name of the directory created under the user's documents folder
pub const DEFAULT_DIRECTORY_NAME: &str = "Kakeibo";

/// File that redirects the default data directory elsewhere
pub const REDIRECT_FILE_NAME: &str = ".kakeibo_redirect";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LedgerConfig {
    pub data_directory: PathBuf,
}

impl LedgerConfig {
    pub fn new<P: Into<PathBuf>>(data_directory: P) -> Self {
        Self {
            data_directory: data_directory.into(),
        }
    }

    /// Resolve the data directory from the environment and the user's folders
    pub fn from_env() -> Result<Self> {
        if let Some(dir) = std::env::var_os(DATA_DIR_ENV).filter(|v| !v.is_empty()) {
            let dir = PathBuf::from(dir);
            info!("Using data directory from {}: {}", DATA_DIR_ENV, dir.display());
            return Ok(Self::new(dir));
        }

        let documents_dir = dirs::document_dir()
            .or_else(|| dirs::home_dir().map(|home| home.join("Documents")))
            .ok_or_else(|| anyhow!("Could not determine home directory"))?;

        Ok(Self::new(resolve_redirect(
            &documents_dir.join(DEFAULT_DIRECTORY_NAME),
        )))
    }
}

/// Follow a redirect file inside `default_dir`, if there is a usable one
pub fn resolve_redirect(default_dir: &Path) -> PathBuf {
    let redirect_file = default_dir.join(REDIRECT_FILE_NAME);
    if !redirect_file.exists() {
        info!(
            "No redirect file found, using default data directory: {}",
            default_dir.display()
        );
        return default_dir.to_path_buf();
    }

    match fs::read_to_string(&redirect_file) {
        Ok(redirected_path) => {
            let redirected_path = redirected_path.trim();
            let path = PathBuf::from(redirected_path);

            if !redirected_path.is_empty() && path.is_dir() {
                info!("Found redirect file, using data directory: {}", path.display());
                path
            } else {
                warn!(
                    "Redirect file points to non-existent directory: '{}'. Using default.",
                    redirected_path
                );
                default_dir.to_path_buf()
            }
        }
        Err(e) => {
            error!("Failed to read redirect file: {}. Using default directory.", e);
            default_dir.to_path_buf()
        }
    }
}
