use anyhow::{Context, Result};
use log::{debug, info};
use std::fs::{self, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::config::LedgerConfig;
use crate::storage::traits::Connection;

/// JsonConnection maps storage keys to JSON files inside a base directory
#[derive(Debug, Clone)]
pub struct JsonConnection {
    base_directory: PathBuf,
}

impl JsonConnection {
    /// Create a new connection, creating the base directory if it doesn't exist
    pub fn new<P: AsRef<Path>>(base_directory: P) -> Result<Self> {
        let base_path = base_directory.as_ref().to_path_buf();

        if !base_path.exists() {
            fs::create_dir_all(&base_path).with_context(|| {
                format!("Failed to create data directory {}", base_path.display())
            })?;
            info!("Created data directory: {}", base_path.display());
        }

        Ok(Self {
            base_directory: base_path,
        })
    }

    /// Create a connection in the directory named by the configuration
    pub fn from_config(config: &LedgerConfig) -> Result<Self> {
        Self::new(&config.data_directory)
    }

    pub fn base_directory(&self) -> &Path {
        &self.base_directory
    }

    /// Path of the file holding the value for `key`
    pub fn file_path(&self, key: &str) -> PathBuf {
        self.base_directory.join(format!("{}.json", key))
    }
}

impl Connection for JsonConnection {
    fn read(&self, key: &str) -> Result<Option<String>> {
        let file_path = self.file_path(key);
        if !file_path.exists() {
            debug!("No stored value for '{}' at {}", key, file_path.display());
            return Ok(None);
        }

        let contents = fs::read_to_string(&file_path)
            .with_context(|| format!("Failed to read {}", file_path.display()))?;
        Ok(Some(contents))
    }

    fn write(&self, key: &str, contents: &str) -> Result<()> {
        let file_path = self.file_path(key);

        // Write to a temporary file first, then rename over the target
        let temp_path = file_path.with_extension("json.tmp");

        {
            let file = OpenOptions::new()
                .write(true)
                .create(true)
                .truncate(true)
                .open(&temp_path)
                .with_context(|| format!("Failed to open {}", temp_path.display()))?;

            let mut writer = BufWriter::new(file);
            writer.write_all(contents.as_bytes())?;
            writer.flush()?;
            writer.get_ref().sync_all()?;
        }

        fs::rename(&temp_path, &file_path).with_context(|| {
            format!(
                "Failed to move {} into place at {}",
                temp_path.display(),
                file_path.display()
            )
        })?;

        debug!("Wrote {} bytes for '{}'", contents.len(), key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestEnvironment;

    #[test]
    fn test_new_creates_missing_directory() {
        let env = TestEnvironment::new().unwrap();
        let nested = env.base_path.join("nested").join("ledger");
        assert!(!nested.exists());

        let connection = JsonConnection::new(&nested).unwrap();
        assert!(nested.exists());
        assert_eq!(connection.base_directory(), nested.as_path());
    }

    #[test]
    fn test_read_missing_key_returns_none() {
        let env = TestEnvironment::new().unwrap();
        assert_eq!(env.connection.read("transactions").unwrap(), None);
    }

    #[test]
    fn test_write_then_read() {
        let env = TestEnvironment::new().unwrap();
        env.connection.write("categories", "[]").unwrap();

        assert_eq!(
            env.connection.read("categories").unwrap(),
            Some("[]".to_string())
        );
        assert!(env.base_path.join("categories.json").exists());
    }

    #[test]
    fn test_write_replaces_previous_value_and_leaves_no_temp_file() {
        let env = TestEnvironment::new().unwrap();
        env.connection.write("transactions", "[1,2,3]").unwrap();
        env.connection.write("transactions", "[4]").unwrap();

        assert_eq!(
            env.connection.read("transactions").unwrap(),
            Some("[4]".to_string())
        );
        assert!(!env.base_path.join("transactions.json.tmp").exists());
    }

    #[test]
    fn test_keys_are_independent_files() {
        let env = TestEnvironment::new().unwrap();
        env.connection.write("transactions", "[]").unwrap();

        assert_eq!(env.connection.read("categories").unwrap(), None);
    }
}
