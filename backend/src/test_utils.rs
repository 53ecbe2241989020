//! Test utilities: a throwaway data directory plus small builders for ledger
//! input.
//!
//! The directory is removed when the environment is dropped, even if the test
//! panics.

use anyhow::Result;
use chrono::NaiveDate;
use shared::{TransactionDraft, TransactionType};
use std::path::PathBuf;
use tempfile::TempDir;

use crate::storage::JsonConnection;

/// RAII test environment backed by a temporary directory
pub struct TestEnvironment {
    /// Kept alive so the directory isn't removed until drop
    _temp_dir: TempDir,
    pub connection: JsonConnection,
    pub base_path: PathBuf,
}

impl TestEnvironment {
    pub fn new() -> Result<Self> {
        Self::new_with_prefix("kakeibo-test")
    }

    /// Use a recognisable directory prefix, handy when debugging a test
    pub fn new_with_prefix(prefix: &str) -> Result<Self> {
        let temp_dir = tempfile::Builder::new().prefix(prefix).tempdir()?;
        let base_path = temp_dir.path().to_path_buf();
        let connection = JsonConnection::new(&base_path)?;

        Ok(TestEnvironment {
            _temp_dir: temp_dir,
            connection,
            base_path,
        })
    }
}

/// Route `log` output through the test harness. Safe to call more than once.
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid test date")
}

/// An expense draft without a memo
pub fn draft(amount: i64, date: NaiveDate, category_id: &str) -> TransactionDraft {
    TransactionDraft {
        transaction_type: TransactionType::Expense,
        amount,
        date: Some(date),
        category_id: category_id.to_string(),
        memo: None,
    }
}

/// An income draft without a memo
pub fn income_draft(amount: i64, date: NaiveDate, category_id: &str) -> TransactionDraft {
    TransactionDraft {
        transaction_type: TransactionType::Income,
        ..draft(amount, date, category_id)
    }
}
