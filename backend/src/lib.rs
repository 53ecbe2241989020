//! # Kakeibo Backend
//!
//! Ledger state and derivations for a personal income/expense book.
//!
//! ```text
//! Presentation (calendar / list screens)
//!     ↓
//! Ledger facade
//!     ↓
//! Domain (services, aggregation, calendar layout)
//!     ↓
//! Storage (JSON files or in-memory map)
//! ```
//!
//! All operations are synchronous and assume a single writer. Two processes
//! sharing one data directory will overwrite each other's changes (last write
//! wins).

pub mod config;
pub mod domain;
pub mod storage;

#[cfg(test)]
pub mod test_utils;

use anyhow::Result;
use chrono::{Local, NaiveDate};
use log::info;
use shared::{LedgerEntry, MonthOverview, Transaction, YearMonth};

use crate::config::LedgerConfig;
use crate::domain::aggregation;
use crate::domain::calendar;
use crate::storage::{Connection, JsonConnection};

pub use domain::{CalendarError, CalendarService, CategoryService, TransactionService, ValidationError};
pub use storage::{MemoryConnection, TRANSACTIONS_KEY, CATEGORIES_KEY};

/// The two collections plus the calendar's view state, for one user
#[derive(Debug, Clone)]
pub struct Ledger<C: Connection> {
    pub transactions: TransactionService<C>,
    pub categories: CategoryService<C>,
    pub calendar: CalendarService,
}

impl Ledger<JsonConnection> {
    /// Open the ledger in the data directory resolved from the environment
    pub fn open_default() -> Result<Self> {
        Self::open(&LedgerConfig::from_env()?)
    }

    /// Open the ledger stored in the configured data directory
    pub fn open(config: &LedgerConfig) -> Result<Self> {
        info!("Opening ledger in {}", config.data_directory.display());
        let connection = JsonConnection::from_config(config)?;
        Ok(Self::with_connection(connection))
    }
}

impl<C: Connection> Ledger<C> {
    /// Load both collections from `connection`, focused on today's month
    pub fn with_connection(connection: C) -> Self {
        Self::with_connection_on(connection, Local::now().date_naive())
    }

    /// Load both collections from `connection`, focused on `today`'s month
    pub fn with_connection_on(connection: C, today: NaiveDate) -> Self {
        let transactions = TransactionService::new(connection.clone());
        let categories = CategoryService::new(connection);
        info!(
            "Ledger ready: {} transaction(s), {} categor(ies)",
            transactions.all().len(),
            categories.all().len()
        );

        Self {
            transactions,
            categories,
            calendar: CalendarService::new(today),
        }
    }

    /// A transaction paired with its category label, which is
    /// [`Unknown`](shared::CategoryLabel::Unknown) for a deleted category
    pub fn entry(&self, transaction: &Transaction) -> LedgerEntry {
        LedgerEntry {
            transaction: transaction.clone(),
            category: self.categories.label_for(&transaction.category_id),
        }
    }

    /// Summary, annotated calendar and newest-first entries for `month`
    pub fn overview(&self, month: YearMonth) -> MonthOverview {
        let in_month = self.transactions.list(month);
        let grid = calendar::build_month(month);

        MonthOverview {
            month,
            summary: aggregation::monthly_summary(in_month.iter().copied()),
            calendar: calendar::annotate(&grid, in_month.iter().copied()),
            entries: aggregation::sorted_by_date_desc(in_month)
                .into_iter()
                .map(|t| self.entry(t))
                .collect(),
        }
    }

    /// Overview of the month the calendar is focused on
    pub fn current_overview(&self) -> MonthOverview {
        self.overview(self.calendar.focus())
    }

    /// Entries recorded on the calendar's selected day
    pub fn selected_day_entries(&self) -> Vec<LedgerEntry> {
        self.transactions
            .list_on(self.calendar.selected())
            .into_iter()
            .map(|t| self.entry(t))
            .collect()
    }
}
