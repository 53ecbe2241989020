//! # Domain Module
//!
//! Business rules of the ledger, independent of storage and presentation.
//!
//! - **transaction_service**: the transaction collection (add, remove, list)
//! - **category_service**: the category collection (add, remove, list, labels)
//! - **aggregation**: monthly summaries and per-day and per-category totals
//! - **calendar**: month grid layout, annotation and month navigation
//! - **formatting**: display strings for amounts, months and days
//! - **models**: id generation, input validation and seed data
//!
//! The two services write through to storage on every mutation. Everything
//! else works on snapshots and never mutates.

pub mod aggregation;
pub mod calendar;
pub mod category_service;
pub mod formatting;
pub mod models;
pub mod transaction_service;

pub use calendar::{CalendarError, CalendarService};
pub use category_service::CategoryService;
pub use models::ValidationError;
pub use transaction_service::TransactionService;
