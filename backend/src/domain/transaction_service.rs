//! Transaction service domain logic for the ledger.
//!
//! Owns the transaction collection. Every successful `add` or `remove` writes
//! the whole collection back through the repository before returning.
use chrono::NaiveDate;
use log::{error, info};
use shared::{Transaction, TransactionDraft, TransactionType, YearMonth};

use crate::domain::aggregation;
use crate::domain::models::{validate_draft, IdSequence, ValidationError};
use crate::storage::{CollectionRepository, Connection, TRANSACTIONS_KEY};

#[derive(Debug, Clone)]
pub struct TransactionService<C: Connection> {
    repository: CollectionRepository<C>,
    transactions: Vec<Transaction>,
    ids: IdSequence,
}

impl<C: Connection> TransactionService<C> {
    /// Load the stored transactions; an empty ledger if none are usable
    pub fn new(connection: C) -> Self {
        let repository = CollectionRepository::new(connection);
        let transactions: Vec<Transaction> = repository.load(TRANSACTIONS_KEY, Vec::new);
        let ids = IdSequence::resume_after(transactions.iter().map(|t| t.id.as_str()));

        Self {
            repository,
            transactions,
            ids,
        }
    }

    /// Validate and record a new transaction.
    ///
    /// The category id is not checked against the category store, and its type
    /// is not required to match the transaction's.
    pub fn add(&mut self, draft: TransactionDraft) -> Result<Transaction, ValidationError> {
        let date = validate_draft(&draft)?;

        let prefix = match draft.transaction_type {
            TransactionType::Income => "in",
            TransactionType::Expense => "ex",
        };
        let transaction = Transaction {
            id: self.ids.next_id(prefix),
            transaction_type: draft.transaction_type,
            amount: draft.amount,
            date,
            category_id: draft.category_id,
            memo: draft.memo,
        };

        info!(
            "Recording {} of {} on {} ({})",
            transaction.transaction_type, transaction.amount, transaction.date, transaction.id
        );
        self.transactions.push(transaction.clone());
        self.persist();

        Ok(transaction)
    }

    /// Remove the transaction with `id`, keeping the order of the rest.
    /// Returns false if there was none.
    pub fn remove(&mut self, id: &str) -> bool {
        let Some(index) = self.transactions.iter().position(|t| t.id == id) else {
            return false;
        };

        self.transactions.remove(index);
        info!("Removed transaction {}", id);
        self.persist();
        true
    }

    /// Transactions dated within `month`, in insertion order
    pub fn list(&self, month: YearMonth) -> Vec<&Transaction> {
        aggregation::transactions_in_month(&self.transactions, month)
    }

    /// Transactions dated within `month`, newest date first
    pub fn list_sorted(&self, month: YearMonth) -> Vec<&Transaction> {
        aggregation::sorted_by_date_desc(self.list(month))
    }

    /// Transactions recorded on a single day, in insertion order
    pub fn list_on(&self, date: NaiveDate) -> Vec<&Transaction> {
        aggregation::transactions_on(&self.transactions, date)
    }

    pub fn all(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn get(&self, id: &str) -> Option<&Transaction> {
        self.transactions.iter().find(|t| t.id == id)
    }

    fn persist(&self) {
        if let Err(e) = self.repository.save(TRANSACTIONS_KEY, &self.transactions) {
            error!("Failed to save transactions: {:#}", e);
        }
    }
}
