//! Pure derivations over a snapshot of transactions.
//!
//! Nothing here looks up categories, so transactions whose category has been
//! deleted are summed like any other.
//!
//! Sums saturate at the `i64` bounds. New amounts are capped at
//! [`MAX_AMOUNT`](crate::domain::models::MAX_AMOUNT), but stored data is not
//! re-validated on load.

use chrono::NaiveDate;
use shared::{CategoryTotal, DailyTotals, MonthlySummary, Transaction, TransactionType, YearMonth};

/// Income, expense and `income - expense` over `transactions`
pub fn monthly_summary<'a, I>(transactions: I) -> MonthlySummary
where
    I: IntoIterator<Item = &'a Transaction>,
{
    let mut summary = MonthlySummary::default();
    for transaction in transactions {
        match transaction.transaction_type {
            TransactionType::Income => summary.income = summary.income.saturating_add(transaction.amount),
            TransactionType::Expense => summary.expense = summary.expense.saturating_add(transaction.amount),
        }
    }
    summary.total = summary.income.saturating_sub(summary.expense);
    summary
}

/// Income and expense for the transactions dated exactly `date`
pub fn daily_totals<'a, I>(transactions: I, date: NaiveDate) -> DailyTotals
where
    I: IntoIterator<Item = &'a Transaction>,
{
    let mut totals = DailyTotals::default();
    for transaction in transactions.into_iter().filter(|t| t.date == date) {
        match transaction.transaction_type {
            TransactionType::Income => totals.income = totals.income.saturating_add(transaction.amount),
            TransactionType::Expense => totals.expense = totals.expense.saturating_add(transaction.amount),
        }
    }
    totals
}

pub fn transactions_in_month<'a, I>(transactions: I, month: YearMonth) -> Vec<&'a Transaction>
where
    I: IntoIterator<Item = &'a Transaction>,
{
    transactions
        .into_iter()
        .filter(|t| t.is_in_month(month))
        .collect()
}

pub fn transactions_on<'a, I>(transactions: I, date: NaiveDate) -> Vec<&'a Transaction>
where
    I: IntoIterator<Item = &'a Transaction>,
{
    transactions.into_iter().filter(|t| t.date == date).collect()
}

/// Newest date first. Entries sharing a date keep their relative order.
pub fn sorted_by_date_desc<'a, I>(transactions: I) -> Vec<&'a Transaction>
where
    I: IntoIterator<Item = &'a Transaction>,
{
    let mut sorted: Vec<&Transaction> = transactions.into_iter().collect();
    sorted.sort_by(|a, b| b.date.cmp(&a.date));
    sorted
}

/// Per-category sums for one transaction type, in order of first appearance
pub fn category_totals<'a, I>(transactions: I, transaction_type: TransactionType) -> Vec<CategoryTotal>
where
    I: IntoIterator<Item = &'a Transaction>,
{
    let mut totals: Vec<CategoryTotal> = Vec::new();
    for transaction in transactions
        .into_iter()
        .filter(|t| t.transaction_type == transaction_type)
    {
        match totals.iter_mut().find(|t| t.category_id == transaction.category_id) {
            Some(total) => {
                total.amount = total.amount.saturating_add(transaction.amount);
                total.count += 1;
            }
            None => totals.push(CategoryTotal {
                category_id: transaction.category_id.clone(),
                amount: transaction.amount,
                count: 1,
            }),
        }
    }
    totals
}
