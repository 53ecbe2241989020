//! Validation rules for new ledger entries.

use chrono::NaiveDate;
use shared::TransactionDraft;

/// Largest amount a single transaction may carry (one trillion yen). Keeps
/// sums over any realistic ledger far from `i64` overflow.
pub const MAX_AMOUNT: i64 = 1_000_000_000_000;

/// Rejected input on one of the mutation operations. Nothing is changed when
/// one of these is returned.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Amount must be greater than zero (got {0})")]
    NonPositiveAmount(i64),
    #[error("Amount must be at most {max} (got {amount})")]
    AmountTooLarge { amount: i64, max: i64 },
    #[error("A category must be selected")]
    MissingCategory,
    #[error("A date must be given")]
    MissingDate,
    #[error("Category name cannot be empty")]
    EmptyName,
}

impl ValidationError {
    /// Name of the input field that failed validation
    pub fn field(&self) -> &'static str {
        match self {
            ValidationError::NonPositiveAmount(_) | ValidationError::AmountTooLarge { .. } => "amount",
            ValidationError::MissingCategory => "categoryId",
            ValidationError::MissingDate => "date",
            ValidationError::EmptyName => "name",
        }
    }

    /// Message shown to the user when the form is rejected
    pub fn user_message(&self) -> &'static str {
        match self {
            ValidationError::NonPositiveAmount(_) | ValidationError::AmountTooLarge { .. } => {
                "正しい金額を入力してください"
            }
            ValidationError::MissingCategory => "ジャンルを選択してください",
            ValidationError::MissingDate => "日付を入力してください",
            ValidationError::EmptyName => "ジャンル名を入力してください",
        }
    }
}

/// Check a draft and return its date. Checks run amount, category, date, and
/// the first failure wins.
pub fn validate_draft(draft: &TransactionDraft) -> Result<NaiveDate, ValidationError> {
    if draft.amount <= 0 {
        return Err(ValidationError::NonPositiveAmount(draft.amount));
    }
    if draft.amount > MAX_AMOUNT {
        return Err(ValidationError::AmountTooLarge {
            amount: draft.amount,
            max: MAX_AMOUNT,
        });
    }
    if draft.category_id.trim().is_empty() {
        return Err(ValidationError::MissingCategory);
    }
    draft.date.ok_or(ValidationError::MissingDate)
}
