//! Display strings for amounts and dates.
//!
//! Amounts are whole yen. Currency strings use the full-width yen sign and
//! comma grouping (`￥1,200`); calendar cells show grouped digits with a sign
//! and no currency symbol (`+1,200`).

use chrono::{Datelike, NaiveDate};
use shared::{DailyTotals, TransactionType, YearMonth};

pub const YEN_SIGN: char = '￥';

/// Column headings for a Sunday-first calendar
pub const WEEKDAY_LABELS: [&str; 7] = ["日", "月", "火", "水", "木", "金", "土"];

/// Digits with comma thousands separators, e.g. `-1,234,567`
pub fn format_grouped(amount: i64) -> String {
    let digits = amount.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);

    if amount < 0 {
        grouped.push('-');
    }
    for (i, digit) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    grouped
}

/// `￥1,200`, or `-￥1,200` for negative amounts
pub fn format_yen(amount: i64) -> String {
    if amount < 0 {
        format!("-{}{}", YEN_SIGN, format_grouped(amount.saturating_abs()))
    } else {
        format!("{}{}", YEN_SIGN, format_grouped(amount))
    }
}

/// A transaction amount in list form: `+￥300,000` for income, `-￥1,200` for
/// expense
pub fn format_transaction_amount(transaction_type: TransactionType, amount: i64) -> String {
    format!("{}{}", transaction_type.sign(), format_yen(amount))
}

/// The month's net balance: `+` prefix when zero or positive
pub fn format_total(total: i64) -> String {
    if total >= 0 {
        format!("+{}", format_yen(total))
    } else {
        format_yen(total)
    }
}

/// The lines drawn inside a calendar cell. Each side only appears when it is
/// non-zero.
pub fn format_daily_totals(totals: &DailyTotals) -> (Option<String>, Option<String>) {
    let income = (totals.income > 0).then(|| format!("+{}", format_grouped(totals.income)));
    let expense = (totals.expense > 0).then(|| format!("-{}", format_grouped(totals.expense)));
    (income, expense)
}

/// Header title such as `2024年 3月`
pub fn month_title(month: YearMonth) -> String {
    format!("{}年 {}月", month.year(), month.month())
}

/// Heading for a single day such as `3月5日`
pub fn day_heading(date: NaiveDate) -> String {
    format!("{}月{}日", date.month(), date.day())
}
