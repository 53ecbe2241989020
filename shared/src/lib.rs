use chrono::{Datelike, Days, Months, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Label shown for a transaction whose category no longer exists
pub const UNKNOWN_CATEGORY_NAME: &str = "不明";

/// A single income or expense entry in the ledger.
///
/// Stored as one element of the `transactions` JSON array. The date is a plain
/// calendar date (`YYYY-MM-DD`) and is never round-tripped through a timestamp.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    /// Opaque identifier, unique within the collection and never reused
    pub id: String,
    #[serde(rename = "type")]
    pub transaction_type: TransactionType,
    /// Whole yen, always greater than zero
    pub amount: i64,
    pub date: NaiveDate,
    /// May point at a category that has since been deleted
    pub category_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub memo: Option<String>,
}

impl Transaction {
    /// Whether this transaction falls within the given month, judged from the
    /// date's own year and month fields.
    pub fn is_in_month(&self, month: YearMonth) -> bool {
        month.contains(self.date)
    }
}

/// Direction of money flow, shared by transactions and categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    Income,
    Expense,
}

impl TransactionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionType::Income => "income",
            TransactionType::Expense => "expense",
        }
    }

    /// Sign prefix used when displaying an amount of this type
    pub fn sign(&self) -> char {
        match self {
            TransactionType::Income => '+',
            TransactionType::Expense => '-',
        }
    }
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Input for recording a new transaction. The id is assigned by the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionDraft {
    #[serde(rename = "type")]
    pub transaction_type: TransactionType,
    pub amount: i64,
    pub date: Option<NaiveDate>,
    pub category_id: String,
    #[serde(default)]
    pub memo: Option<String>,
}

/// A user-defined grouping for transactions
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub category_type: TransactionType,
    pub color: CategoryColor,
}

/// Color tag for a category.
///
/// The aliases accept the utility-class names written by earlier versions of
/// the app, so existing data keeps loading. Colors are always written back in
/// the short form (`orange`), so the first save after loading old data
/// rewrites them once. Later saves leave the file unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CategoryColor {
    #[serde(alias = "bg-red-500")]
    Red,
    #[serde(alias = "bg-orange-500")]
    Orange,
    #[serde(alias = "bg-yellow-500")]
    Yellow,
    #[serde(alias = "bg-green-500")]
    Green,
    #[serde(alias = "bg-teal-500")]
    Teal,
    #[serde(alias = "bg-cyan-500")]
    Cyan,
    #[serde(alias = "bg-blue-500")]
    Blue,
    #[serde(alias = "bg-indigo-500")]
    Indigo,
    #[serde(alias = "bg-purple-500")]
    Purple,
    #[serde(alias = "bg-pink-500")]
    Pink,
    #[serde(alias = "bg-gray-500")]
    Gray,
}

/// Colors handed out to newly created categories, in cycling order
pub const CATEGORY_PALETTE: [CategoryColor; 10] = [
    CategoryColor::Red,
    CategoryColor::Orange,
    CategoryColor::Yellow,
    CategoryColor::Green,
    CategoryColor::Teal,
    CategoryColor::Blue,
    CategoryColor::Indigo,
    CategoryColor::Purple,
    CategoryColor::Pink,
    CategoryColor::Gray,
];

/// How a transaction's category should be presented
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CategoryLabel {
    Known { name: String, color: CategoryColor },
    /// The referenced category was deleted
    Unknown,
}

impl CategoryLabel {
    pub fn name(&self) -> &str {
        match self {
            CategoryLabel::Known { name, .. } => name,
            CategoryLabel::Unknown => UNKNOWN_CATEGORY_NAME,
        }
    }

    pub fn color(&self) -> Option<CategoryColor> {
        match self {
            CategoryLabel::Known { color, .. } => Some(*color),
            CategoryLabel::Unknown => None,
        }
    }
}

/// A calendar month (year + month number 1-12).
///
/// Serialized as `{"year": 2024, "month": 3}`. Deserializing goes through the
/// same check as [`YearMonth::new`], so an out-of-range month is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawYearMonth", into = "RawYearMonth")]
pub struct YearMonth {
    first_day: NaiveDate,
}

#[derive(Serialize, Deserialize)]
struct RawYearMonth {
    year: i32,
    month: u32,
}

impl TryFrom<RawYearMonth> for YearMonth {
    type Error = String;

    fn try_from(raw: RawYearMonth) -> Result<Self, Self::Error> {
        YearMonth::new(raw.year, raw.month)
            .ok_or_else(|| format!("invalid month: {}-{}", raw.year, raw.month))
    }
}

impl From<YearMonth> for RawYearMonth {
    fn from(month: YearMonth) -> Self {
        RawYearMonth {
            year: month.year(),
            month: month.month(),
        }
    }
}

impl YearMonth {
    /// Returns `None` when `month` is outside 1..=12 or the year is out of range
    pub fn new(year: i32, month: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, 1).map(|first_day| Self { first_day })
    }

    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            first_day: date - Days::new(u64::from(date.day0())),
        }
    }

    pub fn year(&self) -> i32 {
        self.first_day.year()
    }

    pub fn month(&self) -> u32 {
        self.first_day.month()
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year() && date.month() == self.month()
    }

    /// The first day of this month
    pub fn first_day(&self) -> NaiveDate {
        self.first_day
    }

    /// A day within this month, if `day` exists in it
    pub fn day(&self, day: u32) -> Option<NaiveDate> {
        self.first_day.with_day(day)
    }

    /// The month before. Stays put at the earliest representable month.
    pub fn previous(&self) -> Self {
        self.first_day
            .checked_sub_months(Months::new(1))
            .map_or(*self, |first_day| Self { first_day })
    }

    /// The month after. Stays put at the latest representable month.
    pub fn next(&self) -> Self {
        self.first_day
            .checked_add_months(Months::new(1))
            .map_or(*self, |first_day| Self { first_day })
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year(), self.month())
    }
}

/// Income, expense and net balance over a set of transactions
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlySummary {
    pub income: i64,
    pub expense: i64,
    /// `income - expense`
    pub total: i64,
}

/// Income and expense recorded on a single day
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyTotals {
    pub income: i64,
    pub expense: i64,
}

impl DailyTotals {
    pub fn is_empty(&self) -> bool {
        self.income == 0 && self.expense == 0
    }
}

/// Sum of amounts for one category within a set of transactions
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryTotal {
    pub category_id: String,
    pub amount: i64,
    pub count: usize,
}

/// One position in a month's calendar grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CalendarCell {
    /// Empty slot before the first day of the month
    Padding,
    Day(NaiveDate),
}

impl CalendarCell {
    pub fn date(&self) -> Option<NaiveDate> {
        match self {
            CalendarCell::Padding => None,
            CalendarCell::Day(date) => Some(*date),
        }
    }
}

/// Layout of a month as Sunday-first, row-major cells.
///
/// There is no trailing padding, so `cells.len()` is
/// `first_weekday + days_in_month` and usually not a multiple of seven.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarGrid {
    pub month: YearMonth,
    /// Weekday of day 1 (0 = Sunday, 1 = Monday, etc.)
    pub first_weekday: u32,
    pub days_in_month: u32,
    pub cells: Vec<CalendarCell>,
}

impl CalendarGrid {
    /// Cells grouped into weeks of seven; the last week may be short
    pub fn weeks(&self) -> impl Iterator<Item = &[CalendarCell]> {
        self.cells.chunks(7)
    }
}

/// A calendar day together with its totals
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarDay {
    pub date: NaiveDate,
    pub totals: DailyTotals,
}

/// Grid cell paired with the day's totals
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CalendarEntry {
    Padding,
    Day(CalendarDay),
}

/// A month's calendar annotated with per-day totals
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarMonth {
    pub month: YearMonth,
    pub first_weekday: u32,
    pub entries: Vec<CalendarEntry>,
}

/// A transaction paired with how its category should be shown
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerEntry {
    pub transaction: Transaction,
    pub category: CategoryLabel,
}

/// Everything the month screen shows: the summary card, the calendar and the
/// list of entries (newest first).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthOverview {
    pub month: YearMonth,
    pub summary: MonthlySummary,
    pub calendar: CalendarMonth,
    pub entries: Vec<LedgerEntry>,
}
