//! Calendar domain logic for the ledger.
//!
//! [`build`] lays a month out as Sunday-first cells: one padding cell per
//! weekday before day 1, then one cell per day of the month. The final week is
//! not padded out. The layout carries no amounts; [`annotate`] pairs each day
//! with its [`daily_totals`](crate::domain::aggregation::daily_totals) for the
//! calendar view.
//!
//! [`CalendarService`] keeps the month being viewed and the selected day.

use chrono::{Datelike, Local, NaiveDate};
use log::debug;
use shared::{CalendarCell, CalendarDay, CalendarEntry, CalendarGrid, CalendarMonth, Transaction, YearMonth};

use crate::domain::aggregation::{daily_totals, transactions_in_month};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CalendarError {
    #[error("Invalid month: {year}-{month}. Month must be between 1 and 12")]
    InvalidMonth { year: i32, month: u32 },
}

/// Lay out the given month
pub fn build(year: i32, month: u32) -> Result<CalendarGrid, CalendarError> {
    YearMonth::new(year, month)
        .map(build_month)
        .ok_or(CalendarError::InvalidMonth { year, month })
}

/// Lay out an already validated month
pub fn build_month(month: YearMonth) -> CalendarGrid {
    let first_weekday = first_weekday(month);
    let days_in_month = days_in_month(month);

    debug!(
        "Building calendar for {}: first weekday {}, {} days",
        month, first_weekday, days_in_month
    );

    let mut cells = Vec::with_capacity((first_weekday + days_in_month) as usize);
    cells.extend((0..first_weekday).map(|_| CalendarCell::Padding));
    cells.extend(
        (1..=days_in_month)
            .filter_map(|day| month.day(day))
            .map(CalendarCell::Day),
    );

    CalendarGrid {
        month,
        first_weekday,
        days_in_month,
        cells,
    }
}

/// Weekday of the first day of the month (0 = Sunday, 1 = Monday, etc.)
pub fn first_weekday(month: YearMonth) -> u32 {
    month.first_day().weekday().num_days_from_sunday()
}

/// Number of days in the month: the day before the first of the next month
pub fn days_in_month(month: YearMonth) -> u32 {
    month
        .next()
        .first_day()
        .pred_opt()
        .map(|last_day| last_day.day())
        .unwrap_or(31)
}

/// Pair every day cell of `grid` with that day's totals
pub fn annotate<'a, I>(grid: &CalendarGrid, transactions: I) -> CalendarMonth
where
    I: IntoIterator<Item = &'a Transaction>,
{
    let in_month = transactions_in_month(transactions, grid.month);

    let entries = grid
        .cells
        .iter()
        .map(|cell| match cell {
            CalendarCell::Padding => CalendarEntry::Padding,
            CalendarCell::Day(date) => CalendarEntry::Day(CalendarDay {
                date: *date,
                totals: daily_totals(in_month.iter().copied(), *date),
            }),
        })
        .collect();

    CalendarMonth {
        month: grid.month,
        first_weekday: grid.first_weekday,
        entries,
    }
}

/// Tracks which month is on screen and which day is selected.
///
/// The selected day is independent of the viewed month, so moving to another
/// month keeps the selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarService {
    focus: YearMonth,
    selected: NaiveDate,
}

impl CalendarService {
    /// Start on `today`'s month with `today` selected
    pub fn new(today: NaiveDate) -> Self {
        Self {
            focus: YearMonth::from_date(today),
            selected: today,
        }
    }

    pub fn focus(&self) -> YearMonth {
        self.focus
    }

    pub fn selected(&self) -> NaiveDate {
        self.selected
    }

    pub fn set_focus(&mut self, year: i32, month: u32) -> Result<YearMonth, CalendarError> {
        let focus = YearMonth::new(year, month).ok_or(CalendarError::InvalidMonth { year, month })?;
        self.focus = focus;
        Ok(focus)
    }

    pub fn navigate_previous_month(&mut self) -> YearMonth {
        self.focus = self.focus.previous();
        self.focus
    }

    pub fn navigate_next_month(&mut self) -> YearMonth {
        self.focus = self.focus.next();
        self.focus
    }

    pub fn select_day(&mut self, date: NaiveDate) {
        self.selected = date;
    }

    pub fn is_selected(&self, date: NaiveDate) -> bool {
        self.selected == date
    }

    /// Layout of the month currently in focus
    pub fn grid(&self) -> CalendarGrid {
        build_month(self.focus)
    }
}

impl Default for CalendarService {
    fn default() -> Self {
        Self::new(Local::now().date_naive())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::date;
    use shared::{DailyTotals, TransactionType};

    fn month(year: i32, month: u32) -> YearMonth {
        YearMonth::new(year, month).unwrap()
    }

    fn expense(amount: i64, date: NaiveDate) -> Transaction {
        Transaction {
            id: format!("ex-{}-{}", date, amount),
            transaction_type: TransactionType::Expense,
            amount,
            date,
            category_id: "exp-1".to_string(),
            memo: None,
        }
    }

    #[test]
    fn test_days_in_month() {
        assert_eq!(days_in_month(month(2025, 1)), 31);
        assert_eq!(days_in_month(month(2025, 4)), 30);
        assert_eq!(days_in_month(month(2025, 2)), 28);
        assert_eq!(days_in_month(month(2024, 2)), 29);
        assert_eq!(days_in_month(month(1900, 2)), 28);
        assert_eq!(days_in_month(month(2000, 2)), 29);
        assert_eq!(days_in_month(month(2024, 12)), 31);
    }

    #[test]
    fn test_first_weekday() {
        // 2024-03-01 was a Friday, 2024-09-01 a Sunday
        assert_eq!(first_weekday(month(2024, 3)), 5);
        assert_eq!(first_weekday(month(2024, 9)), 0);
        // 2025-06-01 was a Sunday, 2025-02-01 a Saturday
        assert_eq!(first_weekday(month(2025, 6)), 0);
        assert_eq!(first_weekday(month(2025, 2)), 6);
    }

    #[test]
    fn test_build_grid_length_has_no_trailing_padding() {
        for (y, m) in [(2024, 2), (2024, 3), (2024, 9), (2025, 2), (2026, 10)] {
            let grid = build(y, m).unwrap();
            let expected = first_weekday(month(y, m)) + days_in_month(month(y, m));
            assert_eq!(grid.cells.len(), expected as usize, "{}-{}", y, m);
        }
    }

    #[test]
    fn test_build_leap_february() {
        // 2024-02-01 was a Thursday
        let grid = build(2024, 2).unwrap();
        assert_eq!(grid.first_weekday, 4);
        assert_eq!(grid.days_in_month, 29);
        assert_eq!(grid.cells.len(), 33);
        assert!(grid.cells[..4].iter().all(|c| *c == CalendarCell::Padding));
        assert_eq!(grid.cells[4], CalendarCell::Day(date(2024, 2, 1)));
        assert_eq!(grid.cells.last(), Some(&CalendarCell::Day(date(2024, 2, 29))));
    }

    #[test]
    fn test_build_month_starting_sunday_has_no_padding() {
        let grid = build(2024, 9).unwrap();
        assert_eq!(grid.cells.first(), Some(&CalendarCell::Day(date(2024, 9, 1))));
        assert_eq!(grid.cells.len(), 30);
        assert_eq!(grid.weeks().count(), 5);
        assert_eq!(grid.weeks().last().map(|w| w.len()), Some(2));
    }

    #[test]
    fn test_build_days_are_in_order() {
        let grid = build(2024, 3).unwrap();
        let days: Vec<u32> = grid.cells.iter().filter_map(|c| c.date()).map(|d| d.day()).collect();
        assert_eq!(days, (1..=31).collect::<Vec<u32>>());
    }

    #[test]
    fn test_build_rejects_invalid_month() {
        assert_eq!(
            build(2024, 13),
            Err(CalendarError::InvalidMonth { year: 2024, month: 13 })
        );
        assert!(build(2024, 0).is_err());
    }

    #[test]
    fn test_annotate_pairs_days_with_totals() {
        let transactions = vec![
            expense(1200, date(2024, 3, 5)),
            expense(300, date(2024, 3, 5)),
            expense(999, date(2024, 4, 5)),
        ];
        let grid = build(2024, 3).unwrap();
        let calendar = annotate(&grid, &transactions);

        assert_eq!(calendar.entries.len(), grid.cells.len());
        assert_eq!(calendar.entries[0], CalendarEntry::Padding);

        let day_5 = calendar
            .entries
            .iter()
            .find_map(|e| match e {
                CalendarEntry::Day(day) if day.date == date(2024, 3, 5) => Some(*day),
                _ => None,
            })
            .unwrap();
        assert_eq!(day_5.totals, DailyTotals { income: 0, expense: 1500 });

        let total_expense: i64 = calendar
            .entries
            .iter()
            .filter_map(|e| match e {
                CalendarEntry::Day(day) => Some(day.totals.expense),
                CalendarEntry::Padding => None,
            })
            .sum();
        assert_eq!(total_expense, 1500);
    }

    #[test]
    fn test_navigation() {
        let mut service = CalendarService::new(date(2025, 6, 13));
        assert_eq!(service.focus(), month(2025, 6));

        assert_eq!(service.navigate_previous_month(), month(2025, 5));
        assert_eq!(service.navigate_next_month(), month(2025, 6));

        service.set_focus(2025, 1).unwrap();
        assert_eq!(service.navigate_previous_month(), month(2024, 12));

        service.set_focus(2025, 12).unwrap();
        assert_eq!(service.navigate_next_month(), month(2026, 1));
    }

    #[test]
    fn test_set_focus_rejects_invalid_month() {
        let mut service = CalendarService::new(date(2025, 6, 13));
        assert!(service.set_focus(2025, 13).is_err());
        assert!(service.set_focus(2025, 0).is_err());
        assert_eq!(service.focus(), month(2025, 6));
    }

    #[test]
    fn test_selection_survives_navigation() {
        let mut service = CalendarService::new(date(2025, 6, 13));
        service.select_day(date(2025, 6, 20));
        service.navigate_next_month();

        assert!(service.is_selected(date(2025, 6, 20)));
        assert_eq!(service.grid().month, month(2025, 7));
    }
}
