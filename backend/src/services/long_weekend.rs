//! Long-weekend detection over a calendar year.
//!
//! A long weekend is a Friday–Sunday, Friday–Monday or Saturday–Monday run
//! that contains at least one public holiday. Windows overlap freely: a
//! Friday holiday yields both the three- and four-day window anchored on it.

use std::collections::{BTreeMap, HashSet};

use chrono::{Datelike, Duration, NaiveDate, Weekday};

use crate::{models::long_weekend::LongWeekendWindow, utils::time::days_of_year};

/// Finds every qualifying window anchored on a Friday or Saturday of `year`.
///
/// Windows are unique by `(start, end)` and returned in ascending order.
/// Holidays dated outside `year` have no effect, even on a late-December
/// window whose lookahead days fall in January.
pub fn scan(holidays: &HashSet<NaiveDate>, year: i32) -> Vec<LongWeekendWindow> {
    let holidays: HashSet<NaiveDate> = holidays
        .iter()
        .filter(|holiday| holiday.year() == year)
        .copied()
        .collect();
    if holidays.is_empty() {
        return Vec::new();
    }

    let mut windows = BTreeMap::new();
    let mut emit = |window: LongWeekendWindow| {
        windows.entry(window.key()).or_insert(window);
    };

    for day in days_of_year(year) {
        match day.weekday() {
            Weekday::Fri => {
                let (sat, sun, mon) = (offset(day, 1), offset(day, 2), offset(day, 3));
                if any_holiday(&holidays, &[day, sat, sun]) {
                    emit(LongWeekendWindow::new(day, sun));
                }
                if any_holiday(&holidays, &[day, sat, sun, mon]) {
                    emit(LongWeekendWindow::new(day, mon));
                }
            }
            Weekday::Sat => {
                let (sun, mon) = (offset(day, 1), offset(day, 2));
                if any_holiday(&holidays, &[day, sun, mon]) {
                    emit(LongWeekendWindow::new(day, mon));
                }
            }
            _ => {}
        }
    }

    windows.into_values().collect()
}

/// Picks the earliest window starting on or after `today`.
///
/// Ties on `start` go to the shorter window. `None` means nothing is left
/// this year, which is not an error.
pub fn select_next(windows: &[LongWeekendWindow], today: NaiveDate) -> Option<LongWeekendWindow> {
    windows
        .iter()
        .filter(|window| window.start >= today)
        .min_by_key(|window| window.key())
        .copied()
}

/// Orders windows by `(start, end)` for presentation.
pub fn sorted(mut windows: Vec<LongWeekendWindow>) -> Vec<LongWeekendWindow> {
    windows.sort_by_key(LongWeekendWindow::key);
    windows
}

fn any_holiday(holidays: &HashSet<NaiveDate>, days: &[NaiveDate]) -> bool {
    days.iter().any(|day| holidays.contains(day))
}

fn offset(day: NaiveDate, days: i64) -> NaiveDate {
    day + Duration::days(days)
}
