// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Week arithmetic for plannings and the grid header.

use crate::clock::format_display_date;
use crate::error::DomainError;
use time::{Date, Duration};

/// Returns the Monday of the week containing `date`.
///
/// Sunday belongs to the week that started six days earlier.
#[must_use]
pub fn monday_of(date: Date) -> Date {
    let offset: i64 = i64::from(date.weekday().number_days_from_monday());
    date.saturating_sub(Duration::days(offset))
}

/// Shifts a date by a whole number of weeks.
///
/// # Errors
///
/// Returns an error if the result falls outside the supported date range.
pub fn shift_weeks(date: Date, weeks: i64) -> Result<Date, DomainError> {
    date.checked_add(Duration::weeks(weeks))
        .ok_or_else(|| DomainError::DateArithmeticOverflow {
            operation: format!("shifting {date} by {weeks} week(s)"),
        })
}

/// The Monday-to-Friday window the grid header shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeekView {
    monday: Date,
    offset: i64,
}

impl WeekView {
    /// Creates the view for the week containing `today`, shifted by `offset` weeks.
    ///
    /// # Errors
    ///
    /// Returns an error if the shifted week is outside the supported date range.
    pub fn new(today: Date, offset: i64) -> Result<Self, DomainError> {
        let monday: Date = shift_weeks(monday_of(today), offset)?;
        Ok(Self { monday, offset })
    }

    /// The Monday this view starts on.
    #[must_use]
    pub const fn monday(&self) -> Date {
        self.monday
    }

    /// Weeks away from the current week.
    #[must_use]
    pub const fn offset(&self) -> i64 {
        self.offset
    }

    /// The previous week.
    ///
    /// # Errors
    ///
    /// Returns an error if the week is outside the supported date range.
    pub fn previous(&self) -> Result<Self, DomainError> {
        Ok(Self {
            monday: shift_weeks(self.monday, -1)?,
            offset: self.offset - 1,
        })
    }

    /// The next week.
    ///
    /// # Errors
    ///
    /// Returns an error if the week is outside the supported date range.
    pub fn next(&self) -> Result<Self, DomainError> {
        Ok(Self {
            monday: shift_weeks(self.monday, 1)?,
            offset: self.offset + 1,
        })
    }

    /// Monday through Friday.
    #[must_use]
    pub fn weekdays(&self) -> [Date; 5] {
        let mut days: [Date; 5] = [self.monday; 5];
        for (index, day) in (0_i64..).zip(days.iter_mut()) {
            *day = self.monday.saturating_add(Duration::days(index));
        }
        days
    }

    /// `DD/MM/YYYY - DD/MM/YYYY`, Monday to Friday.
    #[must_use]
    pub fn period_label(&self) -> String {
        let days: [Date; 5] = self.weekdays();
        format!(
            "{} - {}",
            format_display_date(days[0]),
            format_display_date(days[4])
        )
    }
}
