// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Error type for the validating constructors.
//!
//! Conversions between day numbers and calendar dates never fail; only
//! building a date from loose fields can.

/// Error type for all fallible operations in the crate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CalendarError {
    /// Western month outside `1..=12`.
    #[error("month must be in 1..=12, got {month}")]
    InvalidMonth { month: u8 },

    /// Western day outside the month.
    #[error("day {day} is out of range for {year}-{month:02} (1..={max})")]
    InvalidDay { year: i32, month: u8, day: u8, max: u8 },

    /// Time of day outside `00:00:00..24:00:00`.
    #[error("time of day {hour:02}:{minute:02}:{second} is out of range")]
    InvalidTime { hour: u8, minute: u8, second: f64 },

    /// Myanmar month index outside `0..=12`.
    #[error("Myanmar month index must be in 0..=12, got {index}")]
    InvalidMyanmarMonth { index: u8 },

    /// Month type other than 0 (Oo) or 1 (Hnaung).
    #[error("month type must be 0 or 1, got {index}")]
    InvalidMonthType { index: u8 },

    /// Moon phase outside `0..=3`.
    #[error("moon phase must be in 0..=3, got {index}")]
    InvalidMoonPhase { index: u8 },

    /// Weekday outside `0..=6`.
    #[error("weekday must be in 0..=6, got {index}")]
    InvalidWeekday { index: u8 },

    /// Year type outside `0..=2`.
    #[error("year type must be in 0..=2, got {index}")]
    InvalidYearType { index: u8 },

    /// Fortnight day that does not fit the requested moon phase.
    #[error("fortnight day {day} is out of range (1..={max})")]
    InvalidFortnightDay { day: u8, max: u8 },

    /// First Waso requested in a year without an intercalary month.
    #[error("Myanmar year {year} is not a watat year and has no first Waso")]
    NotWatatYear { year: i32 },

    /// Era table without any era.
    #[error("an era table needs at least one era")]
    EmptyEraTable,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_invalid_day() {
        let e = CalendarError::InvalidDay {
            year: 1752,
            month: 9,
            day: 31,
            max: 30,
        };
        assert_eq!(e.to_string(), "day 31 is out of range for 1752-09 (1..=30)");
    }

    #[test]
    fn error_not_watat_year() {
        let e = CalendarError::NotWatatYear { year: 1386 };
        assert_eq!(
            e.to_string(),
            "Myanmar year 1386 is not a watat year and has no first Waso"
        );
    }

    #[test]
    fn error_invalid_fortnight_day() {
        let e = CalendarError::InvalidFortnightDay { day: 16, max: 15 };
        assert_eq!(e.to_string(), "fortnight day 16 is out of range (1..=15)");
    }

    #[test]
    fn error_is_std_error() {
        fn assert_impl<T: std::error::Error>() {}
        assert_impl::<CalendarError>();
    }

    #[test]
    fn error_is_send_and_sync() {
        fn assert_impl<T: Send + Sync>() {}
        assert_impl::<CalendarError>();
    }
}
