// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! # Western calendar conversions
//!
//! Three reckonings are supported:
//!
//! | [`CalendarType`] | Rule |
//! |------------------|------|
//! | `English` | Julian before the transition day, Gregorian from it on |
//! | `Gregorian` | proleptic Gregorian |
//! | `Julian` | proleptic Julian |
//!
//! The English transition defaults to JDN 2 361 222, i.e. Thursday
//! 1752-09-14 (Gregorian), which followed Wednesday 1752-09-02 (Julian).
//! Any other transition can be configured with
//! [`WesternCalendar::with_gregorian_start`].
//!
//! Dates are counted in whole Julian Day Numbers; the time of day is a
//! fraction counted from noon, as Julian Days are.

use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime, Timelike};

use crate::error::CalendarError;
use crate::JulianDate;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Which rule governs leap years.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum CalendarType {
    /// Julian before the transition, Gregorian after.
    #[default]
    English = 0,
    /// Proleptic Gregorian.
    Gregorian = 1,
    /// Proleptic Julian.
    Julian = 2,
}

/// A western calendar: a leap-year rule plus the transition day used by
/// [`CalendarType::English`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct WesternCalendar {
    pub calendar_type: CalendarType,
    /// Julian Day Number of the first Gregorian day.  Only read in
    /// English mode.
    pub gregorian_start: i64,
}

impl WesternCalendar {
    /// First Gregorian day in Britain and its colonies (1752-09-14).
    pub const ENGLISH_GREGORIAN_START: i64 = 2_361_222;

    /// First Gregorian day in the papal bull (1582-10-15).
    pub const PAPAL_GREGORIAN_START: i64 = 2_299_161;

    /// The English calendar with the 1752 transition.
    pub const fn english() -> Self {
        Self {
            calendar_type: CalendarType::English,
            gregorian_start: Self::ENGLISH_GREGORIAN_START,
        }
    }

    /// The proleptic Gregorian calendar.
    pub const fn gregorian() -> Self {
        Self {
            calendar_type: CalendarType::Gregorian,
            gregorian_start: Self::ENGLISH_GREGORIAN_START,
        }
    }

    /// The proleptic Julian calendar.
    pub const fn julian() -> Self {
        Self {
            calendar_type: CalendarType::Julian,
            gregorian_start: Self::ENGLISH_GREGORIAN_START,
        }
    }

    /// Same calendar with another transition day.
    pub const fn with_gregorian_start(self, gregorian_start: i64) -> Self {
        Self {
            calendar_type: self.calendar_type,
            gregorian_start,
        }
    }

    /// True if an instant at `jd` is reckoned with the Julian rule.
    #[inline]
    fn reads_as_julian(&self, jd: f64) -> bool {
        match self.calendar_type {
            CalendarType::Julian => true,
            CalendarType::Gregorian => false,
            CalendarType::English => jd < self.gregorian_start as f64,
        }
    }

    /// Julian Day Number of a calendar date.
    ///
    /// The arithmetic is total: out-of-range months and days are carried
    /// into neighbouring months.  In English mode a Gregorian result before
    /// the transition is recomputed with the Julian rule, and the dropped
    /// days of the transition month collapse onto the transition day.
    pub fn to_day_number(&self, year: i32, month: u8, day: u8) -> i64 {
        let month = i64::from(month);
        let a = (14 - month).div_euclid(12);
        let y = i64::from(year) + 4800 - a;
        let m = month + 12 * a - 3;
        let base = i64::from(day) + (153 * m + 2).div_euclid(5) + 365 * y + y.div_euclid(4);
        let gregorian = base - y.div_euclid(100) + y.div_euclid(400) - 32_045;
        let julian = base - 32_083;

        match self.calendar_type {
            CalendarType::Gregorian => gregorian,
            CalendarType::Julian => julian,
            CalendarType::English if gregorian < self.gregorian_start => {
                julian.min(self.gregorian_start)
            }
            CalendarType::English => gregorian,
        }
    }

    /// Number of days in `month` of `year`.
    ///
    /// Counted as the distance between the first days of consecutive
    /// months, so the transition month is short (September 1752 has 19 days
    /// in the English calendar).
    pub fn month_length(&self, year: i32, month: u8) -> Result<u8, CalendarError> {
        if !(1..=12).contains(&month) {
            return Err(CalendarError::InvalidMonth { month });
        }
        let (next_year, next_month) = if month == 12 {
            (year.saturating_add(1), 1)
        } else {
            (year, month + 1)
        };
        let length =
            self.to_day_number(next_year, next_month, 1) - self.to_day_number(year, month, 1);
        Ok(length.clamp(0, 31) as u8)
    }

    /// Last day of `month` of `year`, as numbered on the calendar.
    ///
    /// Differs from [`month_length`](Self::month_length) only in the
    /// transition month (September 1752 ends on the 30th).
    pub fn last_day_of_month(&self, year: i32, month: u8) -> Result<u8, CalendarError> {
        let first = self.to_day_number(year, month, 1);
        let length = i64::from(self.month_length(year, month)?);
        let last = JulianDate::from_day_number(first + length - 1);
        Ok(WesternDate::from_julian(last, *self).day)
    }

    /// True if `year-month-day` names a day that exists in this calendar.
    fn day_exists(&self, year: i32, month: u8, day: u8) -> bool {
        let jdn = self.to_day_number(year, month, day);
        let back = WesternDate::from_julian(JulianDate::from_day_number(jdn), *self);
        (back.year, back.month, back.day) == (year, month, day)
    }
}

impl Default for WesternCalendar {
    fn default() -> Self {
        Self::english()
    }
}

/// Fraction of a day elapsed since noon.
///
/// Noon is `0.0`; midnight before it is `-0.5`.
#[inline]
pub fn time_to_day_fraction(hour: u8, minute: u8, second: f64) -> f64 {
    (f64::from(hour) - 12.0) / 24.0 + f64::from(minute) / 1440.0 + second / 86_400.0
}

/// Largest Julian Day magnitude [`WesternDate::from_julian`] converts.
pub const MAX_JULIAN_DAY: f64 = 7.8e11;

/// A western calendar date with time of day.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct WesternDate {
    pub year: i32,
    /// `1..=12`.
    pub month: u8,
    pub day: u8,
    /// `0..=23`.
    pub hour: u8,
    /// `0..=59`.
    pub minute: u8,
    /// `[0, 60)`.
    pub second: f64,
}

impl WesternDate {
    /// Midnight of a validated date in `calendar`.
    pub fn new(
        year: i32,
        month: u8,
        day: u8,
        calendar: WesternCalendar,
    ) -> Result<Self, CalendarError> {
        let max = calendar.last_day_of_month(year, month)?;
        if day == 0 || day > max || !calendar.day_exists(year, month, day) {
            return Err(CalendarError::InvalidDay {
                year,
                month,
                day,
                max,
            });
        }
        Ok(Self {
            year,
            month,
            day,
            hour: 0,
            minute: 0,
            second: 0.0,
        })
    }

    /// Same date at a validated time of day.
    pub fn with_time(self, hour: u8, minute: u8, second: f64) -> Result<Self, CalendarError> {
        if hour > 23 || minute > 59 || !(0.0..60.0).contains(&second) {
            return Err(CalendarError::InvalidTime {
                hour,
                minute,
                second,
            });
        }
        Ok(Self {
            hour,
            minute,
            second,
            ..self
        })
    }

    /// Calendar date and time of day of a Julian Day instant.
    ///
    /// Instants beyond ±[`MAX_JULIAN_DAY`] are clamped to it, which keeps
    /// the year within `i32`.
    pub fn from_julian(jd: JulianDate, calendar: WesternCalendar) -> Self {
        let jd = jd.value().clamp(-MAX_JULIAN_DAY, MAX_JULIAN_DAY);
        let j = (jd + 0.5).floor();
        let mut fraction = jd + 0.5 - j;
        let j = j as i64;

        let (year, month, day) = if calendar.reads_as_julian(jd) {
            let b = j + 1524;
            let c = ((b as f64 - 122.1) / 365.25).floor() as i64;
            let f = (365.25 * c as f64).floor() as i64;
            let e = ((b - f) as f64 / 30.6001).floor() as i64;
            let m = if e > 13 { e - 13 } else { e - 1 };
            let d = b - f - (30.6001 * e as f64).floor() as i64;
            let y = if m < 3 { c - 4715 } else { c - 4716 };
            (y, m, d)
        } else {
            let j = j - 1_721_119;
            let centuries = (4 * j - 1).div_euclid(146_097);
            let j = 4 * j - 1 - 146_097 * centuries;
            let d = j.div_euclid(4);
            let years = (4 * d + 3).div_euclid(1461);
            let d = (4 * d + 3 - 1461 * years + 4).div_euclid(4);
            let m = (5 * d - 3).div_euclid(153);
            let d = (5 * d - 3 - 153 * m + 5).div_euclid(5);
            let y = 100 * centuries + years;
            if m < 10 {
                (y, m + 3, d)
            } else {
                (y + 1, m - 9, d)
            }
        };

        fraction *= 24.0;
        let hour = fraction.floor();
        fraction = (fraction - hour) * 60.0;
        let minute = fraction.floor();
        let second = (fraction - minute) * 60.0;

        Self {
            year: year as i32,
            month: month as u8,
            day: day as u8,
            hour: hour as u8,
            minute: minute as u8,
            second,
        }
    }

    /// Julian Day Number of the date, ignoring the time of day.
    #[inline]
    pub fn to_day_number(&self, calendar: WesternCalendar) -> i64 {
        calendar.to_day_number(self.year, self.month, self.day)
    }

    /// Julian Day instant of the date and time of day.
    pub fn to_julian(&self, calendar: WesternCalendar) -> JulianDate {
        let jdn = self.to_day_number(calendar);
        JulianDate::new(jdn as f64 + time_to_day_fraction(self.hour, self.minute, self.second))
    }

    /// The fields read as a proleptic Gregorian `chrono` date-time, if
    /// chrono can represent them.
    pub fn to_naive_datetime(&self) -> Option<NaiveDateTime> {
        let date = NaiveDate::from_ymd_opt(self.year, u32::from(self.month), u32::from(self.day))?;
        let whole = self.second.floor();
        let nanos = (((self.second - whole) * 1e9).round() as u32).min(999_999_999);
        let time = NaiveTime::from_hms_nano_opt(
            u32::from(self.hour),
            u32::from(self.minute),
            whole as u32,
            nanos,
        )?;
        Some(date.and_time(time))
    }
}

impl From<NaiveDateTime> for WesternDate {
    /// Proleptic Gregorian fields of a `chrono` date-time.
    fn from(dt: NaiveDateTime) -> Self {
        Self {
            year: dt.year(),
            month: dt.month() as u8,
            day: dt.day() as u8,
            hour: dt.hour() as u8,
            minute: dt.minute() as u8,
            second: f64::from(dt.second())
                + f64::from(dt.nanosecond().min(999_999_999)) * 1e-9,
        }
    }
}
