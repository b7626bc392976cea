// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Myanmar Calendar Module
//!
//! Conversion between Julian Day Numbers, Myanmar lunisolar dates and
//! western (English, Gregorian, Julian) dates, plus the astrological
//! classification of Myanmar days.
//!
//! # Core types
//!
//! - [`Time<S>`] — an instant on the day-count scale `S: TimeScale`.
//! - [`JulianDate`] — type alias for `Time<JD>`, the pivot of every conversion.
//! - [`MyanmarDate`] — a day of the Myanmar calendar.
//! - [`MyanmarYear`] — classification of a year (common, little or big watat).
//! - [`WesternDate`] / [`WesternCalendar`] — western dates and the calendar
//!   rules they are read under.
//! - [`AstroDay`] — astrological indicators of a Myanmar day.
//! - [`EraTable`] — the historical eras and their exception tables.
//!
//! # Example
//!
//! ```rust
//! use mmcal::{MyanmarDate, MyanmarMonth, WesternCalendar, WesternDate};
//!
//! let calendar = WesternCalendar::english();
//! let new_year = WesternDate::new(2023, 4, 17, calendar).unwrap();
//! let date = MyanmarDate::from_day_number(new_year.to_day_number(calendar));
//!
//! assert_eq!(date.year, 1385);
//! assert_eq!(date.month, MyanmarMonth::Tagu);
//! ```
//!
//! # Conventions
//!
//! A Julian Day Number names the civil day that contains noon of that
//! Julian Day.  Weekdays count from Saturday (`0`) to Friday (`6`).  All
//! conversions are pure; only the `*::new`/`try_*` constructors validate
//! their input and return [`CalendarError`].

pub mod astro;
pub mod era;
mod error;
pub(crate) mod instant;
mod julian_date_ext;
pub mod myanmar;
pub(crate) mod scales;
pub mod search;
pub mod watat;
mod weekday;
pub mod western;
pub mod year;

// ── Re-exports ────────────────────────────────────────────────────────────

pub use astro::{AstroDay, Mahabote, Nagahle, Nakhat, Pyathada};
pub use era::{Era, EraId, EraTable};
pub use error::CalendarError;
pub use instant::{Time, TimeScale};
pub use myanmar::{myanmar_to_day_number, MonthType, MoonPhase, MyanmarDate, MyanmarMonth};
pub use scales::{JD, MJD};
pub use search::{search_by_key, search_sorted};
pub use watat::{check_watat, Watat, LUNAR_MONTH, SOLAR_YEAR};
pub use weekday::Weekday;
pub use western::{time_to_day_fraction, CalendarType, WesternCalendar, WesternDate};
pub use year::{MyanmarYear, YearType};

// ── Type aliases ──────────────────────────────────────────────────────────

/// An instant on the Julian Day axis; integer values are noon.
pub type JulianDate = Time<JD>;

/// An instant counted in Modified Julian Days (`JD − 2 400 000.5`).
pub type ModifiedJulianDate = Time<MJD>;
