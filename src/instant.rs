// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Julian-day instants parameterised by a day-count scale.
//!
//! [`Time<S>`] stores a single [`Days`] quantity whose origin is fixed by
//! the compile-time marker `S: TimeScale`.  Every calendar in this crate
//! pivots on the Julian Day axis, so each scale only has to describe how its
//! own count maps onto an absolute Julian Day.
//!
//! The calendars here are civil calendars: no ΔT or time-zone correction is
//! applied anywhere.  A Julian Day's fractional part is simply the time of
//! day counted from noon.

use chrono::{DateTime, Utc};
use qtty::{Day, Days, Second, Seconds};
use std::fmt;
use std::marker::PhantomData;
use std::ops::{Add, Sub};

#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Julian Day of 1970-01-01T00:00:00.
const UNIX_EPOCH: Days = Days::new(2_440_587.5);

// ═══════════════════════════════════════════════════════════════════════════
// TimeScale trait
// ═══════════════════════════════════════════════════════════════════════════

/// Marker trait for day-count scales.
///
/// A scale is a constant offset from the Julian Day: it names its label and
/// converts its own count to and from an absolute Julian Day.
pub trait TimeScale: Copy + fmt::Debug + PartialEq + PartialOrd + 'static {
    /// Prefix printed by `Display`.
    const LABEL: &'static str;

    /// Absolute Julian Day of a count on this scale.
    fn to_julian_day(value: Days) -> Days;

    /// Count on this scale of an absolute Julian Day.
    fn from_julian_day(jd: Days) -> Days;
}

// ═══════════════════════════════════════════════════════════════════════════
// Time<S>
// ═══════════════════════════════════════════════════════════════════════════

/// A point on day-count scale `S`.
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd)]
pub struct Time<S: TimeScale> {
    days: Days,
    scale: PhantomData<S>,
}

impl<S: TimeScale> Time<S> {
    /// Instant at `value` days on scale `S`.
    #[inline]
    pub const fn new(value: f64) -> Self {
        Self {
            days: Days::new(value),
            scale: PhantomData,
        }
    }

    /// Day count as a quantity.
    #[inline]
    pub const fn quantity(&self) -> Days {
        self.days
    }

    /// Day count as a bare number.
    #[inline]
    pub const fn value(&self) -> f64 {
        self.days.value()
    }

    /// Absolute Julian Day of this instant.
    #[inline]
    pub fn julian_day(&self) -> Days {
        S::to_julian_day(self.days)
    }

    /// Instant at an absolute Julian Day.
    #[inline]
    pub fn from_julian_day(jd: Days) -> Self {
        let days = S::from_julian_day(jd);
        Self {
            days,
            scale: PhantomData,
        }
    }

    /// Same instant counted on scale `T`.
    #[inline]
    pub fn to<T: TimeScale>(&self) -> Time<T> {
        Time::from_julian_day(self.julian_day())
    }

    /// The instant as a UTC timestamp.
    ///
    /// `None` for non-finite values or values outside chrono's range.
    pub fn to_utc(&self) -> Option<DateTime<Utc>> {
        let elapsed = (self.julian_day() - UNIX_EPOCH).to::<Second>().value();
        if !elapsed.is_finite() {
            return None;
        }
        let whole = elapsed.floor();
        let nanos = ((elapsed - whole) * 1e9) as u32;
        DateTime::from_timestamp(whole as i64, nanos.min(999_999_999))
    }

    /// The instant of a UTC timestamp.
    pub fn from_utc(datetime: DateTime<Utc>) -> Self {
        let whole = Seconds::new(datetime.timestamp() as f64);
        let fraction = Seconds::new(f64::from(datetime.timestamp_subsec_nanos()) * 1e-9);
        Self::from_julian_day(UNIX_EPOCH + whole.to::<Day>() + fraction.to::<Day>())
    }
}

impl<S: TimeScale> fmt::Display for Time<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {:.5}", S::LABEL, self.value())
    }
}

// Serialized as the bare day count.
#[cfg(feature = "serde")]
impl<S: TimeScale> Serialize for Time<S> {
    fn serialize<Ser: Serializer>(&self, serializer: Ser) -> Result<Ser::Ok, Ser::Error> {
        self.value().serialize(serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de, S: TimeScale> Deserialize<'de> for Time<S> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        f64::deserialize(deserializer).map(Self::new)
    }
}

impl<S: TimeScale> Add<Days> for Time<S> {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Days) -> Self {
        Self::new((self.days + rhs).value())
    }
}

impl<S: TimeScale> Sub<Days> for Time<S> {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Days) -> Self {
        Self::new((self.days - rhs).value())
    }
}

/// Days elapsed between two instants on the same scale.
impl<S: TimeScale> Sub for Time<S> {
    type Output = Days;

    #[inline]
    fn sub(self, rhs: Self) -> Days {
        self.days - rhs.days
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scales::{JD, MJD};
    use chrono::TimeZone;

    #[test]
    fn unix_epoch_is_midnight_julian_day() {
        let epoch = Utc.with_ymd_and_hms(1970, 1, 1, 0, 0, 0).unwrap();
        assert_eq!(Time::<JD>::from_utc(epoch).value(), 2_440_587.5);
        assert_eq!(Time::<JD>::new(2_440_587.5).to_utc(), Some(epoch));
    }

    #[test]
    fn noon_of_new_year_1900() {
        let noon = Utc.with_ymd_and_hms(1900, 1, 1, 12, 0, 0).unwrap();
        let jd = Time::<JD>::from_utc(noon);
        assert!((jd.value() - 2_415_021.0).abs() < 1e-9);
    }

    #[test]
    fn utc_round_trip_within_float_resolution() {
        let datetime = Utc.with_ymd_and_hms(2023, 4, 17, 6, 30, 15).unwrap();
        let back = Time::<JD>::from_utc(datetime).to_utc().expect("in range");
        let error_us = (back - datetime).num_microseconds().unwrap();
        assert!(error_us.abs() < 100, "round trip error: {error_us} us");
    }

    #[test]
    fn out_of_range_values_have_no_utc() {
        assert!(Time::<JD>::new(f64::NAN).to_utc().is_none());
        assert!(Time::<JD>::new(f64::NEG_INFINITY).to_utc().is_none());
        assert!(Time::<JD>::new(1e15).to_utc().is_none());
    }

    #[test]
    fn scales_share_the_julian_day() {
        let mjd = Time::<MJD>::new(15_021.0);
        let jd = mjd.to::<JD>();
        assert_eq!(jd.value(), 2_415_021.5);
        assert_eq!(jd.julian_day(), mjd.julian_day());
        assert_eq!(jd.to::<MJD>(), mjd);
    }

    #[test]
    fn day_arithmetic() {
        let new_year = Time::<JD>::new(2_460_052.0);
        let next = new_year + Days::new(385.0);
        assert_eq!(next.value(), 2_460_437.0);
        assert_eq!(next - new_year, Days::new(385.0));
        assert_eq!((next - Days::new(0.5)).value(), 2_460_436.5);
        assert!(new_year < next);
    }

    #[test]
    fn display_is_labelled() {
        assert_eq!(Time::<JD>::new(2_415_021.0).to_string(), "Julian Day: 2415021.00000");
        assert_eq!(Time::<MJD>::new(15_020.5).to_string(), "MJD 15020.50000");
    }
}
