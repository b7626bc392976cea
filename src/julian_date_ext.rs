// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Julian Day (`Time<JD>`) specific extensions.

use chrono::{Datelike, NaiveDate};
use qtty::Days;

use super::instant::Time;
use super::scales::{JD, MJD};
use super::weekday::Weekday;

/// Julian Day Number of 0000-12-31 (proleptic Gregorian), the day before
/// chrono's day 1 of the common era.
const CE_DAY_ZERO: i64 = 1_721_425;

/// Rounds half-way values towards positive infinity.
///
/// All calendar formulas in this crate snap to day numbers this way, so
/// `-0.5` becomes `0` and `2.5` becomes `3`.
#[inline]
pub(crate) fn round_half_up(x: f64) -> i64 {
    (x + 0.5).floor() as i64
}

impl Time<JD> {
    /// Beginning of Myanmar year 0 (JD 1 954 168.050 623).
    pub const MYANMAR_EPOCH: Self = Self::new(1_954_168.050_623);

    /// Build the instant at noon of an integer Julian Day Number.
    #[inline]
    pub fn from_day_number(jdn: i64) -> Self {
        Self::new(jdn as f64)
    }

    /// Julian Day Number of the civil day containing this instant.
    ///
    /// Day numbers change at midnight, half a day before the Julian Day
    /// changes at noon.
    #[inline]
    pub fn day_number(&self) -> i64 {
        round_half_up(self.value())
    }

    /// Fraction of the civil day elapsed since midnight, in `[0, 1)`.
    #[inline]
    pub fn day_fraction(&self) -> f64 {
        let shifted = self.value() + 0.5;
        shifted - shifted.floor()
    }

    /// Day of the week of the civil day containing this instant.
    #[inline]
    pub fn weekday(&self) -> Weekday {
        Weekday::from_day_number(self.day_number())
    }

    /// Noon of a proleptic Gregorian `chrono` date.
    pub fn from_naive_date(date: NaiveDate) -> Self {
        Self::from_day_number(i64::from(date.num_days_from_ce()) + CE_DAY_ZERO)
    }

    /// Proleptic Gregorian `chrono` date of the civil day containing this
    /// instant, if chrono can represent it.
    pub fn to_naive_date(&self) -> Option<NaiveDate> {
        let days = i32::try_from(self.day_number() - CE_DAY_ZERO).ok()?;
        NaiveDate::from_num_days_from_ce_opt(days)
    }

    /// Days elapsed since the beginning of Myanmar year 0.
    #[inline]
    pub fn days_since_myanmar_epoch(&self) -> Days {
        *self - Self::MYANMAR_EPOCH
    }

    /// Same instant as a Modified Julian Day.
    #[inline]
    pub fn to_mjd(&self) -> Time<MJD> {
        self.to::<MJD>()
    }
}

impl From<NaiveDate> for Time<JD> {
    fn from(date: NaiveDate) -> Self {
        Self::from_naive_date(date)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_half_up_matches_day_boundaries() {
        assert_eq!(round_half_up(2.5), 3);
        assert_eq!(round_half_up(2.49), 2);
        assert_eq!(round_half_up(-0.5), 0);
        assert_eq!(round_half_up(-0.51), -1);
    }

    #[test]
    fn day_number_switches_at_midnight() {
        assert_eq!(Time::<JD>::new(2_451_544.5).day_number(), 2_451_545);
        assert_eq!(Time::<JD>::new(2_451_545.49).day_number(), 2_451_545);
        assert_eq!(Time::<JD>::new(2_451_545.5).day_number(), 2_451_546);
    }

    #[test]
    fn day_fraction_counts_from_midnight() {
        assert!((Time::<JD>::new(2_451_545.0).day_fraction() - 0.5).abs() < 1e-9);
        assert!((Time::<JD>::new(2_451_545.25).day_fraction() - 0.75).abs() < 1e-9);
        assert!(Time::<JD>::new(2_451_544.5).day_fraction().abs() < 1e-9);
    }

    #[test]
    fn weekday_of_j2000_is_saturday() {
        assert_eq!(Time::<JD>::new(2_451_545.0).weekday(), Weekday::Saturday);
    }

    #[test]
    fn naive_date_roundtrip() {
        let date = NaiveDate::from_ymd_opt(1900, 1, 1).unwrap();
        let jd = Time::<JD>::from(date);
        assert_eq!(jd.day_number(), 2_415_021);
        assert_eq!(jd.to_naive_date(), Some(date));
    }

    #[test]
    fn naive_date_out_of_range_is_none() {
        assert!(Time::<JD>::from_day_number(i64::from(i32::MAX) * 4).to_naive_date().is_none());
    }

    #[test]
    fn myanmar_epoch_offset() {
        let jd = Time::<JD>::new(1_954_169.050_623);
        assert!((jd.days_since_myanmar_epoch() - Days::new(1.0)).abs() < Days::new(1e-9));
    }

    #[test]
    fn mjd_conversion() {
        let mjd = Time::<JD>::new(2_451_545.0).to_mjd();
        assert!((mjd.value() - 51_544.5).abs() < 1e-9);
    }
}
