// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! # Watat (intercalary month) determination
//!
//! A Myanmar year is *watat* when the accumulated drift between twelve mean
//! lunations and one mean solar year forces a second Waso.  The drift of
//! year `my` is the *excess days*:
//!
//! ```text
//! excess = (SY · (my + 3739)) mod LM
//! ```
//!
//! with `SY` and `LM` the mean solar year and synodic month of the
//! Myanmar astronomical tradition.  From ME 1217 on a year is watat when
//! the excess passes an era-specific threshold; before that the 19-year
//! Metonic cycle decides (remainders 2, 5, 7, 10, 13, 15, 18).  Each era's
//! exception tables then override the result where the historical record
//! disagrees with the formula.

use qtty::Days;

use crate::era::EraTable;
use crate::julian_date_ext::round_half_up;
use crate::{JulianDate, Time, JD};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Mean solar year, 1 577 917 828 / 4 320 000 days (≈ 365.258 756 5).
pub const SOLAR_YEAR: Days = Days::new(1_577_917_828.0 / 4_320_000.0);

/// Mean synodic month, 1 577 917 828 / 53 433 336 days (≈ 29.530 587 95).
pub const LUNAR_MONTH: Days = Days::new(1_577_917_828.0 / 53_433_336.0);

/// Watat status of a Myanmar year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Watat {
    /// Julian Day Number of the full moon of (second) Waso.
    ///
    /// Only reliable for watat years; for common years it is the estimate
    /// the year classifier discards.
    pub full_moon: i64,
    /// Whether the year has an intercalary month.
    pub is_watat: bool,
}

impl Watat {
    /// Full moon day as a Julian Day instant at noon.
    #[inline]
    pub fn full_moon_date(&self) -> JulianDate {
        JulianDate::from_day_number(self.full_moon)
    }
}

/// Metonic-cycle watat rule of the era of the kings.
#[inline]
fn metonic_watat(year: i32) -> bool {
    (i64::from(year) * 7 + 2).rem_euclid(19) >= 12
}

impl EraTable {
    /// Watat status and (second) Waso full moon of Myanmar year `year`.
    pub fn check_watat(&self, year: i32) -> Watat {
        let era = self.resolve(year);
        let sy = SOLAR_YEAR.value();
        let lm = LUNAR_MONTH.value();
        let months = f64::from(era.threshold_months);

        let threshold = (sy / 12.0 - lm) * (12.0 - months);
        let mut excess = (sy * (i64::from(year) + 3739) as f64) % lm;
        if excess < threshold {
            excess += lm;
        }

        let mut full_moon = round_half_up(
            sy * f64::from(year) + Time::<JD>::MYANMAR_EPOCH.value() - excess + 4.5 * lm
                + era.watat_offset,
        );

        let mut is_watat = if era.id.major() >= 2 {
            excess >= lm - (sy / 12.0 - lm) * months
        } else {
            metonic_watat(year)
        };

        if let Some(tabulated) = era.watat_override(year) {
            tracing::trace!(year, tabulated, "watat exception applied");
            is_watat = tabulated;
        }
        if is_watat {
            if let Some(adjustment) = era.full_moon_adjustment(year) {
                full_moon += adjustment;
            }
        }

        Watat {
            full_moon,
            is_watat,
        }
    }
}

/// Watat status of `year` under the standard era table.
#[inline]
pub fn check_watat(year: i32) -> Watat {
    EraTable::MYANMAR.check_watat(year)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn watat(full_moon: i64, is_watat: bool) -> Watat {
        Watat {
            full_moon,
            is_watat,
        }
    }

    #[test]
    fn mean_periods() {
        assert!((SOLAR_YEAR.value() - 365.258_756_5).abs() < 1e-7);
        assert!((LUNAR_MONTH.value() - 29.530_587_95).abs() < 1e-8);
    }

    #[test]
    fn metonic_remainders() {
        let watat_years: Vec<i32> = (0..19).filter(|&y| metonic_watat(y)).collect();
        // (7y + 2) mod 19 >= 12
        assert_eq!(watat_years, vec![2, 5, 7, 10, 13, 15, 18]);
        assert_eq!(metonic_watat(-17), metonic_watat(2));
    }

    #[test]
    fn post_independence_years() {
        assert_eq!(check_watat(1380), watat(2_458_327, true));
        assert_eq!(check_watat(1381), watat(2_458_711, false));
        assert_eq!(check_watat(1382), watat(2_459_065, true));
        assert_eq!(check_watat(1384), watat(2_459_804, false));
        assert_eq!(check_watat(1385), watat(2_460_158, true));
        assert_eq!(check_watat(1386), watat(2_460_542, false));
    }

    #[test]
    fn watat_exceptions_override_formula() {
        assert_eq!(check_watat(1201), watat(2_392_946, true));
        assert_eq!(check_watat(1202), watat(2_393_300, false));
        assert_eq!(check_watat(1263), watat(2_415_596, true));
        assert_eq!(check_watat(1264), watat(2_415_950, false));
        assert_eq!(check_watat(1344), watat(2_445_186, true));
        assert_eq!(check_watat(1345), watat(2_445_540, false));
    }

    #[test]
    fn full_moon_exception_applies_to_watat_year() {
        assert_eq!(check_watat(1377), watat(2_457_235, true));
        assert_eq!(check_watat(1234), watat(2_404_995, true));
    }

    #[test]
    fn early_eras_and_far_years() {
        assert_eq!(check_watat(0), watat(1_954_269, false));
        assert_eq!(check_watat(100), watat(1_990_798, true));
        assert_eq!(check_watat(1000), watat(2_319_533, false));
        assert_eq!(check_watat(1216), watat(2_398_439, false));
        assert_eq!(check_watat(1217), watat(2_398_793, true));
        assert_eq!(check_watat(-1000), watat(1_589_005, true));
        assert_eq!(check_watat(-6000), watat(-237_255, false));
        assert_eq!(check_watat(2000), watat(2_684_797, false));
        assert_eq!(check_watat(20_000), watat(9_259_458, false));
    }

    #[test]
    fn full_moon_date_is_noon() {
        let w = check_watat(1385);
        assert_eq!(w.full_moon_date().value(), 2_460_158.0);
    }

    #[test]
    fn extreme_years_do_not_overflow() {
        let _ = check_watat(i32::MAX);
        let _ = check_watat(i32::MIN);
    }
}
