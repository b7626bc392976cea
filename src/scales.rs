// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Day-count scale markers.
//!
//! | Marker | Count | Day 0 (JD) |
//! |--------|-------|------------|
//! | [`JD`] | Julian Day | 0.0 |
//! | [`MJD`] | Modified Julian Day | 2 400 000.5 |

use super::instant::TimeScale;
use qtty::Days;

/// Julian Day: days since noon of 4713-01-01 BC (proleptic Julian).
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd)]
pub struct JD;

impl TimeScale for JD {
    const LABEL: &'static str = "Julian Day:";

    #[inline(always)]
    fn to_julian_day(value: Days) -> Days {
        value
    }

    #[inline(always)]
    fn from_julian_day(jd: Days) -> Days {
        jd
    }
}

/// Modified Julian Day: days since midnight of 1858-11-17.
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd)]
pub struct MJD;

/// Julian Day of MJD 0.
const MJD_ZERO: Days = Days::new(2_400_000.5);

impl TimeScale for MJD {
    const LABEL: &'static str = "MJD";

    #[inline(always)]
    fn to_julian_day(value: Days) -> Days {
        MJD_ZERO + value
    }

    #[inline(always)]
    fn from_julian_day(jd: Days) -> Days {
        jd - MJD_ZERO
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn julian_day_maps_to_itself() {
        let new_year_1900 = Days::new(2_415_021.0);
        assert_eq!(JD::to_julian_day(new_year_1900), new_year_1900);
        assert_eq!(JD::from_julian_day(new_year_1900), new_year_1900);
    }

    #[test]
    fn modified_julian_day_starts_at_midnight() {
        assert_eq!(MJD::to_julian_day(Days::new(0.0)), Days::new(2_400_000.5));
        // English calendar reform, 1752-09-14 at midnight
        assert_eq!(MJD::from_julian_day(Days::new(2_361_221.5)), Days::new(-38_779.0));
    }
}
