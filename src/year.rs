// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Year classification: common, little watat, big watat.
//!
//! A watat year adds a 30-day first Waso (little watat, 384 days); when
//! the second Waso full moon falls 31 days after the one expected from the
//! previous watat year, Nayon gains a 30th day as well (big watat, 385 days).

use crate::era::EraTable;
use crate::error::CalendarError;
use crate::julian_date_ext::round_half_up;
use crate::watat::{Watat, SOLAR_YEAR};
use crate::{JulianDate, Time, JD};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Days in twelve lunar months of alternating 29 and 30 days.
const COMMON_YEAR_DAYS: i64 = 354;

/// Days from the first of Tagu to the full moon of (second) Waso, backwards.
const TAGU_TO_WASO_FULL_MOON: i64 = 102;

/// Watat years recur every two or three years; the look-back stops here.
const MAX_LOOK_BACK: i32 = 3;

/// Days from Thingyan akya to atat, before and after independence.
const AKYA_TO_ATAT: f64 = 2.1675;
const AKYA_TO_ATAT_INDEPENDENCE: f64 = 2.169_918_982;
/// First year using [`AKYA_TO_ATAT_INDEPENDENCE`].
const INDEPENDENCE_AKYA_YEAR: i32 = 1312;

/// Kind of Myanmar year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum YearType {
    /// 354 days.
    Common = 0,
    /// 384 days: an extra 30-day month.
    LittleWatat = 1,
    /// 385 days: an extra month and a 30-day Nayon.
    BigWatat = 2,
}

impl YearType {
    /// Index in `0..=2`.
    #[inline]
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Year type for an index in `0..=2`.
    pub const fn from_index(index: u8) -> Option<Self> {
        match index {
            0 => Some(YearType::Common),
            1 => Some(YearType::LittleWatat),
            2 => Some(YearType::BigWatat),
            _ => None,
        }
    }

    /// Number of days in a year of this type.
    #[inline]
    pub const fn length(self) -> i64 {
        match self {
            YearType::Common => COMMON_YEAR_DAYS,
            YearType::LittleWatat => COMMON_YEAR_DAYS + 30,
            YearType::BigWatat => COMMON_YEAR_DAYS + 31,
        }
    }

    /// True for both kinds of watat year.
    #[inline]
    pub const fn is_watat(self) -> bool {
        !matches!(self, YearType::Common)
    }

    /// 1 for a big watat year, else 0.
    #[inline]
    pub(crate) const fn big_watat_flag(self) -> i64 {
        matches!(self, YearType::BigWatat) as i64
    }

    /// 1 for a common year, else 0.
    #[inline]
    pub(crate) const fn common_flag(self) -> i64 {
        matches!(self, YearType::Common) as i64
    }
}

impl TryFrom<u8> for YearType {
    type Error = CalendarError;

    fn try_from(index: u8) -> Result<Self, Self::Error> {
        Self::from_index(index).ok_or(CalendarError::InvalidYearType { index })
    }
}

/// Classification of one Myanmar year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MyanmarYear {
    /// Myanmar year (ME).
    pub year: i32,
    pub year_type: YearType,
    /// Julian Day Number of the first day of Tagu that opens the year's
    /// regular months.
    pub tagu1: i64,
    /// Julian Day Number of the full moon of (second) Waso.
    pub full_moon: i64,
    /// The gap to the previous watat year's full moon was neither 30 nor 31
    /// days. The classification still stands but rests on inconsistent
    /// historical data.
    pub inconsistent: bool,
}

impl MyanmarYear {
    /// Classify `year` under the standard era table.
    #[inline]
    pub fn new(year: i32) -> Self {
        EraTable::MYANMAR.classify_year(year)
    }

    /// Number of days in the year.
    #[inline]
    pub const fn length(&self) -> i64 {
        self.year_type.length()
    }

    /// First day of Tagu as a Julian Day instant at noon.
    #[inline]
    pub fn tagu1_date(&self) -> JulianDate {
        JulianDate::from_day_number(self.tagu1)
    }

    /// Full moon of (second) Waso as a Julian Day instant at noon.
    #[inline]
    pub fn full_moon_date(&self) -> JulianDate {
        JulianDate::from_day_number(self.full_moon)
    }

    /// Thingyan atat: the instant the solar year begins.
    #[inline]
    pub fn atat_time(&self) -> JulianDate {
        let elapsed = SOLAR_YEAR.value() * f64::from(self.year);
        JulianDate::new(elapsed + Time::<JD>::MYANMAR_EPOCH.value())
    }

    /// Julian Day Number of Thingyan akya, when the water festival proper
    /// begins.
    pub fn akya_day(&self) -> i64 {
        let offset = if self.year >= INDEPENDENCE_AKYA_YEAR {
            AKYA_TO_ATAT_INDEPENDENCE
        } else {
            AKYA_TO_ATAT
        };
        round_half_up(self.atat_time().value() - offset)
    }

    /// Julian Day Number of the Myanmar New Year Day, the day after atat.
    #[inline]
    pub fn new_year_day(&self) -> i64 {
        round_half_up(self.atat_time().value()) + 1
    }
}

impl EraTable {
    /// Classify Myanmar year `year`.
    pub fn classify_year(&self, year: i32) -> MyanmarYear {
        let current = self.check_watat(year);

        let mut years_back = 1;
        let mut prior: Watat = self.check_watat(year.wrapping_sub(years_back));
        while !prior.is_watat && years_back < MAX_LOOK_BACK {
            years_back += 1;
            prior = self.check_watat(year.wrapping_sub(years_back));
        }
        let projected = prior.full_moon + COMMON_YEAR_DAYS * i64::from(years_back);

        let (year_type, full_moon, inconsistent) = if current.is_watat {
            let gap = (current.full_moon - prior.full_moon) % COMMON_YEAR_DAYS;
            let year_type = if gap / 31 == 0 {
                YearType::LittleWatat
            } else {
                YearType::BigWatat
            };
            let inconsistent = gap != 30 && gap != 31;
            if inconsistent {
                tracing::debug!(year, gap, "watat full moon gap outside 30..=31 days");
            }
            (year_type, current.full_moon, inconsistent)
        } else {
            (YearType::Common, projected, false)
        };

        MyanmarYear {
            year,
            year_type,
            tagu1: projected - TAGU_TO_WASO_FULL_MOON,
            full_moon,
            inconsistent,
        }
    }
}
