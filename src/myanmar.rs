// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! # Myanmar dates
//!
//! Conversion between Julian Day Numbers and Myanmar lunisolar dates.
//!
//! Within a year, months alternate between 29 and 30 days starting with a
//! 29-day Tagu, so the day count since the first of Tagu maps onto a month
//! through the linear approximation `29.544 · month − 29.26`.  Two
//! corrections are layered on top: common years skip the 30-day first
//! Waso, and big watat years lengthen Nayon by one day.  Days after the
//! twelfth (or thirteenth) month belong to the *Hnaung* (late) Tagu and
//! Kason that precede the solar new year.
//!
//! ## Example
//! ```rust
//! use mmcal::{JulianDate, MyanmarDate, MyanmarMonth, MoonPhase};
//!
//! let date = MyanmarDate::from_julian(JulianDate::new(2_451_545.0));
//! assert_eq!(date.year, 1361);
//! assert_eq!(date.month, MyanmarMonth::Nadaw);
//! assert_eq!(date.moon_phase, MoonPhase::Waning);
//! assert_eq!(date.to_day_number(), 2_451_545);
//! ```

use chrono::NaiveDate;

use crate::astro::AstroDay;
use crate::era::EraTable;
use crate::error::CalendarError;
use crate::watat::SOLAR_YEAR;
use crate::weekday::Weekday;
use crate::year::{MyanmarYear, YearType};
use crate::{JulianDate, Time, JD};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Slope of the month approximation, days per month.
const MONTH_SLOPE: f64 = 29.544;
/// Intercept of the month approximation, days.
const MONTH_INTERCEPT: f64 = 29.26;

// ═══════════════════════════════════════════════════════════════════════════
// Field types
// ═══════════════════════════════════════════════════════════════════════════

/// Myanmar month; the discriminant is the calendar's month index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum MyanmarMonth {
    /// Intercalary month of watat years.
    FirstWaso = 0,
    Tagu = 1,
    Kason = 2,
    Nayon = 3,
    /// Waso, or second Waso in a watat year.
    Waso = 4,
    Wagaung = 5,
    Tawthalin = 6,
    Thadingyut = 7,
    Tazaungmon = 8,
    Nadaw = 9,
    Pyatho = 10,
    Tabodwe = 11,
    Tabaung = 12,
}

impl MyanmarMonth {
    /// All months in index order.
    pub const ALL: [MyanmarMonth; 13] = [
        MyanmarMonth::FirstWaso,
        MyanmarMonth::Tagu,
        MyanmarMonth::Kason,
        MyanmarMonth::Nayon,
        MyanmarMonth::Waso,
        MyanmarMonth::Wagaung,
        MyanmarMonth::Tawthalin,
        MyanmarMonth::Thadingyut,
        MyanmarMonth::Tazaungmon,
        MyanmarMonth::Nadaw,
        MyanmarMonth::Pyatho,
        MyanmarMonth::Tabodwe,
        MyanmarMonth::Tabaung,
    ];

    /// Month index in `0..=12`.
    #[inline]
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Month for an index in `0..=12`.
    pub const fn from_index(index: u8) -> Option<Self> {
        if index < 13 {
            Some(Self::ALL[index as usize])
        } else {
            None
        }
    }

    /// Number of days of this month in a year of type `year_type`.
    ///
    /// Odd months have 29 days and even months 30; Nayon has 30 in big
    /// watat years.
    pub const fn length(self, year_type: YearType) -> u8 {
        let base = 30 - self.index() % 2;
        if matches!(self, MyanmarMonth::Nayon) {
            base + year_type.big_watat_flag() as u8
        } else {
            base
        }
    }
}

impl TryFrom<u8> for MyanmarMonth {
    type Error = CalendarError;

    fn try_from(index: u8) -> Result<Self, Self::Error> {
        Self::from_index(index).ok_or(CalendarError::InvalidMyanmarMonth { index })
    }
}

/// Whether a month belongs to the year's regular run or to the late
/// months repeated after Tabaung.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum MonthType {
    /// Regular month.
    Oo = 0,
    /// Late month (late Tagu, late Kason) before the solar new year.
    Hnaung = 1,
}

impl MonthType {
    #[inline]
    pub const fn index(self) -> u8 {
        self as u8
    }
}

impl TryFrom<u8> for MonthType {
    type Error = CalendarError;

    fn try_from(index: u8) -> Result<Self, Self::Error> {
        match index {
            0 => Ok(MonthType::Oo),
            1 => Ok(MonthType::Hnaung),
            _ => Err(CalendarError::InvalidMonthType { index }),
        }
    }
}

/// Phase of the moon on a given day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum MoonPhase {
    Waxing = 0,
    Full = 1,
    Waning = 2,
    New = 3,
}

impl MoonPhase {
    const ALL: [MoonPhase; 4] = [
        MoonPhase::Waxing,
        MoonPhase::Full,
        MoonPhase::Waning,
        MoonPhase::New,
    ];

    #[inline]
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// True for the full moon and new moon days.
    #[inline]
    pub const fn is_boundary(self) -> bool {
        matches!(self, MoonPhase::Full | MoonPhase::New)
    }
}

impl TryFrom<u8> for MoonPhase {
    type Error = CalendarError;

    fn try_from(index: u8) -> Result<Self, Self::Error> {
        Self::ALL
            .get(usize::from(index))
            .copied()
            .ok_or(CalendarError::InvalidMoonPhase { index })
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// MyanmarDate
// ═══════════════════════════════════════════════════════════════════════════

/// A day of the Myanmar calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MyanmarDate {
    /// Myanmar year (ME).
    pub year: i32,
    pub year_type: YearType,
    /// 354, 384 or 385.
    pub year_length: u16,
    pub month: MyanmarMonth,
    pub month_type: MonthType,
    /// 29 or 30.
    pub month_length: u8,
    /// Day of the month, `1..=30`.
    pub day: u8,
    /// Day within the waxing or waning fortnight, `1..=15`.
    pub fortnight_day: u8,
    pub moon_phase: MoonPhase,
    pub weekday: Weekday,
    /// Julian Day Number this date was computed from.
    pub day_number: i64,
}

impl MyanmarDate {
    /// Myanmar date of a Julian Day Number.
    #[inline]
    pub fn from_day_number(jdn: i64) -> Self {
        EraTable::MYANMAR.myanmar_date(jdn)
    }

    /// Myanmar date of the civil day containing `jd`.
    #[inline]
    pub fn from_julian(jd: JulianDate) -> Self {
        Self::from_day_number(jd.day_number())
    }

    /// Validate loose fields and build the date they name.
    ///
    /// The fortnight day is ignored on full and new moon days. The returned
    /// record is the canonical form of that day, so a regular Tagu day
    /// before the solar new year comes back as the late Tagu of the
    /// previous year.
    pub fn try_from_parts(
        year: i32,
        month: MyanmarMonth,
        month_type: MonthType,
        moon_phase: MoonPhase,
        fortnight_day: u8,
    ) -> Result<Self, CalendarError> {
        let table = EraTable::MYANMAR;
        let info = table.classify_year(year);
        if month == MyanmarMonth::FirstWaso && !info.year_type.is_watat() {
            return Err(CalendarError::NotWatatYear { year });
        }

        let max = match moon_phase {
            MoonPhase::Waxing => 14,
            MoonPhase::Waning => month.length(info.year_type) - 16,
            MoonPhase::Full | MoonPhase::New => 15,
        };
        if fortnight_day == 0 || fortnight_day > max {
            return Err(CalendarError::InvalidFortnightDay {
                day: fortnight_day,
                max,
            });
        }

        let jdn = day_number_in_year(&info, month, month_type, moon_phase, fortnight_day);
        Ok(table.myanmar_date(jdn))
    }

    /// Julian Day Number of this date, rebuilt from the moon phase and
    /// fortnight day.
    #[inline]
    pub fn to_day_number(&self) -> i64 {
        EraTable::MYANMAR.myanmar_to_day_number(
            self.year,
            self.month,
            self.month_type,
            self.moon_phase,
            self.fortnight_day,
        )
    }

    /// Noon of this date on the Julian Day axis.
    #[inline]
    pub fn to_julian(&self) -> JulianDate {
        JulianDate::from_day_number(self.to_day_number())
    }

    /// Astrological classification of this date.
    #[inline]
    pub fn astro(&self) -> AstroDay {
        AstroDay::classify(
            self.month,
            self.month_length,
            self.day,
            self.weekday,
            self.year,
        )
    }
}

impl From<JulianDate> for MyanmarDate {
    fn from(jd: JulianDate) -> Self {
        Self::from_julian(jd)
    }
}

impl From<NaiveDate> for MyanmarDate {
    fn from(date: NaiveDate) -> Self {
        Self::from_julian(JulianDate::from_naive_date(date))
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Conversions on an era table
// ═══════════════════════════════════════════════════════════════════════════

/// Inverse of the month approximation inside a classified year.
fn day_number_in_year(
    info: &MyanmarYear,
    month: MyanmarMonth,
    month_type: MonthType,
    moon_phase: MoonPhase,
    fortnight_day: u8,
) -> i64 {
    let big = info.year_type.big_watat_flag();
    let common = info.year_type.common_flag();
    let month_length = i64::from(month.length(info.year_type));

    let phase = i64::from(moon_phase.index());
    let (m1, m2) = (phase % 2, phase / 2);
    let day =
        m1 * (15 + m2 * (month_length - 15)) + (1 - m1) * (i64::from(fortnight_day) + 15 * m2);

    // Position in the month sequence: first Waso sits at 4, second Waso at 5.
    let mut position = i64::from(month.index());
    position += 4 - (position + 15).div_euclid(16) * 4 + (position + 12).div_euclid(16);

    let mut day_count = day + (MONTH_SLOPE * position as f64 - MONTH_INTERCEPT).floor() as i64
        - common * (position + 11).div_euclid(16) * 30
        + big * (position + 12).div_euclid(16);
    day_count += i64::from(month_type.index()) * info.length();
    day_count + info.tagu1 - 1
}

impl EraTable {
    /// Myanmar date of Julian Day Number `jdn`.
    ///
    /// The year is the solar year containing `jdn`, except for the few days
    /// some early years start before their first of Tagu; those stay in the
    /// previous year's Tabaung.
    pub fn myanmar_date(&self, jdn: i64) -> MyanmarDate {
        let elapsed =
            (jdn as f64 - 0.5 - Time::<JD>::MYANMAR_EPOCH.value()) / SOLAR_YEAR.value();
        let mut year = elapsed.floor() as i32;
        let mut info = self.classify_year(year);
        // the solar new year can fall a few days before the first of Tagu;
        // those days close the previous year's Tabaung
        if jdn < info.tagu1 {
            year = year.saturating_sub(1);
            info = self.classify_year(year);
        }

        let big = info.year_type.big_watat_flag();
        let common = info.year_type.common_flag();
        let year_length = info.length();

        let mut day_count = jdn - info.tagu1 + 1;
        let month_type = (day_count - 1).div_euclid(year_length);
        day_count -= month_type * year_length;

        let a = (day_count + 423).div_euclid(512);
        let mut month = (((day_count - big * a + common * a * 30) as f64 + MONTH_INTERCEPT)
            / MONTH_SLOPE)
            .floor() as i64;
        let e = (month + 12).div_euclid(16);
        let f = (month + 11).div_euclid(16);
        let day = day_count - (MONTH_SLOPE * month as f64 - MONTH_INTERCEPT).floor() as i64
            - big * e
            + common * f * 30;
        month += f * 3 - e * 4;

        let month = MyanmarMonth::ALL[month.rem_euclid(13) as usize];
        let month_length = i64::from(month.length(info.year_type));
        let moon_phase = (day + 1) / 16 + day / 16 + day / month_length;
        let fortnight_day = day - 15 * (day / 16);

        MyanmarDate {
            year,
            year_type: info.year_type,
            year_length: year_length as u16,
            month,
            month_type: if month_type == 0 {
                MonthType::Oo
            } else {
                MonthType::Hnaung
            },
            month_length: month_length as u8,
            day: day as u8,
            fortnight_day: fortnight_day as u8,
            moon_phase: MoonPhase::ALL[moon_phase.clamp(0, 3) as usize],
            weekday: Weekday::from_day_number(jdn),
            day_number: jdn,
        }
    }

    /// Julian Day Number of a Myanmar date given by moon phase and
    /// fortnight day.
    ///
    /// Exact inverse of [`EraTable::myanmar_date`] for every date it
    /// produces.
    pub fn myanmar_to_day_number(
        &self,
        year: i32,
        month: MyanmarMonth,
        month_type: MonthType,
        moon_phase: MoonPhase,
        fortnight_day: u8,
    ) -> i64 {
        let info = self.classify_year(year);
        day_number_in_year(&info, month, month_type, moon_phase, fortnight_day)
    }
}

/// Julian Day Number of a Myanmar date under the standard era table.
///
/// See [`EraTable::myanmar_to_day_number`].
#[inline]
pub fn myanmar_to_day_number(
    year: i32,
    month: MyanmarMonth,
    month_type: MonthType,
    moon_phase: MoonPhase,
    fortnight_day: u8,
) -> i64 {
    EraTable::MYANMAR.myanmar_to_day_number(year, month, month_type, moon_phase, fortnight_day)
}
