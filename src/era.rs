// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! # Myanmar calendar eras
//!
//! The calendar has been reckoned under several systems, each with its own
//! watat offset and threshold month count, and each with a short list of
//! historically verified corrections that the closed-form rule cannot
//! reproduce:
//!
//! | Era | Years (ME) | System |
//! |-----|-----------|--------|
//! | [`EraId::MakarantaFirst`] | … – 797 | Makaranta, 19-year cycle |
//! | [`EraId::MakarantaSecond`] | 798 – 1099 | Makaranta, 19-year cycle |
//! | [`EraId::Thandeikta`] | 1100 – 1216 | Thandeikta, 19-year cycle |
//! | [`EraId::Colonial`] | 1217 – 1311 | excess-day rule |
//! | [`EraId::Independence`] | 1312 – … | excess-day rule |
//!
//! [`EraTable`] is the read-only lookup service over this data: it resolves
//! the era of a year, and each [`Era`] answers whether it carries an
//! override for a given year.
//!
//! Historical data for the first era follows the lists compiled by
//! U Aung Zeya.

use crate::error::CalendarError;
use crate::search::{keys_strictly_ascending, lookup};

/// Identifier of a calendar era.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum EraId {
    /// Makaranta system, first part (era 1.1).
    MakarantaFirst,
    /// Makaranta system, second part (era 1.2).
    MakarantaSecond,
    /// Thandeikta system (era 1.3).
    Thandeikta,
    /// Era under British rule (era 2).
    Colonial,
    /// Era after independence (era 3).
    Independence,
}

impl EraId {
    /// Major era number: 1 for the era of the kings, then 2 and 3.
    ///
    /// Era 1 decides watat years by the Metonic cycle, later eras by the
    /// excess-day threshold.
    #[inline]
    pub const fn major(self) -> u8 {
        match self {
            EraId::MakarantaFirst | EraId::MakarantaSecond | EraId::Thandeikta => 1,
            EraId::Colonial => 2,
            EraId::Independence => 3,
        }
    }

    /// Decimal era code as used in Myanmar calendar literature (`1.1`, `1.2`, `1.3`, `2`, `3`).
    pub const fn code(self) -> f64 {
        match self {
            EraId::MakarantaFirst => 1.1,
            EraId::MakarantaSecond => 1.2,
            EraId::Thandeikta => 1.3,
            EraId::Colonial => 2.0,
            EraId::Independence => 3.0,
        }
    }
}

/// One era of the calendar and its constants.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Era {
    pub id: EraId,
    /// First Myanmar year of the era.
    pub begin: i32,
    /// Last Myanmar year of the era.
    pub end: i32,
    /// Watat offset, in days, added to the full moon estimate.
    pub watat_offset: f64,
    /// Number of months used to find the excess days.
    pub threshold_months: i32,
    /// `(year, day adjustment)` corrections of the second Waso full moon,
    /// ascending by year.
    pub full_moon_exceptions: &'static [(i32, i64)],
    /// `(year, is_watat)` overrides of the computed watat status,
    /// ascending by year.
    pub watat_exceptions: &'static [(i32, bool)],
}

impl Era {
    /// True if `year` lies within `begin..=end`.
    #[inline]
    pub const fn contains(&self, year: i32) -> bool {
        self.begin <= year && year <= self.end
    }

    /// Tabulated watat status for `year`, if the era overrides it.
    #[inline]
    pub fn watat_override(&self, year: i32) -> Option<bool> {
        lookup(&year, self.watat_exceptions)
    }

    /// Tabulated full moon correction for `year`, if any.
    #[inline]
    pub fn full_moon_adjustment(&self, year: i32) -> Option<i64> {
        lookup(&year, self.full_moon_exceptions)
    }
}

#[rustfmt::skip]
const ERAS: [Era; 5] = [
    Era {
        id: EraId::MakarantaFirst,
        begin: i32::MIN,
        end: 797,
        watat_offset: -1.1,
        threshold_months: -1,
        full_moon_exceptions: &[
            (205, 1), (246, 1), (471, 1), (572, -1), (651, 1),
            (653, 2), (656, 1), (672, 1), (729, 1), (767, -1),
        ],
        watat_exceptions: &[],
    },
    Era {
        id: EraId::MakarantaSecond,
        begin: 798,
        end: 1099,
        watat_offset: -1.1,
        threshold_months: -1,
        full_moon_exceptions: &[
            (813, -1), (849, -1), (851, -1), (854, -1), (927, -1),
            (933, -1), (936, -1), (938, -1), (949, -1), (952, -1),
            (963, -1), (968, -1), (1039, -1),
        ],
        watat_exceptions: &[],
    },
    Era {
        id: EraId::Thandeikta,
        begin: 1100,
        end: 1216,
        watat_offset: -0.85,
        threshold_months: -1,
        full_moon_exceptions: &[(1120, 1), (1126, -1), (1150, 1), (1172, -1), (1207, 1)],
        watat_exceptions: &[(1201, true), (1202, false)],
    },
    Era {
        id: EraId::Colonial,
        begin: 1217,
        end: 1311,
        watat_offset: -1.0,
        threshold_months: 4,
        full_moon_exceptions: &[(1234, 1), (1261, -1)],
        watat_exceptions: &[(1263, true), (1264, false)],
    },
    Era {
        id: EraId::Independence,
        begin: 1312,
        end: i32::MAX,
        watat_offset: -0.5,
        threshold_months: 8,
        full_moon_exceptions: &[(1377, 1)],
        watat_exceptions: &[(1344, true), (1345, false)],
    },
];

/// Ordered, immutable set of eras covering every Myanmar year.
///
/// Years before the first era's `begin` resolve to the first era, so the
/// lookup is total even for custom tables.
#[derive(Debug, Clone, Copy)]
pub struct EraTable {
    eras: &'static [Era],
}

impl EraTable {
    /// The historical Myanmar calendar eras.
    pub const MYANMAR: EraTable = EraTable { eras: &ERAS };

    /// Wrap a custom era list, ascending by `begin`.
    ///
    /// Fails with [`CalendarError::EmptyEraTable`] when `eras` is empty.
    pub fn new(eras: &'static [Era]) -> Result<Self, CalendarError> {
        if eras.is_empty() {
            return Err(CalendarError::EmptyEraTable);
        }
        Ok(Self { eras })
    }

    /// The eras, earliest first.
    #[inline]
    pub fn eras(&self) -> &'static [Era] {
        self.eras
    }

    /// Iterate over the eras, earliest first.
    pub fn iter(&self) -> impl Iterator<Item = &'static Era> {
        self.eras.iter()
    }

    /// The era governing `year`.
    ///
    /// Scans from the latest era backwards and takes the first whose
    /// `begin <= year`.
    pub fn resolve(&self, year: i32) -> &'static Era {
        let index = self
            .eras
            .iter()
            .rposition(|era| era.begin <= year)
            .unwrap_or(0);
        let eras = self.eras;
        tracing::trace!(year, era = ?eras[index].id, "resolved era");
        &eras[index]
    }

    /// True if the eras are contiguous and every exception table is
    /// strictly ascending.
    pub fn is_well_formed(&self) -> bool {
        let contiguous = self
            .eras
            .windows(2)
            .all(|w| w[0].begin <= w[0].end && w[0].end.checked_add(1) == Some(w[1].begin));
        contiguous
            && self.eras.iter().all(|era| {
                keys_strictly_ascending(era.full_moon_exceptions)
                    && keys_strictly_ascending(era.watat_exceptions)
            })
    }
}

impl Default for EraTable {
    fn default() -> Self {
        Self::MYANMAR
    }
}
