// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Day of the week, counted the Myanmar way from Saturday.

use crate::error::CalendarError;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Day of the week; the discriminant is the Myanmar weekday index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Weekday {
    Saturday = 0,
    Sunday = 1,
    Monday = 2,
    Tuesday = 3,
    Wednesday = 4,
    Thursday = 5,
    Friday = 6,
}

impl Weekday {
    const ALL: [Weekday; 7] = [
        Weekday::Saturday,
        Weekday::Sunday,
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
    ];

    /// Weekday of a Julian Day Number.
    #[inline]
    pub const fn from_day_number(jdn: i64) -> Self {
        Self::ALL[(jdn + 2).rem_euclid(7) as usize]
    }

    /// Index in `0..=6`, Saturday being 0.
    #[inline]
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Weekday for an index in `0..=6`.
    pub const fn from_index(index: u8) -> Option<Self> {
        if index < 7 {
            Some(Self::ALL[index as usize])
        } else {
            None
        }
    }
}

impl TryFrom<u8> for Weekday {
    type Error = CalendarError;

    fn try_from(index: u8) -> Result<Self, Self::Error> {
        Self::from_index(index).ok_or(CalendarError::InvalidWeekday { index })
    }
}

impl From<chrono::Weekday> for Weekday {
    fn from(weekday: chrono::Weekday) -> Self {
        // chrono counts from Monday = 0.
        Self::ALL[(weekday.num_days_from_monday() as usize + 2) % 7]
    }
}
