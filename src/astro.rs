// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Astrological days of the Myanmar calendar.
//!
//! Every indicator is an independent rule over the month, the day of the
//! month (or of the fortnight) and the weekday; mahabote and nakhat depend
//! on the year.  Most rules are small lookup tables indexed by weekday.
//! A few carry isolated literal exceptions on top of their table; these are
//! kept exactly as tabulated.

use crate::myanmar::MyanmarMonth;
use crate::weekday::Weekday;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Pyathada (inauspicious) day kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Pyathada {
    None = 0,
    Full = 1,
    /// Only the afternoon is pyathada.
    Afternoon = 2,
}

/// Direction of the dragon's head (nagahle).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Nagahle {
    West = 0,
    North = 1,
    East = 2,
    South = 3,
}

/// Mahabote house of a year and weekday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Mahabote {
    Binga = 0,
    Atun = 1,
    Yaza = 2,
    Adipati = 3,
    Marana = 4,
    Thike = 5,
    Puti = 6,
}

/// Nakhat of a year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Nakhat {
    Orc = 0,
    Elf = 1,
    Human = 2,
}

/// Astrological indicators of one day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AstroDay {
    pub sabbath: bool,
    pub sabbath_eve: bool,
    pub yatyaza: bool,
    pub pyathada: Pyathada,
    pub thamanyo: bool,
    pub amyeittasote: bool,
    pub warameittugyi: bool,
    pub warameittunge: bool,
    pub yatpote: bool,
    pub thamaphyu: bool,
    pub nagapor: bool,
    pub yatyotema: bool,
    pub mahayatkyan: bool,
    pub shanyat: bool,
    pub nagahle: Nagahle,
    pub mahabote: Mahabote,
    pub nakhat: Nakhat,
}

const MAHABOTE: [Mahabote; 7] = [
    Mahabote::Binga,
    Mahabote::Atun,
    Mahabote::Yaza,
    Mahabote::Adipati,
    Mahabote::Marana,
    Mahabote::Thike,
    Mahabote::Puti,
];
const NAKHAT: [Nakhat; 3] = [Nakhat::Orc, Nakhat::Elf, Nakhat::Human];
const NAGAHLE: [Nagahle; 4] = [Nagahle::West, Nagahle::North, Nagahle::East, Nagahle::South];

impl AstroDay {
    /// Classify a day.
    ///
    /// `day` is the day of the month (`0..=30`).  First Waso is read as
    /// Waso for every rule.
    pub fn classify(
        month: MyanmarMonth,
        month_length: u8,
        day: u8,
        weekday: Weekday,
        year: i32,
    ) -> Self {
        let mm = match month {
            MyanmarMonth::FirstWaso => i32::from(MyanmarMonth::Waso.index()),
            other => i32::from(other.index()),
        };
        let md = i32::from(day);
        let mml = i32::from(month_length);
        let wd = usize::from(weekday.index());
        let wdi = wd as i32;
        // day of the waxing or waning fortnight, 0..=15
        let d = md - 15 * (md / 16);

        Self {
            sabbath: md == 8 || md == 15 || md == 23 || md == mml,
            sabbath_eve: md == 7 || md == 14 || md == 22 || md == mml - 1,
            yatyaza: yatyaza(mm, wdi),
            pyathada: pyathada(mm, wd),
            thamanyo: thamanyo(mm, wdi),
            amyeittasote: [5, 8, 3, 7, 2, 4, 1][wd] == d,
            warameittugyi: [7, 1, 4, 8, 9, 6, 3][wd] == d,
            warameittunge: 12 - d == (wdi + 6) % 7,
            yatpote: [8, 1, 4, 6, 9, 8, 7][wd] == d,
            thamaphyu: thamaphyu(d, wd),
            nagapor: nagapor(md, wd),
            yatyotema: yatyotema(mm, d),
            mahayatkyan: ((mm % 12) / 2 + 4) % 6 + 1 == d,
            shanyat: [8, 8, 2, 2, 9, 3, 3, 5, 1, 4, 7, 4][(mm - 1) as usize] == d,
            nagahle: NAGAHLE[((mm % 12) / 3) as usize],
            mahabote: MAHABOTE[(i64::from(year) - wdi as i64).rem_euclid(7) as usize],
            nakhat: NAKHAT[year.rem_euclid(3) as usize],
        }
    }
}

fn yatyaza(mm: i32, wd: i32) -> bool {
    let m1 = mm % 4;
    let wd1 = m1 / 2 + 4;
    let wd2 = ((1 - m1 / 2) + m1 % 2) * (1 + 2 * (m1 % 2));
    wd == wd1 || wd == wd2
}

fn pyathada(mm: i32, wd: usize) -> Pyathada {
    let m1 = mm % 4;
    if m1 == 0 && wd == 4 {
        Pyathada::Afternoon
    } else if [1, 3, 3, 0, 2, 1, 2][wd] == m1 {
        Pyathada::Full
    } else {
        Pyathada::None
    }
}

fn thamanyo(mm: i32, wd: i32) -> bool {
    let m1 = mm - 1 - mm / 9;
    let wd1 = (m1 * 2 - m1 / 8) % 7;
    (wd + 7 - wd1) % 7 <= 1
}

fn thamaphyu(d: i32, wd: usize) -> bool {
    [1, 2, 6, 6, 5, 6, 7][wd] == d || [0, 1, 0, 0, 0, 3, 3][wd] == d || (d == 4 && wd == 5)
}

fn nagapor(md: i32, wd: usize) -> bool {
    [26, 21, 2, 10, 18, 2, 21][wd] == md
        || [17, 19, 1, 0, 9, 0, 0][wd] == md
        || (md == 2 && wd == 1)
        || ((md == 12 || md == 4 || md == 18) && wd == 2)
}

fn yatyotema(mm: i32, d: i32) -> bool {
    let m1 = if mm % 2 == 1 { mm } else { (mm + 9) % 12 };
    (m1 + 4) % 12 + 1 == d
}
