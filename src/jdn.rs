//! Julian day numbers, the single interchange representation between calendars.

use std::ops::{Add, Sub};

use serde::{Deserialize, Serialize};

use crate::consts::{
    DAYS_PER_FOUR_YEARS, DAYS_PER_GREGORIAN_CYCLE, DAYS_PER_WEEK, GREGORIAN_MAX_JDN,
    GREGORIAN_MIN_JDN, HIJRI_COMMON_YEAR_DAYS, HIJRI_CYCLE_DAYS, HIJRI_CYCLE_YEARS,
    HIJRI_EPOCH_JDN, HIJRI_LEAPS_PER_CYCLE, HIJRI_MAX_JDN, JDN_GREGORIAN_OFFSET, JDN_YEAR_OFFSET,
    MAX_MONTH,
};
use crate::date::Weekday;
use crate::prelude::*;

/// A calendar-independent day count (Julian day number at noon).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, From, Into, Serialize, Deserialize,
)]
#[display(fmt = "{}", "_0")]
#[serde(transparent)]
pub struct JulianDay(i64);

impl JulianDay {
    pub const fn new(jdn: i64) -> Self {
        Self(jdn)
    }

    #[inline]
    pub const fn get(self) -> i64 {
        self.0
    }

    /// Day number of a proleptic Gregorian date (Fliegel-Van Flandern).
    ///
    /// Components are assumed to be validated already.
    pub const fn from_gregorian(year: u16, month: u8, day: u8) -> Self {
        let (y, m, d) = (year as i64, month as i64, day as i64);
        let a = (14 - m) / 12;
        let y = y + JDN_YEAR_OFFSET - a;
        let m = m + 12 * a - 3;
        Self(d + (153 * m + 2) / 5 + 365 * y + y / 4 - y / 100 + y / 400 - JDN_GREGORIAN_OFFSET)
    }

    /// Day number of a tabular Hijri date.
    ///
    /// Components are assumed to be validated already.
    pub const fn from_hijri(year: u16, month: u8, day: u8) -> Self {
        let (y, m, d) = (year as i64, month as i64, day as i64);
        Self(d + hijri_month_offset(m) + hijri_year_start(y) - 1)
    }

    /// Splits the day into a Gregorian `(year, month, day)`.
    ///
    /// Returns `None` outside 0001-01-01..=9999-12-31.
    pub const fn to_gregorian(self) -> Option<(u16, u8, u8)> {
        if self.0 < GREGORIAN_MIN_JDN || self.0 > GREGORIAN_MAX_JDN {
            return None;
        }
        let a = self.0 + JDN_GREGORIAN_OFFSET - 1;
        let b = (4 * a + 3) / DAYS_PER_GREGORIAN_CYCLE;
        let c = a - DAYS_PER_GREGORIAN_CYCLE * b / 4;
        let d = (4 * c + 3) / DAYS_PER_FOUR_YEARS;
        let e = c - DAYS_PER_FOUR_YEARS * d / 4;
        let m = (5 * e + 2) / 153;
        let day = e - (153 * m + 2) / 5 + 1;
        let month = m + 3 - 12 * (m / 10);
        let year = 100 * b + d - JDN_YEAR_OFFSET + m / 10;
        Some((year as u16, month as u8, day as u8))
    }

    /// Splits the day into a tabular Hijri `(year, month, day)`.
    ///
    /// Returns `None` before 1 Muharram 1 AH or after the end of 9999 AH.
    pub const fn to_hijri(self) -> Option<(u16, u8, u8)> {
        if self.0 < HIJRI_EPOCH_JDN || self.0 > HIJRI_MAX_JDN {
            return None;
        }
        let elapsed = self.0 - HIJRI_EPOCH_JDN;
        // The estimate is off by at most one year at cycle edges
        let mut year = (HIJRI_CYCLE_YEARS * elapsed + 10_646) / HIJRI_CYCLE_DAYS;
        while hijri_year_start(year + 1) <= self.0 {
            year += 1;
        }
        while hijri_year_start(year) > self.0 {
            year -= 1;
        }
        let day_of_year = self.0 - hijri_year_start(year);
        let mut month = 2 * day_of_year / 59 + 1;
        if month > MAX_MONTH as i64 {
            month = MAX_MONTH as i64;
        }
        let day = self.0 - (hijri_year_start(year) + hijri_month_offset(month)) + 1;
        Some((year as u16, month as u8, day as u8))
    }

    /// Day of the week, Sunday first.
    pub const fn weekday(self) -> Weekday {
        Weekday::from_days_from_sunday((self.0 + 1).rem_euclid(DAYS_PER_WEEK) as u8)
    }

    /// Signed number of days from `earlier` to `self`.
    pub const fn days_since(self, earlier: Self) -> i64 {
        self.0 - earlier.0
    }
}

/// First day of Hijri `year`.
const fn hijri_year_start(year: i64) -> i64 {
    HIJRI_EPOCH_JDN
        + (year - 1) * HIJRI_COMMON_YEAR_DAYS
        + (3 + HIJRI_LEAPS_PER_CYCLE * year).div_euclid(HIJRI_CYCLE_YEARS)
}

/// Days from 1 Muharram to the first of `month` (`ceil(29.5 * (month - 1))`).
const fn hijri_month_offset(month: i64) -> i64 {
    (59 * (month - 1) + 1) / 2
}

impl Add<i64> for JulianDay {
    type Output = Self;

    fn add(self, days: i64) -> Self {
        Self(self.0 + days)
    }
}

impl Sub<i64> for JulianDay {
    type Output = Self;

    fn sub(self, days: i64) -> Self {
        Self(self.0 - days)
    }
}

impl Sub for JulianDay {
    type Output = i64;

    fn sub(self, other: Self) -> i64 {
        self.days_since(other)
    }
}
