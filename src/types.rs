use crate::consts::{
    CENTURY_CYCLE, DAYS_IN_MONTH, DECEMBER, FEBRUARY, FEBRUARY_DAYS_LEAP, GREGORIAN_CYCLE,
    HIJRI_CYCLE_YEARS, HIJRI_LEAPS_PER_CYCLE, HIJRI_LONG_MONTH_DAYS, HIJRI_SHORT_MONTH_DAYS,
    LEAP_YEAR_CYCLE, MAX_MONTH, MAX_YEAR, MIN_DAY,
};
use crate::date::Calendar;
use crate::error::ValidationError;
use crate::prelude::*;
use serde::{Deserialize, Serialize};
use std::num::NonZeroU16;
use std::num::NonZeroU8;

/// Year number in `1..=MAX_YEAR`, shared by both calendars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize, Deserialize)]
#[display(fmt = "{}", _0)]
#[serde(try_from = "u16", into = "u16")]
pub struct Year(NonZeroU16);

impl Year {
    /// Validates `value` against `1..=MAX_YEAR`.
    ///
    /// # Errors
    /// Returns `ValidationError::InvalidYear` if the value is 0 or > `MAX_YEAR`.
    pub fn new(value: u16) -> Result<Self, ValidationError> {
        let non_zero = NonZeroU16::new(value).ok_or(ValidationError::InvalidYear(value))?;
        if value > MAX_YEAR {
            return Err(ValidationError::InvalidYear(value));
        }
        Ok(Self(non_zero))
    }

    #[inline]
    pub const fn get(self) -> u16 {
        self.0.get()
    }
}

impl TryFrom<u16> for Year {
    type Error = ValidationError;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Year> for u16 {
    fn from(year: Year) -> Self {
        year.0.get()
    }
}

/// Month number in `1..=12`. Both calendars have twelve months.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize, Deserialize)]
#[display(fmt = "{}", _0)]
#[serde(try_from = "u8", into = "u8")]
pub struct Month(NonZeroU8);

impl Month {
    /// Validates `value` against `1..=MAX_MONTH`.
    ///
    /// # Errors
    /// Returns `ValidationError::InvalidMonth` if the value is 0 or > `MAX_MONTH`.
    pub fn new(value: u8) -> Result<Self, ValidationError> {
        let non_zero = NonZeroU8::new(value).ok_or(ValidationError::InvalidMonth(value))?;
        if value > MAX_MONTH {
            return Err(ValidationError::InvalidMonth(value));
        }
        Ok(Self(non_zero))
    }

    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }
}

impl TryFrom<u8> for Month {
    type Error = ValidationError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Month> for u8 {
    fn from(month: Month) -> Self {
        month.0.get()
    }
}

/// Day of the month. [`Day::new`] checks it against a concrete month of either calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize, Deserialize)]
#[display(fmt = "{}", _0)]
#[serde(try_from = "u8", into = "u8")]
pub struct Day(NonZeroU8);

impl Day {
    /// Creates a new Day, validating that it exists in the given month.
    ///
    /// Days are never clamped: the 30th of a 29-day Hijri month is an error.
    ///
    /// # Errors
    /// `ValidationError::InvalidMonth` for a month outside 1..=12;
    /// `ValidationError::InvalidDay` if the value is 0 or past the end of the month.
    pub fn new(value: u8, calendar: Calendar, year: u16, month: u8) -> Result<Self, ValidationError> {
        Month::new(month)?;
        let invalid = ValidationError::InvalidDay {
            calendar,
            year,
            month,
            day: value,
        };
        let Some(non_zero) = NonZeroU8::new(value) else {
            return Err(invalid);
        };
        if value > calendar.days_in_month(year, month) {
            return Err(invalid);
        }

        Ok(Self(non_zero))
    }

    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }
}

impl TryFrom<u8> for Day {
    type Error = ValidationError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        // Without a month only the lower bound and the longest month can be checked
        if value < MIN_DAY || value > DAYS_IN_MONTH[DECEMBER as usize] {
            return Err(ValidationError::InvalidDayOfMonth(value));
        }
        NonZeroU8::new(value)
            .map(Self)
            .ok_or(ValidationError::InvalidDayOfMonth(value))
    }
}

impl From<Day> for u8 {
    fn from(day: Day) -> Self {
        day.0.get()
    }
}

/// Gregorian leap-year rule.
pub const fn is_leap_year(year: u16) -> bool {
    (year % LEAP_YEAR_CYCLE == 0 && year % CENTURY_CYCLE != 0) || (year % GREGORIAN_CYCLE == 0)
}

pub const fn days_in_month(year: u16, month: u8) -> u8 {
    debug_assert!(month != 0 && month <= MAX_MONTH);

    if month == FEBRUARY && is_leap_year(year) {
        FEBRUARY_DAYS_LEAP
    } else {
        DAYS_IN_MONTH[month as usize]
    }
}

/// Tabular Hijri leap-year rule: years 2, 5, 7, 10, 13, 16, 18, 21, 24, 26
/// and 29 of each 30-year cycle have 355 days.
pub const fn is_hijri_leap_year(year: u16) -> bool {
    let y = year as i64;
    (14 + HIJRI_LEAPS_PER_CYCLE * y) % HIJRI_CYCLE_YEARS < HIJRI_LEAPS_PER_CYCLE
}

/// Odd months have 30 days, even months 29; Dhu al-Hijjah gains a day in leap years.
pub const fn hijri_days_in_month(year: u16, month: u8) -> u8 {
    debug_assert!(month != 0 && month <= MAX_MONTH);

    if month % 2 == 1 || (month == DECEMBER && is_hijri_leap_year(year)) {
        HIJRI_LONG_MONTH_DAYS
    } else {
        HIJRI_SHORT_MONTH_DAYS
    }
}
