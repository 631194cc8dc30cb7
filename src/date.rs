use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::consts::{
    ALT_DATE_SEPARATOR, DATE_SEPARATOR, GREGORIAN_MONTH_NAMES, HIJRI_MONTH_NAMES, HIJRI_SUFFIX,
};
use crate::error::{RangeError, ValidationError};
use crate::jdn::JulianDay;
use crate::prelude::*;
use crate::types::{self, Day, Month, Year};

/// The calendar system a [`CalendarDate`] is expressed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Calendar {
    /// Proleptic Gregorian calendar
    #[display(fmt = "Gregorian")]
    Gregorian,
    /// Tabular (arithmetic) Islamic calendar
    #[display(fmt = "Hijri")]
    Hijri,
}

impl Calendar {
    /// Length of `month` in `year`. `month` must be in `1..=12`.
    pub const fn days_in_month(self, year: u16, month: u8) -> u8 {
        match self {
            Self::Gregorian => types::days_in_month(year, month),
            Self::Hijri => types::hijri_days_in_month(year, month),
        }
    }

    pub const fn is_leap_year(self, year: u16) -> bool {
        match self {
            Self::Gregorian => types::is_leap_year(year),
            Self::Hijri => types::is_hijri_leap_year(year),
        }
    }

    /// English month name. `month` must be in `1..=12`.
    pub const fn month_name(self, month: u8) -> &'static str {
        match self {
            Self::Gregorian => GREGORIAN_MONTH_NAMES[month as usize],
            Self::Hijri => HIJRI_MONTH_NAMES[month as usize],
        }
    }

    /// The calendar a conversion from `self` targets.
    pub const fn other(self) -> Self {
        match self {
            Self::Gregorian => Self::Hijri,
            Self::Hijri => Self::Gregorian,
        }
    }

    fn split(self, jdn: JulianDay) -> Option<(u16, u8, u8)> {
        match self {
            Self::Gregorian => jdn.to_gregorian(),
            Self::Hijri => jdn.to_hijri(),
        }
    }
}

/// Day of the week. Weeks start on Sunday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Weekday {
    #[display(fmt = "Sunday")]
    Sunday,
    #[display(fmt = "Monday")]
    Monday,
    #[display(fmt = "Tuesday")]
    Tuesday,
    #[display(fmt = "Wednesday")]
    Wednesday,
    #[display(fmt = "Thursday")]
    Thursday,
    #[display(fmt = "Friday")]
    Friday,
    #[display(fmt = "Saturday")]
    Saturday,
}

impl Weekday {
    pub const ALL: [Self; 7] = [
        Self::Sunday,
        Self::Monday,
        Self::Tuesday,
        Self::Wednesday,
        Self::Thursday,
        Self::Friday,
        Self::Saturday,
    ];

    /// `0` is Sunday; values wrap modulo 7.
    pub const fn from_days_from_sunday(n: u8) -> Self {
        Self::ALL[(n % 7) as usize]
    }

    pub const fn days_from_sunday(self) -> u8 {
        self as u8
    }

    /// Three-letter column header ("Sun", "Mon", ...)
    pub const fn short_name(self) -> &'static str {
        match self {
            Self::Sunday => "Sun",
            Self::Monday => "Mon",
            Self::Tuesday => "Tue",
            Self::Wednesday => "Wed",
            Self::Thursday => "Thu",
            Self::Friday => "Fri",
            Self::Saturday => "Sat",
        }
    }
}

/// A validated day in either the Gregorian or the Hijri calendar.
///
/// Dates order by calendar first, then chronologically within a calendar.
/// Compare [`CalendarDate::julian_day`] to order across calendars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CalendarDate {
    calendar: Calendar,
    year: Year,
    month: Month,
    day: Day,
}

impl CalendarDate {
    /// Creates a date, validating every component against `calendar`.
    ///
    /// # Errors
    /// Returns a [`ValidationError`] for an out-of-range year or month, or a
    /// day that does not exist in that month. Days are never clamped.
    pub fn new(calendar: Calendar, year: u16, month: u8, day: u8) -> Result<Self, ValidationError> {
        let year_nz = Year::new(year)?;
        let month_nz = Month::new(month)?;
        let day_nz = Day::new(day, calendar, year, month)?;
        Ok(Self {
            calendar,
            year: year_nz,
            month: month_nz,
            day: day_nz,
        })
    }

    /// Creates a proleptic Gregorian date.
    ///
    /// # Errors
    /// See [`CalendarDate::new`].
    pub fn gregorian(year: u16, month: u8, day: u8) -> Result<Self, ValidationError> {
        Self::new(Calendar::Gregorian, year, month, day)
    }

    /// Creates a Hijri date.
    ///
    /// # Errors
    /// See [`CalendarDate::new`].
    pub fn hijri(year: u16, month: u8, day: u8) -> Result<Self, ValidationError> {
        Self::new(Calendar::Hijri, year, month, day)
    }

    /// Expresses `jdn` in `calendar`.
    ///
    /// # Errors
    /// Returns `RangeError::JulianDayOutOfRange` when the day falls outside
    /// years 1..=9999 of that calendar.
    pub fn from_julian_day(jdn: JulianDay, calendar: Calendar) -> Result<Self, RangeError> {
        let (year, month, day) = calendar
            .split(jdn)
            .ok_or(RangeError::JulianDayOutOfRange { jdn, calendar })?;
        // The split components are valid by construction; map a mismatch to the same range error
        Self::new(calendar, year, month, day)
            .map_err(|_| RangeError::JulianDayOutOfRange { jdn, calendar })
    }

    pub const fn calendar(&self) -> Calendar {
        self.calendar
    }

    pub const fn year(&self) -> u16 {
        self.year.get()
    }

    pub const fn month(&self) -> u8 {
        self.month.get()
    }

    pub const fn day(&self) -> u8 {
        self.day.get()
    }

    /// Returns the Year type
    pub const fn year_typed(&self) -> Year {
        self.year
    }

    /// Returns the Month type
    pub const fn month_typed(&self) -> Month {
        self.month
    }

    /// Returns the Day type
    pub const fn day_typed(&self) -> Day {
        self.day
    }

    /// The calendar-independent day number of this date.
    pub const fn julian_day(&self) -> JulianDay {
        let (y, m, d) = (self.year.get(), self.month.get(), self.day.get());
        match self.calendar {
            Calendar::Gregorian => JulianDay::from_gregorian(y, m, d),
            Calendar::Hijri => JulianDay::from_hijri(y, m, d),
        }
    }

    pub const fn weekday(&self) -> Weekday {
        self.julian_day().weekday()
    }

    /// Number of days in this date's month.
    pub const fn days_in_month(&self) -> u8 {
        self.calendar.days_in_month(self.year.get(), self.month.get())
    }

    pub const fn month_name(&self) -> &'static str {
        self.calendar.month_name(self.month.get())
    }

    /// Moves by `days` (negative for the past), staying in the same calendar.
    ///
    /// # Errors
    /// Returns `RangeError::JulianDayOutOfRange` when the result leaves the calendar's year range.
    pub fn add_days(&self, days: i64) -> Result<Self, RangeError> {
        Self::from_julian_day(self.julian_day() + days, self.calendar)
    }

    /// The following day.
    ///
    /// # Errors
    /// See [`CalendarDate::add_days`].
    pub fn succ(&self) -> Result<Self, RangeError> {
        self.add_days(1)
    }

    /// The preceding day.
    ///
    /// # Errors
    /// See [`CalendarDate::add_days`].
    pub fn pred(&self) -> Result<Self, RangeError> {
        self.add_days(-1)
    }

    /// Long human form: `29 Jumada al-Awwal 1445` or `12 December 2023`.
    pub fn format_long(&self) -> String {
        format!("{} {} {}", self.day, self.month_name(), self.year)
    }

    /// Converts to columns: (calendar, year, month, day)
    pub const fn to_columns(&self) -> (Calendar, u16, u8, u8) {
        (self.calendar, self.year.get(), self.month.get(), self.day.get())
    }

    /// Components are plain ASCII digits; `str::parse` alone would also take a leading `+`.
    fn digits(s: &str) -> Result<&str, ValidationError> {
        if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ValidationError::InvalidFormat(s.to_owned()));
        }
        Ok(s)
    }

    fn parse_u16(s: &str) -> Result<u16, ValidationError> {
        Self::digits(s)?
            .parse::<u16>()
            .map_err(|_| ValidationError::InvalidFormat(s.to_owned()))
    }

    fn parse_u8(s: &str) -> Result<u8, ValidationError> {
        Self::digits(s)?
            .parse::<u8>()
            .map_err(|_| ValidationError::InvalidFormat(s.to_owned()))
    }
}

impl std::fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:04}{DATE_SEPARATOR}{:02}{DATE_SEPARATOR}{:02}",
            self.year.get(),
            self.month.get(),
            self.day.get()
        )?;
        if self.calendar == Calendar::Hijri {
            write!(f, " {HIJRI_SUFFIX}")?;
        }
        Ok(())
    }
}

impl FromStr for CalendarDate {
    type Err = ValidationError;

    /// Parses `YYYY-MM-DD` (Gregorian) or `YYYY-MM-DD AH` (Hijri).
    /// `/` is accepted in place of `-`, but not mixed with it.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::EmptyInput);
        }

        let (body, calendar) = match trimmed
            .len()
            .checked_sub(HIJRI_SUFFIX.len())
            .and_then(|at| trimmed.get(at..).map(|suffix| (at, suffix)))
        {
            Some((at, suffix)) if suffix.eq_ignore_ascii_case(HIJRI_SUFFIX) => {
                (trimmed[..at].trim_end(), Calendar::Hijri)
            }
            _ => (trimmed, Calendar::Gregorian),
        };

        let has_hyphen = body.contains(DATE_SEPARATOR);
        let has_slash = body.contains(ALT_DATE_SEPARATOR);
        let separator = match (has_hyphen, has_slash) {
            (true, true) => {
                return Err(ValidationError::InvalidFormat(format!(
                    "Mixed delimiters ({DATE_SEPARATOR} and {ALT_DATE_SEPARATOR})"
                )));
            }
            (true, false) => DATE_SEPARATOR,
            (false, true) => ALT_DATE_SEPARATOR,
            (false, false) => return Err(ValidationError::InvalidFormat(body.to_owned())),
        };

        let parts: Vec<&str> = body.split(separator).map(str::trim).collect();
        let [year, month, day] = parts.as_slice() else {
            return Err(ValidationError::InvalidFormat(format!(
                "Expected YYYY{separator}MM{separator}DD, found {} components",
                parts.len()
            )));
        };

        Self::new(
            calendar,
            Self::parse_u16(year)?,
            Self::parse_u8(month)?,
            Self::parse_u8(day)?,
        )
    }
}

impl TryFrom<(Calendar, u16, u8, u8)> for CalendarDate {
    type Error = ValidationError;

    fn try_from(value: (Calendar, u16, u8, u8)) -> Result<Self, Self::Error> {
        Self::new(value.0, value.1, value.2, value.3)
    }
}

impl Serialize for CalendarDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for CalendarDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
