use crate::consts::{MAX_MONTH, MAX_YEAR};
use crate::date::{Calendar, CalendarDate};
use crate::jdn::JulianDay;
use crate::prelude::*;

/// A rejected input: a malformed or semantically invalid date, or an
/// argument that does not make sense for the requested operation.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum ValidationError {
    #[display(fmt = "Invalid year: {} (must be 1-{})", "_0", MAX_YEAR)]
    InvalidYear(u16),
    #[display(fmt = "Invalid month: {} (must be 1-{})", "_0", MAX_MONTH)]
    InvalidMonth(u8),
    #[display(fmt = "Invalid day {day} for {calendar} month {year:04}-{month:02}")]
    InvalidDay {
        calendar: Calendar,
        year: u16,
        month: u8,
        day: u8,
    },
    #[display(fmt = "Invalid day of month: {}", "_0")]
    InvalidDayOfMonth(u8),
    #[display(fmt = "Expected a {expected} date, got a {found} date")]
    WrongCalendar { expected: Calendar, found: Calendar },
    #[display(fmt = "Birth date {birth} is after the reference date {reference}")]
    BirthAfterReference {
        birth: CalendarDate,
        reference: CalendarDate,
    },
    #[display(fmt = "Invalid date format: {_0}")]
    InvalidFormat(String),
    #[display(fmt = "Empty date string")]
    EmptyInput,
}

impl std::error::Error for ValidationError {}

/// A valid date whose counterpart lies outside the supported window.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RangeError {
    /// Conversion source maps outside `min..=max`.
    #[error("Date {date} is outside the supported conversion window ({min} to {max})")]
    OutOfRange {
        date: CalendarDate,
        min: CalendarDate,
        max: CalendarDate,
    },

    /// Day arithmetic left the representable range of a calendar.
    #[error("Julian day {jdn} has no {calendar} date in the supported range")]
    JulianDayOutOfRange { jdn: JulianDay, calendar: Calendar },
}

/// Any failure raised by the calendar engine.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CalendarError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Range(#[from] RangeError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_messages() {
        assert_eq!(
            ValidationError::InvalidYear(0).to_string(),
            "Invalid year: 0 (must be 1-9999)"
        );
        assert_eq!(
            ValidationError::InvalidMonth(13).to_string(),
            "Invalid month: 13 (must be 1-12)"
        );
        assert_eq!(
            ValidationError::InvalidDay {
                calendar: Calendar::Hijri,
                year: 1445,
                month: 2,
                day: 30,
            }
            .to_string(),
            "Invalid day 30 for Hijri month 1445-02"
        );
        assert_eq!(
            ValidationError::WrongCalendar {
                expected: Calendar::Gregorian,
                found: Calendar::Hijri,
            }
            .to_string(),
            "Expected a Gregorian date, got a Hijri date"
        );
    }

    #[test]
    fn test_birth_after_reference_message() {
        let err = ValidationError::BirthAfterReference {
            birth: CalendarDate::gregorian(2030, 1, 1).unwrap(),
            reference: CalendarDate::gregorian(2024, 1, 1).unwrap(),
        };
        assert_eq!(
            err.to_string(),
            "Birth date 2030-01-01 is after the reference date 2024-01-01"
        );
    }

    #[test]
    fn test_range_error_message() {
        let err = RangeError::OutOfRange {
            date: CalendarDate::gregorian(600, 1, 1).unwrap(),
            min: CalendarDate::gregorian(622, 7, 19).unwrap(),
            max: CalendarDate::gregorian(9999, 12, 31).unwrap(),
        };
        assert_eq!(
            err.to_string(),
            "Date 0600-01-01 is outside the supported conversion window (0622-07-19 to 9999-12-31)"
        );
    }

    #[test]
    fn test_calendar_error_is_transparent() {
        let err: CalendarError = ValidationError::EmptyInput.into();
        assert_eq!(err.to_string(), "Empty date string");
        assert!(matches!(err, CalendarError::Validation(_)));
    }

    #[test]
    fn test_errors_are_send_sync_std_error() {
        fn assert_impl<T: std::error::Error + Send + Sync + 'static>() {}
        assert_impl::<ValidationError>();
        assert_impl::<RangeError>();
        assert_impl::<CalendarError>();
    }
}
