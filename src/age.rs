//! Calendar age: whole years, months and days between two dates.
//!
//! Components are subtracted independently, borrowing from the month that
//! precedes the reference month when the day difference is negative.

use serde::{Deserialize, Serialize};

use crate::consts::{DECEMBER, JANUARY, MAX_MONTH};
use crate::convert::convert;
use crate::date::CalendarDate;
use crate::error::{CalendarError, ValidationError};
use crate::prelude::*;

/// Elapsed calendar time, as people state ages.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize, Deserialize,
)]
#[display(fmt = "{years} years, {months} months, and {days} days")]
pub struct AgeDuration {
    pub years: u16,
    /// Always in `0..=11`
    pub months: u8,
    pub days: u8,
}

/// Age on `reference` of someone born on `birth`.
///
/// Both dates may be in either calendar; the birth date is converted into the
/// reference date's calendar first. The caller supplies "today".
///
/// # Errors
/// `ValidationError::BirthAfterReference` if `birth` is after `reference`;
/// `RangeError` if `birth` cannot be expressed in the reference calendar.
pub fn between(birth: &CalendarDate, reference: &CalendarDate) -> Result<AgeDuration, CalendarError> {
    let calendar = reference.calendar();
    let aligned = if birth.calendar() == calendar {
        *birth
    } else {
        convert(birth)?.target
    };

    if aligned > *reference {
        return Err(ValidationError::BirthAfterReference {
            birth: *birth,
            reference: *reference,
        }
        .into());
    }

    let mut years = i32::from(reference.year()) - i32::from(aligned.year());
    let mut months = i32::from(reference.month()) - i32::from(aligned.month());
    let mut days = i32::from(reference.day()) - i32::from(aligned.day());

    if days < 0 {
        months -= 1;
        let (prev_year, prev_month) = if reference.month() == JANUARY {
            (reference.year().saturating_sub(1), DECEMBER)
        } else {
            (reference.year(), reference.month() - 1)
        };
        let borrowed = i32::from(calendar.days_in_month(prev_year, prev_month));
        days += borrowed;
        // Birth day past the end of the borrowed month: count from its last day
        if days < 0 {
            days = i32::from(reference.day());
        }
    }

    if months < 0 {
        years -= 1;
        months += i32::from(MAX_MONTH);
    }

    // aligned <= reference keeps every component non-negative and in range
    Ok(AgeDuration {
        years: u16::try_from(years).unwrap_or_default(),
        months: u8::try_from(months).unwrap_or_default(),
        days: u8::try_from(days).unwrap_or_default(),
    })
}
