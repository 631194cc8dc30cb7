//! Hijri/Gregorian conversion through the Julian day number.

use serde::{Deserialize, Serialize};

use crate::consts::{GREGORIAN_MAX_JDN, HIJRI_EPOCH_JDN};
use crate::date::{Calendar, CalendarDate};
use crate::error::{CalendarError, RangeError, ValidationError};
use crate::jdn::JulianDay;
use crate::prelude::*;

/// A date together with its counterpart in the other calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[display(fmt = "{source} -> {target}")]
pub struct ConversionResult {
    pub source: CalendarDate,
    pub target: CalendarDate,
}

/// Inclusive bounds of the conversion window, expressed in `calendar`.
///
/// The window runs from 1 Muharram 1 AH (0622-07-19) to 9999-12-31
/// (9666-04-02 AH).
///
/// # Errors
/// Never fails in practice: both ends lie inside both calendars' year ranges.
pub fn supported_range(calendar: Calendar) -> Result<(CalendarDate, CalendarDate), RangeError> {
    let min = CalendarDate::from_julian_day(JulianDay::new(HIJRI_EPOCH_JDN), calendar)?;
    let max = CalendarDate::from_julian_day(JulianDay::new(GREGORIAN_MAX_JDN), calendar)?;
    Ok((min, max))
}

fn convert_to(date: &CalendarDate, target: Calendar) -> Result<CalendarDate, CalendarError> {
    if date.calendar() == target {
        return Err(ValidationError::WrongCalendar {
            expected: target.other(),
            found: date.calendar(),
        }
        .into());
    }
    let jdn = date.julian_day();
    if !(HIJRI_EPOCH_JDN..=GREGORIAN_MAX_JDN).contains(&jdn.get()) {
        let (min, max) = supported_range(date.calendar())?;
        return Err(RangeError::OutOfRange {
            date: *date,
            min,
            max,
        }
        .into());
    }
    Ok(CalendarDate::from_julian_day(jdn, target)?)
}

/// Converts a Gregorian date to the Hijri calendar.
///
/// # Errors
/// `ValidationError::WrongCalendar` if `date` is not Gregorian;
/// `RangeError::OutOfRange` if it precedes 1 Muharram 1 AH.
pub fn to_hijri(date: &CalendarDate) -> Result<CalendarDate, CalendarError> {
    convert_to(date, Calendar::Hijri)
}

/// Converts a Hijri date to the Gregorian calendar.
///
/// # Errors
/// `ValidationError::WrongCalendar` if `date` is not Hijri;
/// `RangeError::OutOfRange` if it falls after 9999-12-31.
pub fn to_gregorian(date: &CalendarDate) -> Result<CalendarDate, CalendarError> {
    convert_to(date, Calendar::Gregorian)
}

/// Converts `date` to whichever calendar it is not in.
///
/// # Errors
/// `RangeError::OutOfRange` if the counterpart is outside the window.
pub fn convert(date: &CalendarDate) -> Result<ConversionResult, CalendarError> {
    let target = convert_to(date, date.calendar().other())?;
    Ok(ConversionResult {
        source: *date,
        target,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{greg, hijri};

    #[test]
    fn test_known_conversions() {
        struct TestCase {
            gregorian: (u16, u8, u8),
            hijri: (u16, u8, u8),
            description: &'static str,
        }

        let cases = [
            TestCase {
                gregorian: (622, 7, 19),
                hijri: (1, 1, 1),
                description: "epoch",
            },
            TestCase {
                gregorian: (2000, 1, 1),
                hijri: (1420, 9, 24),
                description: "J2000",
            },
            TestCase {
                gregorian: (2023, 12, 12),
                hijri: (1445, 5, 29),
                description: "reference new moon",
            },
            TestCase {
                gregorian: (2024, 3, 11),
                hijri: (1445, 9, 1),
                description: "1 Ramadan 1445",
            },
            TestCase {
                gregorian: (2024, 7, 7),
                hijri: (1445, 12, 30),
                description: "leap day of 1445",
            },
            TestCase {
                gregorian: (2024, 7, 8),
                hijri: (1446, 1, 1),
                description: "new year 1446",
            },
            TestCase {
                gregorian: (1937, 3, 14),
                hijri: (1356, 1, 1),
                description: "start of the minimum window",
            },
            TestCase {
                gregorian: (2077, 11, 16),
                hijri: (1500, 12, 29),
                description: "end of the minimum window",
            },
            TestCase {
                gregorian: (9999, 12, 31),
                hijri: (9666, 4, 2),
                description: "end of the supported window",
            },
        ];

        for case in &cases {
            let (gy, gm, gd) = case.gregorian;
            let (hy, hm, hd) = case.hijri;
            assert_eq!(
                to_hijri(&greg(gy, gm, gd)).unwrap(),
                hijri(hy, hm, hd),
                "{}",
                case.description
            );
            assert_eq!(
                to_gregorian(&hijri(hy, hm, hd)).unwrap(),
                greg(gy, gm, gd),
                "{}",
                case.description
            );
        }
    }

    #[test]
    fn test_round_trip_every_day_1937_to_2077() {
        let mut date = greg(1937, 1, 1);
        let end = greg(2077, 12, 31);
        let mut previous_hijri = None;
        while date <= end {
            let h = to_hijri(&date).unwrap();
            assert_eq!(to_gregorian(&h).unwrap(), date, "round trip of {date}");
            if let Some(prev) = previous_hijri {
                assert!(h > prev, "{h} should follow {prev}");
            }
            previous_hijri = Some(h);
            date = date.succ().unwrap();
        }
    }

    #[test]
    fn test_round_trip_sampled_across_window() {
        let (min, max) = supported_range(Calendar::Gregorian).unwrap();
        let (start, end) = (min.julian_day().get(), max.julian_day().get());
        for jdn in (start..=end).step_by(997).chain([end]) {
            let date = CalendarDate::from_julian_day(JulianDay::new(jdn), Calendar::Gregorian).unwrap();
            let back = to_gregorian(&to_hijri(&date).unwrap()).unwrap();
            assert_eq!(back, date);
        }
    }

    #[test]
    fn test_wrong_calendar() {
        assert_eq!(
            to_hijri(&hijri(1445, 1, 1)),
            Err(CalendarError::Validation(ValidationError::WrongCalendar {
                expected: Calendar::Gregorian,
                found: Calendar::Hijri,
            }))
        );
        assert!(matches!(
            to_gregorian(&greg(2024, 1, 1)),
            Err(CalendarError::Validation(ValidationError::WrongCalendar { .. }))
        ));
    }

    #[test]
    fn test_out_of_range() {
        let before_epoch = greg(622, 7, 18);
        assert!(matches!(
            to_hijri(&before_epoch),
            Err(CalendarError::Range(RangeError::OutOfRange { date, .. })) if date == before_epoch
        ));
        assert!(matches!(
            to_gregorian(&hijri(9666, 4, 3)),
            Err(CalendarError::Range(RangeError::OutOfRange { .. }))
        ));
        assert!(to_gregorian(&hijri(9999, 1, 1)).is_err());
    }

    #[test]
    fn test_supported_range() {
        assert_eq!(
            supported_range(Calendar::Gregorian).unwrap(),
            (greg(622, 7, 19), greg(9999, 12, 31))
        );
        assert_eq!(
            supported_range(Calendar::Hijri).unwrap(),
            (hijri(1, 1, 1), hijri(9666, 4, 2))
        );
    }

    #[test]
    fn test_convert_either_direction() {
        let result = convert(&greg(2024, 3, 11)).unwrap();
        assert_eq!(result.source, greg(2024, 3, 11));
        assert_eq!(result.target, hijri(1445, 9, 1));
        assert_eq!(result.to_string(), "2024-03-11 -> 1445-09-01 AH");

        let back = convert(&result.target).unwrap();
        assert_eq!(back.target, result.source);
    }

    #[test]
    fn test_deterministic() {
        let date = greg(1999, 12, 31);
        assert_eq!(to_hijri(&date), to_hijri(&date));
    }
}
