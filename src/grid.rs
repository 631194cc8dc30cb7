use std::iter::FusedIterator;

use serde::{Deserialize, Serialize};

use crate::consts::{DAYS_PER_WEEK, GREGORIAN_MAX_JDN, HIJRI_EPOCH_JDN, HIJRI_SUFFIX, MIN_DAY};
use crate::convert::supported_range;
use crate::date::{Calendar, CalendarDate};
use crate::error::{CalendarError, RangeError};
use crate::jdn::JulianDay;
use crate::moon::{MoonPhase, phase_for_date};

/// The Gregorian days shown for one Hijri month: every full week
/// (Sunday through Saturday) that touches the month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MonthGrid {
    first: CalendarDate,
    last: CalendarDate,
    start: CalendarDate,
    end: CalendarDate,
}

/// One day of a [`MonthGrid`], with what the month browser renders for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GridCell {
    /// The Gregorian day
    pub date: CalendarDate,
    /// The same day in the Hijri calendar
    pub hijri: CalendarDate,
    /// Whether the day belongs to the requested Hijri month
    pub in_month: bool,
    pub phase: MoonPhase,
}

/// Builds the grid for Hijri `hijri_year`/`hijri_month`.
///
/// # Errors
/// `ValidationError` for an invalid year or month; `RangeError::OutOfRange`
/// if any day of the grid falls outside the conversion window (the first
/// weeks of 1 AH and the months after 9666-04 AH).
pub fn month_grid(hijri_year: u16, hijri_month: u8) -> Result<MonthGrid, CalendarError> {
    let first = CalendarDate::hijri(hijri_year, hijri_month, MIN_DAY)?;
    let last = CalendarDate::hijri(hijri_year, hijri_month, first.days_in_month())?;

    let first_jdn = first.julian_day();
    let last_jdn = last.julian_day();
    let start = first_jdn - i64::from(first_jdn.weekday().days_from_sunday());
    let end = last_jdn + (DAYS_PER_WEEK - 1 - i64::from(last_jdn.weekday().days_from_sunday()));

    if start.get() < HIJRI_EPOCH_JDN || end.get() > GREGORIAN_MAX_JDN {
        let (min, max) = supported_range(Calendar::Hijri)?;
        let date = if start.get() < HIJRI_EPOCH_JDN { first } else { last };
        return Err(RangeError::OutOfRange { date, min, max }.into());
    }

    Ok(MonthGrid {
        first,
        last,
        start: CalendarDate::from_julian_day(start, Calendar::Gregorian)?,
        end: CalendarDate::from_julian_day(end, Calendar::Gregorian)?,
    })
}

impl MonthGrid {
    pub const fn hijri_year(&self) -> u16 {
        self.first.year()
    }

    pub const fn hijri_month(&self) -> u8 {
        self.first.month()
    }

    /// First day of the Hijri month
    pub const fn first_of_month(&self) -> CalendarDate {
        self.first
    }

    /// Last day of the Hijri month
    pub const fn last_of_month(&self) -> CalendarDate {
        self.last
    }

    /// The Sunday the grid starts on
    pub const fn start(&self) -> CalendarDate {
        self.start
    }

    /// The Saturday the grid ends on (inclusive)
    pub const fn end(&self) -> CalendarDate {
        self.end
    }

    /// Number of days in the grid, always a multiple of 7.
    pub fn len(&self) -> usize {
        usize::try_from(self.end.julian_day() - self.start.julian_day() + 1).unwrap_or(0)
    }

    /// A grid always holds at least one week.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of week rows.
    pub fn week_count(&self) -> usize {
        self.len() / 7
    }

    /// Walks the grid from Sunday to Saturday. Each call starts over.
    pub fn iter(&self) -> MonthGridIter {
        MonthGridIter {
            front: self.start.julian_day(),
            back: self.end.julian_day(),
        }
    }

    /// Whether `date` (in either calendar) is one of the grid's days.
    pub fn contains(&self, date: &CalendarDate) -> bool {
        let jdn = date.julian_day();
        self.start.julian_day() <= jdn && jdn <= self.end.julian_day()
    }

    /// Whether `date` (in either calendar) belongs to the Hijri month itself.
    pub fn in_month(&self, date: &CalendarDate) -> bool {
        let jdn = date.julian_day();
        self.first.julian_day() <= jdn && jdn <= self.last.julian_day()
    }

    /// The grid as rows of seven days.
    pub fn weeks(&self) -> Vec<[CalendarDate; 7]> {
        let days: Vec<CalendarDate> = self.iter().collect();
        days.chunks_exact(7)
            .filter_map(|week| <[CalendarDate; 7]>::try_from(week).ok())
            .collect()
    }

    /// Every grid day with its Hijri counterpart and moon phase.
    pub fn cells(&self) -> impl Iterator<Item = GridCell> + '_ {
        self.iter().filter_map(move |date| {
            // The whole grid lies inside the conversion window
            let hijri = CalendarDate::from_julian_day(date.julian_day(), Calendar::Hijri).ok()?;
            Some(GridCell {
                date,
                hijri,
                in_month: self.in_month(&date),
                phase: phase_for_date(&date),
            })
        })
    }
}

impl std::fmt::Display for MonthGrid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:04}-{:02} {HIJRI_SUFFIX}: {}/{}",
            self.hijri_year(),
            self.hijri_month(),
            self.start,
            self.end
        )
    }
}

impl IntoIterator for &MonthGrid {
    type Item = CalendarDate;
    type IntoIter = MonthGridIter;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over the Gregorian days of a [`MonthGrid`].
///
/// `month_grid` only builds grids that lie inside the conversion window, so
/// every day converts and the iterator yields exactly `len()` items.
#[derive(Debug, Clone)]
pub struct MonthGridIter {
    front: JulianDay,
    back: JulianDay,
}

impl MonthGridIter {
    fn day(jdn: JulianDay) -> Option<CalendarDate> {
        let date = CalendarDate::from_julian_day(jdn, Calendar::Gregorian);
        debug_assert!(date.is_ok(), "grid day {jdn} outside the conversion window");
        date.ok()
    }

    fn remaining(&self) -> usize {
        usize::try_from(self.back - self.front + 1).unwrap_or(0)
    }
}

impl Iterator for MonthGridIter {
    type Item = CalendarDate;

    fn next(&mut self) -> Option<Self::Item> {
        if self.front > self.back {
            return None;
        }
        let day = self.front;
        self.front = self.front + 1;
        Self::day(day)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.remaining();
        (n, Some(n))
    }
}

impl DoubleEndedIterator for MonthGridIter {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front > self.back {
            return None;
        }
        let day = self.back;
        self.back = self.back - 1;
        Self::day(day)
    }
}

impl ExactSizeIterator for MonthGridIter {}

impl FusedIterator for MonthGridIter {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::convert::{to_gregorian, to_hijri};
    use crate::date::Weekday;
    use crate::error::ValidationError;
    use crate::test_utils::{greg, hijri};

    #[test]
    fn test_ramadan_1445() {
        let grid = month_grid(1445, 9).unwrap();
        assert_eq!(grid.start(), greg(2024, 3, 10));
        assert_eq!(grid.end(), greg(2024, 4, 13));
        assert_eq!(grid.len(), 35);
        assert_eq!(grid.week_count(), 5);
        assert_eq!(grid.first_of_month(), hijri(1445, 9, 1));
        assert_eq!(grid.last_of_month(), hijri(1445, 9, 30));
        assert_eq!(grid.to_string(), "1445-09 AH: 2024-03-10/2024-04-13");
    }

    #[test]
    fn test_grid_shape_many_months() {
        for year in [1356_u16, 1420, 1445, 1446, 1500] {
            for month in 1..=12 {
                let grid = month_grid(year, month).unwrap();
                let days: Vec<CalendarDate> = grid.iter().collect();

                assert_eq!(days.len() % 7, 0, "{year}-{month}");
                assert_eq!(days.len(), grid.len());
                assert_eq!(days[0].weekday(), Weekday::Sunday);
                assert_eq!(days[days.len() - 1].weekday(), Weekday::Saturday);

                // Strictly increasing, no gaps
                for pair in days.windows(2) {
                    assert_eq!(pair[1].julian_day() - pair[0].julian_day(), 1);
                }

                // Every day of the Hijri month appears exactly once
                let first = grid.first_of_month();
                for day in 1..=first.days_in_month() {
                    let g = to_gregorian(&hijri(year, month, day)).unwrap();
                    assert_eq!(days.iter().filter(|&&d| d == g).count(), 1);
                }
            }
        }
    }

    #[test]
    fn test_restartable() {
        let grid = month_grid(1446, 2).unwrap();
        let a: Vec<_> = grid.iter().collect();
        let b: Vec<_> = (&grid).into_iter().collect();
        assert_eq!(a, b);
        assert_eq!(month_grid(1446, 2).unwrap(), grid);
    }

    #[test]
    fn test_double_ended_and_exact_size() {
        let grid = month_grid(1445, 1).unwrap();
        let mut iter = grid.iter();
        assert_eq!(iter.len(), 35);
        assert_eq!(iter.next(), Some(greg(2023, 7, 16)));
        assert_eq!(iter.next_back(), Some(greg(2023, 8, 19)));
        assert_eq!(iter.len(), 33);

        let reversed: Vec<_> = grid.iter().rev().collect();
        assert_eq!(reversed.first(), Some(&grid.end()));
        assert_eq!(reversed.last(), Some(&grid.start()));
    }

    #[test]
    fn test_edge_grids_yield_every_day() {
        // The first and last grids that fit the conversion window
        for (year, month) in [(1_u16, 2_u8), (9666, 2)] {
            let grid = month_grid(year, month).unwrap();
            assert_eq!(grid.iter().count(), grid.len(), "{grid}");
            assert_eq!(grid.iter().rev().count(), grid.len(), "{grid}");
            assert_eq!(grid.cells().count(), grid.len(), "{grid}");
        }
        assert_eq!(
            month_grid(1, 2).unwrap().start().julian_day(),
            JulianDay::new(1948470)
        );
        assert_eq!(
            month_grid(9666, 2).unwrap().end().julian_day(),
            JulianDay::new(5373457)
        );
    }

    #[test]
    fn test_weeks() {
        let grid = month_grid(1445, 9).unwrap();
        let weeks = grid.weeks();
        assert_eq!(weeks.len(), 5);
        for week in &weeks {
            assert_eq!(week[0].weekday(), Weekday::Sunday);
            assert_eq!(week[6].weekday(), Weekday::Saturday);
        }
    }

    #[test]
    fn test_contains_and_in_month() {
        let grid = month_grid(1445, 9).unwrap();
        // Sunday before 1 Ramadan is shown but not part of the month
        assert!(grid.contains(&greg(2024, 3, 10)));
        assert!(!grid.in_month(&greg(2024, 3, 10)));
        assert!(grid.in_month(&hijri(1445, 9, 15)));
        assert!(!grid.contains(&greg(2024, 3, 9)));
        assert!(!grid.contains(&greg(2024, 4, 14)));
    }

    #[test]
    fn test_cells() {
        let grid = month_grid(1445, 6).unwrap();
        let cells: Vec<GridCell> = grid.cells().collect();
        assert_eq!(cells.len(), grid.len());
        assert_eq!(cells.iter().filter(|c| c.in_month).count(), 29);
        for cell in &cells {
            assert_eq!(to_hijri(&cell.date).unwrap(), cell.hijri);
            assert_eq!(cell.phase, phase_for_date(&cell.date));
        }
        let reference = cells
            .iter()
            .find(|c| c.date == greg(2023, 12, 12))
            .unwrap();
        assert_eq!(reference.phase, MoonPhase::New);
    }

    #[test]
    fn test_invalid_month() {
        assert!(matches!(
            month_grid(1445, 13),
            Err(CalendarError::Validation(ValidationError::InvalidMonth(13)))
        ));
        assert!(matches!(
            month_grid(0, 1),
            Err(CalendarError::Validation(ValidationError::InvalidYear(0)))
        ));
    }

    #[test]
    fn test_out_of_window() {
        assert!(matches!(
            month_grid(1, 1),
            Err(CalendarError::Range(RangeError::OutOfRange { .. }))
        ));
        assert!(matches!(
            month_grid(9666, 4),
            Err(CalendarError::Range(RangeError::OutOfRange { .. }))
        ));
        assert!(month_grid(1, 2).is_ok());
        assert!(month_grid(9666, 3).is_err());
    }
}
