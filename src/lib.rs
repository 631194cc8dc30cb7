//! Arithmetic Hijri calendar engine.
//!
//! Converts between the proleptic Gregorian calendar and the tabular Islamic
//! calendar through Julian day numbers, computes mean moon phases, builds
//! month grids for Hijri months and calculates calendar ages. Every function
//! is pure: nothing here reads the clock, so "today" is always an argument.
//!
//! ```
//! use hijri_calendar::{CalendarDate, MoonPhase, between, month_grid, phase_for_date, to_hijri};
//!
//! let date = CalendarDate::gregorian(2024, 3, 11).unwrap();
//! assert_eq!(to_hijri(&date).unwrap().to_string(), "1445-09-01 AH");
//!
//! let new_moon = CalendarDate::gregorian(2023, 12, 12).unwrap();
//! assert_eq!(phase_for_date(&new_moon), MoonPhase::New);
//!
//! let grid = month_grid(1445, 9).unwrap();
//! assert_eq!(grid.len() % 7, 0);
//!
//! let birth = CalendarDate::gregorian(1990, 5, 20).unwrap();
//! let today = CalendarDate::gregorian(2024, 5, 19).unwrap();
//! assert_eq!(between(&birth, &today).unwrap().to_string(), "33 years, 11 months, and 29 days");
//! ```

mod age;
mod consts;
mod convert;
mod date;
mod error;
mod grid;
mod jdn;
mod moon;
mod prelude;
mod types;

pub use age::{AgeDuration, between};
pub use consts::*;
pub use convert::{ConversionResult, convert, supported_range, to_gregorian, to_hijri};
pub use date::{Calendar, CalendarDate, Weekday};
pub use error::{CalendarError, RangeError, ValidationError};
pub use grid::{GridCell, MonthGrid, MonthGridIter, month_grid};
pub use jdn::JulianDay;
pub use moon::{MoonPhase, classify, phase_for_date, phase_fraction, reference_new_moon};
pub use types::{
    Day, Month, Year, days_in_month, hijri_days_in_month, is_hijri_leap_year, is_leap_year,
};
