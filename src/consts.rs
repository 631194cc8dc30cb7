/// Maximum valid year (inclusive), in either calendar
pub const MAX_YEAR: u16 = 9999;

/// Maximum valid month (December / Dhu al-Hijjah)
pub const MAX_MONTH: u8 = 12;

/// First day of month, used for lower bounds
pub const MIN_DAY: u8 = 1;

/// Month number for January / Muharram
pub const JANUARY: u8 = 1;
/// Month number for February
pub const FEBRUARY: u8 = 2;
/// Month number for December / Dhu al-Hijjah
pub const DECEMBER: u8 = 12;

/// Days in February for leap years
pub const FEBRUARY_DAYS_LEAP: u8 = 29;

/// Maximum days in each Gregorian month (index 0 is unused, months are 1-indexed)
/// February shows 28 days (non-leap year default)
pub const DAYS_IN_MONTH: [u8; 13] = [
    0,  // index 0 unused (months are 1-indexed)
    31, // January
    28, // February (non-leap, adjusted by is_leap_year check)
    31, // March
    30, // April
    31, // May
    30, // June
    31, // July
    31, // August
    30, // September
    31, // October
    30, // November
    31, // December
];

/// Leap year occurs every 4 years
pub(crate) const LEAP_YEAR_CYCLE: u16 = 4;
/// Century years are not leap years unless...
pub(crate) const CENTURY_CYCLE: u16 = 100;
/// ...they are divisible by 400 (Gregorian calendar correction)
pub(crate) const GREGORIAN_CYCLE: u16 = 400;

/// Odd Hijri months have 30 days
pub const HIJRI_LONG_MONTH_DAYS: u8 = 30;
/// Even Hijri months have 29 days (except Dhu al-Hijjah in leap years)
pub const HIJRI_SHORT_MONTH_DAYS: u8 = 29;

/// Years in one tabular Hijri leap cycle
pub(crate) const HIJRI_CYCLE_YEARS: i64 = 30;
/// Days in one tabular Hijri leap cycle (30 * 354 + 11)
pub(crate) const HIJRI_CYCLE_DAYS: i64 = 10_631;
/// Days in a common Hijri year
pub(crate) const HIJRI_COMMON_YEAR_DAYS: i64 = 354;
/// Leap years per 30-year cycle
pub(crate) const HIJRI_LEAPS_PER_CYCLE: i64 = 11;

/// Julian day number of 1 Muharram 1 AH (16 July 622 Julian, civil epoch)
pub const HIJRI_EPOCH_JDN: i64 = 1_948_440;

/// Julian day number of 9999-12-29 AH, the last representable Hijri day
pub const HIJRI_MAX_JDN: i64 = 5_491_751;

/// Julian day number of 0001-01-01 (proleptic Gregorian)
pub const GREGORIAN_MIN_JDN: i64 = 1_721_426;
/// Julian day number of 9999-12-31 (Gregorian), the last convertible day
pub const GREGORIAN_MAX_JDN: i64 = 5_373_484;

/// Offset between the Fliegel-Van Flandern March-based year and the civil year
pub(crate) const JDN_YEAR_OFFSET: i64 = 4800;
/// Constant term of the Gregorian day-number formula
pub(crate) const JDN_GREGORIAN_OFFSET: i64 = 32_045;
/// Days in a 400-year Gregorian cycle
pub(crate) const DAYS_PER_GREGORIAN_CYCLE: i64 = 146_097;
/// Days in a 4-year Julian cycle
pub(crate) const DAYS_PER_FOUR_YEARS: i64 = 1461;

/// Julian day number of 1970-01-01, used to turn the system clock into a day
pub const UNIX_EPOCH_JDN: i64 = 2_440_588;

/// Mean synodic month in days
pub const SYNODIC_MONTH: f64 = 29.530_588_67;

/// A known new moon (2023-12-12, Gregorian) all phases are measured from
pub const REFERENCE_NEW_MOON: (u16, u8, u8) = (2023, 12, 12);

/// Upper phase-fraction bounds (exclusive) of each phase, in cycle order.
/// Fractions at or above the last bound wrap back to the new moon.
pub const PHASE_BOUNDARIES: [f64; 8] = [0.03, 0.22, 0.28, 0.47, 0.53, 0.72, 0.78, 0.97];

/// Days in a week
pub const DAYS_PER_WEEK: i64 = 7;

/// Date component separator (ISO 8601 format)
pub const DATE_SEPARATOR: char = '-';
/// Alternate separator accepted when parsing (`1445/09/01`)
pub const ALT_DATE_SEPARATOR: char = '/';
/// Suffix marking a Hijri date (Anno Hegirae)
pub const HIJRI_SUFFIX: &str = "AH";

/// Hijri month names (index 0 is unused, months are 1-indexed)
pub const HIJRI_MONTH_NAMES: [&str; 13] = [
    "",
    "Muharram",
    "Safar",
    "Rabi' al-Awwal",
    "Rabi' al-Thani",
    "Jumada al-Awwal",
    "Jumada al-Thani",
    "Rajab",
    "Sha'ban",
    "Ramadan",
    "Shawwal",
    "Dhu al-Qi'dah",
    "Dhu al-Hijjah",
];

/// Gregorian month names (index 0 is unused, months are 1-indexed)
pub const GREGORIAN_MONTH_NAMES: [&str; 13] = [
    "",
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];
