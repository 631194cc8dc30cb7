//! Moon phase from the mean synodic month.
//!
//! The phase is measured in whole days from a known new moon, so every date
//! gets a single phase regardless of time of day or observer location.

use serde::{Deserialize, Serialize};

use crate::consts::{PHASE_BOUNDARIES, REFERENCE_NEW_MOON, SYNODIC_MONTH};
use crate::date::CalendarDate;
use crate::jdn::JulianDay;
use crate::prelude::*;

/// One of the eight named phases, in cycle order starting at the new moon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MoonPhase {
    #[display(fmt = "New Moon")]
    New,
    #[display(fmt = "Waxing Crescent")]
    WaxingCrescent,
    #[display(fmt = "First Quarter")]
    FirstQuarter,
    #[display(fmt = "Waxing Gibbous")]
    WaxingGibbous,
    #[display(fmt = "Full Moon")]
    Full,
    #[display(fmt = "Waning Gibbous")]
    WaningGibbous,
    #[display(fmt = "Last Quarter")]
    LastQuarter,
    #[display(fmt = "Waning Crescent")]
    WaningCrescent,
}

impl MoonPhase {
    pub const ALL: [Self; 8] = [
        Self::New,
        Self::WaxingCrescent,
        Self::FirstQuarter,
        Self::WaxingGibbous,
        Self::Full,
        Self::WaningGibbous,
        Self::LastQuarter,
        Self::WaningCrescent,
    ];

    /// Position in the cycle, `0` for the new moon.
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Image label used by the month browser ("Phase-1" .. "Phase-8").
    pub fn label(self) -> String {
        format!("Phase-{}", self.index() + 1)
    }

    pub const fn symbol(self) -> &'static str {
        match self {
            Self::New => "🌑",
            Self::WaxingCrescent => "🌒",
            Self::FirstQuarter => "🌓",
            Self::WaxingGibbous => "🌔",
            Self::Full => "🌕",
            Self::WaningGibbous => "🌖",
            Self::LastQuarter => "🌗",
            Self::WaningCrescent => "🌘",
        }
    }
}

/// The reference new moon as a day number.
pub const fn reference_new_moon() -> JulianDay {
    let (y, m, d) = REFERENCE_NEW_MOON;
    JulianDay::from_gregorian(y, m, d)
}

/// Fraction of the synodic cycle elapsed at `date`, in `[0, 1)`.
///
/// Dates before the reference new moon wrap around (Euclidean modulo).
/// Hijri dates are accepted and measured through their day number.
pub fn phase_fraction(date: &CalendarDate) -> f64 {
    #[allow(clippy::cast_precision_loss)]
    let days = date.julian_day().days_since(reference_new_moon()) as f64;
    let fraction = days.rem_euclid(SYNODIC_MONTH) / SYNODIC_MONTH;
    if fraction < 1.0 { fraction } else { 0.0 }
}

/// Maps a cycle fraction onto a named phase.
///
/// Values outside `[0, 1)` are wrapped first; NaN is treated as a new moon.
pub fn classify(fraction: f64) -> MoonPhase {
    let wrapped = fraction.rem_euclid(1.0);
    PHASE_BOUNDARIES
        .iter()
        .position(|&upper| wrapped < upper)
        .map_or(MoonPhase::New, |i| MoonPhase::ALL[i])
}

/// Named phase of the moon on `date`.
pub fn phase_for_date(date: &CalendarDate) -> MoonPhase {
    classify(phase_fraction(date))
}
