//! Subcommand implementations. Rendering is kept separate from printing.

use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use tracing::{debug, info_span};

use hijri_calendar::{
    Calendar, CalendarDate, JulianDay, MonthGrid, UNIX_EPOCH_JDN, Weekday, between,
    month_grid, phase_for_date, phase_fraction, to_gregorian, to_hijri,
};

use crate::cli::{AgeArgs, ConvertArgs, GridArgs, PhaseArgs, TodayArgs};

const SECONDS_PER_DAY: u64 = 86_400;

/// Today's UTC day from the system clock.
fn system_today() -> Result<CalendarDate> {
    let elapsed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .context("system clock is set before 1970")?;
    let days = i64::try_from(elapsed.as_secs() / SECONDS_PER_DAY)?;
    let today = CalendarDate::from_julian_day(JulianDay::new(UNIX_EPOCH_JDN + days), Calendar::Gregorian)?;
    debug!(%today, "read system clock");
    Ok(today)
}

/// The given date as Gregorian, or the system date.
fn gregorian_or_today(date: Option<CalendarDate>) -> Result<CalendarDate> {
    match date {
        Some(d) if d.calendar() == Calendar::Gregorian => Ok(d),
        Some(d) => Ok(to_gregorian(&d).with_context(|| format!("converting {d}"))?),
        None => system_today(),
    }
}

pub fn today(args: TodayArgs) -> Result<()> {
    let _cmd = info_span!("today").entered();
    let date = gregorian_or_today(args.date)?
        .add_days(args.offset)
        .with_context(|| format!("applying an offset of {} days", args.offset))?;
    debug!(%date, offset = args.offset, "resolved date");
    println!("{}", render_today(&date)?);
    Ok(())
}

pub fn convert(args: ConvertArgs) -> Result<()> {
    let _cmd = info_span!("convert").entered();
    let result = hijri_calendar::convert(&args.date)
        .with_context(|| format!("converting {}", args.date))?;
    debug!(source = %result.source, target = %result.target, "converted");
    println!("{result}");
    println!(
        "{} -> {}",
        result.source.format_long(),
        result.target.format_long()
    );
    Ok(())
}

pub fn age(args: AgeArgs) -> Result<()> {
    let _cmd = info_span!("age").entered();
    let reference = match args.today {
        Some(date) => date,
        None => system_today()?,
    };
    debug!(birth = %args.birth, %reference, "calculating age");
    let duration = between(&args.birth, &reference)
        .with_context(|| format!("calculating age from {} to {reference}", args.birth))?;
    println!("{duration}");
    Ok(())
}

pub fn phase(args: PhaseArgs) -> Result<()> {
    let _cmd = info_span!("phase").entered();
    let date = match args.date {
        Some(date) => date,
        None => system_today()?,
    };
    debug!(%date, fraction = phase_fraction(&date), "phase");
    println!("{}", render_share(&date)?);
    Ok(())
}

pub fn grid(args: GridArgs) -> Result<()> {
    let _cmd = info_span!("grid", year = args.year, month = args.month).entered();
    let grid = month_grid(args.year, args.month)
        .with_context(|| format!("building the grid for {}-{:02} AH", args.year, args.month))?;
    let today = gregorian_or_today(args.today)?;
    debug!(%grid, weeks = grid.week_count(), "built grid");
    println!("{}", render_grid(&grid, &today)?);
    Ok(())
}

fn render_today(date: &CalendarDate) -> Result<String> {
    let hijri = to_hijri(date)?;
    let phase = phase_for_date(date);
    Ok(format!(
        "{}\n{}\n{}\n{} {} ({})",
        date.weekday(),
        date.format_long(),
        hijri.format_long(),
        phase.symbol(),
        phase,
        phase.label()
    ))
}

/// The text the month browser shares for a selected day.
fn render_share(date: &CalendarDate) -> Result<String> {
    let other = hijri_calendar::convert(date)?.target;
    let (hijri, gregorian) = match date.calendar() {
        Calendar::Hijri => (*date, other),
        Calendar::Gregorian => (other, *date),
    };
    let phase = phase_for_date(date);
    Ok(format!(
        "Selected Date: {} (Hijri) / {} (Gregorian)\nMoon Phase: {} {}",
        hijri.format_long(),
        gregorian.format_long(),
        phase.symbol(),
        phase
    ))
}

fn render_grid(grid: &MonthGrid, today: &CalendarDate) -> Result<String> {
    let first = grid.first_of_month();
    let mut lines = vec![
        format!("{} {} AH", first.month_name(), first.year()),
        format!(
            "{} - {}",
            to_gregorian(&first)?.format_long(),
            to_gregorian(&grid.last_of_month())?.format_long()
        ),
        Weekday::ALL
            .iter()
            .map(|d| format!("{:<5}", d.short_name()))
            .collect::<Vec<_>>()
            .join(" ")
            .trim_end()
            .to_owned(),
    ];

    let cells: Vec<_> = grid.cells().collect();
    for week in cells.chunks(7) {
        let row = week
            .iter()
            .map(|cell| {
                if cell.in_month {
                    let marker = if cell.date == *today { '*' } else { ' ' };
                    format!("{:>2}{}{marker}", cell.hijri.day(), cell.phase.symbol())
                } else {
                    "  .  ".to_owned()
                }
            })
            .collect::<Vec<_>>()
            .join(" ");
        lines.push(row.trim_end().to_owned());
    }
    Ok(lines.join("\n"))
}
