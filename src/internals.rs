//! The internal implementation of the week calendar.
//!
//! 4-bit `YearFlags` map to one of 14 possible classes of year in the Gregorian
//! calendar. The flags determine the number of days in a year, the number of ISO
//! weeks, and the alignment of ISO week 1, and are included in every packed
//! `Date` so that the weekday and the week number can be derived from the
//! ordinal without further lookups. All conversions here are closed-form
//! arithmetic; none of the internal functions validate their input beyond what
//! the public `Date` constructors already guarantee.

use core::fmt;
use num_integer::{div_floor, mod_floor};

pub(crate) const MAX_YEAR: i32 = i32::MAX >> 13;
pub(crate) const MIN_YEAR: i32 = i32::MIN >> 13;

/// The year flags (aka the dominical letter).
///
/// There are 14 possible classes of year in the Gregorian calendar:
/// common and leap years starting with Monday through Sunday.
/// The `YearFlags` stores this information into 4 bits `abbb`,
/// where `a` is `1` for the common year and `bbb` is a non-zero `Weekday`
/// (mapping `Mon` to 7) of the last day in the past year
/// (simplifies the day of week calculation from the 1-based ordinal).
#[derive(PartialEq, Eq, Copy, Clone)]
pub(crate) struct YearFlags(pub(crate) u8);

impl YearFlags {
    #[inline]
    pub(crate) fn from_year(year: i32) -> YearFlags {
        // the Gregorian calendar repeats every 400 years (146,097 days,
        // exactly 20,871 weeks), so the representative determines the class
        let year = mod_floor(year, 400);
        let common = year % 4 != 0 || (year % 100 == 0 && year != 0);
        // weekday index (`Mon` is 0) of the last day of the preceding year
        let wd = mod_floor(days_ce_before_year(year) - 1, 7) as u8;
        let bbb = if wd == 0 { 7 } else { wd };
        YearFlags(((common as u8) << 3) | bbb)
    }

    #[inline]
    pub(crate) fn ndays(&self) -> u32 {
        let YearFlags(flags) = *self;
        366 - u32::from(flags >> 3)
    }

    #[inline]
    pub(crate) fn isoweek_delta(&self) -> u32 {
        let YearFlags(flags) = *self;
        let mut delta = u32::from(flags) & 0b0111;
        if delta < 3 {
            delta += 7;
        }
        delta
    }

    #[inline]
    pub(crate) fn nisoweeks(&self) -> u32 {
        let YearFlags(flags) = *self;
        52 + ((0b0000_0100_0000_0110 >> flags as usize) & 1)
    }
}

impl fmt::Debug for YearFlags {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let YearFlags(flags) = *self;
        match flags {
            0o15 => "A".fmt(f),
            0o05 => "AG".fmt(f),
            0o14 => "B".fmt(f),
            0o04 => "BA".fmt(f),
            0o13 => "C".fmt(f),
            0o03 => "CB".fmt(f),
            0o12 => "D".fmt(f),
            0o02 => "DC".fmt(f),
            0o11 => "E".fmt(f),
            0o01 => "ED".fmt(f),
            0o17 => "F".fmt(f),
            0o07 => "FE".fmt(f),
            0o16 => "G".fmt(f),
            0o06 => "GF".fmt(f),
            _ => write!(f, "YearFlags({})", flags),
        }
    }
}

/// Cumulative day counts at the start of each month in a common year.
/// `MONTH_STARTS[m - 1]` is the number of days before month `m`;
/// `MONTH_STARTS[12]` is the length of a common year.
const MONTH_STARTS: [u16; 13] =
    [0, 31, 59, 90, 120, 151, 181, 212, 243, 273, 304, 334, 365];

/// The number of days in the given month. The leap flag only matters for
/// February.
#[inline]
pub(crate) fn days_in_month(month: u32, leap: bool) -> u32 {
    let m = month as usize;
    u32::from(MONTH_STARTS[m] - MONTH_STARTS[m - 1]) + (month == 2 && leap) as u32
}

/// Maps a valid (month, day) pair to the 1-based day-of-year ordinal.
#[inline]
pub(crate) fn ordinal_from_md(month: u32, day: u32, leap: bool) -> u32 {
    u32::from(MONTH_STARTS[month as usize - 1]) + day + (month > 2 && leap) as u32
}

/// Maps a valid 1-based ordinal back to its (month, day) pair.
pub(crate) fn md_from_ordinal(ordinal: u32, leap: bool) -> (u32, u32) {
    let mut ord = ordinal;
    if leap {
        if ord == 60 {
            return (2, 29);
        }
        if ord > 60 {
            ord -= 1;
        }
    }
    // reduced to a common-year ordinal; at most 12 comparisons
    let mut month = 1;
    while u32::from(MONTH_STARTS[month]) < ord {
        month += 1;
    }
    (month as u32, ord - u32::from(MONTH_STARTS[month - 1]))
}

/// The number of days in the proleptic Gregorian calendar strictly before
/// January 1 of the given year, counted so that 0001-01-01 is day 1.
#[inline]
pub(crate) fn days_ce_before_year(year: i32) -> i64 {
    let y = i64::from(year) - 1;
    365 * y + div_floor(y, 4) - div_floor(y, 100) + div_floor(y, 400)
}

/// The inverse of [`days_ce_before_year`]: maps a day number (0001-01-01 is
/// day 1) to the (year, ordinal) pair containing it. The caller bounds `days`
/// to the representable date range.
pub(crate) fn year_from_days_ce(days: i64) -> (i32, u32) {
    // the estimate is within one year of the truth; each correction moves it
    // by exactly one year toward the containing year, so this settles in at
    // most two iterations
    let mut year = div_floor((days - 1) * 400, 146_097) as i32 + 1;
    loop {
        let before = days_ce_before_year(year);
        if days <= before {
            year -= 1;
        } else if days > before + i64::from(YearFlags::from_year(year).ndays()) {
            year += 1;
        } else {
            return (year, (days - before) as u32);
        }
    }
}

/// Derives the ISO (week-year, week number) pair for a date given as its
/// calendar year, 1-based ordinal and year flags. The week-year may be the
/// calendar year's neighbor on either side.
pub(crate) fn isoweek_pair(year: i32, ordinal: u32, flags: YearFlags) -> (i32, u32) {
    let rawweek = (ordinal + flags.isoweek_delta()) / 7;
    if rawweek < 1 {
        // the day belongs to the last week of the previous year
        let prevflags = YearFlags::from_year(year - 1);
        (year - 1, prevflags.nisoweeks())
    } else if rawweek > flags.nisoweeks() {
        (year + 1, 1)
    } else {
        (year, rawweek)
    }
}
