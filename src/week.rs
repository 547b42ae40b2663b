//! ISO 8601 calendar week.

use core::convert::TryFrom;
use core::hash::{Hash, Hasher};
use core::iter::FusedIterator;
use core::ops::{Add, Sub};
use core::{fmt, str};

#[cfg(feature = "rkyv")]
use rkyv::{Archive, Deserialize, Serialize};

#[cfg(feature = "clock")]
use crate::clock::{Clock, Local};
use crate::date::{scan_number, scan_sign};
#[cfg(feature = "clock")]
use crate::error::{Error, ErrorKind};
use crate::internals::{self, YearFlags};
use crate::{Date, Days, Weekday};

/// ISO 8601 calendar week: the Monday through Sunday span identified by a
/// (week-year, week number) pair.
///
/// Only the Monday is stored; the week-year, the week number and the final
/// Sunday are derived from it. Two `Week`s are equal exactly when they start
/// on the same day, regardless of the inputs they were built from, and the
/// derived ordering is chronological. The manual [`Hash`] impl combines the
/// week-year and the week number, which identify the Monday uniquely, so
/// `Week` is usable as a hash map key.
///
/// A `Week` exists only if all seven of its days are representable [`Date`]s;
/// in exchange [`last_day`](#method.last_day) and [`days`](#method.days)
/// never fail. The partial weeks touching [`Date::MIN`] and [`Date::MAX`]
/// cannot be constructed; see [`Week::MIN`] and [`Week::MAX`].
#[derive(PartialEq, Eq, PartialOrd, Ord, Copy, Clone)]
#[cfg_attr(feature = "rkyv", derive(Archive, Deserialize, Serialize))]
pub struct Week {
    first_day: Date,
}

impl Week {
    /// The earliest week with all seven days representable
    /// (week 2 of year -262144; week 1 begins a day before [`Date::MIN`]).
    pub const MIN: Week =
        Week { first_day: Date::from_yof((internals::MIN_YEAR << 13) | (7 << 4) | 0o07 /* FE */) };
    /// The latest week with all seven days representable
    /// (week 52 of year 262143; week 53 would end six days past [`Date::MAX`]).
    pub const MAX: Week = Week {
        first_day: Date::from_yof((internals::MAX_YEAR << 13) | (357 << 4) | 0o17 /* F */),
    };

    /// Makes a new `Week` from the ISO week-year and week number.
    ///
    /// The week number is normalized, so any `i32` is acceptable:
    ///
    /// - a negative number indexes from the year's end (`-1` is the year's
    ///   last week, 52 or 53);
    /// - `0`, and numbers past the year's week count, continue linearly into
    ///   the adjacent years (`0` is the last week of the previous year; week
    ///   53 of a 52-week year is week 1 of the next).
    ///
    /// # Panics
    ///
    /// Panics when the normalized week falls outside the range of `Date`.
    pub fn new(year: i32, number: i32) -> Week {
        Week::new_opt(year, number).expect("invalid or out-of-range week")
    }

    /// Makes a new `Week` from the ISO week-year and week number.
    ///
    /// The week number is normalized as in [`Week::new`]. Returns `None` when
    /// the normalized week falls outside the range of `Date`.
    pub fn new_opt(year: i32, number: i32) -> Option<Week> {
        let flags = YearFlags::from_year(year);
        let number = i64::from(number);
        // negative numbers index from the year's end
        let number =
            if number < 0 { i64::from(flags.nisoweeks()) + number + 1 } else { number };
        // the Monday of week 1, counted with January 1 of year 1 as day 1;
        // i64 keeps every i32 input exactly representable
        let week1_monday =
            internals::days_ce_before_year(year) + 7 - i64::from(flags.isoweek_delta());
        let first = week1_monday + (number - 1) * 7;
        if first < i64::from(Date::MIN.num_days_from_ce())
            || first + 6 > i64::from(Date::MAX.num_days_from_ce())
        {
            return None;
        }
        let (year, ordinal) = internals::year_from_days_ce(first);
        Some(Week { first_day: Date::from_yo_opt(year, ordinal)? })
    }

    /// Makes the `Week` starting on the given day.
    ///
    /// Returns `None` when not all seven days from `first_day` on are
    /// representable. The caller must pass a Monday.
    pub(crate) fn from_first_day_opt(first_day: Date) -> Option<Week> {
        debug_assert!(first_day.weekday() == Weekday::Mon);
        first_day.add_days(6)?;
        Some(Week { first_day })
    }

    /// Returns the ISO week-year.
    ///
    /// This may differ from the calendar year of [`first_day`](#method.first_day)
    /// near year boundaries; that is how the ISO week calendar works, e.g.
    /// `Week::new(2016, 52)` starts on 2016-12-26 and ends on 2017-01-01.
    #[inline]
    pub fn year(&self) -> i32 {
        self.first_day.isoweek_pair().0
    }

    /// Returns the ISO week number, from 1 to 52 or 53 depending on the year.
    #[inline]
    pub fn number(&self) -> u32 {
        self.first_day.isoweek_pair().1
    }

    /// Returns the first day of the week, a Monday.
    #[inline]
    pub const fn first_day(&self) -> Date {
        self.first_day
    }

    /// Returns the last day of the week, the Sunday six days after
    /// [`first_day`](#method.first_day).
    #[inline]
    pub fn last_day(&self) -> Date {
        self.first_day.add_days(6).expect("all days of a `Week` are in range")
    }

    /// Returns the next week. Crosses year boundaries, so the week after
    /// week 52 or 53 is week 1 of the following year.
    ///
    /// # Panics
    ///
    /// Panics when `self` is [`Week::MAX`].
    #[inline]
    pub fn next_week(&self) -> Week {
        self.next_week_opt().expect("out of bound")
    }

    /// Returns the next week, or `None` when `self` is [`Week::MAX`].
    #[inline]
    pub fn next_week_opt(&self) -> Option<Week> {
        Week::from_first_day_opt(self.first_day.add_days(7)?)
    }

    /// Returns the previous week. Crosses year boundaries, so the week before
    /// week 1 is week 52 or 53 of the preceding year.
    ///
    /// # Panics
    ///
    /// Panics when `self` is [`Week::MIN`].
    #[inline]
    pub fn prev_week(&self) -> Week {
        self.prev_week_opt().expect("out of bound")
    }

    /// Returns the previous week, or `None` when `self` is [`Week::MIN`].
    #[inline]
    pub fn prev_week_opt(&self) -> Option<Week> {
        Week::from_first_day_opt(self.first_day.add_days(-7)?)
    }

    /// Adds given `Weeks` to the current week.
    ///
    /// Returns `None` if the result would be out of range.
    #[must_use]
    pub fn checked_add_weeks(self, weeks: Weeks) -> Option<Week> {
        let days = weeks.0.checked_mul(7)?;
        Week::from_first_day_opt(self.first_day.checked_add_days(Days::new(days))?)
    }

    /// Subtracts given `Weeks` from the current week.
    ///
    /// Returns `None` if the result would be out of range.
    #[must_use]
    pub fn checked_sub_weeks(self, weeks: Weeks) -> Option<Week> {
        let days = weeks.0.checked_mul(7)?;
        Week::from_first_day_opt(self.first_day.checked_sub_days(Days::new(days))?)
    }

    /// Returns the signed number of whole weeks from `base` to `self`,
    /// negative when `base` is the later week.
    pub fn weeks_since(&self, base: Week) -> i64 {
        // both days are Mondays, so the difference is an exact multiple of 7
        let days = i64::from(self.first_day.num_days_from_ce())
            - i64::from(base.first_day.num_days_from_ce());
        days / 7
    }

    /// Returns an iterator of the seven [`Date`]s of this week, in ascending
    /// order. Each call returns a fresh iterator.
    #[inline]
    pub const fn days(&self) -> WeekDaysIterator {
        WeekDaysIterator { week: *self, front: 0, back: 7 }
    }

    /// Returns an iterator of `self` and every following week. The iterator
    /// ends after yielding [`Week::MAX`].
    #[inline]
    pub const fn iter_weeks(&self) -> WeeksIterator {
        WeeksIterator { value: Some(*self) }
    }
}

#[cfg(feature = "clock")]
#[cfg_attr(docsrs, doc(cfg(feature = "clock")))]
impl Week {
    /// Returns the week containing today's date in the system's local time
    /// zone. Shorthand for `Week::current_in(&Local)`.
    pub fn current() -> Result<Week, Error> {
        Week::current_in(&Local)
    }

    /// Returns the week containing today's date according to the given clock.
    ///
    /// The clock decides what "today" means; two clocks resolving the same
    /// civil date yield the same week no matter how their offsets differ.
    /// Passing a [`FixedClock`](crate::clock::FixedClock) makes the result
    /// deterministic for tests.
    pub fn current_in<C: Clock>(clock: &C) -> Result<Week, Error> {
        let today = clock.today()?;
        today.week_opt().ok_or_else(|| Error::from(ErrorKind::OutOfRange))
    }
}

/// The hash of the (week-year, week number) pair.
///
/// The pair identifies `first_day` uniquely, so this is consistent with the
/// derived `PartialEq`: weeks built from different denormalized inputs that
/// resolve to the same Monday hash identically.
impl Hash for Week {
    fn hash<H: Hasher>(&self, state: &mut H) {
        let (year, number) = self.first_day.isoweek_pair();
        year.hash(state);
        number.hash(state);
    }
}

/// A duration in calendar weeks.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Weeks(pub(crate) u64);

impl Weeks {
    /// Construct a new `Weeks` from a number of weeks.
    pub const fn new(num: u64) -> Self {
        Self(num)
    }
}

impl Add<Weeks> for Week {
    type Output = Week;

    #[inline]
    fn add(self, weeks: Weeks) -> Week {
        self.checked_add_weeks(weeks).expect("`Week + Weeks` overflowed")
    }
}

impl Sub<Weeks> for Week {
    type Output = Week;

    #[inline]
    fn sub(self, weeks: Weeks) -> Week {
        self.checked_sub_weeks(weeks).expect("`Week - Weeks` overflowed")
    }
}

/// Iterator over the seven days of a week, returned by [`Week::days`].
#[derive(Debug, Copy, Clone, Hash, PartialEq, Eq)]
pub struct WeekDaysIterator {
    week: Week,
    // offsets from the first day still to be yielded: front..back of 0..7
    front: u8,
    back: u8,
}

impl Iterator for WeekDaysIterator {
    type Item = Date;

    fn next(&mut self) -> Option<Date> {
        if self.front == self.back {
            return None;
        }
        let date = self.week.first_day.add_days(i64::from(self.front))?;
        self.front += 1;
        Some(date)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = usize::from(self.back - self.front);
        (len, Some(len))
    }
}

impl DoubleEndedIterator for WeekDaysIterator {
    fn next_back(&mut self) -> Option<Date> {
        if self.front == self.back {
            return None;
        }
        self.back -= 1;
        self.week.first_day.add_days(i64::from(self.back))
    }
}

impl ExactSizeIterator for WeekDaysIterator {}
impl FusedIterator for WeekDaysIterator {}

/// Iterator over successive weeks, returned by [`Week::iter_weeks`].
#[derive(Debug, Copy, Clone, Hash, PartialEq, Eq)]
pub struct WeeksIterator {
    value: Option<Week>,
}

impl Iterator for WeeksIterator {
    type Item = Week;

    fn next(&mut self) -> Option<Week> {
        let current = self.value?;
        self.value = current.next_week_opt();
        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = match self.value {
            Some(week) => Week::MAX.weeks_since(week) + 1,
            None => 0,
        };
        (remaining as usize, Some(remaining as usize))
    }
}

impl ExactSizeIterator for WeeksIterator {}
impl FusedIterator for WeeksIterator {}

/// The `Debug` output of `Week` is the same as [`Display`](fmt::Display):
/// the ISO 8601 format `2017-W01`.
impl fmt::Debug for Week {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let (year, number) = self.first_day.isoweek_pair();
        if (0..=9999).contains(&year) {
            write!(f, "{:04}-W{:02}", year, number)
        } else {
            // ISO 8601 requires the explicit sign for out-of-range years
            write!(f, "{:+05}-W{:02}", year, number)
        }
    }
}

impl fmt::Display for Week {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// An error resulting from reading a `Week` value with `FromStr`.
#[derive(Clone, PartialEq, Eq)]
pub struct ParseWeekError {
    pub(crate) _dummy: (),
}

#[cfg(feature = "std")]
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
impl std::error::Error for ParseWeekError {}

impl fmt::Display for ParseWeekError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_fmt(format_args!("{:?}", self))
    }
}

impl fmt::Debug for ParseWeekError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "ParseWeekError {{ .. }}")
    }
}

impl str::FromStr for Week {
    type Err = ParseWeekError;

    /// Parses the canonical ISO 8601 week form, e.g. `2017-W01`. Unlike
    /// [`Week::new`] the week number is not normalized: it must exist in the
    /// given week-year.
    fn from_str(s: &str) -> Result<Week, ParseWeekError> {
        parse_iso_week(s).ok_or(ParseWeekError { _dummy: () })
    }
}

fn parse_iso_week(s: &str) -> Option<Week> {
    let (negative, s) = scan_sign(s);
    let (year, s) = scan_number(s, 4, 6)?;
    let year = i32::try_from(if negative { -year } else { year }).ok()?;
    let s = s.strip_prefix("-W")?;
    let (number, s) = scan_number(s, 2, 2)?;
    if !s.is_empty() {
        return None;
    }
    let number = u32::try_from(number).ok()?;
    if number < 1 || number > YearFlags::from_year(year).nisoweeks() {
        return None;
    }
    Week::new_opt(year, number as i32)
}

#[cfg(feature = "arbitrary")]
impl arbitrary::Arbitrary<'_> for Week {
    fn arbitrary(u: &mut arbitrary::Unstructured) -> arbitrary::Result<Week> {
        // any date from `Week::MIN.first_day()` to `Week::MAX.first_day()`
        // sits in a fully representable week
        let days = u.int_in_range(
            Week::MIN.first_day().num_days_from_ce()..=Week::MAX.first_day().num_days_from_ce(),
        )?;
        let date = Date::from_num_days_from_ce_opt(days).expect("could not generate a valid Date");
        Ok(date.week_opt().expect("could not generate a valid Week"))
    }
}

#[cfg(feature = "serde")]
#[cfg_attr(docsrs, doc(cfg(feature = "serde")))]
mod week_serde {
    use super::Week;
    use core::fmt;
    use serde::{de, ser};

    /// Serialize into the canonical ISO 8601 week form, e.g. `"2017-W01"`.
    impl ser::Serialize for Week {
        fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
        where
            S: ser::Serializer,
        {
            serializer.collect_str(&self)
        }
    }

    struct WeekVisitor;

    impl<'de> de::Visitor<'de> for WeekVisitor {
        type Value = Week;

        fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
            f.write_str("a formatted calendar week string")
        }

        fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            value.parse().map_err(|_| E::custom("invalid calendar week"))
        }
    }

    impl<'de> de::Deserialize<'de> for Week {
        fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
        where
            D: de::Deserializer<'de>,
        {
            deserializer.deserialize_str(WeekVisitor)
        }
    }

    #[test]
    fn test_serde_serialize() {
        use serde_json::to_string;

        assert_eq!(to_string(&Week::new(2017, 1)).unwrap(), "\"2017-W01\"");
        assert_eq!(to_string(&Week::new(2015, 53)).unwrap(), "\"2015-W53\"");
        assert_eq!(to_string(&Week::MAX).unwrap(), "\"+262143-W52\"");
    }

    #[test]
    fn test_serde_deserialize() {
        use serde_json::from_str;

        assert_eq!(from_str::<Week>("\"2017-W01\"").unwrap(), Week::new(2017, 1));
        assert_eq!(from_str::<Week>("\"2015-W53\"").unwrap(), Week::new(2015, 53));
        assert_eq!(from_str::<Week>("\"+262143-W52\"").unwrap(), Week::MAX);

        for bad in ["\"2017-W00\"", "\"2017-W53\"", "\"2017-W1\"", "\"2017W01\"", "\"\""].iter() {
            from_str::<Week>(bad).unwrap_err();
        }
    }

    #[test]
    fn test_serde_bincode_roundtrip() {
        let week = Week::new(2017, 1);
        let encoded = bincode::serialize(&week).unwrap();
        let decoded: Week = bincode::deserialize(&encoded).unwrap();
        assert_eq!(decoded, week);
    }
}
