//! ISO 8601 calendar date without timezone.

use core::convert::TryFrom;
use core::ops::{Add, Sub};
use core::{fmt, str};

use num_traits::FromPrimitive;

#[cfg(feature = "rkyv")]
use rkyv::{Archive, Deserialize, Serialize};

use crate::internals::{self, YearFlags};
use crate::week::Week;
use crate::Weekday;

/// ISO 8601 calendar date in the proleptic Gregorian calendar, with the year
/// 0 being 1 BCE.
///
/// The date is stored packed as `(year << 13) | (ordinal << 4) | flags`, where
/// the ordinal is the 1-based day of the year and the flags encode the class
/// of the year (leapness and weekday alignment). The packing makes the derived
/// `Ord` identical to chronological order and keeps the weekday and the ISO
/// week derivable without division by month lengths.
///
/// The representable range of years is about ±262,000 around the common era;
/// see [`Date::MIN`] and [`Date::MAX`].
#[derive(PartialEq, Eq, Hash, PartialOrd, Ord, Copy, Clone)]
#[cfg_attr(feature = "rkyv", derive(Archive, Deserialize, Serialize))]
pub struct Date {
    yof: i32, // (year << 13) | (ordinal << 4) | flags
}

impl Date {
    /// The minimum representable `Date` (January 1, 262145 BCE).
    pub const MIN: Date = Date { yof: (internals::MIN_YEAR << 13) | (1 << 4) | 0o07 /* FE */ };
    /// The maximum representable `Date` (December 31, 262143 CE).
    pub const MAX: Date = Date { yof: (internals::MAX_YEAR << 13) | (365 << 4) | 0o17 /* F */ };

    /// Makes a new `Date` from a raw packed value. The caller must pass a
    /// value taken from a valid `Date`; this is not checked.
    pub(crate) const fn from_yof(yof: i32) -> Date {
        Date { yof }
    }

    fn from_parts(year: i32, ordinal: u32, flags: YearFlags) -> Option<Date> {
        if year < internals::MIN_YEAR || year > internals::MAX_YEAR {
            return None;
        }
        if ordinal < 1 || ordinal > flags.ndays() {
            return None;
        }
        Some(Date { yof: (year << 13) | ((ordinal as i32) << 4) | i32::from(flags.0) })
    }

    /// Makes a new `Date` from the calendar date (year, month and day).
    ///
    /// # Panics
    ///
    /// Panics on the out-of-range date, invalid month and/or day.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Date {
        Date::from_ymd_opt(year, month, day).expect("invalid or out-of-range date")
    }

    /// Makes a new `Date` from the calendar date (year, month and day).
    ///
    /// Returns `None` on the out-of-range date, invalid month and/or day.
    pub fn from_ymd_opt(year: i32, month: u32, day: u32) -> Option<Date> {
        let flags = YearFlags::from_year(year);
        let leap = flags.ndays() == 366;
        if month < 1 || month > 12 || day < 1 || day > internals::days_in_month(month, leap) {
            return None;
        }
        Date::from_parts(year, internals::ordinal_from_md(month, day, leap), flags)
    }

    /// Makes a new `Date` from the year and day of year (DOY or "ordinal").
    ///
    /// Returns `None` on the out-of-range date and/or invalid DOY.
    pub fn from_yo_opt(year: i32, ordinal: u32) -> Option<Date> {
        Date::from_parts(year, ordinal, YearFlags::from_year(year))
    }

    /// Makes a new `Date` from the ISO week date (year and week number) and
    /// day of the week (DOW). The resulting `Date` may have a different year
    /// from the input year.
    ///
    /// Returns `None` on the out-of-range date and/or invalid week number.
    /// Week numbers are validated strictly against the year's week count;
    /// [`Week::new`](crate::Week::new) layers the total out-of-range
    /// normalization on top of this conversion.
    pub fn from_isoywd_opt(year: i32, week: u32, weekday: Weekday) -> Option<Date> {
        let flags = YearFlags::from_year(year);
        let nweeks = flags.nisoweeks();
        if week < 1 || week > nweeks {
            return None;
        }
        // ordinal = week ordinal - delta
        let weekord = week * 7 + weekday as u32;
        let delta = flags.isoweek_delta();
        if weekord <= delta {
            // ordinal would be below 1: previous year
            let prevflags = YearFlags::from_year(year - 1);
            Date::from_parts(year - 1, weekord + prevflags.ndays() - delta, prevflags)
        } else {
            let ordinal = weekord - delta;
            let ndays = flags.ndays();
            if ordinal <= ndays {
                Date::from_parts(year, ordinal, flags)
            } else {
                // ordinal > ndays: next year
                let nextflags = YearFlags::from_year(year + 1);
                Date::from_parts(year + 1, ordinal - ndays, nextflags)
            }
        }
    }

    /// Makes a new `Date` from a day number in the proleptic Gregorian
    /// calendar, with January 1, 1 being day 1.
    ///
    /// Returns `None` on the out-of-range date.
    pub fn from_num_days_from_ce_opt(days: i32) -> Option<Date> {
        let (year, ordinal) = internals::year_from_days_ce(i64::from(days));
        Date::from_parts(year, ordinal, YearFlags::from_year(year))
    }

    /// Returns the year number in the calendar date.
    #[inline]
    pub fn year(&self) -> i32 {
        self.yof >> 13
    }

    /// Returns the month number starting from 1.
    #[inline]
    pub fn month(&self) -> u32 {
        self.md().0
    }

    /// Returns the day of month starting from 1.
    #[inline]
    pub fn day(&self) -> u32 {
        self.md().1
    }

    /// Returns the day of year starting from 1.
    #[inline]
    pub fn ordinal(&self) -> u32 {
        ((self.yof >> 4) & 0x1ff) as u32
    }

    /// Returns `true` if this date belongs to a leap year.
    #[inline]
    pub fn leap_year(&self) -> bool {
        self.yof & 0b1000 == 0
    }

    /// Returns the day of week.
    #[inline]
    pub fn weekday(&self) -> Weekday {
        let bbb = (self.yof & 0b111) as u32;
        Weekday::from_u32((self.ordinal() + bbb) % 7).unwrap()
    }

    /// Counts the days in the proleptic Gregorian calendar, with January 1,
    /// year 1 being day 1.
    #[inline]
    pub fn num_days_from_ce(&self) -> i32 {
        (internals::days_ce_before_year(self.year()) + i64::from(self.ordinal())) as i32
    }

    #[inline]
    fn flags(&self) -> YearFlags {
        YearFlags((self.yof & 0b1111) as u8)
    }

    #[inline]
    fn md(&self) -> (u32, u32) {
        internals::md_from_ordinal(self.ordinal(), self.leap_year())
    }

    /// The ISO (week-year, week number) pair of this date.
    pub(crate) fn isoweek_pair(&self) -> (i32, u32) {
        internals::isoweek_pair(self.year(), self.ordinal(), self.flags())
    }

    /// Returns the ISO week containing this date.
    ///
    /// # Panics
    ///
    /// Panics when the containing week is not fully representable, which can
    /// only happen within six days of [`Date::MIN`] or [`Date::MAX`].
    #[inline]
    pub fn week(&self) -> Week {
        self.week_opt().expect("containing week out of range for `Date`")
    }

    /// Returns the ISO week containing this date.
    ///
    /// Returns `None` when the containing week is not fully representable,
    /// which can only happen within six days of [`Date::MIN`] or
    /// [`Date::MAX`].
    pub fn week_opt(&self) -> Option<Week> {
        let monday = self.add_days(-i64::from(self.weekday().num_days_from_monday()))?;
        Week::from_first_day_opt(monday)
    }

    /// Makes a new `Date` for the next calendar date.
    ///
    /// Returns `None` when `self` is the last representable date.
    #[inline]
    pub fn succ_opt(&self) -> Option<Date> {
        if self.ordinal() == self.flags().ndays() {
            Date::from_yo_opt(self.year() + 1, 1)
        } else {
            Some(Date { yof: self.yof + (1 << 4) })
        }
    }

    /// Makes a new `Date` for the previous calendar date.
    ///
    /// Returns `None` when `self` is the first representable date.
    #[inline]
    pub fn pred_opt(&self) -> Option<Date> {
        if self.ordinal() == 1 {
            let year = self.year() - 1;
            let flags = YearFlags::from_year(year);
            Date::from_parts(year, flags.ndays(), flags)
        } else {
            Some(Date { yof: self.yof - (1 << 4) })
        }
    }

    /// Adds a signed number of days, returning `None` on overflow past the
    /// representable range.
    pub(crate) fn add_days(self, days: i64) -> Option<Date> {
        let days = i64::from(self.num_days_from_ce()).checked_add(days)?;
        if days < i64::from(Date::MIN.num_days_from_ce())
            || days > i64::from(Date::MAX.num_days_from_ce())
        {
            return None;
        }
        let (year, ordinal) = internals::year_from_days_ce(days);
        Date::from_parts(year, ordinal, YearFlags::from_year(year))
    }

    /// Adds given `Days` to the current date.
    ///
    /// Returns `None` if the resulting date would be out of range.
    #[inline]
    #[must_use]
    pub fn checked_add_days(self, days: Days) -> Option<Date> {
        match i64::try_from(days.0) {
            Ok(d) => self.add_days(d),
            Err(_) => None,
        }
    }

    /// Subtracts given `Days` from the current date.
    ///
    /// Returns `None` if the resulting date would be out of range.
    #[inline]
    #[must_use]
    pub fn checked_sub_days(self, days: Days) -> Option<Date> {
        match i64::try_from(days.0) {
            Ok(d) => self.add_days(-d),
            Err(_) => None,
        }
    }
}

/// A duration in calendar days.
///
/// Used for calendar arithmetic on [`Date`] and, scaled by seven, by the week
/// arithmetic in [`Weeks`](crate::Weeks).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Days(pub(crate) u64);

impl Days {
    /// Construct a new `Days` from a number of days.
    pub const fn new(num: u64) -> Self {
        Self(num)
    }
}

impl Add<Days> for Date {
    type Output = Date;

    #[inline]
    fn add(self, days: Days) -> Date {
        self.checked_add_days(days).expect("`Date + Days` overflowed")
    }
}

impl Sub<Days> for Date {
    type Output = Date;

    #[inline]
    fn sub(self, days: Days) -> Date {
        self.checked_sub_days(days).expect("`Date - Days` overflowed")
    }
}

impl From<Date> for Week {
    /// Returns the ISO week containing the date.
    ///
    /// # Panics
    ///
    /// Panics when the containing week is not fully representable; see
    /// [`Date::week`].
    fn from(date: Date) -> Week {
        date.week()
    }
}

/// The `Debug` output of `Date` is the same as [`Display`](fmt::Display):
/// the ISO 8601 format `2017-01-02`.
impl fmt::Debug for Date {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let year = self.year();
        let (month, day) = self.md();
        if (0..=9999).contains(&year) {
            write!(f, "{:04}-{:02}-{:02}", year, month, day)
        } else {
            // ISO 8601 requires the explicit sign for out-of-range years
            write!(f, "{:+05}-{:02}-{:02}", year, month, day)
        }
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// An error resulting from reading a `Date` value with `FromStr`.
#[derive(Clone, PartialEq, Eq)]
pub struct ParseDateError {
    pub(crate) _dummy: (),
}

#[cfg(feature = "std")]
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
impl std::error::Error for ParseDateError {}

impl fmt::Display for ParseDateError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_fmt(format_args!("{:?}", self))
    }
}

impl fmt::Debug for ParseDateError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "ParseDateError {{ .. }}")
    }
}

impl str::FromStr for Date {
    type Err = ParseDateError;

    /// Parses the canonical ISO 8601 calendar date form, e.g. `2017-01-02`.
    /// Out-of-range years carry an explicit sign, matching the `Display`
    /// output.
    fn from_str(s: &str) -> Result<Date, ParseDateError> {
        parse_iso_date(s).ok_or(ParseDateError { _dummy: () })
    }
}

/// Scans a run of `min_digits` to `max_digits` ASCII digits, returning the
/// value and the remaining input.
pub(crate) fn scan_number(s: &str, min_digits: usize, max_digits: usize) -> Option<(i64, &str)> {
    let bytes = s.as_bytes();
    let mut width = 0;
    let mut value: i64 = 0;
    while width < max_digits && width < bytes.len() && bytes[width].is_ascii_digit() {
        value = value.checked_mul(10)?.checked_add(i64::from(bytes[width] - b'0'))?;
        width += 1;
    }
    if width < min_digits {
        return None;
    }
    Some((value, &s[width..]))
}

/// Strips an optional leading sign, returning whether it was negative.
pub(crate) fn scan_sign(s: &str) -> (bool, &str) {
    match s.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, s.strip_prefix('+').unwrap_or(s)),
    }
}

fn parse_iso_date(s: &str) -> Option<Date> {
    let (negative, s) = scan_sign(s);
    let (year, s) = scan_number(s, 4, 6)?;
    let year = i32::try_from(if negative { -year } else { year }).ok()?;
    let s = s.strip_prefix('-')?;
    let (month, s) = scan_number(s, 2, 2)?;
    let s = s.strip_prefix('-')?;
    let (day, s) = scan_number(s, 2, 2)?;
    if !s.is_empty() {
        return None;
    }
    Date::from_ymd_opt(year, u32::try_from(month).ok()?, u32::try_from(day).ok()?)
}

#[cfg(feature = "arbitrary")]
impl arbitrary::Arbitrary<'_> for Date {
    fn arbitrary(u: &mut arbitrary::Unstructured) -> arbitrary::Result<Date> {
        let year = u.int_in_range(internals::MIN_YEAR..=internals::MAX_YEAR)?;
        let ordinal = u.int_in_range(1..=YearFlags::from_year(year).ndays())?;
        Ok(Date::from_yo_opt(year, ordinal).expect("could not generate a valid Date"))
    }
}

#[cfg(feature = "serde")]
#[cfg_attr(docsrs, doc(cfg(feature = "serde")))]
mod date_serde {
    use super::Date;
    use core::fmt;
    use serde::{de, ser};

    /// Serialize into the canonical ISO 8601 calendar date form, e.g.
    /// `"2017-01-02"`.
    impl ser::Serialize for Date {
        fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
        where
            S: ser::Serializer,
        {
            serializer.collect_str(&self)
        }
    }

    struct DateVisitor;

    impl<'de> de::Visitor<'de> for DateVisitor {
        type Value = Date;

        fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
            f.write_str("a formatted calendar date string")
        }

        fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            value.parse().map_err(|_| E::custom("invalid calendar date"))
        }
    }

    impl<'de> de::Deserialize<'de> for Date {
        fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
        where
            D: de::Deserializer<'de>,
        {
            deserializer.deserialize_str(DateVisitor)
        }
    }

    #[test]
    fn test_serde_serialize() {
        use serde_json::to_string;

        assert_eq!(to_string(&Date::from_ymd(2017, 1, 2)).unwrap(), "\"2017-01-02\"");
        assert_eq!(to_string(&Date::from_ymd(0, 12, 31)).unwrap(), "\"0000-12-31\"");
        assert_eq!(to_string(&Date::from_ymd(-1, 1, 1)).unwrap(), "\"-0001-01-01\"");
        assert_eq!(to_string(&Date::MAX).unwrap(), "\"+262143-12-31\"");
    }

    #[test]
    fn test_serde_deserialize() {
        use serde_json::from_str;

        assert_eq!(from_str::<Date>("\"2017-01-02\"").unwrap(), Date::from_ymd(2017, 1, 2));
        assert_eq!(from_str::<Date>("\"-0001-01-01\"").unwrap(), Date::from_ymd(-1, 1, 1));
        assert_eq!(from_str::<Date>("\"+262143-12-31\"").unwrap(), Date::MAX);

        for bad in ["\"2017-00-01\"", "\"2017-13-01\"", "\"2017-02-29\"", "\"20170102\"", "\"\""]
            .iter()
        {
            from_str::<Date>(bad).unwrap_err();
        }
    }

    #[test]
    fn test_serde_bincode_roundtrip() {
        let date = Date::from_ymd(2017, 1, 2);
        let encoded = bincode::serialize(&date).unwrap();
        let decoded: Date = bincode::deserialize(&encoded).unwrap();
        assert_eq!(decoded, date);
    }
}

#[cfg(test)]
mod tests {
    use super::{Date, Days};
    use crate::internals::{MAX_YEAR, MIN_YEAR};
    use crate::Weekday;

    #[test]
    fn test_date_from_ymd() {
        let ymd_opt = |y, m, d| Date::from_ymd_opt(y, m, d);

        assert!(ymd_opt(2012, 0, 1).is_none());
        assert!(ymd_opt(2012, 1, 1).is_some());
        assert!(ymd_opt(2012, 2, 29).is_some());
        assert!(ymd_opt(2014, 2, 29).is_none());
        assert!(ymd_opt(2014, 3, 0).is_none());
        assert!(ymd_opt(2014, 3, 1).is_some());
        assert!(ymd_opt(2014, 3, 31).is_some());
        assert!(ymd_opt(2014, 3, 32).is_none());
        assert!(ymd_opt(2014, 12, 31).is_some());
        assert!(ymd_opt(2014, 13, 1).is_none());
    }

    #[test]
    fn test_date_from_yo() {
        assert_eq!(Date::from_yo_opt(2012, 0), None);
        assert_eq!(Date::from_yo_opt(2012, 1), Some(Date::from_ymd(2012, 1, 1)));
        assert_eq!(Date::from_yo_opt(2012, 60), Some(Date::from_ymd(2012, 2, 29)));
        assert_eq!(Date::from_yo_opt(2012, 366), Some(Date::from_ymd(2012, 12, 31)));
        assert_eq!(Date::from_yo_opt(2012, 367), None);
        assert_eq!(Date::from_yo_opt(2014, 60), Some(Date::from_ymd(2014, 3, 1)));
        assert_eq!(Date::from_yo_opt(2014, 365), Some(Date::from_ymd(2014, 12, 31)));
        assert_eq!(Date::from_yo_opt(2014, 366), None);
    }

    #[test]
    fn test_date_from_isoywd() {
        let isoywd_opt = |y, w, d| Date::from_isoywd_opt(y, w, d);
        let ymd = |y, m, d| Date::from_ymd(y, m, d);

        assert_eq!(isoywd_opt(2004, 0, Weekday::Sun), None);
        assert_eq!(isoywd_opt(2004, 1, Weekday::Mon), Some(ymd(2003, 12, 29)));
        assert_eq!(isoywd_opt(2004, 1, Weekday::Sun), Some(ymd(2004, 1, 4)));
        assert_eq!(isoywd_opt(2004, 2, Weekday::Mon), Some(ymd(2004, 1, 5)));
        assert_eq!(isoywd_opt(2004, 52, Weekday::Sun), Some(ymd(2004, 12, 26)));
        assert_eq!(isoywd_opt(2004, 53, Weekday::Mon), Some(ymd(2004, 12, 27)));
        assert_eq!(isoywd_opt(2004, 53, Weekday::Sun), Some(ymd(2005, 1, 2)));
        assert_eq!(isoywd_opt(2004, 54, Weekday::Mon), None);

        assert_eq!(isoywd_opt(2011, 0, Weekday::Sun), None);
        assert_eq!(isoywd_opt(2011, 1, Weekday::Mon), Some(ymd(2011, 1, 3)));
        assert_eq!(isoywd_opt(2011, 1, Weekday::Sun), Some(ymd(2011, 1, 9)));
        assert_eq!(isoywd_opt(2011, 2, Weekday::Mon), Some(ymd(2011, 1, 10)));

        assert_eq!(isoywd_opt(2018, 51, Weekday::Mon), Some(ymd(2018, 12, 17)));
        assert_eq!(isoywd_opt(2018, 52, Weekday::Mon), Some(ymd(2018, 12, 24)));
        assert_eq!(isoywd_opt(2018, 52, Weekday::Sun), Some(ymd(2018, 12, 30)));
        assert_eq!(isoywd_opt(2018, 53, Weekday::Mon), None);

        assert_eq!(isoywd_opt(2017, 1, Weekday::Mon), Some(ymd(2017, 1, 2)));
        assert_eq!(isoywd_opt(2017, 1, Weekday::Sun), Some(ymd(2017, 1, 8)));
    }

    #[test]
    fn test_date_from_isoywd_and_isoweek_roundtrip() {
        for year in 2000..=2400 {
            for week in 1..=crate::internals::YearFlags::from_year(year).nisoweeks() {
                for &weekday in
                    [Weekday::Mon, Weekday::Wed, Weekday::Sun].iter()
                {
                    let date = Date::from_isoywd_opt(year, week, weekday).unwrap();
                    assert_eq!(date.weekday(), weekday);
                    assert_eq!(date.isoweek_pair(), (year, week));
                }
            }
        }
    }

    #[test]
    fn test_date_weekday() {
        assert_eq!(Date::from_ymd(1, 1, 1).weekday(), Weekday::Mon);
        assert_eq!(Date::from_ymd(1970, 1, 1).weekday(), Weekday::Thu);
        assert_eq!(Date::from_ymd(2000, 1, 1).weekday(), Weekday::Sat);
        assert_eq!(Date::from_ymd(2017, 1, 1).weekday(), Weekday::Sun);
        assert_eq!(Date::from_ymd(2017, 1, 2).weekday(), Weekday::Mon);
        assert_eq!(Date::from_ymd(2020, 2, 29).weekday(), Weekday::Sat);
    }

    #[test]
    fn test_date_succ_pred() {
        let ymd = |y, m, d| Date::from_ymd(y, m, d);

        assert_eq!(ymd(2014, 5, 6).succ_opt(), Some(ymd(2014, 5, 7)));
        assert_eq!(ymd(2014, 5, 31).succ_opt(), Some(ymd(2014, 6, 1)));
        assert_eq!(ymd(2014, 12, 31).succ_opt(), Some(ymd(2015, 1, 1)));
        assert_eq!(ymd(2016, 2, 28).succ_opt(), Some(ymd(2016, 2, 29)));
        assert_eq!(Date::MAX.succ_opt(), None);

        assert_eq!(ymd(2014, 5, 7).pred_opt(), Some(ymd(2014, 5, 6)));
        assert_eq!(ymd(2014, 6, 1).pred_opt(), Some(ymd(2014, 5, 31)));
        assert_eq!(ymd(2015, 1, 1).pred_opt(), Some(ymd(2014, 12, 31)));
        assert_eq!(ymd(2016, 3, 1).pred_opt(), Some(ymd(2016, 2, 29)));
        assert_eq!(Date::MIN.pred_opt(), None);
    }

    #[test]
    fn test_date_add_days() {
        let ymd = |y, m, d| Date::from_ymd(y, m, d);

        assert_eq!(ymd(2014, 1, 1).checked_add_days(Days::new(0)), Some(ymd(2014, 1, 1)));
        assert_eq!(ymd(2014, 1, 1).checked_add_days(Days::new(364)), Some(ymd(2014, 12, 31)));
        assert_eq!(ymd(2014, 1, 1).checked_add_days(Days::new(365 * 4 + 1)), Some(ymd(2018, 1, 1)));
        assert_eq!(ymd(2016, 2, 28).checked_add_days(Days::new(2)), Some(ymd(2016, 3, 1)));
        assert_eq!(ymd(2014, 1, 1).checked_sub_days(Days::new(1)), Some(ymd(2013, 12, 31)));
        assert_eq!(ymd(2014, 1, 1).checked_sub_days(Days::new(365)), Some(ymd(2013, 1, 1)));
        assert_eq!(Date::MAX.checked_add_days(Days::new(1)), None);
        assert_eq!(Date::MIN.checked_sub_days(Days::new(1)), None);
        assert_eq!(Date::MAX.checked_add_days(Days::new(u64::max_value())), None);

        assert_eq!(ymd(2017, 1, 2) + Days::new(6), ymd(2017, 1, 8));
        assert_eq!(ymd(2017, 1, 2) - Days::new(7), ymd(2016, 12, 26));
    }

    #[test]
    fn test_date_num_days_from_ce() {
        assert_eq!(Date::from_ymd(1, 1, 1).num_days_from_ce(), 1);
        assert_eq!(Date::from_ymd(1970, 1, 1).num_days_from_ce(), 719_163);
        for &days in [1, 365, 366, 719_163, -365, Date::MIN.num_days_from_ce()].iter() {
            let date = Date::from_num_days_from_ce_opt(days).unwrap();
            assert_eq!(date.num_days_from_ce(), days);
        }
        assert_eq!(Date::from_num_days_from_ce_opt(Date::MAX.num_days_from_ce() + 1), None);
        assert_eq!(Date::from_num_days_from_ce_opt(Date::MIN.num_days_from_ce() - 1), None);
    }

    #[test]
    fn test_date_bounds() {
        // verifies the hardcoded flags in the `MIN`/`MAX` constants
        let calculated_min = Date::from_ymd(MIN_YEAR, 1, 1);
        assert_eq!(Date::MIN, calculated_min);
        let calculated_max = Date::from_ymd(MAX_YEAR, 12, 31);
        assert_eq!(Date::MAX, calculated_max);

        assert_eq!(Date::MIN.weekday(), Weekday::Tue);
        assert_eq!(Date::MAX.weekday(), Weekday::Tue);
    }

    #[test]
    fn test_date_fmt() {
        assert_eq!(format!("{:?}", Date::from_ymd(2017, 1, 2)), "2017-01-02");
        assert_eq!(format!("{:?}", Date::from_ymd(0, 12, 31)), "0000-12-31");
        assert_eq!(format!("{:?}", Date::from_ymd(-1, 1, 1)), "-0001-01-01");
        assert_eq!(format!("{:?}", Date::from_ymd(12345, 6, 7)), "+12345-06-07");
        assert_eq!(format!("{}", Date::from_ymd(2017, 1, 2)), "2017-01-02");
    }

    #[test]
    fn test_date_from_str() {
        let valid = [
            ("2017-01-02", Date::from_ymd(2017, 1, 2)),
            ("0000-12-31", Date::from_ymd(0, 12, 31)),
            ("-0001-01-01", Date::from_ymd(-1, 1, 1)),
            ("+12345-06-07", Date::from_ymd(12345, 6, 7)),
        ];
        for &(s, expected) in valid.iter() {
            assert_eq!(s.parse::<Date>().unwrap(), expected);
        }

        for &s in [
            "",
            "2017",
            "2017-1-2",
            "2017-012-02",
            "2017-01-32",
            "2017-13-01",
            "2015-02-29",
            "2017-01-02x",
            "017-01-02",
        ]
        .iter()
        {
            assert!(s.parse::<Date>().is_err(), "{:?} should not parse", s);
        }
    }

    #[test]
    fn test_date_fmt_roundtrip() {
        for &date in
            [Date::MIN, Date::from_ymd(-1, 2, 28), Date::from_ymd(2017, 1, 2), Date::MAX].iter()
        {
            assert_eq!(format!("{}", date).parse::<Date>().unwrap(), date);
        }
    }

    #[test]
    fn test_date_leap_year() {
        assert!(Date::from_ymd(2016, 1, 1).leap_year());
        assert!(!Date::from_ymd(2017, 1, 1).leap_year());
        assert!(!Date::from_ymd(1900, 1, 1).leap_year());
        assert!(Date::from_ymd(2000, 1, 1).leap_year());
    }
}
