//! Providers of "today" for [`Week::current_in`](crate::Week::current_in).

use core::fmt;

use num_integer::{div_floor, div_mod_floor};

use crate::error::{Error, ErrorKind};
use crate::internals;
use crate::Date;

/// A source of the current civil date.
///
/// [`Week::current_in`](crate::Week::current_in) consults exactly one `Clock`
/// once per call, so the provider decides what "today" means. Production code
/// passes [`Local`], [`Utc`] or a [`FixedOffset`]; tests pass a
/// [`FixedClock`] to pin the result.
pub trait Clock {
    /// Returns the current civil date according to this provider.
    fn today(&self) -> Result<Date, Error>;
}

/// The provider resolving "today" in Coordinated Universal Time.
#[derive(Copy, Clone, PartialEq, Eq, Hash)]
pub struct Utc;

impl Clock for Utc {
    fn today(&self) -> Result<Date, Error> {
        date_from_epoch_days(div_floor(epoch_secs_now()?, 86_400))
    }
}

impl fmt::Debug for Utc {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Z")
    }
}

impl fmt::Display for Utc {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "UTC")
    }
}

/// The provider resolving "today" in the system's configured local time zone.
///
/// On targets without a local time source this falls back to [`Utc`].
#[derive(Copy, Clone, Debug)]
pub struct Local;

impl Clock for Local {
    #[cfg(all(
        target_arch = "wasm32",
        feature = "wasmbind",
        not(any(target_os = "emscripten", target_os = "wasi"))
    ))]
    fn today(&self) -> Result<Date, Error> {
        let now = js_sys::Date::new_0();
        Date::from_ymd_opt(now.get_full_year() as i32, now.get_month() + 1, now.get_date())
            .ok_or_else(|| Error::new(ErrorKind::OutOfRange))
    }

    #[cfg(unix)]
    fn today(&self) -> Result<Date, Error> {
        use core::convert::TryFrom;
        use std::mem;

        let sec = libc::time_t::try_from(epoch_secs_now()?)
            .map_err(|_| Error::new(ErrorKind::OutOfRange))?;
        let mut tm: libc::tm = unsafe { mem::zeroed() };
        if unsafe { libc::localtime_r(&sec, &mut tm) }.is_null() {
            return Err(Error::new(ErrorKind::MissingLocalTime));
        }
        let year =
            tm.tm_year.checked_add(1900).ok_or_else(|| Error::new(ErrorKind::OutOfRange))?;
        Date::from_ymd_opt(year, (tm.tm_mon + 1) as u32, tm.tm_mday as u32)
            .ok_or_else(|| Error::new(ErrorKind::OutOfRange))
    }

    #[cfg(windows)]
    fn today(&self) -> Result<Date, Error> {
        use std::mem;
        use winapi::um::minwinbase::SYSTEMTIME;
        use winapi::um::sysinfoapi::GetLocalTime;

        let mut st: SYSTEMTIME = unsafe { mem::zeroed() };
        unsafe { GetLocalTime(&mut st) };
        Date::from_ymd_opt(i32::from(st.wYear), u32::from(st.wMonth), u32::from(st.wDay))
            .ok_or_else(|| Error::new(ErrorKind::OutOfRange))
    }

    #[cfg(not(any(
        unix,
        windows,
        all(
            target_arch = "wasm32",
            feature = "wasmbind",
            not(any(target_os = "emscripten", target_os = "wasi"))
        )
    )))]
    fn today(&self) -> Result<Date, Error> {
        Utc.today()
    }
}

/// The provider with a fixed offset from UTC, from UTC-23:59:59 to
/// UTC+23:59:59. "Today" is the current civil date in that zone.
#[derive(Copy, Clone, PartialEq, Eq, Hash)]
pub struct FixedOffset {
    local_minus_utc: i32,
}

impl FixedOffset {
    /// The zero offset; resolves the same date as [`Utc`].
    pub const UTC: FixedOffset = FixedOffset { local_minus_utc: 0 };

    /// Makes a new `FixedOffset` for the Eastern Hemisphere with given
    /// timezone difference. The negative `secs` means the Western Hemisphere.
    ///
    /// # Panics
    ///
    /// Panics on the out-of-bound `secs`.
    pub fn east(secs: i32) -> FixedOffset {
        FixedOffset::east_opt(secs).expect("FixedOffset::east out of bounds")
    }

    /// Makes a new `FixedOffset` for the Eastern Hemisphere with given
    /// timezone difference. The negative `secs` means the Western Hemisphere.
    ///
    /// Returns `None` on the out-of-bound `secs`.
    pub fn east_opt(secs: i32) -> Option<FixedOffset> {
        if -86_400 < secs && secs < 86_400 {
            Some(FixedOffset { local_minus_utc: secs })
        } else {
            None
        }
    }

    /// Makes a new `FixedOffset` for the Western Hemisphere with given
    /// timezone difference. The negative `secs` means the Eastern Hemisphere.
    ///
    /// # Panics
    ///
    /// Panics on the out-of-bound `secs`.
    pub fn west(secs: i32) -> FixedOffset {
        FixedOffset::west_opt(secs).expect("FixedOffset::west out of bounds")
    }

    /// Makes a new `FixedOffset` for the Western Hemisphere with given
    /// timezone difference. The negative `secs` means the Eastern Hemisphere.
    ///
    /// Returns `None` on the out-of-bound `secs`.
    pub fn west_opt(secs: i32) -> Option<FixedOffset> {
        if -86_400 < secs && secs < 86_400 {
            Some(FixedOffset { local_minus_utc: -secs })
        } else {
            None
        }
    }

    /// Returns the number of seconds to add to convert from UTC to the local
    /// time of this provider.
    pub const fn local_minus_utc(&self) -> i32 {
        self.local_minus_utc
    }
}

impl Clock for FixedOffset {
    fn today(&self) -> Result<Date, Error> {
        let secs = epoch_secs_now()?
            .checked_add(i64::from(self.local_minus_utc))
            .ok_or_else(|| Error::new(ErrorKind::OutOfRange))?;
        date_from_epoch_days(div_floor(secs, 86_400))
    }
}

impl fmt::Debug for FixedOffset {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let offset = self.local_minus_utc;
        let (sign, offset) = if offset < 0 { ('-', -offset) } else { ('+', offset) };
        let (mins, sec) = div_mod_floor(offset, 60);
        let (hour, min) = div_mod_floor(mins, 60);
        if sec == 0 {
            write!(f, "{}{:02}:{:02}", sign, hour, min)
        } else {
            write!(f, "{}{:02}:{:02}:{:02}", sign, hour, min, sec)
        }
    }
}

impl fmt::Display for FixedOffset {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// The provider that always resolves "today" to one fixed date, making
/// [`Week::current_in`](crate::Week::current_in) deterministic in tests.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct FixedClock(pub Date);

impl Clock for FixedClock {
    fn today(&self) -> Result<Date, Error> {
        Ok(self.0)
    }
}

// 1970-01-01 counted with January 1 of year 1 as day 1
const UNIX_EPOCH_DAYS_FROM_CE: i64 = 719_163;

#[cfg(not(all(
    target_arch = "wasm32",
    feature = "wasmbind",
    not(any(target_os = "emscripten", target_os = "wasi"))
)))]
fn epoch_secs_now() -> Result<i64, Error> {
    use core::convert::TryFrom;
    use std::time::{SystemTime, UNIX_EPOCH};

    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_err(|_| Error::new(ErrorKind::SystemTimeBeforeEpoch))?;
    i64::try_from(now.as_secs()).map_err(|_| Error::new(ErrorKind::OutOfRange))
}

#[cfg(all(
    target_arch = "wasm32",
    feature = "wasmbind",
    not(any(target_os = "emscripten", target_os = "wasi"))
))]
fn epoch_secs_now() -> Result<i64, Error> {
    let millis = js_sys::Date::now();
    if millis < 0.0 {
        return Err(Error::new(ErrorKind::SystemTimeBeforeEpoch));
    }
    Ok((millis / 1000.0) as i64)
}

fn date_from_epoch_days(days: i64) -> Result<Date, Error> {
    let days = days + UNIX_EPOCH_DAYS_FROM_CE;
    if days < i64::from(Date::MIN.num_days_from_ce())
        || days > i64::from(Date::MAX.num_days_from_ce())
    {
        return Err(Error::new(ErrorKind::OutOfRange));
    }
    let (year, ordinal) = internals::year_from_days_ce(days);
    Date::from_yo_opt(year, ordinal).ok_or_else(|| Error::new(ErrorKind::OutOfRange))
}

#[cfg(test)]
mod tests {
    use super::{date_from_epoch_days, Clock, FixedClock, FixedOffset, Local, Utc};
    use crate::{Date, Week};
    use num_integer::div_floor;

    #[test]
    fn test_date_from_epoch_days() {
        assert_eq!(date_from_epoch_days(0).unwrap(), Date::from_ymd(1970, 1, 1));
        assert_eq!(date_from_epoch_days(-1).unwrap(), Date::from_ymd(1969, 12, 31));
        assert_eq!(date_from_epoch_days(17_167).unwrap(), Date::from_ymd(2017, 1, 1));
        assert!(date_from_epoch_days(i64::from(i32::max_value())).is_err());
        assert!(date_from_epoch_days(i64::from(i32::min_value())).is_err());
    }

    #[test]
    fn test_offset_resolves_civil_date() {
        // the last UTC second of 2016 and the first of 2017
        let before_midnight = 1_483_228_799_i64;
        let midnight = 1_483_228_800_i64;

        let date_at = |secs: i64, offset: i32| {
            date_from_epoch_days(div_floor(secs + i64::from(offset), 86_400)).unwrap()
        };

        assert_eq!(date_at(before_midnight, 0), Date::from_ymd(2016, 12, 31));
        assert_eq!(date_at(midnight, 0), Date::from_ymd(2017, 1, 1));
        // an eastern zone is already in the new year
        assert_eq!(date_at(before_midnight, 3_600), Date::from_ymd(2017, 1, 1));
        // a western zone is still in the old one
        assert_eq!(date_at(midnight, -3_600), Date::from_ymd(2016, 12, 31));
    }

    #[test]
    fn test_fixed_clock_current_week() {
        // 2017-01-01 is a Sunday closing 2016's last week; Monday opens week 1
        let clock = FixedClock(Date::from_ymd(2017, 1, 1));
        assert_eq!(Week::current_in(&clock).unwrap(), Week::new(2016, 52));
        let clock = FixedClock(Date::from_ymd(2017, 1, 2));
        assert_eq!(Week::current_in(&clock).unwrap(), Week::new(2017, 1));

        // the containing week of an extreme date is not representable
        assert!(Week::current_in(&FixedClock(Date::MAX)).is_err());
    }

    #[test]
    fn test_fixed_offset_bounds() {
        assert!(FixedOffset::east_opt(86_399).is_some());
        assert!(FixedOffset::east_opt(86_400).is_none());
        assert!(FixedOffset::east_opt(-86_399).is_some());
        assert!(FixedOffset::east_opt(-86_400).is_none());
        assert!(FixedOffset::west_opt(86_400).is_none());
        assert_eq!(FixedOffset::east(0), FixedOffset::UTC);
        assert_eq!(FixedOffset::east(-3_600), FixedOffset::west(3_600));
        assert_eq!(FixedOffset::west(19_800).local_minus_utc(), -19_800);
    }

    #[test]
    fn test_fixed_offset_fmt() {
        assert_eq!(format!("{:?}", FixedOffset::east(3_600)), "+01:00");
        assert_eq!(format!("{:?}", FixedOffset::west(19_800)), "-05:30");
        assert_eq!(format!("{:?}", FixedOffset::east(3_661)), "+01:01:01");
        assert_eq!(format!("{:?}", FixedOffset::UTC), "+00:00");
        assert_eq!(format!("{:?}", Utc), "Z");
        assert_eq!(format!("{}", Utc), "UTC");
    }

    #[test]
    fn test_today_smoke() {
        // live clocks; only sanity of the resolved dates is checked
        assert!(Utc.today().unwrap().year() >= 2016);
        assert!(Local.today().unwrap().year() >= 2016);
        assert!(FixedOffset::UTC.today().unwrap().year() >= 2016);
        let _ = Week::current().unwrap();
    }
}
