//! ISO 8601 calendar weeks as plain values.
//!
//! A [`Week`] is the Monday-through-Sunday span identified by an ISO
//! week-year and a week number, stored as its first day. Weeks compare in
//! chronological order, hash consistently with equality, navigate to their
//! neighbors across year boundaries, and enumerate their seven days, so data
//! can be grouped by calendar week instead of by raw date.
//!
//! ```
//! use isoweek::{Date, Week};
//!
//! let week = Week::new(2017, 1);
//! assert_eq!(week.first_day(), Date::from_ymd(2017, 1, 2));
//! assert_eq!(week.last_day(), Date::from_ymd(2017, 1, 8));
//! assert_eq!(week.next_week(), Week::new(2017, 2));
//!
//! // week numbers normalize through year boundaries
//! assert_eq!(Week::new(2017, 0), Week::new(2016, 52));
//! assert_eq!(Week::new(2017, -1), Week::new(2017, 52));
//! assert_eq!(Week::new(2017, 53), Week::new(2018, 1));
//!
//! // seven days, Monday through Sunday
//! assert_eq!(week.days().count(), 7);
//! assert!(week.days().all(|day| day.week() == week));
//! ```
//!
//! The week containing "today" comes from an injected [`Clock`] provider
//! (feature `clock`, on by default). [`Week::current`] reads the system's
//! local date; [`Week::current_in`] takes any provider, which is how tests
//! pin the result:
//!
//! ```
//! # #[cfg(feature = "clock")] {
//! use isoweek::{Date, FixedClock, Week};
//!
//! let clock = FixedClock(Date::from_ymd(2017, 1, 1));
//! assert_eq!(Week::current_in(&clock).unwrap(), Week::new(2016, 52));
//! # }
//! ```
//!
//! ## Features
//!
//! - `std` (default): `std::error::Error` impls; disable for `no_std` use.
//! - `clock` (default, implies `std`): the [`clock`] providers and
//!   [`Week::current`].
//! - `serde`: `Serialize`/`Deserialize` through the canonical text forms.
//! - `rkyv`: zero-copy archive derives.
//! - `arbitrary`: `arbitrary::Arbitrary` impls for fuzzing.
//! - `wasmbind`: resolve "today" through `js-sys` on `wasm32` targets.

#![cfg_attr(not(any(feature = "std", test)), no_std)]
#![warn(missing_docs)]
#![deny(missing_debug_implementations)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(feature = "clock")]
#[cfg_attr(docsrs, doc(cfg(feature = "clock")))]
pub mod clock;
mod date;
#[cfg(feature = "clock")]
mod error;
mod internals;
mod week;
mod weekday;

#[cfg(feature = "clock")]
#[cfg_attr(docsrs, doc(cfg(feature = "clock")))]
pub use clock::{Clock, FixedClock, FixedOffset, Local, Utc};
pub use date::{Date, Days, ParseDateError};
#[cfg(feature = "clock")]
#[cfg_attr(docsrs, doc(cfg(feature = "clock")))]
pub use error::Error;
pub use week::{ParseWeekError, Week, WeekDaysIterator, Weeks, WeeksIterator};
pub use weekday::Weekday;
