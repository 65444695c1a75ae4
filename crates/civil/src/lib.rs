//! Civil calendar time for time-signal encoders.
//!
//! This crate is divided into four parts: [`calendar`] holds the calendar time value and the pure
//! Gregorian calendar arithmetic behind it; [`zone`] parses POSIX TZ strings and normalizes local
//! times across DST transitions; [`parse`] reads date time strings; and, with the `now` feature,
//! [`clock`] reads the system wall clock.
//!
//! The crate is `no_std`. All conversions are done in integer arithmetic without touching libc's
//! `mktime` or `localtime`, so they are reentrant and independent of the process `TZ`.
//!
//! # Examples
//!
//! ```
//! # use civil::{Calendar, CalendarTime, Dst, Weekday, Zone};
//! let zone = Zone::central_european();
//!
//! // Sunday, March 31, 2024, 01:59 CET, one minute before clocks go forward
//! let now = CalendarTime::new(2024, 3, 31, 1, 59, 0, Dst::Unknown).unwrap();
//! let next = zone.shift(&now, 60);
//! assert_eq!((next.hour(), next.minute()), (3, 0));
//! assert_eq!(next.dst(), Dst::InEffect);
//! assert_eq!(next.weekday(), Weekday::Sunday);
//! ```

#![no_std]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod calendar;
pub mod zone;
pub mod parse;

#[cfg_attr(docsrs, doc(cfg(feature = "now")))]
#[cfg(feature = "now")]
pub mod clock;

pub use calendar::{CalendarError, CalendarTime, Dst, Weekday};
pub use parse::ParseError;
pub use zone::{Calendar, Zone, ZoneError, ZoneInfo};
