//! Timezone rules from POSIX TZ strings, and normalization of local times.
//!
//! A [`Zone`] is a standard UTC offset plus an optional daylight savings rule, as described by a
//! [TZ string] such as `CET-1CEST,M3.5.0,M10.5.0/3`. All three date rule forms (`Jn`, `n`, and
//! `Mm.w.d`) and transition times outside [0, 24h] are supported. Quoted names (`<+01>-1`) are
//! accepted and discarded; this module does not keep timezone names.
//!
//! [`Zone`] implements [`Calendar`], the time arithmetic used by encoders that need to look ahead
//! from a local time (e.g. "what is the local time one hour from now, and is DST in effect then?").
//!
//! [TZ string]: https://www.gnu.org/software/libc/manual/html_node/TZ-Variable.html
//!
//! # Examples
//!
//! ```
//! # use civil::{Calendar, CalendarTime, Dst, Zone, ZoneInfo};
//! let zone: Zone = "CET-1CEST,M3.5.0,M10.5.0/3".parse().unwrap();
//! assert_eq!(zone, Zone::central_european());
//!
//! // 2024-10-27 00:59:59 UTC is the last second of CEST
//! assert_eq!(zone.info(1729990799), ZoneInfo { utoff: 7200, isdst: true });
//! assert_eq!(zone.info(1729990800), ZoneInfo { utoff: 3600, isdst: false });
//!
//! let t = CalendarTime::new(2024, 10, 27, 2, 59, 0, Dst::InEffect).unwrap();
//! let later = zone.shift(&t, 60);
//! assert_eq!(later.to_string(), "2024-10-27 02:00:00 STD");
//! ```

use core::str::FromStr;
use crate::calendar::{
	days_from_civil,
	days_in_month,
	is_leap_year,
	weekday_from_ymd,
	civil_from_days,
	CalendarTime,
	Dst,
	MAX_YEAR,
	MIN_YEAR,
	SECONDS_PER_DAY,
	SECONDS_PER_HOUR
};

/// The TZ string for German legal time, used by DCF77.
pub const CENTRAL_EUROPEAN: &str = "CET-1CEST,M3.5.0,M10.5.0/3";

/// Default transition time of day when a TZ string omits `/time`.
const DEFAULT_TRANSITION_TIME: i32 = 2 * 3600;

/// The error type for parsing TZ strings.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ZoneError {
	#[error("missing TZ string")]
	Empty,
	#[error("invalid timezone name")]
	InvalidName,
	#[error("missing or malformed UTC offset")]
	InvalidOffset,
	#[error("missing TZ date rule")]
	MissingRule,
	#[error("invalid TZ date rule")]
	InvalidRule,
	#[error("date component out of range")]
	DateOutOfRange,
	#[error("time component out of range")]
	TimeOutOfRange,
	#[error("unexpected input at end of TZ string")]
	UnexpectedInput
}

/// Timezone information at a moment in time.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ZoneInfo {
	/// The UTC offset in seconds, added to UTC to get local time
	pub utoff: i32,
	/// Whether daylight savings time is in effect
	pub isdst: bool
}

/// A TZ string date rule.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DateRule {
	/// `Jn`: day 1-365, never counting February 29.
	Julian(u16),
	/// `n`: zero-based day 0-365, counting February 29 in leap years.
	Ordinal(u16),
	/// `Mm.w.d`: weekday `d` (0 = Sunday) of week `w` (1-5, 5 = last) of month `m`.
	MonthWeekDay { month: u8, week: u8, weekday: u8 }
}

impl DateRule {
	/// Days since January 1, 1970 of the date selected by this rule in `year`.
	///
	/// # Examples
	///
	/// ```
	/// # use civil::zone::DateRule;
	/// // Last Sunday in March 2024
	/// let rule = DateRule::MonthWeekDay { month: 3, week: 5, weekday: 0 };
	/// assert_eq!(rule.days(2024), 19813);
	/// assert_eq!(DateRule::Julian(60).days(2024), DateRule::Ordinal(60).days(2024));
	/// ```
	pub fn days(&self, year: i64) -> i64 {
		let jan1 = days_from_civil(year, 1, 1);
		match *self {
			DateRule::Julian(n) => {
				let skip_leap_day = is_leap_year(year) && n >= 60;
				jan1 + n as i64 - 1 + skip_leap_day as i64
			},
			DateRule::Ordinal(n) => jan1 + n as i64,
			DateRule::MonthWeekDay { month, week, weekday } => {
				// Offset from the 1st of the month to the first matching weekday, then whole weeks
				let first = weekday_from_ymd(year, month, 1).number_from_sunday();
				let offset = (weekday + 7 - first) % 7;
				let mut day = 1 + offset + 7 * (week - 1);
				if day > days_in_month(year, month) {
					day -= 7;
				}
				days_from_civil(year, month, day)
			}
		}
	}
}

/// A DST transition: the date rule and local time of day (seconds, may exceed a day).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Transition {
	pub date: DateRule,
	pub time: i32
}

/// Daylight savings configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DstRule {
	/// UTC offset in seconds while DST is in effect
	pub utoff: i32,
	/// Transition from standard time to DST, in standard local time
	pub start: Transition,
	/// Transition from DST to standard time, in DST local time
	pub end: Transition
}

/// Timezone configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Zone {
	/// UTC offset in seconds for standard time
	utoff: i32,
	dst: Option<DstRule>
}

impl Zone {
	/// A zone with a fixed UTC offset and no DST.
	pub const fn fixed(utoff: i32) -> Zone {
		Zone { utoff, dst: None }
	}

	/// A zone with DST.
	pub const fn with_dst(utoff: i32, dst: DstRule) -> Zone {
		Zone { utoff, dst: Some(dst) }
	}

	/// German legal time, equivalent to [`CENTRAL_EUROPEAN`]: UTC+1, UTC+2 from the last Sunday of
	/// March at 02:00 until the last Sunday of October at 03:00.
	pub const fn central_european() -> Zone {
		Zone::with_dst(3600, DstRule {
			utoff: 7200,
			start: Transition {
				date: DateRule::MonthWeekDay { month: 3, week: 5, weekday: 0 },
				time: 2 * 3600
			},
			end: Transition {
				date: DateRule::MonthWeekDay { month: 10, week: 5, weekday: 0 },
				time: 3 * 3600
			}
		})
	}

	/// Timezone information at a Unix timestamp.
	///
	/// Any `time` is accepted. Beyond the years [`CalendarTime`] can represent, the rule is applied
	/// as of the nearest year just outside that range.
	pub fn info(&self, time: i64) -> ZoneInfo {
		let Some(rule) = self.dst else {
			return ZoneInfo { utoff: self.utoff, isdst: false };
		};

		// Transition instants in the local year of `time`
		let local = time.saturating_add(self.utoff as i64);
		let (year, _, _) = civil_from_days(local.div_euclid(SECONDS_PER_DAY));
		let year = year.clamp(MIN_YEAR as i64 - 1, MAX_YEAR as i64 + 1);
		let start = rule.start.date.days(year) * SECONDS_PER_DAY
				  + rule.start.time as i64 - self.utoff as i64;
		let end = rule.end.date.days(year) * SECONDS_PER_DAY
				+ rule.end.time as i64 - rule.utoff as i64;
		// Northern hemisphere rules have start < end, southern ones wrap over the new year
		let isdst = if start < end {
			start <= time && time < end
		} else {
			time < end || start <= time
		};

		ZoneInfo {
			utoff: if isdst { rule.utoff } else { self.utoff },
			isdst
		}
	}

	/// Local calendar time at a Unix timestamp.
	///
	/// Returns `None` if the local year falls outside the range accepted by [`CalendarTime::new`].
	pub fn to_local(&self, time: i64) -> Option<CalendarTime> {
		// Bound the input so the year arithmetic below cannot overflow
		const LIMIT: i64 = (MAX_YEAR as i64 + 1) * 366 * SECONDS_PER_DAY;
		if !(-LIMIT..=LIMIT).contains(&time) {
			return None;
		}
		let local = self.local_at(time);
		(MIN_YEAR..=MAX_YEAR).contains(&local.year()).then_some(local)
	}

	/// Unix timestamp of a local calendar time, normalizing like `mktime`.
	///
	/// A known DST flag selects the offset used, even if it disagrees with the zone's rule at that
	/// time. [`Dst::Unknown`] resolves to whichever offset is consistent with the resulting instant;
	/// repeated local times (the hour after DST ends) and skipped local times (the hour after DST
	/// starts) both resolve to standard time.
	pub fn to_unix(&self, time: &CalendarTime) -> i64 {
		let local = time.local_seconds();
		let standard = local - self.utoff as i64;
		let Some(rule) = self.dst else {
			return standard;
		};
		let daylight = local - rule.utoff as i64;

		match time.dst() {
			Dst::InEffect => daylight,
			Dst::NotInEffect => standard,
			Dst::Unknown => {
				if !self.info(standard).isdst {
					standard
				} else if self.info(daylight).isdst {
					daylight
				} else {
					standard
				}
			}
		}
	}

	/// Local time at `time`, with no range check.
	fn local_at(&self, time: i64) -> CalendarTime {
		let info = self.info(time);
		CalendarTime::from_local_seconds(time + info.utoff as i64, Dst::from_flag(info.isdst))
	}
}

/// Time arithmetic on local calendar times.
///
/// Implementations own timezone normalization: the result of [`Calendar::shift`] must carry the
/// correct local fields and a resolved DST flag for the shifted instant, including across DST
/// transitions and month/year boundaries.
pub trait Calendar {
	/// The local calendar time `seconds` after `time`.
	fn shift(&self, time: &CalendarTime, seconds: i32) -> CalendarTime;

	/// `time` with its fields and DST flag made consistent with the zone.
	fn normalize(&self, time: &CalendarTime) -> CalendarTime {
		self.shift(time, 0)
	}
}

impl Calendar for Zone {
	fn shift(&self, time: &CalendarTime, seconds: i32) -> CalendarTime {
		self.local_at(self.to_unix(time) + seconds as i64)
	}
}

/// Byte cursor over a TZ string.
struct Scanner<'a> {
	bytes: &'a [u8]
}

impl<'a> Scanner<'a> {
	fn peek(&self) -> Option<u8> {
		self.bytes.first().copied()
	}

	fn eat(&mut self, b: u8) -> bool {
		if self.peek() == Some(b) {
			self.bytes = &self.bytes[1..];
			true
		} else {
			false
		}
	}

	/// Read decimal digits, returning `None` if there are none.
	fn number(&mut self) -> Option<u32> {
		let len = self.bytes.iter().take_while(|b| b.is_ascii_digit()).count();
		if len == 0 {
			return None;
		}
		let (digits, rest) = self.bytes.split_at(len);
		self.bytes = rest;
		Some(digits.iter().fold(0u32, |acc, &d| acc.saturating_mul(10).saturating_add((d - b'0') as u32)))
	}

	/// Skip a timezone name, either unquoted alphabetic or enclosed in `<...>`.
	fn name(&mut self) -> Result<bool, ZoneError> {
		if self.eat(b'<') {
			let len = self.bytes.iter().position(|&b| b == b'>').ok_or(ZoneError::InvalidName)?;
			if len < 3 {
				return Err(ZoneError::InvalidName);
			}
			self.bytes = &self.bytes[len + 1..];
			return Ok(true);
		}

		let len = self.bytes.iter().take_while(|b| b.is_ascii_alphabetic()).count();
		match len {
			0 => Ok(false),
			1 | 2 => Err(ZoneError::InvalidName),
			_ => {
				self.bytes = &self.bytes[len..];
				Ok(true)
			}
		}
	}

	/// Read `[+-]hh[:mm[:ss]]` as seconds. Hours are limited to 24, or 167 when `extended`.
	fn time(&mut self, extended: bool) -> Result<i32, ZoneError> {
		let sign = if self.eat(b'-') {
			-1
		} else {
			self.eat(b'+');
			1
		};

		let hours = self.number().ok_or(ZoneError::InvalidOffset)?;
		if hours > if extended { 167 } else { 24 } {
			return Err(ZoneError::TimeOutOfRange);
		}
		let mut seconds = hours as i32 * 3600;
		for unit in [60, 1] {
			if !self.eat(b':') {
				break;
			}
			let v = self.number().ok_or(ZoneError::InvalidOffset)?;
			if v > 59 {
				return Err(ZoneError::TimeOutOfRange);
			}
			seconds += v as i32 * unit;
		}
		Ok(sign * seconds)
	}

	fn date_rule(&mut self) -> Result<DateRule, ZoneError> {
		match self.peek() {
			None => Err(ZoneError::MissingRule),
			Some(b'J') => {
				self.eat(b'J');
				let n = self.number().ok_or(ZoneError::InvalidRule)?;
				if !(1..=365).contains(&n) {
					return Err(ZoneError::DateOutOfRange);
				}
				Ok(DateRule::Julian(n as u16))
			},
			Some(b'0'..=b'9') => {
				let n = self.number().ok_or(ZoneError::InvalidRule)?;
				if n > 365 {
					return Err(ZoneError::DateOutOfRange);
				}
				Ok(DateRule::Ordinal(n as u16))
			},
			Some(b'M') => {
				self.eat(b'M');
				let month = self.number().ok_or(ZoneError::InvalidRule)?;
				if !self.eat(b'.') {
					return Err(ZoneError::InvalidRule);
				}
				let week = self.number().ok_or(ZoneError::InvalidRule)?;
				if !self.eat(b'.') {
					return Err(ZoneError::InvalidRule);
				}
				let weekday = self.number().ok_or(ZoneError::InvalidRule)?;
				if !(1..=12).contains(&month) || !(1..=5).contains(&week) || weekday > 6 {
					return Err(ZoneError::DateOutOfRange);
				}
				Ok(DateRule::MonthWeekDay { month: month as u8, week: week as u8, weekday: weekday as u8 })
			},
			Some(_) => Err(ZoneError::InvalidRule)
		}
	}

	fn transition(&mut self) -> Result<Transition, ZoneError> {
		let date = self.date_rule()?;
		let time = if self.eat(b'/') {
			self.time(true)?
		} else {
			DEFAULT_TRANSITION_TIME
		};
		Ok(Transition { date, time })
	}
}

impl FromStr for Zone {
	type Err = ZoneError;

	/// Parse a POSIX TZ string.
	///
	/// TZ string offsets are *subtracted* from local time to get UTC (`EST5` is UTC-5); the parsed
	/// [`Zone`] stores offsets the other way around. A DST name without an offset defaults to one
	/// hour ahead of standard time, and a DST name requires both transition rules.
	///
	/// # Examples
	///
	/// ```
	/// # use civil::zone::{Zone, ZoneError};
	/// assert_eq!("EST5".parse::<Zone>(), Ok(Zone::fixed(-18000)));
	/// assert_eq!("<+0530>-5:30".parse::<Zone>(), Ok(Zone::fixed(19800)));
	/// assert_eq!("".parse::<Zone>(), Err(ZoneError::Empty));
	/// assert_eq!("EST5EDT".parse::<Zone>(), Err(ZoneError::MissingRule));
	/// ```
	fn from_str(s: &str) -> Result<Self, Self::Err> {
		if s.is_empty() {
			return Err(ZoneError::Empty);
		}

		let mut scanner = Scanner { bytes: s.as_bytes() };
		if !scanner.name()? {
			return Err(ZoneError::InvalidName);
		}
		let utoff = -scanner.time(false)?;

		let dst = if scanner.name()? {
			let dst_utoff = match scanner.peek() {
				Some(b'+' | b'-' | b'0'..=b'9') => -scanner.time(false)?,
				_ => utoff + SECONDS_PER_HOUR as i32
			};
			if !scanner.eat(b',') {
				return Err(ZoneError::MissingRule);
			}
			let start = scanner.transition()?;
			if !scanner.eat(b',') {
				return Err(ZoneError::MissingRule);
			}
			let end = scanner.transition()?;
			Some(DstRule { utoff: dst_utoff, start, end })
		} else {
			None
		};

		if scanner.peek().is_some() {
			return Err(ZoneError::UnexpectedInput);
		}

		Ok(Zone { utoff, dst })
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn local(y: i32, mo: u8, d: u8, h: u8, mi: u8, dst: Dst) -> CalendarTime {
		CalendarTime::new(y, mo, d, h, mi, 0, dst).unwrap()
	}

	#[test]
	fn parse_test() {
		assert_eq!("CET-1CEST,M3.5.0,M10.5.0/3".parse(), Ok(Zone::central_european()));
		assert_eq!("EST5EDT,M3.2.0,M11.1.0".parse(), Ok(Zone::with_dst(-18000, DstRule {
			utoff: -14400,
			start: Transition { date: DateRule::MonthWeekDay { month: 3, week: 2, weekday: 0 }, time: 7200 },
			end: Transition { date: DateRule::MonthWeekDay { month: 11, week: 1, weekday: 0 }, time: 7200 }
		})));
		assert_eq!("XXX4:30YYY6:45,25/3:10:30,J280/-1:20".parse(), Ok(Zone::with_dst(-16200, DstRule {
			utoff: -24300,
			start: Transition { date: DateRule::Ordinal(25), time: 11430 },
			end: Transition { date: DateRule::Julian(280), time: -4800 }
		})));
		assert_eq!("UTC0".parse(), Ok(Zone::fixed(0)));

		assert_eq!("EST".parse::<Zone>(), Err(ZoneError::InvalidOffset));
		assert_eq!("E5".parse::<Zone>(), Err(ZoneError::InvalidName));
		assert_eq!("5EST".parse::<Zone>(), Err(ZoneError::InvalidName));
		assert_eq!("EST25".parse::<Zone>(), Err(ZoneError::TimeOutOfRange));
		assert_eq!("EST5:60".parse::<Zone>(), Err(ZoneError::TimeOutOfRange));
		assert_eq!("EST5EDT,M3.2.0".parse::<Zone>(), Err(ZoneError::MissingRule));
		assert_eq!("EST5EDT,M13.2.0,M11.1.0".parse::<Zone>(), Err(ZoneError::DateOutOfRange));
		assert_eq!("EST5EDT,M3.2,M11.1.0".parse::<Zone>(), Err(ZoneError::InvalidRule));
		assert_eq!("EST5EDT,J0,J365".parse::<Zone>(), Err(ZoneError::DateOutOfRange));
		assert_eq!("EST5EDT,X1,J365".parse::<Zone>(), Err(ZoneError::InvalidRule));
		assert_eq!("EST5 ".parse::<Zone>(), Err(ZoneError::UnexpectedInput));
	}

	#[test]
	fn date_rule_test() {
		// Mar 31, 2024 and Oct 27, 2024 are the last Sundays of their months
		let march = DateRule::MonthWeekDay { month: 3, week: 5, weekday: 0 };
		assert_eq!(march.days(2024), days_from_civil(2024, 3, 31));
		let october = DateRule::MonthWeekDay { month: 10, week: 5, weekday: 0 };
		assert_eq!(october.days(2024), days_from_civil(2024, 10, 27));
		// Second Sunday of March 2024
		let second = DateRule::MonthWeekDay { month: 3, week: 2, weekday: 0 };
		assert_eq!(second.days(2024), days_from_civil(2024, 3, 10));
		// Last Thursday of February 2024 is the leap day
		let leap = DateRule::MonthWeekDay { month: 2, week: 5, weekday: 4 };
		assert_eq!(leap.days(2024), days_from_civil(2024, 2, 29));

		assert_eq!(DateRule::Julian(59).days(2024), days_from_civil(2024, 2, 28));
		assert_eq!(DateRule::Julian(60).days(2024), days_from_civil(2024, 3, 1));
		assert_eq!(DateRule::Ordinal(59).days(2024), days_from_civil(2024, 2, 29));
		assert_eq!(DateRule::Ordinal(59).days(2023), days_from_civil(2023, 3, 1));
	}

	#[test]
	fn info_test() {
		let zone = Zone::central_european();
		// Mar 31, 2024 01:00:00 UTC, clocks go forward
		assert_eq!(zone.info(1711846799), ZoneInfo { utoff: 3600, isdst: false });
		assert_eq!(zone.info(1711846800), ZoneInfo { utoff: 7200, isdst: true });
		// Oct 27, 2024 01:00:00 UTC, clocks go back
		assert_eq!(zone.info(1729990799), ZoneInfo { utoff: 7200, isdst: true });
		assert_eq!(zone.info(1729990800), ZoneInfo { utoff: 3600, isdst: false });

		let us: Zone = "EST5EDT,M3.2.0,M11.1.0".parse().unwrap();
		assert_eq!(us.info(1710053999), ZoneInfo { utoff: -18000, isdst: false });
		assert_eq!(us.info(1710054000), ZoneInfo { utoff: -14400, isdst: true });
		assert_eq!(us.info(1730613599), ZoneInfo { utoff: -14400, isdst: true });
		assert_eq!(us.info(1730613600), ZoneInfo { utoff: -18000, isdst: false });

		// Southern hemisphere: DST from first Sunday of October to first Sunday of April
		let sydney: Zone = "AEST-10AEDT,M10.1.0,M4.1.0/3".parse().unwrap();
		assert_eq!(sydney.info(1704067200).isdst, true);   // Jan 1, 2024
		assert_eq!(sydney.info(1719792000).isdst, false);  // Jul 1, 2024

		assert_eq!(Zone::fixed(0).info(1711846800), ZoneInfo { utoff: 0, isdst: false });
	}

	#[test]
	fn info_extreme_test() {
		let zone = Zone::central_european();
		assert_eq!(zone.info(i64::MAX), ZoneInfo { utoff: 3600, isdst: false });
		assert_eq!(zone.info(i64::MIN), ZoneInfo { utoff: 3600, isdst: false });
		assert_eq!(zone.to_local(i64::MAX), None);
		assert_eq!(zone.to_local(i64::MIN), None);

		let sydney: Zone = "AEST-10AEDT,M10.1.0,M4.1.0/3".parse().unwrap();
		assert_eq!(sydney.info(i64::MAX).isdst, true);
		assert_eq!(sydney.info(i64::MIN).isdst, true);
	}

	#[test]
	fn to_unix_test() {
		let zone = Zone::central_european();
		// Ordinary winter and summer times
		assert_eq!(zone.to_unix(&local(2024, 1, 15, 12, 0, Dst::Unknown)), 1705316400);
		assert_eq!(zone.to_unix(&local(2024, 5, 26, 18, 57, Dst::Unknown)), 1716742620);
		// Explicit flags select the offset
		assert_eq!(zone.to_unix(&local(2024, 5, 26, 18, 57, Dst::InEffect)), 1716742620);
		assert_eq!(zone.to_unix(&local(2024, 5, 26, 18, 57, Dst::NotInEffect)), 1716742620 + 3600);
		// Repeated hour: unknown prefers standard time
		assert_eq!(zone.to_unix(&local(2024, 10, 27, 2, 30, Dst::Unknown)), 1729992600);
		assert_eq!(zone.to_unix(&local(2024, 10, 27, 2, 30, Dst::InEffect)), 1729989000);
		// Skipped hour: unknown is read as standard time
		assert_eq!(zone.to_unix(&local(2024, 3, 31, 2, 30, Dst::Unknown)), 1711848600);
	}

	#[test]
	fn shift_test() {
		let zone = Zone::central_european();

		let t = zone.shift(&local(2024, 3, 31, 1, 59, Dst::Unknown), 60);
		assert_eq!(t, local(2024, 3, 31, 3, 0, Dst::InEffect));

		let t = zone.shift(&local(2024, 10, 27, 2, 59, Dst::InEffect), 60);
		assert_eq!(t, local(2024, 10, 27, 2, 0, Dst::NotInEffect));

		let t = zone.shift(&local(2024, 10, 27, 2, 30, Dst::InEffect), 3600);
		assert_eq!(t, local(2024, 10, 27, 2, 30, Dst::NotInEffect));

		let t = zone.shift(&local(1999, 12, 31, 23, 59, Dst::Unknown), 60);
		assert_eq!(t, local(2000, 1, 1, 0, 0, Dst::NotInEffect));

		let t = zone.normalize(&local(2024, 3, 31, 2, 30, Dst::Unknown));
		assert_eq!(t, local(2024, 3, 31, 3, 30, Dst::InEffect));

		// The last minute of the supported range still shifts forward
		let t = zone.shift(&local(9999, 12, 31, 23, 59, Dst::Unknown), 60);
		assert_eq!((t.year(), t.month(), t.day()), (10000, 1, 1));
	}

	#[test]
	fn to_local_test() {
		let zone = Zone::central_european();
		assert_eq!(zone.to_local(1716742645), Some(
			CalendarTime::new(2024, 5, 26, 18, 57, 25, Dst::InEffect).unwrap()
		));
		assert_eq!(zone.to_local(0), Some(local(1970, 1, 1, 1, 0, Dst::NotInEffect)));
		assert_eq!(zone.to_local(i64::MAX), None);
		assert_eq!(zone.to_local(i64::MIN), None);
		assert_eq!(zone.to_local(-62135700000), None);
	}
}
