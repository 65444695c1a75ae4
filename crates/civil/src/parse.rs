//! Parse local date time strings like `YYYY-MM-DD HH:MM:SS`.
//!
//! [`CalendarTime`] implements [`FromStr`] for the same format it displays:
//! - `YYYY-MM-DD HH:MM` or `YYYY-MM-DDTHH:MM`
//! - `YYYY-MM-DD HH:MM:SS` or `YYYY-MM-DDTHH:MM:SS`
//! - any of the above followed by ` DST` or ` STD` to set the daylight savings flag, which is
//!   otherwise [`Dst::Unknown`]
//!
//! The time is local to whatever zone the caller has in mind; no UTC offset is accepted.
//!
//! # Examples
//! ```
//! # use civil::{CalendarTime, Dst};
//! let t: CalendarTime = "2024-03-31 01:59".parse().unwrap();
//! assert_eq!(t, CalendarTime::new(2024, 3, 31, 1, 59, 0, Dst::Unknown).unwrap());
//!
//! let t: CalendarTime = "2024-10-27T02:30:15 DST".parse().unwrap();
//! assert_eq!(t, CalendarTime::new(2024, 10, 27, 2, 30, 15, Dst::InEffect).unwrap());
//! ```

use core::str::FromStr;
use crate::calendar::{CalendarError, CalendarTime, Dst};

/// Error type for parsing date time strings.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
	#[error("year missing or malformed")]
	MissingYear,
	#[error("month missing or malformed")]
	MissingMonth,
	#[error("day missing or malformed")]
	MissingDay,
	#[error("hours missing or malformed")]
	MissingHours,
	#[error("minutes missing or malformed")]
	MissingMinutes,
	#[error("seconds missing or malformed")]
	MissingSeconds,
	#[error("unexpected input at end of date time string")]
	UnexpectedInput,
	#[error(transparent)]
	OutOfRange(#[from] CalendarError)
}

/// Parse a fixed-width, unsigned decimal number.
///
/// `N` must be less than 5 so the value fits into a `u16` without overflow.
fn parse_num<const N: usize>(bytes: &[u8], e: ParseError) -> Result<(&[u8], u16), ParseError> {
	const { assert!(N < 5); }

	let Some((digits, rest)) = bytes.split_at_checked(N) else {
		return Err(e);
	};
	let mut r: u16 = 0;
	for &v in digits {
		if !v.is_ascii_digit() {
			return Err(e);
		}
		r = r * 10 + (v - b'0') as u16;
	}
	Ok((rest, r))
}

/// Consume a single expected separator byte.
fn separator<'a>(bytes: &'a [u8], accept: &[u8], e: ParseError) -> Result<&'a [u8], ParseError> {
	match bytes.split_first() {
		Some((b, rest)) if accept.contains(b) => Ok(rest),
		_ => Err(e)
	}
}

impl FromStr for CalendarTime {
	type Err = ParseError;

	/// Parse a local date time string. See the [module](self) documentation for the format.
	///
	/// # Errors
	///
	/// Returns the [`ParseError`] for the first missing or malformed component, or
	/// [`ParseError::OutOfRange`] if the components do not form a valid calendar time (e.g.
	/// February 30).
	///
	/// # Examples
	///
	/// ```
	/// # use civil::{CalendarTime, CalendarError, ParseError};
	/// assert_eq!("2024-02-30 12:00".parse::<CalendarTime>(), Err(ParseError::OutOfRange(
	/// 	CalendarError::DayOutOfRange { day: 30, month: 2, days: 29 }
	/// )));
	/// assert_eq!("2024-02-03".parse::<CalendarTime>(), Err(ParseError::MissingHours));
	/// ```
	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let bytes = s.as_bytes();
		let (bytes, year) = parse_num::<4>(bytes, ParseError::MissingYear)?;
		let bytes = separator(bytes, b"-", ParseError::MissingMonth)?;
		let (bytes, month) = parse_num::<2>(bytes, ParseError::MissingMonth)?;
		let bytes = separator(bytes, b"-", ParseError::MissingDay)?;
		let (bytes, day) = parse_num::<2>(bytes, ParseError::MissingDay)?;
		let bytes = separator(bytes, b" T", ParseError::MissingHours)?;
		let (bytes, hour) = parse_num::<2>(bytes, ParseError::MissingHours)?;
		let bytes = separator(bytes, b":", ParseError::MissingMinutes)?;
		let (mut bytes, minute) = parse_num::<2>(bytes, ParseError::MissingMinutes)?;

		let mut second = 0;
		if let Some(rest) = bytes.strip_prefix(b":") {
			(bytes, second) = parse_num::<2>(rest, ParseError::MissingSeconds)?;
		}

		let dst = match bytes {
			b"" => Dst::Unknown,
			b" DST" => Dst::InEffect,
			b" STD" => Dst::NotInEffect,
			_ => return Err(ParseError::UnexpectedInput)
		};

		Ok(CalendarTime::new(year as i32, month as u8, day as u8, hour as u8, minute as u8, second as u8, dst)?)
	}
}
