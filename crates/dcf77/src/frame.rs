//! Encode a calendar time into a DCF77 time code frame.
//!
//! A frame is the 59 data bits transmitted over one minute, one bit per second: seconds 0-58. The
//! 60th second (the minute mark) carries no modulation and is not part of the frame. Bits are
//! laid out as follows, with multi-bit numbers in BCD, least significant bit first:
//!
//! | Bits  | Meaning                                                           |
//! | ----- | ----------------------------------------------------------------- |
//! | 0     | Start of minute, always 0                                         |
//! | 1-14  | Civil warning and weather bits, always 0                          |
//! | 15    | Transmitter fault, always 0                                       |
//! | 16    | DST change announced: DST differs between now and one hour ahead  |
//! | 17-18 | CEST / CET, for the minute being announced                        |
//! | 19    | Leap second announced, always 0                                   |
//! | 20    | Start of encoded time, always 1                                   |
//! | 21-27 | Minute, followed by parity (28)                                   |
//! | 29-34 | Hour, followed by parity (35)                                     |
//! | 36-41 | Day of month                                                      |
//! | 42-44 | Day of week, 1 (Monday) - 7 (Sunday)                              |
//! | 45-49 | Month                                                             |
//! | 50-57 | Year within century, followed by parity over 36-57 (58)           |
//!
//! The frame transmitted during a minute describes the **following** minute: a receiver counts
//! the bits in, then sets its clock at the minute mark. See the [PTB time code description] for
//! details.
//!
//! [PTB time code description]: https://www.ptb.de/cms/en/ptb/fachabteilungen/abt4/fb-44/ag-442/dissemination-of-legal-time/dcf77/dcf77-time-code.html
//!
//! # Examples
//!
//! ```
//! # use civil::{CalendarTime, Dst, Zone};
//! # use dcf77::frame::encode;
//! let zone = Zone::central_european();
//!
//! // Sunday, May 26, 2024. 18:57:25 CEST.
//! let now = CalendarTime::new(2024, 5, 26, 18, 57, 25, Dst::InEffect).unwrap();
//! let encoding = encode(&now, &zone);
//!
//! // The frame announces 18:58
//! assert_eq!(encoding.frame.pack(), 0x090BE631B120000);
//! assert_eq!(encoding.summary.to_string(), "2024-05-26 Sun 18:58 CEST, no DST change announced");
//! ```

use core::{fmt, ops::Index, slice};
use civil::{Calendar, CalendarTime, Dst, Weekday};
use crate::parity::even_parity;

/// Number of data bits in a frame (seconds 0-58 of the minute).
pub const FRAME_LEN: usize = 59;

/// Bit positions within a frame.
pub mod position {
	/// Start of minute, always 0.
	pub const START_OF_MINUTE: usize = 0;
	/// Transmitter fault ("call bit").
	pub const FAULT: usize = 15;
	/// DST change announcement (A1).
	pub const DST_ANNOUNCEMENT: usize = 16;
	/// CEST in effect (Z1).
	pub const CEST: usize = 17;
	/// CET in effect (Z2).
	pub const CET: usize = 18;
	/// Leap second announcement (A2).
	pub const LEAP_SECOND: usize = 19;
	/// Start of encoded time, always 1.
	pub const START_OF_TIME: usize = 20;
	/// First bit of the minute.
	pub const MINUTE: usize = 21;
	/// Minute parity.
	pub const MINUTE_PARITY: usize = 28;
	/// First bit of the hour.
	pub const HOUR: usize = 29;
	/// Hour parity.
	pub const HOUR_PARITY: usize = 35;
	/// First bit of the day of month.
	pub const DAY: usize = 36;
	/// First bit of the day of week.
	pub const WEEKDAY: usize = 42;
	/// First bit of the month.
	pub const MONTH: usize = 45;
	/// First bit of the year within century.
	pub const YEAR: usize = 50;
	/// Date parity, over the day of month through the year.
	pub const DATE_PARITY: usize = 58;
}

/// One minute of DCF77 data bits.
///
/// Index `n` is the bit transmitted during second `n` of the minute.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Frame([bool; FRAME_LEN]);

impl Frame {
	/// The bits, in transmission order.
	#[inline(always)]
	pub fn bits(&self) -> &[bool; FRAME_LEN] {
		&self.0
	}

	/// Iterate over the bits in transmission order.
	pub fn iter(&self) -> slice::Iter<'_, bool> {
		self.0.iter()
	}

	/// Pack the frame into an integer, bit `n` of the frame in bit `n` of the result.
	///
	/// The LSB is transmitted first; the 5 MSBs are always zero.
	pub fn pack(&self) -> u64 {
		self.0.iter().rev().fold(0, |acc, &bit| (acc << 1) | bit as u64)
	}

	/// Decode a BCD number of `ones` + `tens` bits starting at `start`.
	fn bcd(&self, start: usize, ones: usize, tens: usize) -> u8 {
		let bits = |from: usize, width: usize| {
			self.0[from..from + width].iter().rev().fold(0u8, |acc, &bit| (acc << 1) | bit as u8)
		};
		bits(start, ones) + 10 * bits(start + ones, tens)
	}

	/// Minute encoded in bits 21-27.
	pub fn minute(&self) -> u8 { self.bcd(position::MINUTE, 4, 3) }

	/// Hour encoded in bits 29-34.
	pub fn hour(&self) -> u8 { self.bcd(position::HOUR, 4, 2) }

	/// Day of month encoded in bits 36-41.
	pub fn day(&self) -> u8 { self.bcd(position::DAY, 4, 2) }

	/// Day of week encoded in bits 42-44, 1 (Monday) - 7 (Sunday).
	pub fn weekday(&self) -> u8 { self.bcd(position::WEEKDAY, 3, 0) }

	/// Month encoded in bits 45-49.
	pub fn month(&self) -> u8 { self.bcd(position::MONTH, 4, 1) }

	/// Year within century encoded in bits 50-57.
	pub fn year(&self) -> u8 { self.bcd(position::YEAR, 4, 4) }
}

impl Index<usize> for Frame {
	type Output = bool;

	fn index(&self, index: usize) -> &bool {
		&self.0[index]
	}
}

impl<'a> IntoIterator for &'a Frame {
	type Item = &'a bool;
	type IntoIter = slice::Iter<'a, bool>;

	fn into_iter(self) -> Self::IntoIter {
		self.iter()
	}
}

impl fmt::Display for Frame {
	/// Formats as 59 `0`/`1` characters in transmission order.
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		for &bit in self.iter() {
			f.write_str(if bit { "1" } else { "0" })?;
		}
		Ok(())
	}
}

/// Sequential frame writer.
///
/// Each position is written exactly once, in order, so parity bits can only be computed over bits
/// that have already been written.
struct Layout {
	bits: [bool; FRAME_LEN],
	len: usize
}

impl Layout {
	fn new() -> Layout {
		Layout { bits: [false; FRAME_LEN], len: 0 }
	}

	fn push(&mut self, bit: bool) {
		self.bits[self.len] = bit;
		self.len += 1;
	}

	/// Push the low `width` bits of `value`, LSB first.
	fn push_bits(&mut self, value: u8, width: u8) {
		for n in 0..width {
			self.push((value >> n) & 1 == 1);
		}
	}

	/// Push `value` as BCD: a 4-bit ones digit, then a `tens_width`-bit tens digit.
	fn push_bcd(&mut self, value: u8, tens_width: u8) {
		self.push_bits(value % 10, 4);
		self.push_bits(value / 10, tens_width);
	}

	/// Push the even parity bit over everything from `start`.
	fn push_parity(&mut self, start: usize) {
		let parity = even_parity(&self.bits[start..self.len]);
		self.push(parity);
	}

	fn finish(self) -> Frame {
		debug_assert_eq!(self.len, FRAME_LEN);
		Frame(self.bits)
	}
}

/// An unpacked DCF77 frame.
///
/// This type holds each component of the frame in a form that is easy to inspect; see
/// [`Fields::frame`] to lay it out as bits.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Fields {
	/// DST changes within the next hour (bit 16).
	pub dst_announcement: bool,
	/// CEST is in effect for the announced minute (bit 17; bit 18 is its negation).
	pub cest: bool,
	/// A leap second is inserted at the end of this hour (bit 19).
	pub leap_second: bool,
	/// Minute, ranged [0, 59].
	pub minute: u8,
	/// Hour, ranged [0, 23].
	pub hour: u8,
	/// Day of month, ranged [1, 31].
	pub day: u8,
	/// Day of week, ranged [1, 7] => [Monday, Sunday].
	pub weekday: u8,
	/// Month, ranged [1, 12].
	pub month: u8,
	/// Year within century, ranged [0, 99].
	pub year: u8
}

impl Fields {
	/// Derive the frame fields from three instants.
	///
	/// `current` is the (normalized) time of encoding, `next_minute` the minute being announced,
	/// and `next_hour` one hour after `current`. The DST announcement compares `current` against
	/// `next_hour`, so it is raised for the whole hour before a change; the zone bits describe
	/// `next_minute` only.
	pub fn new(current: &CalendarTime, next_minute: &CalendarTime, next_hour: &CalendarTime) -> Fields {
		Fields {
			dst_announcement: current.dst() != next_hour.dst(),
			cest: next_minute.dst() == Dst::InEffect,
			leap_second: false,
			minute: next_minute.minute(),
			hour: next_minute.hour(),
			day: next_minute.day(),
			weekday: next_minute.weekday().number_from_monday(),
			month: next_minute.month(),
			year: next_minute.year().rem_euclid(100) as u8
		}
	}

	/// Lay the fields out as a frame.
	///
	/// # Examples
	///
	/// ```
	/// # use dcf77::frame::{Fields, position};
	/// let fields = Fields {
	/// 	dst_announcement: false,
	/// 	cest: true,
	/// 	leap_second: false,
	/// 	minute: 58,
	/// 	hour: 18,
	/// 	day: 26,
	/// 	weekday: 7,
	/// 	month: 5,
	/// 	year: 24
	/// };
	/// let frame = fields.frame();
	/// assert_eq!(frame.minute(), 58);
	/// assert_eq!(frame[position::START_OF_TIME], true);
	/// assert_eq!(frame.pack(), 0x090BE631B120000);
	/// ```
	pub fn frame(&self) -> Frame {
		let mut layout = Layout::new();

		// Start of minute, then civil warning/weather bits and the fault bit, none implemented
		layout.push_bits(0, 8);
		layout.push_bits(0, 8);
		layout.push(self.dst_announcement);
		layout.push(self.cest);
		layout.push(!self.cest);
		layout.push(self.leap_second);
		layout.push(true);

		layout.push_bcd(self.minute, 3);
		layout.push_parity(position::MINUTE);
		layout.push_bcd(self.hour, 2);
		layout.push_parity(position::HOUR);

		layout.push_bcd(self.day, 2);
		layout.push_bits(self.weekday, 3);
		layout.push_bcd(self.month, 1);
		layout.push_bcd(self.year, 4);
		layout.push_parity(position::DAY);

		layout.finish()
	}
}

/// Human readable account of an encoded frame.
///
/// Diagnostic only; the text format is not stable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Summary {
	/// Absolute year of the announced minute.
	pub year: i32,
	pub month: u8,
	pub day: u8,
	pub weekday: Weekday,
	pub hour: u8,
	pub minute: u8,
	/// Value written to bit 16.
	pub dst_announcement: bool,
	/// Value written to bit 17.
	pub cest: bool
}

impl fmt::Display for Summary {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{:04}-{:02}-{:02} {} {:02}:{:02} {}, {}",
			self.year,
			self.month,
			self.day,
			self.weekday,
			self.hour,
			self.minute,
			if self.cest { "CEST" } else { "CET" },
			if self.dst_announcement { "DST change announced" } else { "no DST change announced" })
	}
}

/// The result of [`encode`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Encoding {
	/// Bits to transmit during the rest of the current minute.
	pub frame: Frame,
	/// What the frame announces.
	pub summary: Summary
}

/// Encode the frame transmitted during the minute of `now`.
///
/// The frame describes the minute that starts at the next minute mark, so the time is advanced by
/// one minute (and, for the DST announcement, one hour) using `calendar`, which is responsible
/// for month/year rollover and DST normalization. The seconds of `now` do not matter beyond that.
///
/// The leap second announcement, transmitter fault, and civil warning bits are always 0.
///
/// # Examples
///
/// ```
/// # use civil::{CalendarTime, Dst, Zone};
/// # use dcf77::frame::{encode, position};
/// let zone = Zone::central_european();
///
/// // Sunday, March 31, 2024, 01:59 CET. Clocks go forward at the next minute mark.
/// let now = CalendarTime::new(2024, 3, 31, 1, 59, 0, Dst::NotInEffect).unwrap();
/// let frame = encode(&now, &zone).frame;
/// assert_eq!((frame.hour(), frame.minute()), (3, 0));
/// assert_eq!(frame[position::DST_ANNOUNCEMENT], true);
/// assert_eq!(frame[position::CEST], true);
/// assert_eq!(frame[position::CET], false);
/// ```
pub fn encode<C: Calendar + ?Sized>(now: &CalendarTime, calendar: &C) -> Encoding {
	let current = calendar.normalize(now);
	let next_minute = calendar.shift(now, 60);
	let next_hour = calendar.shift(now, 3600);

	let fields = Fields::new(&current, &next_minute, &next_hour);
	Encoding {
		frame: fields.frame(),
		summary: Summary {
			year: next_minute.year(),
			month: next_minute.month(),
			day: next_minute.day(),
			weekday: next_minute.weekday(),
			hour: next_minute.hour(),
			minute: next_minute.minute(),
			dst_announcement: fields.dst_announcement,
			cest: fields.cest
		}
	}
}
