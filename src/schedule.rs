//! Minute-by-minute frame schedule.

use civil::{clock::TimeSpec, CalendarTime, Zone};
use dcf77::Encoding;
use crate::error::Error;

/// One minute of transmission.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Minute {
	/// Local time at which transmission of this minute begins.
	pub time: CalendarTime,
	/// The frame to transmit, announcing the following minute.
	pub encoding: Encoding,
	/// Nanoseconds into the minute at which transmission begins. Only the first minute of a
	/// schedule starts part way through.
	pub offset_ns: u64
}

/// Endless sequence of consecutive minutes to transmit, starting at a given instant.
///
/// # Examples
///
/// ```ignore
/// let schedule = Schedule::new(Zone::central_european(), civil::clock::now().unwrap());
/// for minute in schedule.take(4) {
/// 	let minute = minute?;
/// 	println!("{}", minute.encoding.summary);
/// }
/// ```
pub struct Schedule {
	zone: Zone,
	time: TimeSpec
}

impl Schedule {
	/// Start at the instant `time`.
	pub fn new(zone: Zone, time: TimeSpec) -> Schedule {
		Schedule { zone, time }
	}

	/// Start at a local time in `zone`.
	pub fn starting_at(zone: Zone, time: &CalendarTime) -> Schedule {
		Schedule::new(zone, TimeSpec::from_secs(zone.to_unix(time)))
	}
}

impl Iterator for Schedule {
	type Item = Result<Minute, Error>;

	/// Encode the current minute, then advance to the start of the next.
	///
	/// Yields [`Error::OutOfRange`] (forever) once the local time leaves years 1-9999.
	fn next(&mut self) -> Option<Self::Item> {
		let Some(time) = self.zone.to_local(self.time.sec) else {
			return Some(Err(Error::OutOfRange(self.time.sec)));
		};
		let minute = Minute {
			time,
			encoding: dcf77::encode(&time, &self.zone),
			offset_ns: self.time.into_minute()
		};
		self.time = TimeSpec::from_secs(self.time.minute_start().sec + 60);
		Some(Ok(minute))
	}
}
