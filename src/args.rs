//! Command line arguments.
//!
//! See [crate] documentation for details on command line arguments and examples.

use std::num::NonZero;
use civil::{zone::CENTRAL_EUROPEAN, CalendarTime, Zone};
use clap::Parser;

/// Transmit the DCF77 time signal through the default audio output.
#[derive(Debug, Parser)]
#[command(version, about, after_help = "\
Examples:
  dcf77tx -n 8
  dcf77tx -t \"2024-03-31 01:55\" --dry-run
  dcf77tx -z \"CET-1CEST,M3.5.0,M10.5.0/3\"")]
pub struct Args {
	/// The number of minutes to transmit
	#[arg(short = 'n', long, visible_short_alias = 'c', default_value = "4")]
	pub count: NonZero<usize>,

	/// The timezone of the transmitted time, as a POSIX TZ string
	#[arg(short = 'z', long, env = "DCF77TX_TIMEZONE", default_value = CENTRAL_EUROPEAN)]
	pub timezone: Zone,

	/// The local time to start from (YYYY-MM-DD HH:MM[:SS] [DST|STD]), defaults to now
	#[arg(short, long)]
	pub time: Option<CalendarTime>,

	/// Print frames instead of playing them
	#[arg(long)]
	pub dry_run: bool
}

#[cfg(test)]
mod tests {
	use super::*;
	use civil::{Dst, ParseError, ZoneError};
	use clap::error::ErrorKind;

	#[test]
	fn default_test() {
		let args = Args::try_parse_from(["dcf77tx"]).unwrap();
		assert_eq!(args.count.get(), 4);
		assert_eq!(args.time, None);
		assert!(!args.dry_run);
	}

	#[test]
	fn options_test() {
		let args = Args::try_parse_from([
			"dcf77tx", "-n", "8", "-z", "UTC0", "-t", "2024-03-31 01:55", "--dry-run"
		]).unwrap();
		assert_eq!(args.count.get(), 8);
		assert_eq!(args.timezone, Zone::fixed(0));
		assert_eq!(args.time, Some(CalendarTime::new(2024, 3, 31, 1, 55, 0, Dst::Unknown).unwrap()));
		assert!(args.dry_run);

		let args = Args::try_parse_from([
			"dcf77tx", "-c", "2", "--timezone", CENTRAL_EUROPEAN, "--time", "2024-10-27T02:30 DST"
		]).unwrap();
		assert_eq!(args.count.get(), 2);
		assert_eq!(args.timezone, Zone::central_european());
		assert_eq!(args.time, Some(CalendarTime::new(2024, 10, 27, 2, 30, 0, Dst::InEffect).unwrap()));
	}

	#[test]
	fn invalid_test() {
		let e = Args::try_parse_from(["dcf77tx", "-n", "0"]).unwrap_err();
		assert_eq!(e.kind(), ErrorKind::ValueValidation);

		let e = Args::try_parse_from(["dcf77tx", "-t", "2024-02-30 12:00"]).unwrap_err();
		assert_eq!(e.kind(), ErrorKind::ValueValidation);
		assert!(e.to_string().contains(&ParseError::OutOfRange(
			civil::CalendarError::DayOutOfRange { day: 30, month: 2, days: 29 }
		).to_string()));

		let e = Args::try_parse_from(["dcf77tx", "-z", ""]).unwrap_err();
		assert_eq!(e.kind(), ErrorKind::ValueValidation);
		assert!(e.to_string().contains(&ZoneError::Empty.to_string()));

		let e = Args::try_parse_from(["dcf77tx", "signal"]).unwrap_err();
		assert_eq!(e.kind(), ErrorKind::UnknownArgument);
	}
}
