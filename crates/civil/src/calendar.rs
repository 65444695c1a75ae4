//! Calendar time and Gregorian calendar arithmetic, unaware of timezones.
//!
//! [`CalendarTime`] is the civil date and time of day that a time signal describes, together with
//! a tri-state daylight savings flag. The free functions in this module convert between calendar
//! dates and day counts relative to the Unix epoch (January 1, 1970).
//!
//! # Examples
//!
//! ```
//! # use civil::calendar::{days_from_civil, civil_from_days, weekday_from_ymd, Weekday};
//! assert_eq!(days_from_civil(2024, 5, 26), 19869);
//! assert_eq!(civil_from_days(19869), (2024, 5, 26));
//! assert_eq!(weekday_from_ymd(2024, 5, 26), Weekday::Sunday);
//! ```

use core::fmt;

/// Seconds per minute.
pub(crate) const SECONDS_PER_MINUTE: i64 = 60;
/// Seconds per hour.
pub(crate) const SECONDS_PER_HOUR: i64 = SECONDS_PER_MINUTE * 60;
/// Seconds per day.
pub(crate) const SECONDS_PER_DAY: i64 = SECONDS_PER_HOUR * 24;
/// Days per 400-year era of the Gregorian calendar.
const DAYS_PER_ERA: i64 = 146097;
/// Years per era.
const YEARS_PER_ERA: i64 = 400;
/// Days from March 1, 0000 to January 1, 1970.
const DAYS_FROM_MARCH_0000_TO_JAN_1970: i64 = 719468;
/// January 1, 1970 was a Thursday.
const EPOCH_WEEKDAY: i64 = 4;

/// Earliest year accepted by [`CalendarTime::new`].
pub const MIN_YEAR: i32 = 1;
/// Latest year accepted by [`CalendarTime::new`].
pub const MAX_YEAR: i32 = 9999;

/// Whether daylight savings time is in effect.
///
/// Mirrors the three states of `tm_isdst`: positive, zero, and negative.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Dst {
	/// Daylight savings (summer) time is in effect.
	InEffect,
	/// Standard (winter) time is in effect.
	NotInEffect,
	/// Not known; a [`Zone`](crate::Zone) resolves it when normalizing.
	Unknown
}

impl Dst {
	/// Convert a known DST state.
	#[inline(always)]
	pub fn from_flag(isdst: bool) -> Dst {
		if isdst { Dst::InEffect } else { Dst::NotInEffect }
	}
}

/// Day of the week.
///
/// The discriminants follow the C library convention of counting from Sunday.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Weekday {
	Sunday = 0,
	Monday = 1,
	Tuesday = 2,
	Wednesday = 3,
	Thursday = 4,
	Friday = 5,
	Saturday = 6
}

impl Weekday {
	/// Convert from the C library convention, 0-6 => Sunday-Saturday.
	///
	/// # Examples
	///
	/// ```
	/// # use civil::Weekday;
	/// assert_eq!(Weekday::from_sunday_zero(0), Some(Weekday::Sunday));
	/// assert_eq!(Weekday::from_sunday_zero(6), Some(Weekday::Saturday));
	/// assert_eq!(Weekday::from_sunday_zero(7), None);
	/// ```
	pub fn from_sunday_zero(n: u8) -> Option<Weekday> {
		Some(match n {
			0 => Weekday::Sunday,
			1 => Weekday::Monday,
			2 => Weekday::Tuesday,
			3 => Weekday::Wednesday,
			4 => Weekday::Thursday,
			5 => Weekday::Friday,
			6 => Weekday::Saturday,
			_ => return None
		})
	}

	/// Day number counting from Sunday, 0-6.
	#[inline(always)]
	pub fn number_from_sunday(self) -> u8 {
		self as u8
	}

	/// ISO 8601 day number, 1-7 => Monday-Sunday.
	///
	/// # Examples
	///
	/// ```
	/// # use civil::Weekday;
	/// assert_eq!(Weekday::Monday.number_from_monday(), 1);
	/// assert_eq!(Weekday::Sunday.number_from_monday(), 7);
	/// ```
	#[inline(always)]
	pub fn number_from_monday(self) -> u8 {
		match self {
			Weekday::Sunday => 7,
			d => d as u8
		}
	}

	/// Three letter English abbreviation.
	pub fn abbreviation(self) -> &'static str {
		match self {
			Weekday::Sunday => "Sun",
			Weekday::Monday => "Mon",
			Weekday::Tuesday => "Tue",
			Weekday::Wednesday => "Wed",
			Weekday::Thursday => "Thu",
			Weekday::Friday => "Fri",
			Weekday::Saturday => "Sat"
		}
	}
}

impl fmt::Display for Weekday {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.abbreviation())
	}
}

/// Check whether `year` is a leap year in the proleptic Gregorian calendar.
///
/// # Examples
///
/// ```
/// # use civil::calendar::is_leap_year;
/// assert_eq!(is_leap_year(1900), false);
/// assert_eq!(is_leap_year(2000), true);
/// assert_eq!(is_leap_year(2023), false);
/// assert_eq!(is_leap_year(2024), true);
/// ```
#[inline(always)]
pub fn is_leap_year(year: i64) -> bool {
	// Divisible by 4, or by 16 for century years (i.e. divisible by 400)
	let mask = if year % 100 != 0 { 3 } else { 15 };
	(year & mask) == 0
}

/// The number of days in `month` (1-12) of `year`.
///
/// # Examples
///
/// ```
/// # use civil::calendar::days_in_month;
/// assert_eq!(days_in_month(2024, 2), 29);
/// assert_eq!(days_in_month(2023, 2), 28);
/// assert_eq!(days_in_month(2024, 8), 31);
/// assert_eq!(days_in_month(2024, 9), 30);
/// ```
pub fn days_in_month(year: i64, month: u8) -> u8 {
	if month == 2 {
		if is_leap_year(year) { 29 } else { 28 }
	} else {
		// 31 for odd months up to July and even months from August
		30 | (month ^ (month >> 3))
	}
}

/// Days since January 1, 1970 for a given year, month (1-12), and day of month.
///
/// The year is rotated to run March through February so the leap day is the last day of the
/// rotated year, then counted in 400-year eras. See
/// <http://howardhinnant.github.io/date_algorithms.html#days_from_civil>.
pub fn days_from_civil(year: i64, month: u8, day: u8) -> i64 {
	let m = month as i64;
	let y = if m <= 2 { year - 1 } else { year };
	let era = y.div_euclid(YEARS_PER_ERA);
	let yoe = y - era * YEARS_PER_ERA;
	let mp = if m > 2 { m - 3 } else { m + 9 };
	let doy = (153 * mp + 2) / 5 + day as i64 - 1;
	let doe = yoe * 365 + yoe / 4 - yoe / 100 + doy;
	era * DAYS_PER_ERA + doe - DAYS_FROM_MARCH_0000_TO_JAN_1970
}

/// Year, month (1-12), and day of month for a count of days since January 1, 1970.
///
/// Inverse of [`days_from_civil`].
pub fn civil_from_days(days: i64) -> (i64, u8, u8) {
	let z = days + DAYS_FROM_MARCH_0000_TO_JAN_1970;
	let era = z.div_euclid(DAYS_PER_ERA);
	let doe = z - era * DAYS_PER_ERA;
	let yoe = (doe - doe / 1460 + doe / 36524 - doe / 146096) / 365;
	let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
	let mp = (5 * doy + 2) / 153;
	let day = doy - (153 * mp + 2) / 5 + 1;
	let month = if mp < 10 { mp + 3 } else { mp - 9 };
	let year = yoe + era * YEARS_PER_ERA + (month <= 2) as i64;
	(year, month as u8, day as u8)
}

/// Weekday for a count of days since January 1, 1970.
#[inline(always)]
pub fn weekday_from_days(days: i64) -> Weekday {
	match Weekday::from_sunday_zero((days + EPOCH_WEEKDAY).rem_euclid(7) as u8) {
		Some(w) => w,
		// rem_euclid(7) is always in [0, 6]
		None => Weekday::Sunday
	}
}

/// Weekday for a given year, month (1-12), and day of month.
///
/// # Examples
///
/// ```
/// # use civil::calendar::{weekday_from_ymd, Weekday};
/// assert_eq!(weekday_from_ymd(2024, 1, 1), Weekday::Monday);
/// assert_eq!(weekday_from_ymd(2024, 2, 29), Weekday::Thursday);
/// assert_eq!(weekday_from_ymd(2024, 10, 27), Weekday::Sunday);
/// ```
#[inline(always)]
pub fn weekday_from_ymd(year: i64, month: u8, day: u8) -> Weekday {
	weekday_from_days(days_from_civil(year, month, day))
}

/// The error type for constructing a [`CalendarTime`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum CalendarError {
	#[error("year {0} out of range [{MIN_YEAR}, {MAX_YEAR}]")]
	YearOutOfRange(i32),
	#[error("month {0} out of range [1, 12]")]
	MonthOutOfRange(u8),
	#[error("day {day} out of range [1, {days}] for month {month}")]
	DayOutOfRange { day: u8, month: u8, days: u8 },
	#[error("hour {0} out of range [0, 23]")]
	HourOutOfRange(u8),
	#[error("minute {0} out of range [0, 59]")]
	MinuteOutOfRange(u8),
	#[error("second {0} out of range [0, 59]")]
	SecondOutOfRange(u8)
}

/// Civil date and time of day in some local timezone.
///
/// Values are always internally consistent: [`CalendarTime::new`] validates every field and the
/// weekday is derived from the date rather than supplied. The timezone itself is not stored, only
/// whether daylight savings time is in effect.
///
/// # Examples
///
/// ```
/// # use civil::{CalendarTime, Dst, Weekday};
/// let t = CalendarTime::new(2024, 5, 26, 18, 57, 25, Dst::InEffect).unwrap();
/// assert_eq!(t.weekday(), Weekday::Sunday);
/// assert_eq!(t.to_string(), "2024-05-26 18:57:25 DST");
///
/// assert!(CalendarTime::new(2023, 2, 29, 0, 0, 0, Dst::Unknown).is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct CalendarTime {
	year: i32,
	month: u8,
	day: u8,
	weekday: Weekday,
	hour: u8,
	minute: u8,
	second: u8,
	dst: Dst
}

impl CalendarTime {
	/// Construct a calendar time, validating each field.
	///
	/// # Errors
	///
	/// Returns the [`CalendarError`] variant for the first field that is out of range. Days are
	/// checked against the length of the month, including February 29 in leap years.
	pub fn new(year: i32, month: u8, day: u8, hour: u8, minute: u8, second: u8, dst: Dst)
		-> Result<CalendarTime, CalendarError>
	{
		if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
			return Err(CalendarError::YearOutOfRange(year));
		}
		if !(1..=12).contains(&month) {
			return Err(CalendarError::MonthOutOfRange(month));
		}
		let days = days_in_month(year as i64, month);
		if day < 1 || day > days {
			return Err(CalendarError::DayOutOfRange { day, month, days });
		}
		if hour > 23 {
			return Err(CalendarError::HourOutOfRange(hour));
		}
		if minute > 59 {
			return Err(CalendarError::MinuteOutOfRange(minute));
		}
		if second > 59 {
			return Err(CalendarError::SecondOutOfRange(second));
		}

		Ok(CalendarTime {
			year,
			month,
			day,
			weekday: weekday_from_ymd(year as i64, month, day),
			hour,
			minute,
			second,
			dst
		})
	}

	/// Build a calendar time from seconds since 1970-01-01 00:00:00 *local* time.
	///
	/// Callers must keep `local` within a few centuries of the supported year range; the year is
	/// narrowed to `i32`.
	pub(crate) fn from_local_seconds(local: i64, dst: Dst) -> CalendarTime {
		let days = local.div_euclid(SECONDS_PER_DAY);
		let rem = local.rem_euclid(SECONDS_PER_DAY);
		let (year, month, day) = civil_from_days(days);
		CalendarTime {
			year: year as i32,
			month,
			day,
			weekday: weekday_from_days(days),
			hour: (rem / SECONDS_PER_HOUR) as u8,
			minute: (rem % SECONDS_PER_HOUR / SECONDS_PER_MINUTE) as u8,
			second: (rem % SECONDS_PER_MINUTE) as u8,
			dst
		}
	}

	/// Seconds since 1970-01-01 00:00:00 in the same local time, ignoring any UTC offset.
	pub fn local_seconds(&self) -> i64 {
		days_from_civil(self.year as i64, self.month, self.day) * SECONDS_PER_DAY
			+ self.hour as i64 * SECONDS_PER_HOUR
			+ self.minute as i64 * SECONDS_PER_MINUTE
			+ self.second as i64
	}

	/// Copy of `self` with the DST flag replaced.
	pub fn with_dst(mut self, dst: Dst) -> CalendarTime {
		self.dst = dst;
		self
	}

	/// Absolute Gregorian calendar year.
	#[inline(always)]
	pub fn year(&self) -> i32 { self.year }

	/// Month of the year, ranged [1, 12].
	#[inline(always)]
	pub fn month(&self) -> u8 { self.month }

	/// Day of the month, ranged [1, 31].
	#[inline(always)]
	pub fn day(&self) -> u8 { self.day }

	/// Day of the week.
	#[inline(always)]
	pub fn weekday(&self) -> Weekday { self.weekday }

	/// Hours, ranged [0, 23].
	#[inline(always)]
	pub fn hour(&self) -> u8 { self.hour }

	/// Minutes, ranged [0, 59].
	#[inline(always)]
	pub fn minute(&self) -> u8 { self.minute }

	/// Seconds, ranged [0, 59].
	#[inline(always)]
	pub fn second(&self) -> u8 { self.second }

	/// Daylight savings time state.
	#[inline(always)]
	pub fn dst(&self) -> Dst { self.dst }
}

impl fmt::Display for CalendarTime {
	/// Formats as `YYYY-MM-DD HH:MM:SS`, followed by ` DST` or ` STD` when the DST state is known.
	/// This is the same format accepted by [`str::parse`].
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{:04}-{:02}-{:02} {:02}:{:02}:{:02}",
			self.year, self.month, self.day, self.hour, self.minute, self.second)?;
		match self.dst {
			Dst::InEffect => f.write_str(" DST"),
			Dst::NotInEffect => f.write_str(" STD"),
			Dst::Unknown => Ok(())
		}
	}
}

#[cfg(test)]
mod tests {
	extern crate std;
	use super::*;
	use core::mem::MaybeUninit;
	use libc::{time_t, tm};
	use std::string::ToString;

	// Get the libc version of UTC calendar time
	fn utc_time(time: time_t) -> tm {
		unsafe {
			let mut utc = MaybeUninit::<tm>::uninit();
			libc::gmtime_r(&time, utc.as_mut_ptr());
			utc.assume_init()
		}
	}

	fn compare_dates(time: i64) {
		let d1 = utc_time(time as time_t);
		let d2 = CalendarTime::from_local_seconds(time, Dst::Unknown);
		assert_eq!(d1.tm_sec, d2.second as i32, "time: {}", time);
		assert_eq!(d1.tm_min, d2.minute as i32, "time: {}", time);
		assert_eq!(d1.tm_hour, d2.hour as i32, "time: {}", time);
		assert_eq!(d1.tm_mday, d2.day as i32, "time: {}", time);
		assert_eq!(d1.tm_mon + 1, d2.month as i32, "time: {}", time);
		assert_eq!(d1.tm_year + 1900, d2.year, "time: {}", time);
		assert_eq!(d1.tm_wday, d2.weekday.number_from_sunday() as i32, "time: {}", time);
		assert_eq!(d2.local_seconds(), time);
	}

	#[test]
	fn libc_agreement_test() {
		compare_dates(0);
		compare_dates(5097600);
		compare_dates(31449600);
		compare_dates(951782400);   // Feb 29, 2000
		compare_dates(946684799);   // Dec 31, 1999 23:59:59
		compare_dates(1716742705);
		compare_dates(1718617807);
		compare_dates(1844848207);
		compare_dates(-94694400);   // Jan 1, 1967
		compare_dates(-2208988800); // Jan 1, 1900
	}

	#[test]
	fn days_round_trip_test() {
		for days in (-800_000..800_000).step_by(997) {
			let (y, m, d) = civil_from_days(days);
			assert_eq!(days_from_civil(y, m, d), days, "days: {}", days);
		}
		assert_eq!(days_from_civil(1970, 1, 1), 0);
		assert_eq!(days_from_civil(2000, 3, 1), 11017);
		assert_eq!(civil_from_days(-1), (1969, 12, 31));
	}

	#[test]
	fn days_in_month_test() {
		let expected = [31, 29, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];
		for (m, &d) in expected.iter().enumerate() {
			assert_eq!(days_in_month(2024, m as u8 + 1), d);
		}
		assert_eq!(days_in_month(1900, 2), 28);
		assert_eq!(days_in_month(2000, 2), 29);
	}

	#[test]
	fn weekday_test() {
		assert_eq!(weekday_from_ymd(1970, 1, 1), Weekday::Thursday);
		assert_eq!(weekday_from_ymd(1969, 12, 28), Weekday::Sunday);
		assert_eq!(weekday_from_ymd(2024, 3, 31), Weekday::Sunday);
		assert_eq!(weekday_from_ymd(2000, 1, 1), Weekday::Saturday);

		for n in 0..7 {
			let w = Weekday::from_sunday_zero(n).unwrap();
			assert_eq!(w.number_from_sunday(), n);
			assert!((1..=7).contains(&w.number_from_monday()));
		}
		assert_eq!(Weekday::Saturday.number_from_monday(), 6);
		assert_eq!(Weekday::Sunday.number_from_monday(), 7);
	}

	#[test]
	fn calendar_time_new_test() {
		let t = CalendarTime::new(2024, 2, 29, 23, 59, 59, Dst::NotInEffect).unwrap();
		assert_eq!(t.weekday(), Weekday::Thursday);
		assert_eq!(t.to_string(), "2024-02-29 23:59:59 STD");
		assert_eq!(t.with_dst(Dst::Unknown).to_string(), "2024-02-29 23:59:59");

		assert_eq!(CalendarTime::new(0, 1, 1, 0, 0, 0, Dst::Unknown), Err(CalendarError::YearOutOfRange(0)));
		assert_eq!(CalendarTime::new(2024, 13, 1, 0, 0, 0, Dst::Unknown), Err(CalendarError::MonthOutOfRange(13)));
		assert_eq!(
			CalendarTime::new(2023, 2, 29, 0, 0, 0, Dst::Unknown),
			Err(CalendarError::DayOutOfRange { day: 29, month: 2, days: 28 })
		);
		assert_eq!(CalendarTime::new(2024, 1, 0, 0, 0, 0, Dst::Unknown).is_err(), true);
		assert_eq!(CalendarTime::new(2024, 1, 1, 24, 0, 0, Dst::Unknown), Err(CalendarError::HourOutOfRange(24)));
		assert_eq!(CalendarTime::new(2024, 1, 1, 0, 60, 0, Dst::Unknown), Err(CalendarError::MinuteOutOfRange(60)));
		assert_eq!(CalendarTime::new(2024, 1, 1, 0, 0, 60, Dst::Unknown), Err(CalendarError::SecondOutOfRange(60)));
	}

	#[test]
	fn dst_test() {
		assert_eq!(Dst::from_flag(true), Dst::InEffect);
		assert_eq!(Dst::from_flag(false), Dst::NotInEffect);
	}
}
