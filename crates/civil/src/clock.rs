//! Read the system wall clock.
//!
//! # Examples
//!
//! ```
//! # use civil::clock::now;
//! let c = now().expect("Failed to get current time");
//! assert!(c.sec > 0);
//! assert!((0..1000000000).contains(&c.nsec));
//! ```

use core::mem::MaybeUninit;
use libc::{clock_gettime, timespec, CLOCK_REALTIME};

/// Nanoseconds per second.
const NANOS_PER_SECOND: i64 = 1000000000;

/// Unix time with nanosecond granularity.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TimeSpec {
	/// Seconds since the Unix epoch
	pub sec: i64,
	/// Nanoseconds since the beginning of `sec`, ranging [0-999999999]
	pub nsec: i64
}

impl TimeSpec {
	/// A whole second.
	pub fn from_secs(sec: i64) -> TimeSpec {
		TimeSpec { sec, nsec: 0 }
	}

	/// Start of the minute containing `self`.
	///
	/// # Examples
	///
	/// ```
	/// # use civil::clock::TimeSpec;
	/// let t = TimeSpec { sec: 1716742645, nsec: 123456789 };
	/// assert_eq!(t.minute_start(), TimeSpec::from_secs(1716742620));
	/// assert_eq!(t.into_minute(), 25123456789);
	/// ```
	pub fn minute_start(&self) -> TimeSpec {
		TimeSpec::from_secs(self.sec - self.sec.rem_euclid(60))
	}

	/// Nanoseconds elapsed since [`TimeSpec::minute_start`].
	pub fn into_minute(&self) -> u64 {
		(self.sec.rem_euclid(60) * NANOS_PER_SECOND + self.nsec) as u64
	}
}

impl From<timespec> for TimeSpec {
	fn from(value: timespec) -> Self {
		TimeSpec {
			sec: value.tv_sec as i64,
			nsec: value.tv_nsec as i64
		}
	}
}

/// Get the current time as a Unix timestamp with nanosecond granularity.
///
/// Returns `None` if `libc::clock_gettime` fails. Thread safe.
pub fn now() -> Option<TimeSpec> {
	let mut time = MaybeUninit::<timespec>::uninit();
	// Safety:
	// - clock_gettime does not read time, only writes
	// - if clock_gettime returns zero, time is successfully initialized
	unsafe {
		match clock_gettime(CLOCK_REALTIME, time.as_mut_ptr()) {
			0 => Some(time.assume_init().into()),
			_ => None
		}
	}
}
