//! Encode the DCF77 time signal.
//!
//! [DCF77] is the German long wave time signal: a 77.5 kHz carrier that transmits the local time
//! in Germany (CET/CEST) one bit per second, one frame per minute. This crate builds those frames
//! from a [`civil::CalendarTime`], and with feature `std` keys them into audio samples.
//!
//! - [`parity`]: the even parity bit protecting the minute, hour, and date blocks.
//! - [`frame`]: the 59-bit frame and the encoder.
//! - [`writer`] (feature `std`): amplitude keying of frames at a given sample rate.
//!
//! The encoder does no calendar arithmetic itself: "one minute later" and "one hour later" are
//! asked of a [`civil::Calendar`], usually a [`civil::Zone`], which also resolves DST.
//!
//! [DCF77]: https://en.wikipedia.org/wiki/DCF77
//!
//! # Examples
//!
//! ```
//! # use civil::{CalendarTime, Dst, Zone};
//! let zone = Zone::central_european();
//! let now = CalendarTime::new(2024, 10, 27, 2, 59, 0, Dst::InEffect).unwrap();
//!
//! let encoding = dcf77::encode(&now, &zone);
//! println!("{}", encoding.summary);
//! assert_eq!(encoding.frame.pack(), 0x921E7840150000);
//! ```

#![no_std]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(feature = "std")]
extern crate std;

pub mod parity;
pub mod frame;

#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
#[cfg(feature = "std")]
pub mod writer;

pub use frame::{encode, Encoding, Fields, Frame, Summary, FRAME_LEN};
