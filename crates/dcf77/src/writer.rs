//! Key DCF77 frames into an audio-rate carrier.
//!
//! DCF77 is amplitude keyed: at the start of every second the carrier drops to 15% amplitude for
//! 100 ms (a 0 bit) or 200 ms (a 1 bit), then returns to full amplitude. The 60th second carries no
//! drop at all, which marks the start of the next minute.
//!
//! # Examples
//!
//! ```
//! # use civil::{CalendarTime, Dst, Zone};
//! # use dcf77::{encode, writer::{make_writer, Transmission}};
//! let now = CalendarTime::new(2024, 5, 26, 18, 57, 45, Dst::Unknown).unwrap();
//! let frame = encode(&now, &Zone::central_european()).frame;
//!
//! // Start transmitting 45 seconds into the minute, at 48 kHz
//! let mut t = Transmission::<48000>::new(&frame, 45_000_000_000);
//! let mut writer = make_writer::<48000>();
//!
//! // Write the rest of the minute, 21.33 ms at a time
//! let mut buf = [0f32; 1024];
//! let mut written = 0;
//! loop {
//! 	let (n, done) = writer(&mut t, &mut buf);
//! 	written += n;
//! 	// Use the results in buf[..n]
//! 	if done { break; }
//! }
//! assert_eq!(written, 15 * 48000);
//! ```

use core::f32::consts::PI;
use crate::frame::{Frame, FRAME_LEN};

/// Frequency of the generated carrier. Its fifth harmonic is the 77.5 kHz DCF77 carrier.
const CARRIER_HZ: f32 = 77500. / 5.;

/// Carrier amplitude during the reduced part of a second.
const REDUCED_AMPLITUDE: f32 = 0.15;

const NANOS_PER_SECOND: u64 = 1000000000;
const NANOS_PER_MINUTE: u64 = 60 * NANOS_PER_SECOND;

/// A frame prepared for writing at sample rate `S`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Transmission<const S: u64> {
	/// The packed frame, see [`Frame::pack`]. Consumed LSB first while writing.
	pub packed: u64,
	/// Samples into the minute at which to begin. Consumed by the first write.
	pub delay: u64
}

impl<const S: u64> Transmission<S> {
	/// Prepare `frame` to be written starting `offset_ns` nanoseconds into the minute.
	///
	/// Offsets of a minute or more wrap around.
	///
	/// # Examples
	///
	/// ```
	/// # use civil::{CalendarTime, Dst, Zone};
	/// # use dcf77::{encode, writer::Transmission};
	/// let now = CalendarTime::new(2024, 5, 26, 18, 57, 25, Dst::Unknown).unwrap();
	/// let frame = encode(&now, &Zone::central_european()).frame;
	/// let t = Transmission::<48000>::new(&frame, 25123456789);
	/// assert_eq!(t.packed, 0x090BE631B120000);
	/// assert_eq!(t.delay, 1205925);
	/// ```
	pub fn new(frame: &Frame, offset_ns: u64) -> Transmission<S> {
		let offset = (offset_ns % NANOS_PER_MINUTE) as u128;
		Transmission {
			packed: frame.pack(),
			delay: (offset * S as u128 / NANOS_PER_SECOND as u128) as u64
		}
	}
}

/// Position of the writer within a minute.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum SlotState {
	/// Between transmissions.
	Start,
	/// Transmitting a frame bit: its index and value.
	Bit(u8, bool),
	/// Transmitting the minute mark, second 59.
	Marker
}

impl SlotState {
	/// Advance to the next second.
	///
	/// `Start` => `Bit(0, _)` => ... => `Bit(58, _)` => `Marker` => `Start`. Consumes
	/// `transmission.packed` one bit at a time.
	fn advance<const S: u64>(&mut self, transmission: &mut Transmission<S>) {
		*self = match *self {
			SlotState::Start => SlotState::Bit(0, transmission.packed & 1 > 0),
			SlotState::Bit(bit, _) => {
				transmission.packed >>= 1;
				if (bit as usize) < FRAME_LEN - 1 {
					SlotState::Bit(bit + 1, transmission.packed & 1 > 0)
				} else {
					SlotState::Marker
				}
			},
			SlotState::Marker => SlotState::Start
		}
	}

	/// Jump straight to second `second` of a fresh transmission.
	fn advance_to<const S: u64>(&mut self, transmission: &mut Transmission<S>, second: u8) {
		*self = if (second as usize) < FRAME_LEN {
			transmission.packed >>= second;
			SlotState::Bit(second, transmission.packed & 1 > 0)
		} else {
			SlotState::Marker
		}
	}

	/// Number of samples at reduced amplitude at the start of this second.
	fn reduced_samples<const S: u64>(&self) -> u64 {
		match self {
			SlotState::Bit(_, true) => S * 2 / 10, // 200ms
			SlotState::Bit(_, false) => S / 10, // 100ms
			_ => 0
		}
	}
}

/// Make a writer that keys DCF77 transmissions sampled at `S` Hz.
///
/// Returns a closure with state initialized to begin writing a sequence of transmissions. The
/// closure takes two inputs:
/// 1. The transmission to write. This value is consumed while writing.
/// 2. The buffer to write samples into (ranging [-1, 1]).
///
/// The closure returns a tuple with two values:
/// 1. The number of samples written. This is the length of the buffer unless the transmission
///    completed part way through it.
/// 2. Whether the transmission (through the minute mark) has been written completely.
///
/// The writer keeps its position between calls, so a long transmission can be written into many
/// short buffers. Once one transmission completes, the next call can pass the following minute's
/// transmission and the carrier continues without a phase jump.
pub fn make_writer<const S: u64>() -> impl FnMut(&mut Transmission<S>, &mut [f32]) -> (usize, bool) {
	let mut i: u64 = 0;
	let mut slot_start: u64 = 0;
	let mut state = SlotState::Start;
	move |transmission: &mut Transmission<S>, data: &mut [f32]| -> (usize, bool) {
		// Skip ahead if starting mid-minute
		if transmission.delay > 0 {
			let delay = transmission.delay;
			let second = delay / S;
			slot_start = i + second * S;
			i += delay;
			transmission.delay = 0;
			state.advance_to(transmission, second as u8);
		} else if let SlotState::Start = state {
			slot_start = i;
			state.advance(transmission);
		}

		let start = i;
		let mut slot_end = slot_start + S;
		let mut completed = false;
		for sample in data.iter_mut() {
			let power = if i < slot_start + state.reduced_samples::<S>() {
				REDUCED_AMPLITUDE
			} else {
				1.0
			};

			let pos = (i % S) as f32 / S as f32;
			*sample = power * (PI * 2. * CARRIER_HZ * pos).sin();
			i += 1;

			if i >= slot_end {
				slot_start = i;
				slot_end = slot_start + S;
				state.advance(transmission);
				if let SlotState::Start = state {
					completed = true;
					break;
				}
			}
		}

		((i - start) as usize, completed)
	}
}
