//! Transmit the DCF77 time signal using simple audio output.
//!
//! This application encodes the local time in Germany as [DCF77] frames and plays them through
//! the device's default audio output. This works by taking advantage of stray RF signals created
//! by audio hardware as a side effect of their operation -- the audio output itself is not useful
//! as radio-controlled clocks listen for the 77.5 kHz carrier rather than audio.
//!
//! [DCF77]: https://en.wikipedia.org/wiki/DCF77
//!
//! # Command Line Arguments
//!
//! General form: `dcf77tx [options...]`
//!
//! | Short form | Long form    | Argument           | Default                      | Description                       |
//! | ---------- | ------------ | ------------------ | ---------------------------- | --------------------------------- |
//! | `-n`, `-c` | `--count`    | Integer > 0        | 4                            | The number of minutes to transmit |
//! | `-z`       | `--timezone` | [TZ string]        | `CET-1CEST,M3.5.0,M10.5.0/3` | The timezone of transmitted time  |
//! | `-t`       | `--time`     | [Date time string] | Current time                 | The starting local time           |
//! |            | `--dry-run`  |                    |                              | Print frames instead of playing   |
//!
//! The timezone may also be set with the `DCF77TX_TIMEZONE` environment variable. Logging goes to
//! stderr at level `info` by default and can be configured with `RUST_LOG`, e.g. `RUST_LOG=debug`
//! to also log every frame.
//!
//! [TZ string]: civil::zone
//! [date time string]: civil::parse
//!
//! # Examples
//!
//! Transmit for 8 minutes
//! ```sh
//! dcf77tx -n 8
//! ```
//!
//! Print the frames around the next switch to summer time
//! ```sh
//! dcf77tx -t "2025-03-30 01:57" -n 5 --dry-run
//! ```

use std::num::NonZero;
use std::process::ExitCode;
use std::sync::{Arc, Condvar, Mutex, PoisonError};
use std::sync::mpsc::{sync_channel, Receiver};

use clap::Parser;
use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};
use cpal::Sample;
use dcf77::writer::Transmission;
use tracing_subscriber::EnvFilter;

use args::Args;
use error::Error;
use schedule::{Minute, Schedule};

mod args;
mod error;
mod schedule;

/// Output sample rate in Hz.
const SAMPLE_RATE: u64 = 48000;

/// Output buffer size in samples, 21.33 ms at 48 kHz.
const BUFFER_SIZE: u32 = 1024;

/// Simple multi-threaded flag using a condition variable.
///
/// Carries whether the audio output finished cleanly. Only the first call to [`Flagger::notify`]
/// counts; all subsequent calls to [`Flagger::wait`] return immediately.
struct Flagger {
	/// `None` means continue waiting.
	mutex: Mutex<Option<bool>>,
	cond: Condvar
}

impl Flagger {
	/// Create a new [`Flagger`] ready to be [`wait`](Flagger::wait)ed on.
	fn new() -> Arc<Flagger> {
		Arc::new(Flagger {
			mutex: Mutex::new(None),
			cond: Condvar::new()
		})
	}

	/// Wait for another thread to call [`Flagger::notify`], returning the value it passed.
	fn wait(&self) -> bool {
		let lock = self.mutex.lock().unwrap_or_else(PoisonError::into_inner);
		let outcome = self.cond.wait_while(lock, |outcome| outcome.is_none())
			.unwrap_or_else(PoisonError::into_inner);
		outcome.unwrap_or(false)
	}

	/// Unblock all [`wait`](Flagger::wait)ing threads.
	fn notify(&self, ok: bool) {
		let mut outcome = self.mutex.lock().unwrap_or_else(PoisonError::into_inner);
		outcome.get_or_insert(ok);
		self.cond.notify_all();
	}
}

/// Current state of the audio callback.
enum WriterState {
	/// Waiting for the first transmission. Write [`f32::EQUILIBRIUM`].
	Waiting,
	/// Running, write the outputs of the DCF77 writer.
	Running,
	/// Finished, pad with [`f32::EQUILIBRIUM`].
	Finishing
}

/// Make the audio callback that writes `count` transmissions received from `rx` with `func`.
///
/// This writer provides three core behaviors:
/// 1. It reads transmissions from the receiver, `rx`, to provide to the DCF77 writer `func`.
/// 2. It repeatedly calls `func`, as needed, to ensure the buffer is written fully.
/// 3. It writes silence before the first and after the last transmission, and notifies `flagger`
///    once all `count` transmissions have been written.
fn make_writer<F>(rx: Receiver<Transmission<SAMPLE_RATE>>, flagger: Arc<Flagger>, count: NonZero<usize>, mut func: F)
-> impl FnMut(&mut [f32]) + Send
where F: FnMut(&mut Transmission<SAMPLE_RATE>, &mut [f32]) -> (usize, bool) + Send
{
	let mut state = WriterState::Waiting;
	let mut transmission = Transmission::default();
	let mut written = 0;
	let count = count.get();

	move |data: &mut [f32]| {
		match state {
			WriterState::Waiting => {
				if let Ok(t) = rx.try_recv() {
					transmission = t;
					state = WriterState::Running;
				}
			},
			WriterState::Finishing => flagger.notify(true),
			_ => ()
		}

		if let WriterState::Running = state {
			let mut i = 0;
			let len = data.len();
			while i < len {
				let (j, done) = func(&mut transmission, &mut data[i..]);
				i += j;
				// Continue straight into the next minute if it is ready, else pad with silence
				if done {
					written += 1;
					if let Ok(t) = rx.try_recv() {
						transmission = t;
					} else {
						state = if written < count {
							tracing::warn!("next minute not ready, output paused");
							WriterState::Waiting
						} else {
							WriterState::Finishing
						};
						data.iter_mut().skip(i).for_each(|v| *v = f32::EQUILIBRIUM);
						break;
					}
				}
			}
		} else {
			data.iter_mut().for_each(|v| *v = f32::EQUILIBRIUM);
		}
	}
}

/// Log an encoded minute: the summary at `info`, the frame at `debug`.
fn log_minute(minute: &Minute) {
	tracing::info!(time = %minute.time, "{}", minute.encoding.summary);
	tracing::debug!(frame = %minute.encoding.frame, packed = %format_args!("{:#x}", minute.encoding.frame.pack()));
}

/// Play `minutes` over the default audio output device.
///
/// Creates and configures output at 48 kHz with a 1024 sample `f32` buffer, and blocks until every
/// minute has been played.
fn play(minutes: impl Iterator<Item = Result<Minute, Error>>, count: NonZero<usize>) -> Result<(), Error> {
	let host = cpal::default_host();
	let device = host.default_output_device().ok_or(Error::NoOutputDevice)?;
	let config = cpal::StreamConfig {
		channels: 1,
		sample_rate: cpal::SampleRate(SAMPLE_RATE as u32),
		buffer_size: cpal::BufferSize::Fixed(BUFFER_SIZE)
	};
	tracing::debug!(device = ?device.name().ok(), ?config, "opening audio output");

	// Hand transmissions to the audio thread one at a time
	let (tx, rx) = sync_channel::<Transmission<SAMPLE_RATE>>(0);
	let flagger = Flagger::new();
	let on_error = {
		let flagger = flagger.clone();
		move |error: cpal::StreamError| {
			tracing::error!(%error, "audio output error");
			flagger.notify(false);
		}
	};

	let mut write = make_writer(rx, flagger.clone(), count, dcf77::writer::make_writer::<SAMPLE_RATE>());
	let stream = device.build_output_stream(
		&config,
		move |data: &mut [f32], _info: &cpal::OutputCallbackInfo| write(data),
		on_error,
		None)?;
	stream.play()?;

	for minute in minutes {
		let minute = minute?;
		log_minute(&minute);
		tx.send(Transmission::new(&minute.encoding.frame, minute.offset_ns))
			.map_err(|_| Error::Disconnected)?;
	}

	if flagger.wait() {
		Ok(())
	} else {
		Err(Error::Stream)
	}
}

/// Encode `args.count` minutes starting at `args.time` or now, then print or play them.
fn run(args: Args) -> Result<(), Error> {
	let schedule = match args.time {
		Some(time) => Schedule::starting_at(args.timezone, &time),
		None => Schedule::new(args.timezone, civil::clock::now().ok_or(Error::Clock)?)
	};
	let minutes = schedule.take(args.count.get());

	if args.dry_run {
		for minute in minutes {
			let minute = minute?;
			log_minute(&minute);
			println!("{} {}", minute.encoding.frame, minute.encoding.summary);
		}
		Ok(())
	} else {
		play(minutes, args.count)
	}
}

/// Main program entry point.
///
/// Parses input arguments and plays DCF77 audio output. See [`crate`] documentation for details.
fn main() -> ExitCode {
	tracing_subscriber::fmt()
		.with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
		.with_writer(std::io::stderr)
		.init();

	let args = Args::parse();
	tracing::debug!(?args);

	match run(args) {
		Ok(()) => ExitCode::SUCCESS,
		Err(error) => {
			tracing::error!(%error);
			ExitCode::FAILURE
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::thread;
	use civil::{clock::TimeSpec, Zone};

	#[test]
	fn flagger_test() {
		let flagger = Flagger::new();
		let clone = flagger.clone();
		thread::spawn(move || clone.notify(true));
		assert!(flagger.wait());
		// Later notifications do not change the outcome
		flagger.notify(false);
		assert!(flagger.wait());
	}

	#[test]
	fn callback_test() {
		let (tx, rx) = sync_channel::<Transmission<SAMPLE_RATE>>(1);
		let flagger = Flagger::new();
		let count = NonZero::new(1).unwrap();
		let mut write = make_writer(rx, flagger.clone(), count, dcf77::writer::make_writer::<SAMPLE_RATE>());

		// Start 59.99 seconds into the minute, 480 samples before the end
		let mut minutes = Schedule::new(Zone::central_european(), TimeSpec { sec: 1716742679, nsec: 990000000 });
		let minute = minutes.next().unwrap().unwrap();
		tx.send(Transmission::new(&minute.encoding.frame, minute.offset_ns)).unwrap();

		let mut data = [1f32; 1024];
		write(&mut data);
		assert!(data[..480].iter().any(|&v| v != f32::EQUILIBRIUM));
		assert!(data[480..].iter().all(|&v| v == f32::EQUILIBRIUM));

		// Next callback notices completion
		write(&mut data);
		assert!(data.iter().all(|&v| v == f32::EQUILIBRIUM));
		assert!(flagger.wait());
	}

	#[test]
	fn waiting_test() {
		let (_tx, rx) = sync_channel::<Transmission<SAMPLE_RATE>>(1);
		let mut write = make_writer(rx, Flagger::new(), NonZero::new(1).unwrap(), dcf77::writer::make_writer::<SAMPLE_RATE>());

		// Silence until a transmission arrives
		let mut data = [1f32; 1024];
		write(&mut data);
		assert!(data.iter().all(|&v| v == f32::EQUILIBRIUM));
	}
}
