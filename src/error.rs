//! Error type for the transmitter.

/// Everything that can stop a transmission.
#[derive(Debug, thiserror::Error)]
pub enum Error {
	/// `clock_gettime` failed.
	#[error("failed to get current system time")]
	Clock,
	/// The Unix time (seconds) has no local time within years 1-9999.
	#[error("time {0} is outside the supported calendar range")]
	OutOfRange(i64),
	#[error("failed to get default audio output device")]
	NoOutputDevice,
	#[error("failed to build audio output stream: {0}")]
	BuildStream(#[from] cpal::BuildStreamError),
	#[error("failed to play audio output stream: {0}")]
	PlayStream(#[from] cpal::PlayStreamError),
	/// The audio callback reported an error while playing.
	#[error("audio output stream failed")]
	Stream,
	/// The audio callback went away before every minute was handed over.
	#[error("audio output stopped before all minutes were sent")]
	Disconnected
}
