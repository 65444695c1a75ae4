//! Even parity over a range of frame bits.
//!
//! DCF77 protects the minute, hour, and date blocks with one even parity bit each: the parity bit
//! is set when the block holds an odd number of ones, so that the block plus its parity bit always
//! holds an even number.

/// Even parity bit for `bits`.
///
/// Returns `true` if an odd number of `bits` are set.
///
/// # Examples
///
/// ```
/// # use dcf77::parity::even_parity;
/// assert_eq!(even_parity(&[true, false, true, true]), true);
/// assert_eq!(even_parity(&[true, false, true, false]), false);
/// assert_eq!(even_parity(&[]), false);
/// ```
#[inline]
pub fn even_parity(bits: &[bool]) -> bool {
	bits.iter().fold(false, |parity, &bit| parity ^ bit)
}
