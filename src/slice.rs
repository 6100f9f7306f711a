// This file is part of the halfbits project.
//
// This Source Code Form is subject to the terms of the Mozilla
// Public License v. 2.0. If a copy of the MPL was not distributed
// with this file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Batch conversions over caller-owned buffers
//!
//! Each entry point pairs source and destination elements up to the
//! shorter of the two slices, so an empty slice on either side — a
//! caller's absent plane — converts nothing and still succeeds.  No
//! allocation takes place, and independent calls over disjoint buffers
//! are free to run in parallel.

use crate::convert::{
    double_bits_from_half, half_from_double_bits, half_from_single_bits, single_bits_from_half,
};
use crate::probe::{host_word_order, UnsupportedHost};
use crate::Half;

/// Narrows single-precision values into half-precision storage.
///
/// Per-value special cases (NaN collapse, underflow, saturation to
/// infinity) are silent, defined outcomes, never failures.
///
/// # Errors
///
/// [`UnsupportedHost`] if the host floating-point storage fails the
/// one-time IEEE-754 probe.
pub fn singles_to_halves(src: &[f32], dst: &mut [Half]) -> Result<(), UnsupportedHost> {
    host_word_order()?;
    for (dst, src) in dst.iter_mut().zip(src) {
        *dst = Half::from_bits(half_from_single_bits(src.to_bits()));
    }
    Ok(())
}

/// Narrows double-precision values into half-precision storage.
///
/// # Errors
///
/// [`UnsupportedHost`] if the host floating-point storage fails the
/// one-time IEEE-754 probe.
pub fn doubles_to_halves(src: &[f64], dst: &mut [Half]) -> Result<(), UnsupportedHost> {
    host_word_order()?;
    for (dst, src) in dst.iter_mut().zip(src) {
        *dst = Half::from_bits(half_from_double_bits(src.to_bits()));
    }
    Ok(())
}

/// Widens half-precision storage into single-precision values.
///
/// Exact for every finite value and infinity; NaNs come out as the
/// canonical quiet pattern with their sign preserved.
///
/// # Errors
///
/// [`UnsupportedHost`] if the host floating-point storage fails the
/// one-time IEEE-754 probe.
pub fn halves_to_singles(src: &[Half], dst: &mut [f32]) -> Result<(), UnsupportedHost> {
    host_word_order()?;
    for (dst, src) in dst.iter_mut().zip(src) {
        *dst = f32::from_bits(single_bits_from_half(src.to_bits()));
    }
    Ok(())
}

/// Widens half-precision storage into double-precision values.
///
/// # Errors
///
/// [`UnsupportedHost`] if the host floating-point storage fails the
/// one-time IEEE-754 probe.
pub fn halves_to_doubles(src: &[Half], dst: &mut [f64]) -> Result<(), UnsupportedHost> {
    host_word_order()?;
    for (dst, src) in dst.iter_mut().zip(src) {
        *dst = f64::from_bits(double_bits_from_half(src.to_bits()));
    }
    Ok(())
}
