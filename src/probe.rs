// This file is part of the halfbits project.
//
// This Source Code Form is subject to the terms of the Mozilla
// Public License v. 2.0. If a copy of the MPL was not distributed
// with this file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! One-time verification of the host floating-point storage
//!
//! Before touching caller memory, the batch converters confirm that the
//! native `f64` stores the exact IEEE-754 binary64 pattern, and record
//! which 32-bit word of an 8-byte value carries the sign and exponent.
//! The probe runs at most once per process; concurrent first callers
//! block until it completes, and later calls read the cached result
//! without synchronization overhead.

use std::sync::OnceLock;
use thiserror::Error;

/// The native floating-point storage is not IEEE-754 binary.
///
/// This is an environmental condition detected once per process: every
/// batch conversion reports it for the life of the process, and no retry
/// can succeed.  Per-value outcomes (NaN collapse, underflow to zero,
/// saturation to infinity, rounding) are never errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("native floating-point storage is not IEEE-754 binary")]
pub struct UnsupportedHost;

/// Which 32-bit word of a 64-bit value holds the sign and exponent
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WordOrder {
    /// The first word in memory is the high-order word (big-endian hosts)
    HighFirst,
    /// The high-order word comes second in memory (little-endian hosts)
    LowFirst,
}

/// Binary64 pattern of 1.0, the probe value
const ONE_BITS: u64 = 0x3FF0_0000_0000_0000;
/// High-order 32-bit word of [`ONE_BITS`]
const ONE_HIGH_WORD: u32 = 0x3FF0_0000;

static HOST: OnceLock<Result<WordOrder, UnsupportedHost>> = OnceLock::new();

fn probe() -> Result<WordOrder, UnsupportedHost> {
    let one = 1.0f64.to_bits();
    let [b0, b1, b2, b3, b4, b5, b6, b7] = 1.0f64.to_ne_bytes();
    let first = u32::from_ne_bytes([b0, b1, b2, b3]);
    let second = u32::from_ne_bytes([b4, b5, b6, b7]);
    match (one, first, second) {
        (ONE_BITS, ONE_HIGH_WORD, 0) => Ok(WordOrder::HighFirst),
        (ONE_BITS, 0, ONE_HIGH_WORD) => Ok(WordOrder::LowFirst),
        _ => {
            log::error!("native f64 stores 1.0 as {one:#018x}; refusing to convert");
            Err(UnsupportedHost)
        }
    }
}

/// Verifies the host floating-point storage and returns its word order.
///
/// The first call runs the probe; every later call returns the cached
/// result.  The word order tells callers that split doubles into 32-bit
/// words which word holds the sign and exponent.
///
/// # Errors
///
/// [`UnsupportedHost`] if the native `f64` does not reinterpret as the
/// IEEE-754 binary64 pattern of 1.0.
pub fn host_word_order() -> Result<WordOrder, UnsupportedHost> {
    *HOST.get_or_init(probe)
}
