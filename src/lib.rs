// This file is part of the halfbits project.
//
// This Source Code Form is subject to the terms of the Mozilla
// Public License v. 2.0. If a copy of the MPL was not distributed
// with this file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Bit-exact conversions between IEEE-754 half, single, and double
//! precision
//!
//! Half precision is a storage format: textures, color pipelines, and
//! network transports keep values in 16 bits while computation happens in
//! `f32` or `f64`.  This crate converts between the three encodings by
//! operating directly on their bit patterns, so every special case —
//! signed zero, gradual underflow, saturation to infinity, NaN collapse,
//! round-to-nearest with ties away from zero — comes out bit-for-bit
//! deterministic on every target.
//!
//! The batch entry points verify once per process that the native `f64`
//! really is IEEE-754 binary64 (and record the host's 32-bit word order)
//! before touching caller memory; see [`host_word_order`].
//!
//! Two conversions are lossy by design: wide denormals underflow to a
//! signed half zero, and NaN payloads collapse to one canonical quiet
//! pattern per width, keeping only the sign.
//!
//! # Examples
//!
//! ```
//! use halfbits::{halves_to_doubles, singles_to_halves, Half};
//!
//! let src = [1.0f32, -2.5, f32::INFINITY];
//! let mut packed = [Half::ZERO; 3];
//! singles_to_halves(&src, &mut packed)?;
//! assert_eq!(packed[0].to_bits(), 0x3C00);
//! assert_eq!(packed[1].to_bits(), 0xC100);
//! assert_eq!(packed[2], Half::INFINITY);
//!
//! let mut wide = [0.0f64; 3];
//! halves_to_doubles(&packed, &mut wide)?;
//! assert_eq!(wide[..2], [1.0, -2.5]);
//! # Ok::<(), halfbits::UnsupportedHost>(())
//! ```

use core::cmp::Ordering;
use core::fmt;
use core::num::FpCategory;
use core::ops::Neg;
use num_traits::{FromPrimitive, ToPrimitive};

pub mod convert;
mod probe;
mod slice;

pub use crate::probe::{host_word_order, UnsupportedHost, WordOrder};
pub use crate::slice::{doubles_to_halves, halves_to_doubles, halves_to_singles, singles_to_halves};

use crate::convert::{
    double_bits_from_half, half_from_double_bits, half_from_single_bits, single_bits_from_half,
    HALF_EXP_MASK, HALF_MAN_MASK, HALF_QUIET_NAN, HALF_SIGN_MASK,
};

/// An IEEE-754 half-precision (binary16) value stored as its bit pattern
///
/// `Half` is a storage type: it holds the 16 bits and converts to and
/// from the native formats, but does no arithmetic of its own.  Compute
/// in `f32` or `f64` and narrow the result back when done.
///
/// Equality and ordering follow IEEE semantics: [`NAN`](Self::NAN)
/// compares unequal to everything including itself, and the two zeros
/// compare equal.  Compare [`to_bits`](Self::to_bits) when bit identity
/// matters.
#[derive(Debug, Clone, Copy, Default)]
#[repr(transparent)]
pub struct Half(u16);

impl Half {
    /// The radix of the internal representation
    pub const RADIX: u32 = 2;
    /// Number of significant digits, hidden bit included
    pub const MANTISSA_DIGITS: u32 = 11;
    /// One greater than the maximum normal exponent
    pub const MAX_EXP: i32 = 16;
    /// Minimum normal exponent plus one
    pub const MIN_EXP: i32 = -13;

    /// Positive zero
    pub const ZERO: Self = Self(0);
    /// Negative zero
    pub const NEG_ZERO: Self = Self(HALF_SIGN_MASK);
    /// 1.0
    pub const ONE: Self = Self(0x3C00);
    /// Positive infinity
    pub const INFINITY: Self = Self(HALF_EXP_MASK);
    /// Negative infinity
    pub const NEG_INFINITY: Self = Self(HALF_SIGN_MASK | HALF_EXP_MASK);
    /// The canonical quiet NaN, sign bit clear
    pub const NAN: Self = Self(HALF_QUIET_NAN);
    /// Largest finite value, 65504
    pub const MAX: Self = Self(0x7BFF);
    /// Smallest finite value, −65504
    pub const MIN: Self = Self(0xFBFF);
    /// Smallest positive normal value, 2<sup>−14</sup>
    pub const MIN_POSITIVE: Self = Self(0x0400);
    /// Smallest positive subnormal value, 2<sup>−24</sup>
    pub const MIN_POSITIVE_SUBNORMAL: Self = Self(0x0001);
    /// Distance between 1.0 and the next representable value, 2<sup>−10</sup>
    pub const EPSILON: Self = Self(0x1400);

    /// Reinterprets a raw 16-bit pattern as a half-precision value.
    #[must_use]
    pub const fn from_bits(bits: u16) -> Self {
        Self(bits)
    }

    /// Returns the raw 16-bit pattern.
    #[must_use]
    pub const fn to_bits(self) -> u16 {
        self.0
    }

    /// Narrows a single-precision value, rounding ties away from zero.
    #[must_use]
    pub const fn from_f32(x: f32) -> Self {
        Self(half_from_single_bits(x.to_bits()))
    }

    /// Narrows a double-precision value, rounding ties away from zero.
    #[must_use]
    pub const fn from_f64(x: f64) -> Self {
        Self(half_from_double_bits(x.to_bits()))
    }

    /// Widens to single precision, exactly for every finite value.
    #[must_use]
    pub const fn to_f32(self) -> f32 {
        f32::from_bits(single_bits_from_half(self.0))
    }

    /// Widens to double precision, exactly for every finite value.
    #[must_use]
    pub const fn to_f64(self) -> f64 {
        f64::from_bits(double_bits_from_half(self.0))
    }

    /// Returns `true` if this value is NaN.
    #[must_use]
    pub const fn is_nan(self) -> bool {
        self.0 & !HALF_SIGN_MASK > HALF_EXP_MASK
    }

    /// Returns `true` if this value is positive or negative infinity.
    #[must_use]
    pub const fn is_infinite(self) -> bool {
        self.0 & !HALF_SIGN_MASK == HALF_EXP_MASK
    }

    /// Returns `true` if this value is neither infinite nor NaN.
    #[must_use]
    pub const fn is_finite(self) -> bool {
        self.0 & HALF_EXP_MASK != HALF_EXP_MASK
    }

    /// Returns `true` if this value is subnormal.
    #[must_use]
    pub const fn is_subnormal(self) -> bool {
        self.0 & HALF_EXP_MASK == 0 && self.0 & HALF_MAN_MASK != 0
    }

    /// Returns `true` if the sign bit is set, NaNs and zeros included.
    #[must_use]
    pub const fn is_sign_negative(self) -> bool {
        self.0 & HALF_SIGN_MASK != 0
    }

    /// Returns `true` if the sign bit is clear, NaNs and zeros included.
    #[must_use]
    pub const fn is_sign_positive(self) -> bool {
        self.0 & HALF_SIGN_MASK == 0
    }

    /// Classifies this value into the five floating-point categories.
    #[must_use]
    pub const fn classify(self) -> FpCategory {
        match (self.0 & HALF_EXP_MASK, self.0 & HALF_MAN_MASK) {
            (0, 0) => FpCategory::Zero,
            (0, _) => FpCategory::Subnormal,
            (HALF_EXP_MASK, 0) => FpCategory::Infinite,
            (HALF_EXP_MASK, _) => FpCategory::Nan,
            _ => FpCategory::Normal,
        }
    }

    /// Returns this value with the sign bit cleared.
    #[must_use]
    pub const fn abs(self) -> Self {
        Self(self.0 & !HALF_SIGN_MASK)
    }
}

impl PartialEq for Half {
    fn eq(&self, other: &Self) -> bool {
        self.to_f32() == other.to_f32()
    }
}

impl PartialOrd for Half {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.to_f32().partial_cmp(&other.to_f32())
    }
}

impl Neg for Half {
    type Output = Self;

    fn neg(self) -> Self {
        Self(self.0 ^ HALF_SIGN_MASK)
    }
}

impl fmt::Display for Half {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&Half::to_f32(*self), f)
    }
}

impl From<Half> for f32 {
    fn from(x: Half) -> Self {
        x.to_f32()
    }
}

impl From<Half> for f64 {
    fn from(x: Half) -> Self {
        x.to_f64()
    }
}

impl ToPrimitive for Half {
    fn to_i64(&self) -> Option<i64> {
        Half::to_f64(*self).to_i64()
    }

    fn to_u64(&self) -> Option<u64> {
        Half::to_f64(*self).to_u64()
    }

    fn to_f32(&self) -> Option<f32> {
        Some(Half::to_f32(*self))
    }

    fn to_f64(&self) -> Option<f64> {
        Some(Half::to_f64(*self))
    }
}

impl FromPrimitive for Half {
    #[allow(clippy::cast_precision_loss)]
    fn from_i64(n: i64) -> Option<Self> {
        Some(Self::from_f64(n as f64))
    }

    #[allow(clippy::cast_precision_loss)]
    fn from_u64(n: u64) -> Option<Self> {
        Some(Self::from_f64(n as f64))
    }

    fn from_f32(n: f32) -> Option<Self> {
        Some(Half::from_f32(n))
    }

    fn from_f64(n: f64) -> Option<Self> {
        Some(Half::from_f64(n))
    }
}
