//! Scalar abstraction so the simulation runs on `f32` or `f64`.

use core::cmp::PartialOrd;
use core::ops::{Add, Div, Mul, Neg, Sub};

/// Floating-point operations the glyph simulation relies on.
///
/// Transcendental functions go through `libm` so results do not depend on
/// the platform's math library.
pub trait Float:
    Copy
    + PartialEq
    + PartialOrd
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Neg<Output = Self>
    + Default
    + core::fmt::Debug
    + core::fmt::Display
{
    fn zero() -> Self;
    fn one() -> Self;
    fn half() -> Self;
    fn two() -> Self;
    fn pi() -> Self;
    fn sqrt(self) -> Self;
    fn sin(self) -> Self;
    fn cos(self) -> Self;
    fn exp(self) -> Self;
    fn abs(self) -> Self;
    fn floor(self) -> Self;
    fn is_finite(self) -> bool;
    /// Convert from f32 (constants and configuration).
    fn from_f32(v: f32) -> Self;
    /// Lossy conversion used for tick counts.
    fn from_usize(v: usize) -> Self;
    /// Truncating conversion; negative and non-finite values map to 0.
    fn to_usize(self) -> usize;

    fn min(self, other: Self) -> Self {
        if self < other { self } else { other }
    }

    fn max(self, other: Self) -> Self {
        if self > other { self } else { other }
    }

    fn clamp(self, min: Self, max: Self) -> Self {
        self.max(min).min(max)
    }

    fn lerp(self, other: Self, t: Self) -> Self {
        self + (other - self) * t
    }

    fn is_near_zero(self, epsilon: Self) -> bool {
        self.abs() < epsilon
    }

    /// -1, 0 or 1. Zero stays zero so a resting axis never picks a direction.
    fn signum(self) -> Self {
        if self > Self::zero() {
            Self::one()
        } else if self < Self::zero() {
            -Self::one()
        } else {
            Self::zero()
        }
    }
}

impl Float for f32 {
    fn zero() -> Self { 0.0 }
    fn one() -> Self { 1.0 }
    fn half() -> Self { 0.5 }
    fn two() -> Self { 2.0 }
    fn pi() -> Self { core::f32::consts::PI }
    fn sqrt(self) -> Self { libm::sqrtf(self) }
    fn sin(self) -> Self { libm::sinf(self) }
    fn cos(self) -> Self { libm::cosf(self) }
    fn exp(self) -> Self { libm::expf(self) }
    fn abs(self) -> Self { libm::fabsf(self) }
    fn floor(self) -> Self { libm::floorf(self) }
    fn is_finite(self) -> bool { f32::is_finite(self) }
    fn from_f32(v: f32) -> Self { v }
    fn from_usize(v: usize) -> Self { v as f32 }
    fn to_usize(self) -> usize {
        if self.is_finite() && self > 0.0 { self as usize } else { 0 }
    }
}

impl Float for f64 {
    fn zero() -> Self { 0.0 }
    fn one() -> Self { 1.0 }
    fn half() -> Self { 0.5 }
    fn two() -> Self { 2.0 }
    fn pi() -> Self { core::f64::consts::PI }
    fn sqrt(self) -> Self { libm::sqrt(self) }
    fn sin(self) -> Self { libm::sin(self) }
    fn cos(self) -> Self { libm::cos(self) }
    fn exp(self) -> Self { libm::exp(self) }
    fn abs(self) -> Self { libm::fabs(self) }
    fn floor(self) -> Self { libm::floor(self) }
    fn is_finite(self) -> bool { f64::is_finite(self) }
    fn from_f32(v: f32) -> Self { v as f64 }
    fn from_usize(v: usize) -> Self { v as f64 }
    fn to_usize(self) -> usize {
        if self.is_finite() && self > 0.0 { self as usize } else { 0 }
    }
}
