//! Planar vectors plus a 1D wrapper so springs can drive both position and rotation.

use crate::float::Float;
use core::ops::{Add, AddAssign, Mul, Neg, Sub, SubAssign};

/// What a spring needs from the quantity it animates.
pub trait Vector:
    Copy + Add<Output = Self> + Sub<Output = Self> + Neg<Output = Self> + PartialEq + Default + core::fmt::Debug
{
    type Scalar: Float;

    fn zero() -> Self;
    fn dot(self, other: Self) -> Self::Scalar;
    fn scale(self, s: Self::Scalar) -> Self;

    fn length_sq(self) -> Self::Scalar {
        self.dot(self)
    }

    fn length(self) -> Self::Scalar {
        self.length_sq().sqrt()
    }
}

/// A single animated number, e.g. a glyph's rotation in degrees.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Scalar<F: Float>(pub F);

impl<F: Float> Add for Scalar<F> {
    type Output = Self;
    fn add(self, rhs: Self) -> Self { Scalar(self.0 + rhs.0) }
}

impl<F: Float> Sub for Scalar<F> {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self { Scalar(self.0 - rhs.0) }
}

impl<F: Float> Neg for Scalar<F> {
    type Output = Self;
    fn neg(self) -> Self { Scalar(-self.0) }
}

impl<F: Float> Vector for Scalar<F> {
    type Scalar = F;
    fn zero() -> Self { Scalar(F::zero()) }
    fn dot(self, other: Self) -> F { self.0 * other.0 }
    fn scale(self, s: F) -> Self { Scalar(self.0 * s) }
}

/// Screen-space vector in CSS pixels, y pointing down.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Vec2<F: Float> {
    pub x: F,
    pub y: F,
}

impl<F: Float> Vec2<F> {
    pub fn new(x: F, y: F) -> Self { Vec2 { x, y } }

    pub fn zero() -> Self { Vec2 { x: F::zero(), y: F::zero() } }

    pub fn dot(self, other: Self) -> F {
        self.x * other.x + self.y * other.y
    }

    pub fn scale(self, s: F) -> Self {
        Vec2 { x: self.x * s, y: self.y * s }
    }

    pub fn length_sq(self) -> F {
        self.dot(self)
    }

    pub fn length(self) -> F {
        self.length_sq().sqrt()
    }

    pub fn distance(self, other: Self) -> F {
        (self - other).length()
    }

    /// Unit vector in the same direction, or zero for a (near) zero vector.
    pub fn normalize(self) -> Self {
        let len = self.length();
        if len.is_near_zero(F::from_f32(1e-10)) {
            Self::zero()
        } else {
            self.scale(F::one() / len)
        }
    }

    /// Shorten to `max` if longer; direction is preserved.
    pub fn clamp_length(self, max: F) -> Self {
        let len = self.length();
        if len > max && len > F::zero() {
            self.scale(max / len)
        } else {
            self
        }
    }

    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl<F: Float> Add for Vec2<F> {
    type Output = Self;
    fn add(self, rhs: Self) -> Self { Vec2 { x: self.x + rhs.x, y: self.y + rhs.y } }
}

impl<F: Float> AddAssign for Vec2<F> {
    fn add_assign(&mut self, rhs: Self) { *self = *self + rhs; }
}

impl<F: Float> Sub for Vec2<F> {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self { Vec2 { x: self.x - rhs.x, y: self.y - rhs.y } }
}

impl<F: Float> SubAssign for Vec2<F> {
    fn sub_assign(&mut self, rhs: Self) { *self = *self - rhs; }
}

impl<F: Float> Neg for Vec2<F> {
    type Output = Self;
    fn neg(self) -> Self { Vec2 { x: -self.x, y: -self.y } }
}

impl<F: Float> Mul<F> for Vec2<F> {
    type Output = Self;
    fn mul(self, rhs: F) -> Self { self.scale(rhs) }
}

impl<F: Float> Vector for Vec2<F> {
    type Scalar = F;
    fn zero() -> Self { Vec2::zero() }
    fn dot(self, other: Self) -> F { Vec2::dot(self, other) }
    fn scale(self, s: F) -> Self { Vec2::scale(self, s) }
}
