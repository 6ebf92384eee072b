//! Fixed-arity vector type for 3D positions and directions.
//!
//! `Vec3` is a plain `#[repr(C)]` triple of `f32`, laid out exactly like a
//! C `float[3]`. That layout lets callers keep their own `[f32; 3]` storage
//! and borrow it as a `Vec3` without copying (see [`Vec3::from_buffer`]).
//!
//! # Usage
//! ```
//! use v3math_core::{ops, Vec3};
//!
//! let mut buffer = [3.0_f32, 4.0, 0.0];
//! let v = Vec3::from_buffer_mut(&mut buffer);
//! ops::scale(v, 2.0);
//! assert_eq!(buffer, [6.0, 8.0, 0.0]);
//! ```

use std::fmt;
use std::ops::{Add, AddAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign};

use approx::AbsDiffEq;
use bytemuck::{Pod, Zeroable};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::ops::{self, DEFAULT_TOLERANCE, EPSILON};

/// 3D vector used for points, displacements, and directions.
///
/// A value type: copying is cheap and every operation in [`crate::ops`]
/// takes its operands by value, so a destination that is also a source
/// can never observe a half-written result.
#[derive(Debug, Clone, Copy, PartialEq, Default, Pod, Zeroable)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[repr(C)]
pub struct Vec3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vec3 {
    /// The zero vector (0, 0, 0).
    pub const ZERO: Vec3 = Vec3::new(0.0, 0.0, 0.0);

    /// Unit X basis vector.
    pub const X: Vec3 = Vec3::new(1.0, 0.0, 0.0);

    /// Unit Y basis vector.
    pub const Y: Vec3 = Vec3::new(0.0, 1.0, 0.0);

    /// Unit Z basis vector.
    pub const Z: Vec3 = Vec3::new(0.0, 0.0, 1.0);

    #[inline]
    #[must_use]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Vec3 { x, y, z }
    }

    /// Build a vector from an unsized slice. Asserts the slice holds exactly 3 values.
    #[inline]
    #[must_use]
    #[track_caller]
    pub fn from_slice(values: &[f32]) -> Self {
        assert!(
            values.len() == 3,
            "Vec3::from_slice: expected 3 components, got {}",
            values.len()
        );
        Vec3::new(values[0], values[1], values[2])
    }

    /// Borrow a caller-owned `[f32; 3]` as a `Vec3` without copying.
    #[inline]
    pub fn from_buffer(buffer: &[f32; 3]) -> &Vec3 {
        bytemuck::cast_ref(buffer)
    }

    /// Mutably borrow a caller-owned `[f32; 3]` as a `Vec3`.
    ///
    /// Writes through the returned reference land in `buffer`.
    #[inline]
    pub fn from_buffer_mut(buffer: &mut [f32; 3]) -> &mut Vec3 {
        bytemuck::cast_mut(buffer)
    }

    #[inline]
    pub const fn to_array(self) -> [f32; 3] {
        [self.x, self.y, self.z]
    }

    /// True when the vector is too short for angle or normalization to be defined.
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        ops::length(*self) < EPSILON
    }
}

impl From<[f32; 3]> for Vec3 {
    #[inline]
    fn from([x, y, z]: [f32; 3]) -> Self {
        Vec3::new(x, y, z)
    }
}

impl From<Vec3> for [f32; 3] {
    #[inline]
    fn from(v: Vec3) -> Self {
        v.to_array()
    }
}

#[cfg(feature = "nalgebra")]
impl From<nalgebra::Vector3<f32>> for Vec3 {
    #[inline]
    fn from(v: nalgebra::Vector3<f32>) -> Self {
        Vec3::new(v.x, v.y, v.z)
    }
}

#[cfg(feature = "nalgebra")]
impl From<Vec3> for nalgebra::Vector3<f32> {
    #[inline]
    fn from(v: Vec3) -> Self {
        nalgebra::Vector3::new(v.x, v.y, v.z)
    }
}

impl Index<usize> for Vec3 {
    type Output = f32;
    #[inline]
    fn index(&self, index: usize) -> &f32 {
        &bytemuck::cast_ref::<Vec3, [f32; 3]>(self)[index]
    }
}

impl IndexMut<usize> for Vec3 {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut f32 {
        &mut bytemuck::cast_mut::<Vec3, [f32; 3]>(self)[index]
    }
}

// ============================================================================
// OPERATORS (thin wrappers over crate::ops)
// ============================================================================

impl Add for Vec3 {
    type Output = Vec3;
    #[inline]
    fn add(self, rhs: Vec3) -> Vec3 {
        ops::add(self, rhs)
    }
}

impl AddAssign for Vec3 {
    #[inline]
    fn add_assign(&mut self, rhs: Vec3) {
        *self = ops::add(*self, rhs);
    }
}

impl Sub for Vec3 {
    type Output = Vec3;
    #[inline]
    fn sub(self, rhs: Vec3) -> Vec3 {
        ops::subtract(self, rhs)
    }
}

impl SubAssign for Vec3 {
    #[inline]
    fn sub_assign(&mut self, rhs: Vec3) {
        *self = ops::subtract(*self, rhs);
    }
}

impl Neg for Vec3 {
    type Output = Vec3;
    #[inline]
    fn neg(self) -> Vec3 {
        Vec3::new(-self.x, -self.y, -self.z)
    }
}

impl Mul<f32> for Vec3 {
    type Output = Vec3;
    #[inline]
    fn mul(mut self, rhs: f32) -> Vec3 {
        ops::scale(&mut self, rhs);
        self
    }
}

impl MulAssign<f32> for Vec3 {
    #[inline]
    fn mul_assign(&mut self, rhs: f32) {
        ops::scale(self, rhs);
    }
}

/// Tolerance comparison backed by [`ops::equals`], so `approx` assertions
/// and the library's own predicate always agree.
impl AbsDiffEq for Vec3 {
    type Epsilon = f32;

    fn default_epsilon() -> f32 {
        DEFAULT_TOLERANCE
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f32) -> bool {
        ops::equals(*self, *other, epsilon)
    }
}

impl fmt::Display for Vec3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.6}, {:.6}, {:.6})", self.x, self.y, self.z)
    }
}
