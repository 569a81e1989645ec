//! `mathcore::vectors` submodule implements two-dimensional vectors which are used to represent
//! positions, sizes and directions on a plane.
//!

use crate::{
    mathcore::{floats::almost_equal, Angle},
    nativecore::ffi::SDL_FPoint,
};
use serde::{Deserialize, Serialize};
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

/// [`impl_vector`] macro implements all common associated functions and methods on vectors.
///
macro_rules! impl_vector {
    ($struct:ident, $type:ty, $zero:literal, $one:literal) => {
        impl $struct {
            /// Initializes vector with zeroes.
            ///
            pub const fn zero() -> Self {
                $struct { x: $zero, y: $zero }
            }
            /// Initializes vector with ones.
            ///
            pub const fn one() -> Self {
                $struct { x: $one, y: $one }
            }

            /// Returns elements of vector.
            ///
            pub fn elements(&self) -> [$type; 2] {
                [self.x, self.y]
            }

            /// Applies function to every vector element and returns changed vector.
            ///
            pub fn map(self, f: impl Fn($type) -> $type) -> Self {
                $struct {
                    x: f(self.x),
                    y: f(self.y),
                }
            }
            /// Combines vectors by applying function on their elements.
            ///
            pub fn combine(self, other: Self, f: impl Fn($type, $type) -> $type) -> Self {
                $struct {
                    x: f(self.x, other.x),
                    y: f(self.y, other.y),
                }
            }

            /// Returns squared magnitude of a vector.
            ///
            pub fn sqr_magnitude(&self) -> $type {
                self.x * self.x + self.y * self.y
            }
            /// Performs dot product operation on two vectors.
            ///
            pub fn dot(self, other: Self) -> $type {
                self.x * other.x + self.y * other.y
            }
            /// Returns scalar that represents cross product of two-dimensional vectors.
            ///
            pub fn cross(self, other: Self) -> $type {
                self.x * other.y - self.y * other.x
            }

            /// Returns vector that is made from the largest components of two vectors.
            ///
            pub fn max(self, other: Self) -> Self {
                self.combine(other, |a, b| a.max(b))
            }
            /// Returns vector that is made from the smallest components of two vectors.
            ///
            pub fn min(self, other: Self) -> Self {
                self.combine(other, |a, b| a.min(b))
            }
        }
        impl From<[$type; 2]> for $struct {
            fn from([x, y]: [$type; 2]) -> Self {
                $struct { x, y }
            }
        }
        impl From<($type, $type)> for $struct {
            fn from((x, y): ($type, $type)) -> Self {
                $struct { x, y }
            }
        }
        impl Neg for $struct {
            type Output = Self;

            fn neg(self) -> Self::Output {
                self.map(|a| -a)
            }
        }
        impl_vector_operations!($struct, Self, combine, ((Add, add, AddAssign, add_assign, +), (Sub, sub, SubAssign, sub_assign, -),));
        impl_vector_operations!($struct, $type, map, ((Mul, mul, MulAssign, mul_assign, *), (Div, div, DivAssign, div_assign, /),));
    };
}
/// [`impl_vector_operations`] macro implements arithmetic traits (and their `...Assign` versions) for vector.
///
macro_rules! impl_vector_operations {
    ($struct:ident, $rhs:ty, combine, ($(($trait:ident, $method:ident, $assign_trait:ident, $assign_method:ident, $op:tt),)+)) => {$(
        impl $trait<$rhs> for $struct {
            type Output = Self;

            fn $method(self, rhs: $rhs) -> Self::Output {
                self.combine(rhs, |a, b| a $op b)
            }
        }
        impl $assign_trait<$rhs> for $struct {
            fn $assign_method(&mut self, rhs: $rhs) {
                *self = *self $op rhs;
            }
        }
    )+};
    ($struct:ident, $rhs:ty, map, ($(($trait:ident, $method:ident, $assign_trait:ident, $assign_method:ident, $op:tt),)+)) => {$(
        impl $trait<$rhs> for $struct {
            type Output = Self;

            fn $method(self, rhs: $rhs) -> Self::Output {
                self.map(|a| a $op rhs)
            }
        }
        impl $assign_trait<$rhs> for $struct {
            fn $assign_method(&mut self, rhs: $rhs) {
                *self = *self $op rhs;
            }
        }
    )+};
}

/// [`Vector2`] struct represents two-dimensional vector (or point) with `f32` coordinates on a plane.
///
/// # Example
/// ```rust
/// # use ggsdl::mathcore::vectors::Vector2;
/// let velocity: Vector2 = Vector2 { x: 1.0, y: -1.0 };
/// let floor: Vector2 = Vector2 { x: 0.0, y: 1.0 };
/// assert_eq!(velocity.reflect(floor), Vector2 { x: 1.0, y: 1.0 });
/// ```
///
#[derive(Copy, Clone, Debug, Default, Serialize, Deserialize)]
pub struct Vector2 {
    /// X component of vector.
    ///
    pub x: f32,
    /// Y component of vector.
    ///
    pub y: f32,
}
impl_vector!(Vector2, f32, 0.0, 1.0);
impl Vector2 {
    /// Returns magnitude of vector.
    ///
    pub fn magnitude(&self) -> f32 {
        self.sqr_magnitude().sqrt()
    }
    /// Returns vector with the same direction and magnitude of 1.
    ///
    /// Zero vector has no direction, so it stays zero.
    ///
    pub fn normalized(self) -> Self {
        let magnitude = self.magnitude();
        if magnitude == 0.0 || !magnitude.is_finite() {
            return Vector2::zero();
        }
        self / magnitude
    }
    /// Returns new vector, which magnitude is clamped to `max_magnitude`.
    ///
    pub fn clamped_magnitude(self, max_magnitude: f32) -> Self {
        let magnitude = self.magnitude();
        if magnitude <= max_magnitude {
            return self;
        }
        self.normalized() * max_magnitude
    }

    /// Reflects vector off the surface with given normal (normal does not have to be normalized).
    ///
    pub fn reflect(self, normal: Vector2) -> Self {
        let normal = normal.normalized();
        self - normal * (2.0 * self.dot(normal))
    }
    /// Linearly interpolates between `self` (`t = 0`) and `other` (`t = 1`).
    ///
    /// `t` is clamped to [0.0; 1.0].
    ///
    pub fn lerp(self, other: Self, t: f32) -> Self {
        let t = t.clamp(0.0, 1.0);
        self + (other - self) * t
    }
    /// Returns angle between two vectors.
    ///
    /// Angle with zero vector is zero.
    ///
    pub fn angle(self, other: Self) -> Angle {
        let magnitudes = self.magnitude() * other.magnitude();
        if magnitudes == 0.0 {
            return Angle::ZERO;
        }
        Angle::from_radians((self.dot(other) / magnitudes).clamp(-1.0, 1.0).acos())
    }
    /// Returns vector rotated counterclockwise by given angle.
    ///
    pub fn rotated(self, angle: Angle) -> Self {
        let (sin, cos) = angle.sin_cos();
        Vector2 {
            x: self.x * cos - self.y * sin,
            y: self.x * sin + self.y * cos,
        }
    }

    // All functions that are providing gate between `ggsdl` and native code extend their API to `crate` visibility.
    /// Returns native representation of vector.
    ///
    pub(crate) fn to_native(self) -> SDL_FPoint {
        SDL_FPoint {
            x: self.x,
            y: self.y,
        }
    }
}
impl PartialEq for Vector2 {
    fn eq(&self, other: &Self) -> bool {
        almost_equal(self.x, other.x) && almost_equal(self.y, other.y)
    }
}
impl From<Vector2Int> for Vector2 {
    fn from(value: Vector2Int) -> Self {
        Vector2 {
            x: value.x as f32,
            y: value.y as f32,
        }
    }
}

/// [`Vector2Int`] struct represents two-dimensional vector (or point) with `i32` coordinates on a plane.
///
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Vector2Int {
    /// X component of vector.
    ///
    pub x: i32,
    /// Y component of vector.
    ///
    pub y: i32,
}
impl_vector!(Vector2Int, i32, 0, 1);
impl From<Vector2> for Vector2Int {
    /// Rounds components to the nearest integers.
    ///
    fn from(value: Vector2) -> Self {
        Vector2Int {
            x: value.x.round() as i32,
            y: value.y.round() as i32,
        }
    }
}
