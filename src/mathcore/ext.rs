//! `mathcore::ext` hidden submodule supplies helper newtypes and structs that are
//! used throughout `ggsdl` crate.
//!

use crate::{mathcore::floats::almost_equal, nativecore::ffi::SDL_Color};
use serde::{Deserialize, Serialize};
use std::{
    f32::consts::{FRAC_PI_2, FRAC_PI_4, PI, TAU},
    ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign},
};

/// [`Angle`] is a newtype over angle value in radians.
///
/// Value is not restricted on construction: `Angle::from_degrees(370.0).degrees()` is `370.0`.
/// [`Angle::normalize`] and [`Angle::normalize_signed`] bring it to one turn.
///
/// # Example
/// ```rust
/// # use ggsdl::mathcore::Angle;
/// # use std::f32::consts::FRAC_PI_2;
/// let angle: Angle = Angle::from_radians(-FRAC_PI_2);
/// assert_eq!(angle.normalize(), Angle::from_degrees(270.0));
/// assert_eq!(Angle::from_degrees(370.0).normalize(), Angle::from_degrees(10.0));
/// assert_eq!(Angle::from_degrees(270.0).normalize_signed(), Angle::from_degrees(-90.0));
/// ```
///
#[derive(Copy, Clone, Debug, Default, PartialOrd, Serialize, Deserialize)]
pub struct Angle(f32);
impl Angle {
    /// Angle that corresponds to zero.
    ///
    pub const ZERO: Angle = Angle(0.0);
    /// Angle that corresponds to 45 degree angle.
    ///
    pub const DEG45: Angle = Angle(FRAC_PI_4);
    /// Angle that corresponds to 90 degree angle.
    ///
    pub const DEG90: Angle = Angle(FRAC_PI_2);
    /// Angle that corresponds to 180 degree angle.
    ///
    pub const DEG180: Angle = Angle(PI);
    /// Angle that corresponds to 270 degree angle.
    ///
    pub const DEG270: Angle = Angle(3.0 * FRAC_PI_2);
    /// Angle that corresponds to full turn.
    ///
    pub const DEG360: Angle = Angle(TAU);

    /// Initializes angle from value in radians.
    ///
    pub const fn from_radians(radians: f32) -> Angle {
        Angle(radians)
    }
    /// Initializes angle from value in degrees.
    ///
    pub fn from_degrees(degrees: f32) -> Angle {
        Angle(degrees.to_radians())
    }

    /// Returns angle value in radians.
    ///
    pub fn radians(&self) -> f32 {
        self.0
    }
    /// Returns angle value in degrees.
    ///
    pub fn degrees(&self) -> f32 {
        self.0.to_degrees()
    }

    /// Returns equal angle in [0°; 360°) range.
    ///
    /// Angles that are not finite are normalized to zero.
    ///
    pub fn normalize(self) -> Angle {
        if !self.0.is_finite() {
            return Angle::ZERO;
        }
        let radians = self.0.rem_euclid(TAU);
        // `rem_euclid` can round up to `TAU` for tiny negative values.
        Angle(if radians >= TAU { 0.0 } else { radians })
    }
    /// Returns equal angle in [-180°; 180°) range.
    ///
    /// Angles that are not finite are normalized to zero.
    ///
    pub fn normalize_signed(self) -> Angle {
        let radians = self.normalize().0;
        Angle(if radians >= PI { radians - TAU } else { radians })
    }

    /// Computes sine of an angle.
    ///
    pub fn sin(&self) -> f32 {
        self.0.sin()
    }
    /// Computes cosine of an angle.
    ///
    pub fn cos(&self) -> f32 {
        self.0.cos()
    }
    /// Simultaneously computes sine and cosine of an angle.
    ///
    pub fn sin_cos(&self) -> (f32, f32) {
        self.0.sin_cos()
    }
}
impl Neg for Angle {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Angle(-self.0)
    }
}
/// Implements arithmetic operations for [`Angle`].
///
macro_rules! impl_angle_operations {
    ($(($trait:ident, $method:ident, $assign_trait:ident, $assign_method:ident, $rhs:ty, $op:tt, $value:tt),)+) => {$(
        impl $trait<$rhs> for Angle {
            type Output = Self;

            fn $method(self, rhs: $rhs) -> Self::Output {
                Angle(self.0 $op impl_angle_operations!(@value rhs, $value))
            }
        }
        impl $assign_trait<$rhs> for Angle {
            fn $assign_method(&mut self, rhs: $rhs) {
                *self = *self $op rhs;
            }
        }
    )+};
    (@value $rhs:ident, angle) => { $rhs.0 };
    (@value $rhs:ident, scalar) => { $rhs };
}
impl_angle_operations!(
    (Add, add, AddAssign, add_assign, Angle, +, angle),
    (Sub, sub, SubAssign, sub_assign, Angle, -, angle),
    (Mul, mul, MulAssign, mul_assign, f32, *, scalar),
    (Div, div, DivAssign, div_assign, f32, /, scalar),
);
impl PartialEq for Angle {
    fn eq(&self, other: &Self) -> bool {
        almost_equal(self.0, other.0)
    }
}

/// [`Color`] struct represents RGBA model of color.
///
/// # Examples
/// ```rust
/// # use ggsdl::mathcore::Color;
/// let color: Color = Color { r: 1, g: 2, b: 3, a: 4 };
/// assert_eq!(color.with_alpha(255), Color::from_rgba(1, 2, 3, 255));
/// assert_eq!(Color::RED, Color { r: 255, g: 0, b: 0, a: 255 });
/// ```
///
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    /// Red component of color.
    ///
    pub r: u8,
    /// Green component of color.
    ///
    pub g: u8,
    /// Blue component of color.
    ///
    pub b: u8,
    /// Alpha channel value of color.
    ///
    pub a: u8,
}
impl Color {
    /// Fully transparent black.
    ///
    pub const TRANSPARENT: Self = Color::from_rgba(0, 0, 0, 0);
    /// Color that corresponds to white.
    ///
    pub const WHITE: Self = Color::from_rgba(255, 255, 255, 255);
    /// Color that corresponds to black.
    ///
    pub const BLACK: Self = Color::from_rgba(0, 0, 0, 255);
    /// Color that corresponds to red.
    ///
    pub const RED: Self = Color::from_rgba(255, 0, 0, 255);
    /// Color that corresponds to green.
    ///
    pub const GREEN: Self = Color::from_rgba(0, 255, 0, 255);
    /// Color that corresponds to blue.
    ///
    pub const BLUE: Self = Color::from_rgba(0, 0, 255, 255);
    /// Color that corresponds to yellow.
    ///
    pub const YELLOW: Self = Color::from_rgba(255, 255, 0, 255);
    /// Color that corresponds to cyan.
    ///
    pub const CYAN: Self = Color::from_rgba(0, 255, 255, 255);
    /// Color that corresponds to magenta.
    ///
    pub const MAGENTA: Self = Color::from_rgba(255, 0, 255, 255);

    /// Initializes `Color` from RGBA model.
    ///
    pub const fn from_rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Color { r, g, b, a }
    }
    /// Initializes color performing HSV to RGB conversion.
    ///
    /// Hue is normalized, `s` and `v` are clamped to [0.0, 1.0] range.
    ///
    /// # Examples
    /// ```rust
    /// # use ggsdl::mathcore::{Color, Angle};
    /// assert_eq!(Color::from_hsva(Angle::from_degrees(0.0), 1.0, 1.0, 255), Color::RED);
    /// assert_eq!(Color::from_hsva(Angle::from_degrees(480.0), 1.0, 1.0, 255), Color::GREEN);
    /// assert_eq!(Color::from_hsva(Angle::from_degrees(240.0), 1.0, 1.0, 255), Color::BLUE);
    /// assert_eq!(Color::from_hsva(Angle::ZERO, 0.0, 1.0, 255), Color::WHITE);
    /// ```
    ///
    pub fn from_hsva(h: Angle, s: f32, v: f32, a: u8) -> Self {
        let (s, v): (f32, f32) = (s.clamp(0.0, 1.0), v.clamp(0.0, 1.0));
        let hue: f32 = h.normalize().degrees() / 60.0;

        let c: f32 = s * v;
        let x: f32 = c * (1.0 - (hue % 2.0 - 1.0).abs());
        let m: f32 = v - c;

        let (r, g, b): (f32, f32, f32) = match hue as u8 {
            0 => (c, x, 0.0),
            1 => (x, c, 0.0),
            2 => (0.0, c, x),
            3 => (0.0, x, c),
            4 => (x, 0.0, c),
            _ => (c, 0.0, x),
        };
        let channel = |value: f32| (255.0 * (value + m)).round() as u8;
        Color::from_rgba(channel(r), channel(g), channel(b), a)
    }

    /// Returns same color with different alpha channel.
    ///
    pub const fn with_alpha(self, a: u8) -> Self {
        Color { a, ..self }
    }
    /// Returns tuple of red, green, blue and alpha values.
    ///
    pub fn to_rgba(self) -> (u8, u8, u8, u8) {
        (self.r, self.g, self.b, self.a)
    }

    // All functions that are providing gate between `ggsdl` and native code extend their API to `crate` visibility.
    /// Returns native representation of color.
    ///
    pub(crate) fn to_native(self) -> SDL_Color {
        SDL_Color {
            r: self.r,
            g: self.g,
            b: self.b,
            a: self.a,
        }
    }
    // All functions that are providing gate between `ggsdl` and native code extend their API to `crate` visibility.
    /// Converts native color to [`Color`].
    ///
    pub(crate) fn from_native(color: SDL_Color) -> Color {
        Color::from_rgba(color.r, color.g, color.b, color.a)
    }
}
