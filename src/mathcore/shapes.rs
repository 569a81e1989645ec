//! `mathcore::shapes` submodule implements axis-aligned rectangles that are used by rendering and
//! by display geometry.
//!
//! Rectangles are boundary-inclusive: a point that lies on the edge is contained by rectangle.
//!

use crate::{
    mathcore::{
        floats::almost_equal,
        vectors::{Vector2, Vector2Int},
    },
    nativecore::ffi::{SDL_FRect, SDL_Rect},
};
use serde::{Deserialize, Serialize};

/// [`impl_rect`] macro implements all common associated functions and methods on rectangles.
///
macro_rules! impl_rect {
    ($struct:ident, $vector:ident, $type:ty, $zero:literal) => {
        impl $struct {
            /// Initializes rectangle from its left top corner and size.
            ///
            pub const fn new(x: $type, y: $type, w: $type, h: $type) -> Self {
                $struct { x, y, w, h }
            }
            /// Initializes the smallest rectangle that contains both points.
            ///
            pub fn from_corners(a: $vector, b: $vector) -> Self {
                let (min, max) = (a.min(b), a.max(b));
                $struct {
                    x: min.x,
                    y: min.y,
                    w: max.x - min.x,
                    h: max.y - min.y,
                }
            }

            /// Returns left top corner of rectangle.
            ///
            pub fn origin(&self) -> $vector {
                $vector { x: self.x, y: self.y }
            }
            /// Returns size of rectangle as vector.
            ///
            pub fn size(&self) -> $vector {
                $vector { x: self.w, y: self.h }
            }
            /// Returns right edge.
            ///
            pub fn right(&self) -> $type {
                self.x + self.w
            }
            /// Returns bottom edge.
            ///
            pub fn bottom(&self) -> $type {
                self.y + self.h
            }

            /// Returns whether rectangle has no area.
            ///
            pub fn is_empty(&self) -> bool {
                self.w <= $zero || self.h <= $zero
            }

            /// Returns whether point lies inside of rectangle or on its boundary.
            ///
            pub fn contains_point(&self, point: $vector) -> bool {
                (self.x..=self.right()).contains(&point.x) && (self.y..=self.bottom()).contains(&point.y)
            }
            /// Returns whether other rectangle lies inside of this one (touching boundary counts).
            ///
            pub fn contains_rect(&self, other: &Self) -> bool {
                other.x >= self.x
                    && other.y >= self.y
                    && other.right() <= self.right()
                    && other.bottom() <= self.bottom()
            }
            /// Returns whether rectangles share any point (touching edges count).
            ///
            pub fn intersects(&self, other: &Self) -> bool {
                self.x <= other.right()
                    && other.x <= self.right()
                    && self.y <= other.bottom()
                    && other.y <= self.bottom()
            }

            /// Returns the smallest rectangle that contains both rectangles.
            ///
            pub fn union(&self, other: &Self) -> Self {
                let (x, y) = (self.x.min(other.x), self.y.min(other.y));
                $struct {
                    x,
                    y,
                    w: self.right().max(other.right()) - x,
                    h: self.bottom().max(other.bottom()) - y,
                }
            }
            /// Returns common part of rectangles or `None` if they do not intersect.
            ///
            pub fn intersection(&self, other: &Self) -> Option<Self> {
                if !self.intersects(other) {
                    return None;
                }
                let (x, y) = (self.x.max(other.x), self.y.max(other.y));
                Some($struct {
                    x,
                    y,
                    w: self.right().min(other.right()) - x,
                    h: self.bottom().min(other.bottom()) - y,
                })
            }
        }
    };
}

/// [`Rect`] struct represents axis-aligned rectangle with `f32` coordinates.
///
/// # Example
/// ```rust
/// # use ggsdl::mathcore::shapes::Rect;
/// let a: Rect = Rect::new(0.0, 0.0, 10.0, 10.0);
/// let b: Rect = Rect::new(20.0, 5.0, 5.0, 5.0);
/// let union: Rect = a.union(&b);
/// assert!(union.contains_rect(&a) && union.contains_rect(&b));
/// assert_eq!(a.intersection(&b), None);
/// ```
///
#[derive(Copy, Clone, Debug, Default, Serialize, Deserialize)]
pub struct Rect {
    /// Left edge.
    ///
    pub x: f32,
    /// Top edge.
    ///
    pub y: f32,
    /// Width.
    ///
    pub w: f32,
    /// Height.
    ///
    pub h: f32,
}
impl_rect!(Rect, Vector2, f32, 0.0);
impl Rect {
    /// Returns center of rectangle.
    ///
    pub fn center(&self) -> Vector2 {
        Vector2 {
            x: self.x + self.w / 2.0,
            y: self.y + self.h / 2.0,
        }
    }

    // All functions that are providing gate between `ggsdl` and native code extend their API to `crate` visibility.
    /// Returns native representation of rectangle.
    ///
    pub(crate) fn to_native(self) -> SDL_FRect {
        SDL_FRect {
            x: self.x,
            y: self.y,
            w: self.w,
            h: self.h,
        }
    }
}
impl PartialEq for Rect {
    fn eq(&self, other: &Self) -> bool {
        almost_equal(self.x, other.x)
            && almost_equal(self.y, other.y)
            && almost_equal(self.w, other.w)
            && almost_equal(self.h, other.h)
    }
}
impl From<RectInt> for Rect {
    fn from(rect: RectInt) -> Self {
        Rect::new(rect.x as f32, rect.y as f32, rect.w as f32, rect.h as f32)
    }
}

/// [`RectInt`] struct represents axis-aligned rectangle with `i32` coordinates
/// (display bounds, surface regions).
///
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RectInt {
    /// Left edge.
    ///
    pub x: i32,
    /// Top edge.
    ///
    pub y: i32,
    /// Width.
    ///
    pub w: i32,
    /// Height.
    ///
    pub h: i32,
}
impl_rect!(RectInt, Vector2Int, i32, 0);
impl RectInt {
    // All functions that are providing gate between `ggsdl` and native code extend their API to `crate` visibility.
    /// Returns native representation of rectangle.
    ///
    pub(crate) fn to_native(self) -> SDL_Rect {
        SDL_Rect {
            x: self.x,
            y: self.y,
            w: self.w,
            h: self.h,
        }
    }
    // All functions that are providing gate between `ggsdl` and native code extend their API to `crate` visibility.
    /// Converts native rectangle to [`RectInt`].
    ///
    pub(crate) fn from_native(rect: SDL_Rect) -> RectInt {
        RectInt::new(rect.x, rect.y, rect.w, rect.h)
    }
}
