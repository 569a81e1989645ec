//! `graphicscore::primitives` hidden submodule supplies enums and traits that are
//! shared by renderer and textures.
//!

use crate::{
    error::{Error, Result},
    mathcore::Color,
};
use serde::{Deserialize, Serialize};
use std::ffi::c_int;

/// [`BlendingType`] enum lists blending modes.
///
/// Blending is applied whenever blendable objects are combined: when primitives are drawn
/// with renderer or when textures are copied to render target.
///
/// Formulas below use `dst` for destination color and `src` for source color,
/// with every component mapped to [0; 1].
///
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BlendingType {
    /// No blending: `dst = src`.
    ///
    None,
    /// Alpha blending: `dst.rgb = src.rgb * src.a + dst.rgb * (1 - src.a)`,
    /// `dst.a = src.a + dst.a * (1 - src.a)`.
    ///
    Alpha,
    /// Alpha blending of premultiplied colors: `dst.rgb = src.rgb + dst.rgb * (1 - src.a)`.
    ///
    PremultipliedAlpha,
    /// Additive blending: `dst.rgb = src.rgb * src.a + dst.rgb`, `dst.a = dst.a`.
    ///
    /// Pixels only get brighter, which suits bright particles.
    ///
    Additive,
    /// Additive blending of premultiplied colors: `dst.rgb = src.rgb + dst.rgb`.
    ///
    PremultipliedAdditive,
    /// Modulative blending: `dst.rgb = src.rgb * dst.rgb`, `dst.a = dst.a`.
    ///
    /// Pixels only get darker, which suits shadows.
    ///
    Modulative,
    /// Multiplicative blending: `dst.rgb = src.rgb * dst.rgb + dst.rgb * (1 - src.a)`.
    ///
    Multiplicative,
}
impl BlendingType {
    // All functions that are providing gate between `ggsdl` and native code extend their API to `crate` visibility.
    /// Converts native blend mode to [`BlendingType`].
    ///
    /// Custom native blend modes are reported as usage errors, since `ggsdl` never sets them.
    ///
    pub(crate) fn from_native(blend_mode: u32) -> Result<BlendingType> {
        Ok(match blend_mode {
            0x00 => BlendingType::None,
            0x01 => BlendingType::Alpha,
            0x10 => BlendingType::PremultipliedAlpha,
            0x02 => BlendingType::Additive,
            0x20 => BlendingType::PremultipliedAdditive,
            0x04 => BlendingType::Modulative,
            0x08 => BlendingType::Multiplicative,
            other => {
                return Err(Error::usage(format!(
                    "custom blend mode {other:#x} is not supported"
                )))
            }
        })
    }
    // All functions that are providing gate between `ggsdl` and native code extend their API to `crate` visibility.
    /// Returns native representation of this enum.
    ///
    pub(crate) fn to_native(self) -> u32 {
        match self {
            BlendingType::None => 0x00,
            BlendingType::Alpha => 0x01,
            BlendingType::PremultipliedAlpha => 0x10,
            BlendingType::Additive => 0x02,
            BlendingType::PremultipliedAdditive => 0x20,
            BlendingType::Modulative => 0x04,
            BlendingType::Multiplicative => 0x08,
        }
    }
}

/// [`Blendable`] trait is implemented on structs that support blending.
///
pub trait Blendable {
    /// Sets new blending mode for blendable object.
    ///
    fn set_blend_mode(&mut self, blend_mode: BlendingType) -> Result<()>;
    /// Returns blending type that is currently applied on this object.
    ///
    fn blend_mode(&self) -> Result<BlendingType>;
}

/// [`ColorModulatable`] trait is implemented on structs that support color modulation.
///
/// Color modulation is similar to blending, but it is applied only to source pixel color (`src = src * (color / 255)`).
///
pub trait ColorModulatable {
    /// Sets new color modulation for modulatable objects.
    ///
    fn set_color_modulation(&mut self, color: Color) -> Result<()>;
    /// Returns color modulation that is currently applied on this object.
    ///
    fn color_modulation(&self) -> Result<Color>;
}

/// [`FlipMode`] enum lists mirroring that can be applied when texture is copied.
///
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FlipMode {
    /// Texture is not mirrored.
    ///
    #[default]
    None,
    /// Texture is mirrored horizontally.
    ///
    Horizontal,
    /// Texture is mirrored vertically.
    ///
    Vertical,
    /// Texture is mirrored both horizontally and vertically.
    ///
    Both,
}
impl FlipMode {
    // All functions that are providing gate between `ggsdl` and native code extend their API to `crate` visibility.
    /// Returns native representation of this enum.
    ///
    pub(crate) fn to_native(self) -> c_int {
        match self {
            FlipMode::None => 0,
            FlipMode::Horizontal => 1,
            FlipMode::Vertical => 2,
            FlipMode::Both => 3,
        }
    }
}

/// [`LogicalPresentation`] enum lists ways of fitting logical render size into output.
///
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LogicalPresentation {
    /// Logical size is not used.
    ///
    #[default]
    Disabled,
    /// Rendered content is stretched to the output.
    ///
    Stretch,
    /// Rendered content fits into output, keeping aspect ratio (black bars are added).
    ///
    Letterbox,
    /// Rendered content fills output, keeping aspect ratio (parts of it are cut).
    ///
    Overscan,
    /// Rendered content is scaled by integer factor.
    ///
    IntegerScale,
}
impl LogicalPresentation {
    // All functions that are providing gate between `ggsdl` and native code extend their API to `crate` visibility.
    /// Returns native representation of this enum.
    ///
    pub(crate) fn to_native(self) -> c_int {
        match self {
            LogicalPresentation::Disabled => 0,
            LogicalPresentation::Stretch => 1,
            LogicalPresentation::Letterbox => 2,
            LogicalPresentation::Overscan => 3,
            LogicalPresentation::IntegerScale => 4,
        }
    }
}

