//! `graphicscore::textures` submodule implements structs that are related to texturing.
//!
//! [`Texture`] is an image that lives in GPU memory of one [`Renderer`].
//! Textures borrow their renderer, so neither can renderer be turned back into window
//! nor can it be dropped while its textures are alive.
//!

use crate::{
    datacore::images::{dimensions, PixelFormat, Surface},
    error::Result,
    graphicscore::{
        drawing::Renderer,
        primitives::{Blendable, BlendingType, ColorModulatable},
    },
    mathcore::{vectors::Vector2, Color},
    nativecore::{
        ffi::{SDL_Renderer, SDL_Texture},
        handles::{Handle, TextureKind},
        library::{native, native_ok},
    },
};
use serde::{Deserialize, Serialize};
use std::{ffi::c_int, fmt, marker::PhantomData};

/// [`AccessType`] enum lists ways in which texture can be accessed.
///
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AccessType {
    /// Texture rarely changes.
    ///
    #[default]
    Static,
    /// Texture changes frequently and can be locked.
    ///
    Streaming,
    /// Texture can be used as render target.
    ///
    Target,
}
impl AccessType {
    // All functions that are providing gate between `ggsdl` and native code extend their API to `crate` visibility.
    /// Returns native representation of this enum.
    ///
    pub(crate) fn to_native(self) -> c_int {
        match self {
            AccessType::Static => 0,
            AccessType::Streaming => 1,
            AccessType::Target => 2,
        }
    }
}

impl Renderer {
    /// Creates texture of given format, access and size.
    ///
    pub fn create_texture(
        &self,
        format: PixelFormat,
        access: AccessType,
        width: u32,
        height: u32,
    ) -> Result<Texture<'_>> {
        let (width, height) = dimensions(width, height)?;
        let raw = native!(
            self.sdl(),
            SDL_CreateTexture(
                self.raw(),
                format.to_native(),
                access.to_native(),
                width,
                height
            )
        )?;
        Texture::new(self, "SDL_CreateTexture", raw, access, Some(format))
    }
    /// Creates static texture from surface (surface can be dropped afterwards).
    ///
    pub fn create_texture_from_surface(&self, surface: &Surface) -> Result<Texture<'_>> {
        let raw = native!(
            self.sdl(),
            SDL_CreateTextureFromSurface(self.raw(), surface.raw()?)
        )?;
        Texture::new(
            self,
            "SDL_CreateTextureFromSurface",
            raw,
            AccessType::Static,
            surface.pixel_format(),
        )
    }
}

/// [`Texture`] struct represents image that is stored in GPU memory.
///
/// # Example
/// ```rust,no_run
/// # use ggsdl::{Engine, graphicscore::{AccessType, Blendable, BlendingType, Renderer}};
/// # use ggsdl::datacore::images::PixelFormat;
/// let engine: Engine = Engine::load()?;
/// let window = engine.build_window("GGSDL", 800, 600, Default::default())?;
/// let renderer: Renderer = Renderer::from_window(window, Default::default())?;
/// let mut texture = renderer.create_texture(PixelFormat::RGBA32, AccessType::Target, 64, 64)?;
/// texture.set_blend_mode(BlendingType::Additive)?;
/// # Ok::<(), ggsdl::Error>(())
/// ```
///
pub struct Texture<'renderer> {
    /// Native texture.
    ///
    handle: Handle<TextureKind>,
    /// Renderer that created the texture.
    ///
    renderer: *mut SDL_Renderer,
    /// Access type.
    ///
    access: AccessType,
    /// Pixel format (`None` if it is not recognised).
    ///
    format: Option<PixelFormat>,

    /// Borrow of the renderer.
    ///
    _renderer: PhantomData<&'renderer Renderer>,
}
impl<'renderer> Texture<'renderer> {
    /// Takes ownership of texture that was returned by `function`.
    ///
    fn new(
        renderer: &'renderer Renderer,
        function: &'static str,
        raw: *mut SDL_Texture,
        access: AccessType,
        format: Option<PixelFormat>,
    ) -> Result<Texture<'renderer>> {
        Ok(Texture {
            handle: Handle::owned(renderer.sdl(), function, raw)?,
            renderer: renderer.raw(),
            access,
            format,

            _renderer: PhantomData,
        })
    }
    // All functions that are providing gate between `ggsdl` and native code extend their API to `crate` visibility.
    /// Returns native pointer.
    ///
    pub(crate) fn raw(&self) -> *mut SDL_Texture {
        self.handle.as_ptr()
    }
    // All functions that are providing gate between `ggsdl` and native code extend their API to `crate` visibility.
    /// Returns whether texture was created by given renderer.
    ///
    pub(crate) fn belongs_to(&self, renderer: *mut SDL_Renderer) -> bool {
        self.renderer == renderer
    }

    /// Returns size of texture in pixels.
    ///
    pub fn size(&self) -> Result<Vector2> {
        let (mut width, mut height) = (0.0, 0.0);
        native_ok!(
            self.handle.sdl(),
            SDL_GetTextureSize(self.raw(), &mut width, &mut height)
        )?;
        Ok(Vector2 {
            x: width,
            y: height,
        })
    }
    /// Returns access type of texture.
    ///
    pub fn access_type(&self) -> AccessType {
        self.access
    }
    /// Returns pixel format of texture (`None` if it is not recognised).
    ///
    pub fn pixel_format(&self) -> Option<PixelFormat> {
        self.format
    }
}
impl Blendable for Texture<'_> {
    fn set_blend_mode(&mut self, blend_mode: BlendingType) -> Result<()> {
        native_ok!(
            self.handle.sdl(),
            SDL_SetTextureBlendMode(self.raw(), blend_mode.to_native())
        )
    }
    fn blend_mode(&self) -> Result<BlendingType> {
        let mut blend_mode = 0;
        native_ok!(
            self.handle.sdl(),
            SDL_GetTextureBlendMode(self.raw(), &mut blend_mode)
        )?;
        BlendingType::from_native(blend_mode)
    }
}
impl ColorModulatable for Texture<'_> {
    fn set_color_modulation(&mut self, color: Color) -> Result<()> {
        let (r, g, b, a) = color.to_rgba();
        let sdl = self.handle.sdl();
        native_ok!(sdl, SDL_SetTextureColorMod(self.raw(), r, g, b))?;
        native_ok!(sdl, SDL_SetTextureAlphaMod(self.raw(), a))
    }
    fn color_modulation(&self) -> Result<Color> {
        let sdl = self.handle.sdl();
        let mut color = Color::WHITE;
        native_ok!(
            sdl,
            SDL_GetTextureColorMod(self.raw(), &mut color.r, &mut color.g, &mut color.b)
        )?;
        native_ok!(sdl, SDL_GetTextureAlphaMod(self.raw(), &mut color.a))?;
        Ok(color)
    }
}
impl fmt::Debug for Texture<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Texture")
            .field("handle", &self.handle)
            .field("access", &self.access)
            .field("format", &self.format)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::AccessType;
    use crate::{
        datacore::images::{PixelFormat, Surface},
        graphicscore::{
            drawing::Renderer,
            primitives::{Blendable, BlendingType, ColorModulatable},
        },
        mathcore::{vectors::Vector2, Color},
        nativecore::testing,
        Engine,
    };

    fn renderer() -> Renderer {
        let engine = Engine::from_sdl(testing::fake_sdl());
        let window = engine
            .build_window("GGSDL", 800, 600, Default::default())
            .expect("Fake window is created");
        Renderer::from_window(window, Default::default()).expect("Fake renderer is created")
    }

    #[test]
    fn creation() {
        let renderer = renderer();
        let texture = renderer
            .create_texture(PixelFormat::RGBA32, AccessType::Target, 64, 32)
            .expect("Texture is created");
        assert_eq!(texture.size().expect("Size is known"), Vector2 { x: 64.0, y: 32.0 });
        assert_eq!(texture.access_type(), AccessType::Target);
        assert_eq!(texture.pixel_format(), Some(PixelFormat::RGBA32));

        let surface = Surface::new(renderer.sdl(), 16, 16, PixelFormat::XRGB8888)
            .expect("Surface is created");
        let from_surface = renderer
            .create_texture_from_surface(&surface)
            .expect("Texture is created");
        drop(surface);
        assert_eq!(from_surface.size().expect("Size is known"), Vector2 { x: 16.0, y: 16.0 });
        assert_eq!(from_surface.access_type(), AccessType::Static);

        assert!(renderer
            .create_texture(PixelFormat::RGBA32, AccessType::Static, 0, 32)
            .expect_err("Empty texture")
            .is_usage());
        drop((texture, from_surface));
        assert_eq!(testing::calls("SDL_DestroyTexture"), 2);
    }

    #[test]
    fn blending_and_modulation() {
        let renderer = renderer();
        let mut texture = renderer
            .create_texture(PixelFormat::RGBA32, AccessType::Static, 8, 8)
            .expect("Texture is created");
        assert_eq!(texture.blend_mode().expect("Mode is known"), BlendingType::Alpha);
        texture
            .set_blend_mode(BlendingType::Additive)
            .expect("Mode is changed");
        assert_eq!(texture.blend_mode().expect("Mode is known"), BlendingType::Additive);

        let color = Color::from_rgba(10, 20, 30, 40);
        texture
            .set_color_modulation(color)
            .expect("Modulation is changed");
        assert_eq!(texture.color_modulation().expect("Modulation is known"), color);

        testing::fail("SDL_CreateTexture");
        assert!(renderer
            .create_texture(PixelFormat::RGBA32, AccessType::Static, 8, 8)
            .expect_err("Creation fails")
            .is_native());
    }
}
