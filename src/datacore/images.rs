//! `datacore::images` submodule supplies instruments that help in work with image data.
//!
//! This submodule provides [`PixelFormat`] that lists native pixel formats,
//! [`Palette`] for indexed formats and [`Surface`] - image that lives in RAM.
//!
//! Surfaces are loaded with SDL3_image if it is available (PNG, JPG and many others),
//! otherwise only BMP files can be loaded.
//!

use crate::{
    error::{Error, Result},
    mathcore::{shapes::RectInt, Color},
    nativecore::{
        ffi::{SDL_Color, SDL_Palette, SDL_Surface},
        handles::{released, Handle, PaletteKind, SurfaceKind},
        library::{native, native_ok, Sdl},
    },
};
use std::{
    ffi::{c_int, CString},
    fmt,
    path::Path,
    ptr::null,
    sync::Arc,
};

/// [`pixel_formats`] macro declares [`PixelFormat`] enum together with its native conversion.
///
macro_rules! pixel_formats {
    ($($(#[$attribute:meta])* $name:ident = $value:literal,)+) => {
        /// [`PixelFormat`] enum lists formats of color encoding that `ggsdl` recognises.
        ///
        /// Discriminants are native values, so they can be passed to SDL as is.
        ///
        #[allow(clippy::upper_case_acronyms)]
        #[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
        pub enum PixelFormat {
            $(
                $(#[$attribute])*
                $name = $value,
            )+
        }
        impl PixelFormat {
            // All functions that are providing gate between `ggsdl` and native code extend their API to `crate` visibility.
            /// Converts native pixel format to [`PixelFormat`].
            ///
            /// If format is not recognised by this library, `None` is returned.
            ///
            pub(crate) fn from_native(format: u32) -> Option<PixelFormat> {
                match format {
                    $($value => Some(PixelFormat::$name),)+
                    _ => None,
                }
            }
        }
    };
}
pixel_formats!(
    /// 8 bit indexed format (requires [`Palette`]).
    ///
    INDEX8 = 0x1300_0801,

    /// RGB332 color format.
    ///
    RGB332 = 0x1411_0801,
    /// XRGB4444 color format.
    ///
    XRGB4444 = 0x1512_0c02,
    /// XBGR4444 color format.
    ///
    XBGR4444 = 0x1552_0c02,
    /// XRGB1555 color format.
    ///
    XRGB1555 = 0x1513_0f02,
    /// XBGR1555 color format.
    ///
    XBGR1555 = 0x1553_0f02,
    /// RGB565 color format.
    ///
    RGB565 = 0x1515_1002,
    /// BGR565 color format.
    ///
    BGR565 = 0x1555_1002,

    /// ARGB4444 color format.
    ///
    ARGB4444 = 0x1532_1002,
    /// RGBA4444 color format.
    ///
    RGBA4444 = 0x1542_1002,
    /// ABGR4444 color format.
    ///
    ABGR4444 = 0x1572_1002,
    /// BGRA4444 color format.
    ///
    BGRA4444 = 0x1582_1002,
    /// ARGB1555 color format.
    ///
    ARGB1555 = 0x1533_1002,
    /// RGBA5551 color format.
    ///
    RGBA5551 = 0x1544_1002,
    /// ABGR1555 color format.
    ///
    ABGR1555 = 0x1573_1002,
    /// BGRA5551 color format.
    ///
    BGRA5551 = 0x1584_1002,

    /// RGB24 color format.
    ///
    RGB24 = 0x1710_1803,
    /// BGR24 color format.
    ///
    BGR24 = 0x1740_1803,

    /// XRGB8888 color format.
    ///
    XRGB8888 = 0x1616_1804,
    /// RGBX8888 color format.
    ///
    RGBX8888 = 0x1626_1804,
    /// XBGR8888 color format.
    ///
    XBGR8888 = 0x1656_1804,
    /// BGRX8888 color format.
    ///
    BGRX8888 = 0x1666_1804,
    /// ARGB8888 color format.
    ///
    ARGB8888 = 0x1636_2004,
    /// RGBA8888 color format.
    ///
    RGBA8888 = 0x1646_2004,
    /// ABGR8888 color format.
    ///
    ABGR8888 = 0x1676_2004,
    /// BGRA8888 color format.
    ///
    BGRA8888 = 0x1686_2004,

    /// XRGB2101010 color format.
    ///
    XRGB2101010 = 0x1617_2004,
    /// ARGB2101010 color format.
    ///
    ARGB2101010 = 0x1637_2004,
);
#[cfg(target_endian = "little")]
impl PixelFormat {
    /// 32 bit RGBA format with bytewise layout.
    ///
    pub const RGBA32: Self = Self::ABGR8888;
    /// 32 bit ARGB format with bytewise layout.
    ///
    pub const ARGB32: Self = Self::BGRA8888;
    /// 32 bit BGRA format with bytewise layout.
    ///
    pub const BGRA32: Self = Self::ARGB8888;
    /// 32 bit ABGR format with bytewise layout.
    ///
    pub const ABGR32: Self = Self::RGBA8888;
}
#[cfg(target_endian = "big")]
impl PixelFormat {
    /// 32 bit RGBA format with bytewise layout.
    ///
    pub const RGBA32: Self = Self::RGBA8888;
    /// 32 bit ARGB format with bytewise layout.
    ///
    pub const ARGB32: Self = Self::ARGB8888;
    /// 32 bit BGRA format with bytewise layout.
    ///
    pub const BGRA32: Self = Self::BGRA8888;
    /// 32 bit ABGR format with bytewise layout.
    ///
    pub const ABGR32: Self = Self::ABGR8888;
}
impl PixelFormat {
    // All functions that are providing gate between `ggsdl` and native code extend their API to `crate` visibility.
    /// Returns native representation of this enum.
    ///
    pub(crate) fn to_native(self) -> u32 {
        self as u32
    }

    /// Returns how much bytes are required for one pixel in chosen format.
    ///
    pub fn pixel_byte_size(&self) -> usize {
        (self.to_native() & 0xFF) as usize
    }
    /// Returns whether format is indexed (pixels refer to [`Palette`] entries).
    ///
    pub fn is_indexed(&self) -> bool {
        matches!(self, Self::INDEX8)
    }
    /// Returns whether pixel format supports alpha channel or not.
    ///
    /// Only formats with letter A support alpha channels.
    ///
    pub fn supports_alpha(&self) -> bool {
        matches!(
            self,
            Self::ARGB4444
                | Self::ARGB1555
                | Self::ARGB8888
                | Self::ARGB2101010
                | Self::ABGR4444
                | Self::ABGR1555
                | Self::ABGR8888
                | Self::BGRA4444
                | Self::BGRA5551
                | Self::BGRA8888
                | Self::RGBA4444
                | Self::RGBA5551
                | Self::RGBA8888
        )
    }
}

/// [`Palette`] struct is a table of colors for indexed surfaces.
///
pub struct Palette {
    /// Native palette.
    ///
    handle: Handle<PaletteKind>,
}
impl Palette {
    /// Creates palette with `count` colors (every color is white initially).
    ///
    pub fn new(sdl: &Arc<Sdl>, count: usize) -> Result<Palette> {
        let count = c_int::try_from(count)
            .ok()
            .filter(|count| *count > 0)
            .ok_or_else(|| Error::usage("palette should have from 1 to `i32::MAX` colors"))?;
        let raw = native!(sdl, SDL_CreatePalette(count))?;
        Ok(Palette {
            handle: Handle::owned(sdl, "SDL_CreatePalette", raw)?,
        })
    }
    /// Returns native header of the palette.
    ///
    fn header(&self) -> &SDL_Palette {
        // SAFETY: owned palette is released only on drop.
        unsafe { &*self.handle.as_ptr() }
    }

    /// Returns amount of colors in palette.
    ///
    pub fn len(&self) -> usize {
        self.header().ncolors.max(0) as usize
    }
    /// Returns whether palette has no colors.
    ///
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
    /// Returns copy of palette colors.
    ///
    pub fn colors(&self) -> Vec<Color> {
        palette_colors(self.header())
    }
    /// Replaces colors starting from `first` index.
    ///
    /// Colors that do not fit into palette are a usage error.
    ///
    pub fn set_colors(&mut self, first: usize, colors: &[Color]) -> Result<()> {
        if first + colors.len() > self.len() {
            return Err(Error::usage(format!(
                "{} colors starting from {first} do not fit into palette of {} colors",
                colors.len(),
                self.len()
            )));
        }
        let colors: Vec<SDL_Color> = colors.iter().map(|color| color.to_native()).collect();
        native_ok!(
            self.handle.sdl(),
            SDL_SetPaletteColors(
                self.handle.as_ptr(),
                colors.as_ptr(),
                first as c_int,
                colors.len() as c_int
            )
        )
    }
}
impl fmt::Debug for Palette {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Palette")
            .field("handle", &self.handle)
            .field("len", &self.len())
            .finish()
    }
}
/// Copies colors from native palette.
///
fn palette_colors(palette: &SDL_Palette) -> Vec<Color> {
    if palette.colors.is_null() {
        return Vec::new();
    }
    // SAFETY: native palette stores `ncolors` colors.
    unsafe { std::slice::from_raw_parts(palette.colors, palette.ncolors.max(0) as usize) }
        .iter()
        .map(|color| Color::from_native(*color))
        .collect()
}

/// [`Surface`] struct represents image that is stored in RAM.
///
/// Surfaces are used as window icons, cursors, rendered text and as a source for textures.
///
/// # Example
/// ```rust,no_run
/// # use ggsdl::{Engine, datacore::images::{PixelFormat, Surface}, mathcore::Color};
/// let engine: Engine = Engine::load()?;
/// let mut surface: Surface = Surface::new(engine.sdl(), 64, 64, PixelFormat::RGBA32)?;
/// surface.fill(None, Color::MAGENTA)?;
/// surface.save_bmp("icon.bmp")?;
/// # Ok::<(), ggsdl::Error>(())
/// ```
///
pub struct Surface {
    /// Native surface.
    ///
    handle: Handle<SurfaceKind>,
}
impl Surface {
    // All functions that are providing gate between `ggsdl` and native code extend their API to `crate` visibility.
    /// Takes ownership of surface that was returned by `function`.
    ///
    pub(crate) fn from_raw(
        sdl: &Arc<Sdl>,
        function: &'static str,
        raw: *mut SDL_Surface,
    ) -> Result<Surface> {
        Ok(Surface {
            handle: Handle::owned(sdl, function, raw)?,
        })
    }
    // All functions that are providing gate between `ggsdl` and native code extend their API to `crate` visibility.
    /// Returns native pointer.
    ///
    pub(crate) fn raw(&self) -> Result<*mut SDL_Surface> {
        self.handle
            .get()
            .map(|raw| raw.as_ptr())
            .ok_or_else(|| released("surface"))
    }
    /// Returns native header of the surface.
    ///
    fn header(&self) -> &SDL_Surface {
        // SAFETY: owned surface is released only on drop.
        unsafe { &*self.handle.as_ptr() }
    }

    /// Creates surface of given size, filled with zeroes.
    ///
    pub fn new(sdl: &Arc<Sdl>, width: u32, height: u32, format: PixelFormat) -> Result<Surface> {
        let (width, height) = dimensions(width, height)?;
        let raw = native!(sdl, SDL_CreateSurface(width, height, format.to_native()))?;
        Surface::from_raw(sdl, "SDL_CreateSurface", raw)
    }
    /// Loads surface from file.
    ///
    /// SDL3_image is used if it was loaded, otherwise only BMP format is supported.
    ///
    pub fn load(sdl: &Arc<Sdl>, path: impl AsRef<Path>) -> Result<Surface> {
        let path = path_to_native(path.as_ref())?;
        if sdl.has_image() {
            let raw = native!(sdl, IMG_Load(path.as_ptr()))?;
            Surface::from_raw(sdl, "IMG_Load", raw)
        } else {
            log::debug!("SDL3_image is not loaded, {path:?} is loaded as BMP");
            let raw = native!(sdl, SDL_LoadBMP(path.as_ptr()))?;
            Surface::from_raw(sdl, "SDL_LoadBMP", raw)
        }
    }
    /// Saves surface as BMP file.
    ///
    pub fn save_bmp(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path_to_native(path.as_ref())?;
        native_ok!(self.handle.sdl(), SDL_SaveBMP(self.raw()?, path.as_ptr()))
    }
    /// Saves surface as PNG file (requires SDL3_image).
    ///
    pub fn save_png(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path_to_native(path.as_ref())?;
        native_ok!(self.handle.sdl(), IMG_SavePNG(self.raw()?, path.as_ptr()))
    }

    /// Returns width in pixels.
    ///
    pub fn width(&self) -> u32 {
        self.header().w.max(0) as u32
    }
    /// Returns height in pixels.
    ///
    pub fn height(&self) -> u32 {
        self.header().h.max(0) as u32
    }
    /// Returns size in pixels.
    ///
    pub fn size(&self) -> (u32, u32) {
        (self.width(), self.height())
    }
    /// Returns length of one pixel row in bytes.
    ///
    pub fn pitch(&self) -> u32 {
        self.header().pitch.max(0) as u32
    }
    /// Returns pixel format of surface (or `None` if it is not recognised).
    ///
    pub fn pixel_format(&self) -> Option<PixelFormat> {
        PixelFormat::from_native(self.header().format.0 as u32)
    }

    /// Fills area of surface (whole surface if area is `None`) with given color.
    ///
    pub fn fill(&mut self, area: Option<RectInt>, color: Color) -> Result<()> {
        let surface = self.raw()?;
        let sdl = self.handle.sdl();
        let (r, g, b, a) = color.to_rgba();
        let pixel = native!(sdl, SDL_MapSurfaceRGBA(surface, r, g, b, a))?;
        let area = area.map(RectInt::to_native);
        let area = area.as_ref().map_or(null(), |area| area as *const _);
        native_ok!(sdl, SDL_FillSurfaceRect(surface, area, pixel))
    }
    /// Returns copy of surface palette colors (`None` if surface has no palette).
    ///
    pub fn palette_colors(&self) -> Result<Option<Vec<Color>>> {
        let palette = native!(self.handle.sdl(), SDL_GetSurfacePalette(self.raw()?))?;
        if palette.is_null() {
            return Ok(None);
        }
        // SAFETY: palette is owned by the surface, which is alive, and colors are copied immediately.
        Ok(Some(palette_colors(unsafe { &*palette })))
    }
    /// Sets palette of indexed surface.
    ///
    /// Surface keeps its own reference to palette, so palette can be dropped afterwards.
    ///
    pub fn set_palette(&mut self, palette: &Palette) -> Result<()> {
        native_ok!(
            self.handle.sdl(),
            SDL_SetSurfacePalette(self.raw()?, palette.handle.as_ptr())
        )
    }
}
impl fmt::Debug for Surface {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Surface")
            .field("handle", &self.handle)
            .field("size", &self.size())
            .field("pixel_format", &self.pixel_format())
            .finish()
    }
}

/// Converts dimensions to native ones, rejecting zero and oversized values.
///
pub(crate) fn dimensions(width: u32, height: u32) -> Result<(c_int, c_int)> {
    match (c_int::try_from(width), c_int::try_from(height)) {
        (Ok(width), Ok(height)) if width > 0 && height > 0 => Ok((width, height)),
        _ => Err(Error::usage(format!("{width}x{height} is not a valid size"))),
    }
}
/// Converts path to native string.
///
pub(crate) fn path_to_native(path: &Path) -> Result<CString> {
    Ok(CString::new(path.to_string_lossy().into_owned())?)
}
