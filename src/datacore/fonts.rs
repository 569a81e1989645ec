//! `datacore::fonts` submodule implements work with truetype fonts through SDL3_ttf.
//!
//! [`FontContext`] keeps SDL3_ttf initialized, and every [`Font`] borrows the context
//! it was opened with, so fonts cannot outlive the library.
//!

use crate::{
    datacore::images::{path_to_native, Surface},
    error::{Error, Result},
    mathcore::Color,
    nativecore::{
        handles::{FontKind, Handle},
        library::{native, native_ok, Sdl},
    },
    Engine,
};
use bitflags::bitflags;
use std::{
    ffi::{c_int, CString},
    fmt,
    marker::PhantomData,
    path::Path,
    sync::Arc,
};

bitflags!(
    /// [`FontStyle`] bitflag struct lists truetype font styles.
    ///
    #[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
    pub struct FontStyle : u32 {
        /// Normal font.
        ///
        const NORMAL = 0;
        /// Bold font.
        ///
        const BOLD = 1 << 0;
        /// Italic font.
        ///
        const ITALIC = 1 << 1;
        /// Underline font.
        ///
        const UNDERLINE = 1 << 2;
        /// Strikethrough font.
        ///
        const STRIKETHROUGH = 1 << 3;
    }
);

/// [`FontContext`] struct is a handler of initialized SDL3_ttf.
///
/// SDL3_ttf counts initializations, so several contexts may coexist;
/// library is shut down when the last one is dropped.
///
/// # Example
/// ```rust,no_run
/// # use ggsdl::{Engine, datacore::fonts::{Font, FontContext}, mathcore::Color};
/// let engine: Engine = Engine::load()?;
/// let fonts: FontContext = engine.fonts()?;
/// let font: Font = fonts.open("font.ttf", 24.0)?;
/// let text = font.render_blended("Hello!", Color::WHITE)?;
/// # Ok::<(), ggsdl::Error>(())
/// ```
///
pub struct FontContext {
    /// Native library.
    ///
    sdl: Arc<Sdl>,
}
impl FontContext {
    /// Initializes SDL3_ttf.
    ///
    pub fn new(sdl: &Arc<Sdl>) -> Result<FontContext> {
        native_ok!(sdl, TTF_Init())?;
        log::debug!("SDL3_ttf was initialized");
        Ok(FontContext {
            sdl: Arc::clone(sdl),
        })
    }

    /// Opens font file with given point size.
    ///
    pub fn open(&self, path: impl AsRef<Path>, point_size: f32) -> Result<Font<'_>> {
        check_point_size(point_size)?;
        let path = path_to_native(path.as_ref())?;
        let raw = native!(self.sdl, TTF_OpenFont(path.as_ptr(), point_size))?;
        Ok(Font {
            handle: Handle::owned(&self.sdl, "TTF_OpenFont", raw)?,
            _context: PhantomData,
        })
    }
}
impl Drop for FontContext {
    fn drop(&mut self) {
        match native!(self.sdl, TTF_Quit()) {
            Ok(()) => log::debug!("SDL3_ttf was shut down"),
            Err(error) => log::warn!("SDL3_ttf could not be shut down: {error}"),
        }
    }
}
impl fmt::Debug for FontContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FontContext").finish_non_exhaustive()
    }
}

impl Engine {
    /// Initializes SDL3_ttf (fails with [`Error::MissingSymbol`] if it was not loaded).
    ///
    pub fn fonts(&self) -> Result<FontContext> {
        FontContext::new(self.sdl())
    }
}

/// [`Font`] struct represents opened truetype font.
///
pub struct Font<'ctx> {
    /// Native font.
    ///
    handle: Handle<FontKind>,
    /// Context that keeps library initialized.
    ///
    _context: PhantomData<&'ctx FontContext>,
}
impl Font<'_> {
    /// Returns point size of the font.
    ///
    pub fn size(&self) -> Result<f32> {
        native!(self.handle.sdl(), TTF_GetFontSize(self.handle.as_ptr()))
    }
    /// Changes point size of the font.
    ///
    pub fn set_size(&mut self, point_size: f32) -> Result<()> {
        check_point_size(point_size)?;
        native_ok!(
            self.handle.sdl(),
            TTF_SetFontSize(self.handle.as_ptr(), point_size)
        )
    }
    /// Returns style of the font.
    ///
    pub fn style(&self) -> Result<FontStyle> {
        native!(self.handle.sdl(), TTF_GetFontStyle(self.handle.as_ptr()))
            .map(FontStyle::from_bits_truncate)
    }
    /// Changes style of the font.
    ///
    pub fn set_style(&mut self, style: FontStyle) -> Result<()> {
        native!(
            self.handle.sdl(),
            TTF_SetFontStyle(self.handle.as_ptr(), style.bits())
        )
    }

    /// Renders antialiased text to new surface.
    ///
    pub fn render_blended(&self, text: &str, color: Color) -> Result<Surface> {
        let sdl = self.handle.sdl();
        let text = CString::new(text)?;
        let raw = native!(
            sdl,
            TTF_RenderText_Blended(
                self.handle.as_ptr(),
                text.as_ptr(),
                text.as_bytes().len(),
                color.to_native()
            )
        )?;
        Surface::from_raw(sdl, "TTF_RenderText_Blended", raw)
    }
    /// Returns size of text in pixels, if it was rendered with this font.
    ///
    pub fn measure(&self, text: &str) -> Result<(u32, u32)> {
        let text = CString::new(text)?;
        let (mut width, mut height): (c_int, c_int) = (0, 0);
        native_ok!(
            self.handle.sdl(),
            TTF_GetStringSize(
                self.handle.as_ptr(),
                text.as_ptr(),
                text.as_bytes().len(),
                &mut width,
                &mut height
            )
        )?;
        Ok((width.max(0) as u32, height.max(0) as u32))
    }
}
impl fmt::Debug for Font<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Font")
            .field("handle", &self.handle)
            .finish()
    }
}

/// Checks that point size is positive.
///
fn check_point_size(point_size: f32) -> Result<()> {
    if point_size > 0.0 && point_size.is_finite() {
        Ok(())
    } else {
        Err(Error::usage(format!("{point_size} is not a valid point size")))
    }
}
