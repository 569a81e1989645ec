//! `utils::displays` submodule implements [`Display`] - connected monitor - and its [`DisplayMode`]s.
//!

use crate::{
    datacore::images::PixelFormat,
    error::Result,
    mathcore::shapes::RectInt,
    nativecore::{
        ffi::{SDL_DisplayID, SDL_DisplayMode, SDL_Rect},
        handles::non_null,
        library::{native, native_ok, string_from_native, Sdl},
    },
    Engine,
};
use std::{ffi::c_int, fmt, sync::Arc};

/// [`DisplayMode`] struct describes resolution and refresh rate of display.
///
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct DisplayMode {
    /// Id of display this mode belongs to.
    ///
    pub display_id: u32,
    /// Pixel format of the mode (or `None` if it is not recognised).
    ///
    pub pixel_format: Option<PixelFormat>,
    /// Width in pixels.
    ///
    pub width: i32,
    /// Height in pixels.
    ///
    pub height: i32,
    /// Scale from pixels to screen coordinates.
    ///
    pub pixel_density: f32,
    /// Refresh rate in Hz (0 if unknown).
    ///
    pub refresh_rate: f32,
}
impl DisplayMode {
    /// Converts native display mode.
    ///
    fn from_native(mode: &SDL_DisplayMode) -> DisplayMode {
        DisplayMode {
            display_id: mode.displayID,
            pixel_format: PixelFormat::from_native(mode.format.0 as u32),
            width: mode.w,
            height: mode.h,
            pixel_density: mode.pixel_density,
            refresh_rate: mode.refresh_rate,
        }
    }
}

/// [`Display`] struct represents one connected display.
///
/// Display is identified by its id, which stays the same while display is connected.
///
pub struct Display {
    /// Native library.
    ///
    sdl: Arc<Sdl>,
    /// Id of the display.
    ///
    id: SDL_DisplayID,
}
impl Display {
    // All functions that are providing gate between `ggsdl` and native code extend their API to `crate` visibility.
    /// Initializes display from its native id.
    ///
    pub(crate) fn from_id(sdl: &Arc<Sdl>, id: SDL_DisplayID) -> Display {
        Display {
            sdl: Arc::clone(sdl),
            id,
        }
    }

    /// Returns every connected display.
    ///
    pub fn all(sdl: &Arc<Sdl>) -> Result<Vec<Display>> {
        let mut count: c_int = 0;
        let ids = non_null(
            sdl,
            "SDL_GetDisplays",
            native!(sdl, SDL_GetDisplays(&mut count))?,
        )?;
        // SAFETY: native side returns array of `count` ids.
        let displays = unsafe { std::slice::from_raw_parts(ids.as_ptr(), count.max(0) as usize) }
            .iter()
            .map(|id| Display::from_id(sdl, *id))
            .collect();
        native!(sdl, SDL_free(ids.as_ptr().cast()))?;
        Ok(displays)
    }
    /// Returns primary display.
    ///
    pub fn primary(sdl: &Arc<Sdl>) -> Result<Display> {
        match native!(sdl, SDL_GetPrimaryDisplay())? {
            0 => Err(sdl.error("SDL_GetPrimaryDisplay")),
            id => Ok(Display::from_id(sdl, id)),
        }
    }

    /// Returns id of the display.
    ///
    pub fn id(&self) -> u32 {
        self.id
    }
    /// Returns human-readable name of the display.
    ///
    pub fn name(&self) -> Result<String> {
        let name = native!(self.sdl, SDL_GetDisplayName(self.id))?;
        // SAFETY: native name is nul-terminated.
        unsafe { string_from_native(name) }.ok_or_else(|| self.sdl.error("SDL_GetDisplayName"))
    }
    /// Returns desktop area of the display.
    ///
    pub fn bounds(&self) -> Result<RectInt> {
        let mut rect = SDL_Rect::default();
        native_ok!(self.sdl, SDL_GetDisplayBounds(self.id, &mut rect))?;
        Ok(RectInt::from_native(rect))
    }
    /// Returns desktop area of the display without system reserved parts (taskbar, dock, menu bar).
    ///
    pub fn usable_bounds(&self) -> Result<RectInt> {
        let mut rect = SDL_Rect::default();
        native_ok!(self.sdl, SDL_GetDisplayUsableBounds(self.id, &mut rect))?;
        Ok(RectInt::from_native(rect))
    }
    /// Returns content scale that is chosen by user (`1.25` for 125% scaling).
    ///
    pub fn content_scale(&self) -> Result<f32> {
        match native!(self.sdl, SDL_GetDisplayContentScale(self.id))? {
            scale if scale == 0.0 => Err(self.sdl.error("SDL_GetDisplayContentScale")),
            scale => Ok(scale),
        }
    }
    /// Returns current mode of the display.
    ///
    pub fn current_mode(&self) -> Result<DisplayMode> {
        let mode = native!(self.sdl, SDL_GetCurrentDisplayMode(self.id))?;
        self.read_mode("SDL_GetCurrentDisplayMode", mode)
    }
    /// Returns mode that desktop uses (differs from current mode when fullscreen changes resolution).
    ///
    pub fn desktop_mode(&self) -> Result<DisplayMode> {
        let mode = native!(self.sdl, SDL_GetDesktopDisplayMode(self.id))?;
        self.read_mode("SDL_GetDesktopDisplayMode", mode)
    }
    /// Returns modes which can be used for exclusive fullscreen, from the largest to the smallest.
    ///
    pub fn fullscreen_modes(&self) -> Result<Vec<DisplayMode>> {
        let mut count: c_int = 0;
        let modes = non_null(
            &self.sdl,
            "SDL_GetFullscreenDisplayModes",
            native!(self.sdl, SDL_GetFullscreenDisplayModes(self.id, &mut count))?,
        )?;
        // SAFETY: native side returns array of `count` valid mode pointers.
        let result = unsafe { std::slice::from_raw_parts(modes.as_ptr(), count.max(0) as usize) }
            .iter()
            .filter(|mode| !mode.is_null())
            // SAFETY: pointer was checked to be non-null.
            .map(|mode| DisplayMode::from_native(unsafe { &**mode }))
            .collect();
        native!(self.sdl, SDL_free(modes.as_ptr().cast()))?;
        Ok(result)
    }
    /// Copies native mode that is owned by SDL.
    ///
    fn read_mode(&self, function: &'static str, mode: *const SDL_DisplayMode) -> Result<DisplayMode> {
        let mode = non_null(&self.sdl, function, mode.cast_mut())?;
        // SAFETY: pointer is valid until display is reconfigured, mode is copied immediately.
        Ok(DisplayMode::from_native(unsafe { mode.as_ref() }))
    }
}
impl PartialEq for Display {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}
impl fmt::Debug for Display {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Display").field("id", &self.id).finish()
    }
}

impl Engine {
    /// Returns every connected display.
    ///
    /// Video subsystem should be initialized (for example, by a living window).
    ///
    pub fn displays(&self) -> Result<Vec<Display>> {
        Display::all(self.sdl())
    }
    /// Returns primary display.
    ///
    pub fn primary_display(&self) -> Result<Display> {
        Display::primary(self.sdl())
    }
}
