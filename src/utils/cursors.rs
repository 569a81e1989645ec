//! `utils::cursors` submodule implements [`Cursor`] and functions that control mouse cursor visibility.
//!

use crate::{
    datacore::images::Surface,
    error::Result,
    mathcore::vectors::Vector2Int,
    nativecore::{
        handles::{CursorKind, Handle, Ownership},
        library::{native, native_ok, Sdl},
    },
};
use std::{ffi::c_int, fmt, sync::Arc};

/// [`SystemCursor`] enum lists cursors that are provided by OS.
///
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum SystemCursor {
    /// Default cursor (usually an arrow).
    ///
    Default,
    /// Text selection (I-beam).
    ///
    Text,
    /// Wait (hourglass or spinner).
    ///
    Wait,
    /// Crosshair.
    ///
    Crosshair,
    /// Program is busy, but still interactive.
    ///
    Progress,
    /// Double arrow pointing northwest and southeast.
    ///
    NwseResize,
    /// Double arrow pointing northeast and southwest.
    ///
    NeswResize,
    /// Double arrow pointing west and east.
    ///
    EwResize,
    /// Double arrow pointing north and south.
    ///
    NsResize,
    /// Four pointed arrow.
    ///
    Move,
    /// Slashed circle or crossbones.
    ///
    NotAllowed,
    /// Pointing hand.
    ///
    Pointer,
}
impl SystemCursor {
    /// Returns native id of system cursor.
    ///
    fn to_native(self) -> c_int {
        match self {
            SystemCursor::Default => 0,
            SystemCursor::Text => 1,
            SystemCursor::Wait => 2,
            SystemCursor::Crosshair => 3,
            SystemCursor::Progress => 4,
            SystemCursor::NwseResize => 5,
            SystemCursor::NeswResize => 6,
            SystemCursor::EwResize => 7,
            SystemCursor::NsResize => 8,
            SystemCursor::Move => 9,
            SystemCursor::NotAllowed => 10,
            SystemCursor::Pointer => 11,
        }
    }
}

/// [`Cursor`] struct represents mouse cursor.
///
/// Cursors that were created by `ggsdl` are owned and destroyed on drop;
/// [`Cursor::current`] and [`Cursor::default`] borrow cursors that SDL owns.
///
/// # Example
/// ```rust,no_run
/// # use ggsdl::{Engine, utils::{Cursor, SystemCursor}};
/// let engine: Engine = Engine::load()?;
/// let window = engine.build_window("GGSDL", 800, 600, Default::default())?;
/// let cursor: Cursor = Cursor::system(engine.sdl(), SystemCursor::Pointer)?;
/// cursor.activate()?;
/// # Ok::<(), ggsdl::Error>(())
/// ```
///
pub struct Cursor {
    /// Native cursor.
    ///
    handle: Handle<CursorKind>,
}
impl Cursor {
    /// Creates cursor that is provided by OS.
    ///
    pub fn system(sdl: &Arc<Sdl>, cursor: SystemCursor) -> Result<Cursor> {
        let raw = native!(sdl, SDL_CreateSystemCursor(cursor.to_native()))?;
        Ok(Cursor {
            handle: Handle::owned(sdl, "SDL_CreateSystemCursor", raw)?,
        })
    }
    /// Creates colored cursor from surface; `hotspot` is the clicking point inside of the surface.
    ///
    pub fn from_surface(sdl: &Arc<Sdl>, surface: &Surface, hotspot: Vector2Int) -> Result<Cursor> {
        let surface = surface.raw()?;
        let raw = native!(sdl, SDL_CreateColorCursor(surface, hotspot.x, hotspot.y))?;
        Ok(Cursor {
            handle: Handle::owned(sdl, "SDL_CreateColorCursor", raw)?,
        })
    }
    /// Returns cursor that is currently active.
    ///
    pub fn current(sdl: &Arc<Sdl>) -> Result<Cursor> {
        let raw = native!(sdl, SDL_GetCursor())?;
        Ok(Cursor {
            handle: Handle::borrowed(sdl, "SDL_GetCursor", raw)?,
        })
    }
    /// Returns default cursor of the system.
    ///
    pub fn default(sdl: &Arc<Sdl>) -> Result<Cursor> {
        let raw = native!(sdl, SDL_GetDefaultCursor())?;
        Ok(Cursor {
            handle: Handle::borrowed(sdl, "SDL_GetDefaultCursor", raw)?,
        })
    }

    /// Makes this cursor active.
    ///
    pub fn activate(&self) -> Result<()> {
        native_ok!(self.handle.sdl(), SDL_SetCursor(self.handle.as_ptr()))
    }
    /// Returns whether cursor is owned by `ggsdl`.
    ///
    pub fn ownership(&self) -> Ownership {
        self.handle.ownership()
    }
}
impl fmt::Debug for Cursor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cursor")
            .field("handle", &self.handle)
            .finish()
    }
}

/// Shows mouse cursor.
///
pub fn show_cursor(sdl: &Sdl) -> Result<()> {
    native_ok!(sdl, SDL_ShowCursor())
}
/// Hides mouse cursor.
///
pub fn hide_cursor(sdl: &Sdl) -> Result<()> {
    native_ok!(sdl, SDL_HideCursor())
}
/// Returns whether mouse cursor is visible.
///
pub fn is_cursor_visible(sdl: &Sdl) -> Result<bool> {
    native!(sdl, SDL_CursorVisible())
}
