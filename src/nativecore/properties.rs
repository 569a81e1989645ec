//! `nativecore::properties` submodule implements [`Properties`] - RAII owner of native property group.
//!
//! SDL3 takes structured construction options (window creation, file dialogs) through
//! property groups - string-keyed stores of booleans, numbers, floats, strings and pointers.
//!

use crate::{
    error::Result,
    nativecore::{
        ffi::SDL_PropertiesID,
        library::{native, native_ok, string_from_native, Sdl},
    },
};
use std::{
    ffi::{c_char, c_void, CString},
    fmt,
    ptr::null_mut,
    sync::Arc,
};

// window creation
/// Title of the window (string).
///
pub const WINDOW_CREATE_TITLE: &str = "SDL.window.create.title";
/// Width of the window (number).
///
pub const WINDOW_CREATE_WIDTH: &str = "SDL.window.create.width";
/// Height of the window (number).
///
pub const WINDOW_CREATE_HEIGHT: &str = "SDL.window.create.height";
/// Horizontal position of the window (number).
///
pub const WINDOW_CREATE_X: &str = "SDL.window.create.x";
/// Vertical position of the window (number).
///
pub const WINDOW_CREATE_Y: &str = "SDL.window.create.y";
/// Whether the window is resizable (boolean).
///
pub const WINDOW_CREATE_RESIZABLE: &str = "SDL.window.create.resizable";
/// Whether the window has no decorations (boolean).
///
pub const WINDOW_CREATE_BORDERLESS: &str = "SDL.window.create.borderless";
/// Whether the window starts in fullscreen (boolean).
///
pub const WINDOW_CREATE_FULLSCREEN: &str = "SDL.window.create.fullscreen";
/// Whether the window starts hidden (boolean).
///
pub const WINDOW_CREATE_HIDDEN: &str = "SDL.window.create.hidden";
/// Whether the window starts maximized (boolean).
///
pub const WINDOW_CREATE_MAXIMIZED: &str = "SDL.window.create.maximized";
/// Whether the window starts minimized (boolean).
///
pub const WINDOW_CREATE_MINIMIZED: &str = "SDL.window.create.minimized";
/// Whether the window stays above others (boolean).
///
pub const WINDOW_CREATE_ALWAYS_ON_TOP: &str = "SDL.window.create.always_on_top";
/// Whether the window may receive input focus (boolean).
///
pub const WINDOW_CREATE_FOCUSABLE: &str = "SDL.window.create.focusable";
/// Whether the window uses high pixel density buffer (boolean).
///
pub const WINDOW_CREATE_HIGH_PIXEL_DENSITY: &str = "SDL.window.create.high_pixel_density";
/// Whether the window uses transparent buffer (boolean).
///
pub const WINDOW_CREATE_TRANSPARENT: &str = "SDL.window.create.transparent";

// file dialogs
/// Filters of the dialog (pointer to `SDL_DialogFileFilter` array).
///
pub const FILE_DIALOG_FILTERS: &str = "SDL.filedialog.filters";
/// Amount of dialog filters (number).
///
pub const FILE_DIALOG_NFILTERS: &str = "SDL.filedialog.nfilters";
/// Parent window of the dialog (pointer).
///
pub const FILE_DIALOG_WINDOW: &str = "SDL.filedialog.window";
/// Initial location of the dialog (string).
///
pub const FILE_DIALOG_LOCATION: &str = "SDL.filedialog.location";
/// Whether several entries may be selected (boolean).
///
pub const FILE_DIALOG_MANY: &str = "SDL.filedialog.many";
/// Title of the dialog (string).
///
pub const FILE_DIALOG_TITLE: &str = "SDL.filedialog.title";
/// Label of the accept button (string).
///
pub const FILE_DIALOG_ACCEPT: &str = "SDL.filedialog.accept";
/// Label of the cancel button (string).
///
pub const FILE_DIALOG_CANCEL: &str = "SDL.filedialog.cancel";

// app metadata
/// Application creator (string).
///
pub const APP_METADATA_CREATOR: &str = "SDL.app.metadata.creator";
/// Application copyright (string).
///
pub const APP_METADATA_COPYRIGHT: &str = "SDL.app.metadata.copyright";
/// Application web page (string).
///
pub const APP_METADATA_URL: &str = "SDL.app.metadata.url";
/// Application type (string).
///
pub const APP_METADATA_TYPE: &str = "SDL.app.metadata.type";

/// [`Properties`] struct owns one native property group.
///
/// Group is destroyed when [`Properties`] is dropped.
///
/// # Example
/// ```rust, no_run
/// # use ggsdl::{Engine, nativecore::properties::{Properties, WINDOW_CREATE_TITLE}};
/// let engine: Engine = Engine::load().expect("SDL3 should be installed");
/// let mut properties: Properties = Properties::new(engine.sdl()).expect("Properties should be created");
/// properties.set_string(WINDOW_CREATE_TITLE, "GGSDL").expect("Title has no nul bytes");
/// assert_eq!(properties.string(WINDOW_CREATE_TITLE).as_deref(), Some("GGSDL"));
/// ```
///
pub struct Properties {
    /// Native function table.
    ///
    sdl: Arc<Sdl>,
    /// Native identifier (never `0`).
    ///
    id: SDL_PropertiesID,
}
impl Properties {
    /// Creates new empty property group.
    ///
    pub fn new(sdl: &Arc<Sdl>) -> Result<Properties> {
        let id = native!(sdl, SDL_CreateProperties())?;
        if id == 0 {
            return Err(sdl.error("SDL_CreateProperties"));
        }
        Ok(Properties {
            sdl: Arc::clone(sdl),
            id,
        })
    }

    // All functions that are providing gate between `ggsdl` and native code extend their API to `crate` visibility.
    /// Returns native identifier of the group.
    ///
    pub(crate) fn id(&self) -> SDL_PropertiesID {
        self.id
    }

    /// Returns whether property with given name is set.
    ///
    pub fn has(&self, name: &str) -> bool {
        let Ok(name) = CString::new(name) else {
            return false;
        };
        native!(self.sdl, SDL_HasProperty(self.id, name.as_ptr())).unwrap_or(false)
    }
    /// Removes property with given name.
    ///
    pub fn clear(&mut self, name: &str) -> Result<()> {
        let name = CString::new(name)?;
        native_ok!(self.sdl, SDL_ClearProperty(self.id, name.as_ptr()))
    }

    /// Sets boolean property.
    ///
    pub fn set_bool(&mut self, name: &str, value: bool) -> Result<()> {
        let name = CString::new(name)?;
        native_ok!(self.sdl, SDL_SetBooleanProperty(self.id, name.as_ptr(), value))
    }
    /// Sets integer property.
    ///
    pub fn set_number(&mut self, name: &str, value: i64) -> Result<()> {
        let name = CString::new(name)?;
        native_ok!(self.sdl, SDL_SetNumberProperty(self.id, name.as_ptr(), value))
    }
    /// Sets float property.
    ///
    pub fn set_float(&mut self, name: &str, value: f32) -> Result<()> {
        let name = CString::new(name)?;
        native_ok!(self.sdl, SDL_SetFloatProperty(self.id, name.as_ptr(), value))
    }
    /// Sets string property (native side keeps its own copy).
    ///
    pub fn set_string(&mut self, name: &str, value: &str) -> Result<()> {
        let name = CString::new(name)?;
        let value = CString::new(value)?;
        native_ok!(
            self.sdl,
            SDL_SetStringProperty(self.id, name.as_ptr(), value.as_ptr())
        )
    }
    /// Sets pointer property.
    ///
    /// Pointee is not copied - it should outlive every native use of this group.
    ///
    pub(crate) fn set_pointer(&mut self, name: &str, value: *mut c_void) -> Result<()> {
        let name = CString::new(name)?;
        native_ok!(self.sdl, SDL_SetPointerProperty(self.id, name.as_ptr(), value))
    }

    /// Returns boolean property or `default` if it is not set.
    ///
    pub fn bool(&self, name: &str, default: bool) -> bool {
        let Ok(name) = CString::new(name) else {
            return default;
        };
        native!(self.sdl, SDL_GetBooleanProperty(self.id, name.as_ptr(), default))
            .unwrap_or(default)
    }
    /// Returns integer property or `default` if it is not set.
    ///
    pub fn number(&self, name: &str, default: i64) -> i64 {
        let Ok(name) = CString::new(name) else {
            return default;
        };
        native!(self.sdl, SDL_GetNumberProperty(self.id, name.as_ptr(), default))
            .unwrap_or(default)
    }
    /// Returns float property or `default` if it is not set.
    ///
    pub fn float(&self, name: &str, default: f32) -> f32 {
        let Ok(name) = CString::new(name) else {
            return default;
        };
        native!(self.sdl, SDL_GetFloatProperty(self.id, name.as_ptr(), default))
            .unwrap_or(default)
    }
    /// Returns copy of string property or `None` if it is not set.
    ///
    pub fn string(&self, name: &str) -> Option<String> {
        let name = CString::new(name).ok()?;
        let value: *const c_char = native!(
            self.sdl,
            SDL_GetStringProperty(self.id, name.as_ptr(), std::ptr::null())
        )
        .ok()?;
        // SAFETY: native side returns either null or valid string which lives until property changes.
        unsafe { string_from_native(value) }
    }
    /// Returns pointer property or null pointer if it is not set.
    ///
    pub(crate) fn pointer(&self, name: &str) -> *mut c_void {
        let Ok(name) = CString::new(name) else {
            return null_mut();
        };
        native!(self.sdl, SDL_GetPointerProperty(self.id, name.as_ptr(), null_mut()))
            .unwrap_or(null_mut())
    }
}
impl Drop for Properties {
    fn drop(&mut self) {
        if let Err(error) = native!(self.sdl, SDL_DestroyProperties(self.id)) {
            log::warn!("properties {} could not be destroyed: {error}", self.id);
        }
    }
}
impl fmt::Debug for Properties {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Properties").field("id", &self.id).finish()
    }
}
