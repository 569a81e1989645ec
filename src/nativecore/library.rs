//! `nativecore::library` submodule opens native shared libraries and resolves their exports.
//!
//! Symbols are looked up once, when [`Sdl`] is loaded. A symbol that is absent
//! (for example, the library is older than the function, or SDL3_ttf is not installed)
//! does not prevent loading - it surfaces as [`Error::MissingSymbol`] when it is called.
//!

use crate::{
    error::{Error, Result},
    nativecore::ffi::*,
};
use libloading::Library;
use serde::{Deserialize, Serialize};
use std::{
    env,
    ffi::{c_char, c_int, c_void, CStr},
    fmt,
    path::{Path, PathBuf},
};

/// Environment variable that overrides location of SDL3.
///
pub const SDL3_PATH_VARIABLE: &str = "GGSDL_SDL3";
/// Environment variable that overrides location of SDL3_image.
///
pub const SDL3_IMAGE_PATH_VARIABLE: &str = "GGSDL_SDL3_IMAGE";
/// Environment variable that overrides location of SDL3_ttf.
///
pub const SDL3_TTF_PATH_VARIABLE: &str = "GGSDL_SDL3_TTF";

/// [`LibraryPaths`] struct tells `ggsdl` where native libraries are.
///
/// Plain file names are resolved by the platform loader (`LD_LIBRARY_PATH`, `PATH`, etc.).
/// SDL3 is required, companions are optional - `None` means that companion is not loaded at all.
///
/// # Example
/// ```rust
/// # use ggsdl::nativecore::library::LibraryPaths;
/// # use std::path::PathBuf;
/// let paths: LibraryPaths = LibraryPaths {
///     ttf: None,
///     ..LibraryPaths::default()
/// };
/// assert!(paths.image.is_some());
/// ```
///
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LibraryPaths {
    /// Location of SDL3.
    ///
    pub sdl: PathBuf,
    /// Location of SDL3_image.
    ///
    pub image: Option<PathBuf>,
    /// Location of SDL3_ttf.
    ///
    pub ttf: Option<PathBuf>,
}
impl LibraryPaths {
    /// Returns default paths with overrides taken from
    /// [`SDL3_PATH_VARIABLE`], [`SDL3_IMAGE_PATH_VARIABLE`] and [`SDL3_TTF_PATH_VARIABLE`].
    ///
    pub fn from_env() -> LibraryPaths {
        let defaults = LibraryPaths::default();
        LibraryPaths {
            sdl: env::var_os(SDL3_PATH_VARIABLE)
                .map(PathBuf::from)
                .unwrap_or(defaults.sdl),
            image: env::var_os(SDL3_IMAGE_PATH_VARIABLE)
                .map(PathBuf::from)
                .or(defaults.image),
            ttf: env::var_os(SDL3_TTF_PATH_VARIABLE)
                .map(PathBuf::from)
                .or(defaults.ttf),
        }
    }
}
impl Default for LibraryPaths {
    fn default() -> Self {
        #[cfg(target_os = "windows")]
        let names = ("SDL3.dll", "SDL3_image.dll", "SDL3_ttf.dll");
        #[cfg(target_os = "macos")]
        let names = ("libSDL3.0.dylib", "libSDL3_image.0.dylib", "libSDL3_ttf.0.dylib");
        #[cfg(not(any(target_os = "windows", target_os = "macos")))]
        let names = ("libSDL3.so.0", "libSDL3_image.so.0", "libSDL3_ttf.so.0");

        LibraryPaths {
            sdl: PathBuf::from(names.0),
            image: Some(PathBuf::from(names.1)),
            ttf: Some(PathBuf::from(names.2)),
        }
    }
}

/// [`Libraries`] struct keeps loaded libraries alive for as long as function table is used.
///
#[derive(Debug, Default)]
struct Libraries {
    /// SDL3.
    ///
    sdl: Option<Library>,
    /// SDL3_image.
    ///
    image: Option<Library>,
    /// SDL3_ttf.
    ///
    ttf: Option<Library>,
}

/// [`native_api`] macro declares native function table, grouped by library which exports the functions.
///
macro_rules! native_api {
    ($($library:ident { $(fn $name:ident($($argument:ident: $type:ty),* $(,)?) $(-> $return:ty)?;)+ })+) => {
        /// [`NativeApi`] struct is a table of native functions.
        ///
        /// Absent functions are `None`.
        ///
        #[allow(non_snake_case)]
        #[derive(Copy, Clone, Default)]
        pub(crate) struct NativeApi {
            $($(
                #[doc = concat!("`", stringify!($name), "` export of `", stringify!($library), "`.")]
                pub(crate) $name: Option<unsafe extern "C" fn($($argument: $type),*) $(-> $return)?>,
            )+)+
        }
        impl NativeApi {
            /// Resolves every function of the table in loaded libraries.
            ///
            fn resolve(libraries: &Libraries) -> NativeApi {
                NativeApi {
                    $($(
                        $name: libraries.$library.as_ref().and_then(|library| {
                            // SAFETY: symbol type is copied from native headers.
                            unsafe {
                                library
                                    .get::<unsafe extern "C" fn($($type),*) $(-> $return)?>(
                                        concat!(stringify!($name), "\0").as_bytes(),
                                    )
                                    .ok()
                                    .map(|symbol| *symbol)
                            }
                        }),
                    )+)+
                }
            }
            /// Returns how many functions of the table were resolved.
            ///
            fn resolved(&self) -> usize {
                [$($(self.$name.is_some(),)+)+]
                    .iter()
                    .filter(|resolved| **resolved)
                    .count()
            }
        }
    };
}
native_api! {
    sdl {
        fn SDL_GetError() -> *const c_char;
        fn SDL_free(memory: *mut c_void);

        fn SDL_InitSubSystem(flags: u32) -> bool;
        fn SDL_QuitSubSystem(flags: u32);
        fn SDL_WasInit(flags: u32) -> u32;
        fn SDL_Quit();
        fn SDL_SetAppMetadata(name: *const c_char, version: *const c_char, identifier: *const c_char) -> bool;
        fn SDL_SetAppMetadataProperty(name: *const c_char, value: *const c_char) -> bool;

        fn SDL_CreateProperties() -> SDL_PropertiesID;
        fn SDL_DestroyProperties(props: SDL_PropertiesID);
        fn SDL_HasProperty(props: SDL_PropertiesID, name: *const c_char) -> bool;
        fn SDL_ClearProperty(props: SDL_PropertiesID, name: *const c_char) -> bool;
        fn SDL_SetBooleanProperty(props: SDL_PropertiesID, name: *const c_char, value: bool) -> bool;
        fn SDL_SetNumberProperty(props: SDL_PropertiesID, name: *const c_char, value: i64) -> bool;
        fn SDL_SetFloatProperty(props: SDL_PropertiesID, name: *const c_char, value: f32) -> bool;
        fn SDL_SetStringProperty(props: SDL_PropertiesID, name: *const c_char, value: *const c_char) -> bool;
        fn SDL_SetPointerProperty(props: SDL_PropertiesID, name: *const c_char, value: *mut c_void) -> bool;
        fn SDL_GetBooleanProperty(props: SDL_PropertiesID, name: *const c_char, default_value: bool) -> bool;
        fn SDL_GetNumberProperty(props: SDL_PropertiesID, name: *const c_char, default_value: i64) -> i64;
        fn SDL_GetFloatProperty(props: SDL_PropertiesID, name: *const c_char, default_value: f32) -> f32;
        fn SDL_GetStringProperty(props: SDL_PropertiesID, name: *const c_char, default_value: *const c_char) -> *const c_char;
        fn SDL_GetPointerProperty(props: SDL_PropertiesID, name: *const c_char, default_value: *mut c_void) -> *mut c_void;

        fn SDL_CreateWindowWithProperties(props: SDL_PropertiesID) -> *mut SDL_Window;
        fn SDL_DestroyWindow(window: *mut SDL_Window);
        fn SDL_GetWindowID(window: *mut SDL_Window) -> SDL_WindowID;
        fn SDL_GetWindowFlags(window: *mut SDL_Window) -> u64;
        fn SDL_SetWindowTitle(window: *mut SDL_Window, title: *const c_char) -> bool;
        fn SDL_GetWindowTitle(window: *mut SDL_Window) -> *const c_char;
        fn SDL_SetWindowPosition(window: *mut SDL_Window, x: c_int, y: c_int) -> bool;
        fn SDL_GetWindowPosition(window: *mut SDL_Window, x: *mut c_int, y: *mut c_int) -> bool;
        fn SDL_SetWindowSize(window: *mut SDL_Window, w: c_int, h: c_int) -> bool;
        fn SDL_GetWindowSize(window: *mut SDL_Window, w: *mut c_int, h: *mut c_int) -> bool;
        fn SDL_SetWindowMinimumSize(window: *mut SDL_Window, w: c_int, h: c_int) -> bool;
        fn SDL_GetWindowMinimumSize(window: *mut SDL_Window, w: *mut c_int, h: *mut c_int) -> bool;
        fn SDL_SetWindowMaximumSize(window: *mut SDL_Window, w: c_int, h: c_int) -> bool;
        fn SDL_GetWindowMaximumSize(window: *mut SDL_Window, w: *mut c_int, h: *mut c_int) -> bool;
        fn SDL_MaximizeWindow(window: *mut SDL_Window) -> bool;
        fn SDL_MinimizeWindow(window: *mut SDL_Window) -> bool;
        fn SDL_RestoreWindow(window: *mut SDL_Window) -> bool;
        fn SDL_ShowWindow(window: *mut SDL_Window) -> bool;
        fn SDL_HideWindow(window: *mut SDL_Window) -> bool;
        fn SDL_RaiseWindow(window: *mut SDL_Window) -> bool;
        fn SDL_SetWindowFullscreen(window: *mut SDL_Window, fullscreen: bool) -> bool;
        fn SDL_SetWindowBordered(window: *mut SDL_Window, bordered: bool) -> bool;
        fn SDL_SetWindowResizable(window: *mut SDL_Window, resizable: bool) -> bool;
        fn SDL_SetWindowAlwaysOnTop(window: *mut SDL_Window, on_top: bool) -> bool;
        fn SDL_SetWindowFocusable(window: *mut SDL_Window, focusable: bool) -> bool;
        fn SDL_SetWindowMouseGrab(window: *mut SDL_Window, grabbed: bool) -> bool;
        fn SDL_SetWindowKeyboardGrab(window: *mut SDL_Window, grabbed: bool) -> bool;
        fn SDL_SetWindowOpacity(window: *mut SDL_Window, opacity: f32) -> bool;
        fn SDL_GetWindowOpacity(window: *mut SDL_Window) -> f32;
        fn SDL_FlashWindow(window: *mut SDL_Window, operation: c_int) -> bool;
        fn SDL_SyncWindow(window: *mut SDL_Window) -> bool;
        fn SDL_SetWindowIcon(window: *mut SDL_Window, icon: *mut SDL_Surface) -> bool;
        fn SDL_GetWindowSurface(window: *mut SDL_Window) -> *mut SDL_Surface;
        fn SDL_GetWindowPixelDensity(window: *mut SDL_Window) -> f32;
        fn SDL_GetDisplayForWindow(window: *mut SDL_Window) -> SDL_DisplayID;
        fn SDL_SetWindowProgressState(window: *mut SDL_Window, state: c_int) -> bool;
        fn SDL_SetWindowProgressValue(window: *mut SDL_Window, value: f32) -> bool;

        fn SDL_GetDisplays(count: *mut c_int) -> *mut SDL_DisplayID;
        fn SDL_GetPrimaryDisplay() -> SDL_DisplayID;
        fn SDL_GetDisplayName(display: SDL_DisplayID) -> *const c_char;
        fn SDL_GetDisplayBounds(display: SDL_DisplayID, rect: *mut SDL_Rect) -> bool;
        fn SDL_GetDisplayUsableBounds(display: SDL_DisplayID, rect: *mut SDL_Rect) -> bool;
        fn SDL_GetDisplayContentScale(display: SDL_DisplayID) -> f32;
        fn SDL_GetCurrentDisplayMode(display: SDL_DisplayID) -> *const SDL_DisplayMode;
        fn SDL_GetDesktopDisplayMode(display: SDL_DisplayID) -> *const SDL_DisplayMode;
        fn SDL_GetFullscreenDisplayModes(display: SDL_DisplayID, count: *mut c_int) -> *mut *mut SDL_DisplayMode;

        fn SDL_PumpEvents();
        fn SDL_PollEvent(event: *mut SDL_Event) -> bool;
        fn SDL_WaitEvent(event: *mut SDL_Event) -> bool;
        fn SDL_WaitEventTimeout(event: *mut SDL_Event, timeout_ms: i32) -> bool;
        fn SDL_PushEvent(event: *mut SDL_Event) -> bool;
        fn SDL_PeepEvents(events: *mut SDL_Event, numevents: c_int, action: c_int, min_type: u32, max_type: u32) -> c_int;
        fn SDL_HasEvents(min_type: u32, max_type: u32) -> bool;
        fn SDL_FlushEvents(min_type: u32, max_type: u32);
        fn SDL_RegisterEvents(numevents: c_int) -> u32;

        fn SDL_CreateRenderer(window: *mut SDL_Window, name: *const c_char) -> *mut SDL_Renderer;
        fn SDL_DestroyRenderer(renderer: *mut SDL_Renderer);
        fn SDL_SetRenderVSync(renderer: *mut SDL_Renderer, vsync: c_int) -> bool;
        fn SDL_SetRenderDrawColor(renderer: *mut SDL_Renderer, r: u8, g: u8, b: u8, a: u8) -> bool;
        fn SDL_GetRenderDrawColor(renderer: *mut SDL_Renderer, r: *mut u8, g: *mut u8, b: *mut u8, a: *mut u8) -> bool;
        fn SDL_SetRenderDrawBlendMode(renderer: *mut SDL_Renderer, blend_mode: u32) -> bool;
        fn SDL_GetRenderDrawBlendMode(renderer: *mut SDL_Renderer, blend_mode: *mut u32) -> bool;
        fn SDL_RenderClear(renderer: *mut SDL_Renderer) -> bool;
        fn SDL_RenderPresent(renderer: *mut SDL_Renderer) -> bool;
        fn SDL_RenderPoint(renderer: *mut SDL_Renderer, x: f32, y: f32) -> bool;
        fn SDL_RenderLine(renderer: *mut SDL_Renderer, x1: f32, y1: f32, x2: f32, y2: f32) -> bool;
        fn SDL_RenderRect(renderer: *mut SDL_Renderer, rect: *const SDL_FRect) -> bool;
        fn SDL_RenderFillRect(renderer: *mut SDL_Renderer, rect: *const SDL_FRect) -> bool;
        fn SDL_RenderTextureRotated(
            renderer: *mut SDL_Renderer,
            texture: *mut SDL_Texture,
            srcrect: *const SDL_FRect,
            dstrect: *const SDL_FRect,
            angle: f64,
            center: *const SDL_FPoint,
            flip: c_int,
        ) -> bool;
        fn SDL_SetRenderLogicalPresentation(renderer: *mut SDL_Renderer, w: c_int, h: c_int, mode: c_int) -> bool;
        fn SDL_SetRenderScale(renderer: *mut SDL_Renderer, scale_x: f32, scale_y: f32) -> bool;
        fn SDL_SetRenderTarget(renderer: *mut SDL_Renderer, texture: *mut SDL_Texture) -> bool;
        fn SDL_GetRenderOutputSize(renderer: *mut SDL_Renderer, w: *mut c_int, h: *mut c_int) -> bool;

        fn SDL_CreateTexture(renderer: *mut SDL_Renderer, format: u32, access: c_int, w: c_int, h: c_int) -> *mut SDL_Texture;
        fn SDL_CreateTextureFromSurface(renderer: *mut SDL_Renderer, surface: *mut SDL_Surface) -> *mut SDL_Texture;
        fn SDL_DestroyTexture(texture: *mut SDL_Texture);
        fn SDL_GetTextureSize(texture: *mut SDL_Texture, w: *mut f32, h: *mut f32) -> bool;
        fn SDL_SetTextureColorMod(texture: *mut SDL_Texture, r: u8, g: u8, b: u8) -> bool;
        fn SDL_GetTextureColorMod(texture: *mut SDL_Texture, r: *mut u8, g: *mut u8, b: *mut u8) -> bool;
        fn SDL_SetTextureAlphaMod(texture: *mut SDL_Texture, alpha: u8) -> bool;
        fn SDL_GetTextureAlphaMod(texture: *mut SDL_Texture, alpha: *mut u8) -> bool;
        fn SDL_SetTextureBlendMode(texture: *mut SDL_Texture, blend_mode: u32) -> bool;
        fn SDL_GetTextureBlendMode(texture: *mut SDL_Texture, blend_mode: *mut u32) -> bool;

        fn SDL_CreateSurface(width: c_int, height: c_int, format: u32) -> *mut SDL_Surface;
        fn SDL_DestroySurface(surface: *mut SDL_Surface);
        fn SDL_LoadBMP(file: *const c_char) -> *mut SDL_Surface;
        fn SDL_SaveBMP(surface: *mut SDL_Surface, file: *const c_char) -> bool;
        fn SDL_FillSurfaceRect(surface: *mut SDL_Surface, rect: *const SDL_Rect, color: u32) -> bool;
        fn SDL_MapSurfaceRGBA(surface: *mut SDL_Surface, r: u8, g: u8, b: u8, a: u8) -> u32;
        fn SDL_SetSurfacePalette(surface: *mut SDL_Surface, palette: *mut SDL_Palette) -> bool;
        fn SDL_GetSurfacePalette(surface: *mut SDL_Surface) -> *mut SDL_Palette;

        fn SDL_CreatePalette(ncolors: c_int) -> *mut SDL_Palette;
        fn SDL_DestroyPalette(palette: *mut SDL_Palette);
        fn SDL_SetPaletteColors(palette: *mut SDL_Palette, colors: *const SDL_Color, firstcolor: c_int, ncolors: c_int) -> bool;

        fn SDL_CreateSystemCursor(id: c_int) -> *mut SDL_Cursor;
        fn SDL_CreateColorCursor(surface: *mut SDL_Surface, hot_x: c_int, hot_y: c_int) -> *mut SDL_Cursor;
        fn SDL_DestroyCursor(cursor: *mut SDL_Cursor);
        fn SDL_SetCursor(cursor: *mut SDL_Cursor) -> bool;
        fn SDL_GetCursor() -> *mut SDL_Cursor;
        fn SDL_GetDefaultCursor() -> *mut SDL_Cursor;
        fn SDL_ShowCursor() -> bool;
        fn SDL_HideCursor() -> bool;
        fn SDL_CursorVisible() -> bool;

        fn SDL_ShowFileDialogWithProperties(
            dialog_type: c_int,
            callback: SDL_DialogFileCallback,
            userdata: *mut c_void,
            props: SDL_PropertiesID,
        );
        fn SDL_ShowSimpleMessageBox(flags: u32, title: *const c_char, message: *const c_char, window: *mut SDL_Window) -> bool;

        fn SDL_CreateTray(icon: *mut SDL_Surface, tooltip: *const c_char) -> *mut SDL_Tray;
        fn SDL_DestroyTray(tray: *mut SDL_Tray);
        fn SDL_SetTrayIcon(tray: *mut SDL_Tray, icon: *mut SDL_Surface);
        fn SDL_SetTrayTooltip(tray: *mut SDL_Tray, tooltip: *const c_char);
        fn SDL_CreateTrayMenu(tray: *mut SDL_Tray) -> *mut SDL_TrayMenu;
        fn SDL_CreateTraySubmenu(entry: *mut SDL_TrayEntry) -> *mut SDL_TrayMenu;
        fn SDL_GetTraySubmenu(entry: *mut SDL_TrayEntry) -> *mut SDL_TrayMenu;
        fn SDL_GetTrayEntries(menu: *mut SDL_TrayMenu, count: *mut c_int) -> *mut *const SDL_TrayEntry;
        fn SDL_InsertTrayEntryAt(menu: *mut SDL_TrayMenu, pos: c_int, label: *const c_char, flags: u32) -> *mut SDL_TrayEntry;
        fn SDL_RemoveTrayEntry(entry: *mut SDL_TrayEntry);
        fn SDL_SetTrayEntryLabel(entry: *mut SDL_TrayEntry, label: *const c_char);
        fn SDL_GetTrayEntryLabel(entry: *mut SDL_TrayEntry) -> *const c_char;
        fn SDL_SetTrayEntryChecked(entry: *mut SDL_TrayEntry, checked: bool);
        fn SDL_GetTrayEntryChecked(entry: *mut SDL_TrayEntry) -> bool;
        fn SDL_SetTrayEntryEnabled(entry: *mut SDL_TrayEntry, enabled: bool);
        fn SDL_GetTrayEntryEnabled(entry: *mut SDL_TrayEntry) -> bool;
        fn SDL_SetTrayEntryCallback(entry: *mut SDL_TrayEntry, callback: SDL_TrayCallback, userdata: *mut c_void);
        fn SDL_ClickTrayEntry(entry: *mut SDL_TrayEntry);
    }
    image {
        fn IMG_Load(file: *const c_char) -> *mut SDL_Surface;
        fn IMG_SavePNG(surface: *mut SDL_Surface, file: *const c_char) -> bool;
    }
    ttf {
        fn TTF_Init() -> bool;
        fn TTF_Quit();
        fn TTF_OpenFont(file: *const c_char, ptsize: f32) -> *mut TTF_Font;
        fn TTF_CloseFont(font: *mut TTF_Font);
        fn TTF_SetFontStyle(font: *mut TTF_Font, style: u32);
        fn TTF_GetFontStyle(font: *const TTF_Font) -> u32;
        fn TTF_SetFontSize(font: *mut TTF_Font, ptsize: f32) -> bool;
        fn TTF_GetFontSize(font: *mut TTF_Font) -> f32;
        fn TTF_RenderText_Blended(font: *mut TTF_Font, text: *const c_char, length: usize, fg: SDL_Color) -> *mut SDL_Surface;
        fn TTF_GetStringSize(font: *mut TTF_Font, text: *const c_char, length: usize, w: *mut c_int, h: *mut c_int) -> bool;
    }
}
impl fmt::Debug for NativeApi {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NativeApi")
            .field("resolved", &self.resolved())
            .finish()
    }
}

/// [`Sdl`] struct is a handler of loaded native libraries.
///
/// It is shared through `Arc` by every wrapper that needs to call native functions.
///
#[derive(Debug)]
pub struct Sdl {
    /// Loaded libraries (they must outlive the table).
    ///
    libraries: Libraries,
    /// Function table.
    ///
    api: NativeApi,
}
impl Sdl {
    /// Opens native libraries and resolves their functions.
    ///
    /// Fails only if SDL3 itself cannot be opened; absent companions are logged and skipped.
    ///
    pub fn load(paths: &LibraryPaths) -> Result<Sdl> {
        let sdl = open_library(&paths.sdl)?;
        let image = paths.image.as_ref().and_then(|path| open_companion(path));
        let ttf = paths.ttf.as_ref().and_then(|path| open_companion(path));

        let libraries = Libraries {
            sdl: Some(sdl),
            image,
            ttf,
        };
        let api = NativeApi::resolve(&libraries);
        log::debug!(
            "resolved {} native functions (image: {}, ttf: {})",
            api.resolved(),
            libraries.image.is_some(),
            libraries.ttf.is_some()
        );
        Ok(Sdl { libraries, api })
    }
    /// Constructs [`Sdl`] from already resolved function table.
    ///
    #[cfg(test)]
    pub(crate) fn from_api(api: NativeApi) -> Sdl {
        Sdl {
            libraries: Libraries::default(),
            api,
        }
    }

    /// Returns function table.
    ///
    pub(crate) fn api(&self) -> &NativeApi {
        &self.api
    }

    /// Returns whether SDL3_image functions are available.
    ///
    pub fn has_image(&self) -> bool {
        self.api.IMG_Load.is_some()
    }
    /// Returns whether SDL3_ttf functions are available.
    ///
    pub fn has_fonts(&self) -> bool {
        self.api.TTF_Init.is_some()
    }

    /// Returns copy of the last native error message.
    ///
    pub fn last_error(&self) -> String {
        match self.api.SDL_GetError {
            // SAFETY: `SDL_GetError` returns valid nul-terminated string (possibly empty).
            Some(get_error) => unsafe { string_from_native(get_error()) }.unwrap_or_default(),
            None => String::new(),
        }
    }
    /// Constructs native error for the function that has just failed.
    ///
    pub(crate) fn error(&self, function: &'static str) -> Error {
        Error::Native {
            function,
            message: self.last_error(),
        }
    }
}

/// Opens required library.
///
fn open_library(path: &Path) -> Result<Library> {
    // SAFETY: SDL libraries do not run initialization routines with preconditions on load.
    unsafe { Library::new(path) }.map_err(|source| Error::Load {
        library: path.display().to_string(),
        source,
    })
}
/// Opens optional library, logging the failure.
///
fn open_companion(path: &Path) -> Option<Library> {
    match open_library(path) {
        Ok(library) => Some(library),
        Err(error) => {
            log::debug!("companion library is not loaded: {error}");
            None
        }
    }
}

/// Copies nul-terminated native string.
///
/// Returns `None` for null pointer.
///
/// # Safety
/// `string` should be null or point to valid nul-terminated string.
///
pub(crate) unsafe fn string_from_native(string: *const c_char) -> Option<String> {
    if string.is_null() {
        None
    } else {
        Some(CStr::from_ptr(string).to_string_lossy().into_owned())
    }
}

/// [`native`] macro calls function from the table, returning `Result` with its return value.
///
/// Arguments are evaluated inside `unsafe` block - caller is responsible
/// for passing valid pointers (which is what handles guarantee).
///
macro_rules! native {
    ($sdl:expr, $name:ident($($argument:expr),* $(,)?)) => {
        match $sdl.api().$name {
            Some(function) => Ok(unsafe { function($($argument),*) }),
            None => Err($crate::error::Error::MissingSymbol(stringify!($name))),
        }
    };
}
/// [`native_ok`] macro calls native function that reports success with `bool`.
///
macro_rules! native_ok {
    ($sdl:expr, $name:ident($($argument:expr),* $(,)?)) => {
        $crate::nativecore::library::native!($sdl, $name($($argument),*)).and_then(|succeeded: bool| {
            if succeeded {
                Ok(())
            } else {
                Err($sdl.error(stringify!($name)))
            }
        })
    };
}
pub(crate) use native;
pub(crate) use native_ok;

#[cfg(test)]
mod tests {
    use super::{LibraryPaths, NativeApi, Sdl};
    use crate::error::Error;

    #[test]
    fn default_paths() {
        let paths = LibraryPaths::default();
        assert!(paths.sdl.to_string_lossy().contains("SDL3"));
        assert!(paths.image.is_some());
        assert!(paths.ttf.is_some());
    }

    #[test]
    fn missing_symbols() {
        let sdl = Sdl::from_api(NativeApi::default());
        assert!(!sdl.has_image());
        assert!(!sdl.has_fonts());
        assert_eq!(sdl.last_error(), "");

        let result = native!(sdl, SDL_WasInit(0));
        assert!(matches!(result, Err(Error::MissingSymbol("SDL_WasInit"))));
    }

    #[test]
    fn failing_load() {
        let paths = LibraryPaths {
            sdl: "definitely-not-a-library.so".into(),
            image: None,
            ttf: None,
        };
        let error = Sdl::load(&paths).expect_err("Library should not exist");
        assert!(error.is_native());
    }
}
