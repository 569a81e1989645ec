//! `utils::windows` submodule implements [`Window`] - the shell of OS window.
//!

use crate::{
    datacore::images::Surface,
    error::{Error, Result},
    eventcore::Event,
    mathcore::vectors::Vector2Int,
    nativecore::{
        ffi::{
            SDL_Window, SDL_FLASH_BRIEFLY, SDL_FLASH_CANCEL, SDL_FLASH_UNTIL_FOCUSED,
            SDL_WINDOWPOS_CENTERED, SDL_WINDOWPOS_UNDEFINED,
        },
        handles::{Handle, WindowKind},
        library::{native, native_ok, string_from_native, Sdl},
        properties::{self, Properties},
        subsystems::{InitFlags, SubsystemGuard},
    },
    utils::{
        displays::Display,
        states::{WindowFlags, WindowState},
    },
    Engine,
};
use serde::{Deserialize, Serialize};
use std::{
    ffi::{c_int, CString},
    fmt,
    ptr::addr_of_mut,
    sync::Arc,
};

/// [`Position`] enum encapsulates possible position settings.
///
/// Example of usage is shown in [`WindowSettings`] docs.
///
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Position {
    /// Exact position that is given by coordinate (left top corner is `(0, 0)`).
    ///
    Exact(Vector2Int),
    /// Centered position.
    ///
    Centered,
}
impl Position {
    /// Returns native coordinates of the position.
    ///
    fn to_native(self) -> (i64, i64) {
        match self {
            Position::Exact(Vector2Int { x, y }) => (i64::from(x), i64::from(y)),
            Position::Centered => {
                let centered = i64::from(SDL_WINDOWPOS_CENTERED);
                (centered, centered)
            }
        }
    }
}
/// [`InitialSizing`] enum lists possible states for window initial sizing.
///
/// Size that was given to window will be preserved, but window itself can be minimized or maximized.
///
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InitialSizing {
    /// Window will be minimized upon initialization.
    ///
    Minimized,
    /// Window will be maximized upon initialization.
    ///
    Maximized,
}
/// [`WindowSettings`] struct carries data that is needed for window configuration.
///
/// If you do not want to tweak settings, just pass `..Default::default()` to fill up remaining options.
///
/// # Examples
/// ```rust
/// # use ggsdl::utils::{WindowSettings, Position, InitialSizing};
/// let window: WindowSettings = WindowSettings {
///     position: Some(Position::Centered),
///     fullscreen: true,
///     initial_sizing: Some(InitialSizing::Maximized),
///     ..WindowSettings::default()
/// };
/// ```
///
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowSettings {
    /// Initial window position (`None` lets the OS decide).
    ///
    pub position: Option<Position>,

    /// Decides whether the window starts in fullscreen mode.
    ///
    pub fullscreen: bool,
    /// Decides whether the window will always be on top or not.
    ///
    pub always_on_top: bool,

    /// Decides whether the window will be resizable or not.
    ///
    pub is_resizable: bool,
    /// Initial sizing of the window.
    ///
    pub initial_sizing: Option<InitialSizing>,

    /// Decides whether the window will be hidden or not.
    ///
    pub is_hidden: bool,
    /// Decides whether the window will be borderless or not.
    ///
    pub is_borderless: bool,
    /// Decides whether the window can receive input focus.
    ///
    pub is_focusable: bool,
    /// Decides whether the window will use high pixel density buffer or not.
    ///
    pub high_pixel_density: bool,
    /// Decides whether the window will have transparent buffer.
    ///
    pub is_transparent: bool,
}
impl WindowSettings {
    /// Writes settings to window creation properties.
    ///
    fn apply_to_properties(self, properties: &mut Properties) -> Result<()> {
        let undefined = i64::from(SDL_WINDOWPOS_UNDEFINED);
        let (x, y) = self.position.map_or((undefined, undefined), Position::to_native);
        properties.set_number(properties::WINDOW_CREATE_X, x)?;
        properties.set_number(properties::WINDOW_CREATE_Y, y)?;

        properties.set_bool(properties::WINDOW_CREATE_FULLSCREEN, self.fullscreen)?;
        properties.set_bool(properties::WINDOW_CREATE_ALWAYS_ON_TOP, self.always_on_top)?;
        properties.set_bool(properties::WINDOW_CREATE_RESIZABLE, self.is_resizable)?;
        match self.initial_sizing {
            Some(InitialSizing::Minimized) => {
                properties.set_bool(properties::WINDOW_CREATE_MINIMIZED, true)?
            }
            Some(InitialSizing::Maximized) => {
                properties.set_bool(properties::WINDOW_CREATE_MAXIMIZED, true)?
            }
            None => {}
        }
        properties.set_bool(properties::WINDOW_CREATE_HIDDEN, self.is_hidden)?;
        properties.set_bool(properties::WINDOW_CREATE_BORDERLESS, self.is_borderless)?;
        properties.set_bool(properties::WINDOW_CREATE_FOCUSABLE, self.is_focusable)?;
        properties.set_bool(
            properties::WINDOW_CREATE_HIGH_PIXEL_DENSITY,
            self.high_pixel_density,
        )?;
        properties.set_bool(properties::WINDOW_CREATE_TRANSPARENT, self.is_transparent)
    }
}
impl Default for WindowSettings {
    fn default() -> Self {
        WindowSettings {
            position: None,

            fullscreen: false,
            always_on_top: false,

            is_resizable: true,
            initial_sizing: None,

            is_hidden: false,
            is_borderless: false,
            is_focusable: true,
            high_pixel_density: true,
            is_transparent: false,
        }
    }
}

/// [`Ping`] enum lists possible ping modes.
///
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Ping {
    /// Window will ping one time.
    Briefly,
    /// Window will be pinging until user focuses on it.
    ///
    UntilFocused,
}
impl Ping {
    // All functions that are providing gate between `ggsdl` and native code extend their API to `crate` visibility.
    /// Returns native representation of this enum.
    ///
    /// `None` corresponds to absence of pinging.
    ///
    pub(crate) fn to_native(this: Option<Ping>) -> c_int {
        match this {
            Some(Ping::Briefly) => SDL_FLASH_BRIEFLY.0,
            Some(Ping::UntilFocused) => SDL_FLASH_UNTIL_FOCUSED.0,
            None => SDL_FLASH_CANCEL.0,
        }
    }
}

impl Engine {
    /// Builds window with given settings.
    ///
    /// Window keeps video subsystem initialized for as long as it lives.
    ///
    /// # Example
    /// ```rust, no_run
    /// # use ggsdl::{Engine, utils::Window};
    /// let engine: Engine = Engine::load()?;
    /// let window: Window = engine.build_window("GGSDL", 1600, 900, Default::default())?;
    /// # Ok::<(), ggsdl::Error>(())
    /// ```
    ///
    pub fn build_window(
        &self,
        title: &str,
        width: u32,
        height: u32,
        window_settings: WindowSettings,
    ) -> Result<Window> {
        let video = self.acquire(InitFlags::VIDEO)?;

        let mut properties = Properties::new(self.sdl())?;
        properties.set_string(properties::WINDOW_CREATE_TITLE, title)?;
        properties.set_number(properties::WINDOW_CREATE_WIDTH, i64::from(width))?;
        properties.set_number(properties::WINDOW_CREATE_HEIGHT, i64::from(height))?;
        window_settings.apply_to_properties(&mut properties)?;

        let raw = native!(
            self.sdl(),
            SDL_CreateWindowWithProperties(properties.id())
        )?;
        let handle: Handle<WindowKind> =
            Handle::owned(self.sdl(), "SDL_CreateWindowWithProperties", raw)?;
        let id = native!(self.sdl(), SDL_GetWindowID(handle.as_ptr()))?;
        if id == 0 {
            return Err(self.sdl().error("SDL_GetWindowID"));
        }
        let flags = native!(self.sdl(), SDL_GetWindowFlags(handle.as_ptr()))?;
        log::debug!("window {id} ({width}x{height}) was created");

        Ok(Window {
            handle,
            id,
            state: WindowState::from_flags(WindowFlags::from_bits_retain(flags)),
            _video: video,
        })
    }
}
/// [`Window`] struct represents the shell of OS window.
///
/// This struct only allows manipulations with window properties, but it does not allow
/// direct pixel access.
/// To use window for drawing you should use [`Renderer`](crate::graphicscore::Renderer).
///
/// Window flags are cached: getters read the cache, mutators call native function first
/// and update the cache only if native call has succeeded.
/// After the window was closed every operation does nothing.
///
/// # Example
/// ```rust, no_run
/// # use ggsdl::{Engine, utils::Window};
/// let engine: Engine = Engine::load()?;
/// let mut window: Window = engine.build_window("GGSDL", 1600, 900, Default::default())?;
/// window.maximize()?;
/// assert!(window.is_maximized());
/// # Ok::<(), ggsdl::Error>(())
/// ```
///
pub struct Window {
    /// Native window.
    ///
    handle: Handle<WindowKind>,
    /// Id of the window.
    ///
    id: u32,
    /// Cached flags.
    ///
    state: WindowState,
    /// Video subsystem (dropped after the window).
    ///
    _video: SubsystemGuard,
}
impl Window {
    // All functions that are providing gate between `ggsdl` and native code extend their API to `crate` visibility.
    /// Returns native window pointer, if window was not closed.
    ///
    pub(crate) fn raw(&self) -> Option<*mut SDL_Window> {
        self.handle.get().map(|raw| raw.as_ptr())
    }
    // All functions that are providing gate between `ggsdl` and native code extend their API to `crate` visibility.
    /// Returns native function table.
    ///
    pub(crate) fn sdl(&self) -> &Arc<Sdl> {
        self.handle.sdl()
    }

    /// Calls native function on the window, if it was not closed.
    ///
    fn call(&self, f: impl FnOnce(&Sdl, *mut SDL_Window) -> Result<()>) -> Result<()> {
        match self.raw() {
            Some(window) => f(self.sdl(), window),
            None => Ok(()),
        }
    }
    /// Calls native mutator and updates cached flag on success.
    ///
    fn change(
        &mut self,
        flag: WindowFlags,
        value: bool,
        f: impl FnOnce(&Sdl, *mut SDL_Window) -> Result<()>,
    ) -> Result<()> {
        if self.raw().is_none() {
            return Ok(());
        }
        self.call(f)?;
        self.state.set(flag, value);
        Ok(())
    }

    /// Returns id of the window.
    ///
    pub fn id(&self) -> u32 {
        self.id
    }
    /// Returns cached state of the window.
    ///
    pub fn state(&self) -> &WindowState {
        &self.state
    }
    /// Returns whether window was closed.
    ///
    pub fn is_closed(&self) -> bool {
        !self.handle.is_valid()
    }
    /// Closes the window, even if it is still referenced.
    ///
    /// Closing twice does nothing.
    ///
    pub fn close(&mut self) {
        if self.handle.release() {
            log::debug!("window {} was closed", self.id);
        }
    }

    /// Folds confirming event into the cache, if event belongs to this window.
    ///
    /// Returns whether cached state has changed.
    ///
    pub fn apply_event(&mut self, event: &Event) -> bool {
        match event {
            Event::Window { window_id, event } if *window_id == self.id => {
                self.state.apply(event)
            }
            _ => false,
        }
    }
    /// Blocks until pending state changes are applied and refreshes cache from native flags.
    ///
    pub fn sync(&mut self) -> Result<()> {
        let Some(window) = self.raw() else {
            return Ok(());
        };
        if !native!(self.sdl(), SDL_SyncWindow(window))? {
            log::debug!("window {} was not synchronized in time", self.id);
        }
        let flags = native!(self.sdl(), SDL_GetWindowFlags(window))?;
        self.state = WindowState::from_flags(WindowFlags::from_bits_retain(flags));
        Ok(())
    }

    /// Maximizes the window.
    ///
    /// Does nothing if window is not resizable or is already maximized.
    ///
    pub fn maximize(&mut self) -> Result<()> {
        if !self.state.is_resizable() || self.state.is_maximized() {
            return Ok(());
        }
        self.change(WindowFlags::MAXIMIZED, true, |sdl, window| {
            native_ok!(sdl, SDL_MaximizeWindow(window))
        })
    }
    /// Returns whether the window is maximised or not.
    ///
    pub fn is_maximized(&self) -> bool {
        self.state.is_maximized()
    }
    /// Minimizes the window.
    ///
    /// Does nothing if window is already minimized.
    ///
    pub fn minimize(&mut self) -> Result<()> {
        if self.state.is_minimized() {
            return Ok(());
        }
        self.change(WindowFlags::MINIMIZED, true, |sdl, window| {
            native_ok!(sdl, SDL_MinimizeWindow(window))
        })
    }
    /// Returns whether the window is minimised or not.
    ///
    pub fn is_minimized(&self) -> bool {
        self.state.is_minimized()
    }
    /// Restores window size after minimisation or maximisation.
    ///
    pub fn restore(&mut self) -> Result<()> {
        self.change(
            WindowFlags::MAXIMIZED | WindowFlags::MINIMIZED,
            false,
            |sdl, window| native_ok!(sdl, SDL_RestoreWindow(window)),
        )
    }

    /// Enables or disables fullscreen mode.
    ///
    pub fn set_fullscreen(&mut self, fullscreen: bool) -> Result<()> {
        self.change(WindowFlags::FULLSCREEN, fullscreen, |sdl, window| {
            native_ok!(sdl, SDL_SetWindowFullscreen(window, fullscreen))
        })
    }
    /// Returns whether the window is in fullscreen mode.
    ///
    pub fn is_fullscreen(&self) -> bool {
        self.state.is_fullscreen()
    }
    /// Removes or restores window decorations.
    ///
    pub fn set_borderless(&mut self, borderless: bool) -> Result<()> {
        self.change(WindowFlags::BORDERLESS, borderless, |sdl, window| {
            native_ok!(sdl, SDL_SetWindowBordered(window, !borderless))
        })
    }
    /// Returns whether the window has no decorations.
    ///
    pub fn is_borderless(&self) -> bool {
        self.state.is_borderless()
    }
    /// Allows or forbids user to resize the window.
    ///
    pub fn set_resizable(&mut self, resizable: bool) -> Result<()> {
        self.change(WindowFlags::RESIZABLE, resizable, |sdl, window| {
            native_ok!(sdl, SDL_SetWindowResizable(window, resizable))
        })
    }
    /// Returns whether the window is resizable.
    ///
    pub fn is_resizable(&self) -> bool {
        self.state.is_resizable()
    }
    /// Sets the window always on top of everything else if `true` is passed.
    /// `false` disables it.
    ///
    pub fn set_always_on_top(&mut self, always_on_top: bool) -> Result<()> {
        self.change(WindowFlags::ALWAYS_ON_TOP, always_on_top, |sdl, window| {
            native_ok!(sdl, SDL_SetWindowAlwaysOnTop(window, always_on_top))
        })
    }
    /// Returns whether the window would always be on top or not.
    ///
    pub fn is_always_on_top(&self) -> bool {
        self.state.is_always_on_top()
    }
    /// Allows or forbids the window to receive input focus.
    ///
    pub fn set_focusable(&mut self, focusable: bool) -> Result<()> {
        self.change(WindowFlags::NOT_FOCUSABLE, !focusable, |sdl, window| {
            native_ok!(sdl, SDL_SetWindowFocusable(window, focusable))
        })
    }
    /// Returns whether the window can receive input focus.
    ///
    pub fn is_focusable(&self) -> bool {
        self.state.is_focusable()
    }
    /// Shows the window.
    ///
    pub fn show(&mut self) -> Result<()> {
        self.change(WindowFlags::HIDDEN, false, |sdl, window| {
            native_ok!(sdl, SDL_ShowWindow(window))
        })
    }
    /// Hides the window.
    ///
    pub fn hide(&mut self) -> Result<()> {
        self.change(WindowFlags::HIDDEN, true, |sdl, window| {
            native_ok!(sdl, SDL_HideWindow(window))
        })
    }
    /// Returns whether the window is hidden.
    ///
    pub fn is_hidden(&self) -> bool {
        self.state.is_hidden()
    }
    /// Raises the window above other windows and asks for input focus.
    ///
    pub fn raise(&self) -> Result<()> {
        self.call(|sdl, window| native_ok!(sdl, SDL_RaiseWindow(window)))
    }

    /// Grabs mouse focus to the window if `true` is passed.
    /// `false` removes focus.
    ///
    pub fn grab_mouse(&mut self, grab: bool) -> Result<()> {
        self.change(WindowFlags::MOUSE_GRABBED, grab, |sdl, window| {
            native_ok!(sdl, SDL_SetWindowMouseGrab(window, grab))
        })
    }
    /// Returns whether mouse focus is grabbed onto window or not.
    ///
    pub fn is_mouse_grabbed(&self) -> bool {
        self.state.is_mouse_grabbed()
    }
    /// Grabs keyboard focus to the window if `true` is passed.
    /// `false` removes focus.
    ///
    pub fn grab_keyboard(&mut self, grab: bool) -> Result<()> {
        self.change(WindowFlags::KEYBOARD_GRABBED, grab, |sdl, window| {
            native_ok!(sdl, SDL_SetWindowKeyboardGrab(window, grab))
        })
    }
    /// Returns whether keyboard focus is grabbed onto window or not.
    ///
    pub fn is_keyboard_grabbed(&self) -> bool {
        self.state.is_keyboard_grabbed()
    }

    /// Sets new title for the window.
    ///
    pub fn set_title(&mut self, title: &str) -> Result<()> {
        let title = CString::new(title)?;
        self.call(|sdl, window| native_ok!(sdl, SDL_SetWindowTitle(window, title.as_ptr())))
    }
    /// Returns window's title (empty for closed window).
    ///
    pub fn title(&self) -> Result<String> {
        let Some(window) = self.raw() else {
            return Ok(String::new());
        };
        let title = native!(self.sdl(), SDL_GetWindowTitle(window))?;
        // SAFETY: native title is nul-terminated and is copied before next window call.
        Ok(unsafe { string_from_native(title) }.unwrap_or_default())
    }

    /// Sets icon for the window.
    ///
    /// OS might not be able to display big icons, so you should experiment with icon size.
    /// 64x64 image size should be displayable, so it's preferred size.
    ///
    pub fn set_icon(&mut self, icon: &Surface) -> Result<()> {
        let icon = icon.raw()?;
        self.call(|sdl, window| native_ok!(sdl, SDL_SetWindowIcon(window, icon)))
    }

    /// Sets new position of the window.
    ///
    pub fn set_position(&mut self, position: Position) -> Result<()> {
        let (x, y) = position.to_native();
        let (x, y) = (x as c_int, y as c_int);
        self.call(|sdl, window| native_ok!(sdl, SDL_SetWindowPosition(window, x, y)))
    }
    /// Returns current position of the window.
    ///
    pub fn position(&self) -> Result<Vector2Int> {
        self.pair(|sdl, window, x, y| native_ok!(sdl, SDL_GetWindowPosition(window, x, y)))
    }

    /// Sets new size for the window.
    ///
    pub fn set_size(&mut self, width: u32, height: u32) -> Result<()> {
        let (w, h) = native_size(width, height)?;
        self.call(|sdl, window| native_ok!(sdl, SDL_SetWindowSize(window, w, h)))
    }
    /// Returns current window size.
    ///
    pub fn size(&self) -> Result<(u32, u32)> {
        self.pair(|sdl, window, w, h| native_ok!(sdl, SDL_GetWindowSize(window, w, h)))
            .map(size_from_native)
    }
    /// Sets minimal possible size for the window.
    ///
    pub fn set_minimal_size(&mut self, width: u32, height: u32) -> Result<()> {
        let (w, h) = native_size(width, height)?;
        self.call(|sdl, window| native_ok!(sdl, SDL_SetWindowMinimumSize(window, w, h)))
    }
    /// Returns window's minimal size.
    ///
    pub fn minimal_size(&self) -> Result<(u32, u32)> {
        self.pair(|sdl, window, w, h| native_ok!(sdl, SDL_GetWindowMinimumSize(window, w, h)))
            .map(size_from_native)
    }
    /// Sets maximal possible size for the window.
    ///
    pub fn set_maximal_size(&mut self, width: u32, height: u32) -> Result<()> {
        let (w, h) = native_size(width, height)?;
        self.call(|sdl, window| native_ok!(sdl, SDL_SetWindowMaximumSize(window, w, h)))
    }
    /// Returns window's maximal size.
    ///
    pub fn maximal_size(&self) -> Result<(u32, u32)> {
        self.pair(|sdl, window, w, h| native_ok!(sdl, SDL_GetWindowMaximumSize(window, w, h)))
            .map(size_from_native)
    }
    /// Reads pair of native integers.
    ///
    fn pair(
        &self,
        f: impl FnOnce(&Sdl, *mut SDL_Window, *mut c_int, *mut c_int) -> Result<()>,
    ) -> Result<Vector2Int> {
        let (mut x, mut y) = (0, 0);
        self.call(|sdl, window| f(sdl, window, addr_of_mut!(x), addr_of_mut!(y)))?;
        Ok(Vector2Int { x, y })
    }

    /// Sets opacity of the window (`0.0` is transparent, `1.0` is opaque).
    ///
    pub fn set_opacity(&mut self, opacity: f32) -> Result<()> {
        let opacity = opacity.clamp(0.0, 1.0);
        self.call(|sdl, window| native_ok!(sdl, SDL_SetWindowOpacity(window, opacity)))
    }
    /// Returns opacity of the window.
    ///
    pub fn opacity(&self) -> Result<f32> {
        match self.raw() {
            Some(window) => native!(self.sdl(), SDL_GetWindowOpacity(window)),
            None => Ok(1.0),
        }
    }

    /// Requests a window to demand attention from the user by pinging.
    ///
    pub fn window_pinging(&mut self, ping: Option<Ping>) -> Result<()> {
        let operation = Ping::to_native(ping);
        self.call(|sdl, window| native_ok!(sdl, SDL_FlashWindow(window, operation)))
    }

    /// Returns ratio of pixels to window coordinates.
    ///
    pub fn pixel_density(&self) -> Result<f32> {
        let Some(window) = self.raw() else {
            return Ok(1.0);
        };
        let density = native!(self.sdl(), SDL_GetWindowPixelDensity(window))?;
        if density == 0.0 {
            return Err(self.sdl().error("SDL_GetWindowPixelDensity"));
        }
        Ok(density)
    }
    /// Returns display that contains the center of the window.
    ///
    pub fn display(&self) -> Result<Display> {
        let window = self.raw().ok_or_else(|| Error::usage("window was closed"))?;
        let id = native!(self.sdl(), SDL_GetDisplayForWindow(window))?;
        if id == 0 {
            return Err(self.sdl().error("SDL_GetDisplayForWindow"));
        }
        Ok(Display::from_id(self.sdl(), id))
    }
}
impl fmt::Debug for Window {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct(&format!("Window {id}", id = self.id))
            .field("state", &self.state.flags())
            .field("closed", &self.is_closed())
            .finish()
    }
}

/// Converts size to native integers.
///
fn native_size(width: u32, height: u32) -> Result<(c_int, c_int)> {
    match (c_int::try_from(width), c_int::try_from(height)) {
        (Ok(w), Ok(h)) => Ok((w, h)),
        _ => Err(Error::usage(format!("window size {width}x{height} is too big"))),
    }
}
/// Converts native size to unsigned integers.
///
fn size_from_native(size: Vector2Int) -> (u32, u32) {
    (size.x.max(0) as u32, size.y.max(0) as u32)
}

#[cfg(test)]
mod tests {
    use super::{InitialSizing, Position, WindowSettings};
    use crate::{
        eventcore::{Event, WindowEvent},
        mathcore::vectors::Vector2Int,
        nativecore::testing::{self, fake_sdl, FAKE_WINDOW_ID},
        utils::WindowFlags,
        Engine,
    };

    fn engine() -> Engine {
        Engine::from_sdl(fake_sdl())
    }

    #[test]
    fn creation_follows_settings() {
        let engine = engine();
        let window = engine
            .build_window(
                "GGSDL",
                800,
                600,
                WindowSettings {
                    initial_sizing: Some(InitialSizing::Maximized),
                    is_focusable: false,
                    position: Some(Position::Centered),
                    ..Default::default()
                },
            )
            .expect("Fake window is created");
        assert_eq!(window.id(), FAKE_WINDOW_ID);
        assert!(window.is_maximized() && window.is_resizable());
        assert!(!window.is_focusable());
        assert_eq!(window.title().expect("Title is readable"), "GGSDL");
        assert_eq!(window.size().expect("Size is readable"), (800, 600));
        assert_eq!(
            engine.lifecycle().count(crate::nativecore::subsystems::InitFlags::VIDEO),
            1
        );

        drop(window);
        assert_eq!(testing::calls("SDL_DestroyWindow"), 1);
        assert!(!engine.lifecycle().is_initialized());
    }

    #[test]
    fn sizing_is_exclusive() {
        let engine = engine();
        let mut window = engine
            .build_window("GGSDL", 800, 600, WindowSettings::default())
            .expect("Fake window is created");

        window.maximize().expect("Maximization succeeds");
        assert!(window.is_maximized() && !window.is_minimized());
        window.maximize().expect("Second maximization is no-op");
        assert_eq!(testing::calls("SDL_MaximizeWindow"), 1);

        window.minimize().expect("Minimization succeeds");
        assert!(window.is_minimized() && !window.is_maximized());
        window.restore().expect("Restoring succeeds");
        assert!(!window.is_minimized() && !window.is_maximized());

        window.set_resizable(false).expect("Resizability is changed");
        window.maximize().expect("Maximization of fixed window is no-op");
        assert!(!window.is_maximized());
        assert_eq!(testing::calls("SDL_MaximizeWindow"), 1);
    }

    #[test]
    fn failed_mutators_keep_cache() {
        let engine = engine();
        let mut window = engine
            .build_window("GGSDL", 800, 600, WindowSettings::default())
            .expect("Fake window is created");

        testing::fail("SDL_SetWindowFullscreen");
        assert!(window
            .set_fullscreen(true)
            .expect_err("Native failure is reported")
            .is_native());
        assert!(!window.is_fullscreen());

        testing::recover("SDL_SetWindowFullscreen");
        window.set_fullscreen(true).expect("Fullscreen is enabled");
        window.set_borderless(true).expect("Borders are removed");
        window.hide().expect("Window is hidden");
        assert!(window.is_fullscreen() && window.is_borderless() && window.is_hidden());
    }

    #[test]
    fn sync_and_events() {
        let engine = engine();
        let mut window = engine
            .build_window("GGSDL", 800, 600, WindowSettings::default())
            .expect("Fake window is created");

        window.maximize().expect("Maximization succeeds");
        // Fake windowing system has refused the request.
        testing::set_window_flags((WindowFlags::RESIZABLE | WindowFlags::MINIMIZED).bits());
        assert!(window.is_maximized());
        window.sync().expect("Synchronization succeeds");
        assert!(window.is_minimized() && !window.is_maximized());

        assert!(window.apply_event(&Event::Window {
            window_id: FAKE_WINDOW_ID,
            event: WindowEvent::Restored,
        }));
        assert!(!window.apply_event(&Event::Window {
            window_id: FAKE_WINDOW_ID + 1,
            event: WindowEvent::Minimized,
        }));
        assert!(!window.is_minimized());
    }

    #[test]
    fn closed_window_is_inert() {
        let engine = engine();
        let mut window = engine
            .build_window("GGSDL", 800, 600, WindowSettings::default())
            .expect("Fake window is created");
        window.close();
        window.close();
        assert!(window.is_closed());
        assert_eq!(testing::calls("SDL_DestroyWindow"), 1);

        window.maximize().expect("No-op");
        window.set_title("closed").expect("No-op");
        window.set_position(Position::Exact(Vector2Int { x: 1, y: 2 })).expect("No-op");
        assert!(!window.is_maximized());
        assert_eq!(testing::calls("SDL_MaximizeWindow"), 0);
        assert_eq!(window.title().expect("Default"), "");
        assert_eq!(window.size().expect("Default"), (0, 0));
        assert!(window.display().expect_err("Closed window").is_usage());
    }

    #[test]
    fn geometry() {
        let engine = engine();
        let mut window = engine
            .build_window("GGSDL", 800, 600, WindowSettings::default())
            .expect("Fake window is created");
        window
            .set_position(Position::Exact(Vector2Int { x: 10, y: 20 }))
            .expect("Position is set");
        assert_eq!(window.position().expect("Readable"), Vector2Int { x: 10, y: 20 });
        window.set_minimal_size(100, 50).expect("Minimal size is set");
        assert_eq!(window.minimal_size().expect("Readable"), (100, 50));
        assert!(window.set_size(u32::MAX, 1).expect_err("Too big").is_usage());
        window.set_opacity(3.0).expect("Opacity is clamped");
        assert_eq!(window.opacity().expect("Readable"), 1.0);
        assert_eq!(window.pixel_density().expect("Readable"), 2.0);
        assert_eq!(window.display().expect("Display is known").id(), 1);
    }
}
