//! `utils::states` submodule implements [`WindowState`] - cached copy of native window flags.
//!
//! # Consistency
//! Cache stores the last *requested* state: mutators of [`Window`](super::Window) change
//! bits only after native call reports success, but windowing systems may apply requests
//! asynchronously (or refuse them silently). Confirming window events can be folded into
//! the cache with [`WindowState::apply`], and [`Window::sync`](super::Window::sync)
//! refreshes it from native flags.
//!

use crate::eventcore::WindowEvent;
use bitflags::bitflags;

bitflags!(
    /// [`WindowFlags`] struct mirrors native window flags.
    ///
    #[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
    pub struct WindowFlags: u64 {
        /// Window is in fullscreen mode.
        ///
        const FULLSCREEN = 0x0000_0001;
        /// Window is usable with OpenGL context.
        ///
        const OPENGL = 0x0000_0002;
        /// Window is fully occluded.
        ///
        const OCCLUDED = 0x0000_0004;
        /// Window is not visible.
        ///
        const HIDDEN = 0x0000_0008;
        /// Window has no decorations.
        ///
        const BORDERLESS = 0x0000_0010;
        /// Window can be resized.
        ///
        const RESIZABLE = 0x0000_0020;
        /// Window is minimized.
        ///
        const MINIMIZED = 0x0000_0040;
        /// Window is maximized.
        ///
        const MAXIMIZED = 0x0000_0080;
        /// Window has grabbed mouse input.
        ///
        const MOUSE_GRABBED = 0x0000_0100;
        /// Window has input focus.
        ///
        const INPUT_FOCUS = 0x0000_0200;
        /// Window has mouse focus.
        ///
        const MOUSE_FOCUS = 0x0000_0400;
        /// Window was not created by SDL.
        ///
        const EXTERNAL = 0x0000_0800;
        /// Window is modal.
        ///
        const MODAL = 0x0000_1000;
        /// Window uses high pixel density back buffer.
        ///
        const HIGH_PIXEL_DENSITY = 0x0000_2000;
        /// Window has mouse captured.
        ///
        const MOUSE_CAPTURE = 0x0000_4000;
        /// Window has relative mouse mode.
        ///
        const MOUSE_RELATIVE_MODE = 0x0000_8000;
        /// Window is always on top.
        ///
        const ALWAYS_ON_TOP = 0x0001_0000;
        /// Window is utility window.
        ///
        const UTILITY = 0x0002_0000;
        /// Window is tooltip.
        ///
        const TOOLTIP = 0x0004_0000;
        /// Window is popup menu.
        ///
        const POPUP_MENU = 0x0008_0000;
        /// Window has grabbed keyboard input.
        ///
        const KEYBOARD_GRABBED = 0x0010_0000;
        /// Window is usable with Vulkan.
        ///
        const VULKAN = 0x1000_0000;
        /// Window is usable with Metal.
        ///
        const METAL = 0x2000_0000;
        /// Window has transparent buffer.
        ///
        const TRANSPARENT = 0x4000_0000;
        /// Window should not be focusable.
        ///
        const NOT_FOCUSABLE = 0x8000_0000;
    }
);

/// [`WindowState`] struct is a cache of window flags.
///
/// Maximized and minimized states are mutually exclusive.
///
/// # Example
/// ```rust
/// # use ggsdl::utils::{WindowFlags, WindowState};
/// let mut state: WindowState = WindowState::from_flags(WindowFlags::MINIMIZED);
/// state.set_maximized(true);
/// assert!(state.is_maximized() && !state.is_minimized());
/// ```
///
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct WindowState {
    /// Cached flags.
    ///
    flags: WindowFlags,
}
impl WindowState {
    /// Initializes state from flags.
    ///
    /// If both maximized and minimized flags are set, minimized wins.
    ///
    pub fn from_flags(flags: WindowFlags) -> WindowState {
        let mut flags = flags;
        if flags.contains(WindowFlags::MINIMIZED) {
            flags.remove(WindowFlags::MAXIMIZED);
        }
        WindowState { flags }
    }
    /// Returns cached flags.
    ///
    pub fn flags(&self) -> WindowFlags {
        self.flags
    }

    /// Sets or clears flag.
    ///
    pub fn set(&mut self, flag: WindowFlags, value: bool) {
        if flag.intersects(WindowFlags::MAXIMIZED | WindowFlags::MINIMIZED) {
            if flag.contains(WindowFlags::MAXIMIZED) {
                self.set_maximized(value);
            }
            if flag.contains(WindowFlags::MINIMIZED) {
                self.set_minimized(value);
            }
            self.flags.set(flag - WindowFlags::MAXIMIZED - WindowFlags::MINIMIZED, value);
        } else {
            self.flags.set(flag, value);
        }
    }
    /// Marks window as maximized, which clears minimized state.
    ///
    pub fn set_maximized(&mut self, value: bool) {
        if value {
            self.flags.remove(WindowFlags::MINIMIZED);
        }
        self.flags.set(WindowFlags::MAXIMIZED, value);
    }
    /// Marks window as minimized, which clears maximized state.
    ///
    pub fn set_minimized(&mut self, value: bool) {
        if value {
            self.flags.remove(WindowFlags::MAXIMIZED);
        }
        self.flags.set(WindowFlags::MINIMIZED, value);
    }
    /// Marks window as restored (neither maximized nor minimized).
    ///
    pub fn restore(&mut self) {
        self.flags
            .remove(WindowFlags::MAXIMIZED | WindowFlags::MINIMIZED);
    }

    /// Folds confirming window event into the cache.
    ///
    /// Returns whether any flag has changed.
    ///
    pub fn apply(&mut self, event: &WindowEvent) -> bool {
        let before = self.flags;
        match event {
            WindowEvent::Shown => self.flags.remove(WindowFlags::HIDDEN),
            WindowEvent::Hidden => self.flags.insert(WindowFlags::HIDDEN),
            WindowEvent::Exposed => self.flags.remove(WindowFlags::OCCLUDED),
            WindowEvent::Occluded => self.flags.insert(WindowFlags::OCCLUDED),
            WindowEvent::Minimized => self.set_minimized(true),
            WindowEvent::Maximized => self.set_maximized(true),
            WindowEvent::Restored => self.restore(),
            WindowEvent::EnterFullscreen => self.flags.insert(WindowFlags::FULLSCREEN),
            WindowEvent::LeaveFullscreen => self.flags.remove(WindowFlags::FULLSCREEN),
            WindowEvent::FocusGained => self.flags.insert(WindowFlags::INPUT_FOCUS),
            WindowEvent::FocusLost => self.flags.remove(WindowFlags::INPUT_FOCUS),
            WindowEvent::MouseEnter => self.flags.insert(WindowFlags::MOUSE_FOCUS),
            WindowEvent::MouseLeave => self.flags.remove(WindowFlags::MOUSE_FOCUS),
            _ => {}
        }
        before != self.flags
    }

    /// Returns whether window is maximized.
    ///
    pub fn is_maximized(&self) -> bool {
        self.flags.contains(WindowFlags::MAXIMIZED)
    }
    /// Returns whether window is minimized.
    ///
    pub fn is_minimized(&self) -> bool {
        self.flags.contains(WindowFlags::MINIMIZED)
    }
    /// Returns whether window is in fullscreen mode.
    ///
    pub fn is_fullscreen(&self) -> bool {
        self.flags.contains(WindowFlags::FULLSCREEN)
    }
    /// Returns whether window has no decorations.
    ///
    pub fn is_borderless(&self) -> bool {
        self.flags.contains(WindowFlags::BORDERLESS)
    }
    /// Returns whether window can be resized by user.
    ///
    pub fn is_resizable(&self) -> bool {
        self.flags.contains(WindowFlags::RESIZABLE)
    }
    /// Returns whether window is always on top.
    ///
    pub fn is_always_on_top(&self) -> bool {
        self.flags.contains(WindowFlags::ALWAYS_ON_TOP)
    }
    /// Returns whether window can receive input focus.
    ///
    pub fn is_focusable(&self) -> bool {
        !self.flags.contains(WindowFlags::NOT_FOCUSABLE)
    }
    /// Returns whether window is hidden.
    ///
    pub fn is_hidden(&self) -> bool {
        self.flags.contains(WindowFlags::HIDDEN)
    }
    /// Returns whether window has input focus.
    ///
    pub fn has_input_focus(&self) -> bool {
        self.flags.contains(WindowFlags::INPUT_FOCUS)
    }
    /// Returns whether window has mouse focus.
    ///
    pub fn has_mouse_focus(&self) -> bool {
        self.flags.contains(WindowFlags::MOUSE_FOCUS)
    }
    /// Returns whether window has grabbed mouse.
    ///
    pub fn is_mouse_grabbed(&self) -> bool {
        self.flags.contains(WindowFlags::MOUSE_GRABBED)
    }
    /// Returns whether window has grabbed keyboard.
    ///
    pub fn is_keyboard_grabbed(&self) -> bool {
        self.flags.contains(WindowFlags::KEYBOARD_GRABBED)
    }
    /// Returns whether window is fully occluded.
    ///
    pub fn is_occluded(&self) -> bool {
        self.flags.contains(WindowFlags::OCCLUDED)
    }
}

#[cfg(test)]
mod tests {
    use super::{WindowFlags, WindowState};
    use crate::eventcore::WindowEvent;

    #[test]
    fn exclusive_sizing() {
        let mut state = WindowState::from_flags(WindowFlags::MAXIMIZED | WindowFlags::MINIMIZED);
        assert!(state.is_minimized() && !state.is_maximized());

        state.set_maximized(true);
        assert!(state.is_maximized() && !state.is_minimized());
        state.set(WindowFlags::MINIMIZED, true);
        assert!(state.is_minimized() && !state.is_maximized());
        state.restore();
        assert!(!state.is_minimized() && !state.is_maximized());
    }

    #[test]
    fn focusable_is_inverse_of_native_flag() {
        assert!(WindowState::default().is_focusable());
        assert!(!WindowState::from_flags(WindowFlags::NOT_FOCUSABLE).is_focusable());
    }

    #[test]
    fn confirming_events() {
        let mut state = WindowState::from_flags(WindowFlags::HIDDEN | WindowFlags::RESIZABLE);
        assert!(state.apply(&WindowEvent::Shown));
        assert!(!state.apply(&WindowEvent::Shown));
        assert!(state.apply(&WindowEvent::Maximized));
        assert!(state.apply(&WindowEvent::Minimized));
        assert!(!state.is_maximized());
        assert!(state.apply(&WindowEvent::EnterFullscreen));
        assert!(state.apply(&WindowEvent::FocusGained));
        assert!(!state.apply(&WindowEvent::Moved { x: 1, y: 2 }));
        assert_eq!(
            state.flags(),
            WindowFlags::RESIZABLE
                | WindowFlags::MINIMIZED
                | WindowFlags::FULLSCREEN
                | WindowFlags::INPUT_FOCUS
        );
    }
}
