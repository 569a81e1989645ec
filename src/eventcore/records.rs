//! `eventcore::records` submodule implements [`EventRecord`] - bit-for-bit copy of native event -
//! and its safe decoded form, [`Event`].
//!
//! Every native event starts with 32-bit type discriminant, which decides how the rest of
//! 128 bytes is read. Events that `ggsdl` does not decode are kept as [`Event::Other`]
//! with the whole record, so nothing is lost.
//!

use crate::{
    error::{Error, Result},
    mathcore::vectors::Vector2,
    nativecore::{
        ffi::{
            SDL_DisplayEvent, SDL_Event, SDL_Scancode,
            SDL_WindowEvent, SDL_MOUSEWHEEL_FLIPPED, SDL_MOUSEWHEEL_NORMAL,
        },
        library::string_from_native,
    },
};
use bitflags::bitflags;
use std::{ffi::c_int, fmt, mem::zeroed};

/// [`EventType`] struct is a newtype over native event type discriminant.
///
/// Types are ordered, so ranges of them can be used to filter the queue.
///
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EventType(pub u32);
impl EventType {
    /// The smallest event type.
    ///
    pub const FIRST: EventType = EventType(0x0);

    /// User requested quit.
    ///
    pub const QUIT: EventType = EventType(0x100);
    /// OS is terminating the application.
    ///
    pub const TERMINATING: EventType = EventType(0x101);
    /// OS is low on memory.
    ///
    pub const LOW_MEMORY: EventType = EventType(0x102);
    /// Locale changed.
    ///
    pub const LOCALE_CHANGED: EventType = EventType(0x107);
    /// System theme changed.
    ///
    pub const SYSTEM_THEME_CHANGED: EventType = EventType(0x108);

    /// Display orientation changed.
    ///
    pub const DISPLAY_ORIENTATION: EventType = EventType(0x151);
    /// Display was connected.
    ///
    pub const DISPLAY_ADDED: EventType = EventType(0x152);
    /// Display was disconnected.
    ///
    pub const DISPLAY_REMOVED: EventType = EventType(0x153);
    /// Display moved.
    ///
    pub const DISPLAY_MOVED: EventType = EventType(0x154);
    /// Desktop mode of display changed.
    ///
    pub const DISPLAY_DESKTOP_MODE_CHANGED: EventType = EventType(0x155);
    /// Current mode of display changed.
    ///
    pub const DISPLAY_CURRENT_MODE_CHANGED: EventType = EventType(0x156);
    /// Content scale of display changed.
    ///
    pub const DISPLAY_CONTENT_SCALE_CHANGED: EventType = EventType(0x157);

    /// Window was shown.
    ///
    pub const WINDOW_SHOWN: EventType = EventType(0x202);
    /// Window was hidden.
    ///
    pub const WINDOW_HIDDEN: EventType = EventType(0x203);
    /// Window was exposed and should be redrawn.
    ///
    pub const WINDOW_EXPOSED: EventType = EventType(0x204);
    /// Window was moved.
    ///
    pub const WINDOW_MOVED: EventType = EventType(0x205);
    /// Window was resized.
    ///
    pub const WINDOW_RESIZED: EventType = EventType(0x206);
    /// Pixel size of window changed.
    ///
    pub const WINDOW_PIXEL_SIZE_CHANGED: EventType = EventType(0x207);
    /// Window was minimized.
    ///
    pub const WINDOW_MINIMIZED: EventType = EventType(0x209);
    /// Window was maximized.
    ///
    pub const WINDOW_MAXIMIZED: EventType = EventType(0x20A);
    /// Window was restored.
    ///
    pub const WINDOW_RESTORED: EventType = EventType(0x20B);
    /// Mouse entered window.
    ///
    pub const WINDOW_MOUSE_ENTER: EventType = EventType(0x20C);
    /// Mouse left window.
    ///
    pub const WINDOW_MOUSE_LEAVE: EventType = EventType(0x20D);
    /// Window gained keyboard focus.
    ///
    pub const WINDOW_FOCUS_GAINED: EventType = EventType(0x20E);
    /// Window lost keyboard focus.
    ///
    pub const WINDOW_FOCUS_LOST: EventType = EventType(0x20F);
    /// Window manager requested window to close.
    ///
    pub const WINDOW_CLOSE_REQUESTED: EventType = EventType(0x210);
    /// Window moved to another display.
    ///
    pub const WINDOW_DISPLAY_CHANGED: EventType = EventType(0x213);
    /// Display scale of window changed.
    ///
    pub const WINDOW_DISPLAY_SCALE_CHANGED: EventType = EventType(0x214);
    /// Window was fully occluded.
    ///
    pub const WINDOW_OCCLUDED: EventType = EventType(0x216);
    /// Window entered fullscreen.
    ///
    pub const WINDOW_ENTER_FULLSCREEN: EventType = EventType(0x217);
    /// Window left fullscreen.
    ///
    pub const WINDOW_LEAVE_FULLSCREEN: EventType = EventType(0x218);
    /// Window is about to be destroyed.
    ///
    pub const WINDOW_DESTROYED: EventType = EventType(0x219);
    /// The first window event type.
    ///
    pub const WINDOW_FIRST: EventType = EventType::WINDOW_SHOWN;
    /// The last window event type.
    ///
    pub const WINDOW_LAST: EventType = EventType(0x21A);

    /// Key was pressed.
    ///
    pub const KEY_DOWN: EventType = EventType(0x300);
    /// Key was released.
    ///
    pub const KEY_UP: EventType = EventType(0x301);
    /// Text was entered.
    ///
    pub const TEXT_INPUT: EventType = EventType(0x303);

    /// Mouse moved.
    ///
    pub const MOUSE_MOTION: EventType = EventType(0x400);
    /// Mouse button was pressed.
    ///
    pub const MOUSE_BUTTON_DOWN: EventType = EventType(0x401);
    /// Mouse button was released.
    ///
    pub const MOUSE_BUTTON_UP: EventType = EventType(0x402);
    /// Mouse wheel was scrolled.
    ///
    pub const MOUSE_WHEEL: EventType = EventType(0x403);

    /// Render targets were reset and their content should be updated.
    ///
    pub const RENDER_TARGETS_RESET: EventType = EventType(0x2000);
    /// Render device was reset and every texture should be recreated.
    ///
    pub const RENDER_DEVICE_RESET: EventType = EventType(0x2001);
    /// Render device was lost.
    ///
    pub const RENDER_DEVICE_LOST: EventType = EventType(0x2002);

    /// The first application defined event type.
    ///
    pub const USER: EventType = EventType(0x8000);
    /// The largest event type.
    ///
    pub const LAST: EventType = EventType(0xFFFF);

    /// Returns whether this type is application defined.
    ///
    pub fn is_user(self) -> bool {
        (EventType::USER..=EventType::LAST).contains(&self)
    }
}

/// [`Keycode`] struct is a newtype over virtual key code (layout dependent).
///
/// Printable keys are represented by their unshifted character.
///
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Keycode(pub u32);
impl Keycode {
    /// Unknown key.
    ///
    pub const UNKNOWN: Keycode = Keycode(0x00);
    /// Return (enter) key.
    ///
    pub const RETURN: Keycode = Keycode(0x0D);
    /// Escape key.
    ///
    pub const ESCAPE: Keycode = Keycode(0x1B);
    /// Backspace key.
    ///
    pub const BACKSPACE: Keycode = Keycode(0x08);
    /// Tab key.
    ///
    pub const TAB: Keycode = Keycode(0x09);
    /// Space key.
    ///
    pub const SPACE: Keycode = Keycode(0x20);
    /// Right arrow key.
    ///
    pub const RIGHT: Keycode = Keycode(0x4000_004F);
    /// Left arrow key.
    ///
    pub const LEFT: Keycode = Keycode(0x4000_0050);
    /// Down arrow key.
    ///
    pub const DOWN: Keycode = Keycode(0x4000_0051);
    /// Up arrow key.
    ///
    pub const UP: Keycode = Keycode(0x4000_0052);
    /// F11 key.
    ///
    pub const F11: Keycode = Keycode(0x4000_0044);

    /// Returns keycode of printable character key.
    ///
    pub fn from_char(character: char) -> Keycode {
        Keycode(u32::from(character.to_ascii_lowercase()))
    }
}
/// [`Scancode`] struct is a newtype over physical key code (layout independent).
///
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Scancode(pub u32);
impl Scancode {
    /// Physical `A` key.
    ///
    pub const A: Scancode = Scancode(4);
    /// Physical `D` key.
    ///
    pub const D: Scancode = Scancode(7);
    /// Physical `S` key.
    ///
    pub const S: Scancode = Scancode(22);
    /// Physical `W` key.
    ///
    pub const W: Scancode = Scancode(26);
    /// Physical return key.
    ///
    pub const RETURN: Scancode = Scancode(40);
    /// Physical escape key.
    ///
    pub const ESCAPE: Scancode = Scancode(41);
    /// Physical space key.
    ///
    pub const SPACE: Scancode = Scancode(44);
}

bitflags!(
    /// [`KeyModifiers`] struct lists keyboard modifiers that were active during key event.
    ///
    #[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
    pub struct KeyModifiers: u16 {
        /// Left shift.
        ///
        const LEFT_SHIFT = 0x0001;
        /// Right shift.
        ///
        const RIGHT_SHIFT = 0x0002;
        /// Left control.
        ///
        const LEFT_CTRL = 0x0040;
        /// Right control.
        ///
        const RIGHT_CTRL = 0x0080;
        /// Left alt.
        ///
        const LEFT_ALT = 0x0100;
        /// Right alt.
        ///
        const RIGHT_ALT = 0x0200;
        /// Left GUI (Windows, Command) key.
        ///
        const LEFT_GUI = 0x0400;
        /// Right GUI (Windows, Command) key.
        ///
        const RIGHT_GUI = 0x0800;
        /// Num lock.
        ///
        const NUM_LOCK = 0x1000;
        /// Caps lock.
        ///
        const CAPS_LOCK = 0x2000;
        /// AltGr.
        ///
        const MODE = 0x4000;
        /// Scroll lock.
        ///
        const SCROLL_LOCK = 0x8000;

        /// Any shift.
        ///
        const SHIFT = Self::LEFT_SHIFT.bits() | Self::RIGHT_SHIFT.bits();
        /// Any control.
        ///
        const CTRL = Self::LEFT_CTRL.bits() | Self::RIGHT_CTRL.bits();
        /// Any alt.
        ///
        const ALT = Self::LEFT_ALT.bits() | Self::RIGHT_ALT.bits();
        /// Any GUI key.
        ///
        const GUI = Self::LEFT_GUI.bits() | Self::RIGHT_GUI.bits();
    }
);
bitflags!(
    /// [`MouseButtonFlags`] struct lists mouse buttons that are held.
    ///
    #[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
    pub struct MouseButtonFlags: u32 {
        /// Left button.
        ///
        const LEFT = 0x01;
        /// Middle button.
        ///
        const MIDDLE = 0x02;
        /// Right button.
        ///
        const RIGHT = 0x04;
        /// First extra button.
        ///
        const X1 = 0x08;
        /// Second extra button.
        ///
        const X2 = 0x10;
    }
);

/// [`MouseButton`] enum lists mouse buttons.
///
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum MouseButton {
    /// Left button.
    ///
    Left,
    /// Middle button (wheel press).
    ///
    Middle,
    /// Right button.
    ///
    Right,
    /// First extra button.
    ///
    X1,
    /// Second extra button.
    ///
    X2,
    /// Any other button index.
    ///
    Other(u8),
}
impl MouseButton {
    // All functions that are providing gate between `ggsdl` and native code extend their API to `crate` visibility.
    /// Converts native button index to [`MouseButton`].
    ///
    pub(crate) fn from_native(button: u8) -> MouseButton {
        match button {
            1 => MouseButton::Left,
            2 => MouseButton::Middle,
            3 => MouseButton::Right,
            4 => MouseButton::X1,
            5 => MouseButton::X2,
            other => MouseButton::Other(other),
        }
    }
    // All functions that are providing gate between `ggsdl` and native code extend their API to `crate` visibility.
    /// Returns native button index.
    ///
    pub(crate) fn to_native(self) -> u8 {
        match self {
            MouseButton::Left => 1,
            MouseButton::Middle => 2,
            MouseButton::Right => 3,
            MouseButton::X1 => 4,
            MouseButton::X2 => 5,
            MouseButton::Other(other) => other,
        }
    }
}

/// [`WindowEvent`] enum lists changes of window state.
///
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum WindowEvent {
    /// Window was shown.
    ///
    Shown,
    /// Window was hidden.
    ///
    Hidden,
    /// Window should be redrawn.
    ///
    Exposed,
    /// Window was moved to new position.
    ///
    Moved {
        /// Horizontal position.
        ///
        x: i32,
        /// Vertical position.
        ///
        y: i32,
    },
    /// Window was resized.
    ///
    Resized {
        /// New width.
        ///
        width: i32,
        /// New height.
        ///
        height: i32,
    },
    /// Pixel size of window changed.
    ///
    PixelSizeChanged {
        /// New width in pixels.
        ///
        width: i32,
        /// New height in pixels.
        ///
        height: i32,
    },
    /// Window was minimized.
    ///
    Minimized,
    /// Window was maximized.
    ///
    Maximized,
    /// Window was restored from minimized or maximized state.
    ///
    Restored,
    /// Mouse entered window.
    ///
    MouseEnter,
    /// Mouse left window.
    ///
    MouseLeave,
    /// Window gained keyboard focus.
    ///
    FocusGained,
    /// Window lost keyboard focus.
    ///
    FocusLost,
    /// Window manager asks to close window.
    ///
    CloseRequested,
    /// Window moved to another display.
    ///
    DisplayChanged(u32),
    /// Window was fully occluded.
    ///
    Occluded,
    /// Window entered fullscreen.
    ///
    EnterFullscreen,
    /// Window left fullscreen.
    ///
    LeaveFullscreen,
    /// Window is about to be destroyed.
    ///
    Destroyed,
    /// Any other window event.
    ///
    Other(EventType),
}
impl WindowEvent {
    /// Decodes window event from its type and data.
    ///
    fn decode(event_type: EventType, data1: i32, data2: i32) -> WindowEvent {
        match event_type {
            EventType::WINDOW_SHOWN => WindowEvent::Shown,
            EventType::WINDOW_HIDDEN => WindowEvent::Hidden,
            EventType::WINDOW_EXPOSED => WindowEvent::Exposed,
            EventType::WINDOW_MOVED => WindowEvent::Moved { x: data1, y: data2 },
            EventType::WINDOW_RESIZED => WindowEvent::Resized {
                width: data1,
                height: data2,
            },
            EventType::WINDOW_PIXEL_SIZE_CHANGED => WindowEvent::PixelSizeChanged {
                width: data1,
                height: data2,
            },
            EventType::WINDOW_MINIMIZED => WindowEvent::Minimized,
            EventType::WINDOW_MAXIMIZED => WindowEvent::Maximized,
            EventType::WINDOW_RESTORED => WindowEvent::Restored,
            EventType::WINDOW_MOUSE_ENTER => WindowEvent::MouseEnter,
            EventType::WINDOW_MOUSE_LEAVE => WindowEvent::MouseLeave,
            EventType::WINDOW_FOCUS_GAINED => WindowEvent::FocusGained,
            EventType::WINDOW_FOCUS_LOST => WindowEvent::FocusLost,
            EventType::WINDOW_CLOSE_REQUESTED => WindowEvent::CloseRequested,
            EventType::WINDOW_DISPLAY_CHANGED => WindowEvent::DisplayChanged(data1 as u32),
            EventType::WINDOW_OCCLUDED => WindowEvent::Occluded,
            EventType::WINDOW_ENTER_FULLSCREEN => WindowEvent::EnterFullscreen,
            EventType::WINDOW_LEAVE_FULLSCREEN => WindowEvent::LeaveFullscreen,
            EventType::WINDOW_DESTROYED => WindowEvent::Destroyed,
            other => WindowEvent::Other(other),
        }
    }
    /// Returns native type and data of window event.
    ///
    fn encode(self) -> (EventType, i32, i32) {
        match self {
            WindowEvent::Shown => (EventType::WINDOW_SHOWN, 0, 0),
            WindowEvent::Hidden => (EventType::WINDOW_HIDDEN, 0, 0),
            WindowEvent::Exposed => (EventType::WINDOW_EXPOSED, 0, 0),
            WindowEvent::Moved { x, y } => (EventType::WINDOW_MOVED, x, y),
            WindowEvent::Resized { width, height } => (EventType::WINDOW_RESIZED, width, height),
            WindowEvent::PixelSizeChanged { width, height } => {
                (EventType::WINDOW_PIXEL_SIZE_CHANGED, width, height)
            }
            WindowEvent::Minimized => (EventType::WINDOW_MINIMIZED, 0, 0),
            WindowEvent::Maximized => (EventType::WINDOW_MAXIMIZED, 0, 0),
            WindowEvent::Restored => (EventType::WINDOW_RESTORED, 0, 0),
            WindowEvent::MouseEnter => (EventType::WINDOW_MOUSE_ENTER, 0, 0),
            WindowEvent::MouseLeave => (EventType::WINDOW_MOUSE_LEAVE, 0, 0),
            WindowEvent::FocusGained => (EventType::WINDOW_FOCUS_GAINED, 0, 0),
            WindowEvent::FocusLost => (EventType::WINDOW_FOCUS_LOST, 0, 0),
            WindowEvent::CloseRequested => (EventType::WINDOW_CLOSE_REQUESTED, 0, 0),
            WindowEvent::DisplayChanged(display) => {
                (EventType::WINDOW_DISPLAY_CHANGED, display as i32, 0)
            }
            WindowEvent::Occluded => (EventType::WINDOW_OCCLUDED, 0, 0),
            WindowEvent::EnterFullscreen => (EventType::WINDOW_ENTER_FULLSCREEN, 0, 0),
            WindowEvent::LeaveFullscreen => (EventType::WINDOW_LEAVE_FULLSCREEN, 0, 0),
            WindowEvent::Destroyed => (EventType::WINDOW_DESTROYED, 0, 0),
            WindowEvent::Other(event_type) => (event_type, 0, 0),
        }
    }
}

/// [`Event`] enum is a safe decoded form of native event.
///
#[derive(Clone, Debug, PartialEq)]
pub enum Event {
    /// User requested quit (for example, by closing the last window).
    ///
    Quit,
    /// Display state changed.
    ///
    Display {
        /// Exact display event type.
        ///
        event_type: EventType,
        /// Associated display.
        ///
        display_id: u32,
        /// Event dependent data.
        ///
        data: i32,
    },
    /// Window state changed.
    ///
    Window {
        /// Associated window.
        ///
        window_id: u32,
        /// What has changed.
        ///
        event: WindowEvent,
    },
    /// Key was pressed or released.
    ///
    Keyboard {
        /// Window with keyboard focus.
        ///
        window_id: u32,
        /// Virtual key.
        ///
        keycode: Keycode,
        /// Physical key.
        ///
        scancode: Scancode,
        /// Active modifiers.
        ///
        modifiers: KeyModifiers,
        /// Whether key is pressed.
        ///
        down: bool,
        /// Whether this is key repeat.
        ///
        repeat: bool,
    },
    /// Text was entered.
    ///
    TextInput {
        /// Window with keyboard focus.
        ///
        window_id: u32,
        /// Entered text.
        ///
        text: String,
    },
    /// Mouse moved.
    ///
    MouseMotion {
        /// Window with mouse focus.
        ///
        window_id: u32,
        /// Mouse instance.
        ///
        mouse_id: u32,
        /// Buttons that are held.
        ///
        buttons: MouseButtonFlags,
        /// Position relative to window.
        ///
        position: Vector2,
        /// Motion since last event.
        ///
        relative: Vector2,
    },
    /// Mouse button was pressed or released.
    ///
    MouseButton {
        /// Window with mouse focus.
        ///
        window_id: u32,
        /// Mouse instance.
        ///
        mouse_id: u32,
        /// Button.
        ///
        button: MouseButton,
        /// Whether button is pressed.
        ///
        down: bool,
        /// Click count (2 for double click, etc.).
        ///
        clicks: u8,
        /// Position relative to window.
        ///
        position: Vector2,
    },
    /// Mouse wheel was scrolled.
    ///
    MouseWheel {
        /// Window with mouse focus.
        ///
        window_id: u32,
        /// Mouse instance.
        ///
        mouse_id: u32,
        /// Scroll amount (positive `y` is away from the user).
        ///
        scroll: Vector2,
        /// Whether OS reports flipped scroll direction.
        ///
        flipped: bool,
        /// Mouse position relative to window.
        ///
        position: Vector2,
    },
    /// Renderer state changed.
    ///
    Render {
        /// Exact render event type.
        ///
        event_type: EventType,
        /// Window of the renderer.
        ///
        window_id: u32,
    },
    /// Application defined event.
    ///
    User {
        /// Registered event type.
        ///
        event_type: EventType,
        /// Associated window (0 if none).
        ///
        window_id: u32,
        /// Application defined code.
        ///
        code: i32,
        /// Application defined payload.
        ///
        data: (usize, usize),
    },
    /// Event that is not decoded by `ggsdl`.
    ///
    Other(EventRecord),
}
impl Event {
    /// Returns native type of the event.
    ///
    pub fn event_type(&self) -> EventType {
        match self {
            Event::Quit => EventType::QUIT,
            Event::Display { event_type, .. }
            | Event::Render { event_type, .. }
            | Event::User { event_type, .. } => *event_type,
            Event::Window { event, .. } => event.encode().0,
            Event::Keyboard { down: true, .. } => EventType::KEY_DOWN,
            Event::Keyboard { down: false, .. } => EventType::KEY_UP,
            Event::TextInput { .. } => EventType::TEXT_INPUT,
            Event::MouseMotion { .. } => EventType::MOUSE_MOTION,
            Event::MouseButton { down: true, .. } => EventType::MOUSE_BUTTON_DOWN,
            Event::MouseButton { down: false, .. } => EventType::MOUSE_BUTTON_UP,
            Event::MouseWheel { .. } => EventType::MOUSE_WHEEL,
            Event::Other(record) => record.event_type(),
        }
    }
    /// Returns window this event is associated with, if any.
    ///
    pub fn window_id(&self) -> Option<u32> {
        match self {
            Event::Window { window_id, .. }
            | Event::Keyboard { window_id, .. }
            | Event::TextInput { window_id, .. }
            | Event::MouseMotion { window_id, .. }
            | Event::MouseButton { window_id, .. }
            | Event::MouseWheel { window_id, .. }
            | Event::Render { window_id, .. }
            | Event::User { window_id, .. } => Some(*window_id),
            Event::Quit | Event::Display { .. } | Event::Other(_) => None,
        }
    }
}

/// [`EventRecord`] struct is a bit-for-bit copy of native event (128 bytes).
///
#[repr(transparent)]
#[derive(Copy, Clone)]
pub struct EventRecord(pub(crate) SDL_Event);
impl EventRecord {
    /// Returns zeroed record.
    ///
    pub fn zeroed() -> EventRecord {
        // SAFETY: every field of the union is plain data, for which zero bytes are valid.
        EventRecord(unsafe { zeroed() })
    }
    /// Returns zeroed record with given type and header.
    ///
    fn with_type(event_type: EventType) -> EventRecord {
        let mut record = EventRecord::zeroed();
        record.0.r#type = event_type.0;
        record
    }

    /// Returns type of the event.
    ///
    pub fn event_type(&self) -> EventType {
        // SAFETY: every variant starts with `u32` discriminant.
        EventType(unsafe { self.0.r#type })
    }
    /// Returns time of the event in nanoseconds since SDL initialization.
    ///
    pub fn timestamp(&self) -> u64 {
        // SAFETY: every variant starts with common header.
        unsafe { self.0.common.timestamp }
    }
    /// Returns raw bytes of the record.
    ///
    pub fn as_bytes(&self) -> &[u8; 128] {
        // SAFETY: padding variant covers the whole union; records start zeroed
        // and are only written field by field, so every byte is initialized.
        unsafe { &self.0.padding }
    }

    /// Decodes the record.
    ///
    /// Text of text input events is copied, so decoded events do not borrow native memory.
    ///
    pub fn decode(&self) -> Event {
        let event_type = self.event_type();
        // SAFETY: union is read through the variant that corresponds to its discriminant.
        unsafe {
            match event_type {
                EventType::QUIT => Event::Quit,
                EventType(0x151..=0x157) => {
                    let SDL_DisplayEvent {
                        displayID, data1, ..
                    } = self.0.display;
                    Event::Display {
                        event_type,
                        display_id: displayID,
                        data: data1,
                    }
                }
                EventType(0x202..=0x21A) => {
                    let SDL_WindowEvent {
                        windowID,
                        data1,
                        data2,
                        ..
                    } = self.0.window;
                    Event::Window {
                        window_id: windowID,
                        event: WindowEvent::decode(event_type, data1, data2),
                    }
                }
                EventType::KEY_DOWN | EventType::KEY_UP => {
                    let key = self.0.key;
                    Event::Keyboard {
                        window_id: key.windowID,
                        keycode: Keycode(key.key),
                        scancode: Scancode(key.scancode.0 as u32),
                        modifiers: KeyModifiers::from_bits_retain(key.r#mod),
                        down: key.down,
                        repeat: key.repeat,
                    }
                }
                EventType::TEXT_INPUT => {
                    let text = self.0.text;
                    Event::TextInput {
                        window_id: text.windowID,
                        text: string_from_native(text.text).unwrap_or_default(),
                    }
                }
                EventType::MOUSE_MOTION => {
                    let motion = self.0.motion;
                    Event::MouseMotion {
                        window_id: motion.windowID,
                        mouse_id: motion.which,
                        buttons: MouseButtonFlags::from_bits_retain(motion.state),
                        position: Vector2 {
                            x: motion.x,
                            y: motion.y,
                        },
                        relative: Vector2 {
                            x: motion.xrel,
                            y: motion.yrel,
                        },
                    }
                }
                EventType::MOUSE_BUTTON_DOWN | EventType::MOUSE_BUTTON_UP => {
                    let button = self.0.button;
                    Event::MouseButton {
                        window_id: button.windowID,
                        mouse_id: button.which,
                        button: MouseButton::from_native(button.button),
                        down: button.down,
                        clicks: button.clicks,
                        position: Vector2 {
                            x: button.x,
                            y: button.y,
                        },
                    }
                }
                EventType::MOUSE_WHEEL => {
                    let wheel = self.0.wheel;
                    Event::MouseWheel {
                        window_id: wheel.windowID,
                        mouse_id: wheel.which,
                        scroll: Vector2 {
                            x: wheel.x,
                            y: wheel.y,
                        },
                        flipped: wheel.direction == SDL_MOUSEWHEEL_FLIPPED,
                        position: Vector2 {
                            x: wheel.mouse_x,
                            y: wheel.mouse_y,
                        },
                    }
                }
                EventType(0x2000..=0x2002) => Event::Render {
                    event_type,
                    window_id: self.0.render.windowID,
                },
                event_type if event_type.is_user() => {
                    let user = self.0.user;
                    Event::User {
                        event_type,
                        window_id: user.windowID,
                        code: user.code,
                        data: (user.data1 as usize, user.data2 as usize),
                    }
                }
                _ => Event::Other(*self),
            }
        }
    }
}
impl TryFrom<&Event> for EventRecord {
    type Error = Error;

    /// Encodes event, so that it can be pushed to native queue.
    ///
    /// Text input events cannot be encoded - their text is owned by native side.
    ///
    fn try_from(event: &Event) -> Result<Self> {
        let mut record = EventRecord::with_type(event.event_type());
        let raw = &mut record.0;
        // SAFETY: record is zeroed and every field is written in place, through
        // the variant that corresponds to its type, so no byte is left uninitialized.
        unsafe {
            match *event {
                Event::Quit => {}
                Event::Display {
                    display_id, data, ..
                } => {
                    raw.display.displayID = display_id;
                    raw.display.data1 = data;
                }
                Event::Window { window_id, event } => {
                    let (_, data1, data2) = event.encode();
                    raw.window.windowID = window_id;
                    raw.window.data1 = data1;
                    raw.window.data2 = data2;
                }
                Event::Keyboard {
                    window_id,
                    keycode,
                    scancode,
                    modifiers,
                    down,
                    repeat,
                } => {
                    raw.key.windowID = window_id;
                    raw.key.scancode = SDL_Scancode(scancode.0 as c_int);
                    raw.key.key = keycode.0;
                    raw.key.r#mod = modifiers.bits();
                    raw.key.down = down;
                    raw.key.repeat = repeat;
                }
                Event::TextInput { .. } => {
                    return Err(Error::usage(
                        "text input events cannot be pushed, their text is owned by SDL",
                    ))
                }
                Event::MouseMotion {
                    window_id,
                    mouse_id,
                    buttons,
                    position,
                    relative,
                } => {
                    raw.motion.windowID = window_id;
                    raw.motion.which = mouse_id;
                    raw.motion.state = buttons.bits();
                    raw.motion.x = position.x;
                    raw.motion.y = position.y;
                    raw.motion.xrel = relative.x;
                    raw.motion.yrel = relative.y;
                }
                Event::MouseButton {
                    window_id,
                    mouse_id,
                    button,
                    down,
                    clicks,
                    position,
                } => {
                    raw.button.windowID = window_id;
                    raw.button.which = mouse_id;
                    raw.button.button = button.to_native();
                    raw.button.down = down;
                    raw.button.clicks = clicks;
                    raw.button.x = position.x;
                    raw.button.y = position.y;
                }
                Event::MouseWheel {
                    window_id,
                    mouse_id,
                    scroll,
                    flipped,
                    position,
                } => {
                    raw.wheel.windowID = window_id;
                    raw.wheel.which = mouse_id;
                    raw.wheel.x = scroll.x;
                    raw.wheel.y = scroll.y;
                    raw.wheel.direction = if flipped {
                        SDL_MOUSEWHEEL_FLIPPED
                    } else {
                        SDL_MOUSEWHEEL_NORMAL
                    };
                    raw.wheel.mouse_x = position.x;
                    raw.wheel.mouse_y = position.y;
                }
                Event::Render { window_id, .. } => raw.render.windowID = window_id,
                Event::User {
                    window_id,
                    code,
                    data: (data1, data2),
                    ..
                } => {
                    raw.user.windowID = window_id;
                    raw.user.code = code;
                    raw.user.data1 = data1 as *mut _;
                    raw.user.data2 = data2 as *mut _;
                }
                Event::Other(other) => return Ok(other),
            }
        }
        Ok(record)
    }
}
impl PartialEq for EventRecord {
    /// Records are equal if they have equal timestamps and decode to equal events.
    ///
    /// Records that are not decoded by `ggsdl` are compared byte by byte.
    ///
    fn eq(&self, other: &Self) -> bool {
        if self.timestamp() != other.timestamp() {
            return false;
        }
        match (self.decode(), other.decode()) {
            (Event::Other(_), Event::Other(_)) => self.as_bytes() == other.as_bytes(),
            (this, other) => this == other,
        }
    }
}
impl fmt::Debug for EventRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventRecord")
            .field("type", &format_args!("{:#06x}", self.event_type().0))
            .field("timestamp", &self.timestamp())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::{
        Event, EventRecord, EventType, KeyModifiers, Keycode, MouseButton, Scancode, WindowEvent,
    };
    use crate::{
        mathcore::vectors::Vector2,
        nativecore::ffi::{SDL_KeyboardEvent, SDL_MouseButtonEvent},
    };
    use std::{ffi::CString, mem::size_of};

    #[test]
    fn record_layout() {
        assert_eq!(size_of::<EventRecord>(), 128);
        assert_eq!(EventRecord::zeroed().as_bytes(), &[0; 128]);
        assert_eq!(EventRecord::zeroed().event_type(), EventType::FIRST);
    }

    #[test]
    fn keyboard() {
        let event = Event::Keyboard {
            window_id: 3,
            keycode: Keycode::ESCAPE,
            scancode: Scancode::ESCAPE,
            modifiers: KeyModifiers::LEFT_SHIFT | KeyModifiers::CAPS_LOCK,
            down: true,
            repeat: false,
        };
        let record = EventRecord::try_from(&event).expect("Keyboard events are encodable");
        assert_eq!(record.event_type(), EventType::KEY_DOWN);
        assert_eq!(record.decode(), event);
        assert_eq!(event.window_id(), Some(3));
        assert!(KeyModifiers::SHIFT.intersects(KeyModifiers::LEFT_SHIFT));
        assert_eq!(Keycode::from_char('Q'), Keycode(u32::from('q')));
    }

    #[test]
    fn window_events() {
        let record = EventRecord::try_from(&Event::Window {
            window_id: 1,
            event: WindowEvent::Resized {
                width: 800,
                height: 600,
            },
        })
        .expect("Window events are encodable");
        assert_eq!(record.event_type(), EventType::WINDOW_RESIZED);
        // SAFETY: record was encoded as window event.
        let window = unsafe { record.0.window };
        assert_eq!((window.windowID, window.data1, window.data2), (1, 800, 600));

        let unknown = EventRecord::with_type(EventType(0x215));
        assert_eq!(
            unknown.decode(),
            Event::Window {
                window_id: 0,
                event: WindowEvent::Other(EventType(0x215))
            }
        );
    }

    #[test]
    fn mouse_and_user_events() {
        let button = Event::MouseButton {
            window_id: 2,
            mouse_id: 1,
            button: MouseButton::Right,
            down: false,
            clicks: 2,
            position: Vector2 { x: 10.5, y: 20.0 },
        };
        let record = EventRecord::try_from(&button).expect("Button events are encodable");
        assert_eq!(record.event_type(), EventType::MOUSE_BUTTON_UP);
        assert_eq!(record.decode(), button);

        let user = Event::User {
            event_type: EventType(0x8004),
            window_id: 0,
            code: 42,
            data: (7, 0),
        };
        let record = EventRecord::try_from(&user).expect("User events are encodable");
        assert_eq!(record.decode(), user);
    }

    #[test]
    fn text_input() {
        let text = CString::new("ggsdl").expect("No nul bytes");
        let mut record = EventRecord::with_type(EventType::TEXT_INPUT);
        // SAFETY: record has text input type.
        unsafe {
            record.0.text.windowID = 5;
            record.0.text.text = text.as_ptr();
        }
        let event = record.decode();
        assert_eq!(
            event,
            Event::TextInput {
                window_id: 5,
                text: String::from("ggsdl")
            }
        );
        assert!(EventRecord::try_from(&event)
            .expect_err("Text input is not encodable")
            .is_usage());
    }

    #[test]
    fn encoded_records_are_zero_filled() {
        let key = Event::Keyboard {
            window_id: 1,
            keycode: Keycode::SPACE,
            scancode: Scancode::ESCAPE,
            modifiers: KeyModifiers::empty(),
            down: true,
            repeat: true,
        };
        let record = EventRecord::try_from(&key).expect("Keyboard events are encodable");
        assert!(record.as_bytes()[size_of::<SDL_KeyboardEvent>()..]
            .iter()
            .all(|byte| *byte == 0));
        assert_eq!(
            record.as_bytes(),
            EventRecord::try_from(&key)
                .expect("Keyboard events are encodable")
                .as_bytes()
        );

        let button = Event::MouseButton {
            window_id: 1,
            mouse_id: 1,
            button: MouseButton::Left,
            down: true,
            clicks: 1,
            position: Vector2 { x: 1.0, y: 2.0 },
        };
        let record = EventRecord::try_from(&button).expect("Button events are encodable");
        // SAFETY: record was encoded as mouse button event.
        assert_eq!(unsafe { record.0.button.padding }, 0);
        assert!(record.as_bytes()[size_of::<SDL_MouseButtonEvent>()..]
            .iter()
            .all(|byte| *byte == 0));
    }

    #[test]
    fn records_compare_by_content() {
        let key = Event::Keyboard {
            window_id: 1,
            keycode: Keycode::ESCAPE,
            scancode: Scancode::ESCAPE,
            modifiers: KeyModifiers::empty(),
            down: false,
            repeat: false,
        };
        let record = EventRecord::try_from(&key).expect("Keyboard events are encodable");
        let mut raw_differs = record;
        // SAFETY: record was encoded as keyboard event.
        unsafe { raw_differs.0.key.raw = 9 };
        assert_eq!(raw_differs, record);

        let mut later = record;
        // SAFETY: every variant starts with common header.
        unsafe { later.0.common.timestamp = 100 };
        assert_ne!(later, record);
        assert_eq!(later.timestamp(), 100);
    }

    #[test]
    fn undecoded_events_survive() {
        let record = EventRecord::with_type(EventType::LOCALE_CHANGED);
        let event = record.decode();
        assert_eq!(event, Event::Other(record));
        assert_eq!(event.event_type(), EventType::LOCALE_CHANGED);
        assert_eq!(
            EventRecord::try_from(&event).expect("Raw records are encodable"),
            record
        );
    }
}
