//! `nativecore::ffi` submodule gathers native types and constants of SDL3 and SDL3_ttf
//! that `ggsdl` passes through its function table.
//!
//! Layouts come from `sdl3-sys` and `sdl3-ttf-sys`, which are used only for their declarations:
//! both are built with `no-link`, because native libraries are opened at runtime
//! by [`Sdl`](super::library::Sdl).
//!
//! Items keep their C names, so that they can be looked up in SDL documentation.
//!

// opaque handles
pub use sdl3_sys::everything::{SDL_Cursor, SDL_Renderer, SDL_Texture, SDL_Tray, SDL_TrayEntry, SDL_TrayMenu, SDL_Window};
pub use sdl3_ttf_sys::ttf::TTF_Font;

// identifiers
pub use sdl3_sys::everything::{SDL_DisplayID, SDL_PropertiesID, SDL_WindowID};

// plain structs
pub use sdl3_sys::everything::{
    SDL_Color, SDL_DialogFileCallback, SDL_DialogFileFilter, SDL_DisplayMode, SDL_FPoint, SDL_FRect, SDL_Palette,
    SDL_Rect, SDL_Surface, SDL_TrayCallback,
};

// events
pub use sdl3_sys::everything::{
    SDL_CommonEvent, SDL_DisplayEvent, SDL_Event, SDL_EventType, SDL_KeyboardEvent, SDL_Keycode, SDL_Keymod,
    SDL_MouseButtonEvent, SDL_MouseButtonFlags, SDL_MouseMotionEvent, SDL_MouseWheelDirection, SDL_MouseWheelEvent,
    SDL_RenderEvent, SDL_Scancode, SDL_TextInputEvent, SDL_UserEvent, SDL_WindowEvent,
};

// constants
pub use sdl3_sys::everything::{
    SDL_ADDEVENT, SDL_FILEDIALOG_OPENFILE, SDL_FILEDIALOG_OPENFOLDER, SDL_FILEDIALOG_SAVEFILE, SDL_FLASH_BRIEFLY,
    SDL_FLASH_CANCEL, SDL_FLASH_UNTIL_FOCUSED, SDL_GETEVENT, SDL_INIT_AUDIO, SDL_INIT_CAMERA, SDL_INIT_EVENTS,
    SDL_INIT_GAMEPAD, SDL_INIT_HAPTIC, SDL_INIT_JOYSTICK, SDL_INIT_SENSOR, SDL_INIT_VIDEO, SDL_MESSAGEBOX_ERROR,
    SDL_MESSAGEBOX_INFORMATION, SDL_MESSAGEBOX_WARNING, SDL_MOUSEWHEEL_FLIPPED, SDL_MOUSEWHEEL_NORMAL, SDL_PEEKEVENT,
    SDL_TRAYENTRY_BUTTON, SDL_TRAYENTRY_CHECKBOX, SDL_TRAYENTRY_CHECKED, SDL_TRAYENTRY_DISABLED,
    SDL_TRAYENTRY_SUBMENU, SDL_WINDOWPOS_CENTERED, SDL_WINDOWPOS_UNDEFINED,
};
