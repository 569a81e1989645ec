//! `utils` module defines several constructs that are essential to the
//! application powered by `ggsdl`.
//!
//! This module can be thought of as a collection of abstractions over OS:
//! windows and their cached state, displays, cursors, dialogs, tray menus and taskbar progress.
//!

// submodules and public re-exports
mod states;
pub use states::*;

mod windows;
pub use windows::*;

mod displays;
pub use displays::*;

mod cursors;
pub use cursors::*;

mod dialogs;
pub use dialogs::*;

mod progress;
pub use progress::*;

mod menus;
pub use menus::*;
