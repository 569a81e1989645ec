//! `utils::menus` submodule implements OS context menus that are attached to system tray icon.
//!
//! [`Tray`] owns native tray icon together with its root [`TrayMenu`]. Menus and entries are
//! borrowed views of the tray: SDL destroys them together with it, so they cannot outlive it.
//!
//! Entry callbacks are invoked by SDL while it processes events. Callbacks are kept by the tray
//! until it is dropped, so replacing or removing an entry from inside its own callback is allowed.
//!

use crate::{
    datacore::images::Surface,
    error::{Error, Result},
    nativecore::{
        ffi::{
            SDL_TrayEntry, SDL_TRAYENTRY_BUTTON, SDL_TRAYENTRY_CHECKBOX, SDL_TRAYENTRY_CHECKED,
            SDL_TRAYENTRY_DISABLED, SDL_TRAYENTRY_SUBMENU,
        },
        handles::{released, Handle, TrayEntryKind, TrayKind, TrayMenuKind},
        library::{native, string_from_native, Sdl},
        subsystems::{InitFlags, SubsystemGuard},
    },
    Engine,
};
use bitflags::bitflags;
use std::{
    cell::RefCell,
    collections::HashMap,
    ffi::{c_char, c_int, c_void, CString},
    fmt,
    panic::{catch_unwind, AssertUnwindSafe},
    ptr::{null, null_mut},
    sync::Arc,
};

bitflags!(
    /// [`TrayEntryFlags`] struct lists kinds and initial states of tray menu entries.
    ///
    /// Kind flags ([`TrayEntryFlags::BUTTON`], [`TrayEntryFlags::CHECKBOX`], [`TrayEntryFlags::SUBMENU`])
    /// are exclusive; state flags can be combined with any of them.
    ///
    #[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
    pub struct TrayEntryFlags: u32 {
        /// Plain clickable entry.
        ///
        const BUTTON = SDL_TRAYENTRY_BUTTON;
        /// Entry that can be checked and unchecked.
        ///
        const CHECKBOX = SDL_TRAYENTRY_CHECKBOX;
        /// Entry that opens nested menu.
        ///
        const SUBMENU = SDL_TRAYENTRY_SUBMENU;
        /// Entry is initially disabled.
        ///
        const DISABLED = SDL_TRAYENTRY_DISABLED;
        /// Checkbox is initially checked.
        ///
        const CHECKED = SDL_TRAYENTRY_CHECKED;
    }
);

/// Callback of tray menu entry.
///
type EntryCallback = Box<dyn FnMut() + 'static>;
/// Callbacks that were handed to native entries.
///
#[derive(Default)]
struct Callbacks {
    /// Callbacks of entries, keyed by entry address.
    ///
    active: HashMap<usize, Box<EntryCallback>>,
    /// Replaced callbacks (native side could still be running them).
    ///
    retired: Vec<Box<EntryCallback>>,
}
impl Callbacks {
    /// Moves callback of entry to retired ones.
    ///
    fn retire(&mut self, entry: usize) {
        if let Some(callback) = self.active.remove(&entry) {
            self.retired.push(callback);
        }
    }
}

impl Engine {
    /// Creates tray icon with empty context menu.
    ///
    /// Tray keeps video subsystem initialized while it is alive.
    ///
    /// # Example
    /// ```rust,no_run
    /// # use ggsdl::{Engine, utils::{Tray, TrayEntryFlags}};
    /// let engine: Engine = Engine::load()?;
    /// let tray: Tray = engine.build_tray(None, Some("GGSDL"))?;
    /// let quit = tray.menu().push_entry("Quit", TrayEntryFlags::BUTTON)?;
    /// quit.on_click(|| println!("quit was clicked"))?;
    /// # Ok::<(), ggsdl::Error>(())
    /// ```
    ///
    pub fn build_tray(&self, icon: Option<&Surface>, tooltip: Option<&str>) -> Result<Tray> {
        let video = self.acquire(InitFlags::VIDEO)?;
        let sdl = self.sdl();

        let icon = icon.map(Surface::raw).transpose()?.unwrap_or(null_mut());
        let tooltip = tooltip.map(CString::new).transpose()?;
        let raw = native!(sdl, SDL_CreateTray(icon, optional_string(&tooltip)))?;
        let handle: Handle<TrayKind> = Handle::owned(sdl, "SDL_CreateTray", raw)?;

        let menu = native!(sdl, SDL_CreateTrayMenu(handle.as_ptr()))?;
        let menu: Handle<TrayMenuKind> = Handle::borrowed(sdl, "SDL_CreateTrayMenu", menu)?;
        log::debug!("tray {:p} was created", handle.as_ptr());

        Ok(Tray {
            handle,
            menu,
            callbacks: RefCell::new(Callbacks::default()),
            _video: video,
        })
    }
}

/// [`Tray`] struct represents icon in system tray and its context menu.
///
/// Dropping the tray removes the icon and destroys every menu and entry of it.
///
pub struct Tray {
    /// Native tray.
    ///
    handle: Handle<TrayKind>,
    /// Root menu (owned by native tray).
    ///
    menu: Handle<TrayMenuKind>,
    /// Callbacks of entries (dropped after native tray).
    ///
    callbacks: RefCell<Callbacks>,
    /// Video subsystem (dropped after the tray).
    ///
    _video: SubsystemGuard,
}
impl Tray {
    /// Returns native function table.
    ///
    fn sdl(&self) -> &Arc<Sdl> {
        self.handle.sdl()
    }

    /// Returns root context menu of the tray.
    ///
    pub fn menu(&self) -> TrayMenu<'_> {
        TrayMenu {
            tray: self,
            handle: self.menu.alias(),
        }
    }
    /// Changes tooltip of the icon (`None` removes it).
    ///
    pub fn set_tooltip(&self, tooltip: Option<&str>) -> Result<()> {
        let tooltip = tooltip.map(CString::new).transpose()?;
        native!(
            self.sdl(),
            SDL_SetTrayTooltip(self.handle.as_ptr(), optional_string(&tooltip))
        )
    }
    /// Changes icon image (`None` removes it).
    ///
    pub fn set_icon(&self, icon: Option<&Surface>) -> Result<()> {
        let icon = icon.map(Surface::raw).transpose()?.unwrap_or(null_mut());
        native!(self.sdl(), SDL_SetTrayIcon(self.handle.as_ptr(), icon))
    }
}
impl fmt::Debug for Tray {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tray")
            .field("handle", &self.handle)
            .field("callbacks", &self.callbacks.borrow().active.len())
            .finish_non_exhaustive()
    }
}

/// [`TrayMenu`] struct is a borrowed view of tray menu (root menu or submenu of an entry).
///
pub struct TrayMenu<'a> {
    /// Tray that owns the menu.
    ///
    tray: &'a Tray,
    /// Native menu.
    ///
    handle: Handle<TrayMenuKind>,
}
impl<'a> TrayMenu<'a> {
    /// Inserts entry at given position (`None` appends it to the end).
    ///
    /// Entry without label is a separator. Position past the end of the menu is a native failure.
    ///
    pub fn insert_entry(
        &self,
        position: Option<usize>,
        label: Option<&str>,
        flags: TrayEntryFlags,
    ) -> Result<TrayEntry<'a>> {
        let position = match position {
            Some(position) => c_int::try_from(position)
                .map_err(|_| Error::usage(format!("tray entry position {position} is too large")))?,
            None => -1,
        };
        let label = label.map(CString::new).transpose()?;
        let sdl = self.tray.sdl();
        let raw = native!(
            sdl,
            SDL_InsertTrayEntryAt(
                self.handle.as_ptr(),
                position,
                optional_string(&label),
                flags.bits()
            )
        )?;
        let entry = TrayEntry {
            tray: self.tray,
            handle: Handle::borrowed(sdl, "SDL_InsertTrayEntryAt", raw)?,
        };
        log::trace!("tray entry {:p} was inserted at {position}", raw);
        Ok(entry)
    }
    /// Appends entry with given label.
    ///
    pub fn push_entry(&self, label: &str, flags: TrayEntryFlags) -> Result<TrayEntry<'a>> {
        self.insert_entry(None, Some(label), flags)
    }
    /// Appends separator.
    ///
    pub fn push_separator(&self) -> Result<TrayEntry<'a>> {
        self.insert_entry(None, None, TrayEntryFlags::empty())
    }

    /// Returns entries of the menu, in display order.
    ///
    pub fn entries(&self) -> Result<Vec<TrayEntry<'a>>> {
        let sdl = self.tray.sdl();
        let mut count: c_int = 0;
        let list = native!(sdl, SDL_GetTrayEntries(self.handle.as_ptr(), &mut count))?;
        if list.is_null() {
            return Err(sdl.error("SDL_GetTrayEntries"));
        }
        let count = usize::try_from(count).unwrap_or(0);
        // SAFETY: native list holds `count` entries and stays valid until menu is changed.
        let raw = unsafe { std::slice::from_raw_parts(list, count) };
        raw.iter()
            .map(|entry| {
                Ok(TrayEntry {
                    tray: self.tray,
                    handle: Handle::borrowed(sdl, "SDL_GetTrayEntries", entry.cast_mut())?,
                })
            })
            .collect()
    }
    /// Returns how many entries the menu has.
    ///
    pub fn len(&self) -> Result<usize> {
        self.entries().map(|entries| entries.len())
    }
    /// Returns whether the menu has no entries.
    ///
    pub fn is_empty(&self) -> Result<bool> {
        self.len().map(|len| len == 0)
    }
}
impl fmt::Debug for TrayMenu<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TrayMenu")
            .field("handle", &self.handle)
            .finish_non_exhaustive()
    }
}

/// [`TrayEntry`] struct is a borrowed view of tray menu entry.
///
pub struct TrayEntry<'a> {
    /// Tray that owns the entry.
    ///
    tray: &'a Tray,
    /// Native entry (`None` after removal).
    ///
    handle: Handle<TrayEntryKind>,
}
impl<'a> TrayEntry<'a> {
    /// Returns native entry, if entry was not removed.
    ///
    fn raw(&self) -> Result<*mut SDL_TrayEntry> {
        self.handle
            .get()
            .map(|raw| raw.as_ptr())
            .ok_or_else(|| released("tray entry"))
    }

    /// Returns label of the entry (`None` for separators).
    ///
    pub fn label(&self) -> Result<Option<String>> {
        let label = native!(self.tray.sdl(), SDL_GetTrayEntryLabel(self.raw()?))?;
        // SAFETY: native label is either null or nul-terminated string.
        Ok(unsafe { string_from_native(label) })
    }
    /// Changes label of the entry.
    ///
    pub fn set_label(&self, label: &str) -> Result<()> {
        let label = CString::new(label)?;
        native!(
            self.tray.sdl(),
            SDL_SetTrayEntryLabel(self.raw()?, label.as_ptr())
        )
    }
    /// Returns whether checkbox entry is checked.
    ///
    pub fn is_checked(&self) -> Result<bool> {
        native!(self.tray.sdl(), SDL_GetTrayEntryChecked(self.raw()?))
    }
    /// Checks or unchecks checkbox entry (other entries ignore this).
    ///
    pub fn set_checked(&self, checked: bool) -> Result<()> {
        native!(
            self.tray.sdl(),
            SDL_SetTrayEntryChecked(self.raw()?, checked)
        )
    }
    /// Returns whether entry can be clicked.
    ///
    pub fn is_enabled(&self) -> Result<bool> {
        native!(self.tray.sdl(), SDL_GetTrayEntryEnabled(self.raw()?))
    }
    /// Enables or disables the entry.
    ///
    pub fn set_enabled(&self, enabled: bool) -> Result<()> {
        native!(
            self.tray.sdl(),
            SDL_SetTrayEntryEnabled(self.raw()?, enabled)
        )
    }

    /// Sets callback that is invoked every time entry is clicked, replacing previous one.
    ///
    /// Panics of the callback are caught and logged.
    ///
    pub fn on_click(&self, callback: impl FnMut() + 'static) -> Result<()> {
        let raw = self.raw()?;
        let mut callback: Box<EntryCallback> = Box::new(Box::new(callback));
        let userdata: *mut EntryCallback = &mut *callback;
        native!(
            self.tray.sdl(),
            SDL_SetTrayEntryCallback(raw, Some(entry_trampoline), userdata.cast())
        )?;

        let mut callbacks = self.tray.callbacks.borrow_mut();
        callbacks.retire(raw as usize);
        let _ = callbacks.active.insert(raw as usize, callback);
        Ok(())
    }
    /// Simulates click on the entry: toggles checkbox and invokes callback.
    ///
    pub fn click(&self) -> Result<()> {
        native!(self.tray.sdl(), SDL_ClickTrayEntry(self.raw()?))
    }

    /// Returns nested menu of submenu entry, creating it on first call.
    ///
    /// Entries that were not inserted with [`TrayEntryFlags::SUBMENU`] have no nested menu.
    ///
    pub fn submenu(&self) -> Result<TrayMenu<'a>> {
        let raw = self.raw()?;
        let sdl = self.tray.sdl();
        let mut menu = native!(sdl, SDL_GetTraySubmenu(raw))?;
        if menu.is_null() {
            menu = native!(sdl, SDL_CreateTraySubmenu(raw))?;
        }
        Ok(TrayMenu {
            tray: self.tray,
            handle: Handle::borrowed(sdl, "SDL_CreateTraySubmenu", menu)?,
        })
    }
    /// Removes entry (and its nested menu) from the menu.
    ///
    pub fn remove(mut self) -> Result<()> {
        let raw = self.raw()?;
        native!(self.tray.sdl(), SDL_RemoveTrayEntry(raw))?;
        let _ = self.handle.release();
        self.tray.callbacks.borrow_mut().retire(raw as usize);
        log::trace!("tray entry {:p} was removed", raw);
        Ok(())
    }
}
impl fmt::Debug for TrayEntry<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TrayEntry")
            .field("handle", &self.handle)
            .finish_non_exhaustive()
    }
}

/// Returns pointer to optional native string, or null.
///
fn optional_string(string: &Option<CString>) -> *const c_char {
    string.as_ref().map_or(null(), |string| string.as_ptr())
}

/// Native callback of tray entries.
///
/// # Safety
/// `userdata` should be a pointer that was produced by [`TrayEntry::on_click`],
/// whose callback is still kept by its tray.
///
unsafe extern "C" fn entry_trampoline(userdata: *mut c_void, _entry: *mut SDL_TrayEntry) {
    let callback = &mut *userdata.cast::<EntryCallback>();
    if catch_unwind(AssertUnwindSafe(callback)).is_err() {
        log::error!("tray entry callback has panicked");
    }
}
