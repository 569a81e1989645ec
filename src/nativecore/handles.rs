//! `nativecore::handles` submodule implements [`Handle`] - ownership-tagged wrapper over native pointer.
//!
//! # Model
//! Every native resource is owned by exactly one owning [`Handle`].
//! Owning handle destroys its resource when it is released or dropped, and releasing is idempotent -
//! released handle holds no pointer, so second release has nothing to destroy.
//!
//! Non-owning handles alias a resource whose lifetime is managed elsewhere
//! (either by another handle or by SDL itself, e.g. window surface or current cursor).
//! Releasing a non-owning handle only forgets the pointer.
//!
//! Null pointer is never stored: constructors turn it into [`Error::Native`] with
//! the name of the function that has returned it.
//!

use crate::{
    error::{Error, Result},
    nativecore::{
        ffi::{
            SDL_Cursor, SDL_Palette, SDL_Renderer, SDL_Surface, SDL_Texture, SDL_Tray, SDL_TrayEntry,
            SDL_TrayMenu, SDL_Window, TTF_Font,
        },
        library::{native, Sdl},
    },
};
use std::{fmt, ptr::NonNull, sync::Arc};

/// [`HandleKind`] trait describes one kind of native resource.
///
pub trait HandleKind {
    /// Native type behind the pointer.
    ///
    type Raw;
    /// Human-readable name of the resource (used in logs).
    ///
    const NAME: &'static str;

    /// Destroys native resource.
    ///
    /// # Safety
    /// `raw` should be a valid pointer that was created by native library and was not destroyed yet.
    ///
    unsafe fn destroy(sdl: &Sdl, raw: NonNull<Self::Raw>) -> Result<()>;
}
/// [`impl_handle_kinds`] macro declares handle kinds with their native destroy functions.
///
macro_rules! impl_handle_kinds {
    ($(($(#[$attribute:meta])* $kind:ident, $raw:ty, $name:literal, $destroy:ident),)+) => {$(
        $(#[$attribute])*
        #[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
        pub struct $kind;
        impl HandleKind for $kind {
            type Raw = $raw;
            const NAME: &'static str = $name;

            unsafe fn destroy(sdl: &Sdl, raw: NonNull<Self::Raw>) -> Result<()> {
                native!(sdl, $destroy(raw.as_ptr()))
            }
        }
    )+};
}
impl_handle_kinds!(
    (
        /// Window kind.
        ///
        WindowKind, SDL_Window, "window", SDL_DestroyWindow
    ),
    (
        /// Renderer kind.
        ///
        RendererKind, SDL_Renderer, "renderer", SDL_DestroyRenderer
    ),
    (
        /// Texture kind.
        ///
        TextureKind, SDL_Texture, "texture", SDL_DestroyTexture
    ),
    (
        /// Cursor kind.
        ///
        CursorKind, SDL_Cursor, "cursor", SDL_DestroyCursor
    ),
    (
        /// Palette kind.
        ///
        PaletteKind, SDL_Palette, "palette", SDL_DestroyPalette
    ),
    (
        /// Surface kind.
        ///
        SurfaceKind, SDL_Surface, "surface", SDL_DestroySurface
    ),
    (
        /// Font kind.
        ///
        FontKind, TTF_Font, "font", TTF_CloseFont
    ),
    (
        /// Tray icon kind.
        ///
        TrayKind, SDL_Tray, "tray", SDL_DestroyTray
    ),
    (
        /// Tray menu entry kind.
        ///
        TrayEntryKind, SDL_TrayEntry, "tray entry", SDL_RemoveTrayEntry
    ),
);
/// Tray menu kind.
///
/// Menus are destroyed together with the tray (or entry) they belong to,
/// so handles of this kind are never owning.
///
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct TrayMenuKind;
impl HandleKind for TrayMenuKind {
    type Raw = SDL_TrayMenu;
    const NAME: &'static str = "tray menu";

    unsafe fn destroy(_sdl: &Sdl, _raw: NonNull<Self::Raw>) -> Result<()> {
        Err(Error::usage("tray menus are destroyed together with their tray"))
    }
}

/// [`Ownership`] enum tells whether handle is responsible for destroying its resource.
///
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Ownership {
    /// Handle destroys the resource.
    ///
    Owned,
    /// Resource is destroyed elsewhere.
    ///
    Borrowed,
}

/// [`Handle`] struct wraps one native pointer of kind `K`.
///
/// Handles keep native function table alive, so they can be dropped in any order
/// relative to the [`Engine`](crate::Engine).
///
pub struct Handle<K: HandleKind> {
    /// Native function table.
    ///
    sdl: Arc<Sdl>,
    /// Native pointer (`None` after release).
    ///
    raw: Option<NonNull<K::Raw>>,
    /// Ownership tag.
    ///
    ownership: Ownership,
}
impl<K: HandleKind> Handle<K> {
    /// Wraps pointer that was returned by `function`.
    ///
    fn new(
        sdl: &Arc<Sdl>,
        function: &'static str,
        raw: *mut K::Raw,
        ownership: Ownership,
    ) -> Result<Handle<K>> {
        let raw = NonNull::new(raw).ok_or_else(|| sdl.error(function))?;
        Ok(Handle {
            sdl: Arc::clone(sdl),
            raw: Some(raw),
            ownership,
        })
    }
    /// Takes ownership of pointer that was returned by `function`.
    ///
    /// Null pointer is reported as failure of `function`.
    ///
    pub(crate) fn owned(sdl: &Arc<Sdl>, function: &'static str, raw: *mut K::Raw) -> Result<Handle<K>> {
        Handle::new(sdl, function, raw, Ownership::Owned)
    }
    /// Wraps pointer whose lifetime is managed elsewhere.
    ///
    /// Null pointer is reported as failure of `function`.
    ///
    pub(crate) fn borrowed(
        sdl: &Arc<Sdl>,
        function: &'static str,
        raw: *mut K::Raw,
    ) -> Result<Handle<K>> {
        Handle::new(sdl, function, raw, Ownership::Borrowed)
    }
    /// Constructs non-owning alias of this handle.
    ///
    /// Aliases are handed out as borrowed views of a resource (e.g. [`Tray::menu`](crate::utils::Tray::menu)).
    /// Alias does not outlive the resource by itself - owners of aliases make sure that
    /// aliases are dropped first.
    ///
    pub(crate) fn alias(&self) -> Handle<K> {
        Handle {
            sdl: Arc::clone(&self.sdl),
            raw: self.raw,
            ownership: Ownership::Borrowed,
        }
    }

    /// Returns native pointer, or null pointer if handle was released.
    ///
    pub fn as_ptr(&self) -> *mut K::Raw {
        self.raw
            .map_or(std::ptr::null_mut(), |raw| raw.as_ptr())
    }
    /// Returns native pointer, or `None` if handle was released.
    ///
    pub(crate) fn get(&self) -> Option<NonNull<K::Raw>> {
        self.raw
    }
    /// Returns whether handle still refers to native resource.
    ///
    pub fn is_valid(&self) -> bool {
        self.raw.is_some()
    }
    /// Returns ownership tag of the handle.
    ///
    pub fn ownership(&self) -> Ownership {
        self.ownership
    }
    /// Returns native function table that this handle uses.
    ///
    pub(crate) fn sdl(&self) -> &Arc<Sdl> {
        &self.sdl
    }

    /// Releases the handle.
    ///
    /// Owning handle destroys its resource; non-owning handle only forgets the pointer.
    /// Returns `true` if native resource was destroyed by this call, and
    /// releasing already released handle does nothing.
    ///
    pub fn release(&mut self) -> bool {
        let Some(raw) = self.raw.take() else {
            return false;
        };
        if self.ownership == Ownership::Borrowed {
            return false;
        }
        // SAFETY: pointer was obtained from native library and `take` guarantees
        // that it is destroyed only once.
        match unsafe { K::destroy(&self.sdl, raw) } {
            Ok(()) => {
                log::trace!("released {} {:p}", K::NAME, raw);
                true
            }
            Err(error) => {
                log::warn!("{} {:p} could not be released: {error}", K::NAME, raw);
                false
            }
        }
    }
}
impl<K: HandleKind> Drop for Handle<K> {
    fn drop(&mut self) {
        let _ = self.release();
    }
}
impl<K: HandleKind> fmt::Debug for Handle<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct(&format!("Handle<{}>", K::NAME))
            .field("raw", &self.as_ptr())
            .field("ownership", &self.ownership)
            .finish()
    }
}

/// Checks that native pointer is not null, treating null as failure of `function`.
///
pub(crate) fn non_null<T>(sdl: &Sdl, function: &'static str, raw: *mut T) -> Result<NonNull<T>> {
    NonNull::new(raw).ok_or_else(|| sdl.error(function))
}

/// Turns *usage* of released handle into usage error.
///
pub(crate) fn released(name: &'static str) -> Error {
    Error::usage(format!("{name} was already released"))
}
