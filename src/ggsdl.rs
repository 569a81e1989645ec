//! `ggsdl` hidden submodule implements [`Engine`] struct that handles
//! native libraries and subsystem lifecycle for `ggsdl`.
//!

use crate::{
    error::Result,
    nativecore::{
        library::{native_ok, LibraryPaths, Sdl},
        properties::{
            APP_METADATA_COPYRIGHT, APP_METADATA_CREATOR, APP_METADATA_URL,
        },
        subsystems::{AppMetadata, InitFlags, Lifecycle, NativeDriver, SubsystemGuard},
    },
};
use std::{ffi::CString, fmt, sync::Arc};

/// [`Engine`] struct handles global context for `ggsdl`.
///
/// It owns native function table and explicit [`Lifecycle`] of SDL subsystems.
/// Nothing is natively initialized by loading - subsystems are acquired by things that need them
/// (windows acquire video, event queues acquire events) and are shut down
/// when the last of them is dropped.
///
/// Windowing and event functions should be used on the thread that initialized video.
///
/// # Example
/// ```rust, no_run
/// # use ggsdl::{Engine, utils::Window};
/// let engine: Engine = Engine::load().expect("SDL3 should be installed");
/// let window: Window = engine
///     .build_window("GGSDL", 1600, 900, Default::default())
///     .expect("Window should be created");
/// ```
///
pub struct Engine {
    /// Native function table.
    ///
    sdl: Arc<Sdl>,
    /// Subsystem reference counts.
    ///
    lifecycle: Arc<Lifecycle>,
}
impl Engine {
    /// Loads native libraries from default locations
    /// (which can be overridden by environment variables, see [`LibraryPaths::from_env`]).
    ///
    /// # Example
    /// ```rust, no_run
    /// # use ggsdl::Engine;
    /// let engine: Engine = Engine::load().expect("SDL3 should be installed");
    /// ```
    ///
    pub fn load() -> Result<Engine> {
        Engine::with_libraries(&LibraryPaths::from_env())
    }
    /// Loads native libraries from given locations.
    ///
    pub fn with_libraries(paths: &LibraryPaths) -> Result<Engine> {
        Ok(Engine::from_sdl(Arc::new(Sdl::load(paths)?)))
    }
    /// Wraps already loaded function table.
    ///
    pub(crate) fn from_sdl(sdl: Arc<Sdl>) -> Engine {
        let lifecycle = Arc::new(Lifecycle::new(Box::new(NativeDriver::new(Arc::clone(&sdl)))));
        Engine { sdl, lifecycle }
    }

    /// Returns native function table.
    ///
    pub fn sdl(&self) -> &Arc<Sdl> {
        &self.sdl
    }
    /// Returns subsystem lifecycle.
    ///
    pub fn lifecycle(&self) -> &Arc<Lifecycle> {
        &self.lifecycle
    }

    /// Acquires given subsystems until returned guard is dropped.
    ///
    pub fn acquire(&self, flags: InitFlags) -> Result<SubsystemGuard> {
        self.lifecycle.guard(flags)
    }

    /// Describes the application to the OS.
    ///
    /// Metadata is only respected before initialization, so this function returns
    /// usage error if any subsystem is already initialized.
    ///
    pub fn set_metadata(&self, metadata: &AppMetadata) -> Result<()> {
        self.lifecycle.with_uninitialized(|| {
            let name = CString::new(metadata.name.as_str())?;
            let version = CString::new(metadata.version.as_str())?;
            let identifier = CString::new(metadata.identifier.as_str())?;
            native_ok!(
                self.sdl,
                SDL_SetAppMetadata(name.as_ptr(), version.as_ptr(), identifier.as_ptr())
            )?;

            for (property, value) in [
                (APP_METADATA_CREATOR, &metadata.creator),
                (APP_METADATA_COPYRIGHT, &metadata.copyright),
                (APP_METADATA_URL, &metadata.url),
            ] {
                if let Some(value) = value {
                    let property = CString::new(property)?;
                    let value = CString::new(value.as_str())?;
                    native_ok!(
                        self.sdl,
                        SDL_SetAppMetadataProperty(property.as_ptr(), value.as_ptr())
                    )?;
                }
            }
            log::debug!("application metadata is set to {metadata:?}");
            Ok(())
        })
    }
}
impl fmt::Debug for Engine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Engine")
            .field("lifecycle", &self.lifecycle)
            .finish_non_exhaustive()
    }
}
