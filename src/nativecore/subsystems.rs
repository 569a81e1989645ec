//! `nativecore::subsystems` submodule implements reference counted initialization of SDL subsystems.
//!
//! # Lifecycle
//! SDL subsystems (video, audio, events, ...) are initialized once and shared by everything
//! that needs them. [`Lifecycle`] counts acquisitions of every subsystem separately:
//! subsystem is natively initialized when its count goes from 0 to 1, natively shut down when
//! it goes from 1 to 0, and the whole library is shut down once every count is back to zero.
//!
//! Both paths are serialized by one lock, so [`Lifecycle`] can be shared between threads.
//!

use crate::{
    error::{Error, Result},
    nativecore::{
        ffi::{
            SDL_INIT_AUDIO, SDL_INIT_CAMERA, SDL_INIT_EVENTS, SDL_INIT_GAMEPAD, SDL_INIT_HAPTIC,
            SDL_INIT_JOYSTICK, SDL_INIT_SENSOR, SDL_INIT_VIDEO,
        },
        library::{native, native_ok, Sdl},
    },
};
use bitflags::bitflags;
use serde::{Deserialize, Serialize};
use std::{
    fmt,
    sync::{Arc, Mutex, MutexGuard, PoisonError},
};

bitflags!(
    /// [`InitFlags`] struct lists SDL subsystems.
    ///
    /// Some subsystems imply others natively (video implies events, gamepad implies joystick),
    /// but [`Lifecycle`] only counts subsystems that were requested explicitly.
    ///
    #[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub struct InitFlags: u32 {
        /// Audio subsystem.
        ///
        const AUDIO = SDL_INIT_AUDIO;
        /// Video subsystem.
        ///
        const VIDEO = SDL_INIT_VIDEO;
        /// Joystick subsystem.
        ///
        const JOYSTICK = SDL_INIT_JOYSTICK;
        /// Haptic (force feedback) subsystem.
        ///
        const HAPTIC = SDL_INIT_HAPTIC;
        /// Gamepad subsystem.
        ///
        const GAMEPAD = SDL_INIT_GAMEPAD;
        /// Events subsystem.
        ///
        const EVENTS = SDL_INIT_EVENTS;
        /// Sensor subsystem.
        ///
        const SENSOR = SDL_INIT_SENSOR;
        /// Camera subsystem.
        ///
        const CAMERA = SDL_INIT_CAMERA;
    }
);

/// [`SubsystemDriver`] trait is the native side of [`Lifecycle`].
///
/// It is only called under the lifecycle lock.
///
pub trait SubsystemDriver: Send + Sync {
    /// Natively initializes given subsystems.
    ///
    fn init(&self, flags: InitFlags) -> Result<()>;
    /// Natively shuts down given subsystems.
    ///
    fn quit(&self, flags: InitFlags);
    /// Shuts down the whole library.
    ///
    fn shutdown(&self);
}

/// [`NativeDriver`] struct drives subsystems through `SDL_InitSubSystem`/`SDL_QuitSubSystem`/`SDL_Quit`.
///
#[derive(Debug)]
pub struct NativeDriver {
    /// Native function table.
    ///
    sdl: Arc<Sdl>,
}
impl NativeDriver {
    /// Constructs driver over given function table.
    ///
    pub fn new(sdl: Arc<Sdl>) -> NativeDriver {
        NativeDriver { sdl }
    }
}
impl SubsystemDriver for NativeDriver {
    fn init(&self, flags: InitFlags) -> Result<()> {
        native_ok!(self.sdl, SDL_InitSubSystem(flags.bits()))
    }

    fn quit(&self, flags: InitFlags) {
        if let Err(error) = native!(self.sdl, SDL_QuitSubSystem(flags.bits())) {
            log::warn!("subsystems {flags:?} could not be shut down: {error}");
        }
    }

    fn shutdown(&self) {
        if let Err(error) = native!(self.sdl, SDL_Quit()) {
            log::warn!("SDL could not be shut down: {error}");
        }
    }
}

/// Amount of bits in [`InitFlags`] representation.
///
const FLAG_BITS: usize = u32::BITS as usize;

/// [`Counts`] struct stores acquisition count of every subsystem.
///
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
struct Counts([usize; FLAG_BITS]);
impl Counts {
    /// Returns iterator over bit indices of given flags.
    ///
    fn bits(flags: InitFlags) -> impl Iterator<Item = usize> {
        (0..FLAG_BITS).filter(move |bit| flags.bits() & (1 << bit) != 0)
    }

    /// Returns subsystems (of given ones) whose count is zero.
    ///
    fn uninitialized(&self, flags: InitFlags) -> InitFlags {
        InitFlags::from_bits_retain(
            Counts::bits(flags)
                .filter(|bit| self.0[*bit] == 0)
                .fold(0, |flags, bit| flags | (1 << bit)),
        )
    }
    /// Returns subsystems whose count is positive.
    ///
    fn initialized(&self) -> InitFlags {
        InitFlags::from_bits_retain(
            (0..FLAG_BITS)
                .filter(|bit| self.0[*bit] > 0)
                .fold(0, |flags, bit| flags | (1 << bit)),
        )
    }
}

/// [`Lifecycle`] struct reference counts SDL subsystems.
///
/// # Example
/// ```rust
/// # use ggsdl::nativecore::subsystems::{InitFlags, Lifecycle, SubsystemDriver};
/// # use ggsdl::Result;
/// struct Silent;
/// impl SubsystemDriver for Silent {
///     fn init(&self, _: InitFlags) -> Result<()> { Ok(()) }
///     fn quit(&self, _: InitFlags) {}
///     fn shutdown(&self) {}
/// }
///
/// let lifecycle: Lifecycle = Lifecycle::new(Box::new(Silent));
/// lifecycle.acquire(InitFlags::VIDEO).expect("Silent driver never fails");
/// assert!(lifecycle.is_initialized());
/// lifecycle.release(InitFlags::VIDEO).expect("Video was acquired");
/// assert!(!lifecycle.is_initialized());
/// ```
///
pub struct Lifecycle {
    /// Native side.
    ///
    driver: Box<dyn SubsystemDriver>,
    /// Counts of every subsystem.
    ///
    counts: Mutex<Counts>,
}
impl Lifecycle {
    /// Constructs lifecycle with no initialized subsystems.
    ///
    pub fn new(driver: Box<dyn SubsystemDriver>) -> Lifecycle {
        Lifecycle {
            driver,
            counts: Mutex::new(Counts::default()),
        }
    }

    /// Locks counts.
    ///
    /// Counts are always left consistent, so poisoned lock is recovered.
    ///
    fn lock(&self) -> MutexGuard<'_, Counts> {
        self.counts.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Acquires given subsystems.
    ///
    /// Subsystems that were not initialized yet are initialized natively.
    /// If native initialization fails, no count is changed.
    ///
    pub fn acquire(&self, flags: InitFlags) -> Result<()> {
        let mut counts = self.lock();
        let fresh = counts.uninitialized(flags);
        if !fresh.is_empty() {
            self.driver.init(fresh)?;
            log::debug!("initialized subsystems {fresh:?}");
        }
        for bit in Counts::bits(flags) {
            counts.0[bit] += 1;
        }
        Ok(())
    }
    /// Releases given subsystems.
    ///
    /// Subsystems whose count reaches zero are shut down natively, and when every count
    /// reaches zero, the whole library is shut down.
    /// Releasing subsystem that was not acquired is a usage error which changes nothing.
    ///
    pub fn release(&self, flags: InitFlags) -> Result<()> {
        if flags.is_empty() {
            return Ok(());
        }
        let mut counts = self.lock();
        let unacquired = counts.uninitialized(flags);
        if !unacquired.is_empty() {
            return Err(Error::usage(format!(
                "subsystems {unacquired:?} are released without being acquired"
            )));
        }
        for bit in Counts::bits(flags) {
            counts.0[bit] -= 1;
        }

        let finished = flags.difference(counts.initialized());
        if !finished.is_empty() {
            self.driver.quit(finished);
            log::debug!("shut down subsystems {finished:?}");
        }
        if counts.initialized().is_empty() {
            self.driver.shutdown();
            log::debug!("shut down SDL");
        }
        Ok(())
    }
    /// Acquires given subsystems for the lifetime of returned guard.
    ///
    pub fn guard(self: &Arc<Self>, flags: InitFlags) -> Result<SubsystemGuard> {
        self.acquire(flags)?;
        Ok(SubsystemGuard {
            lifecycle: Arc::clone(self),
            flags,
        })
    }

    /// Returns how many times given subsystem is acquired.
    ///
    /// If several subsystems are passed, returns the smallest count.
    ///
    pub fn count(&self, flag: InitFlags) -> usize {
        let counts = self.lock();
        Counts::bits(flag)
            .map(|bit| counts.0[bit])
            .min()
            .unwrap_or(0)
    }
    /// Returns whether any subsystem is initialized.
    ///
    pub fn is_initialized(&self) -> bool {
        !self.lock().initialized().is_empty()
    }
    /// Returns currently initialized subsystems.
    ///
    pub fn initialized(&self) -> InitFlags {
        self.lock().initialized()
    }

    /// Runs `f` while holding the lock, only if no subsystem is initialized.
    ///
    /// Some native settings (app metadata, hints) are only respected before initialization.
    ///
    pub fn with_uninitialized<T>(&self, f: impl FnOnce() -> Result<T>) -> Result<T> {
        let counts = self.lock();
        let initialized = counts.initialized();
        if !initialized.is_empty() {
            return Err(Error::usage(format!(
                "operation requires SDL to be uninitialized, but {initialized:?} are initialized"
            )));
        }
        f()
    }
}
impl fmt::Debug for Lifecycle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Lifecycle")
            .field("initialized", &self.initialized())
            .finish_non_exhaustive()
    }
}

/// [`SubsystemGuard`] struct keeps subsystems acquired until it is dropped.
///
#[derive(Debug)]
pub struct SubsystemGuard {
    /// Lifecycle that has acquired subsystems.
    ///
    lifecycle: Arc<Lifecycle>,
    /// Acquired subsystems.
    ///
    flags: InitFlags,
}
impl SubsystemGuard {
    /// Returns acquired subsystems.
    ///
    pub fn flags(&self) -> InitFlags {
        self.flags
    }
    /// Returns lifecycle this guard belongs to.
    ///
    pub fn lifecycle(&self) -> &Arc<Lifecycle> {
        &self.lifecycle
    }
}
impl Drop for SubsystemGuard {
    fn drop(&mut self) {
        if let Err(error) = self.lifecycle.release(self.flags) {
            log::warn!("subsystems {:?} could not be released: {error}", self.flags);
        }
    }
}

/// [`AppMetadata`] struct describes application to the OS.
///
/// It should be set before any subsystem is initialized
/// (see [`Engine::set_metadata`](crate::Engine::set_metadata)).
///
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AppMetadata {
    /// Human-readable name of the application.
    ///
    pub name: String,
    /// Version of the application.
    ///
    pub version: String,
    /// Unique identifier in reverse domain form (`com.example.game`).
    ///
    pub identifier: String,

    /// Creator of the application.
    ///
    pub creator: Option<String>,
    /// Copyright notice.
    ///
    pub copyright: Option<String>,
    /// Web page of the application.
    ///
    pub url: Option<String>,
}
