//! `utils::progress` submodule implements [`ProgressReporter`], which shows progress of a long
//! operation on the taskbar (or dock) icon of a window.
//!
//! # State machine
//! ```text
//! Idle -> Reporting | Indeterminate -> (report)* -> Completed | Cancelled | Failed
//! ```
//! Completion resets native indicator (unless [`ProgressOptions::reset_after_completion`]
//! is disabled), cancellation always resets it and failure keeps native error state visible
//! until the next [`ProgressReporter::start`] or [`ProgressReporter::reset`].
//!
//! Reporter never propagates native failures that happen while reporting: reporter moves
//! to failed phase, shows error state and invokes error callback instead.
//!

use crate::{
    error::{Error, Result},
    nativecore::library::native_ok,
    utils::windows::Window,
};
use serde::{Deserialize, Serialize};
use std::{
    ffi::c_int,
    fmt,
    panic::{catch_unwind, AssertUnwindSafe},
    sync::{
        atomic::{AtomicBool, Ordering},
        Arc,
    },
    time::{Duration, Instant},
};

/// [`ProgressState`] enum lists states of native progress indicator.
///
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum ProgressState {
    /// No indicator is shown.
    ///
    #[default]
    None,
    /// Indicator shows that work is in progress, but its amount is unknown.
    ///
    Indeterminate,
    /// Indicator shows progress value.
    ///
    Normal,
    /// Indicator shows that work is paused.
    ///
    Paused,
    /// Indicator shows that work has failed.
    ///
    Error,
}
impl ProgressState {
    // All functions that are providing gate between `ggsdl` and native code extend their API to `crate` visibility.
    /// Returns native representation of this enum.
    ///
    pub(crate) fn to_native(self) -> c_int {
        match self {
            ProgressState::None => 0,
            ProgressState::Indeterminate => 1,
            ProgressState::Normal => 2,
            ProgressState::Paused => 3,
            ProgressState::Error => 4,
        }
    }
}

/// [`ProgressSink`] trait represents native progress indicator.
///
pub trait ProgressSink {
    /// Changes state of indicator.
    ///
    fn set_progress_state(&self, state: ProgressState) -> Result<()>;
    /// Changes value of indicator (from 0.0 to 1.0).
    ///
    fn set_progress_value(&self, value: f32) -> Result<()>;
}
impl<S: ProgressSink + ?Sized> ProgressSink for &S {
    fn set_progress_state(&self, state: ProgressState) -> Result<()> {
        (**self).set_progress_state(state)
    }
    fn set_progress_value(&self, value: f32) -> Result<()> {
        (**self).set_progress_value(value)
    }
}
impl ProgressSink for Window {
    /// Sets taskbar progress state of the window (closed window ignores it).
    ///
    fn set_progress_state(&self, state: ProgressState) -> Result<()> {
        match self.raw() {
            Some(window) => native_ok!(
                self.sdl(),
                SDL_SetWindowProgressState(window, state.to_native())
            ),
            None => Ok(()),
        }
    }
    /// Sets taskbar progress value of the window (closed window ignores it).
    ///
    fn set_progress_value(&self, value: f32) -> Result<()> {
        match self.raw() {
            Some(window) => native_ok!(self.sdl(), SDL_SetWindowProgressValue(window, value)),
            None => Ok(()),
        }
    }
}

/// [`Clock`] trait is a source of time for throttling.
///
pub trait Clock {
    /// Returns current instant.
    ///
    fn now(&self) -> Instant;
}
impl<C: Clock + ?Sized> Clock for &C {
    fn now(&self) -> Instant {
        (**self).now()
    }
}
/// [`SystemClock`] struct is a [`Clock`] that reads monotonic system time.
///
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct SystemClock;
impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// [`ProgressOptions`] struct configures [`ProgressReporter`].
///
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProgressOptions {
    /// Whether native indicator is reset after completion.
    ///
    pub reset_after_completion: bool,
    /// Reports that are closer to each other than this interval (and have almost the same value)
    /// are skipped.
    ///
    pub throttle: Duration,
    /// Difference of values that is considered to be no change.
    ///
    pub epsilon: f32,
}
impl Default for ProgressOptions {
    fn default() -> Self {
        ProgressOptions {
            reset_after_completion: true,
            throttle: Duration::from_millis(35),
            epsilon: 0.001,
        }
    }
}

/// [`CancellationToken`] struct allows cancelling progress from anywhere (including other threads).
///
/// Cancellation is observed by the reporter on its next report, or when it starts,
/// if token was cancelled while reporter was idle.
///
#[derive(Clone, Debug, Default)]
pub struct CancellationToken {
    /// Shared flag.
    ///
    cancelled: Arc<AtomicBool>,
}
impl CancellationToken {
    /// Initializes token that is not cancelled.
    ///
    pub fn new() -> CancellationToken {
        CancellationToken::default()
    }
    /// Requests cancellation.
    ///
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Release);
    }
    /// Returns whether cancellation was requested.
    ///
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Acquire)
    }
}

/// [`ProgressPhase`] enum lists phases of [`ProgressReporter`].
///
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum ProgressPhase {
    /// Nothing is being reported.
    ///
    #[default]
    Idle,
    /// Values are being reported.
    ///
    Reporting,
    /// Work is in progress, but its amount is unknown.
    ///
    Indeterminate,
    /// Reported value has reached 1.0.
    ///
    Completed,
    /// Reporting was cancelled.
    ///
    Cancelled,
    /// Reporting has failed.
    ///
    Failed,
}
impl ProgressPhase {
    /// Returns whether reporter accepts reports.
    ///
    pub fn is_active(self) -> bool {
        matches!(self, ProgressPhase::Reporting | ProgressPhase::Indeterminate)
    }
}

/// Callback without arguments.
///
type Callback = Box<dyn FnMut()>;
/// Callback that receives error.
///
type ErrorCallback = Box<dyn FnMut(&Error)>;

/// [`ProgressReporter`] struct forwards progress of a long operation to [`ProgressSink`].
///
/// # Example
/// ```rust,no_run
/// # use ggsdl::{Engine, utils::ProgressReporter};
/// let engine: Engine = Engine::load()?;
/// let window = engine.build_window("GGSDL", 800, 600, Default::default())?;
/// let mut reporter = ProgressReporter::new(&window);
/// reporter.on_completed(|| println!("done"));
/// reporter.start()?;
/// for step in 1..=100 {
///     let _ = reporter.report(step as f32 / 100.0);
/// }
/// # Ok::<(), ggsdl::Error>(())
/// ```
///
pub struct ProgressReporter<S: ProgressSink, C: Clock = SystemClock> {
    /// Native indicator.
    ///
    sink: S,
    /// Time source.
    ///
    clock: C,
    /// Options.
    ///
    options: ProgressOptions,

    /// Current phase.
    ///
    phase: ProgressPhase,
    /// Last value that was applied natively.
    ///
    last_value: f32,
    /// Instant of last native update.
    ///
    last_update: Option<Instant>,
    /// Cancellation token of current (or next) run.
    ///
    /// Token is replaced only after reporter has observed its cancellation.
    ///
    token: CancellationToken,

    /// Completion callback.
    ///
    on_completed: Option<Callback>,
    /// Cancellation callback.
    ///
    on_cancelled: Option<Callback>,
    /// Error callback.
    ///
    on_error: Option<ErrorCallback>,
}
impl<S: ProgressSink> ProgressReporter<S> {
    /// Initializes reporter with default options.
    ///
    pub fn new(sink: S) -> ProgressReporter<S> {
        ProgressReporter::with_clock(sink, SystemClock, ProgressOptions::default())
    }
    /// Initializes reporter with given options.
    ///
    pub fn with_options(sink: S, options: ProgressOptions) -> ProgressReporter<S> {
        ProgressReporter::with_clock(sink, SystemClock, options)
    }
}
impl<S: ProgressSink, C: Clock> ProgressReporter<S, C> {
    /// Initializes reporter with given clock and options.
    ///
    pub fn with_clock(sink: S, clock: C, options: ProgressOptions) -> ProgressReporter<S, C> {
        ProgressReporter {
            sink,
            clock,
            options,

            phase: ProgressPhase::Idle,
            last_value: 0.0,
            last_update: None,
            token: CancellationToken::new(),

            on_completed: None,
            on_cancelled: None,
            on_error: None,
        }
    }

    /// Sets callback that is invoked once reported value reaches 1.0.
    ///
    pub fn on_completed(&mut self, callback: impl FnMut() + 'static) {
        self.on_completed = Some(Box::new(callback));
    }
    /// Sets callback that is invoked on cancellation.
    ///
    pub fn on_cancelled(&mut self, callback: impl FnMut() + 'static) {
        self.on_cancelled = Some(Box::new(callback));
    }
    /// Sets callback that is invoked when reporting fails.
    ///
    pub fn on_error(&mut self, callback: impl FnMut(&Error) + 'static) {
        self.on_error = Some(Box::new(callback));
    }

    /// Returns current phase.
    ///
    pub fn phase(&self) -> ProgressPhase {
        self.phase
    }
    /// Returns last value that was applied natively.
    ///
    pub fn value(&self) -> f32 {
        self.last_value
    }
    /// Returns options of the reporter.
    ///
    pub fn options(&self) -> &ProgressOptions {
        &self.options
    }
    /// Returns token that cancels current run (or the next one, if reporter is idle).
    ///
    pub fn token(&self) -> CancellationToken {
        self.token.clone()
    }
    /// Returns the sink.
    ///
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Starts reporting values.
    ///
    /// Starting while reporter is active is a usage error.
    ///
    pub fn start(&mut self) -> Result<()> {
        self.begin(ProgressPhase::Reporting, ProgressState::Normal)
    }
    /// Starts reporting work of unknown amount.
    ///
    /// Later [`ProgressReporter::report`] switches indicator to normal state.
    ///
    pub fn start_indeterminate(&mut self) -> Result<()> {
        self.begin(ProgressPhase::Indeterminate, ProgressState::Indeterminate)
    }
    /// Moves reporter to active phase.
    ///
    fn begin(&mut self, phase: ProgressPhase, state: ProgressState) -> Result<()> {
        if self.phase.is_active() {
            return Err(Error::usage("progress reporting has already started"));
        }
        self.phase = phase;
        self.last_value = 0.0;
        self.last_update = None;
        if self.token.is_cancelled() {
            self.cancel();
            return Ok(());
        }

        let applied = self
            .sink
            .set_progress_state(state)
            .and_then(|()| self.sink.set_progress_value(0.0));
        match applied {
            Ok(()) => self.last_update = Some(self.clock.now()),
            Err(error) => self.fail(error),
        }
        Ok(())
    }

    /// Reports progress value (clamped to [0.0; 1.0]).
    ///
    /// Returns whether value was applied natively. Report is skipped if reporter is not active
    /// or if value has barely changed since the last update, which happened less than
    /// [`ProgressOptions::throttle`] ago. Value of 1.0 is never skipped and completes reporting.
    ///
    pub fn report(&mut self, value: f32) -> bool {
        if self.phase.is_active() && self.token.is_cancelled() {
            self.cancel();
            return false;
        }
        if !self.phase.is_active() || value.is_nan() {
            return false;
        }
        let value = value.clamp(0.0, 1.0);
        let now = self.clock.now();

        if value < 1.0 {
            let unchanged = (value - self.last_value).abs() <= self.options.epsilon;
            let recent = self
                .last_update
                .is_some_and(|last| now.saturating_duration_since(last) < self.options.throttle);
            if unchanged && recent && self.phase == ProgressPhase::Reporting {
                return false;
            }
        }

        let mut applied = Ok(());
        if self.phase == ProgressPhase::Indeterminate {
            applied = self.sink.set_progress_state(ProgressState::Normal);
        }
        if let Err(error) = applied.and_then(|()| self.sink.set_progress_value(value)) {
            self.fail(error);
            return false;
        }
        self.phase = ProgressPhase::Reporting;
        self.last_value = value;
        self.last_update = Some(now);

        if value >= 1.0 {
            self.complete();
        }
        true
    }
    /// Completes reporting: invokes completion callback and resets native indicator
    /// (if [`ProgressOptions::reset_after_completion`] is enabled).
    ///
    /// Does nothing if reporter is not active.
    ///
    pub fn complete(&mut self) {
        if !self.phase.is_active() {
            return;
        }
        self.phase = ProgressPhase::Completed;
        invoke(&mut self.on_completed, "completion");
        if self.options.reset_after_completion {
            self.reset_native();
        }
    }
    /// Cancels reporting: marks token, invokes cancellation callback and resets native indicator.
    ///
    /// Does nothing if reporter is not active.
    ///
    pub fn cancel(&mut self) {
        if !self.phase.is_active() {
            return;
        }
        self.token.cancel();
        self.token = CancellationToken::new();
        self.phase = ProgressPhase::Cancelled;
        invoke(&mut self.on_cancelled, "cancellation");
        self.reset_native();
    }
    /// Fails reporting: shows native error state and invokes error callback.
    ///
    pub fn fail(&mut self, error: Error) {
        log::warn!("progress reporting has failed: {error}");
        self.phase = ProgressPhase::Failed;
        if let Err(state_error) = self.sink.set_progress_state(ProgressState::Error) {
            log::warn!("progress error state could not be shown: {state_error}");
        }
        if let Some(callback) = &mut self.on_error {
            if catch_unwind(AssertUnwindSafe(|| callback(&error))).is_err() {
                log::error!("progress error callback has panicked");
            }
        }
    }
    /// Pauses indicator (reporting stays active).
    ///
    pub fn pause(&mut self) {
        if self.phase.is_active() {
            if let Err(error) = self.sink.set_progress_state(ProgressState::Paused) {
                self.fail(error);
            }
        }
    }
    /// Resumes paused indicator.
    ///
    pub fn resume(&mut self) {
        if self.phase.is_active() {
            let state = match self.phase {
                ProgressPhase::Indeterminate => ProgressState::Indeterminate,
                _ => ProgressState::Normal,
            };
            if let Err(error) = self.sink.set_progress_state(state) {
                self.fail(error);
            }
        }
    }
    /// Hides indicator and moves reporter to idle phase.
    ///
    pub fn reset(&mut self) -> Result<()> {
        self.phase = ProgressPhase::Idle;
        self.last_value = 0.0;
        self.last_update = None;
        self.sink.set_progress_state(ProgressState::None)?;
        self.sink.set_progress_value(0.0)
    }
    /// Resets native indicator, routing failure to error callback.
    ///
    fn reset_native(&mut self) {
        let reset = self
            .sink
            .set_progress_state(ProgressState::None)
            .and_then(|()| self.sink.set_progress_value(0.0));
        if let Err(error) = reset {
            self.fail(error);
        }
    }

    /// Runs task while reporting its progress.
    ///
    /// Task receives the reporter to report values. If task succeeds and has not reached 1.0,
    /// reporting is completed; if task fails, its error is routed to the error callback.
    /// Returns `None` if task has failed or reporting was cancelled.
    /// Starting while reporter is active is a usage error.
    ///
    pub fn run<T>(&mut self, task: impl FnOnce(&mut Self) -> Result<T>) -> Result<Option<T>> {
        self.start()?;
        if self.phase == ProgressPhase::Cancelled {
            return Ok(None);
        }
        match task(self) {
            Ok(_) if self.phase == ProgressPhase::Cancelled => Ok(None),
            Ok(value) => {
                if self.phase.is_active() && self.token.is_cancelled() {
                    self.cancel();
                    return Ok(None);
                }
                self.complete();
                Ok(Some(value))
            }
            Err(error) => {
                if self.phase.is_active() || self.phase == ProgressPhase::Completed {
                    self.fail(error);
                }
                Ok(None)
            }
        }
    }
}
impl<S: ProgressSink, C: Clock> fmt::Debug for ProgressReporter<S, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProgressReporter")
            .field("phase", &self.phase)
            .field("value", &self.last_value)
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}

/// Invokes user callback, containing its panic.
///
fn invoke(callback: &mut Option<Callback>, name: &str) {
    if let Some(callback) = callback {
        if catch_unwind(AssertUnwindSafe(callback)).is_err() {
            log::error!("progress {name} callback has panicked");
        }
    }
}
