//! `eventcore::queue` submodule implements [`EventQueue`] - façade over native event queue.
//!

use crate::{
    error::{Error, Result},
    eventcore::records::{Event, EventRecord, EventType},
    nativecore::{
        ffi::{SDL_Event, SDL_ADDEVENT, SDL_GETEVENT, SDL_PEEKEVENT},
        library::{native, native_ok, Sdl},
        subsystems::{InitFlags, SubsystemGuard},
    },
    Engine,
};
use std::{
    ffi::c_int,
    fmt,
    ops::RangeInclusive,
    ptr::null_mut,
    sync::Arc,
    time::Duration,
};

/// Range that covers every event type.
///
pub const ALL_EVENTS: RangeInclusive<EventType> = EventType::FIRST..=EventType::LAST;

/// [`EventQueue`] struct provides access to native event queue.
///
/// Queue keeps events subsystem acquired for as long as it lives.
///
/// # Example
/// ```rust,no_run
/// # use ggsdl::{Engine, eventcore::Event};
/// let engine: Engine = Engine::load()?;
/// let queue = engine.event_queue()?;
/// 'running: loop {
///     for event in queue.poll_iter() {
///         if event == Event::Quit {
///             break 'running;
///         }
///     }
/// }
/// # Ok::<(), ggsdl::Error>(())
/// ```
///
pub struct EventQueue {
    /// Native library.
    ///
    sdl: Arc<Sdl>,
    /// Events subsystem.
    ///
    _events: SubsystemGuard,
}
impl EventQueue {
    /// Takes the next event from the queue without blocking.
    ///
    pub fn poll(&self) -> Result<Option<Event>> {
        Ok(self.poll_record()?.map(|record| record.decode()))
    }
    /// Takes the next raw record from the queue without blocking.
    ///
    pub fn poll_record(&self) -> Result<Option<EventRecord>> {
        let mut record = EventRecord::zeroed();
        let polled = native!(self.sdl, SDL_PollEvent(record_ptr(&mut record)))?;
        Ok(polled.then_some(record))
    }
    /// Returns iterator that polls the queue until it is empty.
    ///
    /// Iteration stops on native failure; the failure is logged.
    ///
    pub fn poll_iter(&self) -> PollIter<'_> {
        PollIter { queue: self }
    }

    /// Blocks until the next event arrives.
    ///
    pub fn wait(&self) -> Result<Event> {
        let mut record = EventRecord::zeroed();
        native_ok!(self.sdl, SDL_WaitEvent(record_ptr(&mut record)))?;
        Ok(record.decode())
    }
    /// Blocks until the next event arrives or until timeout runs out.
    ///
    /// Timeout is passed to native side in milliseconds.
    ///
    pub fn wait_timeout(&self, timeout: Duration) -> Result<Option<Event>> {
        let milliseconds = i32::try_from(timeout.as_millis()).unwrap_or(i32::MAX);
        let mut record = EventRecord::zeroed();
        let received = native!(
            self.sdl,
            SDL_WaitEventTimeout(record_ptr(&mut record), milliseconds)
        )?;
        Ok(received.then(|| record.decode()))
    }
    /// Gathers pending input from devices into the queue.
    ///
    pub fn pump(&self) -> Result<()> {
        native!(self.sdl, SDL_PumpEvents())
    }

    /// Pushes event to the back of the queue.
    ///
    pub fn push(&self, event: &Event) -> Result<()> {
        self.push_record(EventRecord::try_from(event)?)
    }
    /// Pushes raw record to the back of the queue.
    ///
    pub fn push_record(&self, mut record: EventRecord) -> Result<()> {
        native_ok!(self.sdl, SDL_PushEvent(record_ptr(&mut record)))
    }
    /// Appends records to the back of the queue and returns how many were added.
    ///
    pub fn add(&self, records: &[EventRecord]) -> Result<usize> {
        if records.is_empty() {
            return Ok(0);
        }
        let mut records = records.to_vec();
        let length = buffer_length(records.len())?;
        self.peep(
            records.as_mut_ptr().cast(),
            length,
            SDL_ADDEVENT.0,
            &ALL_EVENTS,
        )
    }

    /// Copies events of given types into buffer without removing them from the queue.
    ///
    /// Returns how many events were copied.
    ///
    pub fn peek(
        &self,
        buffer: &mut [EventRecord],
        types: RangeInclusive<EventType>,
    ) -> Result<usize> {
        self.peep_into(buffer, SDL_PEEKEVENT.0, &types)
    }
    /// Moves events of given types from the queue into buffer.
    ///
    /// Returns how many events were moved.
    ///
    pub fn retrieve(
        &self,
        buffer: &mut [EventRecord],
        types: RangeInclusive<EventType>,
    ) -> Result<usize> {
        self.peep_into(buffer, SDL_GETEVENT.0, &types)
    }
    /// Returns how many events of given types are queued.
    ///
    pub fn count(&self, types: RangeInclusive<EventType>) -> Result<usize> {
        validate(&types)?;
        self.peep(null_mut(), 0, SDL_PEEKEVENT.0, &types)
    }
    /// Returns whether any event of given types is queued.
    ///
    pub fn has_events(&self, types: RangeInclusive<EventType>) -> Result<bool> {
        validate(&types)?;
        native!(
            self.sdl,
            SDL_HasEvents(types.start().0, types.end().0)
        )
    }
    /// Removes every event of given types from the queue.
    ///
    pub fn flush(&self, types: RangeInclusive<EventType>) -> Result<()> {
        validate(&types)?;
        native!(
            self.sdl,
            SDL_FlushEvents(types.start().0, types.end().0)
        )
    }

    /// Allocates `count` consecutive application defined event types.
    ///
    pub fn register(&self, count: u32) -> Result<RangeInclusive<EventType>> {
        let amount = c_int::try_from(count)
            .ok()
            .filter(|amount| *amount > 0)
            .ok_or_else(|| Error::usage("registered event count should be positive"))?;
        let first = native!(self.sdl, SDL_RegisterEvents(amount))?;
        if first == 0 || first == u32::MAX {
            return Err(self.sdl.error("SDL_RegisterEvents"));
        }
        log::debug!("registered {count} event types starting at {first:#06x}");
        Ok(EventType(first)..=EventType(first + count - 1))
    }

    /// Validates buffer and range and peeps into buffer.
    ///
    fn peep_into(
        &self,
        buffer: &mut [EventRecord],
        action: c_int,
        types: &RangeInclusive<EventType>,
    ) -> Result<usize> {
        if buffer.is_empty() {
            return Err(Error::usage("event buffer should not be empty"));
        }
        validate(types)?;
        let length = buffer_length(buffer.len())?;
        self.peep(buffer.as_mut_ptr().cast(), length, action, types)
    }
    /// Calls `SDL_PeepEvents`, negative count is a native failure.
    ///
    fn peep(
        &self,
        buffer: *mut SDL_Event,
        length: c_int,
        action: c_int,
        types: &RangeInclusive<EventType>,
    ) -> Result<usize> {
        let count = native!(
            self.sdl,
            SDL_PeepEvents(buffer, length, action, types.start().0, types.end().0)
        )?;
        usize::try_from(count).map_err(|_| self.sdl.error("SDL_PeepEvents"))
    }
}
impl fmt::Debug for EventQueue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventQueue").finish_non_exhaustive()
    }
}

/// [`PollIter`] struct is an iterator that polls [`EventQueue`] until it is empty.
///
#[derive(Debug)]
pub struct PollIter<'a> {
    /// Polled queue.
    ///
    queue: &'a EventQueue,
}
impl Iterator for PollIter<'_> {
    type Item = Event;

    fn next(&mut self) -> Option<Self::Item> {
        match self.queue.poll() {
            Ok(event) => event,
            Err(error) => {
                log::warn!("event polling stopped: {error}");
                None
            }
        }
    }
}

impl Engine {
    /// Acquires events subsystem and returns [`EventQueue`].
    ///
    pub fn event_queue(&self) -> Result<EventQueue> {
        Ok(EventQueue {
            sdl: Arc::clone(self.sdl()),
            _events: self.acquire(InitFlags::EVENTS)?,
        })
    }
}

/// Returns pointer to native event inside of the record.
///
fn record_ptr(record: &mut EventRecord) -> *mut SDL_Event {
    &mut record.0
}
/// Checks that range of types is not reversed.
///
fn validate(types: &RangeInclusive<EventType>) -> Result<()> {
    if types.start() > types.end() {
        return Err(Error::usage(format!(
            "event type range {:#06x}..={:#06x} is reversed",
            types.start().0,
            types.end().0
        )));
    }
    Ok(())
}
/// Converts buffer length to native count.
///
fn buffer_length(length: usize) -> Result<c_int> {
    c_int::try_from(length).map_err(|_| Error::usage("event buffer is too large"))
}
