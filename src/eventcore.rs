//! `ggsdl::eventcore` module is a core that mirrors native event records and provides
//! access to native event queue.
//!
//! # Model
//! Native queue stores fixed-size records ([`EventRecord`]). Records are decoded into [`Event`]s
//! by their type discriminant; decoded events own all of their data.
//! Every queue operation that filters events takes inclusive range of [`EventType`]s.
//!

// submodules and public re-exports
mod queue;
pub use queue::*;

mod records;
pub use records::*;
