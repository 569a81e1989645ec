//! `ggsdl::nativecore` module is a core that owns the boundary between `ggsdl` and native SDL3.
//!
//! # Model
//! Native libraries are opened at runtime and their exports are gathered into a function table
//! ([`library::Sdl`]). Every wrapper in `ggsdl` holds a shared reference to that table, so
//! a wrapper can always release its native resource, no matter in which order wrappers are dropped.
//!
//! Resources are owned by [`handles::Handle`]s, structured construction options are passed
//! through [`properties::Properties`] and subsystem initialization is reference counted by
//! [`subsystems::Lifecycle`].
//!

// submodules and public re-exports
pub mod ffi;
pub mod handles;
pub mod library;
pub mod properties;
pub mod subsystems;

#[cfg(test)]
pub(crate) mod testing;
