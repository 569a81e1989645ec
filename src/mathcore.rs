//! `ggsdl::mathcore` module is a core that implements small value types which are passed to
//! native rendering and window functions.
//!
//! # Model
//! Vectors represent positions, sizes and directions, rectangles represent regions
//! on a render target or on a display. Angles are kept in radians and are not normalized
//! until it is explicitly asked for.
//!
//! Every float-based type compares with [`floats::almost_equal`].
//!

// submodules and public re-exports
mod ext;
pub use ext::*;

pub mod floats;
pub mod shapes;
pub mod vectors;
