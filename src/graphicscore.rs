//! `ggsdl::graphicscore` module is a core that provides 2D hardware rendering.
//!
//! # Model
//! [`Renderer`] consumes a window and draws to it, [`Texture`]s are created by renderer
//! and can only be drawn by it. Blending and color modulation are shared by renderer primitives
//! and textures ([`Blendable`], [`ColorModulatable`]).
//!

// submodules and public re-exports
mod primitives;
pub use primitives::*;

mod drawing;
pub use drawing::*;

mod textures;
pub use textures::*;
