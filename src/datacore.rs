//! `ggsdl::datacore` module is a core that supplies structs and functions
//! that are needed to work with different formats of external data.
//!
//! # Usage
//! `datacore` module provides surfaces and palettes (images that live in RAM),
//! truetype fonts that render text to surfaces and [`assets`] persistence of
//! `serde` types (settings and configs are saved in CBOR format).
//!
//! Image loading uses SDL3_image when it is present and falls back to BMP otherwise.
//! Fonts need SDL3_ttf; without it they fail with [`Error::MissingSymbol`](crate::Error::MissingSymbol).
//!

// submodules and public re-exports
pub mod assets;
pub mod fonts;
pub mod images;
