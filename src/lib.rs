//! # GGSdl
//!
//! **GGSdl** - safe Rust glue over native SDL3 (with optional SDL3_image and SDL3_ttf).
//!
//! Everything that actually draws, opens windows or reads input lives inside the native libraries;
//! `ggsdl` owns native handles, reference-counts subsystems, mirrors window state
//! and reports progress to the OS taskbar.
//!

#![warn(missing_docs, clippy::missing_docs_in_private_items)] // `missing_docs`
#![warn(unused_import_braces, unused_qualifications, unused_results)] // `unused_*`
#![warn(trivial_casts, trivial_numeric_casts)] // `casts`
#![warn(missing_copy_implementations, missing_debug_implementations)] // `missing_*_implementations`
#![warn(variant_size_differences, unreachable_pub)]

// crates
extern crate bitflags;

extern crate libloading;
extern crate sdl3_sys;
extern crate sdl3_ttf_sys;
extern crate log;
extern crate thiserror;

extern crate serde;
extern crate serde_cbor;

// utils
mod ggsdl;
pub use crate::ggsdl::*;

pub mod error;
pub use crate::error::{Error, Result};

pub mod utils;

// cores
pub mod datacore;
pub mod eventcore;
pub mod graphicscore;
pub mod mathcore;
pub mod nativecore;
