//! `error` module defines [`Error`] enum that is returned by every fallible `ggsdl` operation.
//!
//! Errors fall in two families that callers usually want to tell apart:
//! native failures (the OS or SDL refused the request) and usage errors
//! (the API was used in a way its contract forbids).
//! [`Error::is_native`] and [`Error::is_usage`] classify them.
//!

use std::{ffi::NulError, io};
use thiserror::Error as ThisError;

/// [`Error`] enum lists everything that can go wrong in `ggsdl`.
///
#[derive(Debug, ThisError)]
pub enum Error {
    /// Native shared library could not be opened.
    ///
    #[error("failed to load native library `{library}`: {source}")]
    Load {
        /// Name or path of the library.
        ///
        library: String,
        /// Underlying loader error.
        ///
        #[source]
        source: libloading::Error,
    },
    /// Native library is loaded but does not export requested function
    /// (older SDL version or companion library is absent).
    ///
    #[error("native function `{0}` is not available")]
    MissingSymbol(&'static str),
    /// Native function reported failure (returned `false`, null pointer or negative count).
    ///
    #[error("`{function}` failed: {message}")]
    Native {
        /// Name of the native function.
        ///
        function: &'static str,
        /// Message that was reported by `SDL_GetError`.
        ///
        message: String,
    },

    /// API contract was violated by the caller.
    ///
    #[error("invalid usage: {0}")]
    Usage(String),
    /// String that was passed to the native side contains interior nul byte.
    ///
    #[error("string cannot be passed to native code: {0}")]
    InteriorNul(#[from] NulError),

    /// Filesystem error.
    ///
    #[error(transparent)]
    Io(#[from] io::Error),
    /// CBOR encoding or decoding error.
    ///
    #[error(transparent)]
    Cbor(#[from] serde_cbor::Error),
}
impl Error {
    /// Constructs usage error with given message.
    ///
    pub(crate) fn usage(message: impl Into<String>) -> Error {
        Error::Usage(message.into())
    }

    /// Returns whether the error was produced by native library or by its loader.
    ///
    pub fn is_native(&self) -> bool {
        matches!(
            self,
            Error::Load { .. } | Error::MissingSymbol(_) | Error::Native { .. }
        )
    }
    /// Returns whether the error was caused by violation of API contract.
    ///
    pub fn is_usage(&self) -> bool {
        matches!(self, Error::Usage(_) | Error::InteriorNul(_))
    }
}

/// Type alias for `Result` with `ggsdl` [`Error`].
///
pub type Result<T, E = Error> = std::result::Result<T, E>;
