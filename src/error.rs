// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Error types for configuration, encoding and output.
//!
//! The search itself is infallible: every check is a pure computation over
//! small integers. Errors come from validating parameters before a run, from
//! integer encodings that would not fit, and from the output stream.

use thiserror::Error;

/// Errors surfaced by the library.
#[derive(Debug, Error)]
pub enum Error {
    /// A parameter is malformed or out of range (order 0, cardinality above
    /// the group order, bit sequence of the wrong length, ...).
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// The output destination could not be created or written.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// A value does not fit the integer width used to represent it.
    #[error("Arithmetic limit exceeded: {0}")]
    ArithmeticLimit(String),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub(crate) fn invalid(message: impl Into<String>) -> Self {
        Error::InvalidArgument(message.into())
    }

    pub(crate) fn limit(message: impl Into<String>) -> Self {
        Error::ArithmeticLimit(message.into())
    }
}
