//! Error types shared across the crate.

use std::fmt::{Display, Formatter};

/// Shared crate result type.
pub type Result<T> = std::result::Result<T, AppError>;

/// Error enumeration covering every path-translation failure mode.
#[derive(Debug)]
pub enum AppError {
    /// Configuration parsing or validation failure.
    Config(String),
    /// File-system or I/O operation failure.
    Io(String),
    /// Path arithmetic requested before the resolver was initialized.
    Uninitialized(String),
    /// Text that should be UTF-8 could not be decoded.
    Decode(String),
    /// Path arithmetic cannot be carried out on the given input.
    InvalidPath(String),
    /// Repository root discovery produced no root while strict mode is on.
    RootUnknown(String),
}

impl Display for AppError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Config(msg) => write!(f, "config: {msg}"),
            Self::Io(msg) => write!(f, "io: {msg}"),
            Self::Uninitialized(msg) => write!(f, "uninitialized: {msg}"),
            Self::Decode(msg) => write!(f, "decode: {msg}"),
            Self::InvalidPath(msg) => write!(f, "invalid path: {msg}"),
            Self::RootUnknown(msg) => write!(f, "root unknown: {msg}"),
        }
    }
}

impl std::error::Error for AppError {}

impl From<toml::de::Error> for AppError {
    fn from(err: toml::de::Error) -> Self {
        Self::Config(format!("invalid config: {err}"))
    }
}

impl From<std::str::Utf8Error> for AppError {
    fn from(err: std::str::Utf8Error) -> Self {
        Self::Decode(format!("output is not valid utf-8: {err}"))
    }
}
