//! Error types for header decoding and configuration loading.

use std::io;
use thiserror::Error;

/// Result type for fallible operations outside the parser itself.
pub type Result<T> = std::result::Result<T, MetaError>;

/// Which gate of the header parse rejected the input.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Reason {
    MissingHeader,
    InvalidPlatform,
    InvalidEnvironment,
    MissingVersion,
    InvalidSegmentCount,
    InvalidMajor,
    InvalidMinor,
    InvalidPatch,
    MissingDeviceOsVersion,
    MissingDevice,
}

impl Reason {
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Reason::MissingHeader => "missing_header",
            Reason::InvalidPlatform => "invalid_platform",
            Reason::InvalidEnvironment => "invalid_environment",
            Reason::MissingVersion => "missing_version",
            Reason::InvalidSegmentCount => "invalid_segment_count",
            Reason::InvalidMajor => "invalid_major",
            Reason::InvalidMinor => "invalid_minor",
            Reason::InvalidPatch => "invalid_patch",
            Reason::MissingDeviceOsVersion => "missing_device_os_version",
            Reason::MissingDevice => "missing_device",
        }
    }
}

impl std::fmt::Display for Reason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A rejected header.
///
/// The message is already formatted with the configured header label, so it
/// can be handed to the client as-is.
#[derive(Error, Clone, Debug, PartialEq, Eq)]
#[error("{message}")]
pub struct ValidationError {
    reason: Reason,
    message: String,
}

impl ValidationError {
    /// Pair a reason with its client-facing message.
    #[must_use]
    pub fn new(reason: Reason, message: impl Into<String>) -> Self {
        Self {
            reason,
            message: message.into(),
        }
    }

    #[inline]
    #[must_use]
    pub fn reason(&self) -> Reason {
        self.reason
    }

    #[inline]
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Status a caller should answer a rejected request with.
    #[inline]
    #[must_use]
    pub fn status_code(&self) -> http::StatusCode {
        http::StatusCode::BAD_REQUEST
    }
}

/// Errors raised by this crate.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum MetaError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl MetaError {
    /// The validation reason, if this error came from a rejected header.
    #[inline]
    #[must_use]
    pub fn reason(&self) -> Option<Reason> {
        match self {
            MetaError::Validation(e) => Some(e.reason()),
            _ => None,
        }
    }
}
