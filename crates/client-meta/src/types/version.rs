//! Three-segment application version (`major.minor.patch`).

use std::fmt;
use std::str::FromStr;

use crate::protocol::constants::{VERSION_SEPARATOR, WEB_VERSION};

/// One component of an [`AppVersion`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VersionSegment {
    Major,
    Minor,
    Patch,
}

/// Why a version string was rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VersionParseError {
    /// The string did not split into exactly three parts. Holds the count found.
    SegmentCount(usize),
    /// A part was not a non-negative integer.
    NotNumeric(VersionSegment),
}

/// An application version as sent by the client.
///
/// Keeps the raw string so the header can be reproduced byte for byte.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct AppVersion {
    raw: String,
    major: u64,
    minor: u64,
    patch: u64,
}

impl AppVersion {
    /// `0.0.0`, reported for web clients.
    #[must_use]
    pub fn zero() -> Self {
        AppVersion {
            raw: WEB_VERSION.to_string(),
            major: 0,
            minor: 0,
            patch: 0,
        }
    }

    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    #[inline]
    #[must_use]
    pub fn major(&self) -> u64 {
        self.major
    }

    #[inline]
    #[must_use]
    pub fn minor(&self) -> u64 {
        self.minor
    }

    #[inline]
    #[must_use]
    pub fn patch(&self) -> u64 {
        self.patch
    }

    #[inline]
    #[must_use]
    pub fn components(&self) -> (u64, u64, u64) {
        (self.major, self.minor, self.patch)
    }
}

// Only plain ASCII digit runs are accepted: no sign, exponent, decimal point
// or surrounding whitespace.
fn parse_component(value: &str, segment: VersionSegment) -> Result<u64, VersionParseError> {
    if value.is_empty() || !value.bytes().all(|b| b.is_ascii_digit()) {
        return Err(VersionParseError::NotNumeric(segment));
    }
    value
        .parse::<u64>()
        .map_err(|_| VersionParseError::NotNumeric(segment))
}

impl FromStr for AppVersion {
    type Err = VersionParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split(VERSION_SEPARATOR).collect();
        if parts.len() != 3 {
            return Err(VersionParseError::SegmentCount(parts.len()));
        }
        let major = parse_component(parts[0], VersionSegment::Major)?;
        let minor = parse_component(parts[1], VersionSegment::Minor)?;
        let patch = parse_component(parts[2], VersionSegment::Patch)?;
        Ok(AppVersion {
            raw: s.to_string(),
            major,
            minor,
            patch,
        })
    }
}

impl fmt::Display for AppVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl Default for AppVersion {
    fn default() -> Self {
        Self::zero()
    }
}
