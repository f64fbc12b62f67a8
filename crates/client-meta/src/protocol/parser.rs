//! Header parsing.
//!
//! The header is split on `;` and read positionally. Each gate either
//! accepts its segment or rejects the whole header:
//!
//! ```text
//! platform -> environment -> (web: done) -> version -> os-version -> device
//! ```

use crate::config::MetaConfig;
use crate::error::{Reason, ValidationError};
use crate::protocol::constants::{segments, FORMAT, SEGMENT_SEPARATOR, WEB_PLATFORM};
use crate::types::{AppVersion, ClientMetadata, VersionParseError, VersionSegment};

/// Header parser bound to one configuration.
#[derive(Clone, Debug, Default)]
pub struct HeaderParser {
    config: MetaConfig,
}

impl HeaderParser {
    /// Parser applying `config` to every header.
    #[must_use]
    pub fn new(config: MetaConfig) -> Self {
        HeaderParser { config }
    }

    #[inline]
    #[must_use]
    pub fn config(&self) -> &MetaConfig {
        &self.config
    }

    /// Parse a header with this parser's configuration, see [`parse`].
    pub fn parse(&self, header: Option<&str>) -> Result<ClientMetadata, ValidationError> {
        parse(header, &self.config)
    }
}

fn reject(reason: Reason, message: String) -> ValidationError {
    tracing::debug!("[ClientMeta] Rejected header ({}): {}", reason, message);
    ValidationError::new(reason, message)
}

fn unsupported(label: &str, what: &str, allowed: &[String]) -> String {
    format!(
        "{} header: {} is not supported, should be: {} - format: {}",
        label,
        what,
        allowed.join(","),
        FORMAT
    )
}

fn missing(label: &str, what: &str) -> String {
    format!("{} header: Missing {} - format: {}", label, what, FORMAT)
}

/// Parse and validate a raw header value.
///
/// `None` and the empty string are both treated as a missing header.
/// Segments after the device are ignored.
pub fn parse(header: Option<&str>, config: &MetaConfig) -> Result<ClientMetadata, ValidationError> {
    let label = config.header_label();

    let header = match header {
        Some(h) if !h.is_empty() => h,
        _ => {
            return Err(reject(
                Reason::MissingHeader,
                format!("{} header: header is missing", label),
            ))
        }
    };

    let parts: Vec<&str> = header.split(SEGMENT_SEPARATOR).collect();
    let segment = |index: usize| parts.get(index).copied();

    let platform = segment(segments::PLATFORM)
        .filter(|p| config.is_allowed_platform(p))
        .ok_or_else(|| {
            reject(
                Reason::InvalidPlatform,
                unsupported(label, "Platform", config.allowed_platforms()),
            )
        })?;

    let environment = segment(segments::ENVIRONMENT)
        .filter(|e| config.is_allowed_environment(e))
        .ok_or_else(|| {
            reject(
                Reason::InvalidEnvironment,
                unsupported(label, "Environment", config.allowed_environments()),
            )
        })?;

    // Web clients identify themselves through User-Agent instead.
    if platform == WEB_PLATFORM {
        let meta = ClientMetadata::web(platform, environment);
        tracing::trace!("[ClientMeta] Parsed web header: {}", meta);
        return Ok(meta);
    }

    let raw_version = segment(segments::VERSION)
        .ok_or_else(|| reject(Reason::MissingVersion, missing(label, "version")))?;

    let version = raw_version
        .parse::<AppVersion>()
        .map_err(|e| version_error(label, e))?;

    let device_os_version = segment(segments::DEVICE_OS_VERSION).ok_or_else(|| {
        reject(
            Reason::MissingDeviceOsVersion,
            missing(label, "device os version"),
        )
    })?;

    let device = segment(segments::DEVICE)
        .ok_or_else(|| reject(Reason::MissingDevice, missing(label, "device")))?;

    let meta = ClientMetadata::native(platform, environment, version, device_os_version, device);
    tracing::trace!("[ClientMeta] Parsed header: {}", meta);
    Ok(meta)
}

fn version_error(label: &str, err: VersionParseError) -> ValidationError {
    match err {
        VersionParseError::SegmentCount(_) => reject(
            Reason::InvalidSegmentCount,
            format!(
                "{} header: Invalid app version, invalid amount of segments. Expected semver [x.y.z]",
                label
            ),
        ),
        VersionParseError::NotNumeric(segment) => {
            let (reason, name) = match segment {
                VersionSegment::Major => (Reason::InvalidMajor, "Major"),
                VersionSegment::Minor => (Reason::InvalidMinor, "Minor"),
                VersionSegment::Patch => (Reason::InvalidPatch, "Patch"),
            };
            reject(
                reason,
                format!("{} header: Invalid {} version, expected integer", label, name),
            )
        }
    }
}
