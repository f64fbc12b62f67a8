//! Protocol constants for the Client-Meta-Information header.
//!
//! # Header Layout
//!
//! ```text
//! platform;environment;version;os-version;device
//! ios;local;1.0.0;10.1;iphone-x
//! web;production
//! ```
//!
//! | Segment | Index | Required for |
//! |---------|-------|--------------|
//! | platform | 0 | all clients |
//! | environment | 1 | all clients |
//! | version | 2 | non-web clients |
//! | os-version | 3 | non-web clients |
//! | device | 4 | non-web clients |
//!
//! # Examples
//!
//! ```
//! use client_meta::protocol::constants::{headers, FORMAT, WEB_PLATFORM};
//!
//! assert_eq!(headers::CLIENT_META_INFORMATION.as_str(), "client-meta-information");
//! assert_eq!(FORMAT, "platform;environment;version;os-version;device");
//! assert_eq!(WEB_PLATFORM, "web");
//! ```

/// Default header label used in configuration and error messages.
pub const DEFAULT_HEADER_LABEL: &str = "Client-Meta-Information";

/// Reference layout quoted in error messages.
pub const FORMAT: &str = "platform;environment;version;os-version;device";

/// Separator between header segments.
pub const SEGMENT_SEPARATOR: char = ';';

/// Separator between semantic version components.
pub const VERSION_SEPARATOR: char = '.';

/// Platform that only sends `platform;environment`.
pub const WEB_PLATFORM: &str = "web";

/// Version reported for web clients.
pub const WEB_VERSION: &str = "0.0.0";

/// Platforms accepted by the default configuration, in message order.
pub const DEFAULT_PLATFORMS: [&str; 3] = ["android", "ios", WEB_PLATFORM];

/// Environments accepted by the default configuration, in message order.
pub const DEFAULT_ENVIRONMENTS: [&str; 4] = ["local", "development", "staging", "production"];

/// Typed header names.
pub mod headers {
    use http::HeaderName;

    /// Client-Meta-Information header - client platform, environment, version and device.
    pub const CLIENT_META_INFORMATION: HeaderName =
        HeaderName::from_static("client-meta-information");
}

/// Segment positions inside the header.
pub mod segments {
    pub const PLATFORM: usize = 0;
    pub const ENVIRONMENT: usize = 1;
    pub const VERSION: usize = 2;
    pub const DEVICE_OS_VERSION: usize = 3;
    pub const DEVICE: usize = 4;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_name_matches_label() {
        assert_eq!(
            headers::CLIENT_META_INFORMATION.as_str(),
            DEFAULT_HEADER_LABEL.to_ascii_lowercase()
        );
    }

    #[test]
    fn test_defaults_include_web() {
        assert!(DEFAULT_PLATFORMS.contains(&WEB_PLATFORM));
        assert_eq!(DEFAULT_ENVIRONMENTS.len(), 4);
    }

    #[test]
    fn test_segment_positions_follow_format() {
        let names: Vec<&str> = FORMAT.split(SEGMENT_SEPARATOR).collect();
        assert_eq!(names[segments::PLATFORM], "platform");
        assert_eq!(names[segments::ENVIRONMENT], "environment");
        assert_eq!(names[segments::VERSION], "version");
        assert_eq!(names[segments::DEVICE_OS_VERSION], "os-version");
        assert_eq!(names[segments::DEVICE], "device");
    }
}
