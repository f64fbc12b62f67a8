//! Decoded client metadata.

use std::fmt;
use std::str::FromStr;

use serde::ser::{Serialize, SerializeStruct, Serializer};

use super::version::AppVersion;
use crate::config::MetaConfig;
use crate::error::ValidationError;
use crate::protocol::constants::WEB_PLATFORM;

/// The validated content of a Client-Meta-Information header.
///
/// Only produced by a successful parse. Web clients carry no device
/// information and report version `0.0.0`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ClientMetadata {
    platform: String,
    environment: String,
    version: AppVersion,
    device_os_version: Option<String>,
    device: Option<String>,
}

impl ClientMetadata {
    pub(crate) fn web(platform: &str, environment: &str) -> Self {
        ClientMetadata {
            platform: platform.to_string(),
            environment: environment.to_string(),
            version: AppVersion::zero(),
            device_os_version: None,
            device: None,
        }
    }

    pub(crate) fn native(
        platform: &str,
        environment: &str,
        version: AppVersion,
        device_os_version: &str,
        device: &str,
    ) -> Self {
        ClientMetadata {
            platform: platform.to_string(),
            environment: environment.to_string(),
            version,
            device_os_version: Some(device_os_version.to_string()),
            device: Some(device.to_string()),
        }
    }

    #[inline]
    #[must_use]
    pub fn platform(&self) -> &str {
        &self.platform
    }

    #[inline]
    #[must_use]
    pub fn environment(&self) -> &str {
        &self.environment
    }

    /// Raw version string as received.
    #[inline]
    #[must_use]
    pub fn version(&self) -> &str {
        self.version.as_str()
    }

    #[inline]
    #[must_use]
    pub fn app_version(&self) -> &AppVersion {
        &self.version
    }

    #[inline]
    #[must_use]
    pub fn major_version(&self) -> u64 {
        self.version.major()
    }

    #[inline]
    #[must_use]
    pub fn minor_version(&self) -> u64 {
        self.version.minor()
    }

    #[inline]
    #[must_use]
    pub fn patch_version(&self) -> u64 {
        self.version.patch()
    }

    #[inline]
    #[must_use]
    pub fn device_os_version(&self) -> Option<&str> {
        self.device_os_version.as_deref()
    }

    #[inline]
    #[must_use]
    pub fn device(&self) -> Option<&str> {
        self.device.as_deref()
    }

    #[inline]
    #[must_use]
    pub fn is_web(&self) -> bool {
        self.platform == WEB_PLATFORM
    }

    /// Canonical header form, see [`crate::protocol::to_header_string`].
    #[must_use]
    pub fn to_header_string(&self) -> String {
        crate::protocol::to_header_string(self)
    }

    /// Key-ordered mapping with camelCase keys; absent device fields are `null`.
    ///
    /// Keys come in the order `platform, environment, version, majorVersion,
    /// minorVersion, patchVersion, deviceOsVersion, device`.
    #[must_use]
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or_default()
    }
}

impl Serialize for ClientMetadata {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("ClientMetadata", 8)?;
        state.serialize_field("platform", &self.platform)?;
        state.serialize_field("environment", &self.environment)?;
        state.serialize_field("version", self.version.as_str())?;
        state.serialize_field("majorVersion", &self.version.major())?;
        state.serialize_field("minorVersion", &self.version.minor())?;
        state.serialize_field("patchVersion", &self.version.patch())?;
        state.serialize_field("deviceOsVersion", &self.device_os_version)?;
        state.serialize_field("device", &self.device)?;
        state.end()
    }
}

impl fmt::Display for ClientMetadata {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_header_string())
    }
}

/// Parses with [`MetaConfig::default`].
impl FromStr for ClientMetadata {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        crate::protocol::parse(Some(s), &MetaConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_web_has_no_device() {
        let meta = ClientMetadata::web("web", "production");
        assert!(meta.is_web());
        assert_eq!(meta.version(), "0.0.0");
        assert_eq!(meta.device_os_version(), None);
        assert_eq!(meta.device(), None);
    }

    #[test]
    fn test_serialize_key_order() {
        let meta = ClientMetadata::native(
            "ios",
            "production",
            "1.0.0".parse().unwrap(),
            "10.2",
            "iphone-x",
        );
        let json = serde_json::to_string(&meta).unwrap();
        assert_eq!(
            json,
            r#"{"platform":"ios","environment":"production","version":"1.0.0","majorVersion":1,"minorVersion":0,"patchVersion":0,"deviceOsVersion":"10.2","device":"iphone-x"}"#
        );
    }

    #[test]
    fn test_serialize_web_nulls() {
        let json = serde_json::to_value(ClientMetadata::web("web", "staging")).unwrap();
        assert_eq!(json["deviceOsVersion"], serde_json::Value::Null);
        assert_eq!(json["device"], serde_json::Value::Null);
        assert_eq!(json, ClientMetadata::web("web", "staging").to_json());
    }

    #[test]
    fn test_to_json_key_order() {
        let meta = ClientMetadata::native(
            "android",
            "local",
            "2.0.1".parse().unwrap(),
            "Android 14",
            "Pixel 8",
        );
        let json = meta.to_json();
        let keys: Vec<&str> = json.as_object().unwrap().keys().map(String::as_str).collect();
        assert_eq!(
            keys,
            [
                "platform",
                "environment",
                "version",
                "majorVersion",
                "minorVersion",
                "patchVersion",
                "deviceOsVersion",
                "device"
            ]
        );
        assert_eq!(json.to_string(), serde_json::to_string(&meta).unwrap());
    }

    #[test]
    fn test_from_str_uses_default_config() {
        let meta: ClientMetadata = "android;local;2.10.1;Android 14;Pixel 8".parse().unwrap();
        assert_eq!(meta.minor_version(), 10);
        assert_eq!(meta.device(), Some("Pixel 8"));
        assert!("bogus;local".parse::<ClientMetadata>().is_err());
    }
}
