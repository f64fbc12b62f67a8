pub mod metadata;
pub mod version;

pub use metadata::ClientMetadata;
pub use version::{AppVersion, VersionParseError, VersionSegment};
