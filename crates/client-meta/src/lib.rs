//! Decoder for the `Client-Meta-Information` request header.
//!
//! The header carries `platform;environment;version;os-version;device`
//! (for example `ios;production;1.0.0;10.2;iphone-x`). Web clients send only
//! `platform;environment`.
//!
//! ```
//! use client_meta::{HeaderParser, MetaConfig};
//!
//! let parser = HeaderParser::new(MetaConfig::default());
//! let meta = parser.parse(Some("ios;production;1.2.3;17.4;iphone-15")).unwrap();
//! assert_eq!(meta.major_version(), 1);
//! assert_eq!(meta.to_header_string(), "ios;production;1.2.3;17.4;iphone-15");
//! ```

pub mod config;
pub mod error;
pub mod protocol;
pub mod types;

pub use config::MetaConfig;
pub use error::{MetaError, Reason, Result, ValidationError};
pub use protocol::{parse, to_header_string, HeaderParser};
pub use types::{AppVersion, ClientMetadata};
