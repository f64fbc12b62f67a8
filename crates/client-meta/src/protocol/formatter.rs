//! Header formatter.
//!
//! Turns a [`ClientMetadata`] back into its header value, e.g.
//! `ios;local;1.0.0;10.1;iphone-x` or `web;production;`.

use crate::types::ClientMetadata;

/// Format metadata in header form.
///
/// Web metadata keeps a trailing separator and drops the device fields.
/// Everything else is written as all five segments, so any valid non-web
/// header survives a parse and format unchanged.
#[must_use]
pub fn to_header_string(meta: &ClientMetadata) -> String {
    if meta.is_web() {
        return format!("{};{};", meta.platform(), meta.environment());
    }
    format!(
        "{};{};{};{};{}",
        meta.platform(),
        meta.environment(),
        meta.version(),
        meta.device_os_version().unwrap_or_default(),
        meta.device().unwrap_or_default()
    )
}
