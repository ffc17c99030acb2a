//! Normalization pipeline: protocol branch, default-port stripping, then
//! percent-encoding canonicalization.

use crate::encoding::canonicalize_encoding;
use crate::port::remove_port;
use crate::protocol::{classify, has_protocol, has_url_parameter, Protocol, PROTOCOL_HTTP};

/// Normalizes an already trimmed, non-empty URL.
pub(crate) fn normalize_url(url: &str) -> String {
    let stripped = if has_protocol(url, Some(Protocol::Http)) {
        remove_port(url)
    } else if has_protocol(url, Some(Protocol::Https)) {
        remove_port(url)
    } else if !has_protocol(url, None) || has_url_parameter(url) {
        // Non-http schemes end up prefixed too ("ftp://x" -> "http://ftp://x").
        // Existing IDs depend on this, so it stays.
        remove_port(&format!("{PROTOCOL_HTTP}{url}"))
    } else {
        url.to_string()
    };

    let normalized = canonicalize_encoding(&stripped);
    tracing::debug!(
        input = url,
        classification = ?classify(url),
        normalized = %normalized,
        "normalized url"
    );
    normalized
}
