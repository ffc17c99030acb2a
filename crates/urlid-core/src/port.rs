//! Default-port stripping.

use crate::protocol::{has_protocol, Protocol, PROTOCOL_DIVIDER};
use std::ops::Range;

/// Expected default port of a URL and the port it actually carries, if any.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct PortPair<'a> {
    pub default_port: &'static str,
    pub actual_port: Option<&'a str>,
}

/// Determines the default port from the protocol and the explicit port from
/// the authority. URLs without a known protocol count as HTTP.
pub(crate) fn determine_port(url: &str) -> PortPair<'_> {
    let protocol = if has_protocol(url, Some(Protocol::Https)) {
        Protocol::Https
    } else {
        Protocol::Http
    };

    PortPair {
        default_port: protocol.default_port(),
        actual_port: port_span(url).map(|span| &url[span]),
    }
}

/// Removes the port from the authority when it equals the protocol's default.
pub(crate) fn remove_port(url: &str) -> String {
    let pair = determine_port(url);
    if pair.actual_port != Some(pair.default_port) {
        return url.to_string();
    }

    match port_span(url) {
        // Drop the ':' before the digits as well.
        Some(span) => format!("{}{}", &url[..span.start - 1], &url[span.end..]),
        None => url.to_string(),
    }
}

/// Byte range of the authority: after the first `://`, up to `/`, `?` or `#`.
fn authority_span(url: &str) -> Option<Range<usize>> {
    let start = url.find(PROTOCOL_DIVIDER)? + PROTOCOL_DIVIDER.len();
    let rest = &url[start..];
    let len = rest.find(['/', '?', '#']).unwrap_or(rest.len());
    Some(start..start + len)
}

/// Byte range of the port digits inside the authority, if there is one.
fn port_span(url: &str) -> Option<Range<usize>> {
    let authority = authority_span(url)?;
    let text = &url[authority.clone()];

    // Skip userinfo; a ':' in "user:pass@" is not a port separator.
    let host_start = text.rfind('@').map_or(0, |at| at + 1);
    let host_port = &text[host_start..];

    let colon = if host_port.starts_with('[') {
        let close = host_port.find(']')?;
        let after = &host_port[close + 1..];
        if !after.starts_with(':') {
            return None;
        }
        close + 1
    } else {
        host_port.rfind(':')?
    };

    let digits = &host_port[colon + 1..];
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    let start = authority.start + host_start + colon + 1;
    Some(start..authority.end)
}
