//! Protocol classification: HTTP, HTTPS or anything else, plus detection of
//! URLs nested in the query string (redirect/target parameters).

pub const PORT_HTTP: &str = "80";
pub const PORT_HTTPS: &str = "443";
pub const PROTOCOL_DIVIDER: &str = "://";
pub const PROTOCOL_HTTP: &str = "http://";
pub const PROTOCOL_HTTPS: &str = "https://";

/// Protocol of a URL as far as normalization is concerned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Protocol {
    Http,
    Https,
    Other,
}

impl Protocol {
    /// Literal prefix including the `://` divider; `None` for [`Protocol::Other`].
    pub fn prefix(self) -> Option<&'static str> {
        match self {
            Protocol::Http => Some(PROTOCOL_HTTP),
            Protocol::Https => Some(PROTOCOL_HTTPS),
            Protocol::Other => None,
        }
    }

    /// Port implied when the authority carries none. Unknown protocols fall back to HTTP.
    pub fn default_port(self) -> &'static str {
        match self {
            Protocol::Https => PORT_HTTPS,
            Protocol::Http | Protocol::Other => PORT_HTTP,
        }
    }
}

/// Result of classifying a URL string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Classification {
    pub protocol: Protocol,
    pub has_embedded_url_parameter: bool,
}

/// Checks whether `url` starts with the given protocol prefix (case-sensitive).
///
/// With `None`, matches either `http://` or `https://`.
pub fn has_protocol(url: &str, protocol: Option<Protocol>) -> bool {
    match protocol {
        Some(p) => p.prefix().is_some_and(|prefix| url.starts_with(prefix)),
        None => url.starts_with(PROTOCOL_HTTP) || url.starts_with(PROTOCOL_HTTPS),
    }
}

/// Checks whether the query string carries another URL, either literally or
/// percent-encoded as a parameter value (`?next=https%3A%2F%2F...`).
pub fn has_url_parameter(url: &str) -> bool {
    let before_fragment = url.split_once('#').map_or(url, |(u, _)| u);
    let Some((_, query)) = before_fragment.split_once('?') else {
        return false;
    };

    if looks_like_url(query) {
        return true;
    }

    url::form_urlencoded::parse(query.as_bytes()).any(|(_, value)| looks_like_url(&value))
}

fn looks_like_url(s: &str) -> bool {
    s.contains(PROTOCOL_HTTP) || s.contains(PROTOCOL_HTTPS)
}

pub fn classify(url: &str) -> Classification {
    let protocol = if has_protocol(url, Some(Protocol::Https)) {
        Protocol::Https
    } else if has_protocol(url, Some(Protocol::Http)) {
        Protocol::Http
    } else {
        Protocol::Other
    };

    Classification {
        protocol,
        has_embedded_url_parameter: has_url_parameter(url),
    }
}
