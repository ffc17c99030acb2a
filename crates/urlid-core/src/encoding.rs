//! Percent-encoding case canonicalization.
//!
//! Known percent-encoded sequences are rewritten to their uppercase form so
//! that `%2f` and `%2F` (or `%e2%82%ac` and `%E2%82%AC`) collapse to the same
//! URL. Sequences outside the table, and stray `%` characters, are left as-is.

use std::collections::HashSet;
use std::sync::OnceLock;

/// Canonical spellings of the percent-encoded ASCII special characters
/// (0x20-0x7F) and of the Windows-1252 upper range mapped through UTF-8.
pub(crate) const CANONICAL_ENCODINGS: &[&str] = &[
    "%20", "%21", "%22", "%23", "%24", "%25", "%26", "%27",
    "%28", "%29", "%2A", "%2B", "%2C", "%2D", "%2E", "%2F",
    "%30", "%31", "%32", "%33", "%34", "%35", "%36", "%37",
    "%38", "%39", "%3A", "%3B", "%3C", "%3D", "%3E", "%3F",
    "%40", "%41", "%42", "%43", "%44", "%45", "%46", "%47",
    "%48", "%49", "%4A", "%4B", "%4C", "%4D", "%4E", "%4F",
    "%50", "%51", "%52", "%53", "%54", "%55", "%56", "%57",
    "%58", "%59", "%5A", "%5B", "%5C", "%5D", "%5E", "%5F",
    "%60", "%61", "%62", "%63", "%64", "%65", "%66", "%67",
    "%68", "%69", "%6A", "%6B", "%6C", "%6D", "%6E", "%6F",
    "%70", "%71", "%72", "%73", "%74", "%75", "%76", "%77",
    "%78", "%79", "%7A", "%7B", "%7C", "%7D", "%7E", "%7F",
    // Windows-1252 0x80-0xFF as UTF-8.
    "%E2%82%AC", "%81", "%E2%80%9A", "%C6%92", "%E2%80%9E", "%E2%80%A6",
    "%E2%80%A0", "%E2%80%A1", "%CB%86", "%E2%80%B0", "%C5%A0", "%E2%80%B9",
    "%C5%92", "%C5%8D", "%C5%BD", "%8F", "%C2%90", "%E2%80%98",
    "%E2%80%99", "%E2%80%9C", "%E2%80%9D", "%E2%80%A2", "%E2%80%93", "%E2%80%94",
    "%CB%9C", "%E2%84", "%C5%A1", "%E2%80", "%C5%93", "%9D",
    "%C5%BE", "%C5%B8", "%C2%A0", "%C2%A1", "%C2%A2", "%C2%A3",
    "%C2%A4", "%C2%A5", "%C2%A6", "%C2%A7", "%C2%A8", "%C2%A9",
    "%C2%AA", "%C2%AB", "%C2%AC", "%C2%AD", "%C2%AE", "%C2%AF",
    "%C2%B0", "%C2%B1", "%C2%B2", "%C2%B3", "%C2%B4", "%C2%B5",
    "%C2%B6", "%C2%B7", "%C2%B8", "%C2%B9", "%C2%BA", "%C2%BB",
    "%C2%BC", "%C2%BD", "%C2%BE", "%C2%BF", "%C3%80", "%C3%81",
    "%C3%82", "%C3%83", "%C3%84", "%C3%85", "%C3%86", "%C3%87",
    "%C3%88", "%C3%89", "%C3%8A", "%C3%8B", "%C3%8C", "%C3%8D",
    "%C3%8E", "%C3%8F", "%C3%90", "%C3%91", "%C3%92", "%C3%93",
    "%C3%94", "%C3%95", "%C3%96", "%C3%97", "%C3%98", "%C3%99",
    "%C3%9A", "%C3%9B", "%C3%9C", "%C3%9D", "%C3%9E", "%C3%9F",
    "%C3%A0", "%C3%A1", "%C3%A2", "%C3%A3", "%C3%A4", "%C3%A5",
    "%C3%A6", "%C3%A7", "%C3%A8", "%C3%A9", "%C3%AA", "%C3%AB",
    "%C3%AC", "%C3%AD", "%C3%AE", "%C3%AF", "%C3%B0", "%C3%B1",
    "%C3%B2", "%C3%B3", "%C3%B4", "%C3%B5", "%C3%B6", "%C3%B7",
    "%C3%B8", "%C3%B9", "%C3%BA", "%C3%BB", "%C3%BC", "%C3%BD",
    "%C3%BE", "%C3%BF",
];

struct EncodingIndex {
    entries: HashSet<&'static str>,
    /// Distinct entry lengths, longest first.
    lengths: Vec<usize>,
}

fn index() -> &'static EncodingIndex {
    static INDEX: OnceLock<EncodingIndex> = OnceLock::new();
    INDEX.get_or_init(|| {
        let entries: HashSet<&'static str> = CANONICAL_ENCODINGS.iter().copied().collect();
        let mut lengths: Vec<usize> = entries.iter().map(|e| e.len()).collect();
        lengths.sort_unstable_by(|a, b| b.cmp(a));
        lengths.dedup();
        EncodingIndex { entries, lengths }
    })
}

/// Length of the longest table entry that matches `url` at byte `start`,
/// ignoring ASCII case.
fn longest_match(url: &str, start: usize) -> Option<usize> {
    let index = index();
    index.lengths.iter().copied().find(|&len| {
        url.get(start..start + len).is_some_and(|candidate| {
            index
                .entries
                .contains(candidate.to_ascii_uppercase().as_str())
        })
    })
}

/// Uppercases every occurrence of a known percent-encoded sequence.
pub(crate) fn canonicalize_encoding(url: &str) -> String {
    let mut out = url.to_string();
    for (start, _) in url.match_indices('%') {
        if let Some(len) = longest_match(url, start) {
            // Matches are pure ASCII, so the range sits on char boundaries.
            out[start..start + len].make_ascii_uppercase();
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_is_canonical() {
        assert_eq!(CANONICAL_ENCODINGS.len(), 224);
        for entry in CANONICAL_ENCODINGS {
            assert!(entry.starts_with('%'), "{entry}");
            assert_eq!(*entry, entry.to_ascii_uppercase());
        }
    }

    #[test]
    fn uppercases_ascii_sequences() {
        assert_eq!(canonicalize_encoding("a%2fb"), "a%2Fb");
        assert_eq!(canonicalize_encoding("%3a%3B%3c"), "%3A%3B%3C");
        assert_eq!(canonicalize_encoding("%7e"), "%7E");
    }

    #[test]
    fn uppercases_multibyte_sequences() {
        assert_eq!(canonicalize_encoding("price=%e2%82%ac5"), "price=%E2%82%AC5");
        assert_eq!(canonicalize_encoding("caf%c3%a9"), "caf%C3%A9");
        assert_eq!(canonicalize_encoding("%E2%80%9a"), "%E2%80%9A");
    }

    #[test]
    fn prefix_entries_cover_unknown_tails() {
        // "%E2%80" is a table entry on its own; the unknown tail stays as-is.
        assert_eq!(canonicalize_encoding("%e2%80%ff"), "%E2%80%ff");
    }

    #[test]
    fn leaves_unknown_sequences_alone() {
        assert_eq!(canonicalize_encoding("100%"), "100%");
        assert_eq!(canonicalize_encoding("%zz"), "%zz");
        assert_eq!(canonicalize_encoding("%1f"), "%1f");
        assert_eq!(canonicalize_encoding("%c3"), "%c3");
        assert_eq!(canonicalize_encoding("%e"), "%e");
    }

    #[test]
    fn leaves_other_text_alone() {
        assert_eq!(
            canonicalize_encoding("http://Example.com/Päth?q=%2f&r=%41"),
            "http://Example.com/Päth?q=%2F&r=%41"
        );
    }

    #[test]
    fn handles_adjacent_and_escaped_percent() {
        assert_eq!(canonicalize_encoding("%25%2f%2f"), "%25%2F%2F");
        assert_eq!(canonicalize_encoding("%252f"), "%252f");
    }
}
