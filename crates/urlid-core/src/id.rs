//! ID generation from a normalized URL.
//!
//! The normalization pipeline hands its output to an [`IdGenerator`]; any
//! deterministic mapping works. The default is SHA-256 based.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fmt;
use std::str::FromStr;

/// Maps a normalized URL to an opaque identifier. Must be deterministic.
pub trait IdGenerator {
    fn generate_id(&self, normalized_url: &str) -> String;
}

impl<F> IdGenerator for F
where
    F: Fn(&str) -> String,
{
    fn generate_id(&self, normalized_url: &str) -> String {
        self(normalized_url)
    }
}

/// How [`Sha256IdGenerator`] renders the digest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IdFormat {
    /// First 8 digest bytes as a big-endian `u64`, printed in decimal.
    #[default]
    Decimal,
    /// Full digest as lowercase hex.
    Hex,
}

/// Accepts exactly the spellings the config file uses ("decimal", "hex").
impl FromStr for IdFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "decimal" => Ok(IdFormat::Decimal),
            "hex" => Ok(IdFormat::Hex),
            other => Err(format!("unknown id format {other:?} (expected decimal or hex)")),
        }
    }
}

impl fmt::Display for IdFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IdFormat::Decimal => write!(f, "decimal"),
            IdFormat::Hex => write!(f, "hex"),
        }
    }
}

/// Default ID generator: SHA-256 over the normalized URL's UTF-8 bytes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Sha256IdGenerator {
    pub format: IdFormat,
}

impl Sha256IdGenerator {
    pub fn new(format: IdFormat) -> Self {
        Self { format }
    }
}

impl IdGenerator for Sha256IdGenerator {
    fn generate_id(&self, normalized_url: &str) -> String {
        let digest = Sha256::digest(normalized_url.as_bytes());
        match self.format {
            IdFormat::Decimal => {
                let mut head = [0u8; 8];
                head.copy_from_slice(&digest[..8]);
                u64::from_be_bytes(head).to_string()
            }
            IdFormat::Hex => hex::encode(digest),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sha256_hex_known_value() {
        let g = Sha256IdGenerator::new(IdFormat::Hex);
        assert_eq!(
            g.generate_id(""),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
    }

    #[test]
    fn sha256_decimal_is_digest_prefix() {
        let g = Sha256IdGenerator::default();
        // 0xe3b0c44298fc1c14
        assert_eq!(g.generate_id(""), "16406829232824261652");
    }

    #[test]
    fn closures_are_generators() {
        let g = |url: &str| format!("len:{}", url.len());
        assert_eq!(g.generate_id("abc"), "len:3");
    }

    #[test]
    fn id_format_parse() {
        assert_eq!("decimal".parse::<IdFormat>(), Ok(IdFormat::Decimal));
        assert_eq!("hex".parse::<IdFormat>(), Ok(IdFormat::Hex));
        assert!("base64".parse::<IdFormat>().is_err());
        // Same spellings as `id_format` in config.toml.
        assert!("HEX".parse::<IdFormat>().is_err());
        assert!(" hex".parse::<IdFormat>().is_err());
        assert_eq!(IdFormat::Hex.to_string(), "hex");
    }
}
