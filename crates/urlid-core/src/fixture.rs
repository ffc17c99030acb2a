//! Expectation fixtures: one `<url>\t|\t<expected-id>` pair per line.
//!
//! Used to check that a generator still maps known URLs to the IDs recorded
//! for them (e.g. after touching the normalization rules).

use crate::error::UrlIdError;
use crate::generator::UrlIdGenerator;
use crate::id::IdGenerator;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Separator between URL and expected ID: tab, pipe, tab.
pub const SEPARATOR: &str = "\t|\t";

#[derive(Debug, thiserror::Error)]
pub enum FixtureError {
    #[error("fixture line {line}: expected `<url>\\t|\\t<expected-id>`")]
    Malformed { line: usize },
    #[error("failed to read fixture file {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// One expectation. `line` is 1-based.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixtureCase {
    pub line: usize,
    pub url: String,
    pub expected_id: String,
}

/// A case whose generated ID differed from the expectation (or failed).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixtureFailure {
    pub case: FixtureCase,
    pub actual: Result<String, UrlIdError>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FixtureReport {
    pub passed: usize,
    pub failures: Vec<FixtureFailure>,
}

impl FixtureReport {
    pub fn total(&self) -> usize {
        self.passed + self.failures.len()
    }

    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Parses fixture text. Lines are trimmed; blank lines are skipped.
pub fn parse_fixtures(input: &str) -> Result<Vec<FixtureCase>, FixtureError> {
    let mut cases = Vec::new();
    for (idx, raw) in input.lines().enumerate() {
        let line = idx + 1;
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            continue;
        }

        let parts: Vec<&str> = trimmed.split(SEPARATOR).collect();
        let [url, expected_id] = parts.as_slice() else {
            return Err(FixtureError::Malformed { line });
        };
        if expected_id.is_empty() {
            return Err(FixtureError::Malformed { line });
        }

        cases.push(FixtureCase {
            line,
            url: url.to_string(),
            expected_id: expected_id.to_string(),
        });
    }
    Ok(cases)
}

pub fn load_fixtures(path: &Path) -> Result<Vec<FixtureCase>, FixtureError> {
    let data = fs::read_to_string(path).map_err(|source| FixtureError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_fixtures(&data)
}

/// Runs every case through `generator` and collects mismatches.
pub fn verify<G: IdGenerator>(generator: &UrlIdGenerator<G>, cases: &[FixtureCase]) -> FixtureReport {
    let mut report = FixtureReport::default();
    for case in cases {
        let actual = generator.generate(&case.url);
        if actual.as_deref() == Ok(case.expected_id.as_str()) {
            report.passed += 1;
        } else {
            tracing::debug!(line = case.line, url = %case.url, ?actual, "fixture mismatch");
            report.failures.push(FixtureFailure {
                case: case.clone(),
                actual,
            });
        }
    }
    report
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_lines() {
        let cases = parse_fixtures("http://a.com\t|\t1\n\n  b.com:80/x\t|\tabc  \n").unwrap();
        assert_eq!(
            cases,
            vec![
                FixtureCase {
                    line: 1,
                    url: "http://a.com".to_string(),
                    expected_id: "1".to_string(),
                },
                FixtureCase {
                    line: 3,
                    url: "b.com:80/x".to_string(),
                    expected_id: "abc".to_string(),
                },
            ]
        );
    }

    #[test]
    fn parse_rejects_missing_or_extra_separator() {
        assert!(matches!(
            parse_fixtures("http://a.com\t|\t1\nhttp://b.com 2"),
            Err(FixtureError::Malformed { line: 2 })
        ));
        assert!(matches!(
            parse_fixtures("a\t|\tb\t|\tc"),
            Err(FixtureError::Malformed { line: 1 })
        ));
        // A bare pipe without tabs is not a separator.
        assert!(matches!(
            parse_fixtures("http://a.com|1"),
            Err(FixtureError::Malformed { line: 1 })
        ));
    }

    #[test]
    fn load_missing_file_is_io_error() {
        let err = load_fixtures(Path::new("/nonexistent/url_ids.txt")).unwrap_err();
        assert!(matches!(err, FixtureError::Io { .. }));
    }

    #[test]
    fn verify_reports_mismatches() {
        fn echo_id(url: &str) -> String {
            url.to_string()
        }
        let generator = UrlIdGenerator::new(echo_id as fn(&str) -> String);
        let cases = parse_fixtures(
            "example.com:80/a\t|\thttp://example.com/a\nexample.com/b\t|\twrong\n",
        )
        .unwrap();

        let report = verify(&generator, &cases);
        assert_eq!(report.passed, 1);
        assert_eq!(report.total(), 2);
        assert!(!report.is_success());
        assert_eq!(report.failures[0].case.line, 2);
        assert_eq!(
            report.failures[0].actual.as_deref(),
            Ok("http://example.com/b")
        );
    }
}
