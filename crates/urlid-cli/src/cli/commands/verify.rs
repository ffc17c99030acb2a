//! `urlid verify <file>` – check recorded URL IDs against the generator.

use anyhow::{bail, Result};
use std::path::Path;
use urlid_core::fixture;
use urlid_core::{IdFormat, UrlIdGenerator};

pub fn run_verify(path: &Path, format: IdFormat) -> Result<()> {
    let cases = fixture::load_fixtures(path)?;
    let generator = UrlIdGenerator::with_format(format);
    let report = fixture::verify(&generator, &cases);

    for failure in &report.failures {
        let actual = match &failure.actual {
            Ok(id) => id.clone(),
            Err(e) => format!("error: {e}"),
        };
        println!(
            "line {}: {} expected [{}], got [{}]",
            failure.case.line, failure.case.url, failure.case.expected_id, actual
        );
    }
    println!("{}/{} passed", report.passed, report.total());
    tracing::info!(
        path = %path.display(),
        passed = report.passed,
        failed = report.failures.len(),
        "verified fixtures"
    );

    if !report.is_success() {
        bail!(
            "{} of {} fixture cases failed",
            report.failures.len(),
            report.total()
        );
    }
    Ok(())
}
