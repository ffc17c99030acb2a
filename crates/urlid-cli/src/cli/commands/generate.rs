//! `urlid generate <url>...` – print the ID of each URL.

use anyhow::{Context, Result};
use urlid_core::{IdFormat, UrlIdGenerator};

pub fn run_generate(urls: &[String], format: IdFormat, json: bool) -> Result<()> {
    let generator = UrlIdGenerator::with_format(format);
    for url in urls {
        let id = generator
            .generate(url)
            .with_context(|| format!("generate id for {url:?}"))?;
        tracing::info!(%format, id = %id, "generated id for {}", url);
        if json {
            println!("{}", serde_json::json!({ "url": url, "id": id }));
        } else {
            println!("{id}\t{url}");
        }
    }
    Ok(())
}
