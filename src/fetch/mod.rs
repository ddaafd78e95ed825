//! Acquisition of raw fuel-log bytes from a local file or a URL.

mod basic;
mod client;
pub mod sheets;

pub use basic::BasicClient;
pub use client::HttpClient;

use anyhow::{Context, Result};
use std::time::Duration;
use tracing::debug;

const FETCH_TIMEOUT: Duration = Duration::from_secs(30);

/// GETs `url` and returns the body. Non-2xx responses are errors.
pub async fn fetch_bytes<C: HttpClient>(client: &C, url: &str) -> Result<Vec<u8>> {
    let req = reqwest::Request::new(reqwest::Method::GET, url.parse()?);

    let resp = client.execute(req).await?.error_for_status()?;
    Ok(resp.bytes().await?.to_vec())
}

/// Loads a fuel log from a local path, or over HTTP when `source` is a URL.
///
/// Spreadsheet share links are rewritten to their CSV export form first.
#[tracing::instrument(fields(source = %source))]
pub async fn load_source(source: &str) -> Result<Vec<u8>> {
    if source.starts_with("http://") || source.starts_with("https://") {
        let url = sheets::to_csv_export_url(source);
        debug!(%url, "Fetching fuel log");
        let client = BasicClient::new(FETCH_TIMEOUT)?;
        fetch_bytes(&client, &url)
            .await
            .with_context(|| format!("failed to fetch {url}"))
    } else {
        tokio::fs::read(source)
            .await
            .with_context(|| format!("failed to read {source}"))
    }
}
