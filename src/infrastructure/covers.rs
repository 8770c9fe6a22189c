// SPDX-License-Identifier: MPL-2.0
//! Cover image download.
//!
//! Returns raw encoded bytes; decoding is left to the image widget.

use crate::error::{Error, Result};
use std::time::Duration;

/// Covers larger than this are rejected.
pub const MAX_COVER_BYTES: usize = 5 * 1024 * 1024;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

/// Reads the cover at `url`.
///
/// `http://` and `https://` URLs are downloaded, `file://` URLs are read from
/// disk. Any other scheme is an error.
pub async fn fetch(url: String) -> Result<Vec<u8>> {
    let bytes = if let Some(path) = url.strip_prefix("file://") {
        std::fs::read(path)?
    } else if url.starts_with("http://") || url.starts_with("https://") {
        download(&url).await?
    } else {
        return Err(Error::Network(format!("unsupported cover URL: {url}")));
    };

    check_size(bytes.len())?;
    Ok(bytes)
}

async fn download(url: &str) -> Result<Vec<u8>> {
    let client = reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::limited(10))
        .user_agent(concat!("IcedBooks/", env!("CARGO_PKG_VERSION")))
        .timeout(REQUEST_TIMEOUT)
        .build()?;

    let response = client.get(url).send().await?;
    if !response.status().is_success() {
        return Err(Error::Network(format!(
            "HTTP status: {}",
            response.status()
        )));
    }

    if let Some(length) = response.content_length() {
        check_size(usize::try_from(length).unwrap_or(usize::MAX))?;
    }

    Ok(response.bytes().await?.to_vec())
}

fn check_size(len: usize) -> Result<()> {
    if len > MAX_COVER_BYTES {
        return Err(Error::Network(format!(
            "cover too large ({len} bytes, limit {MAX_COVER_BYTES})"
        )));
    }
    Ok(())
}
