//! Document retrieval by URL.
//!
//! One GET per call, no retry or timeout of its own. The response body is
//! handed back exactly as received so the conversion pipeline sees the raw
//! document text. Failures here are deliberately distinct from conversion
//! failures; the caller decides how to surface them.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum FetchError {
  #[error("Please enter a URL.")]
  EmptyUrl,

  #[error("Failed to fetch spec from {url}: HTTP error! status: {status}")]
  Status { url: String, status: reqwest::StatusCode },

  #[error("Failed to fetch spec: {0}")]
  Transport(#[from] reqwest::Error),
}

/// Fetches document text from a URL.
pub async fn fetch_spec(url: &str) -> Result<String, FetchError> {
  if url.trim().is_empty() {
    return Err(FetchError::EmptyUrl);
  }

  let response = reqwest::get(url).await?;
  let status = response.status();
  if !status.is_success() {
    return Err(FetchError::Status {
      url: url.to_string(),
      status,
    });
  }

  Ok(response.text().await?)
}

#[cfg(test)]
mod tests {
  use super::*;

  #[tokio::test]
  async fn test_empty_url_is_rejected_before_any_request() {
    let error = fetch_spec("  ").await.unwrap_err();
    assert!(matches!(error, FetchError::EmptyUrl));
    assert_eq!(error.to_string(), "Please enter a URL.");
  }
}
