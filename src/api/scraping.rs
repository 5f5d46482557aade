//! Typed bindings for the three scraping operations
//!
//! Each binding POSTs its request, then gates on the response's `success`
//! flag: a `false` flag becomes an [`ApiError::Backend`] carrying the
//! backend's `error` message, or a fixed per-operation fallback when the
//! backend omits one.

use crate::api::client::{ApiClient, ApiError};
use crate::types::{
    ExtractRequest, ExtractResponse, QuickScrapeRequest, QuickScrapeResponse, RawScrapeRequest,
    RawScrapeResponse,
};

const QUICK_SCRAPE_PATH: &str = "/api/v1/scraping/quick";
const RAW_SCRAPE_PATH: &str = "/api/v1/scraping/scrape";
const EXTRACT_PATH: &str = "/api/v1/scraping/extract";

/// Fallback message when a scrape fails without a backend-supplied reason.
pub const SCRAPE_FAILED_MESSAGE: &str = "Failed to scrape the page.";
/// Fallback message when an extraction fails without a backend-supplied reason.
pub const EXTRACT_FAILED_MESSAGE: &str = "Failed to extract data.";

impl ApiClient {
    /// Scrape a URL, extract structured data, and generate insights in one
    /// round trip.
    pub async fn quick_scrape(
        &self,
        request: &QuickScrapeRequest,
    ) -> Result<QuickScrapeResponse, ApiError> {
        let response: QuickScrapeResponse = self.post(QUICK_SCRAPE_PATH, request).await?;
        ensure_success(response.success, response.error.as_deref(), SCRAPE_FAILED_MESSAGE)?;
        Ok(response)
    }

    /// Scrape a URL and return its raw content without extraction.
    pub async fn scrape(
        &self,
        request: &RawScrapeRequest,
    ) -> Result<RawScrapeResponse, ApiError> {
        let response: RawScrapeResponse = self.post(RAW_SCRAPE_PATH, request).await?;
        ensure_success(response.success, response.error.as_deref(), SCRAPE_FAILED_MESSAGE)?;
        Ok(response)
    }

    /// Extract data from a URL guided by a natural-language prompt and an
    /// optional schema.
    pub async fn extract(&self, request: &ExtractRequest) -> Result<ExtractResponse, ApiError> {
        let response: ExtractResponse = self.post(EXTRACT_PATH, request).await?;
        ensure_success(response.success, response.error.as_deref(), EXTRACT_FAILED_MESSAGE)?;
        Ok(response)
    }
}

fn ensure_success(success: bool, error: Option<&str>, fallback: &str) -> Result<(), ApiError> {
    if success {
        return Ok(());
    }

    let message = error
        .filter(|message| !message.trim().is_empty())
        .unwrap_or(fallback)
        .to_string();
    tracing::debug!(%message, "backend reported a failed operation");
    Err(ApiError::Backend(message))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_flag_passes_through() {
        assert!(ensure_success(true, None, SCRAPE_FAILED_MESSAGE).is_ok());
        // A leftover error string on a successful response is ignored.
        assert!(ensure_success(true, Some("stale"), SCRAPE_FAILED_MESSAGE).is_ok());
    }

    #[test]
    fn failure_uses_the_backend_message_verbatim() {
        let err = ensure_success(false, Some("bad url"), SCRAPE_FAILED_MESSAGE).unwrap_err();
        assert_eq!(err.to_string(), "bad url");
    }

    #[test]
    fn failure_without_a_message_uses_the_operation_fallback() {
        let err = ensure_success(false, None, SCRAPE_FAILED_MESSAGE).unwrap_err();
        assert_eq!(err.to_string(), SCRAPE_FAILED_MESSAGE);

        let err = ensure_success(false, Some(""), EXTRACT_FAILED_MESSAGE).unwrap_err();
        assert_eq!(err.to_string(), EXTRACT_FAILED_MESSAGE);
    }
}
