//! Type definitions for the scraping API
//!
//! Wire field names are snake_case, matching the backend's JSON contract.

use serde::{Deserialize, Serialize};
use serde_json::Value;

// ============================================================================
// Request Types
// ============================================================================

/// Input to the quick-scrape operation (scrape + extract + insights in one
/// round trip).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuickScrapeRequest {
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_type: Option<String>,
}

impl QuickScrapeRequest {
    /// Build a request with the auto-detect sentinel for `data_type`.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            data_type: Some("auto".to_string()),
        }
    }
}

/// Input to the raw-scrape operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawScrapeRequest {
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub formats: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub only_main_content: Option<bool>,
}

/// Input to the schema-guided extraction operation. `schema` is an opaque
/// JSON-schema-like object, passed through unvalidated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtractRequest {
    pub url: String,
    pub prompt: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schema: Option<Value>,
}

// ============================================================================
// Response Types
// ============================================================================

/// Response from `/api/v1/scraping/quick`.
///
/// When `success` is true, `extracted_data` and `insights` are populated;
/// when false, `error` carries the failure message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuickScrapeResponse {
    pub success: bool,
    pub url: String,
    #[serde(default)]
    pub extracted_data: Option<Value>,
    #[serde(default)]
    pub insights: Option<Insights>,
    #[serde(default)]
    pub raw_content: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

/// Response from `/api/v1/scraping/scrape`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawScrapeResponse {
    pub success: bool,
    pub url: String,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub metadata: Option<Value>,
    #[serde(default)]
    pub error: Option<String>,
}

/// Response from `/api/v1/scraping/extract`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtractResponse {
    pub success: bool,
    pub url: String,
    #[serde(default)]
    pub data: Option<Value>,
    #[serde(default)]
    pub raw_content: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

// ============================================================================
// Insights
// ============================================================================

/// AI-generated insights attached to a quick-scrape result. Every field is
/// independently optional; absence of one implies nothing about the others.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Insights {
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub key_findings: Option<Vec<String>>,
    #[serde(default)]
    pub trends: Option<Vec<String>>,
    #[serde(default)]
    pub recommendations: Option<Vec<String>>,
    #[serde(default)]
    pub risk_factors: Option<Vec<String>>,
    #[serde(default)]
    pub confidence_score: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quick_scrape_request_defaults_to_auto_detect() {
        let req = QuickScrapeRequest::new("https://example.com");
        assert_eq!(req.data_type.as_deref(), Some("auto"));

        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["data_type"], "auto");
    }

    #[test]
    fn optional_request_fields_are_omitted_from_the_wire() {
        let req = RawScrapeRequest {
            url: "https://example.com".to_string(),
            formats: None,
            only_main_content: None,
        };
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json.as_object().unwrap().len(), 1);
    }

    #[test]
    fn insights_deserialize_with_all_fields_missing() {
        let insights: Insights = serde_json::from_str("{}").unwrap();
        assert_eq!(insights, Insights::default());
    }

    #[test]
    fn quick_scrape_response_tolerates_missing_optionals() {
        let body = r#"{"success": false, "url": "https://example.com"}"#;
        let resp: QuickScrapeResponse = serde_json::from_str(body).unwrap();
        assert!(!resp.success);
        assert!(resp.error.is_none());
        assert!(resp.extracted_data.is_none());
    }
}
