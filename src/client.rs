//! HTTP client for the statement analysis backend.
//!
//! Each submission is a single multipart `POST {api_base}/analyze-file` with the
//! fields `file`, `business_type` and `language`. There is no retry and no timeout:
//! the backend may spend a long time generating insights.

use crate::analysis::AnalysisReport;
use crate::error::{Result, UploadError};
use crate::request::UploadRequest;
use crate::traits::StatementAnalyzer;
use log::{debug, info, warn};
use reqwest::blocking::{multipart, Client};
use reqwest::StatusCode;

/// Backend base URL used when nothing is configured.
pub const DEFAULT_API_BASE: &str = "http://127.0.0.1:8000";

/// Sample statement served by the backend's static files.
pub const DEFAULT_SAMPLE_URL: &str = "http://127.0.0.1:8000/static/sample_statement.csv";

const ANALYZE_PATH: &str = "analyze-file";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub api_base: String,
}

impl ClientConfig {
    pub fn new(api_base: impl Into<String>) -> Self {
        Self {
            api_base: api_base.into(),
        }
    }

    /// Full URL of the analysis endpoint.
    pub fn endpoint(&self) -> String {
        format!("{}/{}", self.api_base.trim_end_matches('/'), ANALYZE_PATH)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_BASE)
    }
}

/// Blocking client for the analysis backend.
pub struct AnalysisClient {
    http: Client,
    config: ClientConfig,
}

impl AnalysisClient {
    pub fn new(config: ClientConfig) -> Result<Self> {
        let http = Client::builder().timeout(None).build()?;
        Ok(Self { http, config })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Reads the selected file and assembles the multipart payload.
    fn build_form(request: &UploadRequest) -> Result<multipart::Form> {
        let path = &request.file.path;
        let bytes = std::fs::read(path).map_err(|source| UploadError::Io {
            path: path.clone(),
            source,
        })?;
        let mime_type = mime_guess::from_path(path).first_or_octet_stream();

        let part = multipart::Part::bytes(bytes)
            .file_name(request.file.file_name.clone())
            .mime_str(mime_type.as_ref())?;

        Ok(multipart::Form::new()
            .part("file", part)
            .text("business_type", request.business_type.form_value())
            .text("language", request.language.form_value()))
    }
}

impl StatementAnalyzer for AnalysisClient {
    fn analyze(&self, request: &UploadRequest) -> Result<AnalysisReport> {
        let form = Self::build_form(request)?;
        let endpoint = self.config.endpoint();

        info!(
            "Uploading {} to {} (business_type={}, language={})",
            request.file.file_name, endpoint, request.business_type, request.language
        );

        let response = self.http.post(&endpoint).multipart(form).send()?;
        let status = response.status();
        debug!("Analysis backend answered {}", status);

        let body = response.text()?;
        interpret_response(status, &body)
    }
}

/// Turns a status and body into a report or a server error.
///
/// Non-success statuses take the JSON `detail` field when present and fall back
/// to the status text otherwise.
pub fn interpret_response(status: StatusCode, body: &str) -> Result<AnalysisReport> {
    if !status.is_success() {
        let detail = error_detail(body).unwrap_or_else(|| status_text(status));
        warn!("Analysis failed with {}: {}", status.as_u16(), detail);
        return Err(UploadError::Server {
            status: status.as_u16(),
            detail,
        });
    }

    Ok(serde_json::from_str(body)?)
}

fn error_detail(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    match value.get("detail")? {
        serde_json::Value::String(detail) => Some(detail.clone()),
        serde_json::Value::Null => None,
        // FastAPI validation errors arrive as a list of objects
        other => Some(other.to_string()),
    }
}

fn status_text(status: StatusCode) -> String {
    status
        .canonical_reason()
        .map(str::to_string)
        .unwrap_or_else(|| status.as_str().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    const REPORT_JSON: &str = r#"{
        "metrics": {
            "score": 72, "readiness": "Medium",
            "total_revenue": 150000, "total_expenses": 90000, "net_cash_flow": 60000,
            "debt_obligations": 0, "tax_compliance": "Unclear",
            "risks": ["No tax payments detected in this period"],
            "monthly_trend": []
        },
        "insights": "ok"
    }"#;

    #[test]
    fn test_endpoint_joins_without_double_slash() {
        assert_eq!(
            ClientConfig::new("http://localhost:8000/").endpoint(),
            "http://localhost:8000/analyze-file"
        );
        assert_eq!(
            ClientConfig::new("http://localhost:8000/api").endpoint(),
            "http://localhost:8000/api/analyze-file"
        );
    }

    #[test]
    fn test_success_decodes_report() {
        let report = interpret_response(StatusCode::OK, REPORT_JSON).unwrap();
        assert_eq!(report.metrics.score, 72.0);
        assert_eq!(report.metrics.total_revenue, 150000.0);
    }

    #[test]
    fn test_error_uses_json_detail() {
        let err = interpret_response(
            StatusCode::BAD_REQUEST,
            r#"{"detail": "Error parsing file: no columns to parse"}"#,
        )
        .unwrap_err();
        assert_eq!(
            err.to_string(),
            "Server responded with 400: Error parsing file: no columns to parse"
        );
        assert!(err.user_message().contains("Error parsing file: no columns to parse"));
    }

    #[test]
    fn test_error_without_json_falls_back_to_status_text() {
        let err = interpret_response(StatusCode::BAD_GATEWAY, "<html>bad gateway</html>").unwrap_err();
        assert_eq!(err.to_string(), "Server responded with 502: Bad Gateway");
    }

    #[test]
    fn test_error_json_without_detail_falls_back_to_status_text() {
        let err = interpret_response(StatusCode::INTERNAL_SERVER_ERROR, r#"{"message": "boom"}"#)
            .unwrap_err();
        assert_eq!(err.to_string(), "Server responded with 500: Internal Server Error");
    }

    #[test]
    fn test_structured_detail_is_rendered_compactly() {
        let err = interpret_response(
            StatusCode::UNPROCESSABLE_ENTITY,
            r#"{"detail": [{"loc": ["body", "file"], "msg": "field required"}]}"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("field required"));
    }

    #[test]
    fn test_malformed_success_body_is_decode_error() {
        let err = interpret_response(StatusCode::OK, "not json").unwrap_err();
        assert!(matches!(err, UploadError::Decode(_)));
    }
}
