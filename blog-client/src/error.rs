use reqwest::StatusCode;
use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BlogClientError {
    #[error("Request error: {0}")]
    RequestError(#[from] reqwest::Error),
    #[error("Not found: {0}")]
    NotFound(String),
    #[error("Invalid request: {0}")]
    Validation(String),
    #[error("Server returned {status}: {detail}")]
    Api { status: StatusCode, detail: String },
}

impl BlogClientError {
    pub async fn from_http_response(resp: reqwest::Response) -> Self {
        let status = resp.status();
        match resp.text().await {
            Ok(body) => Self::from_parts(status, &body),
            Err(e) => BlogClientError::RequestError(e),
        }
    }

    /// Builds the error from a status and an `{"detail": ...}` body.
    pub(crate) fn from_parts(status: StatusCode, body: &str) -> Self {
        let detail = serde_json::from_str::<Value>(body)
            .ok()
            .and_then(|v| v.get("detail").cloned())
            .map(|detail| describe_detail(&detail))
            .unwrap_or_else(|| body.trim().to_string());

        match status {
            StatusCode::NOT_FOUND => BlogClientError::NotFound(detail),
            StatusCode::UNPROCESSABLE_ENTITY => BlogClientError::Validation(detail),
            _ => BlogClientError::Api { status, detail },
        }
    }
}

fn describe_detail(detail: &Value) -> String {
    match detail {
        Value::String(s) => s.clone(),
        Value::Array(errors) => errors
            .iter()
            .map(|e| {
                let field = e["loc"]
                    .as_array()
                    .map(|loc| {
                        loc.iter()
                            .filter_map(Value::as_str)
                            .collect::<Vec<_>>()
                            .join(".")
                    })
                    .unwrap_or_default();
                format!("{}: {}", field, e["msg"].as_str().unwrap_or("invalid"))
            })
            .collect::<Vec<_>>()
            .join("; "),
        other => other.to_string(),
    }
}
