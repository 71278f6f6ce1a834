use strum_macros::Display;

/// Structured result of a completed HTTP exchange, handed to status hooks
/// and returned to callers.
#[derive(Debug)]
pub struct ApiResponse {
    ok: bool,
    status: reqwest::StatusCode,
    json: serde_json::Value,
}

impl ApiResponse {
    pub(crate) fn new(status: reqwest::StatusCode, json: serde_json::Value) -> Self {
        ApiResponse { ok: status.is_success(), status, json }
    }

    /// True exactly when the status code is in the 2xx range.
    pub fn ok(&self) -> bool { self.ok }
    pub fn status(&self) -> reqwest::StatusCode { self.status }
    pub fn json(&self) -> &serde_json::Value { &self.json }
    /// Consumes the envelope, yielding the parsed body.
    pub fn into_json(self) -> serde_json::Value { self.json }
}

/// Parses a response body. Protection from empty responses: an empty body
/// maps to an empty JSON object instead of a parse failure.
pub(crate) fn parse_body(text: &str) -> Result<serde_json::Value, ResponseError> {
    if text.is_empty() {
        Ok(serde_json::Value::Object(serde_json::Map::new()))
    } else {
        Ok(serde_json::from_str(text)?)
    }
}

#[derive(Debug, Display)]
pub enum ResponseError {
    NoConnection,
    Timeout,
    MalformedJson(serde_json::Error),
    Unknown,
}

impl std::error::Error for ResponseError {}

impl From<reqwest::Error> for ResponseError {
    fn from(value: reqwest::Error) -> Self {
        if value.is_connect() {
            ResponseError::NoConnection
        } else if value.is_timeout() {
            ResponseError::Timeout
        } else {
            ResponseError::Unknown
        }
    }
}

impl From<serde_json::Error> for ResponseError {
    fn from(value: serde_json::Error) -> Self { ResponseError::MalformedJson(value) }
}
