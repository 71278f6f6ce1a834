use strum_macros::Display;

/// HTTP verbs supported by the API facade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum HTTPRequestMethod {
    Get,
    Post,
    Put,
    Delete,
}

impl From<HTTPRequestMethod> for reqwest::Method {
    fn from(value: HTTPRequestMethod) -> Self {
        match value {
            HTTPRequestMethod::Get => reqwest::Method::GET,
            HTTPRequestMethod::Post => reqwest::Method::POST,
            HTTPRequestMethod::Put => reqwest::Method::PUT,
            HTTPRequestMethod::Delete => reqwest::Method::DELETE,
        }
    }
}

/// Payload attached to an outgoing request.
///
/// JSON bodies are sent with `Content-Type: application/json`. Multipart
/// bodies get no explicit Content-Type; reqwest supplies the
/// `multipart/form-data` header and its boundary itself.
pub enum RequestBody {
    None,
    Json(serde_json::Value),
    Multipart(reqwest::multipart::Form),
}

impl RequestBody {
    /// Serializes any `Serialize` payload into a JSON body.
    pub fn json<B: serde::Serialize + ?Sized>(payload: &B) -> Result<Self, RequestError> {
        Ok(RequestBody::Json(serde_json::to_value(payload)?))
    }
}

impl From<serde_json::Value> for RequestBody {
    fn from(value: serde_json::Value) -> Self { RequestBody::Json(value) }
}

impl From<reqwest::multipart::Form> for RequestBody {
    fn from(form: reqwest::multipart::Form) -> Self { RequestBody::Multipart(form) }
}

#[derive(Debug, Display)]
pub enum RequestError {
    /// A required configuration hook is missing. Carries the name of the
    /// piece that has to be installed before the call can be dispatched.
    NotConfigured(&'static str),
    InvalidHeaderName,
    InvalidHeaderValue,
    UnserializableBody,
}

impl std::error::Error for RequestError {}

impl From<reqwest::header::InvalidHeaderName> for RequestError {
    fn from(_: reqwest::header::InvalidHeaderName) -> Self { RequestError::InvalidHeaderName }
}

impl From<reqwest::header::InvalidHeaderValue> for RequestError {
    fn from(_: reqwest::header::InvalidHeaderValue) -> Self { RequestError::InvalidHeaderValue }
}

impl From<serde_json::Error> for RequestError {
    fn from(_: serde_json::Error) -> Self { RequestError::UnserializableBody }
}
