use crate::common::HTTPError;
use crate::http_client::HTTPClient;
use crate::request_common::{HTTPRequestMethod, RequestBody, RequestError};
use crate::response_common::{ApiResponse, ResponseError, parse_body};
use log::{debug, error};
use reqwest::StatusCode;
use reqwest::header::{ACCEPT, HeaderMap, HeaderName, HeaderValue};
use serde_json::Value;
use url::form_urlencoded;

/// Default name of the header carrying the user token. Overridable via
/// [`Api::set_auth_token_header`].
pub const DEFAULT_AUTH_TOKEN_HEADER: &str = "Arachne-Auth-Token";
const JSON_RESPONSE_TYPE: &str = "application/json";

/// Per-call completion callback, invoked with the parsed body when the
/// server answers with a 2xx status.
pub type Callback = Box<dyn FnOnce(&Value) + Send>;
/// Yields the current user token. `None` omits the auth header entirely.
pub type TokenGetter = Box<dyn Fn() -> Option<String> + Send + Sync>;
/// Invoked with the parsed body when the server answers 401 Unauthorized.
pub type UnauthorizedHandler = Box<dyn Fn(&Value) + Send + Sync>;
/// Invoked with the full response envelope on any other non-2xx status.
pub type UnexpectedErrorHandler = Box<dyn Fn(&ApiResponse) + Send + Sync>;

/// Asynchronous REST API facade.
///
/// Wraps an [`HTTPClient`] and dispatches GET/POST/PUT/DELETE calls against
/// a configured host. Every call sends a JSON accept header plus, when the
/// installed token getter yields one, the configured auth-token header.
/// Response bodies are parsed as JSON and routed by status: 2xx invokes the
/// per-call callback, 401 invokes the unauthorized handler, anything else
/// invokes the unexpected-error handler.
///
/// The token getter and the unauthorized handler have to be installed
/// before the first call; a call made without them fails with
/// [`RequestError::NotConfigured`]. Configuration is set once and only read
/// afterwards, so an `Api` can be shared behind `Arc` across tasks.
pub struct Api {
    /// The HTTP client carrying the configured host.
    client: HTTPClient,
    /// Name of the header carrying the user token.
    auth_token_header: String,
    /// Supplies the token attached to every call.
    token_getter: Option<TokenGetter>,
    /// Hook for 401 responses.
    unauthorized_handler: Option<UnauthorizedHandler>,
    /// Hook for non-2xx, non-401 responses.
    unexpected_error_handler: UnexpectedErrorHandler,
}

impl Api {
    /// Constructs a new `Api` issuing requests against the given host.
    ///
    /// The instance is not usable until a token getter and an unauthorized
    /// handler are installed.
    pub fn new(base_url: &str) -> Api {
        Api {
            client: HTTPClient::new(base_url),
            auth_token_header: String::from(DEFAULT_AUTH_TOKEN_HEADER),
            token_getter: None,
            unauthorized_handler: None,
            unexpected_error_handler: Box::new(|response: &ApiResponse| {
                error!("unexpected API response status {}", response.status());
            }),
        }
    }

    /// Sets the host prefixed to the path of every call.
    pub fn set_api_host(&mut self, url: &str) -> &mut Api {
        self.client.set_url(url);
        self
    }

    /// Sets the header to be sent in every call. This header will contain
    /// the token.
    pub fn set_auth_token_header(&mut self, header: &str) -> &mut Api {
        self.auth_token_header = String::from(header);
        self
    }

    /// Installs the token getter supplying the credential for every call.
    pub fn set_user_token_getter(
        &mut self,
        getter: impl Fn() -> Option<String> + Send + Sync + 'static,
    ) -> &mut Api {
        self.token_getter = Some(Box::new(getter));
        self
    }

    /// Installs the hook invoked when a call comes back 401 Unauthorized.
    pub fn set_unauthorized_handler(
        &mut self,
        handler: impl Fn(&Value) + Send + Sync + 'static,
    ) -> &mut Api {
        self.unauthorized_handler = Some(Box::new(handler));
        self
    }

    /// Replaces the hook invoked on any other non-2xx response. The default
    /// logs the status at error level.
    pub fn set_unexpected_error_handler(
        &mut self,
        handler: impl Fn(&ApiResponse) + Send + Sync + 'static,
    ) -> &mut Api {
        self.unexpected_error_handler = Box::new(handler);
        self
    }

    /// Headers sent with every call: the JSON accept header plus, when the
    /// token getter yields one, the configured auth-token header.
    pub(crate) fn headers(&self) -> Result<HeaderMap, RequestError> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static(JSON_RESPONSE_TYPE));

        let getter = self
            .token_getter
            .as_ref()
            .ok_or(RequestError::NotConfigured("user token getter"))?;
        if let Some(token) = getter() {
            let name = HeaderName::from_bytes(self.auth_token_header.as_bytes())?;
            headers.insert(name, HeaderValue::from_str(&token)?);
        }
        Ok(headers)
    }

    /// Performs a GET request with the given query parameters attached to
    /// the path.
    pub async fn get(
        &self,
        path: &str,
        params: &[(&str, &str)],
        callback: Option<Callback>,
    ) -> Result<Value, HTTPError> {
        let path_with_params = attach_params(path, params);
        self.send_request(HTTPRequestMethod::Get, &path_with_params, RequestBody::None, callback)
            .await
    }

    /// Performs a POST request with the given payload.
    pub async fn post(
        &self,
        path: &str,
        payload: impl Into<RequestBody>,
        callback: Option<Callback>,
    ) -> Result<Value, HTTPError> {
        self.send_request(HTTPRequestMethod::Post, path, payload.into(), callback).await
    }

    /// Performs a PUT request with the given payload.
    pub async fn put(
        &self,
        path: &str,
        payload: impl Into<RequestBody>,
        callback: Option<Callback>,
    ) -> Result<Value, HTTPError> {
        self.send_request(HTTPRequestMethod::Put, path, payload.into(), callback).await
    }

    /// Performs a DELETE request with the given payload.
    pub async fn delete(
        &self,
        path: &str,
        payload: impl Into<RequestBody>,
        callback: Option<Callback>,
    ) -> Result<Value, HTTPError> {
        self.send_request(HTTPRequestMethod::Delete, path, payload.into(), callback).await
    }

    /// Dispatches a single request and runs the full response cycle: body
    /// parse, status branch, hook or callback.
    ///
    /// Returns the parsed body for every completed exchange, whether the
    /// status routed it to the callback or to a hook. `Err` is reserved for
    /// calls that never completed: missing configuration, transport
    /// failures, and bodies that are neither empty nor valid JSON.
    pub async fn send_request(
        &self,
        method: HTTPRequestMethod,
        path: &str,
        body: RequestBody,
        callback: Option<Callback>,
    ) -> Result<Value, HTTPError> {
        let headers = self.headers()?;
        let full_path = format!("{}{}", self.client.url(), path);
        debug!("{method} {full_path}");

        let mut request = self.client.client().request(method.into(), &full_path).headers(headers);
        request = match body {
            RequestBody::None => request,
            RequestBody::Json(json) => request.json(&json),
            RequestBody::Multipart(form) => request.multipart(form),
        };

        let response = request.send().await.map_err(ResponseError::from)?;
        let status = response.status();
        let text = response.text().await.map_err(ResponseError::from)?;
        let parsed = parse_body(&text)?;
        self.dispatch_result(ApiResponse::new(status, parsed), callback)
    }

    /// Runs the status branch on a completed exchange and yields the parsed
    /// body either way.
    fn dispatch_result(
        &self,
        response: ApiResponse,
        callback: Option<Callback>,
    ) -> Result<Value, HTTPError> {
        if response.ok() {
            if let Some(cb) = callback {
                cb(response.json());
            }
        } else if response.status() == StatusCode::UNAUTHORIZED {
            let handler = self
                .unauthorized_handler
                .as_ref()
                .ok_or(RequestError::NotConfigured("unauthorized handler"))?;
            handler(response.json());
        } else {
            (self.unexpected_error_handler)(&response);
        }
        Ok(response.into_json())
    }
}

/// Percent-encodes query pairs onto a path before dispatch. A path that
/// already carries a query gets the pairs appended with `&`.
pub(crate) fn attach_params(path: &str, params: &[(&str, &str)]) -> String {
    if params.is_empty() {
        return String::from(path);
    }
    let query: String =
        form_urlencoded::Serializer::new(String::new()).extend_pairs(params).finish();
    let separator = if path.contains('?') { '&' } else { '?' };
    format!("{path}{separator}{query}")
}
