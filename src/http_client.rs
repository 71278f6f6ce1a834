/// A simple wrapper around `reqwest::Client` used to manage HTTP requests
/// with a preconfigured base URL.
///
/// Every call made through [`crate::api::Api`] runs on this client, so the
/// underlying connection infrastructure is reused across requests. The base
/// URL is prepended to each endpoint path at dispatch time and can be
/// swapped while the client is alive.
#[derive(Debug)]
pub struct HTTPClient {
    /// The underlying `reqwest::Client` used to perform HTTP requests.
    client: reqwest::Client,
    /// Base URL for the API, prepended to all endpoint paths.
    base_url: String,
}

impl HTTPClient {
    /// Constructs a new `HTTPClient` with the given base URL.
    ///
    /// # Arguments
    /// * `base_url` – The root URL for all HTTP requests (e.g., `"http://localhost:8000/api"`).
    ///
    /// # Returns
    /// A configured `HTTPClient` instance.
    pub fn new(base_url: &str) -> HTTPClient {
        HTTPClient {
            client: reqwest::Client::new(),
            base_url: String::from(base_url),
        }
    }

    /// Returns a reference to the internal `reqwest::Client`.
    pub(crate) fn client(&self) -> &reqwest::Client { &self.client }
    /// Returns the base URL that requests are currently issued against.
    pub fn url(&self) -> &str { self.base_url.as_str() }
    /// Replaces the base URL for all subsequent requests.
    pub fn set_url(&mut self, base_url: &str) { self.base_url = String::from(base_url); }
}
