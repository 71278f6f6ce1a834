#![warn(clippy::shadow_reuse, clippy::shadow_same, clippy::builtin_type_shadow)]

pub use reqwest;
pub use serde;
pub use serde_json;

pub mod api;
pub mod common;
pub mod http_client;
pub mod request_common;
pub mod response_common;

pub use api::{Api, Callback};
pub use common::HTTPError;
pub use http_client::HTTPClient;
pub use request_common::{HTTPRequestMethod, RequestBody, RequestError};
pub use response_common::{ApiResponse, ResponseError};
