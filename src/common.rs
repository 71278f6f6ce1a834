use crate::request_common::RequestError;
use crate::response_common::ResponseError;
use strum_macros::Display;

/// Top-level error for API calls, uniting failures from the request phase
/// (configuration, header assembly) and the response phase (transport,
/// body parsing) of an exchange.
#[derive(Debug, Display)]
pub enum HTTPError {
    HTTPRequestError(RequestError),
    HTTPResponseError(ResponseError),
}

impl std::error::Error for HTTPError {}

impl From<RequestError> for HTTPError {
    fn from(value: RequestError) -> Self { HTTPError::HTTPRequestError(value) }
}

impl From<ResponseError> for HTTPError {
    fn from(value: ResponseError) -> Self { HTTPError::HTTPResponseError(value) }
}
