use thiserror::Error;

/// Errors produced by calls to the hosted backend.
///
/// Every backend operation returns one of these instead of passing an
/// untyped error object through to the view layer. The backend-supplied
/// message is preserved verbatim so inline alerts can display it.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ApiError {
    /// The request never completed (network failure, DNS, CORS).
    #[error("Failed to reach the backend: {0}")]
    Network(String),
    /// The backend answered with a non-success status.
    #[error("{message}")]
    Status { status: u16, message: String },
    /// The response body could not be decoded into the expected shape.
    #[error("Failed to decode backend response: {0}")]
    Decode(String),
}
