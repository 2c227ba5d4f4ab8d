//! Error types for the API client.

/// Errors that can occur when talking to the items resource.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// An HTTP request failed (network error, timeout, or unreadable response).
    #[error("Request failed")]
    RequestFailed,
    /// The server returned a non-success status with a body snippet.
    #[error("Request failed with status {status}")]
    HttpStatus { status: u16, body: String },
    /// The response body did not contain the expected items array.
    #[error("Malformed response body")]
    MalformedResponse,
}
