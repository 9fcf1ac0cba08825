//! Client error types.

/// Errors from configuring the client or calling a WSDOT endpoint.
#[derive(Debug, thiserror::Error)]
pub enum WsdotError {
    /// The configuration was rejected at construction time
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(&'static str),

    /// A sub-client was built without a configured WSDOT client
    #[error("no WSDOT client configured")]
    MissingClient,

    /// The request URL could not be built
    #[error("failed to build request for {url}: {message}")]
    RequestConstruction { url: String, message: String },

    /// HTTP request failed (network error, timeout, etc.)
    #[error("HTTP error: {0}")]
    Transport(#[from] reqwest::Error),

    /// API answered with something other than 200 OK
    #[error("unexpected status code: {status}")]
    UnexpectedStatus { status: u16 },

    /// Response body did not match the expected JSON shape
    #[error("failed to decode {operation} response: {source}")]
    Decode {
        operation: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

impl WsdotError {
    /// The HTTP status code, if the API answered with an unexpected one.
    pub fn status(&self) -> Option<u16> {
        match self {
            WsdotError::UnexpectedStatus { status } => Some(*status),
            _ => None,
        }
    }
}
