use thiserror::Error;

/// Unified error type for the Protocol Builder client.
///
/// Expected failures (a 404 on lookup, a validation rejection on create) are
/// not represented here at all: the endpoint wrappers map those to `None` or
/// `false` by status code. This enum covers the failures a caller cannot
/// resolve by checking a sentinel.
#[derive(Debug, Error)]
pub enum Error {
    /// Network-level failure: connection refused, timeout, interrupted body read.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Client construction rejected the configuration (e.g. an unparsable base URL).
    #[error("configuration error: {message}")]
    Configuration { message: String },

    /// A request payload failed to encode as JSON.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The server answered, but with a body that is not the shape the endpoint
    /// promises. Typically an HTML error page where JSON was expected.
    #[error("unexpected response body (HTTP {status}): {message}")]
    UnexpectedBody { status: u16, message: String },
}

impl Error {
    pub(crate) fn configuration(message: impl Into<String>) -> Self {
        Error::Configuration {
            message: message.into(),
        }
    }

    pub(crate) fn unexpected_body(status: u16, message: impl Into<String>) -> Self {
        Error::UnexpectedBody {
            status,
            message: message.into(),
        }
    }
}
