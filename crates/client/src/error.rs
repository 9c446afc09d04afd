//! Error type returned by every client operation.

use std::error::Error;

use compress::GzipError;
use http::StatusCode;

use crate::request::RequestError;

/// Boxed transport failure, kept opaque so any transport can be injected.
pub type BoxError = Box<dyn Error + Send + Sync + 'static>;

/// Reasons a post to the archive service can fail.
///
/// Each variant identifies the stage that failed. The client reports
/// failures; it never retries or inspects the cause.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The client was configured with an empty base URL.
    #[error("datasink: blank URL")]
    BlankUrl,

    /// The message body could not be gzip-compressed.
    #[error("datasink: {0}")]
    Compression(#[from] GzipError),

    /// The request could not be assembled.
    #[error("datasink: creating request: {0}")]
    Request(#[from] RequestError),

    /// The transport failed to complete the round trip.
    #[error("datasink: making request: {0}")]
    Transport(#[source] BoxError),

    /// The service answered with a status code of 400 or above.
    #[error("datasink: returned non-OK response {}", .0.as_u16())]
    Status(StatusCode),
}

impl ClientError {
    /// Wraps a transport failure.
    pub fn transport(source: impl Into<BoxError>) -> Self {
        Self::Transport(source.into())
    }

    /// Returns the status code reported by the service, if that is why the
    /// call failed.
    #[must_use]
    pub const fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Status(status) => Some(*status),
            _ => None,
        }
    }

    /// Returns `true` when the service was reached and rejected the message.
    #[must_use]
    pub const fn is_remote(&self) -> bool {
        matches!(self, Self::Status(_))
    }
}
