//! Request diagnostics emitted through `tracing` under the `datasink::client`
//! target. Every helper compiles to a no-op when the `tracing` feature is
//! disabled.

#[cfg(feature = "tracing")]
use tracing::{debug, warn};

use http::StatusCode;

use crate::stream::Stream;

/// Trace a request about to be handed to the transport.
///
/// # Arguments
///
/// * `stream` - Destination stream
/// * `body_len` - Size of the (compressed) body in bytes
#[cfg(feature = "tracing")]
#[inline]
pub fn trace_request(stream: &Stream, body_len: usize) {
    debug!(
        target: "datasink::client",
        operation = "post",
        stream = stream.id(),
        partition_key = stream.partition_key().unwrap_or_default(),
        body_len = body_len,
        "posting {} bytes to {}",
        body_len,
        stream
    );
}

/// Trace a request about to be handed to the transport - no-op when tracing is disabled.
#[cfg(not(feature = "tracing"))]
#[inline]
pub fn trace_request(_stream: &Stream, _body_len: usize) {}

/// Trace a post abandoned because its request could not be built.
#[cfg(feature = "tracing")]
#[inline]
pub fn trace_invalid_request(stream: &Stream, error: &(dyn std::error::Error + 'static)) {
    warn!(
        target: "datasink::client",
        operation = "build",
        stream = stream.id(),
        error = error,
        "cannot build request for {}",
        stream
    );
}

/// Trace a post abandoned before sending - no-op when tracing is disabled.
#[cfg(not(feature = "tracing"))]
#[inline]
pub fn trace_invalid_request(_stream: &Stream, _error: &(dyn std::error::Error + 'static)) {}

/// Trace the status returned by the service.
#[cfg(feature = "tracing")]
#[inline]
pub fn trace_response(stream: &Stream, status: StatusCode) {
    if status.as_u16() >= 400 {
        warn!(
            target: "datasink::client",
            operation = "response",
            stream = stream.id(),
            status = status.as_u16(),
            "{} rejected message with {}",
            stream,
            status
        );
    } else {
        debug!(
            target: "datasink::client",
            operation = "response",
            stream = stream.id(),
            status = status.as_u16(),
            "{} accepted message with {}",
            stream,
            status
        );
    }
}

/// Trace the status returned by the service - no-op when tracing is disabled.
#[cfg(not(feature = "tracing"))]
#[inline]
pub fn trace_response(_stream: &Stream, _status: StatusCode) {}

/// Trace a transport that failed to complete the round trip.
#[cfg(feature = "tracing")]
#[inline]
pub fn trace_failure(stream: &Stream, error: &(dyn std::error::Error + 'static)) {
    warn!(
        target: "datasink::client",
        operation = "transport",
        stream = stream.id(),
        error = error,
        "transport failed posting to {}",
        stream
    );
}

/// Trace a transport that failed - no-op when tracing is disabled.
#[cfg(not(feature = "tracing"))]
#[inline]
pub fn trace_failure(_stream: &Stream, _error: &(dyn std::error::Error + 'static)) {}
