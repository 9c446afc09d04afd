//! In-memory transports for exercising a [`Client`](crate::Client) without a
//! network. Available to this crate's tests and, through the `test-support`
//! feature, to downstream test suites.

use std::io;
use std::sync::{Mutex, MutexGuard, PoisonError};

use http::{HeaderMap, Method, Request, Response, StatusCode, Uri};

use crate::transport::Transport;

/// Snapshot of a request seen by [`RecordingTransport`].
#[derive(Clone, Debug)]
pub struct RecordedRequest {
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Vec<u8>,
}

impl RecordedRequest {
    fn capture(request: Request<Vec<u8>>) -> Self {
        let (parts, body) = request.into_parts();
        Self {
            method: parts.method,
            uri: parts.uri,
            headers: parts.headers,
            body,
        }
    }

    /// Request method.
    #[must_use]
    pub const fn method(&self) -> &Method {
        &self.method
    }

    /// Request target.
    #[must_use]
    pub const fn uri(&self) -> &Uri {
        &self.uri
    }

    /// Request headers.
    #[must_use]
    pub const fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// Request body exactly as handed to the transport.
    #[must_use]
    pub fn body(&self) -> &[u8] {
        &self.body
    }

    /// Decoded `(name, value)` query pairs, in order.
    #[must_use]
    pub fn query_pairs(&self) -> Vec<(String, String)> {
        self.uri
            .query()
            .map(|query| {
                url::form_urlencoded::parse(query.as_bytes())
                    .into_owned()
                    .collect()
            })
            .unwrap_or_default()
    }
}

/// Transport that records every request and answers with a fixed status.
#[derive(Debug)]
pub struct RecordingTransport {
    status: StatusCode,
    requests: Mutex<Vec<RecordedRequest>>,
}

impl RecordingTransport {
    /// Records requests and answers `200 OK`.
    #[must_use]
    pub fn new() -> Self {
        Self::with_status(StatusCode::OK)
    }

    /// Records requests and answers with `status`.
    #[must_use]
    pub fn with_status(status: StatusCode) -> Self {
        Self {
            status,
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Returns the requests seen so far, oldest first.
    #[must_use]
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.lock().clone()
    }

    /// Returns the most recent request, if any.
    #[must_use]
    pub fn last_request(&self) -> Option<RecordedRequest> {
        self.lock().last().cloned()
    }

    fn lock(&self) -> MutexGuard<'_, Vec<RecordedRequest>> {
        // A panicking test thread must not hide what was recorded.
        self.requests.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for RecordingTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl Transport for RecordingTransport {
    type Body = ();
    type Error = io::Error;

    fn execute(&self, request: Request<Vec<u8>>) -> Result<Response<()>, io::Error> {
        self.lock().push(RecordedRequest::capture(request));
        let mut response = Response::new(());
        *response.status_mut() = self.status;
        Ok(response)
    }
}

/// Transport whose every round trip fails with the configured message.
#[derive(Clone, Debug)]
pub struct FailingTransport {
    kind: io::ErrorKind,
    message: String,
}

impl FailingTransport {
    /// Fails every request with `message` and [`io::ErrorKind::ConnectionRefused`].
    pub fn new(message: impl Into<String>) -> Self {
        Self::with_kind(io::ErrorKind::ConnectionRefused, message)
    }

    /// Fails every request with an error of `kind`.
    pub fn with_kind(kind: io::ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl Transport for FailingTransport {
    type Body = ();
    type Error = io::Error;

    fn execute(&self, _request: Request<Vec<u8>>) -> Result<Response<()>, io::Error> {
        Err(io::Error::new(self.kind, self.message.clone()))
    }
}
