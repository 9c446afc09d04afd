//! # Overview
//!
//! [`Client`] sends messages to the archive service through an injected
//! [`Transport`]. It owns nothing mutable after construction, so a single
//! client can be shared by reference (or behind an `Arc`) between threads
//! whenever its transport allows it.
//!
//! # Request flow
//!
//! - [`Client::post`] appends exactly one `\n` to the message, gzip-compresses
//!   the line and continues as [`Client::post_gzipped`].
//! - [`Client::post_gzipped`] builds the request with
//!   [`build_request`], executes it once and classifies the status with
//!   [`check_status`].
//!
//! The trailing newline keeps records separated when the service appends
//! compressed bodies to line-delimited archives.

use std::fmt;

use compress::CompressionLevel;
use compress::gzip::compress_to_vec;
use http::StatusCode;

use crate::config::ClientConfig;
use crate::error::ClientError;
use crate::request::build_request;
use crate::sink::DataSink;
use crate::stream::Stream;
use crate::trace::{trace_failure, trace_invalid_request, trace_request, trace_response};
use crate::transport::Transport;

/// Network-backed Data Sink client.
pub struct Client<T> {
    url: String,
    compression: CompressionLevel,
    transport: T,
}

impl<T: Transport> Client<T> {
    /// Creates a client for the service at `url`.
    ///
    /// Fails with [`ClientError::BlankUrl`] when `url` is empty. No I/O is
    /// performed; an unreachable or malformed URL surfaces on the first post.
    pub fn new(url: impl Into<String>, transport: T) -> Result<Self, ClientError> {
        Self::with_config(ClientConfig::new(url), transport)
    }

    /// Creates a client from a full [`ClientConfig`].
    pub fn with_config(config: ClientConfig, transport: T) -> Result<Self, ClientError> {
        if config.url.is_empty() {
            return Err(ClientError::BlankUrl);
        }
        Ok(Self {
            url: config.url,
            compression: config.compression,
            transport,
        })
    }

    /// Sends `message` to `stream` as one newline-terminated, gzip-compressed
    /// record.
    pub fn post(&self, stream: &Stream, message: &[u8]) -> Result<(), ClientError> {
        let mut line = Vec::with_capacity(message.len() + 1);
        line.extend_from_slice(message);
        line.push(b'\n');

        let body = compress_to_vec(&line, self.compression)?;
        self.send(stream, body)
    }

    /// Sends an already gzip-compressed `message` to `stream` unmodified.
    pub fn post_gzipped(&self, stream: &Stream, message: &[u8]) -> Result<(), ClientError> {
        self.send(stream, message.to_vec())
    }

    fn send(&self, stream: &Stream, body: Vec<u8>) -> Result<(), ClientError> {
        let body_len = body.len();
        let request = build_request(&self.url, stream, body).map_err(|error| {
            trace_invalid_request(stream, &error);
            ClientError::Request(error)
        })?;
        trace_request(stream, body_len);

        let response = self.transport.execute(request).map_err(|error| {
            trace_failure(stream, &error);
            ClientError::transport(error)
        })?;

        let status = response.status();
        trace_response(stream, status);
        check_status(status)
    }
}

impl<T> Client<T> {
    /// Returns the base URL of the archive service.
    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Returns the level used by [`Client::post`].
    #[must_use]
    pub const fn compression_level(&self) -> CompressionLevel {
        self.compression
    }

    /// Returns the injected transport.
    #[must_use]
    pub const fn transport(&self) -> &T {
        &self.transport
    }

    /// Consumes the client, returning its transport.
    pub fn into_transport(self) -> T {
        self.transport
    }
}

impl<T> fmt::Debug for Client<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Client")
            .field("url", &self.url)
            .field("compression", &self.compression)
            .finish_non_exhaustive()
    }
}

impl<T: Transport> DataSink for Client<T> {
    fn post(&mut self, stream: &Stream, message: &[u8]) -> Result<(), ClientError> {
        Client::post(self, stream, message)
    }

    fn post_gzipped(&mut self, stream: &Stream, message: &[u8]) -> Result<(), ClientError> {
        Client::post_gzipped(self, stream, message)
    }
}

impl<T: Transport> DataSink for &Client<T> {
    fn post(&mut self, stream: &Stream, message: &[u8]) -> Result<(), ClientError> {
        Client::post(*self, stream, message)
    }

    fn post_gzipped(&mut self, stream: &Stream, message: &[u8]) -> Result<(), ClientError> {
        Client::post_gzipped(*self, stream, message)
    }
}

/// Classifies a response status.
///
/// Every status below 400 (informational, success and redirection alike)
/// counts as accepted; anything from 400 upwards is
/// [`ClientError::Status`]. The response body is never consulted.
pub fn check_status(status: StatusCode) -> Result<(), ClientError> {
    if status.as_u16() >= 400 {
        Err(ClientError::Status(status))
    } else {
        Ok(())
    }
}
