#![cfg_attr(docsrs, feature(doc_cfg))]
#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `client` submits messages to the Data Sink archive service. A message is
//! an opaque byte blob addressed to a [`Stream`] (an id plus an optional
//! partition key). [`Client`] turns each post into exactly one
//! `POST {base}/archives/{id}` request and hands it to a caller-supplied
//! [`Transport`]; [`MockClient`] records posts in memory for tests.
//!
//! # Design
//!
//! - [`request`] builds requests: escaping, query parameter and the fixed
//!   `Content-Encoding`/`Content-Type` headers.
//! - [`Client`] compresses (for [`Client::post`]), builds, executes once and
//!   maps any status `>= 400` to [`ClientError::Status`].
//! - [`Transport`] is the only seam to the network. Retries, timeouts, TLS and
//!   pooling are the transport's business.
//! - [`DataSink`] is the capability both clients implement, so code under test
//!   can take either.
//!
//! # Invariants
//!
//! - A client's base URL is non-empty and never changes.
//! - [`Client::post`] appends exactly one `\n` before compressing;
//!   [`Client::post_gzipped`] never touches its input.
//! - [`MockClient`] stores bytes exactly as received.
//!
//! # Examples
//!
//! ```
//! use client::{Client, DataSink, MockClient, Stream, transport_fn};
//! use http::Response;
//!
//! # fn main() -> Result<(), client::ClientError> {
//! let transport = transport_fn(|request: http::Request<Vec<u8>>| {
//!     assert_eq!(request.uri().path(), "/archives/orders");
//!     assert_eq!(request.uri().query(), Some("partition_key=eu"));
//!     Ok::<_, std::io::Error>(Response::new(()))
//! });
//! let client = Client::new("http://sink.example.com", transport)?;
//! client.post(&Stream::with_partition_key("orders", "eu"), b"{\"id\":7}")?;
//!
//! let mut mock = MockClient::new();
//! mock.post_gzipped(&Stream::new("orders"), b"already gzipped")?;
//! assert_eq!(mock.messages_for(&Stream::new("orders")).len(), 1);
//! # Ok(())
//! # }
//! ```

mod client;
mod config;
mod error;
mod mock;
pub mod request;
mod sink;
mod stream;
#[cfg(any(test, feature = "test-support"))]
#[cfg_attr(docsrs, doc(cfg(feature = "test-support")))]
pub mod test_support;
pub mod trace;
mod transport;

pub use crate::client::{Client, check_status};
pub use crate::config::ClientConfig;
pub use crate::error::{BoxError, ClientError};
pub use crate::mock::MockClient;
pub use crate::request::{RequestError, build_request};
pub use crate::sink::DataSink;
pub use crate::stream::{Message, Stream};
pub use crate::transport::{Transport, TransportFn, transport_fn};
pub use compress::CompressionLevel;
pub use http;
