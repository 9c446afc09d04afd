#![cfg_attr(docsrs, feature(doc_cfg))]
#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `datasink` is the public face of the Data Sink client workspace. It
//! re-exports the request/response pipeline from the `client` crate and the
//! gzip helpers from the `compress` crate so applications depend on a single
//! package.
//!
//! # Features
//!
//! - `tracing` (default): debug/warn events for every post under the
//!   `datasink::client` target.
//! - `serde`: `Serialize`/`Deserialize` for [`ClientConfig`] and
//!   [`CompressionLevel`].
//! - `test-support`: in-memory transports under `test_support`.
//!
//! # Examples
//!
//! ```
//! use datasink::{Client, Stream, transport_fn};
//!
//! # fn main() -> Result<(), datasink::ClientError> {
//! let transport = transport_fn(|_request| {
//!     Ok::<_, std::io::Error>(datasink::http::Response::new(()))
//! });
//! let client = Client::new("https://sink.example.com", transport)?;
//! client.post(&Stream::new("orders"), b"{\"id\":1}")?;
//! # Ok(())
//! # }
//! ```

pub use client::{
    BoxError, Client, ClientConfig, ClientError, DataSink, Message, MockClient, RequestError,
    Stream, Transport, TransportFn, build_request, check_status, http, request, trace,
    transport_fn,
};
pub use compress::{CompressionLevel, CompressionLevelError, GzipError, gzip};

#[cfg(feature = "test-support")]
#[cfg_attr(docsrs, doc(cfg(feature = "test-support")))]
pub use client::test_support;
