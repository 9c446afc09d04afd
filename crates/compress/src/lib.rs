#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `compress` exposes the gzip primitives used by the Data Sink client. Every
//! message body posted through `client::Client::post` is newline-terminated
//! and compressed here into a single, fully finalised gzip member before it
//! reaches the transport.
//!
//! # Design
//!
//! The crate provides the [`gzip`] module, built on top of
//! [`flate2`](https://docs.rs/flate2), and the [`level`] module describing
//! the deflate levels accepted by the encoder. Output determinism is not part
//! of the contract; only the round trip is.
//!
//! # Invariants
//!
//! - [`gzip::compress_to_vec`] never returns a partial member: the encoder is
//!   finished (final block plus CRC/size trailer) before the buffer is handed
//!   back.
//! - Failures are tagged with the stage that produced them
//!   ([`gzip::GzipError::Write`] or [`gzip::GzipError::Finish`]).
//!
//! # Examples
//!
//! ```
//! use compress::{CompressionLevel, gzip::{compress_to_vec, decompress_to_vec}};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let data = b"archive record\n";
//! let compressed = compress_to_vec(data, CompressionLevel::Best)?;
//! assert_eq!(decompress_to_vec(&compressed)?, data);
//! # Ok(())
//! # }
//! ```

pub mod gzip;
pub mod level;

pub use gzip::GzipError;
pub use level::{CompressionLevel, CompressionLevelError};
