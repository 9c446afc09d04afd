//! # Overview
//!
//! Builds the HTTP requests understood by the archive endpoint:
//!
//! ```text
//! POST {base}/archives/{path-escaped stream id}[?partition_key={form-escaped key}]
//! Content-Encoding: application/gzip
//! Content-Type: application/octet-stream
//! ```
//!
//! The body is attached verbatim. Callers that use
//! [`Client::post_gzipped`](crate::Client::post_gzipped) are responsible for
//! pre-compressing it; the `Content-Encoding` header is asserted regardless.
//!
//! # Escaping
//!
//! The stream id is encoded as a single path segment. Only ASCII letters,
//! digits and `- _ . ~ $ & + : = @` are left as-is; everything else,
//! including `/`, `;`, `[`, `]`, `|` and non-ASCII bytes, is percent-encoded.
//! The partition key uses `application/x-www-form-urlencoded` rules (space
//! becomes `+`, `&` and `=` are escaped), which is what the service decodes
//! query values with.

use http::header::{CONTENT_ENCODING, CONTENT_TYPE};
use http::{Method, Request};
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use url::Url;

use crate::stream::Stream;

/// Bytes escaped in a stream id path segment.
const STREAM_ID_ESCAPE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~')
    .remove(b'$')
    .remove(b'&')
    .remove(b'+')
    .remove(b':')
    .remove(b'=')
    .remove(b'@');

/// Path segment under which every stream's archive lives.
pub const ARCHIVES_SEGMENT: &str = "archives";

/// Query parameter carrying the stream's partition key.
pub const PARTITION_KEY_PARAM: &str = "partition_key";

/// `Content-Encoding` value sent with every request.
pub const GZIP_CONTENT_ENCODING: &str = "application/gzip";

/// `Content-Type` value sent with every request.
pub const OCTET_STREAM_CONTENT_TYPE: &str = "application/octet-stream";

/// Failure while turning a base URL, stream and body into a request.
#[derive(Debug, thiserror::Error)]
pub enum RequestError {
    /// The base URL could not be parsed.
    #[error("invalid base URL `{url}`: {source}")]
    InvalidBaseUrl {
        /// The rejected base URL.
        url: String,
        /// Parser diagnostic.
        #[source]
        source: url::ParseError,
    },
    /// The base URL has no hierarchical path to append to (e.g. `mailto:`).
    #[error("base URL `{0}` cannot carry an archive path")]
    CannotBeABase(String),
    /// The stream id cannot be expressed as a single path segment.
    #[error("stream id `{0}` is not a valid path segment")]
    InvalidStreamId(String),
    /// The `http` crate rejected the assembled request.
    #[error("{0}")]
    Http(#[from] http::Error),
}

/// Returns the archive URL for `stream` below `base_url`.
///
/// A trailing `/` on the base URL does not introduce an empty segment, and
/// any fragment on the base URL is dropped.
pub fn target_url(base_url: &str, stream: &Stream) -> Result<Url, RequestError> {
    let id = stream.id();
    // Empty, `.` and `..` segments would be collapsed away by URL normalisation.
    if matches!(id, "" | "." | "..") {
        return Err(RequestError::InvalidStreamId(id.to_owned()));
    }

    let mut url = Url::parse(base_url).map_err(|source| RequestError::InvalidBaseUrl {
        url: base_url.to_owned(),
        source,
    })?;
    if url.cannot_be_a_base() {
        return Err(RequestError::CannotBeABase(base_url.to_owned()));
    }
    url.set_fragment(None);

    let base_path = url.path();
    let base_path = base_path.strip_suffix('/').unwrap_or(base_path);
    let path = format!(
        "{base_path}/{ARCHIVES_SEGMENT}/{}",
        utf8_percent_encode(id, STREAM_ID_ESCAPE)
    );
    url.set_path(&path);

    if let Some(key) = stream.partition_key() {
        url.query_pairs_mut().append_pair(PARTITION_KEY_PARAM, key);
    }

    Ok(url)
}

/// Builds the `POST` request delivering `body` to `stream`.
pub fn build_request(
    base_url: &str,
    stream: &Stream,
    body: Vec<u8>,
) -> Result<Request<Vec<u8>>, RequestError> {
    let target = target_url(base_url, stream)?;

    let request = Request::builder()
        .method(Method::POST)
        .uri(target.as_str())
        .header(CONTENT_ENCODING, GZIP_CONTENT_ENCODING)
        .header(CONTENT_TYPE, OCTET_STREAM_CONTENT_TYPE)
        .body(body)?;

    Ok(request)
}
