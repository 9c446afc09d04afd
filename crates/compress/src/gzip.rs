//! # Overview
//!
//! Gzip helpers used to prepare message bodies for the archive endpoint. Each
//! call produces one complete gzip member (header, deflate stream and CRC/size
//! trailer). The remote service appends members to its archives, so a decoder
//! reading an archive must accept several concatenated members;
//! [`decompress_to_vec`] does.
//!
//! # Examples
//!
//! ```
//! use compress::gzip::{compress, decompress_to_vec};
//!
//! let compressed = compress(b"payload\n").unwrap();
//! assert_eq!(decompress_to_vec(&compressed).unwrap(), b"payload\n");
//! ```

use std::io::{self, Read, Write};

use flate2::{read::MultiGzDecoder, write::GzEncoder};

use crate::level::CompressionLevel;

/// Failure while producing a gzip member, tagged with the stage that failed.
#[derive(Debug, thiserror::Error)]
pub enum GzipError {
    /// The encoder or its sink rejected input bytes.
    #[error("compressing body: {0}")]
    Write(#[source] io::Error),
    /// The encoder could not flush the final block and trailer.
    #[error("closing compressor: {0}")]
    Finish(#[source] io::Error),
}

impl GzipError {
    /// Returns the short name of the failing stage.
    #[must_use]
    pub const fn stage(&self) -> &'static str {
        match self {
            Self::Write(_) => "compressing body",
            Self::Finish(_) => "closing compressor",
        }
    }

    /// Returns the underlying I/O error.
    #[must_use]
    pub const fn io_error(&self) -> &io::Error {
        match self {
            Self::Write(error) | Self::Finish(error) => error,
        }
    }
}

/// Compresses `input` with [`CompressionLevel::Default`].
pub fn compress(input: &[u8]) -> Result<Vec<u8>, GzipError> {
    compress_to_vec(input, CompressionLevel::Default)
}

/// Compresses `input` into a new [`Vec`].
pub fn compress_to_vec(input: &[u8], level: CompressionLevel) -> Result<Vec<u8>, GzipError> {
    // Header, trailer and a little slack for incompressible input.
    compress_into(Vec::with_capacity(input.len() / 2 + 32), input, level)
}

/// Compresses `input` into `sink`, returning the sink once the member is finished.
///
/// The stream is always finalised before returning, so the sink never holds
/// a truncated member on success.
pub fn compress_into<W: Write>(
    sink: W,
    input: &[u8],
    level: CompressionLevel,
) -> Result<W, GzipError> {
    let mut encoder = GzEncoder::new(sink, level.into());
    encoder.write_all(input).map_err(GzipError::Write)?;
    encoder.finish().map_err(GzipError::Finish)
}

/// Decompresses one or more concatenated gzip members into a new [`Vec`].
pub fn decompress_to_vec(input: &[u8]) -> io::Result<Vec<u8>> {
    let mut decoder = MultiGzDecoder::new(input);
    let mut output = Vec::new();
    decoder.read_to_end(&mut output)?;
    Ok(output)
}
