//! The capability shared by the network client and the mock.

use crate::error::ClientError;
use crate::stream::Stream;

/// Anything that accepts messages for Data Sink streams.
///
/// Implemented by [`Client`](crate::Client), which sends them to the archive
/// service, and by [`MockClient`](crate::MockClient), which records them.
/// Code that only needs to post messages should depend on this trait so tests
/// can substitute the mock.
///
/// ```
/// use client::{DataSink, MockClient, Stream};
///
/// fn publish(sink: &mut dyn DataSink, order: &[u8]) -> Result<(), client::ClientError> {
///     sink.post(&Stream::new("orders"), order)
/// }
///
/// let mut mock = MockClient::new();
/// publish(&mut mock, b"{\"id\":1}").unwrap();
/// assert_eq!(mock.messages_for(&Stream::new("orders")), [b"{\"id\":1}".to_vec()]);
/// ```
pub trait DataSink {
    /// Accepts an uncompressed message for `stream`.
    ///
    /// How it is framed is up to the implementation: [`Client`](crate::Client)
    /// sends it as a gzip-compressed line, the mock keeps it as given.
    fn post(&mut self, stream: &Stream, message: &[u8]) -> Result<(), ClientError>;

    /// Accepts a message that is already gzip-compressed. Implementations pass
    /// it on byte for byte.
    fn post_gzipped(&mut self, stream: &Stream, message: &[u8]) -> Result<(), ClientError>;
}

impl<S: DataSink + ?Sized> DataSink for Box<S> {
    fn post(&mut self, stream: &Stream, message: &[u8]) -> Result<(), ClientError> {
        (**self).post(stream, message)
    }

    fn post_gzipped(&mut self, stream: &Stream, message: &[u8]) -> Result<(), ClientError> {
        (**self).post_gzipped(stream, message)
    }
}
