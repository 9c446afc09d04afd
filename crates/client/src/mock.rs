//! Recording stand-in for [`Client`](crate::Client).

use std::collections::HashMap;

use crate::error::ClientError;
use crate::sink::DataSink;
use crate::stream::{Message, Stream};

/// A [`DataSink`] that keeps every message in memory instead of sending it.
///
/// Messages are stored exactly as they were passed in, grouped by stream in
/// call order: [`DataSink::post`] does not add a newline or compress, and
/// [`DataSink::post_gzipped`] does not decompress. Posting never fails.
///
/// Mutation goes through `&mut self`; share a mock between threads by
/// wrapping it in a `Mutex`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MockClient {
    messages: HashMap<Stream, Vec<Message>>,
}

impl MockClient {
    /// Creates a mock with no recorded messages.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// All recorded messages keyed by stream.
    #[must_use]
    pub const fn messages(&self) -> &HashMap<Stream, Vec<Message>> {
        &self.messages
    }

    /// Messages recorded for `stream`, oldest first. Empty when the stream
    /// never received anything.
    #[must_use]
    pub fn messages_for(&self, stream: &Stream) -> &[Message] {
        self.messages.get(stream).map(Vec::as_slice).unwrap_or_default()
    }

    /// Returns `true` when nothing has been posted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Forgets everything recorded so far.
    pub fn clear(&mut self) {
        self.messages.clear();
    }

    /// Consumes the mock, returning the recorded messages.
    #[must_use]
    pub fn into_messages(self) -> HashMap<Stream, Vec<Message>> {
        self.messages
    }
}

impl DataSink for MockClient {
    fn post(&mut self, stream: &Stream, message: &[u8]) -> Result<(), ClientError> {
        self.messages
            .entry(stream.clone())
            .or_default()
            .push(message.to_vec());
        Ok(())
    }

    fn post_gzipped(&mut self, stream: &Stream, message: &[u8]) -> Result<(), ClientError> {
        self.post(stream, message)
    }
}
