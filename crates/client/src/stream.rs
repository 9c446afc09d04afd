//! Destinations and payloads accepted by the archive service.

use std::fmt;

/// Payload posted to a [`Stream`]. The client never interprets its contents.
pub type Message = Vec<u8>;

/// Describes the Data Sink stream a [`Message`] is sent to.
///
/// A stream is an immutable value: the identifier becomes the final path
/// segment of the archive URL and the optional partition key is sent as the
/// `partition_key` query parameter. Equality and hashing are structural, so
/// two streams built from the same parts are interchangeable map keys.
///
/// There is no default stream; every stream is built with an id:
///
/// ```compile_fail
/// let stream = client::Stream::default();
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Stream {
    id: String,
    partition_key: Option<String>,
}

impl Stream {
    /// Creates an unpartitioned stream.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            partition_key: None,
        }
    }

    /// Creates a stream whose messages carry `partition_key`.
    ///
    /// An empty key is treated as no key at all, matching the wire format
    /// where an empty key is simply omitted.
    pub fn with_partition_key(id: impl Into<String>, partition_key: impl Into<String>) -> Self {
        let partition_key = partition_key.into();
        Self {
            id: id.into(),
            partition_key: (!partition_key.is_empty()).then_some(partition_key),
        }
    }

    /// Returns the stream identifier.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns the partition key, if any.
    #[must_use]
    pub fn partition_key(&self) -> Option<&str> {
        self.partition_key.as_deref()
    }
}

impl fmt::Display for Stream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.partition_key {
            Some(key) => write!(f, "{}[{key}]", self.id),
            None => f.write_str(&self.id),
        }
    }
}
