//! Construction-time settings for [`Client`](crate::Client).

use compress::CompressionLevel;

/// Settings captured by a client at construction and never changed afterwards.
///
/// With the `serde` feature the config can be embedded in a caller's own
/// configuration file:
///
/// ```json
/// { "url": "https://sink.example.com", "compression": "best" }
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ClientConfig {
    /// Base URL of the archive service, without the `/archives` suffix.
    pub url: String,
    /// Level used by [`Client::post`](crate::Client::post) when compressing.
    #[cfg_attr(feature = "serde", serde(default))]
    pub compression: CompressionLevel,
}

impl ClientConfig {
    /// Creates a config for `url` using the default compression level.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            compression: CompressionLevel::default(),
        }
    }

    /// Sets the compression level.
    pub fn compression(mut self, level: CompressionLevel) -> Self {
        self.compression = level;
        self
    }
}
