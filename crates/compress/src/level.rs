//! Compression levels accepted by the gzip encoder.

use core::fmt;
use core::str::FromStr;
use std::num::NonZeroU8;

use flate2::Compression;

/// Compression levels recognised by the gzip encoder.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "LevelRepr", into = "LevelRepr")
)]
pub enum CompressionLevel {
    /// Favour speed over compression ratio.
    Fast,
    /// Use the deflate default balance between speed and ratio.
    #[default]
    Default,
    /// Favour the best possible compression ratio.
    Best,
    /// Use an explicit deflate level in the range `1..=9`.
    Precise(NonZeroU8),
}

impl CompressionLevel {
    /// Creates a [`CompressionLevel::Precise`] value from an explicit numeric level.
    ///
    /// The supplied `level` must fall within the inclusive range `1..=9`;
    /// level `0` (stored blocks) is rejected.
    pub fn from_numeric(level: u32) -> Result<Self, CompressionLevelError> {
        u8::try_from(level)
            .ok()
            .filter(|value| (1..=9).contains(value))
            .and_then(NonZeroU8::new)
            .map(Self::Precise)
            .ok_or(CompressionLevelError::OutOfRange(level))
    }

    /// Returns the numeric deflate level this value resolves to.
    #[must_use]
    pub fn numeric(self) -> u32 {
        Compression::from(self).level()
    }
}

impl From<CompressionLevel> for Compression {
    fn from(level: CompressionLevel) -> Self {
        match level {
            CompressionLevel::Fast => Self::fast(),
            CompressionLevel::Default => Self::default(),
            CompressionLevel::Best => Self::best(),
            CompressionLevel::Precise(value) => Self::new(u32::from(value.get())),
        }
    }
}

impl fmt::Display for CompressionLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fast => f.write_str("fast"),
            Self::Default => f.write_str("default"),
            Self::Best => f.write_str("best"),
            Self::Precise(value) => write!(f, "{value}"),
        }
    }
}

impl FromStr for CompressionLevel {
    type Err = CompressionLevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        match trimmed.to_ascii_lowercase().as_str() {
            "fast" => Ok(Self::Fast),
            "default" => Ok(Self::Default),
            "best" => Ok(Self::Best),
            other => other
                .parse::<u32>()
                .map_err(|_| CompressionLevelError::Unrecognised(trimmed.to_owned()))
                .and_then(Self::from_numeric),
        }
    }
}

/// Error returned when a compression level cannot be interpreted.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum CompressionLevelError {
    /// Numeric level outside `1..=9`.
    #[error("compression level {0} is outside the supported range 1-9")]
    OutOfRange(u32),
    /// Neither a level name nor a number.
    #[error("unrecognised compression level `{0}`")]
    Unrecognised(String),
}

#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(untagged)]
enum LevelRepr {
    Numeric(u32),
    Named(String),
}

#[cfg(feature = "serde")]
impl TryFrom<LevelRepr> for CompressionLevel {
    type Error = CompressionLevelError;

    fn try_from(repr: LevelRepr) -> Result<Self, Self::Error> {
        match repr {
            LevelRepr::Numeric(level) => Self::from_numeric(level),
            LevelRepr::Named(name) => name.parse(),
        }
    }
}

#[cfg(feature = "serde")]
impl From<CompressionLevel> for LevelRepr {
    fn from(level: CompressionLevel) -> Self {
        match level {
            CompressionLevel::Precise(value) => Self::Numeric(u32::from(value.get())),
            named => Self::Named(named.to_string()),
        }
    }
}
