//! Error types for lyrsync-core organized by processing stage.

use thiserror::Error;

/// Core error variants organized by processing stage.
#[derive(Debug, Error)]
pub enum Error {
    /// Subtitle parsing stage error
    #[error(transparent)]
    Subtitle(#[from] SubtitleError),

    /// Audio probing stage error
    #[error(transparent)]
    Audio(#[from] AudioError),
}

/// Subtitle parsing errors.
///
/// Produced by [`crate::srt::decode`]; the encoder has no failure modes.
/// Wrong-state recorder transitions are deliberate no-ops, not errors.
#[derive(Debug, Error)]
pub enum SubtitleError {
    /// Cue index line is not a number
    #[error("invalid cue index in block {block}: {value:?}")]
    InvalidIndex { block: usize, value: String },

    /// Block has no `start --> end` timing line
    #[error("missing timing line in block {block}")]
    MissingTiming { block: usize },

    /// Timing line does not split into start and end
    #[error("invalid timing line in block {block}: {value:?}")]
    InvalidTiming { block: usize, value: String },

    /// Timestamp does not match `HH:MM:SS,mmm`
    #[error("invalid timestamp: {value:?}")]
    InvalidTimestamp { value: String },
}

/// Audio probing errors.
#[derive(Debug, Error)]
pub enum AudioError {
    /// IO error while opening the audio file
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// WAV file format error
    #[error(transparent)]
    Wav(#[from] hound::Error),
}

/// Result type alias for lyrsync-core operations.
pub type Result<T> = std::result::Result<T, Error>;

// Nested From implementations for automatic error conversion chains

// hound::Error → AudioError → Error
impl From<hound::Error> for Error {
    fn from(e: hound::Error) -> Self {
        Error::Audio(AudioError::Wav(e))
    }
}

// std::io::Error → AudioError → Error
impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Error::Audio(AudioError::Io(e))
    }
}
