use thiserror::Error;

#[derive(Error, Debug)]
pub enum PlaneStegoError {
    /// Represents an unsupported carrier media. For example, an audio file or an unknown extension
    #[error("Media format is not supported")]
    UnsupportedMedia,

    /// Represents an invalid carrier image media. For example, a broken PNG file
    #[error("Image media is invalid")]
    InvalidImageMedia,

    /// Represents a pixel buffer that does not match its declared shape,
    /// or that carries fewer than 3 color channels
    #[error("Invalid frame layout: {height}x{width} with {channels} channels over {len} bytes")]
    InvalidFrameLayout {
        height: usize,
        width: usize,
        channels: usize,
        len: usize,
    },

    /// Represents a channel index outside of blue (0), green (1) and red (2)
    #[error("Invalid color channel {0}, expected 0 (blue), 1 (green) or 2 (red)")]
    InvalidChannel(u8),

    /// Represents unveiled bytes that are not valid UTF-8 text
    #[error("Invalid text data found at byte offset {offset}")]
    EncodingError { offset: usize },

    /// Represents a frame whose dimensions differ from the first frame of its stream
    #[error(
        "Frame dimensions {}x{} do not match the stream dimensions {}x{}",
        .actual.0, .actual.1, .expected.0, .expected.1
    )]
    DimensionMismatch {
        expected: (usize, usize),
        actual: (usize, usize),
    },

    /// Represents a frame sequence that did not yield a single readable frame
    #[error("No readable frames found")]
    NoFrames,

    /// Represents a target directory that already holds frames of an earlier run
    #[error("Target directory {0:?} already contains frames")]
    TargetNotEmpty(std::path::PathBuf),

    /// Represents a failure to read from input.
    #[error("Read error")]
    ReadError { source: std::io::Error },

    /// Represents a failure to write target file.
    #[error("Write error")]
    WriteError { source: std::io::Error },

    /// Represents a failure when encoding an image file.
    #[error("Image encoding error")]
    ImageEncodingError,

    /// Represents all other cases of `std::io::Error`.
    #[error(transparent)]
    IoError(#[from] std::io::Error),

    #[error("No carrier media set")]
    CarrierNotSet,

    #[error("No target file set")]
    TargetNotSet,

    #[error("API Error: Missing message")]
    MissingMessage,
}
