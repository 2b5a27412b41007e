use thiserror::Error;

/// Result type alias for fallible operations in this crate
pub type Result<T> = std::result::Result<T, Error>;

/// All errors that the crate can generate.
///
/// Classifying, wrapping, placing and decorating never fail; only loading fonts or
/// configuration and writing output can.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    /// An I/O error occurred
    Io(#[from] std::io::Error),

    #[error(transparent)]
    /// [owned_ttf_parser] failed to parse the font
    FaceParsingError(#[from] owned_ttf_parser::FaceParsingError),

    #[error("invalid layout configuration: {0}")]
    /// The layout configuration could not be deserialized
    Config(#[from] serde_json::Error),

    #[error("unknown page size: {0}")]
    /// A page size name didn't match any of the known paper formats
    UnknownPageSize(String),

    #[error("PDF object reference was used before it was generated")]
    /// Objects were written out of order while serializing a document
    MissingReference,

    #[error("font has no usable fallback glyph for unmapped characters")]
    /// An embedded font has neither a replacement glyph nor a question mark
    MissingFallbackGlyph,
}
