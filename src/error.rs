use thiserror::Error;

/// Specific kinds of decoding errors that can occur when reading a binary
/// document.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeErrorKind {
    #[error("content length extends beyond available data: need {needed} bytes, have {available}")]
    InsufficientData { needed: usize, available: usize },

    #[error("invalid length field: {0}")]
    InvalidLength(i32),

    #[error("expected zero terminator, got {0:#04x}")]
    MalformedTerminator(u8),

    #[error("unsupported element tag: {0:#04x}")]
    UnsupportedTag(u8),

    #[error("element name is missing its zero terminator")]
    UnterminatedName,

    #[error("invalid UTF-8 in string")]
    InvalidUtf8,

    #[error("invalid array: element {index} is named {name:?}")]
    InvalidArray { index: usize, name: String },

    #[error("timestamp out of range: {0} ms since epoch")]
    InvalidTimestamp(i64),

    #[error("maximum nesting depth exceeded")]
    DepthLimitExceeded,

    #[error("extra data after document: {bytes_remaining} bytes remaining")]
    TrailingData { bytes_remaining: usize },
}

/// Error type returned when decoding binary document data fails.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("decode error: {kind}")]
pub struct DecodeError {
    /// The specific kind of decode error that occurred.
    kind: DecodeErrorKind,
}

impl DecodeError {
    /// Creates a new DecodeError with the given kind.
    pub const fn new(kind: DecodeErrorKind) -> Self {
        Self { kind }
    }

    /// Returns the specific kind of decode error that occurred.
    pub fn kind(&self) -> &DecodeErrorKind {
        &self.kind
    }
}

/// Result type for decoding operations.
pub type DecodeResult<T> = Result<T, DecodeError>;

/// Specific kinds of encoding errors that can occur when writing a document.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EncodeErrorKind {
    #[error("content length {0} exceeds maximum allowed (i32::MAX)")]
    ContentTooLarge(usize),
}

/// Error type returned when encoding a document fails.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("encode error: {kind}")]
pub struct EncodeError {
    /// The specific kind of encode error that occurred.
    kind: EncodeErrorKind,
}

impl EncodeError {
    /// Creates a new EncodeError with the given kind.
    pub fn new(kind: EncodeErrorKind) -> Self {
        Self { kind }
    }

    /// Returns the specific kind of encode error that occurred.
    pub fn kind(&self) -> &EncodeErrorKind {
        &self.kind
    }
}

/// Result type for encoding operations.
pub type EncodeResult<T> = Result<T, EncodeError>;
