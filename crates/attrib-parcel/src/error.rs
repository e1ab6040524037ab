//! Parcel error types

use attrib_domain::AttributionError;
use thiserror::Error;

/// Errors raised while decoding a parcel
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParcelError {
    /// Input ended before the value was complete
    #[error("unexpected end of parcel")]
    UnexpectedEof,

    /// A length or count was negative (other than the `-1` absent marker)
    #[error("invalid length {0}")]
    InvalidLength(i32),

    /// String data was not valid UTF-16
    #[error("string is not valid UTF-16")]
    InvalidUtf16,

    /// String data was not followed by a zero terminator
    #[error("string is missing its terminator")]
    MissingTerminator,

    /// A list held an absent element where one is required
    #[error("absent element in list")]
    NullElement,

    /// Bytes remained after the value was decoded
    #[error("{0} trailing bytes after value")]
    TrailingData(usize),

    /// The decoded fields did not form a valid attribution
    #[error("invalid attribution: {0}")]
    Attribution(#[from] AttributionError),
}
