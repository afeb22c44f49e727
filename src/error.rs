//! # Error Types
//!
//! This module defines the error types returned while decoding NMEA sentences.

/// Holds the result of field-level parsing functions.
///
/// This is nom's own result type, re-exported so that custom field parsers
/// (see [`NmeaParse`](crate::NmeaParse)) can be written without naming nom directly.
pub type IResult<I, O, E = nom::error::Error<I>> = nom::IResult<I, O, E>;

/// Represents all possible errors that can occur while decoding an NMEA sentence.
///
/// Errors never borrow from the decoded input, so they can outlive the sentence
/// buffer they were produced from.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DecodeError {
    /// The sentence header is not recognized, or no decoder is implemented for it.
    ///
    /// Contains the header that caused the error (e.g. `$GPGLL`).
    #[error("sentence type `{header}` is not understood")]
    TypeNotUnderstood {
        /// The sentence header as found in the input
        header: String,
    },

    /// The sentence carries more fields than its type allows.
    ///
    /// Only reported when the decoder runs in
    /// [`FieldCountMode::Strict`](crate::FieldCountMode::Strict); otherwise
    /// trailing fields are ignored.
    #[error("sentence has {found} fields, at most {expected} expected")]
    TooManyFields {
        /// The maximum number of fields for the sentence type
        expected: usize,
        /// The number of fields found in the sentence
        found: usize,
    },

    /// The checksum of the sentence was corrupt or incorrect.
    ///
    /// Contains both the expected checksum (calculated from the message content)
    /// and the actual checksum found in the message.
    #[error("checksum mismatch: calculated {expected:02X}, found {found:02X}")]
    ChecksumInvalid {
        /// The checksum calculated from the message content
        expected: u8,
        /// The checksum found in the message
        found: u8,
    },

    /// The sentence structure is invalid.
    #[error("malformed sentence: {0}")]
    SentenceMalformed(Malformed),

    /// A field could not be converted to its expected type or value.
    #[error("field {index} is misformatted: `{value}`")]
    FieldMisformatted {
        /// Zero-based index of the field, counted after the sentence header
        index: usize,
        /// The raw text of the field
        value: String,
    },
}

/// The reason a sentence was rejected as [`DecodeError::SentenceMalformed`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Malformed {
    /// The input contains non-ASCII characters.
    #[error("input contains non-ASCII characters")]
    NonAscii,

    /// The sentence does not start with `$`.
    #[error("sentence does not start with `$`")]
    MissingStart,

    /// No `*` checksum delimiter was found while a checksum is required.
    #[error("missing `*` checksum delimiter")]
    MissingChecksum,

    /// The transmitted checksum is not exactly two hexadecimal digits.
    #[error("checksum is not two hexadecimal digits")]
    InvalidChecksum,

    /// The five-character address is not followed by a `,`.
    #[error("address is not followed by `,`")]
    MissingAddressSeparator,

    /// The `\r\n` line ending violates the configured
    /// [`LineEndingMode`](crate::LineEndingMode).
    #[error("line ending does not match the configured mode")]
    LineEnding,

    /// The sentence carries fewer fields than its type requires.
    #[error("sentence has {found} fields, at least {expected} expected")]
    TooFewFields {
        /// The minimum number of fields for the sentence type
        expected: usize,
        /// The number of fields found in the sentence
        found: usize,
    },

    /// A fixed-width field is shorter than its format.
    #[error("field {index} is truncated")]
    TruncatedField {
        /// Zero-based index of the field
        index: usize,
    },
}

impl From<Malformed> for DecodeError {
    fn from(reason: Malformed) -> Self {
        DecodeError::SentenceMalformed(reason)
    }
}
