//! # Error Types
//!
//! This module defines the error types produced while decoding a sentence and
//! the coarse [`DecodeOutcome`] taxonomy every error collapses into.

use nom::error::{ErrorKind, FromExternalError, ParseError};

use crate::nmea_content::SentenceType;

/// Holds the result of parsing functions.
///
/// It depends on the input type `I`, the output type `O`, and the error type `E`
/// (by default `nom::error::Error<I>`).
///
/// The `Ok` side is a pair containing the remainder of the input (the part of the data that
/// was not parsed) and the produced value. The `Err` side contains an instance of `nom::Err`.
pub type IResult<I, O, E = nom::error::Error<I>> = nom::IResult<I, O, Error<I, E>>;

/// Represents all possible errors that can occur while decoding an NMEA sentence.
///
/// Every variant maps onto exactly one [`DecodeOutcome`] through [`Error::outcome`].
#[derive(Debug, PartialEq, thiserror::Error)]
pub enum Error<I, E = nom::error::Error<I>> {
    /// The sentence does not begin with the `$` start delimiter.
    #[error("sentence does not start with '$'")]
    InvalidStart,

    /// The talker and sentence identifier is not in the classification table.
    #[error("unrecognized sentence identifier {0:?}")]
    UnrecognizedSentence(I),

    /// The identifier was classified, but no decoder exists for this sentence type.
    #[error("no decoder for {0:?} sentences")]
    UnsupportedSentence(SentenceType),

    /// The provided input contains non-ASCII characters.
    #[error("sentence contains non-ASCII characters")]
    NonAscii,

    /// The input ran out before the `*` terminator, or a field was read past the end of the sentence.
    #[error("sentence ended before its '*' terminator")]
    Truncated,

    /// The characters after `*` are not a two-digit hexadecimal checksum.
    #[error("malformed checksum {0:?}")]
    MalformedChecksum(I),

    /// The checksum of the sentence was corrupt or incorrect.
    ///
    /// Contains both the expected checksum (calculated from the message content)
    /// and the actual checksum found in the message.
    #[error("checksum mismatch: expected {expected:02X}, found {found:02X}")]
    ChecksumMismatch {
        /// The checksum calculated from the message content
        expected: u8,
        /// The checksum found in the message
        found: u8,
    },

    /// A nom combinator failed.
    #[error("parsing error: {0:?}")]
    ParsingError(E),

    /// A field in the sentence was malformed, truncated or missing.
    ///
    /// Contains the field text that caused the error.
    #[error("invalid field {0:?}")]
    InvalidField(I),
}

impl<I, E> Error<I, E> {
    /// Collapses this error into the outcome reported to callers of
    /// [`NmeaParser::process`](crate::NmeaParser::process).
    pub fn outcome(&self) -> DecodeOutcome {
        match self {
            Error::InvalidStart => DecodeOutcome::InvalidStart,
            Error::UnrecognizedSentence(_) | Error::UnsupportedSentence(_) => {
                DecodeOutcome::InvalidType
            }
            Error::MalformedChecksum(_) | Error::ChecksumMismatch { .. } => {
                DecodeOutcome::BadChecksum
            }
            Error::NonAscii
            | Error::Truncated
            | Error::ParsingError(_)
            | Error::InvalidField(_) => DecodeOutcome::InvalidFormat,
        }
    }
}

impl<I, E> ParseError<I> for Error<I, E>
where
    E: ParseError<I>,
{
    fn from_error_kind(input: I, kind: ErrorKind) -> Self {
        Error::ParsingError(E::from_error_kind(input, kind))
    }

    fn append(_: I, _: ErrorKind, other: Self) -> Self {
        other
    }
}

impl<I, E, EX> FromExternalError<I, EX> for Error<I, E>
where
    E: FromExternalError<I, EX>,
{
    fn from_external_error(input: I, kind: ErrorKind, e: EX) -> Self {
        Error::ParsingError(E::from_external_error(input, kind, e))
    }
}

/// Result tag returned for every processed sentence.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DecodeOutcome {
    /// The sentence was decoded and committed.
    Success,
    /// The trailing checksum does not match the sentence content.
    BadChecksum,
    /// The sentence does not begin with `$`.
    InvalidStart,
    /// The identifier is unknown or has no decoder.
    InvalidType,
    /// A field failed to parse, was truncated, or had a stray delimiter.
    InvalidFormat,
    /// Placeholder before any sentence has been processed. Never produced by decoding.
    #[default]
    Uninitialized,
}

/// A sentence that could not be decoded, together with the sentence type
/// detected before the failure.
///
/// `sentence_type` is [`SentenceType::None`] when the failure happened before
/// the identifier could be classified.
#[derive(Debug, PartialEq, thiserror::Error)]
#[error("{sentence_type:?} sentence rejected: {error}")]
pub struct Rejected<'a> {
    pub sentence_type: SentenceType,
    pub error: Error<&'a str>,
}

impl<'a> Rejected<'a> {
    pub(crate) fn new(sentence_type: SentenceType, error: Error<&'a str>) -> Self {
        Self {
            sentence_type,
            error,
        }
    }

    /// Shorthand for `self.error.outcome()`.
    pub fn outcome(&self) -> DecodeOutcome {
        self.error.outcome()
    }
}
