//! # NMEA 0183 Framing
//!
//! Start delimiter, identifier and checksum handling for sentences of the form
//! `$<TalkerID><SentenceID>,D1,D2,...,Dn*CC`.
//!
//! Line endings are not handled here; the caller hands over a sentence that
//! has already been split from the stream with its CR/LF stripped.

use nom::{
    AsBytes, Finish, Input, Parser, bytes::complete::take_while_m_n, combinator::map_res,
    error::ErrorKind,
};

use crate::{ChecksumCase, Error, parsing::consumed};

/// Calculates the NMEA 0183 checksum for the given message content.
///
/// The NMEA 0183 checksum is calculated by performing an XOR (exclusive OR) operation
/// on all bytes in the message content. This includes everything between the '$' prefix
/// and the '*' checksum delimiter, but excludes both the '$' and '*' characters themselves.
///
/// # Returns
///
/// A tuple of (input, checksum) where:
/// - `input` is returned unchanged (zero-copy)
/// - `checksum` is the calculated XOR value as a u8
///
/// # Examples
///
/// ```rust
/// use nmea0183_decoder::checksum;
///
/// let (_, cc) = checksum("GPGLL,3723.2475,N,12158.3416,W,161229.487,A,A");
/// assert_eq!(cc, 0x41);
/// ```
pub fn checksum<I>(input: I) -> (I, u8)
where
    I: Input + AsBytes,
{
    let calculated_checksum = input
        .as_bytes()
        .iter()
        .fold(0u8, |accumulated_xor, &byte| accumulated_xor ^ byte);

    (input, calculated_checksum)
}

/// Formats a checksum value as a two-digit uppercase hexadecimal string.
///
/// # Examples
///
/// ```rust
/// use nmea0183_decoder::format_checksum;
///
/// assert_eq!(format_checksum(0x41), "41");
/// assert_eq!(format_checksum(0x0A), "0A");
/// ```
pub fn format_checksum(checksum: u8) -> String {
    format!("{checksum:02X}")
}

/// Parses the two hexadecimal digits following `*`.
///
/// The input must be exactly two digits accepted by `case`; a single digit,
/// a third character or a lowercase digit under [`ChecksumCase::Uppercase`]
/// all fail with [`Error::MalformedChecksum`].
pub fn checksum_digits(cc: &str, case: ChecksumCase) -> Result<u8, Error<&str>> {
    let digits = take_while_m_n(2, 2, move |c: char| case.accepts(c));

    consumed(
        map_res(digits, |hex: &str| u8::from_str_radix(hex, 16)),
        ErrorKind::Count,
    )
    .parse(cc)
    .finish()
    .map(|(_, value)| value)
    .map_err(|_: Error<&str>| Error::MalformedChecksum(cc))
}

/// Verifies the checksum of a complete sentence.
///
/// Every byte strictly between the leading `$` and the first `*` is XORed
/// and compared against the two digits following `*`.
///
/// A sentence without any `*` is reported as [`Error::Truncated`] rather than
/// as a checksum failure: it was cut short before its checksum field.
///
/// # Examples
///
/// ```rust
/// use nmea0183_decoder::{ChecksumCase, Error, verify_checksum};
///
/// let sentence = "$GPGSA,A,3,07,02,26,27,09,04,15,,,,,,1.8,1.0,1.5*33";
/// assert!(verify_checksum(sentence, ChecksumCase::Uppercase).is_ok());
///
/// let corrupted = "$GPGSA,A,3,07,02,26,27,09,04,15,,,,,,1.8,1.0,1.5*32";
/// assert_eq!(
///     verify_checksum(corrupted, ChecksumCase::Uppercase),
///     Err(Error::ChecksumMismatch { expected: 0x33, found: 0x32 })
/// );
/// ```
pub fn verify_checksum(sentence: &str, case: ChecksumCase) -> Result<(), Error<&str>> {
    let body = start_delimiter(sentence)?;
    let (data, cc) = body.split_once('*').ok_or(Error::Truncated)?;

    let found = checksum_digits(cc, case)?;
    let (_, expected) = checksum(data);

    if found != expected {
        return Err(Error::ChecksumMismatch { expected, found });
    }

    Ok(())
}

/// Strips the `$` start delimiter.
pub fn start_delimiter(sentence: &str) -> Result<&str, Error<&str>> {
    sentence.strip_prefix('$').ok_or(Error::InvalidStart)
}

/// Splits the text after `$` into the talker/sentence identifier and the
/// remaining fields.
///
/// The identifier ends at the first `,`. Without any comma the whole text is
/// taken as the identifier and no fields remain.
///
/// ```rust
/// use nmea0183_decoder::identifier;
///
/// assert_eq!(identifier("GPGLL,3723.2475,N*41"), ("GPGLL", "3723.2475,N*41"));
/// assert_eq!(identifier("GPGLL*41"), ("GPGLL*41", ""));
/// ```
pub fn identifier(body: &str) -> (&str, &str) {
    body.split_once(',').unwrap_or((body, ""))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_checksum() {
        let (data, cc) = checksum("GPGGA,002153.000,3342.6618,N,11751.3858,W,1,10,1.2,27.0,M,-34.2,M,20,0000");
        assert_eq!(cc, 0x5C);
        assert!(data.starts_with("GPGGA"));

        let (_, cc) = checksum("");
        assert_eq!(cc, 0);
    }

    #[test]
    fn test_checksum_digits() {
        let strict = ChecksumCase::Uppercase;
        assert_eq!(checksum_digits("5C", strict), Ok(0x5C));
        assert_eq!(checksum_digits("0A", strict), Ok(0x0A));
        for cc in ["5c", "5", "", "5C3", "zz", "5C\r\n"] {
            assert_eq!(checksum_digits(cc, strict), Err(Error::MalformedChecksum(cc)));
        }

        let lenient = ChecksumCase::AnyCase;
        assert_eq!(checksum_digits("5c", lenient), Ok(0x5C));
        assert_eq!(checksum_digits("5C", lenient), Ok(0x5C));
        assert_eq!(
            checksum_digits("5g", lenient),
            Err(Error::MalformedChecksum("5g"))
        );
    }

    #[test]
    fn test_verify_checksum_without_terminator() {
        let sentence = "$GPGGA,002153.000,3342.6618,N,11751.3858,W,1,10,1.2,27.0,M,-34.2,M,20,0000";
        assert_eq!(
            verify_checksum(sentence, ChecksumCase::Uppercase),
            Err(Error::Truncated)
        );
    }

    #[test]
    fn test_verify_checksum_requires_start() {
        assert_eq!(
            verify_checksum("GPGLL,A*00", ChecksumCase::Uppercase),
            Err(Error::InvalidStart)
        );
        assert_eq!(
            verify_checksum("", ChecksumCase::Uppercase),
            Err(Error::InvalidStart)
        );
    }

    #[test]
    fn test_verify_checksum_stops_at_first_terminator() {
        // Only "GPXXX,1" is summed, and everything after the first '*' is the checksum field.
        let (_, cc) = checksum("GPXXX,1");
        let sentence = format!("$GPXXX,1*{}*2", format_checksum(cc));
        assert_eq!(
            verify_checksum(&sentence, ChecksumCase::Uppercase),
            Err(Error::MalformedChecksum(&sentence[9..]))
        );
    }

    #[test]
    fn test_start_delimiter() {
        assert_eq!(start_delimiter("$GPGGA"), Ok("GPGGA"));
        assert_eq!(start_delimiter("!GPGGA"), Err(Error::InvalidStart));
        assert_eq!(start_delimiter(" $GPGGA"), Err(Error::InvalidStart));
    }
}
