//! # Decoder Configuration

/// Defines how the two checksum digits after `*` are matched.
///
/// NMEA 0183 specifies uppercase hexadecimal, but some receivers emit
/// lowercase digits.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum ChecksumCase {
    /// Only `0-9` and `A-F` are accepted; `*5c` is rejected even when `0x5C` is correct.
    #[default]
    Uppercase,

    /// Hexadecimal digits of either case are accepted.
    AnyCase,
}

impl ChecksumCase {
    pub(crate) fn accepts(self, c: char) -> bool {
        match self {
            ChecksumCase::Uppercase => matches!(c, '0'..='9' | 'A'..='F'),
            ChecksumCase::AnyCase => c.is_ascii_hexdigit(),
        }
    }
}

/// Options shared by [`Decoder`](crate::Decoder) and [`NmeaParser`](crate::NmeaParser).
///
/// ```rust
/// use nmea0183_decoder::{ChecksumCase, DecoderConfig, NmeaParser};
///
/// let config = DecoderConfig::default().checksum_case(ChecksumCase::AnyCase);
/// let parser = NmeaParser::with_config(config);
/// assert_eq!(parser.config().checksum_case, ChecksumCase::AnyCase);
/// ```
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct DecoderConfig {
    pub checksum_case: ChecksumCase,
}

impl DecoderConfig {
    pub fn checksum_case(mut self, checksum_case: ChecksumCase) -> Self {
        self.checksum_case = checksum_case;
        self
    }
}
