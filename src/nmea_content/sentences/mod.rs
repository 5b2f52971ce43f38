// Resolved by textual scope, so it must stay above the `mod` declarations.
macro_rules! field_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $token:literal => $variant:ident
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant,
            )*
        }

        impl $name {
            /// Maps a field token onto its variant, `None` for any other token.
            pub fn from_field(field: &str) -> Option<Self> {
                match field {
                    $($token => Some(Self::$variant),)*
                    _ => None,
                }
            }
        }
    };
}

mod gga;
mod gll;
mod gsa;

pub use gga::{FixQuality, GGA};
pub use gll::{GLL, PositionMode};
pub use gsa::{FixMode, GSA, SelectionMode};

use crate::{
    Error,
    nmea_content::{Fields, SentenceType},
};

/// Value reported for an optional integer field that was left empty.
///
/// Decoded records keep such fields as `Option`; the `*_or_sentinel`
/// accessors expose them with this value in place of `None`.
pub const NOT_PROVIDED: i32 = -1;

/// A trait for sentence records that can be decoded from their fields.
///
/// The decoder reads every field in order from `fields`, starting with the
/// first field after the identifier, and builds the whole record before
/// returning it. The last field must be read with [`Fields::last_field`].
pub trait Parsable: Sized {
    /// Decodes a record from the tokenizer.
    ///
    /// # Returns
    ///
    /// The fully populated record, or the first field error encountered.
    ///
    /// # Example
    ///
    /// ```rust
    /// use nmea0183_decoder::nmea_content::{Fields, GLL, Parsable, PositionMode};
    ///
    /// let mut fields = Fields::new("3723.2475,N,12158.3416,W,161229.487,A,A*41");
    /// let gll = GLL::parser(&mut fields).unwrap();
    /// assert!(gll.valid);
    /// assert_eq!(gll.mode, PositionMode::Autonomous);
    /// ```
    fn parser<'a>(fields: &mut Fields<'a>) -> Result<Self, Error<&'a str>>;
}

/// A decoded sentence of any supported type.
///
/// | Variant      | Sentence Type                             |
/// |--------------|-------------------------------------------|
/// | GGA([`GGA`]) | Global Positioning System Fix Data        |
/// | GLL([`GLL`]) | Geographic Position - Latitude/Longitude  |
/// | GSA([`GSA`]) | GPS DOP and active satellites             |
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Message {
    /// Global Positioning System Fix Data
    GGA(GGA),
    /// Geographic Position - Latitude/Longitude
    GLL(GLL),
    /// GPS DOP and active satellites
    GSA(GSA),
}

impl Message {
    /// Decodes the fields following the identifier of a `sentence_type` sentence.
    ///
    /// Fails with [`Error::UnsupportedSentence`] for types without a decoder.
    pub fn parser(sentence_type: SentenceType, fields: &str) -> Result<Self, Error<&str>> {
        let mut fields = Fields::new(fields);

        match sentence_type {
            SentenceType::GGA => GGA::parser(&mut fields).map(Self::GGA),
            SentenceType::GLL => GLL::parser(&mut fields).map(Self::GLL),
            SentenceType::GSA => GSA::parser(&mut fields).map(Self::GSA),
            other => Err(Error::UnsupportedSentence(other)),
        }
    }

    pub fn sentence_type(&self) -> SentenceType {
        match self {
            Message::GGA(_) => SentenceType::GGA,
            Message::GLL(_) => SentenceType::GLL,
            Message::GSA(_) => SentenceType::GSA,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_message_parser() {
        let valid = [
            (SentenceType::GGA, "092725.00,4717.113,N,00833.915,E,1,08,1.0,499.7,M,48.0,M,,*00"),
            (SentenceType::GGA, "235959,0000.000,N,00000.000,W,0,00,99.9,0.0,M,0.0,M,,*00"),
            (SentenceType::GGA, "010203,1234.567,N,01234.567,E,2,05,2.0,20.0,M,5.0,M,3,0120*00"),
            (SentenceType::GLL, "4916.45,N,12311.12,W,225444,A,A*00"),
            (SentenceType::GLL, "0000.00,N,00000.00,E,000000,V,D*00"),
            (SentenceType::GLL, "9000.00,S,18000.00,W,235959,A,E*00"),
            (SentenceType::GSA, "A,3,01,02,03,04,05,06,07,08,09,10,11,12,1.5,1.0,2.0*00"),
            (SentenceType::GSA, "M,1,,,,,,,,,,,,,99.9,99.9,99.9*00"),
            (SentenceType::GSA, "A,2,10,20,30,,,,,,,,,,2.0,1.5,2.5*00"),
        ];

        for (sentence_type, fields) in valid {
            let result = Message::parser(sentence_type, fields);
            assert!(result.is_ok(), "Failed: {fields:?}\n\t{result:?}");
            assert_eq!(result.unwrap().sentence_type(), sentence_type);
        }

        let invalid = [
            (SentenceType::GGA, "123519,4807.038,N,01131.000,X,1,08,0.9,545.4,M,46.9,M,,*00"), // Invalid East/West indicator
            (SentenceType::GGA, "123519,4807.038,N,01131.000,E,1,A8,0.9,545.4,M,46.9,M,,*00"), // Non-numeric satellites
            (SentenceType::GGA, "123519,,,,,0,00,99.9,,M,,M,,*00"), // No fix, empty position
            (SentenceType::GGA, "123519,4807.038,N,01131.000,E,1,08,0.9,545.4,M,46.9,M*00"), // Missing trailing fields
            (SentenceType::GLL, "4916.45,N,12311.12,W,225444,A,X*00"), // Invalid mode indicator
            (SentenceType::GLL, "4916.45,N,12311.12,W,225444,A*00"),   // Missing mode indicator
            (SentenceType::GLL, "abc,N,12311.12,W,225444,A,A*00"),     // Non-numeric latitude
            (SentenceType::GLL, "4916.45,N,12311.12,W,25444,A,A*00"),  // Time too short
            (SentenceType::GSA, "A,3,01,02,03,04,05,06,07,08,09,10,11,12,A,1.0,2.0*00"), // Non-numeric PDOP
            (SentenceType::GSA, "A,3,01,02,03,04,05,06,07,08,09,10,11,12,1.5,1.0*00"),   // Missing VDOP
            (SentenceType::GSA, "A,3,01,02,03,04,05,06,07,08,09,10,11,12,1.5,1.0,2.0,1*00"), // Extra field
        ];

        for (sentence_type, fields) in invalid {
            let result = Message::parser(sentence_type, fields);
            assert!(result.is_err(), "Parsed invalid fields as valid: {fields:?}");
        }
    }

    #[test]
    fn test_placeholder_types() {
        for sentence_type in [
            SentenceType::GSV,
            SentenceType::MSS,
            SentenceType::RMC,
            SentenceType::VTG,
            SentenceType::None,
        ] {
            assert_eq!(
                Message::parser(sentence_type, "1,2,3*00"),
                Err(Error::UnsupportedSentence(sentence_type))
            );
        }
    }
}
