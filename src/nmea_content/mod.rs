//! # NMEA Content
//!
//! Everything between the identifier and the checksum: the field tokenizer,
//! the field converters and the typed sentence records.

mod fields;
mod parse;
mod sentences;

pub use fields::Fields;
pub use parse::{clock_time, field, latitude, longitude, optional, required, time_of_day};
pub use sentences::*;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Kind of sentence, as classified from its identifier.
///
/// Only [`GGA`](SentenceType::GGA), [`GLL`](SentenceType::GLL) and
/// [`GSA`](SentenceType::GSA) have decoders. The other named types are known
/// identifiers that are rejected as unsupported, which is distinct from an
/// identifier that is not known at all ([`SentenceType::None`]).
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SentenceType {
    /// Global Positioning System Fix Data
    GGA,
    /// Geographic Position - Latitude/Longitude
    GLL,
    /// GPS DOP and active satellites
    GSA,
    /// GPS Satellites in view
    GSV,
    /// MSK Receiver Signal
    MSS,
    /// Recommended Minimum Specific GPS/Transit Data
    RMC,
    /// Track Made Good and Ground Speed
    VTG,
    /// Unknown or not yet classified
    #[default]
    None,
}

impl SentenceType {
    /// Returns `true` if sentences of this type can be decoded into a [`Message`].
    pub fn has_decoder(self) -> bool {
        matches!(self, SentenceType::GGA | SentenceType::GLL | SentenceType::GSA)
    }
}

/// Talker IDs accepted in front of a sentence ID.
const TALKERS: &[&str] = &["GP"];

/// Classifies a sentence identifier such as `GPGGA`.
///
/// The identifier must match a known talker followed by a known sentence ID
/// exactly; anything else yields `None`.
///
/// ```rust
/// use nmea0183_decoder::nmea_content::{SentenceType, classify};
///
/// assert_eq!(classify("GPGGA"), Some(SentenceType::GGA));
/// assert_eq!(classify("GPRMC"), Some(SentenceType::RMC));
/// assert_eq!(classify("GNGGA"), None);
/// assert_eq!(classify("GPGGAX"), None);
/// ```
pub fn classify(identifier: &str) -> Option<SentenceType> {
    let (talker, sentence_id) = identifier.split_at_checked(2)?;

    if !TALKERS.contains(&talker) {
        return None;
    }

    match sentence_id {
        "GGA" => Some(SentenceType::GGA),
        "GLL" => Some(SentenceType::GLL),
        "GSA" => Some(SentenceType::GSA),
        "GSV" => Some(SentenceType::GSV),
        "MSS" => Some(SentenceType::MSS),
        "RMC" => Some(SentenceType::RMC),
        "VTG" => Some(SentenceType::VTG),
        _ => None,
    }
}

/// A position in signed decimal degrees.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Location {
    /// Negative south of the equator
    pub latitude: f64,
    /// Negative west of Greenwich
    pub longitude: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify() {
        let cases = [
            ("GPGGA", Some(SentenceType::GGA)),
            ("GPGLL", Some(SentenceType::GLL)),
            ("GPGSA", Some(SentenceType::GSA)),
            ("GPGSV", Some(SentenceType::GSV)),
            ("GPMSS", Some(SentenceType::MSS)),
            ("GPRMC", Some(SentenceType::RMC)),
            ("GPVTG", Some(SentenceType::VTG)),
            ("GNGGA", None),
            ("gpgga", None),
            ("GPGG", None),
            ("GPGGAA", None),
            ("GPXYZ", None),
            ("G", None),
            ("", None),
            ("GÅGGA", None),
        ];

        for (identifier, expected) in cases {
            assert_eq!(classify(identifier), expected, "{identifier:?}");
        }
    }

    #[test]
    fn test_has_decoder() {
        assert!(SentenceType::GGA.has_decoder());
        assert!(SentenceType::GLL.has_decoder());
        assert!(SentenceType::GSA.has_decoder());

        for sentence_type in [
            SentenceType::GSV,
            SentenceType::MSS,
            SentenceType::RMC,
            SentenceType::VTG,
            SentenceType::None,
        ] {
            assert!(!sentence_type.has_decoder(), "{sentence_type:?}");
        }
    }
}
