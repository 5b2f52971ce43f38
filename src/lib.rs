//! # NMEA 0183 Decoder
//!
//! This library decodes GPS NMEA 0183 sentences of the form
//! `$<TalkerID><SentenceID>,D1,D2,...,Dn*CC` into typed records.
//!
//! Supported sentences:
//! - `GPGGA` Global Positioning System Fix Data
//! - `GPGLL` Geographic Position - Latitude/Longitude
//! - `GPGSA` GPS DOP and active satellites
//!
//! `GPGSV`, `GPMSS`, `GPRMC` and `GPVTG` are recognized but rejected as
//! unsupported.
//!
//! Every sentence gets a [`DecodeOutcome`] paired with the detected
//! [`SentenceType`]. Successfully decoded records are kept per type by
//! [`NmeaParser`]; use [`Decoder`] directly to get the record by value
//! without any state.
//!
//! ## Usage
//!
//! ```rust
//! use nmea0183_decoder::{DecodeOutcome, NmeaParser, SentenceType};
//!
//! let mut parser = NmeaParser::new();
//!
//! let result = parser.process(
//!     "$GPGGA,002153.000,3342.6618,N,11751.3858,W,1,10,1.2,27.0,M,-34.2,M,20,0000*5C",
//! );
//! assert_eq!(result, (DecodeOutcome::Success, SentenceType::GGA));
//!
//! let gga = &parser.gga().unwrap().payload;
//! assert_eq!(gga.satellites_used, 10);
//! assert!((gga.latitude - 33.71103).abs() < 1e-6);
//!
//! let result = parser.process("GPGGA,002153.000*5C");
//! assert_eq!(result, (DecodeOutcome::InvalidStart, SentenceType::None));
//! ```

pub mod config;
mod decoder;
pub mod error;
mod nmea0183;
pub mod nmea_content;
pub mod parsing;
mod store;

pub use config::{ChecksumCase, DecoderConfig};
pub use decoder::{Decoder, NmeaParser};
pub use error::{DecodeOutcome, Error, IResult, Rejected};
pub use nmea0183::*;
pub use nmea_content::{Location, Message, NOT_PROVIDED, SentenceType};
pub use store::{Captured, MessageStore};

#[cfg(doctest)]
#[doc = include_str!("../README.md")]
struct README;
