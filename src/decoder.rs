//! # Sentence Dispatch
//!
//! [`Decoder`] runs one sentence through the framing checks and the matching
//! sentence decoder. [`NmeaParser`] adds capture timestamps and keeps the
//! latest record of each type in a [`MessageStore`].

use log::{debug, trace};
use time::OffsetDateTime;

use crate::{
    DecodeOutcome, DecoderConfig, Error, Rejected, identifier,
    nmea_content::{GGA, GLL, GSA, Message, SentenceType, classify},
    start_delimiter,
    store::{Captured, MessageStore},
    verify_checksum,
};

/// Stateless sentence decoder.
///
/// Checks run in a fixed order and the first failure wins:
///
/// 1. the sentence starts with `$`
/// 2. the identifier is a known talker and sentence ID
/// 3. the sentence type has a decoder
/// 4. the checksum matches
/// 5. the sentence is ASCII and every field converts
///
/// # Examples
///
/// ```rust
/// use nmea0183_decoder::{DecodeOutcome, Decoder, SentenceType};
///
/// let decoder = Decoder::default();
///
/// let message = decoder
///     .decode("$GPGLL,3723.2475,N,12158.3416,W,161229.487,A,A*41")
///     .unwrap();
/// assert_eq!(message.sentence_type(), SentenceType::GLL);
///
/// let rejected = decoder
///     .decode("$GPGLL,3723.2475,N,12158.3416,W,161229.487,A,A*40")
///     .unwrap_err();
/// assert_eq!(rejected.outcome(), DecodeOutcome::BadChecksum);
/// assert_eq!(rejected.sentence_type, SentenceType::GLL);
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Decoder {
    config: DecoderConfig,
}

impl Decoder {
    pub fn new(config: DecoderConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &DecoderConfig {
        &self.config
    }

    /// Decodes a single sentence with its CR/LF already stripped.
    pub fn decode<'a>(&self, sentence: &'a str) -> Result<Message, Rejected<'a>> {
        let body =
            start_delimiter(sentence).map_err(|e| Rejected::new(SentenceType::None, e))?;
        let (id, fields) = identifier(body);

        let sentence_type = classify(id).ok_or_else(|| {
            Rejected::new(SentenceType::None, Error::UnrecognizedSentence(id))
        })?;

        if !sentence_type.has_decoder() {
            return Err(Rejected::new(
                sentence_type,
                Error::UnsupportedSentence(sentence_type),
            ));
        }

        let reject = |e: Error<&'a str>| Rejected::new(sentence_type, e);

        verify_checksum(sentence, self.config.checksum_case).map_err(reject)?;

        if !sentence.is_ascii() {
            return Err(reject(Error::NonAscii));
        }

        Message::parser(sentence_type, fields).map_err(reject)
    }
}

/// Sentence processor that remembers the latest record of each type.
///
/// A rejected sentence leaves the stored records untouched.
///
/// # Examples
///
/// ```rust
/// use nmea0183_decoder::{DecodeOutcome, NmeaParser, SentenceType};
///
/// let mut parser = NmeaParser::new();
/// assert!(parser.gsa().is_none());
///
/// let result = parser.process("$GPGSA,A,3,07,02,26,27,09,04,15,,,,,,1.8,1.0,1.5*33");
/// assert_eq!(result, (DecodeOutcome::Success, SentenceType::GSA));
///
/// let gsa = parser.gsa().unwrap();
/// assert_eq!(gsa.payload.active_satellites().len(), 7);
/// ```
#[derive(Debug, Default, Clone)]
pub struct NmeaParser {
    decoder: Decoder,
    store: MessageStore,
}

impl NmeaParser {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: DecoderConfig) -> Self {
        Self {
            decoder: Decoder::new(config),
            store: MessageStore::new(),
        }
    }

    pub fn config(&self) -> &DecoderConfig {
        self.decoder.config()
    }

    /// Processes a sentence captured now, according to the system clock in UTC.
    pub fn process(&mut self, sentence: &str) -> (DecodeOutcome, SentenceType) {
        self.process_at(sentence, OffsetDateTime::now_utc())
    }

    /// Processes a sentence captured at `timestamp`.
    ///
    /// On success the record is committed to the store. The returned sentence
    /// type is [`SentenceType::None`] when the identifier was not recognized.
    pub fn process_at(
        &mut self,
        sentence: &str,
        timestamp: OffsetDateTime,
    ) -> (DecodeOutcome, SentenceType) {
        match self.decoder.decode(sentence) {
            Ok(message) => {
                let sentence_type = message.sentence_type();
                trace!("Decoded {:?} sentence: {:?}", sentence_type, message);

                self.store.commit(Captured::new(timestamp, message));
                (DecodeOutcome::Success, sentence_type)
            }
            Err(rejected) => {
                debug!(
                    "Rejected {:?} sentence as {:?}: {}",
                    rejected.sentence_type,
                    rejected.outcome(),
                    rejected.error
                );
                (rejected.outcome(), rejected.sentence_type)
            }
        }
    }

    /// Returns the latest record of `sentence_type`, `None` until one was decoded.
    pub fn latest(&self, sentence_type: SentenceType) -> Option<Captured<Message>> {
        self.store.latest(sentence_type)
    }

    pub fn gga(&self) -> Option<&Captured<GGA>> {
        self.store.gga()
    }

    pub fn gll(&self) -> Option<&Captured<GLL>> {
        self.store.gll()
    }

    pub fn gsa(&self) -> Option<&Captured<GSA>> {
        self.store.gsa()
    }

    pub fn store(&self) -> &MessageStore {
        &self.store
    }
}
