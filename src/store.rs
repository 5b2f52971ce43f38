//! # Message Store
//!
//! Keeps the most recent successfully decoded record of each sentence type.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::nmea_content::{GGA, GLL, GSA, Message, SentenceType};

/// A decoded record stamped with the time it was captured.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Captured<T> {
    /// Capture time supplied when the sentence was processed
    pub timestamp: OffsetDateTime,
    /// The decoded record
    pub payload: T,
}

impl<T> Captured<T> {
    pub fn new(timestamp: OffsetDateTime, payload: T) -> Self {
        Self { timestamp, payload }
    }

    /// Maps the payload, keeping the capture time.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Captured<U> {
        Captured {
            timestamp: self.timestamp,
            payload: f(self.payload),
        }
    }
}

/// Latest record per decodable sentence type.
///
/// A slot is empty until the first successful decode of its type, is
/// replaced as a whole by every later success, and is never cleared.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct MessageStore {
    gga: Option<Captured<GGA>>,
    gll: Option<Captured<GLL>>,
    gsa: Option<Captured<GSA>>,
}

impl MessageStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the slot matching the message's sentence type.
    pub fn commit(&mut self, captured: Captured<Message>) {
        let Captured { timestamp, payload } = captured;

        match payload {
            Message::GGA(gga) => self.gga = Some(Captured::new(timestamp, gga)),
            Message::GLL(gll) => self.gll = Some(Captured::new(timestamp, gll)),
            Message::GSA(gsa) => self.gsa = Some(Captured::new(timestamp, gsa)),
        }
    }

    /// Returns the latest record of `sentence_type`.
    ///
    /// Always `None` for sentence types without a decoder.
    pub fn latest(&self, sentence_type: SentenceType) -> Option<Captured<Message>> {
        match sentence_type {
            SentenceType::GGA => self.gga.map(|c| c.map(Message::GGA)),
            SentenceType::GLL => self.gll.map(|c| c.map(Message::GLL)),
            SentenceType::GSA => self.gsa.map(|c| c.map(Message::GSA)),
            _ => None,
        }
    }

    pub fn gga(&self) -> Option<&Captured<GGA>> {
        self.gga.as_ref()
    }

    pub fn gll(&self) -> Option<&Captured<GLL>> {
        self.gll.as_ref()
    }

    pub fn gsa(&self) -> Option<&Captured<GSA>> {
        self.gsa.as_ref()
    }
}
