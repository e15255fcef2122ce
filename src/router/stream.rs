//! Identifiers for the four recording streams.

use std::fmt;

/// Number of recording streams.
pub const STREAM_COUNT: usize = 4;

/// One of the four recording streams, numbered 1 to 4.
///
/// Numbering follows the keys that arm them; [`StreamId::index`] gives the
/// zero-based position used for buffer storage and grid placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StreamId(u8);

impl StreamId {
    pub const ONE: StreamId = StreamId(1);
    pub const TWO: StreamId = StreamId(2);
    pub const THREE: StreamId = StreamId(3);
    pub const FOUR: StreamId = StreamId(4);

    /// All streams in grid order (top-left, top-right, bottom-left, bottom-right).
    pub const ALL: [StreamId; STREAM_COUNT] =
        [StreamId::ONE, StreamId::TWO, StreamId::THREE, StreamId::FOUR];

    /// Create a stream id from its number (1-4).
    pub fn new(number: u8) -> Result<Self, StreamIdError> {
        if (1..=STREAM_COUNT as u8).contains(&number) {
            Ok(StreamId(number))
        } else {
            Err(StreamIdError(number))
        }
    }

    /// Map a key character `'1'..='4'` to its stream.
    pub fn from_key(c: char) -> Option<Self> {
        let digit = c.to_digit(10)?;
        u8::try_from(digit).ok().and_then(|n| Self::new(n).ok())
    }

    /// The zero-based index into the buffer array.
    pub fn index(self) -> usize {
        usize::from(self.0 - 1)
    }
}

impl fmt::Display for StreamId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A stream number outside 1-4.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("Invalid stream {0}: streams are numbered 1 to 4")]
pub struct StreamIdError(pub u8);
