//! CLI enum types for character set and overflow options.

use clap::ValueEnum;

use crate::ascii;
use crate::router::OverflowPolicy;

/// ASCII character set for rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum CharacterSet {
    Standard,
    #[default]
    Blocks,
    Minimal,
}

impl From<CharacterSet> for ascii::CharSet {
    fn from(c: CharacterSet) -> Self {
        match c {
            CharacterSet::Standard => ascii::CharSet::Standard,
            CharacterSet::Blocks => ascii::CharSet::Blocks,
            CharacterSet::Minimal => ascii::CharSet::Minimal,
        }
    }
}

/// What a full stream does with a new frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Overflow {
    /// Evict the oldest frame
    #[default]
    DropOldest,
    /// Discard the new frame
    Reject,
}

impl From<Overflow> for OverflowPolicy {
    fn from(o: Overflow) -> Self {
        match o {
            Overflow::DropOldest => OverflowPolicy::DropOldest,
            Overflow::Reject => OverflowPolicy::Reject,
        }
    }
}
