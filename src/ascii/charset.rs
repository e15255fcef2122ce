//! Character set definitions for ASCII rendering.

use serde::Deserialize;

/// Standard ASCII density ramp (10 levels).
/// Characters ordered from darkest (space) to brightest (@).
pub const STANDARD_CHARSET: &[char] = &[' ', '.', ':', '-', '=', '+', '*', '#', '%', '@'];

/// Block character set (5 levels).
/// Uses Unicode block characters for higher perceived resolution.
pub const BLOCKS_CHARSET: &[char] = &[' ', '░', '▒', '▓', '█'];

/// Minimal character set (4 levels).
pub const MINIMAL_CHARSET: &[char] = &[' ', '.', ':', '#'];

/// Character set type for ASCII rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CharSet {
    /// Standard ASCII density ramp (10 levels)
    Standard,
    /// Block character set (5 levels) using Unicode blocks
    #[default]
    Blocks,
    /// Minimal character set (4 levels) for a clean look
    Minimal,
}

impl CharSet {
    /// Get the character slice for this charset.
    pub fn chars(&self) -> &'static [char] {
        match self {
            CharSet::Standard => STANDARD_CHARSET,
            CharSet::Blocks => BLOCKS_CHARSET,
            CharSet::Minimal => MINIMAL_CHARSET,
        }
    }

    /// Get a human-readable name for the charset.
    pub fn name(&self) -> &'static str {
        match self {
            CharSet::Standard => "standard",
            CharSet::Blocks => "blocks",
            CharSet::Minimal => "minimal",
        }
    }
}
