//! Trade direction stated in a signal description.

use serde::{Deserialize, Serialize};
use std::fmt;

const LONG_WORDS: [&str; 5] = ["long", "buy", "bullish", "bull", "calls"];
const SHORT_WORDS: [&str; 5] = ["short", "sell", "bearish", "bear", "puts"];

/// Direction a signal message asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SignalDirection {
    Long,
    Short,
}

impl SignalDirection {
    /// Look for direction keywords in free text.
    ///
    /// Returns `None` when no keyword is found or when long and short
    /// keywords both appear.
    pub fn from_description(description: &str) -> Option<Self> {
        let mut long = false;
        let mut short = false;

        for word in description
            .split(|c: char| !c.is_alphanumeric())
            .filter(|w| !w.is_empty())
        {
            let word = word.to_lowercase();
            long |= LONG_WORDS.contains(&word.as_str());
            short |= SHORT_WORDS.contains(&word.as_str());
        }

        match (long, short) {
            (true, false) => Some(SignalDirection::Long),
            (false, true) => Some(SignalDirection::Short),
            _ => None,
        }
    }
}

impl fmt::Display for SignalDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SignalDirection::Long => "long",
            SignalDirection::Short => "short",
        };
        write!(f, "{}", s)
    }
}
