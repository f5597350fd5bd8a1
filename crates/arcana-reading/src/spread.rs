//! Named spreads and their positions.
//!
//! A spread fixes both the positions (in order) and how many of them are
//! reversed on every reading. The reversed slots move; their number never
//! does.

use std::fmt;

use arcana_core::Locale;
use serde::Serialize;

/// Positions of the past/present/future spread, as `(en, zh)` labels.
const THREE_CARD_POSITIONS: [(&str, &str); 3] = [
    ("The Past", "过去"),
    ("The Present", "现在"),
    ("The Future", "未来"),
];

/// Positions of the general six-card spread, as `(en, zh)` labels.
const SIX_CARD_POSITIONS: [(&str, &str); 6] = [
    ("How you feel about yourself", "你如何看待自己"),
    ("What you want most right now", "你现在最想要的"),
    ("Your fears", "你的恐惧"),
    ("What is going for you", "对你有利的因素"),
    ("What is going against you", "对你不利的因素"),
    ("The likely outcome", "可能的结果"),
];

/// A named spread with a fixed upright/reversed ratio.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Spread {
    /// Past, present, future: one card reversed.
    Three,
    /// The general six-card spread: two cards reversed.
    Six,
}

impl Spread {
    fn table(self) -> &'static [(&'static str, &'static str)] {
        match self {
            Self::Three => &THREE_CARD_POSITIONS,
            Self::Six => &SIX_CARD_POSITIONS,
        }
    }

    /// Number of positions (and therefore distinct cards) in the spread.
    pub fn size(self) -> usize {
        self.table().len()
    }

    /// How many positions are reversed on every reading.
    pub fn reversed_count(self) -> usize {
        match self {
            Self::Three => 1,
            Self::Six => 2,
        }
    }

    /// Canonical position labels, in layout order.
    pub fn positions(self) -> impl Iterator<Item = &'static str> {
        self.table().iter().map(|(en, _)| *en)
    }

    /// The orientation sequence before shuffling: all upright slots first,
    /// then the reversed ones.
    pub(crate) fn orientations(self) -> Vec<bool> {
        let upright = self.size() - self.reversed_count();
        std::iter::repeat_n(false, upright)
            .chain(std::iter::repeat_n(true, self.reversed_count()))
            .collect()
    }
}

/// Translate a canonical position label for display. Unknown labels are
/// returned unchanged.
pub fn localize_position(position: &str, locale: Locale) -> &str {
    if locale == Locale::En {
        return position;
    }
    THREE_CARD_POSITIONS
        .iter()
        .chain(SIX_CARD_POSITIONS.iter())
        .find(|(en, _)| *en == position)
        .map(|(_, zh)| *zh)
        .unwrap_or(position)
}

impl fmt::Display for Spread {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Three => write!(f, "three"),
            Self::Six => write!(f, "six"),
        }
    }
}
