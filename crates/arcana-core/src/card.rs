use std::fmt;

use serde::Serialize;

/// The arcana a card belongs to, as written in the `cardtype` column.
///
/// The source string is preserved exactly: [`CardType::parse`] followed by
/// [`fmt::Display`] yields the original text, so type filters keep exact,
/// case-sensitive string semantics.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(into = "String")]
pub enum CardType {
    /// One of the 22 trump cards (`"major"`).
    Major,
    /// A numbered suit card, ace through ten (`"minor"`).
    Minor,
    /// A page, knight, queen or king (`"court"`).
    Court,
    /// Any other minor-arcana subtype found in the data.
    Other(String),
}

impl CardType {
    /// The `cardtype` value that marks the Major Arcana.
    pub const MAJOR: &'static str = "major";

    /// Parse a `cardtype` cell. Matching is exact; unknown values are kept
    /// verbatim in [`CardType::Other`].
    pub fn parse(s: &str) -> Self {
        match s {
            "major" => Self::Major,
            "minor" => Self::Minor,
            "court" => Self::Court,
            other => Self::Other(other.to_string()),
        }
    }

    /// The source string for this type.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Major => "major",
            Self::Minor => "minor",
            Self::Court => "court",
            Self::Other(s) => s,
        }
    }
}

impl fmt::Display for CardType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<CardType> for String {
    fn from(t: CardType) -> Self {
        t.as_str().to_string()
    }
}

/// A single tarot card as loaded from a card table.
///
/// Text fields are never absent: a missing or empty cell is stored as an
/// empty string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Card {
    /// Display name, unique within a deck (case-insensitive).
    pub name: String,
    /// URL slug, unique within a deck and shared across locales.
    pub url: String,
    /// Image path relative to the asset root, e.g. `images/01.jpeg`.
    pub image: String,
    /// Upright meaning.
    pub desc: String,
    /// Reversed meaning.
    pub rdesc: String,
    /// Short message shown with the card.
    pub message: String,
    /// Qabalistic path attribution (Major Arcana only in the bundled data).
    pub qabalah: String,
    /// Hebrew letter attribution.
    pub hebrew_letter: String,
    /// Suggested meditation.
    pub meditation: String,
    /// Ordering key within the source table, shared across locales.
    pub sequence: i64,
    /// Arcana and suit subtype.
    pub cardtype: CardType,
}

impl Card {
    /// Returns true for the 22 Major Arcana cards.
    pub fn is_major(&self) -> bool {
        self.cardtype == CardType::Major
    }

    /// The meaning text that applies in the given orientation.
    pub fn meaning(&self, reversed: bool) -> &str {
        if reversed { &self.rdesc } else { &self.desc }
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
