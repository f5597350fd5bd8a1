use std::collections::HashMap;
use std::io;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::card::{Card, CardType};
use crate::error::{DeckError, DeckResult};

/// Columns every card table must provide, in canonical order.
pub const REQUIRED_COLUMNS: [&str; 11] = [
    "name",
    "url",
    "image",
    "desc",
    "rdesc",
    "message",
    "qabalah",
    "hebrew_letter",
    "meditation",
    "sequence",
    "cardtype",
];

/// One raw row of a card table. Absent cells deserialize to empty strings.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct CardRecord {
    name: String,
    url: String,
    image: String,
    desc: String,
    rdesc: String,
    message: String,
    qabalah: String,
    hebrew_letter: String,
    meditation: String,
    sequence: String,
    cardtype: String,
}

impl CardRecord {
    fn into_card(self, row: usize) -> DeckResult<Card> {
        let sequence = parse_sequence(row, &self.sequence)?;
        Ok(Card {
            name: self.name,
            url: self.url,
            image: self.image,
            desc: self.desc,
            rdesc: self.rdesc,
            message: self.message,
            qabalah: self.qabalah,
            hebrew_letter: self.hebrew_letter,
            meditation: self.meditation,
            sequence,
            cardtype: CardType::parse(&self.cardtype),
        })
    }
}

/// Accepts plain integers and integral floats such as `"3.0"`.
fn parse_sequence(row: usize, value: &str) -> DeckResult<i64> {
    let trimmed = value.trim();
    if let Ok(n) = trimmed.parse::<i64>() {
        return Ok(n);
    }
    match trimmed.parse::<f64>() {
        // `i64::MAX as f64` rounds up to 2^63, so the upper bound is exclusive.
        Ok(f) if f.fract() == 0.0 && f >= i64::MIN as f64 && f < i64::MAX as f64 => Ok(f as i64),
        _ => Err(DeckError::InvalidSequence {
            row,
            value: value.to_string(),
        }),
    }
}

/// A card together with its load-order neighbours, for detail navigation.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct CardNav<'d> {
    /// The card that was looked up.
    pub card: &'d Card,
    /// Its position in load order.
    pub index: usize,
    /// The card loaded immediately before it, if any.
    pub prev: Option<&'d Card>,
    /// The card loaded immediately after it, if any.
    pub next: Option<&'d Card>,
}

/// An immutable, ordered set of cards for one locale.
///
/// Cards keep the row order of the source table. A deck is built once and
/// never mutated, so it can be shared freely between readers.
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
    columns: Vec<String>,

    // Indexes
    by_name_lower: HashMap<String, usize>,
    by_url: HashMap<String, usize>,
}

impl Deck {
    /// Build a deck from cards already in memory, in the given order.
    pub fn from_cards(cards: Vec<Card>) -> Self {
        let columns = REQUIRED_COLUMNS.iter().map(|c| (*c).to_string()).collect();
        Self::with_columns(cards, columns)
    }

    fn with_columns(cards: Vec<Card>, columns: Vec<String>) -> Self {
        let mut by_name_lower = HashMap::new();
        let mut by_url = HashMap::new();
        for (i, card) in cards.iter().enumerate() {
            // First occurrence wins when the uniqueness invariant is broken.
            by_name_lower.entry(card.name.to_lowercase()).or_insert(i);
            by_url.entry(card.url.clone()).or_insert(i);
        }
        Self {
            cards,
            columns,
            by_name_lower,
            by_url,
        }
    }

    // -----------------------------------------------------------------------
    // Loading
    // -----------------------------------------------------------------------

    /// Load a deck from a CSV card table on disk.
    pub fn from_path(path: impl AsRef<Path>) -> DeckResult<Self> {
        let path = path.as_ref();
        let file = std::fs::File::open(path).map_err(|source| DeckError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let deck = Self::from_reader(io::BufReader::new(file))?;
        tracing::info!(
            path = %path.display(),
            cards = deck.len(),
            major = deck.major_arcana().len(),
            "loaded card table"
        );
        Ok(deck)
    }

    /// Load a deck from CSV text.
    pub fn from_csv_str(text: &str) -> DeckResult<Self> {
        Self::from_reader(text.as_bytes())
    }

    /// Load a deck from any CSV source with a header row.
    ///
    /// Every column in [`REQUIRED_COLUMNS`] must be present; extra columns
    /// are ignored. Empty cells and short rows yield empty strings.
    pub fn from_reader<R: io::Read>(reader: R) -> DeckResult<Self> {
        let mut rdr = csv::ReaderBuilder::new().flexible(true).from_reader(reader);

        let columns: Vec<String> = rdr.headers()?.iter().map(str::to_string).collect();
        if let Some(missing) = REQUIRED_COLUMNS
            .iter()
            .find(|required| !columns.iter().any(|c| c == *required))
        {
            return Err(DeckError::MissingColumn((*missing).to_string()));
        }
        let headers = csv::StringRecord::from(columns.clone());

        let mut cards = Vec::new();
        for (i, result) in rdr.records().enumerate() {
            let mut record = result?;
            while record.len() < headers.len() {
                record.push_field("");
            }
            let raw: CardRecord = record.deserialize(Some(&headers))?;
            cards.push(raw.into_card(i + 1)?);
        }
        tracing::debug!(cards = cards.len(), columns = columns.len(), "parsed card table");

        Ok(Self::with_columns(cards, columns))
    }

    // -----------------------------------------------------------------------
    // Queries
    // -----------------------------------------------------------------------

    /// All cards in load order.
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Number of cards in the deck.
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns true if the deck holds no cards.
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Header columns of the source table, as read.
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Find a card by name (case-insensitive).
    pub fn get_by_name(&self, name: &str) -> DeckResult<&Card> {
        self.by_name_lower
            .get(&name.to_lowercase())
            .map(|&i| &self.cards[i])
            .ok_or_else(|| DeckError::NotFound(name.to_string()))
    }

    /// Cards whose `cardtype` equals `cardtype` exactly, in load order.
    pub fn get_by_type(&self, cardtype: &str) -> Vec<&Card> {
        self.cards
            .iter()
            .filter(|c| c.cardtype.as_str() == cardtype)
            .collect()
    }

    /// The Major Arcana, in load order.
    pub fn major_arcana(&self) -> Vec<&Card> {
        self.get_by_type(CardType::MAJOR)
    }

    /// Every card that is not Major Arcana, in load order.
    pub fn minor_arcana(&self) -> Vec<&Card> {
        self.cards.iter().filter(|c| !c.is_major()).collect()
    }

    /// Find a card by URL slug, returning its load-order index too.
    pub fn get_by_url(&self, url: &str) -> DeckResult<(usize, &Card)> {
        self.by_url
            .get(url)
            .map(|&i| (i, &self.cards[i]))
            .ok_or_else(|| DeckError::NotFound(url.to_string()))
    }

    /// Find a card by URL slug along with its previous and next cards in
    /// load order.
    pub fn navigate(&self, url: &str) -> DeckResult<CardNav<'_>> {
        let (index, card) = self.get_by_url(url)?;
        Ok(CardNav {
            card,
            index,
            prev: index.checked_sub(1).map(|i| &self.cards[i]),
            next: self.cards.get(index + 1),
        })
    }

    /// Find a card by its `sequence` key.
    pub fn get_by_sequence(&self, sequence: i64) -> DeckResult<&Card> {
        self.cards
            .iter()
            .find(|c| c.sequence == sequence)
            .ok_or_else(|| DeckError::NotFound(format!("sequence {sequence}")))
    }

    /// Resolve a card from another locale's deck to the same logical card in
    /// this deck, matching on the shared URL slug.
    pub fn counterpart(&self, card: &Card) -> DeckResult<&Card> {
        self.get_by_url(&card.url).map(|(_, c)| c)
    }
}
