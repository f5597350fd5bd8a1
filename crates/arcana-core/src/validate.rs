//! Data-quality checks for a loaded deck.
//!
//! Loading only rejects tables that are structurally unusable. The report
//! produced here covers the content invariants a conformant table must
//! satisfy: 78 cards, 22 of them major, unique keys, no empty required
//! fields, and (optionally) an image file for every card.

use std::collections::{BTreeMap, HashMap};
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::card::Card;
use crate::deck::{Deck, REQUIRED_COLUMNS};

/// Number of cards in a full tarot deck.
pub const FULL_DECK_SIZE: usize = 78;
/// Number of Major Arcana cards in a full tarot deck.
pub const MAJOR_ARCANA_SIZE: usize = 22;
/// Number of Minor Arcana cards in a full tarot deck.
pub const MINOR_ARCANA_SIZE: usize = FULL_DECK_SIZE - MAJOR_ARCANA_SIZE;

/// Fields that must hold text on every card.
const NON_EMPTY_FIELDS: [&str; 5] = ["name", "desc", "rdesc", "image", "cardtype"];

/// A required field that is empty on some card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmptyField {
    /// Load-order index of the card.
    pub index: usize,
    /// The card's URL slug (may itself be empty).
    pub url: String,
    /// The empty field.
    pub field: &'static str,
}

/// The outcome of [`validate_deck`].
#[derive(Debug, Clone, Default, Serialize)]
pub struct ValidationReport {
    /// Total number of cards.
    pub total: usize,
    /// Cards with `cardtype == "major"`.
    pub major: usize,
    /// All remaining cards.
    pub other: usize,
    /// Card count per `cardtype` value.
    pub by_type: BTreeMap<String, usize>,
    /// Header columns beyond the required set.
    pub extra_columns: Vec<String>,
    /// Required fields left empty.
    pub empty_fields: Vec<EmptyField>,
    /// Names that occur more than once (case-insensitive).
    pub duplicate_names: Vec<String>,
    /// URL slugs that occur more than once.
    pub duplicate_urls: Vec<String>,
    /// `sequence` values that occur more than once.
    pub duplicate_sequences: Vec<i64>,
    /// Lowest and highest `sequence`, if the deck is non-empty.
    pub sequence_range: Option<(i64, i64)>,
    /// Whether image files were checked.
    pub images_checked: bool,
    /// Image paths that do not exist under the image root.
    pub missing_images: Vec<String>,
}

impl ValidationReport {
    /// Returns true if the deck satisfies every invariant of a full deck.
    pub fn is_conformant(&self) -> bool {
        self.total == FULL_DECK_SIZE
            && self.major == MAJOR_ARCANA_SIZE
            && self.empty_fields.is_empty()
            && self.duplicate_names.is_empty()
            && self.duplicate_urls.is_empty()
            && self.duplicate_sequences.is_empty()
            && self.missing_images.is_empty()
    }

    /// Human-readable descriptions of every failed check.
    pub fn problems(&self) -> Vec<String> {
        let mut problems = Vec::new();
        if self.total != FULL_DECK_SIZE {
            problems.push(format!("expected {FULL_DECK_SIZE} cards, found {}", self.total));
        }
        if self.major != MAJOR_ARCANA_SIZE {
            problems.push(format!(
                "expected {MAJOR_ARCANA_SIZE} major arcana, found {}",
                self.major
            ));
        }
        for empty in &self.empty_fields {
            problems.push(format!(
                "card #{} ({}) has an empty {}",
                empty.index + 1,
                if empty.url.is_empty() { "?" } else { &empty.url },
                empty.field
            ));
        }
        for name in &self.duplicate_names {
            problems.push(format!("duplicate name: \"{name}\""));
        }
        for url in &self.duplicate_urls {
            problems.push(format!("duplicate url: \"{url}\""));
        }
        for seq in &self.duplicate_sequences {
            problems.push(format!("duplicate sequence: {seq}"));
        }
        for image in &self.missing_images {
            problems.push(format!("missing image: {image}"));
        }
        problems
    }
}

/// Check a deck against the full-deck invariants.
///
/// If `image_root` is given, every card's `image` must name an existing file
/// under it. A leading `images/` on the path is ignored, so the root may
/// point at the image directory itself.
pub fn validate_deck(deck: &Deck, image_root: Option<&Path>) -> ValidationReport {
    let cards = deck.cards();
    let mut report = ValidationReport {
        total: cards.len(),
        major: cards.iter().filter(|c| c.is_major()).count(),
        ..Default::default()
    };
    report.other = report.total - report.major;

    for card in cards {
        *report
            .by_type
            .entry(card.cardtype.as_str().to_string())
            .or_default() += 1;
    }

    report.extra_columns = deck
        .columns()
        .iter()
        .filter(|c| !REQUIRED_COLUMNS.contains(&c.as_str()))
        .cloned()
        .collect();

    for (index, card) in cards.iter().enumerate() {
        for field in NON_EMPTY_FIELDS {
            if field_value(card, field).trim().is_empty() {
                report.empty_fields.push(EmptyField {
                    index,
                    url: card.url.clone(),
                    field,
                });
            }
        }
    }

    report.duplicate_names = duplicates(cards.iter().map(|c| c.name.to_lowercase()));
    report.duplicate_urls = duplicates(cards.iter().map(|c| c.url.clone()));
    report.duplicate_sequences = duplicates(cards.iter().map(|c| c.sequence));

    let min = cards.iter().map(|c| c.sequence).min();
    let max = cards.iter().map(|c| c.sequence).max();
    report.sequence_range = min.zip(max);

    if let Some(root) = image_root {
        report.images_checked = true;
        report.missing_images = cards
            .iter()
            .filter(|c| !image_path(root, &c.image).is_file())
            .map(|c| c.image.clone())
            .collect();
    }

    if report.is_conformant() {
        tracing::debug!(cards = report.total, "card table passed validation");
    } else {
        tracing::warn!(
            problems = report.problems().len(),
            "card table failed validation"
        );
    }

    report
}

fn field_value<'c>(card: &'c Card, field: &str) -> &'c str {
    match field {
        "name" => &card.name,
        "desc" => &card.desc,
        "rdesc" => &card.rdesc,
        "image" => &card.image,
        "cardtype" => card.cardtype.as_str(),
        _ => "",
    }
}

fn image_path(root: &Path, image: &str) -> PathBuf {
    root.join(image.strip_prefix("images/").unwrap_or(image))
}

/// Values seen more than once, in order of first repetition.
fn duplicates<T, I>(values: I) -> Vec<T>
where
    T: std::hash::Hash + Eq + Clone,
    I: IntoIterator<Item = T>,
{
    let mut seen: HashMap<T, usize> = HashMap::new();
    let mut dups = Vec::new();
    for value in values {
        let count = seen.entry(value.clone()).or_default();
        *count += 1;
        if *count == 2 {
            dups.push(value);
        }
    }
    dups
}
