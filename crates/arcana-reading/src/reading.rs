//! Reading results. These borrow cards from the deck they were drawn from
//! and are discarded after use.

use arcana_core::Card;
use serde::Serialize;

use crate::spread::Spread;

/// A card drawn with an orientation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DrawnCard<'d> {
    /// The drawn card.
    pub card: &'d Card,
    /// True if the card came up reversed.
    pub reversed: bool,
}

impl DrawnCard<'_> {
    /// The meaning text for this card's orientation.
    pub fn meaning(&self) -> &str {
        self.card.meaning(self.reversed)
    }
}

/// A card laid on a labelled position of a spread.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Placement<'d> {
    /// Canonical position label.
    pub position: &'static str,
    /// The card on this position.
    pub card: &'d Card,
    /// True if the card is reversed.
    pub reversed: bool,
}

/// A complete spread reading, positions in layout order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Reading<'d> {
    /// The spread that was laid out.
    pub spread: Spread,
    /// One placement per position.
    pub placements: Vec<Placement<'d>>,
}

impl<'d> Reading<'d> {
    /// Number of placements.
    pub fn len(&self) -> usize {
        self.placements.len()
    }

    /// Returns true if the reading has no placements.
    pub fn is_empty(&self) -> bool {
        self.placements.is_empty()
    }

    /// Number of reversed placements.
    pub fn reversed_count(&self) -> usize {
        self.placements.iter().filter(|p| p.reversed).count()
    }

    /// Iterate over placements in layout order.
    pub fn iter(&self) -> impl Iterator<Item = &Placement<'d>> {
        self.placements.iter()
    }
}
