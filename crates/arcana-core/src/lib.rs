//! Core types for Arcana: tarot cards, localized decks, and catalog queries.
//!
//! A [`Deck`] is loaded once from a CSV card table and is read-only from then
//! on. It answers the catalog queries (all cards, by name, by type, by URL
//! slug with prev/next navigation) that the reading engine and any front end
//! build on.

/// Card records and card types.
pub mod card;
/// The immutable deck, CSV loading, and lookups.
pub mod deck;
/// Error types used throughout the crate.
pub mod error;
/// Supported display languages.
pub mod locale;
/// Content checks for loaded card tables.
pub mod validate;

/// Re-export card types.
pub use card::{Card, CardType};
/// Re-export deck types.
pub use deck::{CardNav, Deck, REQUIRED_COLUMNS};
/// Re-export error types.
pub use error::{DeckError, DeckResult};
/// Re-export the locale type.
pub use locale::Locale;
/// Re-export validation entry points.
pub use validate::{ValidationReport, validate_deck};
