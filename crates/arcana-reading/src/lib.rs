//! Reading engine for Arcana.
//!
//! Provides uniform random draws over a [`arcana_core::Deck`] and the named
//! spreads (three-card past/present/future and the general six-card spread)
//! with their fixed upright/reversed ratios. All randomness comes from a
//! caller-supplied [`rand::rngs::StdRng`], so readings are reproducible from
//! a seed.

pub mod config;
pub mod engine;
pub mod error;
pub mod reading;
pub mod spread;

pub use config::ReadingConfig;
pub use engine::ReadingEngine;
pub use error::{ReadingError, ReadingResult};
pub use reading::{DrawnCard, Placement, Reading};
pub use spread::{Spread, localize_position};
