//! Random draws over a deck.
//!
//! The engine holds nothing but a reference to an immutable deck; the random
//! source is passed into every call. Two orientation policies live here and
//! are kept apart:
//!
//! - [`ReadingEngine::draw_cards`] flips an independent fair coin per card.
//! - Named spreads ([`ReadingEngine::three_card_reading`],
//!   [`ReadingEngine::six_card_reading`]) shuffle a fixed-composition
//!   orientation sequence, so the number of reversed cards is exact on every
//!   reading.

use rand::Rng;
use rand::rngs::StdRng;
use rand::seq::{SliceRandom, index};

use arcana_core::Deck;

use crate::error::{ReadingError, ReadingResult};
use crate::reading::{DrawnCard, Placement, Reading};
use crate::spread::Spread;

/// Draws cards and lays out spreads over one deck.
#[derive(Debug, Clone, Copy)]
pub struct ReadingEngine<'d> {
    deck: &'d Deck,
}

impl<'d> ReadingEngine<'d> {
    /// Create an engine over a loaded deck.
    pub fn new(deck: &'d Deck) -> Self {
        Self { deck }
    }

    /// The deck this engine draws from.
    pub fn deck(&self) -> &'d Deck {
        self.deck
    }

    /// Draw `count` cards, each with an independent coin-flip orientation.
    ///
    /// With `allow_duplicates`, cards are sampled uniformly with replacement
    /// and `count` may exceed the deck size. Without it, `count` distinct
    /// cards are sampled uniformly.
    pub fn draw_cards(
        &self,
        count: i64,
        allow_duplicates: bool,
        rng: &mut StdRng,
    ) -> ReadingResult<Vec<DrawnCard<'d>>> {
        let count = usize::try_from(count).map_err(|_| ReadingError::InvalidArgument(count))?;
        let cards = self.deck.cards();

        let drawn: Vec<DrawnCard<'d>> = if allow_duplicates {
            if count > 0 && cards.is_empty() {
                return Err(ReadingError::InsufficientDeckSize {
                    required: 1,
                    available: 0,
                });
            }
            (0..count)
                .map(|_| DrawnCard {
                    card: &cards[rng.random_range(0..cards.len())],
                    reversed: rng.random_bool(0.5),
                })
                .collect()
        } else {
            if count > cards.len() {
                return Err(ReadingError::InvalidDrawSize {
                    requested: count,
                    available: cards.len(),
                });
            }
            index::sample(rng, cards.len(), count)
                .into_iter()
                .map(|i| DrawnCard {
                    card: &cards[i],
                    reversed: rng.random_bool(0.5),
                })
                .collect()
        };

        tracing::debug!(
            count,
            allow_duplicates,
            reversed = drawn.iter().filter(|d| d.reversed).count(),
            "drew cards"
        );
        Ok(drawn)
    }

    /// Draw a single card with a coin-flip orientation.
    pub fn one_card_reading(&self, rng: &mut StdRng) -> ReadingResult<DrawnCard<'d>> {
        let mut drawn = self.draw_cards(1, false, rng)?;
        // A successful draw of one card yields exactly one element.
        Ok(drawn.remove(0))
    }

    /// Past, present and future: three distinct cards, exactly one reversed.
    pub fn three_card_reading(&self, rng: &mut StdRng) -> ReadingResult<Reading<'d>> {
        self.read(Spread::Three, rng)
    }

    /// The general six-card spread: six distinct cards, exactly two reversed.
    pub fn six_card_reading(&self, rng: &mut StdRng) -> ReadingResult<Reading<'d>> {
        self.read(Spread::Six, rng)
    }

    /// Lay out a named spread.
    ///
    /// Cards are sampled without replacement and placed in position order.
    /// The spread's orientation sequence is shuffled uniformly before being
    /// assigned, so each position is equally likely to be reversed.
    pub fn read(&self, spread: Spread, rng: &mut StdRng) -> ReadingResult<Reading<'d>> {
        let cards = self.deck.cards();
        if cards.len() < spread.size() {
            return Err(ReadingError::InsufficientDeckSize {
                required: spread.size(),
                available: cards.len(),
            });
        }

        let picks = index::sample(rng, cards.len(), spread.size());
        let mut orientations = spread.orientations();
        orientations.shuffle(rng);

        let placements: Vec<Placement<'d>> = spread
            .positions()
            .zip(picks)
            .zip(orientations)
            .map(|((position, i), reversed)| Placement {
                position,
                card: &cards[i],
                reversed,
            })
            .collect();

        tracing::debug!(%spread, cards = placements.len(), "laid out spread");
        Ok(Reading { spread, placements })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use arcana_core::{Card, CardType};
    use proptest::prelude::*;
    use rand::SeedableRng;

    fn deck_of(size: i64) -> Deck {
        let cards = (1..=size)
            .map(|i| Card {
                name: format!("Card {i}"),
                url: format!("card-{i}"),
                image: format!("images/{i:02}.jpeg"),
                desc: format!("upright {i}"),
                rdesc: format!("reversed {i}"),
                message: String::new(),
                qabalah: String::new(),
                hebrew_letter: String::new(),
                meditation: String::new(),
                sequence: i,
                cardtype: if i <= 22 { CardType::Major } else { CardType::Minor },
            })
            .collect();
        Deck::from_cards(cards)
    }

    fn names<'a>(cards: impl IntoIterator<Item = &'a Card>) -> HashSet<&'a str> {
        cards.into_iter().map(|c| c.name.as_str()).collect()
    }

    #[test]
    fn draw_without_duplicates_is_distinct() {
        let deck = deck_of(78);
        let engine = ReadingEngine::new(&deck);
        let mut rng = StdRng::seed_from_u64(42);
        let drawn = engine.draw_cards(10, false, &mut rng).unwrap();
        assert_eq!(drawn.len(), 10);
        assert_eq!(names(drawn.iter().map(|d| d.card)).len(), 10);
    }

    #[test]
    fn draw_whole_deck_without_duplicates() {
        let deck = deck_of(78);
        let engine = ReadingEngine::new(&deck);
        let mut rng = StdRng::seed_from_u64(1);
        let drawn = engine.draw_cards(78, false, &mut rng).unwrap();
        assert_eq!(names(drawn.iter().map(|d| d.card)).len(), 78);
    }

    #[test]
    fn draw_past_deck_size_without_duplicates_fails() {
        let deck = deck_of(78);
        let engine = ReadingEngine::new(&deck);
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(
            engine.draw_cards(79, false, &mut rng),
            Err(ReadingError::InvalidDrawSize {
                requested: 79,
                available: 78,
            })
        );
    }

    #[test]
    fn draw_with_duplicates_may_exceed_deck_size() {
        let deck = deck_of(78);
        let engine = ReadingEngine::new(&deck);
        let mut rng = StdRng::seed_from_u64(3);
        let drawn = engine.draw_cards(200, true, &mut rng).unwrap();
        assert_eq!(drawn.len(), 200);
        // 200 draws from 78 cards must repeat.
        assert!(names(drawn.iter().map(|d| d.card)).len() < 200);
    }

    #[test]
    fn negative_count_is_rejected() {
        let deck = deck_of(78);
        let engine = ReadingEngine::new(&deck);
        let mut rng = StdRng::seed_from_u64(0);
        for allow_duplicates in [false, true] {
            assert_eq!(
                engine.draw_cards(-1, allow_duplicates, &mut rng),
                Err(ReadingError::InvalidArgument(-1))
            );
        }
    }

    #[test]
    fn zero_count_draws_nothing() {
        let deck = deck_of(0);
        let engine = ReadingEngine::new(&deck);
        let mut rng = StdRng::seed_from_u64(0);
        assert!(engine.draw_cards(0, false, &mut rng).unwrap().is_empty());
        assert!(engine.draw_cards(0, true, &mut rng).unwrap().is_empty());
    }

    #[test]
    fn empty_deck_with_duplicates_fails() {
        let deck = deck_of(0);
        let engine = ReadingEngine::new(&deck);
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(
            engine.draw_cards(1, true, &mut rng),
            Err(ReadingError::InsufficientDeckSize {
                required: 1,
                available: 0,
            })
        );
    }

    #[test]
    fn generic_draw_uses_independent_coin_flips() {
        let deck = deck_of(78);
        let engine = ReadingEngine::new(&deck);
        let mut rng = StdRng::seed_from_u64(11);

        let mut reversed = 0;
        let mut counts_seen = HashSet::new();
        for _ in 0..1000 {
            let drawn = engine.draw_cards(3, false, &mut rng).unwrap();
            let r = drawn.iter().filter(|d| d.reversed).count();
            reversed += r;
            counts_seen.insert(r);
        }
        // Roughly half of 3000 cards, and every count from 0 to 3 occurs.
        assert!((1350..=1650).contains(&reversed), "{reversed}");
        assert_eq!(counts_seen, HashSet::from([0, 1, 2, 3]));
    }

    #[test]
    fn one_card_reading() {
        let deck = deck_of(78);
        let engine = ReadingEngine::new(&deck);
        let mut rng = StdRng::seed_from_u64(5);
        let drawn = engine.one_card_reading(&mut rng).unwrap();
        assert!(deck.cards().contains(drawn.card));
        assert_eq!(drawn.meaning(), drawn.card.meaning(drawn.reversed));
    }

    #[test]
    fn one_card_reading_from_empty_deck_fails() {
        let deck = deck_of(0);
        let engine = ReadingEngine::new(&deck);
        let mut rng = StdRng::seed_from_u64(5);
        assert!(matches!(
            engine.one_card_reading(&mut rng),
            Err(ReadingError::InvalidDrawSize { .. })
        ));
    }

    #[test]
    fn one_card_reading_covers_the_deck() {
        let deck = deck_of(78);
        let engine = ReadingEngine::new(&deck);
        let mut rng = StdRng::seed_from_u64(17);
        let mut seen = HashSet::new();
        for _ in 0..2000 {
            seen.insert(engine.one_card_reading(&mut rng).unwrap().card.sequence);
        }
        assert_eq!(seen.len(), 78);
    }

    #[test]
    fn three_card_reading_layout() {
        let deck = deck_of(78);
        let engine = ReadingEngine::new(&deck);
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..200 {
            let reading = engine.three_card_reading(&mut rng).unwrap();
            let positions: Vec<_> = reading.iter().map(|p| p.position).collect();
            assert_eq!(positions, ["The Past", "The Present", "The Future"]);
            assert_eq!(reading.reversed_count(), 1);
            assert_eq!(names(reading.iter().map(|p| p.card)).len(), 3);
            assert_eq!(reading.spread, Spread::Three);
        }
    }

    #[test]
    fn three_card_reversal_has_no_positional_bias() {
        let deck = deck_of(78);
        let engine = ReadingEngine::new(&deck);
        let mut rng = StdRng::seed_from_u64(2024);
        let mut per_position = [0usize; 3];
        for _ in 0..3000 {
            let reading = engine.three_card_reading(&mut rng).unwrap();
            for (slot, placement) in per_position.iter_mut().zip(reading.iter()) {
                if placement.reversed {
                    *slot += 1;
                }
            }
        }
        assert_eq!(per_position.iter().sum::<usize>(), 3000);
        for count in per_position {
            assert!((850..=1150).contains(&count), "{per_position:?}");
        }
    }

    #[test]
    fn six_card_reading_layout() {
        let deck = deck_of(78);
        let engine = ReadingEngine::new(&deck);
        let mut rng = StdRng::seed_from_u64(9);
        for _ in 0..200 {
            let reading = engine.six_card_reading(&mut rng).unwrap();
            assert_eq!(reading.len(), 6);
            let positions: Vec<_> = reading.iter().map(|p| p.position).collect();
            let expected: Vec<_> = Spread::Six.positions().collect();
            assert_eq!(positions, expected);
            assert_eq!(reading.reversed_count(), 2);
            assert_eq!(names(reading.iter().map(|p| p.card)).len(), 6);
        }
    }

    #[test]
    fn six_card_reversals_spread_over_every_position() {
        let deck = deck_of(78);
        let engine = ReadingEngine::new(&deck);
        let mut rng = StdRng::seed_from_u64(77);
        let mut per_position = [0usize; 6];
        for _ in 0..3000 {
            let reading = engine.six_card_reading(&mut rng).unwrap();
            for (slot, placement) in per_position.iter_mut().zip(reading.iter()) {
                if placement.reversed {
                    *slot += 1;
                }
            }
        }
        // Expected 1000 per position.
        for count in per_position {
            assert!((850..=1150).contains(&count), "{per_position:?}");
        }
    }

    #[test]
    fn spreads_need_enough_cards() {
        let mut rng = StdRng::seed_from_u64(0);

        let small = deck_of(2);
        assert_eq!(
            ReadingEngine::new(&small).three_card_reading(&mut rng),
            Err(ReadingError::InsufficientDeckSize {
                required: 3,
                available: 2,
            })
        );

        let five = deck_of(5);
        assert!(ReadingEngine::new(&five).three_card_reading(&mut rng).is_ok());
        assert_eq!(
            ReadingEngine::new(&five).six_card_reading(&mut rng),
            Err(ReadingError::InsufficientDeckSize {
                required: 6,
                available: 5,
            })
        );
    }

    #[test]
    fn exact_size_deck_uses_every_card() {
        let deck = deck_of(6);
        let engine = ReadingEngine::new(&deck);
        let mut rng = StdRng::seed_from_u64(8);
        let reading = engine.six_card_reading(&mut rng).unwrap();
        assert_eq!(names(reading.iter().map(|p| p.card)).len(), 6);
    }

    #[test]
    fn same_seed_same_reading() {
        let deck = deck_of(78);
        let engine = ReadingEngine::new(&deck);
        let a = engine
            .six_card_reading(&mut StdRng::seed_from_u64(123))
            .unwrap();
        let b = engine
            .six_card_reading(&mut StdRng::seed_from_u64(123))
            .unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn reading_serializes_with_card_fields() {
        let deck = deck_of(78);
        let engine = ReadingEngine::new(&deck);
        let reading = engine
            .three_card_reading(&mut StdRng::seed_from_u64(4))
            .unwrap();
        let json = serde_json::to_value(&reading).unwrap();
        assert_eq!(json["spread"], "three");
        assert_eq!(json["placements"][0]["position"], "The Past");
        assert!(json["placements"][0]["card"]["url"].is_string());
        assert!(matches!(
            json["placements"][0]["card"]["cardtype"].as_str(),
            Some("major" | "minor")
        ));
        assert!(json["placements"][0]["reversed"].is_boolean());
    }

    proptest! {
        #[test]
        fn distinct_draws_for_any_size(seed in any::<u64>(), count in 0i64..=78) {
            let deck = deck_of(78);
            let engine = ReadingEngine::new(&deck);
            let mut rng = StdRng::seed_from_u64(seed);
            let drawn = engine.draw_cards(count, false, &mut rng).unwrap();
            prop_assert_eq!(drawn.len() as i64, count);
            prop_assert_eq!(names(drawn.iter().map(|d| d.card)).len() as i64, count);
        }

        #[test]
        fn oversized_distinct_draws_fail(seed in any::<u64>(), count in 79i64..500) {
            let deck = deck_of(78);
            let engine = ReadingEngine::new(&deck);
            let mut rng = StdRng::seed_from_u64(seed);
            let is_invalid_size = matches!(
                engine.draw_cards(count, false, &mut rng),
                Err(ReadingError::InvalidDrawSize { .. })
            );
            prop_assert!(is_invalid_size);
            prop_assert_eq!(engine.draw_cards(count, true, &mut rng).unwrap().len() as i64, count);
        }

        #[test]
        fn spreads_keep_their_ratio(seed in any::<u64>()) {
            let deck = deck_of(78);
            let engine = ReadingEngine::new(&deck);
            let mut rng = StdRng::seed_from_u64(seed);
            prop_assert_eq!(engine.three_card_reading(&mut rng).unwrap().reversed_count(), 1);
            prop_assert_eq!(engine.six_card_reading(&mut rng).unwrap().reversed_count(), 2);
        }
    }
}
