//! Deck generation.
//!
//! A deck is built by sampling `pairs_count` distinct arts from the
//! configured selection, duplicating them into pairs, and assigning
//! sequential ids in final order. All cards start face down.

use std::collections::BTreeSet;

use rand::seq::SliceRandom;

use crate::art::ArtKind;
use crate::game::card::{Card, DifficultyLevel};

/// Where card layouts come from.
///
/// `Sequential` takes arts in declaration order with no shuffling, so the
/// card at id `i` pairs with the card at id `i + pairs_count`. It backs
/// the `--deterministic-deck` automation flag and the test fixtures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeckSource {
    Shuffled,
    Sequential,
}

impl DeckSource {
    pub fn deal(self, selected: &BTreeSet<ArtKind>, level: DifficultyLevel) -> Vec<Card> {
        let pairs = level.pairs_count();
        if selected.len() < pairs {
            // The configuration floor keeps this unreachable through normal
            // play; a hand-edited configuration file can still get here.
            tracing::warn!(
                selected = selected.len(),
                required = pairs,
                "fewer selected arts than required pairs, dealing a short deck"
            );
        }

        let mut arts: Vec<ArtKind> = selected.iter().copied().collect();
        match self {
            DeckSource::Shuffled => {
                let mut rng = rand::thread_rng();
                arts.shuffle(&mut rng);
                arts.truncate(pairs);
                let mut faces: Vec<ArtKind> =
                    arts.iter().copied().chain(arts.iter().copied()).collect();
                faces.shuffle(&mut rng);
                into_cards(faces)
            }
            DeckSource::Sequential => {
                arts.truncate(pairs);
                let faces: Vec<ArtKind> =
                    arts.iter().copied().chain(arts.iter().copied()).collect();
                into_cards(faces)
            }
        }
    }
}

fn into_cards(faces: Vec<ArtKind>) -> Vec<Card> {
    faces
        .into_iter()
        .enumerate()
        .map(|(id, art)| Card::face_down(id, art))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    fn all_arts() -> BTreeSet<ArtKind> {
        ArtKind::ALL.into_iter().collect()
    }

    fn art_counts(deck: &[Card]) -> BTreeMap<ArtKind, usize> {
        let mut counts = BTreeMap::new();
        for card in deck {
            *counts.entry(card.art).or_insert(0) += 1;
        }
        counts
    }

    #[test]
    fn shuffled_deck_has_level_card_count_and_exact_pairs() {
        for level in DifficultyLevel::ALL {
            let deck = DeckSource::Shuffled.deal(&all_arts(), level);
            assert_eq!(deck.len(), level.cards_count());
            for (art, count) in art_counts(&deck) {
                assert_eq!(count, 2, "{art:?} should appear exactly twice");
            }
            assert!(deck.iter().all(|card| !card.is_face_up));
        }
    }

    #[test]
    fn ids_are_sequential_positions() {
        let deck = DeckSource::Shuffled.deal(&all_arts(), DifficultyLevel::Normal);
        for (position, card) in deck.iter().enumerate() {
            assert_eq!(card.id, position);
        }
    }

    #[test]
    fn sequential_deck_pairs_at_offset() {
        let deck = DeckSource::Sequential.deal(&all_arts(), DifficultyLevel::Normal);
        let pairs = DifficultyLevel::Normal.pairs_count();
        assert_eq!(deck.len(), 20);
        for i in 0..pairs {
            assert_eq!(deck[i].art, deck[i + pairs].art);
        }
        // Arts follow declaration order, making fixtures predictable.
        assert_eq!(deck[0].art, ArtKind::ArtDeco);
        assert_eq!(deck[1].art, ArtKind::Cave);
    }

    #[test]
    fn short_selection_deals_short_deck() {
        let selected: BTreeSet<ArtKind> = ArtKind::ALL.into_iter().take(6).collect();
        let deck = DeckSource::Sequential.deal(&selected, DifficultyLevel::Normal);
        assert_eq!(deck.len(), 12);
        for (_, count) in art_counts(&deck) {
            assert_eq!(count, 2);
        }
    }
}
