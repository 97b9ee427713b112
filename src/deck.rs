//! Single-deck construction, shuffling, and dealing.

extern crate alloc;

use alloc::vec::Vec;

use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;

use crate::card::{Card, DECK_SIZE, Rank, Suit};

/// An ordered sequence of cards dealt from the top (the end of the
/// sequence, so dealing is O(1)).
///
/// A fresh deck holds exactly the 52 (suit, rank) combinations; every deal
/// removes one card permanently. An exhausted deck deals `None` rather
/// than erroring.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    /// Remaining cards, top of deck last.
    cards: Vec<Card>,
}

impl Deck {
    /// Creates an unshuffled deck of all 52 cards.
    #[must_use]
    pub fn ordered() -> Self {
        let mut cards = Vec::with_capacity(DECK_SIZE);

        for suit in Suit::ALL {
            for rank in Rank::ALL {
                cards.push(Card::new(suit, rank));
            }
        }

        Self { cards }
    }

    /// Creates a deck of all 52 cards in a uniformly random order.
    #[must_use]
    pub fn shuffled(rng: &mut ChaCha8Rng) -> Self {
        let mut deck = Self::ordered();
        deck.cards.shuffle(rng);
        deck
    }

    /// Removes and returns the top card, or `None` if the deck is empty.
    pub fn deal(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Returns whether the deck has no cards left.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Returns the number of cards remaining.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns the remaining cards, top of deck last.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }
}

impl From<Vec<Card>> for Deck {
    /// Builds a deck from an explicit card sequence, top of deck last.
    ///
    /// Intended for stacking known draws in tests and demos.
    fn from(cards: Vec<Card>) -> Self {
        Self { cards }
    }
}
