//! Hi-Lo card-counting trainer.

extern crate alloc;

use alloc::vec::Vec;
use core::fmt;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::card::{Card, Rank};
use crate::deck::Deck;
use crate::sync::Mutex;

/// Returns the Hi-Lo weight of a rank: +1 for 2-6, 0 for 7-9, -1 for
/// tens, faces, and aces.
#[must_use]
pub const fn hilo_weight(rank: Rank) -> i32 {
    match rank {
        Rank::Two | Rank::Three | Rank::Four | Rank::Five | Rank::Six => 1,
        Rank::Seven | Rank::Eight | Rank::Nine => 0,
        Rank::Ten | Rank::Jack | Rank::Queen | Rank::King | Rank::Ace => -1,
    }
}

/// Feedback on a submitted running-count guess.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessFeedback {
    /// The guess matches the running count.
    Correct,
    /// The true count is above the guess.
    TryHigher,
    /// The true count is below the guess.
    TryLower,
    /// The input did not parse as an integer.
    Invalid,
}

impl fmt::Display for GuessFeedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let message = match self {
            Self::Correct => "Correct!",
            Self::TryHigher => "Try higher",
            Self::TryLower => "Try lower",
            Self::Invalid => "Invalid input, enter a whole number",
        };
        f.write_str(message)
    }
}

/// A counting practice session.
///
/// Cards are revealed one at a time from a private shuffled deck while the
/// trainer keeps the true Hi-Lo running count; the caller guesses the
/// count and gets directional feedback. Independent of the round state
/// machines; it shares only the card and deck types.
pub struct CountingTrainer {
    /// Cards not yet revealed.
    pub deck: Mutex<Deck>,
    /// Cards revealed so far, in reveal order.
    revealed: Mutex<Vec<Card>>,
    /// Hi-Lo running count over the revealed cards.
    running_count: Mutex<i32>,
    /// Feedback from the most recent guess.
    feedback: Mutex<Option<GuessFeedback>>,
    /// Random number generator for resets.
    rng: Mutex<ChaCha8Rng>,
}

impl CountingTrainer {
    /// Creates a session with a fresh shuffled deck.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let deck = Deck::shuffled(&mut rng);
        Self::from_parts(deck, rng)
    }

    /// Creates a session that reveals from the given deck.
    ///
    /// The seed only feeds later [`reset`](Self::reset) reshuffles.
    #[must_use]
    pub fn with_deck(deck: Deck, seed: u64) -> Self {
        Self::from_parts(deck, ChaCha8Rng::seed_from_u64(seed))
    }

    fn from_parts(deck: Deck, rng: ChaCha8Rng) -> Self {
        Self {
            deck: Mutex::new(deck),
            revealed: Mutex::new(Vec::new()),
            running_count: Mutex::new(0),
            feedback: Mutex::new(None),
            rng: Mutex::new(rng),
        }
    }

    /// Starts over: fresh shuffled deck, no revealed cards, count zero,
    /// feedback cleared.
    pub fn reset(&self) {
        let mut rng = self.rng.lock();
        let deck = Deck::shuffled(&mut rng);
        drop(rng);

        *self.deck.lock() = deck;
        self.revealed.lock().clear();
        *self.running_count.lock() = 0;
        *self.feedback.lock() = None;
    }

    /// Reveals the next card and folds its Hi-Lo weight into the running
    /// count.
    ///
    /// Returns the revealed card, or `None` when the deck is empty (the
    /// reveal is a no-op).
    pub fn reveal_next(&self) -> Option<Card> {
        let card = self.deck.lock().deal()?;

        self.revealed.lock().push(card);
        *self.running_count.lock() += hilo_weight(card.rank);

        Some(card)
    }

    /// Checks a guess at the running count.
    ///
    /// Non-integer input yields [`GuessFeedback::Invalid`]; a mismatch
    /// hints at the direction of the true count. The feedback is stored
    /// and also returned.
    pub fn submit_guess(&self, text: &str) -> GuessFeedback {
        let feedback = text.trim().parse::<i32>().map_or(
            GuessFeedback::Invalid,
            |guess| {
                let count = *self.running_count.lock();
                if guess == count {
                    GuessFeedback::Correct
                } else if count > guess {
                    GuessFeedback::TryHigher
                } else {
                    GuessFeedback::TryLower
                }
            },
        );

        *self.feedback.lock() = Some(feedback);
        feedback
    }

    /// Returns the Hi-Lo running count over the revealed cards.
    #[must_use]
    pub fn running_count(&self) -> i32 {
        *self.running_count.lock()
    }

    /// Returns the cards revealed so far, in reveal order.
    #[must_use]
    pub fn revealed_cards(&self) -> Vec<Card> {
        self.revealed.lock().clone()
    }

    /// Returns the feedback from the most recent guess, if any.
    #[must_use]
    pub fn feedback(&self) -> Option<GuessFeedback> {
        *self.feedback.lock()
    }

    /// Returns whether every card has been revealed.
    #[must_use]
    pub fn deck_is_empty(&self) -> bool {
        self.deck.lock().is_empty()
    }
}
