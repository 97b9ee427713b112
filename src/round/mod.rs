//! Round state machines for the three play modes.
//!
//! Each mode owns its deck and hands, accepts hit/stand intents through
//! `&self` methods, and exposes the state a front end re-reads after every
//! action. Every `new_round` discards the previous deck entirely and
//! redeals from a fresh shuffled 52-card deck; used cards never carry over
//! between rounds.

use crate::deck::Deck;
use crate::hand::Hand;

mod head_to_head;
mod solo;
pub mod state;
mod two_player;

pub use head_to_head::HeadToHeadRound;
pub use solo::SoloRound;
pub use state::{HeadToHeadPhase, TwoPlayerPhase};
pub use two_player::TwoPlayerRound;

/// A player seat in [`TwoPlayerRound`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Seat {
    /// First seat; acts first every round.
    One,
    /// Second seat; acts after seat one finishes.
    Two,
}

impl Seat {
    /// Both seats, in acting order.
    pub const ALL: [Self; 2] = [Self::One, Self::Two];

    pub(crate) const fn index(self) -> usize {
        match self {
            Self::One => 0,
            Self::Two => 1,
        }
    }
}

/// Deals one card into a hand; silently does nothing on an empty deck.
fn deal_into(deck: &mut Deck, hand: &mut Hand) {
    if let Some(card) = deck.deal() {
        hand.add_card(card);
    }
}
