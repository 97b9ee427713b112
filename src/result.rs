//! Outcome classification for a finished hand pair.

use core::fmt;

use crate::card::Card;
use crate::hand::hand_value;

/// Terminal classification of a player hand against the dealer's.
///
/// A round in progress has no outcome yet; round state represents that as
/// `Option<Outcome>` being `None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Player went over 21.
    PlayerBust,
    /// Dealer went over 21 while the player did not.
    DealerBust,
    /// Player's total beats the dealer's.
    PlayerWins,
    /// Dealer's total beats the player's.
    DealerWins,
    /// Equal totals; nobody wins.
    Push,
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::PlayerBust => "player busts",
            Self::DealerBust => "dealer busts",
            Self::PlayerWins => "player wins",
            Self::DealerWins => "dealer wins",
            Self::Push => "push",
        };
        f.write_str(label)
    }
}

/// Compares two finalized hands into an outcome.
///
/// Player bust dominates regardless of the dealer's total, then dealer
/// bust, then the higher total wins; equal totals push. Hole-card
/// concealment has no bearing here: this is only called once both sides
/// are final.
#[must_use]
pub fn resolve_outcome(player: &[Card], dealer: &[Card]) -> Outcome {
    let player_value = hand_value(player);
    let dealer_value = hand_value(dealer);

    if player_value > 21 {
        Outcome::PlayerBust
    } else if dealer_value > 21 {
        Outcome::DealerBust
    } else if player_value > dealer_value {
        Outcome::PlayerWins
    } else if player_value < dealer_value {
        Outcome::DealerWins
    } else {
        Outcome::Push
    }
}
