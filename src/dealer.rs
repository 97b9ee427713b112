//! Dealer drawing policy.

extern crate alloc;

use alloc::vec::Vec;

use crate::card::Card;
use crate::deck::Deck;
use crate::hand::{Hand, hand_value};

/// Returns whether the dealer must draw another card.
///
/// The dealer hits every total below 17 and stands on every 17, hard or
/// soft.
#[must_use]
pub fn dealer_should_draw(cards: &[Card]) -> bool {
    hand_value(cards) < 17
}

/// Plays out the dealer's hand.
///
/// Draws while [`dealer_should_draw`] holds and the deck has cards;
/// terminates on reaching 17 or on deck exhaustion. Returns the cards
/// drawn.
pub fn dealer_play(hand: &mut Hand, deck: &mut Deck) -> Vec<Card> {
    let mut drawn = Vec::new();

    while dealer_should_draw(hand.cards()) {
        let Some(card) = deck.deal() else {
            break;
        };
        hand.add_card(card);
        drawn.push(card);
    }

    drawn
}
