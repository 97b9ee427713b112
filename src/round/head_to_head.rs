//! Manual head-to-head play: one player against a human-driven dealer.

extern crate alloc;

use alloc::vec::Vec;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::card::Card;
use crate::deck::Deck;
use crate::error::ActionError;
use crate::hand::Hand;
use crate::result::{Outcome, resolve_outcome};
use crate::sync::Mutex;

use super::deal_into;
use super::state::HeadToHeadPhase;

/// A head-to-head round where the dealer side is played manually.
///
/// The player acts first; standing passes the turn to the dealer rather
/// than auto-playing it. Either side busting ends the round at once; only
/// when both sides have stood are the hands compared.
pub struct HeadToHeadRound {
    /// Cards remaining this round.
    pub deck: Mutex<Deck>,
    /// The player's hand.
    player: Mutex<Hand>,
    /// The dealer's hand, hole card included.
    dealer: Mutex<Hand>,
    /// Settled result, `None` while the round is in progress.
    outcome: Mutex<Option<Outcome>>,
    /// Whether the player has stood.
    player_stood: Mutex<bool>,
    /// Whether the dealer has stood.
    dealer_stood: Mutex<bool>,
    /// Whose turn it is.
    phase: Mutex<HeadToHeadPhase>,
    /// Random number generator for reshuffles.
    rng: Mutex<ChaCha8Rng>,
}

impl HeadToHeadRound {
    /// Creates a round from a fresh shuffled deck and deals the opening
    /// hands.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let deck = Deck::shuffled(&mut rng);
        Self::from_parts(deck, rng)
    }

    /// Creates a round that deals from the given deck.
    ///
    /// The seed only feeds later [`new_round`](Self::new_round) reshuffles.
    #[must_use]
    pub fn with_deck(deck: Deck, seed: u64) -> Self {
        Self::from_parts(deck, ChaCha8Rng::seed_from_u64(seed))
    }

    fn from_parts(mut deck: Deck, rng: ChaCha8Rng) -> Self {
        let (player, dealer) = Self::opening_deal(&mut deck);

        Self {
            deck: Mutex::new(deck),
            player: Mutex::new(player),
            dealer: Mutex::new(dealer),
            outcome: Mutex::new(None),
            player_stood: Mutex::new(false),
            dealer_stood: Mutex::new(false),
            phase: Mutex::new(HeadToHeadPhase::Player),
            rng: Mutex::new(rng),
        }
    }

    /// Deals player, dealer, player, dealer.
    fn opening_deal(deck: &mut Deck) -> (Hand, Hand) {
        let mut player = Hand::new();
        let mut dealer = Hand::new();

        for _ in 0..2 {
            deal_into(deck, &mut player);
            deal_into(deck, &mut dealer);
        }

        (player, dealer)
    }

    /// Discards all round state and redeals from a fresh shuffled deck.
    pub fn new_round(&self) {
        let mut rng = self.rng.lock();
        let mut deck = Deck::shuffled(&mut rng);
        drop(rng);

        let (player, dealer) = Self::opening_deal(&mut deck);

        *self.deck.lock() = deck;
        *self.player.lock() = player;
        *self.dealer.lock() = dealer;
        *self.outcome.lock() = None;
        *self.player_stood.lock() = false;
        *self.dealer_stood.lock() = false;
        *self.phase.lock() = HeadToHeadPhase::Player;
    }

    fn ensure_phase(&self, expected: HeadToHeadPhase) -> Result<(), ActionError> {
        match *self.phase.lock() {
            HeadToHeadPhase::Resolved => Err(ActionError::RoundOver),
            phase if phase == expected => Ok(()),
            _ => Err(ActionError::OutOfTurn),
        }
    }

    /// Player action: hit.
    ///
    /// Returns the drawn card, or `Ok(None)` when the deck is empty (the
    /// hit is a no-op). Busting ends the round as player-bust.
    ///
    /// # Errors
    ///
    /// Returns an error if the round is resolved or it is not the player's
    /// turn.
    pub fn player_hit(&self) -> Result<Option<Card>, ActionError> {
        self.ensure_phase(HeadToHeadPhase::Player)?;

        let Some(card) = self.deck.lock().deal() else {
            return Ok(None);
        };

        let mut player = self.player.lock();
        player.add_card(card);
        let busted = player.is_busted();
        drop(player);

        if busted {
            *self.outcome.lock() = Some(Outcome::PlayerBust);
            *self.phase.lock() = HeadToHeadPhase::Resolved;
        }

        Ok(Some(card))
    }

    /// Player action: stand.
    ///
    /// Passes the turn to the dealer; the dealer does not auto-play.
    ///
    /// # Errors
    ///
    /// Returns an error if the round is resolved or it is not the player's
    /// turn.
    pub fn player_stand(&self) -> Result<(), ActionError> {
        self.ensure_phase(HeadToHeadPhase::Player)?;

        *self.player_stood.lock() = true;
        *self.phase.lock() = HeadToHeadPhase::Dealer;

        Ok(())
    }

    /// Dealer action: hit.
    ///
    /// Returns the drawn card, or `Ok(None)` when the deck is empty (the
    /// hit is a no-op). Busting ends the round as dealer-bust.
    ///
    /// # Errors
    ///
    /// Returns an error if the round is resolved or it is not the dealer's
    /// turn.
    pub fn dealer_hit(&self) -> Result<Option<Card>, ActionError> {
        self.ensure_phase(HeadToHeadPhase::Dealer)?;

        let Some(card) = self.deck.lock().deal() else {
            return Ok(None);
        };

        let mut dealer = self.dealer.lock();
        dealer.add_card(card);
        let busted = dealer.is_busted();
        drop(dealer);

        if busted {
            *self.outcome.lock() = Some(Outcome::DealerBust);
            *self.phase.lock() = HeadToHeadPhase::Resolved;
        }

        Ok(Some(card))
    }

    /// Dealer action: stand.
    ///
    /// Both sides have now stood, so the hands are compared and the round
    /// settles.
    ///
    /// # Errors
    ///
    /// Returns an error if the round is resolved or it is not the dealer's
    /// turn.
    pub fn dealer_stand(&self) -> Result<(), ActionError> {
        self.ensure_phase(HeadToHeadPhase::Dealer)?;

        *self.dealer_stood.lock() = true;

        let player = self.player.lock();
        let dealer = self.dealer.lock();
        *self.outcome.lock() = Some(resolve_outcome(player.cards(), dealer.cards()));
        drop(player);
        drop(dealer);

        *self.phase.lock() = HeadToHeadPhase::Resolved;

        Ok(())
    }

    /// Returns the player's cards.
    #[must_use]
    pub fn player_cards(&self) -> Vec<Card> {
        self.player.lock().cards().to_vec()
    }

    /// Returns the dealer's cards, hole card included.
    #[must_use]
    pub fn dealer_cards(&self) -> Vec<Card> {
        self.dealer.lock().cards().to_vec()
    }

    /// Returns the settled outcome, or `None` while the round is in
    /// progress.
    #[must_use]
    pub fn outcome(&self) -> Option<Outcome> {
        *self.outcome.lock()
    }

    /// Returns whether the player has stood.
    #[must_use]
    pub fn player_has_stood(&self) -> bool {
        *self.player_stood.lock()
    }

    /// Returns whether the dealer has stood.
    #[must_use]
    pub fn dealer_has_stood(&self) -> bool {
        *self.dealer_stood.lock()
    }

    /// Returns the current turn phase.
    #[must_use]
    pub fn phase(&self) -> HeadToHeadPhase {
        *self.phase.lock()
    }

    /// Returns whether the dealer's second card should stay concealed.
    ///
    /// Hidden only while the round is unresolved and the turn has not yet
    /// passed to the dealer.
    #[must_use]
    pub fn is_hole_hidden(&self) -> bool {
        *self.phase.lock() == HeadToHeadPhase::Player
    }

    /// Returns whether the deck is out of cards.
    #[must_use]
    pub fn deck_is_empty(&self) -> bool {
        self.deck.lock().is_empty()
    }
}
