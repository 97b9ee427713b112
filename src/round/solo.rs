//! Single player against an auto-playing dealer.

extern crate alloc;

use alloc::vec::Vec;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::card::Card;
use crate::dealer::dealer_play;
use crate::deck::Deck;
use crate::error::ActionError;
use crate::hand::Hand;
use crate::result::{Outcome, resolve_outcome};
use crate::sync::Mutex;

use super::deal_into;

/// A solo round: one player against the house.
///
/// Standing triggers the dealer's full play-out and settles the round in
/// the same call; the player never drives the dealer separately.
///
/// # Example
///
/// ```no_run
/// use twentyone::SoloRound;
///
/// let round = SoloRound::new(42);
/// let _ = round.hit();
/// let _ = round.stand();
/// ```
pub struct SoloRound {
    /// Cards remaining this round.
    pub deck: Mutex<Deck>,
    /// The player's hand.
    player: Mutex<Hand>,
    /// The dealer's hand, hole card included.
    dealer: Mutex<Hand>,
    /// Settled result, `None` while the round is in progress.
    outcome: Mutex<Option<Outcome>>,
    /// Whether the player has stood (forced on bust).
    stood: Mutex<bool>,
    /// Random number generator for reshuffles.
    rng: Mutex<ChaCha8Rng>,
}

impl SoloRound {
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
            stood: Mutex::new(false),
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
        *self.stood.lock() = false;
    }

    /// Player action: hit.
    ///
    /// Returns the drawn card, or `Ok(None)` when the deck is empty (the
    /// hit is a no-op, not a failure). Busting settles the round
    /// immediately and reveals the hole card.
    ///
    /// # Errors
    ///
    /// Returns an error if the round is already resolved or the player has
    /// stood.
    pub fn hit(&self) -> Result<Option<Card>, ActionError> {
        if self.outcome.lock().is_some() || *self.stood.lock() {
            return Err(ActionError::RoundOver);
        }

        let Some(card) = self.deck.lock().deal() else {
            return Ok(None);
        };

        let mut player = self.player.lock();
        player.add_card(card);
        let busted = player.is_busted();
        drop(player);

        if busted {
            *self.outcome.lock() = Some(Outcome::PlayerBust);
            *self.stood.lock() = true;
        }

        Ok(Some(card))
    }

    /// Player action: stand.
    ///
    /// Marks the player as stood, plays out the dealer, and resolves the
    /// round, all in this one call.
    ///
    /// # Errors
    ///
    /// Returns an error if the round is already resolved.
    pub fn stand(&self) -> Result<(), ActionError> {
        if self.outcome.lock().is_some() {
            return Err(ActionError::RoundOver);
        }

        *self.stood.lock() = true;

        let mut dealer = self.dealer.lock();
        let mut deck = self.deck.lock();
        dealer_play(&mut dealer, &mut deck);
        drop(deck);

        let player = self.player.lock();
        *self.outcome.lock() = Some(resolve_outcome(player.cards(), dealer.cards()));

        Ok(())
    }

    /// Returns the player's cards.
    #[must_use]
    pub fn player_cards(&self) -> Vec<Card> {
        self.player.lock().cards().to_vec()
    }

    /// Returns the dealer's cards, hole card included.
    ///
    /// Check [`is_hole_hidden`](Self::is_hole_hidden) before showing the
    /// second card.
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
    pub fn has_stood(&self) -> bool {
        *self.stood.lock()
    }

    /// Returns whether the round has settled.
    #[must_use]
    pub fn is_resolved(&self) -> bool {
        self.outcome.lock().is_some()
    }

    /// Returns whether the dealer's second card should stay concealed.
    ///
    /// Hidden exactly while the round is unresolved and the player has not
    /// stood.
    #[must_use]
    pub fn is_hole_hidden(&self) -> bool {
        self.outcome.lock().is_none() && !*self.stood.lock()
    }

    /// Returns whether the deck is out of cards.
    #[must_use]
    pub fn deck_is_empty(&self) -> bool {
        self.deck.lock().is_empty()
    }
}
