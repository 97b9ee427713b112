//! Two local players against a shared dealer.

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

use super::state::TwoPlayerPhase;
use super::{Seat, deal_into};

/// A round for two local players sharing one dealer.
///
/// Seat one acts to completion before seat two begins; the dealer plays
/// once after both seats finish, and each unresolved seat is then settled
/// independently against the same final dealer hand. If both seats bust,
/// the dealer never plays and keeps its two-card hand with no outcome of
/// its own (outcomes are tracked per player seat only).
pub struct TwoPlayerRound {
    /// Cards remaining this round.
    pub deck: Mutex<Deck>,
    /// The two player hands, indexed by seat.
    seats: Mutex<[Hand; 2]>,
    /// The shared dealer hand, hole card included.
    dealer: Mutex<Hand>,
    /// Per-seat settled result, `None` while a seat is unresolved.
    outcomes: Mutex<[Option<Outcome>; 2]>,
    /// Per-seat stood flag (forced on bust).
    stood: Mutex<[bool; 2]>,
    /// Whose turn it is.
    phase: Mutex<TwoPlayerPhase>,
    /// Random number generator for reshuffles.
    rng: Mutex<ChaCha8Rng>,
}

impl TwoPlayerRound {
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
        let (seats, dealer) = Self::opening_deal(&mut deck);

        Self {
            deck: Mutex::new(deck),
            seats: Mutex::new(seats),
            dealer: Mutex::new(dealer),
            outcomes: Mutex::new([None, None]),
            stood: Mutex::new([false, false]),
            phase: Mutex::new(TwoPlayerPhase::PlayerOne),
            rng: Mutex::new(rng),
        }
    }

    /// Deals two passes of player one, player two, dealer.
    fn opening_deal(deck: &mut Deck) -> ([Hand; 2], Hand) {
        let mut seats = [Hand::new(), Hand::new()];
        let mut dealer = Hand::new();

        for _ in 0..2 {
            for hand in &mut seats {
                deal_into(deck, hand);
            }
            deal_into(deck, &mut dealer);
        }

        (seats, dealer)
    }

    /// Discards all round state and redeals from a fresh shuffled deck.
    pub fn new_round(&self) {
        let mut rng = self.rng.lock();
        let mut deck = Deck::shuffled(&mut rng);
        drop(rng);

        let (seats, dealer) = Self::opening_deal(&mut deck);

        *self.deck.lock() = deck;
        *self.seats.lock() = seats;
        *self.dealer.lock() = dealer;
        *self.outcomes.lock() = [None, None];
        *self.stood.lock() = [false, false];
        *self.phase.lock() = TwoPlayerPhase::PlayerOne;
    }

    fn ensure_turn(&self, seat: Seat) -> Result<(), ActionError> {
        let expected = match seat {
            Seat::One => TwoPlayerPhase::PlayerOne,
            Seat::Two => TwoPlayerPhase::PlayerTwo,
        };

        match *self.phase.lock() {
            TwoPlayerPhase::Resolved => Err(ActionError::RoundOver),
            phase if phase == expected => Ok(()),
            _ => Err(ActionError::OutOfTurn),
        }
    }

    /// Seat action: hit.
    ///
    /// Returns the drawn card, or `Ok(None)` when the deck is empty (the
    /// hit is a no-op). Busting finalizes the seat as player-bust and
    /// advances the turn immediately.
    ///
    /// # Errors
    ///
    /// Returns an error if the round is resolved or it is not this seat's
    /// turn.
    pub fn hit(&self, seat: Seat) -> Result<Option<Card>, ActionError> {
        self.ensure_turn(seat)?;

        let Some(card) = self.deck.lock().deal() else {
            return Ok(None);
        };

        let mut seats = self.seats.lock();
        let hand = &mut seats[seat.index()];
        hand.add_card(card);
        let busted = hand.is_busted();
        drop(seats);

        if busted {
            self.outcomes.lock()[seat.index()] = Some(Outcome::PlayerBust);
            self.stood.lock()[seat.index()] = true;
            self.advance_from(seat);
        }

        Ok(Some(card))
    }

    /// Seat action: stand.
    ///
    /// Finishes the seat's turn. When seat two finishes, the dealer plays
    /// (unless both seats busted) and every unresolved seat is settled.
    ///
    /// # Errors
    ///
    /// Returns an error if the round is resolved or it is not this seat's
    /// turn.
    pub fn stand(&self, seat: Seat) -> Result<(), ActionError> {
        self.ensure_turn(seat)?;

        self.stood.lock()[seat.index()] = true;
        self.advance_from(seat);

        Ok(())
    }

    fn advance_from(&self, seat: Seat) {
        match seat {
            Seat::One => *self.phase.lock() = TwoPlayerPhase::PlayerTwo,
            Seat::Two => self.settle(),
        }
    }

    /// Plays the dealer (if anyone is still live) and settles every
    /// unresolved seat against the final dealer hand. Busted seats keep
    /// their bust outcome.
    fn settle(&self) {
        let mut outcomes = self.outcomes.lock();
        let both_busted = outcomes.iter().all(Option::is_some);

        if !both_busted {
            let mut dealer = self.dealer.lock();
            let mut deck = self.deck.lock();
            dealer_play(&mut dealer, &mut deck);
            drop(deck);

            let seats = self.seats.lock();
            for (hand, outcome) in seats.iter().zip(outcomes.iter_mut()) {
                if outcome.is_none() {
                    *outcome = Some(resolve_outcome(hand.cards(), dealer.cards()));
                }
            }
        }
        drop(outcomes);

        *self.phase.lock() = TwoPlayerPhase::Resolved;
    }

    /// Returns the given seat's cards.
    #[must_use]
    pub fn seat_cards(&self, seat: Seat) -> Vec<Card> {
        self.seats.lock()[seat.index()].cards().to_vec()
    }

    /// Returns the dealer's cards, hole card included.
    #[must_use]
    pub fn dealer_cards(&self) -> Vec<Card> {
        self.dealer.lock().cards().to_vec()
    }

    /// Returns the given seat's settled outcome, or `None` while it is
    /// unresolved.
    #[must_use]
    pub fn outcome(&self, seat: Seat) -> Option<Outcome> {
        self.outcomes.lock()[seat.index()]
    }

    /// Returns whether the given seat has finished (stood or busted).
    #[must_use]
    pub fn has_stood(&self, seat: Seat) -> bool {
        self.stood.lock()[seat.index()]
    }

    /// Returns the current turn phase.
    #[must_use]
    pub fn phase(&self) -> TwoPlayerPhase {
        *self.phase.lock()
    }

    /// Returns whether the dealer's second card should stay concealed.
    ///
    /// Hidden until both seats have finished.
    #[must_use]
    pub fn is_hole_hidden(&self) -> bool {
        *self.phase.lock() != TwoPlayerPhase::Resolved
    }

    /// Returns whether the deck is out of cards.
    #[must_use]
    pub fn deck_is_empty(&self) -> bool {
        self.deck.lock().is_empty()
    }
}
