//! Round state machine tests for all three play modes.

use std::collections::HashSet;

use twentyone::{
    ActionError, Card, DECK_SIZE, Deck, HeadToHeadPhase, HeadToHeadRound, Outcome, Rank, Seat,
    SoloRound, Suit, TwoPlayerPhase, TwoPlayerRound,
};

const fn card(suit: Suit, rank: Rank) -> Card {
    Card::new(suit, rank)
}

/// Builds a deck dealing the listed cards in order.
fn stacked(draws: &[Card]) -> Deck {
    let mut cards = draws.to_vec();
    cards.reverse();
    Deck::from(cards)
}

#[test]
fn solo_stand_plays_dealer_and_resolves() {
    // Opening deal order: player, dealer, player, dealer.
    let round = SoloRound::with_deck(
        stacked(&[
            card(Suit::Spades, Rank::Seven),
            card(Suit::Clubs, Rank::King),
            card(Suit::Diamonds, Rank::Nine),
            card(Suit::Diamonds, Rank::Eight),
        ]),
        0,
    );

    assert_eq!(
        round.player_cards(),
        vec![card(Suit::Spades, Rank::Seven), card(Suit::Diamonds, Rank::Nine)]
    );
    assert!(round.is_hole_hidden());
    assert!(!round.has_stood());
    assert_eq!(round.outcome(), None);

    round.stand().unwrap();

    // Dealer already holds 18 and draws nothing; 16 vs 18.
    assert!(!round.is_hole_hidden());
    assert!(round.has_stood());
    assert_eq!(round.dealer_cards().len(), 2);
    assert_eq!(round.outcome(), Some(Outcome::DealerWins));
}

#[test]
fn solo_dealer_draws_while_under_17() {
    let round = SoloRound::with_deck(
        stacked(&[
            card(Suit::Hearts, Rank::Ten),
            card(Suit::Clubs, Rank::Six),
            card(Suit::Diamonds, Rank::Ten),
            card(Suit::Diamonds, Rank::Six),
            card(Suit::Spades, Rank::Five), // dealer draw: 12 -> 17
        ]),
        0,
    );

    round.stand().unwrap();

    assert_eq!(round.dealer_cards().len(), 3);
    assert_eq!(round.outcome(), Some(Outcome::PlayerWins));
}

#[test]
fn solo_bust_settles_and_reveals_immediately() {
    let round = SoloRound::with_deck(
        stacked(&[
            card(Suit::Hearts, Rank::Ten),
            card(Suit::Clubs, Rank::Nine),
            card(Suit::Diamonds, Rank::Six),
            card(Suit::Spades, Rank::Nine),
            card(Suit::Spades, Rank::King), // player hit: 16 -> 26
        ]),
        0,
    );

    let drawn = round.hit().unwrap();
    assert_eq!(drawn, Some(card(Suit::Spades, Rank::King)));
    assert_eq!(round.outcome(), Some(Outcome::PlayerBust));
    assert!(round.has_stood());
    assert!(!round.is_hole_hidden());

    // The round is settled; further actions are rejected without touching state.
    assert_eq!(round.hit().unwrap_err(), ActionError::RoundOver);
    assert_eq!(round.stand().unwrap_err(), ActionError::RoundOver);
    assert_eq!(round.player_cards().len(), 3);
}

#[test]
fn solo_hit_on_empty_deck_is_a_noop() {
    let round = SoloRound::with_deck(
        stacked(&[
            card(Suit::Hearts, Rank::Two),
            card(Suit::Clubs, Rank::Nine),
            card(Suit::Diamonds, Rank::Three),
            card(Suit::Spades, Rank::Nine),
        ]),
        0,
    );

    assert!(round.deck_is_empty());
    assert_eq!(round.hit().unwrap(), None);
    assert_eq!(round.player_cards().len(), 2);
    assert_eq!(round.outcome(), None);
}

#[test]
fn solo_new_round_discards_all_prior_state() {
    let round = SoloRound::new(7);
    let _ = round.hit();
    let _ = round.stand();

    for _ in 0..2 {
        round.new_round();

        let player = round.player_cards();
        let dealer = round.dealer_cards();
        assert_eq!(player.len(), 2);
        assert_eq!(dealer.len(), 2);
        assert_eq!(round.outcome(), None);
        assert!(!round.has_stood());
        assert!(round.is_hole_hidden());

        // Deck plus hands account for exactly the 52 unique cards.
        let deck = round.deck.lock().cards().to_vec();
        assert_eq!(deck.len(), DECK_SIZE - 4);
        let all: HashSet<Card> = deck
            .iter()
            .chain(player.iter())
            .chain(dealer.iter())
            .copied()
            .collect();
        assert_eq!(all.len(), DECK_SIZE);
    }
}

#[test]
fn two_player_bust_advances_without_touching_dealer() {
    // Opening deal order: p1, p2, dealer, p1, p2, dealer.
    let round = TwoPlayerRound::with_deck(
        stacked(&[
            card(Suit::Spades, Rank::Ten),
            card(Suit::Hearts, Rank::Nine),
            card(Suit::Clubs, Rank::Five),
            card(Suit::Spades, Rank::Six),
            card(Suit::Diamonds, Rank::Nine),
            card(Suit::Clubs, Rank::Ten),
            card(Suit::Clubs, Rank::Eight),  // p1 hit: 16 -> 24
            card(Suit::Hearts, Rank::Two),   // dealer draw: 15 -> 17
        ]),
        0,
    );

    assert_eq!(round.phase(), TwoPlayerPhase::PlayerOne);

    round.hit(Seat::One).unwrap();
    assert_eq!(round.outcome(Seat::One), Some(Outcome::PlayerBust));
    assert!(round.has_stood(Seat::One));
    assert_eq!(round.phase(), TwoPlayerPhase::PlayerTwo);
    assert_eq!(round.dealer_cards().len(), 2);
    assert!(round.is_hole_hidden());

    round.stand(Seat::Two).unwrap();

    // Dealer plays once seat two finishes; seat one keeps its bust.
    assert_eq!(round.phase(), TwoPlayerPhase::Resolved);
    assert!(!round.is_hole_hidden());
    assert_eq!(round.dealer_cards().len(), 3);
    assert_eq!(round.outcome(Seat::One), Some(Outcome::PlayerBust));
    assert_eq!(round.outcome(Seat::Two), Some(Outcome::PlayerWins));
}

#[test]
fn two_player_turn_order_is_enforced() {
    let round = TwoPlayerRound::new(3);

    assert_eq!(round.hit(Seat::Two).unwrap_err(), ActionError::OutOfTurn);
    assert_eq!(round.stand(Seat::Two).unwrap_err(), ActionError::OutOfTurn);

    round.stand(Seat::One).unwrap();
    assert_eq!(round.hit(Seat::One).unwrap_err(), ActionError::OutOfTurn);

    round.stand(Seat::Two).unwrap();
    assert_eq!(round.phase(), TwoPlayerPhase::Resolved);
    assert_eq!(round.hit(Seat::One).unwrap_err(), ActionError::RoundOver);
    assert_eq!(round.stand(Seat::Two).unwrap_err(), ActionError::RoundOver);
}

#[test]
fn two_player_double_bust_skips_dealer() {
    let round = TwoPlayerRound::with_deck(
        stacked(&[
            card(Suit::Spades, Rank::Ten),
            card(Suit::Hearts, Rank::Ten),
            card(Suit::Clubs, Rank::Two),
            card(Suit::Spades, Rank::Six),
            card(Suit::Hearts, Rank::Six),
            card(Suit::Diamonds, Rank::Two),
            card(Suit::Spades, Rank::Eight), // p1 hit: 16 -> 24
            card(Suit::Hearts, Rank::Jack),  // p2 hit: 16 -> 26
            card(Suit::Diamonds, Rank::King), // must stay in the deck
        ]),
        0,
    );

    round.hit(Seat::One).unwrap();
    round.hit(Seat::Two).unwrap();

    assert_eq!(round.phase(), TwoPlayerPhase::Resolved);
    assert_eq!(round.outcome(Seat::One), Some(Outcome::PlayerBust));
    assert_eq!(round.outcome(Seat::Two), Some(Outcome::PlayerBust));

    // Dealer never played: two cards, no outcome of its own, no draw taken.
    assert_eq!(round.dealer_cards().len(), 2);
    assert_eq!(round.deck.lock().len(), 1);
}

#[test]
fn two_player_new_round_resets_both_seats() {
    let round = TwoPlayerRound::new(11);
    round.stand(Seat::One).unwrap();
    round.stand(Seat::Two).unwrap();

    round.new_round();

    assert_eq!(round.phase(), TwoPlayerPhase::PlayerOne);
    for seat in Seat::ALL {
        assert_eq!(round.seat_cards(seat).len(), 2);
        assert_eq!(round.outcome(seat), None);
        assert!(!round.has_stood(seat));
    }
    assert_eq!(round.dealer_cards().len(), 2);
    assert_eq!(round.deck.lock().len(), DECK_SIZE - 6);
}

#[test]
fn head_to_head_stand_passes_turn_without_auto_play() {
    // Opening deal order: player, dealer, player, dealer.
    let round = HeadToHeadRound::with_deck(
        stacked(&[
            card(Suit::Spades, Rank::Ten),
            card(Suit::Clubs, Rank::Five),
            card(Suit::Hearts, Rank::Seven),
            card(Suit::Diamonds, Rank::Nine),
            card(Suit::Spades, Rank::Three), // dealer hit: 14 -> 17
        ]),
        0,
    );

    assert_eq!(round.phase(), HeadToHeadPhase::Player);
    assert!(round.is_hole_hidden());

    round.player_stand().unwrap();

    // The turn passes; the dealer hand is untouched but now visible.
    assert_eq!(round.phase(), HeadToHeadPhase::Dealer);
    assert!(round.player_has_stood());
    assert!(!round.is_hole_hidden());
    assert_eq!(round.dealer_cards().len(), 2);
    assert_eq!(round.outcome(), None);

    round.dealer_hit().unwrap();
    round.dealer_stand().unwrap();

    assert_eq!(round.phase(), HeadToHeadPhase::Resolved);
    assert_eq!(round.outcome(), Some(Outcome::Push));
}

#[test]
fn head_to_head_busts_are_terminal() {
    let player_bust = HeadToHeadRound::with_deck(
        stacked(&[
            card(Suit::Spades, Rank::Ten),
            card(Suit::Clubs, Rank::Five),
            card(Suit::Hearts, Rank::Seven),
            card(Suit::Diamonds, Rank::Nine),
            card(Suit::Spades, Rank::Queen), // player hit: 17 -> 27
        ]),
        0,
    );

    player_bust.player_hit().unwrap();
    assert_eq!(player_bust.outcome(), Some(Outcome::PlayerBust));
    assert_eq!(player_bust.phase(), HeadToHeadPhase::Resolved);
    assert!(!player_bust.is_hole_hidden());

    let dealer_bust = HeadToHeadRound::with_deck(
        stacked(&[
            card(Suit::Spades, Rank::Ten),
            card(Suit::Clubs, Rank::Five),
            card(Suit::Hearts, Rank::Seven),
            card(Suit::Diamonds, Rank::Nine),
            card(Suit::Spades, Rank::King), // dealer hit: 14 -> 24
        ]),
        0,
    );

    dealer_bust.player_stand().unwrap();
    dealer_bust.dealer_hit().unwrap();
    assert_eq!(dealer_bust.outcome(), Some(Outcome::DealerBust));
    assert_eq!(dealer_bust.phase(), HeadToHeadPhase::Resolved);
}

#[test]
fn head_to_head_turn_order_is_enforced() {
    let round = HeadToHeadRound::new(5);

    assert_eq!(round.dealer_hit().unwrap_err(), ActionError::OutOfTurn);
    assert_eq!(round.dealer_stand().unwrap_err(), ActionError::OutOfTurn);

    round.player_stand().unwrap();
    assert_eq!(round.player_hit().unwrap_err(), ActionError::OutOfTurn);
    assert_eq!(round.player_stand().unwrap_err(), ActionError::OutOfTurn);

    round.dealer_stand().unwrap();
    assert_eq!(round.player_hit().unwrap_err(), ActionError::RoundOver);
    assert_eq!(round.dealer_hit().unwrap_err(), ActionError::RoundOver);
}

#[test]
fn head_to_head_new_round_starts_with_player() {
    let round = HeadToHeadRound::new(13);
    round.player_stand().unwrap();
    round.dealer_stand().unwrap();

    round.new_round();

    assert_eq!(round.phase(), HeadToHeadPhase::Player);
    assert_eq!(round.outcome(), None);
    assert!(!round.player_has_stood());
    assert!(!round.dealer_has_stood());
    assert_eq!(round.player_cards().len(), 2);
    assert_eq!(round.dealer_cards().len(), 2);
    assert_eq!(round.deck.lock().len(), DECK_SIZE - 4);
}
