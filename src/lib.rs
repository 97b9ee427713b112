//! A blackjack rules engine with optional `no_std` support.
//!
//! The crate provides the pure pieces of the game (deck, hand valuation,
//! dealer policy, outcome resolution), three round state machines for
//! local play ([`SoloRound`], [`TwoPlayerRound`], [`HeadToHeadRound`]),
//! and a Hi-Lo [`CountingTrainer`]. Front ends forward user intents into
//! a round and re-read its observable state to render; no rendering
//! concerns live here.
//!
//! # Example
//!
//! ```no_run
//! use twentyone::SoloRound;
//!
//! let round = SoloRound::new(42);
//! let _ = round.stand();
//! assert!(round.is_resolved());
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod dealer;
pub mod deck;
pub mod error;
pub mod hand;
pub mod result;
pub mod round;
mod sync;
pub mod trainer;

// Re-export main types
pub use card::{Card, Color, DECK_SIZE, Rank, Suit};
pub use dealer::{dealer_play, dealer_should_draw};
pub use deck::Deck;
pub use error::ActionError;
pub use hand::{Hand, hand_value, is_blackjack, is_busted};
pub use result::{Outcome, resolve_outcome};
pub use round::{HeadToHeadPhase, HeadToHeadRound, Seat, SoloRound, TwoPlayerPhase, TwoPlayerRound};
pub use trainer::{CountingTrainer, GuessFeedback, hilo_weight};
