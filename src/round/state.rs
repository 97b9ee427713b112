//! Per-mode turn phases.

/// Turn phase of a [`TwoPlayerRound`](super::TwoPlayerRound).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TwoPlayerPhase {
    /// Seat one is acting.
    PlayerOne,
    /// Seat two is acting.
    PlayerTwo,
    /// All seats are settled; dealer hand is final.
    Resolved,
}

/// Turn phase of a [`HeadToHeadRound`](super::HeadToHeadRound).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeadToHeadPhase {
    /// The player is acting.
    Player,
    /// The dealer side is acting.
    Dealer,
    /// The round is settled.
    Resolved,
}
