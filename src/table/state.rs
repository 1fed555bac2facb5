//! Round state and player action types.

/// Round lifecycle of a table.
///
/// [`DealerPlaying`](Self::DealerPlaying) and [`Settled`](Self::Settled)
/// only exist inside [`Table::finish_round`](crate::Table::finish_round),
/// which returns in [`Idle`](Self::Idle); callers never observe them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundState {
    /// No round in progress. Seats may join.
    Idle,
    /// The dealer's visible card is out; bets and insurance are accepted.
    RoundStarted,
    /// Betting is closed and players are acting on their hands.
    HandsInPlay,
    /// The dealer is drawing to the stop threshold. Internal to settlement.
    DealerPlaying,
    /// Payouts are being applied. Internal to settlement.
    Settled,
}

impl RoundState {
    /// Returns whether a round is open for bets or actions.
    #[must_use]
    pub const fn is_open(self) -> bool {
        matches!(self, Self::RoundStarted | Self::HandsInPlay)
    }
}

/// A player action on one hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    /// Keep the hand as it is.
    Stand,
    /// Draw one card.
    Hit,
    /// Double the bet and draw exactly one card.
    Double,
    /// Split a pair into two hands, each with its own bet.
    Split,
}
