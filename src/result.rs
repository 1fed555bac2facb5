//! Settlement report types.

use alloc::vec::Vec;

use crate::card::Card;

/// Result of a single hand after settlement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HandOutcome {
    /// The hand beat the dealer and was paid 1:1.
    Win,
    /// The hand lost its bet.
    Lose,
    /// Push: the stake was returned.
    Tie,
}

/// Settlement of one hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HandResult {
    /// The hand index (for split hands).
    pub hand_index: usize,
    /// The outcome of the hand.
    pub outcome: HandOutcome,
    /// The bet riding on the hand.
    pub bet: u64,
    /// Money credited back to the seat for this hand.
    pub payout: u64,
    /// The hand's final score.
    pub score: u16,
}

/// Settlement of one seat.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeatResult {
    /// The seat index.
    pub seat: usize,
    /// Results for each hand, in hand order.
    pub hands: Vec<HandResult>,
    /// Insurance bet (0 if none was taken).
    pub insurance_bet: u64,
    /// Insurance payout (0 unless the dealer had a natural).
    pub insurance_payout: u64,
    /// Total credited to the seat's bankroll at settlement.
    pub payout: u64,
    /// Round profit or loss: payout minus everything staked this round.
    pub net: i64,
}

impl SeatResult {
    /// Total staked by the seat this round, hands and insurance.
    #[must_use]
    pub fn staked(&self) -> u64 {
        self.hands.iter().map(|hand| hand.bet).sum::<u64>() + self.insurance_bet
    }
}

/// Everything that happened at settlement.
///
/// The report records mutations already applied to the bankrolls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettlementReport {
    /// The dealer's final hand.
    pub dealer_hand: Vec<Card>,
    /// The dealer's final score.
    pub dealer_score: u16,
    /// Whether the dealer busted.
    pub dealer_bust: bool,
    /// Whether the dealer had a natural.
    pub dealer_natural: bool,
    /// Results for every seat, by seat index.
    pub seats: Vec<SeatResult>,
    /// Change applied to the dealer's bankroll.
    pub dealer_delta: i64,
    /// Cards the dealer needed but the shoe could not supply.
    pub cards_missing: usize,
}

impl SettlementReport {
    /// Returns the result for a seat.
    #[must_use]
    pub fn seat(&self, seat: usize) -> Option<&SeatResult> {
        self.seats.iter().find(|result| result.seat == seat)
    }

    /// Returns whether the round was cut short by an empty shoe.
    #[must_use]
    pub const fn ended_early(&self) -> bool {
        self.cards_missing > 0
    }
}
