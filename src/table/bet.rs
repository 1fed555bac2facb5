use crate::error::{BetError, InsuranceError};
use crate::rules::Rules;

use super::{RoundState, Table};

impl<R: Rules> Table<R> {
    /// Places the initial bet for a seat and deals its hand.
    ///
    /// The bet must lie within the table limits and the seat's bankroll. On
    /// success the amount leaves the bankroll and the rule set's initial
    /// cards are dealt into the seat's first hand.
    ///
    /// # Errors
    ///
    /// Returns an error if betting is closed, the seat cannot be found, the
    /// seat already bet this round, the amount is out of bounds or
    /// unaffordable, or the shoe cannot cover the initial cards. Nothing
    /// changes in any of these cases.
    pub fn place_initial_bet(&mut self, seat: usize, amount: u64) -> Result<(), BetError> {
        if self.state != RoundState::RoundStarted {
            return Err(BetError::InvalidState);
        }

        let seat = self.seats.get_mut(seat).ok_or(BetError::SeatNotFound)?;
        seat.place_initial_bet(amount, &self.rules, &mut self.deck)
    }

    /// Places an insurance bet of half the seat's initial bet.
    ///
    /// Insurance is only offered while the dealer's visible card is an Ace.
    /// Returns the amount staked.
    ///
    /// # Errors
    ///
    /// Returns an error if side bets are closed, the seat cannot be found,
    /// the dealer does not show an Ace, the seat has no initial bet or
    /// already insured, or the seat cannot afford it.
    pub fn place_insurance(&mut self, seat: usize) -> Result<u64, InsuranceError> {
        if self.state != RoundState::RoundStarted {
            return Err(InsuranceError::InvalidState);
        }
        if !self.dealer_hand.up_card().is_some_and(|card| card.is_ace()) {
            return Err(InsuranceError::NotOffered);
        }

        self.seats
            .get_mut(seat)
            .ok_or(InsuranceError::SeatNotFound)?
            .place_insurance()
    }
}
