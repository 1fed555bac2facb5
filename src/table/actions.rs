use log::debug;

use crate::card::Card;
use crate::error::ActionError;
use crate::rules::Rules;

use super::{Action, RoundState, Table};

impl<R: Rules> Table<R> {
    /// Applies a player action to one of a seat's hands.
    ///
    /// - [`Action::Stand`] changes nothing.
    /// - [`Action::Hit`] draws one card into the hand.
    /// - [`Action::Double`] moves another bet's worth from the bankroll onto
    ///   the hand and draws exactly one card.
    /// - [`Action::Split`] moves the second card of a pair into a new hand
    ///   appended to the seat, stakes the same bet on it and draws one card
    ///   into each of the two hands.
    ///
    /// The first successful action closes betting for the round.
    ///
    /// # Errors
    ///
    /// Returns an error if no round is open, the seat or hand cannot be
    /// found, the hand does not allow the action, the seat lacks funds, the
    /// split limit is reached, or the shoe cannot cover the cards the action
    /// needs. Nothing changes in any of these cases.
    pub fn apply_action(
        &mut self,
        seat: usize,
        hand_index: usize,
        action: Action,
    ) -> Result<(), ActionError> {
        if !self.state.is_open() {
            return Err(ActionError::InvalidState);
        }

        let max_splits = self.rules.max_splits();
        let player = self.seats.get_mut(seat).ok_or(ActionError::SeatNotFound)?;
        player.apply_action(hand_index, action, max_splits, &mut self.deck)?;
        debug!("seat {seat} hand {hand_index}: {action:?}");

        self.close_betting();
        Ok(())
    }

    /// Deals one card straight into a seat's hand.
    ///
    /// Returns the card dealt.
    ///
    /// # Errors
    ///
    /// Returns an error if no round is open, the seat or hand cannot be
    /// found, or the shoe is empty.
    pub fn deal_card(&mut self, seat: usize, hand_index: usize) -> Result<Card, ActionError> {
        if !self.state.is_open() {
            return Err(ActionError::InvalidState);
        }

        let player = self.seats.get_mut(seat).ok_or(ActionError::SeatNotFound)?;
        let card = player.deal_card(hand_index, &mut self.deck)?;

        self.close_betting();
        Ok(card)
    }

    fn close_betting(&mut self) {
        if self.state == RoundState::RoundStarted {
            debug!("betting closed");
            self.state = RoundState::HandsInPlay;
        }
    }
}
