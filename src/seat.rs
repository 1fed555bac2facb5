//! Per-seat bankroll, hands and bets.

use alloc::vec::Vec;

use log::debug;

use crate::card::Card;
use crate::deck::Deck;
use crate::error::{ActionError, BetError, InsuranceError};
use crate::hand::Hand;
use crate::rules::Rules;
use crate::table::Action;

/// A seat at the table.
///
/// Hands and their bets are stored together, so a seat always has exactly
/// one bet per hand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Seat {
    index: usize,
    bankroll: u64,
    hands: Vec<Hand>,
    initial_bet: u64,
    insurance: u64,
}

impl Seat {
    pub(crate) const fn new(index: usize, bankroll: u64) -> Self {
        Self {
            index,
            bankroll,
            hands: Vec::new(),
            initial_bet: 0,
            insurance: 0,
        }
    }

    /// Returns the seat index.
    #[must_use]
    pub const fn index(&self) -> usize {
        self.index
    }

    /// Returns the money not currently on the table.
    #[must_use]
    pub const fn bankroll(&self) -> u64 {
        self.bankroll
    }

    /// Returns the hands played this round.
    #[must_use]
    pub fn hands(&self) -> &[Hand] {
        &self.hands
    }

    /// Returns the initial bet of this round, 0 if none was placed.
    #[must_use]
    pub const fn initial_bet(&self) -> u64 {
        self.initial_bet
    }

    /// Returns the insurance bet of this round, 0 if none was placed.
    #[must_use]
    pub const fn insurance(&self) -> u64 {
        self.insurance
    }

    /// Returns whether the seat placed an initial bet this round.
    #[must_use]
    pub const fn has_bet(&self) -> bool {
        self.initial_bet > 0
    }

    /// Total money the seat has at risk this round.
    #[must_use]
    pub fn staked(&self) -> u64 {
        self.hands.iter().map(Hand::bet).sum::<u64>() + self.insurance
    }

    pub(crate) fn place_initial_bet<R: Rules>(
        &mut self,
        amount: u64,
        rules: &R,
        deck: &mut Deck,
    ) -> Result<(), BetError> {
        if self.has_bet() {
            return Err(BetError::AlreadyPlaced);
        }
        if amount == 0 {
            return Err(BetError::ZeroBet);
        }
        if amount < rules.min_bet() {
            return Err(BetError::BelowMinimum {
                min: rules.min_bet(),
            });
        }
        if amount > rules.max_bet() {
            return Err(BetError::AboveMaximum {
                max: rules.max_bet(),
            });
        }
        if amount > self.bankroll {
            return Err(BetError::InsufficientFunds);
        }

        let cards = deck.draw_many(rules.initial_cards())?;

        self.bankroll -= amount;
        self.initial_bet = amount;
        self.hands.push(Hand::new(cards, amount));
        debug!("seat {} bets {amount}", self.index);

        Ok(())
    }

    /// Takes insurance for half the initial bet. Whether the dealer shows an
    /// Ace is the table's concern.
    pub(crate) fn place_insurance(&mut self) -> Result<u64, InsuranceError> {
        if !self.has_bet() {
            return Err(InsuranceError::NoBet);
        }
        if self.insurance > 0 {
            return Err(InsuranceError::AlreadyPlaced);
        }

        let insurance = self.initial_bet / 2;
        if insurance == 0 {
            return Err(InsuranceError::BetTooSmall);
        }
        if self.bankroll < insurance {
            return Err(InsuranceError::InsufficientFunds);
        }

        self.bankroll -= insurance;
        self.insurance = insurance;
        debug!("seat {} takes insurance for {insurance}", self.index);

        Ok(insurance)
    }

    pub(crate) fn deal_card(
        &mut self,
        hand_index: usize,
        deck: &mut Deck,
    ) -> Result<Card, ActionError> {
        let hand = self
            .hands
            .get_mut(hand_index)
            .ok_or(ActionError::HandNotFound)?;
        let card = deck.draw()?;
        hand.add_card(card);
        Ok(card)
    }

    pub(crate) fn apply_action(
        &mut self,
        hand_index: usize,
        action: Action,
        max_splits: u8,
        deck: &mut Deck,
    ) -> Result<(), ActionError> {
        let hand = self
            .hands
            .get(hand_index)
            .ok_or(ActionError::HandNotFound)?;

        match action {
            Action::Stand => Ok(()),
            Action::Hit => self.deal_card(hand_index, deck).map(|_| ()),
            Action::Double => {
                let bet = hand.bet();
                if bet == 0 {
                    return Err(ActionError::CannotDouble);
                }
                if self.bankroll < bet {
                    return Err(ActionError::InsufficientFunds);
                }
                deck.ensure(1)?;

                self.bankroll -= bet;
                self.hands[hand_index].double_bet();
                self.deal_card(hand_index, deck).map(|_| ())
            }
            Action::Split => {
                if !hand.can_split() {
                    return Err(ActionError::CannotSplit);
                }
                // Every hand past the first came from a split.
                if self.hands.len() > max_splits as usize {
                    return Err(ActionError::MaxSplitsReached);
                }
                let bet = hand.bet();
                if self.bankroll < bet {
                    return Err(ActionError::InsufficientFunds);
                }
                deck.ensure(2)?;

                let Some(split_card) = self.hands[hand_index].take_split_card() else {
                    return Err(ActionError::CannotSplit);
                };
                self.bankroll -= bet;
                self.hands.push(Hand::new(alloc::vec![split_card], bet));
                let new_index = self.hands.len() - 1;

                self.deal_card(hand_index, deck)?;
                self.deal_card(new_index, deck)?;
                Ok(())
            }
        }
    }

    pub(crate) const fn credit(&mut self, amount: u64) {
        self.bankroll = self.bankroll.saturating_add(amount);
    }

    pub(crate) fn reset(&mut self) {
        self.hands.clear();
        self.initial_bet = 0;
        self.insurance = 0;
    }
}
