//! Read-only table view and the decision policies that consume it.

use crate::card::{Card, Rank};
use crate::hand::{is_soft, score};
use crate::rules::Rules;
use crate::table::{Action, Table};

/// What a seat's decision maker may look at.
///
/// Every getter returns `None` (or 0 for counts) for unknown seats and
/// hands.
pub trait TableView {
    /// Returns the table's rule set.
    fn rules(&self) -> &dyn Rules;
    /// Returns the number of seats.
    fn seat_count(&self) -> usize;
    /// Returns the cards of one hand.
    fn hand(&self, seat: usize, hand_index: usize) -> Option<&[Card]>;
    /// Returns the number of hands a seat holds.
    fn hand_count(&self, seat: usize) -> usize;
    /// Returns the bet riding on one hand.
    fn current_bet(&self, seat: usize, hand_index: usize) -> Option<u64>;
    /// Returns the money a seat has not put on the table.
    fn bankroll(&self, seat: usize) -> Option<u64>;
    /// Returns the seat's initial bet this round.
    fn initial_bet(&self, seat: usize) -> Option<u64>;
    /// Returns the seat's insurance bet this round.
    fn insurance_bet(&self, seat: usize) -> Option<u64>;
    /// Returns the dealer's visible card.
    fn dealer_card(&self) -> Option<Card>;
    /// Returns the dealer's bankroll.
    fn dealer_bankroll(&self) -> i64;
}

impl<R: Rules> TableView for Table<R> {
    fn rules(&self) -> &dyn Rules {
        Self::rules(self)
    }

    fn seat_count(&self) -> usize {
        self.seats().len()
    }

    fn hand(&self, seat: usize, hand_index: usize) -> Option<&[Card]> {
        self.seat(seat)
            .and_then(|seat| seat.hands().get(hand_index))
            .map(crate::hand::Hand::cards)
    }

    fn hand_count(&self, seat: usize) -> usize {
        self.seat(seat).map_or(0, |seat| seat.hands().len())
    }

    fn current_bet(&self, seat: usize, hand_index: usize) -> Option<u64> {
        self.seat(seat)
            .and_then(|seat| seat.hands().get(hand_index))
            .map(crate::hand::Hand::bet)
    }

    fn bankroll(&self, seat: usize) -> Option<u64> {
        self.seat(seat).map(crate::seat::Seat::bankroll)
    }

    fn initial_bet(&self, seat: usize) -> Option<u64> {
        self.seat(seat).map(crate::seat::Seat::initial_bet)
    }

    fn insurance_bet(&self, seat: usize) -> Option<u64> {
        self.seat(seat).map(crate::seat::Seat::insurance)
    }

    fn dealer_card(&self) -> Option<Card> {
        self.dealer_hand().up_card()
    }

    fn dealer_bankroll(&self) -> i64 {
        Self::dealer_bankroll(self)
    }
}

/// Decides bets and actions for one seat.
///
/// A policy only reads the table; the driver feeds its answers back into
/// the table's mutators.
pub trait DecisionPolicy {
    /// Chooses the action for one hand.
    fn decide_action(&mut self, table: &dyn TableView, seat: usize, hand_index: usize) -> Action;

    /// Chooses the initial bet. 0 sits the round out.
    fn decide_initial_bet(&mut self, table: &dyn TableView, seat: usize) -> u64;

    /// Chooses whether to insure against a dealer natural.
    fn decide_insurance(&mut self, table: &dyn TableView, seat: usize) -> bool;
}

/// A simplified basic strategy.
///
/// Splits favourable pairs against the dealer's card, doubles hard 10 and
/// 11, then hits until four below the win threshold (17 at a 21 table).
/// Always bets the table minimum when it can and never insures.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BasicStrategy;

impl BasicStrategy {
    fn should_split(pair: Rank, dealer_up: u16) -> bool {
        let weak_2_to_7 = (2..=7).contains(&dealer_up);
        match pair {
            Rank::Ace | Rank::Eight => true,
            Rank::Two | Rank::Three | Rank::Seven => weak_2_to_7,
            Rank::Six => (2..=6).contains(&dealer_up),
            Rank::Nine => (2..=6).contains(&dealer_up) || dealer_up == 8 || dealer_up == 9,
            Rank::Four => dealer_up == 5 || dealer_up == 6,
            _ => false,
        }
    }
}

impl DecisionPolicy for BasicStrategy {
    fn decide_action(&mut self, table: &dyn TableView, seat: usize, hand_index: usize) -> Action {
        let Some(cards) = table.hand(seat, hand_index) else {
            return Action::Stand;
        };
        let rules = table.rules();
        let win_threshold = rules.win_threshold();
        let dealer_up = table.dealer_card().map_or(10, |card| card.rank.value());
        let bankroll = table.bankroll(seat).unwrap_or(0);
        let bet = table.current_bet(seat, hand_index).unwrap_or(0);

        if cards.len() == 2
            && cards[0].rank == cards[1].rank
            && bankroll >= bet
            && table.hand_count(seat) <= rules.max_splits() as usize
            && Self::should_split(cards[0].rank, dealer_up)
        {
            return Action::Split;
        }

        let value = score(cards, win_threshold);
        // Offsets from the win threshold, so variant tables scale.
        let hard_eleven = win_threshold.saturating_sub(10);
        let doubles = value == hard_eleven || (value + 1 == hard_eleven && dealer_up <= 9);
        if doubles
            && cards.len() == 2
            && bet > 0
            && bankroll >= bet
            && !is_soft(cards, win_threshold)
        {
            return Action::Double;
        }

        if value < win_threshold.saturating_sub(4) {
            Action::Hit
        } else {
            Action::Stand
        }
    }

    fn decide_initial_bet(&mut self, table: &dyn TableView, seat: usize) -> u64 {
        let min_bet = table.rules().min_bet();
        match table.bankroll(seat) {
            Some(bankroll) if bankroll >= min_bet => min_bet,
            _ => 0,
        }
    }

    fn decide_insurance(&mut self, _table: &dyn TableView, _seat: usize) -> bool {
        false
    }
}
