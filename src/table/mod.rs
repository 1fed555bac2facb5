//! The round engine and its state.

use alloc::vec::Vec;

use log::debug;

use crate::card::Card;
use crate::deck::Deck;
use crate::error::{RoundError, SeatError};
use crate::hand::DealerHand;
use crate::rules::{MAX_BANKROLL, Rules, TableRules};
use crate::seat::Seat;

mod actions;
mod bet;
mod settle;
pub mod state;

pub use state::{Action, RoundState};

/// Maximum number of seats at one table.
pub const MAX_SEATS: usize = 7;

/// A blackjack table that owns the shoe, the seats and the dealer.
///
/// The table validates and executes one request at a time; deciding what a
/// seat should do is left to the caller (see
/// [`DecisionPolicy`](crate::DecisionPolicy)). After every call, successful
/// or not, the table is in a consistent state.
///
/// # Example
///
/// ```
/// use bjtable::{Action, Table, TableRules};
///
/// let mut table = Table::new(TableRules::default(), 42);
/// let seat = table.join().unwrap();
///
/// table.start_round().unwrap();
/// table.place_initial_bet(seat, 100).unwrap();
/// table.apply_action(seat, 0, Action::Stand).unwrap();
///
/// let report = table.finish_round().unwrap();
/// assert_eq!(report.seats.len(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct Table<R = TableRules> {
    rules: R,
    deck: Deck,
    seats: Vec<Seat>,
    dealer_hand: DealerHand,
    dealer_bankroll: i64,
    state: RoundState,
}

impl<R: Rules> Table<R> {
    /// Creates a table whose shuffles are all derived from `seed`.
    ///
    /// Two tables built with the same rules and seed deal identical rounds,
    /// which makes this the constructor for replays and tests. Live tables
    /// should use [`Table::from_entropy`].
    #[must_use]
    pub fn new(rules: R, seed: u64) -> Self {
        let deck = Deck::with_seed(rules.deck_count(), seed);
        Self::with_deck(rules, deck)
    }

    /// Creates a table that reseeds from OS entropy before every shuffle.
    ///
    /// This is the constructor for live play.
    #[cfg(feature = "std")]
    #[must_use]
    pub fn from_entropy(rules: R) -> Self {
        let deck = Deck::from_entropy(rules.deck_count());
        Self::with_deck(rules, deck)
    }

    fn with_deck(rules: R, deck: Deck) -> Self {
        let dealer_bankroll = rules.dealer_bankroll();
        Self {
            rules,
            deck,
            seats: Vec::with_capacity(MAX_SEATS),
            dealer_hand: DealerHand::new(),
            dealer_bankroll,
            state: RoundState::Idle,
        }
    }

    /// Seats a player with the rule set's starting bankroll.
    ///
    /// Returns the assigned seat index. Indices are handed out in order,
    /// starting at 0.
    ///
    /// # Errors
    ///
    /// Returns an error if the table is full, a round is in progress, or
    /// the rule set's starting bankroll exceeds [`MAX_BANKROLL`].
    pub fn join(&mut self) -> Result<usize, SeatError> {
        self.join_with(self.rules.starting_bankroll())
    }

    /// Seats a player with the given bankroll.
    ///
    /// # Errors
    ///
    /// Returns an error if the table is full, a round is in progress, or
    /// the bankroll exceeds [`MAX_BANKROLL`].
    pub fn join_with(&mut self, bankroll: u64) -> Result<usize, SeatError> {
        if self.state != RoundState::Idle {
            return Err(SeatError::RoundInProgress);
        }
        if bankroll > MAX_BANKROLL {
            return Err(SeatError::BankrollTooLarge { max: MAX_BANKROLL });
        }
        if self.seats.len() >= MAX_SEATS {
            return Err(SeatError::TableFull);
        }

        let index = self.seats.len();
        self.seats.push(Seat::new(index, bankroll));
        debug!("seat {index} joins with {bankroll}");
        Ok(index)
    }

    /// Starts a round with a freshly rebuilt and shuffled shoe.
    ///
    /// Clears every seat and deals the dealer's visible card.
    ///
    /// # Errors
    ///
    /// Returns an error if a round is already in progress.
    pub fn start_round(&mut self) -> Result<(), RoundError> {
        self.ensure_idle()?;
        self.deck.set_decks(self.rules.deck_count());
        self.deck.reset();
        self.deck.shuffle();
        self.open_round();
        Ok(())
    }

    /// Starts a round from a prearranged shoe instead of a shuffle.
    ///
    /// The first card of `draw_order` is the dealer's visible card, and the
    /// rest are drawn in order by bets, actions and the dealer.
    ///
    /// # Errors
    ///
    /// Returns an error if a round is already in progress.
    pub fn start_round_with(&mut self, draw_order: &[Card]) -> Result<(), RoundError> {
        self.ensure_idle()?;
        self.deck.stack(draw_order);
        self.open_round();
        Ok(())
    }

    const fn ensure_idle(&self) -> Result<(), RoundError> {
        if matches!(self.state, RoundState::Idle) {
            Ok(())
        } else {
            Err(RoundError::InProgress)
        }
    }

    fn open_round(&mut self) {
        for seat in &mut self.seats {
            seat.reset();
        }
        self.dealer_hand.clear();

        // An empty stacked shoe leaves the dealer without a card; the draw
        // already logged it and settlement reports the shortfall.
        if let Ok(card) = self.deck.draw() {
            self.dealer_hand.add_card(card);
        }

        self.state = RoundState::RoundStarted;
        debug!(
            "round started, dealer shows {:?}, {} cards in the shoe",
            self.dealer_hand.up_card(),
            self.deck.remaining()
        );
    }

    /// Returns the rule set.
    pub const fn rules(&self) -> &R {
        &self.rules
    }

    /// Returns the current round state.
    pub const fn state(&self) -> RoundState {
        self.state
    }

    /// Returns the number of cards remaining in the shoe.
    pub fn cards_remaining(&self) -> usize {
        self.deck.remaining()
    }

    /// Returns all seats, indexed by seat number.
    pub fn seats(&self) -> &[Seat] {
        &self.seats
    }

    /// Returns one seat.
    pub fn seat(&self, seat: usize) -> Option<&Seat> {
        self.seats.get(seat)
    }

    /// Returns the dealer's hand.
    pub const fn dealer_hand(&self) -> &DealerHand {
        &self.dealer_hand
    }

    /// Returns the dealer's bankroll.
    pub const fn dealer_bankroll(&self) -> i64 {
        self.dealer_bankroll
    }

    /// Returns whether the dealer shows an Ace while side bets are open.
    pub fn is_insurance_offered(&self) -> bool {
        self.state == RoundState::RoundStarted
            && self.dealer_hand.up_card().is_some_and(|card| card.is_ace())
    }
}
