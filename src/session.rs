//! Automated play: a table driven by one decision policy per seat.

use alloc::boxed::Box;
use alloc::vec::Vec;

use log::{debug, info, warn};

use crate::error::{ActionError, RoundError, SeatError};
use crate::policy::{DecisionPolicy, TableView};
use crate::result::SettlementReport;
use crate::rules::{Rules, TableRules};
use crate::table::{Action, Table};

/// A table whose seats are played by [`DecisionPolicy`] objects.
///
/// # Example
///
/// ```
/// use bjtable::{BasicStrategy, Session, Table, TableRules};
///
/// let mut session = Session::new(Table::new(TableRules::default(), 7));
/// session.sit(Box::new(BasicStrategy)).unwrap();
/// session.sit(Box::new(BasicStrategy)).unwrap();
///
/// let report = session.play_round().unwrap();
/// assert_eq!(report.seats.len(), 2);
/// ```
pub struct Session<R = TableRules> {
    table: Table<R>,
    policies: Vec<Box<dyn DecisionPolicy>>,
}

impl<R: Rules> Session<R> {
    /// Wraps an empty table.
    ///
    /// Seats already at the table have no policy and sit every round out;
    /// add players through [`sit`](Self::sit).
    #[must_use]
    pub fn new(table: Table<R>) -> Self {
        Self {
            table,
            policies: Vec::new(),
        }
    }

    /// Seats a new player with the rule set's starting bankroll.
    ///
    /// Returns the seat index.
    ///
    /// # Errors
    ///
    /// Returns an error if the table is full or a round is in progress.
    pub fn sit(&mut self, policy: Box<dyn DecisionPolicy>) -> Result<usize, SeatError> {
        let seat = self.table.join()?;
        self.bind(seat, policy);
        Ok(seat)
    }

    /// Seats a new player with an explicit bankroll.
    ///
    /// # Errors
    ///
    /// Returns an error if the table is full or a round is in progress.
    pub fn sit_with(
        &mut self,
        bankroll: u64,
        policy: Box<dyn DecisionPolicy>,
    ) -> Result<usize, SeatError> {
        let seat = self.table.join_with(bankroll)?;
        self.bind(seat, policy);
        Ok(seat)
    }

    fn bind(&mut self, seat: usize, policy: Box<dyn DecisionPolicy>) {
        // Seats joined directly on the table before wrapping get no policy.
        while self.policies.len() < seat {
            self.policies.push(Box::new(SitOut));
        }
        self.policies.push(policy);
    }

    /// Returns the table.
    pub const fn table(&self) -> &Table<R> {
        &self.table
    }

    /// Returns whether no seat can cover the minimum bet any more.
    pub fn is_game_over(&self) -> bool {
        let min_bet = self.table.rules().min_bet();
        self.table
            .seats()
            .iter()
            .all(|seat| seat.bankroll() < min_bet.max(1))
    }

    /// Plays one full round.
    ///
    /// Starts the round, asks every policy for its bet, offers insurance
    /// when the dealer shows an Ace, plays every hand (including hands
    /// created by splits) until the policy stands or doubles, the hand
    /// busts, or an action is rejected, and settles. If the shoe runs out
    /// the remaining hands are left as they are and the round is settled
    /// early.
    ///
    /// # Errors
    ///
    /// Returns an error if a round is already in progress on the table.
    pub fn play_round(&mut self) -> Result<SettlementReport, RoundError> {
        self.table.start_round()?;
        self.collect_bets();
        if self.table.is_insurance_offered() {
            self.offer_insurance();
        }
        if let Err(err) = self.play_hands() {
            warn!("round ends early: {err}");
        }
        self.table.finish_round()
    }

    fn collect_bets(&mut self) {
        for (seat, policy) in self.policies.iter_mut().enumerate() {
            let amount = policy.decide_initial_bet(&self.table, seat);
            if amount == 0 {
                debug!("seat {seat} sits the round out");
                continue;
            }
            if let Err(err) = self.table.place_initial_bet(seat, amount) {
                info!("seat {seat} cannot bet {amount}: {err}");
            }
        }
    }

    fn offer_insurance(&mut self) {
        for (seat, policy) in self.policies.iter_mut().enumerate() {
            if self.table.initial_bet(seat).unwrap_or(0) == 0 {
                continue;
            }
            if policy.decide_insurance(&self.table, seat) {
                if let Err(err) = self.table.place_insurance(seat) {
                    info!("seat {seat} cannot insure: {err}");
                }
            }
        }
    }

    fn play_hands(&mut self) -> Result<(), ActionError> {
        let win_threshold = self.table.rules().win_threshold();

        for (seat, policy) in self.policies.iter_mut().enumerate() {
            let mut hand_index = 0;
            // Splits append hands, so the count is re-read every pass.
            while hand_index < self.table.hand_count(seat) {
                loop {
                    let action = policy.decide_action(&self.table, seat, hand_index);
                    match self.table.apply_action(seat, hand_index, action) {
                        Ok(()) => {}
                        Err(err) if err.is_illegal() => {
                            info!("seat {seat} hand {hand_index}: {action:?} rejected: {err}");
                            break;
                        }
                        Err(err) => return Err(err),
                    }

                    if matches!(action, Action::Stand | Action::Double) {
                        break;
                    }
                    let busted = self
                        .table
                        .hand(seat, hand_index)
                        .is_some_and(|cards| crate::hand::is_bust(cards, win_threshold));
                    if busted {
                        break;
                    }
                }
                hand_index += 1;
            }
        }

        Ok(())
    }
}

/// Policy for seats without a player: never bets.
struct SitOut;

impl DecisionPolicy for SitOut {
    fn decide_action(&mut self, _table: &dyn TableView, _seat: usize, _hand_index: usize) -> Action {
        Action::Stand
    }

    fn decide_initial_bet(&mut self, _table: &dyn TableView, _seat: usize) -> u64 {
        0
    }

    fn decide_insurance(&mut self, _table: &dyn TableView, _seat: usize) -> bool {
        false
    }
}
