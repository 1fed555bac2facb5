use alloc::vec::Vec;

use log::{debug, info, warn};

use crate::error::RoundError;
use crate::hand::Hand;
use crate::result::{HandOutcome, HandResult, SeatResult, SettlementReport};
use crate::rules::Rules;

use super::{RoundState, Table};

/// Converts an amount for the signed ledgers, saturating at `i64::MAX`.
fn signed(amount: u64) -> i64 {
    i64::try_from(amount).unwrap_or(i64::MAX)
}

/// Dealer totals the hands are settled against.
#[derive(Debug, Clone, Copy)]
struct DealerTotal {
    score: u16,
    bust: bool,
    natural: bool,
}

fn resolve_hand(hand: &Hand, dealer: DealerTotal, win_threshold: u16) -> (HandOutcome, u64) {
    let bet = hand.bet();

    if hand.is_bust(win_threshold) {
        return (HandOutcome::Lose, 0);
    }

    if dealer.natural {
        return if hand.is_natural(win_threshold) {
            (HandOutcome::Tie, bet)
        } else {
            (HandOutcome::Lose, 0)
        };
    }

    if dealer.bust {
        return (HandOutcome::Win, bet.saturating_mul(2));
    }

    let score = hand.score(win_threshold);
    match score.cmp(&dealer.score) {
        core::cmp::Ordering::Greater => (HandOutcome::Win, bet.saturating_mul(2)),
        core::cmp::Ordering::Less => (HandOutcome::Lose, 0),
        core::cmp::Ordering::Equal => (HandOutcome::Tie, bet),
    }
}

impl<R: Rules> Table<R> {
    /// Plays the dealer's hand and settles every seat.
    ///
    /// The dealer draws while below the stop threshold, regardless of soft
    /// aces. Each hand is then settled in seat and hand order:
    ///
    /// 1. A bust hand loses.
    /// 2. Against a dealer natural, only a natural ties; anything else loses.
    /// 3. Against a dealer bust, the hand wins.
    /// 4. Otherwise the higher score wins and equal scores tie.
    ///
    /// A win pays the stake back twice (1:1, naturals included), a tie
    /// returns the stake. Insurance pays three times its stake when the
    /// dealer has a natural. The dealer's bankroll takes the other side of
    /// every bet. Finally every seat and the dealer's hand are cleared and
    /// the table returns to [`RoundState::Idle`].
    ///
    /// If the shoe runs out while the dealer must draw, the dealer stands on
    /// what it holds and [`SettlementReport::cards_missing`] records the
    /// shortfall.
    ///
    /// # Errors
    ///
    /// Returns an error if no round is in progress.
    pub fn finish_round(&mut self) -> Result<SettlementReport, RoundError> {
        if !self.state.is_open() {
            return Err(RoundError::NoRound);
        }

        let win_threshold = self.rules.win_threshold();

        self.state = RoundState::DealerPlaying;
        let cards_missing = self.dealer_play();

        let dealer = DealerTotal {
            score: self.dealer_hand.score(win_threshold),
            bust: self.dealer_hand.is_bust(win_threshold),
            natural: self.dealer_hand.is_natural(win_threshold),
        };
        debug!(
            "dealer finishes on {} (bust: {}, natural: {})",
            dealer.score, dealer.bust, dealer.natural
        );

        self.state = RoundState::Settled;
        let mut seat_results = Vec::with_capacity(self.seats.len());
        let mut dealer_delta: i64 = 0;

        for seat in &mut self.seats {
            let mut hand_results = Vec::with_capacity(seat.hands().len());
            let mut payout: u64 = 0;

            for (hand_index, hand) in seat.hands().iter().enumerate() {
                let (outcome, hand_payout) = resolve_hand(hand, dealer, win_threshold);
                payout = payout.saturating_add(hand_payout);
                hand_results.push(HandResult {
                    hand_index,
                    outcome,
                    bet: hand.bet(),
                    payout: hand_payout,
                    score: hand.score(win_threshold),
                });
            }

            let insurance_bet = seat.insurance();
            let insurance_payout = if dealer.natural {
                insurance_bet.saturating_mul(3)
            } else {
                0
            };
            payout = payout.saturating_add(insurance_payout);

            let net = signed(payout).saturating_sub(signed(seat.staked()));
            seat.credit(payout);
            dealer_delta = dealer_delta.saturating_sub(net);

            seat_results.push(SeatResult {
                seat: seat.index(),
                hands: hand_results,
                insurance_bet,
                insurance_payout,
                payout,
                net,
            });

            seat.reset();
        }

        self.dealer_bankroll = self.dealer_bankroll.saturating_add(dealer_delta);

        let report = SettlementReport {
            dealer_hand: self.dealer_hand.cards().to_vec(),
            dealer_score: dealer.score,
            dealer_bust: dealer.bust,
            dealer_natural: dealer.natural,
            seats: seat_results,
            dealer_delta,
            cards_missing,
        };

        self.dealer_hand.clear();
        self.state = RoundState::Idle;
        info!(
            "round settled: dealer {} ({} card(s)), dealer delta {dealer_delta}",
            report.dealer_score,
            report.dealer_hand.len()
        );

        Ok(report)
    }

    /// Draws for the dealer until the stop threshold. Returns the number of
    /// cards the shoe could not supply.
    fn dealer_play(&mut self) -> usize {
        let win_threshold = self.rules.win_threshold();
        let dealer_stop = self.rules.dealer_stop();

        while self.dealer_hand.score(win_threshold) < dealer_stop {
            match self.deck.draw() {
                Ok(card) => self.dealer_hand.add_card(card),
                Err(err) => {
                    warn!(
                        "dealer stands on {} with the shoe exhausted",
                        self.dealer_hand.score(win_threshold)
                    );
                    return err.missing();
                }
            }
        }

        0
    }
}
