//! Automated play tests.

use bjtable::{
    Action, BasicStrategy, DecisionPolicy, MAX_SEATS, RoundState, SeatError, Session, Table,
    TableRules, TableView,
};

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Bets a fixed amount, insures when asked to and always stands.
struct Fixed {
    bet: u64,
    insure: bool,
}

impl DecisionPolicy for Fixed {
    fn decide_action(&mut self, _table: &dyn TableView, _seat: usize, _hand_index: usize) -> Action {
        Action::Stand
    }

    fn decide_initial_bet(&mut self, _table: &dyn TableView, _seat: usize) -> u64 {
        self.bet
    }

    fn decide_insurance(&mut self, _table: &dyn TableView, _seat: usize) -> bool {
        self.insure
    }
}

fn basic_session(seed: u64, seats: usize) -> Session {
    let mut session = Session::new(Table::new(TableRules::default(), seed));
    for _ in 0..seats {
        session
            .sit_with(1_000_000, Box::new(BasicStrategy))
            .unwrap();
    }
    session
}

#[test]
fn play_round_settles_every_seat() {
    init_logger();
    let mut session = basic_session(7, 3);

    let report = session.play_round().unwrap();

    assert_eq!(report.seats.len(), 3);
    assert!(report.seats.iter().all(|seat| !seat.hands.is_empty()));
    assert!(report.dealer_score > 0);
    assert_eq!(session.table().state(), RoundState::Idle);
    assert_eq!(
        session.table().dealer_bankroll(),
        100_000 + report.dealer_delta
    );
}

#[test]
fn sessions_with_the_same_seed_replay() {
    let mut a = basic_session(11, 4);
    let mut b = basic_session(11, 4);

    for _ in 0..25 {
        assert_eq!(a.play_round().unwrap(), b.play_round().unwrap());
    }
}

#[test]
fn sit_fills_the_table() {
    let mut session = Session::new(Table::new(TableRules::default(), 0));
    for expected in 0..MAX_SEATS {
        assert_eq!(session.sit(Box::new(BasicStrategy)), Ok(expected));
    }
    assert_eq!(
        session.sit(Box::new(BasicStrategy)),
        Err(SeatError::TableFull)
    );
}

#[test]
fn seats_joined_on_the_table_sit_out() {
    let mut table = Table::new(TableRules::default(), 3);
    table.join().unwrap();

    let mut session = Session::new(table);
    assert_eq!(session.sit(Box::new(BasicStrategy)), Ok(1));

    let report = session.play_round().unwrap();
    assert!(report.seat(0).unwrap().hands.is_empty());
    assert_eq!(session.table().seat(0).unwrap().bankroll(), 4_000);
    assert!(!report.seat(1).unwrap().hands.is_empty());
}

#[test]
fn zero_and_rejected_bets_skip_the_round() {
    init_logger();
    let mut session = Session::new(Table::new(TableRules::default(), 5));
    session
        .sit(Box::new(Fixed {
            bet: 0,
            insure: false,
        }))
        .unwrap();
    session
        .sit(Box::new(Fixed {
            bet: 50,
            insure: false,
        }))
        .unwrap();
    session
        .sit(Box::new(Fixed {
            bet: 100,
            insure: false,
        }))
        .unwrap();

    let report = session.play_round().unwrap();

    for seat in [0, 1] {
        let result = report.seat(seat).unwrap();
        assert!(result.hands.is_empty());
        assert_eq!(result.net, 0);
        assert_eq!(session.table().seat(seat).unwrap().bankroll(), 4_000);
    }
    assert_eq!(report.seat(2).unwrap().hands.len(), 1);
}

#[test]
fn insurance_follows_the_dealer_ace() {
    let mut session = Session::new(Table::new(TableRules::default(), 17));
    session
        .sit_with(
            1_000_000,
            Box::new(Fixed {
                bet: 100,
                insure: true,
            }),
        )
        .unwrap();

    let mut insured = 0;
    for _ in 0..300 {
        let report = session.play_round().unwrap();
        let seat = report.seat(0).unwrap();
        let dealer_ace = report.dealer_hand[0].is_ace();

        assert_eq!(seat.insurance_bet > 0, dealer_ace);
        if dealer_ace {
            insured += 1;
            assert_eq!(seat.insurance_bet, 50);
            let expected = if report.dealer_natural { 150 } else { 0 };
            assert_eq!(seat.insurance_payout, expected);
        }
    }
    assert!(insured > 0);
}

#[test]
fn basic_strategy_splits_sometimes() {
    let mut session = basic_session(23, 3);

    let mut split_hands = 0;
    for _ in 0..300 {
        let report = session.play_round().unwrap();
        for seat in &report.seats {
            assert!(seat.hands.len() <= 4);
            if seat.hands.len() > 1 {
                split_hands += 1;
                assert_eq!(seat.staked(), seat.hands.iter().map(|hand| hand.bet).sum::<u64>());
            }
        }
    }
    assert!(split_hands > 0);
}

#[test]
fn game_over_once_nobody_can_bet() {
    let mut session = Session::new(Table::new(TableRules::default(), 1));
    assert!(session.is_game_over());

    session.sit_with(99, Box::new(BasicStrategy)).unwrap();
    assert!(session.is_game_over());

    session.sit_with(100, Box::new(BasicStrategy)).unwrap();
    assert!(!session.is_game_over());
}

#[test]
fn broke_seats_stop_betting() {
    let mut session = Session::new(Table::new(TableRules::default(), 9));
    session.sit_with(60, Box::new(BasicStrategy)).unwrap();

    let report = session.play_round().unwrap();

    assert!(report.seat(0).unwrap().hands.is_empty());
    assert_eq!(session.table().seat(0).unwrap().bankroll(), 60);
}
