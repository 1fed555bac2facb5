//! Automated table example.
//!
//! Seats players running the basic strategy and plays until nobody can
//! cover the minimum bet or the round limit is reached.
//!
//! ```text
//! cargo run --example auto_table -- [classic|round|extreme] [seats] [rounds]
//! ```

use std::env;
use std::process::ExitCode;

use bjtable::{BasicStrategy, HandOutcome, Session, SettlementReport, Table, TableRules, Variant};

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut args = env::args().skip(1);
    let variant = match args.next().map(|arg| arg.parse::<Variant>()) {
        None => Variant::default(),
        Some(Ok(variant)) => variant,
        Some(Err(err)) => {
            eprintln!("{err}");
            return ExitCode::FAILURE;
        }
    };
    let seats: usize = args.next().and_then(|arg| arg.parse().ok()).unwrap_or(3);
    let rounds: usize = args.next().and_then(|arg| arg.parse().ok()).unwrap_or(20);

    let rules = TableRules::variant(variant);
    if let Err(err) = rules.validate() {
        eprintln!("invalid rules: {err}");
        return ExitCode::FAILURE;
    }

    println!("{variant:?} table, win at {}", rules.win_threshold);

    let mut session = Session::new(Table::from_entropy(rules));
    for _ in 0..seats {
        if let Err(err) = session.sit(Box::new(BasicStrategy)) {
            eprintln!("cannot seat player: {err}");
            break;
        }
    }

    for round in 1..=rounds {
        if session.is_game_over() {
            println!("Nobody can cover the minimum bet. Game over.");
            break;
        }

        match session.play_round() {
            Ok(report) => print_report(round, &report),
            Err(err) => {
                eprintln!("round {round}: {err}");
                return ExitCode::FAILURE;
            }
        }
    }

    for seat in session.table().seats() {
        println!("Seat {} leaves with {}", seat.index(), seat.bankroll());
    }
    println!("Dealer bankroll: {}", session.table().dealer_bankroll());

    ExitCode::SUCCESS
}

fn print_report(round: usize, report: &SettlementReport) {
    let dealer: Vec<String> = report.dealer_hand.iter().map(ToString::to_string).collect();
    println!(
        "Round {round}: dealer {} [{}]{}",
        report.dealer_score,
        dealer.join(", "),
        if report.dealer_bust { " bust" } else { "" }
    );
    if report.ended_early() {
        println!("  shoe ran out, {} card(s) short", report.cards_missing);
    }

    for seat in &report.seats {
        if seat.hands.is_empty() {
            println!("  seat {}: sat out", seat.seat);
            continue;
        }
        for hand in &seat.hands {
            let outcome = match hand.outcome {
                HandOutcome::Win => "wins",
                HandOutcome::Lose => "loses",
                HandOutcome::Tie => "ties",
            };
            println!(
                "  seat {} hand {}: {} on {} {outcome}, paid {}",
                seat.seat, hand.hand_index, hand.score, hand.bet, hand.payout
            );
        }
        if seat.insurance_bet > 0 {
            println!(
                "  seat {} insurance {} paid {}",
                seat.seat, seat.insurance_bet, seat.insurance_payout
            );
        }
        println!("  seat {} net {:+}", seat.seat, seat.net);
    }
}
