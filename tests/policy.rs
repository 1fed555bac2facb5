//! Basic strategy decisions on prearranged tables.

use bjtable::{
    Action, BasicStrategy, Card, DecisionPolicy, Rank, Suit, Table, TableRules, Variant,
};

fn dealt(rules: TableRules, bankroll: u64, dealer: Rank, hand: [Rank; 2]) -> Table {
    let mut table = Table::new(rules, 1);
    table.join_with(bankroll).unwrap();
    let order: Vec<Card> = [dealer, hand[0], hand[1]]
        .into_iter()
        .map(|rank| Card::new(Suit::Spades, rank))
        .collect();
    table.start_round_with(&order).unwrap();
    table.place_initial_bet(0, 100).unwrap();
    table
}

fn decide(table: &Table) -> Action {
    BasicStrategy.decide_action(table, 0, 0)
}

#[test]
fn splits_aces_and_eights_against_anything() {
    for dealer in [Rank::Two, Rank::Seven, Rank::King, Rank::Ace] {
        for pair in [Rank::Ace, Rank::Eight] {
            let table = dealt(TableRules::default(), 4_000, dealer, [pair, pair]);
            assert_eq!(decide(&table), Action::Split, "{pair:?} vs {dealer:?}");
        }
    }
}

#[test]
fn splits_small_pairs_only_against_weak_cards() {
    let table = dealt(TableRules::default(), 4_000, Rank::Six, [Rank::Four, Rank::Four]);
    assert_eq!(decide(&table), Action::Split);

    let table = dealt(TableRules::default(), 4_000, Rank::Three, [Rank::Four, Rank::Four]);
    assert_ne!(decide(&table), Action::Split);

    let table = dealt(TableRules::default(), 4_000, Rank::Nine, [Rank::Nine, Rank::Nine]);
    assert_eq!(decide(&table), Action::Split);

    let table = dealt(TableRules::default(), 4_000, Rank::Seven, [Rank::Nine, Rank::Nine]);
    assert_eq!(decide(&table), Action::Stand);
}

#[test]
fn never_splits_tens() {
    let table = dealt(TableRules::default(), 4_000, Rank::Six, [Rank::Ten, Rank::Ten]);
    assert_eq!(decide(&table), Action::Stand);
}

#[test]
fn split_needs_funds_and_room() {
    let table = dealt(TableRules::default(), 150, Rank::Ten, [Rank::Eight, Rank::Eight]);
    assert_eq!(decide(&table), Action::Hit);

    let rules = TableRules::default().with_max_splits(0);
    let table = dealt(rules, 4_000, Rank::Ten, [Rank::Eight, Rank::Eight]);
    assert_eq!(decide(&table), Action::Hit);
}

#[test]
fn doubles_hard_eleven_and_ten() {
    let table = dealt(TableRules::default(), 4_000, Rank::Ten, [Rank::Five, Rank::Six]);
    assert_eq!(decide(&table), Action::Double);

    let table = dealt(TableRules::default(), 4_000, Rank::Nine, [Rank::Four, Rank::Six]);
    assert_eq!(decide(&table), Action::Double);

    let table = dealt(TableRules::default(), 4_000, Rank::Ten, [Rank::Four, Rank::Six]);
    assert_eq!(decide(&table), Action::Hit);

    let table = dealt(TableRules::default(), 150, Rank::Six, [Rank::Five, Rank::Six]);
    assert_eq!(decide(&table), Action::Hit);
}

#[test]
fn doubling_scales_with_the_threshold() {
    let rules = TableRules::variant(Variant::Extreme);
    let table = dealt(rules, 4_000, Rank::Ten, [Rank::Seven, Rank::Eight]);
    assert_eq!(decide(&table), Action::Double);
}

#[test]
fn hits_below_seventeen_and_stands_after() {
    let table = dealt(TableRules::default(), 4_000, Rank::Ten, [Rank::Ten, Rank::Six]);
    assert_eq!(decide(&table), Action::Hit);

    let table = dealt(TableRules::default(), 4_000, Rank::Ten, [Rank::Ten, Rank::Seven]);
    assert_eq!(decide(&table), Action::Stand);

    let table = dealt(TableRules::default(), 4_000, Rank::Ten, [Rank::Ace, Rank::Six]);
    assert_eq!(decide(&table), Action::Stand);
}

#[test]
fn missing_hands_stand() {
    let table = dealt(TableRules::default(), 4_000, Rank::Ten, [Rank::Ten, Rank::Six]);
    assert_eq!(BasicStrategy.decide_action(&table, 0, 3), Action::Stand);
    assert_eq!(BasicStrategy.decide_action(&table, 5, 0), Action::Stand);
}

#[test]
fn bets_the_minimum_and_never_insures() {
    let mut table = Table::new(TableRules::default(), 1);
    table.join().unwrap();
    table.join_with(99).unwrap();
    table.start_round().unwrap();

    let mut strategy = BasicStrategy;
    assert_eq!(strategy.decide_initial_bet(&table, 0), 100);
    assert_eq!(strategy.decide_initial_bet(&table, 1), 0);
    assert!(!strategy.decide_insurance(&table, 0));
}
