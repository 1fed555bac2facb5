//! Deck tests.

use std::collections::HashMap;

use bjtable::{Card, DECK_SIZE, Deck, DeckError, Rank, Suit};

fn drain(deck: &mut Deck) -> Vec<Card> {
    let remaining = deck.remaining();
    deck.draw_many(remaining).unwrap()
}

#[test]
fn shoe_holds_every_card_once_per_deck() {
    for decks in [1, 2] {
        let mut deck = Deck::with_seed(decks, 3);
        deck.shuffle();
        assert_eq!(deck.remaining(), DECK_SIZE * decks as usize);

        let mut counts: HashMap<Card, usize> = HashMap::new();
        for card in drain(&mut deck) {
            *counts.entry(card).or_default() += 1;
        }

        assert_eq!(counts.len(), DECK_SIZE);
        assert!(counts.values().all(|&count| count == decks as usize));
    }
}

#[test]
fn seeded_shuffles_replay() {
    let mut a = Deck::with_seed(1, 99);
    let mut b = Deck::with_seed(1, 99);
    a.shuffle();
    b.shuffle();
    assert_eq!(drain(&mut a), drain(&mut b));
}

#[test]
fn every_shuffle_reseeds() {
    let mut deck = Deck::with_seed(1, 5);
    deck.shuffle();
    let first = drain(&mut deck);

    deck.reset();
    deck.shuffle();
    let second = drain(&mut deck);

    assert_ne!(first, second);
}

#[test]
fn entropy_deck_is_full() {
    let mut deck = Deck::from_entropy(2);
    deck.shuffle();
    assert_eq!(deck.remaining(), 2 * DECK_SIZE);
}

#[test]
fn stacked_deck_draws_in_order() {
    let order = [
        Card::new(Suit::Hearts, Rank::Two),
        Card::new(Suit::Clubs, Rank::Ace),
        Card::new(Suit::Spades, Rank::King),
    ];
    let mut deck = Deck::with_seed(1, 0);
    deck.stack(&order);

    assert_eq!(deck.draw(), Ok(order[0]));
    assert_eq!(deck.draw_many(2), Ok(vec![order[1], order[2]]));
    assert!(deck.is_empty());
}

#[test]
fn empty_deck_reports_missing_cards() {
    let mut deck = Deck::with_seed(1, 0);
    deck.stack(&[Card::new(Suit::Hearts, Rank::Two)]);

    assert_eq!(deck.draw_many(3), Err(DeckError::Empty { missing: 2 }));
    assert_eq!(deck.remaining(), 1);

    assert!(deck.draw().is_ok());
    let err = deck.draw().unwrap_err();
    assert_eq!(err, DeckError::Empty { missing: 1 });
    assert_eq!(err.missing(), 1);
}

#[test]
fn reset_discards_previous_contents() {
    let mut deck = Deck::with_seed(2, 0);
    deck.stack(&[]);
    assert!(deck.is_empty());

    deck.reset();
    assert_eq!(deck.remaining(), 2 * DECK_SIZE);
    assert_eq!(deck.decks(), 2);
}
