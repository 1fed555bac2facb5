//! Hand scoring tests.

use bjtable::{Card, DealerHand, Hand, Rank, Suit, is_bust, is_natural, is_soft, score};
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

const fn card(rank: Rank) -> Card {
    Card::new(Suit::Spades, rank)
}

fn cards(ranks: &[Rank]) -> Vec<Card> {
    ranks.iter().copied().map(card).collect()
}

fn random_hand(rng: &mut ChaCha8Rng) -> Vec<Card> {
    let len = rng.random_range(1..=9);
    (0..len)
        .map(|_| {
            let rank = Rank::ALL[rng.random_range(0..Rank::ALL.len())];
            let suit = Suit::ALL[rng.random_range(0..Suit::ALL.len())];
            Card::new(suit, rank)
        })
        .collect()
}

/// Best total treating each ace as 1 or 11, computed by brute force.
fn best_total(hand: &[Card], win_threshold: u16) -> u16 {
    let aces = hand.iter().filter(|c| c.rank == Rank::Ace).count() as u16;
    let hard: u16 = hand
        .iter()
        .map(|c| if c.rank == Rank::Ace { 1 } else { c.rank.value() })
        .sum();

    (0..=aces)
        .map(|high_aces| hard + 10 * high_aces)
        .filter(|&total| total <= win_threshold)
        .max()
        .unwrap_or(hard)
}

#[test]
fn face_cards_count_ten_and_ace_eleven() {
    assert_eq!(score(&cards(&[Rank::Ten, Rank::Nine]), 21), 19);
    assert_eq!(score(&cards(&[Rank::Jack, Rank::Queen]), 21), 20);
    assert_eq!(score(&cards(&[Rank::Ace, Rank::Six]), 21), 17);
    assert_eq!(score(&cards(&[Rank::King, Rank::Two, Rank::Three]), 21), 15);
    assert_eq!(score(&[], 21), 0);
}

#[test]
fn multiple_aces_soften_one_at_a_time() {
    assert_eq!(score(&cards(&[Rank::Ace, Rank::Ace]), 21), 12);
    assert_eq!(score(&cards(&[Rank::Ace, Rank::Ace, Rank::Nine]), 21), 21);

    let four_aces = cards(&[Rank::Ace, Rank::Ace, Rank::Ace, Rank::Ace, Rank::Seven]);
    assert_eq!(score(&four_aces, 21), 21);
    assert!(is_soft(&four_aces, 21));

    let hard = cards(&[Rank::Ace, Rank::King, Rank::Queen]);
    assert_eq!(score(&hard, 21), 21);
    assert!(!is_soft(&hard, 21));
}

#[test]
fn threshold_changes_softening() {
    let two_aces = cards(&[Rank::Ace, Rank::Ace]);
    assert_eq!(score(&two_aces, 25), 22);
    assert_eq!(score(&cards(&[Rank::Ace, Rank::Ace, Rank::Three]), 25), 25);

    assert_eq!(score(&cards(&[Rank::Ace, Rank::King]), 20), 11);
    assert!(is_natural(&cards(&[Rank::Ace, Rank::Nine]), 20));
    assert!(!is_natural(&cards(&[Rank::Ace, Rank::King]), 20));
}

#[test]
fn bust_and_natural() {
    assert!(is_bust(&cards(&[Rank::King, Rank::Queen, Rank::Two]), 21));
    assert!(!is_bust(&cards(&[Rank::King, Rank::Ace]), 21));

    assert!(is_natural(&cards(&[Rank::Ace, Rank::King]), 21));
    assert!(!is_natural(&cards(&[Rank::Seven, Rank::Seven, Rank::Seven]), 21));
    assert!(!is_natural(&cards(&[Rank::Ten, Rank::Nine]), 21));
}

#[test]
fn score_ignores_card_order() {
    let mut rng = ChaCha8Rng::seed_from_u64(0x5eed);

    for _ in 0..2_000 {
        let mut hand = random_hand(&mut rng);
        let win_threshold = [20, 21, 25][rng.random_range(0..3)];
        let before = score(&hand, win_threshold);
        hand.shuffle(&mut rng);
        assert_eq!(score(&hand, win_threshold), before, "hand {hand:?}");
    }
}

#[test]
fn softening_finds_best_total() {
    let mut rng = ChaCha8Rng::seed_from_u64(21);

    for _ in 0..2_000 {
        let hand = random_hand(&mut rng);
        for win_threshold in [20, 21, 25] {
            assert_eq!(
                score(&hand, win_threshold),
                best_total(&hand, win_threshold),
                "hand {hand:?} at {win_threshold}"
            );
        }
    }
}

#[test]
fn hand_tracks_bet_and_split_pairs() {
    let mut hand = Hand::new(cards(&[Rank::Eight, Rank::Eight]), 100);
    assert!(hand.can_split());
    assert_eq!(hand.bet(), 100);

    hand.double_bet();
    assert_eq!(hand.bet(), 200);

    assert_eq!(hand.take_split_card(), Some(card(Rank::Eight)));
    assert_eq!(hand.len(), 1);
    assert_eq!(hand.take_split_card(), None);

    let faces = Hand::new(cards(&[Rank::King, Rank::Queen]), 10);
    assert!(!faces.can_split());
}

#[test]
fn dealer_hand_shows_first_card() {
    let mut dealer = DealerHand::new();
    assert_eq!(dealer.up_card(), None);

    dealer.add_card(card(Rank::Ace));
    dealer.add_card(card(Rank::King));
    assert_eq!(dealer.up_card(), Some(card(Rank::Ace)));
    assert!(dealer.is_natural(21));
    assert_eq!(dealer.score(21), 21);

    dealer.clear();
    assert!(dealer.is_empty());
}

#[test]
fn cards_display_by_name() {
    let card = Card::new(Suit::Diamonds, Rank::Queen);
    assert_eq!(card.to_string(), "Queen of Diamonds");
}
