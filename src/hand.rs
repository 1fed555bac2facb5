//! Hand scoring and the seat and dealer hand representations.

use alloc::vec::Vec;

use crate::card::{Card, Rank};

fn evaluate_cards(cards: &[Card], win_threshold: u16) -> (u16, bool) {
    let mut value: u16 = 0;
    let mut aces: u16 = 0;

    for card in cards {
        if card.rank == Rank::Ace {
            aces += 1;
        }
        value = value.saturating_add(card.rank.value());
    }

    // Each ace may need softening, so this cannot be a single adjustment.
    while value > win_threshold && aces > 0 {
        value -= 10;
        aces -= 1;
    }

    (value, aces > 0)
}

/// Scores a sequence of cards against a win threshold.
///
/// Face cards count 10 and aces 11; while the total exceeds the threshold,
/// one ace at a time drops to 1.
///
/// ```
/// use bjtable::{Card, Rank, Suit, score};
///
/// let hand = [
///     Card::new(Suit::Hearts, Rank::Ace),
///     Card::new(Suit::Spades, Rank::Ace),
///     Card::new(Suit::Clubs, Rank::Nine),
/// ];
/// assert_eq!(score(&hand, 21), 21);
/// ```
#[must_use]
pub fn score(cards: &[Card], win_threshold: u16) -> u16 {
    evaluate_cards(cards, win_threshold).0
}

/// Returns whether the cards score over the win threshold.
#[must_use]
pub fn is_bust(cards: &[Card], win_threshold: u16) -> bool {
    score(cards, win_threshold) > win_threshold
}

/// Returns whether the cards are a natural: two cards scoring exactly the
/// win threshold.
#[must_use]
pub fn is_natural(cards: &[Card], win_threshold: u16) -> bool {
    cards.len() == 2 && score(cards, win_threshold) == win_threshold
}

/// Returns whether the score still counts an ace as 11.
#[must_use]
pub fn is_soft(cards: &[Card], win_threshold: u16) -> bool {
    evaluate_cards(cards, win_threshold).1
}

/// One hand a seat is playing, paired with the bet riding on it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hand {
    cards: Vec<Card>,
    bet: u64,
}

impl Hand {
    /// Creates a new hand with the given cards and bet.
    #[must_use]
    pub const fn new(cards: Vec<Card>, bet: u64) -> Self {
        Self { cards, bet }
    }

    /// Adds a card to the hand.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the stake riding on this hand.
    #[must_use]
    pub const fn bet(&self) -> u64 {
        self.bet
    }

    /// Doubles the stake on this hand.
    pub const fn double_bet(&mut self) {
        self.bet *= 2;
    }

    /// Scores the hand.
    #[must_use]
    pub fn score(&self, win_threshold: u16) -> u16 {
        score(&self.cards, win_threshold)
    }

    /// Returns whether the hand is bust.
    #[must_use]
    pub fn is_bust(&self, win_threshold: u16) -> bool {
        is_bust(&self.cards, win_threshold)
    }

    /// Returns whether the hand is a natural.
    #[must_use]
    pub fn is_natural(&self, win_threshold: u16) -> bool {
        is_natural(&self.cards, win_threshold)
    }

    /// Returns whether the hand is a pair that can be split.
    #[must_use]
    pub fn can_split(&self) -> bool {
        self.cards.len() == 2 && self.cards[0].rank == self.cards[1].rank
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Takes the second card of a pair out of the hand, or `None` if the hand
    /// cannot split.
    pub fn take_split_card(&mut self) -> Option<Card> {
        if self.can_split() {
            self.cards.pop()
        } else {
            None
        }
    }
}

/// The dealer's hand. Only the first card is visible before settlement.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DealerHand {
    cards: Vec<Card>,
}

impl DealerHand {
    /// Creates an empty dealer hand.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Adds a card to the hand.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Returns the dealer's cards, face-up card first.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the face-up card, dealt first.
    #[must_use]
    pub fn up_card(&self) -> Option<Card> {
        self.cards.first().copied()
    }

    /// Scores the full hand.
    #[must_use]
    pub fn score(&self, win_threshold: u16) -> u16 {
        score(&self.cards, win_threshold)
    }

    /// Returns whether the hand is a natural.
    #[must_use]
    pub fn is_natural(&self, win_threshold: u16) -> bool {
        is_natural(&self.cards, win_threshold)
    }

    /// Returns whether the hand is bust.
    #[must_use]
    pub fn is_bust(&self, win_threshold: u16) -> bool {
        is_bust(&self.cards, win_threshold)
    }

    /// Returns the number of cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Discards every card.
    pub fn clear(&mut self) {
        self.cards.clear();
    }
}
