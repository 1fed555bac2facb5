//! The shoe cards are drawn from.

use alloc::vec::Vec;

use log::warn;
use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;

use crate::card::{Card, DECK_SIZE, Rank, Suit};
use crate::error::DeckError;

/// A shuffled multiset of cards, drawn from the end like a stack.
///
/// Every [`shuffle`](Self::shuffle) reseeds the generator: from OS entropy
/// for decks built with [`Deck::from_entropy`], otherwise from the previous
/// generator so a seeded deck replays identically.
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
    decks: u8,
    rng: ChaCha8Rng,
    #[cfg(feature = "std")]
    os_entropy: bool,
}

impl Deck {
    /// Creates a full, unshuffled shoe whose shuffles derive from `seed`.
    #[must_use]
    pub fn with_seed(decks: u8, seed: u64) -> Self {
        let mut deck = Self {
            cards: Vec::new(),
            decks,
            rng: ChaCha8Rng::seed_from_u64(seed),
            #[cfg(feature = "std")]
            os_entropy: false,
        };
        deck.reset();
        deck
    }

    /// Creates a full, unshuffled shoe that reseeds from OS entropy on every
    /// shuffle.
    #[cfg(feature = "std")]
    #[must_use]
    pub fn from_entropy(decks: u8) -> Self {
        let mut deck = Self {
            cards: Vec::new(),
            decks,
            rng: ChaCha8Rng::from_os_rng(),
            os_entropy: true,
        };
        deck.reset();
        deck
    }

    /// Rebuilds the full shoe, discarding whatever was left.
    ///
    /// Cards are laid out suit by suit, Ace to King, once per deck.
    pub fn reset(&mut self) {
        self.cards.clear();
        self.cards.reserve(self.decks as usize * DECK_SIZE);

        for _ in 0..self.decks {
            for suit in Suit::ALL {
                for rank in Rank::ALL {
                    self.cards.push(Card::new(suit, rank));
                }
            }
        }
    }

    /// Reseeds the generator and shuffles the remaining cards.
    pub fn shuffle(&mut self) {
        self.reseed();
        self.cards.shuffle(&mut self.rng);
    }

    fn reseed(&mut self) {
        #[cfg(feature = "std")]
        if self.os_entropy {
            self.rng = ChaCha8Rng::from_os_rng();
            return;
        }

        let next = ChaCha8Rng::from_rng(&mut self.rng);
        self.rng = next;
    }

    /// Replaces the contents with a prearranged sequence.
    ///
    /// The first card of `draw_order` is the first one drawn.
    pub fn stack(&mut self, draw_order: &[Card]) {
        self.cards.clear();
        self.cards.extend(draw_order.iter().rev().copied());
    }

    /// Draws the top card.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::Empty`] if no cards remain.
    pub fn draw(&mut self) -> Result<Card, DeckError> {
        self.cards.pop().ok_or_else(|| {
            warn!("draw from an empty deck");
            DeckError::Empty { missing: 1 }
        })
    }

    /// Draws `count` cards, or none at all if fewer remain.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::Empty`] with the shortfall if fewer than `count`
    /// cards remain. The deck is left untouched in that case.
    pub fn draw_many(&mut self, count: usize) -> Result<Vec<Card>, DeckError> {
        self.ensure(count)?;
        let split_at = self.cards.len() - count;
        let mut drawn = self.cards.split_off(split_at);
        drawn.reverse();
        Ok(drawn)
    }

    /// Checks that at least `count` cards remain.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::Empty`] with the shortfall otherwise.
    pub fn ensure(&self, count: usize) -> Result<(), DeckError> {
        let remaining = self.cards.len();
        if remaining < count {
            warn!("deck short by {} card(s)", count - remaining);
            return Err(DeckError::Empty {
                missing: count - remaining,
            });
        }
        Ok(())
    }

    /// Returns the number of cards left.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether no cards are left.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Returns the number of decks the shoe is rebuilt from.
    #[must_use]
    pub const fn decks(&self) -> u8 {
        self.decks
    }

    pub(crate) const fn set_decks(&mut self, decks: u8) {
        self.decks = decks;
    }
}
