//! Table rule sets.

use core::str::FromStr;

use crate::error::RulesError;

/// Largest bankroll, bet limit or dealer balance (in magnitude) a table
/// accepts, 2^53.
///
/// Settlement saturates rather than overflows, so amounts that grow past
/// this bound through winnings stay well-defined.
pub const MAX_BANKROLL: u64 = 1 << 53;

/// Read-only view of the thresholds a table plays by.
///
/// [`TableRules`] is the stock implementation; custom rule sets only need to
/// answer these getters.
pub trait Rules {
    /// Score a hand must not exceed. A two-card hand scoring exactly this is
    /// a natural.
    fn win_threshold(&self) -> u16;
    /// The dealer draws while below this score.
    fn dealer_stop(&self) -> u16;
    /// Number of 52-card decks in the shoe.
    fn deck_count(&self) -> u8;
    /// Cards dealt to a seat when it places its initial bet.
    fn initial_cards(&self) -> usize;
    /// Smallest accepted initial bet.
    fn min_bet(&self) -> u64;
    /// Largest accepted initial bet.
    fn max_bet(&self) -> u64;
    /// Bankroll a seat starts with when it joins.
    fn starting_bankroll(&self) -> u64;
    /// Bankroll the dealer starts with.
    fn dealer_bankroll(&self) -> i64;
    /// Maximum number of splits per seat and round.
    fn max_splits(&self) -> u8;
}

/// Preset rule variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Variant {
    /// 21 to win, one deck.
    #[default]
    Classic,
    /// 20 to win, one deck.
    Round,
    /// 25 to win, two decks.
    Extreme,
}

impl Variant {
    /// Returns the win threshold of the variant.
    #[must_use]
    pub const fn win_threshold(self) -> u16 {
        match self {
            Self::Classic => 21,
            Self::Round => 20,
            Self::Extreme => 25,
        }
    }

    /// Returns the number of decks of the variant.
    #[must_use]
    pub const fn deck_count(self) -> u8 {
        match self {
            Self::Classic | Self::Round => 1,
            Self::Extreme => 2,
        }
    }
}

impl FromStr for Variant {
    type Err = RulesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("classic") {
            Ok(Self::Classic)
        } else if s.eq_ignore_ascii_case("round") {
            Ok(Self::Round)
        } else if s.eq_ignore_ascii_case("extreme") {
            Ok(Self::Extreme)
        } else {
            Err(RulesError::UnknownVariant)
        }
    }
}

/// Configuration for a blackjack table.
///
/// Use the builder pattern to customize rules:
///
/// ```
/// use bjtable::TableRules;
///
/// let rules = TableRules::default()
///     .with_decks(2)
///     .with_bet_limits(10, 500)
///     .with_dealer_stop(17);
/// assert!(rules.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableRules {
    /// Score a hand must not exceed.
    pub win_threshold: u16,
    /// The dealer draws while below this score.
    pub dealer_stop: u16,
    /// Number of decks.
    pub decks: u8,
    /// Cards dealt with the initial bet.
    pub initial_cards: usize,
    /// Minimum initial bet.
    pub min_bet: u64,
    /// Maximum initial bet.
    pub max_bet: u64,
    /// Starting bankroll for each seat.
    pub starting_bankroll: u64,
    /// Starting bankroll for the dealer.
    pub dealer_bankroll: i64,
    /// Maximum number of splits allowed per seat.
    pub max_splits: u8,
}

impl Default for TableRules {
    fn default() -> Self {
        Self {
            win_threshold: 21,
            dealer_stop: 17,
            decks: 1,
            initial_cards: 2,
            min_bet: 100,
            max_bet: 10_000,
            starting_bankroll: 4_000,
            dealer_bankroll: 100_000,
            max_splits: 3,
        }
    }
}

impl TableRules {
    /// Creates the rule set of a preset variant.
    ///
    /// # Example
    ///
    /// ```
    /// use bjtable::{TableRules, Variant};
    ///
    /// let rules = TableRules::variant(Variant::Extreme);
    /// assert_eq!(rules.win_threshold, 25);
    /// assert_eq!(rules.decks, 2);
    /// ```
    #[must_use]
    pub fn variant(variant: Variant) -> Self {
        Self {
            win_threshold: variant.win_threshold(),
            decks: variant.deck_count(),
            ..Self::default()
        }
    }

    /// Checks that the thresholds are coherent.
    ///
    /// # Errors
    ///
    /// Returns an error if the win threshold is zero, there are no decks,
    /// the bet limits are inverted, the dealer would stop above the win
    /// threshold, or a bet limit or bankroll lies beyond [`MAX_BANKROLL`].
    pub const fn validate(&self) -> Result<(), RulesError> {
        if self.win_threshold == 0 {
            return Err(RulesError::ZeroWinThreshold);
        }
        if self.decks == 0 {
            return Err(RulesError::NoDecks);
        }
        if self.min_bet > self.max_bet {
            return Err(RulesError::BetBounds {
                min: self.min_bet,
                max: self.max_bet,
            });
        }
        if self.dealer_stop > self.win_threshold {
            return Err(RulesError::DealerStop {
                stop: self.dealer_stop,
                win: self.win_threshold,
            });
        }
        if self.max_bet > MAX_BANKROLL
            || self.starting_bankroll > MAX_BANKROLL
            || self.dealer_bankroll.unsigned_abs() > MAX_BANKROLL
        {
            return Err(RulesError::MoneyOutOfRange { max: MAX_BANKROLL });
        }
        Ok(())
    }

    /// Sets the win threshold.
    ///
    /// # Example
    ///
    /// ```
    /// use bjtable::TableRules;
    ///
    /// let rules = TableRules::default().with_win_threshold(20);
    /// assert_eq!(rules.win_threshold, 20);
    /// ```
    #[must_use]
    pub const fn with_win_threshold(mut self, win_threshold: u16) -> Self {
        self.win_threshold = win_threshold;
        self
    }

    /// Sets the score at which the dealer stops drawing.
    #[must_use]
    pub const fn with_dealer_stop(mut self, dealer_stop: u16) -> Self {
        self.dealer_stop = dealer_stop;
        self
    }

    /// Sets the number of decks.
    ///
    /// # Example
    ///
    /// ```
    /// use bjtable::TableRules;
    ///
    /// let rules = TableRules::default().with_decks(2);
    /// assert_eq!(rules.decks, 2);
    /// ```
    #[must_use]
    pub const fn with_decks(mut self, decks: u8) -> Self {
        self.decks = decks;
        self
    }

    /// Sets the number of cards dealt with the initial bet.
    #[must_use]
    pub const fn with_initial_cards(mut self, initial_cards: usize) -> Self {
        self.initial_cards = initial_cards;
        self
    }

    /// Sets the minimum and maximum initial bet.
    ///
    /// # Example
    ///
    /// ```
    /// use bjtable::TableRules;
    ///
    /// let rules = TableRules::default().with_bet_limits(5, 50);
    /// assert_eq!((rules.min_bet, rules.max_bet), (5, 50));
    /// ```
    #[must_use]
    pub const fn with_bet_limits(mut self, min_bet: u64, max_bet: u64) -> Self {
        self.min_bet = min_bet;
        self.max_bet = max_bet;
        self
    }

    /// Sets the starting bankroll of each seat.
    #[must_use]
    pub const fn with_starting_bankroll(mut self, bankroll: u64) -> Self {
        self.starting_bankroll = bankroll;
        self
    }

    /// Sets the starting bankroll of the dealer.
    #[must_use]
    pub const fn with_dealer_bankroll(mut self, bankroll: i64) -> Self {
        self.dealer_bankroll = bankroll;
        self
    }

    /// Sets the maximum number of splits per seat.
    ///
    /// # Example
    ///
    /// ```
    /// use bjtable::TableRules;
    ///
    /// let rules = TableRules::default().with_max_splits(1);
    /// assert_eq!(rules.max_splits, 1);
    /// ```
    #[must_use]
    pub const fn with_max_splits(mut self, max_splits: u8) -> Self {
        self.max_splits = max_splits;
        self
    }
}

impl Rules for TableRules {
    fn win_threshold(&self) -> u16 {
        self.win_threshold
    }

    fn dealer_stop(&self) -> u16 {
        self.dealer_stop
    }

    fn deck_count(&self) -> u8 {
        self.decks
    }

    fn initial_cards(&self) -> usize {
        self.initial_cards
    }

    fn min_bet(&self) -> u64 {
        self.min_bet
    }

    fn max_bet(&self) -> u64 {
        self.max_bet
    }

    fn starting_bankroll(&self) -> u64 {
        self.starting_bankroll
    }

    fn dealer_bankroll(&self) -> i64 {
        self.dealer_bankroll
    }

    fn max_splits(&self) -> u8 {
        self.max_splits
    }
}
