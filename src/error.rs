//! Error types for table operations.
//!
//! Every variant except the deck-exhaustion ones is an *illegal* request:
//! the table rejected it and nothing changed. Deck exhaustion means the
//! round cannot continue fairly and should be settled early.

use thiserror::Error;

/// Errors raised by the deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DeckError {
    /// Not enough cards left to complete the draw.
    #[error("not enough cards in the deck ({missing} missing)")]
    Empty {
        /// Number of cards that were unavailable.
        missing: usize,
    },
}

impl DeckError {
    /// Returns the number of cards that were unavailable.
    #[must_use]
    pub const fn missing(&self) -> usize {
        match *self {
            Self::Empty { missing } => missing,
        }
    }
}

/// Errors that can occur while placing an initial bet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BetError {
    /// No round is accepting bets.
    #[error("invalid table state for betting")]
    InvalidState,
    /// Seat not found.
    #[error("seat not found")]
    SeatNotFound,
    /// The seat already bet this round.
    #[error("an initial bet was already placed this round")]
    AlreadyPlaced,
    /// Bet amount is zero.
    #[error("bet amount is zero")]
    ZeroBet,
    /// Bet is below the table minimum.
    #[error("bet is below the table minimum of {min}")]
    BelowMinimum {
        /// The table minimum.
        min: u64,
    },
    /// Bet is above the table maximum.
    #[error("bet is above the table maximum of {max}")]
    AboveMaximum {
        /// The table maximum.
        max: u64,
    },
    /// Insufficient funds.
    #[error("insufficient funds")]
    InsufficientFunds,
    /// Not enough cards to deal the initial hand.
    #[error("not enough cards to deal the hand ({missing} missing)")]
    DeckEmpty {
        /// Number of cards that were unavailable.
        missing: usize,
    },
}

impl BetError {
    /// Returns whether the bet was rejected as illegal (as opposed to the
    /// deck running out).
    #[must_use]
    pub const fn is_illegal(&self) -> bool {
        !matches!(self, Self::DeckEmpty { .. })
    }
}

/// Errors that can occur while placing an insurance bet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InsuranceError {
    /// No round is accepting side bets.
    #[error("invalid table state for insurance")]
    InvalidState,
    /// Seat not found.
    #[error("seat not found")]
    SeatNotFound,
    /// The dealer's visible card is not an Ace.
    #[error("insurance requires the dealer to show an Ace")]
    NotOffered,
    /// The seat has not placed an initial bet.
    #[error("seat has not placed an initial bet")]
    NoBet,
    /// Half the initial bet rounds down to zero.
    #[error("initial bet is too small to insure")]
    BetTooSmall,
    /// The seat already took insurance this round.
    #[error("insurance already placed this round")]
    AlreadyPlaced,
    /// Insufficient funds for insurance.
    #[error("insufficient funds for insurance")]
    InsufficientFunds,
}

/// Errors that can occur during player actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ActionError {
    /// No round is in progress.
    #[error("invalid table state for this action")]
    InvalidState,
    /// Seat not found.
    #[error("seat not found")]
    SeatNotFound,
    /// Hand not found.
    #[error("hand not found")]
    HandNotFound,
    /// Cannot double down on this hand.
    #[error("cannot double down on this hand")]
    CannotDouble,
    /// Cannot split this hand.
    #[error("cannot split this hand")]
    CannotSplit,
    /// Maximum splits reached.
    #[error("maximum splits reached")]
    MaxSplitsReached,
    /// Insufficient funds for this action.
    #[error("insufficient funds for this action")]
    InsufficientFunds,
    /// Not enough cards left to carry out the action.
    #[error("not enough cards in the deck ({missing} missing)")]
    DeckEmpty {
        /// Number of cards that were unavailable.
        missing: usize,
    },
}

impl ActionError {
    /// Returns whether the action was rejected as illegal (as opposed to the
    /// deck running out).
    #[must_use]
    pub const fn is_illegal(&self) -> bool {
        !matches!(self, Self::DeckEmpty { .. })
    }
}

impl From<DeckError> for ActionError {
    fn from(err: DeckError) -> Self {
        Self::DeckEmpty {
            missing: err.missing(),
        }
    }
}

impl From<DeckError> for BetError {
    fn from(err: DeckError) -> Self {
        Self::DeckEmpty {
            missing: err.missing(),
        }
    }
}

/// Errors that can occur when starting or finishing a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RoundError {
    /// A round is already in progress.
    #[error("a round is already in progress")]
    InProgress,
    /// No round has been started.
    #[error("no round in progress")]
    NoRound,
}

/// Errors that can occur when seating a player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SeatError {
    /// Every seat is taken.
    #[error("the table is full")]
    TableFull,
    /// Players can only join between rounds.
    #[error("cannot join while a round is in progress")]
    RoundInProgress,
    /// The bankroll exceeds the table's money bound.
    #[error("bankroll exceeds the table limit of {max}")]
    BankrollTooLarge {
        /// The largest accepted bankroll.
        max: u64,
    },
}

/// Errors found when validating a rule set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RulesError {
    /// The win threshold is zero.
    #[error("win threshold must be positive")]
    ZeroWinThreshold,
    /// The shoe has no decks.
    #[error("at least one deck is required")]
    NoDecks,
    /// The minimum bet exceeds the maximum bet.
    #[error("minimum bet {min} exceeds maximum bet {max}")]
    BetBounds {
        /// Configured minimum.
        min: u64,
        /// Configured maximum.
        max: u64,
    },
    /// The dealer would stop above the win threshold.
    #[error("dealer stop {stop} exceeds win threshold {win}")]
    DealerStop {
        /// Configured dealer stop.
        stop: u16,
        /// Configured win threshold.
        win: u16,
    },
    /// A bet limit or bankroll exceeds the table's money bound.
    #[error("bet limits and bankrolls must not exceed {max}")]
    MoneyOutOfRange {
        /// The largest accepted amount.
        max: u64,
    },
    /// The variant name is not recognised.
    #[error("unknown rule variant")]
    UnknownVariant,
}
