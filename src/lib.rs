//! A blackjack table round engine with optional `no_std` support.
//!
//! The crate provides a [`Table`] that owns the shoe, the seats and the
//! dealer for one table. It validates bets and player actions, plays the
//! dealer, and settles every hand, insurance bet and bankroll at the end of
//! the round. Deciding *what* to do is left to [`DecisionPolicy`]
//! implementations, which a [`Session`] can drive automatically.
//!
//! # Example
//!
//! ```
//! use bjtable::{Action, Table, TableRules, Variant};
//!
//! // Live tables reseed from OS entropy; `Table::new` takes a fixed seed
//! // for replays and tests.
//! let mut table = Table::from_entropy(TableRules::variant(Variant::Classic));
//! let seat = table.join().unwrap();
//!
//! table.start_round().unwrap();
//! table.place_initial_bet(seat, 100).unwrap();
//! table.apply_action(seat, 0, Action::Stand).unwrap();
//! let report = table.finish_round().unwrap();
//!
//! let result = report.seat(seat).unwrap();
//! assert_eq!(result.net, -report.dealer_delta);
//! assert_eq!(
//!     table.seat(seat).unwrap().bankroll() as i64,
//!     4_000 + result.net
//! );
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod deck;
pub mod error;
pub mod hand;
pub mod policy;
pub mod result;
pub mod rules;
pub mod seat;
pub mod session;
pub mod table;

// Re-export main types
pub use card::{Card, DECK_SIZE, Rank, Suit};
pub use deck::Deck;
pub use error::{
    ActionError, BetError, DeckError, InsuranceError, RoundError, RulesError, SeatError,
};
pub use hand::{DealerHand, Hand, is_bust, is_natural, is_soft, score};
pub use policy::{BasicStrategy, DecisionPolicy, TableView};
pub use result::{HandOutcome, HandResult, SeatResult, SettlementReport};
pub use rules::{MAX_BANKROLL, Rules, TableRules, Variant};
pub use seat::Seat;
pub use session::Session;
pub use table::{Action, MAX_SEATS, RoundState, Table};
