//! A multi-player blackjack rules engine with optional `no_std` support.
//!
//! The crate provides a [`Game`] type that runs the full round flow: bets
//! and automatic rebuys, dealing from a cut-card [`Shoe`], hit / stand /
//! split / double-down decisions, dealer play, settlement, and a Hi-Lo
//! running count kept across rounds. Front ends read [`TableView`]
//! snapshots and forward one [`Action`] at a time.
//!
//! # Example
//!
//! ```
//! use std::collections::HashMap;
//!
//! use shoebox::{Action, Game, GameOptions};
//!
//! let mut game = Game::new(GameOptions::default(), 42);
//! let player = game.join(100).unwrap();
//!
//! game.start_round(&HashMap::from([(player, 10)])).unwrap();
//! while !game.is_round_over() {
//!     game.apply_action(Action::Stand).unwrap();
//! }
//! let result = game.settle().unwrap();
//! assert_eq!(result.players.len(), 1);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod error;
pub mod game;
pub mod hand;
pub mod input;
pub mod options;
pub mod result;
pub mod shoe;

// Re-export main types
pub use card::{Card, DECK_SIZE, Rank, Suit};
pub use error::{
    ActionError, BetError, InputError, ReshuffleError, SeatError, ShoeError, ShowdownError,
};
pub use game::{Action, Game, GameState, SlotView, TableView};
pub use hand::{DealerHand, Hand, HandStatus};
pub use options::{BLACKJACK_PAYS, DEALER_STANDS_ON, GameOptions};
pub use result::{HandOutcome, HandResult, PlayerResult, RoundResult};
pub use shoe::Shoe;
