//! Error types for game operations.

use thiserror::Error;

use crate::game::Action;

/// Errors raised by the shoe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ShoeError {
    /// A draw would move the cursor past the end of the shoe.
    ///
    /// The cut card is always placed well before the end, so this only
    /// happens when the reshuffle-before-deal invariant has been broken.
    #[error("shoe exhausted: requested {requested} card(s), {remaining} remaining")]
    Exhausted {
        /// Number of cards requested.
        requested: usize,
        /// Number of undealt cards left.
        remaining: usize,
    },
}

/// Errors that can occur when seating or unseating players.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SeatError {
    /// Seats only change between rounds.
    #[error("seats can only change between rounds")]
    InvalidState,
    /// Every seat is taken.
    #[error("table is full ({0} seats)")]
    TableFull(usize),
    /// The player is not seated.
    #[error("player {0} not found")]
    PlayerNotFound(u8),
}

/// Errors that can occur when starting a round.
///
/// Out-of-range bets are not errors; they are clamped to the table minimum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BetError {
    /// A round is already in progress.
    #[error("invalid game state for betting")]
    InvalidState,
    /// A bet was given for a player who is not seated.
    #[error("player {0} not found")]
    PlayerNotFound(u8),
    /// Nobody is seated at the table.
    #[error("no players at the table")]
    NoPlayers,
    /// The shoe ran out while dealing.
    #[error(transparent)]
    Shoe(#[from] ShoeError),
}

/// Errors that can occur during player actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ActionError {
    /// Invalid game state for this action.
    #[error("invalid game state for this action")]
    InvalidState,
    /// No slot is waiting for a decision.
    #[error("no hand is waiting for a decision")]
    NoActiveHand,
    /// The action is not in the current legal set.
    #[error("{0} is not allowed on this hand")]
    IllegalAction(Action),
    /// The shoe ran out while drawing.
    #[error(transparent)]
    Shoe(#[from] ShoeError),
}

/// Errors that can occur during dealer play and settlement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ShowdownError {
    /// Invalid game state for showdown.
    #[error("invalid game state for showdown")]
    InvalidState,
    /// The shoe ran out while the dealer was drawing.
    #[error(transparent)]
    Shoe(#[from] ShoeError),
}

/// Errors that can occur during reshuffling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ReshuffleError {
    /// Invalid game state for reshuffling.
    #[error("invalid game state for reshuffling")]
    InvalidState,
}

/// Errors produced when parsing text typed into a console front end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InputError {
    /// The input was not a non-negative integer.
    #[error("malformed numeric input")]
    MalformedNumber,
    /// The input did not name an action.
    #[error("unknown action")]
    UnknownAction,
}
