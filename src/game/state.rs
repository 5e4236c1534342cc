//! Round state, actions, and table snapshots.

use alloc::vec::Vec;
use core::fmt;

use crate::card::Card;
use crate::hand::HandStatus;

/// Round state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    /// No round has been played yet.
    WaitingForPlayers,
    /// Validating bets and topping up short balances.
    Betting,
    /// Dealing initial cards.
    Dealing,
    /// Waiting for a decision on the active slot.
    InProgress,
    /// Dealer plays out their hand.
    DealerPlay,
    /// Comparing hands and paying out.
    Settlement,
    /// Round has been settled; a new round may start.
    Done,
}

/// A player decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    /// Draw one card.
    Hit,
    /// Keep the current hand.
    Stand,
    /// Split a pair into two hands.
    Split,
    /// Take exactly one more card at double the stakes.
    DoubleDown,
}

impl Action {
    /// Display name, as offered in an options menu.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Hit => "hit",
            Self::Stand => "stand",
            Self::Split => "split",
            Self::DoubleDown => "double down",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One player slot as shown to a front end.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotView {
    /// Owning player.
    pub owner: u8,
    /// Cards in the slot.
    pub cards: Vec<Card>,
    /// Best total.
    pub total: u8,
    /// Slot status.
    pub status: HandStatus,
    /// Status or outcome message.
    pub message: &'static str,
    /// Bet riding on the slot.
    pub bet: usize,
    /// Whether the slot was doubled down.
    pub doubled: bool,
}

/// Snapshot of the table for presentation adapters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableView {
    /// Round state.
    pub state: GameState,
    /// Dealer cards a player may see (hole card hidden during play).
    pub dealer_cards: Vec<Card>,
    /// Total of the visible dealer cards.
    pub dealer_total: u8,
    /// Player slots in turn order.
    pub slots: Vec<SlotView>,
    /// Index into `slots` of the slot awaiting a decision.
    pub active_slot: Option<usize>,
    /// `(player_id, balance)` in seating order.
    pub balances: Vec<(u8, usize)>,
    /// Players whose bet was clamped to the table minimum this round.
    pub clamped: Vec<u8>,
    /// Players topped up by the automatic rebuy this round.
    pub rebought: Vec<u8>,
    /// Whether the shoe was reshuffled before this round's deal.
    pub reshuffled: bool,
    /// Undealt cards left in the shoe.
    pub cards_remaining: usize,
}
