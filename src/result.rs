//! Settlement report types.

extern crate alloc;

use alloc::vec::Vec;

use crate::options::BLACKJACK_PAYS;

/// Result of a single hand against the dealer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandOutcome {
    /// Player natural against a dealer without one.
    Blackjack,
    /// Both player and dealer have naturals.
    BlackjackPush,
    /// Player beats the dealer or the dealer busts.
    Win,
    /// Player busts, the dealer has a natural, or the dealer is higher.
    Lose,
    /// Equal totals.
    Push,
}

impl HandOutcome {
    /// Outcome multiplier before doubling.
    #[must_use]
    pub const fn base_multiplier(self) -> f64 {
        match self {
            Self::Blackjack => BLACKJACK_PAYS,
            Self::Win => 1.0,
            Self::Lose => -1.0,
            Self::BlackjackPush | Self::Push => 0.0,
        }
    }

    /// Label shown next to a settled hand.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Blackjack => "Player BJ!",
            Self::BlackjackPush => "BJ Push.",
            Self::Win => "Player Win",
            Self::Lose => "Player Lose",
            Self::Push => "Push",
        }
    }
}

/// Result for a single slot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HandResult {
    /// Slot index among the player hands (split siblings included).
    pub slot: usize,
    /// Player the slot pays out to.
    pub owner: u8,
    /// The outcome of the hand.
    pub outcome: HandOutcome,
    /// Whether the hand was doubled down.
    pub doubled: bool,
    /// Final multiplier applied to the bet (doubling included).
    pub multiplier: f64,
    /// The owner's bet.
    pub bet: usize,
    /// Signed chip change for this slot.
    pub delta: isize,
    /// The player's hand value.
    pub player_value: u8,
    /// The dealer's hand value.
    pub dealer_value: u8,
}

/// Result for a single player after settlement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerResult {
    /// The player ID.
    pub player_id: u8,
    /// Chip change actually applied to the balance.
    pub net: isize,
    /// Part of the slots' combined loss that exceeded the balance and was
    /// not collected.
    pub uncollected: usize,
    /// Balance after settlement.
    pub balance: usize,
}

/// Result of the entire round.
#[derive(Debug, Clone, PartialEq)]
pub struct RoundResult {
    /// Per-slot results in slot order.
    pub hands: Vec<HandResult>,
    /// Per-player totals in seating order.
    pub players: Vec<PlayerResult>,
    /// The dealer's final hand value.
    pub dealer_value: u8,
    /// Whether the dealer busted.
    pub dealer_bust: bool,
    /// Whether the dealer had blackjack.
    pub dealer_blackjack: bool,
    /// Count contributed by this round's cards.
    pub round_count: i32,
}
