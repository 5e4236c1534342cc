//! Round engine and session state.

use alloc::vec::Vec;
#[cfg(all(not(feature = "std"), feature = "alloc"))]
use hashbrown::HashMap;
#[cfg(feature = "std")]
use std::collections::HashMap;

use crate::card::{Card, DECK_SIZE};
use crate::error::{ReshuffleError, SeatError};
use crate::hand::{DealerHand, Hand};
use crate::options::GameOptions;
use crate::shoe::Shoe;

mod actions;
mod bet;
mod dealer;
pub mod state;

pub use state::{Action, GameState, SlotView, TableView};

/// A blackjack table that owns the shoe, the seated players' chips, and the
/// hands of the round in progress.
///
/// Player slots are kept as one flat list in turn order. Splitting a hand
/// inserts a sibling right after it; every slot records the player it pays
/// out to, so settlement never needs to look at how a hand came to be.
#[derive(Debug, Clone)]
pub struct Game {
    /// Cards in the shoe.
    shoe: Shoe,
    /// Table options.
    pub options: GameOptions,
    /// Current round state.
    state: GameState,
    /// Next player ID to assign. Zero is reserved for the dealer.
    next_id: u8,
    /// Seated player IDs in seating order.
    players: Vec<u8>,
    /// Player chips (`player_id` -> balance).
    chips: HashMap<u8, usize>,
    /// Most recent accepted bet per player, reused when a round is started
    /// without a bet for them.
    last_bets: HashMap<u8, usize>,
    /// Player slots for the current round, split siblings included.
    hands: Vec<Hand>,
    /// Dealer's hand.
    dealer_hand: DealerHand,
    /// Index into `hands` of the slot awaiting a decision.
    turn: usize,
    /// Running count across rounds.
    running_count: i32,
    /// Players whose bet was clamped this round.
    clamped: Vec<u8>,
    /// Players topped up by the rebuy this round.
    rebought: Vec<u8>,
    /// Whether the shoe was reshuffled before this round's deal.
    reshuffled: bool,
}

impl Game {
    /// Creates a new table with a freshly shuffled shoe.
    ///
    /// # Example
    ///
    /// ```
    /// use shoebox::{Game, GameOptions};
    ///
    /// let game = Game::new(GameOptions::default(), 42);
    /// assert_eq!(game.shoe().len(), 104);
    /// ```
    #[must_use]
    pub fn new(options: GameOptions, seed: u64) -> Self {
        let mut shoe = Shoe::build(options.decks, options.cut_window, seed);
        shoe.shuffle();
        Self::with_shoe(options, shoe)
    }

    /// Creates a table dealing from the given shoe as-is.
    #[must_use]
    pub fn with_shoe(options: GameOptions, shoe: Shoe) -> Self {
        Self {
            shoe,
            options,
            state: GameState::WaitingForPlayers,
            next_id: 1,
            players: Vec::new(),
            chips: HashMap::new(),
            last_bets: HashMap::new(),
            hands: Vec::new(),
            dealer_hand: DealerHand::new(),
            turn: 0,
            running_count: 0,
            clamped: Vec::new(),
            rebought: Vec::new(),
            reshuffled: false,
        }
    }

    const fn between_rounds(&self) -> bool {
        matches!(self.state, GameState::WaitingForPlayers | GameState::Done)
    }

    /// Reshuffles the shoe.
    ///
    /// The running count is left untouched.
    ///
    /// # Errors
    ///
    /// Returns an error if a round is in progress.
    pub fn reshuffle(&mut self) -> Result<(), ReshuffleError> {
        if !self.between_rounds() {
            return Err(ReshuffleError::InvalidState);
        }

        self.shoe.shuffle();
        Ok(())
    }

    /// Returns whether the cursor has passed the cut card.
    #[must_use]
    pub const fn needs_reshuffle(&self) -> bool {
        self.shoe.needs_reshuffle()
    }

    /// Read access to the shoe.
    #[must_use]
    pub const fn shoe(&self) -> &Shoe {
        &self.shoe
    }

    /// Number of seats at the table.
    ///
    /// An opening deal takes at most half of a full shoe, leaving the rest
    /// for hits and the dealer.
    ///
    /// # Example
    ///
    /// ```
    /// use shoebox::{Game, GameOptions};
    ///
    /// let game = Game::new(GameOptions::default(), 1);
    /// assert_eq!(game.max_players(), 25);
    /// ```
    #[must_use]
    pub fn max_players(&self) -> usize {
        let half_shoe = usize::from(self.options.decks) * DECK_SIZE / 2;
        (half_shoe.saturating_sub(2) / 2).min(usize::from(u8::MAX))
    }

    /// Seats a player with the specified balance.
    ///
    /// Returns the assigned player ID. IDs are handed out in increasing
    /// order, skipping zero and any ID still seated.
    ///
    /// # Errors
    ///
    /// Returns an error during a round or when every seat is taken.
    pub fn join(&mut self, chips: usize) -> Result<u8, SeatError> {
        if !self.between_rounds() {
            return Err(SeatError::InvalidState);
        }

        let max = self.max_players();
        if self.players.len() >= max {
            return Err(SeatError::TableFull(max));
        }

        let mut id = self.next_id;
        while self.players.contains(&id) {
            id = id.wrapping_add(1).max(1);
        }
        self.next_id = id.wrapping_add(1).max(1);

        self.players.push(id);
        self.chips.insert(id, chips);
        log::debug!("player {id} joined with {chips} chips");
        Ok(id)
    }

    /// Seats a player with the configured starting balance.
    ///
    /// # Errors
    ///
    /// See [`join`](Self::join).
    pub fn join_default(&mut self) -> Result<u8, SeatError> {
        self.join(self.options.starting_chips)
    }

    /// Removes a player and their chips from the table.
    ///
    /// # Errors
    ///
    /// Returns an error during a round or if the player is not seated.
    pub fn leave(&mut self, player_id: u8) -> Result<(), SeatError> {
        if !self.between_rounds() {
            return Err(SeatError::InvalidState);
        }
        if !self.players.contains(&player_id) {
            return Err(SeatError::PlayerNotFound(player_id));
        }

        self.players.retain(|&id| id != player_id);
        self.chips.remove(&player_id);
        self.last_bets.remove(&player_id);
        log::debug!("player {player_id} left");
        Ok(())
    }

    /// Returns the seated player IDs in seating order.
    #[must_use]
    pub fn players(&self) -> &[u8] {
        &self.players
    }

    /// Returns the number of seated players.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    /// Returns the number of undealt cards in the shoe.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.shoe.remaining()
    }

    /// Returns the current round state.
    #[must_use]
    pub const fn state(&self) -> GameState {
        self.state
    }

    /// Returns whether no slot is waiting for a player decision.
    #[must_use]
    pub const fn is_round_over(&self) -> bool {
        !matches!(
            self.state,
            GameState::Betting | GameState::Dealing | GameState::InProgress
        )
    }

    /// Returns the index of the slot awaiting a decision.
    #[must_use]
    pub fn current_slot(&self) -> Option<usize> {
        (self.state == GameState::InProgress && self.turn < self.hands.len()).then_some(self.turn)
    }

    /// Returns the player who owns the slot awaiting a decision.
    #[must_use]
    pub fn current_player(&self) -> Option<u8> {
        self.active_hand().map(Hand::owner)
    }

    /// Returns the hand awaiting a decision.
    #[must_use]
    pub fn active_hand(&self) -> Option<&Hand> {
        self.current_slot().and_then(|slot| self.hands.get(slot))
    }

    /// Returns all player slots of the current round in turn order.
    #[must_use]
    pub fn hands(&self) -> &[Hand] {
        &self.hands
    }

    /// Returns the slots owned by `player_id`.
    pub fn hands_of(&self, player_id: u8) -> impl Iterator<Item = &Hand> {
        self.hands.iter().filter(move |hand| hand.owner() == player_id)
    }

    /// Returns the dealer's hand.
    #[must_use]
    pub const fn dealer_hand(&self) -> &DealerHand {
        &self.dealer_hand
    }

    /// Returns the current balance for the specified player.
    #[must_use]
    pub fn get_chips(&self, player_id: u8) -> Option<usize> {
        self.chips.get(&player_id).copied()
    }

    /// Returns the bet the specified player placed (or will reuse).
    #[must_use]
    pub fn get_bet(&self, player_id: u8) -> Option<usize> {
        self.last_bets.get(&player_id).copied()
    }

    /// Returns the running count.
    #[must_use]
    pub const fn reveal_count(&self) -> i32 {
        self.running_count
    }

    /// Every card dealt in the current round: dealer first, then each slot.
    pub fn round_cards(&self) -> impl Iterator<Item = &Card> {
        self.dealer_hand
            .cards()
            .iter()
            .chain(self.hands.iter().flat_map(Hand::cards))
    }

    /// Returns a snapshot of the table for a front end.
    #[must_use]
    pub fn view(&self) -> TableView {
        let slots = self
            .hands
            .iter()
            .map(|hand| SlotView {
                owner: hand.owner(),
                cards: hand.cards().to_vec(),
                total: hand.value(),
                status: hand.status(),
                message: hand.message(),
                bet: hand.bet(),
                doubled: hand.is_doubled(),
            })
            .collect();

        let balances = self
            .players
            .iter()
            .map(|&id| (id, self.get_chips(id).unwrap_or(0)))
            .collect();

        TableView {
            state: self.state,
            dealer_cards: self.dealer_hand.visible_cards().to_vec(),
            dealer_total: self.dealer_hand.visible_value(),
            slots,
            active_slot: self.current_slot(),
            balances,
            clamped: self.clamped.clone(),
            rebought: self.rebought.clone(),
            reshuffled: self.reshuffled,
            cards_remaining: self.shoe.remaining(),
        }
    }

    /// Discards the previous round's hands and notices.
    fn clear_round(&mut self) {
        self.hands.clear();
        self.dealer_hand.clear();
        self.clamped.clear();
        self.rebought.clear();
        self.reshuffled = false;
        self.turn = 0;
    }
}
