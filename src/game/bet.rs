#[cfg(all(not(feature = "std"), feature = "alloc"))]
use hashbrown::HashMap;
#[cfg(feature = "std")]
use std::collections::HashMap;

use crate::error::{BetError, ShoeError};
use crate::hand::{Hand, HandStatus};

use super::{Game, GameState, TableView};

impl Game {
    /// Tops up every balance below the table minimum.
    fn rebuy(&mut self) {
        let min_bet = self.options.min_bet;
        let amount = self.options.rebuy_amount;

        for &player_id in &self.players {
            if let Some(balance) = self.chips.get_mut(&player_id) {
                if *balance < min_bet {
                    *balance += amount;
                    self.rebought.push(player_id);
                    log::info!("player {player_id} rebought for {amount}");
                }
            }
        }
    }

    /// Settles each player's wager for the round.
    ///
    /// Players missing from `bets` reuse their previous bet. A wager below
    /// the table minimum or above the player's balance is clamped to the
    /// minimum.
    fn collect_bets(&mut self, bets: &HashMap<u8, usize>) {
        let min_bet = self.options.min_bet;

        for &player_id in &self.players {
            let balance = self.chips.get(&player_id).copied().unwrap_or(0);
            let wager = bets
                .get(&player_id)
                .or_else(|| self.last_bets.get(&player_id))
                .copied()
                .unwrap_or(min_bet);

            let wager = if wager < min_bet || wager > balance {
                if wager != min_bet {
                    log::warn!(
                        "player {player_id} bet {wager} outside [{min_bet}, {balance}], using {min_bet}"
                    );
                    self.clamped.push(player_id);
                }
                min_bet
            } else {
                wager
            };

            self.last_bets.insert(player_id, wager);
        }
    }

    /// Two cards to the dealer, then two to each seated player.
    fn deal(&mut self) -> Result<(), ShoeError> {
        self.shoe.draw(self.dealer_hand.cards_mut(), 2)?;

        for &player_id in &self.players {
            let bet = self.last_bets.get(&player_id).copied().unwrap_or(0);
            let mut hand = Hand::new(player_id, bet);
            self.shoe.draw(hand.cards_mut(), 2)?;
            self.hands.push(hand);
        }
        Ok(())
    }

    /// Starts a new round: rebuys, bets, reshuffle if the cut card was
    /// reached, and the initial deal.
    ///
    /// The shoe is also reshuffled when fewer cards remain than the deal
    /// needs. The dealer and then each player receive two cards in turn. If
    /// the dealer has a natural, no player decisions are taken and the round
    /// goes straight to dealer play; otherwise player naturals resolve
    /// automatically and the first undecided slot becomes active.
    ///
    /// # Errors
    ///
    /// Returns an error if a round is already in progress, nobody is seated,
    /// a bet names a player who is not seated, or the shoe runs out while
    /// dealing. A failed deal discards the partial round and leaves the
    /// table ready for the next one.
    pub fn start_round(&mut self, bets: &HashMap<u8, usize>) -> Result<TableView, BetError> {
        if !self.between_rounds() {
            return Err(BetError::InvalidState);
        }

        if self.players.is_empty() {
            return Err(BetError::NoPlayers);
        }

        if let Some(&unknown) = bets.keys().find(|&&id| !self.players.contains(&id)) {
            return Err(BetError::PlayerNotFound(unknown));
        }

        self.clear_round();
        self.state = GameState::Betting;
        self.rebuy();
        self.collect_bets(bets);

        self.state = GameState::Dealing;
        let needed = 2 * (self.players.len() + 1);
        if self.shoe.needs_reshuffle() {
            log::info!("cut card reached at {}, reshuffling", self.shoe.cursor());
            self.shoe.shuffle();
            self.reshuffled = true;
        } else if self.shoe.remaining() < needed {
            log::info!(
                "{} card(s) left for a {needed}-card deal, reshuffling",
                self.shoe.remaining()
            );
            self.shoe.shuffle();
            self.reshuffled = true;
        }

        if let Err(err) = self.deal() {
            log::warn!("deal failed: {err}");
            self.clear_round();
            self.state = GameState::Done;
            return Err(err.into());
        }

        if self.dealer_hand.is_blackjack() {
            log::debug!("dealer natural, skipping player decisions");
            for hand in &mut self.hands {
                if !Self::resolve_natural(hand) {
                    hand.set_status(HandStatus::Stand);
                    hand.set_message("dealer blackjack");
                }
            }
            self.finish_player_turns();
        } else {
            self.state = GameState::InProgress;
            self.skip_resolved();
        }

        Ok(self.view())
    }
}
