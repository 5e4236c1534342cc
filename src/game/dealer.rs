use alloc::vec::Vec;

use crate::card::Card;
use crate::error::ShowdownError;
use crate::hand::{Hand, count_value};
use crate::options::DEALER_STANDS_ON;
use crate::result::{HandOutcome, HandResult, PlayerResult, RoundResult};

use super::{Game, GameState};

#[cfg(feature = "std")]
fn round_down(amount: f64) -> usize {
    amount.floor() as usize
}

#[cfg(all(not(feature = "std"), feature = "alloc"))]
fn round_down(amount: f64) -> usize {
    libm::floor(amount) as usize
}

/// Compares one player hand against the dealer's final hand.
fn compare(hand: &Hand, dealer_cards: &[Card]) -> HandOutcome {
    let player_value = hand.value();
    let dealer_value = crate::hand::total(dealer_cards);
    let dealer_blackjack = crate::hand::is_blackjack(dealer_cards);

    if hand.is_natural() {
        if dealer_blackjack {
            HandOutcome::BlackjackPush
        } else {
            HandOutcome::Blackjack
        }
    } else if dealer_blackjack || player_value > 21 {
        HandOutcome::Lose
    } else if dealer_value > 21 || player_value > dealer_value {
        HandOutcome::Win
    } else if player_value < dealer_value {
        HandOutcome::Lose
    } else {
        HandOutcome::Push
    }
}

/// Chip change for a bet at the given multiplier. Fractions of a chip are
/// dropped.
#[expect(
    clippy::cast_precision_loss,
    clippy::cast_possible_wrap,
    reason = "f64 and isize have sufficient range for monetary values"
)]
fn payout(bet: usize, multiplier: f64) -> isize {
    let amount = round_down(bet as f64 * multiplier.abs()) as isize;
    if multiplier >= 0.0 { amount } else { -amount }
}

/// Applies `owed` to `balance` without going below zero. Returns the change
/// actually applied and the part of a loss that could not be collected.
fn apply_net(balance: &mut usize, owed: isize) -> (isize, usize) {
    let before = *balance;
    *balance = before.saturating_add_signed(owed);

    if *balance >= before {
        (owed, 0)
    } else {
        let taken = before - *balance;
        let applied = isize::try_from(taken).map_or(isize::MIN, |taken| -taken);
        (applied, owed.unsigned_abs() - taken)
    }
}

impl Game {
    /// Dealer plays their hand: the hole card is revealed and the dealer
    /// draws while below 17, soft or hard.
    ///
    /// Returns the cards drawn by the dealer.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in dealer play or the shoe is
    /// exhausted while the dealer must draw.
    pub fn dealer_play(&mut self) -> Result<Vec<Card>, ShowdownError> {
        if self.state != GameState::DealerPlay {
            return Err(ShowdownError::InvalidState);
        }

        self.dealer_hand.reveal_hole();

        let mut drawn_cards = Vec::new();
        while self.dealer_hand.value() < DEALER_STANDS_ON {
            let card = self.shoe.draw_one()?;
            self.dealer_hand.add_card(card);
            drawn_cards.push(card);
        }
        log::debug!(
            "dealer stands on {} after drawing {}",
            self.dealer_hand.value(),
            drawn_cards.len()
        );

        self.state = GameState::Settlement;
        Ok(drawn_cards)
    }

    /// Settles every slot against the dealer and folds the round's cards
    /// into the running count.
    ///
    /// Plays out the dealer first if that has not happened yet. Each slot
    /// pays `bet × multiplier` to its owner, with the multiplier doubled for
    /// doubled-down slots. Balances never drop below zero; a loss larger
    /// than the balance is reported as uncollected.
    ///
    /// # Errors
    ///
    /// Returns an error if player decisions are still outstanding, the round
    /// was already settled, or the shoe is exhausted during dealer play.
    pub fn settle(&mut self) -> Result<RoundResult, ShowdownError> {
        if self.state == GameState::DealerPlay {
            self.dealer_play()?;
        }
        if self.state != GameState::Settlement {
            return Err(ShowdownError::InvalidState);
        }

        let dealer_cards = self.dealer_hand.cards();
        let dealer_value = self.dealer_hand.value();

        let mut hand_results = Vec::with_capacity(self.hands.len());
        for (slot, hand) in self.hands.iter().enumerate() {
            let outcome = compare(hand, dealer_cards);
            let mut multiplier = outcome.base_multiplier();
            if hand.is_doubled() {
                multiplier *= 2.0;
            }

            hand_results.push(HandResult {
                slot,
                owner: hand.owner(),
                outcome,
                doubled: hand.is_doubled(),
                multiplier,
                bet: hand.bet(),
                delta: payout(hand.bet(), multiplier),
                player_value: hand.value(),
                dealer_value,
            });
        }

        for (hand, result) in self.hands.iter_mut().zip(&hand_results) {
            hand.set_message(result.outcome.label());
        }

        let mut players = Vec::with_capacity(self.players.len());
        for &player_id in &self.players {
            let owed: isize = hand_results
                .iter()
                .filter(|result| result.owner == player_id)
                .map(|result| result.delta)
                .sum();

            let Some(balance) = self.chips.get_mut(&player_id) else {
                continue;
            };
            let (net, uncollected) = apply_net(balance, owed);
            if uncollected > 0 {
                log::debug!("player {player_id} short {uncollected} chip(s) at settlement");
            }
            players.push(PlayerResult {
                player_id,
                net,
                uncollected,
                balance: *balance,
            });
        }

        let round_count = count_value(self.dealer_hand.cards())
            + self
                .hands
                .iter()
                .map(|hand| count_value(hand.cards()))
                .sum::<i32>();
        self.running_count += round_count;

        log::info!(
            "round settled: dealer {dealer_value}, {} slot(s), count {:+} (running {})",
            hand_results.len(),
            round_count,
            self.running_count
        );

        self.state = GameState::Done;

        Ok(RoundResult {
            hands: hand_results,
            players,
            dealer_value,
            dealer_bust: self.dealer_hand.is_bust(),
            dealer_blackjack: self.dealer_hand.is_blackjack(),
            round_count,
        })
    }
}
