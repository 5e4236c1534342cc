use alloc::vec::Vec;

use crate::card::Card;
use crate::error::{ActionError, ShoeError};
use crate::hand::{Hand, HandStatus};

use super::{Action, Game, GameState, TableView};

impl Game {
    /// Returns the actions the active slot may take.
    ///
    /// Hit and stand are always offered. Split is added for two cards of
    /// equal rank, double down for two cards totalling 10 or 11. Empty when
    /// no slot is waiting for a decision.
    #[must_use]
    pub fn legal_actions(&self) -> Vec<Action> {
        let Some(hand) = self.active_hand() else {
            return Vec::new();
        };

        let mut actions = alloc::vec![Action::Hit, Action::Stand];
        if hand.can_split() {
            actions.push(Action::Split);
        }
        if hand.can_double() {
            actions.push(Action::DoubleDown);
        }
        actions
    }

    fn ensure_legal(&self, action: Action) -> Result<usize, ActionError> {
        if self.state != GameState::InProgress {
            return Err(ActionError::InvalidState);
        }

        let slot = self.current_slot().ok_or(ActionError::NoActiveHand)?;
        if !self.legal_actions().contains(&action) {
            return Err(ActionError::IllegalAction(action));
        }

        Ok(slot)
    }

    /// Applies `action` to the active slot and returns the updated table.
    ///
    /// # Errors
    ///
    /// Returns [`ActionError::IllegalAction`] if `action` is not in
    /// [`legal_actions`](Self::legal_actions); the round is left unchanged
    /// and the caller may ask again.
    pub fn apply_action(&mut self, action: Action) -> Result<TableView, ActionError> {
        match action {
            Action::Hit => self.hit().map(|_| ()),
            Action::Stand => self.stand(),
            Action::Split => self.split(),
            Action::DoubleDown => self.double_down().map(|_| ()),
        }?;

        Ok(self.view())
    }

    /// Player action: Hit (draw a card).
    ///
    /// A bust ends the slot's turn; otherwise the slot stays active.
    ///
    /// # Errors
    ///
    /// Returns an error if no slot is waiting for a decision or the shoe is
    /// exhausted.
    pub fn hit(&mut self) -> Result<Card, ActionError> {
        let slot = self.ensure_legal(Action::Hit)?;
        let card = self.shoe.draw_one()?;

        let hand = &mut self.hands[slot];
        hand.add_card(card);
        log::debug!("slot {slot} hits {card}, total {}", hand.value());

        if hand.status() == HandStatus::Bust {
            hand.set_message("bust");
            self.advance_turn();
        }

        Ok(card)
    }

    /// Player action: Stand (keep current hand).
    ///
    /// # Errors
    ///
    /// Returns an error if no slot is waiting for a decision.
    pub fn stand(&mut self) -> Result<(), ActionError> {
        let slot = self.ensure_legal(Action::Stand)?;

        let hand = &mut self.hands[slot];
        hand.set_status(HandStatus::Stand);
        hand.set_message("stand");
        log::debug!("slot {slot} stands on {}", hand.value());

        self.advance_turn();
        Ok(())
    }

    /// Player action: Double down (flag the slot, receive exactly one card,
    /// end the turn).
    ///
    /// # Errors
    ///
    /// Returns an error if no slot is waiting for a decision, the hand is not
    /// two cards totalling 10 or 11, or the shoe is exhausted.
    pub fn double_down(&mut self) -> Result<Card, ActionError> {
        let slot = self.ensure_legal(Action::DoubleDown)?;
        let card = self.shoe.draw_one()?;

        let hand = &mut self.hands[slot];
        hand.mark_doubled();
        hand.add_card(card);
        if hand.status() == HandStatus::Active {
            hand.set_status(HandStatus::DoubledDown);
        }
        hand.set_message("double down");
        log::debug!("slot {slot} doubles down, draws {card}, total {}", hand.value());

        self.advance_turn();
        Ok(card)
    }

    /// Player action: Split (move the second card into a new sibling slot
    /// right after this one, then deal each hand one card).
    ///
    /// Both hands keep the owner and bet of the original slot. The original
    /// slot stays active.
    ///
    /// # Errors
    ///
    /// Returns an error if no slot is waiting for a decision, the hand is not
    /// a pair, or fewer than two cards remain in the shoe.
    pub fn split(&mut self) -> Result<(), ActionError> {
        let slot = self.ensure_legal(Action::Split)?;

        if self.shoe.remaining() < 2 {
            return Err(ShoeError::Exhausted {
                requested: 2,
                remaining: self.shoe.remaining(),
            }
            .into());
        }

        let hand = &mut self.hands[slot];
        let Some(split_card) = hand.take_split_card() else {
            return Err(ActionError::IllegalAction(Action::Split));
        };
        let sibling = Hand::from_split(split_card, hand.owner(), hand.bet());
        self.hands.insert(slot + 1, sibling);

        let first = self.shoe.draw_one()?;
        self.hands[slot].add_card(first);
        let second = self.shoe.draw_one()?;
        self.hands[slot + 1].add_card(second);
        log::debug!("slot {slot} splits, now {} slots", self.hands.len());

        self.skip_resolved();
        Ok(())
    }

    /// Marks a two-card 21 as resolved. Returns whether it was one.
    ///
    /// Only a hand that was never split is a blackjack; a split hand that
    /// makes 21 in two cards simply stands.
    pub(super) fn resolve_natural(hand: &mut Hand) -> bool {
        if hand.status() != HandStatus::Active || hand.len() != 2 || hand.value() != 21 {
            return false;
        }

        if hand.is_natural() {
            hand.set_status(HandStatus::Blackjack);
            hand.set_message("blackjack!");
        } else {
            hand.set_status(HandStatus::Stand);
            hand.set_message("21");
        }
        true
    }

    /// Ends the active slot's turn and moves on.
    fn advance_turn(&mut self) {
        self.turn += 1;
        self.skip_resolved();
    }

    /// Moves the turn forward past slots that need no decision, ending the
    /// player phase once every slot has been played.
    pub(super) fn skip_resolved(&mut self) {
        while let Some(hand) = self.hands.get_mut(self.turn) {
            if Self::resolve_natural(hand) || hand.status() != HandStatus::Active {
                self.turn += 1;
            } else {
                return;
            }
        }

        self.finish_player_turns();
    }

    pub(super) fn finish_player_turns(&mut self) {
        self.dealer_hand.reveal_hole();
        self.state = GameState::DealerPlay;
        log::debug!("player decisions done, dealer to play");
    }
}
