//! The multi-deck shoe with a cut card.

use alloc::vec::Vec;

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::card::{Card, DECK_SIZE, Rank, Suit};
use crate::error::ShoeError;

/// An ordered run of cards dealt front to back until the cut card.
///
/// `curr` is the index of the next undealt card and never exceeds the
/// shoe length. Once `curr` reaches `cut`, the shoe should be reshuffled
/// before the next round is dealt.
#[derive(Debug, Clone)]
pub struct Shoe {
    cards: Vec<Card>,
    curr: usize,
    cut: usize,
    cut_window: (f64, f64),
    rng: ChaCha8Rng,
}

impl Shoe {
    /// Builds `num_decks` unshuffled decks in suit-major order.
    ///
    /// The cut starts at zero, so a freshly built shoe reports
    /// [`needs_reshuffle`](Self::needs_reshuffle) until it is shuffled.
    #[must_use]
    pub fn build(num_decks: u8, cut_window: (f64, f64), seed: u64) -> Self {
        let mut cards = Vec::with_capacity(num_decks as usize * DECK_SIZE);

        for _ in 0..num_decks {
            for rank in Rank::ALL {
                for suit in Suit::ALL {
                    cards.push(Card::new(suit, rank));
                }
            }
        }

        Self {
            cards,
            curr: 0,
            cut: 0,
            cut_window,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Creates a shoe that deals `cards` in the given order and never asks
    /// for a reshuffle.
    ///
    /// Intended for tests and replays where the deal must be predetermined.
    #[must_use]
    pub fn stacked(cards: Vec<Card>) -> Self {
        let cut = cards.len();
        Self {
            cards,
            curr: 0,
            cut,
            cut_window: (1.0, 1.0),
            rng: ChaCha8Rng::seed_from_u64(0),
        }
    }

    /// Randomizes the card order, resets the cursor and draws a new cut.
    ///
    /// The cut is picked uniformly from `[lo, hi)` of the shoe length, where
    /// `(lo, hi)` is the configured cut window.
    pub fn shuffle(&mut self) {
        self.cards.shuffle(&mut self.rng);
        self.curr = 0;
        self.cut = self.pick_cut();
        log::debug!("shoe shuffled: {} cards, cut at {}", self.cards.len(), self.cut);
    }

    #[expect(
        clippy::cast_precision_loss,
        reason = "f64 has sufficient precision for card counts"
    )]
    fn pick_cut(&mut self) -> usize {
        let len = self.cards.len();
        if len == 0 {
            return 0;
        }

        let (lo, hi) = self.cut_window;
        let lo = ((len as f64) * lo) as usize;
        let hi = ((len as f64) * hi) as usize;
        let hi = hi.min(len);
        if lo >= hi {
            return lo.min(len - 1);
        }

        self.rng.random_range(lo..hi)
    }

    /// Appends the next `n` undealt cards to `hand` and advances the cursor.
    ///
    /// # Errors
    ///
    /// Returns [`ShoeError::Exhausted`] if fewer than `n` cards remain. No
    /// cards are dealt in that case.
    pub fn draw(&mut self, hand: &mut Vec<Card>, n: usize) -> Result<(), ShoeError> {
        let end = self.curr + n;
        if end > self.cards.len() {
            return Err(ShoeError::Exhausted {
                requested: n,
                remaining: self.remaining(),
            });
        }

        hand.extend_from_slice(&self.cards[self.curr..end]);
        log::trace!("drew {n} card(s), cursor {} -> {end}", self.curr);
        self.curr = end;
        Ok(())
    }

    /// Deals a single card.
    ///
    /// # Errors
    ///
    /// Returns [`ShoeError::Exhausted`] if the shoe is empty.
    pub fn draw_one(&mut self) -> Result<Card, ShoeError> {
        let card = self
            .cards
            .get(self.curr)
            .copied()
            .ok_or(ShoeError::Exhausted {
                requested: 1,
                remaining: 0,
            })?;
        self.curr += 1;
        log::trace!("drew {card}");
        Ok(card)
    }

    /// Returns whether the cursor has reached the cut card.
    #[must_use]
    pub const fn needs_reshuffle(&self) -> bool {
        self.curr >= self.cut
    }

    /// All cards in shoe order, dealt and undealt.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Total number of cards in the shoe.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the shoe holds no cards at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Index of the next undealt card.
    #[must_use]
    pub const fn cursor(&self) -> usize {
        self.curr
    }

    /// Cut position (reshuffle threshold).
    #[must_use]
    pub const fn cut(&self) -> usize {
        self.cut
    }

    /// Number of undealt cards.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.cards.len() - self.curr
    }
}
