//! Hand evaluation plus player-slot and dealer hand representations.

extern crate alloc;

use alloc::vec::Vec;

use crate::card::{Card, Rank};

fn evaluate_cards(cards: &[Card]) -> (u8, bool) {
    let mut value: u8 = 0;
    let mut aces: u8 = 0;

    for card in cards {
        if card.rank == Rank::Ace {
            aces += 1;
        }
        value = value.saturating_add(card.value());
    }

    while value > 21 && aces > 0 {
        value -= 10;
        aces -= 1;
    }

    let is_soft = aces > 0 && value <= 21;
    (value, is_soft)
}

/// Best total for `cards`, counting aces as 11 and demoting them to 1 one
/// at a time while the total is over 21.
///
/// The result may exceed 21; the caller decides what a bust means.
#[must_use]
pub fn total(cards: &[Card]) -> u8 {
    evaluate_cards(cards).0
}

/// Returns whether `cards` still holds an ace counted as 11.
#[must_use]
pub fn is_soft(cards: &[Card]) -> bool {
    evaluate_cards(cards).1
}

/// Returns whether `cards` is a natural: exactly two cards totalling 21.
#[must_use]
pub fn is_blackjack(cards: &[Card]) -> bool {
    cards.len() == 2 && total(cards) == 21
}

/// Sum of the Hi-Lo count values of `cards`.
#[must_use]
pub fn count_value(cards: &[Card]) -> i32 {
    cards.iter().map(Card::count_value).sum()
}

/// Hand status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandStatus {
    /// Hand is waiting for (or able to take) decisions.
    Active,
    /// Player has stood.
    Stand,
    /// Hand has gone over 21.
    Bust,
    /// Player doubled down and received their single card.
    DoubledDown,
    /// Hand is a natural and resolved without decisions.
    Blackjack,
}

/// One player slot: a hand of cards plus the bookkeeping settlement needs.
///
/// Split siblings are separate `Hand`s sharing the same `owner`.
#[derive(Debug, Clone)]
pub struct Hand {
    /// Cards in the hand.
    cards: Vec<Card>,
    /// Player this hand pays out to.
    owner: u8,
    /// Bet placed by the owner at the start of the round.
    bet: usize,
    /// Current status of the hand.
    status: HandStatus,
    /// Whether the owner doubled down on this hand.
    doubled: bool,
    /// Whether this hand is from a split.
    from_split: bool,
    /// Status message shown next to the hand.
    message: &'static str,
}

impl Hand {
    /// Creates a new empty hand for `owner` with the given bet.
    #[must_use]
    pub const fn new(owner: u8, bet: usize) -> Self {
        Self {
            cards: Vec::new(),
            owner,
            bet,
            status: HandStatus::Active,
            doubled: false,
            from_split: false,
            message: "",
        }
    }

    /// Creates a split sibling holding a single card.
    #[must_use]
    pub fn from_split(card: Card, owner: u8, bet: usize) -> Self {
        Self {
            cards: alloc::vec![card],
            owner,
            bet,
            status: HandStatus::Active,
            doubled: false,
            from_split: true,
            message: "split",
        }
    }

    /// Mutable access to the cards, for dealing from the shoe.
    pub(crate) const fn cards_mut(&mut self) -> &mut Vec<Card> {
        &mut self.cards
    }

    /// Adds a card to the hand, marking it bust if it goes over 21.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
        if self.value() > 21 {
            self.status = HandStatus::Bust;
        }
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the player this hand pays out to.
    #[must_use]
    pub const fn owner(&self) -> u8 {
        self.owner
    }

    /// Returns the bet amount for this hand.
    #[must_use]
    pub const fn bet(&self) -> usize {
        self.bet
    }

    /// Returns the current status of the hand.
    #[must_use]
    pub const fn status(&self) -> HandStatus {
        self.status
    }

    /// Sets the hand status.
    pub const fn set_status(&mut self, status: HandStatus) {
        self.status = status;
    }

    /// Returns whether the owner doubled down on this hand.
    #[must_use]
    pub const fn is_doubled(&self) -> bool {
        self.doubled
    }

    /// Flags the hand as doubled down. The stored bet is left unchanged;
    /// settlement doubles the outcome multiplier instead.
    pub const fn mark_doubled(&mut self) {
        self.doubled = true;
    }

    /// Returns whether this hand is from a split.
    #[must_use]
    pub const fn is_from_split(&self) -> bool {
        self.from_split
    }

    /// Status message for display ("bust", "stand", "split", ...).
    #[must_use]
    pub const fn message(&self) -> &'static str {
        self.message
    }

    /// Replaces the status message.
    pub const fn set_message(&mut self, message: &'static str) {
        self.message = message;
    }

    /// Calculates the value of the hand.
    #[must_use]
    pub fn value(&self) -> u8 {
        total(&self.cards)
    }

    /// Returns whether the hand is soft.
    #[must_use]
    pub fn is_soft(&self) -> bool {
        is_soft(&self.cards)
    }

    /// Returns whether the hand is a natural that earns the blackjack bonus.
    ///
    /// A two-card 21 made after a split is an ordinary 21.
    #[must_use]
    pub fn is_natural(&self) -> bool {
        !self.from_split && is_blackjack(&self.cards)
    }

    /// Returns whether the hand can be split.
    #[must_use]
    pub fn can_split(&self) -> bool {
        self.cards.len() == 2 && self.cards[0].rank == self.cards[1].rank
    }

    /// Returns whether the hand qualifies for doubling down (two cards
    /// totalling 10 or 11).
    #[must_use]
    pub fn can_double(&self) -> bool {
        self.cards.len() == 2 && matches!(self.value(), 10 | 11)
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Removes and returns the second card (for splitting).
    pub fn take_split_card(&mut self) -> Option<Card> {
        if self.can_split() {
            self.from_split = true;
            self.message = "split";
            self.cards.pop()
        } else {
            None
        }
    }
}

/// The dealer's hand.
#[derive(Debug, Clone)]
pub struct DealerHand {
    /// Cards in the hand.
    cards: Vec<Card>,
    /// Whether the hole card is revealed.
    hole_revealed: bool,
}

impl DealerHand {
    /// Creates a new empty dealer hand.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            cards: Vec::new(),
            hole_revealed: false,
        }
    }

    pub(crate) const fn cards_mut(&mut self) -> &mut Vec<Card> {
        &mut self.cards
    }

    /// Adds a card to the hand.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Returns all cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the cards a player is allowed to see.
    #[must_use]
    pub fn visible_cards(&self) -> &[Card] {
        if self.hole_revealed {
            &self.cards
        } else {
            &self.cards[..self.cards.len().min(1)]
        }
    }

    /// Returns the visible card (first card).
    #[must_use]
    pub fn up_card(&self) -> Option<&Card> {
        self.cards.first()
    }

    /// Returns whether the hole card is revealed.
    #[must_use]
    pub const fn is_hole_revealed(&self) -> bool {
        self.hole_revealed
    }

    /// Reveals the hole card.
    pub const fn reveal_hole(&mut self) {
        self.hole_revealed = true;
    }

    /// Calculates the visible value (only up card if hole not revealed).
    #[must_use]
    pub fn visible_value(&self) -> u8 {
        total(self.visible_cards())
    }

    /// Calculates the full value of the hand.
    #[must_use]
    pub fn value(&self) -> u8 {
        total(&self.cards)
    }

    /// Returns whether the hand is a blackjack.
    #[must_use]
    pub fn is_blackjack(&self) -> bool {
        is_blackjack(&self.cards)
    }

    /// Returns whether the hand is bust.
    #[must_use]
    pub fn is_bust(&self) -> bool {
        self.value() > 21
    }

    /// Returns whether the hand is soft (contains an ace counted as 11).
    #[must_use]
    pub fn is_soft(&self) -> bool {
        is_soft(&self.cards)
    }

    /// Returns the number of cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Clears the hand for a new round.
    pub fn clear(&mut self) {
        self.cards.clear();
        self.hole_revealed = false;
    }
}

impl Default for DealerHand {
    fn default() -> Self {
        Self::new()
    }
}
