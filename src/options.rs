//! Table configuration options.

/// A natural pays this multiple of the bet; fractions of a chip are dropped.
pub const BLACKJACK_PAYS: f64 = 1.5;

/// The dealer draws while below this total, soft or hard.
pub const DEALER_STANDS_ON: u8 = 17;

/// Configuration options for a blackjack table.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use shoebox::GameOptions;
///
/// let options = GameOptions::default()
///     .with_decks(6)
///     .with_min_bet(10)
///     .with_rebuy_amount(250);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct GameOptions {
    /// Number of decks in the shoe.
    pub decks: u8,
    /// Table minimum bet.
    pub min_bet: usize,
    /// Chips added to any balance below the minimum before betting.
    pub rebuy_amount: usize,
    /// Balance given to players seated with [`Game::join_default`](crate::Game::join_default).
    pub starting_chips: usize,
    /// Half-open fraction window `[lo, hi)` of the shoe the cut card is
    /// placed in.
    pub cut_window: (f64, f64),
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            decks: 2,
            min_bet: 5,
            rebuy_amount: 100,
            starting_chips: 100,
            cut_window: (1.0 / 2.0, 2.0 / 3.0),
        }
    }
}

impl GameOptions {
    /// Sets the number of decks.
    ///
    /// # Example
    ///
    /// ```
    /// use shoebox::GameOptions;
    ///
    /// let options = GameOptions::default().with_decks(6);
    /// assert_eq!(options.decks, 6);
    /// ```
    #[must_use]
    pub const fn with_decks(mut self, decks: u8) -> Self {
        self.decks = decks;
        self
    }

    /// Sets the table minimum bet.
    ///
    /// # Example
    ///
    /// ```
    /// use shoebox::GameOptions;
    ///
    /// let options = GameOptions::default().with_min_bet(25);
    /// assert_eq!(options.min_bet, 25);
    /// ```
    #[must_use]
    pub const fn with_min_bet(mut self, min_bet: usize) -> Self {
        self.min_bet = min_bet;
        self
    }

    /// Sets the automatic rebuy amount.
    #[must_use]
    pub const fn with_rebuy_amount(mut self, amount: usize) -> Self {
        self.rebuy_amount = amount;
        self
    }

    /// Sets the starting balance for newly seated players.
    #[must_use]
    pub const fn with_starting_chips(mut self, chips: usize) -> Self {
        self.starting_chips = chips;
        self
    }

    /// Sets the cut-card window as fractions of the shoe length.
    ///
    /// # Example
    ///
    /// ```
    /// use shoebox::GameOptions;
    ///
    /// let options = GameOptions::default().with_cut_window(1.0 / 3.0, 2.0 / 3.0);
    /// assert_eq!(options.cut_window, (1.0 / 3.0, 2.0 / 3.0));
    /// ```
    #[must_use]
    pub const fn with_cut_window(mut self, lo: f64, hi: f64) -> Self {
        self.cut_window = (lo, hi);
        self
    }
}
