//! Game configuration options.

/// Configuration options for Crazy Eights.
///
/// ```
/// use tablecards::CrazyEightsOptions;
///
/// let options = CrazyEightsOptions::default().with_hand_size(Some(8));
/// assert_eq!(options.hand_size, Some(8));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct CrazyEightsOptions {
    /// Cards dealt to each hand. `None` picks 7 for two or three players and
    /// 5 for four to seven players.
    pub hand_size: Option<usize>,
}

impl CrazyEightsOptions {
    /// Forces the number of cards dealt to each hand.
    ///
    /// # Example
    ///
    /// ```
    /// use tablecards::CrazyEightsOptions;
    ///
    /// let options = CrazyEightsOptions::default().with_hand_size(None);
    /// assert_eq!(options.hand_size, None);
    /// ```
    #[must_use]
    pub const fn with_hand_size(mut self, hand_size: Option<usize>) -> Self {
        self.hand_size = hand_size;
        self
    }

    /// Returns the hand size to deal for the given number of players.
    #[must_use]
    pub const fn hand_size_for(&self, players: usize) -> Option<usize> {
        if let Some(size) = self.hand_size {
            return Some(size);
        }
        match players {
            2 | 3 => Some(7),
            4..=7 => Some(5),
            _ => None,
        }
    }
}

/// Configuration options for Golf.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GolfOptions {
    /// Points added for two adjacent matching columns of the same rank.
    pub dream_bonus: i32,
}

impl Default for GolfOptions {
    fn default() -> Self {
        Self { dream_bonus: -20 }
    }
}

impl GolfOptions {
    /// Sets the dream bonus.
    ///
    /// # Example
    ///
    /// ```
    /// use tablecards::GolfOptions;
    ///
    /// let options = GolfOptions::default().with_dream_bonus(-10);
    /// assert_eq!(options.dream_bonus, -10);
    /// ```
    #[must_use]
    pub const fn with_dream_bonus(mut self, bonus: i32) -> Self {
        self.dream_bonus = bonus;
        self
    }
}

/// Configuration options for Quinn's Game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct QuinnsOptions {
    /// Cards dealt to each hand before top cards are chosen.
    pub initial_hand: usize,
    /// Hand size players draw back up to after a play.
    pub refill_to: usize,
}

impl Default for QuinnsOptions {
    fn default() -> Self {
        Self {
            initial_hand: 6,
            refill_to: 3,
        }
    }
}

impl QuinnsOptions {
    /// Sets the number of cards dealt to each hand.
    ///
    /// # Example
    ///
    /// ```
    /// use tablecards::QuinnsOptions;
    ///
    /// let options = QuinnsOptions::default().with_initial_hand(9);
    /// assert_eq!(options.initial_hand, 9);
    /// ```
    #[must_use]
    pub const fn with_initial_hand(mut self, cards: usize) -> Self {
        self.initial_hand = cards;
        self
    }

    /// Sets the hand size players draw back up to.
    ///
    /// # Example
    ///
    /// ```
    /// use tablecards::QuinnsOptions;
    ///
    /// let options = QuinnsOptions::default().with_refill_to(4);
    /// assert_eq!(options.refill_to, 4);
    /// ```
    #[must_use]
    pub const fn with_refill_to(mut self, cards: usize) -> Self {
        self.refill_to = cards;
        self
    }
}

/// Configuration options for Pinochle.
///
/// ```
/// use tablecards::PinochleOptions;
///
/// let options = PinochleOptions::default()
///     .with_minimum_bid(25)
///     .with_deals(8);
/// assert_eq!(options.minimum_bid, 25);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PinochleOptions {
    /// Lowest opening bid, and the bid awarded when everyone passes.
    pub minimum_bid: u32,
    /// Number of deals in one game.
    pub deals: u8,
}

impl Default for PinochleOptions {
    fn default() -> Self {
        Self {
            minimum_bid: 20,
            deals: 4,
        }
    }
}

impl PinochleOptions {
    /// Sets the minimum opening bid.
    ///
    /// # Example
    ///
    /// ```
    /// use tablecards::PinochleOptions;
    ///
    /// let options = PinochleOptions::default().with_minimum_bid(30);
    /// assert_eq!(options.minimum_bid, 30);
    /// ```
    #[must_use]
    pub const fn with_minimum_bid(mut self, bid: u32) -> Self {
        self.minimum_bid = bid;
        self
    }

    /// Sets the number of deals played before the game ends.
    ///
    /// # Example
    ///
    /// ```
    /// use tablecards::PinochleOptions;
    ///
    /// let options = PinochleOptions::default().with_deals(1);
    /// assert_eq!(options.deals, 1);
    /// ```
    #[must_use]
    pub const fn with_deals(mut self, deals: u8) -> Self {
        self.deals = deals;
        self
    }
}
