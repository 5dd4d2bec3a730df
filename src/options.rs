//! Game configuration options.

use core::time::Duration;

use crate::error::ConfigError;
use crate::fair::{FairDealer, MAX_ATTEMPTS, MIN_GAP};

/// Configuration options for an In-Between game.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use core::time::Duration;
/// use inbetween::GameOptions;
///
/// let options = GameOptions::default()
///     .with_min_gap(3)
///     .with_auto_deal(true)
///     .with_auto_deal_delay(Duration::from_secs(5));
/// assert!(options.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameOptions {
    /// Minimum rank distance between the base cards.
    pub min_gap: u8,
    /// Number of deck inspections before accepting any base pair.
    pub max_attempts: u8,
    /// Delay between a deal request and the base cards appearing.
    pub deal_delay: Duration,
    /// Delay between the base cards appearing and the deal completing.
    pub settle_delay: Duration,
    /// Delay between drawing the middle card and revealing the result.
    pub reveal_delay: Duration,
    /// Delay between revealing a result and the automatic next round.
    pub auto_deal_delay: Duration,
    /// Whether new sessions start with auto-deal enabled.
    pub auto_deal: bool,
    /// Whether new sessions start with sound enabled.
    pub sound: bool,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            min_gap: MIN_GAP,
            max_attempts: MAX_ATTEMPTS,
            deal_delay: Duration::from_millis(500),
            settle_delay: Duration::from_millis(300),
            reveal_delay: Duration::from_millis(400),
            auto_deal_delay: Duration::from_millis(3000),
            auto_deal: false,
            sound: true,
        }
    }
}

impl GameOptions {
    /// Sets the minimum rank gap between base cards.
    ///
    /// # Example
    ///
    /// ```
    /// use inbetween::GameOptions;
    ///
    /// let options = GameOptions::default().with_min_gap(2);
    /// assert_eq!(options.min_gap, 2);
    /// ```
    #[must_use]
    pub const fn with_min_gap(mut self, min_gap: u8) -> Self {
        self.min_gap = min_gap;
        self
    }

    /// Sets the fair deal retry budget.
    ///
    /// # Example
    ///
    /// ```
    /// use inbetween::GameOptions;
    ///
    /// let options = GameOptions::default().with_max_attempts(10);
    /// assert_eq!(options.max_attempts, 10);
    /// ```
    #[must_use]
    pub const fn with_max_attempts(mut self, max_attempts: u8) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    /// Sets the delay before the base cards appear.
    #[must_use]
    pub const fn with_deal_delay(mut self, delay: Duration) -> Self {
        self.deal_delay = delay;
        self
    }

    /// Sets the delay between the base cards appearing and the deal completing.
    #[must_use]
    pub const fn with_settle_delay(mut self, delay: Duration) -> Self {
        self.settle_delay = delay;
        self
    }

    /// Sets the delay before a result is revealed.
    #[must_use]
    pub const fn with_reveal_delay(mut self, delay: Duration) -> Self {
        self.reveal_delay = delay;
        self
    }

    /// Sets the delay before an automatic next round.
    #[must_use]
    pub const fn with_auto_deal_delay(mut self, delay: Duration) -> Self {
        self.auto_deal_delay = delay;
        self
    }

    /// Sets whether sessions start with auto-deal enabled.
    ///
    /// # Example
    ///
    /// ```
    /// use inbetween::GameOptions;
    ///
    /// let options = GameOptions::default().with_auto_deal(true);
    /// assert!(options.auto_deal);
    /// ```
    #[must_use]
    pub const fn with_auto_deal(mut self, enabled: bool) -> Self {
        self.auto_deal = enabled;
        self
    }

    /// Sets whether sessions start with sound enabled.
    ///
    /// # Example
    ///
    /// ```
    /// use inbetween::GameOptions;
    ///
    /// let options = GameOptions::default().with_sound(false);
    /// assert!(!options.sound);
    /// ```
    #[must_use]
    pub const fn with_sound(mut self, enabled: bool) -> Self {
        self.sound = enabled;
        self
    }

    /// Sets every presentation delay to zero.
    ///
    /// Delayed transitions still go through the timeline and fire on the
    /// next [`tick`](crate::Game::tick).
    ///
    /// # Example
    ///
    /// ```
    /// use core::time::Duration;
    /// use inbetween::GameOptions;
    ///
    /// let options = GameOptions::default().instant();
    /// assert_eq!(options.deal_delay, Duration::ZERO);
    /// assert_eq!(options.auto_deal_delay, Duration::ZERO);
    /// ```
    #[must_use]
    pub const fn instant(self) -> Self {
        self.with_deal_delay(Duration::ZERO)
            .with_settle_delay(Duration::ZERO)
            .with_reveal_delay(Duration::ZERO)
            .with_auto_deal_delay(Duration::ZERO)
    }

    /// Returns the base-pair selector described by these options.
    ///
    /// # Errors
    ///
    /// Returns an error if the gap or retry budget is out of range.
    pub const fn fair_dealer(&self) -> Result<FairDealer, ConfigError> {
        FairDealer::new(self.min_gap, self.max_attempts)
    }

    /// Checks that the options describe a playable game.
    ///
    /// # Errors
    ///
    /// Returns an error if the gap or retry budget is out of range.
    pub const fn validate(&self) -> Result<(), ConfigError> {
        match self.fair_dealer() {
            Ok(_) => Ok(()),
            Err(err) => Err(err),
        }
    }
}
