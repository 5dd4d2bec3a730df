//! Base card selection with a minimum rank gap.
//!
//! Dealing the top two cards as-is often yields neighbouring ranks, which
//! leaves no room for a middle card and makes the round a foregone
//! conclusion. [`FairDealer`] reshuffles until the top two cards are at
//! least [`MIN_GAP`] ranks apart, giving up after [`MAX_ATTEMPTS`] tries.

use rand::Rng;
use tracing::debug;

use crate::card::Card;
use crate::deck::Deck;
use crate::error::{ConfigError, InsufficientDeck};

/// Default minimum rank distance between the two base cards.
pub const MIN_GAP: u8 = 4;

/// Default number of inspections before the fallback accepts any pair.
pub const MAX_ATTEMPTS: u8 = 20;

/// Smallest deck a base pair can be dealt from: two bases plus a middle card.
pub const MIN_CARDS_FOR_ROUND: usize = 3;

/// The two base cards and the deck they were dealt from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BasePair {
    /// The first card popped from the deck.
    pub left: Card,
    /// The second card popped from the deck.
    pub right: Card,
    /// The deck without the two base cards.
    pub remaining: Deck,
    /// Number of top-pair inspections performed.
    pub attempts: u8,
    /// Whether the pair met the minimum gap. `false` means the retry budget
    /// ran out and the fallback took whatever was on top.
    pub fair: bool,
}

impl BasePair {
    /// Returns the rank distance between the two base cards.
    #[must_use]
    pub const fn gap(&self) -> u8 {
        self.left.rank.gap(self.right.rank)
    }
}

/// Selects base pairs subject to a minimum rank gap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FairDealer {
    /// Minimum rank distance between the base cards.
    pub min_gap: u8,
    /// Number of inspections before falling back.
    pub max_attempts: u8,
}

impl Default for FairDealer {
    fn default() -> Self {
        Self {
            min_gap: MIN_GAP,
            max_attempts: MAX_ATTEMPTS,
        }
    }
}

impl FairDealer {
    /// Creates a dealer with the given gap and retry budget.
    ///
    /// # Errors
    ///
    /// Returns an error if `min_gap` exceeds the largest possible rank gap (12)
    /// or `max_attempts` is zero.
    pub const fn new(min_gap: u8, max_attempts: u8) -> Result<Self, ConfigError> {
        if min_gap > 12 {
            return Err(ConfigError::InvalidMinGap(min_gap));
        }
        if max_attempts == 0 {
            return Err(ConfigError::ZeroAttempts);
        }
        Ok(Self {
            min_gap,
            max_attempts,
        })
    }

    /// Deals two base cards from the top of `deck`.
    ///
    /// The deck is reshuffled between failed inspections; no card other than
    /// the two returned ever leaves it.
    ///
    /// # Errors
    ///
    /// Returns [`InsufficientDeck`] holding the untouched deck if it has fewer
    /// than three cards.
    pub fn select<R: Rng + ?Sized>(
        &self,
        mut deck: Deck,
        rng: &mut R,
    ) -> Result<BasePair, InsufficientDeck> {
        if deck.len() < MIN_CARDS_FOR_ROUND {
            return Err(InsufficientDeck { deck });
        }

        let mut attempts = 0;
        let mut fair = false;
        while attempts < self.max_attempts {
            attempts += 1;
            if let Some((top, second)) = deck.peek_pair() {
                if top.rank.gap(second.rank) >= self.min_gap {
                    fair = true;
                    break;
                }
            }
            deck.shuffle(rng);
        }

        if !fair {
            debug!(attempts, min_gap = self.min_gap, "fair deal fell back to top pair");
        }

        let Some((left, right)) = deck.draw_pair() else {
            return Err(InsufficientDeck { deck });
        };

        Ok(BasePair {
            left,
            right,
            remaining: deck,
            attempts,
            fair,
        })
    }
}
