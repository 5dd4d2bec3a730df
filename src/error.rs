//! Error types for game operations.

use thiserror::Error;

use crate::deck::Deck;

/// Errors raised while validating configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Deck count outside `1..=3`.
    #[error("invalid deck count {0}, expected 1, 2 or 3")]
    InvalidDeckCount(u8),
    /// Minimum gap larger than any two ranks can be apart.
    #[error("invalid minimum gap {0}, expected at most 12")]
    InvalidMinGap(u8),
    /// Retry budget of zero.
    #[error("fair deal needs at least one attempt")]
    ZeroAttempts,
}

/// Errors that can occur when starting a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum StartError {
    /// The requested configuration was rejected.
    #[error(transparent)]
    Config(#[from] ConfigError),
    /// A session is already running; restart it first.
    #[error("a session is already running")]
    SessionActive,
}

/// The deck holds fewer than three cards, too few for a base pair and a
/// middle card.
///
/// The deck is handed back untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("not enough cards for a base pair: {} remaining", .deck.len())]
pub struct InsufficientDeck {
    /// The deck that was passed in.
    pub deck: Deck,
}

/// Errors that can occur when flipping the base cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FlipError {
    /// No session is running.
    #[error("no session is running")]
    NoSession,
    /// A deal is still in progress.
    #[error("a deal is in progress")]
    Dealing,
    /// The base cards are already face up.
    #[error("base cards are already flipped")]
    AlreadyFlipped,
}

/// Errors that can occur when drawing the middle card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DrawError {
    /// No session is running.
    #[error("no session is running")]
    NoSession,
    /// A deal is still in progress.
    #[error("a deal is in progress")]
    Dealing,
    /// At least one base card is still face down.
    #[error("base cards are not flipped")]
    NotFlipped,
    /// The round already has a middle card.
    #[error("round is already resolved")]
    AlreadyResolved,
    /// No cards left in the deck.
    #[error("no cards left in the deck")]
    EmptyDeck,
}

/// Errors that can occur when advancing to the next round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AdvanceError {
    /// No session is running.
    #[error("no session is running")]
    NoSession,
    /// A deal is still in progress.
    #[error("a deal is in progress")]
    Dealing,
    /// The current round has not been resolved.
    #[error("current round is not resolved")]
    NotResolved,
}

/// Errors that can occur when toggling session modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ModeError {
    /// No session is running.
    #[error("no session is running")]
    NoSession,
}
