//! Round phases and the published session snapshot.

use crate::card::Card;
use crate::outcome::Outcome;

/// Round phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    /// A deal is in progress; the base cards may not be visible yet.
    Dealing,
    /// Both base cards are on the table, face down.
    Dealt,
    /// Both base cards are face up.
    Flipped,
    /// The middle card has been drawn and the outcome computed.
    Resolved,
}

/// Full session state as seen by a renderer.
///
/// Published through [`Host::publish`](crate::Host::publish) after every
/// transition and available on demand from [`Game::snapshot`](crate::Game::snapshot).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Snapshot {
    /// Current round phase.
    pub phase: Phase,
    /// Round number within the session, starting at 1.
    pub round: u32,
    /// Number of decks the session was started with.
    pub deck_count: u8,
    /// Cards left in the deck.
    pub remaining_deck_size: usize,
    /// First base card.
    pub left_card: Option<Card>,
    /// Second base card.
    pub right_card: Option<Card>,
    /// Middle card, present once the round is resolved.
    pub middle_card: Option<Card>,
    /// Whether the first base card is face up.
    pub left_flipped: bool,
    /// Whether the second base card is face up.
    pub right_flipped: bool,
    /// Whether the round has been resolved.
    pub resolved: bool,
    /// Outcome of the round, once resolved.
    pub result: Option<Outcome>,
    /// Whether the result banner should be shown.
    pub result_visible: bool,
    /// Total drinks owed this session.
    pub cumulative_drinks: u32,
    /// Whether rounds advance automatically.
    pub auto_deal_enabled: bool,
    /// Whether audio cues are emitted.
    pub sound_enabled: bool,
    /// Whether a deal is in progress.
    pub dealing: bool,
    /// Whether the base cards met the minimum rank gap.
    pub fair_deal: bool,
    /// Number of times the deck has been rebuilt this session.
    pub rebuilds: u32,
}

/// The cards and progress of one round.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Round {
    /// Identity used to key delayed tasks. Unique across sessions of a game.
    pub(crate) id: u64,
    pub(crate) number: u32,
    pub(crate) left: Option<Card>,
    pub(crate) right: Option<Card>,
    pub(crate) middle: Option<Card>,
    /// Both base cards flip together, so a single flag covers them.
    pub(crate) flipped: bool,
    pub(crate) result: Option<Outcome>,
    pub(crate) result_visible: bool,
    pub(crate) fair: bool,
}

impl Round {
    pub(crate) const fn new(id: u64, number: u32) -> Self {
        Self {
            id,
            number,
            left: None,
            right: None,
            middle: None,
            flipped: false,
            result: None,
            result_visible: false,
            fair: false,
        }
    }

    pub(crate) const fn bases(&self) -> Option<(Card, Card)> {
        match (self.left, self.right) {
            (Some(left), Some(right)) => Some((left, right)),
            _ => None,
        }
    }
}
