//! Deck construction and shuffling.

use alloc::vec::Vec;
use rand::Rng;
use rand::seq::SliceRandom;

use crate::card::{Card, CardId, DECK_SIZE, Rank, Suit};
use crate::error::ConfigError;

/// Number of 52-card decks combined into one session deck.
///
/// Only 1, 2 and 3 are valid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DeckCount(u8);

impl DeckCount {
    /// A single deck.
    pub const ONE: Self = Self(1);
    /// Two decks.
    pub const TWO: Self = Self(2);
    /// Three decks.
    pub const THREE: Self = Self(3);

    /// Validates a deck count.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidDeckCount`] for values outside `1..=3`.
    pub const fn new(count: u8) -> Result<Self, ConfigError> {
        match count {
            1..=3 => Ok(Self(count)),
            _ => Err(ConfigError::InvalidDeckCount(count)),
        }
    }

    /// Returns the number of decks.
    #[must_use]
    pub const fn get(self) -> u8 {
        self.0
    }

    /// Returns the number of cards in a freshly built deck of this size.
    #[must_use]
    pub const fn total_cards(self) -> usize {
        self.0 as usize * DECK_SIZE
    }
}

impl TryFrom<u8> for DeckCount {
    type Error = ConfigError;

    fn try_from(count: u8) -> Result<Self, Self::Error> {
        Self::new(count)
    }
}

/// An ordered stack of cards. The last card is the top of the deck.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Builds and shuffles `count` standard decks into one.
    ///
    /// Every card gets an id that is unique within the returned deck.
    pub fn build<R: Rng + ?Sized>(count: DeckCount, rng: &mut R) -> Self {
        let mut cards = Vec::with_capacity(count.total_cards());

        for _ in 0..count.get() {
            for suit in Suit::ALL {
                for rank in Rank::ALL {
                    let id = CardId(cards.len() as u16);
                    cards.push(Card::with_id(suit, rank, id));
                }
            }
        }

        let mut deck = Self { cards };
        deck.shuffle(rng);
        deck
    }

    /// Wraps an existing card sequence. The last card is dealt first.
    #[must_use]
    pub const fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    /// Shuffles every remaining card uniformly.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
    }

    /// Removes and returns the top card.
    pub fn draw(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Returns the top two cards without removing them, top card first.
    #[must_use]
    pub fn peek_pair(&self) -> Option<(Card, Card)> {
        match self.cards.as_slice() {
            [.., second, top] => Some((*top, *second)),
            _ => None,
        }
    }

    /// Removes and returns the top two cards, top card first.
    pub fn draw_pair(&mut self) -> Option<(Card, Card)> {
        let pair = self.peek_pair()?;
        self.cards.truncate(self.cards.len() - 2);
        Some(pair)
    }

    /// Returns the cards, bottom first.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Consumes the deck and returns its cards, bottom first.
    #[must_use]
    pub fn into_cards(self) -> Vec<Card> {
        self.cards
    }

    /// Returns the number of cards remaining.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}
