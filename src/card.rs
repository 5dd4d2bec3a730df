//! Card types and ordering values.

use core::fmt;

/// Card suit.
///
/// Variants are declared in tiebreak order, from lowest to highest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Suit {
    /// Diamonds.
    Diamonds,
    /// Clubs.
    Clubs,
    /// Hearts.
    Hearts,
    /// Spades.
    Spades,
}

impl Suit {
    /// All suits in tiebreak order.
    pub const ALL: [Self; 4] = [Self::Diamonds, Self::Clubs, Self::Hearts, Self::Spades];

    /// Returns the tiebreak value (Diamonds = 1 through Spades = 4).
    #[must_use]
    pub const fn value(self) -> u8 {
        match self {
            Self::Diamonds => 1,
            Self::Clubs => 2,
            Self::Hearts => 3,
            Self::Spades => 4,
        }
    }

    /// Returns the display symbol.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Diamonds => '♦',
            Self::Clubs => '♣',
            Self::Hearts => '♥',
            Self::Spades => '♠',
        }
    }
}

/// Card rank. Aces are always low.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Rank {
    /// Ace (1).
    Ace,
    /// Two.
    Two,
    /// Three.
    Three,
    /// Four.
    Four,
    /// Five.
    Five,
    /// Six.
    Six,
    /// Seven.
    Seven,
    /// Eight.
    Eight,
    /// Nine.
    Nine,
    /// Ten.
    Ten,
    /// Jack (11).
    Jack,
    /// Queen (12).
    Queen,
    /// King (13).
    King,
}

impl Rank {
    /// All ranks from Ace to King.
    pub const ALL: [Self; 13] = [
        Self::Ace,
        Self::Two,
        Self::Three,
        Self::Four,
        Self::Five,
        Self::Six,
        Self::Seven,
        Self::Eight,
        Self::Nine,
        Self::Ten,
        Self::Jack,
        Self::Queen,
        Self::King,
    ];

    /// Returns the ordering value (Ace = 1 through King = 13).
    #[must_use]
    pub const fn value(self) -> u8 {
        self as u8 + 1
    }

    /// Returns the rank for an ordering value in `1..=13`.
    #[must_use]
    pub const fn from_value(value: u8) -> Option<Self> {
        match value {
            1..=13 => Some(Self::ALL[value as usize - 1]),
            _ => None,
        }
    }

    /// Returns the display symbol (`A`, `2`..`10`, `J`, `Q`, `K`).
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Ace => "A",
            Self::Two => "2",
            Self::Three => "3",
            Self::Four => "4",
            Self::Five => "5",
            Self::Six => "6",
            Self::Seven => "7",
            Self::Eight => "8",
            Self::Nine => "9",
            Self::Ten => "10",
            Self::Jack => "J",
            Self::Queen => "Q",
            Self::King => "K",
        }
    }

    /// Returns the absolute distance between two ranks.
    #[must_use]
    pub const fn gap(self, other: Self) -> u8 {
        self.value().abs_diff(other.value())
    }
}

/// Identifier of a card within one built deck.
///
/// Only meant for keying cards in a renderer; it carries no game meaning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct CardId(pub u16);

/// A playing card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    /// The suit of the card.
    pub suit: Suit,
    /// The rank of the card.
    pub rank: Rank,
    /// Identifier unique within the deck the card was built into.
    pub id: CardId,
}

impl Card {
    /// Creates a new card with the default id.
    #[must_use]
    pub const fn new(suit: Suit, rank: Rank) -> Self {
        Self {
            suit,
            rank,
            id: CardId(0),
        }
    }

    /// Creates a new card with an explicit id.
    #[must_use]
    pub const fn with_id(suit: Suit, rank: Rank, id: CardId) -> Self {
        Self { suit, rank, id }
    }

    /// Returns the absolute value, `rank * 10 + suit`.
    ///
    /// Orders by rank first; the suit only separates cards of equal rank.
    #[must_use]
    pub const fn absolute_value(&self) -> u8 {
        self.rank.value() * 10 + self.suit.value()
    }

    /// Returns whether both cards have the same suit and rank, ignoring ids.
    #[must_use]
    pub fn same_face(&self, other: &Self) -> bool {
        self.suit == other.suit && self.rank == other.rank
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank.symbol(), self.suit.symbol())
    }
}

/// Number of cards per deck.
pub const DECK_SIZE: usize = 52;

