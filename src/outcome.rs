//! Round outcome evaluation.

use crate::card::Card;
use crate::host::Cue;

/// Result of a resolved round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// The middle card landed strictly between the base cards.
    Safe,
    /// The middle card landed outside the base cards.
    Drink,
    /// The middle card matched the rank of a base card.
    Double,
}

impl Outcome {
    /// Returns the number of drinks this outcome adds to the total.
    #[must_use]
    pub const fn drinks(self) -> u32 {
        match self {
            Self::Safe => 0,
            Self::Drink => 1,
            Self::Double => 2,
        }
    }

    /// Returns the audio cue announcing this outcome.
    #[must_use]
    pub const fn cue(self) -> Cue {
        match self {
            Self::Safe => Cue::OutcomeSafe,
            Self::Drink => Cue::OutcomeDrink,
            Self::Double => Cue::OutcomeDouble,
        }
    }
}

/// Evaluates a middle card against the two base cards.
///
/// A rank match with either base is a [`Outcome::Double`] regardless of
/// suits. Otherwise the middle card is [`Outcome::Safe`] only if its absolute
/// value lies strictly between those of the bases. Base cards of equal rank
/// therefore never leave room for a safe card.
///
/// # Example
///
/// ```
/// use inbetween::{Card, Outcome, Rank, Suit, evaluate};
///
/// let left = Card::new(Suit::Hearts, Rank::Three);
/// let right = Card::new(Suit::Clubs, Rank::Jack);
///
/// assert_eq!(evaluate(&left, &right, &Card::new(Suit::Spades, Rank::Seven)), Outcome::Safe);
/// assert_eq!(evaluate(&left, &right, &Card::new(Suit::Spades, Rank::King)), Outcome::Drink);
/// assert_eq!(evaluate(&left, &right, &Card::new(Suit::Spades, Rank::Jack)), Outcome::Double);
/// ```
#[must_use]
pub fn evaluate(left: &Card, right: &Card, middle: &Card) -> Outcome {
    if middle.rank == left.rank || middle.rank == right.rank {
        return Outcome::Double;
    }

    let left_value = left.absolute_value();
    let right_value = right.absolute_value();
    let low = left_value.min(right_value);
    let high = left_value.max(right_value);

    if (low + 1..high).contains(&middle.absolute_value()) {
        Outcome::Safe
    } else {
        Outcome::Drink
    }
}
