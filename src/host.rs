//! Port through which the engine talks to its renderer and audio player.

use crate::game::Snapshot;

/// Audio cue requested by the engine.
///
/// Cues are advisory: the engine never waits on them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cue {
    /// A card was turned over or dealt.
    CardFlip,
    /// The round resolved as safe.
    OutcomeSafe,
    /// The round resolved as a drink.
    OutcomeDrink,
    /// The round resolved as a clash.
    OutcomeDouble,
}

/// Transient message for the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    /// The deck ran low and was replaced by a freshly shuffled one.
    DeckRebuilt {
        /// Number of cards in the new deck.
        cards: usize,
    },
    /// The session was ended by a restart.
    SessionEnded {
        /// Rounds started during the session.
        rounds: u32,
        /// Drinks owed when the session ended.
        drinks: u32,
    },
}

/// Collaborator that renders state and plays audio.
///
/// Every method has an empty default so hosts only implement what they use.
pub trait Host {
    /// Receives the full session state after a transition.
    fn publish(&mut self, _snapshot: &Snapshot) {}

    /// Plays an audio cue. Not called while sound is disabled.
    fn cue(&mut self, _cue: Cue) {}

    /// Shows a transient notice.
    fn notice(&mut self, _notice: Notice) {}
}

impl Host for () {}

impl<H: Host + ?Sized> Host for &mut H {
    fn publish(&mut self, snapshot: &Snapshot) {
        (**self).publish(snapshot);
    }

    fn cue(&mut self, cue: Cue) {
        (**self).cue(cue);
    }

    fn notice(&mut self, notice: Notice) {
        (**self).notice(notice);
    }
}
