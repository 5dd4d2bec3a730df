//! Game engine and session state management.

use core::time::Duration;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::{info, trace};

use crate::deck::{Deck, DeckCount};
use crate::error::{ModeError, StartError};
use crate::fair::FairDealer;
use crate::host::{Cue, Host, Notice};
use crate::options::GameOptions;

mod actions;
mod deal;
pub mod state;
mod timeline;

pub use state::{Phase, Snapshot};

use state::Round;
use timeline::{Task, TaskKind, Timeline};

/// State of a running session, created by [`Game::start_session`].
#[derive(Debug)]
struct Session {
    deck_count: DeckCount,
    /// Base-pair selector fixed from the options at session start.
    dealer: FairDealer,
    deck: Deck,
    round: Round,
    phase: Phase,
    drinks: u32,
    auto_deal: bool,
    sound: bool,
    rebuilds: u32,
}

/// An In-Between game engine that owns the session, the deck and the clock.
///
/// The engine is driven by a host: the host forwards player intents, advances
/// the logical clock with [`tick`](Self::tick), and receives snapshots, audio
/// cues and notices through the [`Host`] trait.
///
/// # Example
///
/// ```
/// use inbetween::{Game, GameOptions, Phase};
///
/// let mut game = Game::new(GameOptions::default().instant(), 42);
/// game.start_session(1).unwrap();
/// game.settle();
/// assert_eq!(game.phase(), Some(Phase::Dealt));
///
/// game.flip_bases().unwrap();
/// game.draw_middle().unwrap();
/// assert_eq!(game.phase(), Some(Phase::Resolved));
/// ```
#[derive(Debug)]
pub struct Game<H: Host = ()> {
    /// Game options.
    ///
    /// The fair-deal settings are validated and fixed when a session starts;
    /// changing them mid-session affects the next session only.
    pub options: GameOptions,
    host: H,
    session: Option<Session>,
    timeline: Timeline,
    /// Next round identity to hand out.
    next_round_id: u64,
    /// Random number generator.
    rng: ChaCha8Rng,
}

impl Game {
    /// Creates a new game with the given seed and no host.
    #[must_use]
    pub fn new(options: GameOptions, seed: u64) -> Self {
        Self::with_host(options, seed, ())
    }
}

impl<H: Host> Game<H> {
    /// Creates a new game with the given seed that reports to `host`.
    #[must_use]
    pub fn with_host(options: GameOptions, seed: u64, host: H) -> Self {
        Self {
            options,
            host,
            session: None,
            timeline: Timeline::default(),
            next_round_id: 1,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Starts a session with `deck_count` decks and deals the first round.
    ///
    /// # Errors
    ///
    /// Returns an error if the deck count is outside `1..=3`, the options are
    /// invalid, or a session is already running.
    pub fn start_session(&mut self, deck_count: u8) -> Result<(), StartError> {
        let deck_count = DeckCount::new(deck_count)?;
        let dealer = self.options.fair_dealer()?;
        if self.session.is_some() {
            return Err(StartError::SessionActive);
        }

        let deck = Deck::build(deck_count, &mut self.rng);
        info!(
            deck_count = deck_count.get(),
            cards = deck.len(),
            "session started"
        );

        self.session = Some(Session {
            deck_count,
            dealer,
            deck,
            round: Round::new(0, 0),
            phase: Phase::Dealing,
            drinks: 0,
            auto_deal: self.options.auto_deal,
            sound: self.options.sound,
            rebuilds: 0,
        });

        self.begin_round();
        Ok(())
    }

    /// Ends the running session and cancels every pending delayed transition.
    ///
    /// The host receives [`Notice::SessionEnded`]; from then on
    /// [`snapshot`](Self::snapshot) returns `None`. Does nothing if no session
    /// is running.
    pub fn restart_session(&mut self) {
        let Some(session) = self.session.take() else {
            return;
        };
        let cancelled = self.timeline.cancel_all();
        info!(
            rounds = session.round.number,
            drinks = session.drinks,
            cancelled,
            "session ended"
        );
        self.host.notice(Notice::SessionEnded {
            rounds: session.round.number,
            drinks: session.drinks,
        });
    }

    /// Toggles auto-deal and returns the new setting.
    ///
    /// Turning it off cancels a pending automatic advance. Turning it on while
    /// a revealed result is on the table schedules one.
    ///
    /// # Errors
    ///
    /// Returns an error if no session is running.
    pub fn toggle_auto_deal(&mut self) -> Result<bool, ModeError> {
        let session = self.session.as_mut().ok_or(ModeError::NoSession)?;
        session.auto_deal = !session.auto_deal;
        let enabled = session.auto_deal;

        if enabled {
            let round = session.round.id;
            if session.phase == Phase::Resolved
                && session.round.result_visible
                && !self.timeline.is_pending(round, TaskKind::AutoAdvance)
            {
                self.timeline
                    .schedule(self.options.auto_deal_delay, round, TaskKind::AutoAdvance);
            }
        } else {
            self.timeline.cancel_kind(TaskKind::AutoAdvance);
        }

        info!(enabled, "auto-deal toggled");
        self.publish();
        Ok(enabled)
    }

    /// Enables or disables audio cues.
    ///
    /// # Errors
    ///
    /// Returns an error if no session is running.
    pub fn toggle_sound(&mut self, enabled: bool) -> Result<(), ModeError> {
        let session = self.session.as_mut().ok_or(ModeError::NoSession)?;
        session.sound = enabled;
        info!(enabled, "sound toggled");
        self.publish();
        Ok(())
    }

    /// Advances the logical clock and runs every delayed transition that
    /// comes due.
    ///
    /// The clock stops at each deadline on the way, so a transition scheduled
    /// by another one is timed from the moment its predecessor fired.
    pub fn tick(&mut self, elapsed: Duration) {
        let target = self.timeline.now().saturating_add(elapsed);
        while let Some(due) = self.timeline.next_due().filter(|due| *due <= target) {
            self.timeline.skip_to(due);
            self.run_due();
        }
        self.timeline.skip_to(target);
    }

    /// Fast-forwards the clock through every pending delayed transition.
    ///
    /// Stops once nothing is scheduled, which is always the case while the
    /// game waits for a player intent.
    pub fn settle(&mut self) {
        while let Some(due) = self.timeline.next_due() {
            self.timeline.skip_to(due);
            self.run_due();
        }
    }

    /// Returns the current logical time.
    pub const fn now(&self) -> Duration {
        self.timeline.now()
    }

    /// Returns the number of delayed transitions waiting to fire.
    pub fn pending_tasks(&self) -> usize {
        self.timeline.len()
    }

    /// Returns whether a session is running.
    pub const fn is_active(&self) -> bool {
        self.session.is_some()
    }

    /// Returns the current round phase, if a session is running.
    pub fn phase(&self) -> Option<Phase> {
        self.session.as_ref().map(|session| session.phase)
    }

    /// Returns the number of cards remaining in the deck.
    pub fn cards_remaining(&self) -> usize {
        self.session
            .as_ref()
            .map_or(0, |session| session.deck.len())
    }

    /// Returns the total drinks owed this session.
    pub fn drinks(&self) -> u32 {
        self.session.as_ref().map_or(0, |session| session.drinks)
    }

    /// Returns mutable access to the session deck.
    ///
    /// Intended for hosts that need to stack the deck, such as tests and
    /// scripted demos.
    pub fn deck_mut(&mut self) -> Option<&mut Deck> {
        self.session.as_mut().map(|session| &mut session.deck)
    }

    /// Returns the full session state, if a session is running.
    pub fn snapshot(&self) -> Option<Snapshot> {
        let session = self.session.as_ref()?;
        let round = &session.round;
        Some(Snapshot {
            phase: session.phase,
            round: round.number,
            deck_count: session.deck_count.get(),
            remaining_deck_size: session.deck.len(),
            left_card: round.left,
            right_card: round.right,
            middle_card: round.middle,
            left_flipped: round.flipped,
            right_flipped: round.flipped,
            resolved: session.phase == Phase::Resolved,
            result: round.result,
            result_visible: round.result_visible,
            cumulative_drinks: session.drinks,
            auto_deal_enabled: session.auto_deal,
            sound_enabled: session.sound,
            dealing: session.phase == Phase::Dealing,
            fair_deal: round.fair,
            rebuilds: session.rebuilds,
        })
    }

    /// Returns the host.
    pub const fn host(&self) -> &H {
        &self.host
    }

    /// Returns the host mutably.
    pub const fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    /// Consumes the game and returns the host.
    pub fn into_host(self) -> H {
        self.host
    }

    fn publish(&mut self) {
        if let Some(snapshot) = self.snapshot() {
            self.host.publish(&snapshot);
        }
    }

    fn cue(&mut self, cue: Cue) {
        if self.session.as_ref().is_some_and(|session| session.sound) {
            self.host.cue(cue);
        }
    }

    fn run_due(&mut self) {
        while let Some(task) = self.timeline.pop_due() {
            self.run_task(task);
        }
    }

    fn run_task(&mut self, task: Task) {
        let current = self.session.as_ref().map(|session| session.round.id);
        if current != Some(task.round) {
            trace!(round = task.round, kind = ?task.kind, "stale task dropped");
            return;
        }

        match task.kind {
            TaskKind::RevealBases => self.reveal_bases(),
            TaskKind::FinishDeal => self.finish_deal(),
            TaskKind::RevealResult => self.reveal_result(),
            TaskKind::AutoAdvance => self.auto_advance(),
        }
    }
}
