use tracing::debug;

use crate::card::Card;
use crate::error::{AdvanceError, DrawError, FlipError};
use crate::host::{Cue, Host};
use crate::outcome::evaluate;

use super::timeline::TaskKind;
use super::{Game, Phase};

impl<H: Host> Game<H> {
    /// Player intent: flip both base cards face up.
    ///
    /// # Errors
    ///
    /// Returns an error if no session is running, a deal is in progress, or
    /// the bases are already face up. The state is left unchanged.
    pub fn flip_bases(&mut self) -> Result<(), FlipError> {
        let result = self.try_flip();
        if let Err(err) = result {
            debug!(%err, "flip ignored");
        }
        result
    }

    fn try_flip(&mut self) -> Result<(), FlipError> {
        let session = self.session.as_mut().ok_or(FlipError::NoSession)?;
        if session.phase == Phase::Dealing {
            return Err(FlipError::Dealing);
        }
        if session.round.flipped || session.phase != Phase::Dealt {
            return Err(FlipError::AlreadyFlipped);
        }

        session.round.flipped = true;
        session.phase = Phase::Flipped;
        debug!(round = session.round.number, "transition: Dealt -> Flipped");

        self.cue(Cue::CardFlip);
        self.publish();
        Ok(())
    }

    /// Player intent: draw the middle card and resolve the round.
    ///
    /// Returns the middle card. The result banner is revealed after the
    /// configured reveal delay.
    ///
    /// # Errors
    ///
    /// Returns an error if no session is running, a deal is in progress, the
    /// bases are still face down, the round is already resolved, or the deck
    /// is empty. The state is left unchanged.
    pub fn draw_middle(&mut self) -> Result<Card, DrawError> {
        let result = self.try_draw();
        if let Err(err) = result {
            debug!(%err, "draw ignored");
        }
        result
    }

    fn try_draw(&mut self) -> Result<Card, DrawError> {
        let session = self.session.as_mut().ok_or(DrawError::NoSession)?;
        match session.phase {
            Phase::Dealing => return Err(DrawError::Dealing),
            Phase::Resolved => return Err(DrawError::AlreadyResolved),
            Phase::Dealt => return Err(DrawError::NotFlipped),
            Phase::Flipped => {}
        }
        let Some((left, right)) = session.round.bases() else {
            return Err(DrawError::NotFlipped);
        };
        let middle = session.deck.draw().ok_or(DrawError::EmptyDeck)?;

        let outcome = evaluate(&left, &right, &middle);
        session.drinks += outcome.drinks();
        session.round.middle = Some(middle);
        session.round.result = Some(outcome);
        session.phase = Phase::Resolved;
        let id = session.round.id;
        debug!(
            round = session.round.number,
            %middle,
            ?outcome,
            drinks = session.drinks,
            "transition: Flipped -> Resolved"
        );

        self.cue(Cue::CardFlip);
        self.timeline
            .schedule(self.options.reveal_delay, id, TaskKind::RevealResult);
        self.publish();
        Ok(middle)
    }

    /// Player intent: move on to the next round.
    ///
    /// Rebuilds the deck first if it is too short for another round.
    ///
    /// # Errors
    ///
    /// Returns an error if no session is running, a deal is in progress, or
    /// the current round is not resolved. The state is left unchanged.
    pub fn advance_round(&mut self) -> Result<(), AdvanceError> {
        let result = self.try_advance();
        if let Err(err) = result {
            debug!(%err, "advance ignored");
        }
        result
    }

    fn try_advance(&mut self) -> Result<(), AdvanceError> {
        let session = self.session.as_ref().ok_or(AdvanceError::NoSession)?;
        match session.phase {
            Phase::Dealing => return Err(AdvanceError::Dealing),
            Phase::Dealt | Phase::Flipped => return Err(AdvanceError::NotResolved),
            Phase::Resolved => {}
        }

        let cancelled = self.timeline.cancel_round(session.round.id);
        debug!(round = session.round.number, cancelled, "advancing");
        self.begin_round();
        Ok(())
    }

    /// Shows the result banner and plays the outcome cue.
    pub(super) fn reveal_result(&mut self) {
        let Some(session) = self.session.as_mut() else {
            return;
        };
        if session.phase != Phase::Resolved || session.round.result_visible {
            return;
        }
        let Some(outcome) = session.round.result else {
            return;
        };

        session.round.result_visible = true;
        let id = session.round.id;
        let auto_deal = session.auto_deal;

        self.cue(outcome.cue());
        if auto_deal {
            self.timeline
                .schedule(self.options.auto_deal_delay, id, TaskKind::AutoAdvance);
        }
        self.publish();
    }

    /// Runs a scheduled automatic advance, subject to the usual guards.
    pub(super) fn auto_advance(&mut self) {
        if !self.session.as_ref().is_some_and(|session| session.auto_deal) {
            return;
        }
        // Rejections are already logged by `advance_round`.
        let _ = self.advance_round();
    }
}
