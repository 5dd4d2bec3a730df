use core::mem;

use tracing::{debug, info, warn};

use crate::deck::Deck;
use crate::error::InsufficientDeck;
use crate::fair::MIN_CARDS_FOR_ROUND;
use crate::host::{Cue, Host, Notice};

use super::timeline::TaskKind;
use super::{Game, Phase, Round};

impl<H: Host> Game<H> {
    /// Starts a new round: rebuilds a short deck, clears the table and
    /// schedules the base cards to appear.
    pub(super) fn begin_round(&mut self) {
        self.ensure_playable_deck();

        let id = self.next_round_id;
        self.next_round_id += 1;

        let Some(session) = self.session.as_mut() else {
            return;
        };
        session.round = Round::new(id, session.round.number + 1);
        session.phase = Phase::Dealing;
        debug!(
            round = session.round.number,
            remaining = session.deck.len(),
            "dealing"
        );

        self.timeline
            .schedule(self.options.deal_delay, id, TaskKind::RevealBases);
        self.publish();
    }

    /// Replaces the deck with a freshly built one if it cannot cover a round.
    fn ensure_playable_deck(&mut self) {
        let Some(session) = self.session.as_mut() else {
            return;
        };
        if session.deck.len() >= MIN_CARDS_FOR_ROUND {
            return;
        }

        let leftover = session.deck.len();
        session.deck = Deck::build(session.deck_count, &mut self.rng);
        session.rebuilds += 1;
        let cards = session.deck.len();
        info!(leftover, cards, rebuilds = session.rebuilds, "deck rebuilt");

        self.host.notice(Notice::DeckRebuilt { cards });
    }

    /// Deals the base pair onto the table once the deal delay has elapsed.
    pub(super) fn reveal_bases(&mut self) {
        if self.phase() != Some(Phase::Dealing) {
            return;
        }
        self.ensure_playable_deck();

        let Some(session) = self.session.as_mut() else {
            return;
        };
        let dealer = session.dealer;
        if session.round.left.is_some() {
            return;
        }

        let deck = mem::take(&mut session.deck);
        let pair = match dealer.select(deck, &mut self.rng) {
            Ok(pair) => pair,
            Err(InsufficientDeck { deck }) => {
                warn!(remaining = deck.len(), "base pair could not be dealt");
                session.deck = deck;
                return;
            }
        };

        debug!(
            round = session.round.number,
            left = %pair.left,
            right = %pair.right,
            gap = pair.gap(),
            attempts = pair.attempts,
            fair = pair.fair,
            "base cards dealt"
        );
        session.round.left = Some(pair.left);
        session.round.right = Some(pair.right);
        session.round.fair = pair.fair;
        session.deck = pair.remaining;
        let id = session.round.id;

        self.cue(Cue::CardFlip);
        self.timeline
            .schedule(self.options.settle_delay, id, TaskKind::FinishDeal);
        self.publish();
    }

    /// Ends the deal so the base cards can be flipped.
    pub(super) fn finish_deal(&mut self) {
        let Some(session) = self.session.as_mut() else {
            return;
        };
        if session.phase != Phase::Dealing || session.round.bases().is_none() {
            return;
        }

        session.phase = Phase::Dealt;
        debug!(round = session.round.number, "transition: Dealing -> Dealt");
        self.publish();
    }
}
