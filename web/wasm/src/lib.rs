use core::time::Duration;

use inbetween::{Card, Cue, Game, GameOptions, Host, Notice, Outcome, Phase, Rank, Suit};
use serde::Serialize;
use wasm_bindgen::prelude::*;

/// Buffers cues and notices until the page drains them.
#[derive(Default)]
struct JsHost {
    cues: Vec<Cue>,
    notices: Vec<Notice>,
    revision: u32,
}

impl Host for JsHost {
    fn publish(&mut self, _snapshot: &inbetween::Snapshot) {
        self.revision = self.revision.wrapping_add(1);
    }

    fn cue(&mut self, cue: Cue) {
        self.cues.push(cue);
    }

    fn notice(&mut self, notice: Notice) {
        self.notices.push(notice);
    }
}

#[wasm_bindgen]
pub struct WasmGame {
    game: Game<JsHost>,
}

#[wasm_bindgen]
impl WasmGame {
    #[wasm_bindgen(constructor)]
    pub fn new(seed: u32) -> Self {
        Self {
            game: Game::with_host(GameOptions::default(), u64::from(seed), JsHost::default()),
        }
    }

    pub fn reset(&mut self, seed: u32) {
        self.game = Game::with_host(GameOptions::default(), u64::from(seed), JsHost::default());
    }

    pub fn start_session(&mut self, deck_count: u8) -> Result<(), JsValue> {
        self.game.start_session(deck_count).map_err(js_err)
    }

    pub fn restart_session(&mut self) {
        self.game.restart_session();
    }

    pub fn flip_bases(&mut self) -> Result<(), JsValue> {
        self.game.flip_bases().map_err(js_err)
    }

    pub fn draw_middle(&mut self) -> Result<JsValue, JsValue> {
        let card = self.game.draw_middle().map_err(js_err)?;
        to_js_value(&card_to_js(card))
    }

    pub fn advance_round(&mut self) -> Result<(), JsValue> {
        self.game.advance_round().map_err(js_err)
    }

    pub fn toggle_auto_deal(&mut self) -> Result<bool, JsValue> {
        self.game.toggle_auto_deal().map_err(js_err)
    }

    pub fn toggle_sound(&mut self, enabled: bool) -> Result<(), JsValue> {
        self.game.toggle_sound(enabled).map_err(js_err)
    }

    /// Advances the engine clock by `elapsed_ms` milliseconds.
    pub fn tick(&mut self, elapsed_ms: u32) {
        self.game.tick(Duration::from_millis(u64::from(elapsed_ms)));
    }

    /// Increments every time the engine publishes a new state.
    pub fn revision(&self) -> u32 {
        self.game.host().revision
    }

    pub fn snapshot(&self) -> Result<JsValue, JsValue> {
        let snapshot = self.game.snapshot().map(JsSnapshot::from);
        to_js_value(&snapshot)
    }

    /// Returns and clears the audio cues emitted since the last call.
    pub fn take_cues(&mut self) -> Result<JsValue, JsValue> {
        let cues: Vec<&'static str> = self
            .game
            .host_mut()
            .cues
            .drain(..)
            .map(cue_to_str)
            .collect();
        to_js_value(&cues)
    }

    /// Returns and clears the notices emitted since the last call.
    pub fn take_notices(&mut self) -> Result<JsValue, JsValue> {
        let notices: Vec<JsNotice> = self
            .game
            .host_mut()
            .notices
            .drain(..)
            .map(JsNotice::from)
            .collect();
        to_js_value(&notices)
    }
}

#[derive(Serialize)]
struct JsSnapshot {
    phase: &'static str,
    round: u32,
    deck_count: u8,
    remaining_deck_size: u32,
    left_card: Option<JsCard>,
    right_card: Option<JsCard>,
    middle_card: Option<JsCard>,
    left_flipped: bool,
    right_flipped: bool,
    resolved: bool,
    result: Option<&'static str>,
    result_visible: bool,
    cumulative_drinks: u32,
    auto_deal_enabled: bool,
    sound_enabled: bool,
    dealing: bool,
    fair_deal: bool,
    rebuilds: u32,
}

impl From<inbetween::Snapshot> for JsSnapshot {
    fn from(snapshot: inbetween::Snapshot) -> Self {
        Self {
            phase: phase_to_str(snapshot.phase),
            round: snapshot.round,
            deck_count: snapshot.deck_count,
            remaining_deck_size: snapshot.remaining_deck_size as u32,
            left_card: snapshot.left_card.map(card_to_js),
            right_card: snapshot.right_card.map(card_to_js),
            middle_card: snapshot.middle_card.map(card_to_js),
            left_flipped: snapshot.left_flipped,
            right_flipped: snapshot.right_flipped,
            resolved: snapshot.resolved,
            result: snapshot.result.map(outcome_to_str),
            result_visible: snapshot.result_visible,
            cumulative_drinks: snapshot.cumulative_drinks,
            auto_deal_enabled: snapshot.auto_deal_enabled,
            sound_enabled: snapshot.sound_enabled,
            dealing: snapshot.dealing,
            fair_deal: snapshot.fair_deal,
            rebuilds: snapshot.rebuilds,
        }
    }
}

#[derive(Serialize)]
struct JsCard {
    id: u16,
    suit: &'static str,
    rank: &'static str,
    value: u8,
    absolute_value: u8,
}

#[derive(Serialize)]
struct JsNotice {
    kind: &'static str,
    cards: Option<u32>,
    rounds: Option<u32>,
    drinks: Option<u32>,
}

impl From<Notice> for JsNotice {
    fn from(notice: Notice) -> Self {
        match notice {
            Notice::DeckRebuilt { cards } => Self {
                kind: "DeckRebuilt",
                cards: Some(cards as u32),
                rounds: None,
                drinks: None,
            },
            Notice::SessionEnded { rounds, drinks } => Self {
                kind: "SessionEnded",
                cards: None,
                rounds: Some(rounds),
                drinks: Some(drinks),
            },
        }
    }
}

fn card_to_js(card: Card) -> JsCard {
    JsCard {
        id: card.id.0,
        suit: suit_to_str(card.suit),
        rank: rank_to_str(card.rank),
        value: card.rank.value(),
        absolute_value: card.absolute_value(),
    }
}

fn suit_to_str(suit: Suit) -> &'static str {
    match suit {
        Suit::Hearts => "Hearts",
        Suit::Diamonds => "Diamonds",
        Suit::Clubs => "Clubs",
        Suit::Spades => "Spades",
    }
}

fn rank_to_str(rank: Rank) -> &'static str {
    rank.symbol()
}

fn phase_to_str(phase: Phase) -> &'static str {
    match phase {
        Phase::Dealing => "Dealing",
        Phase::Dealt => "Dealt",
        Phase::Flipped => "Flipped",
        Phase::Resolved => "Resolved",
    }
}

fn outcome_to_str(outcome: Outcome) -> &'static str {
    match outcome {
        Outcome::Safe => "Safe",
        Outcome::Drink => "Drink",
        Outcome::Double => "Double",
    }
}

fn cue_to_str(cue: Cue) -> &'static str {
    match cue {
        Cue::CardFlip => "CardFlip",
        Cue::OutcomeSafe => "OutcomeSafe",
        Cue::OutcomeDrink => "OutcomeDrink",
        Cue::OutcomeDouble => "OutcomeDouble",
    }
}

fn js_err<E: core::fmt::Display>(err: E) -> JsValue {
    JsValue::from_str(&err.to_string())
}

fn to_js_value<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(|err| JsValue::from_str(&err.to_string()))
}
