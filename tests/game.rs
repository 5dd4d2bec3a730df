//! Game integration tests.

use core::time::Duration;

use inbetween::{
    AdvanceError, Card, ConfigError, Cue, DECK_SIZE, Deck, DrawError, FlipError, Game,
    GameOptions, Host, ModeError, Notice, Outcome, Phase, Rank, Snapshot, StartError, Suit,
};

const fn card(suit: Suit, rank: Rank) -> Card {
    Card::new(suit, rank)
}

const fn ms(millis: u64) -> Duration {
    Duration::from_millis(millis)
}

fn set_deck_from_draws<H: Host>(game: &mut Game<H>, draws: &[Card]) {
    let mut cards: Vec<Card> = draws.to_vec();
    cards.reverse();
    *game.deck_mut().unwrap() = Deck::from_cards(cards);
}

#[derive(Debug, Default)]
struct Recorder {
    snapshots: Vec<Snapshot>,
    cues: Vec<Cue>,
    notices: Vec<Notice>,
}

impl Host for Recorder {
    fn publish(&mut self, snapshot: &Snapshot) {
        self.snapshots.push(*snapshot);
    }

    fn cue(&mut self, cue: Cue) {
        self.cues.push(cue);
    }

    fn notice(&mut self, notice: Notice) {
        self.notices.push(notice);
    }
}

fn recorded(options: GameOptions) -> Game<Recorder> {
    Game::with_host(options, 7, Recorder::default())
}

/// Starts a single-deck session whose first round deals `draws` in order.
fn dealt_game(options: GameOptions, draws: &[Card]) -> Game<Recorder> {
    let mut game = recorded(options);
    game.start_session(1).unwrap();
    set_deck_from_draws(&mut game, draws);
    game.settle();
    assert_eq!(game.phase(), Some(Phase::Dealt));
    game
}

#[test]
fn start_session_rejects_invalid_deck_count() {
    let mut game = Game::new(GameOptions::default(), 1);

    assert_eq!(
        game.start_session(0).unwrap_err(),
        StartError::Config(ConfigError::InvalidDeckCount(0))
    );
    assert_eq!(
        game.start_session(4).unwrap_err(),
        StartError::Config(ConfigError::InvalidDeckCount(4))
    );
    assert!(!game.is_active());
    assert!(game.snapshot().is_none());
}

#[test]
fn start_session_rejects_invalid_options() {
    let mut game = Game::new(GameOptions::default().with_min_gap(13), 1);
    assert_eq!(
        game.start_session(1).unwrap_err(),
        StartError::Config(ConfigError::InvalidMinGap(13))
    );

    let mut game = Game::new(GameOptions::default().with_max_attempts(0), 1);
    assert_eq!(
        game.start_session(1).unwrap_err(),
        StartError::Config(ConfigError::ZeroAttempts)
    );
}

#[test]
fn start_session_twice_is_rejected() {
    let mut game = Game::new(GameOptions::default(), 1);
    game.start_session(2).unwrap();
    assert_eq!(game.start_session(1).unwrap_err(), StartError::SessionActive);
    assert_eq!(game.snapshot().unwrap().deck_count, 2);
}

#[test]
fn intents_without_session_are_rejected() {
    let mut game = Game::new(GameOptions::default(), 1);

    assert_eq!(game.flip_bases().unwrap_err(), FlipError::NoSession);
    assert_eq!(game.draw_middle().unwrap_err(), DrawError::NoSession);
    assert_eq!(game.advance_round().unwrap_err(), AdvanceError::NoSession);
    assert_eq!(game.toggle_auto_deal().unwrap_err(), ModeError::NoSession);
    assert_eq!(game.toggle_sound(false).unwrap_err(), ModeError::NoSession);
    assert_eq!(game.cards_remaining(), 0);
}

#[test]
fn session_deck_matches_deck_count() {
    for count in 1..=3u8 {
        let mut game = Game::new(GameOptions::default(), u64::from(count));
        game.start_session(count).unwrap();
        assert_eq!(game.cards_remaining(), DECK_SIZE * count as usize);

        game.settle();
        assert_eq!(game.cards_remaining(), DECK_SIZE * count as usize - 2);
    }
}

#[test]
fn deal_delays_hide_bases_until_timers_fire() {
    let mut game = recorded(GameOptions::default());
    game.start_session(1).unwrap();

    let snapshot = game.snapshot().unwrap();
    assert_eq!(snapshot.phase, Phase::Dealing);
    assert!(snapshot.dealing);
    assert_eq!(snapshot.round, 1);
    assert_eq!(snapshot.left_card, None);
    assert_eq!(snapshot.remaining_deck_size, DECK_SIZE);
    assert_eq!(game.flip_bases().unwrap_err(), FlipError::Dealing);

    game.tick(ms(499));
    assert_eq!(game.snapshot().unwrap().left_card, None);

    game.tick(ms(1));
    let snapshot = game.snapshot().unwrap();
    assert!(snapshot.left_card.is_some());
    assert!(snapshot.right_card.is_some());
    assert_eq!(snapshot.remaining_deck_size, DECK_SIZE - 2);
    assert!(snapshot.dealing);
    assert_eq!(game.flip_bases().unwrap_err(), FlipError::Dealing);
    assert_eq!(game.draw_middle().unwrap_err(), DrawError::Dealing);

    game.tick(ms(300));
    let snapshot = game.snapshot().unwrap();
    assert_eq!(snapshot.phase, Phase::Dealt);
    assert!(!snapshot.dealing);
    assert!(!snapshot.left_flipped && !snapshot.right_flipped);
    assert_eq!(game.now(), ms(800));
    assert_eq!(game.pending_tasks(), 0);
}

#[test]
fn stacked_bases_are_dealt_in_order() {
    let game = dealt_game(
        GameOptions::default(),
        &[
            card(Suit::Hearts, Rank::Five), // left
            card(Suit::Clubs, Rank::Nine),  // right
            card(Suit::Spades, Rank::King), // middle
        ],
    );

    let snapshot = game.snapshot().unwrap();
    assert_eq!(snapshot.left_card, Some(card(Suit::Hearts, Rank::Five)));
    assert_eq!(snapshot.right_card, Some(card(Suit::Clubs, Rank::Nine)));
    assert!(snapshot.fair_deal);
    assert_eq!(snapshot.remaining_deck_size, 1);
}

#[test]
fn drink_double_and_safe_update_drinks() {
    let mut game = dealt_game(
        GameOptions::default(),
        &[
            card(Suit::Hearts, Rank::Five),
            card(Suit::Clubs, Rank::Nine),
            card(Suit::Spades, Rank::King),
        ],
    );

    game.flip_bases().unwrap();
    let middle = game.draw_middle().unwrap();
    assert_eq!(middle.rank, Rank::King);
    let snapshot = game.snapshot().unwrap();
    assert_eq!(snapshot.result, Some(Outcome::Drink));
    assert!(snapshot.resolved);
    assert_eq!(snapshot.cumulative_drinks, 1);

    game.advance_round().unwrap();
    set_deck_from_draws(
        &mut game,
        &[
            card(Suit::Hearts, Rank::Five),
            card(Suit::Clubs, Rank::Nine),
            card(Suit::Diamonds, Rank::Nine),
        ],
    );
    game.settle();
    game.flip_bases().unwrap();
    game.draw_middle().unwrap();
    assert_eq!(game.snapshot().unwrap().result, Some(Outcome::Double));
    assert_eq!(game.drinks(), 3);

    game.advance_round().unwrap();
    set_deck_from_draws(
        &mut game,
        &[
            card(Suit::Hearts, Rank::Five),
            card(Suit::Clubs, Rank::Nine),
            card(Suit::Diamonds, Rank::Seven),
        ],
    );
    game.settle();
    game.flip_bases().unwrap();
    game.draw_middle().unwrap();
    let snapshot = game.snapshot().unwrap();
    assert_eq!(snapshot.result, Some(Outcome::Safe));
    assert_eq!(snapshot.cumulative_drinks, 3);
    assert_eq!(snapshot.round, 3);
}

#[test]
fn draw_before_flip_leaves_state_unchanged() {
    let mut game = dealt_game(
        GameOptions::default(),
        &[
            card(Suit::Hearts, Rank::Two),
            card(Suit::Clubs, Rank::Queen),
            card(Suit::Spades, Rank::Six),
        ],
    );

    let before = game.snapshot().unwrap();
    let published = game.host().snapshots.len();

    assert_eq!(game.draw_middle().unwrap_err(), DrawError::NotFlipped);
    assert_eq!(game.snapshot().unwrap(), before);
    assert_eq!(game.host().snapshots.len(), published);
    assert_eq!(game.pending_tasks(), 0);
}

#[test]
fn flip_and_draw_guards() {
    let mut game = dealt_game(
        GameOptions::default(),
        &[
            card(Suit::Hearts, Rank::Two),
            card(Suit::Clubs, Rank::Queen),
            card(Suit::Spades, Rank::Six),
            card(Suit::Spades, Rank::Seven),
        ],
    );

    assert_eq!(game.advance_round().unwrap_err(), AdvanceError::NotResolved);

    game.flip_bases().unwrap();
    let snapshot = game.snapshot().unwrap();
    assert!(snapshot.left_flipped && snapshot.right_flipped);
    assert_eq!(snapshot.phase, Phase::Flipped);
    assert_eq!(game.flip_bases().unwrap_err(), FlipError::AlreadyFlipped);
    assert_eq!(game.advance_round().unwrap_err(), AdvanceError::NotResolved);

    game.draw_middle().unwrap();
    assert_eq!(game.draw_middle().unwrap_err(), DrawError::AlreadyResolved);
    assert_eq!(game.flip_bases().unwrap_err(), FlipError::AlreadyFlipped);
    assert_eq!(game.cards_remaining(), 1);
}

#[test]
fn draw_from_empty_deck_is_rejected() {
    let mut game = dealt_game(
        GameOptions::default(),
        &[
            card(Suit::Hearts, Rank::Two),
            card(Suit::Clubs, Rank::Queen),
            card(Suit::Spades, Rank::Six),
        ],
    );
    game.flip_bases().unwrap();
    *game.deck_mut().unwrap() = Deck::default();

    assert_eq!(game.draw_middle().unwrap_err(), DrawError::EmptyDeck);
    assert_eq!(game.phase(), Some(Phase::Flipped));
    assert_eq!(game.drinks(), 0);
}

#[test]
fn short_deck_is_rebuilt_on_next_round() {
    let mut game = dealt_game(
        GameOptions::default(),
        &[
            card(Suit::Hearts, Rank::Five),
            card(Suit::Clubs, Rank::Nine),
            card(Suit::Spades, Rank::King),
            card(Suit::Diamonds, Rank::Two),
            card(Suit::Diamonds, Rank::Three),
        ],
    );
    game.flip_bases().unwrap();
    game.draw_middle().unwrap();
    assert_eq!(game.cards_remaining(), 2);
    assert!(game.host().notices.is_empty());

    game.advance_round().unwrap();
    let snapshot = game.snapshot().unwrap();
    assert_eq!(snapshot.remaining_deck_size, DECK_SIZE);
    assert_eq!(snapshot.rebuilds, 1);
    assert_eq!(snapshot.cumulative_drinks, 1);
    assert_eq!(
        game.host().notices,
        vec![Notice::DeckRebuilt { cards: DECK_SIZE }]
    );

    game.settle();
    assert_eq!(game.cards_remaining(), DECK_SIZE - 2);
    assert_eq!(game.phase(), Some(Phase::Dealt));
}

#[test]
fn cues_follow_transitions() {
    let mut game = dealt_game(
        GameOptions::default(),
        &[
            card(Suit::Hearts, Rank::Five),
            card(Suit::Clubs, Rank::Nine),
            card(Suit::Spades, Rank::King),
        ],
    );
    assert_eq!(game.host().cues, vec![Cue::CardFlip]);

    game.flip_bases().unwrap();
    game.draw_middle().unwrap();
    assert_eq!(game.host().cues, vec![Cue::CardFlip; 3]);
    assert!(!game.snapshot().unwrap().result_visible);

    game.tick(ms(399));
    assert!(!game.snapshot().unwrap().result_visible);
    game.tick(ms(1));
    assert!(game.snapshot().unwrap().result_visible);
    assert_eq!(game.host().cues.last(), Some(&Cue::OutcomeDrink));
    assert_eq!(game.host().cues.len(), 4);
}

#[test]
fn sound_off_suppresses_cues() {
    let mut game = dealt_game(
        GameOptions::default(),
        &[
            card(Suit::Hearts, Rank::Five),
            card(Suit::Clubs, Rank::Nine),
            card(Suit::Spades, Rank::Nine),
        ],
    );
    game.toggle_sound(false).unwrap();
    assert!(!game.snapshot().unwrap().sound_enabled);

    game.flip_bases().unwrap();
    game.draw_middle().unwrap();
    game.settle();
    assert_eq!(game.host().cues, vec![Cue::CardFlip]);

    game.toggle_sound(true).unwrap();
    game.advance_round().unwrap();
    game.settle();
    assert_eq!(game.host().cues, vec![Cue::CardFlip; 2]);
}

#[test]
fn every_transition_is_published() {
    let mut game = recorded(GameOptions::default());
    game.start_session(1).unwrap();
    set_deck_from_draws(
        &mut game,
        &[
            card(Suit::Hearts, Rank::Five),
            card(Suit::Clubs, Rank::Nine),
            card(Suit::Spades, Rank::Seven),
        ],
    );
    game.settle();
    game.flip_bases().unwrap();
    game.draw_middle().unwrap();
    game.settle();

    let phases: Vec<(Phase, bool)> = game
        .host()
        .snapshots
        .iter()
        .map(|snapshot| (snapshot.phase, snapshot.left_card.is_some()))
        .collect();
    assert_eq!(
        phases,
        vec![
            (Phase::Dealing, false),
            (Phase::Dealing, true),
            (Phase::Dealt, true),
            (Phase::Flipped, true),
            (Phase::Resolved, true),
            (Phase::Resolved, true),
        ]
    );
    let last = game.host().snapshots.last().unwrap();
    assert!(last.result_visible);
    assert_eq!(last.result, Some(Outcome::Safe));
}

#[test]
fn auto_deal_advances_exactly_once() {
    let mut game = dealt_game(
        GameOptions::default().with_auto_deal(true),
        &[
            card(Suit::Hearts, Rank::Five),
            card(Suit::Clubs, Rank::Nine),
            card(Suit::Spades, Rank::King),
            card(Suit::Diamonds, Rank::Ace),
            card(Suit::Diamonds, Rank::Jack),
            card(Suit::Diamonds, Rank::Four),
        ],
    );
    assert!(game.snapshot().unwrap().auto_deal_enabled);

    game.flip_bases().unwrap();
    game.draw_middle().unwrap();
    game.tick(ms(400));
    assert!(game.snapshot().unwrap().result_visible);
    assert_eq!(game.pending_tasks(), 1);

    game.tick(ms(2999));
    assert_eq!(game.phase(), Some(Phase::Resolved));

    game.tick(ms(1));
    let snapshot = game.snapshot().unwrap();
    assert_eq!(snapshot.phase, Phase::Dealing);
    assert_eq!(snapshot.round, 2);
    assert_eq!(snapshot.middle_card, None);
    assert_eq!(snapshot.result, None);

    game.settle();
    let snapshot = game.snapshot().unwrap();
    assert_eq!(snapshot.phase, Phase::Dealt);
    assert_eq!(snapshot.round, 2);
    assert_eq!(snapshot.left_card, Some(card(Suit::Diamonds, Rank::Ace)));
    assert_eq!(snapshot.right_card, Some(card(Suit::Diamonds, Rank::Jack)));
    assert_eq!(game.pending_tasks(), 0);
}

#[test]
fn auto_deal_rebuilds_short_deck_before_dealing() {
    let mut game = dealt_game(
        GameOptions::default().with_auto_deal(true),
        &[
            card(Suit::Hearts, Rank::Five),
            card(Suit::Clubs, Rank::Nine),
            card(Suit::Spades, Rank::King),
            card(Suit::Diamonds, Rank::Two),
            card(Suit::Diamonds, Rank::Three),
        ],
    );
    game.flip_bases().unwrap();
    game.draw_middle().unwrap();
    assert_eq!(game.cards_remaining(), 2);

    game.tick(ms(400 + 3000));
    let snapshot = game.snapshot().unwrap();
    assert_eq!(snapshot.phase, Phase::Dealing);
    assert_eq!(snapshot.round, 2);
    assert_eq!(snapshot.rebuilds, 1);
    assert_eq!(snapshot.remaining_deck_size, DECK_SIZE);
    assert_eq!(
        game.host().notices,
        vec![Notice::DeckRebuilt { cards: DECK_SIZE }]
    );

    game.settle();
    assert_eq!(game.phase(), Some(Phase::Dealt));
    assert_eq!(game.cards_remaining(), DECK_SIZE - 2);
}

#[test]
fn fair_deal_settings_are_fixed_at_session_start() {
    let mut game = dealt_game(
        GameOptions::default().with_min_gap(3).with_max_attempts(1),
        &[
            card(Suit::Hearts, Rank::Five),
            card(Suit::Clubs, Rank::Nine),
            card(Suit::Spades, Rank::King),
            card(Suit::Diamonds, Rank::Five),
            card(Suit::Diamonds, Rank::Eight),
            card(Suit::Diamonds, Rank::Two),
        ],
    );
    game.options.min_gap = 200;

    game.flip_bases().unwrap();
    game.draw_middle().unwrap();
    game.advance_round().unwrap();
    game.settle();

    let snapshot = game.snapshot().unwrap();
    assert_eq!(snapshot.round, 2);
    assert_eq!(snapshot.left_card, Some(card(Suit::Diamonds, Rank::Five)));
    assert_eq!(snapshot.right_card, Some(card(Suit::Diamonds, Rank::Eight)));
    assert!(snapshot.fair_deal);

    game.restart_session();
    assert_eq!(
        game.start_session(1).unwrap_err(),
        StartError::Config(ConfigError::InvalidMinGap(200))
    );
    assert!(!game.is_active());
}

#[test]
fn disabling_auto_deal_cancels_pending_advance() {
    let mut game = dealt_game(
        GameOptions::default().with_auto_deal(true),
        &[
            card(Suit::Hearts, Rank::Five),
            card(Suit::Clubs, Rank::Nine),
            card(Suit::Spades, Rank::King),
        ],
    );
    game.flip_bases().unwrap();
    game.draw_middle().unwrap();
    game.tick(ms(400));
    assert_eq!(game.pending_tasks(), 1);

    assert!(!game.toggle_auto_deal().unwrap());
    assert_eq!(game.pending_tasks(), 0);
    game.tick(ms(5000));
    assert_eq!(game.phase(), Some(Phase::Resolved));

    assert!(game.toggle_auto_deal().unwrap());
    assert_eq!(game.pending_tasks(), 1);
    game.tick(ms(3000));
    assert_eq!(game.phase(), Some(Phase::Dealing));
}

#[test]
fn manual_advance_drops_pending_reveal() {
    let mut game = dealt_game(
        GameOptions::default().with_auto_deal(true),
        &[
            card(Suit::Hearts, Rank::Five),
            card(Suit::Clubs, Rank::Nine),
            card(Suit::Spades, Rank::King),
        ],
    );
    game.flip_bases().unwrap();
    game.draw_middle().unwrap();

    game.advance_round().unwrap();
    game.settle();

    let snapshot = game.snapshot().unwrap();
    assert_eq!(snapshot.round, 2);
    assert_eq!(snapshot.phase, Phase::Dealt);
    assert!(!snapshot.result_visible);
    assert!(
        !game
            .host()
            .cues
            .iter()
            .any(|cue| matches!(cue, Cue::OutcomeDrink))
    );
}

#[test]
fn restart_cancels_pending_transitions() {
    let mut game = dealt_game(
        GameOptions::default().with_auto_deal(true),
        &[
            card(Suit::Hearts, Rank::Five),
            card(Suit::Clubs, Rank::Nine),
            card(Suit::Spades, Rank::King),
        ],
    );
    game.flip_bases().unwrap();
    game.draw_middle().unwrap();
    game.tick(ms(400));
    assert_eq!(game.pending_tasks(), 1);

    let published = game.host().snapshots.len();
    game.restart_session();
    assert!(!game.is_active());
    assert!(game.snapshot().is_none());
    assert_eq!(game.pending_tasks(), 0);
    assert_eq!(game.host().snapshots.len(), published);
    assert_eq!(
        game.host().notices,
        vec![Notice::SessionEnded {
            rounds: 1,
            drinks: 1,
        }]
    );

    game.start_session(1).unwrap();
    game.tick(ms(3000));
    let snapshot = game.snapshot().unwrap();
    assert_eq!(snapshot.round, 1);
    assert_eq!(snapshot.phase, Phase::Dealt);
    assert_eq!(snapshot.cumulative_drinks, 0);
    assert!(snapshot.auto_deal_enabled);
}

#[test]
fn instant_options_resolve_on_zero_tick() {
    let mut game = Game::new(GameOptions::default().instant(), 11);
    game.start_session(3).unwrap();
    game.tick(Duration::ZERO);
    assert_eq!(game.phase(), Some(Phase::Dealt));

    game.flip_bases().unwrap();
    game.draw_middle().unwrap();
    game.tick(Duration::ZERO);
    assert!(game.snapshot().unwrap().result_visible);
    assert_eq!(game.cards_remaining(), 3 * DECK_SIZE - 3);
}

#[test]
fn long_session_keeps_dealing_through_rebuilds() {
    let mut game = Game::new(GameOptions::default().instant(), 2024);
    game.start_session(1).unwrap();

    let mut drinks = 0;
    for _ in 0..60 {
        game.settle();
        game.flip_bases().unwrap();
        game.draw_middle().unwrap();
        game.settle();

        let snapshot = game.snapshot().unwrap();
        drinks += snapshot.result.unwrap().drinks();
        assert_eq!(snapshot.cumulative_drinks, drinks);
        game.advance_round().unwrap();
    }

    let snapshot = game.snapshot().unwrap();
    assert_eq!(snapshot.round, 61);
    assert!(snapshot.rebuilds >= 3);
}
