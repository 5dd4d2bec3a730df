//! CLI In-Between example.
//!
//! Set `RUST_LOG=inbetween=debug` to watch the engine's transitions.

use std::io::{self, Write};
use std::thread;
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use inbetween::{Card, Cue, Game, GameOptions, Host, Notice, Outcome, Phase, Snapshot, Suit};
use tracing_subscriber::EnvFilter;

const FRAME: Duration = Duration::from_millis(50);

/// Prints results and notices as the engine publishes them.
#[derive(Default)]
struct Console {
    announced: Option<u32>,
}

impl Host for Console {
    fn publish(&mut self, snapshot: &Snapshot) {
        if !snapshot.result_visible || self.announced == Some(snapshot.round) {
            return;
        }
        self.announced = Some(snapshot.round);
        if let Some(result) = snapshot.result {
            println!(
                "{} (total drinks: {})",
                format_outcome(result),
                snapshot.cumulative_drinks
            );
        }
    }

    fn cue(&mut self, cue: Cue) {
        let sound = match cue {
            Cue::CardFlip => "*flip*",
            Cue::OutcomeSafe => "*ding*",
            Cue::OutcomeDrink => "*buzz*",
            Cue::OutcomeDouble => "*BUZZ BUZZ*",
        };
        println!("{}", colorize(sound, "90"));
    }

    fn notice(&mut self, notice: Notice) {
        match notice {
            Notice::DeckRebuilt { cards } => {
                println!("Deck ran low. Reshuffled a fresh deck of {cards} cards.");
            }
            Notice::SessionEnded { rounds, drinks } => {
                println!("Session over: {drinks} drink(s) in {rounds} round(s).");
            }
        }
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("In-Between CLI example (type 'q' to quit)");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let mut game = Game::with_host(GameOptions::default(), seed, Console::default());

    let Some(deck_count) = prompt_deck_count() else {
        return;
    };
    if let Err(err) = game.start_session(deck_count) {
        println!("Start error: {err}");
        return;
    }

    loop {
        run_clock(&mut game);
        let Some(snapshot) = game.snapshot() else {
            break;
        };
        print_table(&snapshot);
        println!("{}", format_actions(&snapshot));

        let result = match prompt_line("Action: ").as_str() {
            "f" | "flip" => game.flip_bases().map_err(|err| err.to_string()),
            "d" | "draw" => game
                .draw_middle()
                .map(|card| println!("Drew {}", format_card(&card)))
                .map_err(|err| err.to_string()),
            "n" | "next" => game.advance_round().map_err(|err| err.to_string()),
            "a" | "auto" => game
                .toggle_auto_deal()
                .map(|enabled| println!("Auto-deal {}", on_off(enabled)))
                .map_err(|err| err.to_string()),
            "s" | "sound" => game
                .toggle_sound(!snapshot.sound_enabled)
                .map(|()| println!("Sound {}", on_off(!snapshot.sound_enabled)))
                .map_err(|err| err.to_string()),
            "r" | "restart" => {
                game.restart_session();
                match prompt_deck_count() {
                    Some(count) => game.start_session(count).map_err(|err| err.to_string()),
                    None => return,
                }
            }
            "q" | "quit" => {
                println!(
                    "Goodbye. You owe {} drink(s) after {} round(s).",
                    snapshot.cumulative_drinks, snapshot.round
                );
                return;
            }
            _ => {
                println!("Unknown action.");
                continue;
            }
        };

        if let Err(err) = result {
            println!("Action error: {err}");
        }
    }
}

/// Feeds wall-clock time to the engine until it waits for the player.
fn run_clock<H: Host>(game: &mut Game<H>) {
    let mut last = Instant::now();
    while game.pending_tasks() > 0 {
        thread::sleep(FRAME);
        let now = Instant::now();
        game.tick(now - last);
        last = now;
    }
}

fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    if io::stdin().read_line(&mut input).is_err() {
        return String::new();
    }
    input.trim().to_lowercase()
}

fn prompt_deck_count() -> Option<u8> {
    loop {
        let input = prompt_line("Number of decks (1-3): ");
        if input == "q" || input == "quit" {
            return None;
        }
        match input.parse::<u8>() {
            Ok(value @ 1..=3) => return Some(value),
            _ => println!("Please enter 1, 2 or 3."),
        }
    }
}

fn print_table(snapshot: &Snapshot) {
    println!(
        "\nRound {} | deck: {} card(s) | drinks: {}",
        snapshot.round, snapshot.remaining_deck_size, snapshot.cumulative_drinks
    );

    let left = format_slot(snapshot.left_card, snapshot.left_flipped);
    let right = format_slot(snapshot.right_card, snapshot.right_flipped);
    let middle = format_slot(snapshot.middle_card, true);
    println!("  {left}   {middle}   {right}");
    if !snapshot.fair_deal && snapshot.left_flipped {
        println!("{}", colorize("(tight deal: no fair pair was found)", "90"));
    }
    println!();
}

fn format_actions(snapshot: &Snapshot) -> String {
    let parts = [
        format_action("flip", "f", snapshot.phase == Phase::Dealt),
        format_action("draw", "d", snapshot.phase == Phase::Flipped),
        format_action("next", "n", snapshot.phase == Phase::Resolved),
        format_action(
            &format!("auto ({})", on_off(snapshot.auto_deal_enabled)),
            "a",
            true,
        ),
        format_action(
            &format!("sound ({})", on_off(snapshot.sound_enabled)),
            "s",
            true,
        ),
        format_action("restart", "r", true),
    ];
    format!("Actions: {}", parts.join(" "))
}

fn format_action(label: &str, key: &str, allowed: bool) -> String {
    let text = format!("[{key}]{label}");
    if allowed {
        colorize(&text, "32")
    } else {
        colorize(&text, "90")
    }
}

const fn on_off(enabled: bool) -> &'static str {
    if enabled { "on" } else { "off" }
}

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}

fn format_outcome(outcome: Outcome) -> String {
    match outcome {
        Outcome::Safe => colorize("Safe!", "32"),
        Outcome::Drink => colorize("Drink!", "33"),
        Outcome::Double => colorize("Double drink!", "31"),
    }
}

fn format_slot(card: Option<Card>, face_up: bool) -> String {
    match card {
        Some(card) if face_up => format_card(&card),
        Some(_) => "??".to_string(),
        None => "--".to_string(),
    }
}

fn format_card(card: &Card) -> String {
    let color_code = match card.suit {
        Suit::Hearts | Suit::Diamonds => "31",
        Suit::Clubs => "32",
        Suit::Spades => "34",
    };
    colorize(&card.to_string(), color_code)
}
