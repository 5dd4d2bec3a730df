//! An In-Between game engine with optional `no_std` support.
//!
//! Two base cards are dealt face down and flipped together; the player then
//! draws a middle card. Landing strictly between the bases is safe, landing
//! outside costs a drink, and matching a base rank costs two.
//!
//! The crate provides a [`Game`] type that manages the session and round
//! flow, a [`FairDealer`] that keeps base cards far enough apart to make each
//! round interesting, and the pure [`evaluate`] rule. Rendering and audio are
//! left to a [`Host`].
//!
//! # Example
//!
//! ```no_run
//! use inbetween::{Game, GameOptions};
//!
//! let options = GameOptions::default();
//! let mut game = Game::new(options, 42);
//! game.start_session(1).unwrap();
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod deck;
pub mod error;
pub mod fair;
pub mod game;
pub mod host;
pub mod options;
pub mod outcome;

// Re-export main types
pub use card::{Card, CardId, DECK_SIZE, Rank, Suit};
pub use deck::{Deck, DeckCount};
pub use error::{
    AdvanceError, ConfigError, DrawError, FlipError, InsufficientDeck, ModeError, StartError,
};
pub use fair::{BasePair, FairDealer, MAX_ATTEMPTS, MIN_GAP};
pub use game::{Game, Phase, Snapshot};
pub use host::{Cue, Host, Notice};
pub use options::GameOptions;
pub use outcome::{Outcome, evaluate};
