//! Classic implementations of the gamecore games
//!
//! Ready-made Rock-Paper-Scissors and Chutes and Ladders that satisfy the
//! capability contracts and pass the grader. Match simulation draws from a
//! seedable random source configured through [`MatchConfig`].
//!
//! # Example
//!
//! ```
//! use gamecore::{ChutesAndLaddersGame, Game, Grader};
//! use gamecore_classic::{ClassicChutesAndLadders, describe_turn};
//!
//! let game = ClassicChutesAndLadders::new();
//! Grader::verify_chutes_logic(&game).unwrap();
//!
//! for turn in game.play() {
//!     println!("{}", describe_turn(&turn));
//! }
//! ```

#![warn(missing_docs)]

// Private module declarations
mod chutes;
mod config;
mod layout;
mod rps;
mod summary;

// Crate-level exports - Games
pub use chutes::ClassicChutesAndLadders;
pub use rps::ClassicRockPaperScissors;

// Crate-level exports - Board and settings
pub use config::{ConfigError, MatchConfig};
pub use layout::BoardLayout;

// Crate-level exports - Rendering
pub use summary::{RoundSummary, describe_turn};
