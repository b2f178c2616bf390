//! Game core - shared records, capability contracts, and a grading oracle
//!
//! Two toy games share this crate: Rock-Paper-Scissors and a
//! Chutes-and-Ladders style board game.
//!
//! # Architecture
//!
//! - **Types**: hand shapes and players
//! - **Turns**: immutable records of one round or move, and a tagged union
//!   for mixed histories
//! - **Contracts**: the traits an implementation satisfies
//! - **Grader**: fixed vectors checked against a supplied implementation
//!
//! # Example
//!
//! ```
//! use gamecore::{Game, GameTurn, Grader, HandShape, RockPaperScissorsGame, RpsTurn};
//!
//! struct MyRps;
//!
//! impl Game for MyRps {
//!     fn name(&self) -> &str {
//!         "Rock Paper Scissors"
//!     }
//!
//!     fn play(&self) -> Vec<GameTurn> {
//!         vec![self.turn(HandShape::Rock, HandShape::Scissors).into()]
//!     }
//! }
//!
//! impl RockPaperScissorsGame for MyRps {
//!     fn new() -> Self {
//!         MyRps
//!     }
//!
//!     fn turn(&self, player1: HandShape, player2: HandShape) -> RpsTurn {
//!         RpsTurn::resolve(player1, player2)
//!     }
//! }
//!
//! Grader::verify_rps_logic(&MyRps::new()).unwrap();
//! ```

#![warn(missing_docs)]

// Private module declarations
mod contracts;
mod error;
mod grader;
mod turn;
mod types;

// Public modules
pub mod board;
pub mod invariants;

// Crate-level exports - Value types
pub use types::{HandShape, Player};

// Crate-level exports - Turn records
pub use turn::{BoardTurn, GameTurn, RpsTurn};

// Crate-level exports - Contracts
pub use contracts::{ChutesAndLaddersGame, Game, RockPaperScissorsGame};

// Crate-level exports - Grading
pub use error::{GradingCheck, GradingError};
pub use grader::Grader;

// Crate-level exports - Invariants
pub use invariants::{
    Invariant, InvariantSet, InvariantViolation, SquareOnBoard, TurnRecordInvariants,
    WinnerMatchesShapes,
};
