//! Capability contracts every game implementation satisfies.
//!
//! Callers hold a `&dyn` reference to a capability, never a concrete type.
//! The required constructors are bounded by `Self: Sized` so the traits stay
//! object safe.

use super::{BoardTurn, GameTurn, HandShape, RpsTurn};

/// The base requirement for any game.
pub trait Game: Send + Sync {
    /// Display name of the game (e.g. "Rock Paper Scissors").
    fn name(&self) -> &str;

    /// Runs a full simulated match and returns its history.
    ///
    /// The simulation may consult randomness; it must terminate.
    fn play(&self) -> Vec<GameTurn>;
}

/// The rules of Rock-Paper-Scissors.
pub trait RockPaperScissorsGame: Game {
    /// No-argument construction path.
    fn new() -> Self
    where
        Self: Sized;

    /// Calculates the result of one round.
    ///
    /// Must be pure: same shapes, same record.
    fn turn(&self, player1: HandShape, player2: HandShape) -> RpsTurn;
}

/// The rules of Chutes and Ladders.
pub trait ChutesAndLaddersGame: Game {
    /// No-argument construction path.
    fn new() -> Self
    where
        Self: Sized;

    /// Calculates the result of one move.
    ///
    /// Adds `roll` to `current_square`, follows the ladder or chute that
    /// starts on the landed square if any, then caps the result at 100.
    /// [`resolve_move`](crate::board::resolve_move) implements exactly this.
    fn turn(&self, current_square: u32, roll: u32) -> BoardTurn;
}
