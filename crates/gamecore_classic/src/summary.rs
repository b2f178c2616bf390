//! Text rendering of match history.

use gamecore::{GameTurn, RpsTurn};
use std::fmt;

/// Renders a Rock-Paper-Scissors round, e.g. `Player 1 Wins: 📄 vs 🪨`.
#[derive(Debug, Clone, Copy)]
pub struct RoundSummary<'a>(pub &'a RpsTurn);

impl fmt::Display for RoundSummary<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let turn = self.0;
        match turn.winner() {
            Some(player) => write!(f, "{} Wins: {} vs {}", player, turn.player1(), turn.player2()),
            None => write!(f, "Tie: {} vs {}", turn.player1(), turn.player2()),
        }
    }
}

/// Renders one entry of a match history.
pub fn describe_turn(turn: &GameTurn) -> String {
    match turn {
        GameTurn::Rps(rps) => RoundSummary(rps).to_string(),
        GameTurn::Board(board) => format!(
            "Rolled {}, landed on {}",
            board.roll(),
            board.end_square()
        ),
    }
}
