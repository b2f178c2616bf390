//! Board invariant: a move never ends off the board.

use super::super::board::on_board;
use super::super::{BoardTurn, GameTurn};
use super::Invariant;

/// Invariant: a move's end square lies in `0..=100`.
pub struct SquareOnBoard;

impl Invariant<BoardTurn> for SquareOnBoard {
    fn holds(turn: &BoardTurn) -> bool {
        on_board(turn.end_square())
    }

    fn description() -> &'static str {
        "End square stays on the board (0-100)"
    }
}

impl Invariant<GameTurn> for SquareOnBoard {
    fn holds(turn: &GameTurn) -> bool {
        match turn {
            GameTurn::Rps(_) => true,
            GameTurn::Board(board) => <Self as Invariant<BoardTurn>>::holds(board),
        }
    }

    fn description() -> &'static str {
        <Self as Invariant<BoardTurn>>::description()
    }
}
