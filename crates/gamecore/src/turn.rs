//! Immutable records of a single round or move.
//!
//! Records are domain events: a rule calculator builds one and nothing
//! mutates it afterwards. Fields are private and exposed through getters.

use super::{HandShape, Player};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A single round of Rock-Paper-Scissors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RpsTurn {
    player1: HandShape,
    player2: HandShape,
    winner: Option<Player>,
}

impl RpsTurn {
    /// Creates a record exactly as given.
    ///
    /// No consistency check happens here; see
    /// [`WinnerMatchesShapes`](crate::WinnerMatchesShapes) for that.
    pub fn new(player1: HandShape, player2: HandShape, winner: Option<Player>) -> Self {
        Self {
            player1,
            player2,
            winner,
        }
    }

    /// Creates a record whose winner follows the standard precedence.
    #[instrument(level = "debug")]
    pub fn resolve(player1: HandShape, player2: HandShape) -> Self {
        Self::new(player1, player2, HandShape::versus(player1, player2))
    }

    /// The shape chosen by the first player.
    pub fn player1(&self) -> HandShape {
        self.player1
    }

    /// The shape chosen by the second player.
    pub fn player2(&self) -> HandShape {
        self.player2
    }

    /// The winner of the round, or `None` for a tie.
    pub fn winner(&self) -> Option<Player> {
        self.winner
    }

    /// Returns true when neither player won.
    pub fn is_tie(&self) -> bool {
        self.winner.is_none()
    }
}

/// A single move in Chutes and Ladders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BoardTurn {
    roll: u32,
    end_square: u32,
}

impl BoardTurn {
    /// Creates a record of a move.
    pub fn new(roll: u32, end_square: u32) -> Self {
        Self { roll, end_square }
    }

    /// The number rolled on the die (typically 1-6).
    pub fn roll(&self) -> u32 {
        self.roll
    }

    /// The square the piece ended on after chutes, ladders and the cap.
    pub fn end_square(&self) -> u32 {
        self.end_square
    }
}

/// A turn from any supported game, for storing a mixed match history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::From)]
#[serde(tag = "game", rename_all = "snake_case")]
pub enum GameTurn {
    /// A Rock-Paper-Scissors round.
    Rps(RpsTurn),
    /// A Chutes and Ladders move.
    Board(BoardTurn),
}

impl GameTurn {
    /// Returns the round if this is a Rock-Paper-Scissors turn.
    pub fn as_rps(&self) -> Option<&RpsTurn> {
        match self {
            GameTurn::Rps(turn) => Some(turn),
            GameTurn::Board(_) => None,
        }
    }

    /// Returns the move if this is a board turn.
    pub fn as_board(&self) -> Option<&BoardTurn> {
        match self {
            GameTurn::Rps(_) => None,
            GameTurn::Board(turn) => Some(turn),
        }
    }
}
