//! Core value types shared by every game.

use serde::{Deserialize, Serialize};
use tracing::instrument;

/// One of the three moves in Rock-Paper-Scissors.
///
/// `Display` renders the shape's glyph, which is what match histories print.
/// Use [`HandShape::label`] for the plain English name.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
    strum::EnumCount,
)]
#[serde(rename_all = "snake_case")]
pub enum HandShape {
    /// Beats scissors.
    #[strum(to_string = "🪨")]
    Rock,
    /// Beats rock.
    #[strum(to_string = "📄")]
    Paper,
    /// Beats paper.
    #[strum(to_string = "✂️")]
    Scissors,
}

impl HandShape {
    /// Returns the plain name of the shape.
    pub fn label(self) -> &'static str {
        match self {
            HandShape::Rock => "Rock",
            HandShape::Paper => "Paper",
            HandShape::Scissors => "Scissors",
        }
    }

    /// Returns the shape this one defeats.
    pub fn defeats(self) -> HandShape {
        match self {
            HandShape::Rock => HandShape::Scissors,
            HandShape::Scissors => HandShape::Paper,
            HandShape::Paper => HandShape::Rock,
        }
    }

    /// Checks whether this shape beats `other` under
    /// rock > scissors > paper > rock.
    pub fn beats(self, other: HandShape) -> bool {
        self.defeats() == other
    }

    /// Resolves one round between two shapes.
    ///
    /// Returns `None` when the shapes are equal.
    #[instrument(level = "trace")]
    pub fn versus(player1: HandShape, player2: HandShape) -> Option<Player> {
        if player1.beats(player2) {
            Some(Player::One)
        } else if player2.beats(player1) {
            Some(Player::Two)
        } else {
            None
        }
    }
}

/// A participant in a two-player game.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
#[serde(rename_all = "snake_case")]
pub enum Player {
    /// The first player.
    #[display("Player 1")]
    One,
    /// The second player.
    #[display("Player 2")]
    Two,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }
}
