//! The grading oracle.
//!
//! Each check runs a frozen table of input/expected-output vectors against a
//! caller-supplied implementation and stops at the first disagreement. The
//! tables are private constants: callers supply the implementation under
//! test and nothing else.

use super::error::{GradingCheck, GradingError};
use super::{ChutesAndLaddersGame, HandShape, Player, RockPaperScissorsGame};
use tracing::{info, instrument, warn};

/// One fixed Rock-Paper-Scissors vector.
struct RpsVector {
    player1: HandShape,
    player2: HandShape,
    winner: Option<Player>,
    failure: &'static str,
}

/// Player 1 win, Player 2 win, tie. Checked in this order.
const RPS_VECTORS: [RpsVector; 3] = [
    RpsVector {
        player1: HandShape::Paper,
        player2: HandShape::Rock,
        winner: Some(Player::One),
        failure: "Logic Fail: Paper (P1) vs Rock (P2) should be Player 1 Win.",
    },
    RpsVector {
        player1: HandShape::Rock,
        player2: HandShape::Paper,
        winner: Some(Player::Two),
        failure: "Logic Fail: Rock (P1) vs Paper (P2) should be Player 2 Win.",
    },
    RpsVector {
        player1: HandShape::Scissors,
        player2: HandShape::Scissors,
        winner: None,
        failure: "Logic Fail: Scissors vs Scissors should be a Tie (None).",
    },
];

/// One fixed board vector. The failure message gets the actual square appended.
struct BoardVector {
    current_square: u32,
    roll: u32,
    end_square: u32,
    failure: &'static str,
}

/// Ladder, then chute. Checked in this order.
const BOARD_VECTORS: [BoardVector; 2] = [
    BoardVector {
        current_square: 0,
        roll: 4,
        end_square: 14,
        failure: "Logic Fail: 0 + 4 is a ladder to 14.",
    },
    BoardVector {
        current_square: 10,
        roll: 7,
        end_square: 7,
        failure: "Logic Fail: Landed on 17 (Chute). Should be 7.",
    },
];

/// Either marker identifies a Player 1 win.
const PLAYER_ONE_MARKERS: [&str; 2] = ["Player 1 Wins", "Player 1"];

const SEPARATOR: &str = "vs";

/// Stateless verification procedures for game implementations.
///
/// The pass criteria are compiled in; there is no way to construct a grader
/// with different vectors.
#[derive(Debug, Clone, Copy, Default)]
pub struct Grader;

impl Grader {
    /// Verifies that a Rock-Paper-Scissors implementation follows the
    /// standard rules.
    ///
    /// Checks, in order: Paper beats Rock for Player 1, Paper beats Rock for
    /// Player 2, and Scissors against Scissors ties.
    #[instrument(skip(game), fields(game_name = game.name()))]
    pub fn verify_rps_logic(game: &dyn RockPaperScissorsGame) -> Result<(), GradingError> {
        info!("Grader: Verifying RPS Logic...");

        for vector in &RPS_VECTORS {
            let turn = game.turn(vector.player1, vector.player2);
            if turn.winner() != vector.winner {
                let error = GradingError::new(GradingCheck::RpsLogic, vector.failure);
                warn!(actual = ?turn.winner(), expected = ?vector.winner, %error, "RPS vector failed");
                return Err(error);
            }
        }

        info!("RPS Logic Passed");
        Ok(())
    }

    /// Verifies a rendered round in which Player 1 won.
    ///
    /// The text must name Player 1 and contain the `vs` separator.
    #[instrument(skip(output))]
    pub fn verify_rps_string(output: &str) -> Result<(), GradingError> {
        info!("Grader: Verifying RPS String Format...");

        if !PLAYER_ONE_MARKERS.iter().any(|marker| output.contains(marker)) {
            let error = GradingError::new(
                GradingCheck::RpsString,
                format!("String Fail: Output must identify 'Player 1 Wins'. Got: {}", output),
            );
            warn!(%error, "RPS string failed");
            return Err(error);
        }

        if !output.contains(SEPARATOR) {
            let error = GradingError::new(
                GradingCheck::RpsString,
                format!("String Fail: Output must contain '{}'. Got: {}", SEPARATOR, output),
            );
            warn!(%error, "RPS string failed");
            return Err(error);
        }

        info!("RPS Printing Passed");
        Ok(())
    }

    /// Verifies board movement: one ladder and one chute.
    #[instrument(skip(game), fields(game_name = game.name()))]
    pub fn verify_chutes_logic(game: &dyn ChutesAndLaddersGame) -> Result<(), GradingError> {
        info!("Grader: Verifying Chutes Logic...");

        for vector in &BOARD_VECTORS {
            let turn = game.turn(vector.current_square, vector.roll);
            if turn.end_square() != vector.end_square {
                let error = GradingError::new(
                    GradingCheck::ChutesLogic,
                    format!("{} Got: {}", vector.failure, turn.end_square()),
                );
                warn!(%error, "Chutes vector failed");
                return Err(error);
            }
        }

        info!("Chutes Logic Passed");
        Ok(())
    }
}
