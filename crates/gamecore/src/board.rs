//! Board movement mechanics for Chutes and Ladders.
//!
//! Every move follows the same three steps: add the roll to the current
//! square, follow a ladder or chute if the landed square starts one, then cap
//! the result at the final square. Which squares are special is left to the
//! implementation; this module only supplies the mechanism.

use super::BoardTurn;
use tracing::{debug, instrument};

/// The starting square, off the board proper.
pub const FIRST_SQUARE: u32 = 0;

/// The winning square. No move ends past it.
pub const FINAL_SQUARE: u32 = 100;

/// Caps a square at [`FINAL_SQUARE`].
pub fn clamp_square(square: u32) -> u32 {
    square.min(FINAL_SQUARE)
}

/// Checks that a square lies on the board.
pub fn on_board(square: u32) -> bool {
    (FIRST_SQUARE..=FINAL_SQUARE).contains(&square)
}

/// Resolves one move.
///
/// `special` maps the entry square of a ladder or chute to its destination
/// and returns `None` for ordinary squares.
#[instrument(skip(special))]
pub fn resolve_move<F>(current_square: u32, roll: u32, special: F) -> BoardTurn
where
    F: Fn(u32) -> Option<u32>,
{
    let landed = current_square.saturating_add(roll);
    let end_square = match special(landed) {
        Some(destination) => {
            debug!(landed, destination, "Followed ladder or chute");
            clamp_square(destination)
        }
        None => clamp_square(landed),
    };
    BoardTurn::new(roll, end_square)
}
