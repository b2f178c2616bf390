//! Classic Chutes and Ladders.

use super::{BoardLayout, MatchConfig};
use gamecore::board::{FINAL_SQUARE, FIRST_SQUARE, resolve_move};
use gamecore::{BoardTurn, ChutesAndLaddersGame, Game, GameTurn};
use rand::Rng;
use tracing::{debug, info, instrument, warn};

/// Faces on the die.
const DIE_SIDES: u32 = 6;

/// Single-piece Chutes and Ladders on a configurable board.
#[derive(Debug, Clone, Default)]
pub struct ClassicChutesAndLadders {
    layout: BoardLayout,
    config: MatchConfig,
}

impl ClassicChutesAndLadders {
    /// Creates a game on the given board.
    pub fn with_layout(layout: BoardLayout, config: MatchConfig) -> Self {
        Self { layout, config }
    }

    /// The ladder and chute placement.
    pub fn layout(&self) -> &BoardLayout {
        &self.layout
    }

    /// The match settings.
    pub fn config(&self) -> &MatchConfig {
        &self.config
    }
}

impl Game for ClassicChutesAndLadders {
    fn name(&self) -> &str {
        "Chutes and Ladders"
    }

    /// Rolls from the start square until the piece reaches the final square
    /// or the move cap runs out.
    #[instrument(skip(self), fields(max_turns = self.config.max_turns()))]
    fn play(&self) -> Vec<GameTurn> {
        let mut rng = self.config.match_rng();
        let mut history = Vec::new();
        let mut square = FIRST_SQUARE;

        while square < FINAL_SQUARE && history.len() < *self.config.max_turns() as usize {
            let roll = rng.random_range(1..=DIE_SIDES);
            let turn = self.turn(square, roll);
            debug!(from = square, roll, to = turn.end_square(), "Moved");
            square = turn.end_square();
            history.push(GameTurn::from(turn));
        }

        if square == FINAL_SQUARE {
            info!(moves = history.len(), "Reached the final square");
        } else {
            warn!(moves = history.len(), square, "Move cap reached before finishing");
        }
        history
    }
}

impl ChutesAndLaddersGame for ClassicChutesAndLadders {
    fn new() -> Self {
        Self::default()
    }

    fn turn(&self, current_square: u32, roll: u32) -> BoardTurn {
        resolve_move(current_square, roll, |square| self.layout.destination(square))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gamecore::Grader;

    #[test]
    fn test_passes_grader() {
        assert!(Grader::verify_chutes_logic(&ClassicChutesAndLadders::new()).is_ok());
    }

    #[test]
    fn test_ladder_to_final_square() {
        let game = ClassicChutesAndLadders::new();
        assert_eq!(game.turn(76, 4).end_square(), 100);
    }

    #[test]
    fn test_overshoot_stops_at_final_square() {
        let game = ClassicChutesAndLadders::new();
        assert_eq!(game.turn(97, 6).end_square(), 100);
    }

    #[test]
    fn test_chute_near_the_top() {
        let game = ClassicChutesAndLadders::new();
        let turn = game.turn(92, 6);
        assert_eq!(turn.roll(), 6);
        assert_eq!(turn.end_square(), 78);
    }

    #[test]
    fn test_empty_board_fails_grader() {
        let game = ClassicChutesAndLadders::with_layout(BoardLayout::empty(), MatchConfig::default());
        let err = Grader::verify_chutes_logic(&game).unwrap_err();
        assert!(err.to_string().ends_with("Got: 4"));
    }

    #[test]
    fn test_play_finishes_on_final_square() {
        let game = ClassicChutesAndLadders::with_layout(
            BoardLayout::classic(),
            MatchConfig::default().with_seed(3).with_max_turns(10_000),
        );
        let history = game.play();
        let last = history.last().and_then(GameTurn::as_board).map(BoardTurn::end_square);
        assert_eq!(last, Some(FINAL_SQUARE));
        assert!(
            history
                .iter()
                .filter_map(GameTurn::as_board)
                .all(|turn| (1..=DIE_SIDES).contains(&turn.roll()))
        );
    }

    #[test]
    fn test_play_respects_move_cap() {
        let game = ClassicChutesAndLadders::with_layout(
            BoardLayout::empty(),
            MatchConfig::default().with_max_turns(3),
        );
        assert_eq!(game.play().len(), 3);
    }
}
