//! Winner invariant: the recorded winner agrees with the shapes played.

use super::super::{GameTurn, HandShape, RpsTurn};
use super::Invariant;

/// Invariant: a round's winner follows rock > scissors > paper > rock.
///
/// The winner is empty exactly when both shapes are equal.
pub struct WinnerMatchesShapes;

impl Invariant<RpsTurn> for WinnerMatchesShapes {
    fn holds(turn: &RpsTurn) -> bool {
        turn.winner() == HandShape::versus(turn.player1(), turn.player2())
    }

    fn description() -> &'static str {
        "Winner is empty on a tie and otherwise names the beating shape"
    }
}

impl Invariant<GameTurn> for WinnerMatchesShapes {
    fn holds(turn: &GameTurn) -> bool {
        match turn {
            GameTurn::Rps(rps) => <Self as Invariant<RpsTurn>>::holds(rps),
            GameTurn::Board(_) => true,
        }
    }

    fn description() -> &'static str {
        <Self as Invariant<RpsTurn>>::description()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Player;

    #[test]
    fn test_resolved_rounds_hold() {
        use strum::IntoEnumIterator;
        for a in HandShape::iter() {
            for b in HandShape::iter() {
                assert!(WinnerMatchesShapes::holds(&RpsTurn::resolve(a, b)));
            }
        }
    }

    #[test]
    fn test_tie_with_winner_violates() {
        let turn = RpsTurn::new(HandShape::Scissors, HandShape::Scissors, Some(Player::One));
        assert!(!WinnerMatchesShapes::holds(&turn));
    }

    #[test]
    fn test_swapped_winner_violates() {
        let turn = RpsTurn::new(HandShape::Paper, HandShape::Rock, Some(Player::Two));
        assert!(!WinnerMatchesShapes::holds(&turn));
    }

    #[test]
    fn test_missing_winner_violates() {
        let turn = RpsTurn::new(HandShape::Rock, HandShape::Scissors, None);
        assert!(!WinnerMatchesShapes::holds(&turn));
    }
}
