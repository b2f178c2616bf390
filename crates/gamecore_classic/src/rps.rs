//! Classic Rock-Paper-Scissors.

use super::MatchConfig;
use gamecore::{Game, GameTurn, HandShape, RockPaperScissorsGame, RpsTurn};
use rand::Rng;
use rand::seq::IteratorRandom;
use strum::IntoEnumIterator;
use tracing::{debug, info, instrument};

/// Picks a shape uniformly at random.
fn random_shape<R: Rng + ?Sized>(rng: &mut R) -> HandShape {
    // `HandShape::iter()` is never empty.
    HandShape::iter().choose(rng).unwrap_or(HandShape::Rock)
}

/// Rock-Paper-Scissors with both players choosing uniformly at random.
#[derive(Debug, Clone, Default)]
pub struct ClassicRockPaperScissors {
    config: MatchConfig,
}

impl ClassicRockPaperScissors {
    /// Creates a game with the given match settings.
    pub fn with_config(config: MatchConfig) -> Self {
        Self { config }
    }

    /// The match settings.
    pub fn config(&self) -> &MatchConfig {
        &self.config
    }
}

impl Game for ClassicRockPaperScissors {
    fn name(&self) -> &str {
        "Rock Paper Scissors"
    }

    #[instrument(skip(self), fields(rounds = self.config.rounds()))]
    fn play(&self) -> Vec<GameTurn> {
        let mut rng = self.config.match_rng();
        let history: Vec<GameTurn> = (0..*self.config.rounds())
            .map(|round| {
                let player1 = random_shape(&mut rng);
                let player2 = random_shape(&mut rng);
                let turn = self.turn(player1, player2);
                debug!(round, ?turn, "Round played");
                GameTurn::from(turn)
            })
            .collect();

        info!(rounds = history.len(), "Match finished");
        history
    }
}

impl RockPaperScissorsGame for ClassicRockPaperScissors {
    fn new() -> Self {
        Self::default()
    }

    fn turn(&self, player1: HandShape, player2: HandShape) -> RpsTurn {
        RpsTurn::resolve(player1, player2)
    }
}
