//! Grading error type.

use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};

/// Which grader check produced a failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
pub enum GradingCheck {
    /// Rock-Paper-Scissors winner logic.
    #[display("RPS logic")]
    RpsLogic,
    /// Rendering of a Rock-Paper-Scissors round.
    #[display("RPS string")]
    RpsString,
    /// Chutes and Ladders movement logic.
    #[display("Chutes logic")]
    ChutesLogic,
}

/// A grading failure: the implementation disagreed with the oracle.
///
/// `Display` is the human-readable description of the violated expectation.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("{}", description)]
pub struct GradingError {
    check: GradingCheck,
    description: String,
}

impl GradingError {
    pub(crate) fn new(check: GradingCheck, description: impl Into<String>) -> Self {
        Self {
            check,
            description: description.into(),
        }
    }

    /// The check that failed.
    pub fn check(&self) -> GradingCheck {
        self.check
    }

    /// The readable failure message.
    pub fn description(&self) -> &str {
        &self.description
    }
}
