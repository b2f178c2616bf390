//! Consistency checks for turn records.
//!
//! A record built by a correct rule calculator satisfies every check here.
//! Records themselves never validate on construction, so these checks are
//! how a history is audited after the fact.

/// A property a record of type `R` is expected to satisfy.
pub trait Invariant<R> {
    /// Returns true when `record` satisfies the property.
    fn holds(record: &R) -> bool;

    /// The property, phrased as a statement about a correct record.
    fn description() -> &'static str;
}

/// A record failed one property.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
#[display("{}", description)]
pub struct InvariantViolation {
    /// The property that did not hold.
    pub description: String,
}

impl InvariantViolation {
    /// Wraps the description of a failed property.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// Several properties audited in one pass.
///
/// Implemented for pairs; [`TurnRecordInvariants`] is the pair used for
/// match histories.
pub trait InvariantSet<R> {
    /// Audits `record` against every property in the set and reports all
    /// failures, in declaration order.
    fn check_all(record: &R) -> Result<(), Vec<InvariantViolation>>;
}

impl<R, I1, I2> InvariantSet<R> for (I1, I2)
where
    I1: Invariant<R>,
    I2: Invariant<R>,
{
    fn check_all(record: &R) -> Result<(), Vec<InvariantViolation>> {
        let violations: Vec<InvariantViolation> = [
            (I1::holds(record), I1::description()),
            (I2::holds(record), I2::description()),
        ]
        .into_iter()
        .filter(|(held, _)| !held)
        .map(|(_, description)| InvariantViolation::new(description))
        .collect();

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

pub mod square_on_board;
pub mod winner_matches_shapes;

pub use square_on_board::SquareOnBoard;
pub use winner_matches_shapes::WinnerMatchesShapes;

/// Every invariant that applies to a stored [`GameTurn`](crate::GameTurn).
pub type TurnRecordInvariants = (WinnerMatchesShapes, SquareOnBoard);
