//! Ladder and chute placement.

use super::ConfigError;
use gamecore::board::{FINAL_SQUARE, FIRST_SQUARE, on_board};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::instrument;

/// Ladders on the classic board, bottom to top.
const CLASSIC_LADDERS: [(u32, u32); 9] = [
    (1, 38),
    (4, 14),
    (9, 31),
    (21, 42),
    (28, 84),
    (36, 44),
    (51, 67),
    (71, 91),
    (80, 100),
];

/// Chutes on the classic board, by entry square.
const CLASSIC_CHUTES: [(u32, u32); 10] = [
    (17, 7),
    (47, 26),
    (49, 11),
    (56, 53),
    (62, 19),
    (64, 60),
    (87, 24),
    (93, 73),
    (95, 75),
    (98, 78),
];

/// Maps the entry square of each ladder and chute to its destination.
///
/// Serialized as a list of `(entry, destination)` pairs. Deserializing goes
/// through [`BoardLayout::new`], so a stored layout is validated like a
/// hand-built one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<(u32, u32)>", into = "Vec<(u32, u32)>")]
pub struct BoardLayout {
    specials: BTreeMap<u32, u32>,
}

impl BoardLayout {
    /// The standard 100-square board.
    pub fn classic() -> Self {
        let specials = CLASSIC_LADDERS
            .iter()
            .chain(CLASSIC_CHUTES.iter())
            .copied()
            .collect();
        Self { specials }
    }

    /// A board with no ladders or chutes.
    pub fn empty() -> Self {
        Self {
            specials: BTreeMap::new(),
        }
    }

    /// Builds a layout from `(entry, destination)` pairs.
    ///
    /// Entries must lie strictly between the first and final squares,
    /// destinations must lie on the board, no pair may point at itself, and
    /// each entry may appear once.
    #[instrument(skip(pairs))]
    pub fn new(pairs: impl IntoIterator<Item = (u32, u32)>) -> Result<Self, ConfigError> {
        let mut specials = BTreeMap::new();
        for (entry, destination) in pairs {
            if entry == FIRST_SQUARE || entry >= FINAL_SQUARE {
                return Err(ConfigError::new(format!(
                    "Square {} cannot start a ladder or chute",
                    entry
                )));
            }
            if !on_board(destination) {
                return Err(ConfigError::new(format!(
                    "Destination {} from square {} is off the board",
                    destination, entry
                )));
            }
            if entry == destination {
                return Err(ConfigError::new(format!(
                    "Square {} points at itself",
                    entry
                )));
            }
            if specials.insert(entry, destination).is_some() {
                return Err(ConfigError::new(format!(
                    "Square {} starts more than one ladder or chute",
                    entry
                )));
            }
        }
        Ok(Self { specials })
    }

    /// Returns where a piece landing on `square` ends up, if it moves.
    pub fn destination(&self, square: u32) -> Option<u32> {
        self.specials.get(&square).copied()
    }

    /// Checks whether `square` starts a ladder.
    pub fn is_ladder(&self, square: u32) -> bool {
        self.destination(square).is_some_and(|to| to > square)
    }

    /// Checks whether `square` starts a chute.
    pub fn is_chute(&self, square: u32) -> bool {
        self.destination(square).is_some_and(|to| to < square)
    }

    /// Iterates over `(entry, destination)` pairs in entry order.
    pub fn iter(&self) -> impl Iterator<Item = (u32, u32)> + '_ {
        self.specials.iter().map(|(from, to)| (*from, *to))
    }
}

impl TryFrom<Vec<(u32, u32)>> for BoardLayout {
    type Error = ConfigError;

    fn try_from(pairs: Vec<(u32, u32)>) -> Result<Self, Self::Error> {
        Self::new(pairs)
    }
}

impl From<BoardLayout> for Vec<(u32, u32)> {
    fn from(layout: BoardLayout) -> Self {
        layout.iter().collect()
    }
}

impl Default for BoardLayout {
    fn default() -> Self {
        Self::classic()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classic_passes_own_validation() {
        let rebuilt = BoardLayout::new(BoardLayout::classic().iter()).unwrap();
        assert_eq!(rebuilt, BoardLayout::classic());
    }

    #[test]
    fn test_classic_checkpoints() {
        let layout = BoardLayout::classic();
        assert_eq!(layout.destination(4), Some(14));
        assert_eq!(layout.destination(17), Some(7));
        assert!(layout.is_ladder(4));
        assert!(layout.is_chute(17));
        assert_eq!(layout.destination(5), None);
        assert!(!layout.is_ladder(5) && !layout.is_chute(5));
    }

    #[test]
    fn test_classic_shape() {
        let layout = BoardLayout::classic();
        assert_eq!(layout.iter().filter(|(from, _)| layout.is_ladder(*from)).count(), 9);
        assert_eq!(layout.iter().filter(|(from, _)| layout.is_chute(*from)).count(), 10);
    }

    #[test]
    fn test_rejects_entry_on_final_square() {
        assert!(BoardLayout::new([(100, 50)]).is_err());
    }

    #[test]
    fn test_rejects_entry_on_start() {
        assert!(BoardLayout::new([(0, 50)]).is_err());
    }

    #[test]
    fn test_rejects_off_board_destination() {
        let err = BoardLayout::new([(50, 101)]).unwrap_err();
        assert!(err.message.contains("off the board"));
    }

    #[test]
    fn test_rejects_self_loop() {
        assert!(BoardLayout::new([(50, 50)]).is_err());
    }

    #[derive(Debug, Deserialize)]
    struct StoredBoard {
        board: BoardLayout,
    }

    #[test]
    fn test_stored_layout_loads() {
        let stored: StoredBoard = toml::from_str("board = [[4, 14], [17, 7]]").unwrap();
        assert_eq!(stored.board.destination(4), Some(14));
        assert_eq!(stored.board.destination(17), Some(7));
    }

    #[test]
    fn test_stored_entry_on_final_square_rejected() {
        let err = toml::from_str::<StoredBoard>("board = [[100, 5]]").unwrap_err();
        assert!(err.to_string().contains("cannot start a ladder or chute"));
    }

    #[test]
    fn test_stored_self_loop_rejected() {
        assert!(toml::from_str::<StoredBoard>("board = [[50, 50]]").is_err());
    }

    #[test]
    fn test_stored_layout_round_trips() {
        #[derive(Serialize)]
        struct Out<'a> {
            board: &'a BoardLayout,
        }
        let classic = BoardLayout::classic();
        let text = toml::to_string(&Out { board: &classic }).unwrap();
        let stored: StoredBoard = toml::from_str(&text).unwrap();
        assert_eq!(stored.board, classic);
    }

    #[test]
    fn test_rejects_duplicate_entry() {
        let err = BoardLayout::new([(50, 60), (50, 40)]).unwrap_err();
        assert!(err.message.contains("more than one"));
    }
}
