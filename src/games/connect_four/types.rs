//! Core domain types for Connect Four.

use derive_getters::Getters;
use derive_more::{Display, From};
use derive_new::new;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// The glyph a player's tokens are drawn with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, From, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Sign(char);

impl Sign {
    /// Sign of the first player.
    pub const FIRST: Sign = Sign('o');
    /// Sign of the second player.
    pub const SECOND: Sign = Sign('*');

    /// Returns the glyph.
    pub fn glyph(self) -> char {
        self.0
    }
}

/// A cell of the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    /// No token.
    #[default]
    Empty,
    /// Holds a token of the given sign.
    Occupied(Sign),
}

impl Cell {
    /// Character used when rendering the board.
    pub fn glyph(self) -> char {
        match self {
            Cell::Empty => ' ',
            Cell::Occupied(sign) => sign.glyph(),
        }
    }

    /// Returns true if the cell holds `sign`.
    pub fn holds(self, sign: Sign) -> bool {
        self == Cell::Occupied(sign)
    }
}

/// A participant in a session.
///
/// The score only ever grows; it survives board resets between games.
#[derive(Debug, Clone, PartialEq, Eq, Getters, new)]
pub struct Player {
    /// Display name, as entered.
    name: String,
    /// Token glyph.
    sign: Sign,
    /// Running score across repeated games.
    #[new(value = "0")]
    score: u32,
}

impl Player {
    /// Adds `points` to the running score.
    #[instrument(skip(self), fields(player = %self.name))]
    pub fn award(&mut self, points: u32) {
        self.score += points;
        debug!(score = self.score, "Score updated");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_starts_at_zero() {
        let player = Player::new("Anna".to_string(), Sign::FIRST);
        assert_eq!(*player.score(), 0);
        assert_eq!(player.name(), "Anna");
        assert_eq!(*player.sign(), Sign::FIRST);
    }

    #[test]
    fn test_award_accumulates() {
        let mut player = Player::new("Bob".to_string(), Sign::SECOND);
        player.award(2);
        player.award(1);
        assert_eq!(*player.score(), 3);
    }

    #[test]
    fn test_cell_glyphs() {
        assert_eq!(Cell::Empty.glyph(), ' ');
        assert_eq!(Cell::Occupied(Sign::FIRST).glyph(), 'o');
        assert_eq!(Cell::Occupied(Sign::SECOND).glyph(), '*');
        assert!(Cell::Occupied(Sign::FIRST).holds(Sign::FIRST));
        assert!(!Cell::Empty.holds(Sign::FIRST));
    }
}
