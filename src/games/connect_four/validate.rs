//! Parsing of free-form turn and setup input.

use super::Board;
use crate::error::GameError;
use std::num::NonZeroU32;
use tracing::instrument;

/// Parses a column choice against the board's width.
///
/// # Errors
///
/// [`GameError::NotANumber`] if the text is not an integer,
/// [`GameError::ColumnOutOfRange`] if it is not in `1..=columns`.
#[instrument(skip(board))]
pub fn parse_column(text: &str, board: &Board) -> Result<usize, GameError> {
    if !is_integer(text) {
        return Err(GameError::NotANumber);
    }
    // Negative or too long for usize: an integer, just not a column.
    text.parse::<usize>()
        .ok()
        .filter(|column| (1..=board.columns()).contains(column))
        .ok_or(GameError::ColumnOutOfRange {
            columns: board.columns(),
        })
}

/// Optionally signed run of ASCII digits.
fn is_integer(text: &str) -> bool {
    let digits = text.strip_prefix(['+', '-']).unwrap_or(text);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

/// Parses a number of games.
///
/// # Errors
///
/// [`GameError::InvalidGameCount`] unless the text is a positive integer.
#[instrument]
pub fn parse_game_count(text: &str) -> Result<NonZeroU32, GameError> {
    text.parse::<NonZeroU32>()
        .map_err(|_| GameError::InvalidGameCount)
}

/// How many games a session plays.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum GameMode {
    /// One game, no scoring.
    Single,
    /// A fixed number of scored games on the same board.
    Multiple {
        /// Number of games.
        count: NonZeroU32,
        /// The count as the player typed it, shown in the session banner.
        entered: String,
    },
}

impl GameMode {
    /// Selects the mode from the game-count answer.
    ///
    /// Empty text and `"1"` mean a single game; anything else must be a
    /// positive integer.
    ///
    /// # Errors
    ///
    /// [`GameError::InvalidGameCount`] for any other text.
    #[instrument]
    pub fn parse(text: &str) -> Result<Self, GameError> {
        if text.is_empty() || text == "1" {
            return Ok(GameMode::Single);
        }
        let count = parse_game_count(text)?;
        Ok(GameMode::Multiple {
            count,
            entered: text.to_string(),
        })
    }

    /// Number of games this mode plays.
    pub fn games(&self) -> u32 {
        match self {
            GameMode::Single => 1,
            GameMode::Multiple { count, .. } => count.get(),
        }
    }
}
