//! Game outcomes and the points they are worth.

/// Points for winning a scored game.
pub const WIN_POINTS: u32 = 2;
/// Points each player receives for a drawn scored game.
pub const DRAW_POINTS: u32 = 1;

/// How a single game finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// The player at this seat (0 or 1) completed four in a row.
    Winner(usize),
    /// The board filled up without a winner.
    Draw,
    /// A player typed `end` before the game was decided.
    Abandoned,
}

impl Outcome {
    /// Returns the winning seat if there is one.
    pub fn winner(&self) -> Option<usize> {
        match self {
            Outcome::Winner(seat) => Some(*seat),
            Outcome::Draw | Outcome::Abandoned => None,
        }
    }

    /// Points awarded to each seat for this outcome.
    pub fn points(&self) -> [u32; 2] {
        match self {
            Outcome::Winner(0) => [WIN_POINTS, 0],
            Outcome::Winner(_) => [0, WIN_POINTS],
            Outcome::Draw => [DRAW_POINTS, DRAW_POINTS],
            Outcome::Abandoned => [0, 0],
        }
    }
}
