mod board;
mod phases;
mod rules;
mod types;
mod validate;

pub use board::{Board, DEFAULT_COLUMNS, DEFAULT_ROWS, MAX_DIMENSION, MIN_DIMENSION};
pub use phases::{DRAW_POINTS, Outcome, WIN_POINTS};
pub use rules::{WIN_LENGTH, has_four_in_a_row};
pub use types::{Cell, Player, Sign};
pub use validate::{GameMode, parse_column, parse_game_count};
