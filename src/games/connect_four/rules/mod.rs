//! Game rules for Connect Four.
//!
//! Pure functions evaluating a board. Rules are kept apart from board
//! storage so the session can ask about any sign at any time.

pub mod win;

pub use win::{WIN_LENGTH, has_four_in_a_row};
