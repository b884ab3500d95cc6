//! Strictly Connect Four library - a two-player console Connect Four engine
//!
//! # Architecture
//!
//! - **Games**: board, gravity drops, four-in-a-row detection, input parsing
//! - **Session**: single and repeated games with turn order and scoring
//! - **Console**: line-based I/O the session is driven through
//! - **Config**: player signs loaded from TOML
//!
//! # Example
//!
//! ```
//! use std::io::Cursor;
//! use strictly_connect_four::{GameConfig, StdConsole, run};
//!
//! let input = "Anna\nBob\n\n\n1\n2\n1\n2\n1\n2\n1\n";
//! let mut console = StdConsole::new(Cursor::new(input), Vec::new());
//! let session = run(&mut console, &GameConfig::default()).unwrap();
//! assert_eq!(session.outcomes()[0].winner(), Some(0));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod config;
mod console;
mod error;
mod games;
mod session;

// Crate-level exports - Configuration
pub use config::{ConfigError, GameConfig};

// Crate-level exports - Console I/O
pub use console::{Console, StdConsole};

// Crate-level exports - Errors
pub use error::{Axis, GameError, SessionError};

// Crate-level exports - Session management
pub use session::{END_COMMAND, GameSession, Turn, prompt_board, prompt_mode, run};

// Crate-level exports - Game types (Connect Four)
pub use games::connect_four::{
    Board, Cell, DEFAULT_COLUMNS, DEFAULT_ROWS, DRAW_POINTS, GameMode, MAX_DIMENSION,
    MIN_DIMENSION, Outcome, Player, Sign, WIN_LENGTH, WIN_POINTS, has_four_in_a_row,
    parse_column, parse_game_count,
};
