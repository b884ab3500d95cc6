//! Error types for gameplay input and console sessions.

use derive_more::{Display, Error, From};
use strum::Display as StrumDisplay;

/// Board axis named in dimension errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, StrumDisplay)]
#[strum(serialize_all = "lowercase")]
pub enum Axis {
    /// Number of rows.
    Rows,
    /// Number of columns.
    Columns,
}

/// Recoverable gameplay error.
///
/// Every variant is caught next to the input that caused it, printed,
/// and followed by the same question again. The display text is the
/// message shown to the player.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum GameError {
    /// Dimension text is not of the form `<rows>x<columns>`.
    #[display("Invalid input")]
    MalformedDimensions,

    /// A parsed dimension lies outside the allowed range.
    #[display("Board {axis} should be from 5 to 9")]
    DimensionOutOfRange {
        /// The offending axis.
        axis: Axis,
    },

    /// Game count is not a positive integer.
    #[display("Invalid input")]
    InvalidGameCount,

    /// Column text is not an integer.
    #[display("Incorrect column number")]
    NotANumber,

    /// Column integer lies outside `1..=columns`.
    #[display("The column number is out of range (1 - {columns})")]
    ColumnOutOfRange {
        /// Number of columns on the board.
        columns: usize,
    },

    /// The chosen column has no empty cell left.
    #[display("Column {column} is full")]
    ColumnFull {
        /// 1-indexed column.
        column: usize,
    },
}

/// Unrecoverable failure of a console session.
///
/// These are never turned into a reprompt; they end the process.
#[derive(Debug, Display, Error, From)]
pub enum SessionError {
    /// The input stream ended while a line was expected.
    #[display("Input closed while waiting for a line")]
    InputClosed,

    /// Reading from or writing to the console failed.
    #[display("Console I/O error: {source}")]
    #[from]
    Io {
        /// Underlying I/O error.
        source: std::io::Error,
    },
}
