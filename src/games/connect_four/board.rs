//! Rectangular Connect Four grid with gravity drops.

use super::types::{Cell, Player};
use crate::error::{Axis, GameError};
use tracing::{debug, instrument};

/// Smallest allowed number of rows or columns.
pub const MIN_DIMENSION: usize = 5;
/// Largest allowed number of rows or columns.
pub const MAX_DIMENSION: usize = 9;
/// Rows used when the dimension text is empty.
pub const DEFAULT_ROWS: usize = 6;
/// Columns used when the dimension text is empty.
pub const DEFAULT_COLUMNS: usize = 7;

/// Connect Four board.
///
/// Dimensions are fixed at construction. Row 1 is the top row and
/// column 1 the leftmost column; tokens fall towards the last row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    rows: usize,
    columns: usize,
    /// Cells in row-major order, top row first.
    cells: Vec<Cell>,
}

impl Board {
    /// Creates an empty board with the given dimensions.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::DimensionOutOfRange`] if either dimension lies
    /// outside `5..=9`. Rows are checked before columns.
    #[instrument]
    pub fn new(rows: usize, columns: usize) -> Result<Self, GameError> {
        check_dimension(rows, Axis::Rows)?;
        check_dimension(columns, Axis::Columns)?;
        debug!("Allocating empty board");
        Ok(Self {
            rows,
            columns,
            cells: vec![Cell::Empty; rows * columns],
        })
    }

    /// Parses a `<rows>x<columns>` dimension text and builds the board.
    ///
    /// Whitespace is ignored and the separator is case-insensitive. An
    /// empty text yields the default 6 x 7 board.
    ///
    /// # Errors
    ///
    /// [`GameError::MalformedDimensions`] when the text has another shape,
    /// [`GameError::DimensionOutOfRange`] when a dimension is not in `5..=9`.
    #[instrument]
    pub fn parse(spec: &str) -> Result<Self, GameError> {
        let normalized: String = spec
            .chars()
            .filter(|c| !c.is_whitespace())
            .flat_map(char::to_lowercase)
            .collect();

        if normalized.is_empty() {
            return Self::new(DEFAULT_ROWS, DEFAULT_COLUMNS);
        }

        let (rows, columns) = normalized
            .split_once('x')
            .filter(|(rows, columns)| is_number(rows) && is_number(columns))
            .ok_or(GameError::MalformedDimensions)?;

        // Digit runs too long for usize are simply out of range.
        let rows = rows.parse().unwrap_or(usize::MAX);
        let columns = columns.parse().unwrap_or(usize::MAX);
        Self::new(rows, columns)
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Returns the cell at a 1-indexed position, or `None` off the grid.
    pub fn cell(&self, row: usize, column: usize) -> Option<Cell> {
        if row == 0 || column == 0 || row > self.rows || column > self.columns {
            return None;
        }
        Some(self.at(row - 1, column - 1))
    }

    /// Cell at a 0-indexed position. Callers keep indices in bounds.
    pub(crate) fn at(&self, row: usize, column: usize) -> Cell {
        self.cells[row * self.columns + column]
    }

    /// Drops `player`'s token into a 1-indexed column.
    ///
    /// The token lands in the lowest empty cell of the column. Returns the
    /// 1-indexed row it landed in.
    ///
    /// # Errors
    ///
    /// [`GameError::ColumnOutOfRange`] if the column does not exist,
    /// [`GameError::ColumnFull`] if it has no empty cell.
    #[instrument(skip(self, player), fields(sign = %player.sign()))]
    pub fn drop_token(&mut self, column: usize, player: &Player) -> Result<usize, GameError> {
        let col = column
            .checked_sub(1)
            .filter(|col| *col < self.columns)
            .ok_or(GameError::ColumnOutOfRange {
                columns: self.columns,
            })?;

        let row = (0..self.rows)
            .rev()
            .find(|row| self.at(*row, col) == Cell::Empty)
            .ok_or(GameError::ColumnFull { column })?;

        self.cells[row * self.columns + col] = Cell::Occupied(*player.sign());
        debug!(row = row + 1, "Token placed");
        Ok(row + 1)
    }

    /// Returns true if no empty cell remains.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| *cell != Cell::Empty)
    }

    /// Empties every cell, keeping the dimensions.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.cells = vec![Cell::Empty; self.rows * self.columns];
    }

    /// Renders the board for the console.
    ///
    /// ```text
    ///  1 2 3 4 5
    /// ║ ║ ║ ║ ║ ║
    /// ║o║*║ ║ ║ ║
    /// ╚═╩═╩═╩═╩═╝
    /// ```
    ///
    /// The footer is not followed by a newline.
    pub fn render(&self) -> String {
        let header: Vec<String> = (1..=self.columns).map(|c| c.to_string()).collect();
        let mut out = format!(" {}\n", header.join(" "));

        for row in self.cells.chunks(self.columns) {
            out.push('║');
            for cell in row {
                out.push(cell.glyph());
                out.push('║');
            }
            out.push('\n');
        }

        out.push('╚');
        out.push_str(&"═╩".repeat(self.columns - 1));
        out.push_str("═╝");
        out
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} X {} board", self.rows, self.columns)
    }
}

fn check_dimension(value: usize, axis: Axis) -> Result<(), GameError> {
    if (MIN_DIMENSION..=MAX_DIMENSION).contains(&value) {
        Ok(())
    } else {
        Err(GameError::DimensionOutOfRange { axis })
    }
}

fn is_number(text: &str) -> bool {
    !text.is_empty() && text.bytes().all(|b| b.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::connect_four::Sign;

    fn first() -> Player {
        Player::new("first".to_string(), Sign::FIRST)
    }

    fn second() -> Player {
        Player::new("second".to_string(), Sign::SECOND)
    }

    #[test]
    fn test_empty_text_gives_default_board() {
        let board = Board::parse("").unwrap();
        assert_eq!(board.rows(), 6);
        assert_eq!(board.columns(), 7);
        assert_eq!(board.to_string(), "6 X 7 board");
    }

    #[test]
    fn test_every_valid_dimension() {
        for rows in MIN_DIMENSION..=MAX_DIMENSION {
            for columns in MIN_DIMENSION..=MAX_DIMENSION {
                let board = Board::parse(&format!("{rows}x{columns}")).unwrap();
                assert_eq!(board.rows(), rows);
                assert_eq!(board.columns(), columns);
                for row in 1..=rows {
                    for column in 1..=columns {
                        assert_eq!(board.cell(row, column), Some(Cell::Empty));
                    }
                }
            }
        }
    }

    #[test]
    fn test_whitespace_and_case_ignored() {
        let board = Board::parse("  5 X\t9 ").unwrap();
        assert_eq!((board.rows(), board.columns()), (5, 9));
    }

    #[test]
    fn test_malformed_dimensions() {
        for text in ["6-7", "abc", "6x", "x7", "6x7x8", "-6x7", "6.0x7"] {
            assert_eq!(
                Board::parse(text),
                Err(GameError::MalformedDimensions),
                "input {text:?}"
            );
        }
    }

    #[test]
    fn test_dimension_out_of_range() {
        let rows = Err(GameError::DimensionOutOfRange { axis: Axis::Rows });
        let columns = Err(GameError::DimensionOutOfRange {
            axis: Axis::Columns,
        });
        assert_eq!(Board::parse("4x7"), rows);
        assert_eq!(Board::parse("10x7"), rows);
        assert_eq!(Board::parse("6x4"), columns);
        assert_eq!(Board::parse("6x10"), columns);
        // Rows are reported first when both are wrong.
        assert_eq!(Board::parse("3x3"), rows);
        assert_eq!(Board::parse("99999999999999999999999x7"), rows);
        assert_eq!(Board::parse("3x99999999999999999999999"), rows);
    }

    #[test]
    fn test_gravity_fills_from_bottom() {
        let mut board = Board::parse("").unwrap();
        assert_eq!(board.drop_token(3, &first()), Ok(6));
        assert_eq!(board.drop_token(3, &second()), Ok(5));
        assert_eq!(board.cell(6, 3), Some(Cell::Occupied(Sign::FIRST)));
        assert_eq!(board.cell(5, 3), Some(Cell::Occupied(Sign::SECOND)));
        assert_eq!(board.cell(4, 3), Some(Cell::Empty));
    }

    #[test]
    fn test_full_column_rejected() {
        let mut board = Board::parse("5x5").unwrap();
        for _ in 0..5 {
            board.drop_token(2, &first()).unwrap();
        }
        let before = board.clone();
        assert_eq!(
            board.drop_token(2, &second()),
            Err(GameError::ColumnFull { column: 2 })
        );
        assert_eq!(board, before);
    }

    #[test]
    fn test_drop_outside_board_rejected() {
        let mut board = Board::parse("5x5").unwrap();
        let err = Err(GameError::ColumnOutOfRange { columns: 5 });
        assert_eq!(board.drop_token(0, &first()), err);
        assert_eq!(board.drop_token(6, &first()), err);
    }

    #[test]
    fn test_is_full_and_reset() {
        let mut board = Board::parse("5x5").unwrap();
        assert!(!board.is_full());
        for column in 1..=5 {
            for _ in 0..5 {
                board.drop_token(column, &first()).unwrap();
            }
        }
        assert!(board.is_full());

        board.reset();
        assert!(!board.is_full());
        assert_eq!((board.rows(), board.columns()), (5, 5));
        assert_eq!(board.cell(5, 1), Some(Cell::Empty));
    }

    #[test]
    fn test_render_empty() {
        let board = Board::parse("5x5").unwrap();
        let expected = " 1 2 3 4 5\n\
                        ║ ║ ║ ║ ║ ║\n\
                        ║ ║ ║ ║ ║ ║\n\
                        ║ ║ ║ ║ ║ ║\n\
                        ║ ║ ║ ║ ║ ║\n\
                        ║ ║ ║ ║ ║ ║\n\
                        ╚═╩═╩═╩═╩═╝";
        assert_eq!(board.render(), expected);
    }

    #[test]
    fn test_render_tokens() {
        let mut board = Board::parse("5x6").unwrap();
        board.drop_token(1, &first()).unwrap();
        board.drop_token(2, &second()).unwrap();
        board.drop_token(1, &second()).unwrap();
        let expected = " 1 2 3 4 5 6\n\
                        ║ ║ ║ ║ ║ ║ ║\n\
                        ║ ║ ║ ║ ║ ║ ║\n\
                        ║ ║ ║ ║ ║ ║ ║\n\
                        ║*║ ║ ║ ║ ║ ║\n\
                        ║o║*║ ║ ║ ║ ║\n\
                        ╚═╩═╩═╩═╩═╩═╝";
        assert_eq!(board.render(), expected);
        assert_eq!(board.render(), board.render());
    }

    #[test]
    fn test_cell_off_grid() {
        let board = Board::parse("").unwrap();
        assert_eq!(board.cell(0, 1), None);
        assert_eq!(board.cell(1, 0), None);
        assert_eq!(board.cell(7, 1), None);
        assert_eq!(board.cell(1, 8), None);
    }
}
