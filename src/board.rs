//! Fixed-size grid of cells with gravity drops and line enumeration.
//!
//! The grid is a flat row-major `Vec` where row 0 is the top of the board.
//! Cloning a [`Board`] copies the flat array and nothing else.

use std::fmt;

use crate::constants::{DEFAULT_COLUMNS, DEFAULT_ROWS, EMPTY_SYMBOL, GREEN_SYMBOL, RED_SYMBOL};
use crate::error::{BoardError, ShapeError};

/// The two piece colors. `Red` always moves first.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Color {
    Red,
    Green,
}

impl Color {
    /// The color that moves on an even piece count.
    pub const FIRST: Color = Color::Red;

    pub fn other(self) -> Color {
        match self {
            Color::Red => Color::Green,
            Color::Green => Color::Red,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Color::Red => RED_SYMBOL,
            Color::Green => GREEN_SYMBOL,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Color::Red => "Red",
            Color::Green => "Green",
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Contents of a single cell: `None` is empty.
pub type Cell = Option<Color>;

fn cell_symbol(cell: Cell) -> char {
    cell.map_or(EMPTY_SYMBOL, Color::symbol)
}

fn parse_cell(symbol: char) -> Option<Cell> {
    match symbol {
        EMPTY_SYMBOL => Some(None),
        RED_SYMBOL => Some(Some(Color::Red)),
        GREEN_SYMBOL => Some(Some(Color::Green)),
        _ => None,
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Board {
    height: usize,
    width: usize,
    cells: Vec<Cell>,
}

impl Board {
    /// Create an empty board with `height` rows and `width` columns.
    pub fn new(height: usize, width: usize) -> Self {
        Self {
            height,
            width,
            cells: vec![None; height * width],
        }
    }

    /// Build a board from row strings, top row first.
    ///
    /// Cells use `-` for empty, `r` and `g` for pieces. An empty slice gives
    /// the default empty board. Rows are taken as-is, so hand-built boards
    /// need not respect gravity.
    pub fn from_rows<S: AsRef<str>>(rows: &[S]) -> Result<Self, ShapeError> {
        if rows.is_empty() {
            return Ok(Self::default());
        }

        let width = rows[0].as_ref().chars().count();
        let mut cells = Vec::with_capacity(rows.len() * width);
        for (row, line) in rows.iter().enumerate() {
            let line = line.as_ref();
            let found = line.chars().count();
            if found != width {
                return Err(ShapeError::Ragged {
                    row,
                    expected: width,
                    found,
                });
            }
            for (column, symbol) in line.chars().enumerate() {
                let cell = parse_cell(symbol).ok_or(ShapeError::InvalidSymbol {
                    row,
                    column,
                    symbol,
                })?;
                cells.push(cell);
            }
        }

        Ok(Self {
            height: rows.len(),
            width,
            cells,
        })
    }

    /// Number of rows.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Number of columns.
    pub fn width(&self) -> usize {
        self.width
    }

    /// `(rows, columns)`.
    pub fn shape(&self) -> (usize, usize) {
        (self.height, self.width)
    }

    fn idx(&self, row: usize, column: usize) -> usize {
        row * self.width + column
    }

    /// Cell at `(row, column)`, or `None` when out of bounds.
    pub fn get(&self, row: usize, column: usize) -> Option<Cell> {
        if row >= self.height || column >= self.width {
            return None;
        }
        Some(self.cells[self.idx(row, column)])
    }

    fn check_column(&self, column: usize) -> Result<(), BoardError> {
        if column >= self.width {
            return Err(BoardError::ColumnOutOfRange {
                column,
                columns: self.width,
            });
        }
        Ok(())
    }

    /// Cells of `column`, top to bottom.
    pub fn column(&self, column: usize) -> Result<Vec<Cell>, BoardError> {
        self.check_column(column)?;
        Ok(self.column_cells(column))
    }

    /// True iff `column` has no empty cell.
    pub fn is_column_full(&self, column: usize) -> Result<bool, BoardError> {
        self.check_column(column)?;
        Ok(self.column_filled(column))
    }

    fn column_filled(&self, column: usize) -> bool {
        (0..self.height).all(|row| self.cells[self.idx(row, column)].is_some())
    }

    /// Columns that can still take a piece, ascending.
    pub fn legal_columns(&self) -> Vec<usize> {
        (0..self.width)
            .filter(|&column| !self.column_filled(column))
            .collect()
    }

    /// Drop a piece into `column`. It lands in the lowest empty row, which is
    /// returned.
    pub fn drop_piece(&mut self, column: usize, color: Color) -> Result<usize, BoardError> {
        self.check_column(column)?;
        let row = (0..self.height)
            .rev()
            .find(|&row| self.cells[self.idx(row, column)].is_none())
            .ok_or(BoardError::ColumnFull(column))?;
        let i = self.idx(row, column);
        self.cells[i] = Some(color);
        Ok(row)
    }

    /// True iff no empty cell remains.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    /// Total number of cells.
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Number of occupied cells.
    pub fn piece_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    fn row_cells(&self, row: usize) -> Vec<Cell> {
        let start = self.idx(row, 0);
        self.cells[start..start + self.width].to_vec()
    }

    fn column_cells(&self, column: usize) -> Vec<Cell> {
        (0..self.height)
            .map(|row| self.cells[self.idx(row, column)])
            .collect()
    }

    /// One diagonal. `offset` is the column of the cell at step 0. Ascending
    /// diagonals start at the bottom row and climb to the right, descending
    /// ones start at the top row and fall to the right.
    fn diagonal_cells(&self, offset: isize, ascending: bool) -> Vec<Cell> {
        let height = self.height as isize;
        let width = self.width as isize;
        ((-offset).max(0)..)
            .take_while(|&k| k < height && k + offset < width)
            .map(|k| {
                let row = if ascending { height - 1 - k } else { k };
                self.cells[self.idx(row as usize, (k + offset) as usize)]
            })
            .collect()
    }

    fn diagonal_iter(&self) -> impl Iterator<Item = Vec<Cell>> + '_ {
        let height = self.height as isize;
        let width = self.width as isize;
        let (ascending, descending) = if self.cells.is_empty() {
            (0..0, 0..0)
        } else {
            ((1 - height)..width, (1 - height)..width)
        };
        ascending
            .map(move |offset| self.diagonal_cells(offset, true))
            .chain(
                descending
                    .rev()
                    .map(move |offset| self.diagonal_cells(offset, false)),
            )
    }

    /// All rows, top to bottom.
    pub fn rows(&self) -> Vec<Vec<Cell>> {
        (0..self.height).map(|row| self.row_cells(row)).collect()
    }

    /// All columns, left to right, each read top to bottom.
    pub fn columns(&self) -> Vec<Vec<Cell>> {
        (0..self.width).map(|column| self.column_cells(column)).collect()
    }

    /// All maximal diagonals in both directions, corners included.
    ///
    /// Ascending diagonals come first, from the bottom-left corner to the
    /// top-right one, each read upward. Descending diagonals follow, from
    /// the top-right corner to the bottom-left one, each read downward.
    pub fn diagonals(&self) -> Vec<Vec<Cell>> {
        self.diagonal_iter().collect()
    }

    /// Rows, then columns, then diagonals.
    pub fn lines(&self) -> impl Iterator<Item = Vec<Cell>> + '_ {
        (0..self.height)
            .map(move |row| self.row_cells(row))
            .chain((0..self.width).map(move |column| self.column_cells(column)))
            .chain(self.diagonal_iter())
    }

    /// Rows as concatenated symbol strings, accepted back by [`Board::from_rows`].
    pub fn to_row_strings(&self) -> Vec<String> {
        (0..self.height)
            .map(|row| self.row_cells(row).into_iter().map(cell_symbol).collect())
            .collect()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(DEFAULT_ROWS, DEFAULT_COLUMNS)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.height {
            if row > 0 {
                writeln!(f)?;
            }
            for column in 0..self.width {
                if column > 0 {
                    f.write_str(" ")?;
                }
                write!(f, "{}", cell_symbol(self.cells[self.idx(row, column)]))?;
            }
        }
        Ok(())
    }
}
