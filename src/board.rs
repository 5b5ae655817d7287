//! Board representation for sliding-tile puzzles.
//!
//! A board is a flat row-major array of tiles with exactly one blank cell.
//! Boards are values: moving a tile produces a new board.

use std::fmt;
use std::str::FromStr;

use crate::error::InvalidInput;

/// A tile identifier. `BLANK` marks the empty cell.
pub type Tile = u8;

/// The blank marker.
pub const BLANK: Tile = 0;

/// Largest supported cell count (tiles must fit in a `u8`).
pub const MAX_CELLS: usize = u8::MAX as usize;

/// An immutable snapshot of tile positions.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Board {
    rows: usize,
    cols: usize,
    cells: Box<[Tile]>,
    blank: usize,
}

impl Board {
    /// Creates a board from row-major cells.
    ///
    /// Exactly one cell must be blank and every other tile must be distinct.
    pub fn new(rows: usize, cols: usize, cells: Vec<Tile>) -> Result<Self, InvalidInput> {
        let count = cell_count(rows, cols)?;
        if count < 2 {
            return Err(InvalidInput::TooSmall { cells: count });
        }
        if count > MAX_CELLS {
            return Err(InvalidInput::TooLarge { cells: count });
        }
        if cells.len() != count {
            return Err(InvalidInput::CellCount {
                expected: count,
                found: cells.len(),
            });
        }

        let blanks = cells.iter().filter(|&&tile| tile == BLANK).count();
        if blanks != 1 {
            return Err(InvalidInput::BlankCount { found: blanks });
        }

        let mut seen = [false; MAX_CELLS + 1];
        for &tile in cells.iter().filter(|&&tile| tile != BLANK) {
            if std::mem::replace(&mut seen[tile as usize], true) {
                return Err(InvalidInput::DuplicateTile { tile });
            }
        }
        let blank = cells
            .iter()
            .position(|&tile| tile == BLANK)
            .ok_or(InvalidInput::BlankCount { found: 0 })?;

        Ok(Self {
            rows,
            cols,
            cells: cells.into_boxed_slice(),
            blank,
        })
    }

    /// Creates a board from a grid of rows.
    pub fn from_rows<R: AsRef<[Tile]>>(rows: &[R]) -> Result<Self, InvalidInput> {
        let cols = rows.first().map_or(0, |row| row.as_ref().len());
        let mut cells = Vec::with_capacity(rows.len() * cols);

        for (index, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != cols {
                return Err(InvalidInput::RaggedRows {
                    row: index,
                    expected: cols,
                    found: row.len(),
                });
            }
            cells.extend_from_slice(row);
        }

        Self::new(rows.len(), cols, cells)
    }

    /// The solved layout: tiles `1..rows*cols` in order, blank in the last cell.
    pub fn canonical_goal(rows: usize, cols: usize) -> Result<Self, InvalidInput> {
        let count = cell_count(rows, cols)?;
        if count > MAX_CELLS {
            return Err(InvalidInput::TooLarge { cells: count });
        }
        let cells = (1..count)
            .map(|tile| tile as Tile)
            .chain(std::iter::once(BLANK))
            .collect();
        Self::new(rows, cols, cells)
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// `(rows, cols)`.
    #[inline]
    pub fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Row-major cells.
    #[inline]
    pub fn cells(&self) -> &[Tile] {
        &self.cells
    }

    /// Flat index of the blank cell.
    #[inline]
    pub fn blank_index(&self) -> usize {
        self.blank
    }

    /// `(row, col)` of the blank cell.
    #[inline]
    pub fn blank_position(&self) -> (usize, usize) {
        self.position_of_index(self.blank)
    }

    /// Tile at `(row, col)`, or `None` when out of bounds.
    pub fn get(&self, row: usize, col: usize) -> Option<Tile> {
        if row < self.rows && col < self.cols {
            Some(self.cells[row * self.cols + col])
        } else {
            None
        }
    }

    /// Converts a flat index to `(row, col)`.
    #[inline]
    pub fn position_of_index(&self, index: usize) -> (usize, usize) {
        (index / self.cols, index % self.cols)
    }

    /// Iterates the board one row at a time.
    pub fn iter_rows(&self) -> impl Iterator<Item = &[Tile]> {
        self.cells.chunks(self.cols)
    }

    /// Returns true if both boards hold the same multiset of tiles.
    pub fn same_tiles(&self, other: &Board) -> bool {
        if self.cells.len() != other.cells.len() {
            return false;
        }
        let mut counts = [0i32; MAX_CELLS + 1];
        for &tile in self.cells.iter() {
            counts[tile as usize] += 1;
        }
        for &tile in other.cells.iter() {
            counts[tile as usize] -= 1;
        }
        counts.iter().all(|&count| count == 0)
    }

    /// Returns a new board with the blank swapped into `target`.
    ///
    /// The caller guarantees `target` is adjacent to the blank.
    pub(crate) fn with_blank_at(&self, target: usize) -> Board {
        let mut cells = self.cells.clone();
        cells.swap(self.blank, target);
        Board {
            rows: self.rows,
            cols: self.cols,
            cells,
            blank: target,
        }
    }
}

/// `rows * cols`, reporting overflow as an oversized board.
fn cell_count(rows: usize, cols: usize) -> Result<usize, InvalidInput> {
    rows.checked_mul(cols)
        .ok_or(InvalidInput::TooLarge { cells: usize::MAX })
}

/// Parses a board such as `"1 2 3/4 0 6/7 5 8"`.
///
/// Rows are separated by `/` or newlines and cells by whitespace or commas.
/// `0`, `_` and `.` denote the blank.
impl FromStr for Board {
    type Err = InvalidInput;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut rows: Vec<Vec<Tile>> = Vec::new();

        for line in s.split(['/', '\n']) {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            let row = line
                .split(|c: char| c.is_whitespace() || c == ',')
                .filter(|token| !token.is_empty())
                .map(parse_tile)
                .collect::<Result<Vec<_>, _>>()?;
            rows.push(row);
        }

        Self::from_rows(&rows)
    }
}

fn parse_tile(token: &str) -> Result<Tile, InvalidInput> {
    match token {
        "_" | "." => Ok(BLANK),
        _ => token.parse().map_err(|_| InvalidInput::BadToken {
            token: token.to_string(),
        }),
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, row) in self.iter_rows().enumerate() {
            if index > 0 {
                f.write_str("/")?;
            }
            for (col, tile) in row.iter().enumerate() {
                if col > 0 {
                    f.write_str(" ")?;
                }
                write!(f, "{tile}")?;
            }
        }
        Ok(())
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Board({}x{}: {})", self.rows, self.cols, self)
    }
}
