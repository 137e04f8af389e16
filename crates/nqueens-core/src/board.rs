//! The N-Queens board.

use std::fmt;

use rand::Rng;

use crate::collision::collisions;
use crate::error::{NQueensError, Result};

/// A full assignment of one row per column.
///
/// Index is the column, value is the row occupied by that column's queen.
/// One queen per column holds by construction; rows may repeat, since
/// collisions are what the searches minimize.
///
/// # Example
///
/// ```
/// use nqueens_core::Board;
///
/// let mut board = Board::new(vec![0, 0, 0, 0]).unwrap();
/// assert_eq!(board.collisions(), 6);
///
/// board.place(1, 2);
/// assert_eq!(board.row(1), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    rows: Vec<usize>,
}

impl Board {
    /// Creates a board from explicit rows, validating every row against the
    /// board size.
    ///
    /// # Errors
    ///
    /// Returns [`NQueensError::EmptyBoard`] for an empty row list and
    /// [`NQueensError::RowOutOfRange`] for any row `>= rows.len()`.
    pub fn new(rows: Vec<usize>) -> Result<Self> {
        let size = rows.len();
        if size == 0 {
            return Err(NQueensError::EmptyBoard);
        }
        if let Some((column, &row)) = rows.iter().enumerate().find(|(_, &r)| r >= size) {
            return Err(NQueensError::RowOutOfRange { column, row, size });
        }
        Ok(Self { rows })
    }

    /// Creates a board of `size` columns, each queen on a uniformly random row.
    ///
    /// # Example
    ///
    /// ```
    /// use nqueens_core::Board;
    /// use rand::rngs::StdRng;
    /// use rand::SeedableRng;
    ///
    /// let mut rng = StdRng::seed_from_u64(7);
    /// let board = Board::random(17, &mut rng).unwrap();
    /// assert_eq!(board.size(), 17);
    /// assert!(board.rows().iter().all(|&r| r < 17));
    /// ```
    pub fn random<R: Rng + ?Sized>(size: usize, rng: &mut R) -> Result<Self> {
        if size == 0 {
            return Err(NQueensError::EmptyBoard);
        }
        let rows = (0..size).map(|_| rng.random_range(0..size)).collect();
        Ok(Self { rows })
    }

    /// Returns the board side length, which is also the queen count.
    pub fn size(&self) -> usize {
        self.rows.len()
    }

    /// Returns the row of the queen in `column`.
    ///
    /// # Panics
    ///
    /// Panics if `column` is out of range.
    pub fn row(&self, column: usize) -> usize {
        self.rows[column]
    }

    /// Returns all rows, indexed by column.
    pub fn rows(&self) -> &[usize] {
        &self.rows
    }

    /// Moves the queen in `column` to `row`.
    ///
    /// # Panics
    ///
    /// Panics if either index is outside the board.
    pub fn place(&mut self, column: usize, row: usize) {
        let size = self.size();
        assert!(column < size, "column {column} out of range for size {size}");
        assert!(row < size, "row {row} out of range for size {size}");
        self.rows[column] = row;
    }

    /// Returns the number of attacking queen pairs.
    pub fn collisions(&self) -> usize {
        collisions(self)
    }

    /// Returns true if no two queens attack each other.
    pub fn is_solution(&self) -> bool {
        self.collisions() == 0
    }
}

/// Renders the board top row first, `1` for a queen and `0` for an empty
/// square, followed by the raw row list.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let size = self.size();
        for row in (0..size).rev() {
            for (column, &queen_row) in self.rows.iter().enumerate() {
                if column > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{}", if queen_row == row { 1 } else { 0 })?;
            }
            writeln!(f)?;
        }
        writeln!(f)?;

        write!(f, "rows: ")?;
        for (column, row) in self.rows.iter().enumerate() {
            if column > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{row}")?;
        }
        Ok(())
    }
}
