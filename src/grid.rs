use crate::dimension::Dimension;
use crate::fill::resolve;
use crate::fill::Fill;
use std::fmt::Display;

/// One row of cells. Empty cells are `None`.
pub type Row<T> = Vec<Option<T>>;

/// Configuration for a new grid.
#[derive(Clone, Debug)]
pub struct Options<T> {
    /// Inclusive lower bound on (rows, cols)
    pub min: Dimension,
    /// Inclusive upper bound on (rows, cols)
    pub max: Dimension,
    /// Default content for newly created cells
    pub fill: Option<T>,
}

impl<T> Default for Options<T> {
    /// At least one row, any number of columns, unlimited growth, empty fill.
    fn default() -> Self {
        Options {
            min: Dimension::new(1, 0),
            max: Dimension::UNBOUNDED,
            fill: None,
        }
    }
}

/// A resizable two-dimensional table of optional cell values.
///
/// The grid tracks its current size in `dim` and keeps it between the
/// inclusive `min` and `max` bounds on both axes. Rows and columns can be
/// inserted or removed one at a time, the whole table can be rebuilt at a
/// new size, and rectangular blocks can be pasted in with bounded automatic
/// growth. Mutations that would violate a bound leave the grid untouched
/// and report failure through their return value.
#[derive(Clone, Debug)]
pub struct Grid<T> {
    /// Inclusive lower bound on (rows, cols)
    min: Dimension,
    /// Inclusive upper bound on (rows, cols)
    max: Dimension,
    /// Current tracked size
    dim: Dimension,
    /// Backing storage; `dim.rows` always equals `rows.len()`
    rows: Vec<Row<T>>,
    /// Default content for newly created cells
    fill: Option<T>,
}

/// Longest row length, 0 for an empty table.
fn max_cols<T>(rows: &[Row<T>]) -> usize {
    rows.iter().map(Vec::len).max().unwrap_or(0)
}

/// Extends a row with empty cells so that `index` is addressable.
///
/// Rows built from irregular input may be shorter than the tracked column
/// count; writes pad them on demand instead of eagerly normalizing.
fn pad_to<T>(row: &mut Row<T>, index: usize) {
    if row.len() <= index {
        row.resize_with(index + 1, || None);
    }
}

impl<T> Grid<T> {
    /// Creates an empty grid with default options: one empty row, `dim`
    /// of 1x0.
    pub fn new() -> Self {
        Self::with_options(Vec::new(), Options::default())
    }

    /// Creates a grid from initial rows with default options.
    pub fn from_rows(rows: Vec<Row<T>>) -> Self {
        Self::with_options(rows, Options::default())
    }

    /// Creates a grid from initial rows and explicit options.
    ///
    /// An empty row set is coerced to a single empty row. Rows of differing
    /// lengths are accepted as-is; the column count is the longest row
    /// length, and later writes pad short rows on demand.
    pub fn with_options(mut rows: Vec<Row<T>>, options: Options<T>) -> Self {
        if rows.is_empty() {
            rows.push(Vec::new());
        }
        let dim = Dimension::new(rows.len(), max_cols(&rows));
        Grid {
            min: options.min,
            max: options.max,
            fill: options.fill,
            dim,
            rows,
        }
    }

    /// Current tracked size.
    pub fn dim(&self) -> Dimension {
        self.dim
    }

    /// Inclusive lower bound on (rows, cols).
    pub fn min(&self) -> Dimension {
        self.min
    }

    /// Inclusive upper bound on (rows, cols).
    pub fn max(&self) -> Dimension {
        self.max
    }

    /// Read access to the backing rows.
    pub fn rows(&self) -> &[Row<T>] {
        &self.rows
    }

    /// One row of cells, or `None` when `index` is out of range.
    pub fn row(&self, index: usize) -> Option<&[Option<T>]> {
        self.rows.get(index).map(Vec::as_slice)
    }

    /// The value at (row, col): `None` for out-of-range positions and for
    /// empty cells alike.
    pub fn cell(&self, row: usize, col: usize) -> Option<&T> {
        self.rows.get(row)?.get(col)?.as_ref()
    }

    /// Writes one cell within the tracked size. Returns `false` without
    /// mutating when the position lies outside `dim` on either axis.
    pub fn set(&mut self, row: usize, col: usize, value: Option<T>) -> bool {
        if row >= self.dim.rows || col >= self.dim.cols {
            return false;
        }
        let cells = &mut self.rows[row];
        pad_to(cells, col);
        cells[col] = value;
        true
    }

    /// Returns true when every cell of every row is empty.
    pub fn is_empty(&self) -> bool {
        self.rows.iter().all(|row| row.iter().all(Option::is_none))
    }

    /// Removes a row: at `position` if given (clamped to the last row),
    /// else the last one. Returns `false` without mutating when the row
    /// count is already at its minimum.
    pub fn remove_row(&mut self, position: Option<usize>) -> bool {
        if self.dim.rows <= self.min.rows {
            return false;
        }

        self.dim.rows -= 1;
        match position {
            Some(row) => {
                let last = self.rows.len() - 1;
                self.rows.remove(row.min(last));
            }
            None => {
                self.rows.pop();
            }
        }

        true
    }

    /// Removes one cell from every row: at `position` if given, else each
    /// row's last cell. Rows too short to hold `position` are left alone.
    /// Returns `false` without mutating when the column count is already at
    /// its minimum.
    pub fn remove_column(&mut self, position: Option<usize>) -> bool {
        if self.dim.cols <= self.min.cols {
            return false;
        }

        self.dim.cols -= 1;
        for row in &mut self.rows {
            match position {
                Some(col) if col < row.len() => {
                    row.remove(col);
                }
                Some(_) => (),
                None => {
                    row.pop();
                }
            }
        }

        true
    }
}

impl<T: Clone> Grid<T> {
    /// Rebuilds the whole table as a dense grid of size `dim`, every cell a
    /// clone of `fill`.
    ///
    /// Returns `None` and leaves the grid untouched when `dim` exceeds the
    /// maximum or falls below the minimum on either axis. On success the
    /// tracked size becomes `dim` and the new table is returned. Every row
    /// owns independent cell storage.
    pub fn create(&mut self, dim: Dimension, fill: Option<T>) -> Option<&[Row<T>]> {
        if dim.exceeds(&self.max) || self.min.exceeds(&dim) {
            return None;
        }

        self.dim = dim;
        self.rows = (0..dim.rows).map(|_| vec![fill.clone(); dim.cols]).collect();
        Some(&self.rows)
    }

    /// Inserts a new row of the current column width.
    ///
    /// The row goes to `position` if given (clamped to the current row
    /// count, so past-the-end positions append), else to the end. Cell
    /// content comes from `fill`: an absent fill clones the stored default
    /// into every cell, a scalar is cloned verbatim into every cell, and a
    /// per-cell sequence is read by cell index with absent positions
    /// falling back to the stored default. Returns `false` without mutating
    /// when the row count is already at its maximum.
    pub fn add_row(&mut self, position: Option<usize>, fill: Option<Fill<T>>) -> bool {
        if self.dim.rows >= self.max.rows {
            return false;
        }

        self.dim.rows += 1;
        let row = (0..self.dim.cols)
            .map(|index| resolve(&fill, index, &self.fill))
            .collect();
        let end = self.rows.len();
        self.rows.insert(position.unwrap_or(end).min(end), row);

        true
    }

    /// Inserts one new cell into every row.
    ///
    /// Cells go to `position` in each row if given (clamped per row, so
    /// ragged rows insert at their own end), else to each row's end. The
    /// value for row `i` resolves like `add_row`'s cells, indexed by row.
    /// Returns `false` without mutating when the column count is already at
    /// its maximum.
    pub fn add_column(&mut self, position: Option<usize>, fill: Option<Fill<T>>) -> bool {
        if self.dim.cols >= self.max.cols {
            return false;
        }

        self.dim.cols += 1;
        for (index, row) in self.rows.iter_mut().enumerate() {
            let value = resolve(&fill, index, &self.fill);
            match position {
                Some(col) => row.insert(col.min(row.len()), value),
                None => row.push(value),
            }
        }

        true
    }

    /// Pastes a rectangular block with its top-left cell at `position`
    /// (default the grid's origin).
    ///
    /// Target rows beyond the current size are added with the stored
    /// default fill as long as the maximum row count allows; once it does
    /// not, the remaining source rows are dropped. Columns grow the same
    /// way, per column index across the whole call, and a row's remaining
    /// cells are dropped once the column maximum is reached. Cells within
    /// bounds are overwritten unconditionally, including with an empty
    /// value where the source row is short.
    pub fn paste(&mut self, block: &[Row<T>], position: Option<Dimension>) {
        let position = position.unwrap_or_default();
        let rows = block.len();
        let cols = max_cols(block);

        for y in 0..rows {
            let row = position.rows + y;
            while self.dim.rows <= row && self.dim.rows < self.max.rows {
                self.add_row(None, None);
            }
            if row >= self.dim.rows {
                break;
            }
            for x in 0..cols {
                let col = position.cols + x;
                while self.dim.cols <= col && self.dim.cols < self.max.cols {
                    self.add_column(None, None);
                }
                if col >= self.dim.cols {
                    break;
                }
                let cells = &mut self.rows[row];
                pad_to(cells, col);
                cells[col] = block[y].get(x).cloned().flatten();
            }
        }
    }

    /// Clones the rectangular region of `size` anchored at `position`,
    /// clipped to the current tracked size. Short source rows read as empty
    /// cells. The read-side complement of `paste`.
    pub fn copy(&self, position: Dimension, size: Dimension) -> Vec<Row<T>> {
        let row_upper = self.dim.rows.min(position.rows.saturating_add(size.rows));
        let col_upper = self.dim.cols.min(position.cols.saturating_add(size.cols));

        (position.rows..row_upper)
            .map(|row| {
                (position.cols..col_upper)
                    .map(|col| self.rows[row].get(col).cloned().flatten())
                    .collect()
            })
            .collect()
    }
}

impl<T> Default for Grid<T> {
    /// Same as `Grid::new`.
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Display> Display for Grid<T> {
    /// Rows on lines, cells tab-separated, empty cells rendered as nothing.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (index, row) in self.rows.iter().enumerate() {
            if index > 0 {
                writeln!(f)?;
            }
            for (col, cell) in row.iter().enumerate() {
                if col > 0 {
                    write!(f, "\t")?;
                }
                if let Some(value) = cell {
                    write!(f, "{}", value)?;
                }
            }
        }
        Ok(())
    }
}
