use std::fmt::Display;
use thiserror::Error;

/// Errors related to dimension pair conversion.
#[derive(Error, Debug)]
pub enum DimensionError {
    #[error("Expected a [rows, cols] pair, got {0} values")]
    PairLength(usize),
}

/// A `(rows, cols)` pair describing a table's size or one of its bounds.
///
/// Throughout the API dimensions travel as ordered pairs with a fixed
/// meaning: index 0 is the row count, index 1 is the column count. The
/// conversions below preserve that convention for array and tuple input.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Dimension {
    /// Number of rows (index 0 of the pair form)
    pub rows: usize,
    /// Number of columns (index 1 of the pair form)
    pub cols: usize,
}

impl Dimension {
    /// Upper bound leaving both axes unlimited.
    pub const UNBOUNDED: Dimension = Dimension {
        rows: usize::MAX,
        cols: usize::MAX,
    };

    pub const fn new(rows: usize, cols: usize) -> Self {
        Dimension { rows, cols }
    }

    /// Checks whether this dimension is larger than `other` on any axis.
    /// Axes are compared independently, rows to rows and cols to cols.
    pub(crate) fn exceeds(&self, other: &Dimension) -> bool {
        self.rows > other.rows || self.cols > other.cols
    }
}

impl From<[usize; 2]> for Dimension {
    fn from(pair: [usize; 2]) -> Self {
        Dimension::new(pair[0], pair[1])
    }
}

impl From<(usize, usize)> for Dimension {
    fn from((rows, cols): (usize, usize)) -> Self {
        Dimension::new(rows, cols)
    }
}

impl TryFrom<&[usize]> for Dimension {
    type Error = DimensionError;

    /// Converts a pair-convention sequence. Sequences whose length is not
    /// exactly 2 are rejected rather than padded or truncated.
    fn try_from(pair: &[usize]) -> Result<Self, Self::Error> {
        match pair {
            [rows, cols] => Ok(Dimension::new(*rows, *cols)),
            _ => Err(DimensionError::PairLength(pair.len())),
        }
    }
}

impl Display for Dimension {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.rows, self.cols)
    }
}
