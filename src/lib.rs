//! # Rusty Grid
//!
//! A resizable two-dimensional table for applications that need a mutable,
//! spreadsheet-like grid in memory, such as UI grid editors or board
//! representations.
//!
//! ## Features
//!
//! - **Bounded resizing**: inclusive minimum and maximum dimensions per
//!   axis, enforced by every mutating operation
//! - **Row and column editing**: insert or remove single rows and columns
//!   at any position
//! - **Configurable fill**: a stored default for newly created cells, plus
//!   per-call scalar or per-cell fill content
//! - **Whole-table creation**: rebuild the grid at any size within bounds
//! - **Rectangular paste**: copy a block into the grid, growing the grid
//!   as far as its bounds allow and clipping the rest
//! - **Untyped cells**: generic cell content, with explicit empty cells
//!
//! Failed mutations never raise errors; they leave the grid untouched and
//! report failure through their return value.
//!
//! ## Example
//!
//! ```
//! use rusty_grid::{Dimension, Grid};
//!
//! let mut grid = Grid::new();
//! grid.create(Dimension::new(4, 4), Some(1));
//! grid.paste(&[vec![Some(2), Some(2)], vec![Some(2), Some(2)]], Some(Dimension::new(1, 1)));
//! assert_eq!(grid.cell(1, 1), Some(&2));
//! assert_eq!(grid.cell(0, 0), Some(&1));
//! ```

mod dimension;
mod fill;
mod grid;

pub use crate::dimension::{Dimension, DimensionError};
pub use crate::fill::Fill;
pub use crate::grid::{Grid, Options, Row};

pub use either::Either;
