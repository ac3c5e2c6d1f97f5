//! **knightstar-core** — geometry shared by the knightstar crates.
//!
//! Provides [`Point`] (a board square) and [`Range`] (the half-open rectangle
//! of squares that make up a board), plus text parsing for points.

pub mod geom;

pub use geom::{BOARD_SIZE, ParsePointError, Point, Range, RangeIter};
