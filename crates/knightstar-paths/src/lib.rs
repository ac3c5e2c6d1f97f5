//! Knight shortest-path search on a chessboard.
//!
//! [`ChessStar`] runs an A*-style best-first search restricted to knight
//! moves:
//!
//! - cost to reach a square (`g`) grows by one per move;
//! - the estimate to the finish (`h`) is [`knight_estimate`];
//! - the open cell with the lowest `g + h` is expanded next, the frontmost
//!   one winning ties.
//!
//! The search advances in bounded batches of steps through
//! [`ChessStar::step`], which reports each step to a [`StepObserver`] and
//! ends with a [`SearchOutcome`].

mod cell;
mod distance;
mod moves;
mod observer;
mod search;

pub use cell::{Cell, CellId};
pub use distance::knight_estimate;
pub use moves::{KNIGHT_MOVES, KnightMoves, is_knight_move};
pub use observer::{Silent, StepObserver};
pub use search::{CellDisplay, ChessStar, DEFAULT_MAX_DEPTH, SearchOutcome};
