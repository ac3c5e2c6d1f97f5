use std::collections::VecDeque;
use std::fmt;

use knightstar_core::{Point, Range};
use log::{debug, trace};

use crate::cell::{Cell, CellId};
use crate::distance::knight_estimate;
use crate::moves::KnightMoves;
use crate::observer::{Silent, StepObserver};

/// Step budget used when the caller has no better figure.
pub const DEFAULT_MAX_DEPTH: u32 = 5;

/// How a call to [`ChessStar::step`] ended.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SearchOutcome {
    /// The finish was reached. Cells are ordered start → finish.
    ///
    /// Each cell's `parent` is a [`CellId`] into the arena of the
    /// [`ChessStar`] that produced the path; resolve it with
    /// [`ChessStar::cell`] or [`ChessStar::describe`] on that engine only.
    Found(Vec<Cell>),
    /// The open set ran dry; the finish is unreachable from the start.
    Exhausted,
    /// The step budget was spent before the finish was reached. The search
    /// state is kept, so calling `step` again resumes where it stopped.
    DepthLimitReached,
}

impl SearchOutcome {
    /// The path, if one was found.
    pub fn path(&self) -> Option<&[Cell]> {
        match self {
            Self::Found(path) => Some(path),
            _ => None,
        }
    }

    /// Whether the finish was reached.
    #[inline]
    pub fn is_found(&self) -> bool {
        matches!(self, Self::Found(_))
    }
}

// ---------------------------------------------------------------------------
// ChessStar
// ---------------------------------------------------------------------------

/// Best-first knight search between two fixed squares.
///
/// Cells live in an arena for the lifetime of the engine; `opened` and
/// `closed` hold ids into it. A square is in at most one of the two sets,
/// and appears in a set at most once.
pub struct ChessStar {
    board: Range,
    start: Point,
    finish: Point,
    cells: Vec<Cell>,
    opened: VecDeque<CellId>,
    closed: Vec<CellId>,
    steps: u32,
    // terminal outcome, replayed by later calls to `step`
    done: Option<SearchOutcome>,
    // scratch buffer for neighbor queries
    moves: KnightMoves,
}

impl ChessStar {
    /// Create a search on the standard 8×8 board.
    ///
    /// `start` and `finish` are assumed to be on the board.
    pub fn new(start: Point, finish: Point) -> Self {
        Self::with_board(Range::chessboard(), start, finish)
    }

    /// Create a search on an arbitrary rectangular board.
    pub fn with_board(board: Range, start: Point, finish: Point) -> Self {
        let mut root = Cell::new(start, None);
        root.h_cost = knight_estimate(start, finish);
        root.f_cost = root.g_cost + root.h_cost;
        Self {
            board,
            start,
            finish,
            cells: vec![root],
            opened: VecDeque::from([CellId(0)]),
            closed: Vec::new(),
            steps: 0,
            done: None,
            moves: KnightMoves::new(),
        }
    }

    #[inline]
    pub fn start(&self) -> Point {
        self.start
    }

    #[inline]
    pub fn finish(&self) -> Point {
        self.finish
    }

    #[inline]
    pub fn board(&self) -> Range {
        self.board
    }

    /// Number of expansion steps taken so far.
    #[inline]
    pub fn steps(&self) -> u32 {
        self.steps
    }

    /// Look up a cell by id.
    #[inline]
    pub fn cell(&self, id: CellId) -> &Cell {
        &self.cells[id.0]
    }

    /// Cells discovered but not yet expanded, front to back.
    pub fn opened(&self) -> impl Iterator<Item = &Cell> + '_ {
        self.opened.iter().map(|&id| &self.cells[id.0])
    }

    /// Cells already expanded, in expansion order.
    pub fn closed(&self) -> impl Iterator<Item = &Cell> + '_ {
        self.closed.iter().map(|&id| &self.cells[id.0])
    }

    pub fn is_opened(&self, p: Point) -> bool {
        self.find_opened(p).is_some()
    }

    pub fn is_closed(&self, p: Point) -> bool {
        self.closed.iter().any(|&id| self.cells[id.0] == p)
    }

    /// Whether `p` is a square of the board.
    #[inline]
    pub fn is_valid(&self, p: Point) -> bool {
        self.board.contains(p)
    }

    /// Cost from the start to a child of `parent`: one per knight move.
    #[inline]
    pub fn g_cost(&self, parent: &Cell) -> i32 {
        parent.g_cost + 1
    }

    /// Estimated remaining moves from `p` to the finish.
    #[inline]
    pub fn h_cost(&self, p: Point) -> i32 {
        knight_estimate(p, self.finish)
    }

    /// Format `cell` as `([x,y], [px,py], g, h, f)`, with `NULL` for the root.
    pub fn describe<'a>(&'a self, cell: &'a Cell) -> CellDisplay<'a> {
        CellDisplay {
            cell,
            parent: cell.parent.map(|id| &self.cells[id.0]),
        }
    }

    // -----------------------------------------------------------------------
    // Search
    // -----------------------------------------------------------------------

    /// Run the search without an observer.
    pub fn solve(&mut self, max_depth: u32) -> SearchOutcome {
        self.step(max_depth, &mut Silent)
    }

    /// Run up to `max_depth` expansion steps.
    ///
    /// Every step expands the open cell with the lowest `f_cost` (the
    /// frontmost one on ties), then shows the new state to `observer`, then
    /// checks whether the new best open cell is the finish.
    ///
    /// Once the search has found the finish or run out of open cells, later
    /// calls return the same outcome without expanding anything.
    pub fn step<O: StepObserver + ?Sized>(
        &mut self,
        max_depth: u32,
        observer: &mut O,
    ) -> SearchOutcome {
        if let Some(done) = &self.done {
            return done.clone();
        }
        for _ in 0..max_depth {
            let Some(best) = self.best_open() else {
                debug!("open set empty after {} steps", self.steps);
                return self.conclude(SearchOutcome::Exhausted);
            };

            self.expand(best);
            self.steps += 1;
            let next = self.best_open();
            debug!(
                "step {}: expanded {}, {} open, {} closed",
                self.steps,
                self.cells[best.0].pos,
                self.opened.len(),
                self.closed.len()
            );

            observer.on_step(self);

            // Only possible on the first step, when start == finish.
            if self.cells[best.0] == self.finish {
                let path = self.path_to(best);
                return self.conclude(SearchOutcome::Found(path));
            }

            match next {
                Some(next) if self.cells[next.0] == self.finish => {
                    let path = self.path_to(next);
                    debug!("finish reached in {} moves", path.len() - 1);
                    return self.conclude(SearchOutcome::Found(path));
                }
                Some(_) => {}
                None => {
                    debug!("open set empty after {} steps", self.steps);
                    return self.conclude(SearchOutcome::Exhausted);
                }
            }
        }
        SearchOutcome::DepthLimitReached
    }

    /// Open every on-board, not-yet-closed knight destination of `id`, then
    /// move `id` from the open set to the end of the closed set.
    pub(crate) fn expand(&mut self, id: CellId) {
        let pos = self.cells[id.0].pos;
        let g = self.g_cost(&self.cells[id.0]);

        let mut moves = std::mem::take(&mut self.moves);
        let board = self.board;

        for &np in moves.from(pos, |p| board.contains(p)) {
            if self.is_closed(np) {
                trace!("{np}: closed, skipped");
                continue;
            }

            let mut next = Cell::new(np, Some(id));
            next.g_cost = g;
            next.h_cost = self.h_cost(np);
            next.f_cost = next.g_cost + next.h_cost;

            match self.find_opened(np) {
                Some(at) => {
                    let existing = self.opened[at];
                    if next.f_cost < self.cells[existing.0].f_cost {
                        trace!("{np}: reopened with f={}", next.f_cost);
                        self.opened.remove(at);
                        let nid = self.alloc(next);
                        self.opened.push_front(nid);
                    } else {
                        trace!("{np}: already open with f<={}", next.f_cost);
                    }
                }
                None => {
                    trace!("{np}: opened with f={}", next.f_cost);
                    let nid = self.alloc(next);
                    self.opened.push_front(nid);
                }
            }
        }

        self.moves = moves;

        if let Some(at) = self.opened.iter().position(|&o| o == id) {
            self.opened.remove(at);
        }
        self.closed.push(id);
    }

    fn conclude(&mut self, outcome: SearchOutcome) -> SearchOutcome {
        self.done = Some(outcome.clone());
        outcome
    }

    /// First open cell with the minimum `f_cost`.
    fn best_open(&self) -> Option<CellId> {
        self.opened
            .iter()
            .copied()
            .min_by_key(|&id| self.cells[id.0].f_cost)
    }

    fn find_opened(&self, p: Point) -> Option<usize> {
        self.opened.iter().position(|&id| self.cells[id.0] == p)
    }

    fn alloc(&mut self, cell: Cell) -> CellId {
        self.cells.push(cell);
        CellId(self.cells.len() - 1)
    }

    /// Walk parent links from `id` back to the root; returns start → `id`.
    fn path_to(&self, id: CellId) -> Vec<Cell> {
        let mut path = Vec::new();
        let mut cur = Some(id);
        while let Some(ci) = cur {
            let cell = &self.cells[ci.0];
            path.push(cell.clone());
            cur = cell.parent;
        }
        path.reverse();
        path
    }
}

/// [`fmt::Display`] adapter returned by [`ChessStar::describe`].
pub struct CellDisplay<'a> {
    cell: &'a Cell,
    parent: Option<&'a Cell>,
}

impl fmt::Display for CellDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parent = match self.parent {
            Some(p) => p.position_label(),
            None => "NULL".to_string(),
        };
        write!(
            f,
            "({}, {}, {}, {}, {})",
            self.cell.position_label(),
            parent,
            self.cell.g_cost,
            self.cell.h_cost,
            self.cell.f_cost
        )
    }
}
