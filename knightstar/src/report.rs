//! Diagnostic output written while the search runs.

use std::io::{self, Write};

use knightstar_paths::{Cell, ChessStar, StepObserver};

use crate::board;

/// `Opened: ` followed by every open cell, `;`-separated, front first.
pub fn opened_line(search: &ChessStar) -> String {
    format!("Opened: {}", join_cells(search, search.opened()))
}

/// `Closed: ` followed by every closed cell, `;`-separated, oldest first.
pub fn closed_line(search: &ChessStar) -> String {
    format!("Closed: {}", join_cells(search, search.closed()))
}

fn join_cells<'a>(search: &'a ChessStar, cells: impl Iterator<Item = &'a Cell>) -> String {
    cells
        .map(|c| search.describe(c).to_string())
        .collect::<Vec<_>>()
        .join(";")
}

/// Write a found path, one cell per line, start first.
pub fn write_path<W: Write>(out: &mut W, search: &ChessStar, path: &[Cell]) -> io::Result<()> {
    let moves = path.len().saturating_sub(1);
    writeln!(out, "Path ({moves} moves):")?;
    for cell in path {
        writeln!(out, "{}", search.describe(cell))?;
    }
    Ok(())
}

/// A [`StepObserver`] that prints the open and closed sets and the board
/// after every step.
///
/// Write errors cannot escape `on_step`; the first one is kept, later steps
/// are skipped, and [`Reporter::finish`] returns it.
pub struct Reporter<W: Write> {
    out: W,
    color: bool,
    error: Option<io::Error>,
}

impl<W: Write> Reporter<W> {
    pub fn new(out: W, color: bool) -> Self {
        Self {
            out,
            color,
            error: None,
        }
    }

    /// Flush and hand back the writer, or the first write error.
    pub fn finish(mut self) -> io::Result<W> {
        if let Some(err) = self.error.take() {
            return Err(err);
        }
        self.out.flush()?;
        Ok(self.out)
    }

    fn write_step(&mut self, search: &ChessStar) -> io::Result<()> {
        writeln!(self.out, "{}", opened_line(search))?;
        writeln!(self.out, "{}", closed_line(search))?;
        let grid = if self.color {
            board::render_styled(search)
        } else {
            board::render(search)
        };
        writeln!(self.out, "{grid}")
    }
}

impl<W: Write> StepObserver for Reporter<W> {
    fn on_step(&mut self, search: &ChessStar) {
        if self.error.is_some() {
            return;
        }
        if let Err(err) = self.write_step(search) {
            log::warn!("step {}: output failed: {err}", search.steps());
            self.error = Some(err);
        }
    }
}
