//! Text rendering of the board during a search.
//!
//! Each square is drawn three characters wide. Columns are separated by `|`
//! and rows by a `---+---+…` rule:
//!
//! ```text
//!  S |   | o |   |   | T |   |
//! ---+---+---+---+---+---+---+---
//! ```

use crossterm::style::{Color, Stylize};
use knightstar_core::Point;
use knightstar_paths::ChessStar;

// -- Palette --

const START_FG: Color = Color::Rgb { r: 80, g: 200, b: 80 };
const FINISH_FG: Color = Color::Rgb { r: 255, g: 85, b: 85 };
const OPENED_FG: Color = Color::Rgb { r: 220, g: 200, b: 60 };
const CLOSED_FG: Color = Color::Rgb { r: 98, g: 100, b: 106 };

/// What a board square shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Square {
    Start,
    Finish,
    Opened,
    Closed,
    Empty,
}

impl Square {
    /// Classify `p`. Earlier categories win: a start square that has been
    /// expanded still shows as `Start`.
    pub fn of(search: &ChessStar, p: Point) -> Self {
        if p == search.start() {
            Self::Start
        } else if p == search.finish() {
            Self::Finish
        } else if search.is_opened(p) {
            Self::Opened
        } else if search.is_closed(p) {
            Self::Closed
        } else {
            Self::Empty
        }
    }

    /// The padded three-character glyph.
    pub fn glyph(self) -> &'static str {
        match self {
            Self::Start => " S ",
            Self::Finish => " T ",
            Self::Opened => " o ",
            Self::Closed => " x ",
            Self::Empty => "   ",
        }
    }

    fn styled(self) -> String {
        let g = self.glyph();
        match self {
            Self::Start => g.with(START_FG).bold().to_string(),
            Self::Finish => g.with(FINISH_FG).bold().to_string(),
            Self::Opened => g.with(OPENED_FG).to_string(),
            Self::Closed => g.with(CLOSED_FG).to_string(),
            Self::Empty => g.to_string(),
        }
    }
}

/// Render the board without escape codes.
pub fn render(search: &ChessStar) -> String {
    render_with(search, |sq| sq.glyph().to_string())
}

/// Render the board with terminal colors.
pub fn render_styled(search: &ChessStar) -> String {
    render_with(search, Square::styled)
}

fn render_with(search: &ChessStar, paint: impl Fn(Square) -> String) -> String {
    let board = search.board();
    let rule = vec!["---"; board.width().max(0) as usize].join("+");

    let mut lines = Vec::with_capacity(2 * board.height().max(0) as usize);
    for y in 0..board.height() {
        if y > 0 {
            lines.push(rule.clone());
        }
        let row: Vec<String> = board
            .line(y)
            .iter()
            .map(|p| paint(Square::of(search, p)))
            .collect();
        lines.push(row.join("|"));
    }
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use knightstar_core::Range;
    use knightstar_paths::Silent;

    #[test]
    fn fresh_search_shows_only_endpoints() {
        let search = ChessStar::new(Point::new(0, 4), Point::new(5, 4));
        assert_eq!(Square::of(&search, Point::new(0, 4)), Square::Start);
        assert_eq!(Square::of(&search, Point::new(5, 4)), Square::Finish);
        assert_eq!(Square::of(&search, Point::new(3, 3)), Square::Empty);

        let text = render(&search);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 15);
        assert_eq!(lines[8], " S |   |   |   |   | T |   |   ");
        assert_eq!(lines[1], "---+---+---+---+---+---+---+---");
        assert!(!text.ends_with('\n'));
    }

    #[test]
    fn start_outranks_closed_and_finish_outranks_opened() {
        let mut search = ChessStar::new(Point::new(0, 4), Point::new(2, 3));
        search.step(1, &mut Silent);
        // (0,4) is closed and (2,3) is open, but both keep their labels.
        assert!(search.is_closed(Point::new(0, 4)));
        assert!(search.is_opened(Point::new(2, 3)));
        assert_eq!(Square::of(&search, Point::new(0, 4)), Square::Start);
        assert_eq!(Square::of(&search, Point::new(2, 3)), Square::Finish);
        assert_eq!(Square::of(&search, Point::new(1, 2)), Square::Opened);
    }

    /// Expand a compact map (`S T o x .`) into the rendered layout.
    fn expected(rows: &[&str]) -> String {
        let rule = vec!["---"; rows[0].len()].join("+");
        let lines: Vec<String> = rows
            .iter()
            .map(|row| {
                row.chars()
                    .map(|c| if c == '.' { "   ".to_string() } else { format!(" {c} ") })
                    .collect::<Vec<_>>()
                    .join("|")
            })
            .collect();
        lines.join(&format!("\n{rule}\n"))
    }

    #[test]
    fn default_search_board_after_finish() {
        let mut search = ChessStar::new(Point::new(0, 4), Point::new(5, 4));
        assert!(search.solve(5).is_found());
        let want = expected(&[
            "o.o.....",
            "..ooo...",
            ".x...o..",
            "..ox....",
            "Soo..T..",
            "..o.o...",
            ".o......",
            "........",
        ]);
        assert_eq!(render(&search), want);
    }

    #[test]
    fn styled_board_keeps_layout() {
        let search = ChessStar::new(Point::new(0, 4), Point::new(5, 4));
        let styled = render_styled(&search);
        assert_eq!(styled.lines().count(), 15);
        assert!(styled.contains(" S "));
        assert!(styled.contains(" T "));
    }

    #[test]
    fn small_board_dimensions() {
        let search =
            ChessStar::with_board(Range::new(0, 0, 3, 2), Point::new(0, 0), Point::new(2, 1));
        assert_eq!(render(&search), " S |   |   \n---+---+---\n   |   | T ");
    }
}
