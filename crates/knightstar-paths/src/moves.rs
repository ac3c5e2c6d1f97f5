use knightstar_core::Point;

/// The eight knight offsets in canonical order.
///
/// Expansion walks this table back to front. Together with front insertion
/// into the open set, that order decides which of several equal-cost
/// squares is picked first, so it must not change.
pub const KNIGHT_MOVES: [Point; 8] = [
    Point::new(-1, -2),
    Point::new(1, -2),
    Point::new(-2, -1),
    Point::new(2, -1),
    Point::new(-2, 1),
    Point::new(2, 1),
    Point::new(-1, 2),
    Point::new(1, 2),
];

/// Cached knight-move neighbor computation.
pub struct KnightMoves {
    buf: Vec<Point>,
}

impl Default for KnightMoves {
    fn default() -> Self {
        Self::new()
    }
}

impl KnightMoves {
    /// Create a new `KnightMoves` helper.
    pub fn new() -> Self {
        Self {
            buf: Vec::with_capacity(KNIGHT_MOVES.len()),
        }
    }

    /// Return the knight destinations from `p` in expansion order (the
    /// reverse of [`KNIGHT_MOVES`]), keeping only those for which `keep`
    /// returns `true`.
    pub fn from(&mut self, p: Point, keep: impl Fn(Point) -> bool) -> &[Point] {
        self.buf.clear();
        for &d in KNIGHT_MOVES.iter().rev() {
            let n = p + d;
            if keep(n) {
                self.buf.push(n);
            }
        }
        &self.buf
    }
}

/// Whether `a` and `b` are one knight move apart.
#[inline]
pub fn is_knight_move(a: Point, b: Point) -> bool {
    let d = b - a;
    KNIGHT_MOVES.contains(&d)
}

#[cfg(test)]
mod tests {
    use super::*;
    use knightstar_core::Range;

    #[test]
    fn offsets_are_the_eight_l_shapes() {
        for d in KNIGHT_MOVES {
            let (ax, ay) = (d.x.abs(), d.y.abs());
            assert!((ax, ay) == (1, 2) || (ax, ay) == (2, 1), "{d}");
        }
        for (i, a) in KNIGHT_MOVES.iter().enumerate() {
            assert!(!KNIGHT_MOVES[i + 1..].contains(a));
        }
    }

    #[test]
    fn expansion_order_is_reversed() {
        let mut km = KnightMoves::new();
        let got = km.from(Point::new(3, 3), |_| true).to_vec();
        let want: Vec<Point> = KNIGHT_MOVES.iter().rev().map(|&d| Point::new(3, 3) + d).collect();
        assert_eq!(got, want);
        assert_eq!(got[0], Point::new(4, 5));
        assert_eq!(got[7], Point::new(2, 1));
    }

    #[test]
    fn corner_keeps_two_moves() {
        let board = Range::chessboard();
        let mut km = KnightMoves::new();
        let got = km.from(Point::new(0, 0), |p| board.contains(p));
        assert_eq!(got, &[Point::new(1, 2), Point::new(2, 1)]);
    }

    #[test]
    fn knight_move_detection() {
        assert!(is_knight_move(Point::new(0, 4), Point::new(1, 2)));
        assert!(is_knight_move(Point::new(3, 3), Point::new(5, 4)));
        assert!(!is_knight_move(Point::new(0, 0), Point::new(1, 1)));
        assert!(!is_knight_move(Point::new(0, 0), Point::new(0, 0)));
    }
}
