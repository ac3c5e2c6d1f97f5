//! Geometry primitives: [`Point`] and [`Range`].
//!
//! A [`Point`] names a board square; a [`Range`] describes the half-open
//! rectangle of squares that make up a board.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::{Add, Sub};
use std::str::FromStr;

/// Number of files and ranks on a standard chessboard.
pub const BOARD_SIZE: i32 = 8;

// ---------------------------------------------------------------------------
// Point
// ---------------------------------------------------------------------------

/// A 2D integer point. X grows right (files), Y grows down (ranks as printed).
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    /// Create a new point.
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Return a point shifted by (dx, dy).
    #[inline]
    pub const fn shift(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Whether the point is inside the half-open range.
    #[inline]
    pub fn in_range(self, r: &Range) -> bool {
        r.contains(self)
    }
}

impl Hash for Point {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.x.hash(state);
        self.y.hash(state);
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl Add for Point {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

/// Error returned when a [`Point`] cannot be parsed from text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsePointError {
    /// The text did not contain exactly two comma-separated parts.
    Arity(String),
    /// One of the coordinates is not an integer.
    Coordinate(String),
}

impl fmt::Display for ParsePointError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Arity(s) => write!(f, "expected \u{201c}x,y\u{201d}, got \u{201c}{s}\u{201d}"),
            Self::Coordinate(s) => write!(f, "invalid coordinate \u{201c}{s}\u{201d}"),
        }
    }
}

impl std::error::Error for ParsePointError {}

impl FromStr for Point {
    type Err = ParsePointError;

    /// Parses `"x,y"`. Surrounding whitespace and one pair of parentheses
    /// or brackets are accepted, so `"(0, 4)"` and `"[0,4]"` also parse.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let inner = trimmed
            .strip_prefix('(')
            .and_then(|t| t.strip_suffix(')'))
            .or_else(|| trimmed.strip_prefix('[').and_then(|t| t.strip_suffix(']')))
            .unwrap_or(trimmed);

        let mut parts = inner.split(',');
        let (Some(xs), Some(ys), None) = (parts.next(), parts.next(), parts.next()) else {
            return Err(ParsePointError::Arity(s.to_string()));
        };
        let coord = |t: &str| {
            t.trim()
                .parse::<i32>()
                .map_err(|_| ParsePointError::Coordinate(t.trim().to_string()))
        };
        Ok(Point::new(coord(xs)?, coord(ys)?))
    }
}

// ---------------------------------------------------------------------------
// Range
// ---------------------------------------------------------------------------

/// A half-open rectangle \[min, max). `min` is inclusive, `max` is exclusive.
///
/// All empty ranges are considered equal.
#[derive(Copy, Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Range {
    pub min: Point,
    pub max: Point,
}

impl PartialEq for Range {
    fn eq(&self, other: &Self) -> bool {
        (self.min == other.min && self.max == other.max) || (self.is_empty() && other.is_empty())
    }
}

impl Eq for Range {}

impl Range {
    /// Create a new range from two corners and auto-canonicalize so that
    /// `min` ≤ `max` on each axis.
    #[inline]
    pub fn new(x0: i32, y0: i32, x1: i32, y1: i32) -> Self {
        Self {
            min: Point::new(x0.min(x1), y0.min(y1)),
            max: Point::new(x0.max(x1), y0.max(y1)),
        }
    }

    /// The standard 8×8 board, `[0, 8) × [0, 8)`.
    #[inline]
    pub fn chessboard() -> Self {
        Self::new(0, 0, BOARD_SIZE, BOARD_SIZE)
    }

    /// Width of the range.
    #[inline]
    pub fn width(self) -> i32 {
        self.max.x - self.min.x
    }

    /// Height of the range.
    #[inline]
    pub fn height(self) -> i32 {
        self.max.y - self.min.y
    }

    /// Reduces the range to **relative** line `y` (0 = first line of the range).
    ///
    /// Returns an empty range if `y` is out of bounds.
    #[inline]
    pub fn line(self, y: i32) -> Self {
        if self.min.shift(0, y).in_range(&self) {
            Self {
                min: Point::new(self.min.x, self.min.y + y),
                max: Point::new(self.max.x, self.min.y + y + 1),
            }
        } else {
            Self::default()
        }
    }

    /// Whether the range has zero or negative area.
    #[inline]
    pub fn is_empty(self) -> bool {
        self.min.x >= self.max.x || self.min.y >= self.max.y
    }

    /// Whether `p` is inside the half-open range.
    #[inline]
    pub fn contains(self, p: Point) -> bool {
        p.x >= self.min.x && p.x < self.max.x && p.y >= self.min.y && p.y < self.max.y
    }

    /// Row-major iterator over every point in the range.
    #[inline]
    pub fn iter(self) -> RangeIter {
        RangeIter {
            range: self,
            cur: self.min,
        }
    }
}

impl IntoIterator for Range {
    type Item = Point;
    type IntoIter = RangeIter;
    #[inline]
    fn into_iter(self) -> RangeIter {
        self.iter()
    }
}

// ---------------------------------------------------------------------------
// RangeIter
// ---------------------------------------------------------------------------

/// Row-major iterator over the points in a [`Range`].
#[derive(Clone, Debug)]
pub struct RangeIter {
    range: Range,
    cur: Point,
}

impl Iterator for RangeIter {
    type Item = Point;

    #[inline]
    fn next(&mut self) -> Option<Point> {
        if self.cur.y >= self.range.max.y || self.range.is_empty() {
            return None;
        }
        let p = self.cur;
        self.cur.x += 1;
        if self.cur.x >= self.range.max.x {
            self.cur.x = self.range.min.x;
            self.cur.y += 1;
        }
        Some(p)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.range.is_empty() || self.cur.y >= self.range.max.y {
            return (0, Some(0));
        }
        let w = self.range.width() as usize;
        let remaining_in_row = (self.range.max.x - self.cur.x) as usize;
        let remaining_rows = (self.range.max.y - self.cur.y - 1) as usize;
        let total = remaining_in_row + remaining_rows * w;
        (total, Some(total))
    }
}

impl ExactSizeIterator for RangeIter {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn point_arithmetic() {
        let a = Point::new(1, 2);
        let b = Point::new(3, 4);
        assert_eq!(a + b, Point::new(4, 6));
        assert_eq!(b - a, Point::new(2, 2));
        assert_eq!(a.shift(-2, 1), Point::new(-1, 3));
    }

    #[test]
    fn point_parses_plain_and_decorated_forms() {
        assert_eq!("0,4".parse::<Point>(), Ok(Point::new(0, 4)));
        assert_eq!(" 5 , 4 ".parse::<Point>(), Ok(Point::new(5, 4)));
        assert_eq!("(3, 7)".parse::<Point>(), Ok(Point::new(3, 7)));
        assert_eq!("[2,6]".parse::<Point>(), Ok(Point::new(2, 6)));
        assert_eq!("-1,2".parse::<Point>(), Ok(Point::new(-1, 2)));
    }

    #[test]
    fn point_parse_errors() {
        assert_eq!(
            "4".parse::<Point>(),
            Err(ParsePointError::Arity("4".to_string()))
        );
        assert_eq!(
            "1,2,3".parse::<Point>(),
            Err(ParsePointError::Arity("1,2,3".to_string()))
        );
        assert_eq!(
            "a,2".parse::<Point>(),
            Err(ParsePointError::Coordinate("a".to_string()))
        );
        assert_eq!(
            "(1,)".parse::<Point>(),
            Err(ParsePointError::Coordinate(String::new()))
        );
    }

    #[test]
    fn chessboard_bounds() {
        let r = Range::chessboard();
        assert_eq!((r.width(), r.height()), (8, 8));
        assert_eq!(r.iter().count(), 64);
        for x in -2..10 {
            for y in -2..10 {
                let inside = (0..8).contains(&x) && (0..8).contains(&y);
                assert_eq!(r.contains(Point::new(x, y)), inside, "({x}, {y})");
            }
        }
    }

    #[test]
    fn range_auto_canonicalize() {
        let r = Range::new(3, 2, 0, 0);
        assert_eq!(r.min, Point::new(0, 0));
        assert_eq!(r.max, Point::new(3, 2));
    }

    #[test]
    fn range_iter_count() {
        let r = Range::new(0, 0, 3, 2);
        let pts: Vec<_> = r.iter().collect();
        assert_eq!(pts.len(), 6);
        assert_eq!(r.iter().len(), 6);
        assert_eq!(pts[0], Point::new(0, 0));
        assert_eq!(pts[5], Point::new(2, 1));
    }

    #[test]
    fn range_line_relative() {
        let r = Range::chessboard();
        let l4 = r.line(4);
        assert_eq!(l4.min, Point::new(0, 4));
        assert_eq!(l4.max, Point::new(8, 5));
        assert_eq!(l4.iter().count(), 8);
        assert!(r.line(-1).is_empty());
        assert!(r.line(8).is_empty());
    }

    #[test]
    fn empty_ranges_compare_equal() {
        let a = Range::default();
        let b = Range {
            min: Point::new(5, 5),
            max: Point::new(5, 5),
        };
        assert_eq!(a, b);
        assert_eq!(a.iter().count(), 0);
        assert_ne!(a, Range::new(0, 0, 1, 1));
    }
}
