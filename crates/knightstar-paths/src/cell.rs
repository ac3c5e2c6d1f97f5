use knightstar_core::Point;

/// Index of a [`Cell`] in the search arena.
///
/// Parent links are stored as ids rather than references; the arena keeps
/// every cell alive until the search is dropped, so an id never dangles.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CellId(pub(crate) usize);

/// A node of the search tree: a board square plus the costs of reaching it.
///
/// Two cells are equal when they sit on the same square. Parent and costs
/// are ignored, so a square rediscovered through another parent compares
/// equal to the copy already in the open set.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    pub pos: Point,
    pub parent: Option<CellId>,
    pub g_cost: i32,
    pub h_cost: i32,
    pub f_cost: i32,
}

impl Cell {
    /// Create a cell with all costs at zero.
    #[inline]
    pub fn new(pos: Point, parent: Option<CellId>) -> Self {
        Self {
            pos,
            parent,
            g_cost: 0,
            h_cost: 0,
            f_cost: 0,
        }
    }

    /// `[x,y]`, the label used in diagnostics and parent references.
    pub fn position_label(&self) -> String {
        format!("[{},{}]", self.pos.x, self.pos.y)
    }

    /// Whether this cell is the root of its tree.
    #[inline]
    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }
}

impl PartialEq for Cell {
    fn eq(&self, other: &Self) -> bool {
        self.pos == other.pos
    }
}

impl Eq for Cell {}

impl PartialEq<Point> for Cell {
    fn eq(&self, other: &Point) -> bool {
        self.pos == *other
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_cell_has_zero_costs() {
        let c = Cell::new(Point::new(0, 4), None);
        assert_eq!((c.g_cost, c.h_cost, c.f_cost), (0, 0, 0));
        assert!(c.is_root());
    }

    #[test]
    fn equality_ignores_parent_and_costs() {
        let mut a = Cell::new(Point::new(2, 3), None);
        a.g_cost = 1;
        a.f_cost = 3;
        let mut b = Cell::new(Point::new(2, 3), Some(CellId(7)));
        b.g_cost = 4;
        b.h_cost = 2;
        b.f_cost = 6;
        assert_eq!(a, b);
        assert_eq!(a, Point::new(2, 3));
        assert_ne!(a, Cell::new(Point::new(3, 2), None));
    }

    #[test]
    fn position_label_format() {
        assert_eq!(Cell::new(Point::new(5, 4), None).position_label(), "[5,4]");
        assert_eq!(Cell::new(Point::new(0, 0), None).position_label(), "[0,0]");
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn cell_round_trip_keeps_costs() {
        let mut c = Cell::new(Point::new(3, 3), Some(CellId(1)));
        c.g_cost = 2;
        c.h_cost = 1;
        c.f_cost = 3;
        let json = serde_json::to_string(&c).unwrap();
        let back: Cell = serde_json::from_str(&json).unwrap();
        assert_eq!(back.pos, c.pos);
        assert_eq!(back.parent, c.parent);
        assert_eq!((back.g_cost, back.h_cost, back.f_cost), (2, 1, 3));
    }
}
