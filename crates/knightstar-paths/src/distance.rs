use knightstar_core::Point;

/// Lower bound on the number of knight moves between two squares.
///
/// A knight covers at most two squares per move along either axis, so this
/// is `max(ceil(|dx| / 2), ceil(|dy| / 2))`. Board edges are ignored; the
/// estimate never exceeds the true distance.
#[inline]
pub fn knight_estimate(a: Point, b: Point) -> i32 {
    let half_up = |d: i32| (d.abs() + 1) / 2;
    half_up(a.x - b.x).max(half_up(a.y - b.y))
}
