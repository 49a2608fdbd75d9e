//! Wraparound (toroidal) neighbourhood arithmetic for a `width × height` table.

use pacmaze_core::Position;

/// Neighbour offsets in link order: left, right, up, down.
///
/// Search tie-breaking depends on this order.
pub const OFFSETS: [(i64, i64); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// The dimensions of a periodic 2D grid.
///
/// Moving past any edge re-enters from the opposite edge, so every position
/// has exactly four neighbour positions. On a grid one cell wide or tall some
/// of those are the position itself, and on a grid two wide or tall left and
/// right (or up and down) coincide.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Torus {
    width: u32,
    height: u32,
}

impl Torus {
    /// Dimensions must both be non-zero; the parser guarantees this.
    pub(crate) fn new(width: u32, height: u32) -> Self {
        debug_assert!(width > 0 && height > 0);
        Self { width, height }
    }

    /// Number of columns.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Number of rows.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Total number of table slots.
    pub fn slot_count(&self) -> usize {
        (self.width as usize) * (self.height as usize)
    }

    /// The four wrapped neighbour positions of `pos`, in [`OFFSETS`] order.
    pub fn neighbours(&self, pos: Position) -> [Position; 4] {
        OFFSETS.map(|(dx, dy)| Position {
            x: wrap_axis(pos.x as i64 + dx, self.width),
            y: wrap_axis(pos.y as i64 + dy, self.height),
        })
    }

    /// Shortest wraparound hop distance between two positions, ignoring walls.
    pub fn distance(&self, a: Position, b: Position) -> u32 {
        axis_distance(a.x, b.x, self.width) + axis_distance(a.y, b.y, self.height)
    }
}

/// Wrap a single axis value into `[0, len)`.
fn wrap_axis(val: i64, len: u32) -> u32 {
    val.rem_euclid(len as i64) as u32
}

/// 1D distance along a periodic axis.
fn axis_distance(a: u32, b: u32, len: u32) -> u32 {
    let diff = a.abs_diff(b);
    diff.min(len - diff)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(x: u32, y: u32) -> Position {
        Position::new(x, y)
    }

    #[test]
    fn interior_neighbours() {
        let t = Torus::new(5, 5);
        assert_eq!(t.neighbours(p(2, 2)), [p(1, 2), p(3, 2), p(2, 1), p(2, 3)]);
    }

    #[test]
    fn corner_wraps_both_axes() {
        let t = Torus::new(5, 4);
        assert_eq!(t.neighbours(p(0, 0)), [p(4, 0), p(1, 0), p(0, 3), p(0, 1)]);
        assert_eq!(t.neighbours(p(4, 3)), [p(3, 3), p(0, 3), p(4, 2), p(4, 0)]);
    }

    #[test]
    fn single_cell_wraps_onto_itself() {
        let t = Torus::new(1, 1);
        assert!(t.neighbours(p(0, 0)).iter().all(|&n| n == p(0, 0)));
    }

    #[test]
    fn two_wide_left_and_right_coincide() {
        let t = Torus::new(2, 3);
        let n = t.neighbours(p(0, 1));
        assert_eq!(n[0], p(1, 1));
        assert_eq!(n[1], p(1, 1));
    }

    #[test]
    fn distance_takes_the_short_way_round() {
        let t = Torus::new(10, 10);
        assert_eq!(t.distance(p(0, 0), p(9, 9)), 2);
        assert_eq!(t.distance(p(0, 0), p(3, 4)), 7);
        assert_eq!(t.distance(p(2, 0), p(0, 0)), 2);
        assert_eq!(Torus::new(3, 1).distance(p(0, 0), p(2, 0)), 1);
    }
}
