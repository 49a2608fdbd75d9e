//! Breadth-first closest-dot search.

use std::collections::VecDeque;

use pacmaze_core::Cell;

use crate::grid::Grid;

/// The dot found by [`Grid::search`] and how far away it is.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DotHit<'g> {
    /// The cell holding the dot.
    pub cell: &'g Cell,
    /// Number of adjacency links between the start cell and `cell`.
    pub hops: u32,
}

impl Grid {
    /// Find the dot nearest the start cell by hop count.
    ///
    /// Cells are visited in strictly non-decreasing hop order; among dots at
    /// the same distance, the first one reached through the left, right, up,
    /// down link order wins. Returns `None` when no dot is reachable, which
    /// includes the case of a grid with no dots at all.
    pub fn search(&self) -> Option<DotHit<'_>> {
        let mut visited = vec![false; self.cell_count()];
        let mut queue = VecDeque::new();

        visited[self.start().index()] = true;
        queue.push_back((self.start(), 0u32));

        while let Some((id, hops)) = queue.pop_front() {
            let cell = self.cell(id);
            if cell.has_dot() {
                tracing::trace!(position = %cell.position(), hops, "closest dot found");
                return Some(DotHit { cell, hops });
            }
            for &next in cell.adjacent_cells() {
                if !visited[next.index()] {
                    visited[next.index()] = true;
                    queue.push_back((next, hops + 1));
                }
            }
        }

        tracing::trace!(start = %self.start_position(), "no reachable dot");
        None
    }

    /// The dot nearest the start cell, or `None` if no dot is reachable.
    ///
    /// Shorthand for [`search`](Self::search) without the hop count.
    pub fn find_closest_dot(&self) -> Option<&Cell> {
        self.search().map(|hit| hit.cell)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pacmaze_core::Position;

    fn p(x: u32, y: u32) -> Position {
        Position::new(x, y)
    }

    fn closest(src: &str) -> Option<(Position, u32)> {
        let g = Grid::parse(src).unwrap();
        g.search().map(|hit| (hit.cell.position(), hit.hops))
    }

    #[test]
    fn dot_one_hop_across_the_wrap() {
        assert_eq!(closest("p d\n"), Some((p(2, 0), 1)));
    }

    #[test]
    fn start_on_its_own_has_no_dot() {
        assert_eq!(closest("p\n"), None);
    }

    #[test]
    fn enclosed_start_cannot_reach_dot() {
        assert_eq!(closest("#####\n#d#p#\n#####\n"), None);
    }

    #[test]
    fn wall_column_blocks_wrap_but_not_vertical() {
        // The '#' column blocks the horizontal wrap; the dot is reached by
        // stepping off the bottom edge instead.
        let src = "#d  \n#   \n#  p\n";
        assert_eq!(closest(src), Some((p(1, 0), 3)));
    }

    #[test]
    fn tie_goes_to_left_before_right() {
        assert_eq!(closest("d p d\n"), Some((p(0, 0), 2)));
        assert_eq!(closest(" dpd \n"), Some((p(1, 0), 1)));
    }

    #[test]
    fn tie_goes_to_right_before_up() {
        let src = "  d  \n     \n  p d\n     \n     \n";
        assert_eq!(closest(src), Some((p(4, 2), 2)));
        let src = "  d  \n  pd \n     \n";
        assert_eq!(closest(src), Some((p(3, 1), 1)));
    }

    #[test]
    fn tie_goes_to_up_before_down() {
        let src = "  d  \n  p  \n  d  \n     \n";
        assert_eq!(closest(src), Some((p(2, 0), 1)));
    }

    #[test]
    fn nearer_dot_wins_over_earlier_dot() {
        let src = "d    \n     \n   pd\n";
        assert_eq!(closest(src), Some((p(4, 2), 1)));
    }

    #[test]
    fn repeated_search_is_stable() {
        let g = Grid::parse(" d #\n#  p\n d  \n").unwrap();
        let first = g.find_closest_dot().map(Cell::position);
        for _ in 0..3 {
            assert_eq!(g.find_closest_dot().map(Cell::position), first);
        }
        assert!(first.is_some());
    }

    #[test]
    fn find_closest_dot_matches_search() {
        let g = Grid::parse("p #d\n    \n").unwrap();
        let hit = g.search().unwrap();
        assert_eq!(g.find_closest_dot(), Some(hit.cell));
        assert_eq!(hit.cell.position(), p(3, 0));
        assert_eq!(hit.hops, 1);
    }
}
