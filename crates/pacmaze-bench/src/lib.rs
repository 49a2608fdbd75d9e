//! Maze generators for benchmarking pacmaze.
//!
//! - [`open_field`]: wall-free field with the only dot as far from the start
//!   as the torus allows (worst case for search)
//! - [`scattered_maze`]: deterministic walls and dots via seed

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

/// Build a `width × height` wall-free field.
///
/// The start sits at the centre and the single dot at `(0, 0)`, so the
/// search has to explore almost every cell before finding it.
pub fn open_field(width: u32, height: u32) -> String {
    let (sx, sy) = (width / 2, height / 2);
    let mut out = String::with_capacity(((width + 1) * height) as usize);
    for y in 0..height {
        for x in 0..width {
            out.push(match (x, y) {
                (0, 0) => 'd',
                _ if (x, y) == (sx, sy) => 'p',
                _ => ' ',
            });
        }
        out.push('\n');
    }
    out
}

/// Build a `width × height` maze with roughly `wall_pct`% walls and
/// `dot_pct`% dots, placed by a simple hash of the seed. The start is always
/// at the centre.
pub fn scattered_maze(width: u32, height: u32, wall_pct: u64, dot_pct: u64, seed: u64) -> String {
    let (sx, sy) = (width / 2, height / 2);
    let mut out = String::with_capacity(((width + 1) * height) as usize);
    for y in 0..height {
        for x in 0..width {
            let i = (y as u64) * (width as u64) + x as u64;
            let roll = (seed
                .wrapping_mul(6364136223846793005)
                .wrapping_add(i.wrapping_mul(1442695040888963407))
                >> 33)
                % 100;
            out.push(if (x, y) == (sx, sy) {
                'p'
            } else if roll < wall_pct {
                '#'
            } else if roll < wall_pct + dot_pct {
                'd'
            } else {
                ' '
            });
        }
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pacmaze_grid::{Grid, Position};

    #[test]
    fn open_field_worst_case_distance() {
        let grid = Grid::parse(&open_field(100, 100)).unwrap();
        assert_eq!(grid.cell_count(), 10_000);
        let hit = grid.search().unwrap();
        assert_eq!(hit.cell.position(), Position::new(0, 0));
        assert_eq!(hit.hops, 100);
    }

    #[test]
    fn scattered_maze_parses() {
        let src = scattered_maze(64, 48, 30, 1, 42);
        let grid = Grid::parse(&src).unwrap();
        assert_eq!((grid.width(), grid.height()), (64, 48));
        assert_eq!(grid.start_position(), Position::new(32, 24));
    }

    #[test]
    fn scattered_maze_deterministic() {
        assert_eq!(
            scattered_maze(20, 20, 25, 5, 7),
            scattered_maze(20, 20, 25, 5, 7)
        );
        assert_ne!(
            scattered_maze(20, 20, 25, 5, 7),
            scattered_maze(20, 20, 25, 5, 8)
        );
    }
}
