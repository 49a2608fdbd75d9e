use pacmaze_grid::Grid;
use pacmaze_test_utils::compliance;
use pacmaze_test_utils::strategy::{arb_maze, arb_single_dot_field};
use proptest::prelude::*;

proptest! {
    #[test]
    fn random_mazes_are_compliant(src in arb_maze(9)) {
        let grid = Grid::parse(&src).unwrap();
        compliance::run_full_compliance(&grid);
    }

    #[test]
    fn cell_count_matches_traversable_characters(src in arb_maze(9)) {
        let grid = Grid::parse(&src).unwrap();
        let traversable = src.chars().filter(|&c| c != '#' && c != '\n').count();
        prop_assert_eq!(grid.cell_count(), traversable);
    }

    #[test]
    fn render_reproduces_source(src in arb_maze(9)) {
        let grid = Grid::parse(&src).unwrap();
        prop_assert_eq!(grid.to_string(), src);
    }

    #[test]
    fn lone_dot_found_at_torus_distance(
        (src, start, dot) in arb_single_dot_field(12),
    ) {
        let grid = Grid::parse(&src).unwrap();
        let hit = grid.search().unwrap();
        prop_assert_eq!(hit.cell.position(), dot);
        prop_assert_eq!(hit.hops, grid.torus().distance(start, dot));
    }

    #[test]
    fn missing_final_line_break_is_rejected(src in arb_maze(6)) {
        let truncated = &src[..src.len() - 1];
        prop_assert_eq!(
            Grid::parse(truncated).unwrap_err(),
            pacmaze_grid::GridError::MissingTrailingLineBreak
        );
    }
}
