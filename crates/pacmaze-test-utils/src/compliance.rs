//! Grid invariant checks.
//!
//! Each function panics with a descriptive message when a [`Grid`] breaks
//! one of its structural guarantees. [`run_full_compliance`] runs them all;
//! the property tests and level tests call it on every grid they build.

use std::collections::VecDeque;

use indexmap::IndexSet;
use pacmaze_core::{CellId, Position};
use pacmaze_grid::Grid;

/// Assert that the number of non-wall slots equals the number of cells, and
/// that every slot points at the cell that claims that position.
pub fn assert_slots_match_cells(grid: &Grid) {
    let mut occupied = 0usize;
    for y in 0..grid.height() {
        for x in 0..grid.width() {
            let pos = Position::new(x, y);
            if let Some(id) = grid.slot(pos) {
                occupied += 1;
                let cell = grid.cell(id);
                assert_eq!(
                    cell.position(),
                    pos,
                    "slot {pos} holds {id}, which claims {}",
                    cell.position()
                );
                assert_eq!(cell.id(), id, "cell at {pos} reports id {}", cell.id());
            }
        }
    }
    assert_eq!(
        occupied,
        grid.cell_count(),
        "{occupied} occupied slots but {} cells",
        grid.cell_count()
    );
}

/// Assert that no cell links to itself or links to the same cell twice.
pub fn assert_no_self_or_duplicate_links(grid: &Grid) {
    for cell in grid.cells() {
        let links = cell.adjacent_cells();
        assert!(
            !links.contains(&cell.id()),
            "cell {} at {} links to itself",
            cell.id(),
            cell.position()
        );
        let unique: IndexSet<CellId> = links.iter().copied().collect();
        assert_eq!(
            unique.len(),
            links.len(),
            "cell at {} has duplicate links: {links:?}",
            cell.position()
        );
    }
}

/// Assert that `b in adj(a)` implies `a in adj(b)`.
pub fn assert_adjacency_symmetric(grid: &Grid) {
    for cell in grid.cells() {
        for &other in cell.adjacent_cells() {
            assert!(
                grid.cell(other).adjacent_cells().contains(&cell.id()),
                "adjacency symmetry violated: {} links to {} but not back",
                cell.position(),
                grid.cell(other).position()
            );
        }
    }
}

/// Assert that every cell has at most four links, each to a wrapped
/// 4-neighbour position.
pub fn assert_links_are_torus_neighbours(grid: &Grid) {
    let torus = grid.torus();
    for cell in grid.cells() {
        let links = cell.adjacent_cells();
        assert!(
            links.len() <= 4,
            "cell at {} has {} links",
            cell.position(),
            links.len()
        );
        let neighbours = torus.neighbours(cell.position());
        for &other in links {
            let pos = grid.cell(other).position();
            assert!(
                neighbours.contains(&pos),
                "cell at {} links to non-neighbour {pos}",
                cell.position()
            );
        }
    }
}

/// Assert that two searches on the same grid agree.
pub fn assert_search_idempotent(grid: &Grid) {
    let a = grid.search().map(|hit| (hit.cell.id(), hit.hops));
    let b = grid.search().map(|hit| (hit.cell.id(), hit.hops));
    assert_eq!(a, b, "search is non-deterministic");
}

/// Hop distance from the start to every slot, computed from the raw
/// position table rather than the adjacency lists. `None` for walls and
/// unreachable cells.
pub fn reference_distances(grid: &Grid) -> Vec<Option<u32>> {
    let torus = grid.torus();
    let width = grid.width();
    let mut dist = vec![None; torus.slot_count()];
    let mut queue = VecDeque::new();

    let start = grid.start_position();
    dist[start.to_index(width)] = Some(0);
    queue.push_back(start);

    while let Some(pos) = queue.pop_front() {
        let d = dist[pos.to_index(width)].unwrap_or(0);
        for next in torus.neighbours(pos) {
            let i = next.to_index(width);
            if grid.slot(next).is_some() && dist[i].is_none() {
                dist[i] = Some(d + 1);
                queue.push_back(next);
            }
        }
    }
    dist
}

/// Assert that the search result is a dot at the minimum reachable distance,
/// and that it returns `None` only when no dot is reachable.
pub fn assert_search_matches_reference(grid: &Grid) {
    let dist = reference_distances(grid);
    let width = grid.width();
    let nearest = grid
        .cells()
        .iter()
        .filter(|c| c.has_dot())
        .filter_map(|c| dist[c.position().to_index(width)])
        .min();

    match (grid.search(), nearest) {
        (None, None) => {}
        (Some(hit), Some(best)) => {
            assert!(hit.cell.has_dot(), "search returned a cell without a dot");
            assert_eq!(
                hit.hops, best,
                "search reported {} hops, nearest dot is {best} away",
                hit.hops
            );
            assert_eq!(
                dist[hit.cell.position().to_index(width)],
                Some(hit.hops),
                "hop count for {} disagrees with reference",
                hit.cell.position()
            );
        }
        (hit, best) => panic!(
            "search returned {:?}, reference nearest distance {best:?}",
            hit.map(|h| h.cell.position())
        ),
    }
}

/// Run every check on a grid.
pub fn run_full_compliance(grid: &Grid) {
    assert_slots_match_cells(grid);
    assert_no_self_or_duplicate_links(grid);
    assert_adjacency_symmetric(grid);
    assert_links_are_torus_neighbours(grid);
    assert_search_idempotent(grid);
    assert_search_matches_reference(grid);
}
