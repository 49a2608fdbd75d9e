//! Proptest strategies for generating maze sources.

use pacmaze_core::Position;
use proptest::prelude::*;

/// Render a row-major tile vector as a maze source, placing the start at
/// index `start`. Every row, including the last, ends in `'\n'`.
pub fn render(width: u32, mut tiles: Vec<char>, start: usize) -> String {
    tiles[start] = 'p';
    let mut out = String::with_capacity(tiles.len() + tiles.len() / width as usize);
    for row in tiles.chunks(width as usize) {
        out.extend(row);
        out.push('\n');
    }
    out
}

/// A wall-free field with the start and a single dot at the given positions.
pub fn single_dot_field(width: u32, height: u32, start: Position, dot: Position) -> String {
    let mut tiles = vec![' '; (width * height) as usize];
    tiles[dot.to_index(width)] = 'd';
    render(width, tiles, start.to_index(width))
}

fn arb_tile() -> impl Strategy<Value = char> {
    prop_oneof![
        4 => Just(' '),
        1 => Just('d'),
        2 => Just('#'),
    ]
}

/// Any valid maze up to `max_dim` on each side (walls, dots, one start).
pub fn arb_maze(max_dim: u32) -> impl Strategy<Value = String> {
    (1..=max_dim, 1..=max_dim)
        .prop_flat_map(|(w, h)| {
            let n = (w * h) as usize;
            (Just(w), proptest::collection::vec(arb_tile(), n), 0..n)
        })
        .prop_map(|(w, tiles, start)| render(w, tiles, start))
}

/// A wall-free field with one dot, as `(source, start, dot)`.
///
/// The dot and the start are always distinct.
pub fn arb_single_dot_field(max_dim: u32) -> impl Strategy<Value = (String, Position, Position)> {
    (1..=max_dim, 1..=max_dim)
        .prop_filter("need room for start and dot", |(w, h)| w * h >= 2)
        .prop_flat_map(|(w, h)| {
            let n = (w * h) as usize;
            (Just(w), Just(h), 0..n, 1..n)
        })
        .prop_map(|(w, h, start, offset)| {
            let n = (w * h) as usize;
            let start = Position::from_index(start, w);
            let dot = Position::from_index((start.to_index(w) + offset) % n, w);
            (single_dot_field(w, h, start, dot), start, dot)
        })
}
