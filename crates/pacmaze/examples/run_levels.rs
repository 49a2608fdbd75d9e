//! Level runner: load each maze, print it, and report the closest dot.
//!
//! With no arguments, runs every built-in demo level (rejected sources, grids
//! with no reachable dot, and grids with a known answer). Otherwise each
//! argument is treated as a path to a maze file.
//!
//! Run with:
//!   cargo run --example run_levels
//!   cargo run --example run_levels -- path/to/maze.txt
//!
//! Set `RUST_LOG=pacmaze_grid=debug` to see parse events.

use std::path::Path;

use pacmaze::report::{report_file, report_source};
use pacmaze_test_utils::fixtures;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let paths: Vec<String> = std::env::args().skip(1).collect();

    if paths.is_empty() {
        print!(
            "{}",
            report_file(Path::new("levels/obviously_not_a_real_file_come_on_now"))
        );
        for level in fixtures::all_levels() {
            print!("{}", report_source(level.name, level.source));
        }
    } else {
        for path in &paths {
            print!("{}", report_file(Path::new(path)));
        }
    }
}
