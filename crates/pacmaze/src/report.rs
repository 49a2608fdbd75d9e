//! Human-readable reports for the level runner.

use std::fmt::Write as _;
use std::path::Path;

use pacmaze_core::GridError;
use pacmaze_grid::Grid;

/// Parse `source` and describe the outcome under the heading `label`.
pub fn report_source(label: &str, source: &str) -> String {
    describe(label, &Grid::parse(source))
}

/// Load the maze at `path` and describe the outcome.
pub fn report_file(path: &Path) -> String {
    describe(&path.display().to_string(), &Grid::load(path))
}

/// Describe a parse outcome.
///
/// An invalid grid prints its error. A valid grid prints its rendering, its
/// summary line, and the closest dot (or that none was found).
pub fn describe(label: &str, outcome: &Result<Grid, GridError>) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = write_report(&mut out, label, outcome);
    out
}

fn write_report(
    out: &mut String,
    label: &str,
    outcome: &Result<Grid, GridError>,
) -> std::fmt::Result {
    writeln!(out)?;
    writeln!(out, "---------- Test maze: {label} ----------")?;

    let grid = match outcome {
        Ok(grid) => grid,
        Err(e) => {
            tracing::info!(maze = label, error = %e, "maze rejected");
            return writeln!(out, "Grid input was invalid: {e}");
        }
    };

    write!(out, "{grid}")?;
    writeln!(out, "Grid setup complete. {}", grid.summary())?;

    match grid.search() {
        Some(hit) => {
            tracing::info!(maze = label, position = %hit.cell.position(), hops = hit.hops, "dot found");
            writeln!(
                out,
                "Found closest dot: {} ({} hops)",
                hit.cell.position(),
                hit.hops
            )
        }
        None => {
            tracing::info!(maze = label, "no dots found");
            writeln!(out, "No dots found.")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_grid_reports_error_only() {
        let r = report_source("twoPacMen", "pp\n");
        assert!(r.contains("---------- Test maze: twoPacMen ----------"));
        assert!(r.contains("Grid input was invalid: only one starting position allowed"));
        assert!(!r.contains("Grid setup complete"));
    }

    #[test]
    fn valid_grid_reports_render_summary_and_dot() {
        let r = report_source("wrap", "p d\n");
        assert_eq!(
            r,
            "\n---------- Test maze: wrap ----------\n\
             p d\n\
             Grid setup complete. Dims: (3,1) Start: (0,0)\n\
             Found closest dot: (2,0) (1 hops)\n"
        );
    }

    #[test]
    fn no_dot_is_not_an_error() {
        let r = report_source("walls", "###\n#p#\n###\n");
        assert!(r.contains("###\n#p#\n###\n"));
        assert!(r.ends_with("No dots found.\n"));
    }

    #[test]
    fn missing_file_is_reported_as_empty_input() {
        let r = report_file(Path::new("levels/obviously_not_a_real_file_come_on_now"));
        assert!(r.contains("Grid input was invalid: input is empty or does not exist"));
    }
}
