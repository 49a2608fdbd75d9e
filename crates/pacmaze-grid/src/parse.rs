//! Character-level maze parser.
//!
//! Walks the source one character at a time, tracking an `(x, y)` cursor
//! that resets on every `'\n'`. Each traversable character becomes a
//! [`Cell`] in source order; walls leave an empty slot. Width agreement and
//! start-marker uniqueness are checked as the stream is consumed, the
//! end-of-input checks after it.

use crate::legend::{Legend, Tile};
use pacmaze_core::{Cell, CellId, GridError, Position};

/// Output of a successful parse, before any adjacency has been built.
#[derive(Debug)]
pub(crate) struct Layout {
    pub(crate) width: u32,
    pub(crate) height: u32,
    pub(crate) slots: Vec<Option<CellId>>,
    pub(crate) cells: Vec<Cell>,
    pub(crate) start: CellId,
}

struct Parser<'a> {
    legend: &'a Legend,
    width: Option<u32>,
    height: u32,
    slots: Vec<Option<CellId>>,
    cells: Vec<Cell>,
    start: Option<(CellId, Position)>,
}

impl<'a> Parser<'a> {
    fn new(legend: &'a Legend) -> Self {
        Self {
            legend,
            width: None,
            height: 0,
            slots: Vec::new(),
            cells: Vec::new(),
            start: None,
        }
    }

    /// A row just ended at `line_width` characters.
    fn end_line(&mut self, line_width: u32) -> Result<(), GridError> {
        match self.width {
            None => self.width = Some(line_width),
            Some(expected) if expected != line_width => {
                return Err(GridError::RowWidthMismatch {
                    row: self.height,
                    width: line_width,
                    expected,
                });
            }
            Some(_) => {}
        }
        self.height += 1;
        Ok(())
    }

    fn read_cell(&mut self, symbol: char, position: Position) -> Result<(), GridError> {
        let tile = self
            .legend
            .tile(symbol)
            .ok_or(GridError::InvalidCharacter { position, symbol })?;

        if !tile.is_traversable() {
            self.slots.push(None);
            return Ok(());
        }

        let id = CellId(self.cells.len() as u32);
        if tile == Tile::Start {
            if let Some((_, first)) = self.start {
                return Err(GridError::MultipleStartingPositions {
                    first,
                    second: position,
                });
            }
            self.start = Some((id, position));
        }
        self.cells
            .push(Cell::new(id, tile == Tile::Dot, position, symbol));
        self.slots.push(Some(id));
        Ok(())
    }

    fn finish(self, trailing_line_break: bool) -> Result<Layout, GridError> {
        if !trailing_line_break {
            return Err(GridError::MissingTrailingLineBreak);
        }
        let width = match self.width {
            Some(w) if w > 0 && self.height > 0 => w,
            _ => return Err(GridError::EmptyOrMissingInput),
        };
        let (start, _) = self.start.ok_or(GridError::MissingStartingPosition)?;
        Ok(Layout {
            width,
            height: self.height,
            slots: self.slots,
            cells: self.cells,
            start,
        })
    }
}

/// Parse `source` into a validated [`Layout`].
pub(crate) fn parse(source: &str, legend: &Legend) -> Result<Layout, GridError> {
    let mut parser = Parser::new(legend);
    let mut line_width = 0u32;

    for symbol in source.chars() {
        if symbol == '\n' {
            parser.end_line(line_width)?;
            line_width = 0;
        } else {
            parser.read_cell(symbol, Position::new(line_width, parser.height))?;
            line_width += 1;
        }
    }

    parser.finish(line_width == 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_default(src: &str) -> Result<Layout, GridError> {
        parse(src, &Legend::default())
    }

    #[test]
    fn layout_dimensions_and_slots() {
        let l = parse_default("p#\n d\n").unwrap();
        assert_eq!((l.width, l.height), (2, 2));
        assert_eq!(l.slots, vec![Some(CellId(0)), None, Some(CellId(1)), Some(CellId(2))]);
        assert_eq!(l.cells.len(), 3);
        assert_eq!(l.start, CellId(0));
        assert!(l.cells[2].has_dot());
        assert_eq!(l.cells[2].position(), Position::new(1, 1));
        assert_eq!(l.cells[1].symbol(), ' ');
    }

    #[test]
    fn invalid_character_reports_position() {
        assert_eq!(
            parse_default("p  \n x \n").unwrap_err(),
            GridError::InvalidCharacter {
                position: Position::new(1, 1),
                symbol: 'x',
            }
        );
    }

    #[test]
    fn carriage_return_is_invalid() {
        assert_eq!(
            parse_default("p \r\n").unwrap_err(),
            GridError::InvalidCharacter {
                position: Position::new(2, 0),
                symbol: '\r',
            }
        );
    }

    #[test]
    fn row_width_mismatch() {
        assert_eq!(
            parse_default("p \n #\n d \n").unwrap_err(),
            GridError::RowWidthMismatch {
                row: 2,
                width: 3,
                expected: 2,
            }
        );
    }

    #[test]
    fn empty_first_line_fixes_width_at_zero() {
        assert_eq!(
            parse_default("\np\n").unwrap_err(),
            GridError::RowWidthMismatch {
                row: 1,
                width: 1,
                expected: 0,
            }
        );
    }

    #[test]
    fn second_start_is_rejected_where_it_appears() {
        assert_eq!(
            parse_default("p \n p\n").unwrap_err(),
            GridError::MultipleStartingPositions {
                first: Position::new(0, 0),
                second: Position::new(1, 1),
            }
        );
    }

    #[test]
    fn character_errors_win_over_missing_line_break() {
        assert!(matches!(
            parse_default("p\nx").unwrap_err(),
            GridError::InvalidCharacter { .. }
        ));
        assert!(matches!(
            parse_default("pp").unwrap_err(),
            GridError::MultipleStartingPositions { .. }
        ));
    }

    #[test]
    fn end_of_input_checks_in_order() {
        assert_eq!(
            parse_default("").unwrap_err(),
            GridError::EmptyOrMissingInput
        );
        assert_eq!(
            parse_default("\n\n").unwrap_err(),
            GridError::EmptyOrMissingInput
        );
        assert_eq!(
            parse_default("##").unwrap_err(),
            GridError::MissingTrailingLineBreak
        );
        assert_eq!(
            parse_default("##\n").unwrap_err(),
            GridError::MissingStartingPosition
        );
    }

    #[test]
    fn custom_legend() {
        let legend = Legend::new('.', 'o', '@', 'X').unwrap();
        let l = parse("@.o\nXXX\n", &legend).unwrap();
        assert_eq!(l.cells.len(), 3);
        assert!(l.cells[2].has_dot());
        assert!(parse("p..\n", &legend).is_err());
    }
}
