//! Symbol legend: which characters mean open, dot, start, and wall.

use pacmaze_core::ConfigError;

/// What a single source character turns into.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Tile {
    /// Traversable cell without a dot.
    Open,
    /// Traversable cell holding a dot.
    Dot,
    /// Traversable cell where the search begins.
    Start,
    /// No cell.
    Wall,
}

impl Tile {
    /// Whether this tile produces a cell.
    pub fn is_traversable(self) -> bool {
        !matches!(self, Self::Wall)
    }
}

/// Mapping from source characters to [`Tile`]s.
///
/// The default legend is `' '` open, `'d'` dot, `'p'` start, `'#'` wall.
/// Custom legends are validated by [`Legend::new`]: the four symbols must be
/// distinct and none may be `'\n'`.
///
/// # Examples
///
/// ```
/// use pacmaze_grid::Legend;
///
/// let legend = Legend::new('.', 'o', '@', 'X').unwrap();
/// assert_eq!(legend.start(), '@');
/// assert!(Legend::new('.', '.', '@', 'X').is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Legend {
    open: char,
    dot: char,
    start: char,
    wall: char,
}

impl Default for Legend {
    fn default() -> Self {
        Self {
            open: ' ',
            dot: 'd',
            start: 'p',
            wall: '#',
        }
    }
}

impl Legend {
    /// Build a legend, rejecting line breaks and duplicate symbols.
    pub fn new(open: char, dot: char, start: char, wall: char) -> Result<Self, ConfigError> {
        let roles = [("open", open), ("dot", dot), ("start", start), ("wall", wall)];
        for (i, &(role, symbol)) in roles.iter().enumerate() {
            if symbol == '\n' {
                return Err(ConfigError::LineBreakSymbol { role });
            }
            if let Some(&(first, _)) = roles[..i].iter().find(|(_, s)| *s == symbol) {
                return Err(ConfigError::DuplicateSymbol {
                    symbol,
                    first,
                    second: role,
                });
            }
        }
        Ok(Self {
            open,
            dot,
            start,
            wall,
        })
    }

    /// Symbol for an open cell.
    pub fn open(&self) -> char {
        self.open
    }

    /// Symbol for a cell holding a dot.
    pub fn dot(&self) -> char {
        self.dot
    }

    /// Symbol for the starting cell.
    pub fn start(&self) -> char {
        self.start
    }

    /// Symbol for a wall.
    pub fn wall(&self) -> char {
        self.wall
    }

    /// Classify a character, or `None` if the legend does not define it.
    pub fn tile(&self, symbol: char) -> Option<Tile> {
        if symbol == self.open {
            Some(Tile::Open)
        } else if symbol == self.dot {
            Some(Tile::Dot)
        } else if symbol == self.start {
            Some(Tile::Start)
        } else if symbol == self.wall {
            Some(Tile::Wall)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_legend() {
        let l = Legend::default();
        assert_eq!(l.tile(' '), Some(Tile::Open));
        assert_eq!(l.tile('d'), Some(Tile::Dot));
        assert_eq!(l.tile('p'), Some(Tile::Start));
        assert_eq!(l.tile('#'), Some(Tile::Wall));
        assert_eq!(l.tile('x'), None);
        assert_eq!(l.tile('\r'), None);
        assert_eq!(l.tile('P'), None);
    }

    #[test]
    fn default_is_valid() {
        let d = Legend::default();
        assert_eq!(Legend::new(d.open(), d.dot(), d.start(), d.wall()), Ok(d));
    }

    #[test]
    fn rejects_duplicates() {
        assert_eq!(
            Legend::new(' ', 'd', 'p', 'd'),
            Err(ConfigError::DuplicateSymbol {
                symbol: 'd',
                first: "dot",
                second: "wall",
            })
        );
    }

    #[test]
    fn rejects_line_break() {
        assert_eq!(
            Legend::new(' ', '\n', 'p', '#'),
            Err(ConfigError::LineBreakSymbol { role: "dot" })
        );
    }

    #[test]
    fn wall_is_not_traversable() {
        assert!(Tile::Open.is_traversable());
        assert!(Tile::Dot.is_traversable());
        assert!(Tile::Start.is_traversable());
        assert!(!Tile::Wall.is_traversable());
    }
}
