//! Maze sources for tests, benchmarks, and the level runner.
//!
//! Grouped the way the demo levels are: sources that must be rejected,
//! valid grids with no reachable dot, and valid grids with a known answer.

/// A named maze source.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Level {
    /// Short label used in reports.
    pub name: &'static str,
    /// Raw source text.
    pub source: &'static str,
}

impl Level {
    const fn new(name: &'static str, source: &'static str) -> Self {
        Self { name, source }
    }
}

// ── Rejected sources ────────────────────────────────────────────

/// An `'x'` at (1,1).
pub const INVALID_CHAR: &str = concat!("p  \n", " x \n", "   \n");

/// Well-formed but without a start marker.
pub const NEEDS_PACMAN: &str = concat!("   \n", " d \n", "   \n");

/// Start markers at (0,0) and (2,2).
pub const TWO_PACMEN: &str = concat!("p  \n", "   \n", "  p\n");

/// No content at all.
pub const EMPTY: &str = "";

/// Row 2 is one character short of the width set by row 0.
pub const ROW_TOO_SHORT: &str = concat!("p  d\n", "    \n", "   \n", "    \n");

/// A single open cell and nothing else.
pub const ONE_BY_ONE_EMPTY: &str = " \n";

/// Last row is not terminated.
pub const NEEDS_NEW_LINE: &str = concat!("p d\n", "   ");

/// A lone start with no line break.
pub const NEEDS_NEW_LINE_1X1: &str = "p";

// ── Valid, but no reachable dot ─────────────────────────────────

/// Nothing but the start.
pub const PACMAN_1X1: &str = "p\n";

/// Start boxed in by walls on every side.
pub const THREE_BY_THREE_ALL_WALLS: &str = concat!(
    "###\n",
    "#p#\n",
    "###\n",
);

/// Open 3×3 with no dots at all.
pub const THREE_BY_THREE_EMPTY: &str = concat!(
    "   \n",
    " p \n",
    "   \n",
);

/// A dot exists but walls cut it off from the start.
pub const DOT_INACCESSIBLE: &str = concat!(
    "#####\n",
    "#p#d#\n",
    "#####\n",
);

// ── Valid, with a reachable dot ─────────────────────────────────

/// Walled 5×5 room with the dot directly above the start.
pub const FIVE_BY_FIVE: &str = concat!(
    "#####\n",
    "# d #\n",
    "# p #\n",
    "#   #\n",
    "#####\n",
);

/// Open field; the dot is three hops away across the right edge.
pub const NO_WALLS: &str = concat!(
    "     \n",
    " d   \n",
    "    p\n",
    "     \n",
);

/// Single row where a wall forces the search to wrap past the right edge.
pub const HORIZONTAL: &str = "d  #   p  \n";

/// Single column where a wall forces the search to wrap past the bottom edge.
pub const VERTICAL: &str = concat!(
    "d\n",
    " \n",
    "#\n",
    " \n",
    " \n",
    "p\n",
    " \n",
);

/// Enclosed corridor maze with two dots at different distances.
pub const NORMAL_LEVEL: &str = concat!(
    "###########\n",
    "#d   #    #\n",
    "# ## # ## #\n",
    "#    p    #\n",
    "# ## # ## #\n",
    "#    #  d #\n",
    "###########\n",
);

/// 20×10 open field with one dot in the far corner.
pub const BIG_EMPTY: &str = concat!(
    "d                   \n",
    "                    \n",
    "                    \n",
    "                    \n",
    "                    \n",
    "          p         \n",
    "                    \n",
    "                    \n",
    "                    \n",
    "                    \n",
);

/// 31×15 maze with gaps in the border that open wraparound corridors.
pub const BIG: &str = concat!(
    "## ######### ######## #########\n",
    "#d     #          #         d #\n",
    "# #### # ######## # ####### # #\n",
    "# #    #        # #       # #  \n",
    "  # ######### # # ####### # # d\n",
    "# #         # #   #     # # # #\n",
    "# ######### # ##### ### # # # #\n",
    "#         # #   p   #   #   # #\n",
    "######### # ######### ####### #\n",
    "#       # #         #         #\n",
    "# ##### # ######### # ####### #\n",
    "# #   # #     d   # #       # #\n",
    "# # # # ####### # # ####### # #\n",
    "#   #           #             #\n",
    "## ######### ######## #########\n",
);

/// Every rejected source, in demo order.
pub const BAD_INPUT: &[Level] = &[
    Level::new("badInput/invalidChar", INVALID_CHAR),
    Level::new("badInput/needsPacMan", NEEDS_PACMAN),
    Level::new("badInput/twoPacMen", TWO_PACMEN),
    Level::new("badInput/empty", EMPTY),
    Level::new("badInput/rowTooShort", ROW_TOO_SHORT),
    Level::new("badInput/1x1empty", ONE_BY_ONE_EMPTY),
    Level::new("badInput/needsNewLine", NEEDS_NEW_LINE),
    Level::new("badInput/needsNewLine1x1", NEEDS_NEW_LINE_1X1),
];

/// Every valid source whose search comes back empty.
pub const CANNOT_FIND_DOTS: &[Level] = &[
    Level::new("cannotFindDots/pacman1x1", PACMAN_1X1),
    Level::new("cannotFindDots/3x3allWalls", THREE_BY_THREE_ALL_WALLS),
    Level::new("cannotFindDots/3x3empty", THREE_BY_THREE_EMPTY),
    Level::new("cannotFindDots/dotInaccessible", DOT_INACCESSIBLE),
];

/// Every valid source with a reachable dot.
pub const GOOD_INPUT: &[Level] = &[
    Level::new("goodInput/5x5", FIVE_BY_FIVE),
    Level::new("goodInput/noWalls", NO_WALLS),
    Level::new("goodInput/horizontal", HORIZONTAL),
    Level::new("goodInput/vertical", VERTICAL),
    Level::new("goodInput/normalLevel", NORMAL_LEVEL),
    Level::new("goodInput/bigEmpty", BIG_EMPTY),
    Level::new("goodInput/big", BIG),
];

/// All levels that parse successfully.
pub fn valid_levels() -> impl Iterator<Item = &'static Level> {
    CANNOT_FIND_DOTS.iter().chain(GOOD_INPUT)
}

/// All demo levels, rejected ones first.
pub fn all_levels() -> impl Iterator<Item = &'static Level> {
    BAD_INPUT.iter().chain(valid_levels())
}
