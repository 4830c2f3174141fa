//! Text rendering of a finished maze
//!
//! Supports plain ASCII and Unicode block glyphs.

use hashbrown::HashSet;

use mz_core::{CellState, MazeQuery, Position};
use strum::{Display, EnumString, VariantNames};

/// Glyph styles selectable from the command line.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumString, VariantNames,
)]
#[strum(serialize_all = "lowercase")]
pub enum GlyphStyle {
    /// ASCII characters, safe on any terminal.
    #[default]
    Classic,
    /// Unicode block characters.
    Fancy,
}

/// Characters used to draw each kind of cell.
pub trait GlyphSet {
    fn wall(&self) -> char;
    fn path(&self) -> char;

    /// Path cell on the start-to-goal route overlay.
    fn route(&self) -> char;

    fn start(&self) -> char {
        'S'
    }

    fn goal(&self) -> char {
        'G'
    }
}

pub struct ClassicGlyphs;

impl GlyphSet for ClassicGlyphs {
    fn wall(&self) -> char {
        CellState::Wall.symbol()
    }

    fn path(&self) -> char {
        CellState::Path.symbol()
    }

    fn route(&self) -> char {
        '*'
    }
}

pub struct FancyGlyphs;

impl GlyphSet for FancyGlyphs {
    fn wall(&self) -> char {
        '█'
    }

    fn path(&self) -> char {
        ' '
    }

    fn route(&self) -> char {
        '·'
    }

    fn start(&self) -> char {
        '●'
    }

    fn goal(&self) -> char {
        '★'
    }
}

pub fn glyph_set(style: GlyphStyle) -> Box<dyn GlyphSet> {
    match style {
        GlyphStyle::Classic => Box::new(ClassicGlyphs),
        GlyphStyle::Fancy => Box::new(FancyGlyphs),
    }
}

/// Draw the maze one text line per row, overlaying `route` on path cells.
pub fn render(maze: &dyn MazeQuery, glyphs: &dyn GlyphSet, route: &[Position]) -> String {
    let route: HashSet<Position> = route.iter().copied().collect();
    let (start, goal) = (maze.start(), maze.goal());
    let mut out = String::with_capacity(maze.rows() * (maze.cols() + 1));

    for row in 0..maze.rows() {
        for col in 0..maze.cols() {
            let pos = Position::new(row, col);
            let ch = if pos == start {
                glyphs.start()
            } else if pos == goal {
                glyphs.goal()
            } else if maze.is_wall(row as isize, col as isize) {
                glyphs.wall()
            } else if route.contains(&pos) {
                glyphs.route()
            } else {
                glyphs.path()
            };
            out.push(ch);
        }
        out.push('\n');
    }
    out
}
