//! Maze generator command line
//!
//! Generates one maze and prints it as text followed by a short summary.

mod render;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use log::LevelFilter;
use strum::IntoEnumIterator;

use mz_core::config::parse_difficulty;
use mz_core::generator::path_distance;
use mz_core::{
    CellLayout, Difficulty, MAX_CELL_SIZE, MazeConfig, MazeQuery, MazeResult, generate,
};

use render::{GlyphStyle, glyph_set, render};

/// Procedural maze generator
#[derive(Parser, Debug)]
#[command(name = "mazegen")]
#[command(author, version, about = "Generate a random solvable maze", long_about = None)]
struct Args {
    /// Difficulty preset (easy, normal, hard, very-hard, extreme)
    #[arg(short = 'd', long = "difficulty")]
    difficulty: Option<String>,

    /// Number of rows (overrides the preset)
    #[arg(short = 'r', long = "rows")]
    rows: Option<usize>,

    /// Number of columns (overrides the preset)
    #[arg(short = 'c', long = "cols")]
    cols: Option<usize>,

    /// Extra dead-end spurs, 0.0 to 1.0
    #[arg(long = "complexity")]
    complexity: Option<f64>,

    /// Extra loops, 0.0 to 1.0
    #[arg(long = "density")]
    density: Option<f64>,

    /// RNG seed for a reproducible maze
    #[arg(short = 's', long = "seed")]
    seed: Option<u64>,

    /// JSON config file, applied under the command line flags
    #[arg(long = "config")]
    config: Option<PathBuf>,

    /// Glyph style (classic, fancy)
    #[arg(short = 'g', long = "glyphs", default_value_t = GlyphStyle::Classic)]
    glyphs: GlyphStyle,

    /// Overlay the shortest start-to-goal route
    #[arg(long = "solve")]
    solve: bool,

    /// Cell size in pixels for the reported bounds
    #[arg(
        long = "cell-size",
        value_parser = clap::value_parser!(u32).range(1..=i64::from(MAX_CELL_SIZE))
    )]
    cell_size: Option<u32>,

    /// List difficulty presets and exit
    #[arg(long = "list-difficulties")]
    list_difficulties: bool,

    /// Verbose output
    #[arg(short = 'v', long = "verbose")]
    verbose: bool,
}

impl Args {
    /// The config layer given by explicit flags
    fn overrides(&self) -> Result<MazeConfig> {
        let difficulty = self
            .difficulty
            .as_deref()
            .map(parse_difficulty)
            .transpose()?;
        Ok(MazeConfig {
            difficulty,
            rows: self.rows,
            cols: self.cols,
            complexity: self.complexity,
            density: self.density,
            seed: self.seed,
        })
    }

    /// Preset < config file < flags
    fn load_config(&self) -> Result<MazeConfig> {
        let file = match &self.config {
            Some(path) => MazeConfig::from_json_file(path)
                .with_context(|| format!("failed to load config {}", path.display()))?,
            None => MazeConfig::default(),
        };
        Ok(file.merge(self.overrides()?))
    }

    fn layout(&self) -> CellLayout {
        self.cell_size.map(CellLayout::new).unwrap_or_default()
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    let level = if args.verbose {
        LevelFilter::Info
    } else {
        LevelFilter::Warn
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();

    if args.list_difficulties {
        for line in difficulty_table() {
            println!("{}", line);
        }
        return Ok(());
    }

    let config = args.load_config()?;
    let params = config.resolve().context("invalid maze parameters")?;
    let maze = generate(&params)?;

    let route = if args.solve {
        maze.solution()
    } else {
        Vec::new()
    };
    print!("{}", render(&maze, glyph_set(args.glyphs).as_ref(), &route));
    println!();
    for line in summary(&maze, args.layout(), config.difficulty) {
        println!("{}", line);
    }

    Ok(())
}

fn difficulty_table() -> Vec<String> {
    Difficulty::iter()
        .map(|d| {
            let s = d.settings();
            format!(
                "{:<10} {:>2}x{:<2}  complexity {:.1}  density {:.1}  {} s",
                d.to_string(),
                s.rows,
                s.cols,
                s.complexity,
                s.density,
                s.time_limit_secs
            )
        })
        .collect()
}

fn summary(maze: &MazeResult, layout: CellLayout, difficulty: Option<Difficulty>) -> Vec<String> {
    let (width, height) = layout.pixel_size(maze.rows(), maze.cols());
    let route = match path_distance(maze.grid(), maze.start(), maze.goal()) {
        Some(steps) => format!("{} steps", steps),
        None => "unreachable".to_string(),
    };
    let stats = maze.stats();

    let mut lines = vec![
        format!("size:   {}x{}", maze.rows(), maze.cols()),
        format!("seed:   {}", maze.seed()),
        format!("start:  {}", maze.start()),
        format!("goal:   {}", maze.goal()),
        format!("route:  {}", route),
        format!(
            "pixels: {}x{} at {} px/cell",
            width,
            height,
            layout.cell_size()
        ),
        format!(
            "stats:  {} branch points, {} spurs, {} loops{}",
            stats.branch_points,
            stats.spurs_carved,
            stats.cycles_opened,
            if stats.repaired { ", repaired" } else { "" }
        ),
    ];
    if let Some(difficulty) = difficulty {
        lines.push(format!(
            "time:   {} s ({})",
            difficulty.settings().time_limit_secs,
            difficulty
        ));
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use mz_core::MazeParams;

    #[test]
    fn test_parse_full_flags() {
        let args = Args::try_parse_from([
            "mazegen",
            "--difficulty",
            "hard",
            "--rows",
            "41",
            "--seed",
            "5",
            "--glyphs",
            "fancy",
            "--solve",
        ])
        .unwrap();
        assert_eq!(args.glyphs, GlyphStyle::Fancy);
        assert!(args.solve);

        let params = args.load_config().unwrap().resolve().unwrap();
        assert_eq!(params.rows, 41);
        assert_eq!(params.cols, 35);
        assert_eq!(params.complexity, 0.7);
        assert_eq!(params.seed, Some(5));
    }

    #[test]
    fn test_defaults() {
        let args = Args::try_parse_from(["mazegen"]).unwrap();
        assert_eq!(args.glyphs, GlyphStyle::Classic);
        assert_eq!(args.layout(), CellLayout::default());

        let params = args.load_config().unwrap().resolve().unwrap();
        assert_eq!((params.rows, params.cols), (25, 25));
        assert_eq!(params.seed, None);
    }

    #[test]
    fn test_rejects_bad_values() {
        assert!(Args::try_parse_from(["mazegen", "--glyphs", "neon"]).is_err());
        assert!(Args::try_parse_from(["mazegen", "--rows", "many"]).is_err());

        let args = Args::try_parse_from(["mazegen", "--difficulty", "impossible"]).unwrap();
        assert!(args.overrides().is_err());
    }

    #[test]
    fn test_cell_size_bounds() {
        let args = Args::try_parse_from(["mazegen", "--cell-size", "1024"]).unwrap();
        assert_eq!(args.layout().cell_size(), 1024);

        assert!(Args::try_parse_from(["mazegen", "--cell-size", "0"]).is_err());
        assert!(Args::try_parse_from(["mazegen", "--cell-size", "200000000"]).is_err());
    }

    #[test]
    fn test_small_grid_fails_to_resolve() {
        let args = Args::try_parse_from(["mazegen", "-r", "2", "-c", "2"]).unwrap();
        let err = args.load_config().unwrap().resolve().unwrap_err();
        assert!(err.to_string().contains("2"));
    }

    #[test]
    fn test_missing_config_file() {
        let args =
            Args::try_parse_from(["mazegen", "--config", "/nonexistent/maze.json"]).unwrap();
        assert!(args.load_config().is_err());
    }

    #[test]
    fn test_summary() {
        let maze = generate(&MazeParams::new(9, 11).with_seed(3)).unwrap();
        let lines = summary(&maze, CellLayout::new(10), Some(Difficulty::Easy));
        assert_eq!(lines[0], "size:   9x11");
        assert_eq!(lines[1], "seed:   3");
        assert!(lines[4].ends_with("steps"));
        assert_eq!(lines[5], "pixels: 110x90 at 10 px/cell");
        assert_eq!(lines.last().unwrap(), "time:   120 s (easy)");

        let lines = summary(&maze, CellLayout::default(), None);
        assert!(!lines.iter().any(|l| l.starts_with("time:")));
    }

    #[test]
    fn test_difficulty_table() {
        let table = difficulty_table();
        assert_eq!(table.len(), 5);
        assert!(table[0].starts_with("easy"));
        assert!(table[3].starts_with("very-hard"));
        assert!(table[4].ends_with("360 s"));
    }
}
