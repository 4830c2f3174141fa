//! Error types
//!
//! Generation itself can only fail on bad dimensions. Every other irregularity
//! is repaired inside the pipeline.

use thiserror::Error;

/// Errors reported by maze generation
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MazeError {
    #[error("Invalid maze dimensions {rows}x{cols}: rows and columns must both be at least {min}")]
    InvalidDimensions { rows: usize, cols: usize, min: usize },
}

/// Errors raised while assembling generation parameters
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Unknown difficulty '{0}'")]
    UnknownDifficulty(String),

    #[error(transparent)]
    Maze(#[from] MazeError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_dimensions_display() {
        let err = MazeError::InvalidDimensions {
            rows: 2,
            cols: 2,
            min: 3,
        };
        let msg = err.to_string();
        assert!(msg.contains("2x2"));
        assert!(msg.contains("at least 3"));
    }

    #[test]
    fn test_config_error_wraps_maze_error() {
        let err: ConfigError = MazeError::InvalidDimensions {
            rows: 1,
            cols: 9,
            min: 3,
        }
        .into();
        assert!(matches!(err, ConfigError::Maze(_)));
        assert!(err.to_string().contains("1x9"));
    }
}
