//! Generation parameters and difficulty presets
//!
//! Parameters are assembled in layers: a difficulty preset, then an optional
//! JSON config file, then explicit overrides (usually command line flags).

use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

use crate::error::{ConfigError, MazeError};
use crate::{DEFAULT_COMPLEXITY, DEFAULT_DENSITY, MIN_DIMENSION};

/// Inputs to one generation run
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MazeParams {
    pub rows: usize,
    pub cols: usize,
    #[serde(default = "default_complexity")]
    pub complexity: f64,
    #[serde(default = "default_density")]
    pub density: f64,
    #[serde(default)]
    pub seed: Option<u64>,
}

fn default_complexity() -> f64 {
    DEFAULT_COMPLEXITY
}

fn default_density() -> f64 {
    DEFAULT_DENSITY
}

impl MazeParams {
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            complexity: DEFAULT_COMPLEXITY,
            density: DEFAULT_DENSITY,
            seed: None,
        }
    }

    pub fn with_complexity(mut self, complexity: f64) -> Self {
        self.complexity = complexity;
        self
    }

    pub fn with_density(mut self, density: f64) -> Self {
        self.density = density;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Reject dimensions below the minimum
    pub fn validate(&self) -> Result<(), MazeError> {
        if self.rows < MIN_DIMENSION || self.cols < MIN_DIMENSION {
            return Err(MazeError::InvalidDimensions {
                rows: self.rows,
                cols: self.cols,
                min: MIN_DIMENSION,
            });
        }
        Ok(())
    }

    /// Complexity clamped to `[0, 1]`
    pub fn effective_complexity(&self) -> f64 {
        unit_interval("complexity", self.complexity, DEFAULT_COMPLEXITY)
    }

    /// Density clamped to `[0, 1]`
    pub fn effective_density(&self) -> f64 {
        unit_interval("density", self.density, DEFAULT_DENSITY)
    }
}

impl Default for MazeParams {
    fn default() -> Self {
        Difficulty::default().params()
    }
}

fn unit_interval(name: &str, value: f64, fallback: f64) -> f64 {
    if !value.is_finite() {
        log::warn!("{} {} is not finite; using {}", name, value, fallback);
        return fallback;
    }
    let clamped = value.clamp(0.0, 1.0);
    if clamped != value {
        log::warn!("{} {} outside [0, 1]; clamped to {}", name, value, clamped);
    }
    clamped
}

/// Preset difficulty levels
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum Difficulty {
    Easy,
    #[default]
    Normal,
    Hard,
    VeryHard,
    Extreme,
}

/// Size, tuning factors and time allowance of a difficulty level
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DifficultySettings {
    pub rows: usize,
    pub cols: usize,
    pub complexity: f64,
    pub density: f64,
    pub time_limit_secs: u32,
}

impl Difficulty {
    pub const fn settings(&self) -> DifficultySettings {
        let (size, factor, time_limit_secs) = match self {
            Difficulty::Easy => (15, 0.5, 120),
            Difficulty::Normal => (25, 0.6, 180),
            Difficulty::Hard => (35, 0.7, 240),
            Difficulty::VeryHard => (45, 0.8, 300),
            Difficulty::Extreme => (55, 0.9, 360),
        };
        DifficultySettings {
            rows: size,
            cols: size,
            complexity: factor,
            density: factor,
            time_limit_secs,
        }
    }

    /// Generation parameters for this level, without a seed
    pub fn params(&self) -> MazeParams {
        let s = self.settings();
        MazeParams::new(s.rows, s.cols)
            .with_complexity(s.complexity)
            .with_density(s.density)
    }
}

/// Partial configuration; any field may be left out
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MazeConfig {
    pub difficulty: Option<Difficulty>,
    pub rows: Option<usize>,
    pub cols: Option<usize>,
    pub complexity: Option<f64>,
    pub density: Option<f64>,
    pub seed: Option<u64>,
}

impl MazeConfig {
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    /// Layer `overrides` on top of `self`; fields set in `overrides` win
    pub fn merge(self, overrides: MazeConfig) -> MazeConfig {
        MazeConfig {
            difficulty: overrides.difficulty.or(self.difficulty),
            rows: overrides.rows.or(self.rows),
            cols: overrides.cols.or(self.cols),
            complexity: overrides.complexity.or(self.complexity),
            density: overrides.density.or(self.density),
            seed: overrides.seed.or(self.seed),
        }
    }

    /// Fill gaps from the difficulty preset (normal if unset) and validate
    pub fn resolve(&self) -> Result<MazeParams, ConfigError> {
        let preset = self.difficulty.unwrap_or_default().settings();
        let params = MazeParams {
            rows: self.rows.unwrap_or(preset.rows),
            cols: self.cols.unwrap_or(preset.cols),
            complexity: self.complexity.unwrap_or(preset.complexity),
            density: self.density.unwrap_or(preset.density),
            seed: self.seed,
        };
        params.validate()?;
        Ok(params)
    }
}

/// Parse a difficulty name such as `very-hard`
pub fn parse_difficulty(name: &str) -> Result<Difficulty, ConfigError> {
    Difficulty::from_str(name.trim().to_ascii_lowercase().as_str())
        .map_err(|_| ConfigError::UnknownDifficulty(name.to_string()))
}
