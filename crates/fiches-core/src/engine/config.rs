use crate::core::puzzles::word_search::{DEFAULT_GRID_SIZE, DEFAULT_MAX_ATTEMPTS};
use thiserror::Error;

pub const DEFAULT_DRILL_ROWS: usize = 20;
pub const MAX_DRILL_ROWS: usize = 100;
pub const MAX_GRID_SIZE: usize = 100;

#[derive(Debug, Error, PartialEq, Clone)]
pub enum ConfigError {
    #[error("Invalid value for '{parameter}': {reason}")]
    InvalidParameter {
        parameter: &'static str,
        reason: String,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct WordSearchConfig {
    pub grid_size: usize,
    pub max_attempts: usize,
}

impl Default for WordSearchConfig {
    fn default() -> Self {
        Self {
            grid_size: DEFAULT_GRID_SIZE,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }
}

/// Overrides for the text size and row height a worksheet uses by default.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LayoutConfig {
    pub font_size_pt: Option<f32>,
    pub row_height_cm: Option<f32>,
}

impl LayoutConfig {
    pub fn font_size_or(&self, default: f32) -> f32 {
        self.font_size_pt.unwrap_or(default)
    }

    pub fn row_height_or(&self, default: f32) -> f32 {
        self.row_height_cm.unwrap_or(default)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct WorksheetConfig {
    pub word_search: WordSearchConfig,
    pub layout: LayoutConfig,
    pub drill_rows: usize,
    /// Seed for every random choice; `None` draws one from the OS.
    pub seed: Option<u64>,
}

impl Default for WorksheetConfig {
    fn default() -> Self {
        Self {
            word_search: WordSearchConfig::default(),
            layout: LayoutConfig::default(),
            drill_rows: DEFAULT_DRILL_ROWS,
            seed: None,
        }
    }
}

#[derive(Default)]
pub struct WorksheetConfigBuilder {
    grid_size: Option<usize>,
    max_attempts: Option<usize>,
    font_size_pt: Option<f32>,
    row_height_cm: Option<f32>,
    drill_rows: Option<usize>,
    seed: Option<u64>,
}

impl WorksheetConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn grid_size(mut self, size: usize) -> Self {
        self.grid_size = Some(size);
        self
    }
    pub fn max_attempts(mut self, attempts: usize) -> Self {
        self.max_attempts = Some(attempts);
        self
    }
    pub fn font_size_pt(mut self, size: f32) -> Self {
        self.font_size_pt = Some(size);
        self
    }
    pub fn row_height_cm(mut self, height: f32) -> Self {
        self.row_height_cm = Some(height);
        self
    }
    pub fn drill_rows(mut self, rows: usize) -> Self {
        self.drill_rows = Some(rows);
        self
    }
    pub fn seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    pub fn build(self) -> Result<WorksheetConfig, ConfigError> {
        let grid_size = self.grid_size.unwrap_or(DEFAULT_GRID_SIZE);
        if !(2..=MAX_GRID_SIZE).contains(&grid_size) {
            return Err(invalid(
                "grid_size",
                format!("must be between 2 and {MAX_GRID_SIZE}, got {grid_size}"),
            ));
        }

        let max_attempts = self.max_attempts.unwrap_or(DEFAULT_MAX_ATTEMPTS);
        if max_attempts == 0 {
            return Err(invalid("max_attempts", "must be at least 1".to_string()));
        }

        if let Some(size) = self.font_size_pt {
            if !(size.is_finite() && size > 0.0) {
                return Err(invalid("font_size_pt", format!("must be positive, got {size}")));
            }
        }
        if let Some(height) = self.row_height_cm {
            if !(height.is_finite() && height > 0.0) {
                return Err(invalid("row_height_cm", format!("must be positive, got {height}")));
            }
        }

        let drill_rows = self.drill_rows.unwrap_or(DEFAULT_DRILL_ROWS);
        if !(1..=MAX_DRILL_ROWS).contains(&drill_rows) {
            return Err(invalid(
                "drill_rows",
                format!("must be between 1 and {MAX_DRILL_ROWS}, got {drill_rows}"),
            ));
        }

        Ok(WorksheetConfig {
            word_search: WordSearchConfig {
                grid_size,
                max_attempts,
            },
            layout: LayoutConfig {
                font_size_pt: self.font_size_pt,
                row_height_cm: self.row_height_cm,
            },
            drill_rows,
            seed: self.seed,
        })
    }
}

fn invalid(parameter: &'static str, reason: String) -> ConfigError {
    ConfigError::InvalidParameter { parameter, reason }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_builder_yields_defaults() {
        let config = WorksheetConfigBuilder::new().build().unwrap();
        assert_eq!(config, WorksheetConfig::default());
        assert_eq!(config.word_search.grid_size, 20);
        assert_eq!(config.word_search.max_attempts, 200);
    }

    #[test]
    fn builder_sets_every_field() {
        let config = WorksheetConfigBuilder::new()
            .grid_size(12)
            .max_attempts(50)
            .font_size_pt(14.0)
            .row_height_cm(1.5)
            .drill_rows(30)
            .seed(Some(7))
            .build()
            .unwrap();

        assert_eq!(config.word_search.grid_size, 12);
        assert_eq!(config.word_search.max_attempts, 50);
        assert_eq!(config.layout.font_size_or(12.0), 14.0);
        assert_eq!(config.layout.row_height_or(1.0), 1.5);
        assert_eq!(config.drill_rows, 30);
        assert_eq!(config.seed, Some(7));
    }

    #[test]
    fn grid_size_bounds_are_inclusive() {
        for size in [2, MAX_GRID_SIZE] {
            let config = WorksheetConfigBuilder::new().grid_size(size).build().unwrap();
            assert_eq!(config.word_search.grid_size, size);
        }
        assert!(WorksheetConfigBuilder::new()
            .grid_size(MAX_GRID_SIZE + 1)
            .build()
            .is_err());
    }

    #[test]
    fn rejects_out_of_range_values() {
        let cases = [
            (WorksheetConfigBuilder::new().grid_size(1), "grid_size"),
            (WorksheetConfigBuilder::new().grid_size(100_000), "grid_size"),
            (WorksheetConfigBuilder::new().max_attempts(0), "max_attempts"),
            (WorksheetConfigBuilder::new().font_size_pt(0.0), "font_size_pt"),
            (WorksheetConfigBuilder::new().row_height_cm(-1.0), "row_height_cm"),
            (WorksheetConfigBuilder::new().drill_rows(0), "drill_rows"),
            (WorksheetConfigBuilder::new().drill_rows(101), "drill_rows"),
        ];
        for (builder, expected) in cases {
            match builder.build() {
                Err(ConfigError::InvalidParameter { parameter, .. }) => {
                    assert_eq!(parameter, expected)
                }
                other => panic!("expected error for {expected}, got {other:?}"),
            }
        }
    }
}
