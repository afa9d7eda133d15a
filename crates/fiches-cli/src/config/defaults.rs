use fiches::core::puzzles::word_search::{DEFAULT_GRID_SIZE, DEFAULT_MAX_ATTEMPTS};
use fiches::engine::config::DEFAULT_DRILL_ROWS;

pub struct DefaultsConfig {
    pub grid_size: usize,
    pub max_attempts: usize,
    pub drill_rows: usize,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            grid_size: DEFAULT_GRID_SIZE,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            drill_rows: DEFAULT_DRILL_ROWS,
        }
    }
}
