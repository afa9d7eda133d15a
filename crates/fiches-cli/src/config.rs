//! Resolves the effective settings of a run.
//!
//! Precedence, highest first: command-line flags, `-S key=value` overrides, the TOML file
//! given with `-c`, built-in defaults.

mod builder;
mod defaults;
mod file;
mod models;

pub use builder::{ConfigOverrides, build_config};
pub use models::AppConfig;
