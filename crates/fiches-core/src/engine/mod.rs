//! # Engine Module
//!
//! Everything a worksheet generator needs besides the puzzle algorithms themselves.
//!
//! - **Configuration** ([`config`]) - validated generation parameters built with
//!   [`config::WorksheetConfigBuilder`]
//! - **Error Handling** ([`error`]) - the [`error::WorksheetError`] returned by every workflow
//! - **Progress Monitoring** ([`progress`]) - phase callbacks for front-ends
//! - **Randomness** ([`random`]) - seeded or entropy-backed generators
//! - **Documents** ([`document`]) - the layout model and its `.docx` renderer

pub mod config;
pub mod document;
pub mod error;
pub mod progress;
pub mod random;
