// src/lib.rs

#[macro_use]
pub mod macros;

pub mod charts;
pub mod cli;
pub mod config;
pub mod core;
pub mod enrich;
pub mod error;
pub mod model;

pub mod file;
pub mod logging;
pub mod progress;
pub mod runner;
pub mod store;

pub use error::{PipelineError, Result};
