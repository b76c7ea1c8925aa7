//! Command-line front end and composition roots.

pub mod cli;
pub mod composition;
pub mod presenter;
pub mod runner;

pub use cli::{AppConfig, Args, OutputFormat};
pub use composition::{Application, Composition};
pub use runner::{CompositionReport, run, run_cli};
