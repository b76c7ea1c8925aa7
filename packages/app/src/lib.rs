//! Layered user and team services wired through constructor injection.
//!
//! A `UserRepository` resolves users, a `UserService` promotes them and a
//! `TeamService` builds a team around a promoted leader. Each layer only
//! sees the trait of the layer below; the composition roots in [`ui`]
//! choose the concrete implementations.

pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod ui;
pub mod usecase;

// Re-export entry points
pub use ui::{Application, Composition, run, run_cli};
