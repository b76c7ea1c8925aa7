//! Stub (fixture-backed) repository implementations.

pub mod user;

pub use user::{EmptyUserRepository, StubUserRepository};
