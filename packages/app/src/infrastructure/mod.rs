//! Infrastructure layer.
//!
//! Concrete repositories and the DTOs used to present results.

pub mod dto;
pub mod repository;
