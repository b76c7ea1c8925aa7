//! Domain layer for the roster application.
//!
//! This module contains the user model and the repository abstraction.
//! It is independent of output DTOs and of any concrete repository.

pub mod entity;
pub mod error;
pub mod repository;
pub mod value_object;

pub use entity::{Team, User};
pub use error::ValueObjectError;
pub use repository::UserRepository;
pub use value_object::{Role, UserId, UserName};

#[cfg(test)]
pub use repository::MockUserRepository;
