//! Repository trait definitions.
//!
//! The domain layer owns the abstraction; the infrastructure layer provides
//! implementations (dependency inversion).

#[cfg(test)]
use mockall::automock;

use super::{User, UserId};

/// User lookup capability.
///
/// A lookup never fails: a missing user is `None`, not an error.
#[cfg_attr(test, automock)]
pub trait UserRepository: Send + Sync {
    /// Find a user by ID
    fn find_by_id(&self, id: UserId) -> Option<User>;
}
