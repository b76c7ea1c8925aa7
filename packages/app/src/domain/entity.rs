//! Core domain models for the roster application.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::value_object::{Role, UserId, UserName};

/// A team: ordered slots, each holding a user or nothing when the lookup
/// behind that slot missed.
pub type Team = Vec<Option<User>>;

/// Represents a user
///
/// `id` and `name` are fixed at construction. Only the role can change, and
/// it does so by producing a new value (see [`User::with_role`]).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    id: UserId,
    name: UserName,
    role: Option<Role>,
}

impl User {
    /// Create a new user
    pub fn new(id: UserId, name: UserName, role: Option<Role>) -> Self {
        Self { id, name, role }
    }

    /// User identifier
    pub fn id(&self) -> UserId {
        self.id
    }

    /// Display name
    pub fn name(&self) -> &UserName {
        &self.name
    }

    /// Current role, if any
    pub fn role(&self) -> Option<&Role> {
        self.role.as_ref()
    }

    /// Return a copy of this user with the role overwritten
    pub fn with_role(self, role: Role) -> Self {
        Self {
            role: Some(role),
            ..self
        }
    }
}

impl fmt::Display for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "User(id: {}, name: \"{}\", role: ", self.id, self.name)?;
        match &self.role {
            Some(role) => write!(f, "\"{}\")", role),
            None => write!(f, "none)"),
        }
    }
}
