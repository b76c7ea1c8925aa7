//! Domain layer error definitions.

use thiserror::Error;

/// Errors related to Value Objects validation
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValueObjectError {
    /// UserName validation error
    #[error("UserName cannot be empty")]
    UserNameEmpty,

    /// UserName too long error
    #[error("UserName cannot exceed {max} bytes (got {actual})")]
    UserNameTooLong { max: usize, actual: usize },

    /// Role validation error
    #[error("Role cannot be empty")]
    RoleEmpty,
}
