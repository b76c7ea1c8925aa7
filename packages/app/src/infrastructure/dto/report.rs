//! Output DTOs for composition reports.

use serde::Serialize;

use crate::domain::{Team, User};

/// User as printed in JSON output
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserDto {
    pub id: i64,
    pub name: String,
    pub role: Option<String>,
}

impl From<&User> for UserDto {
    fn from(user: &User) -> Self {
        Self {
            id: user.id().value(),
            name: user.name().as_str().to_string(),
            role: user.role().map(|role| role.as_str().to_string()),
        }
    }
}

/// Results of one composition root's sample calls
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompositionReportDto {
    /// Composition name (`live` / `test`)
    pub composition: String,
    /// `None` when the composition does not run `promote`;
    /// `Some(None)` when it ran and found nobody (serialized as `null`)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub promoted: Option<Option<UserDto>>,
    pub team: Vec<Option<UserDto>>,
}

/// Convert a team into its DTO form, keeping empty slots
pub fn team_to_dto(team: &Team) -> Vec<Option<UserDto>> {
    team.iter().map(|slot| slot.as_ref().map(UserDto::from)).collect()
}
