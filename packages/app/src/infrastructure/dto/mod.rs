//! Data transfer objects.

pub mod report;

pub use report::{CompositionReportDto, UserDto, team_to_dto};
