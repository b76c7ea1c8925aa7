//! Rendering of composition reports.

use std::io::Write;

use crate::{
    domain::{Team, User},
    error::AppError,
    infrastructure::dto::{CompositionReportDto, UserDto, team_to_dto},
};

use super::{cli::OutputFormat, runner::CompositionReport};

/// Placeholder printed for an empty slot or a missed promotion
const ABSENT: &str = "none";

fn format_slot(slot: Option<&User>) -> String {
    slot.map_or_else(|| ABSENT.to_string(), User::to_string)
}

/// Render a team as `[User(...), none]`.
pub fn format_team(team: &Team) -> String {
    let slots: Vec<String> = team.iter().map(|slot| format_slot(slot.as_ref())).collect();
    format!("[{}]", slots.join(", "))
}

/// Text lines for one report: `promote` first (if it ran), then `buildTeam`.
pub fn text_lines(report: &CompositionReport) -> Vec<String> {
    let mut lines = Vec::with_capacity(2);
    if let Some(promoted) = &report.promoted {
        lines.push(format!(
            "[{}] promote -> {}",
            report.composition,
            format_slot(promoted.as_ref())
        ));
    }
    lines.push(format!(
        "[{}] buildTeam -> {}",
        report.composition,
        format_team(&report.team)
    ));
    lines
}

impl From<&CompositionReport> for CompositionReportDto {
    fn from(report: &CompositionReport) -> Self {
        Self {
            composition: report.composition.name().to_string(),
            promoted: report
                .promoted
                .as_ref()
                .map(|promoted| promoted.as_ref().map(UserDto::from)),
            team: team_to_dto(&report.team),
        }
    }
}

/// Render all reports as a pretty-printed JSON array.
pub fn to_json(reports: &[CompositionReport]) -> Result<String, AppError> {
    let dtos: Vec<CompositionReportDto> = reports.iter().map(CompositionReportDto::from).collect();
    Ok(serde_json::to_string_pretty(&dtos)?)
}

/// Write all reports in the requested format.
pub fn write_reports<W: Write>(
    reports: &[CompositionReport],
    format: OutputFormat,
    out: &mut W,
) -> Result<(), AppError> {
    match format {
        OutputFormat::Text => {
            for line in reports.iter().flat_map(text_lines) {
                writeln!(out, "{}", line)?;
            }
        }
        OutputFormat::Json => {
            writeln!(out, "{}", to_json(reports)?)?;
        }
    }
    Ok(())
}
