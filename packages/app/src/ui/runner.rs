//! Runs the sample calls of each selected composition root.

use std::io::{self, Write};

use crate::{
    domain::{Team, User},
    error::AppError,
};

use super::{
    cli::{AppConfig, Args},
    composition::{Application, Composition},
    presenter,
};

/// Results of one composition root's sample calls
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompositionReport {
    pub composition: Composition,
    /// `None` when this composition does not call `promote`
    pub promoted: Option<Option<User>>,
    pub team: Team,
}

/// Build the application for a composition.
pub fn wire(composition: Composition, config: &AppConfig) -> Application {
    match composition {
        Composition::Live => Application::live_with_fixture(
            config.fixture_name.clone(),
            config.fixture_role.clone(),
        ),
        Composition::Test => Application::test(),
    }
}

/// Exercise one wired application.
///
/// The live root only builds a team. The test root also calls `promote`
/// directly so the miss is visible before it reaches the team.
pub fn exercise(composition: Composition, app: &Application, leader: &User) -> CompositionReport {
    let promoted = match composition {
        Composition::Live => None,
        Composition::Test => Some(app.user_service.promote(leader.id())),
    };
    let team = app.team_service.build_team(leader);

    CompositionReport {
        composition,
        promoted,
        team,
    }
}

/// Wire and exercise every composition in the configuration, in order.
pub fn execute(config: &AppConfig) -> Vec<CompositionReport> {
    config
        .compositions
        .iter()
        .map(|&composition| {
            tracing::info!(%composition, leader_id = %config.leader.id(), "Running composition");
            let app = wire(composition, config);
            exercise(composition, &app, &config.leader)
        })
        .collect()
}

/// Run the configured compositions and print their reports to `out`.
pub fn run<W: Write>(config: &AppConfig, out: &mut W) -> Result<(), AppError> {
    let reports = execute(config);
    presenter::write_reports(&reports, config.format, out)?;
    out.flush()?;
    Ok(())
}

/// Entry point for the binary: validate arguments, then print to stdout.
pub fn run_cli(args: Args) -> Result<(), AppError> {
    let config = AppConfig::try_from(args)?;
    tracing::debug!(?config, "Configuration loaded");

    let stdout = io::stdout();
    let mut out = stdout.lock();
    run(&config, &mut out)
}
