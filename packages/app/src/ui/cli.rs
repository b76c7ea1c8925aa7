//! Command-line arguments and the configuration derived from them.

use clap::{Parser, ValueEnum};
use tracing::level_filters::LevelFilter;

use crate::{
    domain::{Role, User, UserId, UserName},
    error::AppError,
    infrastructure::repository::stub::user::DEFAULT_FIXTURE_NAME,
};

use super::composition::Composition;

/// Which composition roots to run
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum CompositionArg {
    Live,
    Test,
    All,
}

/// How reports are printed
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One line per sample call
    Text,
    /// A single JSON array of reports
    Json,
}

/// Run the sample calls of the live and test composition roots
#[derive(Debug, Parser)]
#[command(name = "roster", version, about)]
pub struct Args {
    /// Composition root(s) to run
    #[arg(long, value_enum, default_value_t = CompositionArg::All)]
    pub composition: CompositionArg,

    /// ID of the sample leader
    #[arg(long, default_value_t = 1, allow_negative_numbers = true)]
    pub leader_id: i64,

    /// Name the live repository answers with
    #[arg(long, default_value = DEFAULT_FIXTURE_NAME)]
    pub fixture_name: String,

    /// Role the live repository answers with (promotion overwrites it)
    #[arg(long, default_value = Role::MEMBER)]
    pub fixture_role: String,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Log level used when RUST_LOG is not set (off, error, warn, info, debug, trace)
    #[arg(long, default_value_t = LevelFilter::INFO)]
    pub log_level: LevelFilter,
}

/// Validated run configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub compositions: Vec<Composition>,
    pub fixture_name: UserName,
    pub fixture_role: Role,
    /// Leader passed to `build_team`; always starts as a member
    pub leader: User,
    pub format: OutputFormat,
}

impl TryFrom<Args> for AppConfig {
    type Error = AppError;

    fn try_from(args: Args) -> Result<Self, Self::Error> {
        let compositions = match args.composition {
            CompositionArg::Live => vec![Composition::Live],
            CompositionArg::Test => vec![Composition::Test],
            CompositionArg::All => Composition::ALL.to_vec(),
        };
        let fixture_name = UserName::new(args.fixture_name)?;
        let fixture_role = Role::new(args.fixture_role)?;
        let leader = User::new(
            UserId::new(args.leader_id),
            fixture_name.clone(),
            Some(Role::member()),
        );

        Ok(Self {
            compositions,
            fixture_name,
            fixture_role,
            leader,
            format: args.format,
        })
    }
}
