//! Composition roots.
//!
//! This is the only place that names concrete implementations. Everything
//! below works against the `UserRepository` / `UserService` / `TeamService`
//! traits.

use std::{fmt, sync::Arc};

use crate::{
    domain::{Role, UserName, UserRepository},
    infrastructure::repository::{EmptyUserRepository, StubUserRepository},
    usecase::{BuildTeamUseCase, PromoteUserUseCase, TeamService, UserService},
};

/// The available composition roots
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Composition {
    /// Wired to the fixture-backed repository that finds every user
    Live,
    /// Wired to the repository that finds nobody
    Test,
}

impl Composition {
    /// All compositions, in the order they are run
    pub const ALL: [Composition; 2] = [Composition::Live, Composition::Test];

    /// Name used in output
    pub fn name(&self) -> &'static str {
        match self {
            Composition::Live => "live",
            Composition::Test => "test",
        }
    }
}

impl fmt::Display for Composition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A wired service graph: Team -> User -> Repository
#[derive(Clone)]
pub struct Application {
    /// UserService（昇格処理）
    pub user_service: Arc<dyn UserService>,
    /// TeamService（チーム編成、user_service を共有）
    pub team_service: Arc<dyn TeamService>,
}

impl Application {
    /// Wire the service graph on top of the given repository.
    pub fn from_repository(repository: Arc<dyn UserRepository>) -> Self {
        let user_service: Arc<dyn UserService> = Arc::new(PromoteUserUseCase::new(repository));
        let team_service = Arc::new(BuildTeamUseCase::new(Arc::clone(&user_service)));
        Self {
            user_service,
            team_service,
        }
    }

    /// Live wiring with the default `orakaro` / `member` fixture.
    pub fn live() -> Self {
        Self::from_repository(Arc::new(StubUserRepository::new()))
    }

    /// Live wiring whose repository answers with the given fixture.
    pub fn live_with_fixture(fixture_name: UserName, fixture_role: Role) -> Self {
        Self::from_repository(Arc::new(StubUserRepository::with_fixture(
            fixture_name,
            Some(fixture_role),
        )))
    }

    /// Test wiring: every lookup misses.
    pub fn test() -> Self {
        Self::from_repository(Arc::new(EmptyUserRepository::new()))
    }
}

impl fmt::Debug for Application {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Application").finish_non_exhaustive()
    }
}
