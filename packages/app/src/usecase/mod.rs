//! UseCase 層
//!
//! ビジネスロジックを実装するレイヤー。
//! UI 層（コンポジションルート）から呼び出され、Domain 層を操作します。

pub mod build_team;
pub mod promote_user;

pub use build_team::{BuildTeamUseCase, TeamService};
pub use promote_user::{PromoteUserUseCase, UserService};
