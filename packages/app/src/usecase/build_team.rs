//! UseCase: チーム編成処理
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - BuildTeamUseCase::build_team() メソッド
//! - リーダーを UserService 経由で昇格させ、チームを構築する処理
//!
//! ### なぜこのテストが必要か
//! - チームは常に 1 枠（昇格したリーダー）であることを保証
//! - 昇格に失敗した場合も枠は残り、中身が None になることを確認
//! - 渡されたリーダーの ID で昇格が行われることを確認
//!
//! ### どのような状況を想定しているか
//! - 正常系：リーダーの昇格に成功
//! - 異常系：リーダーが見つからず昇格に失敗

use std::sync::Arc;

#[cfg(test)]
use mockall::automock;

use crate::domain::{Team, User};

use super::promote_user::UserService;

/// チーム編成サービス
#[cfg_attr(test, automock)]
pub trait TeamService: Send + Sync {
    /// リーダーを昇格させてチームを編成する
    fn build_team(&self, leader: &User) -> Team;
}

/// チーム編成のユースケース
pub struct BuildTeamUseCase {
    /// UserService（昇格処理の抽象化）
    user_service: Arc<dyn UserService>,
}

impl BuildTeamUseCase {
    /// 新しい BuildTeamUseCase を作成
    pub fn new(user_service: Arc<dyn UserService>) -> Self {
        Self { user_service }
    }
}

impl TeamService for BuildTeamUseCase {
    /// チーム編成を実行
    ///
    /// # Arguments
    ///
    /// * `leader` - リーダーにするユーザー（ID だけを使う）
    ///
    /// # Returns
    ///
    /// 1 枠だけのチーム。昇格に失敗した場合、その枠は `None`
    fn build_team(&self, leader: &User) -> Team {
        let promoted = self.user_service.promote(leader.id());
        tracing::debug!(
            leader_id = %leader.id(),
            promoted = promoted.is_some(),
            "Built team"
        );
        vec![promoted]
    }
}
