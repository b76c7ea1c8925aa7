//! UseCase: ユーザー昇格処理
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - PromoteUserUseCase::promote() メソッド
//! - Repository で見つかったユーザーのロールを leader に書き換える処理
//!
//! ### なぜこのテストが必要か
//! - ビジネスロジックの検証：ID と名前は変えずにロールだけを書き換える
//! - ユーザーが見つからない場合は昇格しない（エラーではなく None）
//! - Repository には副作用を与えない（検索は 1 回だけ）
//!
//! ### どのような状況を想定しているか
//! - 正常系：member のユーザーを昇格
//! - エッジケース：ロールなしのユーザー、既に leader のユーザー
//! - 異常系：存在しないユーザーの昇格

use std::sync::Arc;

#[cfg(test)]
use mockall::automock;

use crate::domain::{Role, User, UserId, UserRepository};

/// ユーザー昇格サービス
#[cfg_attr(test, automock)]
pub trait UserService: Send + Sync {
    /// 指定したユーザーを leader に昇格させる
    ///
    /// ユーザーが見つからない場合は `None` を返す。
    fn promote(&self, assignee_id: UserId) -> Option<User>;
}

/// ユーザー昇格のユースケース
pub struct PromoteUserUseCase {
    /// Repository（データアクセス層の抽象化）
    repository: Arc<dyn UserRepository>,
}

impl PromoteUserUseCase {
    /// 新しい PromoteUserUseCase を作成
    pub fn new(repository: Arc<dyn UserRepository>) -> Self {
        Self { repository }
    }
}

impl UserService for PromoteUserUseCase {
    /// ユーザー昇格を実行
    ///
    /// # Arguments
    ///
    /// * `assignee_id` - 昇格させるユーザーの ID
    ///
    /// # Returns
    ///
    /// * `Some(User)` - ロールを leader に書き換えたユーザーのコピー
    /// * `None` - ユーザーが見つからなかった
    fn promote(&self, assignee_id: UserId) -> Option<User> {
        // 1. Repository からユーザーを取得（見つからなければ昇格しない）
        let Some(assignee) = self.repository.find_by_id(assignee_id) else {
            tracing::debug!(user_id = %assignee_id, "User not found, skipping promotion");
            return None;
        };

        // 2. コピーのロールを書き換える（Repository 側は変更しない）
        let promoted = assignee.with_role(Role::leader());
        tracing::debug!(user_id = %assignee_id, name = %promoted.name(), "Promoted user to leader");

        Some(promoted)
    }
}
