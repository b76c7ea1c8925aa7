//! Stub User Repository 実装
//!
//! ドメイン層が定義する UserRepository trait の具体的な実装。
//! 実データストアは持たず、固定値（フィクスチャ）を返します。
//!
//! - `StubUserRepository`: どの ID でも、その ID を持つ固定ユーザーを返す（ライブ構成用）
//! - `EmptyUserRepository`: どの ID でも見つからない（テスト構成用）

use crate::domain::{Role, User, UserId, UserName, UserRepository};

/// Default fixture user name
pub const DEFAULT_FIXTURE_NAME: &str = "orakaro";

/// 固定ユーザーを返す Repository 実装
///
/// 問い合わせた ID に、フィクスチャの名前とロールを組み合わせたユーザーを返します。
#[derive(Debug, Clone)]
pub struct StubUserRepository {
    /// フィクスチャのユーザー名
    name: UserName,
    /// フィクスチャのロール
    role: Option<Role>,
}

impl StubUserRepository {
    /// `orakaro` / `member` のフィクスチャで作成
    pub fn new() -> Self {
        Self {
            // The fixture name is a non-empty literal well under the length limit.
            name: UserName::new(DEFAULT_FIXTURE_NAME.to_string())
                .expect("fixture name is a valid UserName"),
            role: Some(Role::member()),
        }
    }

    /// 任意のフィクスチャで作成
    pub fn with_fixture(name: UserName, role: Option<Role>) -> Self {
        Self { name, role }
    }
}

impl Default for StubUserRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl UserRepository for StubUserRepository {
    fn find_by_id(&self, id: UserId) -> Option<User> {
        tracing::trace!(user_id = %id, "Stub repository lookup");
        Some(User::new(id, self.name.clone(), self.role.clone()))
    }
}

/// 常に見つからない Repository 実装
#[derive(Debug, Clone, Copy, Default)]
pub struct EmptyUserRepository;

impl EmptyUserRepository {
    /// 新しい EmptyUserRepository を作成
    pub fn new() -> Self {
        Self
    }
}

impl UserRepository for EmptyUserRepository {
    fn find_by_id(&self, id: UserId) -> Option<User> {
        tracing::trace!(user_id = %id, "Empty repository lookup");
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ========================================
    // テスト作業記録
    // ========================================
    // 【何をテストするか】
    // - StubUserRepository が問い合わせた ID で固定ユーザーを返すこと
    // - EmptyUserRepository が常に None を返すこと
    //
    // 【なぜこのテストが必要か】
    // - ライブ構成とテスト構成の差は Repository だけ
    // - 下流（UserService / TeamService）の結果はこの 2 つの振る舞いで決まる
    //
    // 【どのようなシナリオをテストするか】
    // 1. さまざまな ID での Stub の検索
    // 2. カスタムフィクスチャでの Stub の検索
    // 3. さまざまな ID での Empty の検索
    // ========================================

    const SAMPLE_IDS: [i64; 6] = [1, 0, -1, 42, i64::MAX, i64::MIN];

    #[test]
    fn test_stub_returns_fixture_for_every_id() {
        // テスト項目: どの ID でも、その ID を持つ orakaro / member が返される
        // given (前提条件):
        let repo = StubUserRepository::new();

        for raw_id in SAMPLE_IDS {
            // when (操作):
            let user = repo.find_by_id(UserId::new(raw_id));

            // then (期待する結果):
            let user = user.expect("stub always finds a user");
            assert_eq!(user.id().value(), raw_id);
            assert_eq!(user.name().as_str(), "orakaro");
            assert_eq!(user.role(), Some(&Role::member()));
        }
    }

    #[test]
    fn test_stub_with_custom_fixture() {
        // テスト項目: カスタムフィクスチャの名前とロールが使われる
        // given (前提条件):
        let repo = StubUserRepository::with_fixture(
            UserName::new("alice".to_string()).unwrap(),
            None,
        );

        // when (操作):
        let user = repo.find_by_id(UserId::new(7)).unwrap();

        // then (期待する結果):
        assert_eq!(user.id(), UserId::new(7));
        assert_eq!(user.name().as_str(), "alice");
        assert!(user.role().is_none());
    }

    #[test]
    fn test_empty_returns_none_for_every_id() {
        // テスト項目: どの ID でも None が返される
        // given (前提条件):
        let repo = EmptyUserRepository::new();

        for raw_id in SAMPLE_IDS {
            // when (操作):
            let user = repo.find_by_id(UserId::new(raw_id));

            // then (期待する結果):
            assert!(user.is_none());
        }
    }
}
