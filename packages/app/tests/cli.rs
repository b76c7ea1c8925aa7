//! Integration tests for the `roster` binary.

mod fixtures;
use fixtures::{run_roster, stdout_of};

#[test]
fn test_default_run_prints_both_compositions() {
    // テスト項目: 引数なしで live と test の結果が出力される
    // when (操作):
    let output = run_roster(&[]);

    // then (期待する結果):
    assert!(output.status.success());
    assert_eq!(
        stdout_of(&output),
        "[live] buildTeam -> [User(id: 1, name: \"orakaro\", role: \"leader\")]\n\
         [test] promote -> none\n\
         [test] buildTeam -> [none]\n"
    );
}

#[test]
fn test_live_only_with_custom_leader() {
    // テスト項目: live のみ、リーダー ID とフィクスチャ名を指定して実行できる
    // when (操作):
    let output = run_roster(&[
        "--composition",
        "live",
        "--leader-id",
        "7",
        "--fixture-name",
        "alice",
    ]);

    // then (期待する結果):
    assert!(output.status.success());
    assert_eq!(
        stdout_of(&output),
        "[live] buildTeam -> [User(id: 7, name: \"alice\", role: \"leader\")]\n"
    );
}

#[test]
fn test_json_output() {
    // テスト項目: JSON 形式で出力できる
    // when (操作):
    let output = run_roster(&["--format", "json"]);

    // then (期待する結果):
    assert!(output.status.success());
    let body: serde_json::Value =
        serde_json::from_str(&stdout_of(&output)).expect("Failed to parse JSON");
    assert_eq!(
        body,
        serde_json::json!([
            {
                "composition": "live",
                "team": [{ "id": 1, "name": "orakaro", "role": "leader" }]
            },
            {
                "composition": "test",
                "promoted": null,
                "team": [null]
            }
        ])
    );
}

#[test]
fn test_invalid_fixture_name_fails() {
    // テスト項目: 空のフィクスチャ名では終了コード 1 で失敗し、何も出力しない
    // when (操作):
    let output = run_roster(&["--fixture-name", ""]);

    // then (期待する結果):
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
}

#[test]
fn test_unknown_flag_fails() {
    // テスト項目: 未知のフラグは clap のエラーになる
    // when (操作):
    let output = run_roster(&["--no-such-flag"]);

    // then (期待する結果):
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
}

#[test]
fn test_invalid_log_level_fails() {
    // テスト項目: 未知のログレベルは clap のエラー（終了コード 2）になり、何も出力しない
    // when (操作):
    let output = run_roster(&["--log-level", "verbose"]);

    // then (期待する結果):
    assert_eq!(output.status.code(), Some(2));
    assert!(output.stdout.is_empty());
}

#[test]
fn test_empty_fixture_role_fails() {
    // テスト項目: 空のフィクスチャロールでは終了コード 1 で失敗する
    // when (操作):
    let output = run_roster(&["--fixture-role", ""]);

    // then (期待する結果):
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
}
