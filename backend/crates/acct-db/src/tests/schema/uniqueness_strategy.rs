use crate::{
    DbError, EngineCapabilities, ExpressionIndex, ShadowColumn, SqliteVersion, StrategyKind,
    UniquenessStrategy, select_strategy,
};

use acct_core::EmailIndexPreference;

use googletest::prelude::*;

fn modern() -> EngineCapabilities {
    EngineCapabilities::new(SqliteVersion::new(3, 46, 0))
}

fn ancient() -> EngineCapabilities {
    EngineCapabilities::new(SqliteVersion::new(3, 8, 7))
}

#[test]
fn given_auto_on_modern_engine_when_selecting_then_expression_index() {
    let kind = select_strategy(EmailIndexPreference::Auto, &modern()).unwrap();

    assert_that!(kind, eq(StrategyKind::ExpressionIndex));
}

#[test]
fn given_auto_on_old_engine_when_selecting_then_falls_back_to_shadow_column() {
    let kind = select_strategy(EmailIndexPreference::Auto, &ancient()).unwrap();

    assert_that!(kind, eq(StrategyKind::ShadowColumn));
}

#[test]
fn given_expression_preference_on_old_engine_when_selecting_then_unsupported() {
    let result = select_strategy(EmailIndexPreference::ExpressionIndex, &ancient());

    match result {
        Err(DbError::ConstraintViolationUnsupported { engine_version, .. }) => {
            assert_that!(engine_version, eq("3.8.7"));
        }
        other => panic!("expected ConstraintViolationUnsupported, got {other:?}"),
    }
}

#[test]
fn given_shadow_preference_on_any_engine_when_selecting_then_shadow_column() {
    for caps in [modern(), ancient()] {
        let kind = select_strategy(EmailIndexPreference::ShadowColumn, &caps).unwrap();
        assert_that!(kind, eq(StrategyKind::ShadowColumn));
    }
}

#[test]
fn given_expression_strategy_then_index_is_on_lower_email() {
    let sql = ExpressionIndex.create_index_sql();

    assert_that!(
        sql,
        eq("CREATE UNIQUE INDEX user_email_unique_index ON users (lower(email))")
    );
    assert_that!(ExpressionIndex.create_table_sql(), not(contains_substring("email_normalized")));
}

#[test]
fn given_shadow_strategy_then_table_has_normalized_column_and_plain_index() {
    let table = ShadowColumn.create_table_sql();

    assert_that!(table, contains_substring("email_normalized TEXT NOT NULL,"));
    assert_that!(
        ShadowColumn.create_index_sql(),
        eq("CREATE UNIQUE INDEX user_email_unique_index ON users (email_normalized)")
    );
}

#[test]
fn given_any_strategy_then_table_defines_all_columns() {
    for kind in [StrategyKind::ExpressionIndex, StrategyKind::ShadowColumn] {
        let table = kind.strategy().create_table_sql();

        assert_that!(
            table,
            contains_substring("id INTEGER PRIMARY KEY AUTOINCREMENT NOT NULL")
        );
        assert_that!(table, contains_substring("email TEXT NOT NULL"));
        assert_that!(table, contains_substring("password_hash TEXT NOT NULL"));
        assert_that!(table, contains_substring("name TEXT NOT NULL"));
        assert_that!(table, contains_substring("created_at TIMESTAMP NOT NULL DEFAULT"));
        assert_that!(table, contains_substring("updated_at TIMESTAMP NOT NULL DEFAULT"));
        assert_that!(kind.strategy().kind(), eq(kind));
    }
}
