#![allow(dead_code)]

//! Behaviour every `UserStore` must share, run against each implementation.

use super::{TimeWindow, create_test_user};

use acct_core::{NewUserRecord, UserChanges};
use acct_db::{DbError, UserStore};

use chrono::{Duration, TimeZone, Utc};
use googletest::prelude::*;

pub async fn registration_scenario(store: &dyn UserStore) {
    let first = store
        .insert(&NewUserRecord::new("User@Example.com", "h1", "A"))
        .await
        .unwrap();
    assert_that!(first.id, eq(1));
    assert_that!(first.email, eq("User@Example.com"));

    let duplicate = store
        .insert(&NewUserRecord::new("user@example.com", "h2", "B"))
        .await;
    assert!(matches!(
        duplicate,
        Err(DbError::ConstraintViolation { .. })
    ));

    let second = store
        .insert(&NewUserRecord::new("user2@example.com", "h3", "C"))
        .await
        .unwrap();
    assert_that!(second.id, eq(2));
}

pub async fn case_variants_are_rejected(store: &dyn UserStore, email: &str, variant: &str) {
    store.insert(&create_test_user(email)).await.unwrap();

    let result = store.insert(&create_test_user(variant)).await;
    assert!(
        matches!(result, Err(DbError::ConstraintViolation { .. })),
        "{variant:?} should collide with {email:?}, got {result:?}"
    );
}

pub async fn distinct_emails_both_succeed(store: &dyn UserStore) {
    let a = store.insert(&create_test_user("a@x.com")).await.unwrap();
    let b = store.insert(&create_test_user("ab@x.com")).await.unwrap();

    assert_that!(a.id, not(eq(b.id)));
}

pub async fn non_ascii_letters_are_not_folded(store: &dyn UserStore) {
    store.insert(&create_test_user("ÉCOLE@x.com")).await.unwrap();

    // Only ASCII letters fold, so these are different identities
    let result = store.insert(&create_test_user("école@x.com")).await;
    assert_that!(result.is_ok(), eq(true));

    // ...while an ASCII-only case change still collides
    let result = store.insert(&create_test_user("ÉcOlE@X.COM")).await;
    assert!(matches!(result, Err(DbError::ConstraintViolation { .. })));
}

pub async fn default_timestamps_are_set(store: &dyn UserStore) {
    let window = TimeWindow::open();

    let user = store.insert(&create_test_user("time@x.com")).await.unwrap();

    assert_that!(window.contains(user.created_at), eq(true));
    assert_that!(window.contains(user.updated_at), eq(true));
    assert_that!(user.updated_at, eq(user.created_at));

    let stored = store.find_by_id(user.id).await.unwrap().unwrap();
    assert_that!(stored, eq(&user));
}

pub async fn explicit_timestamps_are_kept(store: &dyn UserStore) {
    let created = Utc.with_ymd_and_hms(2016, 3, 1, 9, 30, 0).unwrap();
    let updated = created + Duration::days(10);
    let new = create_test_user("import@x.com")
        .with_created_at(created)
        .with_updated_at(updated);

    let user = store.insert(&new).await.unwrap();

    assert_that!(user.created_at, eq(created));
    assert_that!(user.updated_at, eq(updated));
}

pub async fn empty_email_is_rejected(store: &dyn UserStore) {
    let result = store.insert(&create_test_user("")).await;

    assert!(matches!(result, Err(DbError::Validation { .. })));
    assert!(store.find_by_email("").await.unwrap().is_none());
}

pub async fn find_by_email_ignores_case(store: &dyn UserStore) {
    let user = store
        .insert(&create_test_user("Mixed.Case@Example.com"))
        .await
        .unwrap();

    let found = store.find_by_email("mixed.case@EXAMPLE.COM").await.unwrap();
    assert_that!(found, some(eq(&user)));

    let missing = store.find_by_email("other@example.com").await.unwrap();
    assert_that!(missing, none());
}

pub async fn find_by_id_missing_returns_none(store: &dyn UserStore) {
    assert_that!(store.find_by_id(42).await.unwrap(), none());
}

pub async fn update_refreshes_updated_at(store: &dyn UserStore) {
    // Given
    let user = store.insert(&create_test_user("upd@x.com")).await.unwrap();
    tokio::time::sleep(std::time::Duration::from_millis(20)).await;
    let window = TimeWindow::open();

    // When
    let updated = store
        .update(user.id, &UserChanges::default().name("Renamed").password_hash("h2"))
        .await
        .unwrap();

    // Then
    assert_that!(updated.id, eq(user.id));
    assert_that!(updated.name, eq("Renamed"));
    assert_that!(updated.password_hash, eq("h2"));
    assert_that!(updated.email, eq(&user.email));
    assert_that!(updated.created_at, eq(user.created_at));
    assert_that!(updated.updated_at > user.updated_at, eq(true));
    assert_that!(window.contains(updated.updated_at), eq(true));

    let stored = store.find_by_id(user.id).await.unwrap().unwrap();
    assert_that!(stored, eq(&updated));
}

pub async fn touch_only_refreshes_updated_at(store: &dyn UserStore) {
    let user = store.insert(&create_test_user("touch@x.com")).await.unwrap();
    tokio::time::sleep(std::time::Duration::from_millis(20)).await;

    let touched = store.update(user.id, &UserChanges::default()).await.unwrap();

    assert_that!(touched.name, eq(&user.name));
    assert_that!(touched.password_hash, eq(&user.password_hash));
    assert_that!(touched.updated_at > user.updated_at, eq(true));
}

pub async fn update_email_respects_uniqueness(store: &dyn UserStore) {
    let a = store.insert(&create_test_user("a@x.com")).await.unwrap();
    let b = store.insert(&create_test_user("b@x.com")).await.unwrap();

    // Taking another account's folded email fails
    let result = store
        .update(b.id, &UserChanges::default().email("A@X.COM"))
        .await;
    assert!(matches!(result, Err(DbError::ConstraintViolation { .. })));
    let unchanged = store.find_by_id(b.id).await.unwrap().unwrap();
    assert_that!(unchanged.email, eq("b@x.com"));

    // Re-casing your own email is allowed and keeps the slot
    let recased = store
        .update(a.id, &UserChanges::default().email("A@x.com"))
        .await
        .unwrap();
    assert_that!(recased.email, eq("A@x.com"));

    // Moving to a fresh email frees the old one
    store
        .update(b.id, &UserChanges::default().email("c@x.com"))
        .await
        .unwrap();
    let reused = store.insert(&create_test_user("B@x.com")).await;
    assert_that!(reused.is_ok(), eq(true));
    let found = store.find_by_email("C@X.com").await.unwrap();
    assert_that!(found.map(|u| u.id), some(eq(b.id)));
}

pub async fn update_missing_record_is_not_found(store: &dyn UserStore) {
    let result = store.update(999, &UserChanges::default().name("Ghost")).await;

    assert!(matches!(result, Err(DbError::NotFound { id: 999, .. })));
}

pub async fn update_with_empty_email_is_rejected(store: &dyn UserStore) {
    let user = store.insert(&create_test_user("keep@x.com")).await.unwrap();

    let result = store.update(user.id, &UserChanges::default().email("")).await;

    assert!(matches!(result, Err(DbError::Validation { .. })));
}

pub async fn failed_inserts_do_not_reuse_ids(store: &dyn UserStore) {
    let first = store.insert(&create_test_user("seq@x.com")).await.unwrap();
    let _ = store.insert(&create_test_user("SEQ@x.com")).await;
    let second = store.insert(&create_test_user("seq2@x.com")).await.unwrap();

    assert_that!(second.id > first.id, eq(true));
}

pub async fn password_hash_is_stored_verbatim(store: &dyn UserStore) {
    // Given
    let user = store
        .insert(&NewUserRecord::new("blank@x.com", "", "Blank"))
        .await
        .unwrap();

    // Then: Empty hash kept as-is
    assert_that!(user.password_hash, eq(""));
    let stored = store.find_by_id(user.id).await.unwrap().unwrap();
    assert_that!(stored.password_hash, eq(""));

    // When: Replaced with arbitrary text, then cleared again
    let odd = "  not-a-hash \u{00e9} ";
    let updated = store
        .update(user.id, &UserChanges::default().password_hash(odd))
        .await
        .unwrap();
    assert_that!(updated.password_hash, eq(odd));

    let cleared = store
        .update(user.id, &UserChanges::default().password_hash(""))
        .await
        .unwrap();
    assert_that!(cleared.password_hash, eq(""));
}
