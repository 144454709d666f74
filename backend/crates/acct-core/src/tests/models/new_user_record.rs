use crate::{CoreError, NewUserRecord};

use chrono::{Duration, Utc};

#[test]
fn test_new_user_record_new() {
    let record = NewUserRecord::new("User@Example.com", "h1", "A");

    assert_eq!(record.email, "User@Example.com");
    assert_eq!(record.password_hash, "h1");
    assert_eq!(record.name, "A");
    assert!(record.created_at.is_none());
    assert!(record.updated_at.is_none());
    assert!(record.validate().is_ok());
}

#[test]
fn test_new_user_record_with_timestamps() {
    let created = Utc::now() - Duration::days(3);
    let updated = created + Duration::hours(1);
    let record = NewUserRecord::new("a@x.com", "h", "A")
        .with_created_at(created)
        .with_updated_at(updated);

    assert_eq!(record.created_at, Some(created));
    assert_eq!(record.updated_at, Some(updated));
    assert!(record.validate().is_ok());
}

#[test]
fn test_new_user_record_rejects_empty_email() {
    let record = NewUserRecord::new("", "h", "A");
    assert!(matches!(
        record.validate(),
        Err(CoreError::Validation { .. })
    ));
}

#[test]
fn test_new_user_record_accepts_empty_password_hash() {
    let record = NewUserRecord::new("a@x.com", "", "A");
    assert!(record.validate().is_ok());
}

#[test]
fn test_new_user_record_allows_empty_name() {
    let record = NewUserRecord::new("a@x.com", "h", "");
    assert!(record.validate().is_ok());
}

#[test]
fn test_new_user_record_accepts_timestamps_in_any_order() {
    let created = Utc::now();
    let record = NewUserRecord::new("a@x.com", "h", "A")
        .with_created_at(created)
        .with_updated_at(created - Duration::seconds(1));

    assert!(record.validate().is_ok());
}
