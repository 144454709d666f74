#![allow(dead_code)]

use acct_core::NewUserRecord;

use chrono::{DateTime, Duration, Utc};

/// Creates a NewUserRecord with sensible defaults
pub fn create_test_user(email: &str) -> NewUserRecord {
    NewUserRecord::new(email, "$argon2id$v=19$m=19456,t=2,p=1$c2FsdA$aGFzaA", "Test User")
}

/// Bounds a store-generated timestamp must fall within
pub struct TimeWindow {
    start: DateTime<Utc>,
}

impl TimeWindow {
    pub fn open() -> Self {
        Self { start: Utc::now() }
    }

    /// Storage keeps millisecond precision, so allow a little slack each way
    pub fn contains(&self, timestamp: DateTime<Utc>) -> bool {
        let slack = Duration::milliseconds(50);
        timestamp >= self.start - slack && timestamp <= Utc::now() + slack
    }
}

/// Re-case `s` following `mask`, cycled over its characters
pub fn case_variant(s: &str, mask: &[bool]) -> String {
    s.chars()
        .zip(mask.iter().cycle())
        .map(|(c, upper)| {
            if *upper {
                c.to_ascii_uppercase()
            } else {
                c.to_ascii_lowercase()
            }
        })
        .collect()
}

/// Drive async store calls from inside a proptest case
pub fn block_on<F: std::future::Future>(future: F) -> F::Output {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .unwrap()
        .block_on(future)
}
