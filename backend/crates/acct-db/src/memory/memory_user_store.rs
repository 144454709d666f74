use crate::schema::EMAIL_UNIQUE_INDEX;
use crate::schema::timestamp::current_timestamp;
use crate::{DbError, Result as DbErrorResult, UserStore};

use acct_core::{ErrorLocation, NewUserRecord, UserChanges, UserRecord, fold_email};

use std::collections::{BTreeMap, HashMap};
use std::panic::Location;
use std::sync::atomic::{AtomicI64, Ordering};

use async_trait::async_trait;
use log::debug;
use tokio::sync::RwLock;

#[derive(Default)]
struct MemoryState {
    records: BTreeMap<i64, UserRecord>,
    /// Folded email -> owning id
    emails: HashMap<String, i64>,
}

/// In-process [`UserStore`] with the same invariants as the SQLite table.
///
/// The id counter belongs to the instance and is only advanced by a
/// successful insert. Uniqueness is checked and claimed under the same write
/// lock that stores the record.
pub struct MemoryUserStore {
    next_id: AtomicI64,
    state: RwLock<MemoryState>,
}

impl MemoryUserStore {
    pub fn new() -> Self {
        Self {
            next_id: AtomicI64::new(1),
            state: RwLock::new(MemoryState::default()),
        }
    }

    pub async fn len(&self) -> usize {
        self.state.read().await.records.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.state.read().await.records.is_empty()
    }
}

impl Default for MemoryUserStore {
    fn default() -> Self {
        Self::new()
    }
}

#[track_caller]
fn unique_violation() -> DbError {
    DbError::ConstraintViolation {
        message: format!("UNIQUE constraint failed: index '{EMAIL_UNIQUE_INDEX}'"),
        location: ErrorLocation::from(Location::caller()),
    }
}

#[async_trait]
impl UserStore for MemoryUserStore {
    async fn insert(&self, new: &NewUserRecord) -> DbErrorResult<UserRecord> {
        new.validate()?;

        let folded = fold_email(&new.email);
        let mut state = self.state.write().await;

        if state.emails.contains_key(&folded) {
            return Err(unique_violation());
        }

        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let now = current_timestamp();
        let record = UserRecord {
            id,
            email: new.email.clone(),
            password_hash: new.password_hash.clone(),
            name: new.name.clone(),
            created_at: new.created_at.unwrap_or(now),
            updated_at: new.updated_at.unwrap_or(now),
        };

        state.emails.insert(folded, id);
        state.records.insert(id, record.clone());

        debug!("Inserted user {} (memory)", id);
        Ok(record)
    }

    async fn find_by_id(&self, id: i64) -> DbErrorResult<Option<UserRecord>> {
        Ok(self.state.read().await.records.get(&id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> DbErrorResult<Option<UserRecord>> {
        let state = self.state.read().await;

        Ok(state
            .emails
            .get(&fold_email(email))
            .and_then(|id| state.records.get(id))
            .cloned())
    }

    async fn update(&self, id: i64, changes: &UserChanges) -> DbErrorResult<UserRecord> {
        changes.validate()?;

        let mut guard = self.state.write().await;
        let state = &mut *guard;

        let Some(record) = state.records.get_mut(&id) else {
            return Err(DbError::NotFound {
                id,
                location: ErrorLocation::from(Location::caller()),
            });
        };

        if let Some(ref email) = changes.email {
            let old_folded = fold_email(&record.email);
            let new_folded = fold_email(email);

            if new_folded != old_folded {
                if state.emails.contains_key(&new_folded) {
                    return Err(unique_violation());
                }
                state.emails.remove(&old_folded);
                state.emails.insert(new_folded, id);
            }
            record.email = email.clone();
        }

        if let Some(ref hash) = changes.password_hash {
            record.password_hash = hash.clone();
        }

        if let Some(ref name) = changes.name {
            record.name = name.clone();
        }

        record.updated_at = current_timestamp();

        debug!("Updated user {} (memory)", id);
        Ok(record.clone())
    }
}
