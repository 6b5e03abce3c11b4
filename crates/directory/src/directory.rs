use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use userdir_core::{DomainError, DomainResult, Entity, UserId};

use crate::user::{NewUser, User};

#[derive(Debug, Default)]
struct DirectoryState {
    users: Vec<User>,
    /// Highest id ever issued. Survives deletions so ids are never reused.
    last_issued: Option<UserId>,
}

impl DirectoryState {
    fn next_id(&self) -> DomainResult<UserId> {
        match self.last_issued {
            None => Ok(UserId::FIRST),
            Some(last) => last
                .next()
                .ok_or_else(|| DomainError::internal("user id space exhausted")),
        }
    }
}

/// In-memory user registry.
///
/// The user list and the id counter sit behind a single lock, so a create or
/// delete is either fully visible to readers or not at all.
#[derive(Debug, Default)]
pub struct UserDirectory {
    state: RwLock<DirectoryState>,
}

impl UserDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> DomainResult<RwLockReadGuard<'_, DirectoryState>> {
        self.state
            .read()
            .map_err(|_| DomainError::internal("user directory lock poisoned"))
    }

    fn write(&self) -> DomainResult<RwLockWriteGuard<'_, DirectoryState>> {
        self.state
            .write()
            .map_err(|_| DomainError::internal("user directory lock poisoned"))
    }

    /// All users in insertion order. Empty is a normal result.
    pub fn list_all(&self) -> DomainResult<Vec<User>> {
        Ok(self.read()?.users.clone())
    }

    pub fn get_by_id(&self, id: UserId) -> DomainResult<Option<User>> {
        let state = self.read()?;
        Ok(state.users.iter().find(|u| u.has_id(id)).cloned())
    }

    /// Store a new user under a freshly minted id and return it.
    ///
    /// `None` is the absent/null payload case and yields `InvalidInput`.
    pub fn create(&self, candidate: Option<NewUser>) -> DomainResult<User> {
        let candidate =
            candidate.ok_or_else(|| DomainError::invalid_input("user payload is required"))?;

        let mut state = self.write()?;
        let id = state.next_id()?;
        let user = candidate.into_user(id);
        state.last_issued = Some(id);
        state.users.push(user.clone());

        tracing::debug!(user_id = %id, total = state.users.len(), "user stored");
        Ok(user)
    }

    /// Remove the user with `id`. Returns whether anything was removed.
    pub fn delete_by_id(&self, id: UserId) -> DomainResult<bool> {
        let mut state = self.write()?;
        match state.users.iter().position(|u| u.has_id(id)) {
            Some(idx) => {
                state.users.remove(idx);
                tracing::debug!(user_id = %id, total = state.users.len(), "user removed");
                Ok(true)
            }
            None => Ok(false),
        }
    }
}
