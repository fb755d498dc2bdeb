//! Shared user store with fetch lifecycle and local mutations.
//!
//! The store is an owned handle: clone it to share the same state between
//! the shell and background tasks, or build separate instances for
//! isolation. Every mutation takes the write lock once, reads the current
//! state and commits the reduced state before releasing it, so two
//! mutations never interleave.

use std::sync::Arc;

use parking_lot::RwLock;

use crate::avatar::{self, DrawSource, ThreadRngDraw};
use crate::config::{Config, ConfigError};
use crate::mvi::Reducer;
use crate::remote::RemoteUsers;

use super::intent::UsersIntent;
use super::model::{NewUser, User, UserPatch};
use super::reducer::UsersReducer;
use super::state::UsersState;

/// Thread-safe user store.
#[derive(Clone)]
pub struct UserStore {
    inner: Arc<RwLock<StoreInner>>,
    remote: RemoteUsers,
    draw: Arc<dyn DrawSource>,
}

struct StoreInner {
    state: UsersState,
    /// Bumped by every fetch start and by `clear`. A fetch only commits
    /// its result if the generation is unchanged when it resolves.
    generation: u64,
}

impl StoreInner {
    fn dispatch(&mut self, intent: UsersIntent) {
        let state = std::mem::take(&mut self.state);
        self.state = UsersReducer::reduce(state, intent);
    }
}

impl UserStore {
    /// Create an empty store backed by `remote`.
    pub fn new(remote: RemoteUsers) -> Self {
        Self::with_draw_source(remote, Arc::new(ThreadRngDraw))
    }

    /// Create an empty store with a specific avatar draw source.
    pub fn with_draw_source(remote: RemoteUsers, draw: Arc<dyn DrawSource>) -> Self {
        Self {
            inner: Arc::new(RwLock::new(StoreInner {
                state: UsersState::default(),
                generation: 0,
            })),
            remote,
            draw,
        }
    }

    /// Create an empty store fetching from the configured address.
    ///
    /// # Errors
    /// Returns error if no API URL is configured.
    pub fn from_config(config: &Config) -> Result<Self, ConfigError> {
        let url = config.api_url()?;
        Ok(Self::new(RemoteUsers::new(url)))
    }

    /// Get a clone of the current state.
    pub fn snapshot(&self) -> UsersState {
        self.inner.read().state.clone()
    }

    pub fn users(&self) -> Vec<User> {
        self.inner.read().state.users.clone()
    }

    pub fn loading(&self) -> bool {
        self.inner.read().state.loading
    }

    pub fn error(&self) -> Option<String> {
        self.inner.read().state.error.clone()
    }

    /// Look up a single user by id.
    pub fn get(&self, id: i64) -> Option<User> {
        self.inner.read().state.find(id).cloned()
    }

    /// Replace the collection with the remote listing.
    ///
    /// Failures never escape: they are recorded in `error` and the
    /// collection is emptied. If another fetch starts (or `clear` runs)
    /// while this one is in flight, this result is discarded.
    pub async fn fetch_users(&self) {
        let generation = {
            let mut inner = self.inner.write();
            inner.generation += 1;
            inner.dispatch(UsersIntent::FetchStarted);
            inner.generation
        };

        let intent = match self.remote.fetch_all().await {
            Ok(raw) => {
                let users = raw
                    .into_iter()
                    .map(|r| avatar::assign_avatar(r, self.draw.as_ref()))
                    .collect();
                UsersIntent::FetchSucceeded { users }
            }
            Err(e) => {
                tracing::warn!(
                    url = %self.remote.url(),
                    kind = e.kind(),
                    error = %e,
                    "User fetch failed"
                );
                UsersIntent::FetchFailed {
                    message: e.to_string(),
                }
            }
        };

        let mut inner = self.inner.write();
        if inner.generation != generation {
            tracing::debug!(
                generation,
                current = inner.generation,
                "Discarding stale fetch result"
            );
            return;
        }
        inner.dispatch(intent);

        tracing::info!(
            count = inner.state.users.len(),
            failed = inner.state.error.is_some(),
            "User fetch settled"
        );
    }

    /// Create a user locally and return it.
    ///
    /// The id is one past the current maximum (1 for an empty store).
    pub fn add_user(&self, fields: NewUser) -> User {
        let avatar = avatar::random_avatar(self.draw.as_ref());

        let mut inner = self.inner.write();
        let user = fields.into_user(inner.state.next_id(), avatar);
        inner.dispatch(UsersIntent::Add { user: user.clone() });

        tracing::info!(id = user.id, username = %user.username, "User added");
        user
    }

    /// Shallow-merge `patch` into the user with `id`.
    ///
    /// Returns `false` (and changes nothing) if no such user exists.
    pub fn update_user(&self, id: i64, patch: UserPatch) -> bool {
        let mut inner = self.inner.write();
        if !inner.state.contains(id) {
            tracing::debug!(id, "Update for unknown user ignored");
            return false;
        }
        inner.dispatch(UsersIntent::Update { id, patch });

        tracing::info!(id, "User updated");
        true
    }

    /// Remove the user with `id`. Returns `false` if absent.
    pub fn delete_user(&self, id: i64) -> bool {
        let mut inner = self.inner.write();
        if !inner.state.contains(id) {
            tracing::debug!(id, "Delete for unknown user ignored");
            return false;
        }
        inner.dispatch(UsersIntent::Delete { id });

        tracing::info!(id, "User deleted");
        true
    }

    /// Reset to the initial empty state. Any in-flight fetch is orphaned.
    pub fn clear(&self) {
        let mut inner = self.inner.write();
        inner.generation += 1;
        inner.dispatch(UsersIntent::Clear);
    }
}
