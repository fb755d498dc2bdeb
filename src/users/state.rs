use crate::mvi::State;

use super::model::User;

/// Snapshot of the user store.
///
/// `loading` and `error` are owned by the fetch lifecycle; local mutations
/// never touch them.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct UsersState {
    pub users: Vec<User>,
    pub loading: bool,
    pub error: Option<String>,
}

impl State for UsersState {}

impl UsersState {
    /// Next id for a locally created user: one past the current maximum,
    /// where negative ids count as 0.
    ///
    /// If the maximum is `i64::MAX` the lowest unused positive id is taken
    /// instead, so the result never collides with an existing user.
    pub fn next_id(&self) -> i64 {
        let max = self.users.iter().map(|u| u.id).max().unwrap_or(0).max(0);
        max.checked_add(1).unwrap_or_else(|| self.lowest_free_id())
    }

    fn lowest_free_id(&self) -> i64 {
        (1..=i64::MAX)
            .find(|id| !self.contains(*id))
            .unwrap_or_default()
    }

    pub fn find(&self, id: i64) -> Option<&User> {
        self.users.iter().find(|u| u.id == id)
    }

    pub fn contains(&self, id: i64) -> bool {
        self.find(id).is_some()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}
