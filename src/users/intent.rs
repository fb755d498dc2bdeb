use crate::mvi::Intent;

use super::model::{User, UserPatch};

#[derive(Debug, Clone)]
pub enum UsersIntent {
    /// A fetch is going out: raise `loading`, drop any previous error.
    FetchStarted,
    /// The fetch resolved; `users` already carry avatars.
    FetchSucceeded { users: Vec<User> },
    /// The fetch failed with the given message.
    FetchFailed { message: String },
    /// Append a fully formed user (id and avatar already assigned).
    Add { user: User },
    Update { id: i64, patch: UserPatch },
    Delete { id: i64 },
    Clear,
}

impl Intent for UsersIntent {}
