use crate::mvi::Reducer;

use super::intent::UsersIntent;
use super::state::UsersState;

pub struct UsersReducer;

impl Reducer for UsersReducer {
    type State = UsersState;
    type Intent = UsersIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            UsersIntent::FetchStarted => UsersState {
                loading: true,
                error: None,
                ..state
            },
            UsersIntent::FetchSucceeded { users } => UsersState {
                users,
                loading: false,
                error: None,
            },
            UsersIntent::FetchFailed { message } => UsersState {
                users: Vec::new(),
                loading: false,
                error: Some(message),
            },
            UsersIntent::Add { user } => {
                let mut users = state.users;
                users.push(user);
                UsersState { users, ..state }
            }
            UsersIntent::Update { id, patch } => {
                let users = state
                    .users
                    .into_iter()
                    .map(|user| {
                        if user.id == id {
                            patch.clone().apply(user)
                        } else {
                            user
                        }
                    })
                    .collect();
                UsersState { users, ..state }
            }
            UsersIntent::Delete { id } => {
                let mut users = state.users;
                users.retain(|u| u.id != id);
                UsersState { users, ..state }
            }
            UsersIntent::Clear => UsersState::default(),
        }
    }
}
