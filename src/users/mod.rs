//! User directory core: records, state, reducer and the shared store.

mod intent;
mod model;
mod reducer;
mod state;
mod store;

pub use intent::UsersIntent;
pub use model::{Attributes, NewUser, RawUser, User, UserPatch};
pub use reducer::UsersReducer;
pub use state::UsersState;
pub use store::UserStore;
