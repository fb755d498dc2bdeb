//! Client-side user directory: fetches users from a remote endpoint into an
//! in-memory store and supports local create, update and delete.

pub mod avatar;
pub mod cli;
pub mod config;
pub mod logging;
pub mod mvi;
pub mod remote;
pub mod ui;
pub mod users;
