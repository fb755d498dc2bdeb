//! Presentation layer: a line-oriented shell that renders store state and
//! forwards validated input to the store.

pub mod command;
pub mod form;
pub mod shell;
pub mod table;

pub use command::{Command, ParseError};
pub use form::{Field, FormErrors, UserForm};
pub use shell::{Flow, Shell};
