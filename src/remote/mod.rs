//! Remote user source: the single network boundary of the application.

mod client;
mod error;
mod transport;

pub use client::RemoteUsers;
pub use error::FetchError;
pub use transport::{HttpTransport, Transport, TransportResponse};
