//! Fetch lifecycle for one resource view.
//!
//! A lifecycle publishes `Loading` immediately, issues exactly one GET, and
//! then publishes exactly one terminal [`FetchResult`]. Cancelling it (or
//! dropping its [`FetchHandle`]) discards a late response instead of applying it.

mod client;
mod controller;
mod envelope;
mod error;
mod result;

pub use client::{ResourceClient, TransportTimeouts};
pub use controller::{FetchHandle, ResourceController};
pub use envelope::normalize;
pub use error::{FetchError, FetchErrorKind};
pub use result::FetchResult;
