//! OctoFit Tracker terminal client.
//!
//! The crate is split into a surface-independent core and a ratatui host:
//!
//! - [`resource`]: the five read-only collections, their endpoints and item shapes
//! - [`fetch`]: the generic fetch lifecycle (`Loading` → `Failed` | `Succeeded`)
//! - [`projection`]: pure mapping from a fetch result to a render-ready view model
//! - [`config`]: file, environment and CLI configuration
//! - [`ui`]: terminal event loop, MVI view state and rendering

pub mod config;
pub mod fetch;
pub mod logging;
pub mod projection;
pub mod resource;
pub mod ui;
