//! Terminal front end: one tab per collection, rendered from the
//! projection's view models.

pub mod app;
pub mod events;
pub mod footer;
pub mod header;
pub mod input;
pub mod layout;
pub mod mvi;
pub mod render;
pub mod runtime;
pub mod team_detail;
pub mod terminal_guard;
pub mod theme;
pub mod view;
