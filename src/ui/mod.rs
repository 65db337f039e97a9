//! Terminal interface: application state, page layout, and input handling.

pub mod app;
pub mod components;
pub mod data;
pub mod page;
pub mod shortcuts;
pub mod tui;
pub mod viewport;
