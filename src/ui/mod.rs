pub mod app;
pub mod events;
pub mod footer;
pub mod header;
pub mod input;
pub mod layout;
pub mod listing;
pub mod mvi;
pub mod plain;
pub mod render;
pub mod runtime;
pub mod table;
pub mod terminal_guard;
pub mod theme;

pub use runtime::{run, run_print};
