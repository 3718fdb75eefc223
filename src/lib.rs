//! Terminal browser for microbreweries: one fetch, then an in-memory
//! searchable, sortable, paginated table.

pub mod args;
pub mod brewery;
pub mod config;
pub mod logging;
pub mod shutdown;
pub mod ui;
