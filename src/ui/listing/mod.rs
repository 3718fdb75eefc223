//! Brewery listing feature module.
//!
//! Lifecycle of the one table on screen: Loading until the fetch settles,
//! then Ready (interactive) or Failed (terminal error view).
//!
//! - `state.rs` - Loading / Failed / Ready
//! - `intent.rs` - fetch outcome plus search, sort and paging actions
//! - `reducer.rs` - transitions (pure, no I/O)

mod intent;
mod reducer;
mod state;

pub use intent::ListingIntent;
pub use reducer::ListingReducer;
pub use state::ListingState;
