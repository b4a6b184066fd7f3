//! Application layer: refresh lifecycle and viewport tracking.

pub mod refresh;
pub mod viewport;

pub use refresh::{FetchPhase, REFRESH_INTERVAL_SECS, RefreshController};
pub use viewport::ViewportAdapter;
