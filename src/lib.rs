//! Riderwatch — finance-tracking backend for ride-hailing drivers
//!
//! Records trips, computes per-trip profit, aggregates earnings into
//! dashboard/daily/monthly/annual reports, and tracks a time-versioned
//! fuel cost configuration, all scoped per authenticated user.

pub mod config;
pub mod core;
pub mod middleware;
pub mod modules;

// Re-export commonly used types
pub use modules::reports;
pub use modules::settings;
pub use modules::trips;
pub use modules::users;
