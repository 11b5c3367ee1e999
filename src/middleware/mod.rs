pub mod auth;
pub mod rate_limit;

pub use auth::{hash_password, verify_password, BearerAuth, CurrentUser, JwtKeys};
pub use rate_limit::RateLimiter;
