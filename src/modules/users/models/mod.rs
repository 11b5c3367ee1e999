pub mod user;

pub use user::{normalize_email, LoginPayload, RegisterPayload, User, UserProfile};
