pub mod controllers;
pub mod models;
pub mod repositories;

pub use models::{User, UserProfile};
pub use repositories::UserRepository;
