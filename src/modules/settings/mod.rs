pub mod controllers;
pub mod models;
pub mod repositories;

pub use models::{FuelSettings, SettingsPayload};
pub use repositories::SettingsRepository;
