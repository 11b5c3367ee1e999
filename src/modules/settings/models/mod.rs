pub mod fuel_settings;

pub use fuel_settings::{FuelSettings, SettingsPayload};
