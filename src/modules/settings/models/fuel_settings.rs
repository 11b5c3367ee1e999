use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::core::dates;

/// One fuel configuration record. Immutable once created; "updating"
/// settings appends a new record with its own effective-from date.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct FuelSettings {
    pub id: i64,
    pub user_id: i64,
    pub fuel_efficiency_kmpl: f64,
    pub fuel_price_per_liter: f64,
    pub effective_from: String,
    pub created_at: String,
}

/// POST /api/settings request body
#[derive(Debug, Deserialize)]
pub struct SettingsPayload {
    pub fuel_efficiency_kmpl: Option<f64>,
    pub fuel_price_per_liter: Option<f64>,
    pub effective_from: Option<String>,
}

impl SettingsPayload {
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        if self.fuel_efficiency_kmpl.map_or(true, |value| value <= 0.0) {
            errors.push("fuel_efficiency_kmpl must be > 0".to_string());
        }
        if self.fuel_price_per_liter.map_or(true, |value| value <= 0.0) {
            errors.push("fuel_price_per_liter must be > 0".to_string());
        }
        if let Some(effective_from) = self.effective_from.as_deref() {
            if !dates::is_canonical_date(effective_from) {
                errors.push("effective_from must be a canonical YYYY-MM-DD value".to_string());
            }
        }

        errors
    }
}
