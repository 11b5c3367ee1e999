use sqlx::SqlitePool;

use crate::core::{AppError, Result};
use crate::modules::settings::models::FuelSettings;

/// Repository over the append-only fuel settings history.
///
/// Resolution picks the latest `effective_from` at or before the target
/// date; ties are broken by the highest id (most recently inserted).
pub struct SettingsRepository {
    pool: SqlitePool,
}

impl SettingsRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// The record in force right now: latest effective_from overall
    pub async fn current(&self, user_id: i64) -> Result<Option<FuelSettings>> {
        let settings = sqlx::query_as::<_, FuelSettings>(
            "SELECT * FROM fuel_settings_history WHERE user_id = ? \
             ORDER BY effective_from DESC, id DESC LIMIT 1",
        )
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(settings)
    }

    /// The record effective on `date`, or None if the date predates all history
    pub async fn for_date(&self, user_id: i64, date: &str) -> Result<Option<FuelSettings>> {
        let settings = sqlx::query_as::<_, FuelSettings>(
            "SELECT * FROM fuel_settings_history WHERE effective_from <= ? AND user_id = ? \
             ORDER BY effective_from DESC, id DESC LIMIT 1",
        )
        .bind(date)
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(settings)
    }

    /// Full history, most recently effective first
    pub async fn history(&self, user_id: i64) -> Result<Vec<FuelSettings>> {
        let history = sqlx::query_as::<_, FuelSettings>(
            "SELECT * FROM fuel_settings_history WHERE user_id = ? \
             ORDER BY effective_from DESC, id DESC",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(history)
    }

    /// Append a new record; existing history is never touched
    pub async fn insert(
        &self,
        user_id: i64,
        fuel_efficiency_kmpl: f64,
        fuel_price_per_liter: f64,
        effective_from: &str,
    ) -> Result<FuelSettings> {
        let result = sqlx::query(
            "INSERT INTO fuel_settings_history \
             (user_id, fuel_efficiency_kmpl, fuel_price_per_liter, effective_from) \
             VALUES (?, ?, ?, ?)",
        )
        .bind(user_id)
        .bind(fuel_efficiency_kmpl)
        .bind(fuel_price_per_liter)
        .bind(effective_from)
        .execute(&self.pool)
        .await?;

        let id = result.last_insert_rowid();
        let settings =
            sqlx::query_as::<_, FuelSettings>("SELECT * FROM fuel_settings_history WHERE id = ?")
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;

        settings.ok_or_else(|| AppError::internal("Settings row missing after insert"))
    }
}
