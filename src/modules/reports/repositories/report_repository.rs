use sqlx::SqlitePool;

use crate::core::Result;
use crate::modules::reports::models::{AppBreakdown, DayBreakdown, MonthBreakdown, TripSummary};
use crate::modules::trips::models::Trip;

/// Summary aggregate columns. COALESCE keeps empty windows at zero.
const SUMMARY_COLUMNS: &str = "COUNT(*) AS total_trips, \
     COALESCE(SUM(distance_km), 0.0) AS total_distance, \
     COALESCE(SUM(amount_received), 0.0) AS total_earnings, \
     COALESCE(SUM(fees), 0.0) AS total_fees, \
     COALESCE(SUM(fuel_cost), 0.0) AS total_fuel_cost, \
     COALESCE(SUM(net_profit), 0.0) AS total_net_profit";

const APP_COLUMNS: &str = "app_name, COUNT(*) AS trips, \
     COALESCE(SUM(amount_received), 0.0) AS earnings, \
     COALESCE(SUM(fees), 0.0) AS fees, \
     COALESCE(SUM(fuel_cost), 0.0) AS fuel_cost, \
     COALESCE(SUM(net_profit), 0.0) AS net_profit";

const PERIOD_COLUMNS: &str = "COUNT(*) AS trips, \
     COALESCE(SUM(distance_km), 0.0) AS distance, \
     COALESCE(SUM(amount_received), 0.0) AS earnings, \
     COALESCE(SUM(fees), 0.0) AS fees, \
     COALESCE(SUM(fuel_cost), 0.0) AS fuel_cost, \
     COALESCE(SUM(net_profit), 0.0) AS net_profit";

/// Repository for per-user report aggregation queries.
///
/// Month and year windows are string-prefix matches against the canonical
/// `YYYY-MM-DD` date column, exactly as the write path guarantees it.
pub struct ReportRepository {
    pool: SqlitePool,
}

impl ReportRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn summary_for_date(&self, user_id: i64, date: &str) -> Result<TripSummary> {
        let summary = sqlx::query_as::<_, TripSummary>(&format!(
            "SELECT {SUMMARY_COLUMNS} FROM trips WHERE date = ? AND user_id = ?"
        ))
        .bind(date)
        .bind(user_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(summary)
    }

    pub async fn summary_for_prefix(&self, user_id: i64, prefix: &str) -> Result<TripSummary> {
        let summary = sqlx::query_as::<_, TripSummary>(&format!(
            "SELECT {SUMMARY_COLUMNS} FROM trips WHERE date LIKE ? || '%' AND user_id = ?"
        ))
        .bind(prefix)
        .bind(user_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(summary)
    }

    pub async fn app_breakdown_for_date(
        &self,
        user_id: i64,
        date: &str,
    ) -> Result<Vec<AppBreakdown>> {
        let rows = sqlx::query_as::<_, AppBreakdown>(&format!(
            "SELECT {APP_COLUMNS} FROM trips WHERE date = ? AND user_id = ? GROUP BY app_name"
        ))
        .bind(date)
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    pub async fn app_breakdown_for_prefix(
        &self,
        user_id: i64,
        prefix: &str,
    ) -> Result<Vec<AppBreakdown>> {
        let rows = sqlx::query_as::<_, AppBreakdown>(&format!(
            "SELECT {APP_COLUMNS} FROM trips WHERE date LIKE ? || '%' AND user_id = ? \
             GROUP BY app_name"
        ))
        .bind(prefix)
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    /// Trips of a single day for the daily report, most recent first
    pub async fn trips_for_date(&self, user_id: i64, date: &str) -> Result<Vec<Trip>> {
        let trips = sqlx::query_as::<_, Trip>(
            "SELECT * FROM trips WHERE date = ? AND user_id = ? \
             ORDER BY trip_time DESC, created_at DESC",
        )
        .bind(date)
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(trips)
    }

    /// Per-day totals within a `YYYY-MM` window, chronological
    pub async fn daily_breakdown(
        &self,
        user_id: i64,
        month_prefix: &str,
    ) -> Result<Vec<DayBreakdown>> {
        let rows = sqlx::query_as::<_, DayBreakdown>(&format!(
            "SELECT date, {PERIOD_COLUMNS} FROM trips \
             WHERE date LIKE ? || '%' AND user_id = ? \
             GROUP BY date ORDER BY date"
        ))
        .bind(month_prefix)
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    /// Per-month totals within a `YYYY` window, chronological
    pub async fn monthly_breakdown(
        &self,
        user_id: i64,
        year_prefix: &str,
    ) -> Result<Vec<MonthBreakdown>> {
        let rows = sqlx::query_as::<_, MonthBreakdown>(&format!(
            "SELECT substr(date, 1, 7) AS month, {PERIOD_COLUMNS} FROM trips \
             WHERE date LIKE ? || '%' AND user_id = ? \
             GROUP BY substr(date, 1, 7) ORDER BY month"
        ))
        .bind(year_prefix)
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }
}
