use serde::Deserialize;
use sqlx::{QueryBuilder, Sqlite, SqlitePool};

use crate::core::{AppError, Result};
use crate::modules::trips::models::{NewTrip, Trip};

/// Optional list filters. `start_date`/`end_date` only apply together,
/// and an empty value counts as absent (query strings like `?app_name=`
/// deserialize to `Some("")`).
#[derive(Debug, Default, Deserialize)]
pub struct TripFilter {
    pub date: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub app_name: Option<String>,
    pub trip_type: Option<String>,
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

/// Repository for trip rows. Every query is scoped by `user_id`; a trip
/// belonging to another user behaves exactly like a missing one.
pub struct TripRepository {
    pool: SqlitePool,
}

impl TripRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, user_id: i64, new: &NewTrip) -> Result<Trip> {
        let result = sqlx::query(
            "INSERT INTO trips (user_id, date, trip_time, trip_id, app_name, trip_type, \
             distance_km, amount_received, fees, fuel_cost, net_profit, notes) \
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(user_id)
        .bind(&new.date)
        .bind(&new.trip_time)
        .bind(&new.trip_id)
        .bind(&new.app_name)
        .bind(&new.trip_type)
        .bind(new.distance_km)
        .bind(new.amount_received)
        .bind(new.fees)
        .bind(new.fuel_cost)
        .bind(new.net_profit)
        .bind(&new.notes)
        .execute(&self.pool)
        .await?;

        let id = result.last_insert_rowid();
        self.find_by_id(user_id, id)
            .await?
            .ok_or_else(|| AppError::internal("Trip row missing after insert"))
    }

    pub async fn list(&self, user_id: i64, filter: &TripFilter) -> Result<Vec<Trip>> {
        let mut query: QueryBuilder<Sqlite> =
            QueryBuilder::new("SELECT * FROM trips WHERE user_id = ");
        query.push_bind(user_id);

        if let Some(date) = non_empty(&filter.date) {
            query.push(" AND date = ").push_bind(date);
        }
        if let (Some(start), Some(end)) = (
            non_empty(&filter.start_date),
            non_empty(&filter.end_date),
        ) {
            query
                .push(" AND date BETWEEN ")
                .push_bind(start)
                .push(" AND ")
                .push_bind(end);
        }
        if let Some(app_name) = non_empty(&filter.app_name) {
            query.push(" AND app_name = ").push_bind(app_name);
        }
        if let Some(trip_type) = non_empty(&filter.trip_type) {
            query.push(" AND trip_type = ").push_bind(trip_type);
        }

        query.push(" ORDER BY date DESC, trip_time DESC, created_at DESC");

        let trips = query
            .build_query_as::<Trip>()
            .fetch_all(&self.pool)
            .await?;

        Ok(trips)
    }

    pub async fn find_by_id(&self, user_id: i64, id: i64) -> Result<Option<Trip>> {
        let trip = sqlx::query_as::<_, Trip>("SELECT * FROM trips WHERE id = ? AND user_id = ?")
            .bind(id)
            .bind(user_id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(trip)
    }

    /// Full replace of all trip fields, refreshing `updated_at`.
    /// Single-statement last-writer-wins; no optimistic version check.
    pub async fn update(&self, user_id: i64, id: i64, new: &NewTrip) -> Result<Trip> {
        let result = sqlx::query(
            "UPDATE trips SET date = ?, trip_time = ?, trip_id = ?, app_name = ?, \
             trip_type = ?, distance_km = ?, amount_received = ?, fees = ?, \
             fuel_cost = ?, net_profit = ?, notes = ?, \
             updated_at = datetime('now', 'localtime') \
             WHERE id = ? AND user_id = ?",
        )
        .bind(&new.date)
        .bind(&new.trip_time)
        .bind(&new.trip_id)
        .bind(&new.app_name)
        .bind(&new.trip_type)
        .bind(new.distance_km)
        .bind(new.amount_received)
        .bind(new.fees)
        .bind(new.fuel_cost)
        .bind(new.net_profit)
        .bind(&new.notes)
        .bind(id)
        .bind(user_id)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found("Trip not found"));
        }

        self.find_by_id(user_id, id)
            .await?
            .ok_or_else(|| AppError::internal("Trip row missing after update"))
    }

    pub async fn delete(&self, user_id: i64, id: i64) -> Result<()> {
        let result = sqlx::query("DELETE FROM trips WHERE id = ? AND user_id = ?")
            .bind(id)
            .bind(user_id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found("Trip not found"));
        }

        Ok(())
    }
}
