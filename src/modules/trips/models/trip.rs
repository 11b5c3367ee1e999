use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use std::fmt;
use std::str::FromStr;

use crate::core::dates;
use crate::modules::trips::services::profit::net_profit;

/// Ride-hailing app the trip came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SourceApp {
    Pickme,
    Helago,
    Uber,
    Other,
}

impl SourceApp {
    pub const VALID: &'static str = "Pickme, Helago, Uber, Other";
}

impl fmt::Display for SourceApp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceApp::Pickme => write!(f, "Pickme"),
            SourceApp::Helago => write!(f, "Helago"),
            SourceApp::Uber => write!(f, "Uber"),
            SourceApp::Other => write!(f, "Other"),
        }
    }
}

impl FromStr for SourceApp {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "Pickme" => Ok(SourceApp::Pickme),
            "Helago" => Ok(SourceApp::Helago),
            "Uber" => Ok(SourceApp::Uber),
            "Other" => Ok(SourceApp::Other),
            _ => Err(format!("Invalid app name: {}", s)),
        }
    }
}

/// Whether the trip carried a passenger or goods
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TripType {
    Passenger,
    Goods,
}

impl TripType {
    pub const VALID: &'static str = "Passenger, Goods";
}

impl fmt::Display for TripType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TripType::Passenger => write!(f, "Passenger"),
            TripType::Goods => write!(f, "Goods"),
        }
    }
}

impl FromStr for TripType {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "Passenger" => Ok(TripType::Passenger),
            "Goods" => Ok(TripType::Goods),
            _ => Err(format!("Invalid trip type: {}", s)),
        }
    }
}

/// A recorded trip, as stored. `net_profit` is always consistent with
/// `amount_received - fees - fuel_cost` at rest.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Trip {
    pub id: i64,
    pub user_id: i64,
    pub date: String,
    pub trip_time: String,
    /// External reference from the source app, free-form
    pub trip_id: String,
    pub app_name: String,
    pub trip_type: String,
    pub distance_km: f64,
    pub amount_received: f64,
    pub fees: f64,
    pub fuel_cost: f64,
    pub net_profit: f64,
    pub notes: String,
    pub created_at: String,
    pub updated_at: String,
}

/// Candidate trip from a create or update request.
///
/// Every field is optional at the type level so that deserialization never
/// rejects a payload; `validate` reports the full set of problems instead.
/// A `net_profit` field in the request body is ignored outright.
#[derive(Debug, Deserialize)]
pub struct TripPayload {
    pub date: Option<String>,
    pub trip_time: Option<String>,
    pub trip_id: Option<String>,
    pub app_name: Option<String>,
    pub trip_type: Option<String>,
    pub distance_km: Option<f64>,
    pub amount_received: Option<f64>,
    pub fees: Option<f64>,
    pub fuel_cost: Option<f64>,
    pub notes: Option<String>,
}

impl TripPayload {
    /// Returns every violated constraint, in a stable order.
    /// An empty string counts as missing for the presence checks; enum
    /// membership is only checked for non-empty values.
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        match self.date.as_deref() {
            Some(date) if !date.trim().is_empty() => {
                if !dates::is_canonical_date(date) {
                    errors.push("date must be a canonical YYYY-MM-DD value".to_string());
                }
            }
            _ => errors.push("date is required".to_string()),
        }
        if self.app_name.as_deref().map_or(true, str::is_empty) {
            errors.push("app_name is required".to_string());
        }
        if self.trip_type.as_deref().map_or(true, str::is_empty) {
            errors.push("trip_type is required".to_string());
        }
        if self.distance_km.map_or(true, |value| value < 0.0) {
            errors.push("distance_km must be >= 0".to_string());
        }
        if self.amount_received.map_or(true, |value| value < 0.0) {
            errors.push("amount_received must be >= 0".to_string());
        }
        if self.fees.map_or(true, |value| value < 0.0) {
            errors.push("fees must be >= 0".to_string());
        }
        if let Some(fuel_cost) = self.fuel_cost {
            if fuel_cost < 0.0 {
                errors.push("fuel_cost must be >= 0".to_string());
            }
        }
        if let Some(app_name) = self.app_name.as_deref() {
            if !app_name.is_empty() && SourceApp::from_str(app_name).is_err() {
                errors.push(format!("app_name must be one of: {}", SourceApp::VALID));
            }
        }
        if let Some(trip_type) = self.trip_type.as_deref() {
            if !trip_type.is_empty() && TripType::from_str(trip_type).is_err() {
                errors.push(format!("trip_type must be one of: {}", TripType::VALID));
            }
        }

        errors
    }

    /// Convert a validated payload into a row ready to persist, with
    /// `net_profit` recomputed server-side. Call only after `validate`
    /// returned no errors.
    pub fn into_new_trip(self) -> NewTrip {
        let amount_received = self.amount_received.unwrap_or(0.0);
        let fees = self.fees.unwrap_or(0.0);
        let fuel_cost = self.fuel_cost.unwrap_or(0.0);

        NewTrip {
            date: self.date.unwrap_or_default(),
            trip_time: self.trip_time.unwrap_or_default(),
            trip_id: self.trip_id.unwrap_or_default(),
            app_name: self.app_name.unwrap_or_default(),
            trip_type: self.trip_type.unwrap_or_default(),
            distance_km: self.distance_km.unwrap_or(0.0),
            amount_received,
            fees,
            fuel_cost,
            net_profit: net_profit(amount_received, fees, fuel_cost),
            notes: self.notes.unwrap_or_default(),
        }
    }
}

/// Validated trip fields bound for an INSERT or full-replace UPDATE
#[derive(Debug, Clone)]
pub struct NewTrip {
    pub date: String,
    pub trip_time: String,
    pub trip_id: String,
    pub app_name: String,
    pub trip_type: String,
    pub distance_km: f64,
    pub amount_received: f64,
    pub fees: f64,
    pub fuel_cost: f64,
    pub net_profit: f64,
    pub notes: String,
}
