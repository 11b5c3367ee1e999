use serde::Serialize;
use sqlx::FromRow;

use crate::modules::trips::models::Trip;

/// Summary totals over a set of trips. Aggregates are COALESCEd in SQL so
/// an empty window yields zeros, never nulls.
#[derive(Debug, Serialize, FromRow)]
pub struct TripSummary {
    pub total_trips: i64,
    pub total_distance: f64,
    pub total_earnings: f64,
    pub total_fees: f64,
    pub total_fuel_cost: f64,
    pub total_net_profit: f64,
}

/// Per-source-app totals within a report window
#[derive(Debug, Serialize, FromRow)]
pub struct AppBreakdown {
    pub app_name: String,
    pub trips: i64,
    pub earnings: f64,
    pub fees: f64,
    pub fuel_cost: f64,
    pub net_profit: f64,
}

/// Per-calendar-day totals within a month
#[derive(Debug, Serialize, FromRow)]
pub struct DayBreakdown {
    pub date: String,
    pub trips: i64,
    pub distance: f64,
    pub earnings: f64,
    pub fees: f64,
    pub fuel_cost: f64,
    pub net_profit: f64,
}

/// Per-calendar-month (`YYYY-MM`) totals within a year
#[derive(Debug, Serialize, FromRow)]
pub struct MonthBreakdown {
    pub month: String,
    pub trips: i64,
    pub distance: f64,
    pub earnings: f64,
    pub fees: f64,
    pub fuel_cost: f64,
    pub net_profit: f64,
}

/// GET /api/reports/dashboard response
#[derive(Debug, Serialize)]
pub struct DashboardReport {
    pub date: String,
    pub summary: TripSummary,
    pub by_app: Vec<AppBreakdown>,
}

/// GET /api/reports/daily response
#[derive(Debug, Serialize)]
pub struct DailyReport {
    pub date: String,
    pub summary: TripSummary,
    pub trips: Vec<Trip>,
    pub by_app: Vec<AppBreakdown>,
}

/// GET /api/reports/monthly response
#[derive(Debug, Serialize)]
pub struct MonthlyReport {
    pub year: i32,
    pub month: u32,
    pub summary: TripSummary,
    pub daily_breakdown: Vec<DayBreakdown>,
    pub by_app: Vec<AppBreakdown>,
}

/// GET /api/reports/annual response
#[derive(Debug, Serialize)]
pub struct AnnualReport {
    pub year: i32,
    pub summary: TripSummary,
    pub monthly_breakdown: Vec<MonthBreakdown>,
    pub by_app: Vec<AppBreakdown>,
}
