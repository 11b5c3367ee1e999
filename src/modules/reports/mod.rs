pub mod controllers;
pub mod models;
pub mod repositories;

pub use models::{AppBreakdown, DayBreakdown, MonthBreakdown, TripSummary};
pub use repositories::ReportRepository;
