pub mod report;

pub use report::{
    AnnualReport, AppBreakdown, DailyReport, DashboardReport, DayBreakdown, MonthBreakdown,
    MonthlyReport, TripSummary,
};
