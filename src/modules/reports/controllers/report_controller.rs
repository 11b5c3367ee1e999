use actix_web::{web, HttpResponse};
use serde::Deserialize;
use sqlx::SqlitePool;

use crate::core::dates;
use crate::core::AppError;
use crate::middleware::CurrentUser;
use crate::modules::reports::models::{AnnualReport, DailyReport, DashboardReport, MonthlyReport};
use crate::modules::reports::repositories::ReportRepository;

#[derive(Debug, Deserialize)]
pub struct DailyQuery {
    pub date: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct MonthlyQuery {
    pub year: Option<String>,
    pub month: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct AnnualQuery {
    pub year: Option<String>,
}

/// GET /api/reports/dashboard
///
/// Today's overview, "today" being the server's local calendar date.
pub async fn dashboard(
    pool: web::Data<SqlitePool>,
    user: CurrentUser,
) -> Result<HttpResponse, AppError> {
    let today = dates::today_local();
    let repo = ReportRepository::new(pool.get_ref().clone());

    let summary = repo.summary_for_date(user.0, &today).await?;
    let by_app = repo.app_breakdown_for_date(user.0, &today).await?;

    Ok(HttpResponse::Ok().json(DashboardReport {
        date: today,
        summary,
        by_app,
    }))
}

/// GET /api/reports/daily?date=YYYY-MM-DD
pub async fn daily(
    pool: web::Data<SqlitePool>,
    user: CurrentUser,
    query: web::Query<DailyQuery>,
) -> Result<HttpResponse, AppError> {
    let Some(date) = query.date.clone() else {
        return Err(AppError::bad_request(
            "date query parameter is required (YYYY-MM-DD)",
        ));
    };

    let repo = ReportRepository::new(pool.get_ref().clone());
    let summary = repo.summary_for_date(user.0, &date).await?;
    let trips = repo.trips_for_date(user.0, &date).await?;
    let by_app = repo.app_breakdown_for_date(user.0, &date).await?;

    Ok(HttpResponse::Ok().json(DailyReport {
        date,
        summary,
        trips,
        by_app,
    }))
}

/// GET /api/reports/monthly?year=YYYY&month=MM
pub async fn monthly(
    pool: web::Data<SqlitePool>,
    user: CurrentUser,
    query: web::Query<MonthlyQuery>,
) -> Result<HttpResponse, AppError> {
    let (Some(year), Some(month)) = (query.year.as_deref(), query.month.as_deref()) else {
        return Err(AppError::bad_request(
            "year and month query parameters are required",
        ));
    };

    let year: i32 = year
        .parse()
        .map_err(|_| AppError::bad_request("year must be numeric"))?;
    let month: u32 = month
        .parse()
        .map_err(|_| AppError::bad_request("month must be numeric"))?;
    if !(1..=12).contains(&month) {
        return Err(AppError::bad_request("month must be between 1 and 12"));
    }

    let prefix = dates::month_prefix(year, month);
    let repo = ReportRepository::new(pool.get_ref().clone());

    let summary = repo.summary_for_prefix(user.0, &prefix).await?;
    let daily_breakdown = repo.daily_breakdown(user.0, &prefix).await?;
    let by_app = repo.app_breakdown_for_prefix(user.0, &prefix).await?;

    Ok(HttpResponse::Ok().json(MonthlyReport {
        year,
        month,
        summary,
        daily_breakdown,
        by_app,
    }))
}

/// GET /api/reports/annual?year=YYYY
pub async fn annual(
    pool: web::Data<SqlitePool>,
    user: CurrentUser,
    query: web::Query<AnnualQuery>,
) -> Result<HttpResponse, AppError> {
    let Some(year) = query.year.as_deref() else {
        return Err(AppError::bad_request("year query parameter is required"));
    };

    let year: i32 = year
        .parse()
        .map_err(|_| AppError::bad_request("year must be numeric"))?;

    let prefix = dates::year_prefix(year);
    let repo = ReportRepository::new(pool.get_ref().clone());

    let summary = repo.summary_for_prefix(user.0, &prefix).await?;
    let monthly_breakdown = repo.monthly_breakdown(user.0, &prefix).await?;
    let by_app = repo.app_breakdown_for_prefix(user.0, &prefix).await?;

    Ok(HttpResponse::Ok().json(AnnualReport {
        year,
        summary,
        monthly_breakdown,
        by_app,
    }))
}

/// Configure routes for the reports module
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/reports")
            .route("/dashboard", web::get().to(dashboard))
            .route("/daily", web::get().to(daily))
            .route("/monthly", web::get().to(monthly))
            .route("/annual", web::get().to(annual)),
    );
}
