use actix_web::{web, HttpResponse};
use serde::Deserialize;
use sqlx::SqlitePool;

use crate::core::dates;
use crate::core::AppError;
use crate::middleware::CurrentUser;
use crate::modules::settings::models::SettingsPayload;
use crate::modules::settings::repositories::SettingsRepository;

#[derive(Debug, Deserialize)]
pub struct ForDateQuery {
    pub date: Option<String>,
}

/// GET /api/settings — the record currently in force
pub async fn get_settings(
    pool: web::Data<SqlitePool>,
    user: CurrentUser,
) -> Result<HttpResponse, AppError> {
    let repo = SettingsRepository::new(pool.get_ref().clone());
    let settings = repo.current(user.0).await?;

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "configured": settings.is_some(),
        "settings": settings,
    })))
}

/// GET /api/settings/for-date?date=YYYY-MM-DD
pub async fn get_settings_for_date(
    pool: web::Data<SqlitePool>,
    user: CurrentUser,
    query: web::Query<ForDateQuery>,
) -> Result<HttpResponse, AppError> {
    let Some(date) = query.date.clone() else {
        return Err(AppError::bad_request("date query parameter required"));
    };

    let repo = SettingsRepository::new(pool.get_ref().clone());
    let settings = repo.for_date(user.0, &date).await?;

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "date": date,
        "settings": settings,
    })))
}

/// GET /api/settings/history
pub async fn get_settings_history(
    pool: web::Data<SqlitePool>,
    user: CurrentUser,
) -> Result<HttpResponse, AppError> {
    let repo = SettingsRepository::new(pool.get_ref().clone());
    let history = repo.history(user.0).await?;

    Ok(HttpResponse::Ok().json(history))
}

/// POST /api/settings — append a new settings record
pub async fn create_settings(
    pool: web::Data<SqlitePool>,
    user: CurrentUser,
    body: web::Json<SettingsPayload>,
) -> Result<HttpResponse, AppError> {
    let errors = body.validate();
    if !errors.is_empty() {
        return Err(AppError::Validation(errors));
    }

    let effective_from = body
        .effective_from
        .clone()
        .unwrap_or_else(dates::today_local);

    let repo = SettingsRepository::new(pool.get_ref().clone());
    let settings = repo
        .insert(
            user.0,
            body.fuel_efficiency_kmpl.unwrap_or_default(),
            body.fuel_price_per_liter.unwrap_or_default(),
            &effective_from,
        )
        .await?;

    Ok(HttpResponse::Created().json(settings))
}

/// Configure routes for the settings module
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/settings")
            .route("", web::get().to(get_settings))
            .route("", web::post().to(create_settings))
            .route("/for-date", web::get().to(get_settings_for_date))
            .route("/history", web::get().to(get_settings_history)),
    );
}
