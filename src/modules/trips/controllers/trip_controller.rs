use actix_web::{web, HttpResponse};
use sqlx::SqlitePool;

use crate::core::AppError;
use crate::middleware::CurrentUser;
use crate::modules::trips::models::TripPayload;
use crate::modules::trips::repositories::{TripFilter, TripRepository};

/// POST /api/trips
pub async fn create_trip(
    pool: web::Data<SqlitePool>,
    user: CurrentUser,
    body: web::Json<TripPayload>,
) -> Result<HttpResponse, AppError> {
    let payload = body.into_inner();
    let errors = payload.validate();
    if !errors.is_empty() {
        return Err(AppError::Validation(errors));
    }

    let repo = TripRepository::new(pool.get_ref().clone());
    let trip = repo.create(user.0, &payload.into_new_trip()).await?;

    Ok(HttpResponse::Created().json(trip))
}

/// GET /api/trips
pub async fn list_trips(
    pool: web::Data<SqlitePool>,
    user: CurrentUser,
    filter: web::Query<TripFilter>,
) -> Result<HttpResponse, AppError> {
    let repo = TripRepository::new(pool.get_ref().clone());
    let trips = repo.list(user.0, &filter).await?;

    Ok(HttpResponse::Ok().json(trips))
}

/// GET /api/trips/{id}
pub async fn get_trip(
    pool: web::Data<SqlitePool>,
    user: CurrentUser,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let repo = TripRepository::new(pool.get_ref().clone());
    let trip = repo
        .find_by_id(user.0, path.into_inner())
        .await?
        .ok_or_else(|| AppError::not_found("Trip not found"))?;

    Ok(HttpResponse::Ok().json(trip))
}

/// PUT /api/trips/{id}
pub async fn update_trip(
    pool: web::Data<SqlitePool>,
    user: CurrentUser,
    path: web::Path<i64>,
    body: web::Json<TripPayload>,
) -> Result<HttpResponse, AppError> {
    let payload = body.into_inner();
    let errors = payload.validate();
    if !errors.is_empty() {
        return Err(AppError::Validation(errors));
    }

    let repo = TripRepository::new(pool.get_ref().clone());
    let trip = repo
        .update(user.0, path.into_inner(), &payload.into_new_trip())
        .await?;

    Ok(HttpResponse::Ok().json(trip))
}

/// DELETE /api/trips/{id}
pub async fn delete_trip(
    pool: web::Data<SqlitePool>,
    user: CurrentUser,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let repo = TripRepository::new(pool.get_ref().clone());
    repo.delete(user.0, path.into_inner()).await?;

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "message": "Trip deleted successfully",
    })))
}

/// Configure routes for the trips module
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/trips")
            .route("", web::post().to(create_trip))
            .route("", web::get().to(list_trips))
            .route("/{id}", web::get().to(get_trip))
            .route("/{id}", web::put().to(update_trip))
            .route("/{id}", web::delete().to(delete_trip)),
    );
}
