use actix_web::{web, HttpResponse};
use sqlx::SqlitePool;

use crate::core::AppError;
use crate::middleware::{hash_password, verify_password, CurrentUser, JwtKeys};
use crate::modules::users::models::{normalize_email, LoginPayload, RegisterPayload, UserProfile};
use crate::modules::users::repositories::UserRepository;

/// POST /api/auth/register
pub async fn register(
    pool: web::Data<SqlitePool>,
    keys: web::Data<JwtKeys>,
    body: web::Json<RegisterPayload>,
) -> Result<HttpResponse, AppError> {
    let errors = body.validate();
    if !errors.is_empty() {
        return Err(AppError::Validation(errors));
    }

    let name = body.name.as_deref().unwrap_or_default().trim().to_string();
    let email = normalize_email(body.email.as_deref().unwrap_or_default());
    let password = body.password.as_deref().unwrap_or_default();

    let repo = UserRepository::new(pool.get_ref().clone());
    if repo.email_exists(&email).await? {
        return Err(AppError::conflict("An account with this email already exists"));
    }

    let password_hash = hash_password(password)?;
    let user = repo.create(&name, &email, &password_hash).await?;
    let token = keys.issue(user.id)?;

    tracing::info!(user_id = user.id, "New account registered");

    Ok(HttpResponse::Created().json(serde_json::json!({
        "message": "Account created successfully",
        "token": token,
        "user": user,
    })))
}

/// POST /api/auth/login
pub async fn login(
    pool: web::Data<SqlitePool>,
    keys: web::Data<JwtKeys>,
    body: web::Json<LoginPayload>,
) -> Result<HttpResponse, AppError> {
    // Empty strings count as missing
    let (Some(email), Some(password)) = (
        body.email.as_deref().filter(|v| !v.is_empty()),
        body.password.as_deref().filter(|v| !v.is_empty()),
    ) else {
        return Err(AppError::bad_request("Email and password are required"));
    };

    let repo = UserRepository::new(pool.get_ref().clone());
    let user = repo
        .find_by_email(&normalize_email(email))
        .await?
        .ok_or_else(|| AppError::authentication("Invalid email or password"))?;

    // Same message for unknown email and bad password
    if !verify_password(password, &user.password_hash)? {
        return Err(AppError::authentication("Invalid email or password"));
    }

    let token = keys.issue(user.id)?;

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "message": "Login successful",
        "token": token,
        "user": UserProfile::from(user),
    })))
}

/// GET /api/auth/me
pub async fn me(
    pool: web::Data<SqlitePool>,
    user: CurrentUser,
) -> Result<HttpResponse, AppError> {
    let repo = UserRepository::new(pool.get_ref().clone());
    let profile = repo
        .find_profile(user.0)
        .await?
        .ok_or_else(|| AppError::not_found("User not found"))?;

    Ok(HttpResponse::Ok().json(profile))
}

/// Configure routes for the auth module
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/auth")
            .route("/register", web::post().to(register))
            .route("/login", web::post().to(login))
            .route("/me", web::get().to(me)),
    );
}
