use crate::core::AppError;
use actix_web::{
    body::EitherBody,
    dev::{forward_ready, Payload, Service, ServiceRequest, ServiceResponse, Transform},
    error::ResponseError,
    Error, FromRequest, HttpMessage, HttpRequest,
};
use argon2::{Argon2, PasswordHash, PasswordVerifier};
use chrono::{Duration, Utc};
use futures_util::future::LocalBoxFuture;
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use std::future::{ready, Ready};
use std::rc::Rc;

/// Routes reachable without a bearer token
const PUBLIC_PATHS: [&str; 3] = ["/api/health", "/api/auth/register", "/api/auth/login"];

const MISSING_TOKEN: &str = "Authentication required. Please login.";
const INVALID_TOKEN: &str = "Invalid or expired token. Please login again.";

/// JWT claims; the core only ever reads the user identifier back out
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub iat: i64,
    pub exp: i64,
}

/// HS256 signing/verification keys plus the configured token lifetime
#[derive(Clone)]
pub struct JwtKeys {
    encoding: EncodingKey,
    decoding: DecodingKey,
    expiry_days: i64,
}

impl JwtKeys {
    pub fn from_secret(secret: &str, expiry_days: i64) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
            expiry_days,
        }
    }

    /// Issue a bearer token for a user
    pub fn issue(&self, user_id: i64) -> crate::core::Result<String> {
        let now = Utc::now();
        let claims = Claims {
            sub: user_id.to_string(),
            iat: now.timestamp(),
            exp: (now + Duration::days(self.expiry_days)).timestamp(),
        };

        jsonwebtoken::encode(&Header::default(), &claims, &self.encoding)
            .map_err(|e| AppError::internal(format!("Failed to sign token: {}", e)))
    }

    /// Verify a bearer token and extract the user identifier
    pub fn verify(&self, token: &str) -> crate::core::Result<i64> {
        let data = jsonwebtoken::decode::<Claims>(token, &self.decoding, &Validation::default())
            .map_err(|_| AppError::authentication(INVALID_TOKEN))?;

        data.claims
            .sub
            .parse::<i64>()
            .map_err(|_| AppError::authentication(INVALID_TOKEN))
    }
}

/// Identity established by the auth middleware, stored in request extensions
#[derive(Debug, Clone, Copy)]
struct AuthenticatedUser(i64);

/// Extractor handing the verified user id to protected handlers
pub struct CurrentUser(pub i64);

impl FromRequest for CurrentUser {
    type Error = Error;
    type Future = Ready<std::result::Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let user = req
            .extensions()
            .get::<AuthenticatedUser>()
            .map(|user| CurrentUser(user.0));

        ready(user.ok_or_else(|| Error::from(AppError::authentication(MISSING_TOKEN))))
    }
}

/// Bearer-token authentication middleware
///
/// Verifies the `Authorization: Bearer` header on every `/api` route except
/// the public ones, before any handler or query runs.
pub struct BearerAuth {
    keys: JwtKeys,
}

impl BearerAuth {
    pub fn new(keys: JwtKeys) -> Self {
        Self { keys }
    }
}

impl<S, B> Transform<S, ServiceRequest> for BearerAuth
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<actix_web::body::BoxBody, B>>;
    type Error = Error;
    type InitError = ();
    type Transform = BearerAuthMiddleware<S>;
    type Future = Ready<std::result::Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(BearerAuthMiddleware {
            service: Rc::new(service),
            keys: self.keys.clone(),
        }))
    }
}

pub struct BearerAuthMiddleware<S> {
    service: Rc<S>,
    keys: JwtKeys,
}

impl<S, B> Service<ServiceRequest> for BearerAuthMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<actix_web::body::BoxBody, B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, std::result::Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let svc = self.service.clone();
        let keys = self.keys.clone();

        Box::pin(async move {
            let path = req.path();
            if !path.starts_with("/api") || PUBLIC_PATHS.contains(&path) {
                return svc.call(req).await.map(|res| res.map_into_right_body());
            }

            let token = req
                .headers()
                .get("Authorization")
                .and_then(|header| header.to_str().ok())
                .and_then(|header| header.strip_prefix("Bearer "));

            let Some(token) = token else {
                let response = AppError::authentication(MISSING_TOKEN).error_response();
                return Ok(req.into_response(response).map_into_left_body());
            };

            match keys.verify(token) {
                Ok(user_id) => {
                    req.extensions_mut().insert(AuthenticatedUser(user_id));
                    svc.call(req).await.map(|res| res.map_into_right_body())
                }
                Err(err) => {
                    let response = err.error_response();
                    Ok(req.into_response(response).map_into_left_body())
                }
            }
        })
    }
}

/// Hash a password using Argon2
pub fn hash_password(password: &str) -> crate::core::Result<String> {
    use argon2::password_hash::{rand_core::OsRng, PasswordHasher, SaltString};

    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default();

    argon2
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| AppError::internal(format!("Failed to hash password: {}", e)))
}

/// Verify a password against a stored Argon2 hash
pub fn verify_password(password: &str, hash: &str) -> crate::core::Result<bool> {
    let parsed_hash =
        PasswordHash::new(hash).map_err(|e| AppError::internal(format!("Invalid hash format: {}", e)))?;

    let argon2 = Argon2::default();

    Ok(argon2
        .verify_password(password.as_bytes(), &parsed_hash)
        .is_ok())
}
